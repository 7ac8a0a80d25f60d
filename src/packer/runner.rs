//! Per-line and batch entry points.
//!
//! Each line runs Parse -> Select -> Format on its own. A batch is
//! all-or-nothing: the first failing line aborts it and no output is
//! produced.

use std::io::Read;
use std::path::Path;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, info, warn};

use super::config::{PackerConfig, DEFAULT_CURRENCY};
use super::format::format_positions;
use crate::error::{PackError, Result};
use crate::parser::{parse_line, LimitCheck};
use crate::selector::SelectionRunner;

/// Packs a single line with the given limits and the default `€` glyph.
///
/// Returns the chosen positions joined by commas, or `-`.
///
/// # Examples
///
/// ```
/// use knapsack_packer::packer::select_indices;
/// use knapsack_packer::parser::NoLimits;
///
/// let out = select_indices("8 : (1,15.3,€34)", &NoLimits).unwrap();
/// assert_eq!(out, "-");
/// ```
pub fn select_indices<L: LimitCheck>(line: &str, limits: &L) -> Result<String> {
    pack_line(line, DEFAULT_CURRENCY, limits)
}

/// Packs a single line using the glyph and limits of `config`.
pub fn select_indices_with(line: &str, config: &PackerConfig) -> Result<String> {
    pack_line(line, config.currency, config)
}

fn pack_line<L: LimitCheck>(line: &str, currency: char, limits: &L) -> Result<String> {
    let parsed = parse_line(line, currency, limits)?;
    let selection = SelectionRunner::run(&parsed.items, parsed.capacity);
    Ok(format_positions(&selection.items))
}

/// Packs every line of `input` and joins the results with `\n`.
///
/// Stops at the first failing line and returns its error.
pub fn pack_lines(input: &str, config: &PackerConfig) -> Result<String> {
    let lines: Vec<&str> = input.lines().collect();

    let outputs = if config.parallel {
        pack_parallel(&lines, config)?
    } else {
        pack_sequential(&lines, config)?
    };

    info!(lines = outputs.len(), "batch packed");
    Ok(outputs.join("\n"))
}

fn pack_numbered(index: usize, line: &str, config: &PackerConfig) -> Result<String> {
    select_indices_with(line, config).inspect_err(|e| {
        warn!(line = index + 1, error = %e, "line rejected, aborting batch");
    })
}

fn pack_sequential(lines: &[&str], config: &PackerConfig) -> Result<Vec<String>> {
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| pack_numbered(i, line, config))
        .collect()
}

#[cfg(feature = "parallel")]
fn pack_parallel(lines: &[&str], config: &PackerConfig) -> Result<Vec<String>> {
    let results: Vec<Result<String>> = lines
        .par_iter()
        .enumerate()
        .map(|(i, line)| pack_numbered(i, line, config))
        .collect();
    // Collect in input order so the lowest failing line wins.
    results.into_iter().collect()
}

#[cfg(not(feature = "parallel"))]
fn pack_parallel(lines: &[&str], config: &PackerConfig) -> Result<Vec<String>> {
    debug!("parallel packing requested without the `parallel` feature");
    pack_sequential(lines, config)
}

/// Packs a UTF-8 file with the default configuration.
pub fn pack(path: impl AsRef<Path>) -> Result<String> {
    pack_with(path, &PackerConfig::default())
}

/// Packs a UTF-8 file.
///
/// Any failure to open or decode the file is reported as
/// [`PackError::SourceUnavailable`].
pub fn pack_with(path: impl AsRef<Path>, config: &PackerConfig) -> Result<String> {
    let path = path.as_ref();
    let input = std::fs::read_to_string(path).map_err(|e| {
        debug!(path = %path.display(), error = %e, "cannot read input");
        PackError::SourceUnavailable
    })?;
    pack_lines(&input, config)
}

/// Packs everything readable from `reader`.
pub fn pack_reader<R: Read>(mut reader: R, config: &PackerConfig) -> Result<String> {
    let mut input = String::new();
    reader.read_to_string(&mut input).map_err(|e| {
        debug!(error = %e, "cannot read input");
        PackError::SourceUnavailable
    })?;
    pack_lines(&input, config)
}
