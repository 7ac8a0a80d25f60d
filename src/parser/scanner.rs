//! Character scanner for one `<capacity> : (<pos>,<weight>,€<price>) ...` line.
//!
//! # Algorithm
//!
//! A nesting counter starts at 1 and a text buffer starts empty.
//!
//! 1. `:` at counter 1, while no capacity is known: the trimmed buffer is
//!    the capacity. Counter drops to 0.
//! 2. `(`: counter + 1.
//! 3. `)`: the buffer is split into one record, counter - 1.
//! 4. Anything else is buffered only while the counter is above 0, which
//!    skips the separators between records.
//!
//! Scanning stops at the first error, whether raised here or by the event
//! callback.

use rust_decimal::Decimal;
use tracing::debug;

use super::types::{LimitCheck, LineEvent, ParsedLine};
use crate::error::{PackError, Result};
use crate::item::Item;

/// Scans `line`, passing each [`LineEvent`] to `on_event`, and returns the
/// capacity.
///
/// `currency` is the glyph that precedes each price.
pub fn scan_line<F>(line: &str, currency: char, mut on_event: F) -> Result<Decimal>
where
    F: FnMut(LineEvent) -> Result<()>,
{
    let mut buffer = String::new();
    let mut nesting: i32 = 1;
    let mut capacity: Option<Decimal> = None;

    for ch in line.chars() {
        match ch {
            ':' if nesting == 1 && capacity.is_none() => {
                let value = parse_decimal(buffer.trim(), "capacity")?;
                capacity = Some(value);
                buffer.clear();
                nesting -= 1;
                on_event(LineEvent::Capacity(value))?;
            }
            '(' => nesting += 1,
            ')' => {
                let capacity = capacity.ok_or_else(|| {
                    PackError::malformed("record closed before the capacity separator ':'")
                })?;
                let item = parse_record(&buffer, currency)?;
                buffer.clear();
                nesting -= 1;
                on_event(LineEvent::Record { capacity, item })?;
            }
            _ if nesting > 0 => buffer.push(ch),
            _ => {}
        }
    }

    let capacity =
        capacity.ok_or_else(|| PackError::malformed("missing capacity separator ':'"))?;
    if nesting > 0 {
        return Err(PackError::malformed(format!(
            "unterminated record '{}'",
            buffer.trim()
        )));
    }
    Ok(capacity)
}

/// Parses one line into its capacity and the items that pass `limits`.
///
/// - The capacity must pass [`LimitCheck::weight_ok`], otherwise
///   [`PackError::CapacityExceeded`].
/// - Before each record, the retained count must pass
///   [`LimitCheck::count_ok`], otherwise [`PackError::ItemCountExceeded`].
/// - A record whose weight or price fails its check is dropped.
pub fn parse_line<L: LimitCheck>(line: &str, currency: char, limits: &L) -> Result<ParsedLine> {
    let mut items: Vec<Item> = Vec::new();

    let capacity = scan_line(line, currency, |event| match event {
        LineEvent::Capacity(capacity) => {
            if limits.weight_ok(&capacity) {
                Ok(())
            } else {
                Err(PackError::CapacityExceeded { capacity })
            }
        }
        LineEvent::Record { item, .. } => {
            if !limits.count_ok(items.len()) {
                return Err(PackError::ItemCountExceeded { count: items.len() });
            }
            if limits.weight_ok(&item.weight) && limits.price_ok(&item.price) {
                items.push(item);
            } else {
                debug!(
                    position = item.position,
                    weight = %item.weight,
                    price = %item.price,
                    "item dropped by limits"
                );
            }
            Ok(())
        }
    })?;

    Ok(ParsedLine { capacity, items })
}

fn parse_record(record: &str, currency: char) -> Result<Item> {
    let first = record
        .find(',')
        .ok_or_else(|| PackError::malformed(format!("record '{record}' has no position delimiter")))?;
    let second = record[first + 1..]
        .find(',')
        .map(|i| first + 1 + i)
        .ok_or_else(|| PackError::malformed(format!("record '{record}' has no weight delimiter")))?;
    let glyph = record[second + 1..]
        .find(currency)
        .map(|i| second + 1 + i)
        .ok_or_else(|| {
            PackError::malformed(format!("record '{record}' has no '{currency}' before the price"))
        })?;

    let position = parse_position(record[..first].trim())?;
    let weight = parse_decimal(record[first + 1..second].trim(), "weight")?;
    let price = parse_decimal(record[glyph + currency.len_utf8()..].trim(), "price")?;
    Ok(Item::new(position, weight, price))
}

fn parse_position(token: &str) -> Result<usize> {
    match token.parse::<usize>() {
        Ok(0) => Err(PackError::malformed("position must be 1 or greater")),
        Ok(position) => Ok(position),
        Err(_) => Err(PackError::malformed(format!("invalid position '{token}'"))),
    }
}

fn parse_decimal(token: &str, what: &str) -> Result<Decimal> {
    if token.is_empty() {
        return Err(PackError::malformed(format!("empty {what}")));
    }
    let invalid = || PackError::malformed(format!("invalid {what} '{token}'"));
    if !is_plain_decimal(token) {
        return Err(invalid());
    }
    Decimal::from_str_exact(token).map_err(|_| invalid())
}

/// Optional sign, then digits with at most one `.`. No separators or
/// exponents.
fn is_plain_decimal(token: &str) -> bool {
    let digits = token.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(token);
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (digits, ""),
    };
    !(int_part.is_empty() && frac_part.is_empty())
        && int_part.bytes().all(|b| b.is_ascii_digit())
        && frac_part.bytes().all(|b| b.is_ascii_digit())
}
