use anyhow::{anyhow, Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use knapsack_packer::packer::{pack_reader, pack_with, PackerConfig};
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

fn cli() -> Command {
    Command::new("packer")
        .about("Selects the most valuable items that fit each package")
        .arg_required_else_help(true)
        .arg(
            Arg::new("INPUT")
                .help("Input file path, or '-' for stdin")
                .required(true)
                .value_parser(value_parser!(String)),
        )
        .arg(
            Arg::new("max-weight")
                .long("max-weight")
                .value_name("N")
                .help("Maximum package capacity and item weight [default: 100]")
                .value_parser(value_parser!(Decimal)),
        )
        .arg(
            Arg::new("max-price")
                .long("max-price")
                .value_name("N")
                .help("Maximum item price [default: 100]")
                .value_parser(value_parser!(Decimal)),
        )
        .arg(
            Arg::new("max-items")
                .long("max-items")
                .value_name("N")
                .help("Maximum number of items per package line [default: 15]")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("currency")
                .long("currency")
                .value_name("GLYPH")
                .help("Glyph in front of each price [default: €]")
                .value_parser(value_parser!(char)),
        )
        .arg(
            Arg::new("parallel")
                .long("parallel")
                .help("Pack lines in parallel")
                .action(ArgAction::SetTrue),
        )
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let matches = cli().get_matches();
    if let Err(e) = run(&matches) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> Result<()> {
    let config = config_from(matches);
    config
        .validate()
        .map_err(|reason| anyhow!("invalid configuration: {reason}"))?;

    let input = matches
        .get_one::<String>("INPUT")
        .ok_or_else(|| anyhow!("missing INPUT"))?;
    let output = if input == "-" {
        pack_reader(std::io::stdin().lock(), &config)
    } else {
        pack_with(input, &config)
    }
    .with_context(|| format!("failed to pack '{input}'"))?;

    println!("{output}");
    Ok(())
}

fn config_from(matches: &ArgMatches) -> PackerConfig {
    let mut config = PackerConfig::default().with_parallel(matches.get_flag("parallel"));
    if let Some(max) = matches.get_one::<Decimal>("max-weight") {
        config = config.with_max_weight(*max);
    }
    if let Some(max) = matches.get_one::<Decimal>("max-price") {
        config = config.with_max_price(*max);
    }
    if let Some(n) = matches.get_one::<usize>("max-items") {
        config = config.with_max_items(*n);
    }
    if let Some(glyph) = matches.get_one::<char>("currency") {
        config = config.with_currency(*glyph);
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        cli().debug_assert();
    }

    #[test]
    fn test_config_from_flags() {
        let matches = cli()
            .try_get_matches_from([
                "packer",
                "input.txt",
                "--max-weight",
                "50.5",
                "--max-items",
                "3",
                "--currency",
                "$",
                "--parallel",
            ])
            .unwrap();
        let config = config_from(&matches);
        assert_eq!(config.max_weight, "50.5".parse::<Decimal>().unwrap());
        assert_eq!(config.max_price, Decimal::ONE_HUNDRED);
        assert_eq!(config.max_items, 3);
        assert_eq!(config.currency, '$');
        assert!(config.parallel);
    }

    #[test]
    fn test_config_defaults() {
        let matches = cli().try_get_matches_from(["packer", "-"]).unwrap();
        assert_eq!(config_from(&matches), PackerConfig::default());
    }
}
