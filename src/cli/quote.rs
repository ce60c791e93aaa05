//! Pricing CLI commands

use super::util::{has_flag, parse_bool_arg, positional_args, tariff_from_args};
use delivery_tariff::{Calculator, Error, Result};

const QUOTE_USAGE: &str =
    "Usage: delivery-tariff quote <distance_km> <small|large> <true|false> <normal|increased|high|very_high> [-t|--tariff <file>] [--json]";

pub fn cmd_quote(args: &[String]) -> Result<()> {
    let positional = positional_args(args);
    let &[distance, dimensions, fragile, workload] = positional.as_slice() else {
        return Err(QUOTE_USAGE.into());
    };

    let distance_km: i64 = distance
        .parse()
        .map_err(|_| Error::Other(format!("Distance must be a whole number of km, got '{}'", distance)))?;
    let is_fragile = parse_bool_arg(fragile)
        .ok_or_else(|| Error::Other(format!("Fragile must be true or false, got '{}'", fragile)))?;
    let json_output = has_flag(args, "--json");

    let (tariff, source) = tariff_from_args(args)?;
    tracing::info!(tariff = %tariff.id, %source, "pricing delivery");

    let quote = Calculator::with_tariff(tariff).quote(distance_km, dimensions, is_fragile, workload)?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&quote)?);
    } else {
        print!("{}", quote.to_report());
    }
    Ok(())
}

pub fn cmd_tariff(args: &[String]) -> Result<()> {
    let json_output = has_flag(args, "--json");
    let (tariff, source) = tariff_from_args(args)?;

    if json_output {
        println!("{}", tariff.to_json()?);
    } else {
        println!("# TARIFF: {}", tariff.id);
        println!("# TARIFF HASH: {}", tariff.hash());
        println!("# SOURCE: {}", source);
        print!("{}", tariff.to_yaml()?);
    }
    Ok(())
}
