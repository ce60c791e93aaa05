//! Validation CLI command

use super::util::{has_flag, positional_args};
use delivery_tariff::*;
use std::path::Path;

pub fn cmd_validate(args: &[String]) -> Result<()> {
    let Some(tariff_path) = positional_args(args).first().copied() else {
        return Err("Usage: delivery-tariff validate <tariff.yaml> [--json]".into());
    };
    let json_output = has_flag(args, "--json");

    let tariff = read_tariff(Path::new(tariff_path))?;
    let problems = tariff.validate();

    if json_output {
        let output = serde_json::json!({
            "tariff": tariff.id,
            "hash": tariff.hash(),
            "valid": problems.is_empty(),
            "problems": problems,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if problems.is_empty() {
        println!("✓ Tariff '{}' is valid ({})", tariff.id, tariff.hash());
    } else {
        for problem in &problems {
            println!("✗ {}", problem);
        }
        println!();
        println!("✗ {} problem(s) in tariff '{}'", problems.len(), tariff.id);
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err("Tariff validation failed".into())
    }
}
