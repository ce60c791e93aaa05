//! CLI utility helpers

use delivery_tariff::{resolve_tariff, Result, Tariff, TariffSource};
use std::path::PathBuf;

/// Flags that consume the following argument
const VALUE_FLAGS: [&str; 2] = ["--tariff", "-t"];

/// Parse --tariff argument to determine the tariff file
pub fn parse_tariff_arg(args: &[String]) -> Option<PathBuf> {
    for (i, arg) in args.iter().enumerate() {
        if VALUE_FLAGS.contains(&arg.as_str()) {
            if let Some(path) = args.get(i + 1) {
                return Some(PathBuf::from(path));
            }
        }
    }
    None
}

pub fn has_flag(args: &[String], flag: &str) -> bool {
    args.iter().any(|a| a == flag)
}

/// Positional arguments with flags (and their values) removed
///
/// Anything starting with `--` is a flag; a lone `-` prefix is kept so
/// negative distances like `-1` stay positional.
pub fn positional_args(args: &[String]) -> Vec<&str> {
    let mut out = Vec::new();
    let mut skip_next = false;
    for arg in args {
        if skip_next {
            skip_next = false;
            continue;
        }
        if VALUE_FLAGS.contains(&arg.as_str()) {
            skip_next = true;
            continue;
        }
        if arg.starts_with("--") {
            continue;
        }
        out.push(arg.as_str());
    }
    out
}

/// Parse a `true`/`false` argument
pub fn parse_bool_arg(value: &str) -> Option<bool> {
    match value {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// Tariff selected by --tariff, the environment, or the standard one
pub fn tariff_from_args(args: &[String]) -> Result<(Tariff, TariffSource)> {
    let explicit = parse_tariff_arg(args);
    resolve_tariff(explicit.as_deref())
}
