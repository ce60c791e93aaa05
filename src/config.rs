//! Tariff configuration
//!
//! Resolves which tariff to price with. Lookup order:
//! 1. an explicit file (`--tariff <file>`)
//! 2. the file named by `DELIVERY_TARIFF_FILE`
//! 3. the built-in standard tariff
//!
//! Files ending in `.json` are read as JSON, everything else as YAML.
//! A loaded tariff must validate cleanly.

use crate::error::{Error, Result};
use crate::tariff::Tariff;
use std::fmt;
use std::path::{Path, PathBuf};

/// Environment variable naming a tariff file
pub const TARIFF_ENV_VAR: &str = "DELIVERY_TARIFF_FILE";

/// Where a resolved tariff came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TariffSource {
    /// Passed explicitly by the caller
    File(PathBuf),
    /// Named by `DELIVERY_TARIFF_FILE`
    Env(PathBuf),
    /// Built-in standard tariff
    Standard,
}

impl fmt::Display for TariffSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TariffSource::File(p) => write!(f, "file {}", p.display()),
            TariffSource::Env(p) => write!(f, "{} ({})", TARIFF_ENV_VAR, p.display()),
            TariffSource::Standard => write!(f, "standard"),
        }
    }
}

/// Read and parse a tariff file without validating it
pub fn read_tariff(path: &Path) -> Result<Tariff> {
    let content = std::fs::read_to_string(path).map_err(Error::Io)?;

    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));

    if is_json {
        Tariff::from_json(&content)
    } else {
        Tariff::from_yaml(&content)
    }
}

/// Load and validate a tariff file
pub fn load_tariff(path: &Path) -> Result<Tariff> {
    let tariff = read_tariff(path)?;
    tariff.ensure_valid()?;
    Ok(tariff)
}

/// Resolve the tariff from an explicit path, the environment, or the standard tariff
pub fn resolve_tariff(explicit: Option<&Path>) -> Result<(Tariff, TariffSource)> {
    let from_env = std::env::var_os(TARIFF_ENV_VAR).map(PathBuf::from);
    resolve_tariff_with(explicit, from_env)
}

/// Same as [`resolve_tariff`] with the environment value passed in
pub fn resolve_tariff_with(
    explicit: Option<&Path>,
    from_env: Option<PathBuf>,
) -> Result<(Tariff, TariffSource)> {
    let source = match (explicit, from_env) {
        (Some(path), _) => TariffSource::File(path.to_path_buf()),
        (None, Some(path)) if !path.as_os_str().is_empty() => TariffSource::Env(path),
        _ => TariffSource::Standard,
    };

    let tariff = match &source {
        TariffSource::File(path) | TariffSource::Env(path) => load_tariff(path)?,
        TariffSource::Standard => Tariff::standard(),
    };

    tracing::debug!(tariff = %tariff.id, %source, "tariff resolved");
    Ok((tariff, source))
}
