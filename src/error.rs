//! Error types for delivery-tariff

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Delivery tariff errors
#[derive(Error, Debug)]
pub enum Error {
    #[error("Fragile cargo cannot be transported farther than {limit_km} km")]
    FragileDistanceExceeded { distance_km: i64, limit_km: i64 },

    #[error("Distance must be a positive number.")]
    InvalidDistance { distance_km: i64 },

    #[error("Invalid cargo dimensions. Use 'small' or 'large'.")]
    InvalidDimensions { value: String },

    #[error("Invalid workload level. Use: normal, increased, high, very_high.")]
    InvalidWorkload { value: String },

    #[error("Tariff parse error: {0}")]
    TariffParse(String),

    #[error("Invalid tariff: {0}")]
    InvalidTariff(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_norway::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl Error {
    /// True for the four caller-input failures raised while pricing a delivery
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::FragileDistanceExceeded { .. }
                | Error::InvalidDistance { .. }
                | Error::InvalidDimensions { .. }
                | Error::InvalidWorkload { .. }
        )
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Error::Other(s.to_string())
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Other(s)
    }
}
