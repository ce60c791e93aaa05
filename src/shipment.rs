//! Shipment vocabulary — the inputs a delivery is priced from
//!
//! Dimension and workload values arrive as plain strings at the public
//! boundary. They are parsed exactly (case-sensitive) into the enums below:
//!
//! | Input      | Accepted values                          |
//! |------------|------------------------------------------|
//! | dimensions | `small`, `large`                         |
//! | workload   | `normal`, `increased`, `high`, `very_high` |

use crate::error::{Error, Result};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Cargo size category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum DimensionCategory {
    Small,
    Large,
}

impl DimensionCategory {
    pub const ALL: [DimensionCategory; 2] = [DimensionCategory::Small, DimensionCategory::Large];

    pub fn as_str(&self) -> &'static str {
        match self {
            DimensionCategory::Small => "small",
            DimensionCategory::Large => "large",
        }
    }
}

impl FromStr for DimensionCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "small" => Ok(DimensionCategory::Small),
            "large" => Ok(DimensionCategory::Large),
            other => Err(Error::InvalidDimensions {
                value: other.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for DimensionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Workload (congestion) level of the delivery service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum WorkloadLevel {
    Normal,
    Increased,
    High,
    VeryHigh,
}

impl WorkloadLevel {
    pub const ALL: [WorkloadLevel; 4] = [
        WorkloadLevel::Normal,
        WorkloadLevel::Increased,
        WorkloadLevel::High,
        WorkloadLevel::VeryHigh,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WorkloadLevel::Normal => "normal",
            WorkloadLevel::Increased => "increased",
            WorkloadLevel::High => "high",
            WorkloadLevel::VeryHigh => "very_high",
        }
    }
}

impl FromStr for WorkloadLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "normal" => Ok(WorkloadLevel::Normal),
            "increased" => Ok(WorkloadLevel::Increased),
            "high" => Ok(WorkloadLevel::High),
            "very_high" => Ok(WorkloadLevel::VeryHigh),
            other => Err(Error::InvalidWorkload {
                value: other.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for WorkloadLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single delivery to be priced
///
/// `dimensions` and `workload` stay unparsed so that their validation
/// happens at the point of evaluation where each one is consumed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DeliveryRequest {
    /// Distance in kilometres, must be positive
    pub distance_km: i64,

    /// `small` or `large`
    pub dimensions: String,

    /// Fragile cargo has a distance limit and a surcharge
    #[serde(default)]
    pub fragile: bool,

    /// `normal`, `increased`, `high` or `very_high`
    pub workload: String,
}

impl DeliveryRequest {
    pub fn new(
        distance_km: i64,
        dimensions: impl Into<String>,
        fragile: bool,
        workload: impl Into<String>,
    ) -> Self {
        Self {
            distance_km,
            dimensions: dimensions.into(),
            fragile,
            workload: workload.into(),
        }
    }

    /// Build a request from already-typed categories
    pub fn typed(
        distance_km: i64,
        dimensions: DimensionCategory,
        fragile: bool,
        workload: WorkloadLevel,
    ) -> Self {
        Self::new(distance_km, dimensions.as_str(), fragile, workload.as_str())
    }
}
