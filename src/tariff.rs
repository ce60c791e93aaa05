//! Tariff — the rule set a delivery is priced with
//!
//! A `Tariff` holds every constant the evaluator uses: distance bands,
//! size and fragility surcharges, workload multipliers, the fragile
//! distance limit and the minimum charge. `Tariff::default()` is the
//! standard tariff.
//!
//! ## Example Tariff
//!
//! ```yaml
//! id: standard
//! name: Standard delivery tariff
//! fragile_max_distance_km: 30
//! distance_bands:
//!   - above_km: 30
//!     surcharge: 300.0
//!   - above_km: 10
//!     surcharge: 200.0
//!   - above_km: 2
//!     surcharge: 100.0
//!   - above_km: 0
//!     surcharge: 50.0
//! dimension_surcharges:
//!   small: 100.0
//!   large: 200.0
//! fragile_surcharge: 300.0
//! workload_multipliers:
//!   normal: 1.0
//!   increased: 1.2
//!   high: 1.4
//!   very_high: 1.6
//! minimum_charge: 400.0
//! ```

use crate::error::{Error, Result};
use crate::shipment::{DimensionCategory, WorkloadLevel};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A complete delivery tariff
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[schemars(title = "Delivery Tariff", description = "Delivery pricing rule set")]
pub struct Tariff {
    /// Unique identifier
    #[serde(default = "default_id")]
    pub id: String,

    /// Human-readable name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Fragile cargo is refused beyond this distance
    #[serde(default = "default_fragile_max_distance_km")]
    pub fragile_max_distance_km: i64,

    /// Distance bands, first match on `distance_km > above_km`
    #[serde(default = "default_distance_bands")]
    pub distance_bands: Vec<DistanceBand>,

    /// Surcharge per cargo size
    #[serde(default)]
    pub dimension_surcharges: DimensionSurcharges,

    /// Surcharge for fragile cargo
    #[serde(default = "default_fragile_surcharge")]
    pub fragile_surcharge: f64,

    /// Multiplier per workload level
    #[serde(default)]
    pub workload_multipliers: WorkloadMultipliers,

    /// Floor price applied after everything else
    #[serde(default = "default_minimum_charge")]
    pub minimum_charge: f64,
}

/// One distance band
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DistanceBand {
    /// Band applies when distance is strictly greater than this
    pub above_km: i64,

    /// Amount added for this band
    pub surcharge: f64,
}

/// Size surcharges, missing entries take the standard values
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct DimensionSurcharges {
    pub small: f64,
    pub large: f64,
}

impl DimensionSurcharges {
    pub fn get(&self, dimensions: DimensionCategory) -> f64 {
        match dimensions {
            DimensionCategory::Small => self.small,
            DimensionCategory::Large => self.large,
        }
    }
}

impl Default for DimensionSurcharges {
    fn default() -> Self {
        Self {
            small: 100.0,
            large: 200.0,
        }
    }
}

/// Workload multipliers, missing entries take the standard values
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct WorkloadMultipliers {
    pub normal: f64,
    pub increased: f64,
    pub high: f64,
    pub very_high: f64,
}

impl WorkloadMultipliers {
    pub fn get(&self, workload: WorkloadLevel) -> f64 {
        match workload {
            WorkloadLevel::VeryHigh => self.very_high,
            WorkloadLevel::High => self.high,
            WorkloadLevel::Increased => self.increased,
            WorkloadLevel::Normal => self.normal,
        }
    }
}

impl Default for WorkloadMultipliers {
    fn default() -> Self {
        Self {
            normal: 1.0,
            increased: 1.2,
            high: 1.4,
            very_high: 1.6,
        }
    }
}

fn default_id() -> String {
    "standard".to_string()
}

fn default_fragile_max_distance_km() -> i64 {
    30
}

fn default_distance_bands() -> Vec<DistanceBand> {
    vec![
        DistanceBand {
            above_km: 30,
            surcharge: 300.0,
        },
        DistanceBand {
            above_km: 10,
            surcharge: 200.0,
        },
        DistanceBand {
            above_km: 2,
            surcharge: 100.0,
        },
        DistanceBand {
            above_km: 0,
            surcharge: 50.0,
        },
    ]
}

fn default_fragile_surcharge() -> f64 {
    300.0
}

fn default_minimum_charge() -> f64 {
    400.0
}

impl Default for Tariff {
    fn default() -> Self {
        Self {
            id: default_id(),
            name: Some("Standard delivery tariff".to_string()),
            description: None,
            fragile_max_distance_km: default_fragile_max_distance_km(),
            distance_bands: default_distance_bands(),
            dimension_surcharges: DimensionSurcharges::default(),
            fragile_surcharge: default_fragile_surcharge(),
            workload_multipliers: WorkloadMultipliers::default(),
            minimum_charge: default_minimum_charge(),
        }
    }
}

impl Tariff {
    /// The standard tariff
    pub fn standard() -> Self {
        Self::default()
    }

    /// Parse tariff from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_norway::from_str(yaml).map_err(|e| Error::TariffParse(e.to_string()))
    }

    /// Serialize tariff to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_norway::to_string(self).map_err(|e| Error::TariffParse(e.to_string()))
    }

    /// Parse tariff from JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::TariffParse(e.to_string()))
    }

    /// Serialize tariff to JSON string
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::TariffParse(e.to_string()))
    }

    /// Compute hash of tariff for change detection
    pub fn hash(&self) -> String {
        use sha2::{Digest, Sha256};
        let content = self.to_yaml().unwrap_or_default();
        let mut hasher = Sha256::new();
        hasher.update(content.as_bytes());
        format!("sha256:{}", hex::encode(&hasher.finalize()[..8]))
    }

    /// Surcharge of the first band the distance falls into
    pub fn distance_surcharge(&self, distance_km: i64) -> Result<f64> {
        self.distance_bands
            .iter()
            .find(|band| distance_km > band.above_km)
            .map(|band| band.surcharge)
            .ok_or_else(|| {
                Error::InvalidTariff(format!(
                    "no distance band covers {} km in tariff '{}'",
                    distance_km, self.id
                ))
            })
    }

    /// Validate tariff for consistency, returns every problem found
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.id.trim().is_empty() {
            errors.push("Tariff ID is required".into());
        }

        if self.fragile_max_distance_km < 0 {
            errors.push(format!(
                "Fragile distance limit must not be negative, got {}",
                self.fragile_max_distance_km
            ));
        }

        if self.distance_bands.is_empty() {
            errors.push("At least one distance band is required".into());
        }

        for pair in self.distance_bands.windows(2) {
            if pair[0].above_km <= pair[1].above_km {
                errors.push(format!(
                    "Distance bands must be in strictly descending order: {} km is followed by {} km",
                    pair[0].above_km, pair[1].above_km
                ));
            }
        }

        if let Some(last) = self.distance_bands.last() {
            if last.above_km > 0 {
                errors.push(format!(
                    "Last distance band must have above_km: 0 to cover every positive distance, got {} km",
                    last.above_km
                ));
            }
        }

        for band in &self.distance_bands {
            check_amount(
                &mut errors,
                &format!("Distance band above {} km", band.above_km),
                band.surcharge,
            );
        }
        let sizes = &self.dimension_surcharges;
        check_amount(&mut errors, "Small cargo surcharge", sizes.small);
        check_amount(&mut errors, "Large cargo surcharge", sizes.large);
        check_amount(&mut errors, "Fragile surcharge", self.fragile_surcharge);
        check_amount(&mut errors, "Minimum charge", self.minimum_charge);

        for level in WorkloadLevel::ALL {
            let multiplier = self.workload_multipliers.get(level);
            if !multiplier.is_finite() || multiplier <= 0.0 {
                errors.push(format!(
                    "Workload multiplier for '{}' must be a positive number, got {}",
                    level, multiplier
                ));
            }
        }

        errors
    }

    /// Validate and turn any problem into an error
    pub fn ensure_valid(&self) -> Result<()> {
        let problems = self.validate();
        if problems.is_empty() {
            Ok(())
        } else {
            Err(Error::InvalidTariff(problems.join("; ")))
        }
    }
}

fn check_amount(errors: &mut Vec<String>, what: &str, amount: f64) {
    if !amount.is_finite() || amount < 0.0 {
        errors.push(format!("{} must be a non-negative amount, got {}", what, amount));
    }
}
