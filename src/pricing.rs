//! Pricing — evaluate a delivery against a tariff
//!
//! Evaluation order is fixed and decides which error wins when several
//! inputs are invalid at once:
//!
//! 1. fragile cargo beyond the fragile distance limit
//! 2. non-positive distance
//! 3. distance surcharge
//! 4. dimensions (parsed here, then surcharged)
//! 5. fragile surcharge
//! 6. workload (parsed here, then multiplied)
//! 7. minimum charge

use crate::error::{Error, Result};
use crate::shipment::{DeliveryRequest, DimensionCategory, WorkloadLevel};
use crate::tariff::Tariff;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Price a delivery with the standard tariff
pub fn calculate_delivery_cost(
    distance_km: i64,
    dimensions: &str,
    is_fragile: bool,
    workload: &str,
) -> Result<f64> {
    Calculator::new().calculate(distance_km, dimensions, is_fragile, workload)
}

/// Price a delivery with the standard tariff, keeping the breakdown
pub fn quote(request: &DeliveryRequest) -> Result<Quote> {
    Calculator::new().quote_request(request)
}

/// Delivery cost calculator bound to one tariff
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    tariff: Tariff,
}

/// Breakdown of a priced delivery
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Quote {
    pub distance_km: i64,
    pub dimensions: DimensionCategory,
    pub fragile: bool,
    pub workload: WorkloadLevel,

    pub distance_surcharge: f64,
    pub dimension_surcharge: f64,
    pub fragile_surcharge: f64,
    /// Sum of the surcharges
    pub subtotal: f64,
    pub workload_multiplier: f64,
    /// Subtotal after the workload multiplier
    pub adjusted: f64,
    pub minimum_charge: f64,
    /// Whether the minimum charge replaced the adjusted cost
    pub floor_applied: bool,
    pub total: f64,
}

impl Calculator {
    /// Calculator using the standard tariff
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tariff(tariff: Tariff) -> Self {
        Self { tariff }
    }

    pub fn tariff(&self) -> &Tariff {
        &self.tariff
    }

    /// Delivery cost, or the first validation failure
    pub fn calculate(
        &self,
        distance_km: i64,
        dimensions: &str,
        is_fragile: bool,
        workload: &str,
    ) -> Result<f64> {
        self.quote(distance_km, dimensions, is_fragile, workload)
            .map(|q| q.total)
    }

    pub fn quote_request(&self, request: &DeliveryRequest) -> Result<Quote> {
        self.quote(
            request.distance_km,
            &request.dimensions,
            request.fragile,
            &request.workload,
        )
    }

    /// Full breakdown of the delivery cost
    pub fn quote(
        &self,
        distance_km: i64,
        dimensions: &str,
        is_fragile: bool,
        workload: &str,
    ) -> Result<Quote> {
        let tariff = &self.tariff;

        if is_fragile && distance_km > tariff.fragile_max_distance_km {
            tracing::debug!(distance_km, limit_km = tariff.fragile_max_distance_km, "fragile cargo refused");
            return Err(Error::FragileDistanceExceeded {
                distance_km,
                limit_km: tariff.fragile_max_distance_km,
            });
        }

        if distance_km <= 0 {
            return Err(Error::InvalidDistance { distance_km });
        }

        let mut cost = 0.0;

        let distance_surcharge = tariff.distance_surcharge(distance_km)?;
        cost += distance_surcharge;

        let dimensions: DimensionCategory = dimensions.parse()?;
        let dimension_surcharge = tariff.dimension_surcharges.get(dimensions);
        cost += dimension_surcharge;

        let fragile_surcharge = if is_fragile {
            tariff.fragile_surcharge
        } else {
            0.0
        };
        cost += fragile_surcharge;
        let subtotal = cost;

        let workload: WorkloadLevel = workload.parse()?;
        let workload_multiplier = tariff.workload_multipliers.get(workload);
        cost *= workload_multiplier;
        let adjusted = cost;

        let total = adjusted.max(tariff.minimum_charge);
        let floor_applied = adjusted < tariff.minimum_charge;

        tracing::debug!(
            tariff = %tariff.id,
            distance_km,
            %dimensions,
            fragile = is_fragile,
            %workload,
            subtotal,
            adjusted,
            total,
            "delivery priced"
        );

        Ok(Quote {
            distance_km,
            dimensions,
            fragile: is_fragile,
            workload,
            distance_surcharge,
            dimension_surcharge,
            fragile_surcharge,
            subtotal,
            workload_multiplier,
            adjusted,
            minimum_charge: tariff.minimum_charge,
            floor_applied,
            total,
        })
    }
}

impl Quote {
    /// Human-readable breakdown
    pub fn to_report(&self) -> String {
        let mut out = String::new();

        out.push_str(&format!(
            "Delivery: {} km, {} cargo{}, {} workload\n",
            self.distance_km,
            self.dimensions,
            if self.fragile { ", fragile" } else { "" },
            self.workload
        ));
        out.push_str(&format!("  Distance surcharge:  {:>10.2}\n", self.distance_surcharge));
        out.push_str(&format!("  Size surcharge:      {:>10.2}\n", self.dimension_surcharge));
        if self.fragile {
            out.push_str(&format!("  Fragile surcharge:   {:>10.2}\n", self.fragile_surcharge));
        }
        out.push_str(&format!("  Subtotal:            {:>10.2}\n", self.subtotal));
        out.push_str(&format!(
            "  Workload × {:<8}  {:>10.2}\n",
            self.workload_multiplier, self.adjusted
        ));
        if self.floor_applied {
            out.push_str(&format!(
                "  Minimum charge:      {:>10.2}\n",
                self.minimum_charge
            ));
        }
        out.push_str(&format!("Total: {:.2}\n", self.total));

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tariff::DistanceBand;

    #[test]
    fn test_standard_quote_breakdown() {
        let q = Calculator::new().quote(25, "small", true, "high").unwrap();
        assert_eq!(q.distance_surcharge, 200.0);
        assert_eq!(q.dimension_surcharge, 100.0);
        assert_eq!(q.fragile_surcharge, 300.0);
        assert_eq!(q.subtotal, 600.0);
        assert_eq!(q.workload_multiplier, 1.4);
        assert_eq!(q.total, (200.0 + 100.0 + 300.0) * 1.4);
        assert!(!q.floor_applied);
    }

    #[test]
    fn test_floor_applied() {
        let q = Calculator::new().quote(5, "large", false, "normal").unwrap();
        assert_eq!(q.adjusted, 300.0);
        assert_eq!(q.total, 400.0);
        assert!(q.floor_applied);
    }

    #[test]
    fn test_fragile_check_precedes_distance_check() {
        // A fragile shipment over the limit is refused before anything else is looked at
        let err = calculate_delivery_cost(31, "invalid", true, "invalid").unwrap_err();
        assert!(matches!(
            err,
            Error::FragileDistanceExceeded {
                distance_km: 31,
                limit_km: 30
            }
        ));
    }

    #[test]
    fn test_distance_check_precedes_dimensions() {
        let err = calculate_delivery_cost(0, "invalid", false, "invalid").unwrap_err();
        assert!(matches!(err, Error::InvalidDistance { distance_km: 0 }));
    }

    #[test]
    fn test_dimensions_checked_before_workload() {
        let err = calculate_delivery_cost(10, "medium", false, "invalid").unwrap_err();
        assert!(matches!(err, Error::InvalidDimensions { value } if value == "medium"));
    }

    #[test]
    fn test_custom_tariff() {
        let tariff = Tariff {
            id: "rural".into(),
            fragile_max_distance_km: 50,
            distance_bands: vec![
                DistanceBand {
                    above_km: 40,
                    surcharge: 500.0,
                },
                DistanceBand {
                    above_km: 0,
                    surcharge: 150.0,
                },
            ],
            minimum_charge: 0.0,
            ..Tariff::standard()
        };
        let calc = Calculator::with_tariff(tariff);

        assert_eq!(calc.calculate(45, "small", true, "normal").unwrap(), 900.0);
        assert_eq!(calc.calculate(3, "small", false, "normal").unwrap(), 250.0);

        let err = calc.calculate(51, "small", true, "normal").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Fragile cargo cannot be transported farther than 50 km"
        );
    }

    #[test]
    fn test_report_mentions_total() {
        let q = quote(&DeliveryRequest::new(5, "small", true, "normal")).unwrap();
        let report = q.to_report();
        assert!(report.contains("fragile"));
        assert!(report.contains("Total: 500.00"));
        assert!(!report.contains("Minimum charge"));
    }
}
