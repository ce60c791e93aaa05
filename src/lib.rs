// Production-quality lints
#![warn(
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
// Deny truly dangerous patterns
#![deny(clippy::mem_forget)]
// Allow common patterns in library code
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! # delivery-tariff
//!
//! Delivery cost calculation from four inputs: distance, cargo size,
//! fragility and the current workload of the delivery service.
//!
//! ## Quick Start
//!
//! ```rust
//! use delivery_tariff::{calculate_delivery_cost, Error};
//!
//! let cost = calculate_delivery_cost(25, "small", true, "high")?;
//! assert_eq!(cost, (200.0 + 100.0 + 300.0) * 1.4);
//!
//! // Fragile cargo is never carried farther than 30 km
//! let err = calculate_delivery_cost(31, "small", true, "normal").unwrap_err();
//! assert!(matches!(err, Error::FragileDistanceExceeded { .. }));
//! # Ok::<(), Error>(())
//! ```
//!
//! ## Pricing Rules
//!
//! | Factor    | Value                          | Effect  |
//! |-----------|--------------------------------|---------|
//! | distance  | > 30 km                        | +300    |
//! | distance  | > 10 km                        | +200    |
//! | distance  | > 2 km                         | +100    |
//! | distance  | 1–2 km                         | +50     |
//! | size      | large / small                  | +200 / +100 |
//! | fragile   | yes (max 30 km)                | +300    |
//! | workload  | normal / increased / high / very_high | ×1.0 / ×1.2 / ×1.4 / ×1.6 |
//!
//! The result is never below the minimum charge of 400.
//!
//! All constants live in a [`Tariff`]; [`Calculator::with_tariff`] prices
//! with a custom one, e.g. loaded from YAML via [`config::load_tariff`].

pub mod config;
pub mod error;
pub mod pricing;
pub mod shipment;
pub mod tariff;

// Re-exports
pub use config::{load_tariff, read_tariff, resolve_tariff, TariffSource};
pub use error::{Error, Result};
pub use pricing::{calculate_delivery_cost, quote, Calculator, Quote};
pub use shipment::{DeliveryRequest, DimensionCategory, WorkloadLevel};
pub use tariff::{DimensionSurcharges, DistanceBand, Tariff, WorkloadMultipliers};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
