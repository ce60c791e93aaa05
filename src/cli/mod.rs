//! CLI command implementations
//!
//! This module contains all CLI command handlers, organized by category:
//! - `quote`: Pricing commands (quote, tariff)
//! - `validate`: Tariff validation command
//! - `config`: Schema command
//! - `util`: Shared argument helpers

pub mod config;
pub mod quote;
pub mod util;
pub mod validate;

pub use config::cmd_schema;
pub use quote::{cmd_quote, cmd_tariff};
pub use validate::cmd_validate;
