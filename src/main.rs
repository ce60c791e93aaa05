//! delivery-tariff CLI - Command-line interface
//!
//! Commands:
//!   quote     - Price a single delivery
//!   tariff    - Print the tariff in use
//!   validate  - Check a tariff file
//!   schema    - Print JSON schemas

mod cli;

use delivery_tariff::VERSION;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding the log filter
const LOG_ENV_VAR: &str = "DELIVERY_TARIFF_LOG";

fn main() -> ExitCode {
    init_logging();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return ExitCode::from(1);
    }

    let result = match args[1].as_str() {
        "quote" => cli::cmd_quote(&args[2..]),
        "tariff" => cli::cmd_tariff(&args[2..]),
        "validate" => cli::cmd_validate(&args[2..]),
        "schema" => cli::cmd_schema(&args[2..]),
        "version" | "--version" | "-v" => {
            println!("delivery-tariff {}", VERSION);
            Ok(())
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        cmd => {
            eprintln!("Unknown command: {}", cmd);
            print_usage();
            Err("Unknown command".into())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}

fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn print_usage() {
    println!(
        r#"
delivery-tariff - Delivery cost calculation

USAGE:
    delivery-tariff <COMMAND> [OPTIONS]

COMMANDS:
    quote <km> <small|large> <true|false> <workload>   Price one delivery
    tariff                                            Print the tariff in use
    validate <tariff.yaml>                            Check a tariff file
    schema [list|tariff|quote|request]                Print JSON schema

OPTIONS:
    -t, --tariff <file>   Tariff file (default: $DELIVERY_TARIFF_FILE, then standard)
    --json                JSON output format (quote, tariff, validate)

ARGUMENTS:
    <km>         Whole number of kilometres
    fragile      true or false
    workload     normal, increased, high, very_high

ENVIRONMENT:
    DELIVERY_TARIFF_FILE   Tariff file used when --tariff is not given
    DELIVERY_TARIFF_LOG    Log filter, e.g. debug (default: warn)

EXAMPLES:
    delivery-tariff quote 25 small true high
    delivery-tariff quote 5 large false very_high --json
    delivery-tariff tariff > my_tariff.yaml
    delivery-tariff validate my_tariff.yaml
"#
    );
}
