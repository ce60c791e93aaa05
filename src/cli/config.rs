//! Schema CLI command

use delivery_tariff::*;

pub fn cmd_schema(args: &[String]) -> Result<()> {
    let schema_name = args.first().map(|s| s.as_str()).unwrap_or("list");

    match schema_name {
        "list" => {
            println!("Available schemas: tariff, quote, request");
            Ok(())
        }
        "tariff" => print_schema::<Tariff>(),
        "quote" => print_schema::<Quote>(),
        "request" => print_schema::<DeliveryRequest>(),
        _ => Err(format!("Unknown schema: {}", schema_name).into()),
    }
}

fn print_schema<T: schemars::JsonSchema>() -> Result<()> {
    let schema = schemars::schema_for!(T);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
