//! Customizing output with DumpOptions.
//!
//! Run with: cargo run --example custom_options

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_objdump::{to_string, to_string_with_options, DumpOptions, Function};
use std::error::Error;

#[derive(Debug, Serialize)]
struct Config {
    name: String,
    version: String,
    debug: bool,
    #[serde(serialize_with = "serde_objdump::date::serialize")]
    built: DateTime<Utc>,
    on_start: Function,
}

fn main() -> Result<(), Box<dyn Error>> {
    let config = Config {
        name: "MyApp".to_string(),
        version: "1.0.0".to_string(),
        debug: true,
        built: Utc::now(),
        on_start: Function::new("function () { console.log('started'); }"),
    };

    // Default format (2-space indentation, lossy dates)
    println!("Default:");
    println!("{}\n", to_string(&config)?);

    // Wider indentation
    println!("Spacing 4:");
    let wide = DumpOptions::new().with_spacing(4);
    println!("{}\n", to_string_with_options(&config, wide)?);

    // Dates keep their instant
    println!("Exact dates:");
    let exact = DumpOptions::new().with_exact_dates(true);
    println!("{}\n", to_string_with_options(&config, exact)?);

    Ok(())
}
