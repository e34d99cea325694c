//! Estimate command implementation
//!
//! Interpolates one city's monthly series at a query month.

use clima_core::types::TemperatureKind;
use tracing::info;

use super::load_store;
use crate::{CliError, Result};

const MONTH_ABBREVS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Run the estimate command
pub fn run(city: &str, kind: &str, month: f64, data: Option<&str>, format: &str) -> Result<()> {
    let kind: TemperatureKind = kind.parse().map_err(|_| {
        CliError::InvalidArgument(format!("Unknown kind: {}. Supported: max, min", kind))
    })?;

    if !(1.0..=12.0).contains(&month) {
        return Err(CliError::InvalidArgument(format!(
            "Month {} out of range. Must be within 1.0 and 12.0",
            month
        )));
    }

    let store = load_store(data)?;

    info!("Estimating {} temperature for {} at month {}", kind, city, month);

    let series = store
        .series(city, kind)
        .ok_or_else(|| CliError::CityNotFound {
            city: city.to_string(),
            kind,
        })?;
    let estimate = series.estimate_at(month)?;

    match format {
        "plain" => {
            println!(
                "{} {} temperature at month {:.2}: {:.2} °C",
                city, kind, month, estimate
            );
        }
        "json" => {
            let payload = serde_json::json!({
                "city": city,
                "kind": kind,
                "month": month,
                "estimate": (estimate * 100.0).round() / 100.0,
            });
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
        "table" => {
            println!("┌───────────┬────────────┐");
            println!("│ {:<9} │ {:<10} │", "Month", "Temp (°C)");
            println!("├───────────┼────────────┤");
            for (name, value) in MONTH_ABBREVS.iter().zip(series.values()) {
                println!("│ {:<9} │ {:>10.2} │", name, value);
            }
            println!("├───────────┼────────────┤");
            println!("│ {:<9} │ {:>10.2} │", format!("m = {:.2}", month), estimate);
            println!("└───────────┴────────────┘");
        }
        other => {
            return Err(CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: plain, json, table",
                other
            )));
        }
    }

    Ok(())
}
