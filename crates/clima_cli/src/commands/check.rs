//! Check command implementation
//!
//! Validates a data file: row count, cities, and kind coverage per city.

use clima_core::types::TemperatureKind;
use tracing::warn;

use super::load_store;
use crate::Result;

/// Run the check command
pub fn run(data: Option<&str>) -> Result<()> {
    match data {
        Some(path) => println!("Checking {}", path),
        None => println!("Checking bundled sample data"),
    }

    let store = load_store(data)?;
    let cities = store.cities();

    println!("  {} series across {} cities", store.len(), cities.len());

    let mut incomplete = 0;
    for city in &cities {
        let kinds: Vec<&str> = TemperatureKind::ALL
            .into_iter()
            .filter(|&kind| store.series(city, kind).is_some())
            .map(|kind| kind.as_str())
            .collect();
        println!("  {}: {}", city, kinds.join(", "));

        if kinds.len() < TemperatureKind::ALL.len() {
            warn!("{} is missing a temperature kind", city);
            incomplete += 1;
        }
    }

    if incomplete == 0 {
        println!("OK");
    } else {
        println!("OK, {} cities missing a kind", incomplete);
    }

    Ok(())
}
