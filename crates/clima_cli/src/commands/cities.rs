//! Cities command implementation
//!
//! Lists the distinct cities in the data set, one per line.

use tracing::info;

use super::load_store;
use crate::Result;

/// Run the cities command
pub fn run(data: Option<&str>) -> Result<()> {
    let store = load_store(data)?;
    let cities = store.cities();

    info!("{} cities in data set", cities.len());

    for city in cities {
        println!("{}", city);
    }

    Ok(())
}
