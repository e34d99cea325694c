//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod check;
pub mod cities;
pub mod estimate;

use clima_store::memory::MemoryStore;

use crate::{CliError, Result};

/// Load the data set from a CSV file, or the bundled sample data when no
/// file is given.
pub(crate) fn load_store(data: Option<&str>) -> Result<MemoryStore> {
    match data {
        Some(path) => {
            if !std::path::Path::new(path).exists() {
                return Err(CliError::FileNotFound(path.to_string()));
            }
            Ok(MemoryStore::from_csv(path)?)
        }
        None => Ok(MemoryStore::with_sample_data()),
    }
}
