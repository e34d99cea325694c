//! CSV temperature data source.
//!
//! Reads `(city, kind)` rows with twelve monthly readings from a CSV file
//! with the header `city,kind,jan,feb,mar,apr,may,jun,jul,aug,sep,oct,nov,dec`.
//! The `kind` column holds `max` or `min` (case-insensitive).

use std::path::Path;

use clima_core::series::MonthlySeries;
use clima_core::types::TemperatureKind;

use crate::error::StoreError;

/// One city's monthly series of a given kind, as read from storage.
#[derive(Debug, Clone, PartialEq)]
pub struct TemperatureRecord {
    /// City the readings belong to
    pub city: String,
    /// Whether the readings are monthly maxima or minima
    pub kind: TemperatureKind,
    /// January..December readings
    pub series: MonthlySeries,
}

/// Raw CSV row shape, one column per month.
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    city: String,
    kind: String,
    jan: f64,
    feb: f64,
    mar: f64,
    apr: f64,
    may: f64,
    jun: f64,
    jul: f64,
    aug: f64,
    sep: f64,
    oct: f64,
    nov: f64,
    dec: f64,
}

impl CsvRow {
    fn into_record(self) -> Result<TemperatureRecord, StoreError> {
        let kind = self
            .kind
            .parse::<TemperatureKind>()
            .map_err(|e| StoreError::InvalidRow(format!("{} (city {})", e, self.city)))?;

        let series = MonthlySeries::new([
            self.jan, self.feb, self.mar, self.apr, self.may, self.jun, self.jul, self.aug,
            self.sep, self.oct, self.nov, self.dec,
        ]);

        Ok(TemperatureRecord {
            city: self.city,
            kind,
            series,
        })
    }
}

/// Read all temperature records from a CSV file.
///
/// # Arguments
///
/// * `path` - Path to a CSV file with the monthly-readings header
///
/// # Returns
///
/// * `Ok(records)` - All rows, in file order
/// * `Err(StoreError::Csv)` - Unreadable file or malformed row
/// * `Err(StoreError::InvalidRow)` - A row whose kind column is not max/min
///
/// # Example
///
/// ```no_run
/// use clima_store::csv_source::read_records;
///
/// let records = read_records("data/city_temperatures.csv").unwrap();
/// for record in &records {
///     println!("{} ({})", record.city, record.kind);
/// }
/// ```
pub fn read_records<P: AsRef<Path>>(path: P) -> Result<Vec<TemperatureRecord>, StoreError> {
    let path = path.as_ref();
    let mut reader = csv::Reader::from_path(path)?;

    let mut records = Vec::new();
    for row in reader.deserialize::<CsvRow>() {
        records.push(row?.into_record()?);
    }

    tracing::debug!(
        path = %path.display(),
        rows = records.len(),
        "loaded temperature records"
    );

    Ok(records)
}
