//! In-memory temperature store.
//!
//! Backs demo mode and tests; also acts as the loaded form of a CSV data
//! file. Lookups are exact on city name and kind.

use std::collections::HashMap;
use std::path::Path;

use clima_core::series::MonthlySeries;
use clima_core::types::TemperatureKind;

use crate::csv_source::{read_records, TemperatureRecord};
use crate::error::StoreError;
use crate::TemperatureStore;

/// In-memory map of `(city, kind)` to monthly series.
///
/// # Example
///
/// ```
/// use clima_core::types::TemperatureKind;
/// use clima_store::memory::MemoryStore;
///
/// let store = MemoryStore::with_sample_data();
/// assert!(store.cities().contains(&"Barranquilla".to_string()));
///
/// let series = store.series("Barranquilla", TemperatureKind::Max).unwrap();
/// assert!(series.max_value() > 30.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    series: HashMap<(String, TemperatureKind), MonthlySeries>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with the bundled five-city sample set.
    ///
    /// Covers Barranquilla, Bogotá, Cali, Cartagena, and Medellín with
    /// both maxima and minima, in degrees Celsius. The same rows ship in
    /// `data/city_temperatures.csv` and `sql/schema.sql`.
    pub fn with_sample_data() -> Self {
        let mut store = Self::new();

        store.insert(
            "Barranquilla",
            TemperatureKind::Max,
            MonthlySeries::new([
                31.0, 31.2, 31.5, 32.0, 32.4, 32.6, 32.8, 32.9, 32.4, 31.8, 31.5, 31.1,
            ]),
        );
        store.insert(
            "Barranquilla",
            TemperatureKind::Min,
            MonthlySeries::new([
                23.2, 23.3, 23.8, 24.4, 24.8, 24.7, 24.5, 24.5, 24.3, 24.0, 23.9, 23.5,
            ]),
        );
        store.insert(
            "Bogotá",
            TemperatureKind::Max,
            MonthlySeries::new([
                19.8, 19.9, 19.7, 19.2, 18.8, 18.3, 17.9, 18.1, 18.6, 18.9, 19.0, 19.5,
            ]),
        );
        store.insert(
            "Bogotá",
            TemperatureKind::Min,
            MonthlySeries::new([
                7.5, 8.2, 9.0, 9.5, 9.4, 9.0, 8.6, 8.4, 8.5, 9.0, 9.2, 8.1,
            ]),
        );
        store.insert(
            "Cali",
            TemperatureKind::Max,
            MonthlySeries::new([
                29.9, 30.2, 30.1, 29.6, 29.2, 29.4, 29.9, 30.2, 29.9, 29.2, 29.0, 29.4,
            ]),
        );
        store.insert(
            "Cali",
            TemperatureKind::Min,
            MonthlySeries::new([
                18.8, 19.0, 19.1, 19.1, 19.0, 18.6, 18.2, 18.3, 18.5, 18.7, 18.9, 18.9,
            ]),
        );
        store.insert(
            "Cartagena",
            TemperatureKind::Max,
            MonthlySeries::new([
                30.9, 31.0, 31.2, 31.6, 31.8, 31.9, 31.9, 31.8, 31.4, 31.1, 31.2, 31.0,
            ]),
        );
        store.insert(
            "Cartagena",
            TemperatureKind::Min,
            MonthlySeries::new([
                24.1, 24.2, 24.6, 25.2, 25.5, 25.5, 25.3, 25.3, 25.1, 24.8, 24.8, 24.4,
            ]),
        );
        store.insert(
            "Medellín",
            TemperatureKind::Max,
            MonthlySeries::new([
                27.9, 28.2, 28.1, 27.5, 27.4, 27.8, 28.2, 28.3, 27.8, 27.0, 26.9, 27.3,
            ]),
        );
        store.insert(
            "Medellín",
            TemperatureKind::Min,
            MonthlySeries::new([
                16.7, 16.9, 17.1, 17.2, 17.1, 16.8, 16.5, 16.5, 16.6, 16.8, 16.9, 16.8,
            ]),
        );

        store
    }

    /// Load a store from a CSV data file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to a CSV file readable by [`read_records`]
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        Ok(Self::from_records(read_records(path)?))
    }

    /// Build a store from parsed records. Later duplicates overwrite
    /// earlier ones.
    pub fn from_records(records: Vec<TemperatureRecord>) -> Self {
        let mut store = Self::new();
        for record in records {
            store.insert(record.city, record.kind, record.series);
        }
        store
    }

    /// Insert or replace one series.
    pub fn insert(
        &mut self,
        city: impl Into<String>,
        kind: TemperatureKind,
        series: MonthlySeries,
    ) {
        self.series.insert((city.into(), kind), series);
    }

    /// Distinct city names, sorted ascending.
    pub fn cities(&self) -> Vec<String> {
        let mut cities: Vec<String> = self.series.keys().map(|(city, _)| city.clone()).collect();
        cities.sort();
        cities.dedup();
        cities
    }

    /// Look up one series. Returns `None` when the pair is absent.
    pub fn series(&self, city: &str, kind: TemperatureKind) -> Option<MonthlySeries> {
        self.series.get(&(city.to_string(), kind)).copied()
    }

    /// Number of stored series.
    pub fn len(&self) -> usize {
        self.series.len()
    }

    /// Returns true when no series are stored.
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

#[async_trait::async_trait]
impl TemperatureStore for MemoryStore {
    async fn list_cities(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.cities())
    }

    async fn monthly_series(
        &self,
        city: &str,
        kind: TemperatureKind,
    ) -> Result<Option<MonthlySeries>, StoreError> {
        Ok(self.series(city, kind))
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::io::Write;

    #[test]
    fn test_new_store_is_empty() {
        let store = MemoryStore::new();
        assert!(store.is_empty());
        assert!(store.cities().is_empty());
    }

    #[test]
    fn test_sample_data_contains_five_cities_both_kinds() {
        let store = MemoryStore::with_sample_data();

        assert_eq!(store.len(), 10);
        assert_eq!(
            store.cities(),
            vec!["Barranquilla", "Bogotá", "Cali", "Cartagena", "Medellín"]
        );

        for city in store.cities() {
            for kind in TemperatureKind::ALL {
                assert!(store.series(&city, kind).is_some(), "{} {}", city, kind);
            }
        }
    }

    #[test]
    fn test_sample_data_minima_below_maxima() {
        let store = MemoryStore::with_sample_data();

        for city in store.cities() {
            let max = store.series(&city, TemperatureKind::Max).unwrap();
            let min = store.series(&city, TemperatureKind::Min).unwrap();
            for (hi, lo) in max.values().iter().zip(min.values()) {
                assert!(hi > lo, "{}: {} <= {}", city, hi, lo);
            }
        }
    }

    #[test]
    fn test_series_lookup_is_exact_on_name() {
        let store = MemoryStore::with_sample_data();
        assert!(store.series("Cali", TemperatureKind::Max).is_some());
        assert!(store.series("cali", TemperatureKind::Max).is_none());
        assert!(store.series("Quibdó", TemperatureKind::Max).is_none());
    }

    #[test]
    fn test_insert_overwrites_existing_pair() {
        let mut store = MemoryStore::new();
        store.insert("Cali", TemperatureKind::Max, MonthlySeries::new([1.0; 12]));
        store.insert("Cali", TemperatureKind::Max, MonthlySeries::new([2.0; 12]));

        assert_eq!(store.len(), 1);
        assert_eq!(
            store.series("Cali", TemperatureKind::Max).unwrap().values()[0],
            2.0
        );
    }

    #[test]
    fn test_from_csv_roundtrip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "city,kind,jan,feb,mar,apr,may,jun,jul,aug,sep,oct,nov,dec\n\
             Leticia,max,30.1,30.0,29.8,29.5,29.3,29.4,29.8,30.4,30.7,30.6,30.3,30.0\n"
        )
        .unwrap();

        let store = MemoryStore::from_csv(file.path()).unwrap();
        assert_eq!(store.cities(), vec!["Leticia"]);
        let series = store.series("Leticia", TemperatureKind::Max).unwrap();
        assert_eq!(series.values()[8], 30.7);
    }

    #[test]
    fn test_stored_series_estimates() {
        let store = MemoryStore::with_sample_data();
        let series = store.series("Barranquilla", TemperatureKind::Max).unwrap();

        // Whole months reproduce the stored readings
        assert_eq!(series.estimate_at(1.0).unwrap(), 31.0);
        assert_eq!(series.estimate_at(8.0).unwrap(), 32.9);

        // A fractional month lands on the interpolating polynomial
        let estimate = series.estimate_at(6.5).unwrap();
        assert_relative_eq!(estimate, 32.68876476287842, max_relative = 1e-9);
    }

    // ========================================
    // Async Trait Tests
    // ========================================

    #[tokio::test]
    async fn test_trait_list_cities() {
        let store = MemoryStore::with_sample_data();
        let cities = TemperatureStore::list_cities(&store).await.unwrap();
        assert_eq!(cities.len(), 5);
        assert_eq!(cities[0], "Barranquilla");
    }

    #[tokio::test]
    async fn test_trait_monthly_series_present_and_absent() {
        let store = MemoryStore::with_sample_data();

        let found = store.monthly_series("Medellín", TemperatureKind::Min).await.unwrap();
        assert!(found.is_some());

        let missing = store.monthly_series("Pasto", TemperatureKind::Min).await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_trait_object_usable() {
        let store: std::sync::Arc<dyn TemperatureStore> =
            std::sync::Arc::new(MemoryStore::with_sample_data());

        assert_eq!(store.backend_name(), "memory");
        let cities = store.list_cities().await.unwrap();
        assert_eq!(cities.len(), 5);
    }
}
