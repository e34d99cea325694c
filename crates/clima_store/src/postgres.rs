//! PostgreSQL temperature store.
//!
//! Reads the `city_temperatures` table created by `sql/schema.sql`: one
//! row per `(city, kind)` pair with twelve monthly columns. Queries bind
//! the kind in its lowercase string form.

use clima_core::series::MonthlySeries;
use clima_core::types::TemperatureKind;
use sqlx::postgres::{PgPool, PgPoolOptions};
use sqlx::Row;

use crate::error::StoreError;
use crate::TemperatureStore;

/// Monthly column names, January first. Must match `sql/schema.sql`.
pub const MONTH_COLUMNS: [&str; MonthlySeries::MONTH_COUNT] = [
    "temp_jan", "temp_feb", "temp_mar", "temp_apr", "temp_may", "temp_jun", "temp_jul",
    "temp_aug", "temp_sep", "temp_oct", "temp_nov", "temp_dec",
];

const LIST_CITIES_SQL: &str = "SELECT DISTINCT city FROM city_temperatures ORDER BY city";

const MONTHLY_SERIES_SQL: &str = "SELECT temp_jan, temp_feb, temp_mar, temp_apr, temp_may, \
     temp_jun, temp_jul, temp_aug, temp_sep, temp_oct, temp_nov, temp_dec \
     FROM city_temperatures WHERE city = $1 AND kind = $2";

/// Temperature store backed by a PostgreSQL connection pool.
///
/// # Example
///
/// ```no_run
/// use clima_store::postgres::PgTemperatureStore;
/// use clima_store::TemperatureStore;
///
/// # async fn connect() -> Result<(), clima_store::error::StoreError> {
/// let store = PgTemperatureStore::connect("postgres://localhost/clima").await?;
/// let cities = store.list_cities().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct PgTemperatureStore {
    pool: PgPool,
}

impl PgTemperatureStore {
    /// Wrap an existing connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect to the database at `url` with a small pool.
    pub async fn connect(url: &str) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new().max_connections(5).connect(url).await?;
        tracing::debug!(url, "connected to temperature database");
        Ok(Self::new(pool))
    }

    /// The underlying pool, for health probes.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait::async_trait]
impl TemperatureStore for PgTemperatureStore {
    async fn list_cities(&self) -> Result<Vec<String>, StoreError> {
        let rows = sqlx::query(LIST_CITIES_SQL).fetch_all(&self.pool).await?;

        let mut cities = Vec::with_capacity(rows.len());
        for row in rows {
            cities.push(row.try_get("city")?);
        }
        tracing::debug!(count = cities.len(), "listed cities");
        Ok(cities)
    }

    async fn monthly_series(
        &self,
        city: &str,
        kind: TemperatureKind,
    ) -> Result<Option<MonthlySeries>, StoreError> {
        let row = sqlx::query(MONTHLY_SERIES_SQL)
            .bind(city)
            .bind(kind.as_str())
            .fetch_optional(&self.pool)
            .await?;

        let Some(row) = row else {
            tracing::debug!(city, kind = %kind, "no series row");
            return Ok(None);
        };

        let mut values = [0.0_f64; MonthlySeries::MONTH_COUNT];
        for (slot, column) in values.iter_mut().zip(MONTH_COLUMNS) {
            *slot = row.try_get(column)?;
        }
        Ok(Some(MonthlySeries::new(values)))
    }

    fn backend_name(&self) -> &'static str {
        "postgres"
    }
}
