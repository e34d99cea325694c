//! Monthly temperature series and estimate endpoint
//!
//! The dashboard operation: look up one city's monthly series, interpolate
//! it at the requested month, and return the readings, the estimate, and
//! the chart figure in one response.
//!
//! The `month` parameter is received as a raw string. Anything absent,
//! unparseable, non-finite, or outside `[1, 12]` silently falls back to
//! [`DEFAULT_QUERY_MONTH`] rather than failing the request; the dashboard
//! always renders a chart.

use axum::{
    extract::{Query, State},
    response::Json,
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};

use clima_core::series::MonthlySeries;
use clima_core::types::TemperatureKind;

use super::AppState;
use crate::chart::{temperature_figure, ChartFigure};
use crate::error::ApiError;

/// Query month used when the request does not supply a usable one
pub const DEFAULT_QUERY_MONTH: f64 = 6.5;

/// Query parameters, all optional
#[derive(Debug, Clone, Deserialize)]
pub struct TemperatureQuery {
    /// City name; defaults to the configured city
    pub city: Option<String>,
    /// Temperature kind; defaults to the configured kind
    pub kind: Option<String>,
    /// Query month as given by the client, validated here
    pub month: Option<String>,
}

/// Series-plus-estimate response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemperatureResponse {
    /// City the series belongs to
    pub city: String,
    /// Temperature kind served
    pub kind: TemperatureKind,
    /// Month axis, 1 through 12
    pub months: Vec<f64>,
    /// Observed monthly readings
    pub temperatures: Vec<f64>,
    /// Month the estimate was taken at, after fallback
    pub query_month: f64,
    /// Interpolated temperature, rounded to 2 decimals
    pub estimate: f64,
    /// Plotly figure for the dashboard
    pub chart: ChartFigure,
}

/// Build the temperatures routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/v1/temperatures", get(temperatures_handler))
}

/// Resolve the raw month parameter to a usable query month.
///
/// Out-of-range and unparseable values fall back rather than error so a
/// hand-edited URL still renders the dashboard.
fn resolve_month(raw: Option<&str>) -> f64 {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|m| (1.0..=12.0).contains(m))
        .unwrap_or(DEFAULT_QUERY_MONTH)
}

/// Round to 2 decimal places for display
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// GET /api/v1/temperatures - Series, estimate, and chart for one city
async fn temperatures_handler(
    State(state): State<AppState>,
    Query(query): Query<TemperatureQuery>,
) -> Result<Json<TemperatureResponse>, ApiError> {
    let city = query
        .city
        .unwrap_or_else(|| state.config.default_city.clone());
    let kind = match query.kind {
        Some(raw) => raw
            .parse::<TemperatureKind>()
            .map_err(|_| ApiError::InvalidKind(raw))?,
        None => state.config.default_kind,
    };
    let month = resolve_month(query.month.as_deref());

    let series = state
        .store
        .monthly_series(&city, kind)
        .await?
        .ok_or_else(|| ApiError::NoData {
            city: city.clone(),
            kind,
        })?;

    let estimate = round2(series.estimate_at(month)?);
    let chart = temperature_figure(&city, kind, &series, month, estimate);

    tracing::debug!(city = %city, kind = %kind, month, estimate, "served temperature estimate");

    Ok(Json(TemperatureResponse {
        city,
        kind,
        months: MonthlySeries::MONTH_AXIS.to_vec(),
        temperatures: series.values().to_vec(),
        query_month: month,
        estimate,
        chart,
    }))
}
