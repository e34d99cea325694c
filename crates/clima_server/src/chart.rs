//! Chart figure model for the dashboard
//!
//! Serde model of the plotly figure the dashboard renders: the observed
//! monthly series as a spline with markers, plus the interpolated estimate
//! as a single diamond. [`temperature_figure`] is pure; handlers serialize
//! its output straight into the response body.

use clima_core::series::MonthlySeries;
use clima_core::types::TemperatureKind;
use serde::{Deserialize, Serialize};

/// Line and marker colour of the observed series
pub const SERIES_COLOR: &str = "#25736a";

/// Marker colour of the estimate point
pub const ESTIMATE_COLOR: &str = "#2E9FCC";

/// A complete figure: traces plus layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartFigure {
    /// Traces, observed series first
    #[serde(rename = "data")]
    pub traces: Vec<ChartTrace>,
    /// Figure layout
    pub layout: ChartLayout,
}

/// One scatter trace
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartTrace {
    /// Plotly trace type, always "scatter"
    #[serde(rename = "type")]
    pub trace_type: String,
    /// X coordinates (months)
    pub x: Vec<f64>,
    /// Y coordinates (temperatures)
    pub y: Vec<f64>,
    /// Draw mode ("lines+markers" or "markers")
    pub mode: String,
    /// Legend label
    pub name: String,
    /// Line style, absent for marker-only traces
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<LineStyle>,
    /// Marker style
    pub marker: MarkerStyle,
}

/// Line styling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    /// CSS colour
    pub color: String,
    /// Width in pixels
    pub width: f64,
    /// Line shape ("spline")
    pub shape: String,
}

/// Marker styling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerStyle {
    /// Size in pixels
    pub size: f64,
    /// CSS colour
    pub color: String,
    /// Marker symbol ("circle" or "diamond")
    pub symbol: String,
    /// Marker border, absent unless highlighted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<MarkerLine>,
}

/// Marker border styling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerLine {
    /// Border width in pixels
    pub width: f64,
    /// Border colour
    pub color: String,
}

/// Figure layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartLayout {
    /// Centred figure title
    pub title: ChartTitle,
    /// Month axis
    pub xaxis: AxisSpec,
    /// Temperature axis
    pub yaxis: AxisSpec,
    /// Base template name
    pub template: String,
    /// Figure-wide font
    pub font: FontSpec,
    /// Figure height in pixels
    pub height: u32,
    /// Outer margins
    pub margin: MarginSpec,
    /// Hover behaviour
    pub hovermode: String,
    /// Horizontal legend above the plot
    pub legend: LegendSpec,
}

/// Figure title with horizontal position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartTitle {
    /// Title text
    pub text: String,
    /// Horizontal position, 0.5 is centred
    pub x: f64,
}

/// Axis specification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisSpec {
    /// Axis title
    pub title: String,
    /// Tick placement mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickmode: Option<String>,
    /// First tick
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tick0: Option<f64>,
    /// Tick spacing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dtick: Option<f64>,
    /// Visible range
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<[f64; 2]>,
}

/// Font specification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontSpec {
    /// Font family stack
    pub family: String,
    /// Size in points
    pub size: u32,
    /// CSS colour
    pub color: String,
}

/// Outer margin specification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarginSpec {
    /// Left margin in pixels
    pub l: u32,
    /// Right margin in pixels
    pub r: u32,
    /// Top margin in pixels
    pub t: u32,
    /// Bottom margin in pixels
    pub b: u32,
}

/// Legend specification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendSpec {
    /// "h" for horizontal
    pub orientation: String,
    /// Vertical anchor
    pub yanchor: String,
    /// Vertical position
    pub y: f64,
    /// Horizontal anchor
    pub xanchor: String,
    /// Horizontal position
    pub x: f64,
}

/// Build the dashboard figure for one series and its estimate.
///
/// # Arguments
///
/// * `city` - City the series belongs to
/// * `kind` - Temperature kind (maxima or minima)
/// * `series` - The twelve observed monthly readings
/// * `query_month` - Month the estimate was taken at
/// * `estimate` - Interpolated temperature, already display-rounded
pub fn temperature_figure(
    city: &str,
    kind: TemperatureKind,
    series: &MonthlySeries,
    query_month: f64,
    estimate: f64,
) -> ChartFigure {
    let observed = ChartTrace {
        trace_type: "scatter".to_string(),
        x: MonthlySeries::MONTH_AXIS.to_vec(),
        y: series.values().to_vec(),
        mode: "lines+markers".to_string(),
        name: format!("{} temperature", kind.label()),
        line: Some(LineStyle {
            color: SERIES_COLOR.to_string(),
            width: 3.0,
            shape: "spline".to_string(),
        }),
        marker: MarkerStyle {
            size: 10.0,
            color: SERIES_COLOR.to_string(),
            symbol: "circle".to_string(),
            line: None,
        },
    };

    let estimated = ChartTrace {
        trace_type: "scatter".to_string(),
        x: vec![query_month],
        y: vec![estimate],
        mode: "markers".to_string(),
        name: format!("Estimate ({estimate:.2} °C)"),
        line: None,
        marker: MarkerStyle {
            size: 15.0,
            color: ESTIMATE_COLOR.to_string(),
            symbol: "diamond".to_string(),
            line: Some(MarkerLine {
                width: 2.0,
                color: "white".to_string(),
            }),
        },
    };

    let layout = ChartLayout {
        title: ChartTitle {
            text: format!("{} temperature in {}", kind.label(), city),
            x: 0.5,
        },
        xaxis: AxisSpec {
            title: "Month".to_string(),
            tickmode: Some("linear".to_string()),
            tick0: Some(1.0),
            dtick: Some(1.0),
            range: Some([0.5, 12.5]),
        },
        yaxis: AxisSpec {
            title: "Temperature (°C)".to_string(),
            tickmode: None,
            tick0: None,
            dtick: None,
            range: None,
        },
        template: "plotly_white".to_string(),
        font: FontSpec {
            family: "Inter, sans-serif".to_string(),
            size: 14,
            color: "#333".to_string(),
        },
        height: 550,
        margin: MarginSpec {
            l: 40,
            r: 40,
            t: 90,
            b: 40,
        },
        hovermode: "x unified".to_string(),
        legend: LegendSpec {
            orientation: "h".to_string(),
            yanchor: "bottom".to_string(),
            y: 1.0,
            xanchor: "center".to_string(),
            x: 0.5,
        },
    };

    ChartFigure {
        traces: vec![observed, estimated],
        layout,
    }
}
