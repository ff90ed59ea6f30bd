//! Declarative chart description handed to the charting engine.
//!
//! The wind bars sit in the upper band of the plot, the direction labels in a
//! hidden lower band; both share the date axis whose range is the session's
//! viewport.

use serde::Serialize;

use super::entities::ViewportSession;
use super::services::HourlyTicks;
use super::value_objects::Viewport;
use crate::domain::forecast::{TimeSeries, WindSample};
use crate::time_utils::{DisplayZone, format_axis_timestamp, format_date_label, format_hour_minute};

const BACKGROUND: &str = "rgb(245,245,245)";
const DIRECTION_ROW_Y: f64 = 0.3;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartFigure {
    pub data: Vec<Trace>,
    pub layout: Layout,
    pub config: PlotConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Bar(BarTrace),
    Scatter(TextTrace),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarTrace {
    pub x: Vec<String>,
    pub y: Vec<f64>,
    pub name: String,
    pub marker: BarMarker,
    pub error_y: ErrorBars,
    /// `[gust, date label, hour label]` per bar
    pub customdata: Vec<(Option<f64>, String, String)>,
    pub hovertemplate: String,
    pub xaxis: &'static str,
    pub yaxis: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarMarker {
    pub color: Vec<f64>,
    pub colorscale: &'static str,
    pub cmin: f64,
    pub cmax: f64,
}

/// Asymmetric error bars: only the upward gust excess is drawn.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorBars {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub symmetric: bool,
    pub array: Vec<f64>,
    pub arrayminus: Vec<f64>,
    pub visible: bool,
    pub capthickness: u32,
    pub layer: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextTrace {
    pub mode: &'static str,
    pub x: Vec<String>,
    pub y: Vec<f64>,
    pub text: Vec<String>,
    pub textfont: Font,
    pub textposition: &'static str,
    pub hoverinfo: &'static str,
    pub xaxis: &'static str,
    pub yaxis: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Font {
    pub size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub title: Title,
    pub margin: Margin,
    pub paper_bgcolor: &'static str,
    pub plot_bgcolor: &'static str,
    pub showlegend: bool,
    pub dragmode: &'static str,
    pub xaxis: TimeAxis,
    pub yaxis: ValueAxis,
    pub yaxis2: ValueAxis,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
    pub font: Font,
    pub x: f64,
    pub xanchor: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Margin {
    pub l: u32,
    pub r: u32,
    pub t: u32,
    pub b: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RangeSlider {
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeAxis {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub range: [String; 2],
    pub rangeslider: RangeSlider,
    pub fixedrange: bool,
    pub tickmode: &'static str,
    pub tickvals: Vec<String>,
    pub ticktext: Vec<String>,
    pub tickangle: i32,
    pub automargin: bool,
    pub anchor: &'static str,
    pub tickfont: Font,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValueAxis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<AxisTitle>,
    pub domain: [f64; 2],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<[f64; 2]>,
    pub visible: bool,
    pub fixedrange: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisTitle {
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlotConfig {
    pub responsive: bool,
    pub scroll_zoom: bool,
    /// Double click would autoscale the time axis to the whole series.
    pub double_click: bool,
}

impl ChartFigure {
    pub fn build<Z: DisplayZone>(series: &TimeSeries, session: &ViewportSession, title: &str, zone: Z) -> Self {
        let samples = series.samples();
        let x: Vec<String> = samples
            .iter()
            .map(|s| format_axis_timestamp(s.time, zone))
            .collect();

        let bars = Trace::Bar(bar_trace(series, x.clone(), zone));
        let directions = Trace::Scatter(direction_trace(samples, x));

        Self {
            data: vec![bars, directions],
            layout: layout(series, session, title, zone),
            config: PlotConfig { responsive: true, scroll_zoom: false, double_click: false },
        }
    }
}

/// Range value for a viewport, as the engine's relayout update expects it
pub fn axis_range<Z: DisplayZone>(viewport: Viewport, zone: Z) -> [String; 2] {
    [
        format_axis_timestamp(viewport.start, zone),
        format_axis_timestamp(viewport.end, zone),
    ]
}

/// `"273°"`, or empty when the direction is missing
pub fn direction_label(direction: Option<f64>) -> String {
    direction
        .map(|deg| format!("{}°", deg.round() as i64))
        .unwrap_or_default()
}

fn bar_trace<Z: DisplayZone>(series: &TimeSeries, x: Vec<String>, zone: Z) -> BarTrace {
    let samples = series.samples();
    let unit = series.unit().label();
    let speeds: Vec<f64> = samples.iter().map(|s| s.speed).collect();

    BarTrace {
        x,
        y: speeds.clone(),
        name: format!("Wind speed ({})", unit),
        marker: BarMarker {
            color: speeds,
            colorscale: "Viridis",
            cmin: series.min_speed(),
            cmax: series.max_gust(),
        },
        error_y: ErrorBars {
            kind: "data",
            symmetric: false,
            array: samples.iter().map(WindSample::gust_excess).collect(),
            arrayminus: vec![0.0; samples.len()],
            visible: true,
            capthickness: 0,
            layer: "below",
        },
        customdata: samples
            .iter()
            .map(|s| (s.gust, format_date_label(s.time, zone), format_hour_minute(s.time, zone)))
            .collect(),
        hovertemplate: format!(
            "Date: %{{customdata[1]}}<br>Hour: %{{customdata[2]}}<br>Speed: %{{y:.1f}} {unit}<br>Gust: %{{customdata[0]:.1f}} {unit}<extra></extra>"
        ),
        xaxis: "x",
        yaxis: "y",
    }
}

fn direction_trace(samples: &[WindSample], x: Vec<String>) -> TextTrace {
    TextTrace {
        mode: "text",
        x,
        y: vec![DIRECTION_ROW_Y; samples.len()],
        text: samples.iter().map(|s| direction_label(s.direction)).collect(),
        textfont: Font { size: 12, color: Some("black"), family: None },
        textposition: "middle center",
        hoverinfo: "skip",
        xaxis: "x",
        yaxis: "y2",
    }
}

fn layout<Z: DisplayZone>(series: &TimeSeries, session: &ViewportSession, title: &str, zone: Z) -> Layout {
    let (tickvals, ticktext) = HourlyTicks::for_series(series, zone)
        .map(|tick| (format_axis_timestamp(tick.time, zone), tick.label))
        .unzip();

    Layout {
        title: Title {
            text: title.to_string(),
            font: Font { size: 20, color: None, family: Some("Arial, sans-serif") },
            x: 0.5,
            xanchor: "center",
        },
        margin: Margin { l: 60, r: 20, t: 60, b: 0 },
        paper_bgcolor: BACKGROUND,
        plot_bgcolor: BACKGROUND,
        showlegend: false,
        dragmode: "pan",
        xaxis: TimeAxis {
            kind: "date",
            range: axis_range(session.viewport(), zone),
            rangeslider: RangeSlider { visible: false },
            fixedrange: false,
            tickmode: "array",
            tickvals,
            ticktext,
            tickangle: 0,
            automargin: true,
            anchor: "y",
            tickfont: Font { size: 12, color: None, family: None },
        },
        yaxis: ValueAxis {
            title: Some(AxisTitle { text: series.unit().title().to_string() }),
            domain: [0.30, 1.0],
            range: None,
            visible: true,
            fixedrange: true,
        },
        yaxis2: ValueAxis {
            title: None,
            domain: [0.0, 0.22],
            range: Some([0.0, 1.0]),
            visible: false,
            fixedrange: true,
        },
    }
}
