//! Runtime configuration. Every field has a default; a page may override any
//! subset through a `FORECAST_CONFIG` object on the global scope.

use serde::{Deserialize, Serialize};

use crate::domain::errors::ConfigurationError;
use crate::domain::forecast::{MILLIS_PER_HOUR, MILLIS_PER_MINUTE};
use crate::domain::location::Point;
use crate::domain::logging::LogLevel;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub forecast_endpoint: String,
    pub horizon_hours: u32,
    pub default_point: Point,
    pub chart_title: String,
    pub log_level: LogLevel,
    pub viewport: ViewportConfig,
    pub map: MapConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            forecast_endpoint: "/api/forecast".to_string(),
            horizon_hours: 120,
            default_point: Point::new(41.5231, -71.3423),
            chart_title: "High Resolution Rapid Refresh (HRRR) – Wind Forecast".to_string(),
            log_level: LogLevel::Debug,
            viewport: ViewportConfig::default(),
            map: MapConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    pub visible_span_hours: u32,
    /// Margin on each side of the series so edge bars are not clipped
    pub bar_padding_minutes: u32,
    pub pan_minutes_per_pixel: f64,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            visible_span_hours: 36,
            bar_padding_minutes: 30,
            pan_minutes_per_pixel: 1.0,
        }
    }
}

impl ViewportConfig {
    pub fn span_ms(&self) -> i64 {
        i64::from(self.visible_span_hours) * MILLIS_PER_HOUR
    }

    pub fn padding_ms(&self) -> i64 {
        i64::from(self.bar_padding_minutes) * MILLIS_PER_MINUTE
    }

    pub fn pan_ms_per_pixel(&self) -> f64 {
        self.pan_minutes_per_pixel * MILLIS_PER_MINUTE as f64
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub center: Point,
    pub zoom: u8,
    pub tiles: TileConfig,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center: Point::new(41.6785, -71.5338),
            zoom: 10,
            tiles: TileConfig::default(),
        }
    }
}

/// Tile layer options, serialized as the map widget expects them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TileConfig {
    #[serde(skip_serializing)]
    pub url: String,
    pub attribution: String,
    pub subdomains: String,
    pub max_zoom: u8,
    pub min_zoom: u8,
}

impl Default for TileConfig {
    fn default() -> Self {
        Self {
            url: "https://{s}.basemaps.cartocdn.com/light_all/{z}/{x}/{y}{r}.png".to_string(),
            attribution: "&copy; OSM / CARTO".to_string(),
            subdomains: "abcd".to_string(),
            max_zoom: 15,
            min_zoom: 3,
        }
    }
}

impl AppConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigurationError> {
        let config: Self = serde_json::from_str(raw)
            .map_err(|e| ConfigurationError::DeserializationFailed(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.forecast_endpoint.trim().is_empty() {
            return Err(ConfigurationError::InvalidParameter("forecast_endpoint is empty".into()));
        }
        if self.horizon_hours == 0 {
            return Err(ConfigurationError::InvalidParameter("horizon_hours must be positive".into()));
        }
        if self.viewport.visible_span_hours == 0 {
            return Err(ConfigurationError::InvalidParameter("visible_span_hours must be positive".into()));
        }
        if !self.viewport.pan_minutes_per_pixel.is_finite() {
            return Err(ConfigurationError::InvalidParameter("pan_minutes_per_pixel must be finite".into()));
        }
        if self.map.tiles.min_zoom > self.map.tiles.max_zoom {
            return Err(ConfigurationError::InvalidParameter(format!(
                "min_zoom {} exceeds max_zoom {}",
                self.map.tiles.min_zoom, self.map.tiles.max_zoom
            )));
        }
        Ok(())
    }
}
