use serde::Deserialize;
use std::str::FromStr;

use crate::domain::errors::ValidationError;
use crate::domain::forecast::{TimeSeries, WindUnit};
use crate::domain::logging::LogComponent;
use crate::log_warn;
use crate::time_utils::{DisplayZone, parse_timestamp};

/// DTO for a successful forecast response
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    pub time: Vec<String>,
    pub wind_dir: Vec<Option<f64>>,
    pub wind_speed: Vec<f64>,
    pub wind_gust: Vec<Option<f64>>,
    #[serde(default)]
    pub meta: Option<ForecastMeta>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForecastMeta {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub hours: Option<u32>,
    pub unit: Option<String>,
}

/// DTO for a failure response; the body may be absent altogether
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

impl ForecastResponse {
    fn unit(&self) -> WindUnit {
        let Some(raw) = self.meta.as_ref().and_then(|m| m.unit.as_deref()) else {
            return WindUnit::default();
        };
        WindUnit::from_str(raw).unwrap_or_else(|_| {
            log_warn!(LogComponent::Infrastructure("ForecastDto"), "Unknown unit '{}', assuming knots", raw);
            WindUnit::default()
        })
    }

    /// Converts the DTO into the domain series
    pub fn into_series<Z: DisplayZone>(self, zone: Z) -> Result<TimeSeries, ValidationError> {
        let unit = self.unit();
        let time = self
            .time
            .iter()
            .map(|raw| parse_timestamp(raw, zone))
            .collect::<Result<Vec<_>, _>>()?;
        TimeSeries::from_columns(time, self.wind_speed, self.wind_gust, self.wind_dir, unit)
    }
}

/// Message for a failed request: the server's `error` text when it sent a
/// non-empty one, otherwise the status code.
pub fn failure_message(status: u16, body: Option<ErrorBody>) -> String {
    body.and_then(|b| b.error)
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| format!("Request failed ({})", status))
}
