use derive_more::{Constructor, Display, From, Into};
use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString};

use crate::domain::location::Point;

pub const MILLIS_PER_MINUTE: i64 = 60 * 1000;
pub const MILLIS_PER_HOUR: i64 = 60 * MILLIS_PER_MINUTE;

/// Value Object - milliseconds since the Unix epoch
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, From, Into, Constructor, Display, Serialize, Deserialize,
)]
#[display(fmt = "{}ms", _0)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn value(&self) -> i64 {
        self.0
    }

    pub fn from_millis(value: i64) -> Self {
        Self(value)
    }

    /// Shift by a signed number of milliseconds.
    pub fn offset_by(&self, millis: i64) -> Self {
        Self(self.0.saturating_add(millis))
    }

    /// Signed distance `self - earlier` in milliseconds.
    pub fn millis_since(&self, earlier: Timestamp) -> i64 {
        self.0 - earlier.0
    }
}

/// Value Object - speed unit reported by the forecast service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumIter, EnumString, Serialize, Deserialize)]
pub enum WindUnit {
    #[default]
    #[strum(serialize = "knots", serialize = "kn", serialize = "kt")]
    #[serde(rename = "knots")]
    Knots,
    #[strum(serialize = "kmh", serialize = "km/h")]
    #[serde(rename = "kmh")]
    KilometresPerHour,
    #[strum(serialize = "ms", serialize = "m/s")]
    #[serde(rename = "ms")]
    MetresPerSecond,
    #[strum(serialize = "mph")]
    #[serde(rename = "mph")]
    MilesPerHour,
}

impl WindUnit {
    /// Short label used on the chart
    pub fn label(&self) -> &'static str {
        match self {
            Self::Knots => "kt",
            Self::KilometresPerHour => "km/h",
            Self::MetresPerSecond => "m/s",
            Self::MilesPerHour => "mph",
        }
    }

    /// Axis title
    pub fn title(&self) -> &'static str {
        match self {
            Self::Knots => "Knots",
            Self::KilometresPerHour => "km/h",
            Self::MetresPerSecond => "m/s",
            Self::MilesPerHour => "mph",
        }
    }
}

/// Value Object - body of the forecast request
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastRequest {
    pub lat: f64,
    pub lon: f64,
    pub hours: u32,
}

impl ForecastRequest {
    pub fn new(point: Point, hours: u32) -> Self {
        Self { lat: point.lat, lon: point.lon, hours }
    }

    pub fn point(&self) -> Point {
        Point::new(self.lat, self.lon)
    }
}
