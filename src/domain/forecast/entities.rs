use super::value_objects::{Timestamp, WindUnit};
use crate::domain::errors::ValidationError;

/// One forecast hour
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindSample {
    pub time: Timestamp,
    pub speed: f64,
    pub gust: Option<f64>,
    pub direction: Option<f64>,
}

impl WindSample {
    /// Gust, or the sustained speed when the service reported none
    pub fn gust_or_speed(&self) -> f64 {
        self.gust.unwrap_or(self.speed)
    }

    /// Height of the gust bar above the speed bar; never negative.
    pub fn gust_excess(&self) -> f64 {
        (self.gust_or_speed() - self.speed).max(0.0)
    }
}

/// Domain entity - wind time series for one point.
///
/// Built once per response and never mutated; at least one sample, sorted by time.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeries {
    samples: Vec<WindSample>,
    unit: WindUnit,
}

impl TimeSeries {
    /// Assemble a series from index-aligned columns.
    pub fn from_columns(
        time: Vec<Timestamp>,
        wind_speed: Vec<f64>,
        wind_gust: Vec<Option<f64>>,
        wind_dir: Vec<Option<f64>>,
        unit: WindUnit,
    ) -> Result<Self, ValidationError> {
        let expected = time.len();
        if expected == 0 {
            return Err(ValidationError::EmptySeries);
        }
        for (field, actual) in [
            ("wind_speed", wind_speed.len()),
            ("wind_gust", wind_gust.len()),
            ("wind_dir", wind_dir.len()),
        ] {
            if actual != expected {
                return Err(ValidationError::MisalignedSeries { field, expected, actual });
            }
        }
        if let Some(index) = time.windows(2).position(|pair| pair[1] < pair[0]) {
            return Err(ValidationError::UnsortedSeries { index: index + 1 });
        }

        let samples = time
            .into_iter()
            .zip(wind_speed)
            .zip(wind_gust)
            .zip(wind_dir)
            .map(|(((time, speed), gust), direction)| WindSample { time, speed, gust, direction })
            .collect();

        Ok(Self { samples, unit })
    }

    pub fn samples(&self) -> &[WindSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn unit(&self) -> WindUnit {
        self.unit
    }

    pub fn first_time(&self) -> Timestamp {
        self.samples[0].time
    }

    pub fn last_time(&self) -> Timestamp {
        self.samples[self.samples.len() - 1].time
    }

    /// Lower bound of the colour scale
    pub fn min_speed(&self) -> f64 {
        self.samples.iter().map(|s| s.speed).fold(f64::INFINITY, f64::min)
    }

    /// Upper bound of the colour scale
    pub fn max_gust(&self) -> f64 {
        self.samples
            .iter()
            .map(WindSample::gust_or_speed)
            .fold(f64::NEG_INFINITY, f64::max)
    }
}
