//! Point selection: one current coordinate mirrored into display fields and a map marker.

use derive_more::Constructor;
use serde::{Deserialize, Serialize};

use crate::domain::errors::ValidationError;

/// Value Object - geographic coordinate in degrees
#[derive(Debug, Clone, Copy, PartialEq, Constructor, Serialize, Deserialize)]
pub struct Point {
    pub lat: f64,
    pub lon: f64,
}

impl Point {
    /// Parse the two coordinate fields. Anything that is not a finite number
    /// means no point has been chosen yet.
    pub fn from_fields(lat: &str, lon: &str) -> Result<Self, ValidationError> {
        let parse = |raw: &str| {
            raw.trim()
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite())
                .ok_or(ValidationError::MissingPoint)
        };
        Ok(Self::new(parse(lat)?, parse(lon)?))
    }
}

/// Text shown in the latitude/longitude inputs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointFields {
    pub lat: String,
    pub lon: String,
}

impl From<Point> for PointFields {
    fn from(point: Point) -> Self {
        Self {
            lat: format!("{:.5}", point.lat),
            lon: format!("{:.5}", point.lon),
        }
    }
}

/// Map widget capable of showing a single marker
pub trait MapSurface {
    type Marker;

    fn create_marker(&self, point: Point) -> Self::Marker;
    fn move_marker(&self, marker: &Self::Marker, point: Point);
}

/// Owns the current point and the marker that shows it.
pub struct PointSelector<M: MapSurface> {
    map: M,
    marker: Option<M::Marker>,
    point: Option<Point>,
}

impl<M: MapSurface> PointSelector<M> {
    pub fn new(map: M) -> Self {
        Self { map, marker: None, point: None }
    }

    /// Replace the current point; the marker is created on first use.
    /// Range checking is left to the caller.
    pub fn set_point(&mut self, lat: f64, lon: f64) -> PointFields {
        let point = Point::new(lat, lon);
        match &self.marker {
            Some(marker) => self.map.move_marker(marker, point),
            None => self.marker = Some(self.map.create_marker(point)),
        }
        self.point = Some(point);
        PointFields::from(point)
    }

    pub fn point(&self) -> Option<Point> {
        self.point
    }

    pub fn map(&self) -> &M {
        &self.map
    }
}
