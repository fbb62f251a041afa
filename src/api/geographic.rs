use crate::api::coordinate::FixedCoordinate;
use crate::util::coord::Coordinate;
use crate::util::error::RangeError;
use crate::util::feature::point_feature;
use geo_types::Point;
use serde::Serialize;

/// A validated geographic coordinate in degrees (WGS 84 longitude/latitude).
///
/// # Example
///
/// ```
/// use nds_rs::GeographicCoordinate;
///
/// # fn main() -> Result<(), nds_rs::RangeError> {
/// let eiffel = GeographicCoordinate::new(2.2945, 48.858222)?;
/// let fixed = eiffel.to_fixed();
/// assert_eq!(fixed.longitude(), 27374451);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeographicCoordinate {
    longitude: f64,
    latitude: f64,
}

impl GeographicCoordinate {
    /// Creates a new coordinate, validating `longitude` against [-180, 180]
    /// and `latitude` against [-90, 90].
    pub fn new(longitude: f64, latitude: f64) -> Result<Self, RangeError> {
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(RangeError::Longitude(longitude));
        }
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(RangeError::Latitude(latitude));
        }
        Ok(Self {
            longitude,
            latitude,
        })
    }

    /// Builds a coordinate from already validated values.
    pub(crate) const fn from_raw(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }

    /// Returns the longitude in degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Returns the latitude in degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Converts this coordinate to the fixed-point representation.
    pub fn to_fixed(&self) -> FixedCoordinate {
        FixedCoordinate::scale_degrees(self.longitude, self.latitude)
    }

    /// Returns this coordinate as a `geo_types::Point`.
    pub fn to_point(&self) -> Point<f64> {
        Point::new(self.longitude, self.latitude)
    }

    /// Creates a GeoJSON "Point" feature for this coordinate.
    pub fn to_geojson(&self) -> geojson::Feature {
        point_feature(self)
    }
}

impl Coordinate for GeographicCoordinate {
    fn longitude(&self) -> f64 {
        self.longitude
    }
    fn latitude(&self) -> f64 {
        self.latitude
    }
}

impl std::fmt::Display for GeographicCoordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "longitude: {} , latitude: {}", self.longitude, self.latitude)
    }
}
