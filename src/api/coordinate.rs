use crate::api::geographic::GeographicCoordinate;
use crate::core::constants::{
    LATITUDE_RANGE, LONGITUDE_RANGE, MAX_LATITUDE, MAX_LONGITUDE, MIN_LATITUDE, MIN_LONGITUDE,
};
use crate::core::morton::{deinterleave, interleave};
use crate::util::coord::Coordinate;
use crate::util::error::RangeError;
use serde::Serialize;

/// A fixed-point coordinate pair, with one coordinate unit corresponding to
/// 360/2^32 degrees on both axes.
///
/// The longitude uses the full signed 32-bit range for [-180°, 180°]; the
/// latitude covers [-90°, 90°] and therefore only the half range
/// [-2^30, 2^30 - 1].
///
/// # Example
///
/// ```
/// use nds_rs::FixedCoordinate;
///
/// # fn main() -> Result<(), nds_rs::RangeError> {
/// let eiffel = FixedCoordinate::from_degrees(&(2.2945, 48.858222))?;
/// assert_eq!(eiffel.morton_code(), 579221254078012839);
///
/// let decoded = FixedCoordinate::from_morton_code(579221254078012839)?;
/// assert_eq!(decoded, eiffel);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FixedCoordinate {
    longitude: i32,
    latitude: i32,
}

impl FixedCoordinate {
    /// Creates a new coordinate from fixed-point values.
    ///
    /// The latitude is validated against the half range; any `i32` is an
    /// admissible longitude.
    pub fn new(longitude: i32, latitude: i32) -> Result<Self, RangeError> {
        if !(MIN_LATITUDE..=MAX_LATITUDE).contains(&latitude) {
            return Err(RangeError::FixedLatitude(latitude as i64));
        }
        Ok(Self {
            longitude,
            latitude,
        })
    }

    /// Builds a coordinate from values already known to be in range.
    pub(crate) const fn from_raw(longitude: i32, latitude: i32) -> Self {
        Self {
            longitude,
            latitude,
        }
    }

    /// Creates a coordinate from degree values.
    ///
    /// Accepts anything implementing [`Coordinate`]: `(f64, f64)` tuples,
    /// `geo_types::Point<f64>`, or a [`GeographicCoordinate`]. The degree
    /// ranges are validated, then each axis is scaled and floored.
    ///
    /// Flooring (rather than rounding) keeps the Morton code vectors exact;
    /// it produces a documented one-unit offset against some values in the
    /// published NDS 2.5.4 coordinate table.
    pub fn from_degrees(coord: &impl Coordinate) -> Result<Self, RangeError> {
        Ok(GeographicCoordinate::new(coord.longitude(), coord.latitude())?.to_fixed())
    }

    /// Scales validated degree values to fixed-point, flooring each axis.
    pub(crate) fn scale_degrees(lon: f64, lat: f64) -> Self {
        let longitude = (lon / 360.0 * LONGITUDE_RANGE as f64).floor() as i32;
        let latitude = (lat / 180.0 * LATITUDE_RANGE as f64).floor() as i32;
        Self {
            longitude,
            latitude,
        }
    }

    /// Creates a coordinate from a 64-bit Morton code.
    ///
    /// The latitude is reconstructed from a 31-bit signed quantity and
    /// validated against the half range.
    pub fn from_morton_code(code: i64) -> Result<Self, RangeError> {
        let (longitude, latitude) = deinterleave(code);
        Self::new(longitude, latitude)
    }

    /// Returns the unique Morton code for this coordinate.
    pub fn morton_code(&self) -> i64 {
        interleave(self.longitude, self.latitude)
    }

    /// Returns the longitude in coordinate units.
    pub fn longitude(&self) -> i32 {
        self.longitude
    }

    /// Returns the latitude in coordinate units.
    pub fn latitude(&self) -> i32 {
        self.latitude
    }

    /// Returns a new coordinate offset by the given deltas.
    ///
    /// The longitude wraps around at the ±180° boundary; the latitude is
    /// re-validated against the half range.
    pub fn offset_by(&self, delta_longitude: i32, delta_latitude: i32) -> Result<Self, RangeError> {
        let latitude = self.latitude as i64 + delta_latitude as i64;
        if !((MIN_LATITUDE as i64)..=(MAX_LATITUDE as i64)).contains(&latitude) {
            return Err(RangeError::FixedLatitude(latitude));
        }
        Ok(Self {
            longitude: self.longitude.wrapping_add(delta_longitude),
            latitude: latitude as i32,
        })
    }

    /// Converts this coordinate to degrees.
    ///
    /// Positive and negative values use different divisors because
    /// `|i32::MIN| = |i32::MAX| + 1`; a single divisor could not map both
    /// extremes exactly to ±180°/±90°.
    pub fn to_geographic(&self) -> GeographicCoordinate {
        let longitude = if self.longitude >= 0 {
            self.longitude as f64 / MAX_LONGITUDE as f64 * 180.0
        } else {
            self.longitude as f64 / MIN_LONGITUDE as f64 * -180.0
        };
        let latitude = if self.latitude >= 0 {
            self.latitude as f64 / MAX_LATITUDE as f64 * 90.0
        } else {
            self.latitude as f64 / MIN_LATITUDE as f64 * -90.0
        };
        GeographicCoordinate::from_raw(longitude, latitude)
    }

    /// Creates a GeoJSON "Point" feature for this coordinate.
    pub fn to_geojson(&self) -> geojson::Feature {
        self.to_geographic().to_geojson()
    }
}

impl std::fmt::Display for FixedCoordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "longitude: {} , latitude: {}", self.longitude, self.latitude)
    }
}
