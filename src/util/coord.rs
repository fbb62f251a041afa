use geo_types::Point;

/// Trait for types that can provide a degree longitude/latitude pair.
///
/// Implemented for `(f64, f64)` tuples, `geo_types::Point<f64>`, and
/// [`GeographicCoordinate`](crate::GeographicCoordinate). This allows
/// conversion functions to accept any of them.
pub trait Coordinate {
    /// Returns the longitude in degrees.
    fn longitude(&self) -> f64;
    /// Returns the latitude in degrees.
    fn latitude(&self) -> f64;
}

impl Coordinate for (f64, f64) {
    fn longitude(&self) -> f64 {
        self.0
    }
    fn latitude(&self) -> f64 {
        self.1
    }
}

impl Coordinate for Point<f64> {
    fn longitude(&self) -> f64 {
        self.x()
    }
    fn latitude(&self) -> f64 {
        self.y()
    }
}
