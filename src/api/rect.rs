use crate::api::coordinate::FixedCoordinate;
use crate::api::geographic::GeographicCoordinate;
use crate::core::constants::{MAX_LATITUDE, MAX_LONGITUDE, MIN_LATITUDE, MIN_LONGITUDE};
use crate::util::feature::polygon_feature;
use geo_types::{Coord, LineString, Polygon, Rect, coord};
use serde::Serialize;

/// An axis-aligned rectangle in fixed-point coordinate space.
///
/// Derived from a [`Tile`](crate::Tile); `north`/`south` are latitude
/// bounds, `east`/`west` are longitude bounds, with `south <= north`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FixedRectangle {
    north: i32,
    east: i32,
    south: i32,
    west: i32,
}

impl FixedRectangle {
    /// The eastern hemisphere, tile number 0 on level 0.
    pub const EAST_HEMISPHERE: FixedRectangle =
        FixedRectangle::from_raw(MAX_LATITUDE, MAX_LONGITUDE, MIN_LATITUDE, 0);

    /// The western hemisphere, tile number 1 on level 0.
    pub const WEST_HEMISPHERE: FixedRectangle =
        FixedRectangle::from_raw(MAX_LATITUDE, 0, MIN_LATITUDE, MIN_LONGITUDE);

    pub(crate) const fn from_raw(north: i32, east: i32, south: i32, west: i32) -> Self {
        Self {
            north,
            east,
            south,
            west,
        }
    }

    /// Returns the northern latitude bound.
    pub fn north(&self) -> i32 {
        self.north
    }

    /// Returns the eastern longitude bound.
    pub fn east(&self) -> i32 {
        self.east
    }

    /// Returns the southern latitude bound.
    pub fn south(&self) -> i32 {
        self.south
    }

    /// Returns the western longitude bound.
    pub fn west(&self) -> i32 {
        self.west
    }

    /// Returns the south-west corner.
    pub fn south_west(&self) -> FixedCoordinate {
        FixedCoordinate::from_raw(self.west, self.south)
    }

    /// Returns the south-east corner.
    pub fn south_east(&self) -> FixedCoordinate {
        FixedCoordinate::from_raw(self.east, self.south)
    }

    /// Returns the north-west corner.
    pub fn north_west(&self) -> FixedCoordinate {
        FixedCoordinate::from_raw(self.west, self.north)
    }

    /// Returns the north-east corner.
    pub fn north_east(&self) -> FixedCoordinate {
        FixedCoordinate::from_raw(self.east, self.north)
    }

    /// Returns the center of the rectangle.
    ///
    /// The corner sums are taken in 64 bits so that wide rectangles cannot
    /// overflow.
    pub fn center(&self) -> FixedCoordinate {
        let longitude = ((self.east as i64 + self.west as i64) / 2) as i32;
        let latitude = ((self.north as i64 + self.south as i64) / 2) as i32;
        FixedCoordinate::from_raw(longitude, latitude)
    }

    /// Converts this rectangle to degree space.
    ///
    /// Each bound is converted independently through the fixed-point degree
    /// conversion.
    pub fn to_geographic(&self) -> GeographicRectangle {
        let ne = self.north_east().to_geographic();
        let sw = self.south_west().to_geographic();
        GeographicRectangle {
            north: ne.latitude(),
            east: ne.longitude(),
            south: sw.latitude(),
            west: sw.longitude(),
        }
    }

    /// Creates a GeoJSON "Polygon" feature for this rectangle.
    pub fn to_geojson(&self) -> geojson::Feature {
        self.to_geographic().to_geojson()
    }
}

/// An axis-aligned rectangle in degree space, obtained by converting a
/// [`FixedRectangle`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeographicRectangle {
    north: f64,
    east: f64,
    south: f64,
    west: f64,
}

impl GeographicRectangle {
    /// Returns the northern latitude bound in degrees.
    pub fn north(&self) -> f64 {
        self.north
    }

    /// Returns the eastern longitude bound in degrees.
    pub fn east(&self) -> f64 {
        self.east
    }

    /// Returns the southern latitude bound in degrees.
    pub fn south(&self) -> f64 {
        self.south
    }

    /// Returns the western longitude bound in degrees.
    pub fn west(&self) -> f64 {
        self.west
    }

    /// Returns the south-west corner.
    pub fn south_west(&self) -> GeographicCoordinate {
        GeographicCoordinate::from_raw(self.west, self.south)
    }

    /// Returns the south-east corner.
    pub fn south_east(&self) -> GeographicCoordinate {
        GeographicCoordinate::from_raw(self.east, self.south)
    }

    /// Returns the north-west corner.
    pub fn north_west(&self) -> GeographicCoordinate {
        GeographicCoordinate::from_raw(self.west, self.north)
    }

    /// Returns the north-east corner.
    pub fn north_east(&self) -> GeographicCoordinate {
        GeographicCoordinate::from_raw(self.east, self.north)
    }

    /// Returns the center of the rectangle.
    pub fn center(&self) -> GeographicCoordinate {
        GeographicCoordinate::from_raw((self.east + self.west) / 2.0, (self.north + self.south) / 2.0)
    }

    /// Returns this rectangle as a `geo_types::Rect`.
    pub fn to_rect(&self) -> Rect<f64> {
        Rect::new(
            coord! { x: self.west, y: self.south },
            coord! { x: self.east, y: self.north },
        )
    }

    /// Returns this rectangle as a closed `geo_types::Polygon` ring, with
    /// corners ordered south-west, south-east, north-east, north-west.
    pub fn to_polygon(&self) -> Polygon<f64> {
        let coords = vec![
            Coord {
                x: self.west,
                y: self.south,
            },
            Coord {
                x: self.east,
                y: self.south,
            },
            Coord {
                x: self.east,
                y: self.north,
            },
            Coord {
                x: self.west,
                y: self.north,
            },
            Coord {
                x: self.west,
                y: self.south,
            },
        ];
        Polygon::new(LineString::from(coords), vec![])
    }

    /// Creates a GeoJSON "Polygon" feature for this rectangle.
    pub fn to_geojson(&self) -> geojson::Feature {
        polygon_feature(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-7;

    #[test]
    fn test_hemisphere_corners() {
        let east = FixedRectangle::EAST_HEMISPHERE;
        assert_eq!(east.south_west(), FixedCoordinate::from_raw(0, MIN_LATITUDE));
        assert_eq!(
            east.north_east(),
            FixedCoordinate::from_raw(MAX_LONGITUDE, MAX_LATITUDE)
        );

        let west = FixedRectangle::WEST_HEMISPHERE;
        assert_eq!(
            west.south_west(),
            FixedCoordinate::from_raw(MIN_LONGITUDE, MIN_LATITUDE)
        );
        assert_eq!(west.north_east(), FixedCoordinate::from_raw(0, MAX_LATITUDE));
    }

    #[test]
    fn test_center_does_not_overflow() {
        let center = FixedRectangle::EAST_HEMISPHERE.center();
        assert_eq!(center.longitude(), MAX_LONGITUDE / 2);
        assert_eq!(center.latitude(), 0);

        let center = FixedRectangle::WEST_HEMISPHERE.center();
        assert_eq!(center.longitude(), MIN_LONGITUDE / 2);
        assert_eq!(center.latitude(), 0);
    }

    #[test]
    fn test_to_geographic_hemispheres() {
        let east = FixedRectangle::EAST_HEMISPHERE.to_geographic();
        assert_eq!(east.north(), 90.0);
        assert_eq!(east.east(), 180.0);
        assert_eq!(east.south(), -90.0);
        assert_eq!(east.west(), 0.0);

        let west = FixedRectangle::WEST_HEMISPHERE.to_geographic();
        assert!((west.north() - 90.0).abs() < EPS);
        assert!((west.east() - 0.0).abs() < EPS);
        assert!((west.south() + 90.0).abs() < EPS);
        assert!((west.west() + 180.0).abs() < EPS);
    }

    #[test]
    fn test_polygon_ring() {
        let rect = FixedRectangle::EAST_HEMISPHERE.to_geographic();
        let polygon = rect.to_polygon();
        let exterior = polygon.exterior();
        assert_eq!(exterior.coords().count(), 5);
        assert_eq!(exterior.0[0], exterior.0[4]);
        assert_eq!(exterior.0[0], Coord { x: 0.0, y: -90.0 });
        assert_eq!(exterior.0[2], Coord { x: 180.0, y: 90.0 });
    }

    #[test]
    fn test_to_rect() {
        let rect = FixedRectangle::EAST_HEMISPHERE.to_geographic().to_rect();
        assert_eq!(rect.min().x, 0.0);
        assert_eq!(rect.max().x, 180.0);
        assert_eq!(rect.min().y, -90.0);
        assert_eq!(rect.max().y, 90.0);
    }
}
