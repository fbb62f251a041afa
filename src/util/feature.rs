use crate::api::geographic::GeographicCoordinate;
use crate::api::rect::GeographicRectangle;
use geojson::{Feature, Geometry, JsonObject, Value};

/// Creates a GeoJSON "Point" feature for a geographic coordinate.
///
/// The coordinates are `[longitude, latitude]` and `properties` is an
/// empty object.
pub fn point_feature(coord: &GeographicCoordinate) -> Feature {
    feature(Geometry::new(Value::from(&coord.to_point())))
}

/// Creates a GeoJSON "Polygon" feature for a geographic rectangle.
///
/// The ring holds the five corners south-west, south-east, north-east,
/// north-west, south-west (closing the ring); `properties` is an empty
/// object.
pub fn polygon_feature(rect: &GeographicRectangle) -> Feature {
    feature(Geometry::new(Value::from(&rect.to_polygon())))
}

fn feature(geometry: Geometry) -> Feature {
    Feature {
        bbox: None,
        geometry: Some(geometry),
        id: None,
        properties: Some(JsonObject::new()),
        foreign_members: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::coordinate::FixedCoordinate;
    use crate::api::tile::Tile;
    use crate::util::error::RangeError;
    use geojson::Value;

    #[test]
    fn test_point_feature() -> Result<(), RangeError> {
        let coord = GeographicCoordinate::new(2.2945, 48.858222)?;
        let feature = coord.to_geojson();

        assert_eq!(feature.properties, Some(JsonObject::new()));
        match feature.geometry.unwrap().value {
            Value::Point(coords) => assert_eq!(coords, vec![2.2945, 48.858222]),
            other => panic!("expected Point, got {:?}", other),
        }
        Ok(())
    }

    #[test]
    fn test_polygon_feature_ring_order() -> Result<(), RangeError> {
        let rect = Tile::new(0, 0)?.bounding_box().to_geographic();
        let feature = polygon_feature(&rect);

        match feature.geometry.unwrap().value {
            Value::Polygon(rings) => {
                assert_eq!(rings.len(), 1);
                let ring = &rings[0];
                assert_eq!(ring.len(), 5);
                assert_eq!(ring[0], vec![0.0, -90.0]); // south-west
                assert_eq!(ring[1], vec![180.0, -90.0]); // south-east
                assert_eq!(ring[2], vec![180.0, 90.0]); // north-east
                assert_eq!(ring[3], vec![0.0, 90.0]); // north-west
                assert_eq!(ring[4], ring[0]); // closed
            }
            other => panic!("expected Polygon, got {:?}", other),
        }
        Ok(())
    }

    #[test]
    fn test_feature_serializes() -> Result<(), RangeError> {
        let feature = FixedCoordinate::new(0, 0)?.to_geojson();
        let json = serde_json::to_value(&feature).unwrap();
        assert_eq!(json["type"], "Feature");
        assert_eq!(json["geometry"]["type"], "Point");
        Ok(())
    }
}
