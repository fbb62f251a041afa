use nds_rs::{GeographicCoordinate, RangeError, Tile};

fn main() -> Result<(), RangeError> {
    let position = GeographicCoordinate::new(2.2945, 48.858222)?;

    let tile = Tile::from_degrees(13, &position)?;
    println!("Tile: {}", tile);
    println!("Packed id: {}", tile.packed_id());

    let center = tile.center().to_geographic();
    println!("Center: ({}, {})", center.longitude(), center.latitude());

    println!("{}", geojson::GeoJson::Feature(tile.to_geojson()));

    Ok(())
}
