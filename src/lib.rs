//! # nds-rs
//!
//! Fixed-point geospatial coordinates and the hierarchical tiling scheme of
//! the NDS map format: degree values map linearly onto signed 32-bit
//! integers, coordinates interleave into 64-bit Morton codes, and tiles are
//! Morton-code prefixes addressed by a single packed integer id.
//!
//! There are three main entry points.
//!
//! ### 1. `FixedCoordinate` - Coordinate Encoding
//!
//! ```
//! use nds_rs::FixedCoordinate;
//!
//! # fn main() -> Result<(), nds_rs::RangeError> {
//! let eiffel = FixedCoordinate::from_degrees(&(2.2945, 48.858222))?;
//! assert_eq!(eiffel.longitude(), 27374451);
//! assert_eq!(eiffel.morton_code(), 579221254078012839);
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. `Tile` - The Tiling Scheme
//!
//! ```
//! use nds_rs::{FixedCoordinate, Tile};
//!
//! # fn main() -> Result<(), nds_rs::RangeError> {
//! // Barcelona area
//! let tile = Tile::from_packed_id(539636700)?;
//! assert_eq!(tile.level(), 13);
//!
//! let coord = FixedCoordinate::new(24772607, 493486079)?;
//! assert!(tile.contains(&coord));
//! assert_eq!(Tile::from_fixed(13, &coord)?, tile);
//! # Ok(())
//! # }
//! ```
//!
//! ### 3. GeoJSON Export
//!
//! ```
//! use nds_rs::Tile;
//!
//! # fn main() -> Result<(), nds_rs::RangeError> {
//! let tile = Tile::from_degrees(13, &(2.2945, 48.858222))?;
//! let feature = tile.to_geojson();
//! println!("{}", geojson::GeoJson::Feature(feature));
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod core;
pub mod util;

pub use api::{FixedCoordinate, FixedRectangle, GeographicCoordinate, GeographicRectangle, Tile};
pub use core::{
    LATITUDE_RANGE, LONGITUDE_RANGE, MAX_LATITUDE, MAX_LEVEL, MAX_LONGITUDE, MIN_LATITUDE,
    MIN_LONGITUDE, deinterleave, extract_level, interleave, max_tile_number, southwest_morton,
    tile_number_at,
};
pub use util::{Coordinate, RangeError, point_feature, polygon_feature};

pub use geo_types;
pub use geojson;
