use crate::api::coordinate::FixedCoordinate;
use crate::api::rect::FixedRectangle;
use crate::core::constants::{
    LATITUDE_RANGE, LONGITUDE_RANGE, MAX_LEVEL, MAX_LONGITUDE, MIN_LONGITUDE,
};
use crate::core::morton::deinterleave;
use crate::core::tiling::{extract_level, max_tile_number, southwest_morton, tile_number_at};
use crate::util::coord::Coordinate;
use crate::util::error::RangeError;
use std::sync::OnceLock;

/// One cell of the hierarchical tiling scheme, identified by a level in
/// 0..=15 and a tile number.
///
/// The tile number is identical to the `(2 * level + 1)` most significant
/// bits of the Morton code of the tile's south-west corner. Level 0 has
/// exactly two tiles, one per hemisphere; each deeper level quadruples the
/// cell count.
///
/// # Example
///
/// ```
/// use nds_rs::Tile;
///
/// # fn main() -> Result<(), nds_rs::RangeError> {
/// // Barcelona area
/// let tile = Tile::from_packed_id(539636700)?;
/// assert_eq!(tile.level(), 13);
/// assert_eq!(tile.number(), 2765788);
/// assert_eq!(tile.packed_id(), 539636700);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Tile {
    level: u8,
    number: u32,
    /// Lazily computed center; pure cache, never observable as different
    /// from a fresh computation.
    center: OnceLock<FixedCoordinate>,
}

impl PartialEq for Tile {
    fn eq(&self, other: &Self) -> bool {
        self.level == other.level && self.number == other.number
    }
}

impl Eq for Tile {}

impl std::hash::Hash for Tile {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.level.hash(state);
        self.number.hash(state);
    }
}

impl Tile {
    /// Creates a tile from a level and tile number.
    ///
    /// The level must be in 0..=15 and the number below `2^(2 * level + 1)`.
    pub fn new(level: u8, number: u32) -> Result<Self, RangeError> {
        if level > MAX_LEVEL {
            return Err(RangeError::Level(level));
        }
        if number >= max_tile_number(level) {
            return Err(RangeError::TileNumber { level, number });
        }
        Ok(Self {
            level,
            number,
            center: OnceLock::new(),
        })
    }

    /// Creates a tile from a packed tile id.
    ///
    /// The level is identified by the single marker bit at position
    /// `16 + level`; clearing it yields the tile number.
    pub fn from_packed_id(packed_id: i32) -> Result<Self, RangeError> {
        let level = extract_level(packed_id).ok_or(RangeError::PackedId(packed_id))?;
        let number = packed_id as u32 ^ (1u32 << (16 + level));
        Self::new(level, number)
    }

    /// Creates the tile of the given level that contains `coord`.
    ///
    /// The tile number is the Morton code of the coordinate truncated to
    /// its `(2 * level + 1)` most significant bits.
    pub fn from_fixed(level: u8, coord: &FixedCoordinate) -> Result<Self, RangeError> {
        if level > MAX_LEVEL {
            return Err(RangeError::Level(level));
        }
        Self::new(level, tile_number_at(coord.morton_code(), level))
    }

    /// Creates the tile of the given level that contains a degree
    /// coordinate.
    pub fn from_degrees(level: u8, coord: &impl Coordinate) -> Result<Self, RangeError> {
        Self::from_fixed(level, &FixedCoordinate::from_degrees(coord)?)
    }

    /// Returns the tile level.
    pub fn level(&self) -> u8 {
        self.level
    }

    /// Returns the tile number.
    pub fn number(&self) -> u32 {
        self.number
    }

    /// Returns the packed tile id, re-attaching the level marker bit.
    ///
    /// Level 15 ids have the marker in the sign bit and are negative.
    pub fn packed_id(&self) -> i32 {
        (self.number | (1u32 << (16 + self.level))) as i32
    }

    /// Checks whether this tile contains the given coordinate.
    ///
    /// Containment is tile-number equality at this tile's level; no
    /// geometry is computed.
    pub fn contains(&self, coord: &FixedCoordinate) -> bool {
        self.number == tile_number_at(coord.morton_code(), self.level)
    }

    /// Returns the full Morton code of the tile's south-west corner.
    pub fn south_west_morton(&self) -> i64 {
        southwest_morton(self.number, self.level)
    }

    /// Returns the bounding box of this tile.
    ///
    /// The south-west corner is decoded from the Morton code and the
    /// northern/eastern bounds are one tile span away. Corners in the
    /// negative range get a one-unit correction because the span division
    /// truncates toward zero, keeping all tiles of a level exactly the
    /// same size.
    pub fn bounding_box(&self) -> FixedRectangle {
        if self.level == 0 {
            return if self.number == 0 {
                FixedRectangle::EAST_HEMISPHERE
            } else {
                FixedRectangle::WEST_HEMISPHERE
            };
        }
        let (west, south) = deinterleave(self.south_west_morton());
        let north = south + (LATITUDE_RANGE / (1i64 << self.level)) as i32 + i32::from(south < 0);
        let east =
            west + (LONGITUDE_RANGE / (1i64 << (self.level + 1))) as i32 + i32::from(west < 0);
        FixedRectangle::from_raw(north, east, south, west)
    }

    /// Returns the center of this tile.
    ///
    /// Computed like the bounding box but with the next finer division,
    /// and memoized per instance; recomputation is bit-identical.
    pub fn center(&self) -> FixedCoordinate {
        *self.center.get_or_init(|| {
            if self.level == 0 {
                return if self.number == 0 {
                    FixedCoordinate::from_raw(MAX_LONGITUDE / 2, 0)
                } else {
                    FixedCoordinate::from_raw(MIN_LONGITUDE / 2, 0)
                };
            }
            let (west, south) = deinterleave(self.south_west_morton());
            let latitude =
                south + (LATITUDE_RANGE / (1i64 << (self.level + 1))) as i32 + i32::from(south < 0);
            let longitude =
                west + (LONGITUDE_RANGE / (1i64 << (self.level + 2))) as i32 + i32::from(west < 0);
            FixedCoordinate::from_raw(longitude, latitude)
        })
    }

    /// Creates a GeoJSON "Polygon" feature for this tile's bounding box.
    pub fn to_geojson(&self) -> geojson::Feature {
        self.bounding_box().to_geographic().to_geojson()
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "level: {} , number: {}", self.level, self.number)
    }
}
