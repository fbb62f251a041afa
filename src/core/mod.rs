pub mod constants;
pub mod morton;
pub mod tiling;

pub use constants::{
    LATITUDE_RANGE, LONGITUDE_RANGE, MAX_LATITUDE, MAX_LEVEL, MAX_LONGITUDE, MIN_LATITUDE,
    MIN_LONGITUDE,
};
pub use morton::{deinterleave, interleave};
pub use tiling::{extract_level, max_tile_number, southwest_morton, tile_number_at};
