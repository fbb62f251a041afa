/// Error type for out-of-range inputs.
///
/// Every failure in this crate is a construction-time range violation; no
/// operation on an already constructed value can fail.
#[derive(Debug, Clone, PartialEq)]
pub enum RangeError {
    /// A degree longitude outside [-180, 180].
    Longitude(f64),
    /// A degree latitude outside [-90, 90].
    Latitude(f64),
    /// A fixed-point latitude outside [-2^30, 2^30 - 1].
    FixedLatitude(i64),
    /// A tile level outside [0, 15].
    Level(u8),
    /// A tile number too large for its level.
    TileNumber { level: u8, number: u32 },
    /// A packed tile id with no level marker bit.
    PackedId(i32),
}

impl std::fmt::Display for RangeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RangeError::Longitude(lon) => {
                write!(
                    f,
                    "The longitude value {} exceeds the valid range of [-180, 180]",
                    lon
                )
            }
            RangeError::Latitude(lat) => {
                write!(
                    f,
                    "The latitude value {} exceeds the valid range of [-90, 90]",
                    lat
                )
            }
            RangeError::FixedLatitude(lat) => {
                write!(
                    f,
                    "The fixed-point latitude value {} exceeds the valid range of [-2^30, 2^30 - 1]",
                    lat
                )
            }
            RangeError::Level(level) => {
                write!(f, "The tile level {} exceeds the range [0, 15]", level)
            }
            RangeError::TileNumber { level, number } => {
                write!(
                    f,
                    "Invalid tile number {} for level {}: numbers 0..{} are allowed",
                    number,
                    level,
                    (1u64 << (2 * level + 1)) - 1
                )
            }
            RangeError::PackedId(id) => {
                write!(f, "Invalid packed tile id {}: no level marker bit present", id)
            }
        }
    }
}

impl std::error::Error for RangeError {}
