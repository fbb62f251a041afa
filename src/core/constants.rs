/// Maximum fixed-point longitude value (180°).
pub const MAX_LONGITUDE: i32 = i32::MAX;

/// Minimum fixed-point longitude value (-180°).
pub const MIN_LONGITUDE: i32 = i32::MIN;

/// Maximum fixed-point latitude value (90°).
///
/// Latitude spans half the degree range of longitude, so it only uses half
/// the integer range. This keeps one coordinate unit at the same angular
/// step (360/2^32 degrees) on both axes.
pub const MAX_LATITUDE: i32 = i32::MAX / 2;

/// Minimum fixed-point latitude value (-90°).
pub const MIN_LATITUDE: i32 = i32::MIN / 2;

/// Full longitude span in coordinate units (2^32 - 1).
pub const LONGITUDE_RANGE: i64 = MAX_LONGITUDE as i64 - MIN_LONGITUDE as i64;

/// Full latitude span in coordinate units (2^31 - 1).
pub const LATITUDE_RANGE: i64 = MAX_LATITUDE as i64 - MIN_LATITUDE as i64;

/// Maximum tile level.
pub const MAX_LEVEL: u8 = 15;
