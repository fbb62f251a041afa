use crate::core::constants::MAX_LEVEL;

/// Shift that truncates a Morton code to the `(2 * level + 1)` most
/// significant bits, which is exactly the tile number at that level.
pub(crate) fn morton_shift(level: u8) -> u32 {
    32 + (MAX_LEVEL - level) as u32 * 2
}

/// Returns the tile number at `level` for a coordinate Morton code.
///
/// Tiling is a prefix truncation of the interleaved address space: the tile
/// number is the Morton code of the tile's south-west corner shifted down
/// so that only its top `(2 * level + 1)` bits remain.
pub fn tile_number_at(code: i64, level: u8) -> u32 {
    (code >> morton_shift(level)) as u32
}

/// Reconstructs the full Morton code of the south-west corner of a tile.
///
/// Inverse of [`tile_number_at`].
pub fn southwest_morton(number: u32, level: u8) -> i64 {
    (number as i64) << morton_shift(level)
}

/// Extracts the level from a packed tile id.
///
/// The level is identified by a single marker bit at position `16 + level`;
/// the marker is always the highest set bit in that region for a valid id.
/// Returns `None` when no marker bit is present.
pub fn extract_level(packed_id: i32) -> Option<u8> {
    let bits = packed_id as u32;
    (0..=MAX_LEVEL).rev().find(|lvl| bits & (1 << (16 + lvl)) != 0)
}

/// Exclusive upper bound for tile numbers at `level` (`2^(2 * level + 1)`).
///
/// Level 0 has exactly two tiles, one per hemisphere.
pub fn max_tile_number(level: u8) -> u32 {
    1u32 << (2 * level + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_level() {
        assert_eq!(extract_level(1 << 16), Some(0));
        assert_eq!(extract_level(539636700), Some(13)); // Barcelona area tile
        assert_eq!(extract_level(-2103231037), Some(15)); // marker in the sign bit
        assert_eq!(extract_level(0), None);
        assert_eq!(extract_level(0xFFFF), None);
    }

    #[test]
    fn test_max_tile_number() {
        assert_eq!(max_tile_number(0), 2);
        assert_eq!(max_tile_number(1), 8);
        assert_eq!(max_tile_number(13), 1 << 27);
        assert_eq!(max_tile_number(15), 1 << 31);
    }

    #[test]
    fn test_shift_round_trip() {
        let code = 579221254078012839; // Eiffel Tower
        for level in 0..=MAX_LEVEL {
            let number = tile_number_at(code, level);
            assert!(number < max_tile_number(level));
            let sw = southwest_morton(number, level);
            assert_eq!(tile_number_at(sw, level), number);
        }
    }
}
