/// Interleaves a fixed-point coordinate pair into a 64-bit Morton code.
///
/// The low 31 bits of the longitude land on the even code bits 0..=60 and
/// the low 31 bits of the latitude on the odd code bits 1..=61. Bit 62 is
/// set for negative longitudes and bit 61 for negative latitudes; these
/// sign markers stand in for the axis bits that do not take part in the
/// generic interleaving (latitude is a 31-bit signed quantity). Bit 63 is
/// never set.
pub fn interleave(longitude: i32, latitude: i32) -> i64 {
    let lon_bits = longitude as u32;
    let lat_bits = latitude as u32;

    let mut code = 0i64;
    for pos in 0..31 {
        if lon_bits & (1 << pos) != 0 {
            code |= 1i64 << (2 * pos);
        }
        if lat_bits & (1 << pos) != 0 {
            code |= 1i64 << (2 * pos + 1);
        }
    }
    if longitude < 0 {
        code |= 1i64 << 62;
    }
    if latitude < 0 {
        code |= 1i64 << 61;
    }
    code
}

/// De-interleaves a 64-bit Morton code back into `(longitude, latitude)`.
///
/// Longitude bit `p` reads code bit `2p` for `p` in 0..=31 (bit 62 carries
/// the longitude sign), latitude bit `p` reads code bit `2p + 1` for `p` in
/// 0..=30. The latitude is then sign-extended from 31 to 32 bits by copying
/// bit 30 into bit 31.
pub fn deinterleave(code: i64) -> (i32, i32) {
    let mut lon_bits = 0u32;
    let mut lat_bits = 0u32;
    for pos in 0..32 {
        if code & (1i64 << (2 * pos)) != 0 {
            lon_bits |= 1 << pos;
        }
        if pos < 31 && code & (1i64 << (2 * pos + 1)) != 0 {
            lat_bits |= 1 << pos;
        }
    }
    if lat_bits & (1 << 30) != 0 {
        lat_bits |= 1 << 31;
    }
    (lon_bits as i32, lat_bits as i32)
}
