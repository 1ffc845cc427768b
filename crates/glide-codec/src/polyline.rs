//! Encoded-polyline algorithm (delta-encoded 5-bit chunks).
//!
//! Each scaled integer delta is zig-zag mapped (`value << 1`, bitwise-NOT
//! when negative) and emitted little-endian in 5-bit chunks; every chunk
//! except the last carries a continuation bit (`0x20`), and all chunks are
//! offset by 63 to land in printable ASCII.

use glide_core::GeoPoint;

use crate::{CodecError, CodecResult};

/// The precision the glide engine decodes route polylines at: six decimal
/// places of a degree.
pub const PRECISION_1E6: f64 = 1e6;

/// Decode an encoded polyline into coordinates at the given precision.
///
/// # Errors
///
/// [`CodecError::InvalidByte`] for bytes outside `'?'..='~'`, and
/// [`CodecError::Truncated`] when the string ends mid-chunk or after a
/// latitude delta with no longitude delta.
pub fn decode(encoded: &str, precision: f64) -> CodecResult<Vec<GeoPoint>> {
    let bytes = encoded.as_bytes();
    let mut coords = Vec::new();
    let mut offset = 0;
    let mut lat: i64 = 0;
    let mut lon: i64 = 0;

    while offset < bytes.len() {
        let (d_lat, next) = decode_value(bytes, offset)?;
        // A latitude delta with nothing after it surfaces as Truncated here.
        let (d_lon, after) = decode_value(bytes, next)?;

        lat += d_lat;
        lon += d_lon;
        coords.push(GeoPoint::new(lat as f64 / precision, lon as f64 / precision));
        offset = after;
    }

    Ok(coords)
}

/// Encode coordinates into a polyline string at the given precision.
///
/// Inverse of [`decode`] up to the precision's rounding.
pub fn encode(coords: &[GeoPoint], precision: f64) -> String {
    let mut out = String::new();
    let mut prev_lat: i64 = 0;
    let mut prev_lon: i64 = 0;

    for point in coords {
        let lat = (point.lat * precision).round() as i64;
        let lon = (point.lon * precision).round() as i64;
        encode_value(lat - prev_lat, &mut out);
        encode_value(lon - prev_lon, &mut out);
        prev_lat = lat;
        prev_lon = lon;
    }

    out
}

// ── Chunk-level helpers ───────────────────────────────────────────────────────

/// Decode one zig-zag varint starting at `offset`; returns `(value, next_offset)`.
fn decode_value(bytes: &[u8], mut offset: usize) -> CodecResult<(i64, usize)> {
    let mut result: i64 = 0;
    let mut shift = 0u32;

    loop {
        let Some(&byte) = bytes.get(offset) else {
            return Err(CodecError::Truncated(offset));
        };
        if !(63..=126).contains(&byte) {
            return Err(CodecError::InvalidByte { byte, offset });
        }
        // A continuation run longer than an i64 holds is not a coordinate;
        // reject it before the shift leaves the value's bit range.
        if shift >= 64 {
            return Err(CodecError::Overflow(offset));
        }
        let chunk = (byte - 63) as i64;
        result |= (chunk & 0x1f) << shift;
        shift += 5;
        offset += 1;

        if chunk & 0x20 == 0 {
            break;
        }
    }

    let value = if result & 1 != 0 { !(result >> 1) } else { result >> 1 };
    Ok((value, offset))
}

/// Encode one value as zig-zag 5-bit chunks appended to `out`.
fn encode_value(value: i64, out: &mut String) {
    let mut v = if value < 0 { !(value << 1) } else { value << 1 };

    while v >= 0x20 {
        out.push((((v & 0x1f) | 0x20) as u8 + 63) as char);
        v >>= 5;
    }
    out.push((v as u8 + 63) as char);
}
