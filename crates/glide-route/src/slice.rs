//! Geodesic path slicing — extract the sub-path between two coordinates.
//!
//! Equivalent of Turf's `lineSlice`: project both cut coordinates onto the
//! nearest point of the polyline, then return `[projection(from), interior
//! vertices…, projection(to)]`.  Projections are computed per segment in a
//! local equirectangular metre frame, which is accurate at the sub-metre
//! level for the segment lengths routes are built from.

use glide_core::GeoPoint;

/// Metres per degree of latitude (and of longitude at the equator).
const METERS_PER_DEG: f64 = 111_195.0;

/// Where a coordinate lands on a path: segment index, fraction along that
/// segment, the on-path point, and the offset distance in the local frame.
#[derive(Debug, Clone, Copy)]
struct Projection {
    seg:    usize,
    t:      f64,
    point:  GeoPoint,
    dist_m: f64,
}

/// Slice `path` between the on-path points nearest `from` and `to`.
///
/// The result starts at `from`'s projection and ends at `to`'s projection;
/// when a cut coordinate already lies on the path (the route animator's
/// mid-flight sample always does) the projection is that coordinate itself.
/// A cut at the very start returns the whole path; cutting `from == to`
/// at the end yields the two-point `[end, end]` path.  Paths with fewer
/// than two coordinates are returned unchanged.
pub fn slice_from(path: &[GeoPoint], from: GeoPoint, to: GeoPoint) -> Vec<GeoPoint> {
    if path.len() < 2 {
        return path.to_vec();
    }

    let mut start = project(path, from);
    let mut stop = project(path, to);
    if (stop.seg, stop.t) < (start.seg, start.t) {
        std::mem::swap(&mut start, &mut stop);
    }

    let mut out = vec![start.point];
    for vertex in &path[start.seg + 1..=stop.seg] {
        out.push(*vertex);
    }
    if out.last() != Some(&stop.point) {
        out.push(stop.point);
    }
    // A slice never degenerates below two coordinates.
    if out.len() == 1 {
        out.push(stop.point);
    }
    out
}

/// Nearest point to `target` across all segments of `path`.
fn project(path: &[GeoPoint], target: GeoPoint) -> Projection {
    let mut best = project_on_segment(path[0], path[1], 0, target);
    for seg in 1..path.len() - 1 {
        let candidate = project_on_segment(path[seg], path[seg + 1], seg, target);
        if candidate.dist_m < best.dist_m {
            best = candidate;
        }
    }
    best
}

/// Project `target` onto the segment `a → b` in a local metre frame
/// centred on `a`.
fn project_on_segment(a: GeoPoint, b: GeoPoint, seg: usize, target: GeoPoint) -> Projection {
    let lat_scale = METERS_PER_DEG;
    let lon_scale = METERS_PER_DEG * a.lat.to_radians().cos();

    let abx = (b.lon - a.lon) * lon_scale;
    let aby = (b.lat - a.lat) * lat_scale;
    let apx = (target.lon - a.lon) * lon_scale;
    let apy = (target.lat - a.lat) * lat_scale;

    let len_sq = abx * abx + aby * aby;
    let t = if len_sq == 0.0 {
        0.0 // zero-length segment projects to its single point
    } else {
        ((apx * abx + apy * aby) / len_sq).clamp(0.0, 1.0)
    };

    let point = a.lerp(b, t);
    let dx = apx - abx * t;
    let dy = apy - aby * t;

    Projection { seg, t, point, dist_m: (dx * dx + dy * dy).sqrt() }
}
