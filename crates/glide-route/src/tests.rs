//! Unit tests for route slicing and the step algorithm.

use glide_codec::{encode, PRECISION_1E6};
use glide_core::{GeoPoint, Timestamp};
use glide_marker::MarkerAnimator;
use glide_render::{RecordingSurface, SurfaceOp};

use crate::{slice_from, step_rate, RouteAnimator, TARGET_LINE_ID, WALKED_LINE_ID};

fn p(lat: f64, lon: f64) -> GeoPoint {
    GeoPoint::new(lat, lon)
}

fn t(secs: f64) -> Timestamp {
    Timestamp(secs)
}

fn line(coords: &[GeoPoint]) -> String {
    encode(coords, PRECISION_1E6)
}

/// An animator whose marker rests at `at`, plus a recording surface.
fn animator_at(at: GeoPoint) -> (RouteAnimator, RecordingSurface) {
    (RouteAnimator::new(MarkerAnimator::new(at)), RecordingSurface::new())
}

/// Equatorial route with vertices every 0.001° of longitude (~111.2 m).
fn equator_route(points: usize) -> Vec<GeoPoint> {
    (0..points).map(|i| p(0.0, i as f64 * 0.001)).collect()
}

#[cfg(test)]
mod slicing {
    use super::*;

    #[test]
    fn cut_at_start_returns_full_path() {
        let path = equator_route(4);
        let sliced = slice_from(&path, path[0], path[3]);
        assert_eq!(sliced, path);
    }

    #[test]
    fn cut_mid_segment_starts_at_interpolated_point() {
        let path = equator_route(4);
        let mid = path[0].lerp(path[1], 0.5);
        let sliced = slice_from(&path, mid, path[3]);

        assert!((sliced[0].lon - mid.lon).abs() < 1e-12);
        assert_eq!(sliced.last(), Some(&path[3]));
        // Interior vertices B and C survive.
        assert!(sliced.contains(&path[1]));
        assert!(sliced.contains(&path[2]));
    }

    #[test]
    fn cut_at_end_collapses_to_two_points() {
        let path = equator_route(3);
        let sliced = slice_from(&path, path[2], path[2]);
        assert_eq!(sliced, vec![path[2], path[2]]);
    }

    #[test]
    fn off_path_cut_projects_onto_nearest_segment() {
        let path = equator_route(3);
        // Slightly north of the midpoint of the second segment.
        let off = p(0.0001, 0.0015);
        let sliced = slice_from(&path, off, path[2]);

        assert!((sliced[0].lat).abs() < 1e-9, "projection should drop to the line");
        assert!((sliced[0].lon - 0.0015).abs() < 1e-9);
    }

    #[test]
    fn short_path_returned_unchanged() {
        let path = vec![p(0.0, 0.0)];
        assert_eq!(slice_from(&path, p(1.0, 1.0), p(2.0, 2.0)), path);
    }
}

#[cfg(test)]
mod speed_tiers {
    use super::*;

    #[test]
    fn rate_table_boundaries() {
        // Each boundary belongs to the slower (lower) tier: comparisons are
        // strict greater-than.
        assert_eq!(step_rate(300.1), 0.010);
        assert_eq!(step_rate(300.0), 0.020);
        assert_eq!(step_rate(150.1), 0.020);
        assert_eq!(step_rate(150.0), 0.035);
        assert_eq!(step_rate(100.0), 0.105);
        assert_eq!(step_rate(55.0), 0.135);
        assert_eq!(step_rate(30.0), 0.160);
        assert_eq!(step_rate(0.0), 0.160);
    }
}

#[cfg(test)]
mod update {
    use super::*;

    #[test]
    fn publishes_both_overlays() {
        let route = equator_route(3);
        let target = equator_route(5);
        let (mut anim, mut surface) = animator_at(route[0]);

        anim.update(&mut surface, &line(&route), &line(&target), t(0.0));

        assert_eq!(surface.last_line(WALKED_LINE_ID), Some(anim.remaining()));
        assert_eq!(surface.last_line(TARGET_LINE_ID), Some(target.as_slice()));
    }

    #[test]
    fn decode_failure_retains_prior_state() {
        let route = equator_route(3);
        let (mut anim, mut surface) = animator_at(route[0]);
        anim.update(&mut surface, &line(&route), &line(&route), t(0.0));

        let remaining_before = anim.remaining().to_vec();
        let cursor_before = anim.cursor();
        let ops_before = surface.ops.len();

        // ' ' is outside the encodable byte range.
        anim.update(&mut surface, "bad polyline", &line(&route), t(0.5));

        assert_eq!(anim.episode(), 1, "failed update must not start an episode");
        assert_eq!(anim.remaining(), remaining_before);
        assert_eq!(anim.cursor(), cursor_before);
        assert_eq!(surface.ops.len(), ops_before, "failed update must not publish");
        assert!(anim.is_walking(), "in-flight episode must keep running");
    }

    #[test]
    fn overlong_chunk_payload_is_absorbed_like_any_decode_failure() {
        // A continuation run longer than a coordinate delta can hold must be
        // rejected at the decode boundary — never applied, never a panic.
        let route = equator_route(3);
        let (mut anim, mut surface) = animator_at(route[0]);
        anim.update(&mut surface, &line(&route), &line(&route), t(0.0));

        let remaining_before = anim.remaining().to_vec();
        let overlong = "~".repeat(14);
        anim.update(&mut surface, &overlong, &line(&route), t(0.5));

        assert_eq!(anim.episode(), 1);
        assert_eq!(anim.remaining(), remaining_before);
        assert!(anim.is_walking(), "in-flight episode must keep running");
    }

    #[test]
    fn empty_polyline_is_treated_as_decode_failure() {
        let route = equator_route(3);
        let (mut anim, mut surface) = animator_at(route[0]);
        anim.update(&mut surface, &line(&route), &line(&route), t(0.0));

        let remaining_before = anim.remaining().to_vec();
        anim.update(&mut surface, "", &line(&route), t(0.5));
        assert_eq!(anim.remaining(), remaining_before);
    }

    #[test]
    fn reslices_from_mid_flight_sample() {
        // Walk A→B→C→D; interrupt halfway through the first step.  The new
        // remaining path must start at the marker's interpolated position,
        // not at A or B.
        let route = equator_route(4);
        let (mut anim, mut surface) = animator_at(route[0]);
        let encoded = line(&route);
        anim.update(&mut surface, &encoded, &encoded, t(0.0));
        assert_eq!(anim.cursor(), 1);

        let span = route[0].distance_m(route[3]);
        let step_secs = step_rate(span) * route[0].distance_m(route[1]);
        let halfway = t(step_secs / 2.0);
        let mid = route[0].lerp(route[1], 0.5);
        assert_eq!(anim.marker().position(halfway), mid);

        anim.update(&mut surface, &encoded, &encoded, halfway);

        assert_eq!(anim.episode(), 2);
        assert_eq!(anim.remaining()[0], mid);
        assert_eq!(anim.remaining().last(), Some(&route[3]));
        assert_eq!(anim.marker().position(halfway), mid, "commit must not snap");
        assert_eq!(anim.cursor(), 1, "new episode starts stepping at once");

        // The superseded step's completion never double-advances the walk.
        let cursor_after = anim.cursor();
        anim.poll(&mut surface, t(step_secs / 2.0 + 1e-4));
        assert_eq!(anim.cursor(), cursor_after);
    }

    #[test]
    fn degenerate_route_collapses_and_terminates() {
        let a = p(10.0, 20.0);
        let (mut anim, mut surface) = animator_at(a);
        let encoded = line(&[a, a, a]);

        anim.update(&mut surface, &encoded, &encoded, t(0.0));

        assert_eq!(anim.remaining(), &[a, a]);
        assert_eq!(anim.cursor(), 1);
        assert!(!anim.is_walking());
        assert_eq!(surface.last_line(WALKED_LINE_ID), Some([a, a].as_slice()));
    }
}

#[cfg(test)]
mod stepping {
    use super::*;

    #[test]
    fn three_point_episode_walks_to_completion() {
        // Total span ≈ 222 m → tier rate 0.020 s/m; each ~111 m segment
        // takes ≈ 2.22 s; bearing along the equator heading east is 90°.
        let route = equator_route(3);
        let (mut anim, mut surface) = animator_at(route[0]);
        let encoded = line(&route);

        anim.update(&mut surface, &encoded, &encoded, t(0.0));
        assert_eq!(anim.cursor(), 1);
        assert!(anim.is_walking());

        let step_secs = step_rate(route[0].distance_m(route[2])) * route[0].distance_m(route[1]);
        assert!((step_secs - 2.224).abs() < 0.01, "got {step_secs}");
        assert!((anim.marker().heading_at(t(2.0)) - 90.0).abs() < 1e-6);

        // Not done yet just before the duration elapses.
        anim.poll(&mut surface, t(step_secs - 0.01));
        assert_eq!(anim.cursor(), 1);

        // First completion chains the second (final) step.
        anim.poll(&mut surface, t(step_secs + 0.01));
        assert_eq!(anim.cursor(), 2);
        assert!(anim.is_walking());
        assert_eq!(anim.marker().position(t(step_secs + 0.01)), route[1]);

        // Second completion ends the episode at the last index.
        anim.poll(&mut surface, t(2.0 * step_secs + 0.1));
        assert_eq!(anim.cursor(), 2);
        assert!(!anim.is_walking());
        assert_eq!(anim.marker().position(t(10.0)), route[2]);
    }

    #[test]
    fn long_route_fast_forwards_in_one_jump() {
        // ~5 km span: one 0.3 s translation straight to the end, no bearing
        // update, no step chain.
        let route: Vec<GeoPoint> = (0..46).map(|i| p(0.0, i as f64 * 0.001)).collect();
        let end = *route.last().unwrap();
        let (mut anim, mut surface) = animator_at(route[0]);
        let encoded = line(&route);

        anim.update(&mut surface, &encoded, &encoded, t(0.0));

        assert!(!anim.is_walking());
        assert_eq!(anim.marker().heading_at(t(5.0)), 0.0, "no heading update");
        // Mid-jump the marker is between start and end; at 0.3 s it arrives.
        let mid = anim.marker().position(t(0.15));
        assert!(mid.lon > 0.0 && mid.lon < end.lon);
        assert_eq!(anim.marker().position(t(0.3)), end);

        // The jump's completion is not a chained step and gets dropped.
        anim.poll(&mut surface, t(0.4));
        assert_eq!(anim.cursor(), 0);
        assert!(!anim.is_walking());
    }

    #[test]
    fn fast_forward_threshold_is_strict() {
        // ~999.98 m span walks normally...
        let under = vec![p(0.0, 0.0), p(0.008993, 0.0)];
        let (mut anim, mut surface) = animator_at(under[0]);
        anim.update(&mut surface, &line(&under), &line(&under), t(0.0));
        assert!(anim.is_walking(), "span under 1000 m must step");

        // ...while ~1000.75 m fast-forwards.
        let over = vec![p(0.0, 0.0), p(0.009, 0.0)];
        let (mut anim, mut surface) = animator_at(over[0]);
        anim.update(&mut surface, &line(&over), &line(&over), t(0.0));
        assert!(!anim.is_walking(), "span over 1000 m must jump");
        assert_eq!(anim.marker().position(t(0.3)), over[1]);
    }

    #[test]
    fn duplicate_adjacent_waypoints_skip_heading_and_keep_walking() {
        let a = p(0.0, 0.0);
        let b = p(0.0, 0.001);
        let route = vec![a, a, b];
        let (mut anim, mut surface) = animator_at(a);

        anim.update(&mut surface, &line(&route), &line(&route), t(0.0));

        // The zero-length A→A step is consumed inline; the walk is already
        // on the A→B step with its eastward heading.
        assert_eq!(anim.cursor(), 2);
        assert!(anim.is_walking());
        assert!((anim.marker().heading_at(t(2.0)) - 90.0).abs() < 1e-6);
    }
}

#[cfg(test)]
mod lifecycle {
    use super::*;

    #[test]
    fn poll_syncs_marker_transform() {
        let route = equator_route(3);
        let (mut anim, mut surface) = animator_at(route[0]);
        anim.update(&mut surface, &line(&route), &line(&route), t(0.0));

        anim.poll(&mut surface, t(1.0));
        let id = anim.marker().identifier().to_owned();
        let pos = surface.last_marker_position(&id).unwrap();
        assert!(pos.lon > 0.0 && pos.lon < 0.001, "mid-flight sample expected");
        assert!(surface.last_marker_rotation(&id).is_some());
    }

    #[test]
    fn destroy_removes_overlays_and_marker() {
        let route = equator_route(3);
        let (mut anim, mut surface) = animator_at(route[0]);
        anim.update(&mut surface, &line(&route), &line(&route), t(0.0));

        anim.destroy(&mut surface);

        assert!(!anim.is_walking());
        let removed: Vec<_> = surface
            .ops
            .iter()
            .filter(|op| {
                matches!(op, SurfaceOp::RemoveLine { .. } | SurfaceOp::RemoveMarker { .. })
            })
            .collect();
        assert_eq!(removed.len(), 3);

        // Abandoned: nothing advances after destruction.
        anim.poll(&mut surface, t(100.0));
        assert_eq!(anim.cursor(), 1);
    }
}
