//! The route animator — episode lifecycle and the step algorithm.

use glide_codec::PRECISION_1E6;
use glide_core::{GeoPoint, Timestamp};
use glide_marker::{CompletionHandle, MarkerAnimator};
use glide_render::MapSurface;

use crate::slice::slice_from;
use crate::{RouteError, RouteResult};

/// Surface id of the line overlay showing the path still to be walked.
pub const WALKED_LINE_ID: &str = "walked-line";
/// Surface id of the line overlay showing the target/guide path.
pub const TARGET_LINE_ID: &str = "target-line";

/// Routes whose end-to-end span exceeds this are fast-forwarded instead of
/// walked waypoint-by-waypoint.  The comparison is strict — a span of
/// exactly 1000 m still walks.
const FAST_FORWARD_SPAN_M: f64 = 1000.0;
/// Duration of the single fast-forward jump to the route's end.
const FAST_FORWARD_SECS: f64 = 0.3;
/// Duration of every heading sweep issued while stepping.
const HEADING_SECS: f64 = 2.0;

/// Seconds-per-metre rate for a route of the given end-to-end span.
///
/// Shorter routes animate slower per metre so small local adjustments stay
/// visible instead of flickering past.
pub fn step_rate(total_span_m: f64) -> f64 {
    if total_span_m > 300.0 {
        0.010
    } else if total_span_m > 150.0 {
        0.020
    } else if total_span_m > 100.0 {
        0.035
    } else if total_span_m > 55.0 {
        0.105
    } else if total_span_m > 30.0 {
        0.135
    } else {
        0.160
    }
}

/// Walks one marker along a route, re-planning from the marker's live
/// position on every update.
///
/// Hosts push new route data through [`update`][Self::update] and call
/// [`poll`][Self::poll] once per frame; everything else is internal.
pub struct RouteAnimator {
    marker: MarkerAnimator,

    /// The path still to be walked in the current episode.
    remaining: Vec<GeoPoint>,

    /// The guide path, rendered but never walked.
    target: Vec<GeoPoint>,

    /// Index into `remaining` of the step the walk has reached.  Strictly
    /// increasing within one episode; reset to 0 by every update.
    cursor: usize,

    /// Episode generation counter, bumped by every applied update.
    episode: u64,

    /// Handle of the in-flight step translation the chain is waiting on.
    /// `None` when the episode has finished, fast-forwarded, or been
    /// superseded.
    pending: Option<CompletionHandle>,
}

impl RouteAnimator {
    /// Bind an animator to `marker`.  No overlays are touched until the
    /// first update.
    pub fn new(marker: MarkerAnimator) -> Self {
        Self {
            marker,
            remaining: Vec::new(),
            target: Vec::new(),
            cursor: 0,
            episode: 0,
            pending: None,
        }
    }

    pub fn marker(&self) -> &MarkerAnimator {
        &self.marker
    }

    pub fn marker_mut(&mut self) -> &mut MarkerAnimator {
        &mut self.marker
    }

    /// The path still to be walked.
    pub fn remaining(&self) -> &[GeoPoint] {
        &self.remaining
    }

    /// The guide path.
    pub fn target_path(&self) -> &[GeoPoint] {
        &self.target
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of updates that have been applied (failed updates don't count).
    pub fn episode(&self) -> u64 {
        self.episode
    }

    /// `true` while a step translation is in flight.
    pub fn is_walking(&self) -> bool {
        self.pending.is_some()
    }

    /// Apply a new `(route, target route)` pair, both as encoded polylines
    /// at precision 1e6.
    ///
    /// Samples the marker's live position, commits it, re-slices the route
    /// from there to its end, and starts a fresh walk episode.  A payload
    /// that fails to decode (or decodes to an empty path) abandons the
    /// update and leaves the previous episode running — route updates are
    /// advisory and the next good one supersedes everything anyway.
    pub fn update(
        &mut self,
        surface: &mut impl MapSurface,
        line: &str,
        target_line: &str,
        now: Timestamp,
    ) {
        let _ = self.try_update(surface, line, target_line, now);
    }

    fn try_update(
        &mut self,
        surface: &mut impl MapSurface,
        line: &str,
        target_line: &str,
        now: Timestamp,
    ) -> RouteResult<()> {
        let route = glide_codec::decode(line, PRECISION_1E6)?;
        let target = glide_codec::decode(target_line, PRECISION_1E6)?;
        let Some(&route_end) = route.last() else {
            return Err(RouteError::EmptyPath);
        };
        if target.is_empty() {
            return Err(RouteError::EmptyPath);
        }

        // Wherever the marker visually is right now becomes its committed
        // position and the start of the new path — no snap.
        let sample = self.marker.position(now);
        self.marker.place(sample);

        self.remaining = if sample == route_end {
            route
        } else {
            let mut sliced = slice_from(&route, sample, route_end);
            if sliced.first() != Some(&sample) {
                sliced.insert(0, sample);
            }
            sliced
        };
        self.target = target;
        self.cursor = 0;
        self.episode += 1;
        self.pending = None;

        self.step(now);

        surface.set_line(WALKED_LINE_ID, &self.remaining);
        surface.set_line(TARGET_LINE_ID, &self.target);
        Ok(())
    }

    /// Advance the engine.  Hosts call this once per frame.
    ///
    /// Continues the step chain when the step the episode is waiting on has
    /// run to completion, then pushes the marker's interpolated transform
    /// to the surface.  Completions that do not match `pending` — a
    /// fast-forward jump, or a step superseded by a newer update — are
    /// dropped; the chain only ever advances from the live
    /// `cursor`/`remaining` state.
    pub fn poll(&mut self, surface: &mut impl MapSurface, now: Timestamp) {
        if let Some(done) = self.marker.poll_completion(now) {
            if self.pending == Some(done) {
                self.pending = None;
                self.step(now);
            }
        }
        self.marker.sync(surface, now);
    }

    /// Remove both line overlays and the marker; abandons any in-flight
    /// walk.
    pub fn destroy(&mut self, surface: &mut impl MapSurface) {
        self.pending = None;
        surface.remove_line(WALKED_LINE_ID);
        surface.remove_line(TARGET_LINE_ID);
        self.marker.destroy(surface);
    }

    // ── Step algorithm ────────────────────────────────────────────────────

    /// Issue the next step of the walk (or finish the episode).
    ///
    /// Zero-length steps — duplicate adjacent coordinates — have nothing to
    /// animate and are consumed inline so the walk keeps moving instead of
    /// waiting for a completion that can never fire.
    fn step(&mut self, now: Timestamp) {
        // A path that starts and ends at the same coordinate collapses to
        // its two endpoints: there is nowhere to walk through.
        if let (Some(&first), Some(&last)) = (self.remaining.first(), self.remaining.last()) {
            if first == last && self.remaining.len() != 2 {
                self.remaining = vec![first, last];
            }
        }

        loop {
            if self.cursor + 1 >= self.remaining.len() {
                return; // episode complete
            }

            let end = self.remaining[self.remaining.len() - 1];
            let total_span = self.remaining[0].distance_m(end);

            // Waypoint-by-waypoint stepping only makes sense for local
            // routes; a long span gets one quick jump to the end instead of
            // a minutes-long animation chain.
            if total_span > FAST_FORWARD_SPAN_M {
                self.marker.set_position(end, FAST_FORWARD_SECS, now);
                return;
            }

            let from = self.remaining[self.cursor];
            let to = self.remaining[self.cursor + 1];

            let segment_span = from.distance_m(to);
            let duration = step_rate(total_span) * segment_span;

            if from != to {
                self.marker.set_heading(from.bearing_to(to), HEADING_SECS, now);
            }

            let handle = self.marker.set_position(to, duration, now);
            self.cursor += 1;

            match handle {
                Some(h) => {
                    self.pending = Some(h);
                    return;
                }
                None => continue, // no-op step, keep walking
            }
        }
    }
}
