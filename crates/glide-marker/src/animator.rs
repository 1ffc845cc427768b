//! The marker animator — interruptible translation and rotation.

use glide_core::{GeoPoint, Timestamp};
use glide_render::MapSurface;
use rand::{distributions::Alphanumeric, Rng};

use crate::CompletionHandle;

/// An in-flight linear translation between two coordinates.
#[derive(Debug, Clone, PartialEq)]
struct Translation {
    from:     GeoPoint,
    to:       GeoPoint,
    start:    Timestamp,
    duration: f64,
    handle:   CompletionHandle,
}

impl Translation {
    /// Elapsed fraction in `[0, 1]`.  Zero-duration translations are
    /// complete the instant they start.
    fn fraction(&self, now: Timestamp) -> f64 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (now.since(self.start) / self.duration).min(1.0)
    }
}

/// An in-flight eased rotation between two raw heading values.
#[derive(Debug, Clone, PartialEq)]
struct Rotation {
    from_deg: f64,
    to_deg:   f64,
    start:    Timestamp,
    duration: f64,
}

impl Rotation {
    fn value(&self, now: Timestamp) -> f64 {
        let f = if self.duration <= 0.0 {
            1.0
        } else {
            (now.since(self.start) / self.duration).min(1.0)
        };
        // Quadratic ease-out: fast start, settles into the target.
        let eased = f * (2.0 - f);
        self.from_deg + (self.to_deg - self.from_deg) * eased
    }
}

/// Animation state for a single point marker.
///
/// Owns the marker's committed (at-rest) position and heading plus the
/// optional in-flight translation/rotation replacing them.  All rendering
/// goes through a [`MapSurface`] passed into the methods that need it; the
/// animator itself holds no renderer reference.
pub struct MarkerAnimator {
    /// Surface identifier for the marker overlay.  Random so several markers
    /// can share one surface without colliding.
    identifier: String,

    /// Last committed (non-animating) position.
    committed: GeoPoint,

    /// Last committed heading in raw degrees (not normalized mod 360).
    committed_heading: f64,

    translation: Option<Translation>,
    rotation:    Option<Rotation>,

    /// Currently assigned icon image name.
    icon: Option<String>,

    /// Allocator for `CompletionHandle`s.
    next_handle: u64,
}

impl MarkerAnimator {
    /// Create a marker resting at `at`, heading 0°, with a fresh random
    /// identifier.  Call [`attach`][Self::attach] to make it visible.
    pub fn new(at: GeoPoint) -> Self {
        let identifier: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(30)
            .map(char::from)
            .collect();
        Self {
            identifier,
            committed: at,
            committed_heading: 0.0,
            translation: None,
            rotation: None,
            icon: None,
            next_handle: 0,
        }
    }

    /// The marker's surface identifier.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Add the marker overlay to `surface` at the committed position and
    /// assign its initial icon.
    pub fn attach(&mut self, surface: &mut impl MapSurface, icon: &str) {
        surface.add_marker(&self.identifier, self.committed);
        self.set_icon(surface, icon);
    }

    /// Assign the named icon image, skipping the surface call when the name
    /// is unchanged.
    pub fn set_icon(&mut self, surface: &mut impl MapSurface, name: &str) {
        if self.icon.as_deref() != Some(name) {
            self.icon = Some(name.to_owned());
            surface.set_marker_icon(&self.identifier, name);
        }
    }

    /// The marker's instantaneous position at `now`.
    ///
    /// Pure query: with an active translation this is the clamped per-axis
    /// lerp of `from → to`; at rest it is the committed coordinate.
    pub fn position(&self, now: Timestamp) -> GeoPoint {
        match &self.translation {
            Some(t) => t.from.lerp(t.to, t.fraction(now)),
            None => self.committed,
        }
    }

    /// The marker's instantaneous heading at `now`, in raw degrees.
    pub fn heading_at(&self, now: Timestamp) -> f64 {
        match &self.rotation {
            Some(r) => r.value(now),
            None => self.committed_heading,
        }
    }

    /// Commit `at` as the authoritative position with no animation.
    ///
    /// Cancels any active translation without firing its completion.  The
    /// route animator calls this with the mid-flight sample before
    /// re-slicing, so the marker's rest position and the new path's first
    /// coordinate are the same value.
    pub fn place(&mut self, at: GeoPoint) {
        self.translation = None;
        self.committed = at;
    }

    /// Start a linear translation to `target` over `duration` seconds.
    ///
    /// Returns the new translation's handle, or `None` when the marker is
    /// at rest exactly at `target` (nothing to animate, no completion will
    /// fire).  An active translation is frozen at its sampled position —
    /// the new animation departs from wherever the marker visually is, and
    /// the superseded translation's completion never fires.
    pub fn set_position(
        &mut self,
        target: GeoPoint,
        duration: f64,
        now: Timestamp,
    ) -> Option<CompletionHandle> {
        if self.translation.is_none() && target == self.committed {
            return None;
        }

        // Freeze the superseded translation at its instantaneous position.
        self.committed = self.position(now);
        self.translation = None;

        let handle = CompletionHandle(self.next_handle);
        self.next_handle += 1;

        self.translation = Some(Translation {
            from: self.committed,
            to: target,
            start: now,
            duration,
            handle,
        });
        Some(handle)
    }

    /// Start an eased-out rotation to `degrees` over `duration` seconds.
    ///
    /// The sweep runs from the current displayed heading to the raw numeric
    /// target — no mod-360 shortest-path logic, so 350° → 10° sweeps the
    /// long way.  An active rotation is frozen at its sampled value first.
    pub fn set_heading(&mut self, degrees: f64, duration: f64, now: Timestamp) {
        self.committed_heading = self.heading_at(now);
        self.rotation = Some(Rotation {
            from_deg: self.committed_heading,
            to_deg: degrees,
            start: now,
            duration,
        });
    }

    /// Fire the active translation's completion if it has run to its full
    /// duration by `now`.
    ///
    /// Returns the handle at most once per translation and commits the
    /// endpoint as the new rest position.  Superseded translations were
    /// already dropped by `set_position`/`place` and can never fire.  A
    /// finished rotation is retired here too (rotations have no handles —
    /// nothing chains off them).
    pub fn poll_completion(&mut self, now: Timestamp) -> Option<CompletionHandle> {
        if let Some(r) = &self.rotation {
            if now.since(r.start) >= r.duration {
                self.committed_heading = r.to_deg;
                self.rotation = None;
            }
        }

        let finished = match &self.translation {
            Some(t) => now.since(t.start) >= t.duration,
            None => false,
        };
        if !finished {
            return None;
        }

        let t = self.translation.take().unwrap();
        self.committed = t.to;
        Some(t.handle)
    }

    /// Push the current interpolated position and heading to `surface`.
    /// Hosts call this once per frame.
    pub fn sync(&self, surface: &mut impl MapSurface, now: Timestamp) {
        surface.set_marker_position(&self.identifier, self.position(now));
        surface.set_marker_rotation(&self.identifier, self.heading_at(now));
    }

    /// Cancel all active animations and remove the marker overlay.
    pub fn destroy(&mut self, surface: &mut impl MapSurface) {
        self.translation = None;
        self.rotation = None;
        surface.remove_marker(&self.identifier);
    }
}
