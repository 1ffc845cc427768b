//! The `MapSurface` trait — everything the engine asks of a map renderer.

use glide_core::GeoPoint;

/// Rendering operations the animation engine needs from its host.
///
/// Overlay and marker identifiers are plain strings chosen by the engine
/// (stable per overlay, random per marker).  Calls are idempotent in the
/// sense the engine relies on: `set_line` with an id that already exists
/// replaces that overlay's geometry, and `set_marker_position` /
/// `set_marker_rotation` overwrite the displayed transform.
pub trait MapSurface {
    /// Create or replace the line overlay `id` with the given geometry.
    fn set_line(&mut self, id: &str, coords: &[GeoPoint]);

    /// Remove the line overlay `id`, if present.
    fn remove_line(&mut self, id: &str);

    /// Add the point marker `id` at an initial coordinate.
    fn add_marker(&mut self, id: &str, at: GeoPoint);

    /// Remove the point marker `id`, if present.
    fn remove_marker(&mut self, id: &str);

    /// Move the point marker `id` to a coordinate.
    fn set_marker_position(&mut self, id: &str, at: GeoPoint);

    /// Rotate the point marker `id`'s icon to `degrees` (raw numeric value,
    /// not normalized mod 360).
    fn set_marker_rotation(&mut self, id: &str, degrees: f64);

    /// Assign the named icon image to the point marker `id`.
    fn set_marker_icon(&mut self, id: &str, image: &str);
}

/// A [`MapSurface`] that does nothing.  Use for headless hosts or when a
/// call site needs a surface but no rendering should happen.
pub struct NoopSurface;

impl MapSurface for NoopSurface {
    fn set_line(&mut self, _id: &str, _coords: &[GeoPoint]) {}
    fn remove_line(&mut self, _id: &str) {}
    fn add_marker(&mut self, _id: &str, _at: GeoPoint) {}
    fn remove_marker(&mut self, _id: &str) {}
    fn set_marker_position(&mut self, _id: &str, _at: GeoPoint) {}
    fn set_marker_rotation(&mut self, _id: &str, _degrees: f64) {}
    fn set_marker_icon(&mut self, _id: &str, _image: &str) {}
}
