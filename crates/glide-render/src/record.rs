//! An in-memory `MapSurface` that records every call, for tests.

use glide_core::GeoPoint;

use crate::MapSurface;

/// One recorded surface call, with owned arguments.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceOp {
    SetLine { id: String, coords: Vec<GeoPoint> },
    RemoveLine { id: String },
    AddMarker { id: String, at: GeoPoint },
    RemoveMarker { id: String },
    SetMarkerPosition { id: String, at: GeoPoint },
    SetMarkerRotation { id: String, degrees: f64 },
    SetMarkerIcon { id: String, image: String },
}

/// Records the full call sequence so tests can assert ordering as well as
/// final state.
#[derive(Default)]
pub struct RecordingSurface {
    pub ops: Vec<SurfaceOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent geometry pushed for line overlay `id`, if any.
    pub fn last_line(&self, id: &str) -> Option<&[GeoPoint]> {
        self.ops.iter().rev().find_map(|op| match op {
            SurfaceOp::SetLine { id: line_id, coords } if line_id == id => {
                Some(coords.as_slice())
            }
            _ => None,
        })
    }

    /// The most recent position pushed for marker `id`, if any.
    pub fn last_marker_position(&self, id: &str) -> Option<GeoPoint> {
        self.ops.iter().rev().find_map(|op| match op {
            SurfaceOp::SetMarkerPosition { id: marker_id, at } if marker_id == id => Some(*at),
            _ => None,
        })
    }

    /// The most recent rotation pushed for marker `id`, if any.
    pub fn last_marker_rotation(&self, id: &str) -> Option<f64> {
        self.ops.iter().rev().find_map(|op| match op {
            SurfaceOp::SetMarkerRotation { id: marker_id, degrees } if marker_id == id => {
                Some(*degrees)
            }
            _ => None,
        })
    }
}

impl MapSurface for RecordingSurface {
    fn set_line(&mut self, id: &str, coords: &[GeoPoint]) {
        self.ops.push(SurfaceOp::SetLine { id: id.to_owned(), coords: coords.to_vec() });
    }

    fn remove_line(&mut self, id: &str) {
        self.ops.push(SurfaceOp::RemoveLine { id: id.to_owned() });
    }

    fn add_marker(&mut self, id: &str, at: GeoPoint) {
        self.ops.push(SurfaceOp::AddMarker { id: id.to_owned(), at });
    }

    fn remove_marker(&mut self, id: &str) {
        self.ops.push(SurfaceOp::RemoveMarker { id: id.to_owned() });
    }

    fn set_marker_position(&mut self, id: &str, at: GeoPoint) {
        self.ops.push(SurfaceOp::SetMarkerPosition { id: id.to_owned(), at });
    }

    fn set_marker_rotation(&mut self, id: &str, degrees: f64) {
        self.ops.push(SurfaceOp::SetMarkerRotation { id: id.to_owned(), degrees });
    }

    fn set_marker_icon(&mut self, id: &str, image: &str) {
        self.ops.push(SurfaceOp::SetMarkerIcon { id: id.to_owned(), image: image.to_owned() });
    }
}
