//! Translation completion handles.

use std::fmt;

/// Identifies one issued translation on one marker.
///
/// Handles are allocated from a per-marker counter, so within a marker they
/// are unique and monotonically increasing.  Holding a handle grants
/// nothing; it only lets the holder recognize *which* translation a
/// [`poll_completion`][crate::MarkerAnimator::poll_completion] result
/// belongs to, and to ignore completions of steps it no longer cares about.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct CompletionHandle(pub u64);

impl fmt::Display for CompletionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CompletionHandle({})", self.0)
    }
}
