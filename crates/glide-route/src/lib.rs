//! `glide-route` — drives a marker along a route, step by step.
//!
//! # Walk model
//!
//! A [`RouteAnimator`] owns one [`MarkerAnimator`][glide_marker::MarkerAnimator]
//! and a pair of coordinate paths: the *remaining* path still to be walked
//! and a *target* path rendered as a guide but never walked.  Each
//! [`update`][RouteAnimator::update] starts a fresh **episode**: the marker's
//! live (possibly mid-animation) position is sampled and committed, the
//! route is re-sliced from that sample to its end, and the step algorithm
//! walks the sliced path one segment at a time — each segment's duration
//! taken from a distance-tier table so short local routes and long spans
//! stay visually proportionate.
//!
//! Steps chain through translation completions: the animator remembers the
//! [`CompletionHandle`][glide_marker::CompletionHandle] of the step it
//! issued, and [`poll`][RouteAnimator::poll] continues the walk when that
//! exact handle fires.  A newer `update` simply forgets the handle, so a
//! stale completion can never advance the new episode.
//!
//! | Module       | Contents                                         |
//! |--------------|--------------------------------------------------|
//! | [`animator`] | `RouteAnimator`, speed tiers, overlay ids        |
//! | [`slice`]    | `slice_from` — geodesic path slicing             |
//! | [`error`]    | `RouteError`, `RouteResult<T>`                   |

pub mod animator;
pub mod error;
pub mod slice;

#[cfg(test)]
mod tests;

pub use animator::{step_rate, RouteAnimator, TARGET_LINE_ID, WALKED_LINE_ID};
pub use error::{RouteError, RouteResult};
pub use slice::slice_from;
