//! `glide-marker` — one marker's position/heading animation state.
//!
//! # Movement model (cancel-and-freeze)
//!
//! A [`MarkerAnimator`] runs at most one translation and one rotation at a
//! time.  Starting a new animation of either kind *freezes* the old one at
//! its instantaneous sampled value — the marker never jumps forward to the
//! superseded target and never jumps backward to where it started.  The
//! current position is a pure query over `(from, to, start, duration, now)`,
//! so callers can sample mid-flight (the route animator re-slices its path
//! from exactly that sample).
//!
//! Completions are polled, not pushed: each translation carries a
//! [`CompletionHandle`], and [`MarkerAnimator::poll_completion`] returns the
//! handle exactly once when the translation has run to its full duration.
//! A superseded translation's handle never fires, which is what lets a
//! route update invalidate an in-flight step chain by simply forgetting the
//! handle it was waiting on.
//!
//! | Module       | Contents                                   |
//! |--------------|--------------------------------------------|
//! | [`animator`] | `MarkerAnimator`                           |
//! | [`handle`]   | `CompletionHandle`                         |

pub mod animator;
pub mod handle;


pub use animator::MarkerAnimator;
pub use handle::CompletionHandle;
