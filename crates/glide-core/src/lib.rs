//! `glide-core` — foundational types for the glide route-animation engine.
//!
//! This crate is a dependency of every other `glide-*` crate.  It has no
//! `glide-*` dependencies and no required external ones (only optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                                          |
//! |-----------|---------------------------------------------------|
//! | [`geo`]   | `GeoPoint`, haversine distance, bearing, lerp     |
//! | [`clock`] | `Timestamp`, `AnimClock`                          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod clock;
pub mod geo;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use clock::{AnimClock, Timestamp};
pub use geo::GeoPoint;
