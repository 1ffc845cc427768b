//! `glide-render` — the rendering collaborator seam.
//!
//! The animation engine never draws anything itself.  Every visual side
//! effect goes through the [`MapSurface`] trait: named line overlays for the
//! walked and target paths, and a point marker whose position, rotation, and
//! icon the engine keeps current.  Hosts implement `MapSurface` over their
//! map renderer; tests use [`RecordingSurface`] to assert on the exact call
//! sequence without any rendering stack.
//!
//! | Module      | Contents                                      |
//! |-------------|-----------------------------------------------|
//! | [`surface`] | `MapSurface`, `NoopSurface`                   |
//! | [`record`]  | `RecordingSurface`, `SurfaceOp`               |

pub mod record;
pub mod surface;


pub use record::{RecordingSurface, SurfaceOp};
pub use surface::{MapSurface, NoopSurface};
