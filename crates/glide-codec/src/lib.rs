//! `glide-codec` — encoded-polyline decode/encode.
//!
//! Route geometry arrives as Google encoded-polyline strings: each
//! coordinate is scaled by a fixed precision, rounded to an integer, and
//! delta-encoded against the previous coordinate as a variable-length
//! sequence of 5-bit chunks.  The glide engine uses precision `1e6`
//! (six decimal places, ~0.1 m resolution); the codec itself takes the
//! precision as a parameter so tests can use the classic `1e5` vectors.
//!
//! | Module       | Contents                          |
//! |--------------|-----------------------------------|
//! | [`polyline`] | `decode`, `encode`                |
//! | [`error`]    | `CodecError`, `CodecResult<T>`    |

pub mod error;
pub mod polyline;


pub use error::{CodecError, CodecResult};
pub use polyline::{decode, encode, PRECISION_1E6};
