//! Route-subsystem error type.
//!
//! Both variants are absorbed at the `update` boundary — a malformed route
//! payload abandons that update and leaves the previous animation state
//! running.  The enum exists so the internal update path can use `?` like
//! any other fallible code.

use glide_codec::CodecError;
use thiserror::Error;

/// Errors produced while applying a route update.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("polyline decode failed: {0}")]
    Codec(#[from] CodecError),

    #[error("decoded path has no coordinates")]
    EmptyPath,
}

pub type RouteResult<T> = Result<T, RouteError>;
