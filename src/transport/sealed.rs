//! Sealed trait marker for Transport implementations.
//!
//! This module prevents external implementations of the `Transport` trait;
//! only implementations within this crate carry the request-building and
//! error-translation contract the client relies on.

pub(crate) mod private {
    /// Sealed trait marker.
    pub trait Sealed {}
}
