//! Error types for the codec layer.

use crate::kind::GeometryKind;

/// Error returned by [`GeometryCodec`](crate::GeometryCodec) implementations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CodecError {
    /// Payload is shorter than the fixed layout of the geometry kind.
    #[error("truncated {kind} payload: expected at least {expected} bytes, got {actual}")]
    Truncated {
        kind: GeometryKind,
        expected: usize,
        actual: usize,
    },

    /// Coordinate sequence does not match the dimension of the geometry kind.
    #[error("{kind} expects {expected} coordinates, got {actual}")]
    Arity {
        kind: GeometryKind,
        expected: usize,
        actual: usize,
    },

    /// NaN or infinite coordinates have no well-known-text representation.
    #[error("{kind} coordinate {index} is not finite")]
    NonFinite { kind: GeometryKind, index: usize },
}

/// Error returned when a typed accessor is used on a [`Value`](crate::Value)
/// holding a different variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("type mismatch: expected {expected}, got {actual}")]
pub struct ValueTypeError {
    pub expected: String,
    pub actual: &'static str,
}

impl ValueTypeError {
    pub fn new(expected: impl Into<String>, actual: &'static str) -> Self {
        Self {
            expected: expected.into(),
            actual,
        }
    }
}
