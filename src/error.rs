//! Error types for the FermaStat firmware.
//!
//! The tick path is total over its integer domains and has no error type at
//! all; the only fallible surface is the parameter store adapter. Variants
//! are `Copy` so they pass through call sites without allocation.

use core::fmt;

/// Errors from parameter store operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamError {
    /// Stored blob failed deserialization.
    Corrupted,
    /// A parameter failed range validation.
    /// The `&'static str` describes which field and why.
    ValidationFailed(&'static str),
    /// Generic I/O error from the storage backend.
    Io,
}

impl fmt::Display for ParamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Corrupted => write!(f, "parameter blob corrupted"),
            Self::ValidationFailed(msg) => write!(f, "validation failed: {}", msg),
            Self::Io => write!(f, "I/O error"),
        }
    }
}
