//! Error types for the shake hazard engine.
//!
//! Structured error handling with:
//! - Stable error codes for machine parsing
//! - Category classification for error grouping
//! - A serializable structured form for agent output
//!
//! Every degenerate-request condition (unknown model, bad IMT, empty logic
//! tree, zero weight sum, unsupported distance measure) maps to the
//! `Request` category: the computation is pure and deterministic, so none of
//! these are retryable and all of them are the caller's to fix.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for shake operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error categories for grouping related errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// Malformed or degenerate caller input (the "bad request" bucket).
    Request,
    /// Engine configuration errors.
    Config,
    /// File I/O and serialization errors.
    Io,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCategory::Request => write!(f, "request"),
            ErrorCategory::Config => write!(f, "config"),
            ErrorCategory::Io => write!(f, "io"),
        }
    }
}

/// Errors produced by the hazard core.
#[derive(Debug, Error)]
pub enum Error {
    // Request errors (10-19)
    #[error("ground-motion model not found: {code}")]
    NotFound { code: String },

    #[error("invalid intensity measure type: {input:?}")]
    InvalidImt { input: String },

    #[error("model {code} requires unsupported distance measures {missing:?}; only 'rrup' can be synthesized")]
    UnsupportedParameters { code: String, missing: Vec<String> },

    #[error("model {code} has no coefficients for {imt}")]
    UnsupportedImt { code: String, imt: String },

    #[error("logic tree is empty")]
    EmptyLogicTree,

    #[error("empty input: {what}")]
    EmptyInput { what: &'static str },

    #[error("logic-tree weights sum to {sum}, expected a positive finite value")]
    ZeroWeightSum { sum: f64 },

    // Configuration errors (20-29)
    #[error("configuration error: {0}")]
    Config(String),

    // I/O errors (30-39)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Returns the stable error code, grouped by category:
    /// - 10-19: request errors
    /// - 20-29: configuration errors
    /// - 30-39: I/O errors
    pub fn code(&self) -> u32 {
        match self {
            Error::NotFound { .. } => 10,
            Error::InvalidImt { .. } => 11,
            Error::UnsupportedParameters { .. } => 12,
            Error::UnsupportedImt { .. } => 13,
            Error::EmptyLogicTree => 14,
            Error::EmptyInput { .. } => 15,
            Error::ZeroWeightSum { .. } => 16,
            Error::Config(_) => 20,
            Error::Io(_) => 30,
            Error::Json(_) => 31,
        }
    }

    /// Returns the error category for grouping and filtering.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::NotFound { .. }
            | Error::InvalidImt { .. }
            | Error::UnsupportedParameters { .. }
            | Error::UnsupportedImt { .. }
            | Error::EmptyLogicTree
            | Error::EmptyInput { .. }
            | Error::ZeroWeightSum { .. } => ErrorCategory::Request,

            Error::Config(_) => ErrorCategory::Config,

            Error::Io(_) | Error::Json(_) => ErrorCategory::Io,
        }
    }

    /// Whether the caller can fix this by changing the request.
    pub fn is_bad_request(&self) -> bool {
        self.category() == ErrorCategory::Request
    }

    /// Structured form for agent-facing output.
    pub fn to_structured(&self) -> StructuredError {
        StructuredError {
            code: self.code(),
            category: self.category(),
            message: self.to_string(),
        }
    }
}

/// Serializable error payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuredError {
    pub code: u32,
    pub category: ErrorCategory,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_errors_classify_as_bad_request() {
        let errs = [
            Error::NotFound { code: "X".into() },
            Error::InvalidImt { input: "??".into() },
            Error::EmptyLogicTree,
            Error::EmptyInput { what: "imls" },
            Error::ZeroWeightSum { sum: 0.0 },
        ];
        for e in errs {
            assert!(e.is_bad_request(), "{e}");
            assert_eq!(e.category(), ErrorCategory::Request);
        }
    }

    #[test]
    fn codes_are_grouped_by_category() {
        assert_eq!(Error::NotFound { code: "A".into() }.code(), 10);
        assert_eq!(Error::Config("bad".into()).code(), 20);
        let io = Error::Io(std::io::Error::new(std::io::ErrorKind::Other, "x"));
        assert_eq!(io.code(), 30);
    }

    #[test]
    fn structured_form_round_trips() {
        let e = Error::UnsupportedParameters {
            code: "ToroEtAl2002".into(),
            missing: vec!["rjb".into()],
        };
        let s = e.to_structured();
        let json = serde_json::to_string(&s).unwrap();
        let back: StructuredError = serde_json::from_str(&json).unwrap();
        assert_eq!(back.code, 12);
        assert_eq!(back.category, ErrorCategory::Request);
        assert!(back.message.contains("rjb"));
    }
}
