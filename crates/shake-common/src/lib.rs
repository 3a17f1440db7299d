//! Shake common types, errors, and configuration.
//!
//! This crate provides foundational pieces shared across shake modules:
//! - Structured error types with stable codes and categories
//! - Engine configuration loading and validation
//! - Output format specifications

pub mod config;
pub mod error;
pub mod output;

pub use config::{load_config, EngineConfig};
pub use error::{Error, ErrorCategory, Result};
pub use output::OutputFormat;
