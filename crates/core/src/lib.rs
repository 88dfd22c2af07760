//! Core types for the market-insights pipeline.
//!
//! This crate provides the types shared across all other crates:
//! - Price observations and per-ticker series
//! - Derived metric points and summary rows
//! - Common error types

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::*;
