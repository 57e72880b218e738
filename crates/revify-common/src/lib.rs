//! Shared utilities for Revify crates.
//!
//! Table cells arrive from CSV with whatever type polars inferred. The
//! helpers here coerce any cell to text so callers never branch on dtype.

pub mod polars;

pub use crate::polars::{any_to_text, format_numeric, text_column};
