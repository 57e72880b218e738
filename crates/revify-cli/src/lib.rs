//! CLI library components for revify.

pub mod logging;
pub mod pipeline;
pub mod types;
