//! Review table ingestion and export.

pub mod error;
pub mod reader;
pub mod writer;

pub use error::{IngestError, Result};
pub use reader::{ReadOptions, read_review_csv, read_review_csv_with_options};
pub use writer::{DEFAULT_RESULTS_FILE, write_results_csv, write_results_to};
