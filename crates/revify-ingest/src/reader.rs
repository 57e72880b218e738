//! Review CSV loading.
//!
//! Cells are read as text unless type inference is requested, so extra
//! columns pass through byte-for-byte. Header normalization and column
//! validation happen later, in the batch runner.

use std::path::Path;

use polars::prelude::{CsvReadOptions, DataFrame, SerReader};
use tracing::debug;

use crate::error::{IngestError, Result};

/// Options for reading a review CSV.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReadOptions {
    /// Let Polars infer numeric and boolean columns from the first rows.
    /// Defaults to false: every column is read as text.
    pub infer_types: bool,
}

impl ReadOptions {
    /// Number of rows Polars samples for dtype inference.
    pub const INFER_SCHEMA_ROWS: usize = 100;

    #[must_use]
    pub fn with_infer_types(mut self, enable: bool) -> Self {
        self.infer_types = enable;
        self
    }

    fn infer_schema_length(self) -> Option<usize> {
        if self.infer_types {
            Some(Self::INFER_SCHEMA_ROWS)
        } else {
            Some(0)
        }
    }
}

/// Reads a review CSV with default options.
pub fn read_review_csv(path: &Path) -> Result<DataFrame> {
    read_review_csv_with_options(path, ReadOptions::default())
}

/// Reads a review CSV into a Polars DataFrame.
pub fn read_review_csv_with_options(path: &Path, options: ReadOptions) -> Result<DataFrame> {
    if !path.is_file() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(options.infer_schema_length())
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        infer_types = options.infer_types,
        "read review csv"
    );
    Ok(df)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_reads_text_only() {
        let options = ReadOptions::default();
        assert!(!options.infer_types);
        assert_eq!(options.infer_schema_length(), Some(0));
    }

    #[test]
    fn test_infer_types_samples_rows() {
        let options = ReadOptions::default().with_infer_types(true);
        assert_eq!(
            options.infer_schema_length(),
            Some(ReadOptions::INFER_SCHEMA_ROWS)
        );
    }
}
