//! Result export.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use polars::prelude::{CsvWriter, DataFrame, PolarsResult, SerWriter};
use tracing::info;

use crate::error::{IngestError, Result};

/// File name used when no output path is given.
pub const DEFAULT_RESULTS_FILE: &str = "sentiment_results.csv";

/// Serialize `frame` as CSV with a header row into any writer.
pub fn write_results_to<W: Write>(frame: &mut DataFrame, writer: W) -> PolarsResult<()> {
    CsvWriter::new(writer).include_header(true).finish(frame)
}

/// Write `frame` to `path`, creating parent directories as needed.
pub fn write_results_csv(frame: &mut DataFrame, path: &Path) -> Result<PathBuf> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| IngestError::FileWrite {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let file = File::create(path).map_err(|source| IngestError::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    write_results_to(frame, &mut writer).map_err(|e| IngestError::CsvWrite {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    writer.flush().map_err(|source| IngestError::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), rows = frame.height(), "wrote results csv");
    Ok(path.to_path_buf())
}
