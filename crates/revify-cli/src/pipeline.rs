//! Batch pipeline stages: ingest, classify, output.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span, trace};

use revify_common::text_column;
use revify_core::{ClassifiedBatch, MOBILE_COLUMN, REVIEW_COLUMN, classify_batch};
use revify_ingest::{
    DEFAULT_RESULTS_FILE, ReadOptions, read_review_csv_with_options, write_results_csv,
};
use revify_model::LabelStyle;

use crate::logging::redact_value;
use crate::types::BatchResult;

/// Settings for one batch run.
#[derive(Debug, Clone, Default)]
pub struct BatchOptions {
    /// Output path; `sentiment_results.csv` in the working directory when unset.
    pub output: Option<PathBuf>,
    pub dry_run: bool,
    pub label_style: LabelStyle,
    pub read_options: ReadOptions,
}

impl BatchOptions {
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_RESULTS_FILE))
    }
}

/// Read, classify and (unless dry-running) write one review CSV.
pub fn run_batch(input: &Path, options: &BatchOptions) -> Result<BatchResult> {
    let span = info_span!("batch", input = %input.display());
    let _guard = span.enter();

    // Stage 1: ingest
    let ingest_start = Instant::now();
    let frame = read_review_csv_with_options(input, options.read_options)
        .context("Error reading CSV")?;
    info!(
        rows = frame.height(),
        columns = frame.width(),
        duration_ms = ingest_start.elapsed().as_millis(),
        "ingest complete"
    );

    // Stage 2: classify
    let mut batch = classify_batch(frame)?;
    if options.label_style != LabelStyle::Plain {
        batch
            .apply_label_style(options.label_style)
            .context("format sentiment labels")?;
    }
    trace_rows(&batch);

    // Stage 3: output
    let output = if options.dry_run {
        info!("dry run; skipping output");
        None
    } else {
        let path = options.output_path();
        Some(
            write_results_csv(&mut batch.frame, &path)
                .with_context(|| format!("write results to {}", path.display()))?,
        )
    };

    Ok(BatchResult {
        input: input.to_path_buf(),
        output,
        label_style: options.label_style,
        batch,
    })
}

fn trace_rows(batch: &ClassifiedBatch) {
    if !tracing::enabled!(tracing::Level::TRACE) {
        return;
    }
    let (Ok(mobiles), Ok(reviews)) = (
        text_column(&batch.frame, MOBILE_COLUMN),
        text_column(&batch.frame, REVIEW_COLUMN),
    ) else {
        return;
    };
    for (row, ((mobile, review), label)) in mobiles
        .iter()
        .zip(&reviews)
        .zip(&batch.labels)
        .enumerate()
    {
        trace!(
            row,
            mobile = %redact_value(mobile),
            review = %redact_value(review),
            label = %label,
            "classified row"
        );
    }
}

/// Take the review from the argument, or read all of `input` when absent.
///
/// Blank text is returned as-is; `analyze_review` rejects it after the
/// mobile has been resolved.
pub fn resolve_review_text<R: Read>(
    arg: Option<String>,
    mut input: R,
) -> revify_model::Result<String> {
    if let Some(review) = arg {
        return Ok(review);
    }
    let mut buffer = String::new();
    input.read_to_string(&mut buffer)?;
    Ok(buffer)
}
