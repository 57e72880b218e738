use std::io;

use anyhow::{Context, Result};
use comfy_table::{Cell, CellAlignment, Table};
use tracing::{debug, info};

use revify_cli::logging::redact_value;
use revify_cli::pipeline::{BatchOptions, resolve_review_text, run_batch};
use revify_core::{
    KNOWN_MOBILES, NEGATIVE_KEYWORDS, POSITIVE_KEYWORDS, ReviewRequest, analyze_review,
};
use revify_ingest::ReadOptions;
use revify_model::LabelStyle;

use crate::cli::{AnalyzeArgs, BatchArgs};
use crate::summary::{
    apply_table_style, dim_cell, header_cell, print_analysis, print_batch_summary,
};

fn label_style(glyphs: bool) -> LabelStyle {
    if glyphs {
        LabelStyle::Decorated
    } else {
        LabelStyle::Plain
    }
}

pub fn run_analyze(args: AnalyzeArgs) -> Result<()> {
    let review = resolve_review_text(args.review, io::stdin().lock()).context("read review")?;
    debug!(review = %redact_value(&review), "analyzing review");
    let request = ReviewRequest {
        review: &review,
        custom_mobile: args.mobile.as_deref(),
        selected_mobile: args.pick,
    };
    let analysis = analyze_review(&request)?;
    info!(mobile = %analysis.mobile, label = %analysis.label, "review analyzed");
    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&analysis).context("serialize analysis")?
        );
    } else {
        print_analysis(&analysis, label_style(args.glyphs));
    }
    Ok(())
}

/// Run a batch and report. Returns the number of classified rows.
pub fn run_batch_command(args: &BatchArgs) -> Result<usize> {
    let options = BatchOptions {
        output: args.output.clone(),
        dry_run: args.dry_run,
        label_style: label_style(args.glyphs),
        read_options: ReadOptions::default().with_infer_types(args.infer_types),
    };
    let result = run_batch(&args.input, &options)?;
    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&result.batch.summary).context("serialize summary")?
        );
    } else {
        print_batch_summary(&result, args.preview);
    }
    Ok(result.batch.summary.rows)
}

pub fn run_mobiles() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec![header_cell("#"), header_cell("Mobile")]);
    apply_table_style(&mut table);
    if let Some(column) = table.column_mut(0) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    for (idx, mobile) in KNOWN_MOBILES.iter().enumerate() {
        table.add_row(vec![Cell::new(idx + 1), Cell::new(mobile)]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_keywords() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell(POSITIVE_KEYWORDS.name),
        header_cell(NEGATIVE_KEYWORDS.name),
    ]);
    apply_table_style(&mut table);
    let rows = POSITIVE_KEYWORDS.len().max(NEGATIVE_KEYWORDS.len());
    for idx in 0..rows {
        let cell = |word: Option<&&str>| match word {
            Some(word) => Cell::new(word),
            None => dim_cell("-"),
        };
        table.add_row(vec![
            cell(POSITIVE_KEYWORDS.words.get(idx)),
            cell(NEGATIVE_KEYWORDS.words.get(idx)),
        ]);
    }
    println!("{table}");
    Ok(())
}
