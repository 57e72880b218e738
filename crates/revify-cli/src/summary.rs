use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use revify_common::text_column;
use revify_core::{
    NEGATIVE_KEYWORDS, POSITIVE_KEYWORDS, PREDICTED_SENTIMENT_COLUMN, ReviewAnalysis,
};
use revify_model::{BatchSummary, LabelStyle, SentimentLabel};

use revify_cli::types::BatchResult;

pub fn print_batch_summary(result: &BatchResult, preview_rows: usize) {
    println!("Input: {}", result.input.display());
    match &result.output {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: (dry run, nothing written)"),
    }
    if preview_rows > 0 && result.batch.summary.rows > 0 {
        print_preview(result, preview_rows);
    }
    print_label_counts(&result.batch.summary, result.label_style);
}

fn print_preview(result: &BatchResult, preview_rows: usize) {
    let sample = result.batch.frame.head(Some(preview_rows));
    let names: Vec<String> = sample
        .get_column_names_owned()
        .into_iter()
        .map(|name| name.to_string())
        .collect();
    let mut columns = Vec::with_capacity(names.len());
    for name in &names {
        match text_column(&sample, name) {
            Ok(values) => columns.push(values),
            Err(_) => return,
        }
    }

    let mut table = Table::new();
    table.set_header(names.iter().map(|name| header_cell(name)).collect::<Vec<_>>());
    apply_preview_table_style(&mut table);
    let label_index = names
        .iter()
        .position(|name| name == PREDICTED_SENTIMENT_COLUMN);
    for row in 0..sample.height() {
        let cells: Vec<Cell> = columns
            .iter()
            .enumerate()
            .map(|(idx, values)| {
                let value = values[row].as_str();
                if Some(idx) == label_index {
                    label_text_cell(value)
                } else if value.is_empty() {
                    dim_cell("-")
                } else {
                    Cell::new(value)
                }
            })
            .collect();
        table.add_row(cells);
    }
    println!();
    println!(
        "Sample data ({} of {} rows):",
        sample.height(),
        result.batch.summary.rows
    );
    println!("{table}");
}

fn print_label_counts(summary: &BatchSummary, style: LabelStyle) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Sentiment"),
        header_cell("Reviews"),
        header_cell("Share"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for label in SentimentLabel::ALL {
        table.add_row(vec![
            label_cell(label, style),
            count_cell(summary.count(label), label_color(label)),
            Cell::new(format!("{:.1}%", summary.percentage(label))),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(summary.rows).add_attribute(Attribute::Bold),
        dim_cell("-"),
    ]);
    println!();
    println!("{table}");
    if summary.empty_reviews > 0 {
        println!(
            "{} row(s) had an empty review and were marked Neutral.",
            summary.empty_reviews
        );
    }
}

pub fn print_analysis(analysis: &ReviewAnalysis, style: LabelStyle) {
    println!("Mobile: {}", analysis.mobile);
    println!("Predicted Sentiment: {}", analysis.label.render(style));
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Polarity"),
        header_cell("Hits"),
        header_cell("Keywords"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![
        Cell::new(POSITIVE_KEYWORDS.name).fg(Color::Green),
        count_cell(analysis.score.positive, Color::Green),
        keyword_cell(&analysis.positive_keywords),
    ]);
    table.add_row(vec![
        Cell::new(NEGATIVE_KEYWORDS.name).fg(Color::Red),
        count_cell(analysis.score.negative, Color::Red),
        keyword_cell(&analysis.negative_keywords),
    ]);
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_preview_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(165);
    // Keep the review column from squeezing everything else.
    let constraints: Vec<ColumnConstraint> = (0..table.column_count())
        .map(|_| ColumnConstraint::UpperBoundary(Width::Percentage(60)))
        .collect();
    table.set_constraints(constraints);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn label_color(label: SentimentLabel) -> Color {
    match label {
        SentimentLabel::Positive => Color::Green,
        SentimentLabel::Negative => Color::Red,
        SentimentLabel::Neutral => Color::Yellow,
    }
}

fn label_cell(label: SentimentLabel, style: LabelStyle) -> Cell {
    Cell::new(label.render(style))
        .fg(label_color(label))
        .add_attribute(Attribute::Bold)
}

fn label_text_cell(value: &str) -> Cell {
    match value.parse::<SentimentLabel>() {
        Ok(label) => Cell::new(value).fg(label_color(label)),
        Err(_) => Cell::new(value),
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn keyword_cell(keywords: &[&str]) -> Cell {
    if keywords.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(keywords.join(", "))
    }
}

pub fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
