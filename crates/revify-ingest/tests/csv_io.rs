//! Integration tests for review CSV reading and result export.

use std::fs;
use std::path::{Path, PathBuf};

use polars::prelude::DataType;
use tempfile::TempDir;

use revify_core::{PREDICTED_SENTIMENT_COLUMN, classify_batch};
use revify_ingest::{
    IngestError, ReadOptions, read_review_csv, read_review_csv_with_options, write_results_csv,
    write_results_to,
};

fn write_csv(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write csv");
    path
}

#[test]
fn reads_every_column_as_text_by_default() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(dir.path(), "reviews.csv", "mobile,review,rating\nX,good,5\nY,,4.50\n");

    let df = read_review_csv(&path).expect("read csv");

    assert_eq!(df.height(), 2);
    assert_eq!(df.width(), 3);
    let rating = df.column("rating").unwrap();
    assert_eq!(rating.dtype(), &DataType::String);
    assert_eq!(rating.get(1).unwrap().to_string().trim_matches('"'), "4.50");
    assert!(df.column("review").unwrap().get(1).unwrap().is_null());
}

#[test]
fn infers_types_when_asked() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(dir.path(), "reviews.csv", "mobile,review,rating\nX,good,5.5\nY,bad,4\n");

    let df = read_review_csv_with_options(&path, ReadOptions::default().with_infer_types(true))
        .expect("read csv");

    assert_eq!(df.column("rating").unwrap().dtype(), &DataType::Float64);
}

#[test]
fn missing_file_is_reported() {
    let dir = TempDir::new().unwrap();
    let err = read_review_csv(&dir.path().join("absent.csv")).unwrap_err();
    assert!(matches!(err, IngestError::FileNotFound { .. }));
}

#[test]
fn empty_file_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(dir.path(), "empty.csv", "");
    let err = read_review_csv(&path).unwrap_err();
    assert!(matches!(err, IngestError::CsvParse { .. }));
}

#[test]
fn classified_csv_output() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(
        dir.path(),
        "reviews.csv",
        "Mobile ,REVIEW,Price\n\
         Pixel 8,\"Worst phone ever, keeps heating and lagging\",699\n\
         OnePlus 12,Excellent camera and smooth performance,\n\
         Nothing Phone 2a,,399\n",
    );

    let df = read_review_csv(&path).expect("read csv");
    let mut batch = classify_batch(df).expect("classify");
    let mut buffer = Vec::new();
    write_results_to(&mut batch.frame, &mut buffer).expect("write csv");
    let csv = String::from_utf8(buffer).expect("utf8");

    insta::assert_snapshot!(csv.trim_end(), @r#"
    mobile,review,price,Predicted_Sentiment
    Pixel 8,"Worst phone ever, keeps heating and lagging",699,Negative
    OnePlus 12,Excellent camera and smooth performance,,Positive
    Nothing Phone 2a,,399,Neutral
    "#);
}

#[test]
fn writes_results_into_new_directory() {
    let dir = TempDir::new().unwrap();
    let input = write_csv(dir.path(), "reviews.csv", "mobile,review\nX,love it\nY,hate it\n");
    let output = dir.path().join("out").join("sentiment_results.csv");

    let df = read_review_csv(&input).expect("read csv");
    let mut batch = classify_batch(df).expect("classify");
    let written = write_results_csv(&mut batch.frame, &output).expect("write csv");

    assert_eq!(written, output);
    let round = read_review_csv(&output).expect("read results");
    assert_eq!(round.height(), 2);
    assert!(round.column(PREDICTED_SENTIMENT_COLUMN).is_ok());
}
