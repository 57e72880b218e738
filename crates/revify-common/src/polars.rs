//! Polars `AnyValue` helpers.

use ::polars::prelude::{AnyValue, DataFrame, PolarsResult};

/// Converts a Polars `AnyValue` to text.
///
/// Returns an empty string for `Null`, formats floats without trailing
/// zeros and booleans as `true`/`false`.
///
/// # Examples
///
/// ```
/// use polars::prelude::AnyValue;
/// use revify_common::any_to_text;
///
/// assert_eq!(any_to_text(AnyValue::Null), "");
/// assert_eq!(any_to_text(AnyValue::Int32(42)), "42");
/// assert_eq!(any_to_text(AnyValue::String("great phone")), "great phone");
/// ```
pub fn any_to_text(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::Int8(v) => v.to_string(),
        AnyValue::Int16(v) => v.to_string(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::UInt8(v) => v.to_string(),
        AnyValue::UInt16(v) => v.to_string(),
        AnyValue::UInt32(v) => v.to_string(),
        AnyValue::UInt64(v) => v.to_string(),
        AnyValue::Float32(v) => format_numeric(f64::from(v)),
        AnyValue::Float64(v) => format_numeric(v),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::Boolean(b) => b.to_string(),
        other => other.to_string(),
    }
}

/// Formats a floating-point number without trailing fractional zeros.
///
/// ```
/// use revify_common::format_numeric;
///
/// assert_eq!(format_numeric(1.0), "1");
/// assert_eq!(format_numeric(1.50), "1.5");
/// assert_eq!(format_numeric(10.0), "10");
/// ```
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

/// Reads every cell of `name` as text, in row order.
///
/// Nulls become empty strings; the column must exist.
pub fn text_column(df: &DataFrame, name: &str) -> PolarsResult<Vec<String>> {
    let column = df.column(name)?;
    let mut values = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        values.push(any_to_text(column.get(idx).unwrap_or(AnyValue::Null)));
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::polars::prelude::{Column, IntoColumn, NamedFrom, Series};

    #[test]
    fn test_any_to_text_null() {
        assert_eq!(any_to_text(AnyValue::Null), "");
    }

    #[test]
    fn test_any_to_text_integers() {
        assert_eq!(any_to_text(AnyValue::Int64(-7)), "-7");
        assert_eq!(any_to_text(AnyValue::UInt8(3)), "3");
    }

    #[test]
    fn test_any_to_text_floats() {
        assert_eq!(any_to_text(AnyValue::Float64(4.5)), "4.5");
        assert_eq!(any_to_text(AnyValue::Float64(100.0)), "100");
        assert_eq!(any_to_text(AnyValue::Float32(2.0)), "2");
    }

    #[test]
    fn test_any_to_text_boolean() {
        assert_eq!(any_to_text(AnyValue::Boolean(true)), "true");
        assert_eq!(any_to_text(AnyValue::Boolean(false)), "false");
    }

    #[test]
    fn test_format_numeric() {
        assert_eq!(format_numeric(0.0), "0");
        assert_eq!(format_numeric(20.0), "20");
        assert_eq!(format_numeric(0.25), "0.25");
    }

    #[test]
    fn test_text_column_coerces_mixed_cells() {
        let columns: Vec<Column> = vec![
            Series::new("review".into(), vec![Some(5i64), None, Some(12)]).into_column(),
        ];
        let df = DataFrame::new(columns).unwrap();
        let values = text_column(&df, "review").unwrap();
        assert_eq!(values, vec!["5", "", "12"]);
    }

    #[test]
    fn test_text_column_missing() {
        let columns: Vec<Column> =
            vec![Series::new("mobile".into(), vec!["Pixel 8"]).into_column()];
        let df = DataFrame::new(columns).unwrap();
        assert!(text_column(&df, "review").is_err());
    }
}
