//! Scalar cell values produced by the samplers.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single cell of a generated table.
///
/// `CellValue` is the raw, source-agnostic value produced by a sampler. It
/// carries enough type information to render consistently to CSV and JSONL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Boolean value
    Bool(bool),

    /// 64-bit signed integer
    Int(i64),

    /// Fixed-point number stored as a pre-formatted string with its scale
    Decimal {
        /// String representation of the value, e.g. `"1320.00"`
        value: String,
        /// Number of digits after the decimal point
        scale: u8,
    },

    /// String value
    Text(String),

    /// UUID value
    Uuid(Uuid),

    /// Calendar date without time-of-day
    Date(NaiveDate),

    /// Date/time in UTC
    DateTime(DateTime<Utc>),

    /// Null value
    Null,
}

impl CellValue {
    /// Create a decimal value rounded to `scale` places.
    pub fn decimal(value: f64, scale: u8) -> Self {
        Self::Decimal {
            value: format!("{value:.prec$}", prec = scale as usize),
            scale,
        }
    }

    /// Create a text value.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Check if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Try to get this value as an i64.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get this value as an f64.
    ///
    /// Integers and decimals both coerce, so derivation rules can read a
    /// monetary column without caring which representation produced it.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(i) => Some(*i as f64),
            Self::Decimal { value, .. } => value.parse().ok(),
            _ => None,
        }
    }

    /// Try to get this value as a string slice.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this value as a date.
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(d) => Some(*d),
            Self::DateTime(dt) => Some(dt.date_naive()),
            _ => None,
        }
    }

    /// Try to get this value as a UTC date/time.
    pub fn as_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::DateTime(dt) => Some(*dt),
            _ => None,
        }
    }

    /// Render this value as a single delimited-file field.
    ///
    /// Null renders as the empty field. Quoting and escaping are the
    /// writer's concern, not this method's.
    pub fn to_csv_field(&self) -> String {
        match self {
            Self::Bool(b) => b.to_string(),
            Self::Int(i) => i.to_string(),
            Self::Decimal { value, .. } => value.clone(),
            Self::Text(s) => s.clone(),
            Self::Uuid(u) => u.to_string(),
            Self::Date(d) => d.format("%Y-%m-%d").to_string(),
            Self::DateTime(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
            Self::Null => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_formatting() {
        assert_eq!(
            CellValue::decimal(1320.0, 2),
            CellValue::Decimal {
                value: "1320.00".to_string(),
                scale: 2
            }
        );
        assert_eq!(
            CellValue::decimal(0.06382, 4),
            CellValue::Decimal {
                value: "0.0638".to_string(),
                scale: 4
            }
        );
    }

    #[test]
    fn test_as_f64_coercion() {
        assert_eq!(CellValue::Int(25).as_f64(), Some(25.0));
        assert_eq!(CellValue::decimal(10.0, 2).as_f64(), Some(10.0));
        assert_eq!(CellValue::text("x").as_f64(), None);
    }

    #[test]
    fn test_null_renders_as_empty_field() {
        assert!(CellValue::Null.is_null());
        assert_eq!(CellValue::Null.to_csv_field(), "");
    }

    #[test]
    fn test_date_rendering() {
        let d = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(CellValue::Date(d).to_csv_field(), "2024-03-09");

        let dt = d.and_hms_opt(13, 5, 0).unwrap().and_utc();
        assert_eq!(CellValue::DateTime(dt).to_csv_field(), "2024-03-09 13:05:00");
    }
}
