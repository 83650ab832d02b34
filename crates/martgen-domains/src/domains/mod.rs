//! Per-domain schema declarations.
//!
//! Each module declares the dimension and fact schema of one business
//! domain. The builders below keep the declarations compact; the actual
//! column lists are the content.

pub mod banking;
pub mod callcenter;
pub mod ecommerce;
pub mod education;
pub mod healthcare;
pub mod marketing;
pub mod realestate;
pub mod restaurant;
pub mod supplychain;

use martgen_core::{CellValue, ColumnSpec, DateSpec, SamplerRule};

pub(crate) fn col(name: &str, rule: SamplerRule) -> ColumnSpec {
    ColumnSpec::new(name, rule)
}

pub(crate) fn cat(choices: &[&str]) -> SamplerRule {
    SamplerRule::Category {
        choices: choices.iter().map(|c| CellValue::text(*c)).collect(),
    }
}

/// Choice list that includes a null option, for columns the source data
/// leaves blank on purpose.
pub(crate) fn cat_or_null(choices: &[&str]) -> SamplerRule {
    let mut values: Vec<CellValue> = choices.iter().map(|c| CellValue::text(*c)).collect();
    values.push(CellValue::Null);
    SamplerRule::Category { choices: values }
}

pub(crate) fn cat_ints(choices: &[i64]) -> SamplerRule {
    SamplerRule::Category {
        choices: choices.iter().map(|c| CellValue::Int(*c)).collect(),
    }
}

pub(crate) fn date(start: DateSpec, end: DateSpec) -> SamplerRule {
    SamplerRule::Date { start, end }
}

pub(crate) fn datetime(start: DateSpec, end: DateSpec) -> SamplerRule {
    SamplerRule::DateTime { start, end }
}

pub(crate) fn amount(low: f64, high: f64) -> SamplerRule {
    SamplerRule::Amount {
        low,
        high,
        scale: 2,
    }
}

pub(crate) fn amount_scaled(low: f64, high: f64, scale: u8) -> SamplerRule {
    SamplerRule::Amount { low, high, scale }
}

pub(crate) fn integer(low: i64, high: i64) -> SamplerRule {
    SamplerRule::Integer { low, high }
}

pub(crate) fn boolean() -> SamplerRule {
    SamplerRule::Boolean { p_true: 0.5 }
}

pub(crate) fn pattern(pattern: &str) -> SamplerRule {
    SamplerRule::Pattern {
        pattern: pattern.to_string(),
    }
}

pub(crate) fn optional(inner: SamplerRule, p_present: f64) -> SamplerRule {
    SamplerRule::Optional {
        inner: Box::new(inner),
        p_present,
    }
}

pub(crate) fn weighted(primary: SamplerRule, fallback: SamplerRule, p_primary: f64) -> SamplerRule {
    SamplerRule::Weighted {
        primary: Box::new(primary),
        fallback: Box::new(fallback),
        p_primary,
    }
}

pub(crate) fn fixed_text(value: &str) -> SamplerRule {
    SamplerRule::Value(CellValue::text(value))
}

pub(crate) fn fixed_int(value: i64) -> SamplerRule {
    SamplerRule::Value(CellValue::Int(value))
}

pub(crate) fn fixed_amount(value: f64) -> SamplerRule {
    SamplerRule::Value(CellValue::decimal(value, 2))
}
