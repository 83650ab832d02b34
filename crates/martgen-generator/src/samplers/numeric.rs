//! Numeric value samplers.

use crate::error::GenerateError;
use martgen_core::CellValue;
use rand::Rng;

/// Sample a uniformly distributed amount in `[low, high]`, rounded to
/// `scale` decimal places.
///
/// Equal bounds always yield exactly `low`; `low > high` is a schema bug
/// and fails with [`GenerateError::InvalidRange`].
pub fn sample_amount<R: Rng>(
    rng: &mut R,
    low: f64,
    high: f64,
    scale: u8,
) -> Result<CellValue, GenerateError> {
    if low > high {
        return Err(GenerateError::InvalidRange(format!(
            "amount low {low} > high {high}"
        )));
    }
    let value = if low == high {
        low
    } else {
        rng.random_range(low..=high)
    };
    Ok(CellValue::decimal(value, scale))
}

/// Sample a uniformly distributed integer in `[low, high]`.
pub fn sample_integer<R: Rng>(rng: &mut R, low: i64, high: i64) -> Result<CellValue, GenerateError> {
    if low > high {
        return Err(GenerateError::InvalidRange(format!(
            "integer low {low} > high {high}"
        )));
    }
    Ok(CellValue::Int(rng.random_range(low..=high)))
}
