//! Categorical and boolean samplers.

use crate::error::GenerateError;
use martgen_core::CellValue;
use rand::Rng;

/// Sample one element uniformly from a fixed choice list.
///
/// An empty list is a schema bug and fails with
/// [`GenerateError::InvalidRange`].
pub fn sample_category<R: Rng>(
    rng: &mut R,
    choices: &[CellValue],
) -> Result<CellValue, GenerateError> {
    if choices.is_empty() {
        return Err(GenerateError::InvalidRange(
            "category choice list is empty".to_string(),
        ));
    }
    let idx = rng.random_range(0..choices.len());
    Ok(choices[idx].clone())
}

/// Sample a boolean that is `true` with probability `p_true`.
pub fn sample_boolean<R: Rng>(rng: &mut R, p_true: f64) -> CellValue {
    CellValue::Bool(rng.random_bool(p_true))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_empty_choices_fail() {
        let mut rng = StdRng::seed_from_u64(42);
        let result = sample_category(&mut rng, &[]);
        assert!(matches!(result, Err(GenerateError::InvalidRange(_))));
    }

    #[test]
    fn test_single_choice_always_returned() {
        let mut rng = StdRng::seed_from_u64(42);
        let choices = vec![CellValue::text("A")];
        for _ in 0..20 {
            assert_eq!(
                sample_category(&mut rng, &choices).unwrap(),
                CellValue::text("A")
            );
        }
    }

    #[test]
    fn test_choice_membership() {
        let mut rng = StdRng::seed_from_u64(42);
        let choices = vec![
            CellValue::text("Manhã"),
            CellValue::text("Tarde"),
            CellValue::text("Noite"),
        ];
        for _ in 0..50 {
            let value = sample_category(&mut rng, &choices).unwrap();
            assert!(choices.contains(&value));
        }
    }

    #[test]
    fn test_boolean_extremes() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..10 {
            assert_eq!(sample_boolean(&mut rng, 1.0), CellValue::Bool(true));
            assert_eq!(sample_boolean(&mut rng, 0.0), CellValue::Bool(false));
        }
    }
}
