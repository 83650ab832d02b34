//! Individual value samplers for the supported field types.
//!
//! Each sampler is a stateless function over an explicit RNG. The
//! [`sample_value`] dispatcher maps a declarative [`SamplerRule`] to the
//! matching sampler.

pub mod category;
pub mod identifier;
pub mod numeric;
pub mod pattern;
pub mod person;
pub mod pt_br;
pub mod temporal;
pub mod uuid;

use crate::error::GenerateError;
use martgen_core::{CellValue, SamplerRule};
use rand::Rng;

/// Sample one value for the given rule.
pub fn sample_value<R: Rng>(rule: &SamplerRule, rng: &mut R) -> Result<CellValue, GenerateError> {
    match rule {
        SamplerRule::Cpf => Ok(CellValue::Text(identifier::cpf(rng))),

        SamplerRule::FullName => Ok(CellValue::Text(person::full_name(rng))),
        SamplerRule::Email => Ok(CellValue::Text(person::email(rng))),
        SamplerRule::Phone => Ok(CellValue::Text(person::phone(rng))),
        SamplerRule::StreetAddress => Ok(CellValue::Text(person::street_address(rng))),
        SamplerRule::City => Ok(CellValue::Text(person::city(rng))),
        SamplerRule::StateCode => Ok(CellValue::Text(person::state_code(rng))),
        SamplerRule::PostalCode => Ok(CellValue::Text(person::postal_code(rng))),
        SamplerRule::Neighborhood => Ok(CellValue::Text(person::neighborhood(rng))),
        SamplerRule::Country => Ok(CellValue::Text(person::country(rng))),
        SamplerRule::FreeText => Ok(CellValue::Text(person::free_text(rng))),

        SamplerRule::Date { start, end } => temporal::sample_date(rng, *start, *end),
        SamplerRule::DateTime { start, end } => temporal::sample_datetime(rng, *start, *end),

        SamplerRule::Amount { low, high, scale } => {
            numeric::sample_amount(rng, *low, *high, *scale)
        }
        SamplerRule::Integer { low, high } => numeric::sample_integer(rng, *low, *high),

        SamplerRule::Category { choices } => category::sample_category(rng, choices),
        SamplerRule::Boolean { p_true } => Ok(category::sample_boolean(rng, *p_true)),

        SamplerRule::Optional { inner, p_present } => {
            if rng.random_bool(*p_present) {
                sample_value(inner, rng)
            } else {
                Ok(CellValue::Null)
            }
        }

        SamplerRule::Weighted {
            primary,
            fallback,
            p_primary,
        } => {
            if rng.random_bool(*p_primary) {
                sample_value(primary, rng)
            } else {
                sample_value(fallback, rng)
            }
        }

        SamplerRule::Pattern { pattern } => {
            Ok(CellValue::Text(pattern::sample_pattern(rng, pattern)))
        }

        SamplerRule::Uuid => Ok(uuid::sample_uuid(rng)),

        SamplerRule::Value(value) => Ok(value.clone()),
    }
}
