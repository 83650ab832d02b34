//! Derived fact-column rules.
//!
//! A derivation reads the referenced dimension row and the partially built
//! fact row. Rules run in schema-declared order, so a rule may read columns
//! produced by rules declared before it.

use crate::error::GenerateError;
use crate::samplers::numeric;
use chrono::Duration;
use martgen_core::{CellValue, DeriveRule, Row};
use rand::Rng;

/// Apply one derivation rule.
pub fn apply_rule<R: Rng>(
    rule: &DeriveRule,
    dim_row: &Row,
    fact_row: &Row,
    rng: &mut R,
) -> Result<CellValue, GenerateError> {
    match rule {
        DeriveRule::CopyFromDimension { source } => dim_row
            .get(source)
            .cloned()
            .ok_or_else(|| missing(source)),

        DeriveRule::TieredAmount {
            tier_source,
            bands,
            fallback,
            scale,
        } => {
            let tier = dim_row
                .get(tier_source)
                .and_then(CellValue::as_text)
                .ok_or_else(|| missing(tier_source))?;
            let (low, high) = bands
                .iter()
                .find(|band| band.tiers.iter().any(|t| t == tier))
                .map(|band| (band.low, band.high))
                .unwrap_or(*fallback);
            numeric::sample_amount(rng, low, high, *scale)
        }

        DeriveRule::OffsetDate { base, offset_days } => {
            if offset_days.is_empty() {
                return Err(GenerateError::InvalidRange(format!(
                    "offset list for column derived from '{base}' is empty"
                )));
            }
            let days = offset_days[rng.random_range(0..offset_days.len())];
            let base_value = fact_row.get(base).ok_or_else(|| missing(base))?;
            add_days(base_value, days).ok_or_else(|| missing(base))
        }

        DeriveRule::JitterDate {
            base,
            min_days,
            max_days,
            p_present,
        } => {
            if min_days > max_days {
                return Err(GenerateError::InvalidRange(format!(
                    "day jitter low {min_days} > high {max_days}"
                )));
            }
            if !rng.random_bool(*p_present) {
                return Ok(CellValue::Null);
            }
            let days = rng.random_range(*min_days..=*max_days);
            let base_value = fact_row.get(base).ok_or_else(|| missing(base))?;
            add_days(base_value, days).ok_or_else(|| missing(base))
        }

        DeriveRule::LateFee {
            amount,
            due,
            paid,
            monthly_rate,
        } => {
            let amount_value = fact_row
                .get(amount)
                .and_then(CellValue::as_f64)
                .ok_or_else(|| missing(amount))?;
            let due_at = fact_row
                .get(due)
                .and_then(CellValue::as_datetime)
                .ok_or_else(|| missing(due))?;
            // An unpaid (null) payment column accrues no fee
            let paid_at = match fact_row.get(paid) {
                Some(CellValue::Null) => return Ok(CellValue::decimal(0.0, 2)),
                Some(value) => value.as_datetime().ok_or_else(|| missing(paid))?,
                None => return Err(missing(paid)),
            };
            let days_late = (paid_at - due_at).num_days();
            if days_late > 0 {
                let fee = amount_value * monthly_rate * days_late as f64 / 30.0;
                Ok(CellValue::decimal(fee, 2))
            } else {
                Ok(CellValue::decimal(0.0, 2))
            }
        }

        DeriveRule::RatedFee {
            base,
            rate,
            p_applied,
        } => {
            let base_value = fact_row
                .get(base)
                .and_then(CellValue::as_f64)
                .ok_or_else(|| missing(base))?;
            if rng.random_bool(*p_applied) {
                Ok(CellValue::decimal(base_value * rate, 2))
            } else {
                Ok(CellValue::decimal(0.0, 2))
            }
        }

        DeriveRule::LoyaltyPoints {
            amount,
            program_source,
            opt_out,
            min_rate,
            max_rate,
        } => {
            let program = dim_row
                .get(program_source)
                .and_then(CellValue::as_text)
                .ok_or_else(|| missing(program_source))?;
            if program == opt_out {
                return Ok(CellValue::Int(0));
            }
            let amount_value = fact_row
                .get(amount)
                .and_then(CellValue::as_f64)
                .ok_or_else(|| missing(amount))?;
            let rate = rng.random_range(*min_rate..=*max_rate);
            Ok(CellValue::Int((amount_value * rate) as i64))
        }

        DeriveRule::PairedCategory { category, pairs } => {
            let sampled = fact_row
                .get(category)
                .and_then(CellValue::as_text)
                .ok_or_else(|| missing(category))?;
            let establishments = pairs
                .iter()
                .find(|(name, _)| name == sampled)
                .map(|(_, list)| list)
                .ok_or_else(|| {
                    GenerateError::InvalidRange(format!(
                        "category '{sampled}' has no paired establishment list"
                    ))
                })?;
            if establishments.is_empty() {
                return Err(GenerateError::InvalidRange(format!(
                    "establishment list for category '{sampled}' is empty"
                )));
            }
            let idx = rng.random_range(0..establishments.len());
            Ok(CellValue::text(establishments[idx].clone()))
        }
    }
}

fn missing(column: &str) -> GenerateError {
    GenerateError::MissingColumn {
        column: column.to_string(),
    }
}

/// Shift a date or date/time cell by whole days, preserving the variant.
fn add_days(value: &CellValue, days: i64) -> Option<CellValue> {
    match value {
        CellValue::Date(d) => Some(CellValue::Date(*d + Duration::days(days))),
        CellValue::DateTime(dt) => Some(CellValue::DateTime(*dt + Duration::days(days))),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use martgen_core::TierBand;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn dim_row() -> Row {
        let mut row = Row::new();
        row.set("Tipo_Cartao", CellValue::text("Black"));
        row.set("Programa_Fidelidade", CellValue::text("Cashback"));
        row.set("Equipe", CellValue::text("Retenção"));
        row
    }

    fn fact_row() -> Row {
        let mut row = Row::new();
        row.set("Valor_Transacao", CellValue::decimal(200.0, 2));
        row.set(
            "Data_Transacao",
            CellValue::DateTime(Utc.with_ymd_and_hms(2025, 3, 10, 14, 30, 0).unwrap()),
        );
        row
    }

    #[test]
    fn test_copy_from_dimension() {
        let mut rng = StdRng::seed_from_u64(42);
        let rule = DeriveRule::CopyFromDimension {
            source: "Equipe".to_string(),
        };
        let value = apply_rule(&rule, &dim_row(), &fact_row(), &mut rng).unwrap();
        assert_eq!(value, CellValue::text("Retenção"));
    }

    #[test]
    fn test_copy_missing_column_fails() {
        let mut rng = StdRng::seed_from_u64(42);
        let rule = DeriveRule::CopyFromDimension {
            source: "Inexistente".to_string(),
        };
        assert!(matches!(
            apply_rule(&rule, &dim_row(), &fact_row(), &mut rng),
            Err(GenerateError::MissingColumn { .. })
        ));
    }

    #[test]
    fn test_tiered_amount_uses_matching_band() {
        let mut rng = StdRng::seed_from_u64(42);
        let rule = DeriveRule::TieredAmount {
            tier_source: "Tipo_Cartao".to_string(),
            bands: vec![TierBand {
                tiers: vec!["Black".to_string(), "Infinite".to_string()],
                low: 100.0,
                high: 5000.0,
            }],
            fallback: (10.0, 500.0),
            scale: 2,
        };
        for _ in 0..50 {
            let value = apply_rule(&rule, &dim_row(), &fact_row(), &mut rng).unwrap();
            let v = value.as_f64().unwrap();
            assert!((100.0..=5000.0).contains(&v));
        }
    }

    #[test]
    fn test_tiered_amount_falls_back_for_unlisted_tier() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut dim = dim_row();
        dim.set("Tipo_Cartao", CellValue::text("Sem Cartão"));
        let rule = DeriveRule::TieredAmount {
            tier_source: "Tipo_Cartao".to_string(),
            bands: vec![TierBand {
                tiers: vec!["Black".to_string()],
                low: 100.0,
                high: 5000.0,
            }],
            fallback: (10.0, 500.0),
            scale: 2,
        };
        for _ in 0..50 {
            let value = apply_rule(&rule, &dim, &fact_row(), &mut rng).unwrap();
            let v = value.as_f64().unwrap();
            assert!((10.0..=500.0).contains(&v));
        }
    }

    #[test]
    fn test_offset_date_uses_permitted_offsets() {
        let mut rng = StdRng::seed_from_u64(42);
        let rule = DeriveRule::OffsetDate {
            base: "Data_Transacao".to_string(),
            offset_days: vec![10, 15, 30],
        };
        let fact = fact_row();
        let base = fact.get("Data_Transacao").unwrap().as_datetime().unwrap();
        for _ in 0..50 {
            let value = apply_rule(&rule, &dim_row(), &fact, &mut rng).unwrap();
            let days = (value.as_datetime().unwrap() - base).num_days();
            assert!([10, 15, 30].contains(&days));
        }
    }

    #[test]
    fn test_jitter_date_absent_is_null() {
        let mut rng = StdRng::seed_from_u64(42);
        let rule = DeriveRule::JitterDate {
            base: "Data_Transacao".to_string(),
            min_days: -5,
            max_days: 15,
            p_present: 0.0,
        };
        let value = apply_rule(&rule, &dim_row(), &fact_row(), &mut rng).unwrap();
        assert_eq!(value, CellValue::Null);
    }

    #[test]
    fn test_late_fee_zero_when_paid_early() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut fact = fact_row();
        let due = Utc.with_ymd_and_hms(2025, 3, 20, 14, 30, 0).unwrap();
        fact.set("Data_Vencimento", CellValue::DateTime(due));
        fact.set(
            "Data_Pagamento",
            CellValue::DateTime(due - Duration::days(3)),
        );
        let rule = DeriveRule::LateFee {
            amount: "Valor_Transacao".to_string(),
            due: "Data_Vencimento".to_string(),
            paid: "Data_Pagamento".to_string(),
            monthly_rate: 0.15,
        };
        let value = apply_rule(&rule, &dim_row(), &fact, &mut rng).unwrap();
        assert_eq!(value.as_f64(), Some(0.0));
    }

    #[test]
    fn test_late_fee_accrues_when_paid_late() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut fact = fact_row();
        let due = Utc.with_ymd_and_hms(2025, 3, 20, 14, 30, 0).unwrap();
        fact.set("Data_Vencimento", CellValue::DateTime(due));
        fact.set(
            "Data_Pagamento",
            CellValue::DateTime(due + Duration::days(15)),
        );
        let rule = DeriveRule::LateFee {
            amount: "Valor_Transacao".to_string(),
            due: "Data_Vencimento".to_string(),
            paid: "Data_Pagamento".to_string(),
            monthly_rate: 0.15,
        };
        let value = apply_rule(&rule, &dim_row(), &fact, &mut rng).unwrap();
        // 200.00 * 0.15 * 15/30 = 15.00
        assert_eq!(value.as_f64(), Some(15.0));
    }

    #[test]
    fn test_late_fee_zero_when_unpaid() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut fact = fact_row();
        let due = Utc.with_ymd_and_hms(2025, 3, 20, 14, 30, 0).unwrap();
        fact.set("Data_Vencimento", CellValue::DateTime(due));
        fact.set("Data_Pagamento", CellValue::Null);
        let rule = DeriveRule::LateFee {
            amount: "Valor_Transacao".to_string(),
            due: "Data_Vencimento".to_string(),
            paid: "Data_Pagamento".to_string(),
            monthly_rate: 0.15,
        };
        let value = apply_rule(&rule, &dim_row(), &fact, &mut rng).unwrap();
        assert_eq!(value.as_f64(), Some(0.0));
    }

    #[test]
    fn test_loyalty_points_opt_out() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut dim = dim_row();
        dim.set("Programa_Fidelidade", CellValue::text("Nenhum"));
        let rule = DeriveRule::LoyaltyPoints {
            amount: "Valor_Transacao".to_string(),
            program_source: "Programa_Fidelidade".to_string(),
            opt_out: "Nenhum".to_string(),
            min_rate: 0.5,
            max_rate: 2.0,
        };
        let value = apply_rule(&rule, &dim, &fact_row(), &mut rng).unwrap();
        assert_eq!(value, CellValue::Int(0));
    }

    #[test]
    fn test_loyalty_points_proportional_to_amount() {
        let mut rng = StdRng::seed_from_u64(42);
        let rule = DeriveRule::LoyaltyPoints {
            amount: "Valor_Transacao".to_string(),
            program_source: "Programa_Fidelidade".to_string(),
            opt_out: "Nenhum".to_string(),
            min_rate: 0.5,
            max_rate: 2.0,
        };
        for _ in 0..50 {
            let value = apply_rule(&rule, &dim_row(), &fact_row(), &mut rng).unwrap();
            let points = value.as_i64().unwrap();
            assert!((100..=400).contains(&points));
        }
    }

    #[test]
    fn test_paired_category_stays_within_pair() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut fact = fact_row();
        fact.set("Categoria_Compra", CellValue::text("Transporte"));
        let rule = DeriveRule::PairedCategory {
            category: "Categoria_Compra".to_string(),
            pairs: vec![
                (
                    "Alimentação".to_string(),
                    vec!["Restaurante Gourmet".to_string()],
                ),
                (
                    "Transporte".to_string(),
                    vec!["Pedágio".to_string(), "Estacionamento".to_string()],
                ),
            ],
        };
        for _ in 0..20 {
            let value = apply_rule(&rule, &dim_row(), &fact, &mut rng).unwrap();
            let name = value.as_text().unwrap().to_string();
            assert!(["Pedágio", "Estacionamento"].contains(&name.as_str()));
        }
    }

    #[test]
    fn test_paired_category_unknown_category_fails() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut fact = fact_row();
        fact.set("Categoria_Compra", CellValue::text("Astrologia"));
        let rule = DeriveRule::PairedCategory {
            category: "Categoria_Compra".to_string(),
            pairs: vec![("Alimentação".to_string(), vec!["iFood".to_string()])],
        };
        assert!(matches!(
            apply_rule(&rule, &dim_row(), &fact, &mut rng),
            Err(GenerateError::InvalidRange(_))
        ));
    }
}
