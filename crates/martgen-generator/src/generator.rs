//! Table materialization from declarative schemas.

use crate::derive;
use crate::error::GenerateError;
use crate::samplers::sample_value;
use martgen_core::{DimensionSchema, FactColumnKind, FactSchema, Row, Table};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use tracing::debug;

/// Attempts per key value before giving up on table-level uniqueness.
pub const KEY_RETRY_LIMIT: u32 = 10;

/// Table generator owning the random source.
///
/// The RNG is owned and threaded explicitly through every sampling call, so
/// seeded generators are fully reproducible and parallel callers simply use
/// independently seeded instances.
pub struct TableGenerator {
    rng: StdRng,
}

impl TableGenerator {
    /// Create a generator with a fixed seed, for reproducible runs.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a generator seeded from the OS entropy source.
    pub fn from_os_rng() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Materialize a dimension table.
    ///
    /// Every column is sampled independently per its rule. Key-column values
    /// are regenerated on collision with keys already issued in this table,
    /// up to [`KEY_RETRY_LIMIT`] attempts, then the run fails with
    /// [`GenerateError::KeyGeneration`]. A row count of zero yields an empty
    /// table with the correct headers.
    pub fn generate_dimension(
        &mut self,
        schema: &DimensionSchema,
        row_count: u64,
    ) -> Result<Table, GenerateError> {
        let mut table =
            Table::new(&schema.table, schema.column_names()).with_key_column(&schema.key_column);
        let mut issued: HashSet<String> = HashSet::with_capacity(row_count as usize);

        for _ in 0..row_count {
            let mut row = Row::new();
            for column in &schema.columns {
                let value = if column.name == schema.key_column {
                    self.sample_unique_key(schema, &mut issued)?
                } else {
                    sample_value(&column.rule, &mut self.rng)?
                };
                row.set(column.name.clone(), value);
            }
            table.push(row);
        }

        Ok(table)
    }

    /// Materialize a fact table against an already-generated dimension table.
    ///
    /// Each fact row uniformly selects one dimension row (with replacement),
    /// samples all independent columns, then applies derivation rules in
    /// declared order; the foreign-key column receives the selected row's
    /// key value. Fails with [`GenerateError::EmptyReference`] when the
    /// dimension table has no rows, for any requested count.
    pub fn generate_facts(
        &mut self,
        schema: &FactSchema,
        dimension: &Table,
        row_count: u64,
    ) -> Result<Table, GenerateError> {
        if dimension.is_empty() {
            return Err(GenerateError::EmptyReference {
                table: dimension.name.clone(),
            });
        }
        let key_column = dimension.key_column.as_deref().ok_or_else(|| {
            GenerateError::MissingColumn {
                column: format!("key column of dimension table '{}'", dimension.name),
            }
        })?;

        let mut table = Table::new(&schema.table, schema.column_names());

        for generated in 0..row_count {
            let dim_row = &dimension.rows[self.rng.random_range(0..dimension.rows.len())];
            let mut row = Row::new();

            // Foreign key and independent columns first
            for column in &schema.columns {
                match &column.kind {
                    FactColumnKind::ForeignKey => {
                        let key = dim_row.get(key_column).cloned().ok_or_else(|| {
                            GenerateError::MissingColumn {
                                column: key_column.to_string(),
                            }
                        })?;
                        row.set(column.name.clone(), key);
                    }
                    FactColumnKind::Sampled(rule) => {
                        row.set(column.name.clone(), sample_value(rule, &mut self.rng)?);
                    }
                    FactColumnKind::Derived(_) => {}
                }
            }

            // Derivations in declared order; later rules may read earlier ones
            for column in &schema.columns {
                if let FactColumnKind::Derived(rule) = &column.kind {
                    let value = derive::apply_rule(rule, dim_row, &row, &mut self.rng)?;
                    row.set(column.name.clone(), value);
                }
            }

            table.push(row);

            if (generated + 1) % 10_000 == 0 {
                debug!("generated {} fact rows for '{}'", generated + 1, schema.table);
            }
        }

        Ok(table)
    }

    /// Sample the key column until the value is unused in this table.
    fn sample_unique_key(
        &mut self,
        schema: &DimensionSchema,
        issued: &mut HashSet<String>,
    ) -> Result<martgen_core::CellValue, GenerateError> {
        let rule = schema
            .columns
            .iter()
            .find(|c| c.name == schema.key_column)
            .map(|c| &c.rule)
            .ok_or_else(|| GenerateError::MissingColumn {
                column: schema.key_column.clone(),
            })?;

        for _ in 0..KEY_RETRY_LIMIT {
            let value = sample_value(rule, &mut self.rng)?;
            let rendered = value.to_csv_field();
            if rendered.is_empty() {
                continue;
            }
            if issued.insert(rendered) {
                return Ok(value);
            }
        }

        Err(GenerateError::KeyGeneration {
            table: schema.table.clone(),
            attempts: KEY_RETRY_LIMIT,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use martgen_core::{
        CellValue, ColumnSpec, DateSpec, DeriveRule, FactColumn, SamplerRule,
    };

    fn dimension_schema() -> DimensionSchema {
        DimensionSchema {
            table: "clientes".to_string(),
            key_column: "CPF".to_string(),
            columns: vec![
                ColumnSpec::new("CPF", SamplerRule::Cpf),
                ColumnSpec::new("Nome", SamplerRule::FullName),
                ColumnSpec::new(
                    "Turno",
                    SamplerRule::Category {
                        choices: vec![
                            CellValue::text("Manhã"),
                            CellValue::text("Tarde"),
                            CellValue::text("Noite"),
                        ],
                    },
                ),
            ],
        }
    }

    fn fact_schema() -> FactSchema {
        FactSchema {
            table: "transacoes".to_string(),
            columns: vec![
                FactColumn::foreign_key("CPF"),
                FactColumn::sampled("Transacao_ID", SamplerRule::Uuid),
                FactColumn::sampled(
                    "Data_Transacao",
                    SamplerRule::DateTime {
                        start: DateSpec::YearsAgo(1),
                        end: DateSpec::Today,
                    },
                ),
                FactColumn::derived(
                    "Data_Vencimento",
                    DeriveRule::OffsetDate {
                        base: "Data_Transacao".to_string(),
                        offset_days: vec![10, 15, 30],
                    },
                ),
                FactColumn::derived(
                    "Data_Pagamento",
                    DeriveRule::JitterDate {
                        base: "Data_Vencimento".to_string(),
                        min_days: -5,
                        max_days: 15,
                        p_present: 1.0,
                    },
                ),
            ],
        }
    }

    #[test]
    fn test_dimension_row_count_and_columns() {
        let mut generator = TableGenerator::new(42);
        let table = generator.generate_dimension(&dimension_schema(), 25).unwrap();

        assert_eq!(table.len(), 25);
        assert_eq!(table.columns, vec!["CPF", "Nome", "Turno"]);
        assert_eq!(table.key_column.as_deref(), Some("CPF"));
        for row in &table.rows {
            for column in &table.columns {
                assert!(row.get(column).is_some(), "missing column {column}");
            }
        }
    }

    #[test]
    fn test_dimension_keys_unique() {
        let mut generator = TableGenerator::new(42);
        let table = generator.generate_dimension(&dimension_schema(), 200).unwrap();

        let keys: HashSet<String> = table
            .rows
            .iter()
            .map(|r| r.get("CPF").unwrap().to_csv_field())
            .collect();
        assert_eq!(keys.len(), 200);
    }

    #[test]
    fn test_dimension_zero_rows_keeps_headers() {
        let mut generator = TableGenerator::new(42);
        let table = generator.generate_dimension(&dimension_schema(), 0).unwrap();

        assert!(table.is_empty());
        assert_eq!(table.columns, vec!["CPF", "Nome", "Turno"]);
    }

    #[test]
    fn test_key_exhaustion_fails() {
        // A single-value key space cannot produce two unique keys
        let schema = DimensionSchema {
            table: "clientes".to_string(),
            key_column: "CPF".to_string(),
            columns: vec![ColumnSpec::new(
                "CPF",
                SamplerRule::Value(CellValue::text("111.444.777-35")),
            )],
        };
        let mut generator = TableGenerator::new(42);
        let result = generator.generate_dimension(&schema, 2);
        assert!(matches!(
            result,
            Err(GenerateError::KeyGeneration { ref table, .. }) if table == "clientes"
        ));
    }

    #[test]
    fn test_facts_reference_dimension_keys() {
        let mut generator = TableGenerator::new(42);
        let dimension = generator.generate_dimension(&dimension_schema(), 5).unwrap();
        let facts = generator.generate_facts(&fact_schema(), &dimension, 100).unwrap();

        assert_eq!(facts.len(), 100);
        let keys: HashSet<String> = dimension
            .rows
            .iter()
            .map(|r| r.get("CPF").unwrap().to_csv_field())
            .collect();
        for row in &facts.rows {
            let fk = row.get("CPF").unwrap().to_csv_field();
            assert!(keys.contains(&fk), "foreign key {fk} not issued");
        }
    }

    #[test]
    fn test_facts_derived_chain() {
        let mut generator = TableGenerator::new(42);
        let dimension = generator.generate_dimension(&dimension_schema(), 3).unwrap();
        let facts = generator.generate_facts(&fact_schema(), &dimension, 50).unwrap();

        for row in &facts.rows {
            let base = row.get("Data_Transacao").unwrap().as_datetime().unwrap();
            let due = row.get("Data_Vencimento").unwrap().as_datetime().unwrap();
            let paid = row.get("Data_Pagamento").unwrap().as_datetime().unwrap();

            let offset = (due - base).num_days();
            assert!([10, 15, 30].contains(&offset));

            let jitter = (paid - due).num_days();
            assert!((-5..=15).contains(&jitter));
        }
    }

    #[test]
    fn test_facts_zero_rows_valid() {
        let mut generator = TableGenerator::new(42);
        let dimension = generator.generate_dimension(&dimension_schema(), 3).unwrap();
        let facts = generator.generate_facts(&fact_schema(), &dimension, 0).unwrap();

        assert!(facts.is_empty());
        assert_eq!(facts.columns.len(), 5);
    }

    #[test]
    fn test_facts_empty_dimension_fails() {
        let mut generator = TableGenerator::new(42);
        let empty = generator.generate_dimension(&dimension_schema(), 0).unwrap();

        for count in [0, 1, 50] {
            let result = generator.generate_facts(&fact_schema(), &empty, count);
            assert!(matches!(
                result,
                Err(GenerateError::EmptyReference { ref table }) if table == "clientes"
            ));
        }
    }

    #[test]
    fn test_deterministic_generation() {
        let mut gen1 = TableGenerator::new(42);
        let mut gen2 = TableGenerator::new(42);

        let t1 = gen1.generate_dimension(&dimension_schema(), 10).unwrap();
        let t2 = gen2.generate_dimension(&dimension_schema(), 10).unwrap();

        for (r1, r2) in t1.rows.iter().zip(&t2.rows) {
            assert_eq!(r1.get("CPF"), r2.get("CPF"));
            assert_eq!(r1.get("Nome"), r2.get("Nome"));
        }
    }
}
