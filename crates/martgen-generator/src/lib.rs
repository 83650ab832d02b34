//! Field samplers and table generator for martgen.
//!
//! This crate turns declarative schemas from `martgen-core` into
//! materialized tables:
//!
//! ```text
//! DimensionSchema / FactSchema
//!        │
//!        ▼
//! ┌──────────────────┐
//! │  TableGenerator  │
//! │                  │
//! │  - rng (StdRng)  │
//! └────────┬─────────┘
//!          │
//!          ▼
//!    Table { columns, rows }
//! ```
//!
//! Samplers are stateless functions taking an explicit `&mut impl Rng`;
//! determinism is the caller's choice via the seed. Fact generation selects
//! one dimension row per fact row (uniform, with replacement), samples the
//! independent columns, then applies derivation rules in declared order.
//!
//! # Example
//!
//! ```rust
//! use martgen_core::{ColumnSpec, DimensionSchema, SamplerRule};
//! use martgen_generator::TableGenerator;
//!
//! let schema = DimensionSchema {
//!     table: "clientes".to_string(),
//!     key_column: "CPF".to_string(),
//!     columns: vec![
//!         ColumnSpec::new("CPF", SamplerRule::Cpf),
//!         ColumnSpec::new("Nome", SamplerRule::FullName),
//!     ],
//! };
//!
//! let mut generator = TableGenerator::new(42);
//! let table = generator.generate_dimension(&schema, 10).unwrap();
//! assert_eq!(table.len(), 10);
//! ```

pub mod derive;
pub mod error;
pub mod generator;
pub mod samplers;

pub use error::GenerateError;
pub use generator::TableGenerator;
pub use samplers::sample_value;
