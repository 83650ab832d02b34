//! Core data model for the martgen dataset generator.
//!
//! This crate defines the intermediate representation shared by the sampler,
//! registry, and exporter crates:
//!
//! - [`CellValue`] - a single scalar cell
//! - [`Row`] / [`Table`] - materialized tables
//! - [`DimensionSchema`] / [`FactSchema`] - declarative column-to-rule tables
//!
//! Schemas are static domain data, not behavior: a schema is an ordered list
//! of `(column name, rule)` pairs, and the generator crate interprets the
//! rules. Adding a business domain means declaring one more schema pair, not
//! writing new generator logic.

pub mod schema;
pub mod table;
pub mod values;

pub use schema::{
    ColumnSpec, DateSpec, DeriveRule, DimensionSchema, DomainSchema, FactColumn, FactColumnKind,
    FactSchema, SamplerRule, TierBand,
};
pub use table::{Row, Table};
pub use values::CellValue;
