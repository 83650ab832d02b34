//! Error types for sampling and table generation.

use thiserror::Error;

/// Errors that can occur while sampling values or generating tables.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// A schema declared an impossible sampling range. Indicates a registry
    /// bug; never retried.
    #[error("invalid sampling range: {0}")]
    InvalidRange(String),

    /// Fact generation was requested against a dimension table with no rows.
    #[error("cannot generate facts for '{table}': dimension table has no rows")]
    EmptyReference { table: String },

    /// Key-column collisions exhausted the retry budget.
    #[error("could not produce a unique key for table '{table}' after {attempts} attempts")]
    KeyGeneration { table: String, attempts: u32 },

    /// A derivation rule referenced a column that is missing or holds an
    /// incompatible value. Indicates a registry bug.
    #[error("derivation rule references missing or mistyped column '{column}'")]
    MissingColumn { column: String },
}
