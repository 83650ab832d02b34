//! Declarative schema types.
//!
//! A schema is configuration, not behavior: an ordered list of column names
//! paired with sampling or derivation rules. The generator crate interprets
//! the rules; domain crates only declare them.

use crate::values::CellValue;

/// A date bound expressed relative to the day the generator runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateSpec {
    /// N years before today
    YearsAgo(u32),
    /// N days before today
    DaysAgo(u32),
    /// Today (for date/time sampling: the current moment)
    Today,
    /// N days after today
    DaysAhead(u32),
    /// N months after today
    MonthsAhead(u32),
}

/// Rule for sampling one independent column value.
///
/// Mirrors the generator-config pattern: each variant is plain data and a
/// single dispatcher in the generator crate matches on it.
#[derive(Debug, Clone, PartialEq)]
pub enum SamplerRule {
    /// Brazilian CPF identifier with valid check digits
    Cpf,
    /// Full person name
    FullName,
    /// E-mail address
    Email,
    /// Phone number
    Phone,
    /// Street address with house number
    StreetAddress,
    /// City name
    City,
    /// Two-letter state code
    StateCode,
    /// Postal code (`NNNNN-NNN`)
    PostalCode,
    /// Neighborhood name
    Neighborhood,
    /// Country name
    Country,
    /// Short free-text remark (one or two sentences)
    FreeText,
    /// Date uniformly distributed in the inclusive range
    Date { start: DateSpec, end: DateSpec },
    /// Date/time uniformly distributed in the inclusive range
    DateTime { start: DateSpec, end: DateSpec },
    /// Real number uniformly distributed in `[low, high]`, rounded to `scale` places
    Amount { low: f64, high: f64, scale: u8 },
    /// Integer uniformly distributed in `[low, high]`
    Integer { low: i64, high: i64 },
    /// Uniform pick from a fixed, non-empty choice list
    Category { choices: Vec<CellValue> },
    /// Boolean with the given probability of `true`
    Boolean { p_true: f64 },
    /// Inner rule with probability `p_present`, otherwise null
    Optional {
        inner: Box<SamplerRule>,
        p_present: f64,
    },
    /// Primary rule with probability `p_primary`, otherwise the fallback rule
    Weighted {
        primary: Box<SamplerRule>,
        fallback: Box<SamplerRule>,
        p_primary: f64,
    },
    /// Composite string with placeholders (`{rand:N}`, `{word}`, `{surname}`,
    /// `{company}`, `{state}`, `{sentence}`, `{pick:A|B|C}`)
    Pattern { pattern: String },
    /// Random UUID v4
    Uuid,
    /// Static value
    Value(CellValue),
}

/// Tier band for [`DeriveRule::TieredAmount`]: dimension attribute values
/// mapped to an amount range.
#[derive(Debug, Clone, PartialEq)]
pub struct TierBand {
    /// Dimension attribute values selecting this band
    pub tiers: Vec<String>,
    /// Inclusive lower bound
    pub low: f64,
    /// Inclusive upper bound
    pub high: f64,
}

/// Rule for deriving a fact column from the referenced dimension row and the
/// partially built fact row.
///
/// Rules are applied in declared order after all independent columns are
/// sampled, so a rule may read columns produced by earlier rules.
#[derive(Debug, Clone, PartialEq)]
pub enum DeriveRule {
    /// Mirror an attribute of the referenced dimension row
    CopyFromDimension { source: String },
    /// Amount whose range narrows based on a dimension tier attribute
    TieredAmount {
        tier_source: String,
        bands: Vec<TierBand>,
        fallback: (f64, f64),
        scale: u8,
    },
    /// Base date/time column plus a uniformly chosen day offset
    OffsetDate { base: String, offset_days: Vec<i64> },
    /// Base date/time plus a uniform day offset in `[min_days, max_days]`,
    /// present with probability `p_present`
    JitterDate {
        base: String,
        min_days: i64,
        max_days: i64,
        p_present: f64,
    },
    /// `amount * monthly_rate * days_late / 30` when the paid column is
    /// later than the due column, else zero
    LateFee {
        amount: String,
        due: String,
        paid: String,
        monthly_rate: f64,
    },
    /// `base * rate` with probability `p_applied`, else zero
    RatedFee {
        base: String,
        rate: f64,
        p_applied: f64,
    },
    /// Integer points proportional to an amount, zero when the referenced
    /// dimension row's program attribute equals the opt-out marker
    LoyaltyPoints {
        amount: String,
        program_source: String,
        opt_out: String,
        min_rate: f64,
        max_rate: f64,
    },
    /// Pick from the sub-list paired with an already-sampled category column
    PairedCategory {
        category: String,
        pairs: Vec<(String, Vec<String>)>,
    },
}

/// One dimension-table column: name plus sampling rule.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSpec {
    pub name: String,
    pub rule: SamplerRule,
}

impl ColumnSpec {
    pub fn new(name: impl Into<String>, rule: SamplerRule) -> Self {
        Self {
            name: name.into(),
            rule,
        }
    }
}

/// Schema of a dimension table.
///
/// Invariant: `key_column` names one of `columns`, and generated tables
/// carry a non-null, table-unique value in it for every row.
#[derive(Debug, Clone)]
pub struct DimensionSchema {
    /// Table name
    pub table: String,
    /// Column holding the table-unique entity key
    pub key_column: String,
    /// Columns in declared order
    pub columns: Vec<ColumnSpec>,
}

impl DimensionSchema {
    /// Column names in declared order.
    pub fn column_names(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name.clone()).collect()
    }
}

/// How one fact-table column obtains its value.
#[derive(Debug, Clone, PartialEq)]
pub enum FactColumnKind {
    /// Holds the referenced dimension row's key value
    ForeignKey,
    /// Independently sampled
    Sampled(SamplerRule),
    /// Derived from the dimension row and earlier fact columns
    Derived(DeriveRule),
}

/// One fact-table column: name plus value source.
#[derive(Debug, Clone, PartialEq)]
pub struct FactColumn {
    pub name: String,
    pub kind: FactColumnKind,
}

impl FactColumn {
    pub fn foreign_key(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: FactColumnKind::ForeignKey,
        }
    }

    pub fn sampled(name: impl Into<String>, rule: SamplerRule) -> Self {
        Self {
            name: name.into(),
            kind: FactColumnKind::Sampled(rule),
        }
    }

    pub fn derived(name: impl Into<String>, rule: DeriveRule) -> Self {
        Self {
            name: name.into(),
            kind: FactColumnKind::Derived(rule),
        }
    }
}

/// Schema of a fact table.
#[derive(Debug, Clone)]
pub struct FactSchema {
    /// Table name
    pub table: String,
    /// Columns in declared order; exactly one is the foreign key
    pub columns: Vec<FactColumn>,
}

impl FactSchema {
    /// Column names in declared order.
    pub fn column_names(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name.clone()).collect()
    }

    /// Name of the foreign-key column.
    pub fn foreign_key_column(&self) -> Option<&str> {
        self.columns
            .iter()
            .find(|c| c.kind == FactColumnKind::ForeignKey)
            .map(|c| c.name.as_str())
    }
}

/// The (dimension schema, fact schema) pair registered for one business
/// domain.
#[derive(Debug, Clone)]
pub struct DomainSchema {
    pub dimension: DimensionSchema,
    pub facts: FactSchema,
}
