//! Static schema registry for the supported business domains.
//!
//! Registry content is domain data, not behavior: each module under
//! [`domains`] declares one dimension/fact schema pair as an ordered list
//! of column rules. Adding a domain means adding one module and one entry
//! in [`resolve`].

pub mod domains;

use martgen_core::DomainSchema;
use thiserror::Error;

/// Registered domain names, in registration order.
pub const SUPPORTED: [&str; 9] = [
    "restaurant",
    "marketing",
    "banking",
    "healthcare",
    "ecommerce",
    "callcenter",
    "education",
    "realestate",
    "supplychain",
];

/// Errors from registry lookups.
#[derive(Debug, Error)]
pub enum DomainError {
    /// The requested domain is not registered.
    #[error("unknown domain '{name}', supported domains: {}", SUPPORTED.join(", "))]
    Unknown { name: String },
}

/// Registered domain names.
pub fn supported() -> &'static [&'static str] {
    &SUPPORTED
}

/// Resolve a domain name (case-insensitive) to its schema pair.
pub fn resolve(name: &str) -> Result<DomainSchema, DomainError> {
    match name.to_lowercase().as_str() {
        "restaurant" => Ok(domains::restaurant::schema()),
        "marketing" => Ok(domains::marketing::schema()),
        "banking" => Ok(domains::banking::schema()),
        "healthcare" => Ok(domains::healthcare::schema()),
        "ecommerce" => Ok(domains::ecommerce::schema()),
        "callcenter" => Ok(domains::callcenter::schema()),
        "education" => Ok(domains::education::schema()),
        "realestate" => Ok(domains::realestate::schema()),
        "supplychain" => Ok(domains::supplychain::schema()),
        _ => Err(DomainError::Unknown {
            name: name.to_string(),
        }),
    }
}
