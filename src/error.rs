use thiserror::Error;

/// Rejection raised when a property record would break one of its invariants.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("address must not be empty")]
    EmptyAddress,
    #[error("{field} must not be negative (found {value})")]
    NegativeAmount { field: &'static str, value: f64 },
    #[error("{field} must be between 0 and 100 (found {value})")]
    PercentOutOfRange { field: &'static str, value: f64 },
    #[error("loan term must be at least one year (found {0})")]
    NonPositiveLoanTerm(u32),
    #[error("loan term must be at most {max} years (found {found})")]
    LoanTermTooLong { max: u32, found: u32 },
    #[error("minimum price {min} is above maximum price {max}")]
    InvertedPriceRange { min: f64, max: f64 },
    #[error("{field} is not a finite number")]
    NotFinite { field: &'static str },
}

/// Failures while obtaining listings from a provider.
#[derive(Debug, Error)]
pub enum ListingError {
    #[error("failed to read listings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to decode listings: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("listing rejected: {0}")]
    Validation(#[from] ValidationError),
    #[error("no listing found for {0}")]
    NotFound(String),
}

/// Failures when changing the in-memory property collection.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PortfolioError {
    #[error("a property with id {0} already exists")]
    DuplicateId(String),
    #[error("no property with id {0}")]
    UnknownId(String),
    #[error("invalid property: {0}")]
    Validation(#[from] ValidationError),
}
