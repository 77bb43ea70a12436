//! Rental property investment analysis.
//!
//! Listings from a search provider are normalized into complete
//! [`models::Property`] records, then [`analytics::analyze`] derives mortgage,
//! NOI, cash flow, cap rate, cash-on-cash return and break-even occupancy.

pub mod analytics;
pub mod config;
pub mod error;
pub mod listings;
pub mod models;
pub mod portfolio;
pub mod report;
pub mod seed;

pub use analytics::{analyze, InvestmentMetrics};
pub use error::{ListingError, PortfolioError, ValidationError};
pub use listings::{ListingNormalizer, ListingPayload, SearchFilters, SearchQuery};
pub use models::Property;
pub use portfolio::Portfolio;
