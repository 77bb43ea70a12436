pub mod defaults;
pub mod fixture;
pub mod normalizer;
pub mod traits;
pub mod types;

pub use defaults::{DefaultPolicy, DefaultRule, DefaultedField};
pub use fixture::FixtureListingProvider;
pub use normalizer::ListingNormalizer;
pub use traits::ListingProvider;
pub use types::{ListingPayload, SearchFilters, SearchQuery};
