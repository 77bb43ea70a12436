use async_trait::async_trait;

use super::types::{ListingPayload, SearchFilters, SearchQuery};
use crate::error::ListingError;

/// Common trait for listing search providers.
/// Results are raw payloads; run them through the normalizer before analysis.
#[async_trait]
pub trait ListingProvider: Send + Sync {
    /// Listings in a city, narrowed by `filters`
    async fn search_city(
        &self,
        city: &str,
        filters: &SearchFilters,
    ) -> Result<Vec<ListingPayload>, ListingError>;

    /// One richer listing for a street address or listing URL
    async fn lookup(&self, address_or_url: &str) -> Result<ListingPayload, ListingError>;

    /// Get the name of the provider
    fn source_name(&self) -> &'static str;

    /// Dispatch a classified query to the matching search mode.
    async fn search(
        &self,
        query: &SearchQuery,
        filters: &SearchFilters,
    ) -> Result<Vec<ListingPayload>, ListingError> {
        match query {
            SearchQuery::City(city) => self.search_city(city, filters).await,
            SearchQuery::Address(target) | SearchQuery::Url(target) => {
                let listing = self.lookup(target).await?;
                if listing.address.trim().is_empty() {
                    return Ok(Vec::new());
                }
                Ok(vec![listing])
            }
        }
    }
}
