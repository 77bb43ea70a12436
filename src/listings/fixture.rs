use std::path::Path;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use super::traits::ListingProvider;
use super::types::{ListingPayload, SearchFilters};
use crate::error::ListingError;

/// Listing provider backed by a fixed set of payloads, either built in or
/// loaded from a JSON file holding an array of listings.
#[derive(Debug, Clone)]
pub struct FixtureListingProvider {
    listings: Vec<ListingPayload>,
}

impl FixtureListingProvider {
    pub fn new(listings: Vec<ListingPayload>) -> Self {
        Self { listings }
    }

    /// Load listings from a JSON file
    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self, ListingError> {
        let path = path.as_ref();
        debug!("Reading listings from {}", path.display());

        let raw = tokio::fs::read_to_string(path).await?;
        let listings: Vec<ListingPayload> = serde_json::from_str(&raw)?;

        info!("Loaded {} listings from {}", listings.len(), path.display());
        Ok(Self::new(listings))
    }

    pub fn listings(&self) -> &[ListingPayload] {
        &self.listings
    }
}

impl Default for FixtureListingProvider {
    fn default() -> Self {
        Self::new(sample_listings())
    }
}

#[async_trait]
impl ListingProvider for FixtureListingProvider {
    async fn search_city(
        &self,
        city: &str,
        filters: &SearchFilters,
    ) -> Result<Vec<ListingPayload>, ListingError> {
        filters.validate()?;

        let needle = city.trim().to_lowercase();
        let results: Vec<ListingPayload> = self
            .listings
            .iter()
            .filter(|listing| listing.address.to_lowercase().contains(&needle))
            .filter(|listing| filters.matches(listing))
            .cloned()
            .collect();

        if results.is_empty() {
            warn!("No listings matched {}", city);
        } else {
            info!("Found {} listings for {}", results.len(), city);
        }
        Ok(results)
    }

    async fn lookup(&self, address_or_url: &str) -> Result<ListingPayload, ListingError> {
        let target = address_or_url.trim();
        self.listings
            .iter()
            .find(|listing| {
                listing.address.eq_ignore_ascii_case(target)
                    || listing.url.as_deref() == Some(target)
            })
            .cloned()
            .ok_or_else(|| ListingError::NotFound(target.to_string()))
    }

    fn source_name(&self) -> &'static str {
        "Fixture"
    }
}

/// Sample listings shaped like real search results: city-search entries with
/// a thumbnail, and one fully detailed address lookup.
pub fn sample_listings() -> Vec<ListingPayload> {
    vec![
        ListingPayload {
            price: Some(389_000.0),
            bedrooms: Some(3),
            bathrooms: Some(2.0),
            sqft: Some(1650),
            image: Some("https://images.unsplash.com/photo-1570129477492-45c003edd2be?w=800".to_string()),
            url: Some("https://listings.example.com/austin/2210-barton-hills".to_string()),
            ..ListingPayload::with_address("2210 Barton Hills Dr, Austin, TX")
        },
        ListingPayload {
            price: Some(615_000.0),
            bedrooms: Some(4),
            bathrooms: Some(3.5),
            sqft: Some(2900),
            image: Some("https://images.unsplash.com/photo-1600585154340-be6161a56a0c?w=800".to_string()),
            ..ListingPayload::with_address("4810 Shoal Creek Blvd, Austin, TX")
        },
        ListingPayload {
            price: Some(254_900.0),
            bedrooms: Some(2),
            bathrooms: Some(1.0),
            sqft: Some(980),
            ..ListingPayload::with_address("701 E 38th St, Austin, TX")
        },
        ListingPayload {
            price: Some(725_000.0),
            bedrooms: Some(4),
            bathrooms: Some(3.0),
            sqft: Some(2200),
            images: vec![
                "https://images.unsplash.com/photo-1449844908441-8829872d2607?w=800".to_string(),
                "https://images.unsplash.com/photo-1502005229762-cf1b2da7c5d6?w=800".to_string(),
            ],
            url: Some("https://listings.example.com/breckenridge/88-four-o-clock".to_string()),
            interest_rate: Some(6.9),
            nightly_rate: Some(525.0),
            occupancy_rate: Some(62.0),
            property_tax: Some(4350.0),
            insurance: Some(3600.0),
            snow_removal: Some(1800.0),
            hot_tub_maintenance: Some(1200.0),
            utilities: Some(450.0),
            hoa: Some(180.0),
            fair_offer_recommendation: Some(
                "Comparable ski-in units closed near $700k this season; open at $695k.".to_string(),
            ),
            ..ListingPayload::with_address("88 Four O'Clock Rd, Breckenridge, CO")
        },
    ]
}
