use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use super::defaults::DefaultPolicy;
use super::types::ListingPayload;
use crate::error::ValidationError;
use crate::models::Property;

/// Turns sparse listing payloads into complete, validated [`Property`] records.
#[derive(Debug, Clone, Default)]
pub struct ListingNormalizer {
    policy: DefaultPolicy,
}

impl ListingNormalizer {
    /// Create a normalizer with the standard default policy
    pub fn new() -> Self {
        Self::with_policy(DefaultPolicy::standard())
    }

    pub fn with_policy(policy: DefaultPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &DefaultPolicy {
        &self.policy
    }

    /// Build a new, non-favorite property from a listing with a fresh id.
    ///
    /// Blank recommendation text from a provider counts as missing here.
    pub fn normalize(&self, mut payload: ListingPayload) -> Result<Property, ValidationError> {
        payload.fair_offer_recommendation = payload
            .fair_offer_recommendation
            .filter(|text| !text.trim().is_empty());

        let property = self.build(payload, generate_id(), false)?;
        info!("Imported {} as {}", property.address, property.id);
        Ok(property)
    }

    /// Run an existing property back through the default policy.
    ///
    /// Every field of a valid property is already present, so the result is
    /// identical to the input, id and favorite flag included.
    pub fn renormalize(&self, property: &Property) -> Result<Property, ValidationError> {
        self.build(
            ListingPayload::from(property),
            property.id.clone(),
            property.is_favorite,
        )
    }

    fn build(
        &self,
        mut payload: ListingPayload,
        id: String,
        is_favorite: bool,
    ) -> Result<Property, ValidationError> {
        if payload.address.trim().is_empty() {
            return Err(ValidationError::EmptyAddress);
        }

        let price = match payload.price {
            Some(price) => price,
            None => {
                warn!("Listing {} has no price, defaulting to 0", payload.address);
                0.0
            }
        };

        self.policy.apply(&mut payload, price);
        let images = select_images(payload.images, payload.image);

        let property = Property {
            id,
            address: payload.address,
            price,
            images,
            bedrooms: payload.bedrooms.unwrap_or(0),
            bathrooms: payload.bathrooms.unwrap_or(0.0),
            sqft: payload.sqft.unwrap_or(0),
            down_payment_percent: filled(payload.down_payment_percent),
            interest_rate: filled(payload.interest_rate),
            loan_term_years: payload
                .loan_term_years
                .unwrap_or(self.policy.loan_term_years),
            nightly_rate: filled(payload.nightly_rate),
            occupancy_rate: filled(payload.occupancy_rate),
            property_tax: filled(payload.property_tax),
            insurance: filled(payload.insurance),
            management_fee_percent: filled(payload.management_fee_percent),
            snow_removal: filled(payload.snow_removal),
            hot_tub_maintenance: filled(payload.hot_tub_maintenance),
            utilities: filled(payload.utilities),
            maintenance: filled(payload.maintenance),
            hoa: filled(payload.hoa),
            other_expenses: filled(payload.other_expenses),
            fair_offer_recommendation: payload.fair_offer_recommendation.unwrap_or_default(),
            is_favorite,
        };

        property.validate()?;
        Ok(property)
    }
}

// Only reached after `DefaultPolicy::apply`, which fills every defaulted slot.
fn filled(value: Option<f64>) -> f64 {
    value.unwrap_or(0.0)
}

/// Prefer the gallery, fall back to the lone thumbnail, else nothing.
fn select_images(images: Vec<String>, image: Option<String>) -> Vec<String> {
    if !images.is_empty() {
        return images;
    }
    image
        .filter(|url| !url.trim().is_empty())
        .map(|url| vec![url])
        .unwrap_or_default()
}

/// Millisecond timestamp plus a random suffix, so imports within the same
/// millisecond still get distinct ids.
pub fn generate_id() -> String {
    format!("{}-{}", Utc::now().timestamp_millis(), Uuid::new_v4().simple())
}
