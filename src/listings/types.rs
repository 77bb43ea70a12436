use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::models::Property;

/// Raw listing as delivered by a search provider or typed in by a user.
///
/// Only `address` is required. City searches usually fill the physical
/// attributes and a single thumbnail `image`; address lookups may carry the
/// full set of financial fields and an `images` gallery.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ListingPayload {
    #[serde(default)]
    pub address: String,
    pub price: Option<f64>,
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<f32>,
    pub sqft: Option<u32>,
    /// Thumbnail from a city search
    pub image: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    /// Listing page, when the provider knows it
    pub url: Option<String>,

    pub down_payment_percent: Option<f64>,
    pub interest_rate: Option<f64>,
    pub loan_term_years: Option<u32>,
    pub nightly_rate: Option<f64>,
    pub occupancy_rate: Option<f64>,
    pub property_tax: Option<f64>,
    pub insurance: Option<f64>,
    pub management_fee_percent: Option<f64>,
    pub snow_removal: Option<f64>,
    pub hot_tub_maintenance: Option<f64>,
    pub utilities: Option<f64>,
    pub maintenance: Option<f64>,
    pub hoa: Option<f64>,
    pub other_expenses: Option<f64>,
    pub fair_offer_recommendation: Option<String>,
}

impl ListingPayload {
    /// A payload carrying nothing but an address.
    pub fn with_address(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            ..Self::default()
        }
    }
}

impl From<&Property> for ListingPayload {
    fn from(property: &Property) -> Self {
        Self {
            address: property.address.clone(),
            price: Some(property.price),
            bedrooms: Some(property.bedrooms),
            bathrooms: Some(property.bathrooms),
            sqft: Some(property.sqft),
            image: None,
            images: property.images.clone(),
            url: None,
            down_payment_percent: Some(property.down_payment_percent),
            interest_rate: Some(property.interest_rate),
            loan_term_years: Some(property.loan_term_years),
            nightly_rate: Some(property.nightly_rate),
            occupancy_rate: Some(property.occupancy_rate),
            property_tax: Some(property.property_tax),
            insurance: Some(property.insurance),
            management_fee_percent: Some(property.management_fee_percent),
            snow_removal: Some(property.snow_removal),
            hot_tub_maintenance: Some(property.hot_tub_maintenance),
            utilities: Some(property.utilities),
            maintenance: Some(property.maintenance),
            hoa: Some(property.hoa),
            other_expenses: Some(property.other_expenses),
            fair_offer_recommendation: Some(property.fair_offer_recommendation.clone()),
        }
    }
}

/// Constraints used to narrow a city search
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilters {
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub min_beds: Option<u32>,
    pub min_baths: Option<f32>,
    pub min_sqft: Option<u32>,
}

impl SearchFilters {
    /// Every bound that is present must be a non-negative number, and the
    /// minimum price may not exceed the maximum.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, bound) in [
            ("min_price", self.min_price),
            ("max_price", self.max_price),
            ("min_baths", self.min_baths.map(f64::from)),
        ] {
            match bound {
                Some(value) if !value.is_finite() => {
                    return Err(ValidationError::NotFinite { field })
                }
                Some(value) if value < 0.0 => {
                    return Err(ValidationError::NegativeAmount { field, value })
                }
                _ => {}
            }
        }

        if let (Some(min), Some(max)) = (self.min_price, self.max_price) {
            if min > max {
                return Err(ValidationError::InvertedPriceRange { min, max });
            }
        }
        Ok(())
    }

    /// Whether a listing satisfies every bound. A listing that does not
    /// report a constrained attribute never satisfies that bound.
    pub fn matches(&self, listing: &ListingPayload) -> bool {
        fn at_least<T: PartialOrd + Copy>(bound: Option<T>, value: Option<T>) -> bool {
            match (bound, value) {
                (None, _) => true,
                (Some(bound), Some(value)) => value >= bound,
                (Some(_), None) => false,
            }
        }

        let under_max = match (self.max_price, listing.price) {
            (None, _) => true,
            (Some(max), Some(price)) => price <= max,
            (Some(_), None) => false,
        };

        under_max
            && at_least(self.min_price, listing.price)
            && at_least(self.min_beds, listing.bedrooms)
            && at_least(self.min_baths, listing.bathrooms)
            && at_least(self.min_sqft, listing.sqft)
    }
}

/// What the user typed into the search box, classified by shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchQuery {
    /// Free-text city or area
    City(String),
    /// Street address, e.g. "123 Main St"
    Address(String),
    /// Link to a listing page
    Url(String),
}

impl SearchQuery {
    /// Classify raw search text. Blank input yields `None`.
    pub fn classify(text: &str) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let lower = text.to_lowercase();
        if lower.contains("http") || lower.contains("www") {
            return Some(Self::Url(text.to_string()));
        }

        let after_digits = text.trim_start_matches(|c: char| c.is_ascii_digit());
        let has_leading_number = after_digits.len() < text.len();
        if has_leading_number && after_digits.starts_with(char::is_whitespace) {
            return Some(Self::Address(text.to_string()));
        }

        Some(Self::City(text.to_string()))
    }

    pub fn text(&self) -> &str {
        match self {
            Self::City(text) | Self::Address(text) | Self::Url(text) => text,
        }
    }

    /// Address and URL queries resolve to one specific listing.
    pub fn is_single_listing(&self) -> bool {
        !matches!(self, Self::City(_))
    }
}
