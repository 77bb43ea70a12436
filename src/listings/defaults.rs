use serde::{Deserialize, Serialize};
use tracing::debug;

use super::types::ListingPayload;

pub const DEFAULT_LOAN_TERM_YEARS: u32 = 30;
pub const DEFAULT_FAIR_OFFER: &str = "Review the expenses to get an accurate analysis.";

/// How a missing numeric field is filled in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub enum DefaultRule {
    /// A constant value
    Fixed(f64),
    /// A fraction of the listing price, e.g. `0.015` for 1.5%
    ShareOfPrice(f64),
}

impl DefaultRule {
    pub fn resolve(&self, price: f64) -> f64 {
        match *self {
            Self::Fixed(value) => value,
            Self::ShareOfPrice(share) => price * share,
        }
    }
}

/// Numeric payload fields that carry a default.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum DefaultedField {
    DownPaymentPercent,
    InterestRate,
    NightlyRate,
    OccupancyRate,
    PropertyTax,
    Insurance,
    ManagementFeePercent,
    SnowRemoval,
    HotTubMaintenance,
    Utilities,
    Maintenance,
    Hoa,
    OtherExpenses,
}

impl DefaultedField {
    pub fn name(&self) -> &'static str {
        match self {
            Self::DownPaymentPercent => "down_payment_percent",
            Self::InterestRate => "interest_rate",
            Self::NightlyRate => "nightly_rate",
            Self::OccupancyRate => "occupancy_rate",
            Self::PropertyTax => "property_tax",
            Self::Insurance => "insurance",
            Self::ManagementFeePercent => "management_fee_percent",
            Self::SnowRemoval => "snow_removal",
            Self::HotTubMaintenance => "hot_tub_maintenance",
            Self::Utilities => "utilities",
            Self::Maintenance => "maintenance",
            Self::Hoa => "hoa",
            Self::OtherExpenses => "other_expenses",
        }
    }

    fn slot<'a>(&self, payload: &'a mut ListingPayload) -> &'a mut Option<f64> {
        match self {
            Self::DownPaymentPercent => &mut payload.down_payment_percent,
            Self::InterestRate => &mut payload.interest_rate,
            Self::NightlyRate => &mut payload.nightly_rate,
            Self::OccupancyRate => &mut payload.occupancy_rate,
            Self::PropertyTax => &mut payload.property_tax,
            Self::Insurance => &mut payload.insurance,
            Self::ManagementFeePercent => &mut payload.management_fee_percent,
            Self::SnowRemoval => &mut payload.snow_removal,
            Self::HotTubMaintenance => &mut payload.hot_tub_maintenance,
            Self::Utilities => &mut payload.utilities,
            Self::Maintenance => &mut payload.maintenance,
            Self::Hoa => &mut payload.hoa,
            Self::OtherExpenses => &mut payload.other_expenses,
        }
    }
}

/// The complete default-substitution policy applied to imported listings.
///
/// Each entry is applied on its own and only when the payload lacks that
/// field; a value the provider did send is never replaced.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DefaultPolicy {
    pub amounts: Vec<(DefaultedField, DefaultRule)>,
    pub loan_term_years: u32,
    pub fair_offer_recommendation: String,
}

impl Default for DefaultPolicy {
    fn default() -> Self {
        Self::standard()
    }
}

impl DefaultPolicy {
    pub fn standard() -> Self {
        use DefaultRule::{Fixed, ShareOfPrice};
        use DefaultedField::*;

        Self {
            amounts: vec![
                (DownPaymentPercent, Fixed(20.0)),
                (InterestRate, Fixed(6.8)),
                (NightlyRate, ShareOfPrice(0.0005)),
                (OccupancyRate, Fixed(55.0)),
                (PropertyTax, ShareOfPrice(0.015)),
                (Insurance, ShareOfPrice(0.004)),
                (ManagementFeePercent, Fixed(25.0)),
                (SnowRemoval, Fixed(0.0)),
                (HotTubMaintenance, Fixed(0.0)),
                (Utilities, Fixed(300.0)),
                (Maintenance, Fixed(250.0)),
                (Hoa, Fixed(0.0)),
                (OtherExpenses, Fixed(0.0)),
            ],
            loan_term_years: DEFAULT_LOAN_TERM_YEARS,
            fair_offer_recommendation: DEFAULT_FAIR_OFFER.to_string(),
        }
    }

    /// Fill every missing field of `payload`, pricing share-of-price rules
    /// against `price`. Returns the names of the fields that were filled.
    pub fn apply(&self, payload: &mut ListingPayload, price: f64) -> Vec<&'static str> {
        let mut filled = Vec::new();

        for (field, rule) in &self.amounts {
            let slot = field.slot(payload);
            if slot.is_none() {
                let value = rule.resolve(price);
                debug!("Defaulting {} to {}", field.name(), value);
                *slot = Some(value);
                filled.push(field.name());
            }
        }

        if payload.loan_term_years.is_none() {
            debug!("Defaulting loan_term_years to {}", self.loan_term_years);
            payload.loan_term_years = Some(self.loan_term_years);
            filled.push("loan_term_years");
        }

        if payload.fair_offer_recommendation.is_none() {
            payload.fair_offer_recommendation = Some(self.fair_offer_recommendation.clone());
            filled.push("fair_offer_recommendation");
        }

        filled
    }
}
