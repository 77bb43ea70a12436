use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Longest loan term a property may carry
pub const MAX_LOAN_TERM_YEARS: u32 = 100;

/// A rental property under evaluation.
///
/// Only inputs live here. Everything derived from them (mortgage, NOI, cap
/// rate and so on) comes from [`crate::analytics::analyze`] on demand.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Property {
    pub id: String,
    pub address: String,
    pub price: f64,
    pub images: Vec<String>,
    pub bedrooms: u32,
    pub bathrooms: f32,
    pub sqft: u32,

    // Financing
    pub down_payment_percent: f64,
    pub interest_rate: f64,
    pub loan_term_years: u32,

    // Income
    pub nightly_rate: f64,
    pub occupancy_rate: f64,

    // Expenses. Tax, insurance, snow removal and hot tub are annual;
    // utilities, maintenance and HOA are monthly.
    pub property_tax: f64,
    pub insurance: f64,
    pub management_fee_percent: f64,
    pub snow_removal: f64,
    pub hot_tub_maintenance: f64,
    pub utilities: f64,
    pub maintenance: f64,
    pub hoa: f64,
    pub other_expenses: f64,

    pub fair_offer_recommendation: String,
    pub is_favorite: bool,
}

impl Property {
    /// Check every field invariant, returning the first violation found.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.address.trim().is_empty() {
            return Err(ValidationError::EmptyAddress);
        }

        for (field, value) in [
            ("price", self.price),
            ("interest_rate", self.interest_rate),
            ("nightly_rate", self.nightly_rate),
            ("property_tax", self.property_tax),
            ("insurance", self.insurance),
            ("snow_removal", self.snow_removal),
            ("hot_tub_maintenance", self.hot_tub_maintenance),
            ("utilities", self.utilities),
            ("maintenance", self.maintenance),
            ("hoa", self.hoa),
            ("other_expenses", self.other_expenses),
        ] {
            non_negative(field, value)?;
        }

        non_negative("bathrooms", f64::from(self.bathrooms))?;

        for (field, value) in [
            ("down_payment_percent", self.down_payment_percent),
            ("occupancy_rate", self.occupancy_rate),
            ("management_fee_percent", self.management_fee_percent),
        ] {
            percent(field, value)?;
        }

        if self.loan_term_years == 0 {
            return Err(ValidationError::NonPositiveLoanTerm(self.loan_term_years));
        }
        if self.loan_term_years > MAX_LOAN_TERM_YEARS {
            return Err(ValidationError::LoanTermTooLong {
                max: MAX_LOAN_TERM_YEARS,
                found: self.loan_term_years,
            });
        }

        Ok(())
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite { field });
    }
    if value < 0.0 {
        return Err(ValidationError::NegativeAmount { field, value });
    }
    Ok(())
}

fn percent(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite { field });
    }
    if !(0.0..=100.0).contains(&value) {
        return Err(ValidationError::PercentOutOfRange { field, value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_property;

    #[test]
    fn seed_property_is_valid() {
        assert_eq!(seed_property().validate(), Ok(()));
    }

    #[test]
    fn rejects_blank_address() {
        let mut property = seed_property();
        property.address = "   ".to_string();
        assert_eq!(property.validate(), Err(ValidationError::EmptyAddress));
    }

    #[test]
    fn rejects_negative_expense() {
        let mut property = seed_property();
        property.hoa = -10.0;
        match property.validate() {
            Err(ValidationError::NegativeAmount { field, .. }) => assert_eq!(field, "hoa"),
            other => panic!("expected negative hoa, got {other:?}"),
        }
    }

    #[test]
    fn rejects_percent_above_hundred() {
        let mut property = seed_property();
        property.occupancy_rate = 101.0;
        match property.validate() {
            Err(ValidationError::PercentOutOfRange { field, value }) => {
                assert_eq!(field, "occupancy_rate");
                assert_eq!(value, 101.0);
            }
            other => panic!("expected occupancy out of range, got {other:?}"),
        }
    }

    #[test]
    fn rejects_zero_loan_term() {
        let mut property = seed_property();
        property.loan_term_years = 0;
        assert_eq!(
            property.validate(),
            Err(ValidationError::NonPositiveLoanTerm(0))
        );
    }

    #[test]
    fn rejects_loan_term_beyond_limit() {
        let mut property = seed_property();
        property.loan_term_years = MAX_LOAN_TERM_YEARS;
        assert_eq!(property.validate(), Ok(()));

        property.loan_term_years = 20_000;
        assert_eq!(
            property.validate(),
            Err(ValidationError::LoanTermTooLong {
                max: MAX_LOAN_TERM_YEARS,
                found: 20_000
            })
        );
    }

    #[test]
    fn non_finite_bathrooms_are_not_finite() {
        let mut property = seed_property();
        property.bathrooms = f32::NAN;
        assert_eq!(
            property.validate(),
            Err(ValidationError::NotFinite { field: "bathrooms" })
        );

        property.bathrooms = f32::INFINITY;
        assert_eq!(
            property.validate(),
            Err(ValidationError::NotFinite { field: "bathrooms" })
        );

        property.bathrooms = -1.0;
        assert!(matches!(
            property.validate(),
            Err(ValidationError::NegativeAmount { field: "bathrooms", .. })
        ));
    }

    #[test]
    fn rejects_nan_price() {
        let mut property = seed_property();
        property.price = f64::NAN;
        assert_eq!(
            property.validate(),
            Err(ValidationError::NotFinite { field: "price" })
        );
    }

    #[test]
    fn zero_price_and_zero_rate_are_allowed() {
        let mut property = seed_property();
        property.price = 0.0;
        property.interest_rate = 0.0;
        property.down_payment_percent = 0.0;
        assert_eq!(property.validate(), Ok(()));
    }
}
