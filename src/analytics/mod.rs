//! Investment metrics derived from a [`Property`].
//!
//! Every function here is a pure function of the property's current inputs.
//! Ratios that would divide by zero come back as `None` (not applicable)
//! instead of NaN or infinity.

pub mod mortgage;

use serde::{Deserialize, Serialize};

use crate::models::Property;

pub use mortgage::{amortization_schedule, AmortizationPeriod};

const NIGHTS_PER_YEAR: f64 = 365.0;
const MONTHS_PER_YEAR: f64 = 12.0;

/// Annualized operating expense lines
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct ExpenseBreakdown {
    pub property_tax: f64,
    pub insurance: f64,
    pub management: f64,
    pub snow_removal: f64,
    pub hot_tub_maintenance: f64,
    pub utilities: f64,
    pub maintenance: f64,
    pub hoa: f64,
    pub other: f64,
}

impl ExpenseBreakdown {
    pub fn total(&self) -> f64 {
        self.fixed() + self.management
    }

    /// Everything except the management fee, which scales with revenue.
    pub fn fixed(&self) -> f64 {
        self.property_tax
            + self.insurance
            + self.snow_removal
            + self.hot_tub_maintenance
            + self.utilities
            + self.maintenance
            + self.hoa
            + self.other
    }
}

/// Full set of metrics for one property. `None` marks a metric that is not
/// applicable for these inputs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InvestmentMetrics {
    pub loan_amount: f64,
    pub down_payment: f64,
    pub monthly_mortgage_payment: f64,
    pub annual_debt_service: f64,
    pub gross_annual_revenue: f64,
    pub expenses: ExpenseBreakdown,
    pub annual_operating_expenses: f64,
    pub net_operating_income: f64,
    pub annual_cash_flow: f64,
    pub monthly_cash_flow: f64,
    pub cap_rate: Option<f64>,
    pub cash_on_cash_return: Option<f64>,
    pub break_even_occupancy: Option<f64>,
}

/// `numerator / denominator`, or `None` when the denominator is zero or the
/// result is not a finite number.
pub fn safe_ratio(numerator: f64, denominator: f64) -> Option<f64> {
    if denominator == 0.0 {
        return None;
    }
    let ratio = numerator / denominator;
    ratio.is_finite().then_some(ratio)
}

/// Cash put down at purchase
pub fn down_payment(property: &Property) -> f64 {
    property.price * property.down_payment_percent / 100.0
}

pub fn loan_amount(property: &Property) -> f64 {
    property.price * (1.0 - property.down_payment_percent / 100.0)
}

pub fn monthly_mortgage_payment(property: &Property) -> f64 {
    mortgage::monthly_payment(
        loan_amount(property),
        property.interest_rate,
        property.loan_term_years,
    )
}

pub fn annual_debt_service(property: &Property) -> f64 {
    monthly_mortgage_payment(property) * MONTHS_PER_YEAR
}

pub fn gross_annual_revenue(property: &Property) -> f64 {
    property.nightly_rate * NIGHTS_PER_YEAR * property.occupancy_rate / 100.0
}

pub fn expense_breakdown(property: &Property) -> ExpenseBreakdown {
    ExpenseBreakdown {
        property_tax: property.property_tax,
        insurance: property.insurance,
        management: property.management_fee_percent / 100.0 * gross_annual_revenue(property),
        snow_removal: property.snow_removal,
        hot_tub_maintenance: property.hot_tub_maintenance,
        utilities: property.utilities * MONTHS_PER_YEAR,
        maintenance: property.maintenance * MONTHS_PER_YEAR,
        hoa: property.hoa * MONTHS_PER_YEAR,
        other: property.other_expenses,
    }
}

pub fn annual_operating_expenses(property: &Property) -> f64 {
    expense_breakdown(property).total()
}

/// Revenue minus operating expenses, before debt service
pub fn net_operating_income(property: &Property) -> f64 {
    gross_annual_revenue(property) - annual_operating_expenses(property)
}

pub fn annual_cash_flow(property: &Property) -> f64 {
    net_operating_income(property) - annual_debt_service(property)
}

/// NOI as a percentage of purchase price
pub fn cap_rate(property: &Property) -> Option<f64> {
    safe_ratio(net_operating_income(property), property.price).map(percent)
}

/// Annual cash flow as a percentage of the down payment
pub fn cash_on_cash_return(property: &Property) -> Option<f64> {
    safe_ratio(annual_cash_flow(property), down_payment(property)).map(percent)
}

/// Occupancy percentage at which annual cash flow is exactly zero, holding
/// every other input fixed. May exceed 100 when no occupancy breaks even.
pub fn break_even_occupancy(property: &Property) -> Option<f64> {
    let costs = expense_breakdown(property).fixed() + annual_debt_service(property);
    let kept_share = 1.0 - property.management_fee_percent / 100.0;
    let revenue_at_full_occupancy = property.nightly_rate * NIGHTS_PER_YEAR;
    safe_ratio(costs, revenue_at_full_occupancy * kept_share).map(percent)
}

/// Compute every metric for `property`.
pub fn analyze(property: &Property) -> InvestmentMetrics {
    let expenses = expense_breakdown(property);
    let gross_annual_revenue = gross_annual_revenue(property);
    let annual_operating_expenses = expenses.total();
    let net_operating_income = gross_annual_revenue - annual_operating_expenses;
    let monthly_mortgage_payment = monthly_mortgage_payment(property);
    let annual_debt_service = monthly_mortgage_payment * MONTHS_PER_YEAR;
    let annual_cash_flow = net_operating_income - annual_debt_service;

    InvestmentMetrics {
        loan_amount: loan_amount(property),
        down_payment: down_payment(property),
        monthly_mortgage_payment,
        annual_debt_service,
        gross_annual_revenue,
        expenses,
        annual_operating_expenses,
        net_operating_income,
        annual_cash_flow,
        monthly_cash_flow: annual_cash_flow / MONTHS_PER_YEAR,
        cap_rate: cap_rate(property),
        cash_on_cash_return: cash_on_cash_return(property),
        break_even_occupancy: break_even_occupancy(property),
    }
}

fn percent(ratio: f64) -> f64 {
    ratio * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_property;

    fn close(actual: f64, expected: f64) -> bool {
        (actual - expected).abs() < 1e-6
    }

    #[test]
    fn safe_ratio_guards_zero_and_non_finite() {
        assert_eq!(safe_ratio(10.0, 4.0), Some(2.5));
        assert_eq!(safe_ratio(10.0, 0.0), None);
        assert_eq!(safe_ratio(0.0, 0.0), None);
        assert_eq!(safe_ratio(f64::MAX, 1e-300), None);
    }

    #[test]
    fn seed_property_metrics() {
        let metrics = analyze(&seed_property());

        assert!(close(metrics.loan_amount, 360_000.0));
        assert!(close(metrics.down_payment, 90_000.0));
        assert!(close(metrics.gross_annual_revenue, 59_312.5));
        assert!(close(metrics.expenses.management, 14_828.125));
        assert!(close(metrics.expenses.utilities, 3600.0));
        assert!(close(metrics.expenses.hoa, 600.0));
        assert!(close(metrics.annual_operating_expenses, 31_578.125));
        assert!(close(metrics.net_operating_income, 27_734.375));
        assert!((metrics.monthly_mortgage_payment - 2275.44).abs() < 0.01);

        let cap_rate = metrics.cap_rate.expect("cap rate");
        assert!((cap_rate - 6.1632).abs() < 0.001);

        let break_even = metrics.break_even_occupancy.expect("break-even");
        assert!(break_even < 65.0 && break_even > 60.0);
        assert!(metrics.annual_cash_flow > 0.0);
    }

    #[test]
    fn annual_fields_are_not_annualized_again() {
        let mut property = seed_property();
        property.nightly_rate = 0.0;
        property.property_tax = 1000.0;
        property.insurance = 500.0;
        property.snow_removal = 300.0;
        property.hot_tub_maintenance = 200.0;
        property.utilities = 10.0;
        property.maintenance = 20.0;
        property.hoa = 30.0;
        property.other_expenses = 40.0;

        assert!(close(annual_operating_expenses(&property), 2000.0 + 720.0 + 40.0));
    }

    #[test]
    fn management_fee_is_share_of_revenue() {
        let mut property = seed_property();
        property.management_fee_percent = 10.0;
        let revenue = gross_annual_revenue(&property);
        assert!(close(expense_breakdown(&property).management, revenue * 0.10));
    }

    #[test]
    fn zero_price_makes_cap_rate_not_applicable() {
        let mut property = seed_property();
        property.price = 0.0;
        let metrics = analyze(&property);

        assert_eq!(metrics.cap_rate, None);
        assert_eq!(metrics.cash_on_cash_return, None);
        assert!(close(metrics.net_operating_income, 27_734.375));
        assert_eq!(metrics.monthly_mortgage_payment, 0.0);
    }

    #[test]
    fn zero_down_payment_makes_cash_on_cash_not_applicable() {
        let mut property = seed_property();
        property.down_payment_percent = 0.0;
        let metrics = analyze(&property);

        assert_eq!(metrics.cash_on_cash_return, None);
        assert!(metrics.cap_rate.is_some());
        assert!(close(metrics.loan_amount, 450_000.0));
    }

    #[test]
    fn zero_nightly_rate_makes_break_even_not_applicable() {
        let mut property = seed_property();
        property.nightly_rate = 0.0;
        let metrics = analyze(&property);

        assert_eq!(metrics.break_even_occupancy, None);
        assert_eq!(metrics.gross_annual_revenue, 0.0);
        assert!(metrics.annual_cash_flow < 0.0);
    }

    #[test]
    fn full_management_fee_makes_break_even_not_applicable() {
        let mut property = seed_property();
        property.management_fee_percent = 100.0;
        assert_eq!(break_even_occupancy(&property), None);
    }

    #[test]
    fn cash_flow_is_zero_at_break_even_occupancy() {
        let mut property = seed_property();
        let break_even = break_even_occupancy(&property).expect("break-even");
        property.occupancy_rate = break_even;
        assert!(annual_cash_flow(&property).abs() < 1e-6);
    }

    #[test]
    fn all_cash_purchase_has_no_debt_service() {
        let mut property = seed_property();
        property.down_payment_percent = 100.0;
        let metrics = analyze(&property);

        assert_eq!(metrics.loan_amount, 0.0);
        assert_eq!(metrics.annual_debt_service, 0.0);
        assert!(close(metrics.annual_cash_flow, metrics.net_operating_income));
        assert!(close(
            metrics.cash_on_cash_return.expect("coc"),
            metrics.cap_rate.expect("cap rate")
        ));
    }

    #[test]
    fn unvalidated_long_term_still_yields_finite_metrics() {
        let mut property = seed_property();
        property.loan_term_years = 20_000;
        let metrics = analyze(&property);

        assert!(metrics.monthly_mortgage_payment.is_finite());
        assert!(metrics.annual_cash_flow.is_finite());
        assert!(metrics.monthly_cash_flow.is_finite());
        assert!(metrics.break_even_occupancy.is_some());
    }

    #[test]
    fn monthly_cash_flow_is_twelfth_of_annual() {
        let metrics = analyze(&seed_property());
        assert!(close(metrics.monthly_cash_flow * 12.0, metrics.annual_cash_flow));
    }
}
