use serde::{Deserialize, Serialize};

/// One month of an amortizing loan.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct AmortizationPeriod {
    /// 1-based month number
    pub period: u32,
    pub payment: f64,
    pub interest: f64,
    pub principal: f64,
    pub remaining_balance: f64,
}

/// Level monthly payment for a fully amortizing loan.
///
/// `annual_rate_percent` is a percentage (6.5 means 6.5%). A zero rate
/// spreads the principal evenly over every payment.
pub fn monthly_payment(principal: f64, annual_rate_percent: f64, term_years: u32) -> f64 {
    let payments = f64::from(term_years) * 12.0;
    if payments == 0.0 {
        return 0.0;
    }

    let rate = annual_rate_percent / 100.0 / 12.0;
    // Vanishes for very small rates where 1 + rate rounds to 1
    let discount = 1.0 - (1.0 + rate).powf(-payments);
    if rate == 0.0 || discount <= 0.0 {
        return principal / payments;
    }

    principal * rate / discount
}

/// Month-by-month split of each payment into interest and principal.
pub fn amortization_schedule(
    principal: f64,
    annual_rate_percent: f64,
    term_years: u32,
) -> Vec<AmortizationPeriod> {
    let payment = monthly_payment(principal, annual_rate_percent, term_years);
    let rate = annual_rate_percent / 100.0 / 12.0;

    let mut balance = principal;
    (1..=term_years.saturating_mul(12))
        .map(|period| {
            let interest = balance * rate;
            let principal_paid = payment - interest;
            balance -= principal_paid;
            AmortizationPeriod {
                period,
                payment,
                interest,
                principal: principal_paid,
                remaining_balance: balance,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thirty_year_payment_matches_published_tables() {
        let payment = monthly_payment(360_000.0, 6.5, 30);
        assert!((payment - 2275.44).abs() < 0.01, "payment was {payment}");
    }

    #[test]
    fn zero_rate_divides_principal_evenly() {
        assert_eq!(monthly_payment(360_000.0, 0.0, 30), 1000.0);
    }

    #[test]
    fn zero_principal_costs_nothing() {
        assert_eq!(monthly_payment(0.0, 7.0, 30), 0.0);
    }

    #[test]
    fn very_long_terms_stay_finite() {
        for years in [20_000, 400_000_000, u32::MAX] {
            let payment = monthly_payment(360_000.0, 6.5, years);
            assert!(payment.is_finite(), "payment for {years} years was {payment}");
            // Approaches interest-only as the term grows
            assert!((payment - 360_000.0 * 0.065 / 12.0).abs() < 1e-6);
        }
    }

    #[test]
    fn tiny_rate_falls_back_to_even_split() {
        let payment = monthly_payment(360_000.0, 1e-15, 30);
        assert!((payment - 1000.0).abs() < 1e-6);
    }

    #[test]
    fn schedule_pays_off_the_loan() {
        let schedule = amortization_schedule(250_000.0, 5.75, 15);
        assert_eq!(schedule.len(), 180);
        assert_eq!(schedule[0].period, 1);

        let last = schedule.last().expect("non-empty schedule");
        assert!(last.remaining_balance.abs() < 0.01);

        let principal: f64 = schedule.iter().map(|p| p.principal).sum();
        assert!((principal - 250_000.0).abs() < 0.01);
    }

    #[test]
    fn interest_share_shrinks_over_time() {
        let schedule = amortization_schedule(300_000.0, 7.0, 30);
        assert!(schedule[0].interest > schedule[0].principal);
        assert!(schedule[359].interest < schedule[359].principal);
        assert!(schedule.windows(2).all(|w| w[1].interest < w[0].interest));
    }
}
