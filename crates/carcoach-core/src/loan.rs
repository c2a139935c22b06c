//! Fixed-rate loan amortization.
//!
//! Payments use the standard annuity formula with monthly compounding:
//!
//! payment = P * r / (1 - (1 + r)^-n)
//!
//! where r is the monthly rate and n the number of monthly installments.

use serde::{Deserialize, Serialize};

use crate::error::LoanError;

/// Monthly installment for a fixed-rate loan.
///
/// A zero rate repays the principal in equal parts.
pub fn monthly_payment(
    principal: f64,
    annual_rate_percent: f64,
    years: u32,
) -> Result<f64, LoanError> {
    ensure_finite(principal, "principal")?;
    ensure_finite(annual_rate_percent, "rate")?;
    if years == 0 {
        return Err(LoanError::NonPositiveTerm);
    }
    if principal < 0.0 {
        return Err(LoanError::NegativePrincipal);
    }

    let r = annual_rate_percent / 100.0 / 12.0;
    let n = f64::from(years) * 12.0;

    if r == 0.0 {
        return Ok(principal / n);
    }

    // 1 - (1 + r)^-n, without cancellation for tiny rates.
    let discount = -(-n * r.ln_1p()).exp_m1();
    if discount == 1.0 {
        // Interest-only in the limit of an endless term.
        return Ok(principal * r);
    }
    Ok(principal * r / discount)
}

/// Sum of `months` equal installments.
pub fn total_payment(monthly: f64, months: u64) -> f64 {
    monthly * months as f64
}

/// Render an amount as dollars with thousands separators, e.g. `$1,234.50`.
pub fn format_money(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        "-"
    } else {
        ""
    };
    format!("${sign}{grouped}.{cents}")
}

fn ensure_finite(value: f64, what: &'static str) -> Result<(), LoanError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(LoanError::NotFinite(what))
    }
}

/// A computed loan repayment schedule summary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanQuote {
    /// Amount borrowed.
    pub principal: f64,
    /// Annual interest rate in percent.
    pub annual_rate_percent: f64,
    /// Loan term in years.
    pub years: u32,
    /// Monthly installment.
    pub monthly_payment: f64,
    /// Sum of all installments.
    pub total_payment: f64,
    /// Total paid minus principal.
    pub total_interest: f64,
}

impl LoanQuote {
    /// Quote a loan for a known principal.
    pub fn compute(principal: f64, annual_rate_percent: f64, years: u32) -> Result<Self, LoanError> {
        let monthly = monthly_payment(principal, annual_rate_percent, years)?;
        let total = total_payment(monthly, u64::from(years) * 12);
        Ok(Self {
            principal,
            annual_rate_percent,
            years,
            monthly_payment: monthly,
            total_payment: total,
            total_interest: total - principal,
        })
    }

    /// Quote a loan for a purchase, borrowing the price minus the deposit.
    pub fn from_price(
        price: f64,
        deposit: f64,
        annual_rate_percent: f64,
        years: u32,
    ) -> Result<Self, LoanError> {
        ensure_finite(price, "price")?;
        ensure_finite(deposit, "deposit")?;
        let principal = price - deposit;
        if principal < 0.0 {
            return Err(LoanError::DepositExceedsPrice);
        }
        Self::compute(principal, annual_rate_percent, years)
    }

    /// Number of monthly installments.
    pub fn months(&self) -> u64 {
        u64::from(self.years) * 12
    }

    /// Human-readable summary.
    pub fn summary(&self) -> String {
        format!(
            "Loan amount: {}\nMonthly repayment: {}\nTotal over {} yrs: {}\nTotal interest paid: {}",
            format_money(self.principal),
            format_money(self.monthly_payment),
            self.years,
            format_money(self.total_payment),
            format_money(self.total_interest),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() <= tol
    }

    #[test]
    fn standard_amortization() {
        let quote = LoanQuote::compute(20_000.0, 6.0, 5).unwrap();
        assert!(approx(quote.monthly_payment, 386.66, 0.01));
        assert!(approx(quote.total_payment, 23_199.60, 0.5));
        assert!(approx(quote.total_interest, 3_199.60, 0.5));
        assert_eq!(format_money(quote.monthly_payment), "$386.66");
    }

    #[test]
    fn zero_rate_is_straight_line() {
        let monthly = monthly_payment(12_000.0, 0.0, 4).unwrap();
        assert_eq!(monthly, 250.0);
        assert_eq!(total_payment(monthly, 48), 12_000.0);
    }

    #[test]
    fn zero_term_is_an_error() {
        assert_eq!(
            monthly_payment(10_000.0, 5.0, 0),
            Err(LoanError::NonPositiveTerm)
        );
        assert_eq!(monthly_payment(10_000.0, 0.0, 0), Err(LoanError::NonPositiveTerm));
    }

    #[test]
    fn negative_principal_is_an_error() {
        assert_eq!(
            monthly_payment(-1.0, 5.0, 3),
            Err(LoanError::NegativePrincipal)
        );
    }

    #[test]
    fn non_finite_inputs_rejected() {
        assert_eq!(
            monthly_payment(f64::NAN, 5.0, 3),
            Err(LoanError::NotFinite("principal"))
        );
        assert_eq!(
            monthly_payment(1000.0, f64::INFINITY, 3),
            Err(LoanError::NotFinite("rate"))
        );
    }

    #[test]
    fn tiny_rate_stays_finite() {
        let monthly = monthly_payment(12_000.0, 1e-14, 4).unwrap();
        assert!(monthly.is_finite());
        assert!(approx(monthly, 250.0, 1e-6));

        let quote = LoanQuote::compute(12_000.0, 1e-14, 4).unwrap();
        assert!(quote.summary().contains("Monthly repayment: $250.00"));
    }

    #[test]
    fn zero_principal_costs_nothing() {
        let quote = LoanQuote::compute(0.0, 7.5, 10).unwrap();
        assert_eq!(quote.monthly_payment, 0.0);
        assert_eq!(quote.total_interest, 0.0);
    }

    #[test]
    fn long_terms_do_not_overflow() {
        let total = total_payment(100.0, 12 * 1_000_000);
        assert_eq!(total, 1_200_000_000.0);

        let monthly = monthly_payment(10_000.0, 12.0, u32::MAX).unwrap();
        assert!(approx(monthly, 100.0, 1e-9));
    }

    #[test]
    fn deposit_reduces_principal() {
        let quote = LoanQuote::from_price(25_000.0, 5_000.0, 6.0, 5).unwrap();
        assert_eq!(quote.principal, 20_000.0);
        assert_eq!(quote.months(), 60);
        assert_eq!(
            LoanQuote::from_price(5_000.0, 6_000.0, 6.0, 5),
            Err(LoanError::DepositExceedsPrice)
        );
    }

    #[test]
    fn money_formatting() {
        assert_eq!(format_money(1234.5), "$1,234.50");
        assert_eq!(format_money(0.0), "$0.00");
        assert_eq!(format_money(999.999), "$1,000.00");
        assert_eq!(format_money(1_234_567.891), "$1,234,567.89");
        assert_eq!(format_money(100.0), "$100.00");
        assert_eq!(format_money(-1234.5), "$-1,234.50");
        assert_eq!(format_money(-0.001), "$0.00");
    }

    #[test]
    fn summary_lines() {
        let quote = LoanQuote::compute(12_000.0, 0.0, 4).unwrap();
        assert_eq!(
            quote.summary(),
            "Loan amount: $12,000.00\n\
             Monthly repayment: $250.00\n\
             Total over 4 yrs: $12,000.00\n\
             Total interest paid: $0.00"
        );
    }
}
