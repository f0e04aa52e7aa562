//! Money arithmetic for line items.
//!
//! Amounts are `Decimal` so that sums of line totals stay exact; values are
//! rounded to cents only where a rate is applied.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::{DomainError, DomainResult};

fn out_of_range(what: &str) -> DomainError {
    DomainError::validation(format!("{what} is out of range"))
}

/// `quantity * unit_price`; fails when the product leaves `Decimal` range.
pub fn line_total(quantity: u32, unit_price: Decimal) -> DomainResult<Decimal> {
    Decimal::from(quantity)
        .checked_mul(unit_price)
        .ok_or_else(|| out_of_range("line total"))
}

/// Sum of `amounts`; `what` names the total in the overflow error.
pub fn checked_sum<I>(what: &str, amounts: I) -> DomainResult<Decimal>
where
    I: IntoIterator<Item = Decimal>,
{
    amounts
        .into_iter()
        .try_fold(Decimal::ZERO, |acc, amount| acc.checked_add(amount))
        .ok_or_else(|| out_of_range(what))
}

/// `amount * rate` rounded to cents.
pub fn apply_rate(what: &str, amount: Decimal, rate: Decimal) -> DomainResult<Decimal> {
    amount
        .checked_mul(rate)
        .map(round_money)
        .ok_or_else(|| out_of_range(what))
}

/// Round to cents (half away from zero).
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn line_total_is_exact() {
        assert_eq!(line_total(5, dec!(899.99)).unwrap(), dec!(4499.95));
        assert_eq!(line_total(10, dec!(299.99)).unwrap(), dec!(2999.90));
        assert_eq!(line_total(0, dec!(12.50)).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn line_total_rejects_overflow() {
        let err = line_total(2, dec!(50000000000000000000000000000)).unwrap_err();
        assert_eq!(err, DomainError::validation("line total is out of range"));
    }

    #[test]
    fn checked_sum_rejects_overflow() {
        let half = Decimal::MAX / dec!(2) + Decimal::ONE;
        assert!(checked_sum("subtotal", [half, half]).is_err());
        assert_eq!(
            checked_sum("subtotal", [dec!(1.10), dec!(2.25)]).unwrap(),
            dec!(3.35)
        );
        assert_eq!(checked_sum("subtotal", []).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn apply_rate_rounds_to_cents() {
        assert_eq!(apply_rate("tax", dec!(99.99), dec!(0.10)).unwrap(), dec!(10.00));
        assert!(apply_rate("tax", Decimal::MAX, dec!(2)).is_err());
    }

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(round_money(dec!(0.125)), dec!(0.13));
        assert_eq!(round_money(dec!(33.004)), dec!(33.00));
    }
}
