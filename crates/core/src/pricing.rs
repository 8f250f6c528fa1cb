//! Pricing

use rusty_money::{Money, iso};
use thiserror::Error;

/// Errors that can occur while pricing an itinerary item.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PricingError {
    /// Per-person price times pax exceeded the representable cost range.
    #[error("cost overflows for base price {base} x {pax} pax")]
    CostOverflow {
        /// Per-person base price in JPY.
        base: u64,
        /// Number of travellers.
        pax: u32,
    },

    /// A pax count of zero cannot price an item.
    #[error("pax count must be at least 1")]
    ZeroPax,
}

/// Flat per-person cost of a catalog service: base price multiplied by pax.
///
/// # Errors
///
/// - [`PricingError::ZeroPax`]: the pax count was zero.
/// - [`PricingError::CostOverflow`]: the multiplication overflowed.
pub fn item_cost(base: u64, pax: u32) -> Result<u64, PricingError> {
    if pax == 0 {
        return Err(PricingError::ZeroPax);
    }

    base.checked_mul(u64::from(pax))
        .ok_or(PricingError::CostOverflow { base, pax })
}

/// Formats a JPY amount for display, e.g. `¥50,000`.
#[must_use]
pub fn format_jpy(amount: u64) -> String {
    // JPY has no minor unit, so the saturation only matters past ~9.2
    // quintillion yen.
    let minor = i64::try_from(amount).unwrap_or(i64::MAX);

    Money::from_minor(minor, iso::JPY).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cost_is_base_times_pax() {
        assert_eq!(item_cost(50_000, 2), Ok(100_000));
        assert_eq!(item_cost(2_500, 4), Ok(10_000));
    }

    #[test]
    fn zero_pax_is_rejected() {
        assert_eq!(item_cost(50_000, 0), Err(PricingError::ZeroPax));
    }

    #[test]
    fn overflowing_cost_is_rejected() {
        let result = item_cost(u64::MAX, 2);

        assert_eq!(
            result,
            Err(PricingError::CostOverflow {
                base: u64::MAX,
                pax: 2
            })
        );
    }

    #[test]
    fn jpy_formatting_groups_thousands() {
        assert_eq!(format_jpy(50_000), "¥50,000");
        assert_eq!(format_jpy(0), "¥0");
    }
}
