//! Price breakdown returned by the rating engine

use serde::{Deserialize, Serialize};

use core_kernel::Money;

use crate::application::CoverPeriod;

/// The priced result of a quote application
///
/// All amounts are non-negative ZMW. The three annualized components
/// (`base_price`, `discount`, `additional_charges`) are rounded to whole
/// Kwacha; `total_price` and `monthly_price` carry currency precision.
/// `total_price` is the premium for the selected cover period and
/// `monthly_price` is the per-month installment, so for a full-year term
/// `monthly_price = total_price / 12`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    /// Annual base premium after all rating factors
    pub base_price: Money,
    /// Annual discount (excess tier)
    pub discount: Money,
    /// Annual flat charges (add-ons, extra drivers, commercial surcharge)
    pub additional_charges: Money,
    /// Premium for the selected cover period
    pub total_price: Money,
    /// Per-month installment
    pub monthly_price: Money,
    /// The term the total was prorated to
    pub cover_period: CoverPeriod,
}

impl PriceBreakdown {
    /// Assembles a breakdown, applying the documented rounding rules
    pub fn new(
        base_price: Money,
        discount: Money,
        additional_charges: Money,
        total_price: Money,
        monthly_price: Money,
        cover_period: CoverPeriod,
    ) -> Self {
        Self {
            base_price: base_price.round_whole(),
            discount: discount.round_whole(),
            additional_charges: additional_charges.round_whole(),
            total_price: total_price.round_to_currency(),
            monthly_price: monthly_price.round_to_currency(),
            cover_period,
        }
    }
}
