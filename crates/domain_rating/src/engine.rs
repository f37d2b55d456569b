//! The rating engine
//!
//! A pure, total function from an application to a price breakdown. No I/O,
//! no hidden state: the same application rated as of the same date always
//! produces the same breakdown. Missing optional inputs degrade to neutral
//! factors and out-of-range monetary amounts clamp to zero, so the engine
//! has no failure modes beyond a floor-clamped degenerate price.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::Money;

use crate::application::{Application, VehicleUse};
use crate::breakdown::PriceBreakdown;
use crate::tables::RateTable;

/// Months in a full policy year, the proration denominator
const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Rates applications against a rate table
///
/// The engine holds no mutable state; it is cheap to construct and safe to
/// share. `RatingEngine::default()` rates against the current filed table.
#[derive(Debug, Clone, Default)]
pub struct RatingEngine {
    table: RateTable,
}

impl RatingEngine {
    /// Creates an engine over the default rate table
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine over a specific rate table
    pub fn with_table(table: RateTable) -> Self {
        Self { table }
    }

    /// Returns the table this engine rates against
    pub fn table(&self) -> &RateTable {
        &self.table
    }

    /// Rates an application as of today
    pub fn quote(&self, application: &Application) -> PriceBreakdown {
        self.quote_as_of(application, Utc::now().date_naive())
    }

    /// Rates an application as of an explicit date
    ///
    /// Driver age and licence tenure are derived relative to `as_of`, which
    /// makes the computation reproducible for a fixed date.
    pub fn quote_as_of(&self, application: &Application, as_of: NaiveDate) -> PriceBreakdown {
        let table = &self.table;
        let vehicle = &application.vehicle;
        let driver = &application.driver;
        let coverage = &application.coverage;

        // Value-derived base, then the multiplicative factor chain
        let value = vehicle.current_value.clamp_non_negative();
        let raw_base = table.base_rate(vehicle.vehicle_type).as_decimal() * value.amount();

        let age_factor = table.age_factor(driver.age_as_of(as_of));
        let experience_factor = table.experience_factor(driver.tenure_years_as_of(as_of));
        let claims_factor = table.claims_factor(driver.has_accidents, driver.number_of_claims);
        let coverage_factor = table.coverage_factor(coverage.coverage_type);

        let base_price =
            Money::zmw(raw_base * age_factor * experience_factor * claims_factor * coverage_factor);

        tracing::debug!(
            %age_factor,
            %experience_factor,
            %claims_factor,
            %coverage_factor,
            base = %base_price,
            "derived rating factors"
        );

        // Flat annual charges: add-ons, extra drivers, commercial surcharge
        let mut additional_charges = Money::zmw(dec!(0));
        for add_on in coverage.add_ons.active() {
            additional_charges = additional_charges + table.add_on_fee(add_on);
        }
        additional_charges = additional_charges
            + table.per_driver_fee * Decimal::from(coverage.additional_drivers);
        if coverage.vehicle_use == VehicleUse::Commercial {
            additional_charges =
                additional_charges + table.commercial_surcharge.apply(&base_price);
        }

        // Voluntary excess discount, a percentage of the post-factor base
        let discount = table
            .excess_discount_rate(coverage.excess_amount)
            .apply(&base_price);

        // Annual premium, floored before proration to the cover period
        let annual = (base_price + additional_charges - discount)
            .max(table.minimum_annual_premium);
        let total_price = annual * coverage.cover_period.year_fraction();
        let monthly_price = annual / MONTHS_PER_YEAR;

        tracing::debug!(
            %annual,
            period_months = coverage.cover_period.months(),
            total = %total_price,
            "quote computed"
        );

        PriceBreakdown::new(
            base_price,
            discount,
            additional_charges,
            total_price,
            monthly_price,
            coverage.cover_period,
        )
    }
}

/// Rates an application against the default table as of today
pub fn compute_quote(application: &Application) -> PriceBreakdown {
    RatingEngine::new().quote(application)
}

/// Rates an application against the default table as of an explicit date
pub fn compute_quote_as_of(application: &Application, as_of: NaiveDate) -> PriceBreakdown {
    RatingEngine::new().quote_as_of(application, as_of)
}
