//! Rate table for the motor product
//!
//! All pricing constants live here as one coherent rule set. The table is a
//! value object so alternative tables can be rated against the same engine;
//! `RateTable::default()` is the current filed product.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use core_kernel::{Money, Rate};

use crate::application::{AddOn, CoverageType, VehicleType};

/// Pricing constants for the motor product
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateTable {
    /// Base rate on vehicle value for cars
    pub car_rate: Rate,
    /// Base rate on vehicle value for motorcycles
    pub motorcycle_rate: Rate,
    /// Base rate on vehicle value for vans
    pub van_rate: Rate,
    /// Fee per declared additional driver, ZMW
    pub per_driver_fee: Money,
    /// Surcharge on the post-factor base for commercial use
    pub commercial_surcharge: Rate,
    /// Excess above this earns the lower discount tier, ZMW
    pub excess_tier1_threshold: Money,
    /// Excess above this earns the higher tier instead, ZMW
    pub excess_tier2_threshold: Money,
    pub excess_tier1_discount: Rate,
    pub excess_tier2_discount: Rate,
    /// Floor on the annual premium before proration, ZMW
    pub minimum_annual_premium: Money,
}

impl Default for RateTable {
    fn default() -> Self {
        Self {
            car_rate: Rate::from_percentage(dec!(2.8)),
            motorcycle_rate: Rate::from_percentage(dec!(2.5)),
            van_rate: Rate::from_percentage(dec!(3.5)),
            per_driver_fee: Money::zmw(dec!(500)),
            commercial_surcharge: Rate::from_percentage(dec!(25)),
            excess_tier1_threshold: Money::zmw(dec!(5000)),
            excess_tier2_threshold: Money::zmw(dec!(10000)),
            excess_tier1_discount: Rate::from_percentage(dec!(5)),
            excess_tier2_discount: Rate::from_percentage(dec!(10)),
            minimum_annual_premium: Money::zmw(dec!(200)),
        }
    }
}

impl RateTable {
    /// Base rate applied to the vehicle's current value
    pub fn base_rate(&self, vehicle_type: VehicleType) -> Rate {
        match vehicle_type {
            VehicleType::Car => self.car_rate,
            VehicleType::Motorcycle => self.motorcycle_rate,
            VehicleType::Van => self.van_rate,
        }
    }

    /// Driver-age multiplier
    ///
    /// Youngest drivers carry the heaviest loading; the band is flat through
    /// middle age and rises slightly for senior drivers. Unknown age is
    /// neutral.
    pub fn age_factor(&self, age: Option<i32>) -> Decimal {
        match age {
            None => dec!(1.0),
            Some(a) if a < 25 => dec!(1.5),
            Some(a) if a < 30 => dec!(1.2),
            Some(a) if a < 65 => dec!(1.0),
            Some(_) => dec!(1.1),
        }
    }

    /// Licence-tenure multiplier over continuous years held
    ///
    /// Unknown tenure is neutral.
    pub fn experience_factor(&self, tenure_years: Option<Decimal>) -> Decimal {
        match tenure_years {
            None => dec!(1.0),
            Some(t) if t < dec!(2) => dec!(1.3),
            Some(t) if t < dec!(5) => dec!(1.1),
            Some(_) => dec!(0.9),
        }
    }

    /// Claims-history multiplier: 20% loading per claim when accidents are
    /// declared, neutral otherwise
    pub fn claims_factor(&self, has_accidents: bool, number_of_claims: u32) -> Decimal {
        if has_accidents {
            dec!(1) + dec!(0.2) * Decimal::from(number_of_claims)
        } else {
            dec!(1.0)
        }
    }

    /// Coverage-tier multiplier
    pub fn coverage_factor(&self, coverage_type: CoverageType) -> Decimal {
        match coverage_type {
            CoverageType::Comprehensive => dec!(1.0),
            CoverageType::ThirdPartyFireTheft => dec!(0.7),
            CoverageType::ThirdParty => dec!(0.5),
        }
    }

    /// Flat annual charge for an add-on, ZMW
    pub fn add_on_fee(&self, add_on: AddOn) -> Money {
        let amount = match add_on {
            AddOn::Breakdown => dec!(1200),
            AddOn::Windscreen => dec!(900),
            AddOn::LegalCover => dec!(800),
            AddOn::PassengerLiability => dec!(2500),
            AddOn::RiotStrike => dec!(1500),
            AddOn::ExcessProtector => dec!(2000),
            AddOn::CarHire => dec!(3000),
            AddOn::RoadsideAssistance => dec!(1800),
            AddOn::CrossBorder => dec!(2200),
        };
        Money::zmw(amount)
    }

    /// Discount rate earned by the chosen voluntary excess
    ///
    /// Tiers do not stack: the higher tier supersedes the lower one.
    pub fn excess_discount_rate(&self, excess: Money) -> Rate {
        let excess = excess.clamp_non_negative();
        if excess.amount() > self.excess_tier2_threshold.amount() {
            self.excess_tier2_discount
        } else if excess.amount() > self.excess_tier1_threshold.amount() {
            self.excess_tier1_discount
        } else {
            Rate::new(dec!(0))
        }
    }
}
