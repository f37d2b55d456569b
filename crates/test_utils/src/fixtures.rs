//! Pre-built Test Fixtures
//!
//! Ready-to-use reference data for tests. Dates are fixed so derived ages
//! and tenures are stable regardless of when the suite runs.

use chrono::NaiveDate;
use core_kernel::Money;
use rust_decimal_macros::dec;

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// A mid-range vehicle value
    pub fn vehicle_value() -> Money {
        Money::zmw(dec!(50000))
    }

    /// The young-driver scenario vehicle value
    pub fn small_vehicle_value() -> Money {
        Money::zmw(dec!(25000))
    }

    /// An excess inside the first discount tier
    pub fn tier1_excess() -> Money {
        Money::zmw(dec!(6000))
    }

    /// An excess above the second discount tier
    pub fn tier2_excess() -> Money {
        Money::zmw(dec!(12000))
    }

    /// A zero Kwacha amount
    pub fn zero() -> Money {
        Money::zmw(dec!(0))
    }
}

/// Fixture for date test data
pub struct DateFixtures;

impl DateFixtures {
    /// The reference rating date used across the suite
    pub fn rating_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    /// Date of birth for a 35-year-old as of the rating date
    pub fn dob_age_35() -> NaiveDate {
        NaiveDate::from_ymd_opt(1990, 3, 20).unwrap()
    }

    /// Date of birth for a 22-year-old as of the rating date
    pub fn dob_age_22() -> NaiveDate {
        NaiveDate::from_ymd_opt(2003, 9, 5).unwrap()
    }

    /// Licence issue date with more than five years of tenure
    pub fn licence_seasoned() -> NaiveDate {
        NaiveDate::from_ymd_opt(2012, 1, 10).unwrap()
    }

    /// Licence issue date with under two years of tenure
    pub fn licence_fresh() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 8, 1).unwrap()
    }
}
