//! Test Data Builders
//!
//! Builder patterns for constructing applications with sensible defaults.
//! Tests specify only the relevant fields and take defaults for the rest:
//! a 35-year-old private car owner with a seasoned licence, comprehensive
//! cover, no add-ons, and a full-year term.

use chrono::NaiveDate;
use core_kernel::Money;
use domain_rating::{
    AddOns, Application, CoverPeriod, CoverageSelection, CoverageType, DriverInfo, PersonalInfo,
    VehicleDetails, VehicleType, VehicleUse,
};

use crate::fixtures::{DateFixtures, MoneyFixtures};

/// Builder for quote applications
pub struct ApplicationBuilder {
    personal: PersonalInfo,
    vehicle: VehicleDetails,
    driver: DriverInfo,
    coverage: CoverageSelection,
}

impl Default for ApplicationBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ApplicationBuilder {
    /// Creates a builder with default values
    pub fn new() -> Self {
        Self {
            personal: PersonalInfo {
                first_name: "Natasha".to_string(),
                last_name: "Zulu".to_string(),
                email: "natasha.zulu@example.com".to_string(),
                phone: "+260966123456".to_string(),
                national_id: Some("123456/10/1".to_string()),
                address: Some("Plot 12, Great East Road".to_string()),
                city: Some("Lusaka".to_string()),
            },
            vehicle: VehicleDetails {
                make: "Toyota".to_string(),
                model: "Hilux".to_string(),
                year: Some(2019),
                registration_number: "BAC 7733".to_string(),
                vehicle_type: VehicleType::Car,
                current_value: MoneyFixtures::vehicle_value(),
            },
            driver: DriverInfo {
                date_of_birth: Some(DateFixtures::dob_age_35()),
                license_issued_date: Some(DateFixtures::licence_seasoned()),
                license_years: None,
                has_accidents: false,
                number_of_claims: 0,
                occupation: Some("Accountant".to_string()),
            },
            coverage: CoverageSelection {
                coverage_type: CoverageType::Comprehensive,
                excess_amount: MoneyFixtures::zero(),
                add_ons: AddOns::none(),
                additional_drivers: 0,
                vehicle_use: VehicleUse::Private,
                cover_period: CoverPeriod::TwelveMonths,
            },
        }
    }

    /// Sets the vehicle's current value
    pub fn with_vehicle_value(mut self, value: Money) -> Self {
        self.vehicle.current_value = value;
        self
    }

    /// Sets the vehicle type
    pub fn with_vehicle_type(mut self, vehicle_type: VehicleType) -> Self {
        self.vehicle.vehicle_type = vehicle_type;
        self
    }

    /// Sets the driver's date of birth
    pub fn with_date_of_birth(mut self, dob: NaiveDate) -> Self {
        self.driver.date_of_birth = Some(dob);
        self
    }

    /// Sets the licence issue date
    pub fn with_licence_issued(mut self, issued: NaiveDate) -> Self {
        self.driver.license_issued_date = Some(issued);
        self
    }

    /// Clears all driver history so every factor is neutral
    pub fn with_unknown_driver(mut self) -> Self {
        self.driver = DriverInfo::default();
        self
    }

    /// Sets the claims history
    pub fn with_claims(mut self, number_of_claims: u32) -> Self {
        self.driver.has_accidents = number_of_claims > 0;
        self.driver.number_of_claims = number_of_claims;
        self
    }

    /// Sets the coverage tier
    pub fn with_coverage_type(mut self, coverage_type: CoverageType) -> Self {
        self.coverage.coverage_type = coverage_type;
        self
    }

    /// Sets the voluntary excess
    pub fn with_excess(mut self, excess: Money) -> Self {
        self.coverage.excess_amount = excess;
        self
    }

    /// Sets the selected add-ons
    pub fn with_add_ons(mut self, add_ons: AddOns) -> Self {
        self.coverage.add_ons = add_ons;
        self
    }

    /// Sets the number of additional drivers
    pub fn with_additional_drivers(mut self, count: u32) -> Self {
        self.coverage.additional_drivers = count;
        self
    }

    /// Sets the declared vehicle use
    pub fn with_vehicle_use(mut self, vehicle_use: VehicleUse) -> Self {
        self.coverage.vehicle_use = vehicle_use;
        self
    }

    /// Sets the cover period
    pub fn with_cover_period(mut self, period: CoverPeriod) -> Self {
        self.coverage.cover_period = period;
        self
    }

    /// Builds the application
    pub fn build(self) -> Application {
        Application {
            personal: self.personal,
            vehicle: self.vehicle,
            driver: self.driver,
            coverage: self.coverage,
        }
    }
}
