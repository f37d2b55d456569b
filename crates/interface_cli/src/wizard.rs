//! Wizard state for incremental application collection
//!
//! The multi-step form is modeled as an explicit state object. Field
//! setters are consuming and chainable; navigation validates in place, so a
//! refused `advance` leaves the draft and everything entered so far intact.
//! `finish` re-validates the whole draft before producing the immutable
//! `Application` snapshot the rating engine consumes.

use chrono::{Datelike, NaiveDate, Utc};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use core_kernel::{parse_display_date, ApplicationId, Money, QuoteId};
use domain_rating::{
    Application, CoverPeriod, CoverageSelection, CoverageType, DriverInfo, PersonalInfo,
    VehicleDetails, VehicleType, VehicleUse,
};

use crate::error::WizardError;

/// Minimum driver age accepted at collection time
const MINIMUM_DRIVER_AGE: i32 = 18;

/// The five steps of the quote wizard, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WizardStep {
    Personal,
    Vehicle,
    Driver,
    Coverage,
    Summary,
}

impl WizardStep {
    /// The step after this one, if any
    pub fn next(&self) -> Option<WizardStep> {
        match self {
            WizardStep::Personal => Some(WizardStep::Vehicle),
            WizardStep::Vehicle => Some(WizardStep::Driver),
            WizardStep::Driver => Some(WizardStep::Coverage),
            WizardStep::Coverage => Some(WizardStep::Summary),
            WizardStep::Summary => None,
        }
    }

    /// The step before this one, if any
    pub fn back(&self) -> Option<WizardStep> {
        match self {
            WizardStep::Personal => None,
            WizardStep::Vehicle => Some(WizardStep::Personal),
            WizardStep::Driver => Some(WizardStep::Vehicle),
            WizardStep::Coverage => Some(WizardStep::Driver),
            WizardStep::Summary => Some(WizardStep::Coverage),
        }
    }

    /// Progress label shown to the applicant
    pub fn label(&self) -> &'static str {
        match self {
            WizardStep::Personal => "Personal",
            WizardStep::Vehicle => "Vehicle",
            WizardStep::Driver => "Driver",
            WizardStep::Coverage => "Coverage",
            WizardStep::Summary => "Quote",
        }
    }
}

/// A finalized application ready for rating
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmittedApplication {
    /// Reference for the collected application itself
    pub application_id: ApplicationId,
    /// Reference for the quote offered against it
    pub quote_id: QuoteId,
    pub application: Application,
}

/// The in-progress application
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteDraft {
    step: WizardStep,
    /// Reference date for age and tenure validation
    as_of: NaiveDate,
    personal: PersonalInfo,
    vehicle: VehicleDetails,
    driver: DriverInfo,
    coverage: CoverageSelection,
}

impl QuoteDraft {
    /// Starts an empty draft validated against the given reference date
    pub fn new(as_of: NaiveDate) -> Self {
        Self {
            step: WizardStep::Personal,
            as_of,
            personal: PersonalInfo::default(),
            vehicle: VehicleDetails {
                make: String::new(),
                model: String::new(),
                year: None,
                registration_number: String::new(),
                vehicle_type: VehicleType::Car,
                current_value: Money::zmw(dec!(0)),
            },
            driver: DriverInfo::default(),
            coverage: CoverageSelection {
                coverage_type: CoverageType::Comprehensive,
                excess_amount: Money::zmw(dec!(0)),
                add_ons: Default::default(),
                additional_drivers: 0,
                vehicle_use: VehicleUse::Private,
                cover_period: CoverPeriod::TwelveMonths,
            },
        }
    }

    /// Starts an empty draft validated against today's date
    pub fn today() -> Self {
        Self::new(Utc::now().date_naive())
    }

    /// The step currently being collected
    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// Replaces the personal details
    pub fn with_personal(mut self, personal: PersonalInfo) -> Self {
        self.personal = personal;
        self
    }

    /// Replaces the vehicle details
    pub fn with_vehicle(mut self, vehicle: VehicleDetails) -> Self {
        self.vehicle = vehicle;
        self
    }

    /// Replaces the driver details
    pub fn with_driver(mut self, driver: DriverInfo) -> Self {
        self.driver = driver;
        self
    }

    /// Replaces the coverage selection
    pub fn with_coverage(mut self, coverage: CoverageSelection) -> Self {
        self.coverage = coverage;
        self
    }

    /// Validates the current step and moves to the next one
    ///
    /// On refusal the draft is untouched; nothing entered so far is lost.
    /// Returns the step now being collected.
    pub fn advance(&mut self) -> Result<WizardStep, WizardError> {
        self.validate_step(self.step)?;
        self.step = self.step.next().ok_or(WizardError::AtFinalStep)?;
        Ok(self.step)
    }

    /// Moves back one step without validation, preserving entered data
    ///
    /// A no-op at the first step. Returns the step now being collected.
    pub fn back(&mut self) -> WizardStep {
        if let Some(prev) = self.step.back() {
            self.step = prev;
        }
        self.step
    }

    /// Validates every step and produces the immutable application snapshot
    ///
    /// Issues fresh application and quote references on success. The draft
    /// is left as-is, so a refused submission can be corrected and retried;
    /// the snapshot itself never changes after this point.
    pub fn finish(&self) -> Result<SubmittedApplication, WizardError> {
        for step in [
            WizardStep::Personal,
            WizardStep::Vehicle,
            WizardStep::Driver,
            WizardStep::Coverage,
        ] {
            self.validate_step(step)?;
        }

        let application_id = ApplicationId::new();
        let quote_id = QuoteId::new();
        tracing::info!(%application_id, %quote_id, "application finalized");

        Ok(SubmittedApplication {
            application_id,
            quote_id,
            application: Application {
                personal: self.personal.clone(),
                vehicle: self.vehicle.clone(),
                driver: self.driver.clone(),
                coverage: self.coverage.clone(),
            },
        })
    }

    fn validate_step(&self, step: WizardStep) -> Result<(), WizardError> {
        match step {
            WizardStep::Personal => self.validate_personal(),
            WizardStep::Vehicle => self.validate_vehicle(),
            WizardStep::Driver => self.validate_driver(),
            WizardStep::Coverage => self.validate_coverage(),
            WizardStep::Summary => Ok(()),
        }
    }

    fn validate_personal(&self) -> Result<(), WizardError> {
        if self.personal.first_name.trim().is_empty() {
            return Err(WizardError::MissingField("first name"));
        }
        if self.personal.last_name.trim().is_empty() {
            return Err(WizardError::MissingField("last name"));
        }
        if self.personal.phone.trim().is_empty() {
            return Err(WizardError::MissingField("phone"));
        }
        let email = self.personal.email.trim();
        if email.is_empty() {
            return Err(WizardError::MissingField("email"));
        }
        // Shape check only; deliverability is not our problem
        let valid = email
            .split_once('@')
            .map(|(local, domain)| !local.is_empty() && domain.contains('.'))
            .unwrap_or(false);
        if !valid {
            return Err(WizardError::InvalidEmail(email.to_string()));
        }
        Ok(())
    }

    fn validate_vehicle(&self) -> Result<(), WizardError> {
        if self.vehicle.make.trim().is_empty() {
            return Err(WizardError::MissingField("vehicle make"));
        }
        if self.vehicle.model.trim().is_empty() {
            return Err(WizardError::MissingField("vehicle model"));
        }
        if self.vehicle.registration_number.trim().is_empty() {
            return Err(WizardError::MissingField("registration number"));
        }
        if !self.vehicle.current_value.is_positive() {
            return Err(WizardError::NonPositiveVehicleValue);
        }
        Ok(())
    }

    fn validate_driver(&self) -> Result<(), WizardError> {
        let dob = self
            .driver
            .date_of_birth
            .ok_or(WizardError::MissingField("date of birth"))?;
        if dob > self.as_of {
            return Err(WizardError::FutureDate("Date of birth"));
        }
        if self.as_of.year() - dob.year() < MINIMUM_DRIVER_AGE {
            return Err(WizardError::DriverTooYoung);
        }
        if let Some(issued) = self.driver.license_issued_date {
            if issued > self.as_of {
                return Err(WizardError::FutureDate("Licence issue date"));
            }
            if issued < dob {
                return Err(WizardError::LicenceBeforeBirth);
            }
        }
        Ok(())
    }

    fn validate_coverage(&self) -> Result<(), WizardError> {
        if self.coverage.excess_amount.is_negative() {
            return Err(WizardError::NegativeExcess);
        }
        Ok(())
    }
}

/// Parses a dd/mm/yyyy date field, attributing failures to the field name
pub fn parse_date_field(input: &str, field: &'static str) -> Result<NaiveDate, WizardError> {
    parse_display_date(input).map_err(|source| WizardError::InvalidDate { field, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn as_of() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    fn valid_personal() -> PersonalInfo {
        PersonalInfo {
            first_name: "Chileshe".to_string(),
            last_name: "Banda".to_string(),
            email: "chileshe@example.com".to_string(),
            phone: "+260955000111".to_string(),
            ..PersonalInfo::default()
        }
    }

    #[test]
    fn test_steps_progress_in_order() {
        assert_eq!(WizardStep::Personal.next(), Some(WizardStep::Vehicle));
        assert_eq!(WizardStep::Summary.next(), None);
        assert_eq!(WizardStep::Personal.back(), None);
        assert_eq!(WizardStep::Summary.back(), Some(WizardStep::Coverage));
    }

    #[test]
    fn test_advance_requires_valid_step() {
        let mut draft = QuoteDraft::new(as_of());
        let err = draft.advance().unwrap_err();
        assert_eq!(err, WizardError::MissingField("first name"));
        assert_eq!(draft.step(), WizardStep::Personal);

        let mut draft = draft.with_personal(valid_personal());
        assert_eq!(draft.advance().unwrap(), WizardStep::Vehicle);
    }

    #[test]
    fn test_refused_advance_keeps_entered_data() {
        let mut draft = QuoteDraft::new(as_of()).with_personal(PersonalInfo {
            email: "not-an-email".to_string(),
            ..valid_personal()
        });
        assert!(draft.advance().is_err());

        // Everything typed so far survives the refused transition
        assert_eq!(draft.step(), WizardStep::Personal);
        assert_eq!(draft.personal.first_name, "Chileshe");
        assert_eq!(draft.personal.email, "not-an-email");
    }

    #[test]
    fn test_back_preserves_entered_data() {
        let mut draft = QuoteDraft::new(as_of()).with_personal(valid_personal());
        draft.advance().unwrap();
        assert_eq!(draft.back(), WizardStep::Personal);
        assert_eq!(draft.personal.first_name, "Chileshe");
    }

    #[test]
    fn test_back_at_first_step_is_noop() {
        let mut draft = QuoteDraft::new(as_of());
        assert_eq!(draft.back(), WizardStep::Personal);
    }

    #[test]
    fn test_rejects_bad_email_shapes() {
        for email in ["plainaddress", "@no-local.com", "user@nodot"] {
            let mut draft = QuoteDraft::new(as_of()).with_personal(PersonalInfo {
                email: email.to_string(),
                ..valid_personal()
            });
            assert!(
                matches!(draft.advance(), Err(WizardError::InvalidEmail(_))),
                "accepted {email}"
            );
        }
    }

    #[test]
    fn test_driver_under_18_rejected() {
        let draft = QuoteDraft::new(as_of()).with_driver(DriverInfo {
            date_of_birth: NaiveDate::from_ymd_opt(2010, 1, 1),
            ..DriverInfo::default()
        });
        assert_eq!(
            draft.validate_step(WizardStep::Driver).unwrap_err(),
            WizardError::DriverTooYoung
        );
    }

    #[test]
    fn test_licence_before_birth_rejected() {
        let draft = QuoteDraft::new(as_of()).with_driver(DriverInfo {
            date_of_birth: NaiveDate::from_ymd_opt(1990, 5, 1),
            license_issued_date: NaiveDate::from_ymd_opt(1985, 1, 1),
            ..DriverInfo::default()
        });
        assert_eq!(
            draft.validate_step(WizardStep::Driver).unwrap_err(),
            WizardError::LicenceBeforeBirth
        );
    }

    #[test]
    fn test_parse_date_field_names_the_field() {
        let err = parse_date_field("31/02/1990", "date of birth").unwrap_err();
        assert!(matches!(
            err,
            WizardError::InvalidDate {
                field: "date of birth",
                ..
            }
        ));
    }
}
