//! Collection-layer errors
//!
//! Validation failures surface here, before the rating engine is invoked.
//! The engine itself is total; everything that can go wrong happens while
//! collecting and validating the application.

use core_kernel::DateParseError;
use thiserror::Error;

/// Errors raised while collecting or validating an application
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WizardError {
    /// A required field was left blank
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Email address does not look deliverable
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    /// Vehicle value must be a positive amount
    #[error("Vehicle value must be greater than zero")]
    NonPositiveVehicleValue,

    /// Excess cannot be negative
    #[error("Excess amount cannot be negative")]
    NegativeExcess,

    /// A date field failed to parse
    #[error("Invalid {field}: {source}")]
    InvalidDate {
        field: &'static str,
        #[source]
        source: DateParseError,
    },

    /// Date of birth or licence issue date lies in the future
    #[error("{0} cannot be in the future")]
    FutureDate(&'static str),

    /// Drivers must be adults
    #[error("Driver must be at least 18 years old")]
    DriverTooYoung,

    /// Licence predates the driver's birth
    #[error("Licence issue date predates date of birth")]
    LicenceBeforeBirth,

    /// The summary step has no next step
    #[error("Already at the final step")]
    AtFinalStep,
}
