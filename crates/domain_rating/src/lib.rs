//! Motor Quote Rating Domain
//!
//! This crate implements the premium rating logic for the motor quoting
//! system. The domain layer is infrastructure-agnostic and contains only
//! business logic:
//! - **Value Objects**: Application (personal, vehicle, driver, coverage),
//!   PriceBreakdown
//! - **Domain Services**: RatingEngine over a RateTable
//!
//! # Rating Model
//!
//! ```text
//! base = value x rate(vehicle type)
//!      x age factor x experience factor x claims factor x coverage factor
//! annual = max(base + add-on charges - excess discount, floor)
//! total  = annual x period / 12
//! ```
//!
//! The engine is total and deterministic: missing optional fields degrade
//! to neutral factors, out-of-range monetary input clamps to zero, and the
//! same application rated as of the same date always yields the same
//! breakdown.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_rating::{compute_quote, Application};
//!
//! let breakdown = compute_quote(&application);
//! println!("annual base {}", breakdown.base_price);
//! ```

pub mod application;
pub mod breakdown;
pub mod engine;
pub mod tables;

pub use application::{
    AddOn, AddOns, Application, CoverPeriod, CoverageSelection, CoverageType, DriverInfo,
    PersonalInfo, VehicleDetails, VehicleType, VehicleUse,
};
pub use breakdown::PriceBreakdown;
pub use engine::{compute_quote, compute_quote_as_of, RatingEngine};
pub use tables::RateTable;
