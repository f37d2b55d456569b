//! Test Utilities
//!
//! Shared builders and fixtures for tests across the quoting system.
//! Builders let a test specify only the fields it cares about; fixtures
//! provide consistent, predictable reference data.

pub mod builders;
pub mod fixtures;

pub use builders::ApplicationBuilder;
pub use fixtures::{DateFixtures, MoneyFixtures};
