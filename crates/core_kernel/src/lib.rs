//! Core Kernel - Foundational types and utilities for the quoting system
//!
//! This crate provides the fundamental building blocks used across the
//! rating and collection modules:
//! - Money types with precise decimal arithmetic
//! - Display-date parsing for the dd/mm/yyyy input convention
//! - Common identifiers and value objects

pub mod dates;
pub mod error;
pub mod identifiers;
pub mod money;

pub use dates::{format_display_date, mask_partial_date, parse_display_date, DateParseError};
pub use error::CoreError;
pub use identifiers::{ApplicationId, QuoteId};
pub use money::{Currency, Money, MoneyError, Rate};
