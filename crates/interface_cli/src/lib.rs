//! Quote Collection Front End
//!
//! This crate is the collaborator around the rating domain: it assembles an
//! `Application` incrementally through an explicit wizard state object,
//! validates field formats before the engine ever sees them, and formats
//! the resulting breakdown for display. The `quote` binary wires these
//! pieces to the command line.
//!
//! The wizard state is passed by value between steps; the rating engine
//! consumes only the final immutable snapshot.

pub mod config;
pub mod error;
pub mod format;
pub mod wizard;

pub use config::CliConfig;
pub use error::WizardError;
pub use format::format_zmw;
pub use wizard::{QuoteDraft, SubmittedApplication, WizardStep};
