//! `sapgate-core` — shared building blocks for the ERP gateway.
//!
//! This crate holds the backend failure model, process settings and the
//! sentinel values the simulated backend reacts to. No IO beyond reading
//! environment variables.

pub mod error;
pub mod sentinel;
pub mod settings;

pub use error::{ErpError, ErpResult};
pub use settings::Settings;
