//! `sapgate-auth` — shared-secret request gate.
//!
//! This crate is intentionally decoupled from HTTP: callers hand in the raw
//! header value (if any) and get a decision back.

pub mod api_key;

pub use api_key::{ApiKey, AuthError, authorize, check, API_KEY_HEADER};
