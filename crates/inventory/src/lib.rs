//! Material master data as exposed by the gateway.
//!
//! Pure data and construction rules: no IO, no HTTP, no backend access.

pub mod material;

pub use material::{MaterialId, MaterialRecord, DEFAULT_PLANT, DEFAULT_QUANTITY, DEFAULT_UNIT};
