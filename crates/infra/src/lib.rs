//! Infrastructure layer: adapters to the ERP backend.

pub mod erp;

pub use erp::{ConnectionHandle, ErpBackend, SimulatedErp};
