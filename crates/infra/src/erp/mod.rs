//! ERP backend boundary.
//!
//! The HTTP layer talks to the backend only through [`ErpBackend`]. The one
//! implementation shipped here, [`SimulatedErp`], never leaves the process:
//! it fabricates data and fails on reserved sentinel inputs.

pub mod simulated;
pub mod r#trait;

pub use r#trait::{ConnectionHandle, ConnectionStatus, ErpBackend};
pub use simulated::SimulatedErp;
