//! Sales order intake: request shape, validation and confirmation.
//!
//! Pure logic (no IO, no HTTP). The backend stub decides *when* these rules
//! run; this crate only says what they are.

pub mod order;

pub use order::{
    OrderConfirmation, OrderStatus, SalesOrderNumber, SalesOrderRequest,
    CONFIRMATION_MESSAGE, REQUIRED_FIELDS_MESSAGE,
};
