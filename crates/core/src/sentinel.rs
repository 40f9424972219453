//! Reserved input values that make the simulated backend fail on purpose.
//!
//! They stand in for real fault conditions so every failure path can be
//! driven from a request.

/// Configured host value that makes every connection attempt fail.
pub const FAIL_CONNECTION_HOST: &str = "fail_connection";

/// Material identifiers that are reported as not found.
pub const NOT_FOUND_MATERIALS: [&str; 2] = ["INVALID", "NOT_FOUND"];

/// Material identifier whose read fails with an operation error.
pub const READ_ERROR_MATERIAL: &str = "ERROR_READ";

/// Customer that is blocked from placing sales orders.
pub const BLOCKED_CUSTOMER: &str = "FAIL_CUSTOMER";

pub fn is_not_found_material(material_id: &str) -> bool {
    NOT_FOUND_MATERIALS.contains(&material_id)
}
