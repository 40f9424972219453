use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sha2::{Digest, Sha256};

use sapgate_core::{ErpError, ErpResult};

pub const REQUIRED_FIELDS_MESSAGE: &str = "Invalid order data: customer_id and items are required.";
pub const CONFIRMATION_MESSAGE: &str = "Sales order created successfully in SAP (simulated).";

/// Order numbers live in `SO00000..=SO99999`.
const ORDER_NUMBER_SPACE: u64 = 100_000;

/// Sales order as submitted by a client.
///
/// Only `customer_id` and `items` are looked at, and only for presence; their
/// shape is not checked. Every other key of the payload (e.g. `details`) is
/// kept verbatim and takes part in the order number derivation.
#[derive(Debug, Clone, PartialEq)]
pub struct SalesOrderRequest {
    payload: Map<String, Value>,
}

impl SalesOrderRequest {
    pub fn new(payload: Map<String, Value>) -> Self {
        Self { payload }
    }

    pub fn customer_id(&self) -> Option<&Value> {
        self.payload.get("customer_id")
    }

    pub fn items(&self) -> Option<&Value> {
        self.payload.get("items")
    }

    /// Top-level keys of the payload (safe to log; values may be sensitive).
    pub fn keys(&self) -> Vec<&str> {
        self.payload.keys().map(String::as_str).collect()
    }

    /// Require a customer and items that are both present and non-blank.
    ///
    /// "Blank" is `null`, `false`, `0`, `""`, `[]` or `{}`; any other value
    /// is accepted as is.
    pub fn validate(&self) -> ErpResult<()> {
        if is_present(self.customer_id()) && is_present(self.items()) {
            Ok(())
        } else {
            Err(ErpError::operation(REQUIRED_FIELDS_MESSAGE))
        }
    }

    /// The customer id, when it is a string.
    pub fn customer_name(&self) -> Option<&str> {
        self.customer_id().and_then(Value::as_str)
    }

    /// Canonical string form of the whole payload (object keys sorted).
    pub fn canonical_json(&self) -> String {
        Value::Object(self.payload.clone()).to_string()
    }
}

fn is_present(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(a)) => !a.is_empty(),
        Some(Value::Object(o)) => !o.is_empty(),
    }
}

/// Backend-assigned sales order number, `SO` followed by five digits.
///
/// Derived from a hash of the order payload, so it is stable for identical
/// payloads but only "somewhat unique": collisions are possible and it must
/// not be used as a real key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SalesOrderNumber(String);

impl SalesOrderNumber {
    pub fn derive(order: &SalesOrderRequest) -> Self {
        Self::from_canonical(&order.canonical_json())
    }

    pub fn from_canonical(canonical: &str) -> Self {
        let digest = Sha256::digest(canonical.as_bytes());
        let mut prefix = [0u8; 8];
        prefix.copy_from_slice(&digest[..8]);
        let n = u64::from_be_bytes(prefix) % ORDER_NUMBER_SPACE;
        Self(format!("SO{n:05}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for SalesOrderNumber {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Success,
}

/// What the backend answers after accepting an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderConfirmation {
    pub status: OrderStatus,
    pub order_id: SalesOrderNumber,
    pub message: String,
}

impl OrderConfirmation {
    pub fn accepted(order_id: SalesOrderNumber) -> Self {
        Self {
            status: OrderStatus::Success,
            order_id,
            message: CONFIRMATION_MESSAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn request(value: Value) -> SalesOrderRequest {
        match value {
            Value::Object(map) => SalesOrderRequest::new(map),
            other => panic!("test payload must be an object, got {other}"),
        }
    }

    fn is_order_number(s: &str) -> bool {
        s.len() == 7 && s.starts_with("SO") && s[2..].chars().all(|c| c.is_ascii_digit())
    }

    #[test]
    fn valid_order_passes_validation() {
        let order = request(json!({
            "customer_id": "CUST123",
            "items": [{"material_id": "MATXYZ", "quantity": 10}],
            "details": {"notes": "first order"}
        }));

        assert!(order.validate().is_ok());
        assert_eq!(order.customer_name(), Some("CUST123"));
        assert_eq!(order.keys(), vec!["customer_id", "details", "items"]);
    }

    #[test]
    fn missing_or_blank_items_or_customer_is_rejected() {
        for payload in [
            json!({"customer_id": "CUST456", "details": {}}),
            json!({"items": [{"material_id": "MAT789", "quantity": 5}], "details": {}}),
            json!({"customer_id": "", "items": [{"material_id": "MAT789", "quantity": 5}]}),
            json!({"customer_id": "CUST456", "items": []}),
            json!({"customer_id": "CUST456", "items": {}}),
            json!({"customer_id": 0, "items": [1]}),
            json!({"customer_id": false, "items": [1]}),
            json!({"customer_id": null, "items": null}),
        ] {
            let err = request(payload.clone()).validate().unwrap_err();
            assert_eq!(err, ErpError::operation(REQUIRED_FIELDS_MESSAGE), "{payload}");
        }
    }

    #[test]
    fn item_and_customer_shapes_are_not_checked() {
        for payload in [
            json!({"customer_id": "C1", "items": [{"material_id": "M1"}]}),
            json!({"customer_id": "C1", "items": [{"material_id": "M1", "quantity": "2"}]}),
            json!({"customer_id": "C1", "items": "x"}),
            json!({"customer_id": 42, "items": [{"uom": "EA"}]}),
        ] {
            assert!(request(payload.clone()).validate().is_ok(), "{payload}");
        }
    }

    #[test]
    fn customer_name_is_only_set_for_strings() {
        assert_eq!(request(json!({"customer_id": 42})).customer_name(), None);
        assert_eq!(request(json!({})).customer_name(), None);
        assert_eq!(
            request(json!({"customer_id": "FAIL_CUSTOMER"})).customer_name(),
            Some("FAIL_CUSTOMER")
        );
    }

    #[test]
    fn canonical_json_ignores_key_order() {
        let a = request(json!({"customer_id": "C1", "items": [{"material_id": "M1", "quantity": 1}], "details": {"b": 1, "a": 2}}));
        let b = request(json!({"details": {"a": 2, "b": 1}, "items": [{"quantity": 1, "material_id": "M1"}], "customer_id": "C1"}));

        assert_eq!(a.canonical_json(), b.canonical_json());
        assert_eq!(SalesOrderNumber::derive(&a), SalesOrderNumber::derive(&b));
    }

    #[test]
    fn different_orders_mostly_get_different_numbers() {
        let numbers: HashSet<SalesOrderNumber> = (0..50)
            .map(|i| {
                SalesOrderNumber::derive(&request(json!({
                    "customer_id": format!("CUST{i:03}"),
                    "items": [{"material_id": "MAT001", "quantity": 1}]
                })))
            })
            .collect();

        assert!(numbers.len() >= 45, "too many collisions: {}", numbers.len());
    }

    #[test]
    fn confirmation_serializes_status_as_success() {
        let confirmation = OrderConfirmation::accepted(SalesOrderNumber::from_canonical("{}"));
        let json = serde_json::to_value(&confirmation).unwrap();

        assert_eq!(json["status"], "success");
        assert_eq!(json["message"], CONFIRMATION_MESSAGE);
        assert!(is_order_number(json["order_id"].as_str().unwrap()));
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: numbers are well-formed and the derivation is deterministic.
        #[test]
        fn order_number_is_deterministic_and_well_formed(
            customer in "[A-Z0-9]{1,12}",
            material in "[A-Z0-9]{1,12}",
            quantity in 1i64..10_000,
        ) {
            let payload = json!({
                "customer_id": customer,
                "items": [{"material_id": material, "quantity": quantity}],
                "details": {}
            });
            let first = SalesOrderNumber::derive(&request(payload.clone()));
            let second = SalesOrderNumber::derive(&request(payload));

            prop_assert!(is_order_number(first.as_str()));
            prop_assert_eq!(first, second);
        }
    }
}
