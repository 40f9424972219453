use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use sapgate_core::ErpResult;
use sapgate_inventory::{MaterialId, MaterialRecord};
use sapgate_sales::OrderConfirmation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionStatus {
    Connected,
}

/// Result of a successful connection attempt; only useful for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionHandle {
    pub status: ConnectionStatus,
    pub host: String,
}

/// Operations the gateway needs from the ERP system.
///
/// Every operation opens its own connection; there is no pooling. Calls are
/// synchronous and must not block on IO.
pub trait ErpBackend: Send + Sync {
    fn connect(&self) -> ErpResult<ConnectionHandle>;

    fn read_material(&self, material_id: &MaterialId) -> ErpResult<MaterialRecord>;

    /// Place a sales order from the client's JSON object as received.
    ///
    /// The payload is only interpreted after a connection is established.
    fn create_sales_order(&self, payload: &Map<String, Value>) -> ErpResult<OrderConfirmation>;
}
