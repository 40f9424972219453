use std::sync::Arc;

use serde_json::{Map, Value};

use sapgate_core::{sentinel, ErpError, ErpResult, Settings};
use sapgate_inventory::{MaterialId, MaterialRecord};
use sapgate_sales::{OrderConfirmation, SalesOrderNumber, SalesOrderRequest};

use super::{ConnectionHandle, ConnectionStatus, ErpBackend};

pub const HOST_UNREACHABLE_MESSAGE: &str = "Failed to connect to SAP: Host unreachable (simulated)";

/// In-process stand-in for the ERP system.
///
/// Behaviour is a pure function of the input and the injected settings:
/// - host `fail_connection` makes every operation fail to connect,
/// - material `INVALID` / `NOT_FOUND` are not found, `ERROR_READ` fails,
/// - customer `FAIL_CUSTOMER` is blocked.
#[derive(Debug, Clone)]
pub struct SimulatedErp {
    settings: Arc<Settings>,
}

impl SimulatedErp {
    pub fn new(settings: Arc<Settings>) -> Self {
        Self { settings }
    }
}

impl ErpBackend for SimulatedErp {
    fn connect(&self) -> ErpResult<ConnectionHandle> {
        let host = &self.settings.sap_host;
        tracing::info!(
            host = %host,
            user = %self.settings.sap_user,
            client = %self.settings.sap_client,
            "connecting to SAP (simulated)"
        );

        if host == sentinel::FAIL_CONNECTION_HOST {
            tracing::error!(host = %host, "SAP connection failed: host unreachable (simulated)");
            return Err(ErpError::connection(HOST_UNREACHABLE_MESSAGE));
        }

        tracing::info!(host = %host, "connected to SAP (simulated)");
        Ok(ConnectionHandle {
            status: ConnectionStatus::Connected,
            host: host.clone(),
        })
    }

    fn read_material(&self, material_id: &MaterialId) -> ErpResult<MaterialRecord> {
        tracing::info!(material_id = %material_id, "reading material (simulated)");

        self.connect().inspect_err(|e| {
            tracing::error!(material_id = %material_id, "connection error during material read: {e}");
        })?;

        let id = material_id.as_str();
        if sentinel::is_not_found_material(id) {
            tracing::warn!(material_id = %material_id, "material not found (simulated)");
            return Err(ErpError::not_found(format!("Material with ID '{id}' not found.")));
        }

        if id == sentinel::READ_ERROR_MATERIAL {
            tracing::error!(material_id = %material_id, "simulated read failure");
            return Err(ErpError::operation(format!(
                "Failed to read data for material '{id}' (simulated)."
            )));
        }

        tracing::info!(material_id = %material_id, "material read (simulated)");
        Ok(MaterialRecord::synthesize(material_id.clone()))
    }

    fn create_sales_order(&self, payload: &Map<String, Value>) -> ErpResult<OrderConfirmation> {
        let order = SalesOrderRequest::new(payload.clone());
        tracing::info!(keys = ?order.keys(), "creating sales order (simulated)");

        self.connect().inspect_err(|e| {
            tracing::error!("connection error during sales order creation: {e}");
        })?;

        order.validate().inspect_err(|_| {
            tracing::warn!(
                customer_id = ?order.customer_id(),
                items_present = order.items().is_some(),
                "sales order rejected: customer_id or items missing"
            );
        })?;

        if order.customer_name() == Some(sentinel::BLOCKED_CUSTOMER) {
            let customer_id = sentinel::BLOCKED_CUSTOMER;
            tracing::warn!(customer_id, "sales order rejected: customer blocked (simulated)");
            return Err(ErpError::operation(format!(
                "Customer '{customer_id}' is not valid for sales order creation."
            )));
        }

        let order_id = SalesOrderNumber::derive(&order);
        tracing::info!(order_id = %order_id, "sales order created (simulated)");
        Ok(OrderConfirmation::accepted(order_id))
    }
}
