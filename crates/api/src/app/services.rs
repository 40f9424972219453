//! Backend wiring shared by all handlers.

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use sapgate_core::ErpResult;
use sapgate_infra::ErpBackend;

/// Services handed to every handler (as an `Extension`).
#[derive(Clone)]
pub struct AppServices {
    backend: Arc<dyn ErpBackend>,
}

impl AppServices {
    pub fn new(backend: Arc<dyn ErpBackend>) -> Self {
        Self { backend }
    }

    /// Run one backend operation.
    ///
    /// Backend failures come back untouched in the inner result. A panic in
    /// the backend is a defect, not a failure kind: it becomes the outer
    /// error so the handler answers with a generic 500.
    pub fn call<T, F>(&self, operation: &'static str, f: F) -> anyhow::Result<ErpResult<T>>
    where
        F: FnOnce(&dyn ErpBackend) -> ErpResult<T>,
    {
        let backend = self.backend.as_ref();
        panic::catch_unwind(AssertUnwindSafe(|| f(backend))).map_err(|payload| {
            let detail = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "non-string panic payload".to_string());
            anyhow::anyhow!("backend operation '{operation}' panicked: {detail}")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sapgate_core::{ErpError, Settings};
    use sapgate_infra::SimulatedErp;
    use sapgate_inventory::MaterialId;

    fn services() -> AppServices {
        AppServices::new(Arc::new(SimulatedErp::new(Arc::new(Settings::default()))))
    }

    #[test]
    fn backend_results_pass_through() {
        let record = services()
            .call("read_material", |erp| erp.read_material(&MaterialId::new("M1")))
            .unwrap()
            .unwrap();
        assert_eq!(record.material_id.as_str(), "M1");

        let err = services()
            .call("read_material", |erp| erp.read_material(&MaterialId::new("INVALID")))
            .unwrap()
            .unwrap_err();
        assert!(matches!(err, ErpError::NotFound(_)));
    }

    #[test]
    fn panics_become_internal_errors() {
        let err = services()
            .call::<(), _>("explode", |_| panic!("kaboom"))
            .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("explode"));
        assert!(msg.contains("kaboom"));
    }
}
