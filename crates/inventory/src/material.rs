use serde::{Deserialize, Serialize};

pub const DEFAULT_QUANTITY: i64 = 100;
pub const DEFAULT_UNIT: &str = "EA";
pub const DEFAULT_PLANT: &str = "1000";

/// Material number as used by the ERP backend (opaque string).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MaterialId(String);

impl MaterialId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for MaterialId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MaterialId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Material record returned to clients. Produced fresh per request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialRecord {
    pub material_id: MaterialId,
    pub description: String,
    pub quantity: i64,
    pub unit: String,
    pub plant: String,
}

impl MaterialRecord {
    /// Build the record the simulated backend returns for `material_id`.
    ///
    /// Deterministic: only the identifier varies, everything else is fixed.
    pub fn synthesize(material_id: MaterialId) -> Self {
        Self {
            description: format!("Sample Material {material_id}"),
            material_id,
            quantity: DEFAULT_QUANTITY,
            unit: DEFAULT_UNIT.to_string(),
            plant: DEFAULT_PLANT.to_string(),
        }
    }
}
