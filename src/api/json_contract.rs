use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::Scene;

pub const SCENE_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneJsonContractV1 {
    pub schema_version: u32,
    pub scene: Scene,
}

impl Scene {
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::Serialization(format!("failed to serialize scene json: {e}")))
    }

    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = SceneJsonContractV1 {
            schema_version: SCENE_JSON_SCHEMA_V1,
            scene: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::Serialization(format!("failed to serialize scene contract v1: {e}"))
        })
    }

    /// Parses either a bare scene or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(scene) = serde_json::from_str::<Scene>(input) {
            return Ok(scene);
        }
        let payload: SceneJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::Serialization(format!("failed to parse scene json payload: {e}"))
        })?;
        if payload.schema_version != SCENE_JSON_SCHEMA_V1 {
            return Err(ChartError::Serialization(format!(
                "unsupported scene schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.scene)
    }
}
