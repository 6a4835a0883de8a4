use crate::input::InputState;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// On-disk wrapper for a saved scenario.
#[derive(Debug, Serialize, Deserialize)]
pub struct ScenarioFile {
    pub schema_version: String,
    /// Free-form site metadata (name, operator, notes). Carried through
    /// load and save untouched; the engine never reads it.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub metadata: HashMap<String, serde_json::Value>,
    pub scenario: InputState,
}
