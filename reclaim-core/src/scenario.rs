//! Loading and saving of scenario snapshots. Persistence is a collaborator
//! of the engine, not part of it: nothing here influences a calculation.

use crate::error::ReclaimError;
use reclaim_schemas::file_formats::ScenarioFile;
use std::fs;
use std::path::Path;

pub const SCENARIO_SCHEMA_VERSION: &str = "1.0";

/// Reads a scenario YAML file, including any site metadata it carries.
pub fn load_scenario_file<P: AsRef<Path>>(path: P) -> Result<ScenarioFile, ReclaimError> {
    let path_display = path.as_ref().display().to_string();
    let content = fs::read_to_string(path.as_ref())
        .map_err(|e| ReclaimError::FileIO(path_display.clone(), e))?;
    serde_yaml::from_str(&content).map_err(|e| ReclaimError::YamlParsing(path_display, e))
}

/// Writes a scenario YAML file.
pub fn save_scenario_file<P: AsRef<Path>>(
    path: P,
    scenario_file: &ScenarioFile,
) -> Result<(), ReclaimError> {
    let path_display = path.as_ref().display().to_string();
    let content = serde_yaml::to_string(scenario_file)
        .map_err(|e| ReclaimError::YamlWriting(path_display.clone(), e))?;
    fs::write(path.as_ref(), content).map_err(|e| ReclaimError::FileIO(path_display, e))?;
    Ok(())
}
