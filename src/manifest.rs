//! Project manifest probe for vuegen.
//! The working directory's package.json is consulted only to pick the
//! script file extension; any failure falls back to plain JavaScript.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Dependency manifest file consulted in the working directory.
pub const MANIFEST_FILE: &str = "package.json";

/// Script extension for projects that declare a typescript dependency.
pub const SCRIPT_EXT_TYPED: &str = "ts";

/// Script extension used when no manifest decides otherwise.
pub const SCRIPT_EXT_PLAIN: &str = "js";

const TYPESCRIPT_DEPENDENCY: &str = "typescript";

/// Subset of a package.json relevant to extension detection.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ProjectManifest {
    dependencies: HashMap<String, serde_json::Value>,
    #[serde(rename = "devDependencies")]
    dev_dependencies: HashMap<String, serde_json::Value>,
}

impl ProjectManifest {
    /// True when the named package appears in either dependency table.
    pub fn has_dependency(&self, name: &str) -> bool {
        self.dependencies.contains_key(name) || self.dev_dependencies.contains_key(name)
    }
}

/// Reads and parses the manifest in `dir`.
///
/// # Errors
/// * `Error::ManifestError` if the file is missing or unparsable
pub fn load_manifest(dir: &Path) -> Result<ProjectManifest> {
    let path = dir.join(MANIFEST_FILE);
    let content = std::fs::read_to_string(&path).map_err(|err| {
        Error::ManifestError(format!("cannot read '{}': {}", path.display(), err))
    })?;
    serde_json::from_str(&content).map_err(|err| {
        Error::ManifestError(format!("cannot parse '{}': {}", path.display(), err))
    })
}

/// Picks the script extension for generated files: `ts` when the project
/// declares a typescript dependency, `js` otherwise. Manifest problems
/// are logged and never fatal.
pub fn detect_script_extension(dir: &Path) -> String {
    match load_manifest(dir) {
        Ok(manifest) if manifest.has_dependency(TYPESCRIPT_DEPENDENCY) => {
            SCRIPT_EXT_TYPED.to_string()
        }
        Ok(_) => SCRIPT_EXT_PLAIN.to_string(),
        Err(err) => {
            log::warn!("{} Falling back to '{}' sources.", err, SCRIPT_EXT_PLAIN);
            SCRIPT_EXT_PLAIN.to_string()
        }
    }
}
