use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// The input handed over by the build-system side: which coordinates to
/// report on and where each coordinate's POM file lives.
///
/// The `poms` map is expected to cover every ancestor reachable through
/// parent links; coordinates it misses resolve to empty fields (with a
/// warning), they never abort the report.
#[derive(Debug, Default, Deserialize)]
pub struct Manifest {
    /// Root coordinates (`group:artifact:version`), in report order.
    #[serde(default)]
    pub roots: Vec<String>,
    /// Coordinate string → POM file path, for roots and their ancestors.
    #[serde(default)]
    pub poms: BTreeMap<String, PathBuf>,
}

impl Manifest {
    /// Load a manifest from JSON. Relative POM paths are resolved against
    /// the manifest file's directory so manifests stay relocatable.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read manifest {}", path.display()))?;
        let mut manifest: Manifest = serde_json::from_str(&content)
            .with_context(|| format!("invalid manifest {}", path.display()))?;

        if let Some(base) = path.parent() {
            for pom_path in manifest.poms.values_mut() {
                if pom_path.is_relative() {
                    *pom_path = base.join(&*pom_path);
                }
            }
        }

        Ok(manifest)
    }
}
