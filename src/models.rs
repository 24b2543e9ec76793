use std::fmt;

use serde::{Deserialize, Serialize};

/// A Maven coordinate: `group:artifact:version`.
///
/// Coordinate strings are the lookup key into the coordinate→POM-file map,
/// so the string form must stay stable and canonical.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
}

impl Coordinate {
    pub fn new(group_id: &str, artifact_id: &str, version: &str) -> Self {
        Self {
            group_id: group_id.trim().to_string(),
            artifact_id: artifact_id.trim().to_string(),
            version: version.trim().to_string(),
        }
    }

    /// Parse a `group:artifact:version` string. Returns `None` unless the
    /// string has exactly three `:`-separated parts.
    pub fn parse(coordinate: &str) -> Option<Self> {
        let mut parts = coordinate.splitn(3, ':');
        let group_id = parts.next()?;
        let artifact_id = parts.next()?;
        let version = parts.next()?;
        Some(Self::new(group_id, artifact_id, version))
    }

    /// A coordinate can be followed as a parent link only when all three
    /// parts are present.
    pub fn is_resolvable(&self) -> bool {
        !self.group_id.is_empty() && !self.artifact_id.is_empty() && !self.version.is_empty()
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group_id, self.artifact_id, self.version)
    }
}

/// One `<license>` entry from a POM: name and URL, either may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct License {
    pub name: String,
    pub url: String,
}

impl License {
    pub fn new(name: &str, url: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            url: url.trim().to_string(),
        }
    }
}

/// The reportable fields of one parsed POM file.
///
/// Every field may be empty; emptiness of group id, version, or the license
/// list triggers a parent-POM lookup. Description, url, inception year, and
/// developers are never inherited.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PomDocument {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    pub name: String,
    pub description: String,
    pub url: String,
    pub inception_year: String,
    pub licenses: Vec<License>,
    pub developers: Vec<String>,
    pub parent: Option<Coordinate>,
}

/// The normalized record one root coordinate resolves to.
///
/// Instances are immutable once the normalizer has collected them; renderers
/// only ever borrow the finished list.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedProject {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    pub name: String,
    pub description: String,
    pub url: String,
    pub inception_year: String,
    pub licenses: Vec<License>,
    pub developers: Vec<String>,
}

impl ResolvedProject {
    /// The `group:artifact:version` string used for the report `dependency`
    /// column and as the deterministic sort tie-breaker. Uses the resolved
    /// version, which may be empty.
    pub fn coordinate(&self) -> String {
        format!("{}:{}:{}", self.group_id, self.artifact_id, self.version)
    }
}
