use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::PathBuf;
use std::rc::Rc;

use tracing::{info, warn};
use url::Url;

use crate::models::{Coordinate, License, PomDocument};
use crate::pom;

/// Hard bound on parent-POM hops. Real inheritance chains are short; the
/// bound is the backstop against malformed chains the visited set can't see
/// (distinct coordinates forever).
pub const MAX_PARENT_DEPTH: usize = 5;

/// Defunct artifact family whose POMs carry no usable license metadata.
/// Their effective license is pinned to Apache-2.0 regardless of POM content.
pub const ANDROID_SUPPORT_GROUP_ID: &str = "com.android.support";
pub const APACHE_LICENSE_NAME: &str = "The Apache Software License";
pub const APACHE_LICENSE_URL: &str = "http://www.apache.org/licenses/LICENSE-2.0.txt";

/// Fills missing POM fields by walking parent-POM links through the
/// coordinate→file map.
///
/// One `Resolver` lives for exactly one report generation: the parse cache
/// and the warned-coordinate set it owns must never be shared across
/// concurrent runs.
pub struct Resolver<'a> {
    poms: &'a BTreeMap<String, PathBuf>,
    cache: HashMap<String, Option<Rc<PomDocument>>>,
    warned_missing: HashSet<String>,
}

impl<'a> Resolver<'a> {
    pub fn new(poms: &'a BTreeMap<String, PathBuf>) -> Self {
        Self {
            poms,
            cache: HashMap::new(),
            warned_missing: HashSet::new(),
        }
    }

    /// The parsed document for a coordinate, memoized for the lifetime of
    /// this resolver. A coordinate with no file mapping is warned about at
    /// most once per run; many siblings often share one unresolvable parent.
    pub fn document(&mut self, coordinate: &str) -> Option<Rc<PomDocument>> {
        if let Some(cached) = self.cache.get(coordinate) {
            return cached.clone();
        }

        let parsed = match self.poms.get(coordinate) {
            None => {
                if self.warned_missing.insert(coordinate.to_string()) {
                    warn!("no POM file mapping for {coordinate}; skipping");
                }
                None
            }
            Some(path) => match pom::parse_pom(path) {
                Ok(doc) => Some(Rc::new(doc)),
                Err(err) => {
                    warn!("failed to parse POM for {coordinate}: {err:#}");
                    None
                }
            },
        };

        self.cache.insert(coordinate.to_string(), parsed.clone());
        parsed
    }

    /// Effective group id: the POM's own, or the nearest ancestor's.
    pub fn resolve_group_id(&mut self, coordinate: &str) -> String {
        let mut visited = HashSet::new();
        self.walk_field(coordinate, &mut visited, 0, |doc| &doc.group_id)
    }

    /// Effective version: the POM's own, or the nearest ancestor's.
    pub fn resolve_version(&mut self, coordinate: &str) -> String {
        let mut visited = HashSet::new();
        self.walk_field(coordinate, &mut visited, 0, |doc| &doc.version)
    }

    /// Effective license list, URL-validated.
    ///
    /// The support-library override is decided on the *effective* group id,
    /// so it also catches POMs that inherit their group from a parent.
    pub fn resolve_licenses(&mut self, coordinate: &str) -> Vec<License> {
        if self.resolve_group_id(coordinate) == ANDROID_SUPPORT_GROUP_ID {
            return vec![License::new(APACHE_LICENSE_NAME, APACHE_LICENSE_URL)];
        }

        let mut visited = HashSet::new();
        self.walk_licenses(coordinate, &mut visited, 0)
    }

    fn walk_field<F>(
        &mut self,
        coordinate: &str,
        visited: &mut HashSet<String>,
        depth: usize,
        field: F,
    ) -> String
    where
        F: Fn(&PomDocument) -> &str + Copy,
    {
        if depth > MAX_PARENT_DEPTH {
            warn!("parent chain for {coordinate} exceeds {MAX_PARENT_DEPTH} hops; giving up");
            return String::new();
        }
        if !visited.insert(coordinate.to_string()) {
            // Parent cycle; the chain ends here.
            return String::new();
        }

        let Some(doc) = self.document(coordinate) else {
            return String::new();
        };

        let value = field(&doc);
        if !value.is_empty() {
            return value.to_string();
        }

        match resolvable_parent(&doc) {
            Some(parent) => self.walk_field(&parent.to_string(), visited, depth + 1, field),
            None => String::new(),
        }
    }

    fn walk_licenses(
        &mut self,
        coordinate: &str,
        visited: &mut HashSet<String>,
        depth: usize,
    ) -> Vec<License> {
        if depth > MAX_PARENT_DEPTH {
            warn!("parent chain for {coordinate} exceeds {MAX_PARENT_DEPTH} hops; giving up");
            return Vec::new();
        }
        if !visited.insert(coordinate.to_string()) {
            return Vec::new();
        }

        let Some(doc) = self.document(coordinate) else {
            return Vec::new();
        };

        // A declared license list stops the walk even if URL validation
        // empties it; only a POM with no list at all defers to its parent.
        if !doc.licenses.is_empty() {
            return validate_licenses(coordinate, &doc.licenses);
        }

        match resolvable_parent(&doc) {
            Some(parent) => self.walk_licenses(&parent.to_string(), visited, depth + 1),
            None => Vec::new(),
        }
    }
}

/// The document's parent link, if all three coordinate parts are present.
fn resolvable_parent(doc: &PomDocument) -> Option<&Coordinate> {
    doc.parent.as_ref().filter(|parent| parent.is_resolvable())
}

/// Drop license entries that carry neither a parseable URL nor a name.
/// Name-only licenses are legitimate and kept.
fn validate_licenses(coordinate: &str, declared: &[License]) -> Vec<License> {
    let mut licenses = Vec::new();
    for license in declared {
        if Url::parse(&license.url).is_ok() {
            licenses.push(license.clone());
        } else if !license.name.is_empty() {
            info!(
                "{coordinate} license '{}' has no valid URL; keeping name only",
                license.name
            );
            licenses.push(license.clone());
        } else {
            warn!("{coordinate} dependency has an invalid license URL; skipping license");
        }
    }
    licenses
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn write_pom(dir: &Path, file: &str, xml: &str) -> PathBuf {
        let path = dir.join(file);
        fs::write(&path, xml).unwrap();
        path
    }

    fn pom_map(entries: Vec<(&str, PathBuf)>) -> BTreeMap<String, PathBuf> {
        entries
            .into_iter()
            .map(|(coordinate, path)| (coordinate.to_string(), path))
            .collect()
    }

    #[test]
    fn test_version_inherited_from_parent() {
        let dir = TempDir::new().unwrap();
        let child = write_pom(
            dir.path(),
            "child.pom",
            r#"<project>
  <parent>
    <groupId>com.example</groupId>
    <artifactId>parent</artifactId>
    <version>3</version>
  </parent>
  <artifactId>child</artifactId>
</project>"#,
        );
        let parent = write_pom(
            dir.path(),
            "parent.pom",
            r#"<project>
  <groupId>com.example</groupId>
  <artifactId>parent</artifactId>
  <version>3</version>
</project>"#,
        );
        let poms = pom_map(vec![
            ("com.example:child:1.0", child),
            ("com.example:parent:3", parent),
        ]);

        let mut resolver = Resolver::new(&poms);
        assert_eq!(resolver.resolve_version("com.example:child:1.0"), "3");
        assert_eq!(resolver.resolve_group_id("com.example:child:1.0"), "com.example");
    }

    #[test]
    fn test_licenses_inherited_from_grandparent() {
        let dir = TempDir::new().unwrap();
        let child = write_pom(
            dir.path(),
            "child.pom",
            r#"<project>
  <artifactId>child</artifactId>
  <parent>
    <groupId>g</groupId><artifactId>mid</artifactId><version>1</version>
  </parent>
</project>"#,
        );
        let mid = write_pom(
            dir.path(),
            "mid.pom",
            r#"<project>
  <artifactId>mid</artifactId>
  <parent>
    <groupId>g</groupId><artifactId>top</artifactId><version>1</version>
  </parent>
</project>"#,
        );
        let top = write_pom(
            dir.path(),
            "top.pom",
            r#"<project>
  <artifactId>top</artifactId>
  <licenses>
    <license>
      <name>MIT License</name>
      <url>https://opensource.org/licenses/MIT</url>
    </license>
  </licenses>
</project>"#,
        );
        let poms = pom_map(vec![
            ("g:child:1", child),
            ("g:mid:1", mid),
            ("g:top:1", top),
        ]);

        let mut resolver = Resolver::new(&poms);
        let licenses = resolver.resolve_licenses("g:child:1");
        assert_eq!(
            licenses,
            vec![License::new("MIT License", "https://opensource.org/licenses/MIT")]
        );
    }

    #[test]
    fn test_parent_cycle_terminates() {
        let dir = TempDir::new().unwrap();
        let a = write_pom(
            dir.path(),
            "a.pom",
            r#"<project>
  <artifactId>a</artifactId>
  <parent><groupId>g</groupId><artifactId>b</artifactId><version>1</version></parent>
</project>"#,
        );
        let b = write_pom(
            dir.path(),
            "b.pom",
            r#"<project>
  <artifactId>b</artifactId>
  <parent><groupId>g</groupId><artifactId>a</artifactId><version>1</version></parent>
</project>"#,
        );
        let poms = pom_map(vec![("g:a:1", a), ("g:b:1", b)]);

        let mut resolver = Resolver::new(&poms);
        assert_eq!(resolver.resolve_version("g:a:1"), "");
        assert!(resolver.resolve_licenses("g:a:1").is_empty());
    }

    #[test]
    fn test_depth_bound_fails_soft() {
        let dir = TempDir::new().unwrap();
        let mut entries = Vec::new();
        // Chain of 8: only the last POM carries a version, 7 hops away.
        for i in 0..8 {
            let xml = if i == 7 {
                "<project><artifactId>p7</artifactId><version>9.9</version></project>".to_string()
            } else {
                format!(
                    "<project><artifactId>p{i}</artifactId>\
                     <parent><groupId>g</groupId><artifactId>p{}</artifactId>\
                     <version>1</version></parent></project>",
                    i + 1
                )
            };
            let path = write_pom(dir.path(), &format!("p{i}.pom"), &xml);
            entries.push((format!("g:p{i}:1"), path));
        }
        let poms: BTreeMap<String, PathBuf> = entries.into_iter().collect();

        let mut resolver = Resolver::new(&poms);
        assert_eq!(resolver.resolve_version("g:p0:1"), "");

        // A chain within the bound still resolves.
        assert_eq!(resolver.resolve_version("g:p3:1"), "9.9");
    }

    #[test]
    fn test_support_library_override() {
        let dir = TempDir::new().unwrap();
        let pom = write_pom(
            dir.path(),
            "support.pom",
            r#"<project>
  <groupId>com.android.support</groupId>
  <artifactId>appcompat-v7</artifactId>
  <version>28.0.0</version>
  <licenses>
    <license>
      <name>GNU General Public License v3.0</name>
      <url>https://www.gnu.org/licenses/gpl-3.0.txt</url>
    </license>
  </licenses>
</project>"#,
        );
        let poms = pom_map(vec![("com.android.support:appcompat-v7:28.0.0", pom)]);

        let mut resolver = Resolver::new(&poms);
        let licenses = resolver.resolve_licenses("com.android.support:appcompat-v7:28.0.0");
        assert_eq!(
            licenses,
            vec![License::new(APACHE_LICENSE_NAME, APACHE_LICENSE_URL)]
        );
    }

    #[test]
    fn test_support_library_override_via_inherited_group() {
        let dir = TempDir::new().unwrap();
        let child = write_pom(
            dir.path(),
            "child.pom",
            r#"<project>
  <artifactId>support-thing</artifactId>
  <parent>
    <groupId>com.android.support</groupId>
    <artifactId>support-parent</artifactId>
    <version>28.0.0</version>
  </parent>
</project>"#,
        );
        let parent = write_pom(
            dir.path(),
            "parent.pom",
            r#"<project>
  <groupId>com.android.support</groupId>
  <artifactId>support-parent</artifactId>
  <version>28.0.0</version>
</project>"#,
        );
        let poms = pom_map(vec![
            ("com.android.support:support-thing:28.0.0", child),
            ("com.android.support:support-parent:28.0.0", parent),
        ]);

        let mut resolver = Resolver::new(&poms);
        let licenses = resolver.resolve_licenses("com.android.support:support-thing:28.0.0");
        assert_eq!(
            licenses,
            vec![License::new(APACHE_LICENSE_NAME, APACHE_LICENSE_URL)]
        );
    }

    #[test]
    fn test_invalid_url_and_empty_name_dropped() {
        let declared = vec![
            License::new("", "not a url"),
            License::new("Custom License", "also not a url"),
            License::new("", "https://example.com/license"),
        ];
        let kept = validate_licenses("g:a:1", &declared);
        assert_eq!(
            kept,
            vec![
                License::new("Custom License", "also not a url"),
                License::new("", "https://example.com/license"),
            ]
        );
    }

    #[test]
    fn test_declared_list_stops_walk_even_when_emptied() {
        let dir = TempDir::new().unwrap();
        let child = write_pom(
            dir.path(),
            "child.pom",
            r#"<project>
  <artifactId>child</artifactId>
  <licenses>
    <license><url>not a url</url></license>
  </licenses>
  <parent><groupId>g</groupId><artifactId>parent</artifactId><version>1</version></parent>
</project>"#,
        );
        let parent = write_pom(
            dir.path(),
            "parent.pom",
            r#"<project>
  <artifactId>parent</artifactId>
  <licenses>
    <license><name>MIT License</name></license>
  </licenses>
</project>"#,
        );
        let poms = pom_map(vec![("g:child:1", child), ("g:parent:1", parent)]);

        let mut resolver = Resolver::new(&poms);
        assert!(resolver.resolve_licenses("g:child:1").is_empty());
    }

    #[test]
    fn test_missing_mapping_resolves_empty() {
        let poms = BTreeMap::new();
        let mut resolver = Resolver::new(&poms);
        assert!(resolver.document("g:absent:1").is_none());
        assert_eq!(resolver.resolve_version("g:absent:1"), "");
        assert!(resolver.resolve_licenses("g:absent:1").is_empty());
    }
}
