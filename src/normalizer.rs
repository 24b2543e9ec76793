use std::collections::{BTreeMap, HashSet};
use std::path::PathBuf;

use tracing::{debug, warn};

use crate::interpolate::interpolate;
use crate::models::{Coordinate, ResolvedProject};
use crate::resolver::Resolver;

/// Resolve every root coordinate into a normalized project record.
///
/// Roots are processed in the order supplied, with duplicate coordinates
/// dropped. A root that cannot be parsed or has no POM mapping degrades to a
/// logged skip; one bad entry never aborts the report. The returned list is
/// sorted by `(lowercased name, coordinate string)`: the coordinate
/// tie-break keeps the order total when distinct artifacts share a display
/// name, so repeated runs produce byte-identical reports.
pub fn normalize(
    roots: &[String],
    poms: &BTreeMap<String, PathBuf>,
    ignored_patterns: &[String],
) -> Vec<ResolvedProject> {
    let mut resolver = Resolver::new(poms);
    let mut seen = HashSet::new();
    let mut projects = Vec::new();

    for root in roots {
        let coordinate = root.trim();
        if !seen.insert(coordinate.to_string()) {
            continue;
        }

        if ignored_patterns
            .iter()
            .any(|pattern| !pattern.is_empty() && coordinate.contains(pattern.as_str()))
        {
            debug!("ignoring {coordinate}");
            continue;
        }

        let Some(coord) = Coordinate::parse(coordinate) else {
            warn!("malformed coordinate '{coordinate}'; skipping");
            continue;
        };

        // Missing mappings and unparseable POMs are warned about inside the
        // resolver; either way this root is skipped.
        let Some(doc) = resolver.document(coordinate) else {
            continue;
        };

        let version = resolver.resolve_version(coordinate);

        let raw_name = if doc.name.is_empty() {
            coord.artifact_id.clone()
        } else {
            doc.name.clone()
        };
        let name = if raw_name.contains("${") {
            let group_id = resolver.resolve_group_id(coordinate);
            let artifact_id = if doc.artifact_id.is_empty() {
                coord.artifact_id.as_str()
            } else {
                doc.artifact_id.as_str()
            };
            interpolate(&raw_name, &group_id, artifact_id, &version)
        } else {
            raw_name
        };

        let mut licenses = resolver.resolve_licenses(coordinate);
        let mut seen_licenses = HashSet::new();
        licenses.retain(|license| seen_licenses.insert(license.clone()));
        if licenses.is_empty() {
            warn!("{name} dependency does not have a license.");
        }

        projects.push(ResolvedProject {
            group_id: coord.group_id,
            artifact_id: coord.artifact_id,
            version,
            name,
            description: doc.description.clone(),
            url: doc.url.clone(),
            inception_year: doc.inception_year.clone(),
            licenses,
            developers: doc.developers.clone(),
        });
    }

    projects.sort_by(|a, b| {
        (a.name.to_lowercase(), a.coordinate()).cmp(&(b.name.to_lowercase(), b.coordinate()))
    });
    projects
}
