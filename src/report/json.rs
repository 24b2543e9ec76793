use anyhow::{Context, Result};
use serde::Serialize;

use crate::models::ResolvedProject;

// Field order here is the report's key order; serde preserves it.
#[derive(Serialize)]
struct JsonProject<'a> {
    project: Option<&'a str>,
    description: Option<&'a str>,
    version: Option<&'a str>,
    developers: Vec<&'a str>,
    url: Option<&'a str>,
    year: Option<&'a str>,
    licenses: Vec<JsonLicense<'a>>,
    dependency: String,
}

#[derive(Serialize)]
struct JsonLicense<'a> {
    license: Option<&'a str>,
    license_url: Option<&'a str>,
}

/// Render the JSON report: an array of project objects, `[]` when empty.
/// Empty scalar fields serialize as `null` rather than `""`.
pub fn render(projects: &[ResolvedProject]) -> Result<String> {
    let entries: Vec<JsonProject> = projects
        .iter()
        .map(|project| JsonProject {
            project: value_or_null(&project.name),
            description: value_or_null(&project.description),
            version: value_or_null(&project.version),
            developers: project.developers.iter().map(String::as_str).collect(),
            url: value_or_null(&project.url),
            year: value_or_null(&project.inception_year),
            licenses: project
                .licenses
                .iter()
                .map(|license| JsonLicense {
                    license: value_or_null(&license.name),
                    license_url: value_or_null(&license.url),
                })
                .collect(),
            dependency: project.coordinate(),
        })
        .collect();

    serde_json::to_string_pretty(&entries).context("serializing JSON report")
}

fn value_or_null(value: &str) -> Option<&str> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::License;

    fn project() -> ResolvedProject {
        ResolvedProject {
            group_id: "com.example".to_string(),
            artifact_id: "lib".to_string(),
            version: "1.0".to_string(),
            name: "Lib".to_string(),
            description: String::new(),
            url: "https://example.com".to_string(),
            inception_year: String::new(),
            licenses: vec![License::new(
                "MIT License",
                "https://opensource.org/licenses/MIT",
            )],
            developers: vec!["jane".to_string()],
        }
    }

    #[test]
    fn test_empty_input_is_empty_array() {
        assert_eq!(render(&[]).unwrap(), "[]");
    }

    #[test]
    fn test_empty_scalars_are_null() {
        let report = render(&[project()]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&report).unwrap();
        let entry = &value[0];
        assert!(entry["description"].is_null());
        assert!(entry["year"].is_null());
        assert_eq!(entry["project"], "Lib");
        assert_eq!(entry["url"], "https://example.com");
    }

    #[test]
    fn test_key_order_is_fixed() {
        let report = render(&[project()]).unwrap();
        let positions: Vec<usize> = [
            "\"project\"",
            "\"description\"",
            "\"version\"",
            "\"developers\"",
            "\"url\"",
            "\"year\"",
            "\"licenses\"",
            "\"dependency\"",
        ]
        .iter()
        .map(|key| report.find(key).unwrap())
        .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_license_objects() {
        let report = render(&[project()]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&report).unwrap();
        assert_eq!(value[0]["licenses"][0]["license"], "MIT License");
        assert_eq!(
            value[0]["licenses"][0]["license_url"],
            "https://opensource.org/licenses/MIT"
        );
    }

    #[test]
    fn test_dependency_uses_resolved_coordinate() {
        let report = render(&[project()]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&report).unwrap();
        assert_eq!(value[0]["dependency"], "com.example:lib:1.0");
    }

    #[test]
    fn test_developers_always_an_array() {
        let mut p = project();
        p.developers.clear();
        let report = render(&[p]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&report).unwrap();
        assert!(value[0]["developers"].as_array().unwrap().is_empty());
    }
}
