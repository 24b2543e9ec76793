use std::path::Path;

use anyhow::{Context, Result};
use quick_xml::events::Event;
use quick_xml::Reader;

use crate::models::{Coordinate, License, PomDocument};

/// Parse the reportable fields out of one POM file.
///
/// Only the elements needed for reporting are read; everything else in the
/// POM is skipped. Element positions are matched against the full path from
/// the document root so that e.g. a `<version>` inside `<dependencies>` is
/// never mistaken for the project version.
pub fn parse_pom(path: &Path) -> Result<PomDocument> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read POM file {}", path.display()))?;
    parse_pom_str(&content)
}

/// Parse a POM from an in-memory string using the quick-xml event API.
pub fn parse_pom_str(content: &str) -> Result<PomDocument> {
    let mut reader = Reader::from_str(content);
    reader.config_mut().trim_text(true);

    let mut doc = PomDocument::default();
    let mut buf = Vec::new();

    // Element path from the root, local names only (POMs are often
    // namespaced with xmlns="http://maven.apache.org/POM/4.0.0").
    let mut path: Vec<String> = Vec::new();

    let mut license_name = String::new();
    let mut license_url = String::new();
    let mut parent_group_id = String::new();
    let mut parent_artifact_id = String::new();
    let mut parent_version = String::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let name =
                    String::from_utf8_lossy(e.name().local_name().as_ref()).into_owned();
                if path_equals(&path, &["project", "licenses"]) && name == "license" {
                    license_name.clear();
                    license_url.clear();
                }
                path.push(name);
            }
            Ok(Event::End(ref e)) => {
                let name =
                    String::from_utf8_lossy(e.name().local_name().as_ref()).into_owned();
                if name == "license" && path_equals(&path, &["project", "licenses", "license"]) {
                    doc.licenses
                        .push(License::new(&license_name, &license_url));
                }
                path.pop();
            }
            Ok(Event::Text(ref e)) => {
                let text = e.unescape().unwrap_or_default().trim().to_string();
                if text.is_empty() {
                    continue;
                }
                match as_strs(&path).as_slice() {
                    ["project", "groupId"] => set_if_empty(&mut doc.group_id, text),
                    ["project", "artifactId"] => set_if_empty(&mut doc.artifact_id, text),
                    ["project", "version"] => set_if_empty(&mut doc.version, text),
                    ["project", "name"] => set_if_empty(&mut doc.name, text),
                    ["project", "description"] => set_if_empty(&mut doc.description, text),
                    ["project", "url"] => set_if_empty(&mut doc.url, text),
                    ["project", "inceptionYear"] => {
                        set_if_empty(&mut doc.inception_year, text)
                    }
                    ["project", "licenses", "license", "name"] => {
                        set_if_empty(&mut license_name, text)
                    }
                    ["project", "licenses", "license", "url"] => {
                        set_if_empty(&mut license_url, text)
                    }
                    ["project", "developers", "developer", "name"] => {
                        doc.developers.push(text)
                    }
                    ["project", "parent", "groupId"] => {
                        set_if_empty(&mut parent_group_id, text)
                    }
                    ["project", "parent", "artifactId"] => {
                        set_if_empty(&mut parent_artifact_id, text)
                    }
                    ["project", "parent", "version"] => {
                        set_if_empty(&mut parent_version, text)
                    }
                    _ => {}
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(e).context("malformed POM XML"),
            _ => {}
        }
        buf.clear();
    }

    if !parent_group_id.is_empty() || !parent_artifact_id.is_empty() || !parent_version.is_empty()
    {
        doc.parent = Some(Coordinate::new(
            &parent_group_id,
            &parent_artifact_id,
            &parent_version,
        ));
    }

    Ok(doc)
}

fn set_if_empty(field: &mut String, value: String) {
    if field.is_empty() {
        *field = value;
    }
}

fn path_equals(path: &[String], expected: &[&str]) -> bool {
    path.len() == expected.len() && path.iter().zip(expected).all(|(a, b)| a == b)
}

/// The current path as `&str` slices for pattern matching.
fn as_strs(path: &[String]) -> Vec<&str> {
    path.iter().map(String::as_str).collect()
}
