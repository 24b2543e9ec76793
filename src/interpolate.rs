use std::sync::OnceLock;

use regex::{Captures, Regex};

fn placeholder_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("placeholder regex"))
}

/// Substitute Maven property references (`${project.groupId}` and friends)
/// in a POM name using the effective coordinate values.
///
/// Recognized keys are matched exactly and case-sensitively. A placeholder
/// whose effective value is empty is left as literal `${...}` text rather
/// than substituted away; so is any unrecognized key. Names without `${`
/// skip the scan entirely.
pub fn interpolate(
    raw_name: &str,
    group_id: &str,
    artifact_id: &str,
    version: &str,
) -> String {
    if !raw_name.contains("${") {
        return raw_name.to_string();
    }

    placeholder_regex()
        .replace_all(raw_name, |caps: &Captures| {
            let value = match &caps[1] {
                "project.groupId" | "pom.groupId" | "groupId" => group_id,
                "project.artifactId" | "pom.artifactId" | "artifactId" | "project.name" => {
                    artifact_id
                }
                "project.version" | "pom.version" | "version" => version,
                _ => "",
            };
            if value.is_empty() {
                caps[0].to_string()
            } else {
                value.to_string()
            }
        })
        .into_owned()
}
