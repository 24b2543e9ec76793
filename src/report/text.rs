use crate::models::ResolvedProject;

/// Render the plain-text notice report.
///
/// Projects with an empty name are skipped outright. This renderer is the
/// one place nameless entries are dropped; the asymmetry with the other
/// formats is intentional and relied upon by downstream consumers.
pub fn render(projects: &[ResolvedProject]) -> String {
    if projects.is_empty() {
        return String::new();
    }

    let mut sections = vec!["Notice for packages".to_string(), "\n".to_string()];

    for project in projects {
        if project.name.is_empty() {
            continue;
        }

        let license_names = project
            .licenses
            .iter()
            .map(|license| license.name.as_str())
            .collect::<Vec<_>>()
            .join(",");

        let has_version = !project.version.is_empty();
        let has_licenses = !project.licenses.is_empty();
        let first_line = match (has_version, has_licenses) {
            (true, true) => {
                format!("{} ({}) - {}", project.name, project.version, license_names)
            }
            (false, true) => format!("{} - {}", project.name, license_names),
            (true, false) => format!("{} ({})", project.name, project.version),
            (false, false) => project.name.clone(),
        };

        let mut block = first_line;
        if !project.description.is_empty() {
            block.push('\n');
            block.push_str(&project.description);
        }
        if !project.url.is_empty() {
            block.push('\n');
            block.push_str(&project.url);
        }
        block.push('\n');
        sections.push(block);
    }

    sections.join("\n")
}
