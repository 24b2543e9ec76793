use crate::models::ResolvedProject;

const COLUMNS: &str =
    "project,description,version,developers,url,year,licenses,license urls,dependency";

/// Render the CSV report.
///
/// An empty project list yields an empty string, not a lone header row; the
/// two cases mean different things to downstream tooling.
pub fn render(projects: &[ResolvedProject]) -> String {
    if projects.is_empty() {
        return String::new();
    }

    let mut rows = Vec::with_capacity(projects.len() + 1);
    rows.push(COLUMNS.to_string());

    for project in projects {
        let license_names = join_list(project.licenses.iter().map(|l| l.name.as_str()));
        let license_urls = join_list(project.licenses.iter().map(|l| l.url.as_str()));
        let developers = join_list(project.developers.iter().map(String::as_str));

        let fields = [
            escape(&project.name),
            escape(&project.description),
            escape(&project.version),
            developers,
            escape(&project.url),
            escape(&project.inception_year),
            license_names,
            license_urls,
            escape(&project.coordinate()),
        ];
        rows.push(fields.join(","));
    }

    rows.join("\n")
}

/// Escape one CSV field: double any `"` and quote the field when it contains
/// a comma, newline, single quote, backslash, or double quote.
fn escape(field: &str) -> String {
    if field.is_empty() {
        return String::new();
    }
    let doubled = field.replace('"', "\"\"");
    if doubled.contains(',')
        || doubled.contains('\n')
        || doubled.contains('\'')
        || doubled.contains('\\')
        || doubled.contains('"')
    {
        format!("\"{doubled}\"")
    } else {
        doubled
    }
}

/// Join a multi-valued column with commas, then escape it as one field.
/// An empty list renders as an empty field.
fn join_list<'a>(items: impl Iterator<Item = &'a str>) -> String {
    let joined = items.collect::<Vec<_>>().join(",");
    escape(&joined)
}
