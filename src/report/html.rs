use std::collections::HashMap;

use crate::license::canonical::{canonical_key, is_canonical_key};
use crate::license::text::license_text;
use crate::models::{License, ResolvedProject};

use super::RenderOptions;

const OPEN_SOURCE_LIBRARIES: &str = "Open source licenses";
const NOTICE_LIBRARIES: &str = "Notice for packages:";
const NO_LIBRARIES: &str = "None";
const NO_LICENSE: &str = "No license found";
const DEFAULT_AUTHOR: &str = "The original author or authors";

const CSS_STYLE: &str = "body { font-family: sans-serif; background-color: #ffffff; color: #000000; } \
a { color: #0000EE; } \
pre { background-color: #eeeeee; padding: 1em; white-space: pre-wrap; \
word-break: break-word; display: inline-block; } \
@media (prefers-color-scheme: dark) { \
body { background-color: #121212; color: #E0E0E0; } \
a { color: #BB86FC; } \
pre { background-color: #333333; color: #E0E0E0; } }";

/// Render the HTML report.
///
/// Projects sharing an identical license set are grouped under one heading
/// so each distinct set's license body appears exactly once.
pub fn render(projects: &[ResolvedProject], options: &RenderOptions) -> String {
    if projects.is_empty() {
        return page(&format!("<h3>{NO_LIBRARIES}</h3>\n"));
    }
    page(&full_body(projects, options))
}

fn full_body(projects: &[ResolvedProject], options: &RenderOptions) -> String {
    // Composite key of all of a project's canonical license keys, sorted, in
    // the hope that more than one project shares the same set. Projects with
    // no licenses land under the empty key, which sorts first.
    let mut groups: HashMap<String, Vec<&ResolvedProject>> = HashMap::new();
    for project in projects {
        groups.entry(group_key(project)).or_default().push(project);
    }

    let mut sorted_groups: Vec<(String, Vec<&ResolvedProject>)> = groups.into_iter().collect();
    for (_, members) in &mut sorted_groups {
        members.sort_by_key(|project| project.name.to_lowercase());
    }
    sorted_groups.sort_by(|a, b| {
        a.0.to_lowercase()
            .cmp(&b.0.to_lowercase())
            .then_with(|| a.0.cmp(&b.0))
    });

    let mut body = String::new();
    body.push_str(&format!("<h3>{NOTICE_LIBRARIES}</h3>\n"));

    for (key, members) in &sorted_groups {
        let anchor = anchor_id(key);

        body.push_str("<ul>\n");
        for project in members {
            let mut label = escape_html(&project.name);
            if options.show_versions && !project.version.is_empty() {
                label.push_str(&format!(" ({})", escape_html(&project.version)));
            }
            body.push_str(&format!("<li><a href=\"#{anchor}\">{label}</a>\n"));

            let year = if project.inception_year.is_empty() {
                options.copyright_year_fallback.as_str()
            } else {
                project.inception_year.as_str()
            };
            body.push_str("<dl>\n");
            if project.developers.is_empty() {
                body.push_str(&format!(
                    "<dt>Copyright &copy; {} {DEFAULT_AUTHOR}</dt>\n<dd></dd>\n",
                    escape_html(year)
                ));
            } else {
                for developer in &project.developers {
                    body.push_str(&format!(
                        "<dt>Copyright &copy; {} {}</dt>\n<dd></dd>\n",
                        escape_html(year),
                        escape_html(developer)
                    ));
                }
            }
            body.push_str("</dl>\n</li>\n");
        }
        body.push_str("</ul>\n");
        body.push_str(&format!("<a id=\"{anchor}\"></a>\n"));

        // The group key is a function of the license set, so any member can
        // stand in for the group when rendering the license body.
        if let Some(representative) = members.last() {
            body.push_str(&license_body(&representative.licenses));
        }
        body.push_str("<hr>\n");
    }

    body
}

fn license_body(licenses: &[License]) -> String {
    if licenses.is_empty() {
        return format!("<pre>{NO_LICENSE}</pre>\n");
    }

    let mut pairs: Vec<(String, &License)> = licenses
        .iter()
        .map(|license| (canonical_key(license), license))
        .collect();
    pairs.sort_by(|a, b| {
        a.0.to_lowercase()
            .cmp(&b.0.to_lowercase())
            .then_with(|| a.0.cmp(&b.0))
    });

    let mut out = String::new();
    for (key, license) in &pairs {
        if !key.is_empty() && is_canonical_key(key) {
            // Known license: embed the bundled body verbatim.
            out.push_str(&format!("<pre>{}</pre>\n", license_text(key)));
        } else {
            // Unknown license: show whatever the POM carried.
            let name = license.name.trim();
            let url = license.url.trim();
            if !name.is_empty() && !url.is_empty() {
                out.push_str(&format!(
                    "<pre>{name}\n<a href=\"{url}\">{url}</a></pre>\n"
                ));
            } else if !url.is_empty() {
                out.push_str(&format!("<pre><a href=\"{url}\">{url}</a></pre>\n"));
            } else if !name.is_empty() {
                out.push_str(&format!("<pre>{name}\n</pre>\n"));
            } else {
                out.push_str(&format!("<pre>{NO_LICENSE}</pre>\n"));
            }
        }
        out.push_str("<br>\n");
    }
    out
}

fn group_key(project: &ResolvedProject) -> String {
    if project.licenses.is_empty() {
        return String::new();
    }
    let mut keys: Vec<String> = project.licenses.iter().map(canonical_key).collect();
    keys.sort_by(|a, b| {
        a.to_lowercase()
            .cmp(&b.to_lowercase())
            .then_with(|| a.cmp(b))
    });
    format!("[{}]", keys.join(", "))
}

/// Deterministic 32-bit hash of a group key, used for intra-page anchors.
fn anchor_id(key: &str) -> i32 {
    key.chars()
        .fold(0i32, |hash, c| hash.wrapping_mul(31).wrapping_add(c as i32))
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn page(body: &str) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n");
    html.push_str("<html lang=\"en\">\n");
    html.push_str("<head>\n");
    html.push_str("<meta http-equiv=\"content-type\" content=\"text/html; charset=utf-8\">\n");
    html.push_str(&format!("<style>{CSS_STYLE}</style>\n"));
    html.push_str(&format!("<title>{OPEN_SOURCE_LIBRARIES}</title>\n"));
    html.push_str("</head>\n");
    html.push_str("<body>\n");
    html.push_str(body);
    html.push_str("</body>\n");
    html.push_str("</html>\n");
    html
}
