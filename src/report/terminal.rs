use colored::Colorize;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, ContentArrangement, Table};

use crate::models::ResolvedProject;

/// Print a short console summary of the resolved projects.
///
/// This is operator feedback only; the file reports are the deliverables.
pub fn render(projects: &[ResolvedProject], verbose: bool, quiet: bool) {
    let total = projects.len();
    let unlicensed = projects
        .iter()
        .filter(|project| project.licenses.is_empty())
        .count();

    if quiet {
        println!("Total: {total}  Unlicensed: {unlicensed}");
        return;
    }

    println!(
        "\n {} {} dependencies resolved, {} without license information",
        "→".cyan(),
        total,
        if unlicensed > 0 {
            unlicensed.to_string().yellow()
        } else {
            unlicensed.to_string().green()
        }
    );

    if verbose && total > 0 {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec![
                Cell::new("Name").add_attribute(Attribute::Bold),
                Cell::new("Version").add_attribute(Attribute::Bold),
                Cell::new("Licenses").add_attribute(Attribute::Bold),
                Cell::new("Dependency").add_attribute(Attribute::Bold),
            ]);

        for project in projects {
            let licenses = if project.licenses.is_empty() {
                "none".to_string()
            } else {
                project
                    .licenses
                    .iter()
                    .map(|license| license.name.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            };
            table.add_row(vec![
                Cell::new(&project.name),
                Cell::new(&project.version),
                Cell::new(licenses),
                Cell::new(project.coordinate()),
            ]);
        }

        println!("{table}");
    }
}
