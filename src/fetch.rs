use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use futures::future::join_all;
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;
use tracing::{debug, warn};

use crate::manifest::Manifest;
use crate::models::Coordinate;
use crate::pom;

/// Download POMs for declared parents the manifest map does not cover.
///
/// Breadth-first over parent links: each round parses the POMs discovered in
/// the previous round and fetches the parents still missing, so grandparents
/// and beyond are picked up too. Entries are only ever added to the map;
/// mappings supplied by the manifest are never rewritten.
pub async fn fetch_missing_parents(
    manifest: &mut Manifest,
    repository: &str,
    cache_dir: &Path,
    quiet: bool,
) -> Result<usize> {
    std::fs::create_dir_all(cache_dir)
        .with_context(|| format!("creating POM cache directory {}", cache_dir.display()))?;

    let client = Client::builder()
        .timeout(Duration::from_secs(10))
        .build()?;

    let bar = if !quiet {
        let bar = ProgressBar::new_spinner();
        bar.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
        bar.set_message("fetching parent POMs");
        Some(bar)
    } else {
        None
    };

    let mut inspected: HashSet<PathBuf> = HashSet::new();
    let mut requested: HashSet<String> = HashSet::new();
    let mut frontier: Vec<PathBuf> = manifest.poms.values().cloned().collect();
    let mut fetched = 0usize;

    while !frontier.is_empty() {
        // Parents declared by this round's POMs that the map can't serve yet.
        let mut missing: Vec<Coordinate> = Vec::new();
        for pom_file in frontier.drain(..) {
            if !inspected.insert(pom_file.clone()) {
                continue;
            }
            let doc = match pom::parse_pom(&pom_file) {
                Ok(doc) => doc,
                Err(_) => continue,
            };
            let Some(parent) = doc.parent else {
                continue;
            };
            if !parent.is_resolvable() {
                continue;
            }
            let coordinate = parent.to_string();
            if manifest.poms.contains_key(&coordinate) || !requested.insert(coordinate) {
                continue;
            }
            missing.push(parent);
        }

        if missing.is_empty() {
            break;
        }

        let downloads = join_all(
            missing
                .iter()
                .map(|parent| fetch_pom(&client, repository, parent)),
        )
        .await;

        for (parent, result) in missing.iter().zip(downloads) {
            match result {
                Ok(Some(content)) => {
                    let file = cache_dir.join(format!(
                        "{}_{}_{}.pom",
                        parent.group_id, parent.artifact_id, parent.version
                    ));
                    std::fs::write(&file, content).with_context(|| {
                        format!("writing fetched POM to {}", file.display())
                    })?;
                    debug!("fetched parent POM {parent}");
                    manifest.poms.insert(parent.to_string(), file.clone());
                    frontier.push(file);
                    fetched += 1;
                    if let Some(bar) = &bar {
                        bar.set_message(format!("fetched {parent}"));
                        bar.tick();
                    }
                }
                Ok(None) => warn!("parent POM {parent} not found in {repository}"),
                Err(err) => warn!("failed to fetch parent POM {parent}: {err:#}"),
            }
        }
    }

    if let Some(bar) = bar {
        bar.finish_and_clear();
    }

    Ok(fetched)
}

/// Fetch one POM from the repository. `Ok(None)` when the repository has no
/// such artifact; `Err` only for transport failures.
async fn fetch_pom(
    client: &Client,
    repository: &str,
    coordinate: &Coordinate,
) -> Result<Option<String>> {
    let response = client
        .get(pom_url(repository, coordinate))
        .header(
            "User-Agent",
            concat!("pom-license-report/", env!("CARGO_PKG_VERSION")),
        )
        .send()
        .await?;

    if !response.status().is_success() {
        return Ok(None);
    }

    Ok(Some(response.text().await?))
}

/// Standard Maven repository layout:
/// `<repo>/<group path>/<artifact>/<version>/<artifact>-<version>.pom`.
fn pom_url(repository: &str, coordinate: &Coordinate) -> String {
    let group_path = coordinate.group_id.replace('.', "/");
    format!(
        "{}/{}/{}/{}/{}-{}.pom",
        repository.trim_end_matches('/'),
        group_path,
        coordinate.artifact_id,
        coordinate.version,
        coordinate.artifact_id,
        coordinate.version
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pom_url_layout() {
        let coordinate = Coordinate::new("org.apache.commons", "commons-lang3", "3.12.0");
        assert_eq!(
            pom_url("https://repo1.maven.org/maven2", &coordinate),
            "https://repo1.maven.org/maven2/org/apache/commons/commons-lang3/3.12.0/commons-lang3-3.12.0.pom"
        );
    }

    #[test]
    fn test_pom_url_trailing_slash() {
        let coordinate = Coordinate::new("g", "a", "1");
        assert_eq!(
            pom_url("https://mirror.example.com/maven/", &coordinate),
            "https://mirror.example.com/maven/g/a/1/a-1.pom"
        );
    }
}
