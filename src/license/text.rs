/// Bundled license body text for a canonical key, if this build ships one.
pub fn bundled_text(key: &str) -> Option<&'static str> {
    match key {
        "apache-2.0.txt" => Some(include_str!("texts/apache-2.0.txt")),
        "bsd-2-clause.txt" => Some(include_str!("texts/bsd-2-clause.txt")),
        "bsd-3-clause.txt" => Some(include_str!("texts/bsd-3-clause.txt")),
        "mit.txt" => Some(include_str!("texts/mit.txt")),
        _ => None,
    }
}

/// The license body to embed for a canonical key. Known keys without a
/// bundled body get an explicit placeholder rather than silence.
pub fn license_text(key: &str) -> String {
    match bundled_text(key) {
        Some(text) => text.to_string(),
        None => format!("Missing standard license text for: {key}"),
    }
}
