use crate::models::License;

/// Look up a single license URL or license name in the known-license table.
///
/// The table coalesces differing URLs and name spellings of the same license
/// to one canonical key. Keys double as the bundled-text file names.
pub fn table_key(entry: &str) -> Option<&'static str> {
    match entry {
        // Apache License 2.0
        "Apache 2.0"
        | "Apache License 2.0"
        | "The Apache Software License"
        | "The Apache Software License, Version 2.0"
        | "http://www.apache.org/licenses/LICENSE-2.0.txt"
        | "https://www.apache.org/licenses/LICENSE-2.0.txt"
        | "http://opensource.org/licenses/Apache-2.0"
        | "https://opensource.org/licenses/Apache-2.0" => Some("apache-2.0.txt"),

        // BSD 2-Clause "Simplified" License
        "BSD 2-Clause \"Simplified\" License"
        | "http://opensource.org/licenses/BSD-2-Clause"
        | "https://opensource.org/licenses/BSD-2-Clause" => Some("bsd-2-clause.txt"),

        // BSD 3-Clause "New" or "Revised" License
        "BSD 3-Clause \"New\" or \"Revised\" License"
        | "http://opensource.org/licenses/BSD-3-Clause"
        | "https://opensource.org/licenses/BSD-3-Clause" => Some("bsd-3-clause.txt"),

        // Eclipse Public License 2.0
        "Eclipse Public License 2.0"
        | "http://www.eclipse.org/org/documents/epl-2.0/EPL-2.0.txt"
        | "https://www.eclipse.org/org/documents/epl-2.0/EPL-2.0.txt"
        | "http://opensource.org/licenses/EPL-2.0"
        | "https://opensource.org/licenses/EPL-2.0" => Some("epl-2.0.txt"),

        // GNU General Public License v2.0
        "GNU General Public License v2.0"
        | "http://www.gnu.org/licenses/gpl-2.0.txt"
        | "https://www.gnu.org/licenses/gpl-2.0.txt"
        | "http://opensource.org/licenses/GPL-2.0"
        | "https://opensource.org/licenses/GPL-2.0" => Some("gpl-2.0.txt"),

        // GNU General Public License v3.0
        "GNU General Public License v3.0"
        | "http://www.gnu.org/licenses/gpl-3.0.txt"
        | "https://www.gnu.org/licenses/gpl-3.0.txt"
        | "http://opensource.org/licenses/GPL-3.0"
        | "https://opensource.org/licenses/GPL-3.0" => Some("gpl-3.0.txt"),

        // GNU Lesser General Public License v2.1
        "GNU Lesser General Public License v2.1"
        | "http://www.gnu.org/licenses/lgpl-2.1.txt"
        | "https://www.gnu.org/licenses/lgpl-2.1.txt"
        | "http://opensource.org/licenses/LGPL-2.1"
        | "https://opensource.org/licenses/LGPL-2.1" => Some("lgpl-2.1.txt"),

        // GNU Lesser General Public License v3.0
        "GNU Lesser General Public License v3.0"
        | "http://www.gnu.org/licenses/lgpl-3.0.txt"
        | "https://www.gnu.org/licenses/lgpl-3.0.txt"
        | "http://opensource.org/licenses/LGPL-3.0"
        | "https://opensource.org/licenses/LGPL-3.0" => Some("lgpl-3.0.txt"),

        // MIT License
        "MIT License"
        | "http://opensource.org/licenses/MIT"
        | "https://opensource.org/licenses/MIT"
        | "http://www.opensource.org/licenses/mit-license.php" => Some("mit.txt"),

        // Mozilla Public License 2.0
        "Mozilla Public License 2.0"
        | "http://www.mozilla.org/media/MPL/2.0/index.txt"
        | "https://www.mozilla.org/media/MPL/2.0/index.txt"
        | "http://opensource.org/licenses/MPL-2.0"
        | "https://opensource.org/licenses/MPL-2.0" => Some("mpl-2.0.txt"),

        _ => None,
    }
}

/// True when `key` is one of the canonical keys produced by [`table_key`].
pub fn is_canonical_key(key: &str) -> bool {
    matches!(
        key,
        "apache-2.0.txt"
            | "bsd-2-clause.txt"
            | "bsd-3-clause.txt"
            | "epl-2.0.txt"
            | "gpl-2.0.txt"
            | "gpl-3.0.txt"
            | "lgpl-2.1.txt"
            | "lgpl-3.0.txt"
            | "mit.txt"
            | "mpl-2.0.txt"
    )
}

/// The grouping key for one license entry.
///
/// Lookup order matters: some POMs use a generic license name with a
/// distinguishing URL, so the URL is consulted first, then the name, and
/// finally the raw URL string itself is used as the key (which may be empty).
pub fn canonical_key(license: &License) -> String {
    table_key(&license.url)
        .or_else(|| table_key(&license.name))
        .map(str::to_string)
        .unwrap_or_else(|| license.url.clone())
}
