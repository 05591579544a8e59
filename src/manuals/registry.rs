//! Manual directory scan and identifier lookup.
//!
//! The registry is built once, before the page is rendered, from the
//! markdown files sitting directly inside the manuals directory. Each file is
//! keyed by its lowercased stem, so `BMI-Calculator.md` is found under
//! `bmi-calculator`.
//!
//! Files are visited in lexicographic file-name order and a later file
//! replaces an earlier one with the same key. `A.md` and `a.md` therefore
//! resolve to the content of `a.md`.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use glob::{MatchOptions, Pattern};
use tracing::{debug, warn};

/// File extension (without the dot) that marks a manual.
pub const MANUAL_EXTENSION: &str = "md";

/// File-name pattern selecting manuals inside the directory.
const MANUAL_PATTERN: &str = "*.md";

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: false,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// Derive the registry key for a manual file name.
///
/// Strips the markdown extension (matched case-insensitively) and lowercases
/// what remains. Returns `None` for names without the extension or with an
/// empty stem.
#[must_use]
pub fn manual_key(file_name: &str) -> Option<String> {
    let (stem, extension) = file_name.rsplit_once('.')?;
    if stem.is_empty() || !extension.eq_ignore_ascii_case(MANUAL_EXTENSION) {
        return None;
    }
    Some(stem.to_lowercase())
}

/// One loaded manual.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManualEntry {
    /// Raw markdown text, exactly as read.
    pub content: String,

    /// File the content was read from. `None` for entries built in memory.
    pub source: Option<PathBuf>,
}

/// Immutable mapping from manual key to manual text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManualRegistry {
    entries: BTreeMap<String, ManualEntry>,
}

impl ManualRegistry {
    /// Scan `dir` for manuals.
    ///
    /// A missing directory, or a path that is not a directory, produces an
    /// empty registry. Files that cannot be read or are not valid UTF-8 are
    /// skipped. Subdirectories are not descended into.
    #[must_use]
    pub fn scan(dir: &Path) -> Self {
        let mut registry = Self::default();

        let read_dir = match fs::read_dir(dir) {
            Ok(read_dir) => read_dir,
            Err(e) => {
                debug!(dir = %dir.display(), error = %e, "manuals directory unavailable");
                return registry;
            }
        };

        let Ok(pattern) = Pattern::new(MANUAL_PATTERN) else {
            return registry;
        };

        let mut names: Vec<String> = Vec::new();
        for entry in read_dir {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(dir = %dir.display(), error = %e, "skipping unreadable directory entry");
                    continue;
                }
            };
            let Ok(name) = entry.file_name().into_string() else {
                warn!(path = %entry.path().display(), "skipping file with non UTF-8 name");
                continue;
            };
            if pattern.matches_with(&name, MATCH_OPTIONS) && entry.path().is_file() {
                names.push(name);
            }
        }
        names.sort();

        for name in names {
            let Some(key) = manual_key(&name) else {
                continue;
            };
            let path = dir.join(&name);
            let content = match fs::read(&path).map(String::from_utf8) {
                Ok(Ok(content)) => content,
                Ok(Err(e)) => {
                    warn!(path = %path.display(), error = %e, "skipping manual that is not valid UTF-8");
                    continue;
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "skipping unreadable manual");
                    continue;
                }
            };
            debug!(key = %key, path = %path.display(), bytes = content.len(), "loaded manual");
            registry.insert(
                key,
                ManualEntry {
                    content,
                    source: Some(path),
                },
            );
        }

        registry
    }

    fn insert(&mut self, key: String, entry: ManualEntry) {
        if let Some(previous) = self.entries.insert(key.clone(), entry) {
            warn!(
                key = %key,
                replaced = ?previous.source,
                "duplicate manual key, keeping the later file"
            );
        }
    }

    /// Look up the manual text for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(|entry| entry.content.as_str())
    }

    /// Path the manual for `key` was loaded from.
    #[must_use]
    pub fn source(&self, key: &str) -> Option<&Path> {
        self.entries
            .get(key)
            .and_then(|entry| entry.source.as_deref())
    }

    /// Returns `true` if a manual is registered under `key`.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of registered manuals.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no manuals were found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(key, entry)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ManualEntry)> {
        self.entries.iter().map(|(key, entry)| (key.as_str(), entry))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ManualRegistry {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut registry = Self::default();
        for (key, content) in iter {
            registry.insert(
                key.into(),
                ManualEntry {
                    content: content.into(),
                    source: None,
                },
            );
        }
        registry
    }
}
