use std::collections::HashMap;
use std::fs::read_to_string;
use std::path::Path;

/// Mapping from raw attribution identifiers to display names.
///
/// Loaded once at startup from a `key=value` text file and treated as
/// immutable for the rest of the run. Typical file contents:
///
/// ```text
/// jdoe=Jane Doe
/// bob.smith=Bob Smith
/// ```
#[derive(Debug, Default, Clone)]
pub struct AliasMap {
    entries: HashMap<String, String>,
}

impl AliasMap {
    /// Loads the alias map from the file at `path`.
    ///
    /// A missing or unreadable file yields an empty map rather than an
    /// error, so running without an alias file is always valid.
    ///
    /// # Parameters
    ///
    /// * `path` — Location of the alias file, e.g. `authors.map`.
    ///
    /// # Returns
    ///
    /// * An [`AliasMap`] holding every parsed entry, or an empty map if the
    ///   file could not be read.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// use git_author_annotate::alias::AliasMap;
    /// use std::path::Path;
    ///
    /// let aliases = AliasMap::load(Path::new("authors.map"));
    /// println!("{} aliases loaded", aliases.len());
    /// ```
    pub fn load(path: &Path) -> AliasMap {
        match read_to_string(path) {
            Ok(body) => AliasMap::parse(&body),
            Err(_) => AliasMap::default(),
        }
    }

    /// Parses alias definitions from text.
    ///
    /// Each line containing `=` splits once into key and value, both
    /// trimmed of surrounding whitespace. Later duplicate keys overwrite
    /// earlier ones. Lines without `=` are silently ignored; this covers
    /// empty lines and any comment convention the operator prefers.
    ///
    /// # Parameters
    ///
    /// * `body` — The full text of an alias file.
    ///
    /// # Returns
    ///
    /// * An [`AliasMap`] holding every well-formed entry.
    pub fn parse(body: &str) -> AliasMap {
        let mut entries = HashMap::new();

        for line in body.lines() {
            match line.split_once('=') {
                Some((key, value)) => {
                    entries.insert(key.trim().to_string(), value.trim().to_string());
                }
                None => {}
            }
        }

        AliasMap { entries }
    }

    /// Resolves a raw attribution token to its display name.
    ///
    /// # Parameters
    ///
    /// * `raw` — The token as reported by the attribution query.
    ///
    /// # Returns
    ///
    /// * The mapped display name if `raw` is a known key, otherwise `raw`
    ///   itself, unchanged.
    pub fn resolve<'a>(&'a self, raw: &'a str) -> &'a str {
        match self.entries.get(raw) {
            Some(name) => name.as_str(),
            None => raw,
        }
    }

    /// Number of loaded alias entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no aliases are loaded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::AliasMap;
    use std::io::Write;
    use std::path::Path;

    #[test]
    fn parse_maps_key_to_value() {
        let aliases = AliasMap::parse("jdoe=Jane Doe");
        assert_eq!(aliases.resolve("jdoe"), "Jane Doe");
    }

    #[test]
    fn parse_trims_surrounding_whitespace() {
        let aliases = AliasMap::parse("  jdoe  =  Jane Doe  ");
        assert_eq!(aliases.resolve("jdoe"), "Jane Doe");
    }

    #[test]
    fn later_duplicate_key_wins() {
        let aliases = AliasMap::parse("jdoe=Jane Doe\njdoe=J. Doe");
        assert_eq!(aliases.resolve("jdoe"), "J. Doe");
        assert_eq!(aliases.len(), 1);
    }

    #[test]
    fn lines_without_equals_are_ignored() {
        let aliases = AliasMap::parse("# team aliases\n\njdoe=Jane Doe\njust a note");
        assert_eq!(aliases.len(), 1);
        assert_eq!(aliases.resolve("jdoe"), "Jane Doe");
    }

    #[test]
    fn value_may_contain_equals() {
        let aliases = AliasMap::parse("bot=ci=true bot");
        assert_eq!(aliases.resolve("bot"), "ci=true bot");
    }

    #[test]
    fn unmapped_token_passes_through() {
        let aliases = AliasMap::parse("jdoe=Jane Doe");
        assert_eq!(aliases.resolve("someone"), "someone");
    }

    #[test]
    fn missing_file_yields_empty_map() {
        let aliases = AliasMap::load(Path::new("/definitely/not/here/authors.map"));
        assert!(aliases.is_empty());
    }

    #[test]
    fn load_reads_entries_from_disk() {
        let mut file = tempfile::NamedTempFile::new().expect("failed to create temp file");
        writeln!(file, "jdoe=Jane Doe").expect("failed to write alias line");
        writeln!(file, "bsmith=Bob Smith").expect("failed to write alias line");

        let aliases = AliasMap::load(file.path());

        assert_eq!(aliases.len(), 2);
        assert_eq!(aliases.resolve("jdoe"), "Jane Doe");
        assert_eq!(aliases.resolve("bsmith"), "Bob Smith");
    }
}
