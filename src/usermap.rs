use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{MigrateError, Result};

/// Author-name to destination-username table, loaded from a tab-separated
/// file. A `*` entry names the fallback username for everyone unlisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserMap {
    names: HashMap<String, String>,
    fallback: Option<String>,
}

/// Result of a lookup. `fallback` is true only when the wildcard username was
/// substituted, so the caller knows to attach an attribution note.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved<'a> {
    pub username: &'a str,
    pub fallback: bool,
}

impl UserMap {
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .map_err(|e| MigrateError::Read(path.display().to_string(), e))?;
        Self::parse(&text, &path.display().to_string())
    }

    /// One mapping per line, `name<TAB>username`. Blank lines and `#` comments
    /// are skipped; anything else malformed is a configuration error.
    pub fn parse(text: &str, origin: &str) -> Result<Self> {
        let mut names = HashMap::new();
        let mut fallback = None;
        for (idx, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let entry = raw
                .split_once('\t')
                .map(|(name, username)| (name.trim(), username.trim()));
            let Some((name, username)) = entry else {
                return Err(MigrateError::UserMapSyntax(
                    origin.to_string(),
                    idx + 1,
                    line.to_string(),
                ));
            };
            if name.is_empty() || username.is_empty() {
                return Err(MigrateError::UserMapSyntax(
                    origin.to_string(),
                    idx + 1,
                    line.to_string(),
                ));
            }
            if name == "*" {
                fallback = Some(username.to_string());
            } else {
                names.insert(name.to_string(), username.to_string());
            }
        }
        Ok(Self { names, fallback })
    }

    pub fn resolve<'a>(&'a self, name: &'a str) -> Resolved<'a> {
        if let Some(username) = self.names.get(name) {
            return Resolved { username, fallback: false };
        }
        match &self.fallback {
            Some(username) => Resolved { username, fallback: true },
            None => Resolved { username: name, fallback: false },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> UserMap {
        UserMap::parse(text, "users.tsv").unwrap()
    }

    #[test]
    fn maps_listed_names() {
        let map = parse("Daniele Varrazzo\tdvarrazzo\nMarco\tmarco82\n");
        let r = map.resolve("Daniele Varrazzo");
        assert_eq!(r.username, "dvarrazzo");
        assert!(!r.fallback);
    }

    #[test]
    fn wildcard_catches_unlisted_names_and_is_flagged() {
        let map = parse("Daniele\tdvarrazzo\n*\tpiro\n");
        let r = map.resolve("Random Visitor");
        assert_eq!(r.username, "piro");
        assert!(r.fallback);
        // A listed name never trips the fallback flag.
        assert!(!map.resolve("Daniele").fallback);
    }

    #[test]
    fn unlisted_name_without_wildcard_passes_through() {
        let map = parse("Daniele\tdvarrazzo\n");
        let r = map.resolve("Somebody Else");
        assert_eq!(r.username, "Somebody Else");
        assert!(!r.fallback);
    }

    #[test]
    fn empty_map_is_the_identity() {
        let map = UserMap::default();
        assert_eq!(map.resolve("Anyone").username, "Anyone");
        assert!(!map.resolve("Anyone").fallback);
    }

    #[test]
    fn skips_blanks_and_comments() {
        let map = parse("# exported from the old wiki\n\nDaniele\tdvarrazzo\n");
        assert_eq!(map.resolve("Daniele").username, "dvarrazzo");
    }

    #[test]
    fn rejects_lines_without_a_tab() {
        let err = UserMap::parse("Daniele dvarrazzo\n", "users.tsv").unwrap_err();
        assert!(matches!(err, MigrateError::UserMapSyntax(_, 1, _)));
    }

    #[test]
    fn rejects_empty_sides_and_reports_the_line() {
        let err = UserMap::parse("Daniele\tdvarrazzo\nGhost\t\n", "users.tsv").unwrap_err();
        let MigrateError::UserMapSyntax(origin, line, _) = err else {
            panic!("wrong error variant");
        };
        assert_eq!(origin, "users.tsv");
        assert_eq!(line, 2);
    }

    #[test]
    fn last_wildcard_wins() {
        let map = parse("*\tfirst\n*\tsecond\n");
        assert_eq!(map.resolve("x").username, "second");
    }
}
