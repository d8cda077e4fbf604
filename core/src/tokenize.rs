//! Grouping of raw arguments into flag/value pairs.

use std::collections::HashMap;

use crate::error::{FlagError, Result};

/// Prefix that marks a token as the start of a flag.
pub const FLAG_PREFIX: &str = "--";

/// Raw flag values keyed by lower-cased flag name.
///
/// A value is every token between its flag and the next flag, joined by single
/// spaces. A flag followed directly by another flag (or by nothing) maps to an
/// empty string, which is distinct from the flag being absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawFlagMap {
    values: HashMap<String, String>,
}

impl RawFlagMap {
    /// Returns `true` if the flag was given, with or without a value.
    pub fn has_flag(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Returns the raw value of a flag, if it was given.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Number of distinct flags.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if no flags were found.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates the flag names in arbitrary order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    fn insert(&mut self, key: String, value: String) -> Result<()> {
        if self.values.contains_key(&key) {
            return Err(FlagError::DuplicateFlag(key));
        }
        self.values.insert(key, value);
        Ok(())
    }
}

/// Splits an argument list into flags and their raw values.
///
/// Tokens before the first flag are ignored. Keys have every leading `-`
/// removed and are lower-cased, so `--CS` and `--cs` name the same flag.
///
/// # Errors
///
/// Returns [`FlagError::DuplicateFlag`] when a key appears twice.
///
/// # Examples
///
/// ```
/// use bebopc_flags::tokenize;
///
/// let map = tokenize(&["--files", "a.bop", "b.bop", "--namespace", "Foo"]).unwrap();
/// assert_eq!(map.get("files"), Some("a.bop b.bop"));
/// assert_eq!(map.get("namespace"), Some("Foo"));
///
/// let map = tokenize(&["--check"]).unwrap();
/// assert_eq!(map.get("check"), Some(""));
/// ```
pub fn tokenize<S: AsRef<str>>(args: &[S]) -> Result<RawFlagMap> {
    let mut map = RawFlagMap::default();
    let mut current: Option<(String, Vec<&str>)> = None;

    for arg in args {
        let token = arg.as_ref();
        if token.starts_with(FLAG_PREFIX) {
            if let Some((key, values)) = current.take() {
                map.insert(key, values.join(" "))?;
            }
            let key = token.trim_start_matches('-').to_lowercase();
            current = Some((key, Vec::new()));
        } else if let Some((_, values)) = current.as_mut() {
            values.push(token);
        }
    }

    if let Some((key, values)) = current {
        map.insert(key, values.join(" "))?;
    }

    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_groups_values_until_next_flag() {
        let map = tokenize(&["--files", "a.bop", "b.bop", "--namespace", "Foo"]).unwrap();

        assert_eq!(map.len(), 2);
        assert_eq!(map.get("files"), Some("a.bop b.bop"));
        assert_eq!(map.get("namespace"), Some("Foo"));
    }

    #[test]
    fn test_tokenize_flag_without_value_is_empty_not_absent() {
        let map = tokenize(&["--check"]).unwrap();

        assert!(map.has_flag("check"));
        assert_eq!(map.get("check"), Some(""));
        assert!(!map.has_flag("files"));
    }

    #[test]
    fn test_tokenize_ignores_tokens_before_first_flag() {
        let map = tokenize(&["stray", "words", "--ts", "out.ts"]).unwrap();

        assert_eq!(map.len(), 1);
        assert_eq!(map.get("ts"), Some("out.ts"));
    }

    #[test]
    fn test_tokenize_lowercases_and_strips_all_dashes() {
        let map = tokenize(&["---CS", "Out.cs", "--Log-Format", "MSBuild"]).unwrap();

        assert_eq!(map.get("cs"), Some("Out.cs"));
        assert_eq!(map.get("log-format"), Some("MSBuild"));
    }

    #[test]
    fn test_tokenize_rejects_duplicate_flags() {
        let err = tokenize(&["--cs", "a.cs", "--CS", "b.cs"]).unwrap_err();
        assert_eq!(err, FlagError::DuplicateFlag("cs".to_string()));
    }

    #[test]
    fn test_tokenize_empty_input_yields_empty_map() {
        let args: [&str; 0] = [];
        let map = tokenize(&args).unwrap();
        assert!(map.is_empty());

        let map = tokenize(&["no", "flags", "here"]).unwrap();
        assert!(map.is_empty());
    }

    #[test]
    fn test_tokenize_bare_double_dash_is_an_empty_key() {
        let map = tokenize(&["--"]).unwrap();
        assert_eq!(map.len(), 1);
        assert!(map.has_flag(""));
        assert_eq!(map.get(""), Some(""));

        let map = tokenize(&["--", "a.bop", "--ts", "out.ts"]).unwrap();
        assert_eq!(map.get(""), Some("a.bop"));
        assert_eq!(map.get("ts"), Some("out.ts"));
    }

    #[test]
    fn test_tokenize_accepts_owned_strings() {
        let args = vec!["--dir".to_string(), "schemas".to_string()];
        let map = tokenize(&args).unwrap();
        assert_eq!(map.get("dir"), Some("schemas"));
    }
}
