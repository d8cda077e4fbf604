//! Conversion of raw flag values into typed [`FlagStore`] fields.

use tracing::debug;

use crate::descriptor::{FlagDescriptor, FlagKind};
use crate::error::{FlagError, Result};
use crate::flags::FlagStore;

/// Coerces `raw` according to the descriptor's kind and stores the result.
///
/// `raw` is the value from the [`RawFlagMap`](crate::RawFlagMap); callers only
/// invoke this for flags that are present, so a `Bool` flag is always set to
/// `true` here.
///
/// # Errors
///
/// - [`FlagError::MissingValue`] for a `String` or `Enum` flag whose trimmed
///   value is empty.
/// - [`FlagError::ListConstruction`] for a `StringList` flag whose value holds
///   no items.
/// - [`FlagError::InvalidEnumValue`] for an `Enum` flag whose value matches no
///   member name.
pub(crate) fn apply(descriptor: &FlagDescriptor, raw: &str, flags: &mut FlagStore) -> Result<()> {
    debug!(flag = descriptor.name, kind = descriptor.kind.label(), raw, "Applying flag");

    match descriptor.kind {
        FlagKind::Bool(field) => {
            *field(flags) = true;
        }
        FlagKind::String(field) => {
            let value = require_value(descriptor, raw)?;
            *(field.write)(flags) = Some(value.to_string());
        }
        FlagKind::StringList(field) => {
            *field(flags) = split_list(descriptor, raw)?;
        }
        FlagKind::Enum(field) => {
            let value = require_value(descriptor, raw)?;
            let index = field
                .members
                .iter()
                .position(|member| member.eq_ignore_ascii_case(value))
                .ok_or_else(|| FlagError::InvalidEnumValue {
                    value: value.to_string(),
                    enum_type: field.type_name.to_string(),
                })?;
            (field.write)(flags, index);
        }
    }

    Ok(())
}

fn require_value<'a>(descriptor: &FlagDescriptor, raw: &'a str) -> Result<&'a str> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(FlagError::MissingValue {
            flag: descriptor.name.to_string(),
        });
    }
    Ok(value)
}

fn split_list(descriptor: &FlagDescriptor, raw: &str) -> Result<Vec<String>> {
    let items: Vec<String> = raw.split_whitespace().map(str::to_string).collect();
    if items.is_empty() {
        return Err(FlagError::ListConstruction {
            flag: descriptor.name.to_string(),
        });
    }
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{LogFormatter, find_flag};

    fn descriptor(name: &str) -> &'static FlagDescriptor {
        find_flag(name).expect("flag should exist")
    }

    #[test]
    fn test_bool_flag_ignores_value() {
        let mut flags = FlagStore::empty();
        apply(descriptor("version"), "whatever", &mut flags).unwrap();
        assert!(flags.version());
    }

    #[test]
    fn test_string_flag_is_trimmed() {
        let mut flags = FlagStore::empty();
        apply(descriptor("namespace"), "  Cowboy.Bebop ", &mut flags).unwrap();
        assert_eq!(flags.namespace(), Some("Cowboy.Bebop"));
    }

    #[test]
    fn test_string_flag_requires_value() {
        let mut flags = FlagStore::empty();
        let err = apply(descriptor("cs"), "   ", &mut flags).unwrap_err();
        assert_eq!(
            err,
            FlagError::MissingValue {
                flag: "cs".to_string()
            }
        );
        assert_eq!(flags.cs(), None);
    }

    #[test]
    fn test_string_list_splits_on_whitespace() {
        let mut flags = FlagStore::empty();
        apply(descriptor("files"), "a.bop  b.bop\tc.bop", &mut flags).unwrap();
        assert_eq!(flags.files(), ["a.bop", "b.bop", "c.bop"]);
    }

    #[test]
    fn test_string_list_without_items_fails() {
        let mut flags = FlagStore::empty();
        let err = apply(descriptor("check"), "", &mut flags).unwrap_err();
        assert_eq!(
            err,
            FlagError::ListConstruction {
                flag: "check".to_string()
            }
        );
    }

    #[test]
    fn test_enum_matches_case_insensitively() {
        let mut upper = FlagStore::empty();
        apply(descriptor("log-format"), "MSBuild", &mut upper).unwrap();
        let mut lower = FlagStore::empty();
        apply(descriptor("log-format"), "msbuild", &mut lower).unwrap();

        assert_eq!(upper.log_format(), LogFormatter::MSBuild);
        assert_eq!(upper.log_format(), lower.log_format());
    }

    #[test]
    fn test_enum_rejects_unknown_member() {
        let mut flags = FlagStore::empty();
        let err = apply(descriptor("log-format"), "xml", &mut flags).unwrap_err();
        assert_eq!(
            err,
            FlagError::InvalidEnumValue {
                value: "xml".to_string(),
                enum_type: "LogFormatter".to_string(),
            }
        );
        assert_eq!(flags.log_format(), LogFormatter::Structured);
    }

    #[test]
    fn test_enum_requires_value() {
        let mut flags = FlagStore::empty();
        let err = apply(descriptor("log-format"), "", &mut flags).unwrap_err();
        assert!(matches!(err, FlagError::MissingValue { .. }));
    }
}
