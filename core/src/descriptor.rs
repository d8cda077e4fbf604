//! Static flag metadata.
//!
//! Every flag `bebopc` understands is declared exactly once, in [`FLAGS`].
//! The help renderer, the coercion loop and the generator extractor all walk
//! this same table, so adding a flag means adding one entry here and one field
//! to [`FlagStore`].

use std::fmt;

use crate::flags::FlagStore;

/// Name the compiler is invoked as; used in the "Usage" section.
pub const COMPILER_NAME: &str = "bebopc";

/// Formatter used for log and diagnostic output.
///
/// # Examples
///
/// ```
/// use bebopc_flags::LogFormatter;
///
/// assert_eq!(LogFormatter::default(), LogFormatter::Structured);
/// assert_eq!(LogFormatter::MSBuild.name(), "msbuild");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormatter {
    /// Machine-readable, one JSON object per line (the default).
    #[default]
    Structured,
    /// `origin : category : message` lines understood by MSBuild and most IDEs.
    MSBuild,
}

impl LogFormatter {
    /// Type name reported in [`FlagError::InvalidEnumValue`](crate::FlagError::InvalidEnumValue).
    pub const TYPE_NAME: &'static str = "LogFormatter";

    /// All members, in declaration order.
    pub const ALL: [LogFormatter; 2] = [LogFormatter::Structured, LogFormatter::MSBuild];

    /// Member names, index-aligned with [`ALL`](Self::ALL).
    pub const NAMES: [&'static str; 2] = ["structured", "msbuild"];

    /// Returns the name this member is selected by on the command line.
    pub fn name(self) -> &'static str {
        match self {
            LogFormatter::Structured => Self::NAMES[0],
            LogFormatter::MSBuild => Self::NAMES[1],
        }
    }

    /// Finds the member with the given name, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|member| member.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for LogFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accessors for a `String`-kind flag.
#[derive(Clone, Copy)]
pub struct StringField {
    /// Reads the field; `None` when the flag was not given.
    pub read: fn(&FlagStore) -> Option<&str>,
    /// Borrows the field for assignment.
    pub write: fn(&mut FlagStore) -> &mut Option<String>,
}

/// Member table and setter for an `Enum`-kind flag.
#[derive(Clone, Copy)]
pub struct EnumField {
    /// Enum type name, for error messages.
    pub type_name: &'static str,
    /// Member names matched (case-insensitively) against the raw value.
    pub members: &'static [&'static str],
    /// Stores the member at the given index of `members`.
    pub write: fn(&mut FlagStore, usize),
}

/// Value kind of a flag, carrying the accessor bound to its [`FlagStore`] field.
#[derive(Clone, Copy)]
pub enum FlagKind {
    /// Presence sets the field to `true`; any value is ignored.
    Bool(fn(&mut FlagStore) -> &mut bool),
    /// A single trimmed string.
    String(StringField),
    /// Whitespace-separated values, in order.
    StringList(fn(&mut FlagStore) -> &mut Vec<String>),
    /// One member of a fixed enum.
    Enum(EnumField),
}

impl FlagKind {
    /// Short kind label used in logs.
    pub fn label(&self) -> &'static str {
        match self {
            FlagKind::Bool(_) => "bool",
            FlagKind::String(_) => "string",
            FlagKind::StringList(_) => "string-list",
            FlagKind::Enum(_) => "enum",
        }
    }
}

impl fmt::Debug for FlagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlagKind::Enum(field) => f
                .debug_struct("Enum")
                .field("type_name", &field.type_name)
                .field("members", &field.members)
                .finish(),
            other => f.write_str(other.label()),
        }
    }
}

/// Declarative description of one command-line flag.
#[derive(Debug, Clone, Copy)]
pub struct FlagDescriptor {
    /// Flag name, lower-case, written as `--name` on the command line.
    pub name: &'static str,
    /// One-line description shown under "Options".
    pub help_text: &'static str,
    /// Example invocation shown under "Usage"; flags without one are left out
    /// of that section.
    pub usage_example: Option<&'static str>,
    /// True when the value is an output path for a code generator.
    pub is_generator: bool,
    /// How the raw value is coerced, and where it is stored.
    pub kind: FlagKind,
}

impl FlagDescriptor {
    /// Returns `true` if `key` names this flag, ignoring case.
    pub fn matches(&self, key: &str) -> bool {
        self.name.eq_ignore_ascii_case(key)
    }

    /// Reads this flag's value when it is a `String` flag that was set.
    pub fn string_value<'a>(&self, flags: &'a FlagStore) -> Option<&'a str> {
        match self.kind {
            FlagKind::String(field) => (field.read)(flags),
            _ => None,
        }
    }
}

/// Every flag the compiler accepts, in the order they are documented.
pub static FLAGS: &[FlagDescriptor] = &[
    FlagDescriptor {
        name: "config",
        help_text: "Compile schemas listed in this config",
        usage_example: Some("--config bebop.json"),
        is_generator: false,
        kind: FlagKind::String(StringField {
            read: |f| f.config.as_deref(),
            write: |f| &mut f.config,
        }),
    },
    FlagDescriptor {
        name: "cs",
        help_text: "Generate C# source code to the specified file",
        usage_example: Some("--cs ./cowboy/bebop/HelloWorld.cs"),
        is_generator: true,
        kind: FlagKind::String(StringField {
            read: |f| f.cs.as_deref(),
            write: |f| &mut f.cs,
        }),
    },
    FlagDescriptor {
        name: "ts",
        help_text: "Generate TypeScript source code to the specified file",
        usage_example: Some("--ts ./cowboy/bebop/HelloWorld.ts"),
        is_generator: true,
        kind: FlagKind::String(StringField {
            read: |f| f.ts.as_deref(),
            write: |f| &mut f.ts,
        }),
    },
    FlagDescriptor {
        name: "dart",
        help_text: "Generate Dart source code to the specified file",
        usage_example: Some("--dart ./cowboy/bebop/HelloWorld.dart"),
        is_generator: true,
        kind: FlagKind::String(StringField {
            read: |f| f.dart.as_deref(),
            write: |f| &mut f.dart,
        }),
    },
    FlagDescriptor {
        name: "namespace",
        help_text: "When this option is specified generated code will use namespaces",
        usage_example: Some("--cs --namespace [package]"),
        is_generator: false,
        kind: FlagKind::String(StringField {
            read: |f| f.namespace.as_deref(),
            write: |f| &mut f.namespace,
        }),
    },
    FlagDescriptor {
        name: "dir",
        help_text: "Parse and generate code from a directory of schemas",
        usage_example: Some("--ts --dir [input dir]"),
        is_generator: false,
        kind: FlagKind::String(StringField {
            read: |f| f.dir.as_deref(),
            write: |f| &mut f.dir,
        }),
    },
    FlagDescriptor {
        name: "files",
        help_text: "Parse and generate code from a list of schemas",
        usage_example: Some("--files [file1] [file2] ..."),
        is_generator: false,
        kind: FlagKind::StringList(|f| &mut f.files),
    },
    FlagDescriptor {
        name: "check",
        help_text: "Only check a given list of schemas",
        usage_example: Some("--check [file.bop] [file2.bop] ..."),
        is_generator: false,
        kind: FlagKind::StringList(|f| &mut f.check),
    },
    FlagDescriptor {
        name: "version",
        help_text: "Show version info and exit.",
        usage_example: Some("--version"),
        is_generator: false,
        kind: FlagKind::Bool(|f| &mut f.version),
    },
    FlagDescriptor {
        name: "help",
        help_text: "Show this text and exit.",
        usage_example: Some("--help"),
        is_generator: false,
        kind: FlagKind::Bool(|f| &mut f.help),
    },
    FlagDescriptor {
        name: "log-format",
        help_text: "Defines the formatter that will be used with logging.",
        usage_example: Some("--log-format (structured|msbuild)"),
        is_generator: false,
        kind: FlagKind::Enum(EnumField {
            type_name: LogFormatter::TYPE_NAME,
            members: &LogFormatter::NAMES,
            write: |f, index| {
                if let Some(member) = LogFormatter::ALL.get(index) {
                    f.log_format = *member;
                }
            },
        }),
    },
];

/// Finds the descriptor for a flag name, ignoring case.
///
/// # Examples
///
/// ```
/// use bebopc_flags::find_flag;
///
/// assert!(find_flag("CS").is_some_and(|flag| flag.is_generator));
/// assert!(find_flag("verbose").is_none());
/// ```
pub fn find_flag(name: &str) -> Option<&'static FlagDescriptor> {
    FLAGS.iter().find(|flag| flag.matches(name))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_flag_names_are_unique_ignoring_case() {
        let mut seen = HashSet::new();
        for flag in FLAGS {
            assert!(
                seen.insert(flag.name.to_ascii_lowercase()),
                "duplicate flag: {}",
                flag.name
            );
        }
    }

    #[test]
    fn test_flag_names_are_lowercase_and_non_empty() {
        for flag in FLAGS {
            assert!(!flag.name.is_empty());
            assert_eq!(flag.name, flag.name.to_ascii_lowercase());
            assert!(!flag.help_text.trim().is_empty(), "{} has no help", flag.name);
        }
    }

    #[test]
    fn test_generator_flags_are_string_kind() {
        let generators: Vec<&str> = FLAGS
            .iter()
            .filter(|flag| flag.is_generator)
            .map(|flag| flag.name)
            .collect();
        assert_eq!(generators, vec!["cs", "ts", "dart"]);

        for flag in FLAGS.iter().filter(|flag| flag.is_generator) {
            assert!(matches!(flag.kind, FlagKind::String(_)));
        }
    }

    #[test]
    fn test_log_formatter_names_align_with_members() {
        for (member, name) in LogFormatter::ALL.iter().zip(LogFormatter::NAMES) {
            assert_eq!(member.name(), name);
        }
    }

    #[test]
    fn test_log_formatter_from_name_ignores_case() {
        assert_eq!(LogFormatter::from_name("MSBuild"), Some(LogFormatter::MSBuild));
        assert_eq!(LogFormatter::from_name("structured"), Some(LogFormatter::Structured));
        assert_eq!(LogFormatter::from_name("xml"), None);
    }

    #[test]
    fn test_find_flag_ignores_case() {
        assert_eq!(find_flag("Log-Format").map(|f| f.name), Some("log-format"));
        assert!(find_flag("").is_none());
    }
}
