//! Error types for flag parsing and project config loading.
//!
//! [`FlagError`] covers every way a command line can be rejected;
//! [`ConfigError`] covers reading and interpreting `bebop.json`.

use thiserror::Error;

/// Errors that can occur while parsing command-line flags.
///
/// The parser stops at the first error it meets, so a failed parse carries
/// exactly one of these. The `Display` impl is the message shown to users.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlagError {
    /// No `--flag` token appeared in the argument list.
    #[error("No commandline flags found.")]
    NoFlagsFound,

    /// The same flag (compared case-insensitively) appeared more than once.
    #[error("Commandline flag '{0}' was specified more than once.")]
    DuplicateFlag(String),

    /// A flag that needs a value was given none.
    #[error("Commandline flag '{flag}' was not assigned a value.")]
    MissingValue {
        /// Name of the offending flag.
        flag: String,
    },

    /// An enum flag's value matched none of the enum's member names.
    #[error("Failed to parse '{value}' into a member of '{enum_type}'.")]
    InvalidEnumValue {
        /// The raw value as given.
        value: String,
        /// Name of the enum the value was matched against.
        enum_type: String,
    },

    /// A list flag produced no items.
    #[error("Failed to create a list of values for flag '{flag}'.")]
    ListConstruction {
        /// Name of the offending flag.
        flag: String,
    },
}

/// Errors that can occur while loading a project config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A generator entry names an alias no generator flag answers to.
    #[error("unknown generator alias: {0}")]
    UnknownGenerator(String),

    /// A config value was rejected by the same rules that apply to flags.
    #[error(transparent)]
    Flags(#[from] FlagError),
}

/// Convenience alias for results with [`FlagError`].
pub type Result<T> = std::result::Result<T, FlagError>;
