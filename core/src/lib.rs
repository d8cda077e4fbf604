//! Command-line flags for the `bebopc` schema compiler.
//!
//! This crate turns raw process arguments into a typed [`FlagStore`]:
//!
//! - [`FLAGS`] — the one table of [`FlagDescriptor`]s: names, help text, usage
//!   examples, value kinds, and which flags feed a code generator.
//! - [`tokenize()`] — groups arguments into a [`RawFlagMap`] of flag → raw value.
//! - [`FlagStore::try_parse`] — tokenizes, honours `--help`/`--version`, then
//!   coerces each recognised value, stopping at the first [`FlagError`].
//! - [`FlagStore::generators`] — the `(alias, output path)` pairs to generate.
//! - [`help_text`] — usage text rendered from the same table.
//!
//! Alongside the parser, [`find_config`] walks up from the working directory to
//! find `bebop.json`, and [`ProjectConfig`] turns that file into the same
//! [`FlagStore`], without re-tokenizing its paths.
//!
//! # Example
//!
//! ```
//! use bebopc_flags::*;
//!
//! let flags = FlagStore::try_parse(&["--dir", "schemas", "--ts", "gen/models.ts"]).unwrap();
//! assert_eq!(flags.dir(), Some("schemas"));
//! assert_eq!(flags.generators().collect::<Vec<_>>(), vec![("ts", "gen/models.ts")]);
//!
//! let err = FlagStore::try_parse(&["--log-format", "xml"]).unwrap_err();
//! assert!(matches!(err, FlagError::InvalidEnumValue { .. }));
//! assert!(help_text().starts_with("Usage:"));
//! ```

mod coerce;
mod descriptor;
mod error;
mod flags;
mod locate;
mod project;
mod tokenize;

pub use descriptor::{
    COMPILER_NAME, EnumField, FLAGS, FlagDescriptor, FlagKind, LogFormatter, StringField,
    find_flag,
};
pub use error::{ConfigError, FlagError, Result};
pub use flags::{FlagStore, help_text};
pub use locate::{CONFIG_FILE_NAME, find_config, find_config_from};
pub use project::{GeneratorConfig, ProjectConfig};
pub use tokenize::{FLAG_PREFIX, RawFlagMap, tokenize};
