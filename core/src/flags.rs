//! The parsed flag set and the parse entry point.
//!
//! [`FlagStore::try_parse`] is the only way to obtain a [`FlagStore`]:
//!
//! 1. tokenize the arguments (an empty result is [`FlagError::NoFlagsFound`]),
//! 2. stop early on `--help`, then on `--version`,
//! 3. coerce every recognised flag through its descriptor, aborting on the
//!    first error.

use std::sync::LazyLock;

use tracing::debug;

use crate::coerce;
use crate::descriptor::{COMPILER_NAME, FLAGS, FlagDescriptor, LogFormatter};
use crate::error::{FlagError, Result};
use crate::tokenize::tokenize;

const INDENT: &str = "    ";

static HELP_TEXT: LazyLock<String> = LazyLock::new(|| render_help(FLAGS));

/// Returns the usage text rendered from [`FLAGS`].
///
/// Rendered once per process; every call returns the same string.
pub fn help_text() -> &'static str {
    HELP_TEXT.as_str()
}

fn render_help(descriptors: &[FlagDescriptor]) -> String {
    let mut out = String::from("Usage:\n");
    for flag in descriptors {
        if let Some(example) = flag.usage_example.filter(|e| !e.is_empty()) {
            out.push_str(&format!("{INDENT}{COMPILER_NAME} {example}\n"));
        }
    }
    out.push_str("\n\n");
    out.push_str("Options:\n");
    for flag in descriptors {
        out.push_str(&format!("{INDENT}--{}  {}\n", flag.name, flag.help_text));
    }
    out
}

/// Typed result of a successful parse.
///
/// # Examples
///
/// ```
/// use bebopc_flags::{FlagStore, LogFormatter};
///
/// let flags = FlagStore::try_parse(&["--cs", "out/Models.cs", "--files", "a.bop", "b.bop"]).unwrap();
/// assert_eq!(flags.cs(), Some("out/Models.cs"));
/// assert_eq!(flags.files(), ["a.bop", "b.bop"]);
/// assert_eq!(flags.log_format(), LogFormatter::Structured);
/// assert_eq!(flags.generators().collect::<Vec<_>>(), vec![("cs", "out/Models.cs")]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagStore {
    pub(crate) config: Option<String>,
    pub(crate) cs: Option<String>,
    pub(crate) ts: Option<String>,
    pub(crate) dart: Option<String>,
    pub(crate) namespace: Option<String>,
    pub(crate) dir: Option<String>,
    pub(crate) files: Vec<String>,
    pub(crate) check: Vec<String>,
    pub(crate) log_format: LogFormatter,
    pub(crate) help: bool,
    pub(crate) version: bool,
}

impl FlagStore {
    pub(crate) fn empty() -> Self {
        Self {
            config: None,
            cs: None,
            ts: None,
            dart: None,
            namespace: None,
            dir: None,
            files: Vec::new(),
            check: Vec::new(),
            log_format: LogFormatter::default(),
            help: false,
            version: false,
        }
    }

    /// Parses process arguments (without the program name).
    ///
    /// `--help` and `--version` are honoured before any other flag is looked
    /// at, so they succeed even when the rest of the line is malformed. Flags
    /// that no descriptor recognises are ignored.
    ///
    /// # Errors
    ///
    /// Returns the first [`FlagError`] met: [`NoFlagsFound`](FlagError::NoFlagsFound)
    /// or [`DuplicateFlag`](FlagError::DuplicateFlag) from tokenizing, or a
    /// coercion error from the first flag whose value is unusable.
    pub fn try_parse<S: AsRef<str>>(args: &[S]) -> Result<Self> {
        let raw = tokenize(args)?;
        if raw.is_empty() {
            return Err(FlagError::NoFlagsFound);
        }

        let mut flags = Self::empty();

        if raw.has_flag("help") {
            flags.help = true;
            return Ok(flags);
        }
        if raw.has_flag("version") {
            flags.version = true;
            return Ok(flags);
        }

        for key in raw.keys().filter(|key| !FLAGS.iter().any(|f| f.matches(key))) {
            debug!(flag = key, "Ignoring unrecognised flag");
        }

        for descriptor in FLAGS {
            if let Some(value) = raw.get(descriptor.name) {
                coerce::apply(descriptor, value, &mut flags)?;
            }
        }

        Ok(flags)
    }

    /// Path given with `--config`.
    pub fn config(&self) -> Option<&str> {
        self.config.as_deref()
    }

    /// C# output path.
    pub fn cs(&self) -> Option<&str> {
        self.cs.as_deref()
    }

    /// TypeScript output path.
    pub fn ts(&self) -> Option<&str> {
        self.ts.as_deref()
    }

    /// Dart output path.
    pub fn dart(&self) -> Option<&str> {
        self.dart.as_deref()
    }

    /// Namespace for generated code.
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Schema directory.
    pub fn dir(&self) -> Option<&str> {
        self.dir.as_deref()
    }

    /// Schema files to compile, in the order given.
    pub fn files(&self) -> &[String] {
        &self.files
    }

    /// Schema files to check without generating code.
    pub fn check(&self) -> &[String] {
        &self.check
    }

    /// Selected log formatter.
    pub fn log_format(&self) -> LogFormatter {
        self.log_format
    }

    /// `true` when `--help` was given; nothing else was parsed.
    pub fn help(&self) -> bool {
        self.help
    }

    /// `true` when `--version` was given; nothing else was parsed.
    pub fn version(&self) -> bool {
        self.version
    }

    /// Usage text, identical for every store. See [`help_text`].
    pub fn help_text(&self) -> &'static str {
        help_text()
    }

    /// Yields `(alias, output path)` for each generator flag that was set.
    ///
    /// Pairs come out in table order. The iterator borrows the store and is
    /// rebuilt on every call, so it can be taken any number of times.
    pub fn generators(&self) -> impl Iterator<Item = (&'static str, &str)> + Clone + '_ {
        FLAGS
            .iter()
            .filter(|flag| flag.is_generator)
            .filter_map(move |flag| flag.string_value(self).map(|path| (flag.name, path)))
    }
}
