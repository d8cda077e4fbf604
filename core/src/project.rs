//! Project config (`bebop.json`) loading.
//!
//! A project config is an alternative spelling of a command line:
//! [`ProjectConfig::to_flags`] fills the same [`FlagStore`] that
//! [`FlagStore::try_parse`] does, applying the same value rules.
//!
//! # Example
//!
//! ```json
//! {
//!   "inputDirectory": "./schemas",
//!   "namespace": "Cowboy.Bebop",
//!   "generators": [
//!     { "alias": "cs", "outputFile": "./gen/Models.g.cs" },
//!     { "alias": "ts", "outputFile": "./gen/models.ts" }
//!   ]
//! }
//! ```

use std::collections::HashSet;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::descriptor::{FlagKind, LogFormatter, find_flag};
use crate::error::{ConfigError, FlagError};
use crate::flags::FlagStore;

/// One code generator to run, and where its output goes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorConfig {
    /// Generator flag name (`cs`, `ts`, `dart`).
    pub alias: String,
    /// Output file path.
    pub output_file: String,
}

/// Deserialized `bebop.json`.
///
/// Every key is optional; unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectConfig {
    /// Schema files to compile.
    pub input_files: Vec<String>,
    /// Directory of schemas to compile.
    pub input_directory: Option<String>,
    /// Namespace for generated code.
    pub namespace: Option<String>,
    /// Log formatter name.
    pub log_format: Option<String>,
    /// Generators to run.
    pub generators: Vec<GeneratorConfig>,
    /// Directory relative paths are resolved against; set by [`load`](Self::load).
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
}

impl ProjectConfig {
    /// Loads a project config from a JSON file.
    ///
    /// Relative paths in the file are later resolved against the file's
    /// directory.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Json`] if it is not a valid config.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let mut config: Self = serde_json::from_reader(BufReader::new(file))?;
        config.base_dir = path.parent().map(Path::to_path_buf);
        debug!(
            path = %path.display(),
            files = config.input_files.len(),
            generators = config.generators.len(),
            "Loaded project config"
        );
        Ok(config)
    }

    /// Parses a project config from a JSON string, with no base directory.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] if `raw` is not a valid config.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Converts the config into the flags it stands for.
    ///
    /// Every entry keeps its own field: paths are never joined or split on
    /// whitespace, so directories and files with spaces in their names survive.
    /// Values go through the same checks a command line would: blank strings
    /// are missing values, the log format must name a member, and a generator
    /// may only be listed once.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownGenerator`] when a generator alias does not
    /// name a generator flag, or [`ConfigError::Flags`] when a value is rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use bebopc_flags::ProjectConfig;
    ///
    /// let config = ProjectConfig::from_json(
    ///     r#"{ "inputFiles": ["my schemas/a.bop"], "generators": [{ "alias": "ts", "outputFile": "out.ts" }] }"#,
    /// ).unwrap();
    /// let flags = config.to_flags().unwrap();
    /// assert_eq!(flags.files(), ["my schemas/a.bop"]);
    /// assert_eq!(flags.ts(), Some("out.ts"));
    /// ```
    pub fn to_flags(&self) -> Result<FlagStore, ConfigError> {
        let mut flags = FlagStore::empty();

        flags.files = self
            .input_files
            .iter()
            .map(|file| file.trim())
            .filter(|file| !file.is_empty())
            .map(|file| self.resolve(file))
            .collect();
        if let Some(dir) = &self.input_directory {
            flags.dir = Some(self.resolve(required("dir", dir)?));
        }
        if let Some(namespace) = &self.namespace {
            flags.namespace = Some(required("namespace", namespace)?.to_string());
        }
        if let Some(format) = &self.log_format {
            let name = required("log-format", format)?;
            flags.log_format =
                LogFormatter::from_name(name).ok_or_else(|| FlagError::InvalidEnumValue {
                    value: name.to_string(),
                    enum_type: LogFormatter::TYPE_NAME.to_string(),
                })?;
        }

        let mut seen = HashSet::new();
        for generator in &self.generators {
            let flag = find_flag(&generator.alias)
                .filter(|flag| flag.is_generator)
                .ok_or_else(|| ConfigError::UnknownGenerator(generator.alias.clone()))?;
            if !seen.insert(flag.name) {
                return Err(FlagError::DuplicateFlag(flag.name.to_string()).into());
            }
            let output = required(flag.name, &generator.output_file)?;
            if let FlagKind::String(field) = flag.kind {
                *(field.write)(&mut flags) = Some(self.resolve(output));
            }
        }

        Ok(flags)
    }

    fn resolve(&self, path: &str) -> String {
        match &self.base_dir {
            Some(base) if Path::new(path).is_relative() && !base.as_os_str().is_empty() => {
                base.join(path).to_string_lossy().into_owned()
            }
            _ => path.to_string(),
        }
    }
}

fn required<'a>(flag: &str, value: &'a str) -> Result<&'a str, FlagError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FlagError::MissingValue {
            flag: flag.to_string(),
        });
    }
    Ok(value)
}
