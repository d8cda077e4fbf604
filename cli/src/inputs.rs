//! Resolution of schema inputs from parsed flags.

use std::collections::BTreeSet;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use bebopc_flags::FlagStore;
use thiserror::Error;
use tracing::debug;

const SCHEMA_EXTENSION: &str = "bop";

/// Errors that can occur while resolving schema inputs.
#[derive(Debug, Error)]
pub enum InputError {
    /// Directory traversal failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A listed schema file does not exist.
    #[error("schema file '{}' does not exist", .0.display())]
    MissingFile(PathBuf),

    /// `--dir` does not name a directory.
    #[error("schema directory '{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),

    /// Neither `--files`, `--dir` nor `--check` named any schema.
    #[error("no schema files were specified; use --files, --dir or --check")]
    NoInputs,
}

/// What the compiler has been asked to do with its inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Parse and validate only (`--check`).
    Check,
    /// Parse and hand to the selected generators.
    Compile,
}

/// Schema files to process, sorted and de-duplicated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaInputs {
    pub mode: Mode,
    pub files: Vec<PathBuf>,
}

/// Resolves the schema files named by `flags`.
///
/// `--check` takes precedence and is used as given. Otherwise `--files` is
/// combined with every `.bop` file found recursively under `--dir`.
pub fn resolve(flags: &FlagStore) -> Result<SchemaInputs, InputError> {
    if !flags.check().is_empty() {
        let files = existing_files(flags.check())?;
        return Ok(SchemaInputs {
            mode: Mode::Check,
            files: files.into_iter().collect(),
        });
    }

    let mut files = existing_files(flags.files())?;
    if let Some(dir) = flags.dir() {
        let dir = Path::new(dir);
        if !dir.is_dir() {
            return Err(InputError::NotADirectory(dir.to_path_buf()));
        }
        collect_schemas(dir, &mut files)?;
    }

    if files.is_empty() {
        return Err(InputError::NoInputs);
    }

    Ok(SchemaInputs {
        mode: Mode::Compile,
        files: files.into_iter().collect(),
    })
}

fn existing_files(paths: &[String]) -> Result<BTreeSet<PathBuf>, InputError> {
    let mut files = BTreeSet::new();
    for path in paths {
        let path = PathBuf::from(path);
        if !path.is_file() {
            return Err(InputError::MissingFile(path));
        }
        files.insert(path);
    }
    Ok(files)
}

fn collect_schemas(dir: &Path, files: &mut BTreeSet<PathBuf>) -> Result<(), InputError> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        let file_type = entry.file_type()?;
        if file_type.is_dir() {
            collect_schemas(&path, files)?;
        } else if file_type.is_symlink() && path.is_dir() {
            debug!(path = %path.display(), "Skipping symlinked directory");
        } else if path.extension() == Some(OsStr::new(SCHEMA_EXTENSION)) {
            debug!(path = %path.display(), "Found schema");
            files.insert(path);
        }
    }
    Ok(())
}
