mod diagnostics;
mod inputs;
mod logging;

use std::path::{Path, PathBuf};

use bebopc_flags::{
    COMPILER_NAME, ConfigError, FlagError, FlagStore, LogFormatter, ProjectConfig, find_config,
};
use thiserror::Error;
use tracing::{info, warn};

use crate::diagnostics::Severity;
use crate::inputs::{InputError, Mode};

const PACKAGE_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Flags(#[from] FlagError),

    #[error("failed to load config '{}': {source}", path.display())]
    Config { path: PathBuf, source: ConfigError },

    #[error(transparent)]
    Input(#[from] InputError),
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let flags = match load_flags(args) {
        Ok(flags) => flags,
        Err(err) => {
            report(LogFormatter::default(), Severity::Error, &err);
            if matches!(err, CliError::Flags(_)) {
                eprint!("{}", bebopc_flags::help_text());
            }
            std::process::exit(1);
        }
    };

    if flags.help() {
        print!("{}", flags.help_text());
        return;
    }
    if flags.version() {
        println!("{COMPILER_NAME} {PACKAGE_VERSION}");
        return;
    }

    logging::init(flags.log_format());

    if let Err(err) = run_compile(&flags) {
        report(flags.log_format(), Severity::Error, &err);
        std::process::exit(1);
    }
}

fn report(format: LogFormatter, severity: Severity, err: &CliError) {
    eprintln!("{}", diagnostics::render(format, severity, &err.to_string()));
}

/// Parses the command line, falling back to (or redirecting to) `bebop.json`.
///
/// With no arguments at all, the nearest `bebop.json` above the working
/// directory stands in for the command line. With `--config`, the named file
/// replaces it.
fn load_flags(args: Vec<String>) -> Result<FlagStore, CliError> {
    if args.is_empty() {
        if let Some(path) = find_config() {
            return config_flags(&path);
        }
    }

    let flags = FlagStore::try_parse(&args)?;
    if flags.help() || flags.version() {
        return Ok(flags);
    }

    match flags.config() {
        Some(path) => config_flags(Path::new(path)),
        None => Ok(flags),
    }
}

fn config_flags(path: &Path) -> Result<FlagStore, CliError> {
    ProjectConfig::load(path)
        .and_then(|config| config.to_flags())
        .map_err(|source| CliError::Config {
            path: path.to_path_buf(),
            source,
        })
}

fn run_compile(flags: &FlagStore) -> Result<(), CliError> {
    let inputs = inputs::resolve(flags)?;
    let generators: Vec<(&str, &str)> = flags.generators().collect();

    info!(
        mode = ?inputs.mode,
        schemas = inputs.files.len(),
        generators = generators.len(),
        namespace = flags.namespace(),
        "Resolved compilation plan"
    );

    match inputs.mode {
        Mode::Check => {
            println!("Checking {} schema file(s).", inputs.files.len());
        }
        Mode::Compile => {
            if generators.is_empty() {
                warn!("No generators selected");
                eprintln!(
                    "{}",
                    diagnostics::render(
                        flags.log_format(),
                        Severity::Warning,
                        "No code generators were specified; schemas will only be parsed.",
                    )
                );
            }
            for (alias, output) in &generators {
                println!("{alias} -> {output}");
            }
            println!("Compiling {} schema file(s).", inputs.files.len());
        }
    }

    for file in &inputs.files {
        info!(path = %file.display(), "Schema input");
    }

    Ok(())
}
