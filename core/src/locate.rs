//! Upward search for the project config file.

use std::path::{Path, PathBuf};

use tracing::debug;

/// File name of the project config.
pub const CONFIG_FILE_NAME: &str = "bebop.json";

/// Looks for [`CONFIG_FILE_NAME`] in the current directory and its ancestors.
///
/// Returns `None` when the current directory cannot be determined or no
/// ancestor holds the file.
pub fn find_config() -> Option<PathBuf> {
    match std::env::current_dir() {
        Ok(dir) => find_config_from(&dir),
        Err(err) => {
            debug!(error = %err, "Cannot read working directory");
            None
        }
    }
}

/// Looks for [`CONFIG_FILE_NAME`] in `start` and then in each parent directory.
///
/// The search stops at the first directory containing a regular file with that
/// name, or at the filesystem root.
///
/// # Examples
///
/// ```
/// use bebopc_flags::{CONFIG_FILE_NAME, find_config_from};
///
/// let root = tempfile::tempdir().unwrap();
/// std::fs::write(root.path().join(CONFIG_FILE_NAME), "{}").unwrap();
/// let nested = root.path().join("a/b");
/// std::fs::create_dir_all(&nested).unwrap();
///
/// assert_eq!(find_config_from(&nested), Some(root.path().join(CONFIG_FILE_NAME)));
/// ```
pub fn find_config_from(start: &Path) -> Option<PathBuf> {
    start.ancestors().find_map(|dir| {
        let candidate = dir.join(CONFIG_FILE_NAME);
        debug!(path = %candidate.display(), "Probing for config");
        candidate.is_file().then_some(candidate)
    })
}
