//! Environment variable utilities for optbench
//!
//! This module resolves the `OPTBENCH_DIR` variable and the directories
//! derived from it.

use crate::constants::{DATA_GENERATED, OPTBENCH_DIR, PLOTS};
use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Error type for environment variable issues
#[derive(Debug, thiserror::Error)]
pub enum EnvError {
    #[error(
        "OPTBENCH_DIR environment variable is not set. Please set it to the project root directory (e.g., export OPTBENCH_DIR=/path/to/optbench)"
    )]
    OptbenchDirNotSet,

    #[error("OPTBENCH_DIR points to a non-existent directory: {0}")]
    OptbenchDirNotFound(PathBuf),

    #[error("Failed to create directory {0}: {1}")]
    DirectoryCreationFailed(PathBuf, std::io::Error),
}

/// Get the OPTBENCH_DIR environment variable and validate it exists
///
/// # Errors
///
/// Returns an error if:
/// - OPTBENCH_DIR is not set
/// - OPTBENCH_DIR points to a non-existent directory
///
/// # Example
///
/// ```no_run
/// use optbench_env::env_utils::get_optbench_dir;
///
/// let root = get_optbench_dir()?;
/// println!("optbench directory: {}", root.display());
/// # Ok::<(), optbench_env::env_utils::EnvError>(())
/// ```
pub fn get_optbench_dir() -> Result<PathBuf, EnvError> {
    root_from(env::var_os(OPTBENCH_DIR))
}

fn root_from(value: Option<OsString>) -> Result<PathBuf, EnvError> {
    let value = value
        .filter(|v| !v.is_empty())
        .ok_or(EnvError::OptbenchDirNotSet)?;
    let path = PathBuf::from(value);

    if !path.is_dir() {
        return Err(EnvError::OptbenchDirNotFound(path));
    }

    Ok(path)
}

/// Create `dir` (and its parents) if it does not exist yet
fn ensure_dir(dir: PathBuf) -> Result<PathBuf, EnvError> {
    if !dir.exists() {
        std::fs::create_dir_all(&dir).map_err(|e| EnvError::DirectoryCreationFailed(dir.clone(), e))?;
    }
    Ok(dir)
}

/// Get the path to the data_generated directory below `root`, creating it if necessary
pub fn data_generated_dir_in(root: &Path) -> Result<PathBuf, EnvError> {
    ensure_dir(root.join(DATA_GENERATED))
}

/// Get the path to the data_generated directory, creating it if necessary
///
/// # Errors
///
/// Returns an error if OPTBENCH_DIR is not set or invalid, or if the
/// directory cannot be created.
pub fn get_data_generated_dir() -> Result<PathBuf, EnvError> {
    let root = get_optbench_dir()?;
    data_generated_dir_in(&root)
}

/// Get the path to the plots subdirectory within data_generated
///
/// Convenience wrapper for the `plot_functions` binary.
pub fn get_plots_dir() -> Result<PathBuf, EnvError> {
    let data_generated = get_data_generated_dir()?;
    ensure_dir(data_generated.join(PLOTS))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optbench_dir_not_set() {
        let result = root_from(None);
        assert!(matches!(result, Err(EnvError::OptbenchDirNotSet)));

        let result = root_from(Some(OsString::new()));
        assert!(matches!(result, Err(EnvError::OptbenchDirNotSet)));
    }

    #[test]
    fn test_optbench_dir_nonexistent() {
        let result = root_from(Some(OsString::from("/this/path/should/not/exist")));
        assert!(matches!(result, Err(EnvError::OptbenchDirNotFound(_))));
    }

    #[test]
    fn test_data_generated_dir_is_created() {
        let root = tempfile::tempdir().unwrap();
        let resolved = root_from(Some(root.path().as_os_str().to_owned())).unwrap();

        let data_dir = data_generated_dir_in(&resolved).unwrap();
        assert!(data_dir.is_dir());
        assert_eq!(data_dir, root.path().join(DATA_GENERATED));

        // a second call finds the existing directory
        let again = data_generated_dir_in(&resolved).unwrap();
        assert_eq!(again, data_dir);
    }

    #[test]
    fn test_error_messages_name_the_variable() {
        let msg = EnvError::OptbenchDirNotSet.to_string();
        assert!(msg.contains("OPTBENCH_DIR"));

        let msg = EnvError::OptbenchDirNotFound(PathBuf::from("/nope")).to_string();
        assert!(msg.contains("/nope"));
    }
}
