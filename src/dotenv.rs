use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use crate::error::ConfigError;

static ENV_LOADED: Mutex<bool> = Mutex::new(false);

/// Load `.env` then `.env.local` from each directory, at most once per process.
///
/// `.env` never overrides variables that are already set; `.env.local` does.
/// Missing files are skipped. The process only counts as loaded once a call
/// succeeds, so a failed load can be retried.
pub fn load_environment<P: AsRef<Path>>(dirs: &[P]) -> Result<(), ConfigError> {
    let mut loaded = ENV_LOADED.lock().unwrap_or_else(PoisonError::into_inner);
    if *loaded {
        return Ok(());
    }

    let files = load_env_files(dirs)?;
    tracing::debug!("Loaded {} environment file(s)", files.len());
    *loaded = true;
    Ok(())
}

/// Load env files from each directory without the once-per-process guard.
///
/// Returns the files that were applied, in load order.
pub fn load_env_files<P: AsRef<Path>>(dirs: &[P]) -> Result<Vec<PathBuf>, ConfigError> {
    let mut loaded = Vec::new();

    for dir in dirs {
        let dir = dir.as_ref();
        for (file_name, override_existing) in [(".env", false), (".env.local", true)] {
            let path = dir.join(file_name);
            if load_if_exists(&path, override_existing)? {
                loaded.push(path);
            }
        }
    }

    Ok(loaded)
}

fn load_if_exists(path: &Path, override_existing: bool) -> Result<bool, ConfigError> {
    if !path.is_file() {
        return Ok(false);
    }

    let outcome = if override_existing {
        dotenvy::from_path_override(path)
    } else {
        dotenvy::from_path(path)
    };

    outcome.map_err(|source| ConfigError::EnvFile {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!("Loaded environment file {}", path.display());
    Ok(true)
}
