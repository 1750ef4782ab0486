//! Fixtures for integration tests that touch process-wide state.

use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use patch_window::config::CONFIG_ENV_VAR;

const REPOSITORY_TYPE_VAR: &str = "REPOSITORY_TYPE";

/// Env vars are global to the test binary; one override at a time.
static ENV_LOCK: Mutex<()> = Mutex::new(());

/// A TOML config file in the temp dir, removed when dropped.
pub struct TempConfig {
    path: PathBuf,
}

impl TempConfig {
    pub fn write(contents: &str) -> Self {
        let path = std::env::temp_dir().join(format!(
            "patch-window-{}.toml",
            uuid::Uuid::new_v4()
        ));
        fs::write(&path, contents).unwrap();
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempConfig {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}

/// Runs `f` with `PATCH_WINDOW_CONFIG` pointing at `path`, or unset for `None`.
pub fn with_config_path<R>(path: Option<&Path>, f: impl FnOnce() -> R) -> R {
    with_env_var(CONFIG_ENV_VAR, path.map(Path::as_os_str), f)
}

/// Runs `f` with `REPOSITORY_TYPE` set to `value`, or unset for `None`.
pub fn with_repository_type<R>(value: Option<&str>, f: impl FnOnce() -> R) -> R {
    with_env_var(REPOSITORY_TYPE_VAR, value.map(OsStr::new), f)
}

fn with_env_var<R>(key: &'static str, value: Option<&OsStr>, f: impl FnOnce() -> R) -> R {
    // Poisoning from a failed test is ignored.
    let _lock = ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
    let _restore = EnvOverride::apply(key, value);
    f()
}

/// Restores one variable to its prior value on drop, including on unwind.
struct EnvOverride {
    key: &'static str,
    previous: Option<OsString>,
}

impl EnvOverride {
    fn apply(key: &'static str, value: Option<&OsStr>) -> Self {
        let previous = std::env::var_os(key);
        match value {
            Some(value) => std::env::set_var(key, value),
            None => std::env::remove_var(key),
        }
        Self { key, previous }
    }
}

impl Drop for EnvOverride {
    fn drop(&mut self) {
        match self.previous.take() {
            Some(value) => std::env::set_var(self.key, value),
            None => std::env::remove_var(self.key),
        }
    }
}
