// SPDX-License-Identifier: MPL-2.0
//! Centralized path resolution for file-backed stores.
//!
//! This module provides a single source of truth for where a [`FileStore`]
//! keeps its entries, ensuring consistent directory usage across components.
//!
//! [`FileStore`]: crate::storage::FileStore
//!
//! # Path Resolution Order
//!
//! Paths are resolved in the following priority order:
//! 1. **Explicit override** - parameter to [`data_dir_with_override`] (for tests)
//! 2. **Environment variable** (`STATEKIT_DATA_DIR`)
//! 3. **Platform default** - via the `dirs` crate, with the application name
//!    appended
//!
//! The explicit override has highest priority because it's the most specific -
//! when code explicitly passes a path, it should always be respected.

use std::path::PathBuf;

/// Environment variable to override the data directory.
pub const ENV_DATA_DIR: &str = "STATEKIT_DATA_DIR";

/// Returns the data directory for the given application name.
///
/// # Resolution Order
///
/// 1. `STATEKIT_DATA_DIR` environment variable (if set and non-empty)
/// 2. Platform-specific data directory:
///    - Linux: `~/.local/share/<app_name>/`
///    - macOS: `~/Library/Application Support/<app_name>/`
///    - Windows: `C:\Users\<User>\AppData\Roaming\<app_name>\`
///
/// Returns `None` if the data directory cannot be determined (rare edge case).
pub fn data_dir(app_name: &str) -> Option<PathBuf> {
    data_dir_with_override(app_name, None)
}

/// Returns the data directory for the given application name with an
/// optional override.
///
/// # Arguments
///
/// * `app_name` - Directory name appended to the platform data directory.
/// * `override_path` - Optional path to use instead of the default. Takes
///   highest priority.
pub fn data_dir_with_override(app_name: &str, override_path: Option<PathBuf>) -> Option<PathBuf> {
    // Priority 1: Explicit override (for tests)
    if let Some(path) = override_path {
        return Some(path);
    }

    // Priority 2: Environment variable
    if let Ok(env_path) = std::env::var(ENV_DATA_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    // Priority 3: Platform default with app name
    dirs::data_dir().map(|mut path| {
        path.push(app_name);
        path
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to prevent parallel tests from interfering with each other's env vars
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn data_dir_contains_app_name() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_DATA_DIR);

        if let Some(path) = data_dir("TestApp") {
            assert!(
                path.to_string_lossy().contains("TestApp"),
                "data dir should contain app name"
            );
        }
        // If dirs::data_dir() returns None (rare), the test passes silently
    }

    #[test]
    fn data_dir_is_absolute() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_DATA_DIR);

        if let Some(path) = data_dir("TestApp") {
            assert!(path.is_absolute(), "data dir should be absolute path");
        }
    }

    #[test]
    fn override_path_takes_precedence() {
        let override_path = PathBuf::from("/custom/data/path");
        let result = data_dir_with_override("TestApp", Some(override_path.clone()));
        assert_eq!(result, Some(override_path));
    }

    #[test]
    fn env_var_overrides_default() {
        let _lock = ENV_MUTEX.lock().unwrap();
        let test_path = "/test/data/dir";
        std::env::set_var(ENV_DATA_DIR, test_path);

        let result = data_dir("TestApp");
        assert_eq!(result, Some(PathBuf::from(test_path)));

        std::env::remove_var(ENV_DATA_DIR);
    }

    #[test]
    fn empty_env_var_uses_default() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_DATA_DIR, "");

        let result = data_dir("TestApp");
        // Should fall back to platform default which contains the app name
        if let Some(path) = result {
            assert!(path.to_string_lossy().contains("TestApp"));
        }

        std::env::remove_var(ENV_DATA_DIR);
    }

    #[test]
    fn override_path_takes_precedence_over_env_var() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_DATA_DIR, "/env/path");

        let override_path = PathBuf::from("/override/path");
        let result = data_dir_with_override("TestApp", Some(override_path.clone()));

        assert_eq!(result, Some(override_path));

        std::env::remove_var(ENV_DATA_DIR);
    }
}
