//! Global grader configuration manager.
//!
//! `AppConfig` is a lazily initialized, globally accessible singleton containing
//! runtime configuration values loaded from `.env` and environment variables. It
//! provides thread-safe access and mutation for testing or overrides at runtime.

use std::env;
use std::str::FromStr;
use std::sync::{OnceLock, RwLock};
use std::time::Duration;

/// Represents the complete grader configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub project_name: String,
    pub log_level: String,
    pub log_dir: String,
    pub log_file: String,
    pub log_to_stderr: bool,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub freecodecamp_api_base: String,
}

/// Lazily-initialized, thread-safe singleton instance of `AppConfig`.
static CONFIG_INSTANCE: OnceLock<RwLock<AppConfig>> = OnceLock::new();

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.into())
}

fn parsed_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

impl AppConfig {
    /// Loads the configuration from `.env` and environment variables.
    ///
    /// Every value has a default, and malformed numbers fall back to it, so
    /// loading never fails.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            project_name: var_or("PROJECT_NAME", "web-grader"),
            log_level: var_or("LOG_LEVEL", "info"),
            log_dir: var_or("LOG_DIR", "logs"),
            log_file: var_or("LOG_FILE", "grader.log"),
            log_to_stderr: var_or("LOG_TO_STDERR", "false") == "true",
            request_timeout_secs: parsed_or("REQUEST_TIMEOUT_SECS", 10),
            user_agent: var_or(
                "USER_AGENT",
                concat!("web-grader/", env!("CARGO_PKG_VERSION")),
            ),
            freecodecamp_api_base: var_or("FREECODECAMP_API_BASE", "https://www.freecodecamp.org"),
        }
    }

    /// Per-request timeout applied by the HTTP fetcher.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Returns a shared reference to the global configuration.
    ///
    /// # Panics
    /// Panics if the lock is poisoned.
    pub fn global() -> std::sync::RwLockReadGuard<'static, AppConfig> {
        CONFIG_INSTANCE
            .get_or_init(|| RwLock::new(AppConfig::from_env()))
            .read()
            .expect("Failed to acquire AppConfig read lock")
    }

    /// Resets the configuration by reloading from environment variables.
    ///
    /// Useful in tests to clear overrides.
    pub fn reset() {
        if let Some(lock) = CONFIG_INSTANCE.get() {
            let mut guard = lock
                .write()
                .expect("Failed to acquire AppConfig write lock");
            *guard = AppConfig::from_env();
        }
    }

    /// Generic internal setter for any field in the config.
    fn set_field<F>(setter: F)
    where
        F: FnOnce(&mut AppConfig),
    {
        let lock = CONFIG_INSTANCE.get_or_init(|| RwLock::new(AppConfig::from_env()));
        let mut guard = lock
            .write()
            .expect("Failed to acquire AppConfig write lock");
        setter(&mut guard);
    }

    // --- Per-field setters below ---

    pub fn set_log_level(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.log_level = value.into());
    }

    pub fn set_log_to_stderr(value: bool) {
        AppConfig::set_field(|cfg| cfg.log_to_stderr = value);
    }

    pub fn set_request_timeout_secs(value: u64) {
        AppConfig::set_field(|cfg| cfg.request_timeout_secs = value);
    }

    pub fn set_user_agent(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.user_agent = value.into());
    }

    pub fn set_freecodecamp_api_base(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.freecodecamp_api_base = value.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_vars() {
        for key in [
            "REQUEST_TIMEOUT_SECS",
            "FREECODECAMP_API_BASE",
            "LOG_TO_STDERR",
            "LOG_LEVEL",
        ] {
            unsafe {
                env::remove_var(key);
            }
        }
    }

    #[test]
    #[serial]
    fn defaults_apply_when_unset() {
        clear_vars();
        let cfg = AppConfig::from_env();
        assert_eq!(cfg.request_timeout_secs, 10);
        assert_eq!(cfg.request_timeout(), Duration::from_secs(10));
        assert_eq!(cfg.freecodecamp_api_base, "https://www.freecodecamp.org");
        assert!(!cfg.log_to_stderr);
        assert!(cfg.user_agent.starts_with("web-grader/"));
    }

    #[test]
    #[serial]
    fn malformed_timeout_falls_back_to_default() {
        clear_vars();
        unsafe {
            env::set_var("REQUEST_TIMEOUT_SECS", "soon");
        }
        assert_eq!(AppConfig::from_env().request_timeout_secs, 10);

        unsafe {
            env::set_var("REQUEST_TIMEOUT_SECS", " 3 ");
        }
        assert_eq!(AppConfig::from_env().request_timeout_secs, 3);
        clear_vars();
    }

    #[test]
    #[serial]
    fn setters_override_and_reset_restores() {
        clear_vars();
        AppConfig::set_request_timeout_secs(1);
        AppConfig::set_freecodecamp_api_base("http://127.0.0.1:9");
        {
            let cfg = AppConfig::global();
            assert_eq!(cfg.request_timeout_secs, 1);
            assert_eq!(cfg.freecodecamp_api_base, "http://127.0.0.1:9");
        }

        AppConfig::reset();
        let cfg = AppConfig::global();
        assert_eq!(cfg.request_timeout_secs, 10);
        assert_eq!(cfg.freecodecamp_api_base, "https://www.freecodecamp.org");
    }
}
