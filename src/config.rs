// SPDX-License-Identifier: GPL-3.0-or-later

use dotenvy::var;
use std::sync::OnceLock;

// NOTE (rsn) 20250612 - if these values change make sure the documentation
// in `.env.template` matches...
const DEFAULT_STORE_CAPACITY: &str = "1024";
const DEFAULT_LOG_DIR: &str = "logs";

static CONFIG: OnceLock<Config> = OnceLock::new();
/// This server configuration Singleton.
pub fn config() -> &'static Config {
    CONFIG.get_or_init(Config::default)
}

/// A structure that provides the current configuration settings.
#[derive(Debug)]
pub struct Config {
    /// Initial capacity, in Statements, of the in-memory store.
    pub(crate) store_capacity: usize,
    /// Directory where the file tracing layer writes its output.
    pub(crate) log_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        let store_capacity: usize = var("STORE_CAPACITY")
            .unwrap_or(DEFAULT_STORE_CAPACITY.to_string())
            .parse()
            .expect("Failed parsing STORE_CAPACITY");
        // ensure it's greater than 0 justin case...
        assert!(store_capacity > 0, "STORE_CAPACITY must be greater than 0");

        let log_dir = var("LOG_DIR").unwrap_or(DEFAULT_LOG_DIR.to_string());

        Self {
            store_capacity,
            log_dir,
        }
    }
}

impl Config {
    /// Current value of the `log_dir` setting.
    pub fn log_dir(&self) -> &str {
        &self.log_dir
    }
}
