use crate::core::machine::{BreakPolicy, DEFAULT_THRESHOLD_MINUTES};
use crate::db::store::DEFAULT_MAX_PENDING;
use crate::errors::{AppError, AppResult};
use crate::utils::path::resolve_in;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    /// Relative paths are resolved against the config directory.
    #[serde(default = "default_pauses_file")]
    pub pauses_file: String,
    #[serde(default = "default_employees_file")]
    pub employees_file: String,
    #[serde(default = "default_threshold")]
    pub break_threshold_minutes: i64,
    #[serde(default = "default_max_pending")]
    pub max_pending_toggles: usize,
}

fn default_bind_address() -> String {
    "127.0.0.1:3000".to_string()
}
fn default_pauses_file() -> String {
    "pauses.json".to_string()
}
fn default_employees_file() -> String {
    "employees.json".to_string()
}
fn default_threshold() -> i64 {
    DEFAULT_THRESHOLD_MINUTES
}
fn default_max_pending() -> usize {
    DEFAULT_MAX_PENDING
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            pauses_file: default_pauses_file(),
            employees_file: default_employees_file(),
            break_threshold_minutes: default_threshold(),
            max_pending_toggles: default_max_pending(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rpauselogger")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rpauselogger")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rpauselogger.conf")
    }

    /// Load the configuration file (defaults when absent), then apply `PORT`.
    pub fn load() -> AppResult<Self> {
        let mut cfg = Self::load_from(&Self::config_file())?;
        if let Ok(port) = env::var("PORT") {
            cfg.override_port(&port)?;
        }
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("cannot read {}: {e}", path.display()))
        })?;
        Ok(serde_yaml::from_str(&content)?)
    }

    /// Replace the port of `bind_address`, keeping the host.
    pub fn override_port(&mut self, port: &str) -> AppResult<()> {
        let port: u16 = port
            .trim()
            .parse()
            .map_err(|_| AppError::Config(format!("invalid port {port:?}")))?;
        let host = self
            .bind_address
            .rsplit_once(':')
            .map(|(host, _)| host)
            .unwrap_or(&self.bind_address);
        self.bind_address = format!("{host}:{port}");
        Ok(())
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.break_threshold_minutes < 0 {
            return Err(AppError::Config(format!(
                "break_threshold_minutes must not be negative (got {})",
                self.break_threshold_minutes
            )));
        }
        if self.max_pending_toggles == 0 {
            return Err(AppError::Config(
                "max_pending_toggles must be at least 1".into(),
            ));
        }
        Ok(())
    }

    pub fn pauses_path(&self) -> PathBuf {
        resolve_in(&Self::config_dir(), &self.pauses_file)
    }

    pub fn employees_path(&self) -> PathBuf {
        resolve_in(&Self::config_dir(), &self.employees_file)
    }

    pub fn policy(&self) -> BreakPolicy {
        BreakPolicy {
            threshold_minutes: self.break_threshold_minutes,
        }
    }

    /// Create the config directory and, unless `is_test`, the config file.
    /// An existing config file is left untouched.
    pub fn init_all(&self, is_test: bool) -> AppResult<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let file = Self::config_file();
        if !is_test && !file.exists() {
            let yaml = serde_yaml::to_string(self)?;
            fs::write(&file, yaml)?;
            println!("✅ Config file: {:?}", file);
        }
        Ok(())
    }
}
