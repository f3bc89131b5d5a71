use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use color_eyre::eyre::{ContextCompat, Result, WrapErr};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::stats::DEFAULT_RECENT_WINDOW_DAYS;

const APP_QUALIFIER: &str = "io";
const APP_ORG: &str = "MoodDiary";
const APP_NAME: &str = "mood_diary";

pub const CONFIG_ENV: &str = "MOOD_DIARY_CONFIG";

/// Upper bound for `recent_window_days`, roughly a century.
pub const MAX_RECENT_WINDOW_DAYS: i64 = 36_500;

#[derive(Debug, Clone)]
pub struct ConfigPaths {
    pub config_file: PathBuf,
    pub log_file: PathBuf,
}

impl ConfigPaths {
    /// Resolves the config file from `override_path`, then `MOOD_DIARY_CONFIG`,
    /// then the platform config directory.
    pub fn discover(override_path: Option<&Path>) -> Result<Self> {
        let project_dirs = ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
            .context("resolving platform project directories")?;

        let config_file = override_path
            .map(Path::to_path_buf)
            .or_else(|| env::var_os(CONFIG_ENV).map(PathBuf::from))
            .unwrap_or_else(|| project_dirs.config_dir().join("config.toml"));
        let log_file = project_dirs.cache_dir().join("mood_diary.log");

        Ok(Self {
            config_file,
            log_file,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub login_delay_ms: u64,
    pub save_delay_ms: u64,
    pub recent_window_days: i64,
    pub seed_sample_entries: bool,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            login_delay_ms: 1000,
            save_delay_ms: 500,
            recent_window_days: DEFAULT_RECENT_WINDOW_DAYS,
            seed_sample_entries: true,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Reads `path`, falling back to defaults when the file does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)
            .wrap_err_with(|| format!("reading config {}", path.display()))?;
        let mut cfg: AppConfig = toml::from_str(&raw).wrap_err("parsing config toml")?;
        cfg.post_load();
        Ok(cfg)
    }

    fn post_load(&mut self) {
        if self.recent_window_days <= 0 {
            tracing::warn!(
                days = self.recent_window_days,
                "recent_window_days must be positive, using default"
            );
            self.recent_window_days = DEFAULT_RECENT_WINDOW_DAYS;
        } else if self.recent_window_days > MAX_RECENT_WINDOW_DAYS {
            tracing::warn!(
                days = self.recent_window_days,
                max = MAX_RECENT_WINDOW_DAYS,
                "recent_window_days too large, clamping"
            );
            self.recent_window_days = MAX_RECENT_WINDOW_DAYS;
        }
    }

    pub fn login_delay(&self) -> Duration {
        Duration::from_millis(self.login_delay_ms)
    }

    pub fn save_delay(&self) -> Duration {
        Duration::from_millis(self.save_delay_ms)
    }

    pub fn recent_window(&self) -> chrono::Duration {
        chrono::Duration::try_days(self.recent_window_days).unwrap_or(chrono::Duration::MAX)
    }
}
