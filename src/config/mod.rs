use crate::errors::{AppError, AppResult};
use crate::table::column::column_index;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub mod migrate; // use submodule at src/config/migrate.rs

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_header_rows")]
    pub header_rows_to_skip: usize,
    #[serde(default = "default_drop_columns")]
    pub drop_columns: Vec<String>,
    #[serde(default = "default_description_index")]
    pub description_column_index: usize,
    #[serde(default = "default_time_zone")]
    pub time_zone: String,
    #[serde(default = "default_datetime_formats")]
    pub datetime_formats: Vec<String>,
    #[serde(default = "default_calendar_name")]
    pub calendar_name: String,
    #[serde(default = "default_product_id")]
    pub product_id: String,
}

fn default_header_rows() -> usize {
    3
}
fn default_drop_columns() -> Vec<String> {
    ["B", "D", "E", "F", "G", "K", "M", "N", "O", "P", "Q", "R"]
        .iter()
        .map(|c| c.to_string())
        .collect()
}
fn default_description_index() -> usize {
    5
}
fn default_time_zone() -> String {
    "America/New_York".to_string()
}
fn default_datetime_formats() -> Vec<String> {
    vec!["%m/%d/%Y %I %p".to_string(), "%m/%d/%Y %I:%M %p".to_string()]
}
fn default_calendar_name() -> String {
    "Schedule".to_string()
}
fn default_product_id() -> String {
    "-//sched2ics//EN".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            header_rows_to_skip: default_header_rows(),
            drop_columns: default_drop_columns(),
            description_column_index: default_description_index(),
            time_zone: default_time_zone(),
            datetime_formats: default_datetime_formats(),
            calendar_name: default_calendar_name(),
            product_id: default_product_id(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        match dirs::config_dir() {
            Some(dir) => dir.join("sched2ics"),
            None => env::current_dir()
                .unwrap_or_else(|_| PathBuf::from("."))
                .join(".sched2ics"),
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("sched2ics.conf")
    }

    /// Load configuration from `path` (or the default location), returning
    /// defaults when the file does not exist.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_file);

        let cfg = Self::read(&path)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse the file at `path` without validating its values.
    /// A missing or empty file gives the defaults.
    pub fn read(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("cannot read {}: {e}", path.display()))
        })?;

        if content.trim().is_empty() {
            return Ok(Config::default());
        }

        Ok(serde_yaml::from_str(&content)?)
    }

    /// Write the configuration as YAML, creating parent directories.
    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        fs::write(path, yaml)?;
        Ok(())
    }

    /// Check values that serde cannot check on its own.
    pub fn validate(&self) -> AppResult<()> {
        self.tz()?;

        for letter in &self.drop_columns {
            column_index(letter)?;
        }

        if self.datetime_formats.is_empty() {
            return Err(AppError::Config(
                "datetime_formats must contain at least one pattern".into(),
            ));
        }

        Ok(())
    }

    /// Parsed form of `time_zone`.
    pub fn tz(&self) -> AppResult<Tz> {
        self.time_zone
            .parse::<Tz>()
            .map_err(|_| AppError::InvalidTimeZone(self.time_zone.clone()))
    }
}
