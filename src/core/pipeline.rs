//! Conversion pipeline: loader → reshaper → normalizer → materializer.
//!
//! A `Pipeline` is built once from the configuration and holds no mutable
//! state, so one handle can serve any number of conversions (also from
//! several threads at once).

use super::materialize::{MaterializeConfig, materialize};
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::ConversionReport;
use crate::table::{InputKind, ReshapeConfig, Table, load, load_path, reshape};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct Pipeline {
    header_rows_to_skip: usize,
    reshape: ReshapeConfig,
    materialize: MaterializeConfig,
}

impl Pipeline {
    pub fn new(cfg: &Config) -> AppResult<Self> {
        cfg.validate()?;
        Ok(Self {
            header_rows_to_skip: cfg.header_rows_to_skip,
            reshape: ReshapeConfig::from(cfg),
            materialize: MaterializeConfig::from_config(cfg)?,
        })
    }

    pub fn time_zone(&self) -> chrono_tz::Tz {
        self.materialize.tz
    }

    /// Load and reshape a file without building events.
    pub fn reshaped_table(&self, path: &Path) -> AppResult<Table> {
        let raw = load_path(path, self.header_rows_to_skip)?;
        reshape(raw, &self.reshape)
    }

    /// Load a file without reshaping it.
    pub fn raw_table(&self, path: &Path) -> AppResult<Table> {
        load_path(path, self.header_rows_to_skip)
    }

    pub fn convert_path(&self, path: &Path) -> AppResult<ConversionReport> {
        let table = self.reshaped_table(path)?;
        Ok(self.convert_table(path.to_path_buf(), &table))
    }

    pub fn convert_bytes(&self, bytes: &[u8], kind: InputKind) -> AppResult<ConversionReport> {
        let raw = load(bytes, kind, self.header_rows_to_skip)?;
        let table = reshape(raw, &self.reshape)?;
        Ok(self.convert_table(PathBuf::new(), &table))
    }

    /// Materialize an already reshaped table.
    pub fn convert_table(&self, source: PathBuf, table: &Table) -> ConversionReport {
        let outcomes = materialize(table, &self.materialize);
        ConversionReport::from_outcomes(source, outcomes)
    }

    pub fn materialize_config(&self) -> &MaterializeConfig {
        &self.materialize
    }
}
