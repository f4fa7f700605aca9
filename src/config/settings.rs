//! The resolved configuration surface.

use crate::config::paths::{ProjectPaths, join_file};
use crate::config::validate::validate_parameters;
use crate::config::{
    CalibrationParams, DataProcessingParams, DateRange, LoggingConfig, ModelParams, Parameters,
    VisualizationParams,
};
use crate::error::{Error, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Fully resolved, read-only configuration.
///
/// Built once by [`Settings::load`] and then shared by reference with every
/// pipeline stage. There is no way to mutate a loaded value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Settings {
    paths: ProjectPaths,
    dates: DateRange,
    model: ModelParams,
    calibration: CalibrationParams,
    visualization: VisualizationParams,
    data: DataProcessingParams,
    logging: LoggingConfig,
}

impl Settings {
    /// Load the default parameters against `root`.
    ///
    /// Creates `root/input` and `root/output` if they are missing.
    pub fn load(root: &Path) -> Result<Self> {
        Self::load_with_parameters(root, Parameters::default())
    }

    /// Load caller-supplied parameters against `root`.
    ///
    /// Parameters are validated before anything is written to disk.
    pub fn load_with_parameters(root: &Path, params: Parameters) -> Result<Self> {
        let paths = ProjectPaths::resolve(root)?;
        validate_parameters(&params)?;
        paths.ensure_dirs()?;

        debug!("Configuration loaded from root {}", paths.project_root.display());

        let Parameters {
            dates,
            model,
            calibration,
            visualization,
            data,
            logging,
        } = params;

        Ok(Self {
            paths,
            dates,
            model,
            calibration,
            visualization,
            data,
            logging,
        })
    }

    /// Absolute path of `filename` inside the output directory.
    ///
    /// Neither checks for nor creates the file.
    pub fn create_output_file_path(&self, filename: &str) -> Result<PathBuf> {
        join_file(&self.paths.output_dir, filename)
    }

    /// Absolute path of `filename` inside the input directory.
    pub fn create_input_file_path(&self, filename: &str) -> Result<PathBuf> {
        join_file(&self.paths.input_dir, filename)
    }

    /// Structured view of every group, keyed by group name.
    pub fn snapshot(&self) -> Result<serde_json::Value> {
        serde_json::to_value(self).map_err(|e| Error::SnapshotSerialize { source: e })
    }

    /// Filesystem locations.
    pub const fn paths(&self) -> &ProjectPaths {
        &self.paths
    }

    /// Date range for data retrieval.
    pub const fn dates(&self) -> &DateRange {
        &self.dates
    }

    /// Model parameters.
    pub const fn model(&self) -> &ModelParams {
        &self.model
    }

    /// Calibration parameters.
    pub const fn calibration(&self) -> &CalibrationParams {
        &self.calibration
    }

    /// Visualization parameters.
    pub const fn visualization(&self) -> &VisualizationParams {
        &self.visualization
    }

    /// Data-processing parameters.
    pub const fn data(&self) -> &DataProcessingParams {
        &self.data
    }

    /// Logging settings.
    pub const fn logging(&self) -> &LoggingConfig {
        &self.logging
    }
}
