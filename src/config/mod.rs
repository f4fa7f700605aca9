//! Configuration loading and access.

mod file;
mod global;
mod paths;
mod settings;
mod summary;
mod types;
mod validate;

pub use file::load_parameters_file;
pub use global::{global, init_with};
pub use paths::{ProjectPaths, project_root};
pub use settings::Settings;
pub use types::{
    CalibrationParams, DataProcessingParams, DateRange, FigureFormat, FontSizes, LoggingConfig,
    ModelParams, Parameters, PlotColors, StandardizationType, VisualizationParams,
};
pub use validate::{
    validate_calibration, validate_model, validate_parameters, validate_visualization,
};
