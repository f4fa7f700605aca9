//! Configuration type definitions.

use crate::constants::{calibration, data, dates, logging, model, visualization};
use crate::error::Error;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// All tunable parameter groups.
///
/// This is the part of the configuration that does not depend on where the
/// project lives on disk. A TOML parameters file deserializes into it, with
/// every missing group or field falling back to its default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Parameters {
    /// Date range for data retrieval.
    pub dates: DateRange,
    /// State-space model parameters.
    pub model: ModelParams,
    /// Variance-scale calibration parameters.
    pub calibration: CalibrationParams,
    /// Figure rendering parameters.
    pub visualization: VisualizationParams,
    /// Ingestion and normalization parameters.
    pub data: DataProcessingParams,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Inclusive date bounds, serialized as ISO 8601 strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateRange {
    /// First date to load.
    pub start: NaiveDate,
    /// Last date to load.
    pub end: NaiveDate,
}

impl Default for DateRange {
    fn default() -> Self {
        Self {
            start: dates::DATA_START_DATE,
            end: dates::DATA_END_DATE,
        }
    }
}

/// DLM TVP-SV model parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelParams {
    /// Discount factor for normal periods.
    pub discount_factor_base: f64,
    /// Discount factor for event periods; lower means faster adaptation.
    pub discount_factor_event: f64,
    /// Trading days an event keeps influencing the model.
    pub event_impact_window: u32,
    /// Forecast horizons in days ahead, strictly increasing.
    pub forecast_horizons: Vec<u32>,
}

impl Default for ModelParams {
    fn default() -> Self {
        Self {
            discount_factor_base: model::DISCOUNT_FACTOR_BASE,
            discount_factor_event: model::DISCOUNT_FACTOR_EVENT,
            event_impact_window: model::EVENT_IMPACT_WINDOW,
            forecast_horizons: model::FORECAST_HORIZONS.to_vec(),
        }
    }
}

/// Grid-search bounds for variance-scale calibration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalibrationParams {
    /// Target coverage of the prediction intervals.
    pub target_coverage: f64,
    /// z-score matching the target coverage.
    pub z_score_95: f64,
    /// Lower bound of the scale grid.
    pub scale_min: f64,
    /// Upper bound of the scale grid.
    pub scale_max: f64,
    /// Number of grid points.
    pub scale_steps: usize,
}

impl Default for CalibrationParams {
    fn default() -> Self {
        Self {
            target_coverage: calibration::TARGET_COVERAGE,
            z_score_95: calibration::Z_SCORE_95,
            scale_min: calibration::SCALE_MIN,
            scale_max: calibration::SCALE_MAX,
            scale_steps: calibration::SCALE_STEPS,
        }
    }
}

impl CalibrationParams {
    /// Evenly spaced scale candidates from `scale_min` to `scale_max`.
    ///
    /// Both bounds are included. A single-step grid holds only `scale_min`,
    /// and a zero-step grid is empty.
    #[allow(clippy::cast_precision_loss)]
    pub fn scale_grid(&self) -> Vec<f64> {
        match self.scale_steps {
            0 => Vec::new(),
            1 => vec![self.scale_min],
            steps => {
                let step = (self.scale_max - self.scale_min) / (steps - 1) as f64;
                (0..steps)
                    .map(|i| {
                        if i == steps - 1 {
                            self.scale_max
                        } else {
                            (i as f64).mul_add(step, self.scale_min)
                        }
                    })
                    .collect()
            }
        }
    }

    /// Target coverage as a whole-number percentage.
    pub fn coverage_percent(&self) -> f64 {
        (self.target_coverage * 100.0).round()
    }
}

/// Supported figure file formats.
///
/// Deserialization goes through [`FromStr`](std::str::FromStr), so parameter
/// files accept the same spellings as the parser.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum FigureFormat {
    /// Portable Network Graphics.
    #[default]
    Png,
    /// Portable Document Format.
    Pdf,
    /// Scalable Vector Graphics.
    Svg,
    /// Encapsulated `PostScript`.
    Eps,
    /// JPEG.
    Jpg,
    /// TIFF.
    Tiff,
}

impl FigureFormat {
    /// File extension without the leading dot.
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Pdf => "pdf",
            Self::Svg => "svg",
            Self::Eps => "eps",
            Self::Jpg => "jpg",
            Self::Tiff => "tiff",
        }
    }
}

impl std::fmt::Display for FigureFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

impl std::str::FromStr for FigureFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "png" => Ok(Self::Png),
            "pdf" => Ok(Self::Pdf),
            "svg" => Ok(Self::Svg),
            "eps" => Ok(Self::Eps),
            "jpg" | "jpeg" => Ok(Self::Jpg),
            "tif" | "tiff" => Ok(Self::Tiff),
            _ => Err(Error::InvalidFigureFormat {
                value: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for FigureFormat {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Font sizes in points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontSizes {
    /// Figure titles.
    pub title: u32,
    /// Axis labels.
    pub label: u32,
    /// Tick labels.
    pub tick: u32,
}

impl Default for FontSizes {
    fn default() -> Self {
        Self {
            title: visualization::TITLE_FONTSIZE,
            label: visualization::LABEL_FONTSIZE,
            tick: visualization::TICK_FONTSIZE,
        }
    }
}

/// Named plot colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotColors {
    /// Normal periods.
    pub normal: String,
    /// Event periods.
    pub event: String,
    /// Realized values.
    pub actual: String,
    /// Forecasts.
    pub forecast: String,
}

impl Default for PlotColors {
    fn default() -> Self {
        Self {
            normal: visualization::COLOR_NORMAL.to_string(),
            event: visualization::COLOR_EVENT.to_string(),
            actual: visualization::COLOR_ACTUAL.to_string(),
            forecast: visualization::COLOR_FORECAST.to_string(),
        }
    }
}

/// Rendering constants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualizationParams {
    /// Output resolution.
    pub figure_dpi: u32,
    /// Output file format.
    pub figure_format: FigureFormat,
    /// Font sizes.
    pub fonts: FontSizes,
    /// Named colors.
    pub colors: PlotColors,
    /// Rolling window for metrics, in trading days.
    pub rolling_window: u32,
}

impl Default for VisualizationParams {
    fn default() -> Self {
        Self {
            figure_dpi: visualization::FIGURE_DPI,
            figure_format: FigureFormat::default(),
            fonts: FontSizes::default(),
            colors: PlotColors::default(),
            rolling_window: visualization::ROLLING_WINDOW,
        }
    }
}

/// Feature standardization window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum StandardizationType {
    /// Growing window from the start of the sample.
    #[default]
    Expanding,
    /// Fixed-length trailing window.
    Rolling,
}

impl std::fmt::Display for StandardizationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Expanding => write!(f, "expanding"),
            Self::Rolling => write!(f, "rolling"),
        }
    }
}

impl std::str::FromStr for StandardizationType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "expanding" => Ok(Self::Expanding),
            "rolling" => Ok(Self::Rolling),
            _ => Err(Error::InvalidStandardization {
                value: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for StandardizationType {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Ingestion and normalization knobs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataProcessingParams {
    /// Sheet holding the macro series.
    pub macro_sheet_name: String,
    /// Sheet holding the event list.
    pub events_sheet_name: String,
    /// Reporting delay of macro data, in months.
    pub ragged_edge_lag: u32,
    /// Standardization window.
    pub standardization: StandardizationType,
}

impl Default for DataProcessingParams {
    fn default() -> Self {
        Self {
            macro_sheet_name: data::MACRO_SHEET_NAME.to_string(),
            events_sheet_name: data::EVENTS_SHEET_NAME.to_string(),
            ragged_edge_lag: data::RAGGED_EDGE_LAG,
            standardization: StandardizationType::default(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Emit verbose diagnostics.
    pub verbose: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            verbose: logging::VERBOSE,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_figure_format_from_str() {
        assert_eq!("png".parse::<FigureFormat>().ok(), Some(FigureFormat::Png));
        assert_eq!("PDF".parse::<FigureFormat>().ok(), Some(FigureFormat::Pdf));
        assert_eq!("jpeg".parse::<FigureFormat>().ok(), Some(FigureFormat::Jpg));
        assert_eq!("tif".parse::<FigureFormat>().ok(), Some(FigureFormat::Tiff));
        assert!(matches!(
            "bmp".parse::<FigureFormat>(),
            Err(Error::InvalidFigureFormat { .. })
        ));
    }

    #[test]
    fn test_figure_format_display() {
        assert_eq!(FigureFormat::Png.to_string(), "png");
        assert_eq!(FigureFormat::Svg.to_string(), "svg");
    }

    #[test]
    fn test_standardization_closed_set() {
        assert_eq!(
            "expanding".parse::<StandardizationType>().ok(),
            Some(StandardizationType::Expanding)
        );
        assert_eq!(
            "rolling".parse::<StandardizationType>().ok(),
            Some(StandardizationType::Rolling)
        );
        assert!(matches!(
            "ewm".parse::<StandardizationType>(),
            Err(Error::InvalidStandardization { .. })
        ));
        assert!("".parse::<StandardizationType>().is_err());
    }

    #[derive(Debug, Deserialize)]
    struct Formats {
        figure: FigureFormat,
        standardization: StandardizationType,
    }

    fn from_toml(figure: &str, standardization: &str) -> Option<Formats> {
        toml::from_str(&format!(
            "figure = \"{figure}\"\nstandardization = \"{standardization}\""
        ))
        .ok()
    }

    #[test]
    fn test_toml_and_from_str_accept_same_figure_formats() {
        for value in [
            "png", "PNG", "pdf", "svg", "eps", "jpg", "jpeg", "JPEG", "tif", "tiff", "bmp", "gif",
            "",
        ] {
            let parsed = value.parse::<FigureFormat>().ok();
            let deserialized = from_toml(value, "expanding").map(|f| f.figure);
            assert_eq!(parsed, deserialized, "disagreement on {value:?}");
        }
    }

    #[test]
    fn test_toml_and_from_str_accept_same_standardization() {
        for value in ["expanding", "rolling", "Rolling", "ewm", "window", ""] {
            let parsed = value.parse::<StandardizationType>().ok();
            let deserialized = from_toml("png", value).map(|f| f.standardization);
            assert_eq!(parsed, deserialized, "disagreement on {value:?}");
        }
    }

    #[test]
    fn test_enums_serialize_lowercase() {
        assert_eq!(
            serde_json::to_value(FigureFormat::Tiff).unwrap(),
            serde_json::json!("tiff")
        );
        assert_eq!(
            serde_json::to_value(StandardizationType::Rolling).unwrap(),
            serde_json::json!("rolling")
        );
    }

    #[test]
    fn test_default_parameter_values() {
        let params = Parameters::default();
        assert_eq!(params.dates.start.to_string(), "1990-01-01");
        assert_eq!(params.dates.end.to_string(), "2025-12-31");
        assert_eq!(params.model.discount_factor_base, 0.995);
        assert_eq!(params.model.discount_factor_event, 0.95);
        assert_eq!(params.model.event_impact_window, 10);
        assert_eq!(params.model.forecast_horizons, vec![1, 2, 3, 4, 5]);
        assert_eq!(params.calibration.target_coverage, 0.95);
        assert_eq!(params.calibration.z_score_95, 1.96);
        assert_eq!(params.visualization.figure_dpi, 300);
        assert_eq!(params.visualization.figure_format, FigureFormat::Png);
        assert_eq!(params.visualization.colors.normal, "steelblue");
        assert_eq!(params.visualization.rolling_window, 252);
        assert_eq!(params.data.events_sheet_name, "tóm tắt");
        assert_eq!(params.data.standardization, StandardizationType::Expanding);
        assert!(params.logging.verbose);
    }

    #[test]
    fn test_horizons_strictly_increasing() {
        let horizons = ModelParams::default().forecast_horizons;
        assert!(!horizons.is_empty());
        assert!(horizons.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_default_scale_grid() {
        let calibration = CalibrationParams::default();
        assert!(calibration.scale_min < calibration.scale_max);

        let grid = calibration.scale_grid();
        assert_eq!(grid.len(), 300);
        assert_eq!(grid[0], 0.5);
        assert_eq!(*grid.last().unwrap(), 3.0);
        assert!(grid.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_scale_grid_single_step() {
        let calibration = CalibrationParams {
            scale_steps: 1,
            ..CalibrationParams::default()
        };
        assert_eq!(calibration.scale_grid(), vec![0.5]);
    }

    #[test]
    fn test_coverage_percent() {
        assert_eq!(CalibrationParams::default().coverage_percent(), 95.0);
    }
}
