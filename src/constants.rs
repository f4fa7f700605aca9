//! Application-wide constants.
//!
//! Every default the forecasting pipeline reads is defined here so the
//! values are easy to find and change in one place.

/// Application name used for the binary and user-facing messages.
pub const APP_NAME: &str = "forecast-config";

/// Directory and file names under the project root.
pub mod paths {
    /// Input directory name.
    pub const INPUT_DIR: &str = "input";
    /// Output directory name.
    pub const OUTPUT_DIR: &str = "output";
    /// Primary macro-data workbook.
    pub const DATA_FILE: &str = "DATA.xlsx";
    /// Market-index workbook.
    pub const NASDAQ_FILE: &str = "NASDAQ_INDEX.xlsx";
    /// Events workbook.
    pub const EVENTS_FILE: &str = "LIST EVENT.xlsx";
    /// Log file name, placed in the output directory.
    pub const LOG_FILE: &str = "model.log";
}

/// Inclusive date bounds for data retrieval.
pub mod dates {
    use chrono::NaiveDate;

    /// First date to load (1990-01-01).
    pub const DATA_START_DATE: NaiveDate = ymd(1990, 1, 1);
    /// Last date to load (2025-12-31).
    pub const DATA_END_DATE: NaiveDate = ymd(2025, 12, 31);

    // Evaluated at compile time; a bad date fails the build.
    #[allow(clippy::panic)]
    const fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        match NaiveDate::from_ymd_opt(year, month, day) {
            Some(date) => date,
            None => panic!("invalid calendar date"),
        }
    }
}

/// DLM TVP-SV model parameters.
pub mod model {
    /// Discount factor for normal periods.
    pub const DISCOUNT_FACTOR_BASE: f64 = 0.995;
    /// Discount factor for event periods (faster adaptation).
    pub const DISCOUNT_FACTOR_EVENT: f64 = 0.95;
    /// Trading days of impact after an event.
    pub const EVENT_IMPACT_WINDOW: u32 = 10;
    /// Forecast horizons in days ahead.
    pub const FORECAST_HORIZONS: [u32; 5] = [1, 2, 3, 4, 5];
}

/// Variance-scale calibration parameters.
pub mod calibration {
    /// Target coverage for prediction intervals.
    pub const TARGET_COVERAGE: f64 = 0.95;
    /// Two-sided z-score for 95% coverage.
    pub const Z_SCORE_95: f64 = 1.96;
    /// Lower bound of the scale grid.
    pub const SCALE_MIN: f64 = 0.5;
    /// Upper bound of the scale grid.
    pub const SCALE_MAX: f64 = 3.0;
    /// Number of grid points.
    pub const SCALE_STEPS: usize = 300;
}

/// Figure rendering parameters.
pub mod visualization {
    /// Resolution (300 dpi for production).
    pub const FIGURE_DPI: u32 = 300;
    /// Title font size.
    pub const TITLE_FONTSIZE: u32 = 12;
    /// Axis label font size.
    pub const LABEL_FONTSIZE: u32 = 11;
    /// Tick label font size.
    pub const TICK_FONTSIZE: u32 = 10;
    /// Color for normal periods.
    pub const COLOR_NORMAL: &str = "steelblue";
    /// Color for event periods.
    pub const COLOR_EVENT: &str = "coral";
    /// Color for realized values.
    pub const COLOR_ACTUAL: &str = "navy";
    /// Color for forecasts.
    pub const COLOR_FORECAST: &str = "red";
    /// Rolling window for metrics, in trading days (about one year).
    pub const ROLLING_WINDOW: u32 = 252;
}

/// Ingestion and normalization parameters.
pub mod data {
    /// Macro data sheet name.
    pub const MACRO_SHEET_NAME: &str = "Sheet1";
    /// Events data sheet name.
    pub const EVENTS_SHEET_NAME: &str = "tóm tắt";
    /// Ragged-edge reporting lag in months.
    pub const RAGGED_EDGE_LAG: u32 = 1;
}

/// Logging defaults.
pub mod logging {
    /// Verbose diagnostic output.
    pub const VERBOSE: bool = true;
}

/// Width of the separator rule in the configuration summary.
pub const SUMMARY_RULE_WIDTH: usize = 80;
