//! Human-readable configuration summary.
//!
//! The layout is for people, not parsers. Use [`Settings::snapshot`] when
//! a stable structure is needed.

use crate::config::Settings;
use crate::constants::SUMMARY_RULE_WIDTH;
use std::fmt;

impl fmt::Display for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(SUMMARY_RULE_WIDTH);
        let paths = self.paths();
        let dates = self.dates();
        let model = self.model();
        let calibration = self.calibration();
        let viz = self.visualization();
        let data = self.data();

        writeln!(f, "\n{rule}")?;
        writeln!(f, "CONFIGURATION SUMMARY")?;
        writeln!(f, "{rule}")?;

        writeln!(f, "\nPaths:")?;
        writeln!(f, "   Project Root:       {}", paths.project_root.display())?;
        writeln!(f, "   Input Dir:          {}", paths.input_dir.display())?;
        writeln!(f, "   Output Dir:         {}", paths.output_dir.display())?;
        writeln!(f, "   Log File:           {}", paths.log_file.display())?;

        writeln!(f, "\nData:")?;
        writeln!(f, "   Date Range:         {} to {}", dates.start, dates.end)?;
        writeln!(f, "   Macro Sheet:        {}", data.macro_sheet_name)?;
        writeln!(f, "   Events Sheet:       {}", data.events_sheet_name)?;
        writeln!(f, "   Ragged-Edge Lag:    {} months", data.ragged_edge_lag)?;
        writeln!(f, "   Standardization:    {}", data.standardization)?;

        writeln!(f, "\nModel:")?;
        writeln!(f, "   Discount Base:      {:?}", model.discount_factor_base)?;
        writeln!(f, "   Discount Event:     {:?}", model.discount_factor_event)?;
        writeln!(f, "   Event Window:       {} days", model.event_impact_window)?;
        writeln!(f, "   Forecast Horizons:  {:?}", model.forecast_horizons)?;

        writeln!(f, "\nCalibration:")?;
        writeln!(
            f,
            "   Target Coverage:    {:.0}%",
            calibration.coverage_percent()
        )?;
        writeln!(f, "   Z-Score:            {:?}", calibration.z_score_95)?;
        writeln!(
            f,
            "   Scale Grid:         {:?} to {:?} ({} steps)",
            calibration.scale_min, calibration.scale_max, calibration.scale_steps
        )?;

        writeln!(f, "\nVisualization:")?;
        writeln!(f, "   DPI:                {}", viz.figure_dpi)?;
        writeln!(f, "   Format:             {}", viz.figure_format)?;
        writeln!(
            f,
            "   Font Sizes:         title {}, label {}, tick {}",
            viz.fonts.title, viz.fonts.label, viz.fonts.tick
        )?;
        writeln!(
            f,
            "   Colors:             normal {}, event {}, actual {}, forecast {}",
            viz.colors.normal, viz.colors.event, viz.colors.actual, viz.colors.forecast
        )?;
        writeln!(f, "   Rolling Window:     {} days", viz.rolling_window)?;

        writeln!(f, "\n{rule}")
    }
}

impl Settings {
    /// Render the configuration summary.
    pub fn summary(&self) -> String {
        self.to_string()
    }

    /// Print the configuration summary to standard output.
    #[allow(clippy::print_stdout)]
    pub fn print_config(&self) {
        println!("{self}");
    }
}
