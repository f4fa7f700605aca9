//! Configuration validation.

use crate::config::{
    CalibrationParams, DataProcessingParams, DateRange, ModelParams, Parameters,
    VisualizationParams,
};
use crate::error::{Error, Result};

/// Validate every parameter group.
pub fn validate_parameters(params: &Parameters) -> Result<()> {
    validate_dates(&params.dates)?;
    validate_model(&params.model)?;
    validate_calibration(&params.calibration)?;
    validate_visualization(&params.visualization)?;
    validate_data(&params.data)?;
    Ok(())
}

fn invalid(message: String) -> Error {
    Error::ConfigValidation { message }
}

fn validate_dates(dates: &DateRange) -> Result<()> {
    if dates.start > dates.end {
        return Err(invalid(format!(
            "data start date {} is after end date {}",
            dates.start, dates.end
        )));
    }
    Ok(())
}

/// Validate model parameters.
pub fn validate_model(model: &ModelParams) -> Result<()> {
    for (name, value) in [
        ("discount_factor_base", model.discount_factor_base),
        ("discount_factor_event", model.discount_factor_event),
    ] {
        // Negated so NaN is rejected too
        if !(value > 0.0 && value < 1.0) {
            return Err(invalid(format!(
                "{name} must be strictly between 0 and 1, got {value}"
            )));
        }
    }

    if model.discount_factor_event >= model.discount_factor_base {
        return Err(invalid(format!(
            "discount_factor_event ({}) must be lower than discount_factor_base ({})",
            model.discount_factor_event, model.discount_factor_base
        )));
    }

    if model.event_impact_window == 0 {
        return Err(invalid(
            "event_impact_window must be at least 1 trading day".to_string(),
        ));
    }

    if model.forecast_horizons.is_empty() {
        return Err(invalid("forecast_horizons must not be empty".to_string()));
    }

    if model.forecast_horizons.contains(&0) {
        return Err(invalid(
            "forecast_horizons must contain only positive horizons".to_string(),
        ));
    }

    if !model.forecast_horizons.windows(2).all(|w| w[0] < w[1]) {
        return Err(invalid(format!(
            "forecast_horizons must be strictly increasing, got {:?}",
            model.forecast_horizons
        )));
    }

    Ok(())
}

/// Validate calibration grid bounds.
pub fn validate_calibration(calibration: &CalibrationParams) -> Result<()> {
    let coverage = calibration.target_coverage;
    if !(coverage > 0.0 && coverage < 1.0) {
        return Err(invalid(format!(
            "target_coverage must be strictly between 0 and 1, got {coverage}"
        )));
    }

    if !(calibration.z_score_95.is_finite() && calibration.z_score_95 > 0.0) {
        return Err(invalid(format!(
            "z_score_95 must be positive, got {}",
            calibration.z_score_95
        )));
    }

    let (min, max) = (calibration.scale_min, calibration.scale_max);
    if !(min.is_finite() && max.is_finite()) {
        return Err(invalid(format!(
            "scale bounds must be finite, got {min} to {max}"
        )));
    }

    if min <= 0.0 {
        return Err(invalid(format!("scale_min must be positive, got {min}")));
    }

    if min >= max {
        return Err(invalid(format!(
            "scale_min ({min}) must be lower than scale_max ({max})"
        )));
    }

    if calibration.scale_steps == 0 {
        return Err(invalid("scale_steps must be at least 1".to_string()));
    }

    Ok(())
}

/// Validate rendering constants.
pub fn validate_visualization(visualization: &VisualizationParams) -> Result<()> {
    if visualization.figure_dpi == 0 {
        return Err(invalid("figure_dpi must be at least 1".to_string()));
    }

    let fonts = &visualization.fonts;
    for (name, size) in [
        ("title", fonts.title),
        ("label", fonts.label),
        ("tick", fonts.tick),
    ] {
        if size == 0 {
            return Err(invalid(format!("{name} font size must be positive")));
        }
    }

    let colors = &visualization.colors;
    for (name, color) in [
        ("normal", &colors.normal),
        ("event", &colors.event),
        ("actual", &colors.actual),
        ("forecast", &colors.forecast),
    ] {
        if color.trim().is_empty() {
            return Err(invalid(format!("{name} color must not be empty")));
        }
    }

    if visualization.rolling_window == 0 {
        return Err(invalid(
            "rolling_window must be at least 1 trading day".to_string(),
        ));
    }

    Ok(())
}

fn validate_data(data: &DataProcessingParams) -> Result<()> {
    if data.macro_sheet_name.trim().is_empty() {
        return Err(invalid("macro_sheet_name must not be empty".to_string()));
    }
    if data.events_sheet_name.trim().is_empty() {
        return Err(invalid("events_sheet_name must not be empty".to_string()));
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn assert_rejected(params: &Parameters) {
        assert!(matches!(
            validate_parameters(params),
            Err(Error::ConfigValidation { .. })
        ));
    }

    #[test]
    fn test_validate_defaults() {
        assert!(validate_parameters(&Parameters::default()).is_ok());
    }

    #[test]
    fn test_validate_discount_out_of_range() {
        let mut params = Parameters::default();
        params.model.discount_factor_base = 1.0;
        assert_rejected(&params);

        let mut params = Parameters::default();
        params.model.discount_factor_event = 0.0;
        assert_rejected(&params);

        let mut params = Parameters::default();
        params.model.discount_factor_event = f64::NAN;
        assert_rejected(&params);
    }

    #[test]
    fn test_validate_event_discount_above_base() {
        let mut params = Parameters::default();
        params.model.discount_factor_event = 0.999;
        assert_rejected(&params);
    }

    #[test]
    fn test_validate_zero_event_window() {
        let mut params = Parameters::default();
        params.model.event_impact_window = 0;
        assert_rejected(&params);
    }

    #[test]
    fn test_validate_horizons() {
        let mut params = Parameters::default();
        params.model.forecast_horizons = vec![];
        assert_rejected(&params);

        params.model.forecast_horizons = vec![1, 3, 2];
        assert_rejected(&params);

        params.model.forecast_horizons = vec![1, 1, 2];
        assert_rejected(&params);

        params.model.forecast_horizons = vec![0, 1];
        assert_rejected(&params);

        params.model.forecast_horizons = vec![1, 5, 20];
        assert!(validate_parameters(&params).is_ok());
    }

    #[test]
    fn test_validate_scale_bounds() {
        let mut params = Parameters::default();
        params.calibration.scale_min = 3.0;
        assert_rejected(&params);

        let mut params = Parameters::default();
        params.calibration.scale_min = 0.0;
        assert_rejected(&params);

        let mut params = Parameters::default();
        params.calibration.scale_max = f64::INFINITY;
        assert_rejected(&params);

        let mut params = Parameters::default();
        params.calibration.scale_steps = 0;
        assert_rejected(&params);
    }

    #[test]
    fn test_validate_coverage() {
        let mut params = Parameters::default();
        params.calibration.target_coverage = 1.0;
        assert_rejected(&params);

        let mut params = Parameters::default();
        params.calibration.z_score_95 = -1.96;
        assert_rejected(&params);
    }

    #[test]
    fn test_validate_visualization() {
        let mut params = Parameters::default();
        params.visualization.figure_dpi = 0;
        assert_rejected(&params);

        let mut params = Parameters::default();
        params.visualization.fonts.tick = 0;
        assert_rejected(&params);

        let mut params = Parameters::default();
        params.visualization.colors.forecast = " ".to_string();
        assert_rejected(&params);

        let mut params = Parameters::default();
        params.visualization.rolling_window = 0;
        assert_rejected(&params);
    }

    #[test]
    fn test_validate_date_order() {
        let mut params = Parameters::default();
        params.dates.start = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap();
        assert_rejected(&params);
    }

    #[test]
    fn test_validate_sheet_names() {
        let mut params = Parameters::default();
        params.data.events_sheet_name = String::new();
        assert_rejected(&params);
    }
}
