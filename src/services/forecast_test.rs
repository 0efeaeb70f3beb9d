use super::*;
use crate::state::test_helpers::ScriptedApi;

fn form() -> ForecastForm {
    ForecastForm {
        season: 2,
        month: 5,
        hour: 14,
        holiday: 0,
        weekday: 1,
        workingday: None,
        weather: 1,
        temp: 25.0,
        humidity: 55.0,
        windspeed: 12.0,
    }
}

#[test]
fn weekends_are_never_working_days() {
    assert_eq!(working_day(0), 0);
    assert_eq!(working_day(6), 0);
    for weekday in 1..=5 {
        assert_eq!(working_day(weekday), 1);
    }
}

#[test]
fn derived_workingday_overrides_form_state() {
    let mut saturday = form();
    saturday.weekday = 6;
    saturday.workingday = Some(1);

    let request = build_request(&saturday, &ForecastConfig::default());
    assert_eq!(request.workingday, 0);

    let mut tuesday = form();
    tuesday.weekday = 2;
    tuesday.workingday = Some(0);
    let request = build_request(&tuesday, &ForecastConfig::default());
    assert_eq!(request.workingday, 1);
}

#[test]
fn apparent_temperature_follows_config() {
    let with_atemp = build_request(&form(), &ForecastConfig::default());
    assert!((with_atemp.atemp.unwrap() - 22.5).abs() < f64::EPSILON);

    let config = ForecastConfig { apparent_temp: false, ..ForecastConfig::default() };
    let without = build_request(&form(), &config);
    assert!(without.atemp.is_none());
    assert_eq!(without.year, 1);
}

#[test]
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn oscillation_projection_matches_the_sine_formula() {
    let projection = project_week(285.0, &form(), &ForecastConfig::default());
    assert_eq!(projection.len(), 7);

    for (i, entry) in projection.iter().enumerate() {
        let expected = (285.0 * (1.0 + 0.05 * (i as f64).sin())).round() as i64;
        assert_eq!(entry.prediction, expected);
    }
}

#[test]
fn projection_day_labels_rotate_from_the_submitted_weekday() {
    let projection = project_week(100.0, &form(), &ForecastConfig::default());
    let labels: Vec<&str> = projection.iter().map(|entry| entry.day).collect();
    assert_eq!(labels, vec!["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]);
}

#[test]
fn weather_adjusted_projection_is_reproducible_for_a_seed() {
    let config = ForecastConfig {
        projection: ProjectionStyle::WeatherAdjusted,
        ..ForecastConfig::default()
    };
    let mut rainy = form();
    rainy.weather = 3;

    let first = project_week(285.0, &rainy, &config);
    let second = project_week(285.0, &rainy, &config);
    assert_eq!(first, second);
}

#[test]
fn weather_adjusted_projection_stays_within_heuristic_bounds() {
    let config = ForecastConfig {
        projection: ProjectionStyle::WeatherAdjusted,
        jitter_seed: 99,
        ..ForecastConfig::default()
    };
    let projection = project_week(1000.0, &form(), &config);

    // Worst case: rain (×0.6) plus uncomfortable temperature (×0.8); best
    // case: dry comfortable weekend (×1.15).
    for entry in projection {
        assert!(entry.prediction >= 480, "got {}", entry.prediction);
        assert!(entry.prediction <= 1150, "got {}", entry.prediction);
    }
}

#[test]
fn resource_estimate_follows_the_staffing_ratios() {
    let estimate = resource_estimate(285.0);
    assert_eq!(estimate.workers_needed, 5);
    assert_eq!(estimate.maintenance_staff, 1);
    assert_eq!(estimate.distribution["Central Park"], 85);
    assert_eq!(estimate.distribution["Downtown"], 71);
    assert_eq!(estimate.distribution["Riverside"], 42);
    assert_eq!(estimate.distribution["City Center"], 57);
    assert_eq!(estimate.distribution["University"], 28);
}

#[test]
fn resource_estimate_never_drops_below_one_worker() {
    let estimate = resource_estimate(10.0);
    assert_eq!(estimate.workers_needed, 1);
    assert_eq!(estimate.maintenance_staff, 1);
}

#[tokio::test]
async fn successful_submission_uses_the_model_answer() {
    let api = ScriptedApi {
        predict_response: Some(crate::upstream::PredictionResponse {
            prediction: 312.4,
            resources: None,
            event_message: Some("Weather forecast indicates possible changes.".into()),
        }),
        ..ScriptedApi::default()
    };

    let result = run(&api, &ForecastConfig::default(), &form()).await.unwrap();
    assert_eq!(result.prediction, 312);
    assert!(!result.simulated);
    assert_eq!(result.event_message.as_deref(), Some("Weather forecast indicates possible changes."));
    // Resources were absent upstream, so the local ratios fill in.
    assert_eq!(result.resources.workers_needed, 6);
    assert_eq!(result.projection.len(), 7);
}

#[tokio::test]
async fn negative_predictions_clamp_to_zero() {
    let api = ScriptedApi {
        predict_response: Some(crate::upstream::PredictionResponse {
            prediction: -40.0,
            resources: None,
            event_message: None,
        }),
        ..ScriptedApi::default()
    };

    let result = run(&api, &ForecastConfig::default(), &form()).await.unwrap();
    assert_eq!(result.prediction, 0);
    assert!(result.projection.iter().all(|entry| entry.prediction == 0));
}

#[tokio::test]
async fn failed_submission_substitutes_the_simulated_result_by_default() {
    let api = ScriptedApi::default();

    let result = run(&api, &ForecastConfig::default(), &form()).await.unwrap();
    assert!(result.simulated);
    assert_eq!(result.prediction, 285);
    assert_eq!(result.event_message.as_deref(), Some(FALLBACK_MESSAGE));
    assert_eq!(result.resources.workers_needed, 6);
}

#[tokio::test]
async fn surface_policy_propagates_the_error() {
    let api = ScriptedApi::default();
    let config = ForecastConfig { on_failure: FailurePolicy::Surface, ..ForecastConfig::default() };

    let err = run(&api, &config, &form()).await.unwrap_err();
    assert!(err.retryable());
}

#[tokio::test]
async fn malformed_responses_surface_as_invalid_under_surface_policy() {
    let api = ScriptedApi { invalid_response: true, ..ScriptedApi::default() };
    let config = ForecastConfig { on_failure: FailurePolicy::Surface, ..ForecastConfig::default() };

    let err = run(&api, &config, &form()).await.unwrap_err();
    assert!(matches!(err, crate::upstream::UpstreamError::InvalidResponse(_)));
    assert!(!err.retryable());
}

/// # Safety
/// Tests must run with `--test-threads=1` to avoid env races.
unsafe fn clear_forecast_env() {
    unsafe {
        std::env::remove_var("FORECAST_PROJECTION");
        std::env::remove_var("FORECAST_APPARENT_TEMP");
        std::env::remove_var("FORECAST_ON_FAILURE");
        std::env::remove_var("FORECAST_JITTER_SEED");
    }
}

#[test]
fn config_defaults_match_the_primary_dashboard_variant() {
    unsafe { clear_forecast_env() };

    let config = ForecastConfig::from_env().unwrap();
    assert_eq!(config, ForecastConfig::default());
    assert_eq!(config.projection, ProjectionStyle::Oscillation);
    assert!(config.apparent_temp);
    assert_eq!(config.on_failure, FailurePolicy::MockFallback);
}

#[test]
fn config_parses_the_weather_adjusted_variant() {
    unsafe {
        clear_forecast_env();
        std::env::set_var("FORECAST_PROJECTION", "weather-adjusted");
        std::env::set_var("FORECAST_APPARENT_TEMP", "false");
        std::env::set_var("FORECAST_ON_FAILURE", "error");
        std::env::set_var("FORECAST_JITTER_SEED", "12345");
    }

    let config = ForecastConfig::from_env().unwrap();
    assert_eq!(config.projection, ProjectionStyle::WeatherAdjusted);
    assert!(!config.apparent_temp);
    assert_eq!(config.on_failure, FailurePolicy::Surface);
    assert_eq!(config.jitter_seed, 12345);

    unsafe { clear_forecast_env() };
}

#[test]
fn config_rejects_unknown_values() {
    unsafe {
        clear_forecast_env();
        std::env::set_var("FORECAST_PROJECTION", "crystal-ball");
    }

    let err = ForecastConfig::from_env().unwrap_err().to_string();
    assert!(err.contains("unknown FORECAST_PROJECTION"));

    unsafe { clear_forecast_env() };
}
