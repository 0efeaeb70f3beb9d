//! Forecast service — request shaping, normalization, and projection.
//!
//! DESIGN
//! ======
//! The dashboard historically shipped two slightly different prediction
//! flows (apparent-temperature handling, projection formula, failure
//! behavior). They are consolidated here behind [`ForecastConfig`]: the
//! divergence points are explicit, env-selectable, and individually tested
//! instead of living in copy-paste variants.
//!
//! The weather-adjusted projection draws its day-to-day jitter from an RNG
//! seeded by `jitter_seed`, so a given configuration always produces the
//! same "simulated uncertainty".

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::mock;
use crate::options;
use crate::upstream::config::env_parse;
use crate::upstream::{DataApi, PredictionRequest, PredictionResponse, ResourceEstimate, UpstreamError};

/// Annotation attached to a substituted mock prediction.
pub const FALLBACK_MESSAGE: &str = "Could not connect to prediction API. Using simulated prediction.";

const DEFAULT_JITTER_SEED: u64 = 17;

/// Per-station share of the predicted volume, positional over
/// [`options::STATIONS`].
const DISTRIBUTION_WEIGHTS: [f64; 5] = [0.30, 0.25, 0.15, 0.20, 0.10];

// =============================================================================
// CONFIG
// =============================================================================

#[derive(Debug, thiserror::Error)]
#[error("config parse failed: {0}")]
pub struct ConfigError(String);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectionStyle {
    /// `round(prediction × (1 + 0.05 × sin(i)))` for day offsets 0..6.
    Oscillation,
    /// Per-day weekend/rain/temperature heuristics with seeded jitter.
    WeatherAdjusted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Surface the error; the user resubmits manually.
    Surface,
    /// Substitute the canned prediction, annotated as simulated.
    MockFallback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForecastConfig {
    pub projection: ProjectionStyle,
    /// Send `atemp = temp × 0.9` alongside the measured temperature.
    pub apparent_temp: bool,
    pub on_failure: FailurePolicy,
    pub jitter_seed: u64,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            projection: ProjectionStyle::Oscillation,
            apparent_temp: true,
            on_failure: FailurePolicy::MockFallback,
            jitter_seed: DEFAULT_JITTER_SEED,
        }
    }
}

impl ForecastConfig {
    /// Build the forecast config from environment variables.
    ///
    /// - `FORECAST_PROJECTION`: `oscillation` (default) or `weather-adjusted`
    /// - `FORECAST_APPARENT_TEMP`: `true` (default) or `false`
    /// - `FORECAST_ON_FAILURE`: `mock` (default) or `error`
    /// - `FORECAST_JITTER_SEED`: u64, default 17
    ///
    /// # Errors
    ///
    /// Returns an error on an unrecognized projection, boolean, or policy
    /// value.
    pub fn from_env() -> Result<Self, ConfigError> {
        let projection = match std::env::var("FORECAST_PROJECTION").ok().as_deref() {
            None | Some("oscillation") => ProjectionStyle::Oscillation,
            Some("weather-adjusted") => ProjectionStyle::WeatherAdjusted,
            Some(other) => return Err(ConfigError(format!("unknown FORECAST_PROJECTION: {other}"))),
        };
        let apparent_temp = match std::env::var("FORECAST_APPARENT_TEMP").ok().as_deref() {
            None | Some("true") => true,
            Some("false") => false,
            Some(other) => return Err(ConfigError(format!("unknown FORECAST_APPARENT_TEMP: {other}"))),
        };
        let on_failure = match std::env::var("FORECAST_ON_FAILURE").ok().as_deref() {
            None | Some("mock") => FailurePolicy::MockFallback,
            Some("error") => FailurePolicy::Surface,
            Some(other) => return Err(ConfigError(format!("unknown FORECAST_ON_FAILURE: {other}"))),
        };
        let jitter_seed = env_parse("FORECAST_JITTER_SEED", DEFAULT_JITTER_SEED);
        Ok(Self { projection, apparent_temp, on_failure, jitter_seed })
    }
}

// =============================================================================
// FORM
// =============================================================================

/// Raw prediction form submission. `workingday` is accepted for
/// compatibility but always recomputed from the weekday.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastForm {
    pub season: u8,
    pub month: u8,
    pub hour: u8,
    pub holiday: u8,
    pub weekday: u8,
    #[serde(default)]
    pub workingday: Option<u8>,
    pub weather: u8,
    pub temp: f64,
    pub humidity: f64,
    pub windspeed: f64,
}

/// 0 on weekends (Sunday 0, Saturday 6), 1 otherwise.
#[must_use]
pub fn working_day(weekday: u8) -> u8 {
    if weekday == 0 || weekday == 6 { 0 } else { 1 }
}

/// Shape a form submission into the model's feature vector. The derived
/// `workingday` overrides whatever the form tracked on its own.
#[must_use]
pub fn build_request(form: &ForecastForm, config: &ForecastConfig) -> PredictionRequest {
    PredictionRequest {
        season: form.season,
        month: form.month,
        hour: form.hour,
        holiday: form.holiday,
        weekday: form.weekday,
        workingday: working_day(form.weekday),
        weather: form.weather,
        temp: form.temp,
        atemp: config.apparent_temp.then(|| form.temp * 0.9),
        humidity: form.humidity,
        windspeed: form.windspeed,
        year: 1,
    }
}

// =============================================================================
// RESULT
// =============================================================================

/// One day of the synthesized forward projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayForecast {
    pub day: &'static str,
    pub prediction: i64,
}

/// The dashboard's prediction state. Overwritten by each submission; no
/// history is kept beyond the 7-day projection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastResult {
    pub prediction: i64,
    pub resources: ResourceEstimate,
    pub projection: Vec<DayForecast>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_message: Option<String>,
    /// True when the result is the canned fallback, not a model answer.
    pub simulated: bool,
}

/// Staffing derived from a predicted volume: one worker per 50 rentals, one
/// maintenance staffer per three workers, fixed per-station split.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn resource_estimate(prediction: f64) -> ResourceEstimate {
    let workers_needed = ((prediction / 50.0).trunc() as i64).max(1);
    let maintenance_staff = (workers_needed / 3).max(1);
    let distribution = options::STATIONS
        .iter()
        .zip(DISTRIBUTION_WEIGHTS)
        .map(|(&station, weight)| (station.to_string(), (prediction * weight).trunc() as i64))
        .collect();
    ResourceEstimate { workers_needed, maintenance_staff, distribution }
}

/// Synthesize the 7-day projection, day labels rotating from the submitted
/// weekday.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn project_week(prediction: f64, form: &ForecastForm, config: &ForecastConfig) -> Vec<DayForecast> {
    match config.projection {
        ProjectionStyle::Oscillation => (0..7)
            .map(|i| DayForecast {
                day: options::WEEKDAY_SHORT[(usize::from(form.weekday) + i) % 7],
                prediction: (prediction * (1.0 + 0.05 * (i as f64).sin())).round() as i64,
            })
            .collect(),
        ProjectionStyle::WeatherAdjusted => {
            let mut rng = StdRng::seed_from_u64(config.jitter_seed);
            let rain_chance = match form.weather {
                1 => 0.10,
                2 => 0.25,
                3 => 0.55,
                _ => 0.80,
            };
            (0..7)
                .map(|i| {
                    let day_index = (usize::from(form.weekday) + i) % 7;
                    let mut factor = if day_index == 0 || day_index == 6 { 1.15 } else { 1.0 };
                    if rng.random_bool(rain_chance) {
                        factor *= 0.6;
                    }
                    let day_temp = form.temp + rng.random_range(-2.0..=2.0);
                    if !(10.0..=30.0).contains(&day_temp) {
                        factor *= 0.8;
                    }
                    DayForecast {
                        day: options::WEEKDAY_SHORT[day_index],
                        prediction: (prediction * factor).round() as i64,
                    }
                })
                .collect()
        }
    }
}

// =============================================================================
// SUBMISSION
// =============================================================================

/// Shape, submit, and normalize one prediction round-trip.
///
/// # Errors
///
/// With `FailurePolicy::Surface`, upstream errors propagate for the route
/// layer to display; with `FailurePolicy::MockFallback` this never errors —
/// the canned prediction is substituted and annotated instead.
pub async fn run(
    api: &dyn DataApi,
    config: &ForecastConfig,
    form: &ForecastForm,
) -> Result<ForecastResult, UpstreamError> {
    let request = build_request(form, config);
    match api.predict(&request).await {
        Ok(response) => Ok(assemble(&response, form, config, false)),
        Err(err) if config.on_failure == FailurePolicy::MockFallback => {
            warn!(error = %err, "prediction call failed; substituting simulated result");
            let mut result = assemble(&mock::prediction(), form, config, true);
            result.event_message = Some(FALLBACK_MESSAGE.to_string());
            Ok(result)
        }
        Err(err) => Err(err),
    }
}

#[allow(clippy::cast_possible_truncation)]
fn assemble(
    response: &PredictionResponse,
    form: &ForecastForm,
    config: &ForecastConfig,
    simulated: bool,
) -> ForecastResult {
    let volume = response.prediction.max(0.0);
    let resources = response
        .resources
        .clone()
        .unwrap_or_else(|| resource_estimate(volume));
    ForecastResult {
        prediction: volume.round() as i64,
        resources,
        projection: project_week(volume, form, config),
        event_message: response.event_message.clone(),
        simulated,
    }
}

#[cfg(test)]
#[path = "forecast_test.rs"]
mod tests;
