//! Upstream prediction/data service adapter.
//!
//! DESIGN
//! ======
//! The dashboard delegates forecasting to an external model endpoint and
//! seeds its datasets from the same service. This module owns the wire
//! contract: request shaping lives in `services::forecast`, transport and
//! response normalization live here. Everything upstream-facing goes
//! through the [`DataApi`] trait so the rest of the crate never touches
//! reqwest directly.

pub mod client;
pub mod config;
pub mod types;

pub use client::UpstreamClient;
pub use config::UpstreamConfig;
pub use types::{DataApi, PredictionRequest, PredictionResponse, ResourceEstimate, UpstreamError};
