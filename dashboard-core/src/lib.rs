//! Core library for the `dashboard` time and weather widget.
//!
//! This crate defines:
//! - Configuration of the remote endpoints and the observed location
//! - Fetchers for the date/time and weather services
//! - The refresh orchestrator that owns the dashboard state
//! - Weather code classification
//!
//! It is used by `dashboard-cli`, but any front end that can read a
//! [`RefreshState`] can drive it.

pub mod classify;
pub mod config;
pub mod error;
pub mod model;
pub mod orchestrator;
pub mod source;

pub use classify::{WeatherCategory, classify};
pub use config::{Config, DateTimeConfig, WeatherConfig};
pub use error::FetchError;
pub use model::{Coordinates, DateTimeSnapshot, RefreshState, WeatherSnapshot};
pub use orchestrator::{HttpOrchestrator, RefreshOrchestrator};
pub use source::{DateTimeSource, SourceId, WeatherSource};
