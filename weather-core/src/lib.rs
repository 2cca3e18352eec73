//! Core library for the `hyde-weather` Waybar module.
//!
//! This crate defines:
//! - Configuration resolved from the environment and HyDE env files
//! - The Open-Meteo forecast source
//! - WMO code tables, unit conversion and tooltip formatting
//! - The `{text, tooltip}` status record and its error variants
//!
//! It is used by `hyde-weather-cli`, but the pipeline in [`report`] can be
//! driven by any [`ForecastSource`].

pub mod config;
pub mod env_file;
pub mod error;
pub mod model;
pub mod present;
pub mod provider;
pub mod report;
pub mod status;
pub mod units;
pub mod wmo;

pub use config::{Config, Environment, Location, TemperatureUnit, TimeFormat, WindSpeedUnit};
pub use error::{FetchError, ProcessingError, WeatherError};
pub use model::{DailyForecast, Forecast, WeatherSnapshot};
pub use provider::{ForecastSource, OpenMeteoConfig, OpenMeteoProvider};
pub use report::{Report, generate};
pub use status::StatusRecord;
