//! Unit conversion and number formatting.
//!
//! Open-Meteo reports temperatures in °C and wind speed in km/h. Values shown
//! in those units are printed exactly as the API sent them; converted values
//! are printed with one decimal.

use serde::Deserialize;
use serde_json::Number;
use std::fmt;

use crate::config::{TemperatureUnit, WindSpeedUnit};

pub const MPH_PER_KMH: f64 = 0.621371;

/// Relative humidity (%) above which "feels like" is bumped.
pub const MUGGY_HUMIDITY_PCT: f64 = 70.0;

/// Degrees (in °C) added to the temperature when it is muggy.
pub const MUGGY_BUMP_C: f64 = 2.0;

/// A numeric API value that remembers its original JSON spelling.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Number")]
pub struct Reading {
    raw: Number,
    value: f64,
}

impl Reading {
    pub fn value(&self) -> f64 {
        self.value
    }
}

impl TryFrom<Number> for Reading {
    type Error = String;

    fn try_from(raw: Number) -> Result<Self, Self::Error> {
        let value = raw.as_f64().ok_or_else(|| format!("{raw} is not representable as f64"))?;
        Ok(Self { raw, value })
    }
}

impl From<f64> for Reading {
    /// Non-finite values print as `0`.
    fn from(value: f64) -> Self {
        let raw = Number::from_f64(value).unwrap_or_else(|| Number::from(0));
        Self { raw, value }
    }
}

impl From<i64> for Reading {
    fn from(value: i64) -> Self {
        Self { raw: Number::from(value), value: value as f64 }
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.raw, f)
    }
}

pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

pub fn kmh_to_mph(kmh: f64) -> f64 {
    kmh * MPH_PER_KMH
}

/// `20°C` as reported, or `68.0°F` converted.
pub fn format_temperature(celsius: &Reading, unit: TemperatureUnit) -> String {
    match unit {
        TemperatureUnit::Celsius => format!("{celsius}°C"),
        TemperatureUnit::Fahrenheit => {
            format!("{:.1}°F", celsius_to_fahrenheit(celsius.value()))
        }
    }
}

/// Rough apparent temperature: muggy air feels [`MUGGY_BUMP_C`] warmer.
///
/// Always printed with one decimal, in either unit.
pub fn format_feels_like(celsius: &Reading, humidity_pct: &Reading, unit: TemperatureUnit) -> String {
    let mut feels_like = celsius.value();
    if humidity_pct.value() > MUGGY_HUMIDITY_PCT {
        feels_like += MUGGY_BUMP_C;
    }

    match unit {
        TemperatureUnit::Celsius => format!("{feels_like:.1}°C"),
        TemperatureUnit::Fahrenheit => format!("{:.1}°F", celsius_to_fahrenheit(feels_like)),
    }
}

pub fn format_wind_speed(kmh: &Reading, unit: WindSpeedUnit) -> String {
    match unit {
        WindSpeedUnit::KilometresPerHour => format!("{kmh} km/h"),
        WindSpeedUnit::MilesPerHour => format!("{:.1} mph", kmh_to_mph(kmh.value())),
    }
}
