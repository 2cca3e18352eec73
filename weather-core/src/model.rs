use chrono::NaiveDateTime;
use serde::Deserialize;
use serde_json::Value;

use crate::{error::ProcessingError, units::Reading};

/// Conditions from the `current` object of an Open-Meteo response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WeatherSnapshot {
    #[serde(rename = "temperature_2m")]
    pub temperature_c: Reading,
    #[serde(rename = "weathercode")]
    pub weather_code: i64,
    #[serde(rename = "wind_speed_10m")]
    pub wind_speed_kmh: Reading,
    #[serde(rename = "relative_humidity_2m")]
    pub humidity_pct: Reading,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DailyForecast {
    /// `YYYY-MM-DD`, as sent in the local timezone of the location.
    pub date: String,
    pub weather_code: i64,
    pub temperature_max_c: Reading,
    pub temperature_min_c: Reading,
    pub sunrise: NaiveDateTime,
    pub sunset: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Forecast {
    pub current: WeatherSnapshot,
    /// Chronological, at most as many days as requested.
    pub daily: Vec<DailyForecast>,
}

impl Forecast {
    /// Interpret a decoded response body, keeping at most `max_days` daily entries.
    pub fn from_payload(payload: Value, max_days: usize) -> Result<Self, ProcessingError> {
        let payload: ApiResponse =
            serde_json::from_value(payload).map_err(ProcessingError::Payload)?;

        let days = max_days.min(payload.daily.time.len());
        let daily = (0..days)
            .map(|i| payload.daily.day(i))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { current: payload.current, daily })
    }
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    current: WeatherSnapshot,
    daily: DailySeries,
}

/// Open-Meteo sends daily values column-wise, one array per field.
#[derive(Debug, Deserialize)]
struct DailySeries {
    time: Vec<String>,
    weathercode: Vec<i64>,
    temperature_2m_max: Vec<Reading>,
    temperature_2m_min: Vec<Reading>,
    sunrise: Vec<String>,
    sunset: Vec<String>,
}

impl DailySeries {
    fn day(&self, index: usize) -> Result<DailyForecast, ProcessingError> {
        Ok(DailyForecast {
            date: column(&self.time, "time", index)?.clone(),
            weather_code: *column(&self.weathercode, "weathercode", index)?,
            temperature_max_c: column(&self.temperature_2m_max, "temperature_2m_max", index)?
                .clone(),
            temperature_min_c: column(&self.temperature_2m_min, "temperature_2m_min", index)?
                .clone(),
            sunrise: parse_local_time(column(&self.sunrise, "sunrise", index)?)?,
            sunset: parse_local_time(column(&self.sunset, "sunset", index)?)?,
        })
    }
}

fn column<'a, T>(values: &'a [T], field: &'static str, index: usize) -> Result<&'a T, ProcessingError> {
    values.get(index).ok_or(ProcessingError::MissingDaily { field, index })
}

/// Parse an ISO 8601 local timestamp (`2026-10-14T07:42`, seconds optional).
fn parse_local_time(s: &str) -> Result<NaiveDateTime, ProcessingError> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S"))
        .map_err(|_| ProcessingError::Timestamp(s.to_string()))
}
