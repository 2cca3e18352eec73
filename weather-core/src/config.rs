use std::{collections::HashMap, path::Path};
use tracing::debug;

use crate::env_file;

pub const TEMPERATURE_UNIT_VAR: &str = "WEATHER_TEMPERATURE_UNIT";
pub const TIME_FORMAT_VAR: &str = "WEATHER_TIME_FORMAT";
pub const WINDSPEED_UNIT_VAR: &str = "WEATHER_WINDSPEED_UNIT";
pub const SHOW_ICON_VAR: &str = "WEATHER_SHOW_ICON";
pub const SHOW_LOCATION_VAR: &str = "WEATHER_SHOW_LOCATION";
pub const SHOW_TODAY_DETAILS_VAR: &str = "WEATHER_SHOW_TODAY_DETAILS";
pub const FORECAST_DAYS_VAR: &str = "WEATHER_FORECAST_DAYS";
pub const LOCATION_VAR: &str = "WEATHER_LOCATION";

pub const DEFAULT_FORECAST_DAYS: u8 = 3;
pub const MAX_FORECAST_DAYS: u8 = 3;

/// Paris.
pub const DEFAULT_LOCATION: Location = Location { latitude: 48.8566, longitude: 2.3522 };

/// Snapshot of the variables configuration is resolved from.
///
/// Starts from the inherited process environment; each env file layered on
/// top overrides earlier values. The process environment itself is never
/// modified.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    vars: HashMap<String, String>,
}

impl Environment {
    /// Inherited process environment. Non-UTF-8 entries are ignored.
    pub fn from_process() -> Self {
        let vars = std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect();
        Self { vars }
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut env = Self::default();
        env.overlay(pairs);
        env
    }

    pub fn overlay<I, K, V>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.vars.extend(pairs.into_iter().map(|(k, v)| (k.into(), v.into())));
    }

    /// Layer an env file on top. Returns whether the file was read.
    pub fn overlay_file(&mut self, path: &Path) -> bool {
        match env_file::load(path) {
            Some(pairs) => {
                debug!(path = %path.display(), entries = pairs.len(), "loaded env file");
                self.overlay(pairs);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "c",
            TemperatureUnit::Fahrenheit => "f",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "c" => Some(TemperatureUnit::Celsius),
            "f" => Some(TemperatureUnit::Fahrenheit),
            _ => None,
        }
    }
}

/// Accepted for compatibility with the HyDE settings; not used in output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeFormat {
    #[default]
    TwelveHour,
    TwentyFourHour,
}

impl TimeFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeFormat::TwelveHour => "12h",
            TimeFormat::TwentyFourHour => "24h",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "12h" => Some(TimeFormat::TwelveHour),
            "24h" => Some(TimeFormat::TwentyFourHour),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindSpeedUnit {
    #[default]
    KilometresPerHour,
    MilesPerHour,
}

impl WindSpeedUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            WindSpeedUnit::KilometresPerHour => "km/h",
            WindSpeedUnit::MilesPerHour => "mph",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "km/h" => Some(WindSpeedUnit::KilometresPerHour),
            "mph" => Some(WindSpeedUnit::MilesPerHour),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    /// Parse `"lat,lon"`. Anything other than two finite in-range floats is rejected.
    pub fn parse(value: &str) -> Option<Self> {
        let (lat, lon) = value.split_once(',')?;
        let latitude: f64 = lat.trim().parse().ok()?;
        let longitude: f64 = lon.trim().parse().ok()?;

        let valid = (-90.0..=90.0).contains(&latitude) && (-180.0..=180.0).contains(&longitude);
        valid.then_some(Self { latitude, longitude })
    }
}

impl Default for Location {
    fn default() -> Self {
        DEFAULT_LOCATION
    }
}

/// Resolved module settings. Invalid values never fail; they fall back to the default.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub temperature_unit: TemperatureUnit,
    pub time_format: TimeFormat,
    pub windspeed_unit: WindSpeedUnit,
    pub show_icon: bool,
    pub show_location: bool,
    pub show_today_details: bool,
    pub forecast_days: u8,
    pub location: Location,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            temperature_unit: TemperatureUnit::default(),
            time_format: TimeFormat::default(),
            windspeed_unit: WindSpeedUnit::default(),
            show_icon: true,
            show_location: true,
            show_today_details: true,
            forecast_days: DEFAULT_FORECAST_DAYS,
            location: Location::default(),
        }
    }
}

impl Config {
    /// Layer `env_files` over the process environment and resolve.
    pub fn load<P: AsRef<Path>>(env_files: &[P]) -> Self {
        let mut env = Environment::from_process();
        for path in env_files {
            env.overlay_file(path.as_ref());
        }
        Self::from_env(&env)
    }

    pub fn from_env(env: &Environment) -> Self {
        let defaults = Self::default();

        let config = Self {
            temperature_unit: env
                .get(TEMPERATURE_UNIT_VAR)
                .and_then(TemperatureUnit::parse)
                .unwrap_or(defaults.temperature_unit),
            time_format: env
                .get(TIME_FORMAT_VAR)
                .and_then(TimeFormat::parse)
                .unwrap_or(defaults.time_format),
            windspeed_unit: env
                .get(WINDSPEED_UNIT_VAR)
                .and_then(WindSpeedUnit::parse)
                .unwrap_or(defaults.windspeed_unit),
            show_icon: env.get(SHOW_ICON_VAR).map_or(defaults.show_icon, parse_flag),
            show_location: env.get(SHOW_LOCATION_VAR).map_or(defaults.show_location, parse_flag),
            show_today_details: env
                .get(SHOW_TODAY_DETAILS_VAR)
                .map_or(defaults.show_today_details, parse_flag),
            forecast_days: env
                .get(FORECAST_DAYS_VAR)
                .and_then(parse_forecast_days)
                .unwrap_or(defaults.forecast_days),
            location: env.get(LOCATION_VAR).and_then(Location::parse).unwrap_or(defaults.location),
        };

        debug!(
            temp_unit = config.temperature_unit.as_str(),
            time_format = config.time_format.as_str(),
            windspeed_unit = config.windspeed_unit.as_str(),
            show_icon = config.show_icon,
            show_location = config.show_location,
            show_today_details = config.show_today_details,
            forecast_days = config.forecast_days,
            location = env.get(LOCATION_VAR).unwrap_or("<default>"),
            latitude = config.location.latitude,
            longitude = config.location.longitude,
            "resolved configuration"
        );

        config
    }
}

/// Set variables count as true only for the usual yes-words; anything else is false.
fn parse_flag(value: &str) -> bool {
    matches!(value.to_lowercase().as_str(), "true" | "1" | "t" | "y" | "yes")
}

fn parse_forecast_days(value: &str) -> Option<u8> {
    let days: i64 = value.trim().parse().ok()?;
    u8::try_from(days).ok().filter(|d| (1..=MAX_FORECAST_DAYS).contains(d))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        Config::from_env(&Environment::from_pairs(pairs.iter().copied()))
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let cfg = config_from(&[]);

        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.temperature_unit, TemperatureUnit::Celsius);
        assert_eq!(cfg.time_format, TimeFormat::TwelveHour);
        assert_eq!(cfg.windspeed_unit, WindSpeedUnit::KilometresPerHour);
        assert!(cfg.show_icon && cfg.show_location && cfg.show_today_details);
        assert_eq!(cfg.forecast_days, 3);
        assert_eq!(cfg.location, Location { latitude: 48.8566, longitude: 2.3522 });
    }

    #[test]
    fn enum_values_are_case_insensitive() {
        let cfg = config_from(&[
            (TEMPERATURE_UNIT_VAR, "F"),
            (TIME_FORMAT_VAR, "24H"),
            (WINDSPEED_UNIT_VAR, "MPH"),
        ]);

        assert_eq!(cfg.temperature_unit, TemperatureUnit::Fahrenheit);
        assert_eq!(cfg.time_format, TimeFormat::TwentyFourHour);
        assert_eq!(cfg.windspeed_unit, WindSpeedUnit::MilesPerHour);
    }

    #[test]
    fn invalid_enum_values_fall_back() {
        let cfg = config_from(&[
            (TEMPERATURE_UNIT_VAR, "kelvin"),
            (TIME_FORMAT_VAR, "13h"),
            (WINDSPEED_UNIT_VAR, "knots"),
        ]);

        assert_eq!(cfg.temperature_unit, TemperatureUnit::Celsius);
        assert_eq!(cfg.time_format, TimeFormat::TwelveHour);
        assert_eq!(cfg.windspeed_unit, WindSpeedUnit::KilometresPerHour);
    }

    #[test]
    fn flags_accept_yes_words_only() {
        for value in ["True", "1", "t", "Y", "yes"] {
            assert!(config_from(&[(SHOW_ICON_VAR, value)]).show_icon, "{value}");
        }
        for value in ["False", "0", "no", "on", ""] {
            assert!(!config_from(&[(SHOW_ICON_VAR, value)]).show_icon, "{value}");
        }

        let cfg = config_from(&[(SHOW_LOCATION_VAR, "false"), (SHOW_TODAY_DETAILS_VAR, "n")]);
        assert!(!cfg.show_location);
        assert!(!cfg.show_today_details);
    }

    #[test]
    fn forecast_days_out_of_range_is_clamped_to_three() {
        assert_eq!(config_from(&[(FORECAST_DAYS_VAR, "5")]).forecast_days, 3);
        assert_eq!(config_from(&[(FORECAST_DAYS_VAR, "0")]).forecast_days, 3);
        assert_eq!(config_from(&[(FORECAST_DAYS_VAR, "-1")]).forecast_days, 3);
        assert_eq!(config_from(&[(FORECAST_DAYS_VAR, "300")]).forecast_days, 3);
        assert_eq!(config_from(&[(FORECAST_DAYS_VAR, "two")]).forecast_days, 3);
        assert_eq!(config_from(&[(FORECAST_DAYS_VAR, "1.5")]).forecast_days, 3);
    }

    #[test]
    fn forecast_days_in_range_is_kept() {
        assert_eq!(config_from(&[(FORECAST_DAYS_VAR, "1")]).forecast_days, 1);
        assert_eq!(config_from(&[(FORECAST_DAYS_VAR, " 2 ")]).forecast_days, 2);
    }

    #[test]
    fn location_parses_lat_lon() {
        let cfg = config_from(&[(LOCATION_VAR, "52.52, 13.41")]);
        assert_eq!(cfg.location, Location { latitude: 52.52, longitude: 13.41 });
    }

    #[test]
    fn malformed_location_falls_back_to_paris() {
        for value in ["not,valid", "52.52", "1,2,3", "", "nan,2", "91,0", "0,181"] {
            assert_eq!(config_from(&[(LOCATION_VAR, value)]).location, DEFAULT_LOCATION, "{value}");
        }
    }

    #[test]
    fn later_env_file_wins() {
        let mut first = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(first, "WEATHER_TEMPERATURE_UNIT=f\nWEATHER_FORECAST_DAYS=1").expect("write");
        let mut second = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(second, "export WEATHER_TEMPERATURE_UNIT=\"c\"").expect("write");

        let mut env = Environment::from_pairs([(TEMPERATURE_UNIT_VAR, "f"), (FORECAST_DAYS_VAR, "2")]);
        assert!(env.overlay_file(first.path()));
        assert!(env.overlay_file(second.path()));

        let cfg = Config::from_env(&env);
        assert_eq!(cfg.temperature_unit, TemperatureUnit::Celsius);
        assert_eq!(cfg.forecast_days, 1);
    }

    #[test]
    fn missing_env_file_leaves_environment_untouched() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut env = Environment::from_pairs([(WINDSPEED_UNIT_VAR, "mph")]);

        assert!(!env.overlay_file(&dir.path().join("missing")));
        assert_eq!(env.get(WINDSPEED_UNIT_VAR), Some("mph"));
    }
}
