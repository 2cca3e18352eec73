//! Turns a [`Forecast`] into the bar text and tooltip.

use std::fmt::Write as _;

use crate::{
    config::Config,
    model::{DailyForecast, Forecast, WeatherSnapshot},
    status::StatusRecord,
    units::{format_feels_like, format_temperature, format_wind_speed},
    wmo,
};

/// Shown after the temperature when `show_location` is set, whatever the coordinates.
pub const LOCATION_LABEL: &str = "Paris, FR";

const ARROW_UP: &str = "\u{2b06}\u{fe0f}";
const ARROW_DOWN: &str = "\u{2b07}\u{fe0f}";
const SUNRISE: &str = "\u{1f305}";
const SUNSET: &str = "\u{1f307}";

pub fn status_record(config: &Config, forecast: &Forecast) -> StatusRecord {
    StatusRecord { text: bar_text(config, &forecast.current), tooltip: tooltip(config, forecast) }
}

pub fn bar_text(config: &Config, current: &WeatherSnapshot) -> String {
    let mut text = format_temperature(&current.temperature_c, config.temperature_unit);

    if config.show_icon {
        text = format!("{} {text}", wmo::icon(current.weather_code));
    }
    if config.show_location {
        text.push_str(" | ");
        text.push_str(LOCATION_LABEL);
    }

    text
}

pub fn tooltip(config: &Config, forecast: &Forecast) -> String {
    let unit = config.temperature_unit;
    let current = &forecast.current;

    let mut out = String::new();
    let _ = writeln!(
        out,
        "<b>{} {}</b>",
        wmo::description(current.weather_code),
        format_temperature(&current.temperature_c, unit)
    );
    let _ = writeln!(
        out,
        "Feels like: {}",
        format_feels_like(&current.temperature_c, &current.humidity_pct, unit)
    );
    let _ = writeln!(out, "Wind: {}", format_wind_speed(&current.wind_speed_kmh, config.windspeed_unit));
    let _ = writeln!(out, "Humidity: {}%", current.humidity_pct);

    let days = usize::from(config.forecast_days).min(forecast.daily.len());
    for (index, day) in forecast.daily.iter().take(days).enumerate() {
        push_day(&mut out, config, index, day);
    }

    out
}

pub fn day_label(index: usize) -> String {
    if index == 0 { "Today".to_string() } else { format!("Day {}", index + 1) }
}

fn push_day(out: &mut String, config: &Config, index: usize, day: &DailyForecast) {
    let unit = config.temperature_unit;

    let _ = write!(out, "\n<b>{} ({})</b>\n", day_label(index), day.date);
    let _ = writeln!(out, "{} {}", wmo::icon(day.weather_code), wmo::description(day.weather_code));
    let _ = writeln!(
        out,
        "{ARROW_UP} {} {ARROW_DOWN} {}",
        format_temperature(&day.temperature_max_c, unit),
        format_temperature(&day.temperature_min_c, unit)
    );
    let _ = writeln!(
        out,
        "{SUNRISE} {} {SUNSET} {}",
        day.sunrise.format("%H:%M"),
        day.sunset.format("%H:%M")
    );
}
