//! WMO weather interpretation codes, as reported by Open-Meteo.
//!
//! See <https://open-meteo.com/en/docs> for the code list.

/// Icon used for any code missing from [`WMO_CODES`].
pub const UNKNOWN_ICON: &str = "\u{2753}";

/// Description used for any code missing from [`WMO_CODES`].
pub const UNKNOWN_DESCRIPTION: &str = "Unknown";

/// A single row of the WMO code table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WmoCode {
    pub code: i64,
    pub icon: &'static str,
    pub description: &'static str,
}

const fn row(code: i64, icon: &'static str, description: &'static str) -> WmoCode {
    WmoCode { code, icon, description }
}

const SUN: &str = "\u{2600}\u{fe0f}";
const SUN_BEHIND_SMALL_CLOUD: &str = "\u{1f324}\u{fe0f}";
const SUN_BEHIND_CLOUD: &str = "\u{26c5}";
const CLOUD: &str = "\u{2601}\u{fe0f}";
const FOG: &str = "\u{1f32b}\u{fe0f}";
const CLOUD_WITH_RAIN: &str = "\u{1f327}\u{fe0f}";
const SUN_BEHIND_RAIN_CLOUD: &str = "\u{1f326}\u{fe0f}";
const THUNDER: &str = "\u{26c8}\u{fe0f}";

/// Known codes, sorted by `code`.
pub static WMO_CODES: [WmoCode; 18] = [
    row(0, SUN, "Clear sky"),
    row(1, SUN_BEHIND_SMALL_CLOUD, "Mainly clear"),
    row(2, SUN_BEHIND_CLOUD, "Partly cloudy"),
    row(3, CLOUD, "Overcast"),
    row(45, FOG, "Fog"),
    row(48, FOG, "Depositing rime fog"),
    row(51, CLOUD_WITH_RAIN, "Light drizzle"),
    row(53, CLOUD_WITH_RAIN, "Moderate drizzle"),
    row(55, CLOUD_WITH_RAIN, "Dense drizzle"),
    row(61, CLOUD_WITH_RAIN, "Slight rain"),
    row(63, CLOUD_WITH_RAIN, "Moderate rain"),
    row(65, CLOUD_WITH_RAIN, "Heavy rain"),
    row(80, SUN_BEHIND_RAIN_CLOUD, "Slight rain showers"),
    row(81, SUN_BEHIND_RAIN_CLOUD, "Moderate rain showers"),
    row(82, SUN_BEHIND_RAIN_CLOUD, "Violent rain showers"),
    row(95, THUNDER, "Thunderstorm"),
    row(96, THUNDER, "Thunderstorm with slight hail"),
    row(99, THUNDER, "Thunderstorm with heavy hail"),
];

pub fn lookup(code: i64) -> Option<&'static WmoCode> {
    WMO_CODES
        .binary_search_by_key(&code, |entry| entry.code)
        .ok()
        .map(|idx| &WMO_CODES[idx])
}

pub fn icon(code: i64) -> &'static str {
    lookup(code).map_or(UNKNOWN_ICON, |entry| entry.icon)
}

pub fn description(code: i64) -> &'static str {
    lookup(code).map_or(UNKNOWN_DESCRIPTION, |entry| entry.description)
}
