//! Weather-code catalog: WMO code to display descriptor.
//!
//! The forecast API reports sky/precipitation conditions as integer codes
//! (0, 61, 95). This table maps each supported code to the text and icon the
//! renderer shows. See: https://open-meteo.com/en/docs#weathervariables

/// Display descriptor for one weather code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeatherInfo {
    pub code: i32,
    pub description: &'static str,
    pub icon: &'static str,
}

/// Returned for codes the table does not know about.
const UNKNOWN: WeatherInfo = WeatherInfo {
    code: -1,
    description: "Unknown",
    icon: "assets/images/icon-sunny.webp",
};

const TABLE: &[WeatherInfo] = &[
    WeatherInfo { code: 0, description: "Clear sky", icon: "assets/images/icon-sunny.webp" },
    WeatherInfo { code: 1, description: "Mainly clear", icon: "assets/images/icon-sunny.webp" },
    WeatherInfo { code: 2, description: "Partly cloudy", icon: "assets/images/icon-partly-cloudy.webp" },
    WeatherInfo { code: 3, description: "Overcast", icon: "assets/images/icon-partly-cloudy.webp" },
    WeatherInfo { code: 45, description: "Foggy", icon: "assets/images/icon-fog.webp" },
    WeatherInfo { code: 48, description: "Depositing rime fog", icon: "assets/images/icon-fog.webp" },
    WeatherInfo { code: 51, description: "Light drizzle", icon: "assets/images/icon-drizzle.webp" },
    WeatherInfo { code: 53, description: "Moderate drizzle", icon: "assets/images/icon-drizzle.webp" },
    WeatherInfo { code: 55, description: "Dense drizzle", icon: "assets/images/icon-rain.webp" },
    WeatherInfo { code: 61, description: "Slight rain", icon: "assets/images/icon-rain.webp" },
    WeatherInfo { code: 63, description: "Moderate rain", icon: "assets/images/icon-rain.webp" },
    WeatherInfo { code: 65, description: "Heavy rain", icon: "assets/images/icon-storm.webp" },
    WeatherInfo { code: 71, description: "Slight snow", icon: "assets/images/icon-snow.webp" },
    WeatherInfo { code: 73, description: "Moderate snow", icon: "assets/images/icon-snow.webp" },
    WeatherInfo { code: 75, description: "Heavy snow", icon: "assets/images/icon-snow.webp" },
    WeatherInfo { code: 95, description: "Thunderstorm", icon: "assets/images/icon-storm.webp" },
    WeatherInfo { code: 96, description: "Thunderstorm with hail", icon: "assets/images/icon-storm.webp" },
    WeatherInfo { code: 99, description: "Thunderstorm with heavy hail", icon: "assets/images/icon-storm.webp" },
];

/// Look up the display descriptor for a weather code.
///
/// Total function: unmapped codes (including negatives) return the "Unknown"
/// fallback entry instead of failing.
pub fn lookup(code: i32) -> &'static WeatherInfo {
    TABLE.iter().find(|info| info.code == code).unwrap_or(&UNKNOWN)
}
