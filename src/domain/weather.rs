use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};

/// Timestamp format used by the provider's forecast entries.
const FORECAST_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Forecast entries are sampled every three hours; this is the one
/// time-of-day kept when collapsing the list to one entry per day.
const REFERENCE_TIME_OF_DAY: &str = "12:00:00";

pub const SUCCESS_COD: u16 = 200;

/// Current-conditions payload as relayed by the gateway. Optional fields
/// default so a sparse or error-shaped body still deserializes; the caller
/// branches on `cod` before trusting the rest.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentPayload {
    #[serde(default, deserialize_with = "deserialize_cod")]
    pub cod: u16,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub main: MainBlock,
    #[serde(default)]
    pub weather: Vec<ConditionBlock>,
    #[serde(default)]
    pub wind: WindBlock,
}

impl CurrentPayload {
    pub fn is_ok(&self) -> bool {
        self.cod == SUCCESS_COD
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MainBlock {
    #[serde(default)]
    pub temp: f64,
    #[serde(default)]
    pub humidity: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConditionBlock {
    #[serde(default)]
    pub id: u16,
    #[serde(default)]
    pub main: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WindBlock {
    #[serde(default)]
    pub speed: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForecastPayload {
    #[serde(default, deserialize_with = "deserialize_cod")]
    pub cod: u16,
    #[serde(default)]
    pub list: Vec<ForecastEntry>,
}

impl ForecastPayload {
    pub fn is_ok(&self) -> bool {
        self.cod == SUCCESS_COD
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForecastEntry {
    pub dt_txt: String,
    #[serde(default)]
    pub main: MainBlock,
    #[serde(default)]
    pub weather: Vec<ConditionBlock>,
}

/// The provider emits `cod` as a number on the current-conditions resource
/// and as a string on the forecast resource; accept both.
fn deserialize_cod<'de, D>(deserializer: D) -> Result<u16, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Cod {
        Number(u16),
        Text(String),
    }

    match Cod::deserialize(deserializer)? {
        Cod::Number(value) => Ok(value),
        Cod::Text(value) => value.parse().map_err(serde::de::Error::custom),
    }
}

/// Ordered boundary check, first match wins. Total over the provider's
/// condition-code range; anything past 800 is some flavour of clouds.
pub fn icon_file(code: u16) -> &'static str {
    if code <= 232 {
        "thunderstorm.svg"
    } else if code <= 321 {
        "drizzle.svg"
    } else if code <= 531 {
        "rain.svg"
    } else if code <= 622 {
        "snow.svg"
    } else if code <= 781 {
        "atmosphere.svg"
    } else if code <= 800 {
        "clear.svg"
    } else {
        "clouds.svg"
    }
}

/// Terminal stand-in for the icon asset, same classification as
/// [`icon_file`].
pub fn icon_glyph(code: u16) -> &'static str {
    match icon_file(code) {
        "thunderstorm.svg" => "⚡",
        "drizzle.svg" | "rain.svg" => "☂",
        "snow.svg" => "❄",
        "atmosphere.svg" => "░",
        "clear.svg" => "☀",
        _ => "☁",
    }
}

/// Everything the result view needs for the current conditions, already
/// stringified.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentDisplay {
    pub location: String,
    pub temp_label: String,
    pub humidity_label: String,
    pub condition_label: String,
    pub wind_label: String,
    pub icon_file: &'static str,
    pub icon_glyph: &'static str,
    pub date_label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForecastItemDisplay {
    pub date_label: String,
    pub icon_file: &'static str,
    pub icon_glyph: &'static str,
    pub temp_label: String,
}

/// Shapes a current-conditions payload for display. `today` drives the date
/// label; the payload's own timestamps are ignored here.
pub fn format_current(payload: &CurrentPayload, today: NaiveDate) -> CurrentDisplay {
    let condition = payload.weather.first().cloned().unwrap_or_default();

    CurrentDisplay {
        location: payload.name.clone(),
        temp_label: format!("{} °C", payload.main.temp.round() as i64),
        humidity_label: format!("{} %", payload.main.humidity),
        condition_label: condition.main,
        wind_label: format!("{} M/s", payload.wind.speed),
        icon_file: icon_file(condition.id),
        icon_glyph: icon_glyph(condition.id),
        date_label: today.format("%a, %d %b").to_string(),
    }
}

/// Collapses the 3-hourly forecast list to one entry per upcoming day: keep
/// the local-noon sample and drop anything dated `today`. Provider order
/// (chronological) is preserved.
pub fn select_forecast_days<'a>(
    payload: &'a ForecastPayload,
    today: NaiveDate,
) -> Vec<&'a ForecastEntry> {
    let today_label = today.format("%Y-%m-%d").to_string();

    payload
        .list
        .iter()
        .filter(|entry| {
            entry.dt_txt.contains(REFERENCE_TIME_OF_DAY) && !entry.dt_txt.contains(&today_label)
        })
        .collect()
}

/// Shapes one forecast entry for display. The date label comes from the
/// entry's own timestamp; entries with an unparseable timestamp are skipped
/// rather than rendered with a bogus date.
pub fn format_forecast_entry(entry: &ForecastEntry) -> Option<ForecastItemDisplay> {
    let stamp = NaiveDateTime::parse_from_str(&entry.dt_txt, FORECAST_TIMESTAMP_FORMAT).ok()?;
    let code = entry
        .weather
        .first()
        .map(|condition| condition.id)
        .unwrap_or_default();

    Some(ForecastItemDisplay {
        date_label: stamp.format("%d %b").to_string(),
        icon_file: icon_file(code),
        icon_glyph: icon_glyph(code),
        temp_label: format!("{} °C", entry.main.temp.round() as i64),
    })
}
