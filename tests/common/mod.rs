#![allow(dead_code)]

use chrono::{Duration, Local, NaiveDate};
use serde_json::{Value, json};
use skygaze::cli::Cli;

pub fn client_cli(gateway_url: &str) -> Cli {
    Cli {
        serve: false,
        bind: "127.0.0.1:8788".to_string(),
        gateway_url: gateway_url.to_string(),
        provider_url: None,
    }
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn current_body(name: &str, temp: f64, humidity: f64, condition_id: u16, speed: f64) -> Value {
    json!({
        "cod": 200,
        "name": name,
        "main": { "temp": temp, "humidity": humidity },
        "weather": [{ "id": condition_id, "main": "Clouds" }],
        "wind": { "speed": speed }
    })
}

pub fn not_found_body() -> Value {
    json!({ "cod": "404", "message": "city not found" })
}

fn forecast_entry(date: NaiveDate, time: &str, temp: f64, condition_id: u16) -> Value {
    json!({
        "dt_txt": format!("{} {time}", date.format("%Y-%m-%d")),
        "main": { "temp": temp },
        "weather": [{ "id": condition_id }]
    })
}

/// A forecast body anchored on the local date: today's noon sample (which
/// the day filter must drop), noon samples for the next three days, and one
/// off-noon sample.
pub fn forecast_body() -> Value {
    let today = today();
    json!({
        "cod": "200",
        "list": [
            forecast_entry(today, "12:00:00", 9.0, 800),
            forecast_entry(today + Duration::days(1), "09:00:00", 8.0, 500),
            forecast_entry(today + Duration::days(1), "12:00:00", 11.4, 500),
            forecast_entry(today + Duration::days(2), "12:00:00", 12.0, 801),
            forecast_entry(today + Duration::days(3), "12:00:00", -3.6, 600),
        ]
    })
}
