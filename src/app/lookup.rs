use chrono::Local;

use crate::{
    data::gateway::GatewayClient,
    domain::weather::{
        CurrentDisplay, ForecastItemDisplay, format_current, format_forecast_entry,
        select_forecast_days,
    },
};

/// Terminal result of one lookup. Both provider-reported errors and
/// transport failures collapse to `NotFound`; the view never sees the
/// difference.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    Found {
        current: CurrentDisplay,
        days: Vec<ForecastItemDisplay>,
    },
    NotFound,
}

/// Two-step lookup: current conditions first, forecast only when the first
/// call succeeded.
pub async fn run_lookup(client: &GatewayClient, city: &str) -> LookupOutcome {
    let today = Local::now().date_naive();

    let current = match client.fetch_current(city).await {
        Ok(payload) if payload.is_ok() => payload,
        _ => return LookupOutcome::NotFound,
    };

    let forecast = match client.fetch_forecast(city).await {
        Ok(payload) if payload.is_ok() => payload,
        _ => return LookupOutcome::NotFound,
    };

    let days = select_forecast_days(&forecast, today)
        .into_iter()
        .filter_map(format_forecast_entry)
        .collect();

    LookupOutcome::Found {
        current: format_current(&current, today),
        days,
    }
}
