use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEventKind};
use tokio::sync::mpsc;

use crate::{
    app::{
        events::AppEvent,
        lookup::{LookupOutcome, run_lookup},
    },
    cli::Cli,
    data::gateway::GatewayClient,
    domain::weather::{CurrentDisplay, ForecastItemDisplay},
};

/// The three mutually exclusive sections of the view. `Prompt` is only the
/// initial state; once a lookup has run, the view flips between `Result`
/// and `NotFound`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayState {
    Prompt,
    Result,
    NotFound,
}

#[derive(Debug)]
pub struct AppState {
    pub display: DisplayState,
    pub running: bool,
    pub city_input: String,
    pub lookup_in_flight: bool,
    pub current: Option<CurrentDisplay>,
    pub forecast: Vec<ForecastItemDisplay>,
    gateway_url: String,
}

impl AppState {
    pub fn new(cli: &Cli) -> Self {
        Self {
            display: DisplayState::Prompt,
            running: true,
            city_input: String::new(),
            lookup_in_flight: false,
            current: None,
            forecast: Vec::new(),
            gateway_url: cli.gateway_url.clone(),
        }
    }

    pub async fn handle_event(&mut self, event: AppEvent, tx: &mpsc::Sender<AppEvent>) -> Result<()> {
        match event {
            AppEvent::Input(event) => self.handle_input(event, tx).await?,
            AppEvent::LookupCompleted(outcome) => {
                self.lookup_in_flight = false;
                match outcome {
                    LookupOutcome::Found { current, days } => {
                        self.current = Some(current);
                        self.forecast = days;
                        self.display = DisplayState::Result;
                    }
                    LookupOutcome::NotFound => {
                        self.display = DisplayState::NotFound;
                    }
                }
            }
            AppEvent::Quit => self.running = false,
        }

        Ok(())
    }

    async fn handle_input(&mut self, event: Event, tx: &mpsc::Sender<AppEvent>) -> Result<()> {
        let Event::Key(key) = event else {
            return Ok(());
        };
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        match key.code {
            KeyCode::Esc => tx.send(AppEvent::Quit).await?,
            KeyCode::Enter => self.submit(tx),
            KeyCode::Backspace => {
                self.city_input.pop();
            }
            KeyCode::Char(c) => self.city_input.push(c),
            _ => {}
        }

        Ok(())
    }

    /// Starts a lookup for the typed city. Blank input is ignored, and so
    /// are submits while a lookup is already running; the input buffer is
    /// cleared before the result arrives.
    fn submit(&mut self, tx: &mpsc::Sender<AppEvent>) {
        if self.lookup_in_flight || self.city_input.trim().is_empty() {
            return;
        }

        let city = std::mem::take(&mut self.city_input).trim().to_string();
        self.lookup_in_flight = true;

        let client = GatewayClient::with_base_url(self.gateway_url.clone());
        let tx2 = tx.clone();
        tokio::spawn(async move {
            let outcome = run_lookup(&client, &city).await;
            let _ = tx2.send(AppEvent::LookupCompleted(outcome)).await;
        });
    }
}
