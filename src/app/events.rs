use crossterm::event::{Event, EventStream};
use futures::StreamExt;

use crate::app::lookup::LookupOutcome;

#[derive(Debug)]
pub enum AppEvent {
    Input(Event),
    LookupCompleted(LookupOutcome),
    Quit,
}

pub fn spawn_input_task() -> impl futures::Stream<Item = Event> {
    EventStream::new().filter_map(|event| async move { event.ok() })
}
