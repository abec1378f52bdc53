mod dialog;
mod network;
mod settings;
mod ui;

use crux_core::Command;

use crate::events::Event;
use crate::model::Model;
use crate::Effect;

/// Main update dispatcher - routes events to domain-specific handlers
pub fn update(event: Event, model: &mut Model) -> Command<Effect, Event> {
    match event {
        Event::Dialog(event) => dialog::handle(event, model),
        Event::Settings(event) => settings::handle(event, model),
        Event::Network(event) => network::handle(event, model),
        Event::Ui(event) => ui::handle(event, model),
    }
}
