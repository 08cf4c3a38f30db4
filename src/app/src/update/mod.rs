mod connection;
mod export;
mod form;

pub use export::table_to_csv;
pub use form::{csrf_token_from_cookie, input_rows_from_props};

use crux_core::Command;

use crate::events::Event;
use crate::model::Model;
use crate::Effect;

/// Main update dispatcher - routes events to domain-specific handlers
pub fn update(event: Event, model: &mut Model) -> Command<Effect, Event> {
    match event {
        Event::Initialize => connection::start(model),
        Event::Connection(event) => connection::handle(event, model),
        Event::Export(event) => export::handle(event, model),
        Event::Form(event) => form::handle(event, model),
    }
}
