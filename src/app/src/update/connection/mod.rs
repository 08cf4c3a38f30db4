mod countdown;
mod resolver;

pub use countdown::handle_tick;
pub use resolver::{handle_deadline, handle_probe_response};

use crux_core::Command;
use log::{info, warn};

use crate::events::{ConnectionEvent, Event};
use crate::model::Model;
use crate::types::TickerState;
use crate::Effect;

/// Page mount: start the countdown ticker and issue the probe
pub fn start(model: &mut Model) -> Command<Effect, Event> {
    if model.ticker != TickerState::Idle {
        warn!("ignoring repeated initialize, session already started");
        return Command::done();
    }

    info!("starting connectivity check");
    Command::all([countdown::start(model), resolver::start()])
}

/// Handle connectivity check events (ticks, deadline, probe response)
pub fn handle(event: ConnectionEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        ConnectionEvent::CountdownTick => handle_tick(model),
        ConnectionEvent::DeadlineElapsed => handle_deadline(model),
        ConnectionEvent::ProbeResponse(result) => handle_probe_response(result, model),
    }
}
