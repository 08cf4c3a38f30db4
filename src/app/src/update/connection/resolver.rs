use crux_core::{render::render, Command};
use log::{debug, info, warn};

use crate::events::{ConnectionEvent, Event};
use crate::http_helpers::{build_url, process_probe_response, CONNECT_ENDPOINT};
use crate::model::Model;
use crate::types::{ConnectionOutcome, TickerState};
use crate::{Effect, HttpCmd};

/// Issue the single connectivity probe
pub fn start() -> Command<Effect, Event> {
    HttpCmd::get(build_url(CONNECT_ENDPOINT))
        .build()
        .then_send(|result| {
            Event::Connection(ConnectionEvent::ProbeResponse(process_probe_response(
                result,
            )))
        })
}

/// Handle the probe response
///
/// A transport failure commits nothing; the deadline is the backstop for it.
pub fn handle_probe_response(
    result: Result<String, String>,
    model: &mut Model,
) -> Command<Effect, Event> {
    match result {
        Ok(body) => commit(ConnectionOutcome::from_probe_body(&body), model, "probe"),
        Err(e) => {
            warn!("{e}, waiting for deadline");
            Command::done()
        }
    }
}

/// Handle the absolute deadline - commits a failure unless something committed first
pub fn handle_deadline(model: &mut Model) -> Command<Effect, Event> {
    if model.connection.is_committed() {
        debug!("deadline elapsed after commit");
        return Command::done();
    }

    commit(ConnectionOutcome::not_connected(), model, "deadline")
}

fn commit(outcome: ConnectionOutcome, model: &mut Model, source: &str) -> Command<Effect, Event> {
    if !model.connection.commit(outcome.clone()) {
        debug!("ignoring {source} outcome, already committed: {outcome:?}");
        return Command::done();
    }

    model.status_bar.show_outcome(&outcome);

    // The ticker can stop on an empty message at the same instant a commit lands.
    if model.ticker == TickerState::Stopped {
        model.enable_submit_on_success();
    }

    info!("{source} committed outcome: {outcome:?}");
    render()
}
