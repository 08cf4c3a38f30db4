use crux_core::{render::render, Command};
use log::{debug, info};

use crate::events::Event;
use crate::model::Model;
use crate::types::TickerState;
use crate::Effect;

/// Start the ticker at mount and render the first countdown value right away
pub fn start(model: &mut Model) -> Command<Effect, Event> {
    model.ticker = TickerState::Running;
    handle_tick(model)
}

/// Handle one countdown tick
///
/// Renders `Connecting in Ns...` and decrements, or, once the outcome is committed
/// or the counter is exhausted, shows the final message and stops the ticker.
pub fn handle_tick(model: &mut Model) -> Command<Effect, Event> {
    if !model.ticker.is_running() {
        debug!("ignoring countdown tick, ticker is {:?}", model.ticker);
        return Command::done();
    }

    if model.connection.is_committed() || model.countdown.is_exhausted() {
        let message = model.connection.message().to_string();
        model.status_bar.set_text(message);
        model.ticker = TickerState::Stopped;
        model.enable_submit_on_success();

        info!(
            "countdown stopped at {}s (committed: {}, submit enabled: {})",
            model.countdown.remaining_seconds,
            model.connection.is_committed(),
            model.submit_enabled
        );
        return render();
    }

    model.status_bar.set_text(model.countdown.label());
    model.countdown.remaining_seconds -= 1;
    render()
}
