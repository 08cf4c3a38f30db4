use serde::{Deserialize, Serialize};

/// Events that can happen on the page
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum Event {
    /// Page mount: starts the countdown and the probe
    Initialize,

    Connection(ConnectionEvent),
    Export(ExportEvent),
    Form(FormEvent),
}

/// Connectivity check events
///
/// The shell owns the clocks: it sends `CountdownTick` every `TICK_PERIOD_MS`
/// while `Model::ticker` is running and `DeadlineElapsed` once, `DEADLINE_MS`
/// after `Initialize`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum ConnectionEvent {
    CountdownTick,
    DeadlineElapsed,

    /// `Ok(body)` once any response arrived, `Err` on transport failure
    #[serde(skip)]
    ProbeResponse(Result<String, String>),
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum ExportEvent {
    /// Cell texts of every table row, headers included
    ExportTable { rows: Vec<Vec<String>> },
    /// The shell handed the file to the browser
    ExportDelivered,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// Raw `document.cookie` string
    CookieRead { cookie: String },
    /// Page props rendered by the server into `window.props`
    ///
    /// `values` holds `[key, value]` pairs; input `x` of `range` is filled from
    /// `values[x - 1][1]` when `display` starts with `T`.
    PropsLoaded {
        display: String,
        values: Vec<Vec<String>>,
        range: Vec<u32>,
    },
    /// The user edited a pre-filled input
    InputChanged { number: u32, value: String },
}
