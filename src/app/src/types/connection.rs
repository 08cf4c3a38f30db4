use serde::{Deserialize, Serialize};

/// Body returned by `/connect` when the database is reachable
pub const SUCCESS_MESSAGE: &str = "You are connected!";

/// Body returned by `/connect` when the database is unreachable, also shown on timeout
pub const FAILURE_MESSAGE: &str = "You are not connected to the database. Try enabling your VPN and then refreshing your browser.";

/// Countdown value rendered at mount
pub const COUNTDOWN_START_SECS: i32 = 5;

/// Period of the shell's countdown interval
pub const TICK_PERIOD_MS: u64 = 1000;

/// Delay after mount at which the shell sends the deadline event
pub const DEADLINE_MS: u64 = 5000;

/// Final result of a connectivity check
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum ConnectionOutcome {
    /// Probe answered with anything but the failure sentence; shown verbatim
    Connected { message: String },
    NotConnected { reason: String },
}

impl ConnectionOutcome {
    /// Classify a `/connect` response body
    pub fn from_probe_body(body: &str) -> Self {
        if body == FAILURE_MESSAGE {
            Self::not_connected()
        } else {
            Self::Connected {
                message: body.to_string(),
            }
        }
    }

    /// Outcome committed by the deadline and by a logical probe failure
    pub fn not_connected() -> Self {
        Self::NotConnected {
            reason: FAILURE_MESSAGE.to_string(),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Connected { message } => message,
            Self::NotConnected { reason } => reason,
        }
    }

    pub fn is_connected(&self) -> bool {
        matches!(self, Self::Connected { .. })
    }

    pub fn status_class(&self) -> StatusClass {
        if self.is_connected() {
            StatusClass::ConnectedTrue
        } else {
            StatusClass::ConnectedFalse
        }
    }
}

/// Session state: `Pending` until the first writer commits, then terminal
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum ConnectionState {
    #[default]
    Pending,
    Committed(ConnectionOutcome),
}

impl ConnectionState {
    pub fn is_committed(&self) -> bool {
        matches!(self, Self::Committed(_))
    }

    /// Committed message, empty while pending
    pub fn message(&self) -> &str {
        match self {
            Self::Pending => "",
            Self::Committed(outcome) => outcome.message(),
        }
    }

    pub fn outcome(&self) -> Option<&ConnectionOutcome> {
        match self {
            Self::Pending => None,
            Self::Committed(outcome) => Some(outcome),
        }
    }

    /// Commit `outcome` if nothing is committed yet.
    ///
    /// Returns `false` and leaves the state untouched when an outcome already exists.
    pub fn commit(&mut self, outcome: ConnectionOutcome) -> bool {
        if self.is_committed() {
            return false;
        }
        *self = Self::Committed(outcome);
        true
    }
}

/// CSS marker applied to the status bar at commit
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum StatusClass {
    ConnectedTrue,
    ConnectedFalse,
}

impl StatusClass {
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::ConnectedTrue => "connected-true",
            Self::ConnectedFalse => "connected-false",
        }
    }
}

/// Status bar as rendered by the shell
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusBar {
    text: String,
    class: Option<StatusClass>,
}

impl StatusBar {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn class(&self) -> Option<StatusClass> {
        self.class
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Show the committed outcome. The class is only ever set once.
    pub fn show_outcome(&mut self, outcome: &ConnectionOutcome) {
        self.text = outcome.message().to_string();
        if self.class.is_none() {
            self.class = Some(outcome.status_class());
        }
    }
}

/// Countdown ticker lifecycle; the shell keeps its interval alive while `Running`
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum TickerState {
    #[default]
    Idle,
    Running,
    Stopped,
}

impl TickerState {
    pub fn is_running(&self) -> bool {
        matches!(self, Self::Running)
    }
}

/// Remaining-seconds counter owned by the countdown ticker
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Countdown {
    pub remaining_seconds: i32,
}

impl Default for Countdown {
    fn default() -> Self {
        Self {
            remaining_seconds: COUNTDOWN_START_SECS,
        }
    }
}

impl Countdown {
    pub fn is_exhausted(&self) -> bool {
        self.remaining_seconds <= 0
    }

    pub fn label(&self) -> String {
        format!("Connecting in {}s...", self.remaining_seconds)
    }
}
