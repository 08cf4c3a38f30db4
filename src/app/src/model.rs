use serde::{Deserialize, Serialize};

use crate::types::*;

/// Application Model - the session record of one page load
/// Also serves as the ViewModel when serialized
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Model {
    // Connectivity session
    pub countdown: Countdown,
    pub connection: ConnectionState,
    pub ticker: TickerState,

    // Rendered page state
    pub status_bar: StatusBar,
    pub submit_enabled: bool,

    // Page collaborators
    pub csrf_token: Option<String>,
    pub csv_export: Option<CsvExport>,
    pub input_rows: Vec<InputRow>,
}

impl Model {
    /// Both the outcome and the ticker reached their terminal states
    pub fn is_settled(&self) -> bool {
        self.connection.is_committed() && self.ticker == TickerState::Stopped
    }

    /// Unlock the submit control when the committed message is the success sentence.
    pub fn enable_submit_on_success(&mut self) {
        if self.connection.message() == SUCCESS_MESSAGE {
            self.submit_enabled = true;
        }
    }
}
