use crux_core::Command;
use log::debug;

use crate::events::{Event, ExportEvent};
use crate::model::Model;
use crate::types::{CsvExport, CSV_FILE_NAME};
use crate::update_field;
use crate::Effect;

/// Render table rows as CSV.
///
/// Every cell is wrapped in double quotes so commas inside cells survive; the
/// cell text itself is taken literally.
pub fn table_to_csv(rows: &[Vec<String>]) -> String {
    rows.iter()
        .map(|row| {
            row.iter()
                .map(|cell| format!("\"{cell}\""))
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Handle table export events
pub fn handle(event: ExportEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        ExportEvent::ExportTable { rows } => {
            debug!("exporting {} table rows", rows.len());
            update_field!(
                model.csv_export,
                Some(CsvExport {
                    file_name: CSV_FILE_NAME.to_string(),
                    content: table_to_csv(&rows),
                })
            )
        }
        ExportEvent::ExportDelivered => update_field!(model.csv_export, None),
    }
}
