use crux_core::Command;
use log::warn;

use crate::events::{Event, FormEvent};
use crate::model::Model;
use crate::types::InputRow;
use crate::update_field;
use crate::Effect;

const CSRF_COOKIE: &str = "csrftoken";

/// Extract the CSRF token from a `document.cookie` string
pub fn csrf_token_from_cookie(cookie: &str) -> Option<String> {
    cookie
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == CSRF_COOKIE)
        .map(|(_, value)| value.to_string())
        .filter(|value| !value.is_empty())
}

/// Build the numbered form inputs from the page props.
///
/// Inputs are pre-filled only when `display` starts with `T`; input `x` takes
/// the second element of `values[x - 1]`.
pub fn input_rows_from_props(
    display: &str,
    values: &[Vec<String>],
    range: &[u32],
) -> Vec<InputRow> {
    let fill = display.starts_with('T');

    range
        .iter()
        .map(|&number| {
            let value = fill
                .then(|| {
                    number
                        .checked_sub(1)
                        .and_then(|index| values.get(index as usize))
                        .and_then(|pair| pair.get(1))
                        .cloned()
                })
                .flatten();
            InputRow::new(number, value)
        })
        .collect()
}

/// Handle page form events
pub fn handle(event: FormEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        FormEvent::CookieRead { cookie } => {
            update_field!(model.csrf_token, csrf_token_from_cookie(&cookie))
        }
        FormEvent::PropsLoaded {
            display,
            values,
            range,
        } => update_field!(
            model.input_rows,
            input_rows_from_props(&display, &values, &range)
        ),
        FormEvent::InputChanged { number, value } => {
            let Some(row) = model.input_rows.iter_mut().find(|row| row.number == number) else {
                warn!("change for unknown input {number}");
                return Command::done();
            };
            update_field!(row.value, Some(value))
        }
    }
}
