use super::*;
use crate::events::ConnectionEvent;
use crux_core::testing::AppTester;

/// Status bar and submit state after every event of a simulated page load
#[derive(Debug, Default)]
struct Trace {
    frames: Vec<(u64, String, bool)>,
    commits: usize,
    committed_at: Option<u64>,
    model: Model,
}

impl Trace {
    fn text_at(&self, millis: u64) -> Option<&str> {
        self.frames
            .iter()
            .filter(|(at, _, _)| *at == millis)
            .last()
            .map(|(_, text, _)| text.as_str())
    }

    fn submit_enabled_at(&self, millis: u64) -> bool {
        self.frames
            .iter()
            .filter(|(at, _, _)| *at <= millis)
            .last()
            .is_some_and(|(_, _, enabled)| *enabled)
    }
}

/// Drive one page load on a virtual clock.
///
/// Ticks arrive every `TICK_PERIOD_MS` while the ticker runs, the deadline at
/// `DEADLINE_MS`, the probe response (if any) at its given time. Sources due at
/// the same instant are delivered probe first, then deadline, then tick.
fn simulate(probe: Option<(u64, Result<String, String>)>) -> Trace {
    let mut model = Model::default();
    let mut trace = Trace::default();

    let _ = update::update(Event::Initialize, &mut model);
    trace
        .frames
        .push((0, model.status_bar.text().to_string(), model.submit_enabled));

    let mut probe = probe;
    let mut deadline_sent = false;
    let mut next_tick = TICK_PERIOD_MS;

    loop {
        let probe_at = probe.as_ref().map(|(at, _)| *at);
        let deadline_at = (!deadline_sent).then_some(DEADLINE_MS);
        let tick_at = model.ticker.is_running().then_some(next_tick);

        let Some(now) = [probe_at, deadline_at, tick_at].into_iter().flatten().min() else {
            break;
        };

        let event = if probe_at == Some(now) {
            let (_, result) = probe.take().expect("probe is due");
            ConnectionEvent::ProbeResponse(result)
        } else if deadline_at == Some(now) {
            deadline_sent = true;
            ConnectionEvent::DeadlineElapsed
        } else {
            next_tick += TICK_PERIOD_MS;
            ConnectionEvent::CountdownTick
        };

        let was_committed = model.connection.is_committed();
        let _ = update::update(Event::Connection(event), &mut model);
        if !was_committed && model.connection.is_committed() {
            trace.commits += 1;
            trace.committed_at = Some(now);
        }

        trace
            .frames
            .push((now, model.status_bar.text().to_string(), model.submit_enabled));
    }

    trace.model = model;
    trace
}

#[test]
fn test_initialize_starts_countdown() {
    let app = AppTester::<App>::default();
    let mut model = Model::default();

    let _command = app.update(Event::Initialize, &mut model);

    assert!(model.ticker.is_running());
    assert_eq!(model.status_bar.text(), "Connecting in 5s...");
    assert_eq!(model.countdown.remaining_seconds, 4);
}

#[test]
fn test_initialize_issues_single_probe() {
    let mut model = Model::default();

    let mut command = update::update(Event::Initialize, &mut model);
    let probes: Vec<_> = command
        .effects()
        .filter_map(|effect| match effect {
            Effect::Http(request) => Some(request.operation.url.clone()),
            _ => None,
        })
        .collect();

    assert_eq!(probes, vec!["https://relative/connect".to_string()]);
}

#[test]
fn test_repeated_initialize_is_ignored() {
    let mut model = Model::default();
    let _ = update::update(Event::Initialize, &mut model);
    let started = model.clone();

    let _ = update::update(Event::Initialize, &mut model);

    assert_eq!(model, started);
}

#[test]
fn test_countdown_sequence_without_response() {
    let trace = simulate(None);

    assert_eq!(trace.text_at(0), Some("Connecting in 5s..."));
    assert_eq!(trace.text_at(1000), Some("Connecting in 4s..."));
    assert_eq!(trace.text_at(2000), Some("Connecting in 3s..."));
    assert_eq!(trace.text_at(3000), Some("Connecting in 2s..."));
    assert_eq!(trace.text_at(4000), Some("Connecting in 1s..."));
    assert_eq!(trace.text_at(5000), Some(FAILURE_MESSAGE));
}

#[test]
fn test_no_response_times_out_at_deadline() {
    let trace = simulate(None);

    assert_eq!(trace.committed_at, Some(DEADLINE_MS));
    assert_eq!(
        trace.model.connection.outcome(),
        Some(&ConnectionOutcome::not_connected())
    );
    assert_eq!(
        trace.model.status_bar.class().map(|c| c.css_class()),
        Some("connected-false")
    );
    assert_eq!(trace.model.ticker, TickerState::Stopped);
    assert!(!trace.model.submit_enabled);
}

#[test]
fn test_failure_sentence_commits_immediately() {
    let trace = simulate(Some((1200, Ok(FAILURE_MESSAGE.to_string()))));

    assert_eq!(trace.committed_at, Some(1200));
    assert_eq!(trace.text_at(1200), Some(FAILURE_MESSAGE));
    assert_eq!(
        trace.model.status_bar.class(),
        Some(StatusClass::ConnectedFalse)
    );
    assert!(!trace.model.submit_enabled);
}

#[test]
fn test_success_enables_submit_when_ticker_stops() {
    let trace = simulate(Some((500, Ok(SUCCESS_MESSAGE.to_string()))));

    assert_eq!(trace.committed_at, Some(500));
    assert_eq!(trace.text_at(500), Some(SUCCESS_MESSAGE));
    assert!(!trace.submit_enabled_at(500));
    assert!(trace.submit_enabled_at(1000));
    assert_eq!(
        trace.model.status_bar.class().map(|c| c.css_class()),
        Some("connected-true")
    );
    assert_eq!(trace.text_at(1000), Some(SUCCESS_MESSAGE));
}

#[test]
fn test_countdown_never_enables_submit_midway() {
    let trace = simulate(Some((3500, Ok(SUCCESS_MESSAGE.to_string()))));

    assert!(!trace.submit_enabled_at(3999));
    assert!(trace.submit_enabled_at(4000));
}

#[test]
fn test_probe_wins_tie_with_deadline() {
    let trace = simulate(Some((DEADLINE_MS, Ok(SUCCESS_MESSAGE.to_string()))));

    assert_eq!(trace.commits, 1);
    assert!(trace
        .model
        .connection
        .outcome()
        .is_some_and(ConnectionOutcome::is_connected));
    assert!(trace.model.submit_enabled);
}

#[test]
fn test_transport_failure_falls_back_to_deadline() {
    let trace = simulate(Some((300, Err("connection reset".to_string()))));

    assert_eq!(trace.committed_at, Some(DEADLINE_MS));
    assert_eq!(trace.model.connection.message(), FAILURE_MESSAGE);
}

#[test]
fn test_late_response_is_ignored() {
    let trace = simulate(Some((7000, Ok(SUCCESS_MESSAGE.to_string()))));

    assert_eq!(trace.committed_at, Some(DEADLINE_MS));
    assert_eq!(trace.model.status_bar.text(), FAILURE_MESSAGE);
    assert!(!trace.model.submit_enabled);
}

#[test]
fn test_exactly_one_commit_for_any_response_time() {
    for at in [0, 999, 1000, 2500, 4000, 4999, 5000, 5001, 9000] {
        for body in [SUCCESS_MESSAGE, FAILURE_MESSAGE] {
            let trace = simulate(Some((at, Ok(body.to_string()))));
            assert_eq!(trace.commits, 1, "probe at {at}ms with {body:?}");
            assert!(trace.model.is_settled(), "probe at {at}ms with {body:?}");
            assert!(trace.model.status_bar.class().is_some());
        }
    }
}

#[test]
fn test_duplicate_probe_response_does_not_change_outcome() {
    let mut model = Model::default();
    let _ = update::update(Event::Initialize, &mut model);
    let _ = update::update(
        Event::Connection(ConnectionEvent::ProbeResponse(Ok(
            SUCCESS_MESSAGE.to_string()
        ))),
        &mut model,
    );
    let committed = model.clone();

    let _ = update::update(
        Event::Connection(ConnectionEvent::ProbeResponse(Ok(
            FAILURE_MESSAGE.to_string()
        ))),
        &mut model,
    );

    assert_eq!(model, committed);
}

#[test]
fn test_csv_export_smoke() {
    let app = AppTester::<App>::default();
    let mut model = Model::default();

    let _command = app.update(
        Event::Export(events::ExportEvent::ExportTable {
            rows: vec![
                vec!["a".to_string(), "b".to_string()],
                vec!["c".to_string(), "d".to_string()],
            ],
        }),
        &mut model,
    );

    assert_eq!(
        model.csv_export.map(|export| export.content),
        Some("\"a\",\"b\"\n\"c\",\"d\"".to_string())
    );
}

#[test]
fn test_page_props_render_input_rows_without_touching_session() {
    let mut model = Model::default();
    let _ = update::update(Event::Initialize, &mut model);
    let session = model.connection.clone();

    let mut command = update::update(
        Event::Form(events::FormEvent::PropsLoaded {
            display: "True".to_string(),
            values: vec![vec!["name".to_string(), "Ada".to_string()]],
            range: vec![1, 2],
        }),
        &mut model,
    );

    assert!(command
        .effects()
        .any(|effect| matches!(effect, Effect::Render(_))));
    assert_eq!(model.connection, session);
    assert!(!model.submit_enabled);
    assert_eq!(
        model
            .input_rows
            .iter()
            .map(|row| (row.name.as_str(), row.value.as_deref()))
            .collect::<Vec<_>>(),
        vec![("input1", Some("Ada")), ("input2", None)]
    );
}
