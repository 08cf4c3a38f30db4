//! Headless shell driving the connect-status core from the command line
//!
//! Usage: check-connection [origin]   (default origin: http://127.0.0.1:8000)
//!
//! Prints every status bar change. Exit codes: 0 when the session committed a
//! Connected outcome, 1 when it committed NotConnected, 2 when the check could
//! not run at all (client setup or an unexpected core request).

use anyhow::{Context, Result};
use connect_status::logging;
use connect_status_core::{
    App, ConnectionOutcome, DEADLINE_MS, Effect, Event, Model, TICK_PERIOD_MS,
    events::ConnectionEvent, relative_path,
};
use crux_core::{Core, Request};
use crux_http::protocol::{HttpRequest, HttpResponse, HttpResult};
use log::{debug, error, info, warn};
use std::{env, time::Duration};
use tokio::time::{Instant, interval_at, sleep_until};

const DEFAULT_ORIGIN: &str = "http://127.0.0.1:8000";

struct Shell {
    core: Core<App>,
    origin: String,
    /// Every distinct status bar text, in the order it was shown
    frames: Vec<String>,
}

impl Shell {
    fn new(origin: &str) -> Self {
        Self {
            core: Core::new(),
            origin: origin.trim_end_matches('/').to_string(),
            frames: Vec::new(),
        }
    }

    fn process_event(&mut self, event: Event) -> Option<Request<HttpRequest>> {
        debug!("event: {event:?}");
        let effects = self.core.process_event(event);
        self.dispatch(effects)
    }

    /// Render what changed and hand back an HTTP request if the core issued one
    fn dispatch(&mut self, effects: Vec<Effect>) -> Option<Request<HttpRequest>> {
        let mut http_request = None;
        for effect in effects {
            match effect {
                Effect::Render(_) => self.render(),
                Effect::Http(request) => http_request = Some(request),
            }
        }
        http_request
    }

    fn render(&mut self) {
        let view = self.core.view();
        let text = view.status_bar.text();

        if self.frames.last().map(String::as_str) != Some(text) {
            match view.status_bar.class() {
                Some(class) => println!("[{}] {text}", class.css_class()),
                None => println!("{text}"),
            }
            self.frames.push(text.to_string());
        }
    }

    fn url_for(&self, request: &HttpRequest) -> Result<String> {
        let path = relative_path(&request.url)
            .with_context(|| format!("unexpected request url: {}", request.url))?;
        Ok(format!("{}{path}", self.origin))
    }
}

/// Fetch the probe endpoint; any response counts, only a missing one is an error
async fn send_probe(client: &reqwest::Client, url: String) -> Result<HttpResponse> {
    let response = client
        .get(&url)
        .send()
        .await
        .with_context(|| format!("failed to reach {url}"))?;
    let status = response.status().as_u16();
    let body = response
        .bytes()
        .await
        .context("failed to read probe response body")?;

    debug!("probe answered with status {status}");
    Ok(HttpResponse::status(status).body(body.to_vec()).build())
}

/// Run one connectivity check, returning whether the session committed Connected
async fn run(origin: &str) -> Result<bool> {
    let client = reqwest::Client::builder()
        .build()
        .context("failed to create http client")?;
    let mut shell = Shell::new(origin);

    let view = settle(&mut shell, |url| send_probe(&client, url)).await?;
    Ok(is_connected(&view))
}

fn is_connected(view: &Model) -> bool {
    view.connection
        .outcome()
        .is_some_and(ConnectionOutcome::is_connected)
}

/// Mount the page and drive the core until both the outcome and the ticker are final.
///
/// `fetch` receives the absolute probe URL. At the same instant the probe
/// response is delivered before the deadline and the deadline before the tick.
async fn settle<F, Fut>(shell: &mut Shell, fetch: F) -> Result<Model>
where
    F: FnOnce(String) -> Fut,
    Fut: Future<Output = Result<HttpResponse>>,
{
    let start = Instant::now();
    let request = shell
        .process_event(Event::Initialize)
        .context("core did not issue the connectivity probe")?;
    let probe_url = shell.url_for(&request.operation)?;
    let mut probe_request = Some(request);
    info!("probing {probe_url}");

    let probe = fetch(probe_url);
    tokio::pin!(probe);
    let mut probe_pending = true;

    let deadline = sleep_until(start + Duration::from_millis(DEADLINE_MS));
    tokio::pin!(deadline);
    let mut deadline_pending = true;

    let period = Duration::from_millis(TICK_PERIOD_MS);
    let mut ticker = interval_at(start + period, period);

    while !shell.core.view().is_settled() {
        let ticker_running = shell.core.view().ticker.is_running();

        tokio::select! {
            biased;
            result = &mut probe, if probe_pending => {
                probe_pending = false;
                match (result, probe_request.take()) {
                    (Ok(response), Some(mut request)) => {
                        let effects = shell
                            .core
                            .resolve(&mut request, HttpResult::Ok(response))
                            .context("failed to resolve probe response")?;
                        shell.dispatch(effects);
                    }
                    (Err(e), _) => warn!("{e:#}, waiting for deadline"),
                    (Ok(_), None) => warn!("probe answered twice"),
                }
            }
            _ = &mut deadline, if deadline_pending => {
                deadline_pending = false;
                shell.process_event(Event::Connection(ConnectionEvent::DeadlineElapsed));
            }
            _ = ticker.tick(), if ticker_running => {
                shell.process_event(Event::Connection(ConnectionEvent::CountdownTick));
            }
            else => break,
        }
    }

    let view = shell.core.view();
    info!(
        "settled after {:?}: {:?}",
        start.elapsed(),
        view.connection.outcome()
    );
    Ok(view)
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    logging::init();

    let origin = env::args().nth(1).unwrap_or_else(|| DEFAULT_ORIGIN.to_string());

    match run(&origin).await {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            error!("application error: {e:#}");
            std::process::exit(2);
        }
    }
}
