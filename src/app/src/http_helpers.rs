//! HTTP helper functions for Crux Core
//!
//! Response handling lives here instead of inside the update handlers so the
//! classification of probe results stays in one place.

use crux_http::Response;

/// Base URL for backend endpoints.
///
/// NOTE: `crux_http` rejects relative URLs (`RelativeUrlWithoutBase`), so requests
/// carry this dummy origin. Shells strip it and resolve the remaining path against
/// the page origin before sending.
pub const BASE_URL: &str = "https://relative";

/// Connectivity probe endpoint
pub const CONNECT_ENDPOINT: &str = "/connect";

/// Constructs the full address from a given endpoint.
///
/// # Example
/// ```
/// use connect_status_core::http_helpers::build_url;
/// let url = build_url("/connect");
/// assert_eq!(url, "https://relative/connect");
/// ```
pub fn build_url(endpoint: &str) -> String {
    format!("{BASE_URL}{endpoint}")
}

/// Strip the dummy origin again, yielding the path the shell has to request.
///
/// Returns `None` for URLs that were not built with [`build_url`].
pub fn relative_path(url: &str) -> Option<&str> {
    url.strip_prefix(BASE_URL)
}

/// Turn the probe's HTTP result into the payload of `ProbeResponse`.
///
/// Any response counts as a result regardless of its status code; only a missing
/// response is an error. Invalid UTF-8 is replaced rather than rejected, since the
/// body is displayed verbatim.
pub fn process_probe_response(
    result: crux_http::Result<Response<Vec<u8>>>,
) -> Result<String, String> {
    match result {
        Ok(mut response) => {
            let body = response.take_body().unwrap_or_default();
            Ok(String::from_utf8_lossy(&body).into_owned())
        }
        Err(e) => Err(format!("Connectivity probe failed: {e}")),
    }
}
