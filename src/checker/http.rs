// src/checker/http.rs
// =============================================================================
// This module checks if remote URLs are alive by making HTTP requests.
//
// Key functionality:
// - Tries each configured HTTP method in order (default: just HEAD)
// - Stops at the first method that gets an acceptable answer
// - Never follows redirects: any 3xx answer counts as alive as-is
// - Only exactly 200 counts among the 2xx codes
//
// The network call sits behind the `UrlProbe` trait so the engine can be
// driven by a scripted probe in tests. `HttpProbe` is the real one, built on
// a reqwest Client.
//
// Rust concepts:
// - async/await: For network I/O
// - Trait objects: `&dyn UrlProbe` lets callers swap implementations
// - BoxFuture: A boxed future, needed to return futures from trait objects
// =============================================================================

use futures::future::{BoxFuture, FutureExt};
use reqwest::{redirect, Client, Method};
use url::Url;

use crate::config::ConnectTimeout;
use crate::logging::LogSink;

/// What a single request for a single method produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeResponse {
    /// The server answered with this status code.
    Status(u16),
    /// Timeout, refused connection or unresolvable host.
    CannotConnect(String),
    /// Any other I/O fault while talking to the server.
    Problem(String),
}

/// Makes one request against a URL.
pub trait UrlProbe: Send + Sync {
    fn probe<'a>(&'a self, method: &'a Method, url: &'a Url) -> BoxFuture<'a, ProbeResponse>;
}

/// Outcome of the liveness check over all configured methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Liveness {
    /// `method` got an acceptable `status`.
    Live { method: Method, status: u16 },
    /// No method succeeded; holds what the last attempt produced.
    Dead { last: ProbeResponse },
}

/// 200 and every 3xx are acceptable; redirects are taken at face value.
pub fn is_live_status(status: u16) -> bool {
    status == 200 || (300..400).contains(&status)
}

/// Tries `methods` in order against `url` and stops at the first success.
pub async fn check_liveness(
    probe: &dyn UrlProbe,
    methods: &[Method],
    url: &Url,
    sink: &dyn LogSink,
) -> Liveness {
    let mut last = ProbeResponse::Problem("no HTTP methods configured".to_string());

    for method in methods {
        let response = probe.probe(method, url).await;

        match &response {
            ProbeResponse::Status(200) => {
                sink.debug(&format!("{} {} -> 200", method, url));
                return Liveness::Live {
                    method: method.clone(),
                    status: 200,
                };
            }
            ProbeResponse::Status(status) if is_live_status(*status) => {
                sink.info(&format!("Got response code {} for URL: {}", status, url));
                return Liveness::Live {
                    method: method.clone(),
                    status: *status,
                };
            }
            ProbeResponse::Status(status) => {
                sink.warn(&format!(
                    "Got response code {} for URL: {} ({})",
                    status, url, method
                ));
            }
            ProbeResponse::CannotConnect(cause) => {
                sink.warn(&format!("Cannot connect to URL: {} ({})", url, method));
                sink.debug(&format!("Source: {}", cause));
            }
            ProbeResponse::Problem(cause) => {
                sink.warn(&format!("Problem with URL: {} ({})", url, method));
                sink.debug(&format!("Source: {}", cause));
            }
        }

        last = response;
    }

    Liveness::Dead { last }
}

/// The real probe: one reqwest Client reused for every request.
#[derive(Debug, Clone)]
pub struct HttpProbe {
    client: Client,
}

impl HttpProbe {
    /// Builds a client that never follows redirects and applies `timeout`
    /// to connection setup.
    pub fn new(timeout: ConnectTimeout) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder().redirect(redirect::Policy::none());

        // Infinite and SystemDefault both leave reqwest without a limit;
        // the operating system's own connect timeout still applies.
        if let Some(limit) = timeout.as_duration() {
            builder = builder.connect_timeout(limit);
        }

        Ok(Self {
            client: builder.build()?,
        })
    }
}

impl UrlProbe for HttpProbe {
    fn probe<'a>(&'a self, method: &'a Method, url: &'a Url) -> BoxFuture<'a, ProbeResponse> {
        async move {
            match self.client.request(method.clone(), url.clone()).send().await {
                Ok(response) => ProbeResponse::Status(response.status().as_u16()),
                Err(error) => categorize_error(error),
            }
        }
        .boxed()
    }
}

// Connection-level failures are reported differently from everything else
fn categorize_error(error: reqwest::Error) -> ProbeResponse {
    if error.is_timeout() || error.is_connect() {
        ProbeResponse::CannotConnect(error.to_string())
    } else {
        ProbeResponse::Problem(error.to_string())
    }
}
