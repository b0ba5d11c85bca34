//! JokeAPI fetcher.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: the HTTP source reports a fetch failure, since the endpoint
//! is only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport errors, undecodable bodies, and the service's own `"error": true`
//! flag all map to the single `FetchFailed` kind. `request_joke` turns that
//! into the fallback error joke, so callers never see an `Err`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::future::Future;

use serde_json::Value;

use super::types::{Category, Joke};
use crate::config::AppConfig;

/// The only fetch error kind. `reason` is diagnostic and never shown to users.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("joke fetch failed: {reason}")]
pub struct FetchFailed {
    pub reason: String,
}

impl FetchFailed {
    pub fn new(reason: impl Into<String>) -> Self {
        Self { reason: reason.into() }
    }
}

/// Something that can produce one joke per call.
pub trait JokeSource {
    fn fetch(&self, category: Category) -> impl Future<Output = Result<Joke, FetchFailed>>;
}

/// Build the request URL for `category`.
pub fn joke_url(config: &AppConfig, category: Category) -> String {
    let base = format!("{}/{}", config.api_base_url, category.api_name());
    if config.blacklist_flags.is_empty() {
        base
    } else {
        format!("{base}?blacklistFlags={}", config.blacklist_query())
    }
}

/// Decode a JokeAPI response body.
///
/// # Errors
///
/// Returns `FetchFailed` for non-JSON bodies, bodies with `"error": true`,
/// and bodies that are not a `single` or `twopart` joke.
pub fn parse_joke_body(body: &str) -> Result<Joke, FetchFailed> {
    let value: Value = serde_json::from_str(body).map_err(|e| FetchFailed::new(format!("invalid JSON: {e}")))?;

    if value.get("error").and_then(Value::as_bool).unwrap_or(false) {
        let message = value
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("unspecified error");
        return Err(FetchFailed::new(format!("service reported error: {message}")));
    }

    match serde_json::from_value::<Joke>(value) {
        Ok(Joke::Error { .. }) => Err(FetchFailed::new("error-typed joke on the wire")),
        Ok(joke) => Ok(joke),
        Err(e) => Err(FetchFailed::new(format!("unexpected joke shape: {e}"))),
    }
}

/// Run one fetch and collapse any failure into [`Joke::fetch_failed`].
pub async fn request_joke<S: JokeSource>(source: &S, category: Category) -> Joke {
    log::debug!("joke fetch started: category={}", category.api_name());
    match source.fetch(category).await {
        Ok(joke) => joke,
        Err(err) => {
            log::debug!("{err}");
            Joke::fetch_failed()
        }
    }
}

/// [`JokeSource`] backed by JokeAPI over HTTP.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpJokeSource {
    config: AppConfig,
}

impl HttpJokeSource {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn url(&self, category: Category) -> String {
        joke_url(&self.config, category)
    }
}

impl JokeSource for HttpJokeSource {
    async fn fetch(&self, category: Category) -> Result<Joke, FetchFailed> {
        let url = self.url(category);
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::get(&url)
                .send()
                .await
                .map_err(|e| FetchFailed::new(format!("network: {e}")))?;
            let body = resp
                .text()
                .await
                .map_err(|e| FetchFailed::new(format!("body: {e}")))?;
            parse_joke_body(&body)
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(FetchFailed::new(format!("{url} is only reachable from the browser")))
        }
    }
}
