// src/net.rs
//
// One blocking GET per chapter against the passage lookup API.
// Blocking is deliberate: requests are strictly sequential (see fetch.rs),
// so an async client would buy nothing.

use std::time::Duration;

use thiserror::Error;

use crate::fetch::ChapterSource;
use crate::params::{BASE_URL, HTTP_TIMEOUT_SECS, USER_AGENT};
use crate::verse::Verse;

/// Why a single chapter request produced no verses.
///
/// Both variants are recoverable at the loop level; the distinction only
/// matters for what ends up in the error report.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network failure, timeout, or non-2xx status.
    #[error("{0}")]
    Transport(String),

    /// A 2xx response whose body is not a non-empty array of verse objects.
    /// Carries the raw content so the report shows what actually came back.
    #[error("unexpected response: {0}")]
    Shape(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        FetchError::Transport(e.to_string())
    }
}

pub struct HttpSource {
    client: reqwest::blocking::Client,
}

impl HttpSource {
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .build()?;
        Ok(Self { client })
    }
}

impl ChapterSource for HttpSource {
    fn get_chapter(&self, passage: &str) -> Result<Vec<Verse>, FetchError> {
        let resp = self
            .client
            .get(BASE_URL)
            .query(&[("passage", passage), ("type", "json"), ("formatting", "plain")])
            .send()?
            .error_for_status()?;

        // Read as text first; an undecodable body goes into the error
        // report verbatim.
        let body = resp.text()?;
        match serde_json::from_str::<Vec<Verse>>(&body) {
            Ok(verses) => Ok(verses),
            Err(_) => Err(FetchError::Shape(body)),
        }
    }
}
