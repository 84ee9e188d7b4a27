use anyhow::{Context, Result};
use std::time::Duration;
use tracing::debug;

use super::models::{SearchOutcome, SummaryRequest, SummaryResponse};

/// Client for the search-and-summarize backend.
///
/// One call, one request: `POST {base_url}/summary`. The client runs on the
/// fetch worker thread, so the blocking reqwest API is used.
pub struct SummaryClient {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl SummaryClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build HTTP client")?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issues one search-and-summarize request and parses the result set.
    ///
    /// A transport failure, a non-success status, or a body that does not
    /// match the expected shape all surface as errors; the caller keeps its
    /// previous results in every one of those cases.
    pub fn fetch_summary(&self, query: &str, days: u32) -> Result<SearchOutcome> {
        let url = format!("{}/summary", self.base_url);
        debug!(%url, query, days, "requesting summary");

        let response = self
            .http
            .post(&url)
            .json(&SummaryRequest { query, days })
            .send()
            .with_context(|| format!("request to {url} failed"))?;

        // Check the status before touching the body so error pages are never
        // parsed as results.
        let response = response
            .error_for_status()
            .context("backend returned an error status")?;

        let body: SummaryResponse = response
            .json()
            .context("malformed response body from backend")?;

        debug!(repos = body.repos.len(), "summary received");
        Ok(body.into())
    }
}
