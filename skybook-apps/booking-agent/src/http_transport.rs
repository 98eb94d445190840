//!  Skybook Booking Agent
//!
//!  Copyright (C) 2026  Mamy Ratsimbazafy
//!
//!  This program is free software: you can redistribute it and/or modify
//!  it under the terms of the GNU Affero General Public License as published by
//!  the Free Software Foundation, either version 3 of the License, or
//!  (at your option) any later version.
//!
//!  This program is distributed in the hope that it will be useful,
//!  but WITHOUT ANY WARRANTY; without even the implied warranty of
//!  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//!  GNU Affero General Public License for more details.
//!
//!  You should have received a copy of the GNU Affero General Public License
//!  along with this program.  If not, see <http://www.gnu.org/licenses/>.

//! # HTTP Transport
//!
//! The only effectful network code. Clients talk to a [`HttpTransport`] so the
//! search and booking logic can run against canned responses in tests.

use anyhow::{Context, Result};
use std::future::Future;
use std::time::Duration;
use wreq::redirect::Policy;
use wreq_util::Emulation;

/// Status and body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// 4xx and 5xx responses.
    pub fn is_error(&self) -> bool {
        self.status >= 400
    }
}

pub trait HttpTransport {
    /// GET `url` with the given query parameters.
    fn get(
        &self,
        url: &str,
        params: &[(&'static str, String)],
    ) -> impl Future<Output = Result<HttpResponse>>;

    /// POST `body` as JSON to `url`.
    fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> impl Future<Output = Result<HttpResponse>>;
}

/// Appends URL-encoded query parameters to `url`.
pub fn build_url(url: &str, params: &[(&'static str, String)]) -> String {
    if params.is_empty() {
        return url.to_string();
    }
    let query = params
        .iter()
        .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");
    let sep = if url.contains('?') { '&' } else { '?' };
    format!("{}{}{}", url, sep, query)
}

pub struct WreqTransport {
    client: wreq::Client,
}

impl WreqTransport {
    pub fn new(timeout_secs: u64) -> Result<Self> {
        let client = wreq::Client::builder()
            .emulation(Emulation::Safari18_5)
            .redirect(Policy::default())
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { client })
    }
}

impl HttpTransport for WreqTransport {
    async fn get(&self, url: &str, params: &[(&'static str, String)]) -> Result<HttpResponse> {
        let url = build_url(url, params);
        tracing::debug!("[get] {}", url);

        let start = std::time::Instant::now();
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context(format!("GET {} failed", url))?;
        let status = response.status();
        let body = response.text().await.context("Read body")?;
        tracing::debug!(
            "[get] HTTP {} {} in {:?}, {} bytes",
            status.as_u16(),
            status.canonical_reason().unwrap_or("Unknown"),
            start.elapsed(),
            body.len()
        );

        Ok(HttpResponse::new(status.as_u16(), body))
    }

    async fn post_json(&self, url: &str, body: &serde_json::Value) -> Result<HttpResponse> {
        tracing::debug!("[post_json] {}", url);

        let start = std::time::Instant::now();
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .context(format!("POST {} failed", url))?;
        let status = response.status();
        let body = response.text().await.context("Read body")?;
        tracing::debug!(
            "[post_json] HTTP {} {} in {:?}, {} bytes",
            status.as_u16(),
            status.canonical_reason().unwrap_or("Unknown"),
            start.elapsed(),
            body.len()
        );

        Ok(HttpResponse::new(status.as_u16(), body))
    }
}
