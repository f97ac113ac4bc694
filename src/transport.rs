// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! HTTP transport seam.
//!
//! The client composes headers and interprets statuses itself; the
//! transport only moves one request and returns whatever came back. Tests
//! substitute a stub implementation, production uses [`HttpTransport`]
//! (reqwest with rustls).

use std::future::Future;
use std::time::Duration;

use crate::error::ClientError;

/// One outbound HTTP request, fully composed.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: String,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// The raw result of an HTTP exchange. Status interpretation happens in
/// the caller so stub transports exercise the same path.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Issues a single HTTP request. No retries, no internal queueing;
/// cancellation is dropping the returned future.
pub trait Transport: Send + Sync {
    fn execute(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, ClientError>> + Send;
}

/// Production transport backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(15))
            .build()
            .map_err(|e| ClientError::Transport(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { http })
    }
}

impl Transport for HttpTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ClientError> {
        let method = reqwest::Method::from_bytes(request.method.as_bytes())
            .map_err(|e| ClientError::Transport(format!("invalid method {}: {e}", request.method)))?;

        let mut builder = self.http.request(method, &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ClientError::Transport(format!("{} {} failed: {e}", request.method, request.url)))?;

        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        Ok(HttpResponse { status, body })
    }
}
