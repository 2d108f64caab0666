//! Worksheet service HTTP client.

use anyhow::{Context, Result};
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

/// HTTP client for the remote worksheet service.
///
/// Pushes whole worksheets (header row plus data rows) with a PUT, the way
/// a spreadsheet range update works. The service is a side channel: callers
/// treat every failure here as log-and-continue, never as a rollback of the
/// in-memory mutation that triggered the push.
pub struct SheetsClient {
    pub(crate) client: Client,
    pub(crate) base_url: String,
    pub(crate) sheet_id: String,
    pub(crate) auth_token: Option<String>,
    pub(crate) request_id: Option<String>,
}

#[derive(Debug, Serialize)]
struct WorksheetUpdate {
    values: Vec<Vec<String>>,
}

impl SheetsClient {
    /// Create a new worksheet client. An empty token disables the
    /// Authorization header (for unsecured local mirrors).
    pub fn new(
        base_url: impl Into<String>,
        sheet_id: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        let token = token.into();
        let auth_token = if token.trim().is_empty() {
            None
        } else {
            Some(token)
        };
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(10))
                .build()
                .unwrap_or_else(|_| Client::new()),
            base_url: base_url.into(),
            sheet_id: sheet_id.into(),
            auth_token,
            request_id: None,
        }
    }

    /// Update auth token at runtime (rotation).
    pub fn set_auth_token(&mut self, token: Option<String>) {
        self.auth_token = token
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());
    }

    /// Propagate a caller's request ID onto outgoing pushes.
    pub fn set_request_id(&mut self, request_id: Option<String>) {
        self.request_id = request_id
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());
    }

    fn apply_request_id(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.request_id.as_deref() {
            Some(value) if !value.is_empty() => request.header("X-Request-ID", value),
            _ => request,
        }
    }

    fn apply_auth(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.auth_token.as_deref() {
            Some(token) => request.header("Authorization", format!("Bearer {}", token)),
            None => request,
        }
    }

    /// Replace the named worksheet's contents with the given value grid.
    /// Returns the HTTP status code on success.
    pub async fn update_worksheet(
        &self,
        worksheet: &str,
        values: Vec<Vec<String>>,
    ) -> Result<u16> {
        let url = format!(
            "{}/v1/sheets/{}/worksheets/{}",
            self.base_url, self.sheet_id, worksheet
        );

        let payload = WorksheetUpdate { values };
        let response = self
            .apply_request_id(self.apply_auth(
                self.client
                    .put(&url)
                    .header("Content-Type", "application/json")
                    .json(&payload),
            ))
            .send()
            .await
            .context("Failed to push worksheet update")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!(
                "Worksheet update failed: {} {}",
                status,
                body
            ));
        }

        Ok(status.as_u16())
    }
}
