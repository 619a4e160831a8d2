// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use std::time::Instant;

use reqwest::{Client, RequestBuilder, Response, Url};
use serde_json::json;

use crate::config::SheetsConfig;
use crate::errors::UpstreamError;
use crate::network::{cell_text, SheetsApi, TokenSource, ValueInputOption, ValueRange};

/// REST client for one spreadsheet (Sheets API v4).
#[derive(Debug)]
pub struct SheetsClient {
    base_url: Url,
    spreadsheet_id: String,
    client: Client,
    tokens: TokenSource,
}

impl SheetsClient {
    pub fn new(cfg: &SheetsConfig) -> Result<Self, UpstreamError> {
        let client = Client::new();
        let tokens = TokenSource::from_config(&cfg.credentials, client.clone());
        Self::with_tokens(cfg, client, tokens)
    }

    pub fn with_tokens(
        cfg: &SheetsConfig,
        client: Client,
        tokens: TokenSource,
    ) -> Result<Self, UpstreamError> {
        let base_url = Url::parse(&cfg.api_base)
            .map_err(|e| UpstreamError::InvalidUrl(format!("{}: {}", cfg.api_base, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(UpstreamError::InvalidUrl(cfg.api_base.clone()));
        }
        Ok(Self {
            base_url,
            spreadsheet_id: cfg.spreadsheet_id.clone(),
            client,
            tokens,
        })
    }

    /// `{base}/v4/spreadsheets/{tail...}`, each segment percent-encoded.
    fn endpoint(&self, tail: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(["v4", "spreadsheets"])
                .extend(tail);
        }
        url
    }

    fn values_url(&self, range: &str, action: Option<&str>) -> Url {
        let target = match action {
            Some(action) => format!("{}:{}", range, action),
            None => range.to_string(),
        };
        self.endpoint(&[self.spreadsheet_id.as_str(), "values", target.as_str()])
    }

    async fn send(&self, op: &'static str, req: RequestBuilder) -> Result<Response, UpstreamError> {
        let started = Instant::now();
        metrics::increment_counter!("sheetrow_upstream_requests_total", "op" => op);

        let result = self.dispatch(req).await;

        metrics::histogram!(
            "sheetrow_upstream_duration_seconds",
            started.elapsed().as_secs_f64(),
            "op" => op
        );
        if let Err(e) = &result {
            metrics::increment_counter!("sheetrow_upstream_failures_total", "op" => op);
            tracing::warn!("Sheets {} failed: {}", op, e);
        }
        result
    }

    async fn dispatch(&self, req: RequestBuilder) -> Result<Response, UpstreamError> {
        let token = self.tokens.bearer().await?;
        let resp = req.bearer_auth(token).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(UpstreamError::Status { status, body });
        }
        Ok(resp)
    }
}

impl SheetsApi for SheetsClient {
    async fn read_range(&self, range: &str) -> Result<Vec<Vec<String>>, UpstreamError> {
        let url = self.values_url(range, None);
        let resp = self.send("read", self.client.get(url)).await?;
        let body: ValueRange = resp.json().await?;

        Ok(body
            .values
            .into_iter()
            .map(|row| row.into_iter().map(cell_text).collect())
            .collect())
    }

    async fn append_rows(
        &self,
        range: &str,
        rows: Vec<Vec<String>>,
        input: ValueInputOption,
    ) -> Result<(), UpstreamError> {
        let url = self.values_url(range, Some("append"));
        let req = self
            .client
            .post(url)
            .query(&[("valueInputOption", input.as_str())])
            .json(&json!({ "values": rows }));
        self.send("append", req).await?;
        Ok(())
    }

    async fn update_range(
        &self,
        range: &str,
        rows: Vec<Vec<String>>,
        input: ValueInputOption,
    ) -> Result<(), UpstreamError> {
        let url = self.values_url(range, None);
        let req = self
            .client
            .put(url)
            .query(&[("valueInputOption", input.as_str())])
            .json(&json!({
                "range": range,
                "majorDimension": "ROWS",
                "values": rows,
            }));
        self.send("update", req).await?;
        Ok(())
    }

    async fn delete_rows(&self, sheet_id: u32, start: u64, end: u64) -> Result<(), UpstreamError> {
        let target = format!("{}:batchUpdate", self.spreadsheet_id);
        let url = self.endpoint(&[target.as_str()]);
        let req = self.client.post(url).json(&json!({
            "requests": [{
                "deleteDimension": {
                    "range": {
                        "sheetId": sheet_id,
                        "dimension": "ROWS",
                        "startIndex": start,
                        "endIndex": end,
                    }
                }
            }]
        }));
        self.send("batch_update", req).await?;
        Ok(())
    }
}
