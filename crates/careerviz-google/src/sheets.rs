//! Google Sheets `values:append` client.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;

use crate::error::GoogleError;
use crate::traits::{SheetAppender, TokenProvider};

pub const DEFAULT_SHEETS_BASE_URL: &str = "https://sheets.googleapis.com";

/// `A1` with no sheet name addresses the first worksheet.
pub const DEFAULT_RANGE: &str = "A1";

#[derive(Debug, Serialize)]
struct AppendBody<'a> {
    values: [&'a [String]; 1],
}

/// Appends rows to one spreadsheet.
pub struct SheetsClient {
    http: reqwest::Client,
    auth: Arc<dyn TokenProvider>,
    base_url: String,
    sheet_id: String,
    range: String,
}

impl SheetsClient {
    pub fn new(
        http: reqwest::Client,
        auth: Arc<dyn TokenProvider>,
        sheet_id: impl Into<String>,
    ) -> Self {
        SheetsClient {
            http,
            auth,
            base_url: DEFAULT_SHEETS_BASE_URL.to_string(),
            sheet_id: sheet_id.into(),
            range: DEFAULT_RANGE.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_range(mut self, range: impl Into<String>) -> Self {
        self.range = range.into();
        self
    }

    /// `{base}/v4/spreadsheets/{id}/values/{range}:append`, each segment
    /// percent-encoded.
    pub fn append_url(&self) -> Result<reqwest::Url, GoogleError> {
        let invalid = |reason: String| GoogleError::InvalidEndpoint {
            url: self.base_url.clone(),
            reason,
        };
        let mut url = reqwest::Url::parse(&self.base_url).map_err(|e| invalid(e.to_string()))?;
        let append_segment = format!("{}:append", self.range);
        url.path_segments_mut()
            .map_err(|_| invalid("cannot be a base URL".to_string()))?
            .pop_if_empty()
            .extend([
                "v4",
                "spreadsheets",
                self.sheet_id.as_str(),
                "values",
                append_segment.as_str(),
            ]);
        Ok(url)
    }
}

#[async_trait]
impl SheetAppender for SheetsClient {
    async fn append_row(&self, row: &[String]) -> Result<(), GoogleError> {
        let url = self.append_url()?;
        let token = self.auth.access_token().await?;

        let response = self
            .http
            .post(url)
            .bearer_auth(token)
            .query(&[("valueInputOption", "RAW"), ("insertDataOption", "INSERT_ROWS")])
            .json(&AppendBody { values: [row] })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GoogleError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(())
    }
}
