use crate::adapters::mock;
use crate::config::SheetsConfig;
use crate::domain::model::{DataOrigin, ReadOutcome};
use crate::domain::ports::RangeSource;
use crate::utils::error::{PortfolioError, Result};
use serde::Deserialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::OnceCell;
use url::Url;

/// Adapter for the Google Sheets `values.get` REST surface.
///
/// The HTTP client is built lazily, at most once per instance; concurrent
/// first readers await the same in-flight initialization, and a failed
/// attempt is retried on the next call rather than cached. Reads never
/// surface errors: any failure is logged and replaced with fallback rows.
pub struct SheetsClient {
    config: SheetsConfig,
    http: OnceCell<reqwest::Client>,
    init_count: AtomicUsize,
}

/// Response body of `values.get`: a 2-D array of string cells. An empty
/// range omits `values` entirely.
#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<String>>,
}

impl SheetsClient {
    pub fn new(config: SheetsConfig) -> Self {
        Self {
            config,
            http: OnceCell::new(),
            init_count: AtomicUsize::new(0),
        }
    }

    /// How many times client initialization actually ran.
    pub fn init_count(&self) -> usize {
        self.init_count.load(Ordering::SeqCst)
    }

    async fn http_client(&self) -> Result<&reqwest::Client> {
        self.http
            .get_or_try_init(|| async {
                self.init_count.fetch_add(1, Ordering::SeqCst);
                tracing::debug!("Initializing Sheets HTTP client");
                reqwest::Client::builder()
                    .build()
                    .map_err(PortfolioError::ApiError)
            })
            .await
    }

    fn values_url(&self, range: &str) -> Result<Url> {
        let endpoint = format!(
            "{}/v4/spreadsheets/{}/values/{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.spreadsheet_id,
            range
        );
        let url = Url::parse_with_params(&endpoint, &[("key", self.config.api_key.as_str())])?;
        Ok(url)
    }

    async fn fetch_remote(&self, range: &str) -> Result<Vec<Vec<String>>> {
        let client = self.http_client().await?;
        let url = self.values_url(range)?;

        tracing::debug!("Fetching sheet range: {}", range);
        let response = client.get(url).send().await?;

        let status = response.status();
        tracing::debug!("Sheets API response status: {}", status);
        if !status.is_success() {
            return Err(PortfolioError::SheetError {
                status: status.as_u16(),
                range: range.to_string(),
            });
        }

        let body: ValueRange = response.json().await?;
        Ok(body.values)
    }

    /// Read a range, absorbing every failure into fallback rows. A single
    /// attempt per call, no retry.
    pub async fn read_range(&self, range: &str) -> ReadOutcome {
        if !self.config.has_credentials() {
            tracing::warn!(
                "Sheets credentials not set, serving fallback data for {}",
                range
            );
            return ReadOutcome {
                rows: mock::fallback_rows(range),
                origin: DataOrigin::Fallback,
            };
        }

        match self.fetch_remote(range).await {
            Ok(rows) => {
                tracing::debug!("Fetched {} rows for {}", rows.len(), range);
                ReadOutcome {
                    rows,
                    origin: DataOrigin::Remote,
                }
            }
            Err(err) => {
                log_read_failure(range, &err);
                ReadOutcome {
                    rows: mock::fallback_rows(range),
                    origin: DataOrigin::Fallback,
                }
            }
        }
    }
}

#[async_trait::async_trait]
impl RangeSource for SheetsClient {
    async fn read_range(&self, range: &str) -> ReadOutcome {
        SheetsClient::read_range(self, range).await
    }
}

fn log_read_failure(range: &str, err: &PortfolioError) {
    tracing::error!("Error fetching sheet range {}: {}", range, err);

    if let PortfolioError::SheetError { status, .. } = err {
        match status {
            403 => tracing::error!("Permission denied: make sure the sheet is publicly readable"),
            400 => tracing::error!("Bad request: check the spreadsheet id and range"),
            404 => tracing::error!("Not found: check the spreadsheet id"),
            _ => {}
        }
    }

    tracing::warn!("Falling back to placeholder data for {}", range);
}
