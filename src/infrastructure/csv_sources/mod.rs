pub mod http;

use crate::domain::error::Result;
use async_trait::async_trait;

pub use http::HttpCsvSource;

/// Where the raw CSV text of a load cycle comes from
#[async_trait]
pub trait CsvSource: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String>;
}

/// Fixed CSV body, for offline runs and tests
pub struct StaticCsvSource {
    body: String,
}

impl StaticCsvSource {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }
}

#[async_trait]
impl CsvSource for StaticCsvSource {
    async fn fetch(&self, _url: &str) -> Result<String> {
        Ok(self.body.clone())
    }
}

/// Append `param=<now_millis>` so intermediaries never serve a stale sheet
pub fn cache_busted_url(base: &str, param: &str, now_millis: i64) -> String {
    let separator = if base.contains('?') { '&' } else { '?' };
    format!("{}{}{}={}", base, separator, param, now_millis)
}
