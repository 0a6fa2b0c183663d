//! Job board adapters.
//!
//! Each board paginates its own way but hands back the same
//! [`SourceResult`], so the orchestrator stays board-agnostic.

pub mod headhunter;
pub mod superjob;

pub use headhunter::HeadHunterClient;
pub use superjob::SuperJobClient;

use common::{PredictSalary, SourceResult};
use reqwest::blocking::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::error::{CollectorError, Result};

/// Listings requested per page from every board.
pub const PER_PAGE: u32 = 100;

const USER_AGENT: &str = concat!("vacancy-stats/", env!("CARGO_PKG_VERSION"));

pub trait VacancySource {
    type Listing: PredictSalary;

    /// Human-readable board name, used as the report title.
    fn name(&self) -> &'static str;

    /// Fetches every listing for `language`, page by page.
    fn fetch_all(&self, language: &str) -> Result<SourceResult<Self::Listing>>;
}

/// Builds the HTTP client shared by all boards.
pub fn build_http_client(config: &Config) -> Result<Client> {
    Client::builder()
        .timeout(config.request_timeout)
        .user_agent(USER_AGENT)
        .build()
        .map_err(CollectorError::HttpClient)
}

/// Sends a request and decodes a successful JSON body.
pub(crate) fn get_json<T: DeserializeOwned>(board: &'static str, request: RequestBuilder) -> Result<T> {
    let response = request
        .send()
        .map_err(|error| CollectorError::Http { board, error })?;

    let status = response.status();
    if !status.is_success() {
        return Err(CollectorError::Status { board, status });
    }

    let body = response
        .text()
        .map_err(|error| CollectorError::Http { board, error })?;
    serde_json::from_str(&body).map_err(|error| CollectorError::Decode { board, error })
}

/// Search text sent to both boards.
pub(crate) fn search_text(language: &str) -> String {
    format!("программист {}", language)
}

#[cfg(test)]
pub(crate) fn test_client() -> Client {
    Client::builder()
        .timeout(std::time::Duration::from_secs(5))
        .build()
        .unwrap()
}
