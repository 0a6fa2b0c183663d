//! SuperJob vacancy search.

use common::{PredictSalary, SourceResult, predict_salary};
use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use super::{PER_PAGE, VacancySource, get_json, search_text};
use crate::config::Config;
use crate::error::Result;

/// Moscow
const TOWN: u32 = 4;
/// "Development, programming" catalogue
const CATALOGUE: u32 = 48;
const RUBLE: &str = "rub";

#[derive(Debug, Deserialize)]
struct VacanciesPage {
    #[serde(default)]
    objects: Vec<Vacancy>,
    #[serde(default)]
    total: u64,
    #[serde(default)]
    more: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Vacancy {
    #[serde(default)]
    pub payment_from: Option<f64>,
    #[serde(default)]
    pub payment_to: Option<f64>,
    #[serde(default)]
    pub currency: Option<String>,
}

impl Vacancy {
    // SuperJob sends 0 for a bound that was not stated
    fn bound(value: Option<f64>) -> Option<f64> {
        value.filter(|value| *value != 0.0)
    }
}

impl PredictSalary for Vacancy {
    fn predict_rub_salary(&self) -> Option<f64> {
        let from = Self::bound(self.payment_from);
        let to = Self::bound(self.payment_to);
        if from.is_none() && to.is_none() {
            return None;
        }
        if self.currency.as_deref() != Some(RUBLE) {
            return None;
        }
        predict_salary(from, to)
    }
}

pub struct SuperJobClient {
    http: Client,
    base_url: String,
    secret_key: String,
    max_pages: u32,
}

impl SuperJobClient {
    pub fn new(
        http: Client,
        base_url: impl Into<String>,
        secret_key: impl Into<String>,
        max_pages: u32,
    ) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            secret_key: secret_key.into(),
            max_pages,
        }
    }

    pub fn from_config(http: Client, config: &Config) -> Self {
        Self::new(
            http,
            config.superjob_url.clone(),
            config.superjob_secret_key.clone(),
            config.max_pages,
        )
    }

    fn fetch_page(&self, language: &str, page: u32) -> Result<VacanciesPage> {
        debug!(board = self.name(), language, page, "Fetching page");

        let request = self
            .http
            .get(&self.base_url)
            .header("X-Api-App-Id", &self.secret_key)
            .query(&[
                ("keyword", search_text(language)),
                ("town", TOWN.to_string()),
                ("catalogues", CATALOGUE.to_string()),
                ("page", page.to_string()),
                ("count", PER_PAGE.to_string()),
            ]);
        get_json(self.name(), request)
    }

    /// Pages to fetch, derived once from the first page.
    fn page_count(&self, first: &VacanciesPage) -> u32 {
        if !first.more {
            return 1;
        }

        let pages = first.total.div_ceil(u64::from(PER_PAGE)).max(1);
        let pages = u32::try_from(pages).unwrap_or(u32::MAX);
        if pages > self.max_pages {
            warn!(
                board = self.name(),
                total = first.total,
                "Page limit of {} reached, stopping early",
                self.max_pages
            );
        }
        pages.min(self.max_pages)
    }
}

impl VacancySource for SuperJobClient {
    type Listing = Vacancy;

    fn name(&self) -> &'static str {
        "SuperJob"
    }

    /// `total` and `more` are read from page 0 only. The rest is fetched
    /// up to the page count they imply, or until a page comes back empty.
    fn fetch_all(&self, language: &str) -> Result<SourceResult<Vacancy>> {
        let first = self.fetch_page(language, 0)?;
        let found = first.total;
        let page_count = self.page_count(&first);
        let mut listings = first.objects;

        for page in 1..page_count {
            let response = self.fetch_page(language, page)?;
            if response.objects.is_empty() {
                debug!(board = self.name(), language, page, "Empty page, stopping");
                break;
            }
            listings.extend(response.objects);
        }

        Ok(SourceResult::new(found, listings))
    }
}
