//! HeadHunter (hh.ru) vacancy search.

use common::{PredictSalary, SourceResult, predict_salary};
use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use super::{PER_PAGE, VacancySource, get_json, search_text};
use crate::config::Config;
use crate::error::Result;

/// Moscow
const AREA: u32 = 1;
/// Only vacancies published within this many days
const PERIOD_DAYS: u32 = 30;
const RUBLE: &str = "RUR";

#[derive(Debug, Deserialize)]
struct VacanciesPage {
    pages: u32,
    items: Vec<Vacancy>,
    #[serde(default)]
    found: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Vacancy {
    #[serde(default)]
    pub salary: Option<Salary>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Salary {
    #[serde(default)]
    pub from: Option<f64>,
    #[serde(default)]
    pub to: Option<f64>,
    #[serde(default)]
    pub currency: Option<String>,
}

impl PredictSalary for Vacancy {
    fn predict_rub_salary(&self) -> Option<f64> {
        let salary = self.salary.as_ref()?;
        if salary.currency.as_deref() != Some(RUBLE) {
            return None;
        }
        predict_salary(salary.from, salary.to)
    }
}

pub struct HeadHunterClient {
    http: Client,
    base_url: String,
    max_pages: u32,
}

impl HeadHunterClient {
    pub fn new(http: Client, base_url: impl Into<String>, max_pages: u32) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            max_pages,
        }
    }

    pub fn from_config(http: Client, config: &Config) -> Self {
        Self::new(http, config.headhunter_url.clone(), config.max_pages)
    }

    fn fetch_page(&self, language: &str, page: u32) -> Result<VacanciesPage> {
        debug!(board = self.name(), language, page, "Fetching page");

        let request = self.http.get(&self.base_url).query(&[
            ("text", search_text(language)),
            ("area", AREA.to_string()),
            ("period", PERIOD_DAYS.to_string()),
            ("page", page.to_string()),
            ("per_page", PER_PAGE.to_string()),
        ]);
        get_json(self.name(), request)
    }
}

impl VacancySource for HeadHunterClient {
    type Listing = Vacancy;

    fn name(&self) -> &'static str {
        "HeadHunter"
    }

    /// Pages until the last seen `pages` count is reached.
    ///
    /// The count is re-read from every page since the index is live.
    /// `found` comes from the final page fetched.
    fn fetch_all(&self, language: &str) -> Result<SourceResult<Vacancy>> {
        let mut listings = Vec::new();
        let mut found = 0;
        let mut page = 0;
        let mut total_pages = 1;

        while page < total_pages {
            if page >= self.max_pages {
                warn!(
                    board = self.name(),
                    language,
                    total_pages,
                    "Page limit of {} reached, stopping early",
                    self.max_pages
                );
                break;
            }

            let response = self.fetch_page(language, page)?;
            total_pages = response.pages;
            found = response.found;
            listings.extend(response.items);
            page += 1;
        }

        Ok(SourceResult::new(found, listings))
    }
}
