use std::env;
use std::time::Duration;

use crate::error::{CollectorError, Result};

pub const DEFAULT_LANGUAGES: [&str; 12] = [
    "Python",
    "Java",
    "Javascript",
    "C++",
    "C#",
    "PHP",
    "Go",
    "Kotlin",
    "Swift",
    "TypeScript",
    "Ruby",
    "1C",
];

const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_MAX_PAGES: u32 = 20;
const DEFAULT_HEADHUNTER_URL: &str = "https://api.hh.ru/vacancies";
const DEFAULT_SUPERJOB_URL: &str = "https://api.superjob.ru/2.0/vacancies/";

/// Run configuration, loaded once in `main` and passed down explicitly.
#[derive(Debug, Clone)]
pub struct Config {
    pub superjob_secret_key: String,
    pub languages: Vec<String>,
    pub request_timeout: Duration,
    /// Upper bound on pages fetched per language per job board
    pub max_pages: u32,
    pub headhunter_url: String,
    pub superjob_url: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let superjob_secret_key = lookup("SJ_SECRET_KEY")
            .filter(|key| !key.trim().is_empty())
            .ok_or(CollectorError::MissingConfig("SJ_SECRET_KEY"))?;

        let languages = match lookup("VACANCY_LANGUAGES") {
            Some(value) => parse_languages(&value)?,
            None => DEFAULT_LANGUAGES.iter().map(|lang| lang.to_string()).collect(),
        };

        let timeout_secs = match lookup("HTTP_TIMEOUT_SECS") {
            Some(value) => parse_positive::<u64>("HTTP_TIMEOUT_SECS", &value)?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let max_pages = match lookup("MAX_PAGES") {
            Some(value) => parse_positive::<u32>("MAX_PAGES", &value)?,
            None => DEFAULT_MAX_PAGES,
        };

        Ok(Self {
            superjob_secret_key,
            languages,
            request_timeout: Duration::from_secs(timeout_secs),
            max_pages,
            headhunter_url: lookup("HH_API_URL")
                .unwrap_or_else(|| DEFAULT_HEADHUNTER_URL.to_string()),
            superjob_url: lookup("SJ_API_URL").unwrap_or_else(|| DEFAULT_SUPERJOB_URL.to_string()),
        })
    }
}

fn parse_languages(value: &str) -> Result<Vec<String>> {
    let languages: Vec<String> = value
        .split(',')
        .map(str::trim)
        .filter(|lang| !lang.is_empty())
        .map(String::from)
        .collect();

    if languages.is_empty() {
        return Err(CollectorError::InvalidConfig {
            key: "VACANCY_LANGUAGES",
            value: value.to_string(),
        });
    }
    Ok(languages)
}

// Zero is not a usable timeout or page limit
fn parse_positive<T>(key: &'static str, value: &str) -> Result<T>
where
    T: std::str::FromStr + Default + PartialEq,
{
    let invalid = || CollectorError::InvalidConfig {
        key,
        value: value.to_string(),
    };

    let number: T = value.trim().parse().map_err(|_| invalid())?;
    if number == T::default() {
        return Err(invalid());
    }
    Ok(number)
}
