//! Per-language aggregation of fetched listings.

use serde::Serialize;

use crate::salary::PredictSalary;

/// Everything one paginated fetch produced for a single language.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceResult<L> {
    /// Total matches as reported by the job board, not the number fetched.
    pub found: u64,
    pub listings: Vec<L>,
}

impl<L> SourceResult<L> {
    pub fn new(found: u64, listings: Vec<L>) -> Self {
        Self { found, listings }
    }
}

/// Statistics row for one language on one job board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LanguageSummary {
    pub vacancies_found: u64,
    pub vacancies_processed: u64,
    pub average_salary: Option<i64>,
}

/// Summarizes a fetch result, or `None` if the board returned no listings.
///
/// Only listings with a predicted salary count as processed. The average is
/// the mean of those predictions truncated toward zero.
pub fn summarize<L: PredictSalary>(result: &SourceResult<L>) -> Option<LanguageSummary> {
    if result.listings.is_empty() {
        return None;
    }

    let salaries: Vec<f64> = result
        .listings
        .iter()
        .filter_map(|listing| listing.predict_rub_salary())
        .collect();

    let average_salary = if salaries.is_empty() {
        None
    } else {
        let mean = salaries.iter().sum::<f64>() / salaries.len() as f64;
        Some(mean.trunc() as i64)
    };

    Some(LanguageSummary {
        vacancies_found: result.found,
        vacancies_processed: salaries.len() as u64,
        average_salary,
    })
}

/// Language name to summary mapping that remembers insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportTable {
    entries: Vec<(String, LanguageSummary)>,
}

impl ReportTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a summary. Re-inserting a language replaces it in place.
    pub fn insert(&mut self, language: impl Into<String>, summary: LanguageSummary) {
        let language = language.into();
        match self.entries.iter_mut().find(|(name, _)| *name == language) {
            Some((_, existing)) => *existing = summary,
            None => self.entries.push((language, summary)),
        }
    }

    pub fn get(&self, language: &str) -> Option<&LanguageSummary> {
        self.entries
            .iter()
            .find(|(name, _)| name == language)
            .map(|(_, summary)| summary)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &LanguageSummary)> {
        self.entries
            .iter()
            .map(|(name, summary)| (name.as_str(), summary))
    }

    /// Entries ordered by found count, highest first. Ties keep insertion order.
    pub fn sorted_by_found(&self) -> Vec<(&str, &LanguageSummary)> {
        let mut rows: Vec<_> = self.iter().collect();
        // sort_by is stable
        rows.sort_by(|a, b| b.1.vacancies_found.cmp(&a.1.vacancies_found));
        rows
    }
}
