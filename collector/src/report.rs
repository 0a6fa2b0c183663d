use common::{ReportTable, render_stats_table, summarize};
use tracing::info;

use crate::error::Result;
use crate::sources::VacancySource;

const BANNER: &str = "Статистика по вакансиям в Москве";

/// Collects one report table per board, languages processed in order.
///
/// Each language is fetched from `first` then `second`. The first error
/// aborts the whole run.
pub fn collect_reports<A, B>(
    languages: &[String],
    first: &A,
    second: &B,
) -> Result<(ReportTable, ReportTable)>
where
    A: VacancySource,
    B: VacancySource,
{
    let mut first_table = ReportTable::new();
    let mut second_table = ReportTable::new();

    for language in languages {
        collect_language(first, language, &mut first_table)?;
        collect_language(second, language, &mut second_table)?;
    }

    Ok((first_table, second_table))
}

fn collect_language<S: VacancySource>(
    source: &S,
    language: &str,
    table: &mut ReportTable,
) -> Result<()> {
    let result = source.fetch_all(language)?;
    info!(
        board = source.name(),
        language,
        found = result.found,
        fetched = result.listings.len(),
        "📋 Vacancies collected"
    );

    if let Some(summary) = summarize(&result) {
        table.insert(language, summary);
    }
    Ok(())
}

/// Banner followed by each titled table, separated by blank lines.
pub fn render_report(tables: &[(&str, &ReportTable)]) -> String {
    let mut output = vec![format!("\n{}", BANNER)];
    for (index, (title, table)) in tables.iter().enumerate() {
        if index > 0 {
            output.push(String::new());
        }
        output.push(render_stats_table(table, title));
    }
    output.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CollectorError;
    use common::{PredictSalary, SourceResult};
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Debug, Clone)]
    struct Listing(Option<f64>);

    impl PredictSalary for Listing {
        fn predict_rub_salary(&self) -> Option<f64> {
            self.0
        }
    }

    /// In-memory board that records which languages were requested.
    struct FakeBoard {
        name: &'static str,
        results: HashMap<&'static str, SourceResult<Listing>>,
        failing: Option<&'static str>,
        calls: RefCell<Vec<String>>,
    }

    impl FakeBoard {
        fn new(name: &'static str) -> Self {
            Self {
                name,
                results: HashMap::new(),
                failing: None,
                calls: RefCell::new(Vec::new()),
            }
        }

        fn with(mut self, language: &'static str, found: u64, salaries: &[Option<f64>]) -> Self {
            let listings = salaries.iter().copied().map(Listing).collect();
            self.results.insert(language, SourceResult::new(found, listings));
            self
        }

        fn failing_on(mut self, language: &'static str) -> Self {
            self.failing = Some(language);
            self
        }
    }

    impl VacancySource for FakeBoard {
        type Listing = Listing;

        fn name(&self) -> &'static str {
            self.name
        }

        fn fetch_all(&self, language: &str) -> Result<SourceResult<Listing>> {
            self.calls.borrow_mut().push(language.to_string());
            if self.failing == Some(language) {
                return Err(CollectorError::Status {
                    board: self.name,
                    status: reqwest::StatusCode::SERVICE_UNAVAILABLE,
                });
            }
            Ok(self
                .results
                .get(language)
                .cloned()
                .unwrap_or_else(|| SourceResult::new(0, vec![])))
        }
    }

    fn languages(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn test_collect_reports_skips_languages_without_listings() {
        let hh = FakeBoard::new("HeadHunter")
            .with("Python", 500, &[Some(100_000.0), Some(200_000.0), None])
            .with("Go", 80, &[]);
        let sj = FakeBoard::new("SuperJob").with("Go", 10, &[None]);

        let (hh_table, sj_table) = collect_reports(&languages(&["Python", "Go"]), &hh, &sj).unwrap();

        assert_eq!(hh_table.len(), 1);
        let python = hh_table.get("Python").unwrap();
        assert_eq!(python.vacancies_found, 500);
        assert_eq!(python.vacancies_processed, 2);
        assert_eq!(python.average_salary, Some(150_000));

        assert_eq!(sj_table.len(), 1);
        let go = sj_table.get("Go").unwrap();
        assert_eq!(go.vacancies_processed, 0);
        assert_eq!(go.average_salary, None);
    }

    #[test]
    fn test_collect_reports_keeps_language_order() {
        let hh = FakeBoard::new("HeadHunter")
            .with("Ruby", 1, &[None])
            .with("Java", 1, &[None])
            .with("PHP", 1, &[None]);
        let sj = FakeBoard::new("SuperJob");

        let (hh_table, _) = collect_reports(&languages(&["Ruby", "Java", "PHP"]), &hh, &sj).unwrap();

        let names: Vec<_> = hh_table.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["Ruby", "Java", "PHP"]);
        assert_eq!(*sj.calls.borrow(), ["Ruby", "Java", "PHP"]);
    }

    #[test]
    fn test_collect_reports_aborts_on_first_error() {
        let hh = FakeBoard::new("HeadHunter").with("Python", 1, &[Some(1.0)]);
        let sj = FakeBoard::new("SuperJob").failing_on("Java");

        let err = collect_reports(&languages(&["Python", "Java", "Go"]), &hh, &sj).unwrap_err();

        assert!(matches!(err, CollectorError::Status { board: "SuperJob", .. }));
        assert_eq!(*hh.calls.borrow(), ["Python", "Java"]);
        assert_eq!(*sj.calls.borrow(), ["Python", "Java"]);
    }

    #[test]
    fn test_render_report_layout() {
        let mut hh_table = ReportTable::new();
        hh_table.insert(
            "Python",
            common::LanguageSummary {
                vacancies_found: 10,
                vacancies_processed: 4,
                average_salary: Some(180_000),
            },
        );
        let sj_table = ReportTable::new();

        let report = render_report(&[("HeadHunter", &hh_table), ("SuperJob", &sj_table)]);
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines[0], "");
        assert_eq!(lines[1], BANNER);
        assert!(lines[2].starts_with("+HeadHunter"));
        assert!(report.contains("| Python | 10 "));

        let blank = lines.iter().skip(2).position(|line| line.is_empty()).unwrap() + 2;
        assert!(lines[blank + 1].starts_with("+SuperJob"));
        assert!(report.ends_with('+'));
    }
}
