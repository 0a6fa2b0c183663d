//! Vacancy statistics for programming languages
//!
//! Queries HeadHunter and SuperJob for Moscow developer vacancies,
//! predicts ruble salaries and prints one comparison table per board.

mod config;
mod error;
mod report;
mod sources;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::Config;
use report::{collect_reports, render_report};
use sources::{HeadHunterClient, SuperJobClient, VacancySource, build_http_client};

fn main() -> Result<()> {
    // Logs go to stderr, stdout carries only the report
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("🔍 Starting vacancy statistics collector");

    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(
        languages = config.languages.len(),
        max_pages = config.max_pages,
        "Configuration loaded"
    );

    let http = build_http_client(&config)?;
    let headhunter = HeadHunterClient::from_config(http.clone(), &config);
    let superjob = SuperJobClient::from_config(http, &config);

    let (hh_table, sj_table) = collect_reports(&config.languages, &headhunter, &superjob)
        .context("Failed to collect vacancy statistics")?;

    let tables = [(headhunter.name(), &hh_table), (superjob.name(), &sj_table)];
    for (board, table) in tables {
        if table.is_empty() {
            tracing::warn!(board, "No vacancies found for any language");
        }
    }

    println!("{}", render_report(&tables));

    tracing::info!("✨ Done");
    Ok(())
}
