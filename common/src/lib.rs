//! Shared core for the vacancy statistics collector.
//!
//! Everything here is pure: salary estimation, per-language aggregation
//! and table rendering. Fetching lives in the `vacancy-stats` binary.

pub mod salary;
pub mod stats;
pub mod table;

pub use salary::{PredictSalary, predict_salary};
pub use stats::{LanguageSummary, ReportTable, SourceResult, summarize};
pub use table::{MISSING_SALARY, render_stats_table};
