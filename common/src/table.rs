//! Plain-text statistics table.

use crate::stats::{LanguageSummary, ReportTable};

/// Printed in place of an average when no salary could be predicted.
pub const MISSING_SALARY: &str = "N/A";

const HEADER: [&str; 4] = [
    "Язык",
    "Найдено вакансий",
    "Обработано вакансий",
    "Средняя зарплата",
];

/// Renders a bordered table, rows sorted by found count descending.
///
/// The title is embedded in the top border when it fits:
///
/// ```text
/// +HeadHunter-----------------+
/// | Язык   | Найдено вакансий |
/// +--------+------------------+
/// ```
pub fn render_stats_table(table: &ReportTable, title: &str) -> String {
    let mut rows: Vec<[String; 4]> = vec![HEADER.map(String::from)];
    rows.extend(
        table
            .sorted_by_found()
            .into_iter()
            .map(|(language, summary)| row(language, summary)),
    );

    let mut widths = [0usize; 4];
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let border = border_line(&widths);
    let mut lines = Vec::with_capacity(rows.len() + 3);
    lines.push(title_line(&border, title));
    for (index, row) in rows.iter().enumerate() {
        lines.push(row_line(row, &widths));
        if index == 0 {
            lines.push(border.clone());
        }
    }
    lines.push(border);

    lines.join("\n")
}

fn row(language: &str, summary: &LanguageSummary) -> [String; 4] {
    [
        language.to_string(),
        summary.vacancies_found.to_string(),
        summary.vacancies_processed.to_string(),
        summary
            .average_salary
            .map_or_else(|| MISSING_SALARY.to_string(), |salary| salary.to_string()),
    ]
}

fn border_line(widths: &[usize]) -> String {
    let segments: Vec<String> = widths.iter().map(|width| "-".repeat(width + 2)).collect();
    format!("+{}+", segments.join("+"))
}

fn title_line(border: &str, title: &str) -> String {
    let border_len = border.chars().count();
    let title_len = title.chars().count();
    if title.is_empty() || title_len > border_len - 2 {
        return border.to_string();
    }

    // Overwrite the border right after the leading '+'
    let mut line = String::from("+");
    line.push_str(title);
    line.extend(border.chars().skip(1 + title_len));
    line
}

fn row_line(row: &[String; 4], widths: &[usize; 4]) -> String {
    let cells: Vec<String> = row
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!(" {:<width$} ", cell, width = *width))
        .collect();
    format!("|{}|", cells.join("|"))
}
