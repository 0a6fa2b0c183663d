//! Salary prediction from a stated pay range.

/// Implemented by each job board's listing type.
///
/// Returns the predicted monthly salary in rubles, or `None` when the
/// listing has no usable salary (no bounds, or a foreign currency).
pub trait PredictSalary {
    fn predict_rub_salary(&self) -> Option<f64>;
}

/// Predicts a single salary value from an optional `[from, to]` range.
///
/// With both bounds the midpoint is used. A lone lower bound is raised by
/// 20%, a lone upper bound is lowered by 20%. Zero is a real bound.
pub fn predict_salary(from: Option<f64>, to: Option<f64>) -> Option<f64> {
    match (from, to) {
        (Some(from), Some(to)) => Some((from + to) / 2.0),
        // Fractions keep integral bounds integral (1.2 and 0.8 are inexact)
        (Some(from), None) => Some(from * 6.0 / 5.0),
        (None, Some(to)) => Some(to * 4.0 / 5.0),
        (None, None) => None,
    }
}
