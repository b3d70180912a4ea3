/// Share of the monthly budget already spent, clamped to `[0, 100]`.
///
/// A zero (or non-finite) budget yields `0` rather than NaN or infinity.
pub fn budget_used_percent(total_expenses: f64, monthly_budget: f64) -> f64 {
    ratio_percent(total_expenses, monthly_budget).clamp(0.0, 100.0)
}

/// `part / whole * 100`, or `0` when the ratio is undefined.
pub(crate) fn ratio_percent(part: f64, whole: f64) -> f64 {
    if whole == 0.0 || !whole.is_finite() || !part.is_finite() {
        return 0.0;
    }

    let percent = part / whole * 100.0;
    if percent.is_finite() { percent } else { 0.0 }
}
