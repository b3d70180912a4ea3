const DEFAULT_MONTHLY_BUDGET: f64 = 4000.0;

/// Values substituted for fields whose resource did not load.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewDefaults {
    pub monthly_budget: f64,
}

impl Default for ViewDefaults {
    fn default() -> Self {
        Self {
            monthly_budget: DEFAULT_MONTHLY_BUDGET,
        }
    }
}
