use crate::{ConfigError, ConfigErrorResult, DEFAULT_MONTHLY_BUDGET};

use serde::Deserialize;

/// Fallback values substituted when a remote resource cannot be loaded.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    pub monthly_budget: f64,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            monthly_budget: DEFAULT_MONTHLY_BUDGET,
        }
    }
}

impl DefaultsConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !self.monthly_budget.is_finite() || self.monthly_budget < 0.0 {
            return Err(ConfigError::defaults(format!(
                "defaults.monthly_budget must be a finite value >= 0, got {}",
                self.monthly_budget
            )));
        }

        Ok(())
    }
}
