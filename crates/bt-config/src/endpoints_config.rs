use crate::{ConfigError, ConfigErrorResult, USER_ID_PLACEHOLDER};

use serde::Deserialize;

/// Path templates for every remote endpoint, relative to `api.base_url`.
///
/// User-scoped reads must carry the `{user_id}` placeholder; mutations
/// send the id in the request body instead.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EndpointsConfig {
    pub balance: String,
    pub budget: String,
    pub recent_transactions: String,
    pub all_transactions: String,
    pub monthly_report: String,
    pub historical_reports: String,
    pub login: String,
    pub register: String,
    pub request_reset: String,
    pub verify_reset_code: String,
    pub reset_password: String,
    pub income: String,
    pub expense: String,
}

impl Default for EndpointsConfig {
    fn default() -> Self {
        Self {
            balance: String::from("/api/balance?user_id={user_id}"),
            budget: String::from("/api/budget?user_id={user_id}"),
            recent_transactions: String::from("/api/transactions/recent?user_id={user_id}&limit=5"),
            all_transactions: String::from("/api/transactions/all?user_id={user_id}"),
            monthly_report: String::from("/api/reports/monthly?user_id={user_id}"),
            historical_reports: String::from("/api/reports/historical?user_id={user_id}"),
            login: String::from("/Loginuser"),
            register: String::from("/Registeruser"),
            request_reset: String::from("/RequestReset"),
            verify_reset_code: String::from("/ResetCode"),
            reset_password: String::from("/ResetPassword"),
            income: String::from("/income"),
            expense: String::from("/expense"),
        }
    }
}

impl EndpointsConfig {
    fn user_scoped(&self) -> [(&'static str, &str); 6] {
        [
            ("balance", &self.balance),
            ("budget", &self.budget),
            ("recent_transactions", &self.recent_transactions),
            ("all_transactions", &self.all_transactions),
            ("monthly_report", &self.monthly_report),
            ("historical_reports", &self.historical_reports),
        ]
    }

    fn unscoped(&self) -> [(&'static str, &str); 7] {
        [
            ("login", &self.login),
            ("register", &self.register),
            ("request_reset", &self.request_reset),
            ("verify_reset_code", &self.verify_reset_code),
            ("reset_password", &self.reset_password),
            ("income", &self.income),
            ("expense", &self.expense),
        ]
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        for (name, template) in self.user_scoped().into_iter().chain(self.unscoped()) {
            if !template.starts_with('/') {
                return Err(ConfigError::api(format!(
                    "api.endpoints.{name} must start with '/', got '{template}'"
                )));
            }
        }

        for (name, template) in self.user_scoped() {
            if !template.contains(USER_ID_PLACEHOLDER) {
                return Err(ConfigError::api(format!(
                    "api.endpoints.{name} must contain {USER_ID_PLACEHOLDER}, got '{template}'"
                )));
            }
        }

        Ok(())
    }
}
