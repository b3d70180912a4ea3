use serde::Serialize;

/// Abstract navigation requests handed to whatever owns routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigationIntent {
    /// Session missing or unusable; go to the login entry point.
    RedirectToLogin,
    /// Password reset flow lost its email; restart it.
    RedirectToPasswordReset,
    /// A form was submitted successfully; return to the previous screen.
    GoBack,
}
