use bt_config::USER_ID_PLACEHOLDER;

/// Path template relative to the API base URL.
///
/// `{user_id}` is replaced with the URL-encoded session user id on render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointTemplate(String);

impl EndpointTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        Self(template.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_user_scoped(&self) -> bool {
        self.0.contains(USER_ID_PLACEHOLDER)
    }

    pub fn render(&self, user_id: &str) -> String {
        self.0
            .replace(USER_ID_PLACEHOLDER, &urlencoding::encode(user_id))
    }
}

impl From<&str> for EndpointTemplate {
    fn from(template: &str) -> Self {
        Self::new(template)
    }
}
