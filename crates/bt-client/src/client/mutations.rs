use crate::{ApiClient, ClientError, ClientResult};

use bt_core::{
    FetchError, IdentityError, KeyValueStore, NavigationIntent, RESET_EMAIL_KEY, Session,
    TransactionDraft, TransactionType, clear_session, persist_login_record,
    validation::{
        validate_email, validate_login, validate_new_password, validate_registration,
        validate_reset_code,
    },
};

use chrono::Utc;
use log::info;
use serde::Serialize;
use serde_json::Value;

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct RegisterRequest<'a> {
    username: &'a str,
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct ResetRequest<'a> {
    email: &'a str,
}

#[derive(Serialize)]
struct ResetCodeRequest<'a> {
    email: &'a str,
    code: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ResetPasswordRequest<'a> {
    email: &'a str,
    new_password: &'a str,
}

#[derive(Serialize)]
struct TransactionRequest<'a> {
    user_id: &'a str,
    amount: f64,
    description: &'a str,
    category: &'a str,
    date: String,
}

impl ApiClient {
    // =========================================================================
    // Account
    // =========================================================================

    /// Log in and persist the normalized session.
    ///
    /// The response may carry the user at the top level or under `user`.
    pub async fn login(
        &self,
        store: &dyn KeyValueStore,
        email: &str,
        password: &str,
    ) -> ClientResult<Session> {
        validate_login(email, password)?;
        let email = email.trim();

        let body = LoginRequest { email, password };
        let response = self.post(&self.endpoints().login, &body).await?;

        let Value::Object(mut record) = response else {
            return Err(FetchError::decode("login response is not a JSON object").into());
        };
        let record = match record.remove("user") {
            Some(Value::Object(user)) => user,
            _ => record,
        };

        let session = persist_login_record(store, &record, email).map_err(|e| match e {
            IdentityError::MissingUserId { .. } => ClientError::from(FetchError::decode(e.to_string())),
            other => ClientError::from(other),
        })?;

        info!("Logged in as user {}", session.user_id);
        Ok(session)
    }

    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
        confirm_password: &str,
    ) -> ClientResult<()> {
        validate_registration(username, email, password, confirm_password)?;

        let body = RegisterRequest {
            username: username.trim(),
            email: email.trim(),
            password,
        };
        self.post(&self.endpoints().register, &body).await?;

        info!("Registered account for {}", email.trim());
        Ok(())
    }

    // =========================================================================
    // Password reset
    // =========================================================================

    /// Start a reset. The email is remembered for the later steps.
    pub async fn request_password_reset(
        &self,
        store: &dyn KeyValueStore,
        email: &str,
    ) -> ClientResult<()> {
        validate_email(email)?;
        let email = email.trim();

        store.set(RESET_EMAIL_KEY, email)?;
        self.post(&self.endpoints().request_reset, &ResetRequest { email })
            .await?;

        info!("Reset code requested for {email}");
        Ok(())
    }

    /// Send the code again to the remembered email.
    pub async fn resend_reset_code(&self, store: &dyn KeyValueStore) -> ClientResult<()> {
        let email = reset_email(store)?;

        self.post(&self.endpoints().request_reset, &ResetRequest { email: &email })
            .await?;

        info!("Reset code re-sent to {email}");
        Ok(())
    }

    pub async fn verify_reset_code(&self, store: &dyn KeyValueStore, code: &str) -> ClientResult<()> {
        validate_reset_code(code)?;
        let email = reset_email(store)?;

        let body = ResetCodeRequest {
            email: &email,
            code: code.trim(),
        };
        self.post(&self.endpoints().verify_reset_code, &body).await?;

        info!("Reset code verified for {email}");
        Ok(())
    }

    /// Finish the reset. The remembered email is cleared on success.
    pub async fn reset_password(
        &self,
        store: &dyn KeyValueStore,
        new_password: &str,
        confirm_password: &str,
    ) -> ClientResult<NavigationIntent> {
        validate_new_password(new_password, confirm_password)?;
        let email = reset_email(store)?;

        let body = ResetPasswordRequest {
            email: &email,
            new_password,
        };
        self.post(&self.endpoints().reset_password, &body).await?;
        store.remove(RESET_EMAIL_KEY)?;

        info!("Password reset completed for {email}");
        Ok(NavigationIntent::RedirectToLogin)
    }

    // =========================================================================
    // Transactions
    // =========================================================================

    /// Record an income or expense for the session's user.
    pub async fn create_transaction(
        &self,
        session: &Session,
        draft: &TransactionDraft,
    ) -> ClientResult<NavigationIntent> {
        let path = match draft.kind {
            TransactionType::Income => &self.endpoints().income,
            TransactionType::Expense => &self.endpoints().expense,
        };

        let body = TransactionRequest {
            user_id: &session.user_id,
            amount: draft.amount,
            description: &draft.description,
            category: &draft.category,
            date: Utc::now().to_rfc3339(),
        };
        self.post(path, &body).await?;

        info!(
            "Added {} of {} for user {}",
            draft.kind.as_str(),
            draft.amount,
            session.user_id
        );
        Ok(NavigationIntent::GoBack)
    }
}

/// Clear the stored session; the caller should return to login.
pub fn logout(store: &dyn KeyValueStore) -> ClientResult<NavigationIntent> {
    clear_session(store)?;
    Ok(NavigationIntent::RedirectToLogin)
}

fn reset_email(store: &dyn KeyValueStore) -> ClientResult<String> {
    store
        .get(RESET_EMAIL_KEY)?
        .filter(|email| !email.trim().is_empty())
        .ok_or_else(ClientError::reset_not_started)
}
