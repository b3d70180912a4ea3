//! Client-side form checks run before any request is sent.

use crate::{CoreError, Result as CoreResult};

const MIN_PASSWORD_LENGTH: usize = 6;
const MIN_RESET_CODE_LENGTH: usize = 4;

#[track_caller]
pub fn validate_email(email: &str) -> CoreResult<()> {
    let email = email.trim();

    if email.is_empty() {
        return Err(CoreError::validation("Email is required"));
    }

    if !email.contains('@') {
        return Err(CoreError::validation("Please enter a valid email address"));
    }

    Ok(())
}

#[track_caller]
pub fn validate_password(password: &str) -> CoreResult<()> {
    if password.trim().is_empty() {
        return Err(CoreError::validation("Password is required"));
    }

    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(CoreError::validation(format!(
            "Password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }

    Ok(())
}

#[track_caller]
pub fn validate_login(email: &str, password: &str) -> CoreResult<()> {
    validate_email(email)?;
    validate_password(password)
}

#[track_caller]
pub fn validate_registration(
    username: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> CoreResult<()> {
    if username.trim().is_empty() {
        return Err(CoreError::validation("Username is required"));
    }

    validate_email(email)?;
    validate_password(password)?;

    if password != confirm_password {
        return Err(CoreError::validation("Passwords do not match"));
    }

    Ok(())
}

#[track_caller]
pub fn validate_reset_code(code: &str) -> CoreResult<()> {
    let code = code.trim();

    if code.is_empty() {
        return Err(CoreError::validation("Reset code is required"));
    }

    if code.chars().count() < MIN_RESET_CODE_LENGTH {
        return Err(CoreError::validation("Please enter the complete reset code"));
    }

    Ok(())
}

#[track_caller]
pub fn validate_new_password(new_password: &str, confirm_password: &str) -> CoreResult<()> {
    if new_password.trim().is_empty() {
        return Err(CoreError::validation("New password is required"));
    }

    if new_password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(CoreError::validation(format!(
            "Password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }

    if confirm_password.trim().is_empty() {
        return Err(CoreError::validation("Please confirm your password"));
    }

    if new_password != confirm_password {
        return Err(CoreError::validation("Passwords do not match"));
    }

    Ok(())
}
