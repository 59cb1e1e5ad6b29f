use crate::api::ResetErrorKind;

pub const RESET_LINK_SENT: &str = "Password reset link has been sent to your email.";
pub const INVALID_EMAIL: &str = "The email address is not valid.";
pub const USER_NOT_FOUND: &str = "No user found with this email address.";
pub const GENERIC_FAILURE: &str = "An error occurred. Please try again.";
pub const EMAIL_REQUIRED: &str = "The email address is required.";

pub fn reset_error_message(kind: &ResetErrorKind) -> &'static str {
    match kind {
        ResetErrorKind::InvalidEmail => INVALID_EMAIL,
        ResetErrorKind::UserNotFound => USER_NOT_FOUND,
        _ => GENERIC_FAILURE,
    }
}

pub fn normalize_email(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
