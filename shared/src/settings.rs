//! Account settings forms: password change and the recovery question.

use crate::api::{ChangePasswordRequest, SecuritySetupRequest};

pub const PASSWORDS_DIFFER: &str = "New passwords don't match";
pub const PASSWORD_UPDATED: &str = "Password updated successfully";
pub const PASSWORD_FAILED: &str = "Error updating password";
pub const SECURITY_UPDATED: &str = "Recovery question updated";
pub const SECURITY_FAILED: &str = "Error setting security question";

/// Challenge questions offered when configuring recovery.
pub const SECURITY_QUESTIONS: [&str; 5] = [
    "What was your first childhood pet's name?",
    "What city did you first meet your partner?",
    "What was the name of your first elementary school?",
    "What is your mother's maiden name?",
    "What was your dream job as a child?",
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasswordForm {
    pub old_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

impl PasswordForm {
    /// The request to send, or the message to show when the confirmation
    /// does not match. No request goes out in that case.
    pub fn request(&self) -> Result<ChangePasswordRequest, &'static str> {
        if self.new_password != self.confirm_password {
            return Err(PASSWORDS_DIFFER);
        }
        Ok(ChangePasswordRequest {
            old_password: self.old_password.clone(),
            new_password: self.new_password.clone(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SecurityForm {
    pub question: String,
    pub answer: String,
}

impl SecurityForm {
    pub fn is_complete(&self) -> bool {
        !self.question.is_empty() && !self.answer.trim().is_empty()
    }

    pub fn request(&self) -> SecuritySetupRequest {
        SecuritySetupRequest {
            secret_question: self.question.clone(),
            secret_answer: self.answer.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mismatched_confirmation_is_rejected() {
        let form = PasswordForm {
            old_password: "old".into(),
            new_password: "fresh-pass".into(),
            confirm_password: "fresh-pas".into(),
        };
        assert_eq!(form.request().unwrap_err(), PASSWORDS_DIFFER);
    }

    #[test]
    fn test_matching_confirmation_builds_request() {
        let form = PasswordForm {
            old_password: "old".into(),
            new_password: "fresh-pass".into(),
            confirm_password: "fresh-pass".into(),
        };
        let request = form.request().unwrap();
        assert_eq!(request.old_password, "old");
        assert_eq!(request.new_password, "fresh-pass");
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({"oldPassword": "old", "newPassword": "fresh-pass"})
        );
    }

    #[test]
    fn test_security_form_needs_question_and_answer() {
        let mut form = SecurityForm::default();
        assert!(!form.is_complete());
        form.question = SECURITY_QUESTIONS[0].into();
        form.answer = "  ".into();
        assert!(!form.is_complete());
        form.answer = "Biscuit".into();
        assert!(form.is_complete());
        assert_eq!(form.request().secret_question, SECURITY_QUESTIONS[0]);
    }
}
