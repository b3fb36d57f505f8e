//! Login screen state machine: sign in, or recover a password through the
//! security question (`login -> forgot -> reset -> login`).

use crate::api::{AdminApi, Credentials, ResetPasswordRequest};
use crate::http::{TokenStore, Transport};
use crate::session::login_error_message;

pub const QUESTION_NOT_FOUND: &str = "Security question not found for this email";
pub const RESET_FAILED: &str = "Failed to reset password";
pub const RESET_SUCCEEDED: &str = "Password reset successfully! You can now login.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Login,
    Forgot,
    Reset,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecoveryFlow {
    pub mode: Mode,
    pub email: String,
    pub password: String,
    pub question: String,
    pub secret_answer: String,
    pub new_password: String,
    pub loading: bool,
    pub error: Option<String>,
    success: Option<String>,
}

/// Result of submitting the current form.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    SignedIn,
    Stay(RecoveryFlow),
}

impl RecoveryFlow {
    /// A fresh form in `mode` with the sign-in fields filled.
    pub fn new(mode: Mode, email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            mode,
            email: email.into(),
            password: password.into(),
            ..Self::default()
        }
    }

    /// Switch forms. Any mode change drops the current error.
    pub fn switch(&mut self, mode: Mode) {
        self.mode = mode;
        self.error = None;
    }

    /// Success banner, only visible on the login form.
    pub fn banner(&self) -> Option<&str> {
        match self.mode {
            Mode::Login => self.success.as_deref(),
            _ => None,
        }
    }

    /// Mark a request in flight. The submit button stays disabled until the
    /// matching `submit` returns.
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Submit the form for the current mode and return the next state.
    pub async fn submit<T: Transport, S: TokenStore>(mut self, api: &AdminApi<T, S>) -> Step {
        self.begin();
        match self.mode {
            Mode::Login => {
                let credentials = Credentials {
                    email: self.email.clone(),
                    password: self.password.clone(),
                };
                match api.login(&credentials).await {
                    Ok(()) => return Step::SignedIn,
                    Err(err) => {
                        tracing::warn!(code = %err.code(), "login failed");
                        self.error = Some(login_error_message(&err));
                    }
                }
            }
            Mode::Forgot => match api.secret_question(&self.email).await {
                Ok(question) => {
                    self.question = question;
                    self.switch(Mode::Reset);
                }
                Err(err) => {
                    tracing::warn!(code = %err.code(), "security question lookup failed");
                    self.error = Some(err.message_or(QUESTION_NOT_FOUND));
                }
            },
            Mode::Reset => {
                let request = ResetPasswordRequest {
                    email: self.email.clone(),
                    secret_answer: self.secret_answer.clone(),
                    new_password: self.new_password.clone(),
                };
                match api.reset_password(&request).await {
                    Ok(()) => {
                        self.success = Some(RESET_SUCCEEDED.to_string());
                        self.password.clear();
                        self.switch(Mode::Login);
                    }
                    Err(err) => {
                        tracing::warn!(code = %err.code(), "password reset failed");
                        self.error = Some(err.message_or(RESET_FAILED));
                    }
                }
            }
        }
        self.loading = false;
        Step::Stay(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_switch_clears_error() {
        let mut flow = RecoveryFlow {
            error: Some("Invalid credentials".into()),
            ..Default::default()
        };
        flow.switch(Mode::Forgot);
        assert_eq!(flow.mode, Mode::Forgot);
        assert_eq!(flow.error, None);
    }

    #[test]
    fn test_banner_only_on_login() {
        let mut flow = RecoveryFlow {
            success: Some(RESET_SUCCEEDED.into()),
            ..Default::default()
        };
        assert_eq!(flow.banner(), Some(RESET_SUCCEEDED));
        flow.switch(Mode::Forgot);
        assert_eq!(flow.banner(), None);
    }

    #[test]
    fn test_new_fills_sign_in_fields_only() {
        let flow = RecoveryFlow::new(Mode::Reset, "admin@kofidesign.com", "secret");
        assert_eq!(flow.mode, Mode::Reset);
        assert_eq!(flow.email, "admin@kofidesign.com");
        assert_eq!(flow.password, "secret");
        assert!(flow.question.is_empty());
        assert!(!flow.loading);
        assert_eq!(flow.error, None);
        assert_eq!(RecoveryFlow::new(Mode::Login, "a", "b").banner(), None);
    }

    #[test]
    fn test_begin_sets_loading() {
        let mut flow = RecoveryFlow {
            error: Some("old".into()),
            ..Default::default()
        };
        flow.begin();
        assert!(flow.loading);
        assert!(flow.error.is_none());
    }
}
