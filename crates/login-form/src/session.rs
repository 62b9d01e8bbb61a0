// File: src/session.rs
// Purpose: An open login form: owns the field values and delivers the result

use thiserror::Error;

use crate::config::FormConfig;
use crate::form_field::FieldAttrs;
use crate::result::{LoginResult, SubmitResult};
use crate::state::FormState;
use crate::validation::{
    resolve_forgot_password, validate_for_submit, FieldErrors, FieldId, ForgotPasswordOutcome,
    ValidationOutcome,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("the login form is already closed")]
    Closed,

    #[error("the forgot-password action is not shown on this form")]
    ForgotPasswordHidden,
}

/// Receives the result when the form closes
///
/// Implemented for any `FnMut(LoginResult)`.
pub trait ResultHandler {
    fn handle(&mut self, result: LoginResult);
}

impl<F> ResultHandler for F
where
    F: FnMut(LoginResult),
{
    fn handle(&mut self, result: LoginResult) {
        self(result)
    }
}

/// Whether the form is still waiting for input after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// Input was rejected; field errors are set
    Open,
    /// A result was delivered
    Closed,
}

/// A login form from opening until it delivers exactly one result
///
/// Dropping a session that is still open counts as dismissing the form and
/// delivers [`LoginResult::Cancelled`].
pub struct LoginSession<H: ResultHandler> {
    config: FormConfig,
    state: FormState,
    handler: H,
    open: bool,
}

impl<H: ResultHandler> LoginSession<H> {
    /// Open a form with empty fields
    pub fn new(config: FormConfig, handler: H) -> Self {
        tracing::debug!(
            email = config.email_enabled(),
            phone = config.phone_enabled(),
            min_password_length = config.min_password_length(),
            "login form opened"
        );
        Self {
            config,
            state: FormState::new(),
            handler,
            open: true,
        }
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.state.field_errors
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Controls currently shown
    pub fn fields(&self) -> Vec<FieldAttrs> {
        self.config.fields()
    }

    pub fn set_email(&mut self, value: impl Into<String>) -> Result<(), SessionError> {
        self.ensure_open()?;
        if self.accepts(FieldId::Email) {
            self.state.email = value.into();
        }
        Ok(())
    }

    pub fn set_phone(&mut self, value: impl Into<String>) -> Result<(), SessionError> {
        self.ensure_open()?;
        if self.accepts(FieldId::Phone) {
            self.state.phone = value.into();
        }
        Ok(())
    }

    pub fn set_password(&mut self, value: impl Into<String>) -> Result<(), SessionError> {
        self.ensure_open()?;
        self.state.password = value.into();
        Ok(())
    }

    /// Toggles are ignored while the remember-me control is hidden
    pub fn set_remember_me(&mut self, checked: bool) -> Result<(), SessionError> {
        self.ensure_open()?;
        if self.config.show_remember_me() {
            self.state.remember_me = checked;
        } else {
            tracing::debug!("remember-me is hidden, ignoring toggle");
        }
        Ok(())
    }

    /// Clear a single field's error, e.g. when the user starts editing it
    pub fn clear_error(&mut self, field: FieldId) -> Result<(), SessionError> {
        self.ensure_open()?;
        self.state.field_errors.clear(field);
        Ok(())
    }

    /// Validate everything and deliver a submit result if acceptable
    pub fn submit(&mut self) -> Result<SessionStatus, SessionError> {
        self.ensure_open()?;

        match validate_for_submit(&self.state, &self.config) {
            ValidationOutcome::Valid => {
                self.state.field_errors.clear_all();
                let result = SubmitResult::from_state(&self.state);
                self.finish(LoginResult::Submitted(result));
                Ok(SessionStatus::Closed)
            }
            ValidationOutcome::Invalid(errors) => {
                self.state.field_errors = errors;
                Ok(SessionStatus::Open)
            }
        }
    }

    /// Resolve a contact and deliver a forgot-password request
    ///
    /// Only the email and phone errors are replaced; a password error from an
    /// earlier submit stays.
    pub fn forgot_password(&mut self) -> Result<SessionStatus, SessionError> {
        self.ensure_open()?;
        if !self.config.show_forgot_password() {
            return Err(SessionError::ForgotPasswordHidden);
        }

        self.state.field_errors.clear(FieldId::Email);
        self.state.field_errors.clear(FieldId::Phone);

        match resolve_forgot_password(&self.state, &self.config) {
            ForgotPasswordOutcome::Resolved(result) => {
                self.finish(LoginResult::ForgotPassword(result));
                Ok(SessionStatus::Closed)
            }
            ForgotPasswordOutcome::Invalid(errors) => {
                self.state.field_errors.merge(errors);
                Ok(SessionStatus::Open)
            }
        }
    }

    /// Dismiss the form without a result
    pub fn cancel(&mut self) -> Result<(), SessionError> {
        self.ensure_open()?;
        self.finish(LoginResult::Cancelled);
        Ok(())
    }

    fn ensure_open(&self) -> Result<(), SessionError> {
        if self.open {
            Ok(())
        } else {
            Err(SessionError::Closed)
        }
    }

    fn accepts(&self, field: FieldId) -> bool {
        let active = self.config.is_active(field);
        if !active {
            tracing::debug!(%field, "field is disabled, ignoring edit");
        }
        active
    }

    fn finish(&mut self, result: LoginResult) {
        self.open = false;
        tracing::info!(outcome = result.tag(), "login form closed");
        self.handler.handle(result);
    }
}

impl<H: ResultHandler> Drop for LoginSession<H> {
    fn drop(&mut self) {
        if self.open {
            self.finish(LoginResult::Cancelled);
        }
    }
}
