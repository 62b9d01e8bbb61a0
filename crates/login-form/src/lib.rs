// File: src/lib.rs
// Purpose: Configurable login form: option resolution, input validation and typed results

pub mod config;
pub mod form_field;
pub mod messages;
pub mod result;
pub mod session;
pub mod state;
pub mod validation;

// Re-export core types
pub use config::{FormConfig, FormOptions, DEFAULT_MIN_PASSWORD_LENGTH};
pub use form_field::{Control, FieldAttrs};
pub use messages::Messages;
pub use result::{ContactType, ForgotPasswordResult, LoginResult, SubmitResult};
pub use session::{LoginSession, ResultHandler, SessionError, SessionStatus};
pub use state::FormState;
pub use validation::{
    resolve_forgot_password, validate_for_submit, FieldErrors, FieldId, ForgotPasswordOutcome,
    ValidationOutcome,
};

// Re-export the grammar checks for callers that validate ahead of submit
pub use login_form_validation::{is_valid_email, is_valid_phone, MIN_PHONE_LENGTH};
