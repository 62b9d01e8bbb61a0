//! Login Form Validation
//!
//! Pure predicates used by the login form: email and phone grammars and the
//! password length rule. No form state lives here, only the rules themselves.

pub mod email;
pub mod password;
pub mod phone;

// Re-export all validators
pub use email::*;
pub use password::*;
pub use phone::*;
