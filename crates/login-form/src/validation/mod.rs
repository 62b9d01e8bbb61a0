// File: src/validation/mod.rs
// Purpose: Field identifiers, per-field errors and validation outcomes

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::result::ForgotPasswordResult;

pub mod forgot;
pub mod submit;

pub use forgot::resolve_forgot_password;
pub use submit::validate_for_submit;

/// Input fields that can carry an error
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldId {
    Email,
    Phone,
    Password,
}

impl FieldId {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldId::Email => "email",
            FieldId::Phone => "phone",
            FieldId::Password => "password",
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// At most one message per field
///
/// Setting a field replaces its previous message. Clearing a field never
/// touches the others.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors {
    errors: BTreeMap<FieldId, String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the error for a field, replacing any earlier one
    pub fn set(&mut self, field: FieldId, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    /// Clear one field's error
    pub fn clear(&mut self, field: FieldId) {
        self.errors.remove(&field);
    }

    pub fn clear_all(&mut self) {
        self.errors.clear();
    }

    /// Get the error for a specific field
    pub fn get(&self, field: FieldId) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: FieldId) -> bool {
        self.errors.contains_key(&field)
    }

    /// Check if there are any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Errors in field order: email, phone, password
    pub fn iter(&self) -> impl Iterator<Item = (FieldId, &str)> {
        self.errors.iter().map(|(field, message)| (*field, message.as_str()))
    }

    /// Copy every error from `other`, overwriting per field
    pub fn merge(&mut self, other: FieldErrors) {
        self.errors.extend(other.errors);
    }
}

/// Result of a submit validation pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Valid,
    Invalid(FieldErrors),
}

impl ValidationOutcome {
    pub fn from_errors(errors: FieldErrors) -> Self {
        if errors.has_errors() {
            Self::Invalid(errors)
        } else {
            Self::Valid
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Errors of the pass; empty when valid
    pub fn errors(&self) -> FieldErrors {
        match self {
            Self::Valid => FieldErrors::new(),
            Self::Invalid(errors) => errors.clone(),
        }
    }
}

/// Result of a forgot-password pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ForgotPasswordOutcome {
    Resolved(ForgotPasswordResult),
    Invalid(FieldErrors),
}

impl ForgotPasswordOutcome {
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }
}
