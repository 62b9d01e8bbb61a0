// File: src/config.rs
// Purpose: Form options (as supplied by the caller) and the resolved form configuration

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::messages::Messages;
use crate::validation::FieldId;

pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 6;

/// Options supplied by whoever opens the form
///
/// Every option is optional; absent ones take their default when resolved
/// into a [`FormConfig`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormOptions {
    /// Resource identifier of the logo, shown when present
    #[serde(default)]
    pub logo_ref: Option<String>,

    #[serde(default)]
    pub title_text: Option<String>,

    #[serde(default)]
    pub subtitle_text: Option<String>,

    #[serde(default)]
    pub login_button_text: Option<String>,

    #[serde(default = "default_true")]
    pub show_remember_me: bool,

    #[serde(default = "default_true")]
    pub show_forgot_password: bool,

    /// Values below 1 are clamped to 1
    #[serde(default = "default_min_password_length")]
    pub min_password_length: i64,

    #[serde(default = "default_true")]
    pub enable_email: bool,

    #[serde(default = "default_true")]
    pub enable_phone: bool,

    #[serde(default)]
    pub messages: Messages,
}

fn default_true() -> bool {
    true
}

fn default_min_password_length() -> i64 {
    DEFAULT_MIN_PASSWORD_LENGTH as i64
}

impl Default for FormOptions {
    fn default() -> Self {
        Self {
            logo_ref: None,
            title_text: None,
            subtitle_text: None,
            login_button_text: None,
            show_remember_me: true,
            show_forgot_password: true,
            min_password_length: default_min_password_length(),
            enable_email: true,
            enable_phone: true,
            messages: Messages::default(),
        }
    }
}

impl FormOptions {
    /// Load options from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist or is empty, return default options
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read options file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let options: FormOptions = toml::from_str(&content)
            .with_context(|| format!("Failed to parse options file: {:?}", path))?;

        Ok(options)
    }

    /// Resolve into the effective configuration
    pub fn resolve(self) -> FormConfig {
        FormConfig::resolve(self)
    }
}

/// Effective form configuration
///
/// Built once per form session and read-only afterwards. It alone decides
/// which controls are shown and which validation branches run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormConfig {
    logo_ref: Option<String>,
    title: String,
    subtitle: String,
    submit_label: String,
    show_remember_me: bool,
    show_forgot_password: bool,
    email_enabled: bool,
    phone_enabled: bool,
    min_password_length: usize,
    messages: Messages,
}

impl FormConfig {
    /// Apply defaults to every absent option
    pub fn resolve(options: FormOptions) -> Self {
        let min_password_length = if options.min_password_length < 1 {
            tracing::warn!(
                requested = options.min_password_length,
                "min_password_length must be at least 1, clamping to 1"
            );
            1
        } else {
            usize::try_from(options.min_password_length).unwrap_or(usize::MAX)
        };

        if !options.enable_email && !options.enable_phone {
            tracing::warn!("email and phone are both disabled, no contact will be validated");
        }

        let FormOptions {
            logo_ref,
            title_text,
            subtitle_text,
            login_button_text,
            show_remember_me,
            show_forgot_password,
            enable_email,
            enable_phone,
            messages,
            ..
        } = options;

        Self {
            logo_ref,
            title: title_text.unwrap_or_else(|| messages.title.clone()),
            subtitle: subtitle_text.unwrap_or_else(|| messages.subtitle.clone()),
            submit_label: login_button_text.unwrap_or_else(|| messages.login_button.clone()),
            show_remember_me,
            show_forgot_password,
            email_enabled: enable_email,
            phone_enabled: enable_phone,
            min_password_length,
            messages,
        }
    }

    pub fn logo_ref(&self) -> Option<&str> {
        self.logo_ref.as_deref()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn subtitle(&self) -> &str {
        &self.subtitle
    }

    pub fn submit_label(&self) -> &str {
        &self.submit_label
    }

    pub fn show_remember_me(&self) -> bool {
        self.show_remember_me
    }

    pub fn show_forgot_password(&self) -> bool {
        self.show_forgot_password
    }

    pub fn email_enabled(&self) -> bool {
        self.email_enabled
    }

    pub fn phone_enabled(&self) -> bool {
        self.phone_enabled
    }

    /// Always at least 1
    pub fn min_password_length(&self) -> usize {
        self.min_password_length
    }

    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    /// Whether a field is shown and validated. The password always is.
    pub fn is_active(&self, field: FieldId) -> bool {
        match field {
            FieldId::Email => self.email_enabled,
            FieldId::Phone => self.phone_enabled,
            FieldId::Password => true,
        }
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self::resolve(FormOptions::default())
    }
}

impl From<FormOptions> for FormConfig {
    fn from(options: FormOptions) -> Self {
        Self::resolve(options)
    }
}
