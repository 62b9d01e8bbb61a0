// File: src/form_field.rs
// Purpose: Headless description of the controls a configured form shows

use serde::Serialize;
use std::collections::BTreeMap;

use crate::config::FormConfig;

/// Controls the form may show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Control {
    Email,
    Phone,
    Password,
    RememberMe,
    ForgotPassword,
    Submit,
}

impl Control {
    pub fn name(&self) -> &'static str {
        match self {
            Control::Email => "email",
            Control::Phone => "phone",
            Control::Password => "password",
            Control::RememberMe => "remember_me",
            Control::ForgotPassword => "forgot_password",
            Control::Submit => "submit",
        }
    }
}

/// One shown control with its HTML5-style attributes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldAttrs {
    pub control: Control,
    /// Field label for display
    pub label: String,
    /// Native attributes (e.g. "required", "minlength", "type")
    pub html5_attrs: BTreeMap<String, String>,
}

impl FieldAttrs {
    pub fn new(control: Control, label: impl Into<String>, input_type: &str) -> Self {
        let mut html5_attrs = BTreeMap::new();
        html5_attrs.insert("type".to_string(), input_type.to_string());
        Self {
            control,
            label: label.into(),
            html5_attrs,
        }
    }

    fn with_attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.html5_attrs.insert(name.to_string(), value.into());
        self
    }

    pub fn is_required(&self) -> bool {
        self.html5_attrs.contains_key("required")
    }

    /// Render attributes as a string, in name order
    pub fn render_html5_attrs(&self) -> String {
        self.html5_attrs
            .iter()
            .map(|(k, v)| {
                if v.is_empty() {
                    k.clone()
                } else {
                    format!("{}=\"{}\"", k, v)
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl FormConfig {
    /// Controls shown for this configuration, top to bottom
    ///
    /// A contact field is marked required only when it is the sole contact
    /// channel; with both shown either one satisfies the form.
    pub fn fields(&self) -> Vec<FieldAttrs> {
        let messages = self.messages();
        let sole_channel = self.email_enabled() != self.phone_enabled();
        let mut fields = Vec::new();

        if self.email_enabled() {
            let mut email = FieldAttrs::new(Control::Email, &messages.email_label, "email");
            if sole_channel {
                email = email.with_attr("required", "");
            }
            fields.push(email);
        }

        if self.phone_enabled() {
            let mut phone = FieldAttrs::new(Control::Phone, &messages.phone_label, "tel");
            if sole_channel {
                phone = phone.with_attr("required", "");
            }
            fields.push(phone);
        }

        fields.push(
            FieldAttrs::new(Control::Password, &messages.password_label, "password")
                .with_attr("required", "")
                .with_attr("minlength", self.min_password_length().to_string()),
        );

        if self.show_remember_me() {
            fields.push(FieldAttrs::new(
                Control::RememberMe,
                &messages.remember_me_label,
                "checkbox",
            ));
        }

        if self.show_forgot_password() {
            fields.push(FieldAttrs::new(
                Control::ForgotPassword,
                &messages.forgot_password_label,
                "button",
            ));
        }

        fields.push(FieldAttrs::new(Control::Submit, self.submit_label(), "submit"));

        fields
    }
}
