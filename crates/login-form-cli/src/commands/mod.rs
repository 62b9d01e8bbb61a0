pub mod config;
pub mod forgot;
pub mod submit;

use anyhow::Result;
use colored::Colorize;
use login_form::{FieldErrors, FormConfig, FormOptions, LoginResult, LoginSession, ResultHandler};
use std::path::Path;

use crate::ContactArgs;

pub fn load_config(path: &Path) -> Result<FormConfig> {
    let options = FormOptions::load(path)?;
    tracing::debug!(path = %path.display(), "options loaded");
    Ok(options.resolve())
}

/// Type the contact arguments into the form
pub fn enter_contact<H: ResultHandler>(
    session: &mut LoginSession<H>,
    contact: &ContactArgs,
) -> Result<()> {
    session.set_email(contact.email.as_str())?;
    session.set_phone(contact.phone.as_str())?;
    Ok(())
}

/// Print the delivered result, or the field errors when the form stayed open.
/// Returns whether the input was accepted.
pub fn report(delivered: Option<LoginResult>, errors: Option<FieldErrors>) -> Result<bool> {
    if let Some(errors) = errors {
        eprintln!("{}", "Input rejected".red().bold());
        for (field, message) in rejection_lines(&errors) {
            eprintln!("  {} {}", format!("{}:", field).yellow(), message);
        }
        return Ok(false);
    }

    if let Some(result) = delivered {
        println!("{}", serde_json::to_string_pretty(&result)?);
    }
    Ok(true)
}

/// One `(label, reason)` pair per rejected field. A rejection without field
/// errors only happens when the form has no contact channel enabled.
fn rejection_lines(errors: &FieldErrors) -> Vec<(String, String)> {
    if errors.is_empty() {
        return vec![(
            "contact".to_string(),
            "no contact channel is enabled on this form".to_string(),
        )];
    }
    errors
        .iter()
        .map(|(field, message)| (field.to_string(), message.to_string()))
        .collect()
}
