use anyhow::Result;
use colored::Colorize;
use login_form::FormConfig;

pub fn execute(config: &FormConfig) -> Result<()> {
    println!("{}", config.title().green().bold());
    println!("{}", config.subtitle());
    if let Some(logo) = config.logo_ref() {
        println!("Logo: {}", logo.cyan());
    }
    println!();
    println!("Minimum password length: {}", config.min_password_length());
    println!();

    for field in config.fields() {
        println!(
            "  {:<16} {:<20} {}",
            field.control.name().cyan(),
            field.label,
            field.render_html5_attrs().dimmed()
        );
    }

    Ok(())
}
