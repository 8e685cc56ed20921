//! Configuration commands for managing marquee settings.
//!
//! - `config show`: Display current configuration
//! - `config get`: Print a single value
//! - `config set` / `config unset`: Change a value
//! - `whoami`: Show the signed-in profile

use owo_colors::OwoColorize;
use serde_json::json;

use super::CommandOutput;
use crate::config::{BASE_URL_ENV, Config};
use crate::error::{MarqueeError, Result};
use crate::session::Session;

/// Reject `user_name` style keys with a dot-notation suggestion
fn validate_config_key(key: &str) -> Result<&str> {
    if let Some(rest) = key.strip_prefix("user_") {
        return Err(MarqueeError::Config(format!(
            "invalid config key '{key}'. Use dot notation: 'user.{rest}'"
        )));
    }
    Ok(key)
}

fn not_configured() -> String {
    "not configured".dimmed().to_string()
}

/// Show current configuration
pub fn cmd_config_show(output_json: bool) -> Result<()> {
    let config = Config::load()?;
    let config_path = Config::config_path()?;
    let effective_base = config.base_url().ok().map(|u| u.to_string());
    let env_override = std::env::var(BASE_URL_ENV).ok().filter(|v| !v.is_empty());

    let json_output = json!({
        "base_url": config.base_url,
        "effective_base_url": effective_base,
        "base_url_from_env": env_override.is_some(),
        "user": config.user.as_ref().map(|u| json!({
            "name": u.name,
            "email": u.email,
            "photo": u.photo,
        })),
        "config_file": config_path.to_string_lossy(),
    });

    let mut text_output = String::new();
    text_output.push_str(&format!("{}\n\n", "Configuration:".cyan().bold()));

    let base = match (&env_override, &config.base_url) {
        (Some(env), _) => format!("{env} {}", format!("(from {BASE_URL_ENV})").dimmed()),
        (None, Some(url)) => url.clone(),
        (None, None) => not_configured(),
    };
    text_output.push_str(&format!("{}: {}\n\n", "base_url".cyan(), base));

    text_output.push_str(&format!("{}:\n", "user".cyan()));
    match &config.user {
        Some(user) => {
            text_output.push_str(&format!("  name: {}\n", user.name));
            text_output.push_str(&format!("  email: {}\n", user.email));
            if let Some(photo) = &user.photo {
                text_output.push_str(&format!("  photo: {photo}\n"));
            }
        }
        None => text_output.push_str(&format!("  {}\n", not_configured())),
    }

    text_output.push('\n');
    text_output.push_str(&format!(
        "{}",
        format!("Config file: {}", config_path.display()).dimmed()
    ));

    CommandOutput::new(json_output)
        .with_text(text_output)
        .print(output_json)
}

/// Get a configuration value
pub fn cmd_config_get(key: &str, output_json: bool) -> Result<()> {
    validate_config_key(key)?;
    let config = Config::load()?;
    let value = config.get(key)?;

    CommandOutput::new(json!({
        "key": key,
        "value": value,
    }))
    .with_text(value.unwrap_or_else(not_configured))
    .print(output_json)
}

/// Set a configuration value
pub fn cmd_config_set(key: &str, value: &str, output_json: bool) -> Result<()> {
    validate_config_key(key)?;
    let mut config = Config::load()?;
    config.set(key, value)?;
    config.save()?;

    CommandOutput::new(json!({
        "action": "config_set",
        "key": key,
        "value": value,
        "success": true,
    }))
    .with_text(format!("Set {} to {}", key.cyan(), value))
    .print(output_json)
}

/// Clear a configuration value
pub fn cmd_config_unset(key: &str, output_json: bool) -> Result<()> {
    validate_config_key(key)?;
    let mut config = Config::load()?;
    config.unset(key)?;
    config.save()?;

    CommandOutput::new(json!({
        "action": "config_unset",
        "key": key,
        "success": true,
    }))
    .with_text(format!("Unset {}", key.cyan()))
    .print(output_json)
}

/// Show who mutating commands will act as
pub fn cmd_whoami(output_json: bool) -> Result<()> {
    let session = Session::from_config(&Config::load()?);

    let text = match (session.display_name(), session.user()) {
        (Some(name), Some(user)) => format!("{} <{}>", name.bold(), user.email),
        _ => format!(
            "{}\n{}",
            "Not signed in".yellow(),
            "Run 'marquee config set user.email <email>' to sign in".dimmed()
        ),
    };

    CommandOutput::new(json!({
        "signed_in": session.is_signed_in(),
        "name": session.user().map(|u| u.name.clone()),
        "email": session.user().map(|u| u.email.clone()),
    }))
    .with_text(text)
    .print(output_json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_config_key_suggests_dot_notation() {
        let err = validate_config_key("user_email").unwrap_err();
        assert!(err.to_string().contains("user.email"));
        assert!(validate_config_key("user.email").is_ok());
        assert!(validate_config_key("base_url").is_ok());
    }
}
