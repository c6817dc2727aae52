use crate::config::types::{Config, CrawlerConfig, OutputConfig, TargetConfig, UserAgentConfig};
use crate::url::authority;
use crate::{ConfigError, ConfigResult};
use url::Url;

/// Validates the entire configuration
///
/// Any error here is fatal and is reported before the first request is made.
pub fn validate(config: &Config) -> ConfigResult<()> {
    validate_target_config(&config.target)?;
    validate_crawler_config(&config.crawler)?;
    validate_user_agent_config(&config.user_agent)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates the target site configuration
fn validate_target_config(config: &TargetConfig) -> ConfigResult<()> {
    if config.host.trim().is_empty() {
        return Err(ConfigError::Validation(
            "target host cannot be empty".to_string(),
        ));
    }

    if !config.path_prefix.starts_with('/') {
        return Err(ConfigError::Validation(format!(
            "path-prefix must start with '/', got '{}'",
            config.path_prefix
        )));
    }

    for ext in &config.excluded_extensions {
        if ext.len() < 2 || !ext.starts_with('.') {
            return Err(ConfigError::Validation(format!(
                "excluded extension must look like '.ext', got '{}'",
                ext
            )));
        }
    }

    let base = Url::parse(&config.base_url).map_err(|e| {
        ConfigError::InvalidUrl(format!("Invalid base-url '{}': {}", config.base_url, e))
    })?;

    if base.scheme() != "http" && base.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "base-url '{}' must use http or https",
            config.base_url
        )));
    }

    if authority(&base) != config.host.to_lowercase() {
        return Err(ConfigError::Validation(format!(
            "base-url host '{}' does not match target host '{}'",
            authority(&base),
            config.host
        )));
    }

    if !base.path().starts_with(&config.path_prefix) {
        return Err(ConfigError::Validation(format!(
            "base-url path '{}' is outside path-prefix '{}'",
            base.path(),
            config.path_prefix
        )));
    }

    Ok(())
}

/// Validates crawler configuration
fn validate_crawler_config(config: &CrawlerConfig) -> ConfigResult<()> {
    // max_depth and request_delay are unsigned; zero is allowed for both

    if config.request_timeout < 1 {
        return Err(ConfigError::Validation(format!(
            "request-timeout must be >= 1 second, got {}",
            config.request_timeout
        )));
    }

    if config.max_retries > 10 {
        return Err(ConfigError::Validation(format!(
            "max-retries must be at most 10, got {}",
            config.max_retries
        )));
    }

    Ok(())
}

/// Validates user agent configuration
fn validate_user_agent_config(config: &UserAgentConfig) -> ConfigResult<()> {
    // Some sites reject empty or default agents
    if config.crawler_name.is_empty() {
        return Err(ConfigError::Validation(
            "crawler-name cannot be empty".to_string(),
        ));
    }

    if !config
        .crawler_name
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ConfigError::Validation(format!(
            "crawler-name must contain only alphanumeric characters, hyphens and underscores, got '{}'",
            config.crawler_name
        )));
    }

    if config.crawler_version.is_empty() {
        return Err(ConfigError::Validation(
            "crawler-version cannot be empty".to_string(),
        ));
    }

    if let Some(contact) = &config.contact_url {
        Url::parse(contact)
            .map_err(|e| ConfigError::InvalidUrl(format!("Invalid contact-url: {}", e)))?;
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> ConfigResult<()> {
    if config.directory.is_empty() {
        return Err(ConfigError::Validation(
            "output directory cannot be empty".to_string(),
        ));
    }

    if config.formats.is_empty() {
        return Err(ConfigError::Validation(
            "at least one output format is required".to_string(),
        ));
    }

    for format in &config.formats {
        if config.file_name(*format).is_empty() {
            return Err(ConfigError::Validation(format!(
                "file name for {:?} output cannot be empty",
                format
            )));
        }
    }

    Ok(())
}
