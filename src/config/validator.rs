use std::net::IpAddr;
use thiserror::Error;

use crate::config::{BackendSettings, ServerSettings, Settings};

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

pub struct ConfigValidator;

impl ConfigValidator {
    pub fn validate(settings: &Settings) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = Self::validate_server(&settings.server) {
            errors.extend(e);
        }

        if let Err(e) = Self::validate_backend(&settings.backend) {
            errors.extend(e);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_server(server: &ServerSettings) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if server.host.is_empty() {
            errors.push(ValidationError::MissingField("server.host".to_string()));
        } else if !is_bindable_host(&server.host) {
            errors.push(ValidationError::InvalidValue {
                field: "server.host".to_string(),
                reason: format!("'{}' is neither an IP address nor a hostname", server.host),
            });
        }

        if server.port == 0 {
            errors.push(ValidationError::InvalidValue {
                field: "server.port".to_string(),
                reason: "Port must be greater than 0".to_string(),
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_backend(backend: &BackendSettings) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if backend.base_url.is_empty() {
            errors.push(ValidationError::MissingField("backend.base_url".to_string()));
        } else if !(backend.base_url.starts_with("http://")
            || backend.base_url.starts_with("https://"))
        {
            errors.push(ValidationError::InvalidValue {
                field: "backend.base_url".to_string(),
                reason: format!("'{}' must start with http:// or https://", backend.base_url),
            });
        }

        if backend.timeout_seconds == 0 {
            errors.push(ValidationError::InvalidValue {
                field: "backend.timeout_seconds".to_string(),
                reason: "Timeout must be greater than 0".to_string(),
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// IPv4/IPv6 literal or an RFC 1123 hostname
fn is_bindable_host(host: &str) -> bool {
    if host.parse::<IpAddr>().is_ok() {
        return true;
    }

    host.len() <= 253
        && host.split('.').all(|label| {
            !label.is_empty()
                && label.len() <= 63
                && !label.starts_with('-')
                && !label.ends_with('-')
                && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        })
}
