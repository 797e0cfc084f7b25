use crate::config::{
    default_feedback_endpoint, DEFAULT_RETRY_ATTEMPTS, DEFAULT_RETRY_DELAY_SECONDS,
    DEFAULT_TIMEOUT_SECONDS,
};
use crate::core::{ClinicInfo, ConfigProvider, OperatingHours};
use crate::utils::error::{ClinicError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub server: ServerConfig,
    pub backend: BackendConfig,
    pub clinic: Option<ClinicConfig>,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub bind: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    pub base_url: String,
    pub feedback_endpoint: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub retry_attempts: Option<u32>,
    pub retry_delay_seconds: Option<u64>,
}

/// Overrides for the published clinic details; unset fields keep their defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClinicConfig {
    pub name: Option<String>,
    pub location: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub operating_hours: Option<Vec<OperatingHours>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub log_level: Option<String>,
    pub json_logs: Option<bool>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ClinicError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ClinicError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value. An unset variable is an error.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ClinicError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let mut unset = Vec::new();
        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| {
                unset.push(var_name.to_string());
                String::new()
            })
        });

        if let Some(var_name) = unset.first() {
            return Err(ClinicError::MissingConfigError {
                field: format!("environment variable {}", var_name),
            });
        }

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_socket_addr("server.bind", &self.server.bind)?;
        validation::validate_url("backend.base_url", &self.backend.base_url)?;

        if let Some(endpoint) = &self.backend.feedback_endpoint {
            validation::validate_url("backend.feedback_endpoint", endpoint)?;
        }
        if let Some(timeout) = self.backend.timeout_seconds {
            validation::validate_positive_number("backend.timeout_seconds", timeout, 1)?;
        }
        if let Some(attempts) = self.backend.retry_attempts {
            validation::validate_range("backend.retry_attempts", attempts, 0, 10)?;
        }
        if let Some(delay) = self.backend.retry_delay_seconds {
            validation::validate_range("backend.retry_delay_seconds", delay, 0, 60)?;
        }

        if let Some(clinic) = &self.clinic {
            for (field, value) in [
                ("clinic.name", &clinic.name),
                ("clinic.location", &clinic.location),
                ("clinic.phone", &clinic.phone),
            ] {
                if let Some(value) = value {
                    validation::validate_non_empty_string(field, value)?;
                }
            }
        }

        if let Some(level) = self.log_level() {
            let valid_levels = ["trace", "debug", "info", "warn", "error"];
            if !valid_levels.contains(&level) {
                return Err(ClinicError::InvalidConfigValueError {
                    field: "monitoring.log_level".to_string(),
                    value: level.to_string(),
                    reason: format!("Valid levels: {}", valid_levels.join(", ")),
                });
            }
        }

        Ok(())
    }

    pub fn log_level(&self) -> Option<&str> {
        self.monitoring.as_ref().and_then(|m| m.log_level.as_deref())
    }

    pub fn json_logs(&self) -> bool {
        self.monitoring
            .as_ref()
            .and_then(|m| m.json_logs)
            .unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn api_base_url(&self) -> &str {
        &self.backend.base_url
    }

    fn feedback_endpoint(&self) -> String {
        self.backend
            .feedback_endpoint
            .clone()
            .unwrap_or_else(|| default_feedback_endpoint(&self.backend.base_url))
    }

    fn bind_address(&self) -> &str {
        &self.server.bind
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(
            self.backend
                .timeout_seconds
                .unwrap_or(DEFAULT_TIMEOUT_SECONDS),
        )
    }

    fn retry_attempts(&self) -> u32 {
        self.backend.retry_attempts.unwrap_or(DEFAULT_RETRY_ATTEMPTS)
    }

    fn retry_delay(&self) -> Duration {
        Duration::from_secs(
            self.backend
                .retry_delay_seconds
                .unwrap_or(DEFAULT_RETRY_DELAY_SECONDS),
        )
    }

    fn clinic_info(&self) -> ClinicInfo {
        let mut info = ClinicInfo::default();
        let Some(overrides) = self.clinic.clone() else {
            return info;
        };

        if let Some(name) = overrides.name {
            info.name = name;
        }
        if let Some(location) = overrides.location {
            info.location = location;
        }
        if let Some(address) = overrides.address {
            info.address = address;
        }
        if let Some(phone) = overrides.phone {
            info.phone = phone;
        }
        if let Some(email) = overrides.email {
            info.email = email;
        }
        if let Some(hours) = overrides.operating_hours {
            info.operating_hours = hours;
        }
        info
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
