pub mod toml_config;

use crate::core::{ClinicInfo, ConfigProvider};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "https://medical-backend-16ms.onrender.com";
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
pub const DEFAULT_RETRY_ATTEMPTS: u32 = 2;
pub const DEFAULT_RETRY_DELAY_SECONDS: u64 = 1;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "clinic-site")]
#[command(about = "Backend for the clinic website: symptom checker, schedules, gallery and feedback")]
pub struct CliConfig {
    #[arg(long, env = "CLINIC_API_BASE_URL", default_value = DEFAULT_API_BASE_URL)]
    pub api_base_url: String,

    #[arg(long, help = "Feedback endpoint (defaults to <api-base-url>/feedback/)")]
    pub feedback_endpoint: Option<String>,

    #[arg(long, env = "CLINIC_BIND", default_value = DEFAULT_BIND_ADDRESS)]
    pub bind: String,

    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECONDS)]
    pub timeout_seconds: u64,

    #[arg(long, default_value_t = DEFAULT_RETRY_ATTEMPTS)]
    pub retry_attempts: u32,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    fn feedback_endpoint(&self) -> String {
        self.feedback_endpoint
            .clone()
            .unwrap_or_else(|| default_feedback_endpoint(&self.api_base_url))
    }

    fn bind_address(&self) -> &str {
        &self.bind
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    fn retry_attempts(&self) -> u32 {
        self.retry_attempts
    }

    fn retry_delay(&self) -> Duration {
        Duration::from_secs(DEFAULT_RETRY_DELAY_SECONDS)
    }

    fn clinic_info(&self) -> ClinicInfo {
        ClinicInfo::default()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("api_base_url", &self.api_base_url)?;
        if let Some(endpoint) = &self.feedback_endpoint {
            validation::validate_url("feedback_endpoint", endpoint)?;
        }
        validation::validate_socket_addr("bind", &self.bind)?;
        validation::validate_positive_number("timeout_seconds", self.timeout_seconds, 1)?;
        validation::validate_range("retry_attempts", self.retry_attempts, 0, 10)?;
        Ok(())
    }
}

pub fn default_feedback_endpoint(base_url: &str) -> String {
    format!("{}/feedback/", base_url.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let config = CliConfig::parse_from(["clinic-site"]);
        assert_eq!(config.bind, DEFAULT_BIND_ADDRESS);
        assert_eq!(config.retry_attempts, DEFAULT_RETRY_ATTEMPTS);
        assert_eq!(
            config.feedback_endpoint(),
            "https://medical-backend-16ms.onrender.com/feedback/"
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_cli_overrides() {
        let config = CliConfig::parse_from([
            "clinic-site",
            "--api-base-url",
            "http://localhost:8000/",
            "--feedback-endpoint",
            "http://localhost:8000/feedback/",
            "--bind",
            "127.0.0.1:8080",
            "--timeout-seconds",
            "0",
        ]);
        assert_eq!(config.request_timeout(), Duration::from_secs(0));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_default_feedback_endpoint_trims_slash() {
        assert_eq!(
            default_feedback_endpoint("http://localhost:8000/"),
            "http://localhost:8000/feedback/"
        );
    }
}
