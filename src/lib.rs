pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

pub use config::{toml_config::TomlConfig, CliConfig};
pub use crate::core::clinic_client::HttpClinicBackend;
pub use crate::core::symptoms::{match_symptoms, Recommendation, Specialist, SymptomReport};
pub use server::{router, serve, AppState};
pub use utils::error::{ClinicError, Result};
