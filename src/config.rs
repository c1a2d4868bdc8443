// src/config.rs
//
// Runtime configuration
//
// Defaults mirror the hosted catalog: data under the platform data
// directory, simulated network latency on, open moderation.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::{AppError, AppResult};

/// Storage key holding the whole diagram document
pub const DIAGRAMS_KEY: &str = "bacteria-diagrams-data";

/// Storage key holding the signed-in user
pub const SESSION_KEY: &str = "user";

const ENV_DATA_DIR: &str = "DIAGRAM_ENCYCLOPEDIA_DATA_DIR";
const ENV_LATENCY: &str = "DIAGRAM_ENCYCLOPEDIA_LATENCY";
const ENV_STRICT_MODERATION: &str = "DIAGRAM_ENCYCLOPEDIA_STRICT_MODERATION";

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory holding the SQLite key-value database
    pub data_dir: PathBuf,
    pub diagrams_key: String,
    pub session_key: String,
    pub pool_size: u32,
    pub latency: LatencyProfile,
    /// Require the admin role for approve/delete/reset
    pub strict_moderation: bool,
}

/// Artificial delay applied before each façade operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatencyProfile {
    pub list_approved: Duration,
    pub get_by_id: Duration,
    pub by_category: Duration,
    pub search: Duration,
    pub like: Duration,
    pub comment: Duration,
    pub delete_comment: Duration,
    pub upload: Duration,
    pub approve: Duration,
    pub delete_diagram: Duration,
    pub list_unapproved: Duration,
    pub login: Duration,
    pub register: Duration,
}

impl Default for LatencyProfile {
    fn default() -> Self {
        let ms = Duration::from_millis;
        Self {
            list_approved: ms(500),
            get_by_id: ms(300),
            by_category: ms(400),
            search: ms(600),
            like: ms(200),
            comment: ms(300),
            delete_comment: ms(200),
            upload: ms(800),
            approve: ms(300),
            delete_diagram: ms(300),
            list_unapproved: ms(400),
            login: ms(500),
            register: ms(700),
        }
    }
}

impl LatencyProfile {
    /// Every operation resolves immediately
    pub fn none() -> Self {
        let zero = Duration::ZERO;
        Self {
            list_approved: zero,
            get_by_id: zero,
            by_category: zero,
            search: zero,
            like: zero,
            comment: zero,
            delete_comment: zero,
            upload: zero,
            approve: zero,
            delete_diagram: zero,
            list_unapproved: zero,
            login: zero,
            register: zero,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        let data_dir = dirs::data_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join("diagram-encyclopedia");

        Self {
            data_dir,
            diagrams_key: DIAGRAMS_KEY.to_string(),
            session_key: SESSION_KEY.to_string(),
            pool_size: 4,
            latency: LatencyProfile::default(),
            strict_moderation: false,
        }
    }
}

impl AppConfig {
    /// Defaults overridden by `DIAGRAM_ENCYCLOPEDIA_*` environment variables
    pub fn from_env() -> AppResult<Self> {
        let mut config = Self::default();

        if let Ok(dir) = std::env::var(ENV_DATA_DIR) {
            if dir.trim().is_empty() {
                return Err(AppError::Validation(format!("{} is empty", ENV_DATA_DIR)));
            }
            config.data_dir = PathBuf::from(dir);
        }

        if let Ok(value) = std::env::var(ENV_LATENCY) {
            if is_off(&value) {
                config.latency = LatencyProfile::none();
            }
        }

        if let Ok(value) = std::env::var(ENV_STRICT_MODERATION) {
            config.strict_moderation = !is_off(&value);
        }

        Ok(config)
    }

    /// Ephemeral configuration for tests: no latency, throwaway directory
    pub fn for_tests(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            latency: LatencyProfile::none(),
            ..Self::default()
        }
    }

    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join("encyclopedia.db")
    }
}

fn is_off(value: &str) -> bool {
    matches!(value.trim().to_lowercase().as_str(), "0" | "off" | "false" | "no")
}
