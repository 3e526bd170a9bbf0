use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::scoring::{ParseMode, ScoringOptions, DEFAULT_FALLBACK_SCALE};

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct ApiConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub llm: LlmConfig,
    #[serde(default)]
    pub scoring: ScoringConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    pub cors: Option<CorsConfig>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Worker threads, defaults to actix's one per core
    pub workers: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            workers: None,
        }
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct LlmConfig {
    pub provider: String,
    pub base_url: String,
    pub model: String,
    /// No timeout when unset; a request waits as long as the model does
    pub timeout_secs: Option<u64>,
    /// Lower values make ratings more repeatable
    pub temperature: Option<f32>,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: mindscale_llm::providers::OLLAMA.to_string(),
            base_url: mindscale_llm::ollama::client::DEFAULT_BASE_URL.to_string(),
            model: mindscale_llm::models::ollama::LLAMA_3_2.to_string(),
            timeout_secs: None,
            temperature: None,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct ScoringConfig {
    pub parse_mode: ParseMode,
    pub fallback_scale: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            parse_mode: ParseMode::default(),
            fallback_scale: DEFAULT_FALLBACK_SCALE,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

const DEFAULT_CONFIG: &str = r#"
[server]
host = "127.0.0.1"
port = 5000
# workers = 4

[llm]
provider = "ollama"
base_url = "http://localhost:11434"
model = "llama3.2"
# timeout_secs = 120
# temperature = 0.0

[scoring]
# first_number: the first run of digits in the reply is the rating
# bounded: ignore "1-10" / "out of 10" and prefer a value in 1..=10
parse_mode = "first_number"
fallback_scale = 5.0

[logging]
level = "info"

# [cors]
# allowed_origins = ["http://localhost:8501"]
"#;

impl ApiConfig {
    /// Load from the platform config dir, writing a default file on first run
    pub fn load() -> Result<(Self, PathBuf), ConfigError> {
        let config_path = get_config_path();
        let config = Self::load_or_create(&config_path)?;
        Ok((config, config_path))
    }

    /// Load `path`, first writing the commented default config there if missing
    pub fn load_or_create(config_path: &Path) -> Result<Self, ConfigError> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ConfigError::Message(format!("Failed to create config directory: {e}"))
            })?;
        }

        if !config_path.exists() {
            std::fs::write(config_path, DEFAULT_CONFIG).map_err(|e| {
                ConfigError::Message(format!("Failed to write default config: {e}"))
            })?;
        }

        Self::load_from(config_path)
    }

    /// Load from an explicit file; `MINDSCALE__SECTION__KEY` variables override it
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.to_path_buf()))
            .add_source(
                Environment::with_prefix("MINDSCALE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    pub fn scoring_options(&self) -> ScoringOptions {
        ScoringOptions {
            model: self.llm.model.clone(),
            parse_mode: self.scoring.parse_mode,
            fallback_scale: self.scoring.fallback_scale,
            temperature: self.llm.temperature,
        }
    }
}

fn get_config_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        config_dir.join("mindscale/api.toml")
    } else {
        PathBuf::from("api.toml")
    }
}
