use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_MODEL: &str = "meta-llama/llama-4-maverick:free";
pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub ai: AiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiConfig {
    pub model: String,
    pub base_url: String,
    pub api_key: String,
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_yaml::to_string(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn get_config_path() -> String {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        format!("{home}/.sentiq/config.yaml")
    }

    pub fn load_or_default() -> Self {
        let config_path = Self::get_config_path();
        let config_file = Path::new(&config_path);

        if config_file.exists() {
            if let Ok(config) = Self::load_from_file(config_file) {
                return config;
            }
        }
        Self::default()
    }

    pub fn save(&self) -> Result<()> {
        self.save_to_file(Self::get_config_path())
    }

    /// CLI flags win over the config file; the environment fills in a missing
    /// API key last.
    pub fn merge_cli(
        mut self,
        api_key: Option<String>,
        model: Option<String>,
        base_url: Option<String>,
    ) -> Self {
        if let Some(key) = api_key {
            self.ai.api_key = key;
        }
        if let Some(model) = model {
            self.ai.model = model;
        }
        if let Some(url) = base_url {
            self.ai.base_url = url;
        }
        if self.ai.api_key.is_empty() {
            self.ai.api_key = std::env::var("SENTIQ_API_KEY").unwrap_or_default();
        }
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ai: AiConfig {
                model: DEFAULT_MODEL.to_string(),
                base_url: DEFAULT_BASE_URL.to_string(),
                api_key: String::new(),
            },
        }
    }
}
