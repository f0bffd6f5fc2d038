use std::path::PathBuf;

use color_eyre::eyre::Result;
use config::ConfigError;
use serde::Deserialize;

use crate::{
    core::state::{
        feed::{DEFAULT_PAGE_SIZE, DEFAULT_SCROLL_THRESHOLD},
        search::DEFAULT_DEBOUNCE_MS,
    },
    presentation::config::keybindings,
    utils,
};

const CONFIG: &str = include_str!("../../.config/config.json5");

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub _data_dir: PathBuf,
    #[serde(default)]
    pub _config_dir: PathBuf,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct FeedConfig {
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Distance from the bottom, in list rows, that triggers the next page
    #[serde(default = "default_scroll_threshold")]
    pub scroll_threshold: usize,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            scroll_threshold: DEFAULT_SCROLL_THRESHOLD,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_scroll_threshold() -> usize {
    DEFAULT_SCROLL_THRESHOLD
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub feed: FeedConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub keybindings: keybindings::KeyBindings,
}

impl Config {
    /// Load the embedded defaults overlaid with any config file found in the config dir
    pub fn new() -> Result<Self, ConfigError> {
        let config_dir = utils::get_config_dir();
        Self::load_from(&config_dir)
    }

    pub fn load_from(config_dir: &std::path::Path) -> Result<Self, ConfigError> {
        let default_config = Self::embedded()?;
        let data_dir = utils::get_data_dir();
        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(CONFIG, config::FileFormat::Json5))
            .set_default("_data_dir", data_dir.display().to_string())?
            .set_default("_config_dir", config_dir.display().to_string())?;

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.json", config::FileFormat::Json),
            ("config.yaml", config::FileFormat::Yaml),
            ("config.toml", config::FileFormat::Toml),
            ("config.ini", config::FileFormat::Ini),
        ];
        for (file, format) in &config_files {
            let path = config_dir.join(file);
            if path.exists() {
                log::info!("Loading config from {}", path.display());
            }
            builder = builder.add_source(config::File::from(path).format(*format).required(false));
        }

        let mut cfg: Self = builder.build()?.try_deserialize()?;

        // Merge default keybindings into user config (flat mapping)
        for (keyseq, action) in default_config.keybindings.iter() {
            cfg.keybindings.entry(keyseq.clone()).or_insert(*action);
        }

        if cfg.feed.page_size == 0 {
            return Err(ConfigError::Message(String::from(
                "feed.page_size must be at least 1",
            )));
        }

        Ok(cfg)
    }

    /// The configuration bundled into the binary
    pub fn embedded() -> Result<Self, ConfigError> {
        json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))
    }
}
