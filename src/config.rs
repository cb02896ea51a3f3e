use std::net::SocketAddr;
use std::path::PathBuf;

use serde::Deserialize;

/// Server configuration, read from the process environment.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub openai_api_key: Option<String>,

    #[serde(default = "default_base_url")]
    pub openai_base_url: String,

    #[serde(default = "default_translation_model")]
    pub translation_model: String,

    #[serde(default = "default_speech_model")]
    pub speech_model: String,

    #[serde(default)]
    pub static_dir: Option<PathBuf>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_translation_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_speech_model() -> String {
    "tts-1".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            openai_api_key: None,
            openai_base_url: default_base_url(),
            translation_model: default_translation_model(),
            speech_model: default_speech_model(),
            static_dir: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::from_env()
    }

    /// The configured key, treating an empty value as unset.
    pub fn api_key(&self) -> Option<&str> {
        self.openai_api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }

    pub fn addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }
}
