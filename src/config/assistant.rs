//! Chat assistant configuration

use crate::assistant::gemini::DEFAULT_API_BASE;
use crate::assistant::prompt::{DEFAULT_MODEL, DEFAULT_TEMPERATURE};
use crate::assistant::AssistantSettings;
use serde::Deserialize;

/// Assistant configuration
#[derive(Debug, Clone)]
pub struct AssistantConfig {
    /// Model identifier
    pub model: String,
    /// Base URL of the generative-language API
    pub api_base: String,
    /// Sampling temperature
    pub temperature: f32,
    /// API key; `None` leaves the assistant offline
    pub api_key: Option<String>,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            api_key: None,
        }
    }
}

/// Assistant settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileAssistant {
    pub model: Option<String>,
    pub api_base: Option<String>,
    pub temperature: Option<f32>,
    pub api_key: Option<String>,
}

impl AssistantConfig {
    /// Create from file config; env values win over the file
    pub fn from_file(
        file: Option<FileAssistant>,
        env_api_key: Option<String>,
        env_model: Option<String>,
    ) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            model: env_model.or(file.model).unwrap_or(defaults.model),
            api_base: file.api_base.unwrap_or(defaults.api_base),
            temperature: file
                .temperature
                .filter(|t| t.is_finite() && *t >= 0.0)
                .unwrap_or(defaults.temperature),
            api_key: env_api_key.or(file.api_key.filter(|k| !k.trim().is_empty())),
        }
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    /// Transport-independent settings for the assistant
    pub fn settings(&self) -> AssistantSettings {
        AssistantSettings {
            model: self.model.clone(),
            temperature: self.temperature,
        }
    }
}
