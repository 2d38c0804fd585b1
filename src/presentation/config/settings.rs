use std::path::PathBuf;

use config::{Config, ConfigError, File};
use serde::Deserialize;

use crate::application::services::FailurePolicies;
use crate::infrastructure::audio::TranscriptionProvider;
use crate::infrastructure::classifier::ClassifierProvider;

use super::Environment;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub telegram: TelegramSettings,
    pub classifier: ClassifierSettings,
    pub transcription: TranscriptionSettings,
    pub feedback: FeedbackSettings,
    #[serde(default)]
    pub moderation: ModerationSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TelegramSettings {
    pub bot_token: Option<String>,
    pub api_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClassifierSettings {
    pub provider: ClassifierProvider,
    pub model: String,
    pub api_token: Option<String>,
    pub base_url: Option<String>,
    pub toxic_labels: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptionSettings {
    pub provider: TranscriptionProvider,
    pub model: String,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub language: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeedbackSettings {
    pub path: PathBuf,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModerationSettings {
    #[serde(default)]
    pub failure_policy: FailurePolicies,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

impl Settings {
    /// Layers built-in defaults, `appsettings.{env}.toml` (optional) and
    /// `APP_`-prefixed environment variables, e.g. `APP_TELEGRAM__BOT_TOKEN`.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("classifier.provider", "huggingface")?
            .set_default("classifier.model", "cointegrated/rubert-tiny-toxicity")?
            .set_default(
                "classifier.toxic_labels",
                vec!["insult", "obscenity", "threat", "dangerous"],
            )?
            .set_default("transcription.provider", "openai")?
            .set_default("transcription.model", "whisper-1")?
            .set_default("transcription.language", "ru")?
            .set_default("feedback.path", "data/training_data.jsonl")?
            .set_default("logging.level", "info")?
            .set_default("logging.enable_json", false)?
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.as_str())).required(false),
            )
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("classifier.toxic_labels")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}
