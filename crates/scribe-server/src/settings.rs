use std::net::{AddrParseError, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use config::{Config, Environment, File};
use scribe::config::DEFAULT_MODEL;
use scribe::prompt::DEFAULT_LANGUAGE;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{ConfigError, ENV_PREFIX, to_env_var};

/// Environment variable naming an alternative settings file.
pub const CONFIG_PATH_VAR: &str = "SCRIBE_CONFIG";
const DEFAULT_CONFIG_FILE: &str = "scribe";
const LIST_SEPARATOR: char = ',';

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerSettings {
    pub fn socket_addr(&self) -> Result<SocketAddr, AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }
}

/// Service metadata published on `/api/info`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppSettings {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_description")]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<ContactSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license_info: Option<LicenseSettings>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            title: default_title(),
            description: default_description(),
            summary: None,
            version: default_version(),
            contact: None,
            license_info: None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ContactSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LicenseSettings {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AgentSettings {
    #[serde(default = "default_model")]
    pub default_model: String,
    #[serde(default)]
    pub web_search: bool,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_min_paragraphs")]
    pub min_paragraphs: usize,
    /// Replaces the built-in article instruction. Uses the `{title}` and
    /// `{language}` placeholders.
    #[serde(default)]
    pub prompt_template: Option<String>,
}

impl Default for AgentSettings {
    fn default() -> Self {
        Self {
            default_model: default_model(),
            web_search: false,
            language: default_language(),
            min_paragraphs: default_min_paragraphs(),
            prompt_template: None,
        }
    }
}

#[derive(Clone, Deserialize)]
pub struct ProviderSettings {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default)]
    pub temperature: Option<f64>,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: None,
            timeout_secs: default_timeout_secs(),
            temperature: None,
        }
    }
}

impl ProviderSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl std::fmt::Debug for ProviderSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderSettings")
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("temperature", &self.temperature)
            .finish()
    }
}

/// List fields accept either a real list (settings file) or a
/// comma-separated string (environment).
#[derive(Debug, Clone, Deserialize)]
pub struct CorsSettings {
    #[serde(default = "wildcard", deserialize_with = "comma_list")]
    pub allow_origins: Vec<String>,
    #[serde(default)]
    pub allow_credentials: bool,
    #[serde(default = "wildcard", deserialize_with = "comma_list")]
    pub allow_methods: Vec<String>,
    #[serde(default = "wildcard", deserialize_with = "comma_list")]
    pub allow_headers: Vec<String>,
}

impl Default for CorsSettings {
    fn default() -> Self {
        Self {
            allow_origins: wildcard(),
            allow_credentials: false,
            allow_methods: wildcard(),
            allow_headers: wildcard(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogSettings {
    #[serde(default = "default_log_filter")]
    pub filter: String,
    /// Optional log file written next to stdout. Relative paths are resolved
    /// against `files_path`.
    #[serde(default)]
    pub file: Option<PathBuf>,
    #[serde(default)]
    pub files_path: Option<PathBuf>,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            file: None,
            files_path: None,
        }
    }
}

impl LogSettings {
    pub fn file_path(&self) -> Option<PathBuf> {
        let file = self.file.as_ref()?;
        match &self.files_path {
            Some(base) if file.is_relative() => Some(base.join(file)),
            _ => Some(file.clone()),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub app: AppSettings,
    #[serde(default)]
    pub agent: AgentSettings,
    #[serde(default)]
    pub provider: ProviderSettings,
    #[serde(default)]
    pub cors: CorsSettings,
    #[serde(default)]
    pub log: LogSettings,
}

impl Settings {
    /// Loads `scribe.toml` (or the file named by `SCRIBE_CONFIG`) and then
    /// the `SCRIBE_*` environment on top of it.
    pub fn new() -> Result<Self, ConfigError> {
        let file =
            std::env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_owned());
        Self::load(Some(&file), None)
    }

    /// Builds settings from an explicit set of variables instead of the
    /// process environment. No settings file is read.
    pub fn from_vars<I, K, V>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let vars = vars
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        Self::load(None, Some(vars))
    }

    fn load(
        file: Option<&str>,
        vars: Option<config::Map<String, String>>,
    ) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();
        if let Some(file) = file {
            builder = builder.add_source(File::with_name(file).required(false));
        }

        // Values stay strings here; typed fields are converted on
        // deserialisation so string settings keep their exact text.
        let environment = Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .source(vars);

        let config = builder.add_source(environment).build()?;

        let settings: Self = match config.try_deserialize() {
            Ok(settings) => settings,
            Err(config::ConfigError::NotFound(field)) => {
                return Err(ConfigError::MissingEnvVar {
                    env_var: to_env_var(&field),
                });
            }
            Err(err) => {
                tracing::debug!("Configuration error: {:?}", &err);
                return Err(ConfigError::Other(err));
            }
        };

        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let has_key = self
            .provider
            .api_key
            .as_deref()
            .is_some_and(|key| !key.trim().is_empty());
        if !has_key {
            return Err(ConfigError::MissingEnvVar {
                env_var: to_env_var("provider.api_key"),
            });
        }

        if self.agent.default_model.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                env_var: to_env_var("agent.default_model"),
                reason: "model cannot be empty".to_owned(),
            });
        }

        Ok(())
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_title() -> String {
    "Scribe".to_string()
}

fn default_description() -> String {
    "Generates articles and answers messages with an AI completion provider".to_string()
}

fn default_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

fn default_min_paragraphs() -> usize {
    2
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn wildcard() -> Vec<String> {
    vec!["*".to_string()]
}

fn comma_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum ListOrJoined {
        List(Vec<String>),
        Joined(String),
    }

    let items = match ListOrJoined::deserialize(deserializer)? {
        ListOrJoined::List(items) => items,
        ListOrJoined::Joined(joined) => joined
            .split(LIST_SEPARATOR)
            .map(str::to_owned)
            .collect(),
    };

    Ok(items
        .into_iter()
        .map(|item| item.trim().to_owned())
        .filter(|item| !item.is_empty())
        .collect())
}
