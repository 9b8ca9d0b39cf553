use serde::Deserialize;
use std::fmt;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Keys containing this marker were copied from a template and never filled in.
pub const PLACEHOLDER_KEY_MARKER: &str = "YOUR_SUPER_SECRET";

const CONFIG_FILE_PATH: &str = "config.toml";

/// Settings for the Gemini `generateContent` endpoint.
#[derive(Clone)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub api_base: String,
    pub model: String,
    pub timeout: Duration,
}

/// `[gemini]` table of `config.toml`.
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    #[serde(default)]
    gemini: GeminiSection,
}

#[derive(Debug, Default, Deserialize)]
struct GeminiSection {
    api_key: Option<String>,
    api_base: Option<String>,
    model: Option<String>,
    timeout_secs: Option<u64>,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base: DEFAULT_API_BASE.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("api_base", &self.api_base)
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl GeminiConfig {
    /// Defaults, overridden by `config.toml` in the working directory, overridden
    /// by `GEMINI_*` environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        let path = Path::new(CONFIG_FILE_PATH);
        if path.exists() {
            config.apply_file(path);
        }

        config.apply_env(|key| std::env::var(key).ok());
        config
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn with_api_base(mut self, url: impl Into<String>) -> Self {
        self.api_base = url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The API key, if one is set and is not a template placeholder.
    pub fn credential(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty() && !key.contains(PLACEHOLDER_KEY_MARKER))
    }

    fn apply_file(&mut self, path: &Path) {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                log::warn!("Failed to read {}: {}", path.display(), e);
                return;
            }
        };

        let file_config = match toml::from_str::<FileConfig>(&content) {
            Ok(file_config) => file_config,
            Err(e) => {
                log::warn!("Ignoring malformed {}: {}", path.display(), e);
                return;
            }
        };

        let section = file_config.gemini;
        if let Some(api_key) = section.api_key {
            self.api_key = Some(api_key);
        }
        if let Some(api_base) = section.api_base {
            self.api_base = api_base;
        }
        if let Some(model) = section.model {
            self.model = model;
        }
        if let Some(secs) = section.timeout_secs {
            self.timeout = Duration::from_secs(secs);
        }
    }

    fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(api_key) = lookup("GEMINI_API_KEY") {
            self.api_key = Some(api_key);
        }
        if let Some(api_base) = lookup("GEMINI_API_BASE") {
            self.api_base = api_base;
        }
        if let Some(model) = lookup("GEMINI_MODEL") {
            self.model = model;
        }
        if let Some(secs) = lookup("GEMINI_TIMEOUT_SECS").and_then(|v| v.trim().parse().ok()) {
            self.timeout = Duration::from_secs(secs);
        }
    }
}
