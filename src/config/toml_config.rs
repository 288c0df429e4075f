use crate::core::ConfigProvider;
use crate::domain::model::{FieldIds, RenderStyle};
use crate::utils::error::{Result, RoadmapError};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;
use std::time::Duration;

const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub service: ServiceConfig,
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub form: FieldIds,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub base_url: String,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenderConfig {
    #[serde(default)]
    pub style: RenderStyle,
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("static pattern is valid"))
}

impl TomlConfig {
    /// Loads and env-substitutes a TOML config file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| RoadmapError::ConfigValidation {
                field: "config_file".to_string(),
                message: format!("cannot read {}: {}", path.display(), e),
            })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| RoadmapError::ConfigValidation {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unset variables stay verbatim.
    fn substitute_env_vars(content: &str) -> String {
        env_var_pattern()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn timeout_seconds(&self) -> u64 {
        self.service
            .timeout_seconds
            .unwrap_or(DEFAULT_TIMEOUT_SECONDS)
    }
}

impl ConfigProvider for TomlConfig {
    fn service_url(&self) -> &str {
        &self.service.base_url
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds())
    }

    fn render_style(&self) -> RenderStyle {
        self.render.style
    }

    fn field_ids(&self) -> &FieldIds {
        &self.form
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("service.base_url", &self.service.base_url)?;
        validation::validate_positive_number("service.timeout_seconds", self.timeout_seconds(), 1)?;
        validation::validate_non_empty_string("form.goal", &self.form.goal)?;
        validation::validate_non_empty_string("form.learning_style", &self.form.learning_style)?;
        validation::validate_non_empty_string("form.daily_time", &self.form.daily_time)?;
        Ok(())
    }
}
