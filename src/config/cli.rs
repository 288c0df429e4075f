use crate::core::ConfigProvider;
use crate::domain::model::{FieldIds, RenderStyle};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Parser)]
#[command(name = "roadmap")]
#[command(about = "Request a learning roadmap and render it as HTML")]
pub struct CliConfig {
    /// What you want to learn
    #[arg(long)]
    pub goal: String,

    /// Preferred learning style (e.g. visual, reading, hands-on)
    #[arg(long)]
    pub learning_style: String,

    /// Hours per day available for study; must be a non-negative whole number
    #[arg(long)]
    pub daily_time: String,

    /// Origin of the roadmap service; requests go to <url>/api/roadmap
    #[arg(long, env = "ROADMAP_SERVICE_URL", default_value = "http://localhost:10000")]
    pub service_url: String,

    #[arg(long, env = "ROADMAP_TIMEOUT_SECONDS", default_value = "30")]
    pub timeout_seconds: u64,

    #[arg(long, value_enum, default_value_t = RenderStyle::Compact)]
    pub style: RenderStyle,

    /// TOML file overriding service, render and form settings
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write the rendered fragment to this file instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[arg(skip)]
    pub field_ids: FieldIds,
}

impl ConfigProvider for CliConfig {
    fn service_url(&self) -> &str {
        &self.service_url
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    fn render_style(&self) -> RenderStyle {
        self.style
    }

    fn field_ids(&self) -> &FieldIds {
        &self.field_ids
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("service_url", &self.service_url)?;
        validation::validate_positive_number("timeout_seconds", self.timeout_seconds, 1)?;
        Ok(())
    }
}
