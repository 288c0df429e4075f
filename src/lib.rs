pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::container::{FileContainer, MemoryContainer};
pub use adapters::form::StaticForm;
pub use adapters::http::HttpRoadmapService;
pub use config::toml_config::TomlConfig;
pub use crate::core::submitter::RoadmapSubmitter;
pub use domain::model::{FieldIds, RenderStyle, SubmitEvent, SubmitOutcome};
pub use utils::error::{Result, RoadmapError};
