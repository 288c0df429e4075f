use serde::{Deserialize, Serialize};

/// Body of `POST /api/roadmap`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadmapRequest {
    pub goal: String,
    pub learning_style: String,
    pub daily_time: u32,
}

/// One entry of a generated roadmap, as returned by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadmapStep {
    pub step: String,
    pub days_needed: u32,
}

/// Stable element identifiers the form values are read from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldIds {
    pub goal: String,
    pub learning_style: String,
    pub daily_time: String,
}

impl Default for FieldIds {
    fn default() -> Self {
        Self {
            goal: "goal".to_string(),
            learning_style: "learning_style".to_string(),
            daily_time: "daily_time".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum RenderStyle {
    /// `<ul>` of "step - N gün" lines.
    #[default]
    Compact,
    /// Header echoing the request, followed by a list-group.
    Detailed,
}

/// The trigger delivered when the form is submitted.
#[derive(Debug, Default)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// What one submit trigger ended in. The container already reflects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Rendered { steps: usize },
    Failed(crate::utils::error::ErrorKind),
    /// Another submission was still in flight; nothing was sent or rendered.
    Ignored,
}
