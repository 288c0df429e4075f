use crate::domain::model::{FieldIds, RenderStyle, RoadmapRequest, RoadmapStep};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Read side of the roadmap form.
pub trait FormSource: Send + Sync {
    /// Current value of the element with the given id, `None` if it does not exist.
    fn value(&self, id: &str) -> Option<String>;

    fn set_submit_enabled(&self, _enabled: bool) {}
}

/// The region rendered roadmaps and error blocks are written into.
pub trait OutputContainer: Send + Sync {
    /// Replaces the entire contents; nothing from the previous render survives.
    fn replace_contents(&self, html: &str) -> Result<()>;
}

#[async_trait]
pub trait RoadmapService: Send + Sync {
    async fn generate(&self, request: &RoadmapRequest) -> Result<Vec<RoadmapStep>>;
}

pub trait ConfigProvider: Send + Sync {
    fn service_url(&self) -> &str;
    fn request_timeout(&self) -> Duration;
    fn render_style(&self) -> RenderStyle;
    fn field_ids(&self) -> &FieldIds;
}
