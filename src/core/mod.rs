pub mod render;
pub mod submitter;

pub use crate::domain::model::{RoadmapRequest, RoadmapStep};
pub use crate::domain::ports::{ConfigProvider, FormSource, OutputContainer, RoadmapService};
pub use crate::utils::error::Result;
