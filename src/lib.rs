pub mod detection;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod selection;
pub mod session;

pub use detection::RoiDetector;
pub use error::{Error, Result};
pub use models::{BoundingBox, Rect, clamp_to_bounds};
pub use pipeline::{MetadataValue, Pipeline, PipelineStage, StageData};
pub use selection::Selection;
pub use session::Session;
