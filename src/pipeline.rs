use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use image::DynamicImage;
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::BoundingBox;

/// Telemetry values recorded by stages as they run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetadataValue {
    Int(i64),
    Float(f64),
}

/// Data flowing through the detection stages.
///
/// Stages rewrite `image` (grayscale, blurred, binary, cropped) while
/// `original` stays untouched so a located region can be cut from the source
/// pixels. The flow is strictly 1 → 1: every stage consumes one `StageData`
/// and produces one, and at most one region comes out the far end.
#[derive(Clone)]
pub struct StageData {
    pub image: DynamicImage,
    pub original: Arc<DynamicImage>,
    pub region: Option<BoundingBox>,
    pub metadata: HashMap<String, MetadataValue>,
}

impl StageData {
    pub fn from_image(image: DynamicImage) -> Self {
        let original = Arc::new(image.clone());
        Self {
            image,
            original,
            region: None,
            metadata: HashMap::new(),
        }
    }

    pub fn record_int(&mut self, key: impl Into<String>, value: i64) {
        self.metadata.insert(key.into(), MetadataValue::Int(value));
    }

    pub fn record_float(&mut self, key: impl Into<String>, value: f64) {
        self.metadata
            .insert(key.into(), MetadataValue::Float(value));
    }

    pub fn get_int(&self, key: &str) -> Option<i64> {
        match self.metadata.get(key) {
            Some(MetadataValue::Int(v)) => Some(*v),
            _ => None,
        }
    }

    pub fn get_float(&self, key: &str) -> Option<f64> {
        match self.metadata.get(key) {
            Some(MetadataValue::Float(v)) => Some(*v),
            _ => None,
        }
    }
}

/// A single image-processing stage.
pub trait PipelineStage {
    fn process(&self, data: StageData) -> Result<StageData>;

    /// Short snake_case name, used for log events and debug dump filenames.
    fn name(&self) -> &str;
}

#[derive(Debug, Clone)]
pub struct DebugConfig {
    pub output_dir: PathBuf,
}

/// Runs stages in order on the calling thread, optionally dumping every
/// intermediate image for inspection.
#[derive(Default)]
pub struct Pipeline {
    stages: Vec<Box<dyn PipelineStage>>,
    debug: Option<DebugConfig>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_stage(mut self, stage: Box<dyn PipelineStage>) -> Self {
        self.stages.push(stage);
        self
    }

    /// Dump the input and each stage's output into `output_dir` as
    /// `NN_name.png`. The directory must be empty or not yet exist.
    pub fn with_debug(mut self, output_dir: PathBuf) -> Result<Self> {
        if output_dir.exists() {
            let mut entries = std::fs::read_dir(&output_dir).map_err(|e| Error::Io {
                path: output_dir.clone(),
                source: e,
            })?;
            if entries.next().is_some() {
                return Err(Error::DebugDirNotEmpty { path: output_dir });
            }
        } else {
            std::fs::create_dir_all(&output_dir).map_err(|e| Error::Io {
                path: output_dir.clone(),
                source: e,
            })?;
        }
        self.debug = Some(DebugConfig { output_dir });
        Ok(self)
    }

    pub fn run(&self, input: DynamicImage) -> Result<StageData> {
        let mut data = StageData::from_image(input);
        self.save_debug_image(&data.image, 0, "input")?;

        for (idx, stage) in self.stages.iter().enumerate() {
            debug!(stage = stage.name(), "running stage");
            data = stage.process(data)?;
            self.save_debug_image(&data.image, idx + 1, stage.name())?;
        }

        Ok(data)
    }

    fn save_debug_image(&self, image: &DynamicImage, index: usize, name: &str) -> Result<()> {
        if let Some(debug_config) = &self.debug {
            let path = debug_config
                .output_dir
                .join(format!("{:02}_{}.png", index, name));
            image
                .save(&path)
                .map_err(|e| Error::Save { path, source: e })?;
        }
        Ok(())
    }
}
