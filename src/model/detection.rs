//! Single-frame detection sample and open metadata mapping.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::bbox::BBox;

/// Open metadata mapping: string keys to arbitrary scalar values.
///
/// Some keys are first-class to consumers ("confidence", "type"); everything
/// else rides along untouched. Insertion order is preserved so iteration is
/// deterministic across runs.
pub type Metadata = IndexMap<String, Value>;

/// Meta key set on detections produced by interpolation.
pub const INTERPOLATED_KEY: &str = "interpolated";

/// One sample of an annotated object at a specific frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    /// Frame number, unique within the owning track's detection sequence.
    pub frame: i64,
    /// Bounding box. `None` means the detection applies to the whole frame.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bbox: Option<BBox>,
    /// Per-detection metadata (confidence, occlusion, source tag, ...).
    #[serde(default, skip_serializing_if = "Metadata::is_empty")]
    pub meta: Metadata,
}

impl Detection {
    /// Create a detection with a bounding box and empty metadata.
    pub fn new(frame: i64, bbox: BBox) -> Self {
        Self {
            frame,
            bbox: Some(bbox),
            meta: Metadata::new(),
        }
    }

    /// Create a whole-frame detection (no bounding box).
    pub fn whole_frame(frame: i64) -> Self {
        Self {
            frame,
            bbox: None,
            meta: Metadata::new(),
        }
    }

    /// Attach a metadata entry, replacing any existing value for the key.
    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.meta.insert(key.into(), value.into());
        self
    }

    /// Whether this detection was produced by interpolation rather than
    /// recorded as a keyframe.
    pub fn is_interpolated(&self) -> bool {
        self.meta
            .get(INTERPOLATED_KEY)
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }
}

/// Anything carrying an open metadata mapping (tracks and detections).
pub trait HasMeta {
    fn meta(&self) -> &Metadata;
}

impl HasMeta for Detection {
    fn meta(&self) -> &Metadata {
        &self.meta
    }
}
