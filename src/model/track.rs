//! Temporally bounded annotated entity.

use serde::{Deserialize, Serialize};

use crate::error::TdmError;
use crate::model::detection::{Detection, HasMeta, Metadata};
use crate::model::track_state::TrackState;
use crate::ops::{interpolated_range, sorted};

/// A temporally bounded annotated entity: an ordered sequence of detections
/// over `[begin, end]` plus track-level metadata.
///
/// Invariant: `detections` is sorted ascending and unique by frame, with
/// `begin <= detections[0].frame` and `end >= detections[last].frame`.
/// Constructors and mutation methods preserve this; a track is never left
/// partially invalid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Unique identifier
    pub key: String,
    /// Track-level metadata (category/type/name/...)
    #[serde(default, skip_serializing_if = "Metadata::is_empty")]
    pub meta: Metadata,
    /// Detection sequence, sorted ascending by frame
    pub detections: Vec<Detection>,
    /// First frame of the track's span
    pub begin: i64,
    /// Last frame of the track's span
    pub end: i64,
    /// Whether the sequence is sparser than the declared span and must be
    /// interpolated for continuous playback
    pub interpolated: bool,
    /// Display state
    #[serde(default)]
    pub state: TrackState,
}

impl Track {
    /// Build a track from importer output. Detections are sorted by frame
    /// and `interpolated` is derived from the sequence density relative to
    /// the declared span.
    pub fn new(
        key: impl Into<String>,
        meta: Metadata,
        mut detections: Vec<Detection>,
        begin: i64,
        end: i64,
    ) -> Self {
        detections.sort_by_key(|d| d.frame);
        let interpolated = (detections.len() as i64) < (end - begin);
        Self {
            key: key.into(),
            meta,
            detections,
            begin,
            end,
            interpolated,
            state: TrackState::default(),
        }
    }

    /// Insert a detection, replacing any existing detection at the same
    /// frame. Sort order and frame uniqueness are preserved.
    pub fn insert_detection(&mut self, detection: Detection) {
        sorted::insert(&mut self.detections, detection, |d| d.frame);
    }

    /// Remove the detection at `frame`. Returns `None` when no detection
    /// exists at that frame (not an error).
    pub fn remove_detection(&mut self, frame: i64) -> Option<Detection> {
        sorted::remove(&mut self.detections, frame, |d| d.frame)
    }

    /// Detection at an exact frame, if one exists.
    pub fn detection_at(&self, frame: i64) -> Option<&Detection> {
        let pos = sorted::search_key(&self.detections, frame, |d| d.frame);
        if pos >= 0 {
            Some(&self.detections[pos as usize])
        } else {
            None
        }
    }

    /// Continuous playback window over `[start, end]`; see
    /// [`interpolated_range`].
    pub fn interpolated_range(&self, start: i64, end: i64) -> Result<Vec<Detection>, TdmError> {
        interpolated_range(&self.detections, start, end)
    }
}

impl HasMeta for Track {
    fn meta(&self) -> &Metadata {
        &self.meta
    }
}
