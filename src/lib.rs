//! TDM (Tracks, Detections, Metadata) core for video annotation visualization.
//!
//! TDM is a lossy in-memory model: any annotation source should produce
//! enough data to transcribe into it, but it is not a storage format.
//! External importers normalize their records into [`Track`]s; consumers
//! query continuous playback windows with [`ops::interpolated_range`] and
//! derive threshold-crossing [`Event`]s with [`ops::events_for_threshold`].
//!
//! All operations are synchronous pure functions over caller-owned data.
//! The crate holds no ambient state.

pub mod error;
pub mod model;
pub mod ops;

pub use error::TdmError;
pub use model::{BBox, Detection, Event, HasMeta, Metadata, Track, TrackState};
pub use ops::{
    TrackGroups, events_for_threshold, fill_missing_detections, filter_by_meta,
    find_threshold_crossings, interpolate, interpolated_range,
};
