pub mod backfill;
pub mod interpolate;
pub mod range;
pub mod sorted;
pub mod threshold;

pub use backfill::{fill_missing_detections, filter_by_meta};
pub use interpolate::interpolate;
pub use range::interpolated_range;
pub use sorted::{binary_search, find_range, insert, remove, search_key};
pub use threshold::{TrackGroups, events_for_threshold, find_threshold_crossings};
