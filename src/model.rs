mod bbox;
mod detection;
mod event;
mod track;
mod track_state;

pub use bbox::BBox;
pub use detection::{Detection, HasMeta, INTERPOLATED_KEY, Metadata};
pub use event::Event;
pub use track::Track;
pub use track_state::TrackState;
