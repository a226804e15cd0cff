use serde::{Deserialize, Serialize};

/// Display state of a track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackState {
    /// Shown and interactive
    #[default]
    Active,
    /// Shown but dimmed/inert
    Disabled,
    /// Not shown
    Hidden,
}
