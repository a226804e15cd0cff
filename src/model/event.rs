use crate::model::detection::Metadata;
use crate::model::track::Track;

/// A derived contiguous frame interval where a metadata value satisfied a
/// threshold predicate.
///
/// Events are ephemeral: recomputed on demand, borrowing the owning track
/// for the duration of the query, never stored back on a [`Track`].
#[derive(Debug, Clone, PartialEq)]
pub struct Event<'a> {
    /// Owning track
    pub track: &'a Track,
    /// First frame of the interval
    pub begin: i64,
    /// Last frame of the interval
    pub end: i64,
    /// Copy of the owning track's metadata at segmentation time
    pub meta: Metadata,
}
