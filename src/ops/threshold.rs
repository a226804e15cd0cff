//! Threshold-crossing segmentation over track detection sequences.

use indexmap::IndexMap;

use crate::model::{Event, Track};

/// Caller-built grouping of tracks by an arbitrary bucket label, e.g. by a
/// metadata category. Insertion order is preserved so results iterate
/// deterministically.
pub type TrackGroups = IndexMap<String, Vec<Track>>;

/// Contiguous intervals of `track` where `meta[key]` crosses `threshold`.
///
/// Single pass in frame order with an open/closed state. A value strictly
/// greater than the threshold opens an interval when closed; a value
/// strictly less closes it when open; a value exactly equal continues the
/// current state, as does a missing or non-numeric value. `threshold: None`
/// is the always-open override: every track with at least one detection
/// yields one interval spanning its whole detection sequence. An interval
/// still open at the last detection force-closes there, so an all-above
/// track yields exactly one interval spanning `[first.frame, last.frame]`.
pub fn find_threshold_crossings<'a>(
    track: &'a Track,
    threshold: Option<f64>,
    key: &str,
) -> Vec<Event<'a>> {
    let mut crossings = Vec::new();
    let mut open: Option<i64> = None;
    let last = track.detections.len().saturating_sub(1);
    for (i, d) in track.detections.iter().enumerate() {
        let val = d.meta.get(key).and_then(|v| v.as_f64());
        match (open, threshold, val) {
            (None, None, _) => open = Some(d.frame),
            (None, Some(t), Some(v)) if v > t => open = Some(d.frame),
            (Some(begin), Some(t), Some(v)) if v < t => {
                open = None;
                crossings.push(Event {
                    track,
                    begin,
                    end: d.frame,
                    meta: track.meta.clone(),
                });
            }
            _ => {}
        }
        // force-close at track end
        if i == last {
            if let Some(begin) = open.take() {
                crossings.push(Event {
                    track,
                    begin,
                    end: d.frame,
                    meta: track.meta.clone(),
                });
            }
        }
    }
    crossings
}

/// Run [`find_threshold_crossings`] over every track of every bucket.
///
/// Per bucket, only tracks that produced at least one crossing are kept, but
/// every bucket label of `groups` appears in the result — a bucket with no
/// qualifying tracks maps to an empty list. An empty `groups` yields an
/// empty mapping.
pub fn events_for_threshold<'a>(
    groups: &'a TrackGroups,
    threshold: Option<f64>,
    key: &str,
) -> IndexMap<String, Vec<Vec<Event<'a>>>> {
    groups
        .iter()
        .map(|(label, tracks)| {
            let series: Vec<Vec<Event<'a>>> = tracks
                .iter()
                .map(|track| find_threshold_crossings(track, threshold, key))
                .filter(|crossings| !crossings.is_empty())
                .collect();
            (label.clone(), series)
        })
        .collect()
}
