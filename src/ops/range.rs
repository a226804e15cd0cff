//! Continuous playback windows over a detection sequence.

use crate::error::TdmError;
use crate::model::Detection;
use crate::ops::interpolate::interpolate;
use crate::ops::sorted::find_range;

/// Detections covering `[start, end]` with the trailing edge snapped to
/// `end`.
///
/// [`find_range`] supplies the padded window; when it holds at least two
/// elements the last one is replaced by an interpolation at exactly `end`,
/// so a non-empty multi-point result always ends on `frame == end` and a
/// consumer stepping frame-by-frame gets a detection exactly at the frame it
/// asked for. A singleton window passes through unmodified; an empty window
/// stays empty.
///
/// Errors only on a data-contract violation: two window elements sharing a
/// frame, which a well-formed track cannot contain.
pub fn interpolated_range(
    detections: &[Detection],
    start: i64,
    end: i64,
) -> Result<Vec<Detection>, TdmError> {
    let window = find_range(detections, start, end, |d| d.frame);
    match window.len() {
        0 | 1 => Ok(window.to_vec()),
        n => {
            let mut out = window.to_vec();
            out[n - 1] = interpolate(end, &window[n - 2], &window[n - 1])?;
            Ok(out)
        }
    }
}
