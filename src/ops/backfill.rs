//! Series utilities: dense backfill and metadata filtering.

use serde_json::Value;

use crate::model::{Detection, HasMeta, Metadata};

/// Default confidence assigned to synthetic backfill detections. Low enough
/// to sit below any practical threshold.
pub const BACKFILL_CONFIDENCE: f64 = 0.01;

/// Densify a sparse detection sequence over `[begin, end]`: existing
/// detections pass through, every missing frame gets a synthetic boxless
/// detection carrying a constant `confidence` value. Lets sparse tracks feed
/// the threshold scan, where gaps would otherwise hold an interval open.
pub fn fill_missing_detections(
    detections: &[Detection],
    begin: i64,
    end: i64,
    confidence: f64,
) -> Vec<Detection> {
    let mut next = 0;
    let mut output = Vec::with_capacity((end - begin + 1).max(0) as usize);
    for frame in begin..=end {
        if next < detections.len() && detections[next].frame == frame {
            output.push(detections[next].clone());
            if next < detections.len() - 1 {
                next += 1;
            }
        } else {
            let mut meta = Metadata::new();
            meta.insert("confidence".into(), confidence.into());
            output.push(Detection {
                frame,
                bbox: None,
                meta,
            });
        }
    }
    output
}

/// Keep the items whose `meta[key]` equals one of `values`. Works on tracks
/// and detections alike.
pub fn filter_by_meta<'a, T: HasMeta>(items: &'a [T], key: &str, values: &[Value]) -> Vec<&'a T> {
    items
        .iter()
        .filter(|item| {
            item.meta()
                .get(key)
                .is_some_and(|v| values.contains(v))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BBox;

    #[test]
    fn test_fill_is_dense_and_keeps_originals() {
        let sparse = vec![
            Detection::new(2, BBox::new(0.0, 0.0, 1.0, 1.0)).with_meta("confidence", 0.9),
            Detection::new(5, BBox::new(0.0, 0.0, 1.0, 1.0)).with_meta("confidence", 0.8),
        ];
        let dense = fill_missing_detections(&sparse, 0, 6, BACKFILL_CONFIDENCE);
        assert_eq!(dense.len(), 7);
        let frames: Vec<i64> = dense.iter().map(|d| d.frame).collect();
        assert_eq!(frames, vec![0, 1, 2, 3, 4, 5, 6]);
        assert_eq!(dense[2].meta.get("confidence"), Some(&0.9.into()));
        assert!(dense[2].bbox.is_some());
        assert_eq!(
            dense[3].meta.get("confidence"),
            Some(&BACKFILL_CONFIDENCE.into())
        );
        assert!(dense[3].bbox.is_none());
    }

    #[test]
    fn test_fill_empty_input_is_all_synthetic() {
        let dense = fill_missing_detections(&[], 0, 2, BACKFILL_CONFIDENCE);
        assert_eq!(dense.len(), 3);
        assert!(dense.iter().all(|d| d.bbox.is_none()));
    }

    #[test]
    fn test_filter_by_meta() {
        let items = vec![
            Detection::whole_frame(0).with_meta("source", "truth"),
            Detection::whole_frame(1).with_meta("source", "model"),
            Detection::whole_frame(2),
        ];
        let kept = filter_by_meta(&items, "source", &["truth".into()]);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].frame, 0);
    }
}
