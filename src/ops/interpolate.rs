//! Linear interpolation between two detections.

use crate::error::TdmError;
use crate::model::{Detection, INTERPOLATED_KEY};

/// Produce a synthetic detection at `target_frame` by linear interpolation
/// between `d0` and `d1`.
///
/// The weight is `b = |target_frame - d0.frame| / (d1.frame - d0.frame)`,
/// `a = 1 - b`. The box is blended coordinate-wise when both sources carry
/// one, and absent otherwise. Metadata is copied from `d0` with a boolean
/// `interpolated` flag added: `false` exactly when the target coincides with
/// one endpoint (a true keyframe), `true` otherwise. Targets outside
/// `[d0.frame, d1.frame]` extrapolate linearly.
///
/// Errors with [`TdmError::DegenerateInterpolation`] when both detections
/// share a frame, since the weight divides by the frame delta.
pub fn interpolate(target_frame: i64, d0: &Detection, d1: &Detection) -> Result<Detection, TdmError> {
    let len = d1.frame - d0.frame;
    if len == 0 {
        return Err(TdmError::DegenerateInterpolation(d0.frame));
    }
    // a + b = 1; blend from d0 toward d1
    let b = ((target_frame - d0.frame) as f64 / len as f64).abs();
    let a = 1.0 - b;
    let frame = (d0.frame as f64 * a + d1.frame as f64 * b).round() as i64;
    let bbox = match (&d0.bbox, &d1.bbox) {
        (Some(b0), Some(b1)) => Some(b0.blend(b1, a, b)),
        _ => None,
    };
    let mut meta = d0.meta.clone();
    meta.insert(INTERPOLATED_KEY.into(), (a != 0.0 && b != 0.0).into());
    Ok(Detection { frame, bbox, meta })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BBox;

    #[test]
    fn test_simple_interpolation() {
        let d0 = Detection::new(0, BBox::new(0.0, 0.0, 10.0, 10.0));
        let d1 = Detection::new(10, BBox::new(10.0, 10.0, 20.0, 20.0));
        let result = interpolate(5, &d0, &d1).unwrap();
        assert_eq!(result.frame, 5);
        assert_eq!(result.bbox.unwrap().to_array(), [5.0, 5.0, 15.0, 15.0]);
        assert!(result.is_interpolated());
    }

    #[test]
    fn test_endpoints_are_keyframes() {
        let d0 = Detection::new(0, BBox::new(0.0, 0.0, 10.0, 10.0));
        let d1 = Detection::new(10, BBox::new(10.0, 10.0, 20.0, 20.0));

        let at0 = interpolate(0, &d0, &d1).unwrap();
        assert_eq!(at0.frame, 0);
        assert_eq!(at0.bbox, d0.bbox);
        assert!(!at0.is_interpolated());

        let at1 = interpolate(10, &d0, &d1).unwrap();
        assert_eq!(at1.frame, 10);
        assert_eq!(at1.bbox, d1.bbox);
        assert!(!at1.is_interpolated());
    }

    #[test]
    fn test_between_property() {
        let d0 = Detection::new(100, BBox::new(0.0, 4.0, 8.0, 16.0));
        let d1 = Detection::new(200, BBox::new(2.0, 2.0, 32.0, 8.0));
        for target in [100, 125, 150, 175, 200] {
            let r = interpolate(target, &d0, &d1).unwrap().bbox.unwrap();
            let lo = d0.bbox.unwrap();
            let hi = d1.bbox.unwrap();
            for (i, v) in r.to_array().iter().enumerate() {
                let (min, max) = (
                    lo.to_array()[i].min(hi.to_array()[i]),
                    lo.to_array()[i].max(hi.to_array()[i]),
                );
                assert!(*v >= min && *v <= max);
            }
        }
    }

    #[test]
    fn test_preserves_meta() {
        let d0 = Detection::new(0, BBox::new(1.0, 1.0, 2.0, 2.0)).with_meta("a", 20);
        let d1 = Detection::new(2, BBox::new(2.0, 2.0, 3.0, 3.0));
        let result = interpolate(200, &d0, &d1).unwrap();
        assert_eq!(result.frame, 200);
        assert_eq!(result.meta.get("a"), Some(&20.into()));
    }

    #[test]
    fn test_missing_box_yields_no_box() {
        let d0 = Detection::whole_frame(0);
        let d1 = Detection::new(10, BBox::new(0.0, 0.0, 1.0, 1.0));
        assert!(interpolate(5, &d0, &d1).unwrap().bbox.is_none());
    }

    #[test]
    fn test_same_frame_errors() {
        let d0 = Detection::whole_frame(3);
        let d1 = Detection::whole_frame(3);
        assert_eq!(
            interpolate(3, &d0, &d1),
            Err(TdmError::DegenerateInterpolation(3))
        );
    }
}
