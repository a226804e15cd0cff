//! Error type for TDM operations.

/// Errors surfaced by TDM operations.
///
/// Empty or inverted query ranges and removals of absent keys are defined
/// non-error cases; only data-contract violations produce an error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TdmError {
    /// Interpolation between two detections that share a frame. The weight
    /// divides by the frame delta, so this input has no defined result.
    #[error("cannot interpolate between two detections at the same frame {0}")]
    DegenerateInterpolation(i64),
}
