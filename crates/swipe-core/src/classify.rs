use crate::constants::ACCEPT_THRESHOLD;
use crate::state::DragOffset;

/// Outcome of a released gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GestureDecision {
    Accept,
    Reject,
    Cancel,
}

impl GestureDecision {
    /// Whether the decision removes the current card from the deck.
    #[inline]
    pub fn consumes_card(self) -> bool {
        matches!(self, Self::Accept | Self::Reject)
    }
}

/// Position-only release classifier. No velocity and no hysteresis: the same
/// offset always yields the same decision.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeClassifier {
    pub threshold: f32,
}

impl Default for SwipeClassifier {
    fn default() -> Self {
        Self {
            threshold: ACCEPT_THRESHOLD,
        }
    }
}

impl SwipeClassifier {
    pub fn new(threshold: f32) -> Self {
        Self { threshold }
    }

    /// `viewport_width` is accepted for symmetry with the feedback mapping;
    /// the threshold is not scaled by it.
    pub fn classify(&self, offset: DragOffset, _viewport_width: f32) -> GestureDecision {
        if offset.x > self.threshold {
            GestureDecision::Accept
        } else if offset.x < -self.threshold {
            GestureDecision::Reject
        } else {
            GestureDecision::Cancel
        }
    }
}

/// Classify with the default threshold.
#[inline]
pub fn classify(offset: DragOffset, viewport_width: f32) -> GestureDecision {
    SwipeClassifier::default().classify(offset, viewport_width)
}
