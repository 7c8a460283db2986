//! Deck state and the per-card interaction cycle.
//!
//! [`DeckController`] is the single owner of the card cursor and of the
//! offset of the top card. Hosts forward pointer events and frame ticks to
//! it and read back a [`CardView`] to draw.

use crate::animator::{AnimationEvent, AnimationPhase, ExitAnimator};
use crate::classify::{GestureDecision, SwipeClassifier};
use crate::config::SwipeConfig;
use crate::feedback::feedback_for;
use crate::gesture::GestureTracker;
use crate::source::{validate_cards, DeckError, DeckSource};
use crate::state::{CardView, DragOffset, Viewport, VisualFeedback};
use serde::Deserialize;
use std::time::Duration;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Card {
    pub id: String,
    pub title: String,
    pub description: String,
}

impl Card {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
        }
    }
}

/// A card that was swiped past, in swipe order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SwipeRecord {
    pub card_id: String,
    pub decision: GestureDecision,
}

pub struct DeckController {
    cards: Vec<Card>,
    current_index: usize,
    tracker: GestureTracker,
    animator: ExitAnimator,
    classifier: SwipeClassifier,
    viewport: Viewport,
    max_rotation_deg: f32,
    feedback: VisualFeedback,
    history: Vec<SwipeRecord>,
    // Decision of the release whose animation is running.
    pending: Option<GestureDecision>,
}

impl DeckController {
    /// Build a deck over `cards`. Card ids must be non-empty and unique, and
    /// `config` must pass [`SwipeConfig::validate`].
    pub fn new(
        cards: Vec<Card>,
        config: &SwipeConfig,
        viewport: Viewport,
    ) -> Result<Self, DeckError> {
        validate_cards(&cards)?;
        config.validate()?;
        Ok(Self {
            cards,
            current_index: 0,
            tracker: GestureTracker::new(),
            animator: ExitAnimator::new(config),
            classifier: SwipeClassifier::new(config.accept_threshold),
            viewport,
            max_rotation_deg: config.max_rotation_deg,
            feedback: VisualFeedback::default(),
            history: Vec::new(),
            pending: None,
        })
    }

    pub fn from_source(
        source: &dyn DeckSource,
        config: &SwipeConfig,
        viewport: Viewport,
    ) -> Result<Self, DeckError> {
        let cards = source.load()?;
        log::info!("[deck] loaded {} cards", cards.len());
        Self::new(cards, config, viewport)
    }

    // ---------------- Queries ----------------

    /// The card on top of the deck, `None` once every card was swiped.
    pub fn current_card(&self) -> Option<&Card> {
        self.cards.get(self.current_index)
    }

    pub fn is_exhausted(&self) -> bool {
        self.current_index >= self.cards.len()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn remaining(&self) -> usize {
        self.cards.len() - self.current_index
    }

    pub fn history(&self) -> &[SwipeRecord] {
        &self.history
    }

    pub fn phase(&self) -> AnimationPhase {
        self.animator.phase()
    }

    /// Current on-screen offset of the top card.
    pub fn offset(&self) -> DragOffset {
        self.animator.offset()
    }

    pub fn feedback(&self) -> VisualFeedback {
        self.feedback
    }

    pub fn card_view(&self) -> CardView {
        CardView {
            translation: self.animator.offset(),
            feedback: self.feedback,
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn classifier(&self) -> &SwipeClassifier {
        &self.classifier
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.refresh_feedback();
    }

    // ---------------- Gesture events ----------------

    /// Pointer down on the top card. Returns `false` when the event was
    /// ignored: deck exhausted, a gesture already active, or the card is
    /// already leaving the screen.
    pub fn on_gesture_start(&mut self) -> bool {
        if self.is_exhausted() {
            log::debug!("[deck] gesture start ignored: deck exhausted");
            return false;
        }
        if self.tracker.is_active() || self.animator.is_committed() {
            log::debug!(
                "[deck] gesture start ignored in phase {:?}",
                self.animator.phase()
            );
            return false;
        }
        if !self.animator.begin_drag() {
            return false;
        }
        // Grabbing a card mid snap-back drops the cancel it was resolving
        self.pending = None;
        self.tracker.start();
        self.refresh_feedback();
        true
    }

    /// Pointer moved; `dx`/`dy` are cumulative since the gesture started.
    pub fn on_gesture_move(&mut self, dx: f32, dy: f32) -> Option<VisualFeedback> {
        if self.is_exhausted() {
            return None;
        }
        let offset = self.tracker.update(dx, dy)?;
        self.animator.drag_to(offset);
        self.refresh_feedback();
        Some(self.feedback)
    }

    /// Pointer released. Classifies the release and starts the matching
    /// animation; returns the decision, or `None` if no gesture was active.
    pub fn on_gesture_end(&mut self, dx: f32, dy: f32) -> Option<GestureDecision> {
        if self.is_exhausted() {
            return None;
        }
        let released = self.tracker.end(dx, dy)?;
        let decision = self.classifier.classify(released, self.viewport.width());
        log::info!(
            "[deck] release dx={:.1} dy={:.1} -> {:?}",
            released.x,
            released.y,
            decision
        );
        if self.animator.release(decision, released, self.viewport) {
            self.pending = Some(decision);
        }
        self.refresh_feedback();
        Some(decision)
    }

    // ---------------- Animation ----------------

    /// Advance the running animation by one frame. When it completes the
    /// deck is updated before this returns.
    pub fn tick(&mut self, dt: Duration) -> Option<AnimationEvent> {
        let event = self.animator.tick(dt);
        match event {
            Some(AnimationEvent::Consumed(decision)) => self.resolve(decision),
            Some(AnimationEvent::Restored) => self.resolve(GestureDecision::Cancel),
            None => self.refresh_feedback(),
        }
        event
    }

    /// Completion handler for a post-release animation.
    ///
    /// Called by hosts that run the exit animation on their own animation
    /// engine, from their completion callback; [`tick`](Self::tick) resolves
    /// internally. The report is honoured only while a post-release
    /// animation is running and `decision` matches the release that started
    /// it, so each release resolves at most once. Returns `true` when the
    /// report was applied.
    pub fn on_swipe_resolved(&mut self, decision: GestureDecision) -> bool {
        if self.is_exhausted() {
            return false;
        }
        if !self.animator.is_animating() || self.pending != Some(decision) {
            log::debug!(
                "[deck] stray completion {:?} ignored (phase {:?}, pending {:?})",
                decision,
                self.animator.phase(),
                self.pending
            );
            return false;
        }
        self.resolve(decision);
        true
    }

    // Accept and reject advance the cursor by one; cancel only resets the
    // offset.
    fn resolve(&mut self, decision: GestureDecision) {
        self.pending = None;
        self.tracker.reset();
        self.animator.reset();
        if decision.consumes_card() {
            if let Some(card) = self.cards.get(self.current_index) {
                log::info!("[deck] card {} {:?}", card.id, decision);
                self.history.push(SwipeRecord {
                    card_id: card.id.clone(),
                    decision,
                });
                self.current_index += 1;
                if self.is_exhausted() {
                    log::info!("[deck] exhausted after {} cards", self.cards.len());
                }
            }
        }
        self.refresh_feedback();
    }

    /// Abandon any drag or animation (e.g. the app went to the background).
    /// The card stays on top and no swipe is recorded.
    pub fn abort_animation(&mut self) -> bool {
        self.pending = None;
        self.tracker.reset();
        let interrupted = self.animator.abort();
        self.refresh_feedback();
        interrupted
    }

    fn refresh_feedback(&mut self) {
        self.feedback = feedback_for(self.animator.offset(), self.viewport, self.max_rotation_deg);
    }
}
