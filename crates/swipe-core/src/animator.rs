//! Post-release animation state machine.
//!
//! The animator owns the on-screen offset of the top card. While the user
//! drags, the offset follows the finger; after release it is advanced by
//! `tick` with frame deltas supplied by the host scheduler until the
//! animation settles, at which point a single [`AnimationEvent`] is emitted.
//!
//! ```text
//! Idle -> Dragging -> Accepting | Rejecting | SnappingBack -> Idle
//! ```

use crate::classify::GestureDecision;
use crate::config::{SpringConfig, SwipeConfig};
use crate::constants::{SPRING_MAX_FRAME_SEC, SPRING_MAX_SUBSTEP_SEC};
use crate::state::{DragOffset, Viewport};
use glam::Vec2;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationPhase {
    Idle,
    Dragging,
    Accepting,
    Rejecting,
    SnappingBack,
}

/// Emitted once when a post-release animation completes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationEvent {
    /// The card left the screen; carries the decision that sent it.
    Consumed(GestureDecision),
    /// The card sprang back to the origin.
    Restored,
}

#[derive(Clone, Copy, Debug)]
struct TimedExit {
    from: Vec2,
    to: Vec2,
    elapsed: Duration,
    duration: Duration,
    decision: GestureDecision,
}

#[derive(Clone, Debug)]
pub struct ExitAnimator {
    phase: AnimationPhase,
    offset: DragOffset,
    velocity: Vec2,
    exit: Option<TimedExit>,
    spring: SpringConfig,
    exit_duration: Duration,
    exit_overshoot: f32,
}

impl Default for ExitAnimator {
    fn default() -> Self {
        Self::new(&SwipeConfig::default())
    }
}

impl ExitAnimator {
    pub fn new(config: &SwipeConfig) -> Self {
        Self {
            phase: AnimationPhase::Idle,
            offset: Vec2::ZERO,
            velocity: Vec2::ZERO,
            exit: None,
            spring: config.spring,
            exit_duration: config.exit_duration(),
            exit_overshoot: config.exit_overshoot,
        }
    }

    pub fn phase(&self) -> AnimationPhase {
        self.phase
    }

    pub fn offset(&self) -> DragOffset {
        self.offset
    }

    /// True while the card is flying off screen.
    pub fn is_committed(&self) -> bool {
        matches!(
            self.phase,
            AnimationPhase::Accepting | AnimationPhase::Rejecting
        )
    }

    /// True while `tick` has work to do.
    pub fn is_animating(&self) -> bool {
        self.is_committed() || self.phase == AnimationPhase::SnappingBack
    }

    /// Enter `Dragging` with the offset at the origin.
    ///
    /// Refused while a committed exit is in flight. A snap-back in progress
    /// is interrupted; the user grabbed the card again.
    pub fn begin_drag(&mut self) -> bool {
        match self.phase {
            AnimationPhase::Accepting | AnimationPhase::Rejecting => {
                log::debug!("[anim] drag refused during {:?}", self.phase);
                false
            }
            AnimationPhase::Dragging => false,
            AnimationPhase::Idle | AnimationPhase::SnappingBack => {
                self.phase = AnimationPhase::Dragging;
                self.offset = Vec2::ZERO;
                self.velocity = Vec2::ZERO;
                self.exit = None;
                true
            }
        }
    }

    /// Follow the finger. Ignored outside `Dragging`.
    pub fn drag_to(&mut self, offset: DragOffset) {
        if self.phase == AnimationPhase::Dragging {
            self.offset = offset;
        }
    }

    /// Start the animation matching `decision` from `release_offset`.
    ///
    /// Returns `false` when no drag is in progress.
    pub fn release(
        &mut self,
        decision: GestureDecision,
        release_offset: DragOffset,
        viewport: Viewport,
    ) -> bool {
        if self.phase != AnimationPhase::Dragging {
            return false;
        }
        self.offset = release_offset;
        self.velocity = Vec2::ZERO;
        let fly_x = viewport.width() + self.exit_overshoot;
        match decision {
            GestureDecision::Accept => self.start_exit(decision, Vec2::new(fly_x, 0.0)),
            GestureDecision::Reject => self.start_exit(decision, Vec2::new(-fly_x, 0.0)),
            GestureDecision::Cancel => {
                self.phase = AnimationPhase::SnappingBack;
                self.exit = None;
            }
        }
        true
    }

    fn start_exit(&mut self, decision: GestureDecision, to: Vec2) {
        self.phase = if decision == GestureDecision::Accept {
            AnimationPhase::Accepting
        } else {
            AnimationPhase::Rejecting
        };
        self.exit = Some(TimedExit {
            from: self.offset,
            to,
            elapsed: Duration::ZERO,
            duration: self.exit_duration,
            decision,
        });
    }

    /// Advance the running animation by one frame.
    ///
    /// Returns the completion event on the frame the animation settles; the
    /// offset is back at the origin and the phase is `Idle` by then.
    pub fn tick(&mut self, dt: Duration) -> Option<AnimationEvent> {
        match self.phase {
            AnimationPhase::Accepting | AnimationPhase::Rejecting => self.step_exit(dt),
            AnimationPhase::SnappingBack => self.step_spring(dt),
            AnimationPhase::Idle | AnimationPhase::Dragging => None,
        }
    }

    fn step_exit(&mut self, dt: Duration) -> Option<AnimationEvent> {
        let exit = self.exit.as_mut()?;
        exit.elapsed = exit.elapsed.saturating_add(dt);
        let t = if exit.duration.is_zero() {
            1.0
        } else {
            (exit.elapsed.as_secs_f32() / exit.duration.as_secs_f32()).min(1.0)
        };
        self.offset = exit.from.lerp(exit.to, ease_in_out(t));
        if t < 1.0 {
            return None;
        }
        let decision = exit.decision;
        self.settle();
        Some(AnimationEvent::Consumed(decision))
    }

    fn step_spring(&mut self, dt: Duration) -> Option<AnimationEvent> {
        let total = dt.as_secs_f32().min(SPRING_MAX_FRAME_SEC);
        if total > 0.0 {
            let steps = (total / SPRING_MAX_SUBSTEP_SEC).ceil().max(1.0) as u32;
            let h = total / steps as f32;
            for _ in 0..steps {
                let (pos, vel) = spring_step(self.offset, self.velocity, &self.spring, h);
                self.offset = pos;
                self.velocity = vel;
            }
        }
        // A degenerate spring (zero mass, NaN stiffness) never comes to rest
        if !self.offset.is_finite() || !self.velocity.is_finite() {
            log::warn!("[anim] spring diverged; snapping card to origin");
            self.settle();
            return Some(AnimationEvent::Restored);
        }
        if self.offset.length() <= self.spring.rest_displacement
            && self.velocity.length() <= self.spring.rest_speed
        {
            self.settle();
            return Some(AnimationEvent::Restored);
        }
        None
    }

    /// Force the animator back to `Idle` at the origin without emitting a
    /// completion event. Returns `true` if anything was interrupted.
    pub fn abort(&mut self) -> bool {
        if self.phase == AnimationPhase::Idle {
            return false;
        }
        log::warn!("[anim] aborted during {:?}", self.phase);
        self.settle();
        true
    }

    /// Return to `Idle` at the origin quietly; used once a completion has
    /// been handled.
    pub fn reset(&mut self) {
        self.settle();
    }

    fn settle(&mut self) {
        self.phase = AnimationPhase::Idle;
        self.offset = Vec2::ZERO;
        self.velocity = Vec2::ZERO;
        self.exit = None;
    }
}

// Damped spring toward the origin, semi-implicit Euler.
#[inline]
fn spring_step(pos: Vec2, vel: Vec2, spring: &SpringConfig, h: f32) -> (Vec2, Vec2) {
    let accel = (-spring.stiffness * pos - spring.damping * vel) / spring.mass;
    let vel = vel + accel * h;
    (pos + vel * h, vel)
}

/// Symmetric cubic ease-in-out on \[0, 1\].
#[inline]
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u * u / 2.0
    }
}
