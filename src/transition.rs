use crate::constants::*;
use crate::state::Direction;

/// Visual parameters of the active card slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub offset_x: f32,
    pub opacity: f32,
    pub scale: f32,
}

impl Pose {
    pub const SETTLED: Pose = Pose { offset_x: 0.0, opacity: 1.0, scale: 1.0 };

    pub fn hidden(offset_x: f32) -> Pose {
        Pose { offset_x, opacity: 0.0, scale: HIDDEN_SCALE }
    }

    pub fn lerp(self, to: Pose, t: f32) -> Pose {
        Pose {
            offset_x: self.offset_x + (to.offset_x - self.offset_x) * t,
            opacity: self.opacity + (to.opacity - self.opacity) * t,
            scale: self.scale + (to.scale - self.scale) * t,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionPhase {
    Exiting,  // Previous card leaves towards -sign
    Entering, // New card arrives from +sign
    Settled,  // New card rests in place
}

fn cubic_out(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

/// Exit-then-enter animation of the active card slot.
///
/// Forward transitions always travel right to left on screen and backward
/// ones left to right, whichever items are involved.
#[derive(Debug, Clone)]
pub struct Transition {
    outgoing: Option<usize>,
    incoming: usize,
    key: u64,
    direction: Direction,
    phase: TransitionPhase,
    timer: f32,
    duration: f32,
    exit_from: Pose,
}

impl Transition {
    /// A card already at rest, used before the first transition.
    pub fn settled(cursor: usize, key: u64, duration: f32) -> Self {
        Self {
            outgoing: None,
            incoming: cursor,
            key,
            direction: Direction::Forward,
            phase: TransitionPhase::Settled,
            timer: 0.0,
            duration,
            exit_from: Pose::SETTLED,
        }
    }

    /// Starts a transition towards `to`, superseding `self`.
    ///
    /// Whatever card is on screen right now becomes the outgoing card and
    /// its exit starts from its current pose.
    pub fn supersede(&self, to: usize, direction: Direction, key: u64) -> Self {
        let phase = if self.duration > 0.0 {
            TransitionPhase::Exiting
        } else {
            TransitionPhase::Settled
        };
        Self {
            outgoing: Some(self.visible_index()),
            incoming: to,
            key,
            direction,
            phase,
            timer: 0.0,
            duration: self.duration,
            exit_from: self.visible_pose(),
        }
    }

    pub fn update(&mut self, dt: f32) {
        if self.phase == TransitionPhase::Settled {
            return;
        }

        self.timer += dt;
        if self.timer >= self.duration {
            self.timer = 0.0;
            match self.phase {
                TransitionPhase::Exiting  => self.phase = TransitionPhase::Entering,
                TransitionPhase::Entering => {
                    self.phase = TransitionPhase::Settled;
                    self.outgoing = None;
                }
                TransitionPhase::Settled  => {}
            }
        }
    }

    fn progress(&self) -> f32 {
        if self.duration > 0.0 {
            cubic_out((self.timer / self.duration).min(1.0))
        } else {
            1.0
        }
    }

    /// Index of the card currently drawn in the active slot.
    pub fn visible_index(&self) -> usize {
        match (self.phase, self.outgoing) {
            (TransitionPhase::Exiting, Some(outgoing)) => outgoing,
            _ => self.incoming,
        }
    }

    pub fn visible_pose(&self) -> Pose {
        let sign = self.direction.sign();
        match self.phase {
            TransitionPhase::Exiting => self
                .exit_from
                .lerp(Pose::hidden(-sign * SLIDE_OFFSET), self.progress()),
            TransitionPhase::Entering => {
                Pose::hidden(sign * SLIDE_OFFSET).lerp(Pose::SETTLED, self.progress())
            }
            TransitionPhase::Settled => Pose::SETTLED,
        }
    }

    pub fn phase(&self) -> TransitionPhase {
        self.phase
    }

    pub fn is_animating(&self) -> bool {
        self.phase != TransitionPhase::Settled
    }

    pub fn incoming(&self) -> usize {
        self.incoming
    }

    pub fn key(&self) -> u64 {
        self.key
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }
}
