//! Fixed-step gating over variable-rate host frames
//!
//! The host calls `feed` once per frame with real elapsed seconds; the
//! gate answers with how many fixed steps to simulate now. Tick length
//! is never scaled by frame time.

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_CATCH_UP_STEPS, STEP_INTERVAL};

/// What happens to accumulated time once a step fires
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GatePolicy {
    /// Zero the accumulator on every step: at most one step per frame,
    /// leftover time is dropped. Long frames slow the game down rather
    /// than fast-forward it.
    #[default]
    Reset,
    /// Subtract one interval per step and run catch-up steps after a
    /// long frame, capped at `max_catch_up`; backlog past the cap is
    /// dropped.
    Carry,
}

/// Accumulates frame time and decides how many fixed steps to run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepGate {
    policy: GatePolicy,
    interval: f32,
    max_catch_up: u32,
    accumulator: f32,
}

impl Default for StepGate {
    fn default() -> Self {
        Self::new(GatePolicy::default(), STEP_INTERVAL, MAX_CATCH_UP_STEPS)
    }
}

impl StepGate {
    pub fn new(policy: GatePolicy, interval: f32, max_catch_up: u32) -> Self {
        Self {
            policy,
            interval,
            max_catch_up,
            accumulator: 0.0,
        }
    }

    /// Feed one frame's elapsed seconds; returns the number of fixed
    /// steps to simulate now (zero until a full interval has banked up).
    pub fn feed(&mut self, dt: f32) -> u32 {
        self.accumulator += dt;
        match self.policy {
            GatePolicy::Reset => {
                if self.accumulator >= self.interval {
                    self.accumulator = 0.0;
                    1
                } else {
                    0
                }
            }
            GatePolicy::Carry => {
                let mut steps = 0;
                while self.accumulator >= self.interval && steps < self.max_catch_up {
                    self.accumulator -= self.interval;
                    steps += 1;
                }
                if self.accumulator >= self.interval {
                    // Saturated; drop the backlog instead of chasing it.
                    log::warn!(
                        "step gate saturated, dropping {:.3}s of backlog",
                        self.accumulator
                    );
                    self.accumulator = 0.0;
                }
                steps
            }
        }
    }

    pub fn policy(&self) -> GatePolicy {
        self.policy
    }

    /// Seconds currently banked toward the next step
    pub fn pending(&self) -> f32 {
        self.accumulator
    }
}
