//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only, gated by `StepGate`
//! - Stable iteration order (blocks in creation order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod gate;
pub mod grid;
pub mod state;
pub mod tick;

pub use gate::{GatePolicy, StepGate};
pub use state::{GameState, MovableBox};
pub use tick::{TickInput, step};
