//! Host lifecycle: construct, initialize, load content, run
//!
//! Game frameworks usually drive these stages as callbacks; here they
//! are an explicit state machine the embedder steps from its own outer
//! loop. Phase order is enforced, so a skipped stage surfaces as an
//! error instead of a handle-less draw.

use std::fmt;

use crate::consts::{VIEWPORT_HEIGHT, VIEWPORT_WIDTH};
use crate::platform::input::InputSnapshot;
use crate::platform::video::{ContentError, SpriteBatch, TextureId, TextureLoader};
use crate::scene;
use crate::sim::gate::StepGate;
use crate::sim::state::GameState;
use crate::sim::tick::{self, TickInput};
use crate::tuning::Tuning;

/// Asset names resolved during load-content
pub const BACKGROUND_ASSET: &str = "background";
/// Shared by the paddle and every block
pub const BLANK_ASSET: &str = "blank";
pub const BALL_ASSET: &str = "ball";

/// Lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostPhase {
    /// Built: viewport fixed, entity starting state in place
    Constructed,
    /// Initialized, waiting for content
    Initialized,
    /// Content resolved; frame/draw are legal
    Loaded,
    /// Exit requested; the outer loop should stop
    Exited,
}

/// Lifecycle errors surfaced to the embedder
#[derive(Debug)]
pub enum HostError {
    /// A lifecycle call arrived out of order
    Phase {
        expected: HostPhase,
        found: HostPhase,
    },
    /// A texture failed to resolve during load-content
    Content(ContentError),
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostError::Phase { expected, found } => {
                write!(f, "host is {found:?}, call valid only in {expected:?}")
            }
            HostError::Content(err) => write!(f, "content load failed: {err}"),
        }
    }
}

impl std::error::Error for HostError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HostError::Content(err) => Some(err),
            HostError::Phase { .. } => None,
        }
    }
}

impl From<ContentError> for HostError {
    fn from(err: ContentError) -> Self {
        HostError::Content(err)
    }
}

/// What a single host frame did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameReport {
    /// Fixed steps simulated this frame (zero when gated)
    pub steps: u32,
    /// The player asked to quit; the loop should break
    pub exit: bool,
}

/// Owns the game state and walks it through the lifecycle.
pub struct Host {
    tuning: Tuning,
    state: GameState,
    gate: StepGate,
    phase: HostPhase,
    background: TextureId,
}

impl Host {
    /// Construct phase: fix the viewport and build the starting state.
    pub fn new(tuning: Tuning) -> Self {
        let state = GameState::new(&tuning);
        let gate = StepGate::new(tuning.gate, tuning.step_interval, tuning.max_catch_up);
        log::info!(
            "host constructed: viewport {}x{}, {} blocks",
            VIEWPORT_WIDTH,
            VIEWPORT_HEIGHT,
            state.blocks.len()
        );
        Self {
            tuning,
            state,
            gate,
            phase: HostPhase::Constructed,
            background: TextureId::default(),
        }
    }

    /// Back-buffer size, fixed for the life of the process
    pub fn viewport(&self) -> (u32, u32) {
        (VIEWPORT_WIDTH as u32, VIEWPORT_HEIGHT as u32)
    }

    pub fn phase(&self) -> HostPhase {
        self.phase
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Initialize phase. Nothing happens beyond the transition; the
    /// stage exists so embedders keep one place for pre-content setup.
    pub fn initialize(&mut self) -> Result<(), HostError> {
        self.expect_phase(HostPhase::Constructed)?;
        self.phase = HostPhase::Initialized;
        log::info!("host initialized");
        Ok(())
    }

    /// Load-content phase: resolve every texture handle, one load per
    /// distinct asset name.
    pub fn load_content(&mut self, loader: &mut dyn TextureLoader) -> Result<(), HostError> {
        self.expect_phase(HostPhase::Initialized)?;

        self.background = loader.load(BACKGROUND_ASSET)?;
        let blank = loader.load(BLANK_ASSET)?;
        self.state.paddle.texture = blank;
        for block in &mut self.state.blocks {
            block.texture = blank;
        }
        self.state.ball.texture = loader.load(BALL_ASSET)?;

        self.phase = HostPhase::Loaded;
        log::info!("content loaded");
        Ok(())
    }

    /// Run one host frame: sample exit intent, then let the gate decide
    /// how many fixed steps to simulate. Rendering is separate; call
    /// `draw` as often as the embedder repaints.
    pub fn frame(&mut self, dt: f32, input: &InputSnapshot) -> Result<FrameReport, HostError> {
        self.expect_phase(HostPhase::Loaded)?;

        if input.exit_requested() {
            self.phase = HostPhase::Exited;
            log::info!("exit requested after {} ticks", self.state.time_ticks);
            return Ok(FrameReport {
                steps: 0,
                exit: true,
            });
        }

        let steps = self.gate.feed(dt);
        let tick_input = TickInput {
            left: input.left,
            right: input.right,
        };
        for _ in 0..steps {
            tick::step(&mut self.state, &tick_input, &self.tuning);
        }

        Ok(FrameReport { steps, exit: false })
    }

    /// Draw callback: submit the scene inside one begin/end scope.
    pub fn draw(&self, batch: &mut dyn SpriteBatch) -> Result<(), HostError> {
        self.expect_phase(HostPhase::Loaded)?;

        batch.begin();
        for sprite in scene::draw_list(&self.state, self.background) {
            batch.draw(sprite.texture, sprite.dest, sprite.tint);
        }
        batch.end();
        Ok(())
    }

    fn expect_phase(&self, expected: HostPhase) -> Result<(), HostError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(HostError::Phase {
                expected,
                found: self.phase,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::headless::{HeadlessTextures, TraceBatch};

    fn loaded_host() -> Host {
        let mut host = Host::new(Tuning::default());
        host.initialize().unwrap();
        host.load_content(&mut HeadlessTextures::new()).unwrap();
        host
    }

    #[test]
    fn test_phase_order_enforced() {
        let mut host = Host::new(Tuning::default());
        assert_eq!(host.phase(), HostPhase::Constructed);

        // Skipping ahead fails.
        let err = host.frame(0.05, &InputSnapshot::default()).unwrap_err();
        assert!(matches!(err, HostError::Phase { .. }));
        assert!(host.load_content(&mut HeadlessTextures::new()).is_err());

        host.initialize().unwrap();
        // Repeating a stage fails too.
        assert!(host.initialize().is_err());

        host.load_content(&mut HeadlessTextures::new()).unwrap();
        assert_eq!(host.phase(), HostPhase::Loaded);
    }

    #[test]
    fn test_load_content_resolves_each_asset_once() {
        let mut host = Host::new(Tuning::default());
        host.initialize().unwrap();
        let mut textures = HeadlessTextures::new();
        host.load_content(&mut textures).unwrap();

        assert_eq!(textures.loaded(), ["background", "blank", "ball"]);
        // Paddle and blocks share the blank texture; the ball has its own.
        let state = host.state();
        assert_eq!(state.paddle.texture, TextureId(2));
        assert!(state.blocks.iter().all(|b| b.texture == TextureId(2)));
        assert_eq!(state.ball.texture, TextureId(3));
    }

    #[test]
    fn test_load_content_failure_propagates() {
        struct NoAssets;
        impl TextureLoader for NoAssets {
            fn load(&mut self, name: &str) -> Result<TextureId, ContentError> {
                Err(ContentError::new(name))
            }
        }

        let mut host = Host::new(Tuning::default());
        host.initialize().unwrap();
        let err = host.load_content(&mut NoAssets).unwrap_err();
        assert!(matches!(err, HostError::Content(_)));
        // The phase did not advance.
        assert_eq!(host.phase(), HostPhase::Initialized);
    }

    #[test]
    fn test_frame_respects_gate() {
        let mut host = loaded_host();
        let idle = InputSnapshot::default();

        // Too little time banked: no step runs.
        let report = host.frame(0.01, &idle).unwrap();
        assert_eq!(report.steps, 0);
        assert_eq!(host.state().time_ticks, 0);

        // Crossing the threshold runs exactly one step.
        let report = host.frame(0.04, &idle).unwrap();
        assert_eq!(report.steps, 1);
        assert_eq!(host.state().time_ticks, 1);
    }

    #[test]
    fn test_frame_routes_direction_input() {
        let mut host = loaded_host();
        let right = InputSnapshot {
            right: true,
            ..Default::default()
        };

        host.frame(0.05, &right).unwrap();
        assert!(host.state().started);
        assert_eq!(host.state().paddle.pos.x, 293.0);
    }

    #[test]
    fn test_escape_exits() {
        let mut host = loaded_host();
        let escape = InputSnapshot {
            escape: true,
            ..Default::default()
        };

        let report = host.frame(0.05, &escape).unwrap();
        assert!(report.exit);
        assert_eq!(report.steps, 0);
        assert_eq!(host.phase(), HostPhase::Exited);

        // The host is done; further frames are a phase error.
        assert!(host.frame(0.05, &escape).is_err());
    }

    #[test]
    fn test_back_button_exits() {
        let mut host = loaded_host();
        let back = InputSnapshot {
            back: true,
            ..Default::default()
        };
        assert!(host.frame(0.05, &back).unwrap().exit);
    }

    #[test]
    fn test_draw_submits_one_scope() {
        let host = loaded_host();
        let mut batch = TraceBatch::new();
        host.draw(&mut batch).unwrap();

        assert_eq!(batch.frame_count(), 1);
        assert_eq!(batch.sprites().len(), 24);
        // Background first, using the handle resolved at load time.
        assert_eq!(batch.sprites()[0].texture, TextureId(1));
    }

    #[test]
    fn test_draw_before_load_fails() {
        let host = Host::new(Tuning::default());
        let mut batch = TraceBatch::new();
        assert!(host.draw(&mut batch).is_err());
    }
}
