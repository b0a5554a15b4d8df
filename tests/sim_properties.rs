//! Property tests for the fixed-step simulation invariants

use proptest::prelude::*;

use rebound::consts::VIEWPORT_WIDTH;
use rebound::sim::{GameState, GatePolicy, StepGate, TickInput, step};
use rebound::Tuning;

fn any_input() -> impl Strategy<Value = TickInput> {
    (any::<bool>(), any::<bool>()).prop_map(|(left, right)| TickInput { left, right })
}

proptest! {
    #[test]
    fn paddle_never_leaves_playfield(script in prop::collection::vec(any_input(), 1..500)) {
        let tuning = Tuning::default();
        let mut state = GameState::new(&tuning);
        for input in &script {
            step(&mut state, input, &tuning);
            prop_assert!(state.paddle.pos.x >= 0.0);
            prop_assert!(state.paddle.pos.x + state.paddle.size.x <= VIEWPORT_WIDTH);
        }
    }

    #[test]
    fn ball_waits_for_first_direction_input(idle_ticks in 0u32..200) {
        let tuning = Tuning::default();
        let mut state = GameState::new(&tuning);
        let rest = state.ball.pos;

        for _ in 0..idle_ticks {
            step(&mut state, &TickInput::default(), &tuning);
            prop_assert_eq!(state.ball.pos, rest);
        }

        // The first held direction releases the ball the same tick, and
        // it keeps moving on idle ticks afterwards.
        step(&mut state, &TickInput { right: true, ..Default::default() }, &tuning);
        prop_assert!(state.ball.pos != rest);
        let mut last = state.ball.pos;
        for _ in 0..5 {
            step(&mut state, &TickInput::default(), &tuning);
            prop_assert!(state.ball.pos != last);
            last = state.ball.pos;
        }
    }

    #[test]
    fn sub_inertia_momentum_never_decays(residual in -0.99f32..0.99, ticks in 1u32..100) {
        let tuning = Tuning::default();
        let mut state = GameState::new(&tuning);
        state.paddle.vel.x = residual;

        let mut expected_x = state.paddle.pos.x;
        for _ in 0..ticks {
            step(&mut state, &TickInput::default(), &tuning);
            expected_x += residual;
            prop_assert_eq!(state.paddle.vel.x, residual);
            prop_assert_eq!(state.paddle.pos.x, expected_x);
        }
    }

    #[test]
    fn reflections_preserve_ball_speed(script in prop::collection::vec(any_input(), 1..500)) {
        let tuning = Tuning::default();
        let mut state = GameState::new(&tuning);
        for input in &script {
            step(&mut state, input, &tuning);
            // Walls and paddle only ever flip signs.
            prop_assert_eq!(state.ball.vel.x.abs(), 1.0);
            prop_assert_eq!(state.ball.vel.y.abs(), 2.0);
        }
    }

    #[test]
    fn gates_respect_their_step_caps(frames in prop::collection::vec(0.0f32..0.25, 1..200)) {
        let tuning = Tuning::default();
        let mut reset = StepGate::new(GatePolicy::Reset, tuning.step_interval, tuning.max_catch_up);
        let mut carry = StepGate::new(GatePolicy::Carry, tuning.step_interval, tuning.max_catch_up);

        for &dt in &frames {
            prop_assert!(reset.feed(dt) <= 1);
            prop_assert!(carry.feed(dt) <= tuning.max_catch_up);
        }
    }
}
