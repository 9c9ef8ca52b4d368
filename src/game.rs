//! Host-facing game facade
//!
//! A host drives the simulation as
//! `resize -> { handle_input*, advance, snapshot }*`, all on one thread.
//! `GameSimulation` owns the only copy of the state; nothing is global.

use crate::error::{LayoutError, TuningError};
use crate::sim::{
    GameEvent, GamePhase, GameState, InputEvent, Snapshot, advance, field_seed, generate_field,
    handle_input,
};
use crate::tuning::Tuning;

/// The game simulation engine
#[derive(Debug, Clone)]
pub struct GameSimulation {
    state: GameState,
}

impl GameSimulation {
    /// Create a simulation with validated tuning. Call [`GameSimulation::resize`]
    /// before the first `advance`.
    pub fn new(tuning: Tuning, seed: u64) -> Result<Self, TuningError> {
        tuning.validate()?;
        log::info!("Game simulation created with seed: {}", seed);
        Ok(Self {
            state: GameState::new(tuning, seed),
        })
    }

    /// Create a simulation with default tuning
    pub fn with_seed(seed: u64) -> Self {
        Self {
            state: GameState::new(Tuning::default(), seed),
        }
    }

    /// Lay out a field of the given size and start a new game in it.
    ///
    /// Re-centers the paddle, rests the ball on it and generates a fresh block
    /// field. Any game in progress is discarded. On error the previous state
    /// is left as it was.
    pub fn resize(&mut self, width: f32, height: f32) -> Result<(), LayoutError> {
        let tuning = &self.state.tuning;
        if !width.is_finite()
            || !height.is_finite()
            || width <= 0.0
            || height <= 0.0
            || width < tuning.block_width
        {
            log::warn!("Rejected layout {}x{}", width, height);
            return Err(LayoutError::InvalidLayout { width, height });
        }

        let seed = field_seed(self.state.seed, self.state.generation);
        let blocks = generate_field(width, tuning, seed, 1).inspect_err(|e| {
            log::warn!("Block field generation failed: {}", e);
        })?;

        self.state.reset_layout(width, height);
        self.state.blocks = blocks;
        self.state.generation += 1;
        log::info!(
            "Laid out {}x{} field with {} blocks (generation {})",
            width,
            height,
            self.state.blocks.len(),
            self.state.generation
        );
        Ok(())
    }

    /// Start over in the current field size with a new block field
    pub fn restart(&mut self) -> Result<(), LayoutError> {
        if !self.is_laid_out() {
            return Err(LayoutError::NotLaidOut);
        }
        self.resize(self.state.width, self.state.height)
    }

    /// Run one simulation step. No-op before layout and after the game ends.
    pub fn advance(&mut self) {
        if self.is_laid_out() {
            advance(&mut self.state);
        }
    }

    /// Apply a normalized pointer event
    pub fn handle_input(&mut self, event: InputEvent) {
        if self.is_laid_out() {
            handle_input(&mut self.state, event);
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state)
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase()
    }

    pub fn score(&self) -> u64 {
        self.state.score
    }

    /// Take all events produced since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.state.events.drain(..).collect()
    }

    pub fn is_laid_out(&self) -> bool {
        self.state.width > 0.0 && self.state.height > 0.0
    }

    pub fn tuning(&self) -> &Tuning {
        &self.state.tuning
    }

    /// Direct access to the full state (for hosts that need more than the snapshot)
    pub fn state(&self) -> &GameState {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Rect;
    use crate::sim::state::MAX_PENDING_EVENTS;

    fn laid_out(seed: u64) -> GameSimulation {
        let mut sim = GameSimulation::with_seed(seed);
        sim.resize(1080.0, 1920.0).unwrap();
        sim
    }

    #[test]
    fn test_resize_generates_field() {
        let sim = laid_out(1);
        let snap = sim.snapshot();
        assert_eq!(snap.blocks.len(), 10);
        assert_eq!(snap.phase, GamePhase::Aiming);
        assert_eq!(snap.score, 0);
        assert_eq!(snap.paddle, Rect::new(390.0, 1880.0, 690.0, 1920.0));
        assert_eq!(snap.ball_pos.x, 540.0);
        assert_eq!(snap.ball_pos.y, 1860.0);
    }

    #[test]
    fn test_resize_rejects_invalid_layout() {
        let mut sim = GameSimulation::with_seed(1);
        for (w, h) in [(0.0, 100.0), (100.0, -1.0), (f32::NAN, 100.0), (50.0, 500.0)] {
            assert!(matches!(
                sim.resize(w, h),
                Err(LayoutError::InvalidLayout { .. })
            ));
        }
        assert!(!sim.is_laid_out());
    }

    #[test]
    fn test_huge_width_is_accepted() {
        let mut sim = GameSimulation::with_seed(1);
        sim.resize(1e30, 1920.0).unwrap();
        assert_eq!(sim.snapshot().blocks.len(), 10);
        assert_eq!(sim.phase(), GamePhase::Aiming);
    }

    #[test]
    fn test_failed_resize_keeps_game() {
        let mut sim = laid_out(1);
        let before = sim.snapshot();
        assert!(sim.resize(-5.0, 100.0).is_err());
        assert_eq!(sim.snapshot(), before);
    }

    #[test]
    fn test_too_dense_field_rejected() {
        let tuning = Tuning {
            block_count: 50,
            ..Default::default()
        };
        let mut sim = GameSimulation::new(tuning, 1).unwrap();
        assert_eq!(
            sim.resize(300.0, 1000.0),
            Err(LayoutError::FieldTooDense {
                requested: 50,
                capacity: 33
            })
        );
    }

    #[test]
    fn test_new_rejects_invalid_tuning() {
        let tuning = Tuning {
            ball_radius: -1.0,
            ..Default::default()
        };
        assert!(GameSimulation::new(tuning, 1).is_err());
    }

    #[test]
    fn test_advance_before_layout_is_noop() {
        let mut sim = GameSimulation::with_seed(1);
        sim.handle_input(InputEvent::PressStart { x: 0.0, y: 0.0 });
        sim.handle_input(InputEvent::PressEnd { x: 0.0, y: -300.0 });
        sim.advance();
        assert_eq!(sim.phase(), GamePhase::Aiming);
        assert!(sim.drain_events().is_empty());
    }

    #[test]
    fn test_launch_and_drain_events() {
        let mut sim = laid_out(1);
        sim.handle_input(InputEvent::PressStart { x: 540.0, y: 1700.0 });
        sim.handle_input(InputEvent::PressEnd { x: 540.0, y: 1500.0 });
        assert_eq!(sim.phase(), GamePhase::InPlay);

        let events = sim.drain_events();
        assert!(matches!(events.as_slice(), [GameEvent::Launched { .. }]));
        assert!(sim.drain_events().is_empty());
    }

    #[test]
    fn test_resize_discards_game_in_progress() {
        let mut sim = laid_out(1);
        sim.handle_input(InputEvent::PressStart { x: 540.0, y: 1700.0 });
        sim.handle_input(InputEvent::PressEnd { x: 540.0, y: 1500.0 });
        for _ in 0..10 {
            sim.advance();
        }

        sim.resize(720.0, 1280.0).unwrap();
        assert_eq!(sim.phase(), GamePhase::Aiming);
        assert_eq!(sim.score(), 0);
        assert_eq!(sim.snapshot().blocks.len(), 10);
        assert_eq!(sim.state().width, 720.0);
    }

    #[test]
    fn test_undrained_events_are_capped() {
        let mut sim = laid_out(1);
        sim.handle_input(InputEvent::PressStart { x: 540.0, y: 1700.0 });
        sim.handle_input(InputEvent::PressEnd { x: 540.0, y: 1500.0 });
        for _ in 0..50_000 {
            let x = sim.snapshot().ball_pos.x;
            sim.handle_input(InputEvent::PressMove { x, y: 1800.0 });
            sim.advance();
        }
        assert!(sim.drain_events().len() <= MAX_PENDING_EVENTS);
    }

    #[test]
    fn test_restart_regenerates_field() {
        let mut sim = laid_out(1);
        let first = sim.snapshot().blocks;
        sim.restart().unwrap();
        let second = sim.snapshot().blocks;
        assert_eq!(second.len(), 10);
        assert_ne!(first, second);
        assert_eq!(sim.state().generation, 2);
    }

    #[test]
    fn test_restart_before_layout() {
        let mut sim = GameSimulation::with_seed(1);
        assert_eq!(sim.restart(), Err(LayoutError::NotLaidOut));
    }

    #[test]
    fn test_same_seed_same_field() {
        assert_eq!(laid_out(42).snapshot(), laid_out(42).snapshot());
    }
}
