//! Per-frame driver
//!
//! `Game` owns the state and the score store. A host calls
//! `key` as input arrives and `frame` once per animation frame.

use crate::config::GameConfig;
use crate::persistence::{ScoreStore, load_high_score};
use crate::platform::input::{KeyEdge, map_key};
use crate::renderer::Scene;
use crate::sim::{Command, GameEvent, GameState, tick};

/// A running game
pub struct Game<S: ScoreStore> {
    state: GameState,
    store: S,
    /// Events from the most recent frame
    events: Vec<GameEvent>,
    frames: u64,
}

impl<S: ScoreStore> Game<S> {
    /// New game. The high score is read from `store` once, here.
    pub fn new(config: GameConfig, store: S) -> Self {
        let high_score = load_high_score(&store);
        Self {
            state: GameState::new(config, high_score),
            store,
            events: Vec::new(),
            frames: 0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Raw state access for test setup. Writes here bypass the state
    /// machine; hosts drive the game through `key` and `command`.
    #[doc(hidden)]
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn command(&mut self, command: Command) {
        self.state.apply(command);
    }

    /// Raw key event. Returns whether it mapped to a command.
    pub fn key(&mut self, key: &str, edge: KeyEdge) -> bool {
        match map_key(key, edge) {
            Some(command) => {
                self.command(command);
                true
            }
            None => false,
        }
    }

    /// Advance one frame and return what to draw.
    ///
    /// The simulation steps only while playing; the scene is built every
    /// frame.
    pub fn frame(&mut self) -> Scene {
        self.frames += 1;
        self.events = tick(&mut self.state, &mut self.store);
        for event in &self.events {
            match event {
                GameEvent::GameOver {
                    score,
                    new_high_score,
                } => log::info!(
                    "Run finished on frame {}: score {}{}",
                    self.frames,
                    score,
                    if *new_high_score { " (new high score)" } else { "" }
                ),
                GameEvent::Refill => log::debug!("Refill on frame {}", self.frames),
                _ => {}
            }
        }
        Scene::build(&self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::{HIGH_SCORE_KEY, MemoryStore};
    use crate::sim::GamePhase;

    #[test]
    fn test_high_score_loaded_at_start() {
        let game = Game::new(
            GameConfig::default(),
            MemoryStore::with_value(HIGH_SCORE_KEY, 21),
        );
        assert_eq!(game.state().high_score, 21);
    }

    #[test]
    fn test_space_starts_and_pauses() {
        let mut game = Game::new(GameConfig::default(), MemoryStore::new());
        assert!(game.key(" ", KeyEdge::Down));
        assert_eq!(game.state().phase, GamePhase::Playing);

        let before = game.state().ball.pos;
        game.frame();
        assert_ne!(game.state().ball.pos, before);

        game.key(" ", KeyEdge::Down);
        assert_eq!(game.state().phase, GamePhase::Paused);
        let paused_at = game.state().ball.pos;
        let scene = game.frame();
        assert_eq!(game.state().ball.pos, paused_at);
        assert_eq!(scene.phase, GamePhase::Paused);
    }

    #[test]
    fn test_key_down_takes_effect_next_frame() {
        let mut game = Game::new(GameConfig::default(), MemoryStore::new());
        game.key(" ", KeyEdge::Down);
        let x = game.state().paddle.pos.x;

        game.key("ArrowRight", KeyEdge::Down);
        assert_eq!(game.state().paddle.pos.x, x);
        game.frame();
        assert_eq!(game.state().paddle.pos.x, x + 8.0);

        game.key("ArrowRight", KeyEdge::Up);
        game.frame();
        assert_eq!(game.state().paddle.pos.x, x + 8.0);
    }

    #[test]
    fn test_unknown_key_is_dropped() {
        let mut game = Game::new(GameConfig::default(), MemoryStore::new());
        assert!(!game.key("x", KeyEdge::Down));
        assert_eq!(game.state().phase, GamePhase::Start);
    }

    #[test]
    fn test_frame_counts_and_records_events() {
        let mut game = Game::new(GameConfig::default(), MemoryStore::new());
        game.frame();
        assert_eq!(game.frames(), 1);
        assert!(game.events().is_empty());

        game.command(Command::TogglePause);
        game.frame();
        // The serve position sits on brick (4, 4)
        assert!(
            game.events()
                .contains(&GameEvent::BrickHit { row: 4, column: 4 })
        );
    }
}
