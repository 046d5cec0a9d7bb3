//! Game state machine and player commands
//!
//! ```text
//! Start --toggle--> Playing --toggle--> Paused --toggle--> Playing
//! Playing --last life lost (tick)--> Over --toggle | restart--> Start
//! ```
//!
//! Commands only set paddle velocity or the phase; positions change on the
//! next tick.

use serde::{Deserialize, Serialize};

use super::state::{GamePhase, GameState};

/// A player command, already decoded from raw input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    MoveLeft,
    MoveRight,
    StopPaddle,
    /// Start, pause, resume, or restart after game over
    TogglePause,
    /// Reset everything and go back to `Start`. Only honored in `Over`.
    Restart,
}

impl GameState {
    /// Apply one command
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::MoveLeft => self.paddle.dx = -self.paddle.speed,
            Command::MoveRight => self.paddle.dx = self.paddle.speed,
            Command::StopPaddle => self.paddle.dx = 0.0,
            Command::TogglePause => self.toggle(),
            Command::Restart if self.phase == GamePhase::Over => {
                log::info!("Restarting from {}", self.phase.as_str());
                self.restart();
            }
            Command::Restart => {}
        }
    }

    /// Start/pause toggle. Its effect depends on the current phase.
    pub fn toggle(&mut self) {
        let from = self.phase;
        match from {
            GamePhase::Start | GamePhase::Paused => self.phase = GamePhase::Playing,
            GamePhase::Playing => self.phase = GamePhase::Paused,
            GamePhase::Over => self.restart(),
        }
        log::info!("Phase {} -> {}", from.as_str(), self.phase.as_str());
    }
}
