//! Brick Breaker entry point
//!
//! On the web the page drives `platform::WebGame`. Natively there is no
//! window; the binary runs a headless attract-mode game with an autopilot
//! paddle and a file-backed high score.

#[cfg(not(target_arch = "wasm32"))]
mod attract {
    use std::path::PathBuf;

    use brick_breaker::persistence::FileStore;
    use brick_breaker::sim::{Command, GameEvent};
    use brick_breaker::{Game, GameConfig};

    /// Give up on runs the autopilot never loses
    const MAX_FRAMES: u64 = 20_000;
    /// Dead zone around the paddle center
    const TRACK_SLACK: f32 = 4.0;
    const SCORES_ENV: &str = "BRICK_BREAKER_SCORES";
    const DEFAULT_SCORES_FILE: &str = "brick-breaker-scores.json";

    /// Steer the paddle under the ball
    fn autopilot(game: &Game<FileStore>) -> Command {
        let state = game.state();
        let paddle_center = state.paddle.pos.x + state.paddle.width / 2.0;
        let ball_x = state.ball.pos.x;
        if ball_x < paddle_center - TRACK_SLACK {
            Command::MoveLeft
        } else if ball_x > paddle_center + TRACK_SLACK {
            Command::MoveRight
        } else {
            Command::StopPaddle
        }
    }

    pub fn run() {
        let path = std::env::var_os(SCORES_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SCORES_FILE));
        log::info!("Scores file: {}", path.display());

        let mut game = Game::new(GameConfig::default(), FileStore::open(path));
        game.command(Command::TogglePause);

        let mut bricks = 0u32;
        let mut refills = 0u32;
        while !game.state().is_over() && game.frames() < MAX_FRAMES {
            let steer = autopilot(&game);
            game.command(steer);
            game.frame();
            for event in game.events() {
                match event {
                    GameEvent::BrickHit { .. } => bricks += 1,
                    GameEvent::Refill => refills += 1,
                    _ => {}
                }
            }
        }

        let state = game.state();
        log::info!(
            "Attract run ended after {} frames: score {}, lives {}, bricks {}, refills {}",
            game.frames(),
            state.score,
            state.lives,
            bricks,
            refills
        );
        println!(
            "score {} | lives {} | high score {} | phase {}",
            state.score,
            state.lives,
            state.high_score,
            state.phase.as_str()
        );
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Brick Breaker (native) starting...");
    attract::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::WebGame, this is just to satisfy the compiler
}
