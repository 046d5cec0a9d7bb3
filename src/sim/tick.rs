//! Fixed-step simulation tick
//!
//! One call advances the game by one frame. Nothing happens unless the game
//! is `Playing`.

use super::geometry::{
    ball_hits_brick, ball_hits_paddle, below_floor, crosses_side_wall, crosses_top_or_bottom,
};
use super::state::{GameEvent, GamePhase, GameState};
use crate::persistence::{ScoreStore, record_high_score};

/// Advance the game state by one tick.
///
/// Order matters: paddle, ball, walls, paddle bounce, bricks, then the miss
/// check. Returns what happened, in order.
pub fn tick(state: &mut GameState, store: &mut dyn ScoreStore) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if state.phase != GamePhase::Playing {
        return events;
    }

    let field = state.config.playfield;

    state.paddle.advance(&field);
    state.ball.pos += state.ball.vel;

    // Collisions never move the ball, so one box serves the whole tick
    let ball_box = state.ball.bounds();

    if crosses_side_wall(&ball_box, &field) {
        state.ball.vel.x = -state.ball.vel.x;
        events.push(GameEvent::WallBounce);
    }
    if crosses_top_or_bottom(&ball_box, &field) {
        state.ball.vel.y = -state.ball.vel.y;
        events.push(GameEvent::WallBounce);
    }

    // Always straight up at full speed, whatever the incoming angle
    if ball_hits_paddle(&ball_box, &state.paddle.bounds()) {
        state.ball.vel.y = -state.ball.speed;
        events.push(GameEvent::PaddleBounce);
    }

    // Every overlapping brick counts, each one flipping dy again
    for row in 0..state.bricks.rows() {
        for column in 0..state.bricks.columns() {
            let Some(brick) = state.bricks.get_mut(row, column) else {
                continue;
            };
            if !brick.visible || !ball_hits_brick(&ball_box, &brick.rect) {
                continue;
            }
            brick.visible = false;
            state.ball.vel.y = -state.ball.vel.y;
            log::debug!("Brick ({}, {}) hit", row, column);
            events.push(GameEvent::BrickHit { row, column });

            if increase_score(state) {
                events.push(GameEvent::Refill);
            }
        }
    }

    if below_floor(&ball_box, &field) {
        state.lives = state.lives.saturating_sub(1);
        events.push(GameEvent::LifeLost {
            remaining: state.lives,
        });
        log::debug!("Ball lost, {} lives left", state.lives);

        if state.lives == 0 {
            state.phase = GamePhase::Over;
            let new_high_score = record_high_score(store, &mut state.high_score, state.score);
            log::info!("Game over with score {}", state.score);
            events.push(GameEvent::GameOver {
                score: state.score,
                new_high_score,
            });
        } else {
            let center = state.config.center();
            state.ball.serve_from(center);
        }
    }

    events
}

/// Add one point. Every `rows²` points the whole grid comes back.
///
/// Returns whether a refill happened.
pub fn increase_score(state: &mut GameState) -> bool {
    state.score += 1;

    let every = state.config.bricks.refill_every();
    if every > 0 && state.score.is_multiple_of(every) {
        state.bricks.show_all();
        log::info!("Score {} reached, bricks refilled", state.score);
        return true;
    }
    false
}
