/// Pure game-logic functions.
///
/// Every public function takes an immutable reference to the current state
/// (and, where needed, an RNG handle) and returns a brand-new value.
/// Side effects are limited to the injected RNG.

use rand::Rng;

use crate::entities::{
    Ball, GameState, GameStatus, Level, Paddle, PaddleCommand, PlayerInput, Speed, Velocity,
};

/// First score to reach this wins the match.
pub const WINNING_SCORE: u32 = 10;

pub const PADDLE_WIDTH: i32 = 2;
pub const BALL_SIZE: i32 = 2;

/// Horizontal distance of each paddle from its own wall.
pub const PADDLE_INSET: i32 = 10;

// ── Difficulty tables ────────────────────────────────────────────────────────

/// Paddle height per game level — a taller paddle is an easier game.
pub fn paddle_height(level: Level) -> i32 {
    match level {
        Level::Easy => 15,
        Level::Normal => 10,
        Level::Hard => 5,
    }
}

/// Chance per tick that the computer paddle skips its move — a higher
/// skip chance is a weaker opponent.
pub fn skip_probability(level: Level) -> f64 {
    match level {
        Level::Easy => 0.5,
        Level::Normal => 0.2,
        Level::Hard => 0.05,
    }
}

/// Tick interval in milliseconds — pacing for both rendering and the
/// timed key read.
pub fn tick_interval_ms(speed: Speed) -> u64 {
    match speed {
        Speed::Slow => 200,
        Speed::Normal => 100,
        Speed::Fast => 50,
    }
}

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the initial match state for the chosen levels and arena dimensions.
pub fn init_state(game_level: Level, computer_level: Level, width: u16, height: u16) -> GameState {
    let width = width as i32;
    let height = height as i32;
    let paddle_height = paddle_height(game_level);
    GameState {
        player_paddle: Paddle {
            x: PADDLE_INSET,
            y: 10,
            width: PADDLE_WIDTH,
            height: paddle_height,
        },
        computer_paddle: Paddle {
            x: width - PADDLE_INSET,
            y: height - (paddle_height + 10),
            width: PADDLE_WIDTH,
            height: paddle_height,
        },
        skip_probability: skip_probability(computer_level),
        ball: new_ball(width, height, Velocity { x: 1, y: 1 }),
        player_score: 0,
        computer_score: 0,
        status: GameStatus::Playing,
        width,
        height,
    }
}

/// A fresh ball, centred in the arena.
fn new_ball(width: i32, height: i32, velocity: Velocity) -> Ball {
    Ball {
        x: width / 2 - 1,
        y: height / 2 - 1,
        width: BALL_SIZE,
        height: BALL_SIZE,
        velocity,
    }
}

// ── Paddle mechanics (shared by both control policies) ───────────────────────

pub fn is_touching_top_wall(paddle: &Paddle) -> bool {
    paddle.y <= 1
}

pub fn is_touching_bottom_wall(paddle: &Paddle, arena_height: i32) -> bool {
    paddle.y + paddle.height >= arena_height - 1
}

/// Apply one movement command with silent wall clamping — a blocked step
/// is a no-op, never an error.
pub fn move_paddle(paddle: &Paddle, command: PaddleCommand, arena_height: i32) -> Paddle {
    let y = match command {
        PaddleCommand::Up if !is_touching_top_wall(paddle) => paddle.y - 1,
        PaddleCommand::Down if !is_touching_bottom_wall(paddle, arena_height) => paddle.y + 1,
        _ => paddle.y,
    };
    Paddle { y, ..paddle.clone() }
}

// ── Control policies ─────────────────────────────────────────────────────────

pub fn player_command(input: PlayerInput) -> PaddleCommand {
    match input {
        PlayerInput::Up => PaddleCommand::Up,
        PlayerInput::Down => PaddleCommand::Down,
        PlayerInput::None => PaddleCommand::Stay,
    }
}

/// Decide the computer paddle's move from the ball's row.  Exactly one
/// random draw happens per call, whether or not the tick is skipped.
pub fn computer_command(
    paddle: &Paddle,
    ball_y: i32,
    skip_probability: f64,
    rng: &mut impl Rng,
) -> PaddleCommand {
    if rng.gen::<f64>() < skip_probability {
        return PaddleCommand::Stay; // computer sits this tick out
    }
    if ball_y > paddle.y + paddle.width {
        // ball is below the paddle's tracking margin
        PaddleCommand::Down
    } else if ball_y < paddle.y {
        // ball is above the paddle
        PaddleCommand::Up
    } else {
        PaddleCommand::Stay
    }
}

// ── Ball movement & collision predicates ─────────────────────────────────────

pub fn move_ball(ball: &Ball) -> Ball {
    Ball {
        x: ball.x + ball.velocity.x,
        y: ball.y + ball.velocity.y,
        ..ball.clone()
    }
}

pub fn has_hit_left_paddle(ball: &Ball, paddle: &Paddle) -> bool {
    ball.x == paddle.x + paddle.width
        && paddle.y <= ball.y + ball.height
        && ball.y <= paddle.y + paddle.height
}

pub fn has_hit_right_paddle(ball: &Ball, paddle: &Paddle) -> bool {
    ball.x == paddle.x - ball.width
        && paddle.y <= ball.y + ball.height
        && ball.y <= paddle.y + paddle.height
}

/// Left or right arena wall — the scoring event.
pub fn has_hit_vertical_wall(ball: &Ball, arena_width: i32) -> bool {
    ball.x == 1 || ball.x == arena_width - (ball.width + 1)
}

/// Top or bottom arena wall — a plain bounce.
pub fn has_hit_horizontal_wall(ball: &Ball, arena_height: i32) -> bool {
    ball.y == 1 || ball.y == arena_height - (ball.height + 1)
}

// ── Per-tick step ────────────────────────────────────────────────────────────

/// Advance the match by one tick.  All randomness comes through `rng` so
/// callers control determinism (useful for tests with a seeded RNG).
///
/// Order matters: paddles move before the ball, collisions are resolved
/// against the moved positions, and scoring replaces the ball outright.
pub fn tick(state: &GameState, input: PlayerInput, rng: &mut impl Rng) -> GameState {
    let player_paddle = move_paddle(&state.player_paddle, player_command(input), state.height);
    let computer_paddle = move_paddle(
        &state.computer_paddle,
        computer_command(
            &state.computer_paddle,
            state.ball.y,
            state.skip_probability,
            rng,
        ),
        state.height,
    );
    let mut ball = move_ball(&state.ball);

    // Paddle contact reflects the ball horizontally.  Only one of the two
    // predicates can hold on a given tick, the paddles sit on opposite sides.
    if has_hit_left_paddle(&ball, &player_paddle) || has_hit_right_paddle(&ball, &computer_paddle) {
        ball.velocity.x = -ball.velocity.x;
    }
    if has_hit_horizontal_wall(&ball, state.height) {
        ball.velocity.y = -ball.velocity.y;
    }

    let mut player_score = state.player_score;
    let mut computer_score = state.computer_score;
    if has_hit_vertical_wall(&ball, state.width) {
        if ball.x == 1 {
            computer_score += 1; // ball escaped past the player
        }
        if ball.x == state.width - (ball.width + 1) {
            player_score += 1; // ball escaped past the computer
        }
        // Serve: a brand-new centred ball, horizontal direction reversed.
        ball = new_ball(
            state.width,
            state.height,
            Velocity {
                x: -ball.velocity.x,
                y: ball.velocity.y,
            },
        );
    }

    let status = if computer_score == WINNING_SCORE || player_score == WINNING_SCORE {
        GameStatus::GameOver
    } else {
        GameStatus::Playing
    };

    GameState {
        player_paddle,
        computer_paddle,
        ball,
        player_score,
        computer_score,
        status,
        ..state.clone()
    }
}

// ── Match result ─────────────────────────────────────────────────────────────

/// Final score in (computer, player) order.
pub fn final_score(state: &GameState) -> (u32, u32) {
    (state.computer_score, state.player_score)
}

pub fn winner(computer_score: u32, player_score: u32) -> &'static str {
    if computer_score > player_score {
        "Computer"
    } else {
        "Player"
    }
}
