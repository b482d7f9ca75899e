/// All game entity types — pure data, no logic.

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Level {
    Easy,
    Normal,
    Hard,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Speed {
    Slow,
    Normal,
    Fast,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GameStatus {
    Playing,
    GameOver,
}

/// What the player's key read produced this tick.  Anything other than the
/// two arrow keys (including a timed-out read) is `None`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PlayerInput {
    Up,
    Down,
    None,
}

/// A movement decision for one paddle on one tick.  Both control policies
/// produce one of these; the shared clamped-step mechanics apply it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PaddleCommand {
    Up,
    Down,
    Stay,
}

/// Per-tick displacement of the ball.  Components are always ±1: collisions
/// flip a sign, never the magnitude.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Velocity {
    pub x: i32,
    pub y: i32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Paddle {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// Every ball owns its velocity — respawned balls carry a fresh one.
#[derive(Clone, Debug, PartialEq)]
pub struct Ball {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub velocity: Velocity,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire match state.  Cloneable so pure update functions can
/// return a new copy without mutating the original.
#[derive(Clone, Debug)]
pub struct GameState {
    pub player_paddle: Paddle,
    pub computer_paddle: Paddle,
    /// Per-tick chance that the computer paddle sits a tick out.
    /// Higher value = weaker opponent.
    pub skip_probability: f64,
    pub ball: Ball,
    pub player_score: u32,
    pub computer_score: u32,
    pub status: GameStatus,
    pub width: i32,
    pub height: i32,
}
