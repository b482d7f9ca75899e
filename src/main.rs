mod display;

use std::io::{stdout, BufWriter, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    style::{self, Color, Print},
    terminal,
    ExecutableCommand, QueueableCommand,
};
use rand::thread_rng;

use pong::compute::{final_score, init_state, tick, tick_interval_ms, winner};
use pong::entities::{GameStatus, Level, PlayerInput, Speed};

/// Smallest arena that fits both paddle insets and the tallest paddle.
const MIN_WIDTH: u16 = 40;
const MIN_HEIGHT: u16 = 27;

// ── Menu ──────────────────────────────────────────────────────────────────────

// One table serves both the game-level and computer-level screens
const LEVELS: &[(char, &str, Color, Level)] = &[
    ('1', "Easy", Color::Green, Level::Easy),
    ('2', "Normal", Color::Yellow, Level::Normal),
    ('3', "Hard", Color::Red, Level::Hard),
];

const GAME_SPEEDS: &[(char, &str, Color, Speed)] = &[
    ('1', "Slow", Color::Green, Speed::Slow),
    ('2', "Normal", Color::Yellow, Speed::Normal),
    ('3', "Fast", Color::Red, Speed::Fast),
];

/// Show one selection screen and block until the user picks an option.
/// Returns `None` when the user quits instead of choosing.
fn select_option<W: Write, T: Copy>(
    out: &mut W,
    title: &str,
    options: &[(char, &str, Color, T)],
) -> std::io::Result<Option<T>> {
    let mut show_error = false;
    loop {
        out.queue(terminal::Clear(terminal::ClearType::All))?;

        let (width, height) = terminal::size()?;
        let cx = width / 2;
        let cy = height / 2;

        let banner = "★  TERMINAL  PONG  ★";
        out.queue(cursor::MoveTo(
            cx.saturating_sub(banner.chars().count() as u16 / 2),
            cy.saturating_sub(6),
        ))?;
        out.queue(style::SetForegroundColor(Color::Cyan))?;
        out.queue(Print(banner))?;

        out.queue(cursor::MoveTo(cx.saturating_sub(10), cy.saturating_sub(3)))?;
        out.queue(style::SetForegroundColor(Color::White))?;
        out.queue(Print(title))?;

        for (i, (key, label, color, _)) in options.iter().enumerate() {
            let row = cy.saturating_sub(1) + i as u16;
            out.queue(cursor::MoveTo(cx.saturating_sub(10), row))?;
            out.queue(style::SetForegroundColor(Color::DarkGrey))?;
            out.queue(Print(format!("({}) ", key)))?;
            out.queue(style::SetForegroundColor(*color))?;
            out.queue(Print(*label))?;
        }

        if show_error {
            out.queue(cursor::MoveTo(cx.saturating_sub(10), cy + 3))?;
            out.queue(style::SetForegroundColor(Color::Red))?;
            out.queue(Print("Invalid option, please type 1, 2 or 3."))?;
        }

        out.queue(cursor::MoveTo(cx.saturating_sub(10), cy + 5))?;
        out.queue(style::SetForegroundColor(Color::DarkGrey))?;
        out.queue(Print("1 2 3 : Choose   Q : Quit"))?;

        out.queue(style::ResetColor)?;
        out.flush()?;

        // Block until the user presses something worth redrawing for
        loop {
            if let Event::Key(KeyEvent {
                code,
                modifiers,
                kind: KeyEventKind::Press,
                ..
            }) = event::read()?
            {
                match code {
                    KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                        return Ok(None);
                    }
                    KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                        return Ok(None);
                    }
                    KeyCode::Char(c) => {
                        if let Some(option) = options.iter().find(|o| o.0 == c) {
                            return Ok(Some(option.3));
                        }
                        show_error = true;
                        break;
                    }
                    _ => {
                        show_error = true;
                        break;
                    }
                }
            }
        }
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

enum GameOutcome {
    /// Someone reached the winning score — (computer, player).
    Finished((u32, u32)),
    /// The user bailed out mid-match.
    Aborted,
}

enum TickInput {
    Key(PlayerInput),
    Quit,
}

/// Wait up to one tick interval for a key.  The timed read is the frame
/// pacer: a timeout means "no key" and the tick proceeds anyway.
fn read_input(timeout: Duration) -> std::io::Result<TickInput> {
    if event::poll(timeout)? {
        if let Event::Key(KeyEvent {
            code,
            modifiers,
            kind,
            ..
        }) = event::read()?
        {
            if matches!(kind, KeyEventKind::Press | KeyEventKind::Repeat) {
                return Ok(match code {
                    KeyCode::Up => TickInput::Key(PlayerInput::Up),
                    KeyCode::Down => TickInput::Key(PlayerInput::Down),
                    KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => TickInput::Quit,
                    KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                        TickInput::Quit
                    }
                    _ => TickInput::Key(PlayerInput::None),
                });
            }
        }
    }
    Ok(TickInput::Key(PlayerInput::None))
}

fn game_loop<W: Write>(
    out: &mut W,
    game_level: Level,
    computer_level: Level,
    tick_interval: Duration,
) -> std::io::Result<GameOutcome> {
    let (width, height) = terminal::size()?;
    if width < MIN_WIDTH || height < MIN_HEIGHT {
        return Err(std::io::Error::new(
            std::io::ErrorKind::Other,
            format!(
                "terminal too small: need at least {MIN_WIDTH}x{MIN_HEIGHT}, got {width}x{height}"
            ),
        ));
    }

    let mut rng = thread_rng();
    let mut state = init_state(game_level, computer_level, width, height);

    loop {
        display::render(out, &state)?;

        let input = match read_input(tick_interval)? {
            TickInput::Quit => return Ok(GameOutcome::Aborted),
            TickInput::Key(input) => input,
        };

        state = tick(&state, input, &mut rng);

        if state.status == GameStatus::GameOver {
            return Ok(GameOutcome::Finished(final_score(&state)));
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> std::io::Result<()> {
    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    let result = run(&mut out);

    // Always restore the terminal
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    if let Some((computer_score, player_score)) = result? {
        show_game_over(computer_score, player_score);
    }
    Ok(())
}

fn run<W: Write>(out: &mut W) -> std::io::Result<Option<(u32, u32)>> {
    let Some(game_level) = select_option(out, "Select game level:", LEVELS)? else {
        return Ok(None);
    };
    let Some(computer_level) = select_option(out, "Select computer AI level:", LEVELS)? else {
        return Ok(None);
    };
    let Some(game_speed) = select_option(out, "Select game speed:", GAME_SPEEDS)? else {
        return Ok(None);
    };

    let tick_interval = Duration::from_millis(tick_interval_ms(game_speed));
    match game_loop(out, game_level, computer_level, tick_interval)? {
        GameOutcome::Finished(score) => Ok(Some(score)),
        GameOutcome::Aborted => Ok(None),
    }
}

/// Print the final score once the terminal is back to normal.
fn show_game_over(computer_score: u32, player_score: u32) {
    println!("Player score: {player_score}");
    println!("Computer score: {computer_score}");
    println!("Winner: {}!", winner(computer_score, player_score));
}
