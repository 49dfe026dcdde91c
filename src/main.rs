//! Terminal front end.
//!
//! Usage: `snakes-ladders [config.json]`
//!
//! `SNAKES_SEED` overrides the die seed; `RUST_LOG` controls log output on
//! stderr.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::time::Instant;

use snakes_ladders::core::{Board, SquareKind, ROW_WIDTH};
use snakes_ladders::{GameConfig, GameEvent, Side, TurnEngine};
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Debug, PartialEq, Eq)]
enum Command {
    Roll,
    Reset,
    Name(String),
    Sound(bool),
    History,
    Board,
    Help,
    Quit,
}

impl Command {
    fn parse(line: &str) -> Option<Command> {
        let line = line.trim();
        let (word, rest) = line.split_once(' ').unwrap_or((line, ""));
        let rest = rest.trim();

        match (word.to_ascii_lowercase().as_str(), rest) {
            ("" | "r" | "roll", "") => Some(Command::Roll),
            ("reset" | "again", "") => Some(Command::Reset),
            ("name", name) if !name.is_empty() => Some(Command::Name(name.to_string())),
            ("sound", "on") => Some(Command::Sound(true)),
            ("sound", "off") => Some(Command::Sound(false)),
            ("h" | "history", "") => Some(Command::History),
            ("b" | "board", "") => Some(Command::Board),
            ("?" | "help", "") => Some(Command::Help),
            ("q" | "quit" | "exit", "") => Some(Command::Quit),
            _ => None,
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = match load_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("snakes-ladders: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut engine = TurnEngine::new(config);
    let stdin = io::stdin();
    let mut out = io::stdout();

    match run(&mut engine, stdin.lock(), &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("snakes-ladders: {err}");
            ExitCode::FAILURE
        }
    }
}

fn load_config() -> snakes_ladders::Result<GameConfig> {
    let mut config = match std::env::args().nth(1) {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::new(),
    };

    if let Ok(seed) = std::env::var("SNAKES_SEED") {
        match seed.parse() {
            Ok(seed) => config.seed = Some(seed),
            Err(_) => warn!(%seed, "ignoring SNAKES_SEED: not a number"),
        }
    }

    Ok(config)
}

fn run<D, R, W>(engine: &mut TurnEngine<D>, input: R, out: &mut W) -> io::Result<()>
where
    D: snakes_ladders::Dice,
    R: BufRead,
    W: Write,
{
    let mut last_tick = Instant::now();

    writeln!(out, "🐍 Snakes & Ladders 🪜")?;
    render_board(engine, out)?;
    write_help(out)?;
    prompt(engine, out)?;

    for line in input.lines() {
        let line = line?;
        sync_clock(engine, &mut last_tick);

        match Command::parse(&line) {
            Some(Command::Roll) => {
                if engine.phase().is_won() {
                    writeln!(out, "The game is over. Type `reset` to play again.")?;
                } else {
                    take_turn(engine, Side::Human, out, &mut last_tick)?;
                    while engine.computer_should_roll() {
                        take_turn(engine, Side::Computer, out, &mut last_tick)?;
                    }
                    render_board(engine, out)?;
                }
            }
            Some(Command::Reset) => {
                if !engine.reset() {
                    writeln!(out, "You can start over once someone wins.")?;
                }
                render_events(engine, out)?;
                last_tick = Instant::now();
            }
            Some(Command::Name(name)) => {
                engine.set_player_name(name);
                writeln!(out, "Name set to {}.", engine.display_name(Side::Human))?;
            }
            Some(Command::Sound(enabled)) => {
                engine.set_sound_enabled(enabled);
                writeln!(out, "Sound {}.", if enabled { "on" } else { "off" })?;
            }
            Some(Command::History) => render_history(engine, out)?,
            Some(Command::Board) => render_board(engine, out)?,
            Some(Command::Help) => write_help(out)?,
            Some(Command::Quit) => break,
            None => writeln!(out, "Unknown command. Type `help` for a list.")?,
        }

        prompt(engine, out)?;
    }

    Ok(())
}

/// Roll for one side, wait out its presentation delay, then apply it.
fn take_turn<D, W>(
    engine: &mut TurnEngine<D>,
    side: Side,
    out: &mut W,
    last_tick: &mut Instant,
) -> io::Result<()>
where
    D: snakes_ladders::Dice,
    W: Write,
{
    let Some(pending) = engine.request_roll(side) else {
        return Ok(());
    };

    if side == Side::Computer {
        writeln!(out, "{} is thinking...", engine.display_name(side))?;
    } else {
        writeln!(out, "Rolling...")?;
    }
    out.flush()?;
    std::thread::sleep(pending.delay);

    sync_clock(engine, last_tick);
    engine.complete_roll();
    render_events(engine, out)
}

fn sync_clock<D: snakes_ladders::Dice>(engine: &mut TurnEngine<D>, last_tick: &mut Instant) {
    let now = Instant::now();
    engine.advance_clock(now - *last_tick);
    *last_tick = now;
}

fn render_events<D, W>(engine: &mut TurnEngine<D>, out: &mut W) -> io::Result<()>
where
    D: snakes_ladders::Dice,
    W: Write,
{
    for event in engine.drain_events() {
        if event.wants_sound() {
            write!(out, "\x07")?;
        }

        match event {
            GameEvent::DiceRolled { side, value, .. } => {
                writeln!(out, "🎲 {} rolled {}", engine.display_name(side), value)?;
            }
            GameEvent::Moved(record) => {
                writeln!(out, "   {} → {}", record.from, record.to)?;
                if record.overshoot {
                    writeln!(out, "   Cannot exceed 100!")?;
                } else if record.transition.is_some() {
                    writeln!(out, "   {}", record.message())?;
                }
            }
            GameEvent::Won { elapsed_secs, .. } => {
                if let Some(banner) = engine.winner_banner() {
                    writeln!(out, "\n{banner}")?;
                }
                writeln!(out, "Time: {}", snakes_ladders::core::format_clock(elapsed_secs))?;
                writeln!(out, "Type `reset` to play again.")?;
            }
            GameEvent::Reset => writeln!(out, "New game.")?,
        }
    }

    Ok(())
}

fn render_board<D, W>(engine: &TurnEngine<D>, out: &mut W) -> io::Result<()>
where
    D: snakes_ladders::Dice,
    W: Write,
{
    let board = engine.board();
    let squares: Vec<_> = Board::squares_top_down().collect();

    writeln!(out)?;
    for row in squares.chunks(ROW_WIDTH) {
        for &square in row {
            let tokens: String = engine
                .players()
                .iter()
                .filter(|(_, p)| p.position == square)
                .map(|(side, _)| if side == Side::Human { 'H' } else { 'C' })
                .collect();

            let cell = if tokens.is_empty() {
                let mark = match board.kind(square) {
                    SquareKind::Snake { .. } => "s",
                    SquareKind::Ladder { .. } => "L",
                    SquareKind::Finish => "*",
                    SquareKind::Plain => "",
                };
                format!("{square}{mark}")
            } else {
                format!("[{tokens}]")
            };
            write!(out, "{cell:>6}")?;
        }
        writeln!(out)?;
    }

    writeln!(out, "\n  s = snake, L = ladder, H = you, C = computer")?;
    writeln!(out, "  ⏱️  {}", engine.clock())?;
    for (side, player) in engine.players().iter() {
        writeln!(
            out,
            "  {} {:<12} position {:>3}   last roll {}",
            player.icon,
            engine.display_name(side),
            player.position,
            engine.last_die(side)
        )?;
    }

    Ok(())
}

fn render_history<D, W>(engine: &TurnEngine<D>, out: &mut W) -> io::Result<()>
where
    D: snakes_ladders::Dice,
    W: Write,
{
    if engine.history().is_empty() {
        return writeln!(out, "No moves yet.");
    }

    for record in engine.history_newest_first() {
        let who = if record.is_computer {
            format!("🤖 {}", engine.display_name(Side::Computer))
        } else {
            format!("👤 {}", engine.display_name(Side::Human))
        };
        write!(out, "{who} rolled {}: {} → {}", record.die, record.from, record.to)?;
        if record.transition.is_some() {
            write!(out, "  ({})", record.message())?;
        }
        writeln!(out)?;
    }

    Ok(())
}

fn prompt<D, W>(engine: &TurnEngine<D>, out: &mut W) -> io::Result<()>
where
    D: snakes_ladders::Dice,
    W: Write,
{
    let label = if engine.phase().is_won() { "game over" } else { "your roll" };
    write!(out, "[{}] > ", label)?;
    out.flush()
}

fn write_help<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Commands:")?;
    writeln!(out, "  roll (or Enter)   roll the die")?;
    writeln!(out, "  reset             start over after a win")?;
    writeln!(out, "  name <text>       set your display name")?;
    writeln!(out, "  sound on|off      toggle the terminal bell")?;
    writeln!(out, "  history           show moves, newest first")?;
    writeln!(out, "  board             redraw the board")?;
    writeln!(out, "  quit              leave the game")
}

#[cfg(test)]
mod tests {
    use super::*;
    use snakes_ladders::ScriptedDice;

    fn engine(faces: &[u8]) -> TurnEngine<ScriptedDice> {
        let config = GameConfig::new().instant().with_sound(false);
        TurnEngine::with_dice(config, ScriptedDice::new(faces.to_vec()))
    }

    fn play(engine: &mut TurnEngine<ScriptedDice>, script: &str) -> String {
        let mut out = Vec::new();
        run(engine, script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse(""), Some(Command::Roll));
        assert_eq!(Command::parse(" ROLL "), Some(Command::Roll));
        assert_eq!(Command::parse("name Ada Lovelace"), Some(Command::Name("Ada Lovelace".into())));
        assert_eq!(Command::parse("sound off"), Some(Command::Sound(false)));
        assert_eq!(Command::parse("q"), Some(Command::Quit));
        assert_eq!(Command::parse("name"), None);
        assert_eq!(Command::parse("sound loud"), None);
        assert_eq!(Command::parse("fly"), None);
    }

    #[test]
    fn test_roll_plays_both_sides() {
        let mut engine = engine(&[3, 2]);
        let output = play(&mut engine, "roll\nquit\n");

        assert!(output.contains("🎲 Player rolled 3"));
        assert!(output.contains("🪜 Ladder from 4 to 14"));
        assert!(output.contains("🎲 Computer rolled 2"));
        assert_eq!(engine.turn(), Side::Human);
        assert_eq!(engine.history().len(), 2);
    }

    #[test]
    fn test_name_and_history() {
        let mut engine = engine(&[2]);
        let output = play(&mut engine, "name Ada\nroll\nhistory\n");

        assert!(output.contains("Name set to Ada."));
        assert!(output.contains("👤 Ada rolled 2: 1 → 3"));
    }

    #[test]
    fn test_reset_refused_mid_game() {
        let mut engine = engine(&[2]);
        let output = play(&mut engine, "roll\nreset\n");

        assert!(output.contains("You can start over once someone wins."));
        assert_eq!(engine.history().len(), 2);
    }

    #[test]
    fn test_unknown_command() {
        let mut engine = engine(&[2]);
        let output = play(&mut engine, "dance\n");

        assert!(output.contains("Unknown command"));
        assert!(engine.history().is_empty());
    }
}
