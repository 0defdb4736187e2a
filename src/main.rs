//! Terminal sliding-puzzle runner (default binary).
//!
//! Single-threaded loop: poll keyboard input with a timeout until the next
//! fixed tick, apply actions to the session, advance the session clocks, and
//! redraw. User actions and clock ticks are serialized on this one loop.

use std::path::PathBuf;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Result};
use crossterm::event::{self, Event, KeyEventKind};

use tui_fifteen::core::{Session, SessionEvent};
use tui_fifteen::input::{handle_key_event, should_quit};
use tui_fifteen::store::{FileStore, MemoryStore, Store};
use tui_fifteen::term::{GameView, TerminalRenderer, Theme};
use tui_fifteen::types::{GameAction, GridSize, VariantMode, TICK_MS};

/// How long transient messages stay on screen.
const MESSAGE_TICKS: u32 = 40;

#[derive(Debug, Clone)]
struct Config {
    size: GridSize,
    mode: VariantMode,
    theme: Theme,
    seed: u32,
    store_path: Option<PathBuf>,
}

fn parse_args(args: &[String]) -> Result<Config> {
    let mut config = Config {
        size: GridSize::Three,
        mode: VariantMode::None,
        theme: Theme::Classic,
        seed: clock_seed(),
        store_path: default_store_path(),
    };

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--size" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --size"))?;
                let dim = v
                    .parse::<u8>()
                    .map_err(|_| anyhow!("invalid --size value: {}", v))?;
                config.size = GridSize::from_dimension(dim)
                    .ok_or_else(|| anyhow!("unsupported grid size: {} (use 3-6)", dim))?;
            }
            "--mode" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --mode"))?;
                config.mode = VariantMode::from_str(v).ok_or_else(|| {
                    anyhow!("unknown mode: {} (use none|locked|rotate|bomb|all)", v)
                })?;
            }
            "--theme" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --theme"))?;
                config.theme = Theme::from_str(v)
                    .ok_or_else(|| anyhow!("unknown theme: {} (use classic|dark|neon)", v))?;
            }
            "--seed" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --seed"))?;
                config.seed = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("invalid --seed value: {}", v))?;
            }
            "--store" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --store"))?;
                config.store_path = Some(PathBuf::from(v));
            }
            other => {
                return Err(anyhow!("unknown argument: {}", other));
            }
        }
        i += 1;
    }

    Ok(config)
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn default_store_path() -> Option<PathBuf> {
    std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".tui-fifteen").join("scores.json"))
}

fn open_store(path: Option<PathBuf>) -> Box<dyn Store> {
    match path {
        Some(path) => Box::new(FileStore::open(path)),
        None => Box::new(MemoryStore::new()),
    }
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = parse_args(&args)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: Config) -> Result<()> {
    let mut session = Session::new(
        config.size,
        config.mode,
        config.seed,
        open_store(config.store_path),
    );
    let mut view = GameView::new(config.theme);
    let mut cursor: usize = 0;

    let mut message = String::new();
    let mut message_ticks: u32 = 0;

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        let snapshot = session.snapshot();
        let history = session.records().score_history(session.size());
        term.draw(&view.render(&snapshot, &history, cursor, &message))?;

        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        apply_action(action, &mut session, &mut view, &mut cursor);
                    }
                }
            }
        }

        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            session.tick(TICK_MS);
            if message_ticks > 0 {
                message_ticks -= 1;
                if message_ticks == 0 {
                    message.clear();
                }
            }
        }

        for event in session.take_events() {
            if let Some(text) = describe_event(event) {
                message = text;
                message_ticks = MESSAGE_TICKS;
            }
        }
    }
}

fn apply_action(
    action: GameAction,
    session: &mut Session,
    view: &mut GameView,
    cursor: &mut usize,
) {
    let dim = session.size().dimension();
    match action {
        GameAction::CursorLeft => {
            if *cursor % dim > 0 {
                *cursor -= 1;
            }
        }
        GameAction::CursorRight => {
            if *cursor % dim < dim - 1 {
                *cursor += 1;
            }
        }
        GameAction::CursorUp => {
            if *cursor >= dim {
                *cursor -= dim;
            }
        }
        GameAction::CursorDown => {
            if *cursor + dim < dim * dim {
                *cursor += dim;
            }
        }
        GameAction::Select => {
            session.attempt_move(*cursor);
        }
        GameAction::Undo => {
            session.undo();
        }
        GameAction::Redo => {
            session.redo();
        }
        GameAction::Shuffle => {
            session.regenerate(session.size(), session.mode());
            *cursor = 0;
        }
        GameAction::GrowGrid => {
            if let Some(size) = session.size().grow() {
                session.regenerate(size, session.mode());
                *cursor = 0;
            }
        }
        GameAction::ShrinkGrid => {
            if let Some(size) = session.size().shrink() {
                session.regenerate(size, session.mode());
                *cursor = 0;
            }
        }
        GameAction::CycleVariant => {
            session.regenerate(session.size(), session.mode().cycle());
            *cursor = 0;
        }
        GameAction::CycleTheme => {
            view.theme = view.theme.cycle();
        }
    }
}

fn describe_event(event: SessionEvent) -> Option<String> {
    match event {
        SessionEvent::MoveAccepted => None,
        SessionEvent::MoveRejected => Some("That tile cannot move".to_string()),
        SessionEvent::TileRotated(_) => Some("Tile spins in place".to_string()),
        SessionEvent::BombLocked(_) => Some("A bomb tile has locked!".to_string()),
        SessionEvent::Solved { new_best, .. } => {
            if new_best {
                Some("New best time!".to_string())
            } else {
                None
            }
        }
    }
}
