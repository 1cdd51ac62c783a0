//! Blockfall terminal runner (default binary).
//!
//! Fixed 16ms frame loop: render, poll crossterm input until the frame is
//! due, then feed the elapsed time to the engine's drop timer.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use blockfall::core::{Phase, UniformGenerator};
use blockfall::engine::{Engine, TracingSink};
use blockfall::input::{map_key, should_quit};
use blockfall::storage::{HighScore, JsonFileStore, MemoryStore, Storage};
use blockfall::term::{FrameBuffer, GameView, Hud, TerminalBell, TerminalRenderer, Viewport};
use blockfall::types::{Command, TICK_MS};
use blockfall::Config;

type Game = Engine<UniformGenerator, Storage, (TracingSink, Option<TerminalBell>)>;

fn main() -> Result<()> {
    let config = Config::from_env();
    init_logging(config.log_path.as_deref())?;

    let generator = match config.seed {
        Some(seed) => UniformGenerator::seeded(seed),
        None => UniformGenerator::from_entropy(),
    };
    let bell = config.sound.then(TerminalBell::new);
    let mut game: Game = Engine::new(generator, open_store(&config), (TracingSink, bell));

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Log to a file; the terminal itself is owned by the renderer.
fn init_logging(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn open_store(config: &Config) -> Storage {
    if !config.save_enabled {
        info!("saving disabled, using in-memory store");
        return Storage::Memory(MemoryStore::new());
    }
    match JsonFileStore::open(&config.save_dir) {
        Ok(store) => {
            info!(dir = %config.save_dir.display(), "using save directory");
            Storage::Json(store)
        }
        Err(err) => {
            warn!(dir = %config.save_dir.display(), %err, "save directory unavailable, using in-memory store");
            Storage::Memory(MemoryStore::new())
        }
    }
}

/// Information for the start and game-over screens, refreshed on phase changes.
struct Lobby {
    phase: Phase,
    high_scores: Vec<HighScore>,
    can_resume: bool,
}

impl Lobby {
    fn read(game: &Game) -> Self {
        Self {
            phase: game.state().phase(),
            high_scores: game.store().high_scores(),
            can_resume: game.can_resume(),
        }
    }
}

fn run(term: &mut TerminalRenderer, game: &mut Game) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut lobby = Lobby::read(game);

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let hud = Hud {
            high_scores: &lobby.high_scores,
            can_resume: lobby.can_resume,
        };
        view.render_into(game.state(), &hud, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(command) = map_key(key) {
                        dispatch(game, command);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();
            game.advance(u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX));
        }

        if game.state().phase() != lobby.phase {
            lobby = Lobby::read(game);
        }
    }
}

/// New game and continue only apply from the start and game-over screens.
fn dispatch(game: &mut Game, command: Command) {
    let in_game = matches!(game.state().phase(), Phase::Running | Phase::Paused);
    if in_game && matches!(command, Command::Start | Command::Resume) {
        return;
    }
    game.apply(command);
}
