//! Terminal Just Divide runner (default binary).
//!
//! Uses crossterm for input and the framebuffer renderer from the term crate.
//! Logs go to `--log-file` only; the terminal belongs to the game.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use tracing::{debug, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use just_divide::engine::{BestScoreStore, Engine, EngineConfig, JsonFileBestScore, MemoryBestScore};
use just_divide::input::{should_quit, InputHandler};
use just_divide::term::{FrameBuffer, GameView, Hud, TerminalRenderer, Viewport};
use just_divide::types::{Difficulty, GameAction, TICK_MS};

#[derive(Parser, Debug)]
#[command(name = "just-divide", about = "Tile-merging division puzzle for the terminal")]
struct Args {
    /// Seed for the tile source; defaults to the current time.
    #[arg(long)]
    seed: Option<u32>,
    /// Starting difficulty: easy, medium or hard.
    #[arg(long, default_value = "medium", value_parser = parse_difficulty)]
    difficulty: Difficulty,
    /// JSON file holding the best score. Without it the best score lasts one run.
    #[arg(long)]
    best_score_file: Option<PathBuf>,
    /// Tracing filter, e.g. "info", "just_divide_engine=debug".
    #[arg(long, default_value = "info")]
    log: String,
    /// Append logs to this file. Nothing is logged without it.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn parse_difficulty(s: &str) -> Result<Difficulty, String> {
    Difficulty::from_str(s).ok_or_else(|| format!("unknown difficulty '{s}' (easy, medium, hard)"))
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args)?;

    let seed = args.seed.unwrap_or_else(seed_from_clock);
    let store: Box<dyn BestScoreStore> = match &args.best_score_file {
        Some(path) => Box::new(JsonFileBestScore::new(path)),
        None => Box::new(MemoryBestScore::new()),
    };
    let mut engine = Engine::new(
        EngineConfig {
            seed,
            difficulty: args.difficulty,
        },
        store,
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut engine);

    // Always try to restore terminal state.
    let _ = term.exit();
    info!(score = engine.session().score(), "exiting");
    result
}

fn init_logging(args: &Args) -> Result<()> {
    let Some(path) = &args.log_file else {
        return Ok(());
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;
    tracing_subscriber::registry()
        .with(EnvFilter::new(&args.log))
        .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        .init();
    Ok(())
}

fn seed_from_clock() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn run<S: BestScoreStore>(term: &mut TerminalRenderer, engine: &mut Engine<S>) -> Result<()> {
    let view = GameView::default();
    let mut input = InputHandler::new();
    let mut fb = FrameBuffer::new(0, 0);

    let tick = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let snap = engine.snapshot();
        let hud = Hud {
            cursor: Some(input.cursor()),
            message: Some(engine.message()),
        };
        view.render_into(&snap, hud, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick.checked_sub(last_tick.elapsed()).unwrap_or(Duration::ZERO);
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = input.handle_key_event(key) {
                        // Rejections are already reflected in the message line.
                        let _ = engine.dispatch(action);
                        if action == GameAction::NewGame {
                            last_tick = Instant::now();
                        }
                    }
                }
                Event::Resize(w, h) => {
                    debug!(w, h, "terminal resized");
                    term.invalidate();
                }
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick {
            last_tick = Instant::now();
            engine.tick();
        }
    }
}
