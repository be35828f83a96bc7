//! Terminal runner (default binary).
//!
//! One loop iteration per frame: drain key events, step the game with the
//! elapsed time, render the snapshot. Quitting restores the terminal.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tetris_mini::core::{GameSnapshot, GameState, VariantPicker};
use tetris_mini::input::{should_quit, InputHandler};
use tetris_mini::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

/// Minimal falling-block puzzle in the terminal.
#[derive(Debug, Parser)]
#[command(name = "tetris-mini", version, about)]
struct Args {
    /// Seed for piece selection. Omit for a random game.
    #[arg(long, value_name = "N")]
    seed: Option<u64>,

    /// Target frames per second.
    #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u32).range(1..=240))]
    fps: u32,

    /// Write tracing output to this file (the terminal itself is the game screen).
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    let picker = match args.seed {
        Some(seed) => VariantPicker::seeded(seed),
        None => VariantPicker::from_entropy(),
    };
    let game = GameState::with_picker(picker);
    info!(seed = ?args.seed, fps = args.fps, "starting");

    let mut term = TerminalRenderer::new();
    let result = term.enter().and_then(|()| {
        info!(keyboard_enhanced = term.keyboard_enhanced(), "terminal ready");
        run(&mut term, game, args.fps)
    });

    // Always try to restore terminal state.
    let _ = term.exit();
    info!("exiting");
    result
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, mut game: GameState, fps: u32) -> Result<()> {
    let view = GameView::default();
    let mut input = InputHandler::new().with_release_events(term.keyboard_enhanced());
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let frame_duration = Duration::from_secs(1) / fps;
    let mut last_frame = Instant::now();

    loop {
        // Collect input until the next frame is due.
        let timeout = frame_duration.saturating_sub(last_frame.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        info!(score = game.score(), lines = game.lines(), "quit requested");
                        return Ok(());
                    }
                    if let Some(action) = input.handle_key_event(key) {
                        game.apply_action(action);
                        input.reset();
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        if last_frame.elapsed() < frame_duration {
            continue;
        }
        let elapsed_ms = last_frame.elapsed().as_millis().min(u32::MAX as u128) as u32;
        last_frame = Instant::now();

        let frame_input = input.update(elapsed_ms);
        game.frame(elapsed_ms, &frame_input);

        game.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;
    }
}
