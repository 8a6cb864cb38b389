//! Blockfall terminal runner (default binary).
//!
//! Gravity and keyboard input run as tokio tasks against a shared `Board`;
//! this thread owns the terminal and redraws snapshots until the game ends.
//! Configuration comes from `BLOCKFALL_*` environment variables.

use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::terminal;
use tokio::runtime::Runtime;

use blockfall::core::{Board, BoardSnapshot};
use blockfall::input::TerminalCommands;
use blockfall::runtime::{spawn_gravity, spawn_input, spawn_writer, EventLog, GameConfig};
use blockfall::term::{FrameBuffer, GameView, RenderThrottle, TerminalRenderer, Viewport};
use blockfall::types::Command;

/// How long the input listener blocks before re-checking for game over
const INPUT_POLL: Duration = Duration::from_millis(50);

/// Redraw at least this often even when nothing changed
const IDLE_REDRAW_MS: u64 = 1_000;

/// How long the GAME OVER overlay stays up after a blocked spawn
const GAME_OVER_HOLD: Duration = Duration::from_millis(1_500);

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    let board = match config.build_board() {
        Ok(board) => board,
        Err(err) => {
            eprintln!("[Game] Invalid configuration: {err:#}");
            return Err(err);
        }
    };

    let rt = Runtime::new().context("create tokio runtime")?;
    let rt_guard = rt.enter();

    let (log, writer) = match config.log_path.as_deref() {
        Some(path) => {
            let (log, handle) = spawn_writer(path);
            (log, Some(handle))
        }
        None => (EventLog::disabled(), None),
    };

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let gravity = spawn_gravity(board.clone(), config.gravity_interval(), log.clone());
    let input = spawn_input(board.clone(), TerminalCommands::new(), INPUT_POLL, log);

    let result = run(&mut term, &board, config.frame_interval());

    // Always try to restore terminal state.
    let _ = term.exit();

    // A render failure leaves the game running; end it so the listener exits.
    board.apply_command(Command::Terminate);
    gravity.abort();
    drop(rt_guard);

    let input_result = rt.block_on(input);
    if let Some(writer) = writer {
        let _ = rt.block_on(writer);
    }

    result?;
    input_result.context("input listener panicked")??;

    let snap = board.snapshot();
    println!(
        "[Game] Game over. Score: {} ({} lines)",
        snap.score, snap.lines
    );
    Ok(())
}

fn run(term: &mut TerminalRenderer, board: &Board, frame: Duration) -> Result<()> {
    let view = GameView::default();
    let mut throttle = RenderThrottle::new(IDLE_REDRAW_MS);
    let mut snap = BoardSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut viewport = Viewport::new(0, 0);
    let started = Instant::now();

    loop {
        board.snapshot_into(&mut snap);

        let (w, h) = terminal::size().unwrap_or((80, 24));
        if (w, h) != (viewport.width, viewport.height) {
            viewport = Viewport::new(w, h);
            throttle.invalidate();
        }

        if throttle.should_render(started.elapsed().as_millis() as u64, snap.revision) {
            view.render_into(&snap, viewport, &mut fb);
            term.draw(&fb)?;
        }

        if snap.game_over {
            // Quitting keeps the active piece; only a blocked spawn clears it.
            if snap.active.is_none() {
                thread::sleep(GAME_OVER_HOLD);
            }
            return Ok(());
        }

        thread::sleep(frame);
    }
}
