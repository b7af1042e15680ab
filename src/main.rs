//! Terminal falling-block runner (default binary).
//!
//! Fixed-tick loop: poll input until the next tick, feed commands to the
//! engine, advance gravity, and redraw through the diffing framebuffer
//! renderer (no ratatui widgets/layout).

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;

use tui_arcade::core::{BlocksGame, GameSnapshot};
use tui_arcade::input::{map_blocks_key, should_quit};
use tui_arcade::logging;
use tui_arcade::term::{fingerprint, BlocksView, FrameBuffer, RenderThrottle, TerminalRenderer, Viewport};
use tui_arcade::AppConfig;

/// Redraw interval for frames that are not changing (start screen, pause, game over)
const STATIC_REDRAW_MS: u64 = 250;

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    logging::init(&config)?;
    info!(seed = config.seed, tick_ms = config.tick_ms, overflow = ?config.overflow, "blocks starting");

    let mut game = BlocksGame::with_policy(config.seed, config.overflow);
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    logging::log_final_state("blocks", &game.snapshot());
    result
}

fn run(term: &mut TerminalRenderer, game: &mut BlocksGame, config: &AppConfig) -> Result<()> {
    let view = BlocksView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();
    let mut throttle = RenderThrottle::new(STATIC_REDRAW_MS);

    let clock = Instant::now();
    let tick_duration = Duration::from_millis(config.tick_ms as u64);
    let mut last_tick = Instant::now();

    loop {
        game.snapshot_into(&mut snap);
        let now_ms = clock.elapsed().as_millis() as u64;
        if throttle.should_render(now_ms, fingerprint(&snap), snap.is_static()) {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            view.render_into(&snap, Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
        }

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = map_blocks_key(key) {
                        game.apply_action(action);
                    }
                }
                Event::Resize(..) => {
                    term.invalidate();
                    throttle.reset();
                }
                _ => {}
            }
        }

        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();
            game.tick(elapsed.as_millis() as u32);
        }
    }
}
