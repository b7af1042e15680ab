//! Terminal platform-jumper runner.
//!
//! Same fixed-tick loop as the blocks runner. Left/right are held states:
//! with key-release reporting the terminal tells us when they end, otherwise
//! [`HeldKeys`] lets them lapse after a short timeout.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;

use tui_arcade::input::{map_jumper_key, should_quit, HeldKeys};
use tui_arcade::jumper::{JumperGame, JumperSnapshot};
use tui_arcade::logging;
use tui_arcade::term::{fingerprint, FrameBuffer, JumperView, RenderThrottle, TerminalRenderer, Viewport};
use tui_arcade::AppConfig;

const STATIC_REDRAW_MS: u64 = 250;

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    logging::init(&config)?;
    info!(seed = config.seed, tick_ms = config.tick_ms, "jumper starting");

    let mut game = JumperGame::new(config.seed);
    let mut term = TerminalRenderer::new().with_release_events(true);
    term.enter()?;
    info!(release_events = term.release_events(), "terminal ready");

    let result = run(&mut term, &mut game, &config);

    let _ = term.exit();
    logging::log_final_state("jumper", &game.snapshot());
    result
}

fn run(term: &mut TerminalRenderer, game: &mut JumperGame, config: &AppConfig) -> Result<()> {
    let view = JumperView;
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = JumperSnapshot::default();
    let mut throttle = RenderThrottle::new(STATIC_REDRAW_MS);
    let mut held = HeldKeys::new().with_release_events(term.release_events());

    let clock = Instant::now();
    let tick_duration = Duration::from_millis(config.tick_ms as u64);
    let mut last_tick = Instant::now();

    loop {
        game.snapshot_into(&mut snap);
        let now_ms = clock.elapsed().as_millis() as u64;
        let print = fingerprint(&(snap.score, snap.running, snap.last_outcome.map(|o| o.score)));
        if throttle.should_render(now_ms, print, snap.is_static()) {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            view.render_into(&snap, Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
        }

        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match key.kind {
                    KeyEventKind::Press | KeyEventKind::Repeat => {
                        if should_quit(key) {
                            return Ok(());
                        }
                        if !held.press(key.code) {
                            if let Some(action) = map_jumper_key(key) {
                                game.apply_action(action);
                            }
                        }
                    }
                    KeyEventKind::Release => held.release(key.code),
                },
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
            held.update(elapsed.as_millis() as u32);
            // Long stalls are clamped inside the engine.
            if game.update(elapsed.as_secs_f32(), held.input()).is_some() {
                held.clear();
            }
        }
    }
}
