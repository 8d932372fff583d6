//! Terminal Simon runner (default binary).
//!
//! Runs a fixed-timestep loop: poll keys until the next tick, feed them to the
//! session, advance session and presenter timers, present queued intents and
//! redraw. The terminal is restored on every exit path.

use std::fs::File;
use std::io::BufWriter;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_simon::adapter::{IntentLog, RunConfig, Tee};
use tui_simon::core::{dispatch, Flow, GameSession};
use tui_simon::input::map_key;
use tui_simon::term::{FrameBuffer, GameView, TermPresenter, TerminalRenderer, Viewport};
use tui_simon::types::TICK_MS;

type FileLog = IntentLog<BufWriter<File>>;

fn main() -> Result<()> {
    let config = RunConfig::from_env();

    // Logging is optional; a bad path must not keep the game from starting.
    let log = match &config.log_path {
        Some(path) => match IntentLog::open(path) {
            Ok(log) => Some(log),
            Err(e) => {
                eprintln!("[IntentLog] disabled: {:#}", e);
                None
            }
        },
        None => None,
    };

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config, log);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: &RunConfig, mut log: Option<FileLog>) -> Result<()> {
    let mut session = GameSession::new(config.seed);
    let mut presenter = TermPresenter::new(config.bell);
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        // Present.
        match log.as_mut() {
            Some(log) => session.flush_to(&mut Tee::new(&mut presenter, log)),
            None => session.flush_to(&mut presenter),
        }
        let bells = presenter.take_bells();
        if bells > 0 {
            // A missing bell is not worth ending the game over.
            let _ = term.ring_bell(bells);
        }

        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(
            presenter.view_state(),
            &session.snapshot(),
            Viewport::new(w, h),
            &mut fb,
        );
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if dispatch(&mut session, map_key(key)) == Flow::Quit {
                        return Ok(());
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick with the real elapsed time; the sub-millisecond remainder
        // carries over so the session clock never falls behind wall time.
        let now = Instant::now();
        if now.saturating_duration_since(last_tick) >= tick_duration {
            let elapsed_ms = take_elapsed_ms(&mut last_tick, now);

            session.tick(elapsed_ms);
            presenter.tick(elapsed_ms);
            if let Some(log) = log.as_mut() {
                log.tick(elapsed_ms);
            }
        }
    }
}

/// Whole milliseconds from `*last_tick` to `now`.
///
/// `last_tick` moves forward by exactly the returned amount, so the truncated
/// remainder is counted on the next call.
fn take_elapsed_ms(last_tick: &mut Instant, now: Instant) -> u32 {
    let elapsed = now.saturating_duration_since(*last_tick);
    let ms = elapsed.as_millis().min(u32::MAX as u128) as u32;
    *last_tick += Duration::from_millis(ms as u64);
    ms
}
