//! Terminal runner (default binary).
//!
//! Each frame collects the key presses that arrive before the frame deadline,
//! hands them to `GameState::step` together with the monotonic clock, and draws
//! the resulting snapshot.

use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event};
use log::info;

use tui_blocks::cli::Cli;
use tui_blocks::core::{GameConfig, GameState};
use tui_blocks::input::{map_key, KeyAction};
use tui_blocks::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_blocks::types::{Command, TICK_MS};

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.init_logging()?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, cli.game_config());

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: GameConfig) -> Result<()> {
    let mut game = GameState::new(config);
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut commands: Vec<Command> = Vec::with_capacity(8);

    let clock = Instant::now();
    let frame = Duration::from_millis(TICK_MS as u64);

    loop {
        let frame_start = Instant::now();

        // Input until the frame deadline.
        while let Some(timeout) = frame.checked_sub(frame_start.elapsed()) {
            if !event::poll(timeout)? {
                break;
            }
            match event::read()? {
                Event::Key(key) => match map_key(key) {
                    Some(KeyAction::Quit) => {
                        info!("quit: score={} lines={}", game.score(), game.lines());
                        return Ok(());
                    }
                    Some(KeyAction::Restart) => {
                        commands.clear();
                        game.restart();
                    }
                    Some(KeyAction::Command(command)) => commands.push(command),
                    None => {}
                },
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        let now_ms = clock.elapsed().as_millis() as u64;
        let snap = game.step(commands.drain(..), now_ms);

        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;
    }
}
