//! Terminal bowling score keeper (default binary).
//!
//! Type pin counts, watch the scoreboard update. It uses crossterm for input
//! and the framebuffer-based scoreboard renderer.

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{debug, info};

use tui_bowling::core::ScoreKeeper;
use tui_bowling::input::{handle_key_event, prompt_answer, should_quit, PromptAnswer};
use tui_bowling::logging;
use tui_bowling::term::{FrameBuffer, ScoreboardView, TerminalRenderer};
use tui_bowling::types::{BowlAction, RollEvent};
use tui_bowling::GameConfig;

const HELP: &str = "0-9 pins  - gutter  x strike  / spare  r restart  q quit";
const GAME_OVER_PROMPT: &str = "Game over - restart? (y/n)";

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    if let Some(path) = &config.log_path {
        logging::init_file(path)?;
    }
    info!(rounds = config.rounds, "starting interactive game");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: &GameConfig) -> Result<()> {
    let mut keeper = ScoreKeeper::with_rounds(config.rounds)?;
    let view = ScoreboardView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut status = HELP.to_string();

    loop {
        // Render.
        let line = if keeper.is_game_over() {
            GAME_OVER_PROMPT
        } else {
            status.as_str()
        };
        view.render_into(&keeper.snapshot(), Some(line), &mut fb);
        term.draw(&fb)?;

        let key = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => key,
            Event::Resize(..) => {
                term.invalidate();
                continue;
            }
            _ => continue,
        };

        if should_quit(key) {
            return Ok(());
        }

        if keeper.is_game_over() {
            match prompt_answer(key) {
                Some(PromptAnswer::Restart) => {
                    info!(score = keeper.score(), "restarting after game over");
                    keeper.reset();
                    status = HELP.to_string();
                }
                Some(PromptAnswer::Quit) => return Ok(()),
                None => {}
            }
            continue;
        }

        let Some(action) = handle_key_event(key) else {
            continue;
        };
        if action == BowlAction::Restart {
            keeper.reset();
            status = HELP.to_string();
            continue;
        }
        let Some(pins) = action.pins(keeper.pins_standing()) else {
            continue;
        };

        status = match keeper.roll(pins) {
            Ok(event) => describe(&event),
            Err(err) => {
                debug!(%err, "roll rejected");
                err.to_string()
            }
        };
    }
}

fn describe(event: &RollEvent) -> String {
    let mut line = format!(
        "Frame {} {}: {} pins",
        event.frame + 1,
        event.stage.label(),
        event.pins
    );
    if event.credited > 0 {
        line.push_str(&format!(" (+{} bonus)", event.credited));
    }
    line
}
