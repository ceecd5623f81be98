//! Non-interactive runner: plays a scripted, seeded or demo game and prints
//! the result.
//!
//! Source selection: `BOWLING_SCRIPT` first, then `BOWLING_SEED`, otherwise
//! the built-in demo game.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, warn};

use tui_bowling::core::{play_out_with, MoveSource, RandomBowler, ScoreKeeper, ScriptedMoves};
use tui_bowling::logging;
use tui_bowling::term::ScoreboardView;
use tui_bowling::{GameConfig, OutputFormat};

fn main() -> Result<()> {
    logging::init_stderr();
    let config = GameConfig::from_env();

    let mut source = move_source(&config)?;
    let mut keeper = ScoreKeeper::with_rounds(config.rounds)?;
    let view = ScoreboardView::default();

    let applied = play_out_with(&mut keeper, source.as_mut(), |keeper, _event| {
        if config.verbose {
            print_board(&view, keeper);
        }
    })
    .context("move source produced an invalid roll")?;

    if keeper.is_game_over() {
        info!(rolls = applied, score = keeper.score(), "game finished");
    } else {
        warn!(
            rolls = applied,
            frame = keeper.current_frame_index() + 1,
            "move source ran out before the game ended"
        );
    }

    match config.output {
        OutputFormat::Text => {
            if !config.verbose {
                print_board(&view, &keeper);
            }
        }
        OutputFormat::Json => println!("{}", keeper.snapshot().to_json()?),
    }
    Ok(())
}

fn move_source(config: &GameConfig) -> Result<Box<dyn MoveSource>> {
    if let Some(path) = &config.script_path {
        info!(path = %path.display(), "playing scripted game");
        return Ok(Box::new(load_script(path)?));
    }
    if let Some(seed) = config.seed {
        info!(seed, "playing seeded random game");
        return Ok(Box::new(RandomBowler::new(seed)));
    }
    info!("playing demo game");
    Ok(Box::new(ScriptedMoves::demo()))
}

fn load_script(path: &Path) -> Result<ScriptedMoves> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read move script {}", path.display()))?;
    ScriptedMoves::from_json(&json)
        .with_context(|| format!("invalid move script {}", path.display()))
}

fn print_board(view: &ScoreboardView, keeper: &ScoreKeeper) {
    let fb = view.render(&keeper.snapshot(), None);
    for line in fb.lines() {
        println!("{line}");
    }
    println!();
}
