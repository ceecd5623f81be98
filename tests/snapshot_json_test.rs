//! The JSON report printed by `bowling-autoplay`.

use serde::Deserialize;
use tui_bowling::core::{play_out, ScoreKeeper, ScriptedMoves};

#[derive(Debug, Deserialize)]
struct Report {
    rounds: usize,
    frame: usize,
    score: u32,
    state: String,
    moves_remaining: usize,
    game_over: bool,
    frames: Vec<FrameReport>,
}

#[derive(Debug, Deserialize)]
struct FrameReport {
    number: usize,
    state: String,
    symbols: Vec<String>,
    score: u32,
    running_total: Option<u32>,
}

fn report(keeper: &ScoreKeeper) -> Report {
    let json = keeper.snapshot().to_json().unwrap();
    serde_json::from_str(&json).unwrap()
}

#[test]
fn test_finished_game_report() {
    let mut keeper = ScoreKeeper::new();
    play_out(&mut keeper, &mut ScriptedMoves::demo()).unwrap();
    let report = report(&keeper);

    assert_eq!(report.rounds, 10);
    assert_eq!(report.frame, 10);
    assert_eq!(report.score, 175);
    assert_eq!(report.state, "GAME_END");
    assert_eq!(report.moves_remaining, 0);
    assert!(report.game_over);

    let last = &report.frames[9];
    assert_eq!(last.number, 10);
    assert_eq!(last.state, "LAST");
    assert_eq!(last.symbols, vec!["X", "X", "7"]);
    assert_eq!(last.score, 27);
    assert_eq!(last.running_total, Some(175));
    assert_eq!(report.frames[2].state, "STRIKE");
}

#[test]
fn test_partial_game_report() {
    let mut moves = ScriptedMoves::from_json("[[3,7],[10,null],[2]]").unwrap();
    let mut keeper = ScoreKeeper::new();
    assert_eq!(play_out(&mut keeper, &mut moves).unwrap(), 4);

    let report = report(&keeper);
    assert!(!report.game_over);
    assert_eq!(report.frame, 3);
    assert_eq!(report.frames[0].running_total, Some(20));
    assert_eq!(report.frames[1].running_total, Some(32));
    assert_eq!(report.frames[2].running_total, Some(34));
    assert_eq!(report.frames[3].running_total, None);
    assert_eq!(report.frames[1].state, "STRIKE");
}
