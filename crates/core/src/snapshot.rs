use serde::Serialize;

use crate::types::LAST_FRAME_ROLLS;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrameSnapshot {
    /// 1-based frame number.
    pub number: usize,
    pub state: &'static str,
    pub symbols: [&'static str; LAST_FRAME_ROLLS],
    pub last: bool,
    pub addend: u32,
    pub score: u32,
    /// Cumulative score shown under the frame, `None` until rolled.
    pub running_total: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    pub rounds: usize,
    /// 1-based frame currently accepting rolls.
    pub frame: usize,
    pub pins_standing: u8,
    pub score: u32,
    pub state: &'static str,
    pub stage: &'static str,
    pub moves_remaining: usize,
    pub game_over: bool,
    pub frames: Vec<FrameSnapshot>,
}

impl GameSnapshot {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
