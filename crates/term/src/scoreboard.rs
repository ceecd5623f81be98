//! ScoreboardView: maps a `core::GameSnapshot` into a framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout:
//!
//! ```text
//! Bowling Game
//! --------------------------------------------
//! Current Frame : 3    Current Pins : 10
//! Current Score : 30   Current Roll : First Roll
//! Moves Remaining : 17
//! --------------------------------------------
//! FR       R1       R2       R3       Score
//! --------------------------------------------
//! 1        9        /                 20
//! --------------------------------------------
//! ...
//! Total                               175
//! --------------------------------------------
//! ```

use crate::core::{FrameSnapshot, GameSnapshot};
use crate::fb::{FrameBuffer, Style};

const TITLE: &str = "Bowling Game";
const HEADER_ROWS: u16 = 8;
const RULE: char = '-';

/// Scoreboard layout settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreboardView {
    /// Width of each table column, in terminal columns.
    column_width: usize,
}

impl Default for ScoreboardView {
    fn default() -> Self {
        Self { column_width: 8 }
    }
}

impl ScoreboardView {
    /// Five columns separated by single spaces.
    fn table_width(&self) -> usize {
        self.column_width * 5 + 4
    }

    fn table_row(&self, cols: [&str; 5]) -> String {
        let w = self.column_width;
        format!(
            "{:<w$} {:<w$} {:<w$} {:<w$} {:<w$}",
            cols[0], cols[1], cols[2], cols[3], cols[4]
        )
    }

    /// Rows needed for `snap` (plus the status line, when present).
    ///
    /// Saturates at `u16::MAX`; rows past that are clipped by the framebuffer.
    pub fn height(&self, snap: &GameSnapshot, status: Option<&str>) -> u16 {
        let frames = u16::try_from(snap.frames.len())
            .unwrap_or(u16::MAX)
            .saturating_mul(2);
        let total = if snap.game_over { 2 } else { 0 };
        let status = if status.is_some() { 2 } else { 0 };
        HEADER_ROWS
            .saturating_add(frames)
            .saturating_add(total)
            .saturating_add(status)
    }

    pub fn width(&self, status: Option<&str>) -> u16 {
        let status_len = status.map(|s| s.chars().count()).unwrap_or(0);
        self.table_width().max(status_len) as u16
    }

    pub fn render(&self, snap: &GameSnapshot, status: Option<&str>) -> FrameBuffer {
        let mut fb = FrameBuffer::new(0, 0);
        self.render_into(snap, status, &mut fb);
        fb
    }

    /// Render into an existing framebuffer, resizing it to fit.
    pub fn render_into(&self, snap: &GameSnapshot, status: Option<&str>, fb: &mut FrameBuffer) {
        fb.reset(self.width(status), self.height(snap, status));

        fb.put_str(0, 0, TITLE, Style::Title);
        self.rule(fb, 1);
        fb.put_str(
            0,
            2,
            &format!(
                "Current Frame : {:<4} Current Pins : {:<4}",
                snap.frame, snap.pins_standing
            ),
            Style::Normal,
        );
        fb.put_str(
            0,
            3,
            &format!(
                "Current Score : {:<4} Current Roll : {}",
                snap.score, snap.stage
            ),
            Style::Normal,
        );
        fb.put_str(
            0,
            4,
            &format!("Moves Remaining : {:<4}", snap.moves_remaining),
            Style::Normal,
        );
        self.rule(fb, 5);
        fb.put_str(
            0,
            6,
            &self.table_row(["FR", "R1", "R2", "R3", "Score"]),
            Style::Header,
        );
        self.rule(fb, 7);

        let mut y = HEADER_ROWS;
        for frame in &snap.frames {
            let style = if !snap.game_over && frame.number == snap.frame {
                Style::Highlight
            } else {
                Style::Normal
            };
            fb.put_str(0, y, &self.frame_row(frame), style);
            self.rule(fb, y + 1);
            y += 2;
        }

        if snap.game_over {
            let total = snap.score.to_string();
            fb.put_str(0, y, &self.table_row(["Total", "", "", "", total.as_str()]), Style::Title);
            self.rule(fb, y + 1);
            y += 2;
        }

        if let Some(status) = status {
            fb.put_str(0, y + 1, status, Style::Alert);
        }
    }

    fn frame_row(&self, frame: &FrameSnapshot) -> String {
        let number = frame.number.to_string();
        let score = frame
            .running_total
            .map(|t| t.to_string())
            .unwrap_or_default();
        let third = if frame.last { frame.symbols[2] } else { "" };
        self.table_row([number.as_str(), frame.symbols[0], frame.symbols[1], third, score.as_str()])
    }

    fn rule(&self, fb: &mut FrameBuffer, y: u16) {
        let line: String = std::iter::repeat(RULE).take(self.table_width()).collect();
        fb.put_str(0, y, &line, Style::Dim);
    }
}
