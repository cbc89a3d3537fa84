//! Labelled transcript view of recorded turns.
//!
//! Rendering is pure: it derives display lines from the log and never
//! mutates it. Hosts decide how the lines reach the user (styled terminal
//! output, JSON arrays) but the labels and the you/bot/explanation order
//! are fixed here so every host shows the same transcript.

use std::fmt;

use patter_types::turn::Turn;

pub const USER_LABEL: &str = "You:";
pub const BOT_LABEL: &str = "Bot:";
pub const EXPLANATION_LABEL: &str = "Explanation:";

/// One turn as its three labelled lines.
#[derive(Debug, Clone)]
pub struct TurnBlock<'a> {
    turn: &'a Turn,
}

impl<'a> TurnBlock<'a> {
    pub fn new(turn: &'a Turn) -> Self {
        Self { turn }
    }

    pub fn turn(&self) -> &Turn {
        self.turn
    }

    pub fn user_line(&self) -> String {
        format!("{USER_LABEL} {}", self.turn.user_text)
    }

    pub fn bot_line(&self) -> String {
        format!("{BOT_LABEL} {}", self.turn.bot_reply)
    }

    pub fn explanation_line(&self) -> String {
        format!("{EXPLANATION_LABEL} {}", self.turn.explanation)
    }

    /// The three lines in display order.
    pub fn lines(&self) -> [String; 3] {
        [self.user_line(), self.bot_line(), self.explanation_line()]
    }
}

impl fmt::Display for TurnBlock<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\n{}\n{}",
            self.user_line(),
            self.bot_line(),
            self.explanation_line()
        )
    }
}
