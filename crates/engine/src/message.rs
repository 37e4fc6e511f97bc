//! Banner messages shown after each action.

use crate::core::{ActionError, GameEvent, MergeKind, TurnReport};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Error,
}

/// One line of player-facing feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub kind: MessageKind,
}

impl Message {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: MessageKind::Info,
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: MessageKind::Success,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: MessageKind::Error,
        }
    }

    pub fn welcome() -> Self {
        Self::info("Place the top tile on the grid to start!")
    }

    pub fn for_error(err: ActionError) -> Self {
        Self::error(err.message())
    }

    /// Pick the most telling message for a turn
    ///
    /// Game over beats a milestone, which beats the last merge.
    pub fn for_report(report: &TurnReport) -> Self {
        let mut best: Option<(u8, Message)> = None;
        for event in &report.events {
            let Some(candidate) = Self::for_event(event) else {
                continue;
            };
            let rank = rank(event);
            if best.as_ref().map_or(true, |(r, _)| rank >= *r) {
                best = Some((rank, candidate));
            }
        }
        best.map(|(_, m)| m)
            .unwrap_or_else(|| Self::success("Good move. Keep going!"))
    }

    pub fn for_event(event: &GameEvent) -> Option<Self> {
        let msg = match *event {
            GameEvent::Placed { .. } | GameEvent::LevelUp { .. } | GameEvent::NewBestScore { .. } => {
                return None;
            }
            GameEvent::Merged(step) => match step.kind {
                MergeKind::Equal => Self::success(format!(
                    "Equal tiles! {} & {} vanish (+{})",
                    step.focus_value, step.neighbor_value, step.points
                )),
                MergeKind::Divide { quotient: 1 } => Self::success(format!(
                    "Division result is 1, tile removed (+{})",
                    step.points
                )),
                MergeKind::Divide { quotient } => Self::success(format!(
                    "{} ÷ {} = {} (+{})",
                    step.larger(),
                    step.smaller(),
                    quotient,
                    step.points
                )),
            },
            GameEvent::Kept { .. } => Self::success("Tile stored in KEEP slot."),
            GameEvent::Trashed { .. } => Self::success("Tile discarded."),
            GameEvent::DifficultyMilestone { level } => {
                Self::success(format!("Level {level}! Game getting harder!"))
            }
            GameEvent::GameOver { .. } => Self::error("Game Over! No more valid merges."),
            GameEvent::Undone { .. } => Self::success("Undo successful."),
            GameEvent::DifficultyChanged(d) => {
                Self::success(format!("Difficulty set to {}", d.as_str().to_uppercase()))
            }
            GameEvent::HintsToggled(true) => Self::success("Hints ON (G)"),
            GameEvent::HintsToggled(false) => Self::success("Hints OFF (G)"),
            GameEvent::NewGame => Self::welcome(),
        };
        Some(msg)
    }
}

fn rank(event: &GameEvent) -> u8 {
    match event {
        GameEvent::GameOver { .. } => 3,
        GameEvent::DifficultyMilestone { .. } => 2,
        _ => 1,
    }
}
