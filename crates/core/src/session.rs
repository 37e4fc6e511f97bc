//! Game session module - turn orchestration
//!
//! This module ties together all core components: board, merge cascade,
//! terminal detection, tile source, scoring and undo history. A session is a
//! single owned aggregate; every action takes `&mut self` and either applies
//! completely or returns an error without touching anything.
//!
//! Only placements can end the game. Undo is the one action that can bring a
//! finished session back to life.

use std::collections::VecDeque;

use crate::board::Board;
use crate::clock::ElapsedClock;
use crate::error::ActionError;
use crate::hints::{hint_mask, HintMask};
use crate::merge::{self, MergeStep};
use crate::rng::TileSource;
use crate::scoring::level_change;
use crate::terminal::is_terminal;
use crate::types::{
    Difficulty, GameAction, Pos, TileValue, DEFAULT_TRASH_USES, INITIAL_QUEUE_LEN,
    REFILL_QUEUE_LEN,
};
use crate::undo::UndoLog;

/// Construction parameters for a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub seed: u32,
    pub difficulty: Difficulty,
    /// Best score known before this session (from the persistence store)
    pub best_score: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            difficulty: Difficulty::default(),
            best_score: 0,
        }
    }
}

/// Everything an undo snapshot restores
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub board: Board,
    pub queue: VecDeque<TileValue>,
    pub keep: Option<TileValue>,
    pub score: u32,
    pub level: u32,
    pub trash_uses: u32,
    pub hints_on: bool,
    pub clock: ElapsedClock,
    pub game_over: bool,
}

impl SessionState {
    /// Fresh state with an empty queue
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            queue: VecDeque::with_capacity(INITIAL_QUEUE_LEN),
            keep: None,
            score: 0,
            level: 1,
            trash_uses: DEFAULT_TRASH_USES,
            hints_on: false,
            clock: ElapsedClock::new(),
            game_over: false,
        }
    }

    /// The playable tile
    pub fn head(&self) -> Option<TileValue> {
        self.queue.front().copied()
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Active,
    GameOver,
}

/// Something that happened during one action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Placed { pos: Pos, value: TileValue },
    Merged(MergeStep),
    Kept {
        value: TileValue,
        /// Previous keep-slot tile, now at the head of the queue
        swapped_out: Option<TileValue>,
    },
    Trashed { value: TileValue, remaining: u32 },
    LevelUp { from: u32, to: u32, trash_awarded: u32 },
    DifficultyMilestone { level: u32 },
    NewBestScore { score: u32 },
    GameOver { score: u32 },
    Undone { remaining: usize },
    DifficultyChanged(Difficulty),
    HintsToggled(bool),
    NewGame,
}

/// Events produced by one successful action, in order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TurnReport {
    pub events: Vec<GameEvent>,
    pub score_delta: u32,
}

impl TurnReport {
    fn single(event: GameEvent) -> Self {
        Self {
            events: vec![event],
            score_delta: 0,
        }
    }

    pub fn game_over(&self) -> bool {
        self.events
            .iter()
            .any(|e| matches!(e, GameEvent::GameOver { .. }))
    }

    pub fn new_best(&self) -> Option<u32> {
        self.events.iter().find_map(|e| match e {
            GameEvent::NewBestScore { score } => Some(*score),
            _ => None,
        })
    }
}

/// A single game from first tile to game over
#[derive(Debug, Clone)]
pub struct GameSession {
    state: SessionState,
    source: TileSource,
    undo: UndoLog<SessionState>,
    best_score: u32,
}

impl GameSession {
    /// Start a fresh session
    pub fn new(config: SessionConfig) -> Self {
        let mut source = TileSource::new(config.seed, config.difficulty);
        let mut state = SessionState::new();
        source.ensure_lookahead(&mut state.queue, INITIAL_QUEUE_LEN);
        Self {
            state,
            source,
            undo: UndoLog::new(),
            best_score: config.best_score,
        }
    }

    /// Resume from an explicit state (replays, tests)
    ///
    /// An empty queue is refilled so the head is always playable.
    pub fn from_state(config: SessionConfig, mut state: SessionState) -> Self {
        let mut source = TileSource::new(config.seed, config.difficulty);
        source.ensure_lookahead(&mut state.queue, 1);
        Self {
            state,
            source,
            undo: UndoLog::new(),
            best_score: config.best_score,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn board(&self) -> &Board {
        &self.state.board
    }

    pub fn queue(&self) -> &VecDeque<TileValue> {
        &self.state.queue
    }

    pub fn head(&self) -> Option<TileValue> {
        self.state.head()
    }

    pub fn keep(&self) -> Option<TileValue> {
        self.state.keep
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn level(&self) -> u32 {
        self.state.level
    }

    pub fn trash_uses(&self) -> u32 {
        self.state.trash_uses
    }

    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    pub fn hints_on(&self) -> bool {
        self.state.hints_on
    }

    pub fn elapsed_seconds(&self) -> u32 {
        self.state.clock.seconds()
    }

    pub fn clock_running(&self) -> bool {
        self.state.clock.is_running()
    }

    pub fn difficulty(&self) -> Difficulty {
        self.source.difficulty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    pub fn is_game_over(&self) -> bool {
        self.state.game_over
    }

    pub fn status(&self) -> SessionStatus {
        if self.state.game_over {
            SessionStatus::GameOver
        } else {
            SessionStatus::Active
        }
    }

    /// Hinted cells for the current head, when hints are on and play continues
    pub fn hints(&self) -> Option<HintMask> {
        if !self.state.hints_on || self.state.game_over {
            return None;
        }
        self.head().map(|v| hint_mask(&self.state.board, v))
    }

    /// Dispatch an action to its handler
    pub fn apply_action(&mut self, action: GameAction) -> Result<TurnReport, ActionError> {
        match action {
            GameAction::Place { row, col } => self.place_active(row, col),
            GameAction::Keep => self.keep_active(),
            GameAction::Trash => self.trash_active(),
            GameAction::Undo => self.undo(),
            GameAction::SetDifficulty(difficulty) => Ok(self.set_difficulty(difficulty)),
            GameAction::ToggleHints => Ok(self.toggle_hints()),
            GameAction::NewGame => Ok(self.new_game()),
        }
    }

    /// Play the queue head at `(row, col)` and resolve merges
    pub fn place_active(&mut self, row: usize, col: usize) -> Result<TurnReport, ActionError> {
        self.ensure_active()?;
        let pos = Pos::new(row, col);
        self.state.board.check_place(pos)?;

        let value = self.head_or_refill();
        self.undo.push(self.state.clone());

        self.state.queue.pop_front();
        self.state.board.set(pos, Some(value));

        let mut report = TurnReport::default();
        report.events.push(GameEvent::Placed { pos, value });

        let outcome = merge::resolve(&mut self.state.board, pos);
        report
            .events
            .extend(outcome.steps.iter().copied().map(GameEvent::Merged));
        report.score_delta = outcome.score_delta;
        self.state.score += outcome.score_delta;

        if let Some(change) = level_change(self.state.level, self.state.score) {
            self.state.level = change.to;
            self.state.trash_uses += change.trash_awarded;
            report.events.push(GameEvent::LevelUp {
                from: change.from,
                to: change.to,
                trash_awarded: change.trash_awarded,
            });
            if change.milestone {
                report
                    .events
                    .push(GameEvent::DifficultyMilestone { level: change.to });
            }
        }

        if self.state.score > self.best_score {
            self.best_score = self.state.score;
            report.events.push(GameEvent::NewBestScore {
                score: self.state.score,
            });
        }

        self.refill_queue();

        if is_terminal(&self.state.board) {
            self.state.game_over = true;
            self.state.clock.pause();
            report.events.push(GameEvent::GameOver {
                score: self.state.score,
            });
        }

        Ok(report)
    }

    /// Store the head in the keep slot, swapping if it is occupied
    pub fn keep_active(&mut self) -> Result<TurnReport, ActionError> {
        self.ensure_active()?;
        let value = self.head_or_refill();
        self.undo.push(self.state.clone());

        let swapped_out = self.state.keep.replace(value);
        match swapped_out {
            Some(previous) => {
                if let Some(head) = self.state.queue.front_mut() {
                    *head = previous;
                }
            }
            None => {
                self.state.queue.pop_front();
                self.refill_queue();
            }
        }

        Ok(TurnReport::single(GameEvent::Kept { value, swapped_out }))
    }

    /// Discard the head, spending one trash use
    pub fn trash_active(&mut self) -> Result<TurnReport, ActionError> {
        self.ensure_active()?;
        if self.state.trash_uses == 0 {
            return Err(ActionError::NoTrashRemaining);
        }
        let value = self.head_or_refill();
        self.undo.push(self.state.clone());

        self.state.queue.pop_front();
        self.state.trash_uses -= 1;
        self.refill_queue();

        Ok(TurnReport::single(GameEvent::Trashed {
            value,
            remaining: self.state.trash_uses,
        }))
    }

    /// Restore the state from before the most recent action
    pub fn undo(&mut self) -> Result<TurnReport, ActionError> {
        let previous = self.undo.pop()?;
        self.state = previous;
        self.state.game_over = false;
        self.state.clock.resume();
        Ok(TurnReport::single(GameEvent::Undone {
            remaining: self.undo.len(),
        }))
    }

    /// Change the domain of future draws; queued tiles are untouched
    pub fn set_difficulty(&mut self, difficulty: Difficulty) -> TurnReport {
        self.source.set_difficulty(difficulty);
        TurnReport::single(GameEvent::DifficultyChanged(difficulty))
    }

    pub fn toggle_hints(&mut self) -> TurnReport {
        self.state.hints_on = !self.state.hints_on;
        TurnReport::single(GameEvent::HintsToggled(self.state.hints_on))
    }

    /// Replace the session with a fresh one, keeping difficulty, RNG stream
    /// and best score
    pub fn new_game(&mut self) -> TurnReport {
        self.state = SessionState::new();
        self.source
            .ensure_lookahead(&mut self.state.queue, INITIAL_QUEUE_LEN);
        self.undo.clear();
        TurnReport::single(GameEvent::NewGame)
    }

    /// Advance the elapsed-time clock by one second (no-op while paused)
    pub fn tick(&mut self) -> bool {
        self.state.clock.tick()
    }

    pub fn pause(&mut self) {
        self.state.clock.pause();
    }

    pub fn resume(&mut self) {
        if !self.state.game_over {
            self.state.clock.resume();
        }
    }

    fn ensure_active(&self) -> Result<(), ActionError> {
        if self.state.game_over {
            return Err(ActionError::GameOver);
        }
        Ok(())
    }

    /// The head tile, drawing one first if the queue ran dry
    fn head_or_refill(&mut self) -> TileValue {
        if let Some(value) = self.state.head() {
            return value;
        }
        let value = self.source.draw();
        self.state.queue.push_back(value);
        self.refill_queue();
        value
    }

    fn refill_queue(&mut self) {
        if self.state.queue.is_empty() {
            self.source
                .ensure_lookahead(&mut self.state.queue, REFILL_QUEUE_LEN);
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
