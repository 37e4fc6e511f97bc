use tracing::{debug, info, warn};

use crate::core::{format_elapsed, ActionError, GameSession, GameSnapshot, SessionConfig, TurnReport};
use crate::message::Message;
use crate::store::BestScoreStore;
use crate::types::{Difficulty, GameAction};

/// Startup parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    pub seed: u32,
    pub difficulty: Difficulty,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            difficulty: Difficulty::default(),
        }
    }
}

/// Owns one session plus its best-score store
///
/// Front ends call [`Engine::dispatch`] once per input action and
/// [`Engine::tick`] once per second, then render [`Engine::snapshot`].
pub struct Engine<S: BestScoreStore> {
    session: GameSession,
    store: S,
    message: Message,
}

impl<S: BestScoreStore> Engine<S> {
    pub fn new(config: EngineConfig, mut store: S) -> Self {
        let best_score = match store.load_best_score() {
            Ok(best) => best,
            Err(err) => {
                warn!(error = %err, "could not load best score; starting from 0");
                0
            }
        };
        info!(
            seed = config.seed,
            difficulty = config.difficulty.as_str(),
            best_score,
            "starting session"
        );
        let session = GameSession::new(SessionConfig {
            seed: config.seed,
            difficulty: config.difficulty,
            best_score,
        });
        Self {
            session,
            store,
            message: Message::welcome(),
        }
    }

    /// Wrap an existing session (replays, tests)
    ///
    /// The store is not consulted; the session already carries its best score.
    pub fn with_session(session: GameSession, store: S) -> Self {
        Self {
            session,
            store,
            message: Message::welcome(),
        }
    }

    /// Run one action against the session
    ///
    /// Errors are also reflected in [`Engine::message`]; the session is
    /// unchanged when an error is returned.
    pub fn dispatch(&mut self, action: GameAction) -> Result<TurnReport, ActionError> {
        match self.session.apply_action(action) {
            Ok(report) => {
                debug!(
                    action = action.as_str(),
                    events = report.events.len(),
                    score_delta = report.score_delta,
                    "action applied"
                );
                if let Some(best) = report.new_best() {
                    self.persist_best(best);
                }
                if report.game_over() {
                    info!(
                        score = self.session.score(),
                        level = self.session.level(),
                        elapsed = %format_elapsed(self.session.elapsed_seconds()),
                        "game over"
                    );
                }
                self.message = Message::for_report(&report);
                Ok(report)
            }
            Err(err) => {
                debug!(action = action.as_str(), code = err.code(), "action rejected");
                self.message = Message::for_error(err);
                Err(err)
            }
        }
    }

    /// Forward the once-per-second clock tick
    pub fn tick(&mut self) -> bool {
        self.session.tick()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.session.snapshot()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.session.snapshot_into(out);
    }

    pub fn message(&self) -> &Message {
        &self.message
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn persist_best(&mut self, best: u32) {
        match self.store.save_best_score(best) {
            Ok(()) => debug!(best, "best score saved"),
            Err(err) => warn!(best, error = %err, "could not save best score"),
        }
    }
}
