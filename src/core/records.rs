//! Score records - best times and rolling score history per grid size
//!
//! Typed facade over the `Store` contract. Keys mirror the original game:
//! `bestTime_<size>` holds seconds as a decimal string, `scoreHistory_<size>`
//! a JSON array of `{time, date}` entries, newest last, capped at five.
//! Malformed stored values are treated as absent.

use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::store::Store;
use crate::types::{GridSize, SCORE_HISTORY_CAP};

/// One completed solve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    /// Elapsed seconds for the solve.
    pub time: u32,
    /// Local timestamp of the solve, e.g. `2026-08-29 14:03:11`.
    pub date: String,
}

pub struct Records {
    store: Box<dyn Store>,
}

impl Records {
    pub fn new(store: Box<dyn Store>) -> Self {
        Self { store }
    }

    fn best_key(size: GridSize) -> String {
        format!("bestTime_{}", size.dimension())
    }

    fn history_key(size: GridSize) -> String {
        format!("scoreHistory_{}", size.dimension())
    }

    /// Best recorded time for `size`, if any.
    pub fn best_time(&self, size: GridSize) -> Option<u32> {
        let raw = self.store.get(&Self::best_key(size))?;
        match raw.parse() {
            Ok(seconds) => Some(seconds),
            Err(_) => {
                log::warn!("records: ignoring malformed best time {raw:?}");
                None
            }
        }
    }

    /// Recent solves for `size`, oldest first.
    pub fn score_history(&self, size: GridSize) -> Vec<ScoreEntry> {
        let Some(raw) = self.store.get(&Self::history_key(size)) else {
            return Vec::new();
        };
        match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(err) => {
                log::warn!("records: ignoring malformed score history: {err}");
                Vec::new()
            }
        }
    }

    /// Record a completed solve: update the best time if improved and append
    /// to the rolling history. Returns true iff a new best was written.
    pub fn record_solve(&mut self, size: GridSize, seconds: u32) -> bool {
        let new_best = match self.best_time(size) {
            Some(best) => seconds < best,
            None => true,
        };
        if new_best {
            self.store.set(&Self::best_key(size), &seconds.to_string());
        }

        let mut history = self.score_history(size);
        history.push(ScoreEntry {
            time: seconds,
            date: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        });
        if history.len() > SCORE_HISTORY_CAP {
            let drop = history.len() - SCORE_HISTORY_CAP;
            history.drain(..drop);
        }
        match serde_json::to_string(&history) {
            Ok(raw) => self.store.set(&Self::history_key(size), &raw),
            Err(err) => log::warn!("records: cannot serialize score history: {err}"),
        }

        new_best
    }
}

impl std::fmt::Debug for Records {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Records").finish_non_exhaustive()
    }
}
