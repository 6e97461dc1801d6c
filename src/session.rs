// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use chrono::Duration;
use serde::Deserialize;
use serde::Serialize;

use crate::error::Error;
use crate::error::Fallible;
use crate::summary::SessionSummary;
use crate::types::rating::Rating;
use crate::types::timestamp::Timestamp;

/// Aggregate statistics for one study session.
///
/// Every transition takes `&self` and returns the next state, so a failed
/// call leaves the caller's copy as it was. A session is complete exactly
/// when every card has been rated once.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStats {
    total_cards: usize,
    hard_count: usize,
    good_count: usize,
    easy_count: usize,
    started_at: Timestamp,
    completed_at: Option<Timestamp>,
    is_complete: bool,
}

impl SessionStats {
    /// Starts a session over `total_cards` cards.
    pub fn start(total_cards: usize, now: Timestamp) -> Fallible<Self> {
        if total_cards == 0 {
            return Err(Error::InvalidSessionSize { total_cards });
        }
        log::debug!("Session started with {total_cards} cards");
        Ok(Self {
            total_cards,
            hard_count: 0,
            good_count: 0,
            easy_count: 0,
            started_at: now,
            completed_at: None,
            is_complete: false,
        })
    }

    /// Counts one rating. The rating of the final card completes the
    /// session.
    pub fn record(&self, rating: Rating, now: Timestamp) -> Fallible<Self> {
        if self.is_complete {
            return Err(Error::SessionAlreadyComplete);
        }
        let mut next = *self;
        match rating {
            Rating::Hard => next.hard_count += 1,
            Rating::Good => next.good_count += 1,
            Rating::Easy => next.easy_count += 1,
        }
        if next.answered() == next.total_cards {
            next = next.seal(now);
        }
        Ok(next)
    }

    /// Marks the session complete. Completing an already complete session
    /// is a no-op, since the UI may send the signal more than once.
    pub fn complete(&self, now: Timestamp) -> Fallible<Self> {
        if self.is_complete {
            log::debug!("Ignoring duplicate session completion");
            return Ok(*self);
        }
        if self.answered() < self.total_cards {
            return Err(Error::SessionIncomplete {
                answered: self.answered(),
                total_cards: self.total_cards,
            });
        }
        Ok(self.seal(now))
    }

    fn seal(mut self, now: Timestamp) -> Self {
        log::debug!("Session completed");
        self.completed_at = Some(now);
        self.is_complete = true;
        self
    }

    pub fn total_cards(&self) -> usize {
        self.total_cards
    }

    pub fn hard_count(&self) -> usize {
        self.hard_count
    }

    pub fn good_count(&self) -> usize {
        self.good_count
    }

    pub fn easy_count(&self) -> usize {
        self.easy_count
    }

    pub fn started_at(&self) -> Timestamp {
        self.started_at
    }

    pub fn completed_at(&self) -> Option<Timestamp> {
        self.completed_at
    }

    pub fn is_complete(&self) -> bool {
        self.is_complete
    }

    /// The number of cards rated so far.
    pub fn answered(&self) -> usize {
        self.hard_count + self.good_count + self.easy_count
    }

    pub fn remaining(&self) -> usize {
        self.total_cards - self.answered()
    }

    /// `good` and `easy` ratings.
    pub fn correct_count(&self) -> usize {
        self.good_count + self.easy_count
    }

    /// Fraction of the session done, in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        self.answered() as f64 / self.total_cards as f64
    }

    /// Points earned under a caller-supplied table.
    pub fn points(&self, table: &PointsTable) -> u64 {
        let hard = table.hard.saturating_mul(self.hard_count as u64);
        let good = table.good.saturating_mul(self.good_count as u64);
        let easy = table.easy.saturating_mul(self.easy_count as u64);
        hard.saturating_add(good).saturating_add(easy)
    }

    /// How long the session took. `None` until it completes.
    pub fn duration(&self) -> Option<Duration> {
        self.completed_at.map(|end| end.since(self.started_at))
    }

    pub fn summary(&self, points: Option<&PointsTable>) -> SessionSummary {
        SessionSummary::new(self, points)
    }
}

/// Points awarded per rating. This is the caller's policy, so there is no
/// default.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct PointsTable {
    pub hard: u64,
    pub good: u64,
    pub easy: u64,
}

impl PointsTable {
    pub fn new(hard: u64, good: u64, easy: u64) -> Self {
        Self { hard, good, easy }
    }

    pub fn points_for(&self, rating: Rating) -> u64 {
        match rating {
            Rating::Hard => self.hard,
            Rating::Good => self.good,
            Rating::Easy => self.easy,
        }
    }
}
