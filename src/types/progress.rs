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

use serde::Deserialize;
use serde::Serialize;

use crate::types::mastery::MasteryThresholds;
use crate::types::mastery::MasteryTier;
use crate::types::rating::Rating;
use crate::types::timestamp::Timestamp;

pub const INITIAL_EASE_FACTOR: f64 = 2.5;

/// Review progress for one (user, card) pair. The caller persists it, keyed
/// however it likes, and hands the latest copy back on the next rating.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewProgress {
    /// Multiplier applied to the interval after a `good` rating.
    pub ease_factor: f64,
    /// Days until the next review. Zero if the card was never reviewed.
    pub interval_days: u32,
    /// When the card is next due. Absent if the card was never reviewed.
    pub next_review_at: Option<Timestamp>,
    /// The number of times the card has been rated.
    pub review_count: u32,
    pub last_rating: Option<Rating>,
    pub correct_count: u32,
    pub incorrect_count: u32,
}

impl Default for ReviewProgress {
    fn default() -> Self {
        Self {
            ease_factor: INITIAL_EASE_FACTOR,
            interval_days: 0,
            next_review_at: None,
            review_count: 0,
            last_rating: None,
            correct_count: 0,
            incorrect_count: 0,
        }
    }
}

impl ReviewProgress {
    /// Progress for a card that has never been rated.
    pub fn new() -> Self {
        Self::default()
    }

    /// Progress for a never-rated card with a non-default starting ease.
    pub fn with_initial_ease(ease_factor: f64) -> Self {
        Self {
            ease_factor,
            ..Self::default()
        }
    }

    pub fn mastery(&self) -> MasteryTier {
        self.mastery_with(&MasteryThresholds::default())
    }

    pub fn mastery_with(&self, thresholds: &MasteryThresholds) -> MasteryTier {
        thresholds.classify(self.review_count, self.interval_days)
    }

    /// Whether the card should be shown at `now`. Cards without a due date
    /// have never been reviewed, and are always due.
    pub fn is_due(&self, now: Timestamp) -> bool {
        match self.next_review_at {
            Some(due) => due <= now,
            None => true,
        }
    }

    /// Fraction of ratings that were correct, or `None` before the first
    /// rating.
    pub fn accuracy(&self) -> Option<f64> {
        let total = u64::from(self.correct_count) + u64::from(self.incorrect_count);
        if total == 0 {
            None
        } else {
            Some(f64::from(self.correct_count) / total as f64)
        }
    }
}
