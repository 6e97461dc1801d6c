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

use std::fmt::Display;
use std::fmt::Formatter;

use serde::Deserialize;
use serde::Serialize;

use crate::error::Fallible;
use crate::error::invalid_config;

/// How well-learned a card is. Variants are declared in rank order, so the
/// derived `Ord` ranks `New < Learning < Reviewing < Mastered`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MasteryTier {
    /// The card has never been reviewed.
    New,
    Learning,
    Reviewing,
    Mastered,
}

impl MasteryTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            MasteryTier::New => "new",
            MasteryTier::Learning => "learning",
            MasteryTier::Reviewing => "reviewing",
            MasteryTier::Mastered => "mastered",
        }
    }
}

impl Display for MasteryTier {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Interval lengths, in days, at which a reviewed card moves up a tier.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct MasteryThresholds {
    /// Cards with at least this interval are `Reviewing`.
    pub reviewing_after_days: u32,
    /// Cards with at least this interval are `Mastered`.
    pub mastered_after_days: u32,
}

impl Default for MasteryThresholds {
    fn default() -> Self {
        Self {
            reviewing_after_days: 7,
            mastered_after_days: 30,
        }
    }
}

impl MasteryThresholds {
    pub fn classify(&self, review_count: u32, interval_days: u32) -> MasteryTier {
        if review_count == 0 {
            MasteryTier::New
        } else if interval_days < self.reviewing_after_days {
            MasteryTier::Learning
        } else if interval_days < self.mastered_after_days {
            MasteryTier::Reviewing
        } else {
            MasteryTier::Mastered
        }
    }

    pub fn validate(&self) -> Fallible<()> {
        if self.reviewing_after_days == 0 {
            return invalid_config("reviewing_after_days must be positive");
        }
        if self.reviewing_after_days >= self.mastered_after_days {
            return invalid_config("reviewing_after_days must be less than mastered_after_days");
        }
        Ok(())
    }
}

/// Classifies a card with the default thresholds.
pub fn classify(review_count: u32, interval_days: u32) -> MasteryTier {
    MasteryThresholds::default().classify(review_count, interval_days)
}
