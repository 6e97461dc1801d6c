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

use rand::Rng;

use crate::config::SchedulerConfig;
use crate::error::Fallible;
use crate::queue::StudyCard;
use crate::queue::build_queue_with;
use crate::session::SessionStats;
use crate::types::mastery::MasteryTier;
use crate::types::progress::ReviewProgress;
use crate::types::rating::Rating;
use crate::types::timestamp::Timestamp;

/// The entry point for callers: schedules cards, classifies them, and
/// tracks sessions under one configuration.
#[derive(Clone, Debug, Default)]
pub struct SchedulingService {
    config: SchedulerConfig,
}

/// The result of rating one card.
#[derive(Clone, PartialEq, Debug)]
pub struct Answer {
    /// The card's new progress, for the caller to persist.
    pub progress: ReviewProgress,
    pub mastery: MasteryTier,
    /// The session after this rating.
    pub session: SessionStats,
}

impl SchedulingService {
    pub fn new(config: SchedulerConfig) -> Fallible<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Progress for a card that has never been rated.
    pub fn initial_progress(&self) -> ReviewProgress {
        ReviewProgress::with_initial_ease(self.config.scheduling.initial_ease)
    }

    pub fn start_session(&self, total_cards: usize, now: Timestamp) -> Fallible<SessionStats> {
        SessionStats::start(total_cards, now)
    }

    /// Applies `rating` to a card and to the session it was shown in.
    /// `progress` is `None` for a card rated for the first time. On error,
    /// nothing is produced and the caller's state is unchanged.
    pub fn record_answer(
        &self,
        progress: Option<&ReviewProgress>,
        rating: Rating,
        session: &SessionStats,
        now: Timestamp,
    ) -> Fallible<Answer> {
        let session = session.record(rating, now)?;
        let progress = match progress {
            Some(progress) => self.config.scheduling.update(progress, rating, now),
            None => self
                .config
                .scheduling
                .update(&self.initial_progress(), rating, now),
        };
        let mastery = self.mastery(&progress);
        Ok(Answer {
            progress,
            mastery,
            session,
        })
    }

    pub fn complete_session(
        &self,
        session: &SessionStats,
        now: Timestamp,
    ) -> Fallible<SessionStats> {
        session.complete(now)
    }

    pub fn mastery(&self, progress: &ReviewProgress) -> MasteryTier {
        progress.mastery_with(&self.config.mastery)
    }

    /// The identifiers of the cards due at `now`, in input order.
    pub fn due_cards<'a, Id, I>(&self, cards: I, now: Timestamp) -> Vec<Id>
    where
        Id: Clone + 'a,
        I: IntoIterator<Item = (&'a Id, &'a ReviewProgress)>,
    {
        cards
            .into_iter()
            .filter(|(_, progress)| progress.is_due(now))
            .map(|(id, _)| id.clone())
            .collect()
    }

    pub fn build_queue<Id: Clone>(&self, cards: &[StudyCard<Id>]) -> Vec<Id> {
        self.build_queue_with(cards, &mut rand::rng())
    }

    pub fn build_queue_with<Id, R>(&self, cards: &[StudyCard<Id>], rng: &mut R) -> Vec<Id>
    where
        Id: Clone,
        R: Rng + ?Sized,
    {
        build_queue_with(cards, rng)
    }
}
