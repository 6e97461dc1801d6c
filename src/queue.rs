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
use rand::seq::SliceRandom;

use crate::types::progress::ReviewProgress;

/// A card as seen by the queue builder: an identifier plus its answer
/// history.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct StudyCard<Id> {
    pub id: Id,
    pub correct_count: u32,
    pub incorrect_count: u32,
}

impl<Id> StudyCard<Id> {
    pub fn new(id: Id, correct_count: u32, incorrect_count: u32) -> Self {
        Self {
            id,
            correct_count,
            incorrect_count,
        }
    }

    pub fn from_progress(id: Id, progress: &ReviewProgress) -> Self {
        Self::new(id, progress.correct_count, progress.incorrect_count)
    }

    /// How many times the card appears in the queue. Cards answered wrong
    /// more often than right appear once per net miss, plus one.
    pub fn weight(&self) -> usize {
        let net = i64::from(self.incorrect_count) - i64::from(self.correct_count) + 1;
        net.max(1) as usize
    }
}

/// Builds the session queue from `cards`, shuffled with the thread-local
/// generator. The order is deliberately not reproducible.
pub fn build_queue<Id: Clone>(cards: &[StudyCard<Id>]) -> Vec<Id> {
    build_queue_with(cards, &mut rand::rng())
}

/// Builds the session queue from `cards`, shuffled with `rng`.
///
/// Every card appears at least once, weaker cards more often, and the
/// queue is a uniformly random permutation of that multiset.
pub fn build_queue_with<Id, R>(cards: &[StudyCard<Id>], rng: &mut R) -> Vec<Id>
where
    Id: Clone,
    R: Rng + ?Sized,
{
    let mut queue: Vec<Id> = Vec::with_capacity(cards.iter().map(StudyCard::weight).sum());
    for card in cards {
        for _ in 0..card.weight() {
            queue.push(card.id.clone());
        }
    }
    queue.shuffle(rng);
    log::debug!(
        "Built queue of {} entries from {} cards",
        queue.len(),
        cards.len()
    );
    queue
}
