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

//! spacedrill: a spaced repetition scheduling engine for flashcard review.
//!
//! This library decides when a card must be shown again, classifies how
//! well-learned it is, and aggregates the results of a study session:
//! - Ease/interval scheduling of a card after each rating
//! - Mastery classification from a card's review history
//! - Session statistics and the end-of-session recap
//! - Weighted, shuffled ordering of the cards in a session
//!
//! Persisting progress, rendering and awarding points are left to the
//! caller.

pub mod config;
pub mod error;
pub mod queue;
pub mod scheduler;
pub mod service;
pub mod session;
pub mod summary;
pub mod types;

#[cfg(test)]
mod helper;

// Re-exports for convenience
pub use config::SchedulerConfig;
pub use error::Error;
pub use error::Fallible;
pub use queue::StudyCard;
pub use queue::build_queue;
pub use queue::build_queue_with;
pub use scheduler::IntervalParams;
pub use service::Answer;
pub use service::SchedulingService;
pub use session::PointsTable;
pub use session::SessionStats;
pub use summary::SessionSummary;
pub use types::mastery::MasteryThresholds;
pub use types::mastery::MasteryTier;
pub use types::mastery::classify;
pub use types::progress::ReviewProgress;
pub use types::rating::Rating;
pub use types::timestamp::Timestamp;
