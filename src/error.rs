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

use thiserror::Error;

/// Every error the engine can return. All of them are local and
/// recoverable: a failed call leaves the caller's state untouched.
#[derive(Debug, Error)]
pub enum Error {
    /// A rating value outside `hard`, `good` and `easy`.
    #[error("invalid rating: {value:?}")]
    InvalidRating { value: String },
    /// A session was started with no cards.
    #[error("invalid session size: {total_cards}")]
    InvalidSessionSize { total_cards: usize },
    /// A rating arrived after the session had already completed.
    #[error("session already complete")]
    SessionAlreadyComplete,
    /// The session was completed before every card had been rated.
    #[error("session incomplete: {answered} of {total_cards} cards rated")]
    SessionIncomplete { answered: usize, total_cards: usize },
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Whether the caller can silently ignore this error. Duplicate ratings
    /// racing the end of a session are expected from a UI layer.
    pub fn is_benign(&self) -> bool {
        matches!(self, Error::SessionAlreadyComplete)
    }
}

pub type Fallible<T> = Result<T, Error>;

pub fn invalid_config<T>(msg: impl Into<String>) -> Fallible<T> {
    Err(Error::InvalidConfig(msg.into()))
}
