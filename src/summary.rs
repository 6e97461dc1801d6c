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

use serde::Serialize;

use crate::error::Fallible;
use crate::session::PointsTable;
use crate::session::SessionStats;

/// The end-of-session recap, in the shape the UI and gamification layers
/// consume.
#[derive(Clone, PartialEq, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    pub total_cards: usize,
    pub answered: usize,
    pub hard_count: usize,
    pub good_count: usize,
    pub easy_count: usize,
    /// Percentage of answered cards rated `good` or `easy`.
    pub accuracy_percent: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<i64>,
    pub is_complete: bool,
}

impl SessionSummary {
    pub fn new(stats: &SessionStats, points: Option<&PointsTable>) -> Self {
        let answered = stats.answered();
        let accuracy_percent = if answered == 0 {
            0.0
        } else {
            (stats.correct_count() as f64 / answered as f64) * 100.0
        };
        Self {
            total_cards: stats.total_cards(),
            answered,
            hard_count: stats.hard_count(),
            good_count: stats.good_count(),
            easy_count: stats.easy_count(),
            accuracy_percent,
            points: points.map(|table| stats.points(table)),
            duration_seconds: stats.duration().map(|d| d.num_seconds()),
            is_complete: stats.is_complete(),
        }
    }

    pub fn to_json(&self) -> Fallible<String> {
        let json = serde_json::to_string_pretty(self)?;
        Ok(json)
    }
}
