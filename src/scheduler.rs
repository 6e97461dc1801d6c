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

//! SM-2-style ease and interval scheduling.

use serde::Deserialize;
use serde::Serialize;

use crate::error::Fallible;
use crate::error::invalid_config;
use crate::types::progress::INITIAL_EASE_FACTOR;
use crate::types::progress::ReviewProgress;
use crate::types::rating::Rating;
use crate::types::timestamp::Timestamp;

/// A card that has been reviewed is never scheduled sooner than this.
const MIN_INTERVAL: f64 = 1.0;

/// Ceiling on intervals, to keep the `f64 -> u32` conversion exact and due
/// dates well inside chrono's range.
const MAX_INTERVAL_DAYS: u32 = 36_500;

const MAX_INTERVAL: f64 = MAX_INTERVAL_DAYS as f64;

/// The constants of the scheduling algorithm.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct IntervalParams {
    pub initial_ease: f64,
    pub min_ease: f64,
    pub max_ease: f64,
    /// Subtracted from the ease on a `hard` rating.
    pub hard_ease_penalty: f64,
    /// Added to the ease on an `easy` rating.
    pub easy_ease_bonus: f64,
    /// The interval is multiplied by this on a `hard` rating.
    pub hard_interval_factor: f64,
    /// Extra multiplier on top of the ease for an `easy` rating.
    pub easy_interval_bonus: f64,
    pub first_interval_hard: u32,
    pub first_interval_good: u32,
    pub first_interval_easy: u32,
}

impl Default for IntervalParams {
    fn default() -> Self {
        Self {
            initial_ease: INITIAL_EASE_FACTOR,
            min_ease: 1.3,
            max_ease: 3.0,
            hard_ease_penalty: 0.2,
            easy_ease_bonus: 0.15,
            hard_interval_factor: 0.5,
            easy_interval_bonus: 1.3,
            first_interval_hard: 1,
            first_interval_good: 1,
            first_interval_easy: 2,
        }
    }
}

impl IntervalParams {
    /// Rejects parameters under which `hard` could grow an interval, `easy`
    /// could schedule sooner than `good`, or the ease could leave its bounds.
    pub fn validate(&self) -> Fallible<()> {
        let finite = [
            self.initial_ease,
            self.min_ease,
            self.max_ease,
            self.hard_ease_penalty,
            self.easy_ease_bonus,
            self.hard_interval_factor,
            self.easy_interval_bonus,
        ];
        if finite.iter().any(|x| !x.is_finite()) {
            return invalid_config("scheduling parameters must be finite");
        }
        if self.min_ease < 1.0 {
            return invalid_config("min_ease must be at least 1.0");
        }
        if !(self.min_ease <= self.initial_ease && self.initial_ease <= self.max_ease) {
            return invalid_config("initial_ease must lie between min_ease and max_ease");
        }
        if self.hard_ease_penalty < 0.0 || self.easy_ease_bonus < 0.0 {
            return invalid_config("ease adjustments must not be negative");
        }
        if !(self.hard_interval_factor > 0.0 && self.hard_interval_factor <= 1.0) {
            return invalid_config("hard_interval_factor must be in (0, 1]");
        }
        if self.easy_interval_bonus < 1.0 {
            return invalid_config("easy_interval_bonus must be at least 1.0");
        }
        if self.first_interval_hard == 0 {
            return invalid_config("first intervals must be at least one day");
        }
        if !(self.first_interval_hard <= self.first_interval_good
            && self.first_interval_good <= self.first_interval_easy)
        {
            return invalid_config("first intervals must not decrease from hard to easy");
        }
        if self.first_interval_easy > MAX_INTERVAL_DAYS {
            return invalid_config(format!(
                "first intervals must not exceed {MAX_INTERVAL_DAYS} days"
            ));
        }
        Ok(())
    }

    /// The progress of a card after it is given `rating` at `now`. The
    /// input is left untouched. Out-of-range input (say, an ease factor
    /// restored from an older configuration) is clamped, so the result
    /// always satisfies the progress invariants.
    pub fn update(
        &self,
        progress: &ReviewProgress,
        rating: Rating,
        now: Timestamp,
    ) -> ReviewProgress {
        let ease_factor = self.new_ease(progress.ease_factor, rating);
        let interval_days = self.new_interval(progress.interval_days, ease_factor, rating);
        let (correct_count, incorrect_count) = if rating.is_correct() {
            (progress.correct_count.saturating_add(1), progress.incorrect_count)
        } else {
            (progress.correct_count, progress.incorrect_count.saturating_add(1))
        };
        let next_review_at = now.plus_days(interval_days);
        log::debug!(
            "{} ease={:.2} interval={}d due={}",
            rating,
            ease_factor,
            interval_days,
            next_review_at
        );
        ReviewProgress {
            ease_factor,
            interval_days,
            next_review_at: Some(next_review_at),
            review_count: progress.review_count.saturating_add(1),
            last_rating: Some(rating),
            correct_count,
            incorrect_count,
        }
    }

    fn new_ease(&self, ease: f64, rating: Rating) -> f64 {
        let ease = if ease.is_finite() { ease } else { self.initial_ease };
        let ease = match rating {
            Rating::Hard => ease - self.hard_ease_penalty,
            Rating::Good => ease,
            Rating::Easy => ease + self.easy_ease_bonus,
        };
        ease.max(self.min_ease).min(self.max_ease)
    }

    fn new_interval(&self, interval_days: u32, ease: f64, rating: Rating) -> u32 {
        if interval_days == 0 {
            let first = match rating {
                Rating::Hard => self.first_interval_hard,
                Rating::Good => self.first_interval_good,
                Rating::Easy => self.first_interval_easy,
            };
            return first.clamp(1, MAX_INTERVAL_DAYS);
        }
        let days = f64::from(interval_days);
        let days = match rating {
            Rating::Hard => days * self.hard_interval_factor,
            Rating::Good => days * ease,
            Rating::Easy => days * ease * self.easy_interval_bonus,
        };
        days.round().clamp(MIN_INTERVAL, MAX_INTERVAL) as u32
    }
}

/// Schedules a card with the default parameters.
pub fn update(progress: &ReviewProgress, rating: Rating, now: Timestamp) -> ReviewProgress {
    IntervalParams::default().update(progress, rating, now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SchedulerConfig;
    use crate::error::Error;
    use crate::helper::fixed_now;
    use crate::helper::init_logging;

    const RATINGS: [Rating; 3] = [Rating::Hard, Rating::Good, Rating::Easy];

    fn t() -> Timestamp {
        fixed_now()
    }

    fn progress(ease_factor: f64, interval_days: u32) -> ReviewProgress {
        ReviewProgress {
            ease_factor,
            interval_days,
            next_review_at: Some(t()),
            review_count: if interval_days == 0 { 0 } else { 3 },
            ..ReviewProgress::new()
        }
    }

    /// A spread of starting states, including ones outside the usual bounds.
    fn starting_states() -> Vec<ReviewProgress> {
        let eases = [0.5, 1.3, 1.4, 2.0, 2.5, 2.9, 3.0, 4.0];
        let intervals = [0, 1, 2, 3, 7, 10, 30, 100, 1000];
        let mut states = Vec::new();
        for ease in eases {
            for interval in intervals {
                states.push(progress(ease, interval));
            }
        }
        states
    }

    #[test]
    fn test_new_card_good() {
        init_logging();
        let result = update(&ReviewProgress::new(), Rating::Good, t());
        assert_eq!(result.ease_factor, 2.5);
        assert_eq!(result.interval_days, 1);
        assert_eq!(result.next_review_at, Some(t().plus_days(1)));
        assert_eq!(result.review_count, 1);
        assert_eq!(result.correct_count, 1);
        assert_eq!(result.incorrect_count, 0);
        assert_eq!(result.last_rating, Some(Rating::Good));
    }

    #[test]
    fn test_new_card_easy() {
        let result = update(&ReviewProgress::new(), Rating::Easy, t());
        assert!((result.ease_factor - 2.65).abs() < 1e-9);
        assert_eq!(result.interval_days, 2);
        assert_eq!(result.next_review_at, Some(t().plus_days(2)));
        assert_eq!(result.review_count, 1);
    }

    #[test]
    fn test_new_card_hard() {
        let result = update(&ReviewProgress::new(), Rating::Hard, t());
        assert!((result.ease_factor - 2.3).abs() < 1e-9);
        assert_eq!(result.interval_days, 1);
        assert_eq!(result.incorrect_count, 1);
        assert_eq!(result.correct_count, 0);
    }

    #[test]
    fn test_good_after_first_review() {
        let result = update(&progress(2.5, 1), Rating::Good, t());
        assert_eq!(result.ease_factor, 2.5);
        // round(1 × 2.5) = 3
        assert_eq!(result.interval_days, 3);
    }

    #[test]
    fn test_hard_halves_interval() {
        let result = update(&progress(2.5, 10), Rating::Hard, t());
        assert!((result.ease_factor - 2.3).abs() < 1e-9);
        assert_eq!(result.interval_days, 5);
    }

    #[test]
    fn test_easy_interval() {
        let result = update(&progress(2.5, 10), Rating::Easy, t());
        // round(10 × 2.65 × 1.3) = round(34.45) = 34
        assert_eq!(result.interval_days, 34);
    }

    #[test]
    fn test_ease_floor() {
        let result = update(&progress(1.35, 4), Rating::Hard, t());
        assert_eq!(result.ease_factor, 1.3);
        assert_eq!(result.interval_days, 2);
    }

    #[test]
    fn test_ease_ceiling() {
        let result = update(&progress(2.95, 4), Rating::Easy, t());
        assert_eq!(result.ease_factor, 3.0);
    }

    #[test]
    fn test_input_not_mutated() {
        let before = progress(2.5, 10);
        let copy = before.clone();
        let _ = update(&before, Rating::Hard, t());
        assert_eq!(before, copy);
    }

    #[test]
    fn test_ease_stays_in_bounds() {
        for state in starting_states() {
            for rating in RATINGS {
                let result = update(&state, rating, t());
                assert!(result.ease_factor >= 1.3, "{state:?} {rating}");
                assert!(result.ease_factor <= 3.0, "{state:?} {rating}");
            }
        }
    }

    #[test]
    fn test_interval_at_least_one_day() {
        for state in starting_states() {
            for rating in RATINGS {
                assert!(update(&state, rating, t()).interval_days >= 1);
            }
        }
    }

    #[test]
    fn test_hard_never_grows_interval() {
        for state in starting_states() {
            if state.interval_days > 0 {
                let result = update(&state, Rating::Hard, t());
                assert!(result.interval_days <= state.interval_days, "{state:?}");
            }
        }
    }

    #[test]
    fn test_easy_never_sooner_than_good() {
        for state in starting_states() {
            let good = update(&state, Rating::Good, t());
            let easy = update(&state, Rating::Easy, t());
            assert!(easy.interval_days >= good.interval_days, "{state:?}");
        }
    }

    #[test]
    fn test_review_count_increments_by_one() {
        for state in starting_states() {
            for rating in RATINGS {
                let result = update(&state, rating, t());
                assert_eq!(result.review_count, state.review_count + 1);
                assert_eq!(
                    result.correct_count + result.incorrect_count,
                    state.correct_count + state.incorrect_count + 1
                );
            }
        }
    }

    #[test]
    fn test_due_date_matches_interval() {
        let result = update(&progress(2.5, 12), Rating::Good, t());
        assert_eq!(result.interval_days, 30);
        assert_eq!(result.next_review_at, Some(t().plus_days(30)));
    }

    #[test]
    fn test_default_params_are_valid() {
        assert!(IntervalParams::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_params() {
        let cases = [
            IntervalParams {
                min_ease: 0.5,
                ..IntervalParams::default()
            },
            IntervalParams {
                initial_ease: 3.5,
                ..IntervalParams::default()
            },
            IntervalParams {
                hard_interval_factor: 1.5,
                ..IntervalParams::default()
            },
            IntervalParams {
                easy_interval_bonus: 0.9,
                ..IntervalParams::default()
            },
            IntervalParams {
                first_interval_easy: 0,
                ..IntervalParams::default()
            },
            IntervalParams {
                easy_ease_bonus: f64::NAN,
                ..IntervalParams::default()
            },
            IntervalParams {
                first_interval_easy: 4_000_000_000,
                ..IntervalParams::default()
            },
        ];
        for params in cases {
            assert!(params.validate().is_err(), "{params:?}");
        }
    }

    #[test]
    fn test_oversized_first_interval() -> Fallible<()> {
        let content = "[scheduling]\nfirst_interval_easy = 4000000000\n";
        let result = SchedulerConfig::from_toml_str(content);
        assert!(matches!(result, Err(Error::InvalidConfig(_))));

        // Parameters built by hand skip validation; they are clamped instead.
        let params = IntervalParams {
            first_interval_hard: u32::MAX,
            first_interval_good: u32::MAX,
            first_interval_easy: u32::MAX,
            ..IntervalParams::default()
        };
        for rating in RATINGS {
            let result = params.update(&ReviewProgress::new(), rating, t());
            assert_eq!(result.interval_days, 36_500);
            assert_eq!(result.next_review_at, Some(t().plus_days(36_500)));
        }
        Ok(())
    }

    #[test]
    fn test_custom_params() {
        let params = IntervalParams {
            first_interval_good: 3,
            first_interval_easy: 5,
            ..IntervalParams::default()
        };
        let result = params.update(&ReviewProgress::new(), Rating::Good, t());
        assert_eq!(result.interval_days, 3);
        let result = params.update(&ReviewProgress::new(), Rating::Easy, t());
        assert_eq!(result.interval_days, 5);
    }
}
