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

use chrono::TimeZone;
use chrono::Utc;

use crate::types::timestamp::Timestamp;

/// Routes `log` output through the test harness. Safe to call from every
/// test; only the first call installs the logger.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A fixed timestamp for tests: 2025-03-10 09:00 UTC.
pub fn fixed_now() -> Timestamp {
    Timestamp::new(Utc.with_ymd_and_hms(2025, 3, 10, 9, 0, 0).unwrap())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_twice() {
        init_logging();
        init_logging();
        log::debug!("logger installed");
    }

    #[test]
    fn test_fixed_now() {
        assert_eq!(fixed_now().to_string(), "2025-03-10T09:00:00+00:00");
    }
}
