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

use std::fs::read_to_string;
use std::path::Path;

use serde::Deserialize;
use serde::Serialize;

use crate::error::Fallible;
use crate::scheduler::IntervalParams;
use crate::types::mastery::MasteryThresholds;

/// Algorithm constants. Every field has a default, so a TOML file only
/// needs to name the values it overrides:
///
/// ```toml
/// [scheduling]
/// max_ease = 2.8
///
/// [mastery]
/// mastered_after_days = 21
/// ```
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SchedulerConfig {
    pub scheduling: IntervalParams,
    pub mastery: MasteryThresholds,
}

impl SchedulerConfig {
    pub fn from_toml_str(content: &str) -> Fallible<Self> {
        let config: SchedulerConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Fallible<Self> {
        log::debug!("Loading scheduler config from {}", path.display());
        let content = read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Fallible<()> {
        self.scheduling.validate()?;
        self.mastery.validate()?;
        Ok(())
    }
}
