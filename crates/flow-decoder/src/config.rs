// Copyright (C) 2025-present The NetGauze Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//    http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or
// implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use serde_with::serde_as;
use std::time::Duration;

const PENDING_RETENTION_DEFAULT: Duration = Duration::from_secs(60);

pub(crate) const fn default_pending_retention() -> Duration {
    PENDING_RETENTION_DEFAULT
}

pub(crate) const fn default_template_check_interval() -> Duration {
    Duration::from_secs(5)
}

pub(crate) const fn default_max_pending_sets_per_template() -> usize {
    1_000
}

#[serde_as]
#[derive(Debug, Clone, Eq, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DecoderConfig {
    /// How long data sets wait for their template before being dropped
    #[serde(default = "default_pending_retention")]
    #[serde_as(as = "serde_with::DurationSeconds<u64>")]
    pub pending_retention: Duration,

    /// Period of the background task replaying buffered data sets
    #[serde(default = "default_template_check_interval")]
    #[serde_as(as = "serde_with::DurationSeconds<u64>")]
    pub template_check_interval: Duration,

    #[serde(default = "default_max_pending_sets_per_template")]
    pub max_pending_sets_per_template: usize,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            pending_retention: default_pending_retention(),
            template_check_interval: default_template_check_interval(),
            max_pending_sets_per_template: default_max_pending_sets_per_template(),
        }
    }
}
