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

use serde::{Deserialize, Serialize};

/// Errors raised while walking a flow export packet.
///
/// None of these escape the public decode entry points, they are logged and
/// the decoder moves on to the next set or packet.
#[derive(thiserror::Error, Eq, PartialEq, Clone, Debug, Serialize, Deserialize)]
pub enum DecodeError {
    #[error("out of bounds read: needed {needed} bytes but only {remaining} remain")]
    OutOfBounds { needed: usize, remaining: usize },

    #[error("unsupported integer width of {0} bytes")]
    InvalidIntegerWidth(usize),

    #[error("unsupported flow export version {0}")]
    UnsupportedVersion(u16),

    #[error("invalid set length {0}, must be at least 4 bytes")]
    InvalidSetLength(u16),

    #[error("invalid message length {0}")]
    InvalidMessageLength(u16),

    #[error("invalid template id {0}, template ids start at 256")]
    InvalidTemplateId(u16),

    #[error("scope field count {scope} is invalid for a template with {total} fields")]
    InvalidScopeFieldsCount { scope: u16, total: u16 },

    #[error("declared length of {declared} bytes exceeds the {available} bytes available")]
    TruncatedPacket { declared: usize, available: usize },

    #[error("no template defined for template id {0}")]
    NoTemplateDefinedFor(u16),
}
