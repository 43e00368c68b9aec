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

//! Background task that periodically replays buffered data sets.
//!
//! - `TemplateCheckerActor` - ticks on a fixed interval and calls
//!   [`FlowDecoder::check_templates`]
//! - `TemplateCheckerHandle` - stops the actor, either explicitly with
//!   [`TemplateCheckerHandle::shutdown`] or implicitly when every handle is
//!   dropped

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

use crate::pending::ReplaySummary;
use crate::FlowDecoder;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TemplateCheckerCommand {
    Shutdown,
}

#[derive(Debug)]
struct TemplateCheckerActor {
    cmd_recv: mpsc::Receiver<TemplateCheckerCommand>,
    decoder: FlowDecoder,
    interval: Duration,
}

impl TemplateCheckerActor {
    const fn new(
        cmd_recv: mpsc::Receiver<TemplateCheckerCommand>,
        decoder: FlowDecoder,
        interval: Duration,
    ) -> Self {
        Self {
            cmd_recv,
            decoder,
            interval,
        }
    }

    /// Runs until shut down, returns the accumulated replay counters
    async fn run(mut self) -> ReplaySummary {
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut total = ReplaySummary::default();
        loop {
            tokio::select! {
                biased;
                cmd = self.cmd_recv.recv() => {
                    match cmd {
                        Some(TemplateCheckerCommand::Shutdown) => {
                            info!("Received shutdown command, shutting down TemplateCheckerActor");
                        }
                        None => {
                            info!("Command channel closed, shutting down TemplateCheckerActor");
                        }
                    }
                    return total;
                }
                _ = ticker.tick() => {
                    let summary = self.decoder.check_templates();
                    if summary != ReplaySummary::default() {
                        debug!(
                            replayed = summary.replayed_sets,
                            failed = summary.failed_sets,
                            expired = summary.expired_sets,
                            records = summary.records,
                            "checked buffered data sets"
                        );
                    }
                    total.replayed_sets += summary.replayed_sets;
                    total.failed_sets += summary.failed_sets;
                    total.expired_sets += summary.expired_sets;
                    total.records += summary.records;
                }
            }
        }
    }
}

#[derive(Debug, strum_macros::Display)]
pub enum TemplateCheckerHandleError {
    #[strum(to_string = "Error sending command to actor")]
    SendError,
}

impl std::error::Error for TemplateCheckerHandleError {}

#[derive(Debug, Clone)]
pub struct TemplateCheckerHandle {
    cmd_send: mpsc::Sender<TemplateCheckerCommand>,
}

impl TemplateCheckerHandle {
    pub async fn shutdown(&self) -> Result<(), TemplateCheckerHandleError> {
        self.cmd_send
            .send(TemplateCheckerCommand::Shutdown)
            .await
            .map_err(|_| TemplateCheckerHandleError::SendError)
    }
}

/// Spawn the re-check task on the current tokio runtime.
///
/// The first check runs immediately, then once every `interval`.
pub fn spawn_template_checker(
    decoder: FlowDecoder,
    interval: Duration,
) -> (JoinHandle<ReplaySummary>, TemplateCheckerHandle) {
    let (cmd_send, cmd_recv) = mpsc::channel(1);
    let actor = TemplateCheckerActor::new(cmd_recv, decoder, interval);
    let join_handle = tokio::spawn(actor.run());
    (join_handle, TemplateCheckerHandle { cmd_send })
}
