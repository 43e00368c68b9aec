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

//! Buffer for data sets that arrived before the template describing them.
//!
//! Each [`TemplateKey`] owns a FIFO queue of deferred decodes and a deadline
//! fixed by the first set buffered for that key. [`PendingRecordBuffer::check_templates`]
//! is meant to be driven by a periodic task: it drops expired queues and
//! replays the queues whose template became available.

use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::DecodeError;
use crate::template::TemplateKey;

/// Decode of one buffered set, returns the number of records emitted
pub type DeferredDecode = Box<dyn FnOnce() -> Result<usize, DecodeError> + Send>;

struct PendingEntry {
    inserted_at: Instant,
    queue: VecDeque<DeferredDecode>,
}

/// Outcome of one [`PendingRecordBuffer::check_templates`] pass
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct ReplaySummary {
    /// Buffered sets decoded without error
    pub replayed_sets: usize,
    /// Buffered sets whose decode failed
    pub failed_sets: usize,
    /// Buffered sets dropped because their retention window elapsed
    pub expired_sets: usize,
    /// Records emitted by the replayed sets
    pub records: usize,
}

pub struct PendingRecordBuffer {
    retention: Duration,
    max_per_key: usize,
    entries: Mutex<HashMap<TemplateKey, PendingEntry>>,
}

impl std::fmt::Debug for PendingRecordBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendingRecordBuffer")
            .field("retention", &self.retention)
            .field("max_per_key", &self.max_per_key)
            .field("pending_keys", &self.len())
            .finish()
    }
}

impl PendingRecordBuffer {
    pub fn new(retention: Duration, max_per_key: usize) -> Self {
        Self {
            retention,
            max_per_key,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub const fn retention(&self) -> Duration {
        self.retention
    }

    /// Queue a deferred decode for `key`. Returns `false` when the set was
    /// dropped because the queue for `key` is full.
    pub fn put(&self, key: TemplateKey, deferred: DeferredDecode) -> bool {
        self.put_at(Instant::now(), key, deferred)
    }

    pub fn put_at(&self, now: Instant, key: TemplateKey, deferred: DeferredDecode) -> bool {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        let entry = entries.entry(key).or_insert_with_key(|key| {
            debug!(template = %key, "buffering data for a template not seen yet");
            PendingEntry {
                inserted_at: now,
                queue: VecDeque::new(),
            }
        });
        if entry.queue.len() >= self.max_per_key {
            warn!(
                max_pending_sets = self.max_per_key,
                "pending queue is full, dropping data set"
            );
            return false;
        }
        entry.queue.push_back(deferred);
        true
    }

    /// Number of template keys with buffered data
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of sets buffered for `key`
    pub fn queued(&self, key: &TemplateKey) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .map_or(0, |entry| entry.queue.len())
    }

    pub fn check_templates<F>(&self, template_present: F) -> ReplaySummary
    where
        F: Fn(&TemplateKey) -> bool,
    {
        self.check_templates_at(Instant::now(), template_present)
    }

    /// Expire old queues and replay those whose template is present.
    ///
    /// Expiry is decided first, an expired queue is dropped even if its
    /// template is now known. Ready queues are detached under the lock and
    /// replayed after it is released, so a replayed decode is free to buffer
    /// again.
    pub fn check_templates_at<F>(&self, now: Instant, template_present: F) -> ReplaySummary
    where
        F: Fn(&TemplateKey) -> bool,
    {
        let mut summary = ReplaySummary::default();
        let mut ready = Vec::new();
        {
            let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
            entries.retain(|key, entry| {
                if now.saturating_duration_since(entry.inserted_at) > self.retention {
                    warn!(
                        template = %key,
                        dropped = entry.queue.len(),
                        "template did not arrive within the retention window, dropping buffered packets"
                    );
                    summary.expired_sets += entry.queue.len();
                    return false;
                }
                if template_present(key) {
                    ready.push((
                        entry.inserted_at,
                        key.clone(),
                        std::mem::take(&mut entry.queue),
                    ));
                    return false;
                }
                true
            });
        }
        ready.sort_by_key(|(inserted_at, _, _)| *inserted_at);

        for (_, key, queue) in ready {
            debug!(template = %key, sets = queue.len(), "replaying buffered data sets");
            for deferred in queue {
                match deferred() {
                    Ok(records) => {
                        summary.replayed_sets += 1;
                        summary.records += records;
                    }
                    Err(err) => {
                        summary.failed_sets += 1;
                        warn!(template = %key, error = %err, "failed to decode buffered data set");
                    }
                }
            }
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::ExporterKey;
    use std::sync::{Arc, Mutex as StdMutex};
    use tracing_test::traced_test;

    fn key(template_id: u16) -> TemplateKey {
        TemplateKey::new(ExporterKey::new(1, None), template_id)
    }

    fn recorder(log: &Arc<StdMutex<Vec<u32>>>, value: u32) -> DeferredDecode {
        let log = Arc::clone(log);
        Box::new(move || {
            log.lock().unwrap().push(value);
            Ok(1)
        })
    }

    #[test]
    fn test_replay_in_arrival_order() {
        let buffer = PendingRecordBuffer::new(Duration::from_secs(60), 100);
        let log = Arc::new(StdMutex::new(vec![]));
        for i in 0..5 {
            assert!(buffer.put(key(256), recorder(&log, i)));
        }
        assert_eq!(buffer.queued(&key(256)), 5);

        let summary = buffer.check_templates(|_| false);
        assert_eq!(summary, ReplaySummary::default());
        assert!(log.lock().unwrap().is_empty());

        let summary = buffer.check_templates(|k| k.template_id() == 256);
        assert_eq!(summary.replayed_sets, 5);
        assert_eq!(summary.records, 5);
        assert_eq!(*log.lock().unwrap(), vec![0, 1, 2, 3, 4]);
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_only_present_templates_are_replayed() {
        let buffer = PendingRecordBuffer::new(Duration::from_secs(60), 100);
        let log = Arc::new(StdMutex::new(vec![]));
        buffer.put(key(256), recorder(&log, 1));
        buffer.put(key(257), recorder(&log, 2));

        let summary = buffer.check_templates(|k| k.template_id() == 257);
        assert_eq!(summary.replayed_sets, 1);
        assert_eq!(*log.lock().unwrap(), vec![2]);
        assert_eq!(buffer.len(), 1);
        assert_eq!(buffer.queued(&key(256)), 1);
    }

    #[traced_test]
    #[test]
    fn test_expired_entries_are_dropped() {
        let buffer = PendingRecordBuffer::new(Duration::from_secs(60), 100);
        let log = Arc::new(StdMutex::new(vec![]));
        let start = Instant::now();
        buffer.put_at(start, key(256), recorder(&log, 1));
        buffer.put_at(start, key(256), recorder(&log, 2));

        let summary = buffer.check_templates_at(start + Duration::from_secs(61), |_| true);
        assert_eq!(summary.expired_sets, 2);
        assert_eq!(summary.replayed_sets, 0);
        assert!(log.lock().unwrap().is_empty());
        assert!(buffer.is_empty());
        assert!(logs_contain("dropped=2"));
    }

    #[test]
    fn test_later_puts_do_not_extend_deadline() {
        let buffer = PendingRecordBuffer::new(Duration::from_secs(60), 100);
        let log = Arc::new(StdMutex::new(vec![]));
        let start = Instant::now();
        buffer.put_at(start, key(256), recorder(&log, 1));
        buffer.put_at(
            start + Duration::from_secs(50),
            key(256),
            recorder(&log, 2),
        );

        let summary = buffer.check_templates_at(start + Duration::from_secs(55), |_| false);
        assert_eq!(summary.expired_sets, 0);
        assert_eq!(buffer.queued(&key(256)), 2);

        let summary = buffer.check_templates_at(start + Duration::from_secs(61), |_| false);
        assert_eq!(summary.expired_sets, 2);
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_queue_cap() {
        let buffer = PendingRecordBuffer::new(Duration::from_secs(60), 2);
        let log = Arc::new(StdMutex::new(vec![]));
        assert!(buffer.put(key(256), recorder(&log, 1)));
        assert!(buffer.put(key(256), recorder(&log, 2)));
        assert!(!buffer.put(key(256), recorder(&log, 3)));
        assert!(buffer.put(key(257), recorder(&log, 4)));
        assert_eq!(buffer.queued(&key(256)), 2);
    }

    #[traced_test]
    #[test]
    fn test_failed_replay_does_not_stop_the_queue() {
        let buffer = PendingRecordBuffer::new(Duration::from_secs(60), 100);
        let log = Arc::new(StdMutex::new(vec![]));
        buffer.put(key(256), recorder(&log, 1));
        buffer.put(
            key(256),
            Box::new(|| Err(DecodeError::OutOfBounds {
                needed: 4,
                remaining: 1,
            })),
        );
        buffer.put(key(256), recorder(&log, 3));

        let summary = buffer.check_templates(|_| true);
        assert_eq!(summary.replayed_sets, 2);
        assert_eq!(summary.failed_sets, 1);
        assert_eq!(*log.lock().unwrap(), vec![1, 3]);
        assert!(logs_contain("failed to decode buffered data set"));
    }

    #[test]
    fn test_replay_may_buffer_again() {
        let buffer = Arc::new(PendingRecordBuffer::new(Duration::from_secs(60), 100));
        let inner = Arc::clone(&buffer);
        buffer.put(
            key(256),
            Box::new(move || {
                inner.put(key(300), Box::new(|| Ok(0)));
                Ok(0)
            }),
        );
        let summary = buffer.check_templates(|k| k.template_id() == 256);
        assert_eq!(summary.replayed_sets, 1);
        assert_eq!(buffer.queued(&key(300)), 1);
    }
}
