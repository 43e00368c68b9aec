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

//! Flat records handed to the consumer of the decoder.

use std::borrow::Cow;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Full text attached to every record that is not an options record
pub const DATA_RECORD_FULL_TEXT: &str = "Flow data record";

pub type Attribute = (Cow<'static, str>, String);

/// Attributes shared by all records decoded from one packet, they are
/// prepended to the attributes of each record.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct HeaderAttributes {
    attributes: Vec<Attribute>,
    timestamp_ms: u64,
}

impl HeaderAttributes {
    pub const fn new(timestamp_ms: u64) -> Self {
        Self {
            attributes: Vec::new(),
            timestamp_ms,
        }
    }

    pub fn push(&mut self, name: impl Into<Cow<'static, str>>, value: impl ToString) {
        self.attributes.push((name.into(), value.to_string()));
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    pub const fn timestamp_ms(&self) -> u64 {
        self.timestamp_ms
    }
}

/// One decoded flow or options record
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Record {
    attributes: Vec<Attribute>,
    timestamp_ms: u64,
    full_text: Cow<'static, str>,
}

impl Record {
    pub fn new(
        header: &HeaderAttributes,
        fields: Vec<Attribute>,
        full_text: impl Into<Cow<'static, str>>,
    ) -> Self {
        let mut attributes = Vec::with_capacity(header.attributes.len() + fields.len());
        attributes.extend(header.attributes.iter().cloned());
        attributes.extend(fields);
        Self {
            attributes,
            timestamp_ms: header.timestamp_ms,
            full_text: full_text.into(),
        }
    }

    /// Header attributes followed by the record's own fields, in wire order
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Value of the first attribute called `name`
    pub fn get(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(attr, _)| attr == name)
            .map(|(_, value)| value.as_str())
    }

    /// Export time in milliseconds since the unix epoch
    pub const fn timestamp_ms(&self) -> u64 {
        self.timestamp_ms
    }

    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        i64::try_from(self.timestamp_ms)
            .ok()
            .and_then(DateTime::from_timestamp_millis)
    }

    pub fn full_text(&self) -> &str {
        &self.full_text
    }

    pub fn into_attributes(self) -> Vec<Attribute> {
        self.attributes
    }
}

/// Summary text of an options record built from its scope fields in
/// template order, e.g. `Options record for lineCardId 5, Interface 3`
pub(crate) fn options_full_text<'a>(
    scope: impl IntoIterator<Item = (&'a str, &'a str)>,
) -> String {
    let mut text = String::from("Options record for");
    for (i, (name, value)) in scope.into_iter().enumerate() {
        if i > 0 {
            text.push(',');
        }
        text.push(' ');
        text.push_str(name);
        text.push(' ');
        text.push_str(value);
    }
    text
}

/// Consumer of decoded records.
///
/// Implemented for closures and for [`async_channel::Sender`]. Records are
/// handed over by value, the decoder keeps nothing once `emit` returns.
pub trait RecordSink: Send + Sync {
    fn emit(&self, record: Record);
}

impl<F> RecordSink for F
where
    F: Fn(Record) + Send + Sync,
{
    fn emit(&self, record: Record) {
        self(record)
    }
}

impl RecordSink for async_channel::Sender<Record> {
    fn emit(&self, record: Record) {
        if let Err(err) = self.try_send(record) {
            let reason = if err.is_full() {
                "channel is full"
            } else {
                "channel is closed"
            };
            warn!(reason, "dropping decoded record");
        }
    }
}

/// Counts the records passed through to the wrapped sink
pub(crate) struct CountingSink<'a> {
    inner: &'a Arc<dyn RecordSink>,
    count: AtomicUsize,
}

impl<'a> CountingSink<'a> {
    pub(crate) const fn new(inner: &'a Arc<dyn RecordSink>) -> Self {
        Self {
            inner,
            count: AtomicUsize::new(0),
        }
    }

    pub(crate) fn emit(&self, record: Record) {
        self.count.fetch_add(1, Ordering::Relaxed);
        self.inner.emit(record);
    }

    pub(crate) fn count(&self) -> usize {
        self.count.load(Ordering::Relaxed)
    }
}
