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

//! Decoder for NetFlow v5, NetFlow v9 and IPFIX export packets.
//!
//! Every decoded flow is flattened into a [`record::Record`], an ordered list
//! of `(name, value)` string attributes, and handed to a
//! [`record::RecordSink`]. Templates learned from one packet are kept in
//! shared stores so that packets can be decoded concurrently from many
//! tasks. Data sets that arrive before their template are buffered and
//! replayed by [`FlowDecoder::check_templates`], usually driven by
//! [`checker::spawn_template_checker`].
//!
//! ```
//! use netgauze_flow_decoder::{config::DecoderConfig, record::Record, FlowDecoder, PacketParser};
//!
//! let decoder = FlowDecoder::new(DecoderConfig::default(), |record: Record| {
//!     println!("{}", record.full_text());
//! });
//! assert_eq!(decoder.parser(&[0, 42]), PacketParser::Unsupported(Some(42)));
//! assert_eq!(decoder.decode(&[0, 42], "192.0.2.1"), 0);
//! ```

#![deny(missing_debug_implementations)]
#![deny(rust_2018_idioms)]
#![deny(unreachable_pub)]
#![deny(unused_allocation)]
#![deny(unused_assignments)]
#![deny(unused_comparisons)]
#![deny(clippy::clone_on_ref_ptr)]
#![deny(clippy::trivially_copy_pass_by_ref)]
#![deny(clippy::missing_const_for_fn)]
#![forbid(unsafe_code)]

pub mod checker;
pub mod config;
pub mod cursor;
pub mod error;
pub mod ie;
pub mod ipfix;
pub mod netflow_v5;
pub mod netflow_v9;
pub mod pending;
pub mod record;
pub mod template;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use tracing::warn;

pub use crate::error::DecodeError;
use crate::config::DecoderConfig;
use crate::pending::{PendingRecordBuffer, ReplaySummary};
use crate::record::{CountingSink, RecordSink};
use crate::template::TemplateStore;

/// Shared decoding state: template stores, the pending-record buffer and the
/// sink receiving decoded records.
///
/// Cloning is cheap and every clone shares the same state, a clone can be
/// moved to each worker task decoding packets.
#[derive(Clone)]
pub struct FlowDecoder {
    config: DecoderConfig,
    v9_templates: Arc<TemplateStore>,
    ipfix_templates: Arc<TemplateStore>,
    ipfix_options_templates: Arc<TemplateStore>,
    pending: Arc<PendingRecordBuffer>,
    sink: Arc<dyn RecordSink>,
}

impl std::fmt::Debug for FlowDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlowDecoder")
            .field("config", &self.config)
            .field("v9_templates", &self.v9_templates.len())
            .field("ipfix_templates", &self.ipfix_templates.len())
            .field(
                "ipfix_options_templates",
                &self.ipfix_options_templates.len(),
            )
            .field("pending", &self.pending)
            .finish()
    }
}

impl FlowDecoder {
    pub fn new(config: DecoderConfig, sink: impl RecordSink + 'static) -> Self {
        let pending = PendingRecordBuffer::new(
            config.pending_retention,
            config.max_pending_sets_per_template,
        );
        Self {
            config,
            v9_templates: Arc::new(TemplateStore::new()),
            ipfix_templates: Arc::new(TemplateStore::new()),
            ipfix_options_templates: Arc::new(TemplateStore::new()),
            pending: Arc::new(pending),
            sink: Arc::new(sink),
        }
    }

    pub const fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// NetFlow v9 templates and options templates, keyed by source id
    pub const fn v9_templates(&self) -> &Arc<TemplateStore> {
        &self.v9_templates
    }

    /// IPFIX templates, keyed by observation domain and exporter
    pub const fn ipfix_templates(&self) -> &Arc<TemplateStore> {
        &self.ipfix_templates
    }

    pub const fn ipfix_options_templates(&self) -> &Arc<TemplateStore> {
        &self.ipfix_options_templates
    }

    pub const fn pending(&self) -> &Arc<PendingRecordBuffer> {
        &self.pending
    }

    pub const fn sink(&self) -> &Arc<dyn RecordSink> {
        &self.sink
    }

    /// Pick the decoder for `buf` from its leading version field
    pub fn parser<'a>(&self, buf: &'a [u8]) -> PacketParser<'a> {
        if buf.len() < 2 {
            warn!(length = buf.len(), "packet too short to carry a version");
            return PacketParser::Unsupported(None);
        }
        let version = u16::from_be_bytes([buf[0], buf[1]]);
        match version {
            netflow_v5::NETFLOW_V5_VERSION => PacketParser::NetFlowV5(buf),
            netflow_v9::NETFLOW_V9_VERSION => PacketParser::NetFlowV9(buf),
            ipfix::IPFIX_VERSION => PacketParser::Ipfix(buf),
            _ => {
                let err = DecodeError::UnsupportedVersion(version);
                warn!(version, error = %err, "dropping packet");
                PacketParser::Unsupported(Some(version))
            }
        }
    }

    /// Decode one packet received from `exporter`, returns the number of
    /// records emitted right away. Records of buffered data sets are emitted
    /// later by [`FlowDecoder::check_templates`].
    pub fn decode(&self, buf: &[u8], exporter: &str) -> usize {
        self.parser(buf).parse_records(self, exporter)
    }

    /// Expire buffered data sets past the retention window and replay those
    /// whose template is now known.
    pub fn check_templates(&self) -> ReplaySummary {
        self.pending.check_templates(|key| {
            self.v9_templates.contains(key)
                || self.ipfix_templates.contains(key)
                || self.ipfix_options_templates.contains(key)
        })
    }
}

/// Version specific decoder selected by [`FlowDecoder::parser`]
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum PacketParser<'a> {
    NetFlowV5(&'a [u8]),
    NetFlowV9(&'a [u8]),
    Ipfix(&'a [u8]),
    /// Carries the version found, `None` when the packet is shorter than the
    /// version field
    Unsupported(Option<u16>),
}

impl PacketParser<'_> {
    pub const fn version(&self) -> Option<u16> {
        match self {
            Self::NetFlowV5(_) => Some(netflow_v5::NETFLOW_V5_VERSION),
            Self::NetFlowV9(_) => Some(netflow_v9::NETFLOW_V9_VERSION),
            Self::Ipfix(_) => Some(ipfix::IPFIX_VERSION),
            Self::Unsupported(version) => *version,
        }
    }

    /// Emit the packet's records to the decoder's sink.
    ///
    /// A decode error stops the packet where it occurred, records emitted
    /// before it are kept.
    pub fn parse_records(&self, decoder: &FlowDecoder, exporter: &str) -> usize {
        let sink = CountingSink::new(decoder.sink());
        let result = match self {
            Self::NetFlowV5(buf) => netflow_v5::decode(buf, &sink),
            Self::NetFlowV9(buf) => netflow_v9::decode(buf, decoder, &sink),
            Self::Ipfix(buf) => ipfix::decode(buf, decoder, exporter, &sink),
            Self::Unsupported(_) => return 0,
        };
        if let Err(err) = result {
            warn!(
                version = self.version(),
                exporter,
                emitted = sink.count(),
                error = %err,
                "failed to decode flow packet"
            );
        }
        sink.count()
    }
}
