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

mod ipfix;
mod netflow_v5;

use std::sync::{Arc, Mutex};

use tracing_test::traced_test;

use crate::config::DecoderConfig;
use crate::record::Record;
use crate::{FlowDecoder, PacketParser};

pub(crate) const EXPORTER: &str = "192.0.2.1";

pub(crate) fn collecting_decoder(config: DecoderConfig) -> (FlowDecoder, Arc<Mutex<Vec<Record>>>) {
    let records = Arc::new(Mutex::new(Vec::new()));
    let sink_records = Arc::clone(&records);
    let decoder = FlowDecoder::new(config, move |record: Record| {
        sink_records.lock().unwrap().push(record)
    });
    (decoder, records)
}

/// NetFlow v9 packet defining template 256 for source id 1
pub(crate) fn v9_template_packet() -> Vec<u8> {
    vec![
        0x00, 0x09, // version
        0x00, 0x01, // count
        0x00, 0x00, 0x00, 0x64, // sys_uptime = 100
        0x65, 0x53, 0xf1, 0x00, // unix_secs = 1700000000
        0x00, 0x00, 0x00, 0x01, // sequence_number
        0x00, 0x00, 0x00, 0x01, // source_id
        0x00, 0x00, // flowset id = template
        0x00, 0x10, // flowset length
        0x01, 0x00, // template id = 256
        0x00, 0x02, // field count
        0x00, 0x08, 0x00, 0x04, // IPV4_SRC_ADDR, 4 bytes
        0x00, 0x02, 0x00, 0x04, // IN_PKTS, 4 bytes
    ]
}

/// NetFlow v9 packet with one data record for template 256 of source id 1
pub(crate) fn v9_data_packet() -> Vec<u8> {
    vec![
        0x00, 0x09, // version
        0x00, 0x01, // count
        0x00, 0x00, 0x00, 0xc8, // sys_uptime = 200
        0x65, 0x53, 0xf1, 0x0a, // unix_secs = 1700000010
        0x00, 0x00, 0x00, 0x02, // sequence_number
        0x00, 0x00, 0x00, 0x01, // source_id
        0x01, 0x00, // flowset id = 256
        0x00, 0x0c, // flowset length
        0x0a, 0x00, 0x00, 0x01, // IPV4_SRC_ADDR = 10.0.0.1
        0x00, 0x00, 0x00, 0x05, // IN_PKTS = 5
    ]
}

#[test]
fn test_parser_selects_version() {
    let (decoder, _) = collecting_decoder(DecoderConfig::default());
    let v5 = [0x00, 0x05, 0x00, 0x00];
    let v9 = [0x00, 0x09, 0x00, 0x00];
    let ipfix = [0x00, 0x0a, 0x00, 0x10];
    assert_eq!(decoder.parser(&v5), PacketParser::NetFlowV5(&v5));
    assert_eq!(decoder.parser(&v9), PacketParser::NetFlowV9(&v9));
    assert_eq!(decoder.parser(&ipfix), PacketParser::Ipfix(&ipfix));
    assert_eq!(decoder.parser(&ipfix).version(), Some(10));
}

#[test]
#[traced_test]
fn test_unsupported_version_is_dropped() {
    let (decoder, records) = collecting_decoder(DecoderConfig::default());
    let buf = [0x00, 0x07, 0x00, 0x01, 0xde, 0xad];
    assert_eq!(decoder.parser(&buf), PacketParser::Unsupported(Some(7)));
    assert_eq!(decoder.decode(&buf, EXPORTER), 0);
    assert!(records.lock().unwrap().is_empty());
    assert!(logs_contain("unsupported flow export version 7"));
}

#[test]
#[traced_test]
fn test_packet_shorter_than_version() {
    let (decoder, records) = collecting_decoder(DecoderConfig::default());
    assert_eq!(decoder.parser(&[0x00]), PacketParser::Unsupported(None));
    assert_eq!(decoder.decode(&[], EXPORTER), 0);
    assert!(records.lock().unwrap().is_empty());
    assert!(logs_contain("packet too short to carry a version"));
}

#[test]
#[traced_test]
fn test_truncated_header_is_logged() {
    let (decoder, records) = collecting_decoder(DecoderConfig::default());
    // v5 header cut after the count
    assert_eq!(decoder.decode(&[0x00, 0x05, 0x00, 0x01, 0x00], EXPORTER), 0);
    assert!(records.lock().unwrap().is_empty());
    assert!(logs_contain("failed to decode flow packet"));
}

#[test]
fn test_clones_share_state() {
    let (decoder, records) = collecting_decoder(DecoderConfig::default());
    let clone = decoder.clone();
    assert_eq!(clone.decode(&v9_template_packet(), EXPORTER), 0);
    assert_eq!(decoder.v9_templates().len(), 1);
    assert_eq!(decoder.decode(&v9_data_packet(), EXPORTER), 1);
    assert_eq!(records.lock().unwrap().len(), 1);
}

#[test]
fn test_concurrent_decoding() {
    let (decoder, records) = collecting_decoder(DecoderConfig::default());
    decoder.decode(&v9_template_packet(), EXPORTER);
    let workers: Vec<_> = (0..4)
        .map(|_| {
            let decoder = decoder.clone();
            std::thread::spawn(move || {
                (0..50)
                    .map(|_| decoder.decode(&v9_data_packet(), EXPORTER))
                    .sum::<usize>()
            })
        })
        .collect();
    let emitted: usize = workers.into_iter().map(|w| w.join().unwrap()).sum();
    assert_eq!(emitted, 200);
    assert_eq!(records.lock().unwrap().len(), 200);
}

#[test]
fn test_arbitrary_bytes_never_panic() {
    let (decoder, _) = collecting_decoder(DecoderConfig::default());
    decoder.decode(&v9_template_packet(), EXPORTER);
    // xorshift, deterministic across runs
    let mut state: u32 = 0x9e37_79b9;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        state
    };
    for version in [5u8, 9, 10] {
        for len in 0..200usize {
            let mut buf: Vec<u8> = (0..len).map(|_| next() as u8).collect();
            if len >= 2 {
                buf[0] = 0;
                buf[1] = version;
            }
            decoder.decode(&buf, EXPORTER);
        }
    }
    decoder.check_templates();
}
