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

use tracing_test::traced_test;

use crate::config::DecoderConfig;
use crate::record::DATA_RECORD_FULL_TEXT;
use crate::tests::{collecting_decoder, EXPORTER};

const HEADER: [u8; 24] = [
    0x00, 0x05, // version
    0x00, 0x02, // count
    0x00, 0x00, 0x27, 0x10, // sys_uptime = 10000
    0x65, 0x53, 0xf1, 0x00, // unix_secs = 1700000000
    0x00, 0x00, 0x01, 0xf4, // unix_nsecs = 500
    0x00, 0x00, 0x00, 0x2a, // flow_sequence = 42
    0x01, // engine_type
    0x02, // engine_id
    0x40, 0x7b, // sampling mode 1, interval 123
];

const FLOW_1: [u8; 48] = [
    0xa0, 0x00, 0x00, 0x20, // srcaddr = 160.0.0.32
    0x0a, 0x00, 0x00, 0x02, // dstaddr = 10.0.0.2
    0x00, 0x00, 0x00, 0x00, // nexthop
    0x00, 0x01, // input
    0x00, 0x02, // output
    0x00, 0x00, 0x00, 0x0a, // dPkts = 10
    0x00, 0x00, 0x03, 0xe8, // dOctets = 1000
    0x00, 0x00, 0x03, 0xe8, // first = 1000
    0x00, 0x00, 0x0b, 0xb8, // last = 3000
    0x01, 0xbb, // srcport = 443
    0xc7, 0x38, // dstport = 51000
    0x00, // pad1
    0x1b, // tcp_flags
    0x06, // prot = TCP
    0x00, // tos
    0xfd, 0xe8, // src_as = 65000
    0xfd, 0xe9, // dst_as = 65001
    0x18, // src_mask = 24
    0x10, // dst_mask = 16
    0x00, 0x00, // pad2
];

const FLOW_2: [u8; 48] = [
    0x0a, 0x00, 0x00, 0x03, // srcaddr = 10.0.0.3
    0x0a, 0x00, 0x00, 0x04, // dstaddr = 10.0.0.4
    0x0a, 0x00, 0x00, 0xfe, // nexthop = 10.0.0.254
    0x00, 0x03, // input
    0x00, 0x04, // output
    0x00, 0x00, 0x00, 0x01, // dPkts = 1
    0x00, 0x00, 0x00, 0x40, // dOctets = 64
    0xff, 0xff, 0xff, 0xf0, // first, just before sysUptime wraps
    0x00, 0x00, 0x00, 0x10, // last, after the wrap
    0x00, 0x35, // srcport = 53
    0x00, 0x35, // dstport = 53
    0x00, // pad1
    0x00, // tcp_flags
    0x11, // prot = UDP
    0x00, // tos
    0x00, 0x00, // src_as
    0x00, 0x00, // dst_as
    0x00, // src_mask
    0x00, // dst_mask
    0x00, 0x00, // pad2
];

fn packet(flows: &[&[u8; 48]]) -> Vec<u8> {
    let mut buf = HEADER.to_vec();
    for flow in flows {
        buf.extend_from_slice(&flow[..]);
    }
    buf
}

#[test]
fn test_netflow_v5_two_flows() {
    let (decoder, records) = collecting_decoder(DecoderConfig::default());
    assert_eq!(decoder.decode(&packet(&[&FLOW_1, &FLOW_2]), EXPORTER), 2);

    let records = records.lock().unwrap();
    assert_eq!(records.len(), 2);
    let first = &records[0];
    let second = &records[1];

    let header: Vec<(&str, &str)> = vec![
        ("version", "5"),
        ("count", "2"),
        ("sys_uptime", "10000"),
        ("unix_secs", "1700000000"),
        ("unix_nsecs", "500"),
        ("flow_sequence", "42"),
        ("engine_type", "1"),
        ("engine_id", "2"),
        ("sampling_interval", "123"),
    ];
    for record in [first, second] {
        let leading: Vec<(&str, &str)> = record.attributes()[..header.len()]
            .iter()
            .map(|(name, value)| (name.as_ref(), value.as_str()))
            .collect();
        assert_eq!(leading, header);
        assert_eq!(record.timestamp_ms(), 1_700_000_000_000);
        assert_eq!(record.full_text(), DATA_RECORD_FULL_TEXT);
    }

    assert_eq!(first.get("srcaddr"), Some("160.0.0.32"));
    assert_eq!(first.get("dstaddr"), Some("10.0.0.2"));
    assert_eq!(first.get("nexthop"), Some("0.0.0.0"));
    assert_eq!(first.get("dPkts"), Some("10"));
    assert_eq!(first.get("dOctets"), Some("1000"));
    assert_eq!(first.get("srcport"), Some("443"));
    assert_eq!(first.get("dstport"), Some("51000"));
    assert_eq!(first.get("tcp_flags"), Some("27"));
    assert_eq!(first.get("prot"), Some("6"));
    assert_eq!(first.get("src_as"), Some("65000"));
    assert_eq!(first.get("dst_as"), Some("65001"));
    assert_eq!(first.get("src_mask"), Some("24"));
    assert_eq!(first.get("dst_mask"), Some("16"));
    assert_eq!(first.get("flow_duration"), Some("2000"));

    assert_eq!(second.get("srcaddr"), Some("10.0.0.3"));
    assert_eq!(second.get("nexthop"), Some("10.0.0.254"));
    assert_eq!(second.get("prot"), Some("17"));
    assert_eq!(second.get("flow_duration"), Some("32"));
    assert_eq!(
        first.attributes().len(),
        header.len() + 19,
        "every flow carries the same attribute list"
    );
    assert_eq!(first.attributes().len(), second.attributes().len());
}

#[test]
#[traced_test]
fn test_netflow_v5_truncated_flow() {
    let (decoder, records) = collecting_decoder(DecoderConfig::default());
    let mut buf = packet(&[&FLOW_1, &FLOW_2]);
    buf.truncate(HEADER.len() + 48 + 20);
    assert_eq!(decoder.decode(&buf, EXPORTER), 1);
    assert_eq!(records.lock().unwrap().len(), 1);
    assert!(logs_contain("failed to decode flow packet"));
}

#[test]
fn test_netflow_v5_no_flows() {
    let (decoder, records) = collecting_decoder(DecoderConfig::default());
    let mut buf = HEADER.to_vec();
    buf[3] = 0;
    assert_eq!(decoder.decode(&buf, EXPORTER), 0);
    assert!(records.lock().unwrap().is_empty());
}
