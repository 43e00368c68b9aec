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
use crate::template::{ExporterKey, TemplateKey};
use crate::tests::{collecting_decoder, EXPORTER};

/// Template 256: sourceIPv4Address(4), packetDeltaCount(4), flowEndReason(1)
const TEMPLATE_SET: [u8; 20] = [
    0x00, 0x02, // set id = template set
    0x00, 0x14, // set length
    0x01, 0x00, // template id = 256
    0x00, 0x03, // field count
    0x00, 0x08, 0x00, 0x04, // sourceIPv4Address, 4 bytes
    0x00, 0x02, 0x00, 0x04, // packetDeltaCount, 4 bytes
    0x00, 0x88, 0x00, 0x01, // flowEndReason, 1 byte
];

const DATA_SET: [u8; 13] = [
    0x01, 0x00, // set id = 256
    0x00, 0x0d, // set length
    0x0a, 0x00, 0x00, 0x01, // sourceIPv4Address = 10.0.0.1
    0x00, 0x00, 0x00, 0x07, // packetDeltaCount = 7
    0x02, // flowEndReason = active timeout
];

const EXPORT_TIME: u32 = 1_700_000_000;

fn message(export_time: u32, sets: &[&[u8]]) -> Vec<u8> {
    let length: usize = 16 + sets.iter().map(|set| set.len()).sum::<usize>();
    let mut buf = Vec::with_capacity(length);
    buf.extend_from_slice(&[0x00, 0x0a]); // version
    buf.extend_from_slice(&(length as u16).to_be_bytes());
    buf.extend_from_slice(&export_time.to_be_bytes());
    buf.extend_from_slice(&[0x00, 0x00, 0x00, 0x01]); // sequence_number
    buf.extend_from_slice(&[0x00, 0x00, 0x00, 0x01]); // observation_domain_id
    for set in sets {
        buf.extend_from_slice(set);
    }
    buf
}

fn template_key(template_id: u16) -> TemplateKey {
    TemplateKey::new(
        ExporterKey::new(1, Some(EXPORTER.to_string())),
        template_id,
    )
}

#[test]
fn test_template_and_data_in_one_message() {
    let (decoder, records) = collecting_decoder(DecoderConfig::default());
    let buf = message(EXPORT_TIME, &[&TEMPLATE_SET, &DATA_SET]);
    assert_eq!(decoder.decode(&buf, EXPORTER), 1);

    let records = records.lock().unwrap();
    let attributes: Vec<(&str, &str)> = records[0]
        .attributes()
        .iter()
        .map(|(name, value)| (name.as_ref(), value.as_str()))
        .collect();
    assert_eq!(
        attributes,
        vec![
            ("version", "10"),
            ("length", "49"),
            ("export_time", "1700000000"),
            ("sequence_number", "1"),
            ("observation_domain_id", "1"),
            ("sourceIPv4Address", "10.0.0.1"),
            ("packetDeltaCount", "7"),
            ("flowEndReason", "active timeout"),
        ]
    );
    assert_eq!(records[0].timestamp_ms(), 1_700_000_000_000);
    assert_eq!(records[0].full_text(), "Flow data record");
}

#[test]
fn test_late_template_keeps_original_export_time() {
    let (decoder, records) = collecting_decoder(DecoderConfig::default());

    let data = message(EXPORT_TIME + 100, &[&DATA_SET]);
    assert_eq!(decoder.decode(&data, EXPORTER), 0);
    assert_eq!(decoder.pending().queued(&template_key(256)), 1);

    let template = message(EXPORT_TIME + 200, &[&TEMPLATE_SET]);
    assert_eq!(decoder.decode(&template, EXPORTER), 0);
    assert!(records.lock().unwrap().is_empty());

    let summary = decoder.check_templates();
    assert_eq!(summary.replayed_sets, 1);
    assert_eq!(summary.records, 1);
    assert!(decoder.pending().is_empty());

    let records = records.lock().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].get("export_time"), Some("1700000100"));
    assert_eq!(records[0].timestamp_ms(), 1_700_000_100_000);
    assert_eq!(records[0].get("sourceIPv4Address"), Some("10.0.0.1"));
}

#[test]
fn test_templates_are_scoped_by_exporter() {
    let (decoder, records) = collecting_decoder(DecoderConfig::default());
    decoder.decode(&message(EXPORT_TIME, &[&TEMPLATE_SET]), "192.0.2.1");
    assert_eq!(
        decoder.decode(&message(EXPORT_TIME, &[&DATA_SET]), "198.51.100.1"),
        0
    );
    assert!(records.lock().unwrap().is_empty());
    assert_eq!(decoder.pending().len(), 1);
}

#[test]
fn test_options_record_single_scope() {
    let (decoder, records) = collecting_decoder(DecoderConfig::default());
    let options_template: [u8; 20] = [
        0x00, 0x03, // set id = options template set
        0x00, 0x14, // set length
        0x01, 0x01, // template id = 257
        0x00, 0x02, // field count
        0x00, 0x01, // scope field count
        0x00, 0x8d, 0x00, 0x04, // lineCardId, 4 bytes
        0x00, 0x29, 0x00, 0x04, // exportedMessageTotalCount, 4 bytes
        0x00, 0x00, // padding
    ];
    let data: [u8; 12] = [
        0x01, 0x01, // set id = 257
        0x00, 0x0c, // set length
        0x00, 0x00, 0x00, 0x05, // lineCardId = 5
        0x00, 0x00, 0x0d, 0xef, // exportedMessageTotalCount = 3567
    ];
    let buf = message(EXPORT_TIME, &[&options_template, &data]);
    assert_eq!(decoder.decode(&buf, EXPORTER), 1);
    assert!(decoder.ipfix_options_templates().contains(&template_key(257)));
    assert!(!decoder.ipfix_templates().contains(&template_key(257)));

    let records = records.lock().unwrap();
    assert_eq!(records[0].full_text(), "Options record for lineCardId 5");
    assert_eq!(records[0].get("lineCardId"), Some("5"));
    assert_eq!(records[0].get("exportedMessageTotalCount"), Some("3567"));
}

#[test]
fn test_options_record_two_scopes() {
    let (decoder, records) = collecting_decoder(DecoderConfig::default());
    let options_template: [u8; 24] = [
        0x00, 0x03, // set id = options template set
        0x00, 0x18, // set length
        0x01, 0x02, // template id = 258
        0x00, 0x03, // field count
        0x00, 0x02, // scope field count
        0x00, 0x8d, 0x00, 0x04, // lineCardId, 4 bytes
        0x00, 0x0a, 0x00, 0x04, // ingressInterface, 4 bytes
        0x00, 0x29, 0x00, 0x04, // exportedMessageTotalCount, 4 bytes
        0x00, 0x00, // padding
    ];
    let data: [u8; 16] = [
        0x01, 0x02, // set id = 258
        0x00, 0x10, // set length
        0x00, 0x00, 0x00, 0x05, // lineCardId = 5
        0x00, 0x00, 0x00, 0x03, // ingressInterface = 3
        0x00, 0x00, 0x0d, 0xef, // exportedMessageTotalCount = 3567
    ];
    let buf = message(EXPORT_TIME, &[&options_template, &data]);
    assert_eq!(decoder.decode(&buf, EXPORTER), 1);
    assert_eq!(
        records.lock().unwrap()[0].full_text(),
        "Options record for lineCardId 5, ingressInterface 3"
    );
}

#[test]
fn test_enterprise_and_reverse_elements() {
    let (decoder, records) = collecting_decoder(DecoderConfig::default());
    let template: [u8; 24] = [
        0x00, 0x02, // set id = template set
        0x00, 0x18, // set length
        0x01, 0x03, // template id = 259
        0x00, 0x02, // field count
        0x81, 0xc8, // enterprise bit | 456
        0x00, 0x00, 0x00, 0x7b, // enterprise number = 123
        0x00, 0x04, // 4 bytes
        0x80, 0x08, // enterprise bit | 8
        0x00, 0x00, 0x72, 0x79, // enterprise number = 29305
        0x00, 0x04, // 4 bytes
    ];
    let data: [u8; 12] = [
        0x01, 0x03, // set id = 259
        0x00, 0x0c, // set length
        0x00, 0x00, 0x00, 0x64, // 123.456 = 100
        0x0a, 0x00, 0x00, 0x09, // reverseSourceIPv4Address = 10.0.0.9
    ];
    let buf = message(EXPORT_TIME, &[&template, &data]);
    assert_eq!(decoder.decode(&buf, EXPORTER), 1);

    let stored = decoder.ipfix_templates().get(&template_key(259)).unwrap();
    assert_eq!(stored.fields()[0].element_id(), 456);
    assert_eq!(stored.fields()[0].enterprise_number(), Some(123));

    let records = records.lock().unwrap();
    assert_eq!(records[0].get("123.456"), Some("100"));
    assert_eq!(records[0].get("reverseSourceIPv4Address"), Some("10.0.0.9"));
}

#[test]
fn test_variable_length_field_both_encodings() {
    let (decoder, records) = collecting_decoder(DecoderConfig::default());
    let template: [u8; 16] = [
        0x00, 0x02, // set id = template set
        0x00, 0x10, // set length
        0x01, 0x04, // template id = 260
        0x00, 0x02, // field count
        0x00, 0x52, 0xff, 0xff, // interfaceName, variable length
        0x00, 0x02, 0x00, 0x04, // packetDeltaCount, 4 bytes
    ];
    let data: [u8; 22] = [
        0x01, 0x04, // set id = 260
        0x00, 0x16, // set length
        0x03, b'e', b't', b'h', // one byte length prefix
        0x00, 0x00, 0x00, 0x01, // packetDeltaCount = 1
        0xff, 0x00, 0x03, b'e', b't', b'h', // escaped two byte length prefix
        0x00, 0x00, 0x00, 0x02, // packetDeltaCount = 2
    ];
    let buf = message(EXPORT_TIME, &[&template, &data]);
    assert_eq!(decoder.decode(&buf, EXPORTER), 2);

    let records = records.lock().unwrap();
    let decoded: Vec<(Option<&str>, Option<&str>)> = records
        .iter()
        .map(|record| (record.get("interfaceName"), record.get("packetDeltaCount")))
        .collect();
    assert_eq!(
        decoded,
        vec![(Some("eth"), Some("1")), (Some("eth"), Some("2"))]
    );
}

#[test]
fn test_template_withdrawal() {
    let (decoder, records) = collecting_decoder(DecoderConfig::default());
    decoder.decode(&message(EXPORT_TIME, &[&TEMPLATE_SET]), EXPORTER);
    assert!(decoder.ipfix_templates().contains(&template_key(256)));

    let withdrawal: [u8; 8] = [
        0x00, 0x02, // set id = template set
        0x00, 0x08, // set length
        0x01, 0x00, // template id = 256
        0x00, 0x00, // field count = 0
    ];
    decoder.decode(&message(EXPORT_TIME, &[&withdrawal]), EXPORTER);
    assert!(!decoder.ipfix_templates().contains(&template_key(256)));

    assert_eq!(
        decoder.decode(&message(EXPORT_TIME, &[&DATA_SET]), EXPORTER),
        0
    );
    assert!(records.lock().unwrap().is_empty());
    assert_eq!(decoder.pending().queued(&template_key(256)), 1);
}

#[test]
fn test_withdraw_all_templates() {
    let (decoder, _) = collecting_decoder(DecoderConfig::default());
    let mut second = TEMPLATE_SET;
    second[5] = 0x05; // template id = 261
    decoder.decode(&message(EXPORT_TIME, &[&TEMPLATE_SET, &second]), EXPORTER);
    assert_eq!(decoder.ipfix_templates().len(), 2);

    let withdrawal: [u8; 8] = [
        0x00, 0x02, // set id = template set
        0x00, 0x08, // set length
        0x00, 0x02, // template id = set id, every template
        0x00, 0x00, // field count = 0
    ];
    decoder.decode(&message(EXPORT_TIME, &[&withdrawal]), EXPORTER);
    assert!(decoder.ipfix_templates().is_empty());
}

#[test]
fn test_message_length_bounds_decoding() {
    let (decoder, records) = collecting_decoder(DecoderConfig::default());
    let mut buf = message(EXPORT_TIME, &[&TEMPLATE_SET, &DATA_SET]);
    // bytes past the message length look like another data set
    buf.extend_from_slice(&DATA_SET);
    assert_eq!(decoder.decode(&buf, EXPORTER), 1);
    assert_eq!(records.lock().unwrap().len(), 1);
}

#[test]
#[traced_test]
fn test_message_longer_than_packet() {
    let (decoder, records) = collecting_decoder(DecoderConfig::default());
    let mut buf = message(EXPORT_TIME, &[&TEMPLATE_SET, &DATA_SET]);
    buf.truncate(buf.len() - 4);
    assert_eq!(decoder.decode(&buf, EXPORTER), 0);
    assert!(records.lock().unwrap().is_empty());
    assert!(logs_contain("failed to decode flow packet"));
}

#[test]
#[traced_test]
fn test_invalid_scope_count_keeps_later_sets() {
    let (decoder, records) = collecting_decoder(DecoderConfig::default());
    let options_template: [u8; 14] = [
        0x00, 0x03, // set id = options template set
        0x00, 0x0e, // set length
        0x01, 0x01, // template id = 257
        0x00, 0x01, // field count
        0x00, 0x02, // scope field count larger than field count
        0x00, 0x8d, 0x00, 0x04, // lineCardId, 4 bytes
    ];
    let buf = message(EXPORT_TIME, &[&options_template, &TEMPLATE_SET, &DATA_SET]);
    assert_eq!(decoder.decode(&buf, EXPORTER), 1);
    assert_eq!(records.lock().unwrap().len(), 1);
    assert!(logs_contain("failed to decode ipfix set"));
}

#[test]
fn test_reserved_set_is_skipped() {
    let (decoder, records) = collecting_decoder(DecoderConfig::default());
    let reserved: [u8; 8] = [
        0x00, 0x04, // set id = 4, reserved
        0x00, 0x08, // set length
        0xde, 0xad, 0xbe, 0xef,
    ];
    let buf = message(EXPORT_TIME, &[&reserved, &TEMPLATE_SET, &DATA_SET]);
    assert_eq!(decoder.decode(&buf, EXPORTER), 1);
    assert_eq!(records.lock().unwrap().len(), 1);
}

#[test]
#[traced_test]
fn test_zero_length_field_is_skipped() {
    let (decoder, records) = collecting_decoder(DecoderConfig::default());
    let template: [u8; 16] = [
        0x00, 0x02, // set id = template set
        0x00, 0x10, // set length
        0x01, 0x06, // template id = 262
        0x00, 0x02, // field count
        0x00, 0x01, 0x00, 0x00, // octetDeltaCount, 0 bytes
        0x00, 0x02, 0x00, 0x04, // packetDeltaCount, 4 bytes
    ];
    let data: [u8; 8] = [
        0x01, 0x06, // set id = 262
        0x00, 0x08, // set length
        0x00, 0x00, 0x00, 0x09, // packetDeltaCount = 9
    ];
    assert_eq!(decoder.decode(&message(EXPORT_TIME, &[&template, &data]), EXPORTER), 1);
    assert_eq!(
        decoder
            .ipfix_templates()
            .get(&template_key(262))
            .unwrap()
            .fields()
            .len(),
        1
    );
    assert!(logs_contain("skipping zero length template field"));
    let records = records.lock().unwrap();
    assert_eq!(records[0].get("octetDeltaCount"), None);
    assert_eq!(records[0].get("packetDeltaCount"), Some("9"));
}
