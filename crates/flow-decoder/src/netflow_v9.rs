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

//! NetFlow v9 decoding as defined by
//! [RFC3954](https://datatracker.ietf.org/doc/html/rfc3954).
//!
//! ```text
//! +--------+-------------------------------------------+
//! |        | +----------+ +---------+ +----------+     |
//! | Packet | | Template | | Data    | | Options  |     |
//! | Header | | FlowSet  | | FlowSet | | Template | ... |
//! |        | |          | |         | | FlowSet  |     |
//! |        | +----------+ +---------+ +----------+     |
//! +--------+-------------------------------------------+
//! ```
//!
//! The `count` of the header is the total number of template, options
//! template and data records in the packet. Decoding stops once that many
//! were seen or the packet is exhausted.

use std::borrow::Cow;
use std::sync::Arc;

use bytes::Bytes;
use tracing::{debug, trace, warn};

use crate::cursor::Cursor;
use crate::error::DecodeError;
use crate::ie::{self, DecodeRule};
use crate::record::{
    options_full_text, Attribute, CountingSink, HeaderAttributes, Record, RecordSink,
    DATA_RECORD_FULL_TEXT,
};
use crate::template::{ExporterKey, FieldSpec, Template, TemplateKey, TemplateStore};
use crate::FlowDecoder;

pub const NETFLOW_V9_VERSION: u16 = 9;
pub const TEMPLATE_FLOWSET_ID: u16 = 0;
pub const OPTIONS_TEMPLATE_FLOWSET_ID: u16 = 1;
pub const FLOWSET_HEADER_LENGTH: usize = 4;

/// Field types of RFC 3954 section 8. Everything not listed here as an
/// address or a string is an unsigned integer.
static V9_FIELDS: &[(u16, &str, DecodeRule)] = &[
    (1, "IN_BYTES", DecodeRule::Unsigned),
    (2, "IN_PKTS", DecodeRule::Unsigned),
    (3, "FLOWS", DecodeRule::Unsigned),
    (4, "PROTOCOL", DecodeRule::Unsigned),
    (5, "SRC_TOS", DecodeRule::Unsigned),
    (6, "TCP_FLAGS", DecodeRule::Unsigned),
    (7, "L4_SRC_PORT", DecodeRule::Unsigned),
    (8, "IPV4_SRC_ADDR", DecodeRule::Ipv4Address),
    (9, "SRC_MASK", DecodeRule::Unsigned),
    (10, "INPUT_SNMP", DecodeRule::Unsigned),
    (11, "L4_DST_PORT", DecodeRule::Unsigned),
    (12, "IPV4_DST_ADDR", DecodeRule::Ipv4Address),
    (13, "DST_MASK", DecodeRule::Unsigned),
    (14, "OUTPUT_SNMP", DecodeRule::Unsigned),
    (15, "IPV4_NEXT_HOP", DecodeRule::Ipv4Address),
    (16, "SRC_AS", DecodeRule::Unsigned),
    (17, "DST_AS", DecodeRule::Unsigned),
    (18, "BGP_IPV4_NEXT_HOP", DecodeRule::Ipv4Address),
    (19, "MUL_DST_PKTS", DecodeRule::Unsigned),
    (20, "MUL_DST_BYTES", DecodeRule::Unsigned),
    (21, "LAST_SWITCHED", DecodeRule::Unsigned),
    (22, "FIRST_SWITCHED", DecodeRule::Unsigned),
    (23, "OUT_BYTES", DecodeRule::Unsigned),
    (24, "OUT_PKTS", DecodeRule::Unsigned),
    (25, "MIN_PKT_LNGTH", DecodeRule::Unsigned),
    (26, "MAX_PKT_LNGTH", DecodeRule::Unsigned),
    (27, "IPV6_SRC_ADDR", DecodeRule::Ipv6Address),
    (28, "IPV6_DST_ADDR", DecodeRule::Ipv6Address),
    (29, "IPV6_SRC_MASK", DecodeRule::Unsigned),
    (30, "IPV6_DST_MASK", DecodeRule::Unsigned),
    (31, "IPV6_FLOW_LABEL", DecodeRule::Unsigned),
    (32, "ICMP_TYPE", DecodeRule::Unsigned),
    (33, "MUL_IGMP_TYPE", DecodeRule::Unsigned),
    (34, "SAMPLING_INTERVAL", DecodeRule::Unsigned),
    (35, "SAMPLING_ALGORITHM", DecodeRule::Unsigned),
    (36, "FLOW_ACTIVE_TIMEOUT", DecodeRule::Unsigned),
    (37, "FLOW_INACTIVE_TIMEOUT", DecodeRule::Unsigned),
    (38, "ENGINE_TYPE", DecodeRule::Unsigned),
    (39, "ENGINE_ID", DecodeRule::Unsigned),
    (40, "TOTAL_BYTES_EXP", DecodeRule::Unsigned),
    (41, "TOTAL_PKTS_EXP", DecodeRule::Unsigned),
    (42, "TOTAL_FLOWS_EXP", DecodeRule::Unsigned),
    (44, "IPV4_SRC_PREFIX", DecodeRule::Ipv4Address),
    (45, "IPV4_DST_PREFIX", DecodeRule::Ipv4Address),
    (46, "MPLS_TOP_LABEL_TYPE", DecodeRule::Unsigned),
    (47, "MPLS_TOP_LABEL_IP_ADDR", DecodeRule::Ipv4Address),
    (48, "FLOW_SAMPLER_ID", DecodeRule::Unsigned),
    (49, "FLOW_SAMPLER_MODE", DecodeRule::Unsigned),
    (50, "FLOW_SAMPLER_RANDOM_INTERVAL", DecodeRule::Unsigned),
    (52, "MIN_TTL", DecodeRule::Unsigned),
    (53, "MAX_TTL", DecodeRule::Unsigned),
    (54, "IPV4_IDENT", DecodeRule::Unsigned),
    (55, "DST_TOS", DecodeRule::Unsigned),
    (56, "IN_SRC_MAC", DecodeRule::MacAddress),
    (57, "OUT_DST_MAC", DecodeRule::MacAddress),
    (58, "SRC_VLAN", DecodeRule::Unsigned),
    (59, "DST_VLAN", DecodeRule::Unsigned),
    (60, "IP_PROTOCOL_VERSION", DecodeRule::Unsigned),
    (61, "DIRECTION", DecodeRule::Unsigned),
    (62, "IPV6_NEXT_HOP", DecodeRule::Ipv6Address),
    (63, "BGP_IPV6_NEXT_HOP", DecodeRule::Ipv6Address),
    (64, "IPV6_OPTION_HEADERS", DecodeRule::Unsigned),
    (70, "MPLS_LABEL_1", DecodeRule::Unsigned),
    (71, "MPLS_LABEL_2", DecodeRule::Unsigned),
    (72, "MPLS_LABEL_3", DecodeRule::Unsigned),
    (73, "MPLS_LABEL_4", DecodeRule::Unsigned),
    (74, "MPLS_LABEL_5", DecodeRule::Unsigned),
    (75, "MPLS_LABEL_6", DecodeRule::Unsigned),
    (76, "MPLS_LABEL_7", DecodeRule::Unsigned),
    (77, "MPLS_LABEL_8", DecodeRule::Unsigned),
    (78, "MPLS_LABEL_9", DecodeRule::Unsigned),
    (79, "MPLS_LABEL_10", DecodeRule::Unsigned),
    (80, "IN_DST_MAC", DecodeRule::MacAddress),
    (81, "OUT_SRC_MAC", DecodeRule::MacAddress),
    (82, "IF_NAME", DecodeRule::String),
    (83, "IF_DESC", DecodeRule::String),
    (84, "SAMPLER_NAME", DecodeRule::String),
    (85, "IN_PERMANENT_BYTES", DecodeRule::Unsigned),
    (86, "IN_PERMANENT_PKTS", DecodeRule::Unsigned),
    (88, "FRAGMENT_OFFSET", DecodeRule::Unsigned),
    (89, "FORWARDING_STATUS", DecodeRule::Unsigned),
    (90, "MPLS_PAL_RD", DecodeRule::Unsigned),
    (91, "MPLS_PREFIX_LEN", DecodeRule::Unsigned),
    (92, "SRC_TRAFFIC_INDEX", DecodeRule::Unsigned),
    (93, "DST_TRAFFIC_INDEX", DecodeRule::Unsigned),
    (94, "APPLICATION_DESCRIPTION", DecodeRule::String),
    (95, "APPLICATION_TAG", DecodeRule::Unsigned),
    (96, "APPLICATION_NAME", DecodeRule::String),
    (98, "POST_IP_DIFF_SERV_CODE_POINT", DecodeRule::Unsigned),
    (99, "REPLICATION_FACTOR", DecodeRule::Unsigned),
    (102, "LAYER2_PACKET_SECTION_OFFSET", DecodeRule::Unsigned),
    (103, "LAYER2_PACKET_SECTION_SIZE", DecodeRule::Unsigned),
    (104, "LAYER2_PACKET_SECTION_DATA", DecodeRule::Unsigned),
];

/// Scope field types of options templates, RFC 3954 section 6.1
static V9_SCOPES: &[(u16, &str)] = &[
    (1, "System"),
    (2, "Interface"),
    (3, "LineCard"),
    (4, "Cache"),
    (5, "Template"),
];

fn field_name_and_rule(field: &FieldSpec) -> (Cow<'static, str>, DecodeRule) {
    let id = field.element_id();
    if field.is_scope() {
        let name: Cow<'static, str> = V9_SCOPES
            .binary_search_by_key(&id, |(id, _)| *id)
            .map_or_else(|_| id.to_string().into(), |index| V9_SCOPES[index].1.into());
        return (name, DecodeRule::Unsigned);
    }
    V9_FIELDS
        .binary_search_by_key(&id, |(id, _, _)| *id)
        .map_or_else(
            |_| (id.to_string().into(), DecodeRule::Unsigned),
            |index| {
                let (_, name, rule) = V9_FIELDS[index];
                (name.into(), rule)
            },
        )
}

fn read_header(cursor: &mut Cursor<'_>) -> Result<(HeaderAttributes, u16, u32), DecodeError> {
    let version = cursor.read_u16()?;
    let count = cursor.read_u16()?;
    let sys_uptime = cursor.read_u32()?;
    let unix_secs = cursor.read_u32()?;
    let sequence_number = cursor.read_u32()?;
    let source_id = cursor.read_u32()?;

    let mut header = HeaderAttributes::new(unix_secs as u64 * 1000);
    header.push("version", version);
    header.push("count", count);
    header.push("sys_uptime", sys_uptime);
    header.push("unix_secs", unix_secs);
    header.push("sequence_number", sequence_number);
    header.push("source_id", source_id);
    Ok((header, count, source_id))
}

pub(crate) fn decode(
    buf: &[u8],
    decoder: &FlowDecoder,
    sink: &CountingSink<'_>,
) -> Result<(), DecodeError> {
    let mut cursor = Cursor::new(buf);
    let (header, count, source_id) = read_header(&mut cursor)?;
    let header = Arc::new(header);
    let exporter = ExporterKey::new(source_id, None);

    let mut decoded = 0usize;
    while decoded < count as usize && cursor.remaining() >= FLOWSET_HEADER_LENGTH {
        let flowset_id = cursor.read_u16()?;
        let length = cursor.read_u16()?;
        if (length as usize) < FLOWSET_HEADER_LENGTH {
            return Err(DecodeError::InvalidSetLength(length));
        }
        let body_length = length as usize - FLOWSET_HEADER_LENGTH;
        if body_length > cursor.remaining() {
            return Err(DecodeError::TruncatedPacket {
                declared: body_length,
                available: cursor.remaining(),
            });
        }
        let mut body = cursor.sub_cursor(body_length)?;
        let result = match flowset_id {
            TEMPLATE_FLOWSET_ID => read_templates(&mut body, &exporter, decoder.v9_templates()),
            OPTIONS_TEMPLATE_FLOWSET_ID => {
                read_options_templates(&mut body, &exporter, decoder.v9_templates())
            }
            2..=255 => {
                debug!(flowset_id, source_id, "skipping reserved flowset");
                Ok(0)
            }
            template_id => {
                let key = TemplateKey::new(exporter.clone(), template_id);
                match decoder.v9_templates().get(&key) {
                    Some(template) => decode_data_records(&template, &mut body, &header, sink),
                    // buffered flowsets count for nothing until they are replayed,
                    // the loop is still bounded by the remaining bytes
                    None => {
                        buffer_flowset(decoder, key, body.read_bytes(body_length)?, &header);
                        Ok(0)
                    }
                }
            }
        };
        match result {
            Ok(records) => decoded += records,
            Err(err) => {
                warn!(flowset_id, source_id, error = %err, "failed to decode netflow v9 flowset")
            }
        }
    }
    Ok(())
}

/// Template flowset, each template counts as one record toward the header
/// count.
///
/// ```text
/// +-----------------+-----------------+
/// | Template ID     | Field Count     |
/// +-----------------+-----------------+
/// | Field Type 1    | Field Length 1  |
/// +-----------------+-----------------+
/// ```
fn read_templates(
    body: &mut Cursor<'_>,
    exporter: &ExporterKey,
    store: &TemplateStore,
) -> Result<usize, DecodeError> {
    let mut templates = 0;
    while body.remaining() >= 4 {
        let template_id = body.read_u16()?;
        let field_count = body.read_u16()?;
        if template_id < 256 {
            return Err(DecodeError::InvalidTemplateId(template_id));
        }
        let mut fields = Vec::with_capacity(field_count as usize);
        for _ in 0..field_count {
            if let Some(field) = read_field(body, template_id, false)? {
                fields.push(field);
            }
        }
        trace!(
            source_id = exporter.source_id(),
            template_id,
            fields = fields.len(),
            "learned netflow v9 template"
        );
        store.put(
            TemplateKey::new(exporter.clone(), template_id),
            Template::new(fields),
        );
        templates += 1;
    }
    Ok(templates)
}

/// Options template flowset, scope and option lengths are in bytes.
///
/// ```text
/// +------------------------+------------------------+
/// | Template ID            | Option Scope Length    |
/// +------------------------+------------------------+
/// | Option Length          | Scope 1 Field Type     |
/// +------------------------+------------------------+
/// | Scope 1 Field Length   | ...                    |
/// +------------------------+------------------------+
/// | Option 1 Field Type    | Option 1 Field Length  |
/// +------------------------+------------------------+
/// ```
fn read_options_templates(
    body: &mut Cursor<'_>,
    exporter: &ExporterKey,
    store: &TemplateStore,
) -> Result<usize, DecodeError> {
    let mut templates = 0;
    while body.remaining() >= 6 {
        let template_id = body.read_u16()?;
        let scope_length = body.read_u16()?;
        let option_length = body.read_u16()?;
        if template_id < 256 {
            return Err(DecodeError::InvalidTemplateId(template_id));
        }
        let scope_count = scope_length / 4;
        let option_count = option_length / 4;
        let mut fields = Vec::with_capacity((scope_count + option_count) as usize);
        for index in 0..scope_count + option_count {
            if let Some(field) = read_field(body, template_id, index < scope_count)? {
                fields.push(field);
            }
        }
        trace!(
            source_id = exporter.source_id(),
            template_id,
            scope_fields = scope_count,
            "learned netflow v9 options template"
        );
        store.put(
            TemplateKey::new(exporter.clone(), template_id),
            Template::new(fields),
        );
        templates += 1;
    }
    Ok(templates)
}

fn read_field(
    body: &mut Cursor<'_>,
    template_id: u16,
    is_scope: bool,
) -> Result<Option<FieldSpec>, DecodeError> {
    let field_type = body.read_u16()?;
    let length = body.read_u16()?;
    if length == 0 {
        warn!(template_id, field_type, "skipping zero length template field");
        return Ok(None);
    }
    Ok(Some(FieldSpec::new(field_type, length, None, is_scope)))
}

fn buffer_flowset(
    decoder: &FlowDecoder,
    key: TemplateKey,
    body: &[u8],
    header: &Arc<HeaderAttributes>,
) {
    let bytes = Bytes::copy_from_slice(body);
    let store = Arc::clone(decoder.v9_templates());
    let sink: Arc<dyn RecordSink> = Arc::clone(decoder.sink());
    let header = Arc::clone(header);
    let lookup = key.clone();
    decoder.pending().put(
        key,
        Box::new(move || {
            let template = store
                .get(&lookup)
                .ok_or(DecodeError::NoTemplateDefinedFor(lookup.template_id()))?;
            let counting = CountingSink::new(&sink);
            decode_data_records(&template, &mut Cursor::new(&bytes), &header, &counting)
        }),
    );
}

/// Decode records until what is left of the flowset is too short to hold
/// one, the rest is padding.
pub(crate) fn decode_data_records(
    template: &Template,
    body: &mut Cursor<'_>,
    header: &HeaderAttributes,
    sink: &CountingSink<'_>,
) -> Result<usize, DecodeError> {
    if template.fields().is_empty() {
        return Ok(0);
    }
    let min_length = template.min_record_length().max(1);
    let has_scope = template.has_scope_fields();
    let mut records = 0;
    while body.remaining() >= min_length {
        let mut fields: Vec<Attribute> = Vec::with_capacity(template.fields().len());
        let mut scope_count = 0;
        for field in template.fields() {
            let length = if field.is_variable_length() {
                body.read_variable_length()?
            } else {
                field.length() as usize
            };
            let value = body.read_bytes(length)?;
            let (name, rule) = field_name_and_rule(field);
            fields.push((name, ie::render(rule, value)?));
            if field.is_scope() {
                scope_count += 1;
            }
        }
        let record = if has_scope {
            let text = options_full_text(
                fields[..scope_count]
                    .iter()
                    .map(|(name, value)| (name.as_ref(), value.as_str())),
            );
            Record::new(header, fields, text)
        } else {
            Record::new(header, fields, DATA_RECORD_FULL_TEXT)
        };
        sink.emit(record);
        records += 1;
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_tables_are_sorted() {
        assert!(V9_FIELDS.windows(2).all(|pair| pair[0].0 < pair[1].0));
        assert!(V9_SCOPES.windows(2).all(|pair| pair[0].0 < pair[1].0));
    }

    #[test]
    fn test_field_names() {
        let (name, rule) = field_name_and_rule(&FieldSpec::new(8, 4, None, false));
        assert_eq!(name, "IPV4_SRC_ADDR");
        assert_eq!(rule, DecodeRule::Ipv4Address);

        let (name, rule) = field_name_and_rule(&FieldSpec::new(82, 16, None, false));
        assert_eq!(name, "IF_NAME");
        assert_eq!(rule, DecodeRule::String);

        let (name, rule) = field_name_and_rule(&FieldSpec::new(2, 4, None, true));
        assert_eq!(name, "Interface");
        assert_eq!(rule, DecodeRule::Unsigned);

        let (name, _) = field_name_and_rule(&FieldSpec::new(40000, 4, None, false));
        assert_eq!(name, "40000");
    }
}
