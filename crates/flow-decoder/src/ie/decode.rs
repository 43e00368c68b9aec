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

use byteorder::{ByteOrder, NetworkEndian};
use netgauze_iana::{if_type::IfType, ip_protocol::IpProtocol, tcp::TCPHeaderFlags};
use strum_macros::{Display, FromRepr};

use super::{element_name, element_rule, DecodeRule};
use crate::cursor::{format_hex, format_ipv6, format_mac, Cursor};
use crate::error::DecodeError;
use crate::template::VARIABLE_LENGTH;

/// Top two bits of `forwardingStatus`
/// [RFC7270](https://datatracker.ietf.org/doc/html/rfc7270#section-4.12)
#[repr(u8)]
#[derive(FromRepr, Display, Copy, Clone, PartialEq, Eq, Debug)]
pub enum ForwardingStatusKind {
    Unknown = 0,
    Forwarded = 1,
    Dropped = 2,
    Consumed = 3,
}

impl ForwardingStatusKind {
    /// Reason codes carried in the low six bits, indexed by code
    const fn reasons(&self) -> &'static [&'static str] {
        match self {
            Self::Unknown => &["Unknown"],
            Self::Forwarded => &["Unknown", "Fragmented", "Not Fragmented"],
            Self::Dropped => &[
                "Unknown",
                "ACL deny",
                "ACL drop",
                "Unroutable",
                "Adjacency",
                "Fragmentation and DF set",
                "Bad header checksum",
                "Bad total Length",
                "Bad header length",
                "bad TTL",
                "Policer",
                "WRED",
                "RPF",
                "For us",
                "Bad output interface",
                "Hardware",
            ],
            Self::Consumed => &["Unknown", "Punt Adjacency", "Incomplete Adjacency", "For us"],
        }
    }
}

/// Structured data semantics of a list
/// [RFC6313](https://datatracker.ietf.org/doc/html/rfc6313#section-4.4)
#[allow(non_camel_case_types)]
#[repr(u8)]
#[derive(FromRepr, Display, Copy, Clone, PartialEq, Eq, Debug)]
pub enum BasicListSemantic {
    noneOf = 0,
    exactlyOneOf = 1,
    oneOrMoreOf = 2,
    allOf = 3,
    ordered = 4,
    undefined = 255,
}

/// Render the value of an element according to `rule`.
///
/// Values whose width does not fit the rule fall back to the unsigned
/// rendering, so the only failure is a malformed embedded list.
pub fn render(rule: DecodeRule, value: &[u8]) -> Result<String, DecodeError> {
    let rendered = match rule {
        DecodeRule::Unsigned | DecodeRule::DateTime => unsigned(value),
        DecodeRule::Signed => signed(value),
        DecodeRule::Float => match value.len() {
            4 => f32::from_bits(NetworkEndian::read_u32(value)).to_string(),
            8 => f64::from_bits(NetworkEndian::read_u64(value)).to_string(),
            _ => unsigned(value),
        },
        DecodeRule::Boolean => match value {
            [1] => "true".to_string(),
            [2] => "false".to_string(),
            _ => unsigned(value),
        },
        DecodeRule::MacAddress if value.len() == 6 => format_mac(value),
        DecodeRule::Ipv4Address if value.len() == 4 => {
            std::net::Ipv4Addr::new(value[0], value[1], value[2], value[3]).to_string()
        }
        DecodeRule::Ipv6Address if value.len() == 16 => format_ipv6(value),
        DecodeRule::MacAddress | DecodeRule::Ipv4Address | DecodeRule::Ipv6Address => {
            unsigned(value)
        }
        DecodeRule::OctetArray => format_hex(value).into_owned(),
        DecodeRule::String => String::from_utf8_lossy(value).into_owned(),
        DecodeRule::BasicList => basic_list(value)?,
        DecodeRule::ForwardingStatus => forwarding_status(value),
        DecodeRule::TcpControlBits => match value.len() {
            1 => TCPHeaderFlags::from(value[0]).to_string(),
            2 => TCPHeaderFlags::from(NetworkEndian::read_u16(value)).to_string(),
            _ => unsigned(value),
        },
        DecodeRule::FragmentFlags => match value {
            [flags] => fragment_flags(*flags),
            _ => unsigned(value),
        },
        DecodeRule::InterfaceType => match as_u64(value) {
            Some(raw) => u32::try_from(raw)
                .ok()
                .and_then(|raw| IfType::try_from(raw).ok())
                .map_or_else(|| raw.to_string(), |if_type| if_type.to_string()),
            None => unsigned(value),
        },
        DecodeRule::ProtocolIdentifier => match as_u64(value) {
            Some(raw) => u8::try_from(raw)
                .ok()
                .and_then(|raw| IpProtocol::try_from(raw).ok())
                .map_or_else(|| raw.to_string(), |protocol| protocol.to_string()),
            None => unsigned(value),
        },
        DecodeRule::AnonymizationFlags => match as_u64(value) {
            Some(raw) => anonymization_flags(raw),
            None => unsigned(value),
        },
        DecodeRule::Enumerated(table) => match as_u64(value) {
            Some(raw) => table
                .binary_search_by_key(&raw, |(code, _)| *code)
                .map_or_else(|_| raw.to_string(), |index| table[index].1.to_string()),
            None => unsigned(value),
        },
    };
    Ok(rendered)
}

fn as_u64(value: &[u8]) -> Option<u64> {
    if value.is_empty() || value.len() > 8 {
        return None;
    }
    Some(NetworkEndian::read_uint(value, value.len()))
}

fn unsigned(value: &[u8]) -> String {
    match as_u64(value) {
        Some(raw) => raw.to_string(),
        None if value.is_empty() => String::new(),
        None => format!("0x{}", format_hex(value)),
    }
}

fn signed(value: &[u8]) -> String {
    match as_u64(value) {
        Some(raw) => {
            let shift = 64 - 8 * value.len() as u32;
            (((raw << shift) as i64) >> shift).to_string()
        }
        None => unsigned(value),
    }
}

fn forwarding_status(value: &[u8]) -> String {
    let Some(raw) = as_u64(value) else {
        return unsigned(value);
    };
    let status = (raw & 0xff) as u8;
    ForwardingStatusKind::from_repr(status >> 6)
        .and_then(|kind| {
            kind.reasons()
                .get((status & 0x3f) as usize)
                .map(|reason| format!("{kind}/{reason}"))
        })
        .unwrap_or_else(|| raw.to_string())
}

fn fragment_flags(flags: u8) -> String {
    let df = if flags & 0x02 != 0 {
        "Don't Fragment"
    } else {
        "May Fragment"
    };
    let mf = if flags & 0x01 != 0 {
        "More Fragments"
    } else {
        "Last Fragment"
    };
    format!("{df}|{mf}")
}

fn anonymization_flags(flags: u64) -> String {
    let stability = match flags & 0x03 {
        0 => "Undefined",
        1 => "Session",
        2 => "Exporter-Collector Pair",
        _ => "Stable",
    };
    let mut rendered = format!("SC={stability}");
    if flags & 0x04 != 0 {
        rendered.push_str("|PmA");
    }
    if flags & 0x08 != 0 {
        rendered.push_str("|LOR");
    }
    rendered
}

/// ```text
///  0                   1                   2                   3
///  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |    Semantic   |1|         Field ID            |  Enterprise...|
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |              ...Number                        |   Element...  |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// | ...Length     |              basicList Content ...            |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// ```
fn basic_list(value: &[u8]) -> Result<String, DecodeError> {
    let mut cursor = Cursor::new(value);
    let semantic = cursor.read_u8()?;
    let raw_id = cursor.read_u16()?;
    let element_id = raw_id & 0x7fff;
    let enterprise_number = if raw_id & 0x8000 != 0 {
        Some(cursor.read_u32()?)
    } else {
        None
    };
    let element_length = cursor.read_u16()?;
    let rule = element_rule(element_id, enterprise_number);

    let mut elements = Vec::new();
    while !cursor.is_empty() {
        let length = if element_length == VARIABLE_LENGTH {
            cursor.read_variable_length()?
        } else {
            element_length as usize
        };
        if length == 0 {
            break;
        }
        elements.push(render(rule, cursor.read_bytes(length)?)?);
    }

    let semantic = BasicListSemantic::from_repr(semantic)
        .map_or_else(|| semantic.to_string(), |semantic| semantic.to_string());
    Ok(format!(
        "{}: {semantic} {{{}}}",
        element_name(element_id, enterprise_number),
        elements.join(", ")
    ))
}
