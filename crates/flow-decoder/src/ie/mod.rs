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

//! Mapping of IPFIX information elements to a display name and a decode
//! rule.
//!
//! ```rust
//! use netgauze_flow_decoder::ie;
//!
//! assert_eq!(ie::element_name(8, None), "sourceIPv4Address");
//! assert_eq!(ie::element_name(1, Some(ie::REVERSE_PEN)), "reverseOctetDeltaCount");
//! assert_eq!(ie::element_name(456, Some(123)), "123.456");
//! assert_eq!(
//!     ie::decode_field(8, None, &[192, 0, 2, 1]).unwrap(),
//!     ("sourceIPv4Address".into(), "192.0.2.1".to_string())
//! );
//! ```

use std::borrow::Cow;

use crate::error::DecodeError;

mod decode;
mod registry;

pub use decode::{render, BasicListSemantic, ForwardingStatusKind};

/// Private enterprise number of the reverse information elements
/// [RFC5103](https://datatracker.ietf.org/doc/html/rfc5103)
pub const REVERSE_PEN: u32 = 29305;

/// How the bytes of an information element are turned into text
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DecodeRule {
    /// Big endian unsigned integer in decimal, values wider than eight bytes
    /// are rendered as `0x` prefixed hex
    Unsigned,
    /// Two's complement integer in decimal
    Signed,
    /// IEEE-754 float32 or float64
    Float,
    /// `1` is `true` and `2` is `false`
    Boolean,
    MacAddress,
    Ipv4Address,
    Ipv6Address,
    /// Lower case hex
    OctetArray,
    String,
    /// Raw epoch integer, no date formatting
    DateTime,
    BasicList,
    ForwardingStatus,
    TcpControlBits,
    FragmentFlags,
    InterfaceType,
    ProtocolIdentifier,
    AnonymizationFlags,
    /// Numeric value looked up in a static table
    Enumerated(&'static [(u64, &'static str)]),
}

/// Entry of the IANA information element registry
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct InformationElement {
    id: u16,
    name: &'static str,
    rule: DecodeRule,
}

impl InformationElement {
    pub const fn id(&self) -> u16 {
        self.id
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn rule(&self) -> DecodeRule {
        self.rule
    }
}

/// Look up an IANA assigned information element
pub fn lookup(id: u16) -> Option<InformationElement> {
    registry::IANA_ELEMENTS
        .binary_search_by_key(&id, |(id, _, _)| *id)
        .ok()
        .map(|index| {
            let (id, name, rule) = registry::IANA_ELEMENTS[index];
            InformationElement { id, name, rule }
        })
}

fn reverse_name(name: &str) -> String {
    let mut chars = name.chars();
    let mut reversed = String::with_capacity(name.len() + 7);
    reversed.push_str("reverse");
    if let Some(first) = chars.next() {
        reversed.extend(first.to_uppercase());
    }
    reversed.push_str(chars.as_str());
    reversed
}

/// Display name of an element: the registry name for IANA and reverse
/// elements, otherwise `<enterprise>.<id>` or the bare id.
pub fn element_name(id: u16, enterprise_number: Option<u32>) -> Cow<'static, str> {
    match enterprise_number {
        None | Some(0) => match lookup(id) {
            Some(ie) => Cow::Borrowed(ie.name),
            None => Cow::Owned(id.to_string()),
        },
        Some(REVERSE_PEN) => match lookup(id) {
            Some(ie) => Cow::Owned(reverse_name(ie.name)),
            None => Cow::Owned(format!("{REVERSE_PEN}.{id}")),
        },
        Some(pen) => Cow::Owned(format!("{pen}.{id}")),
    }
}

/// Decode rule of an element, unknown elements decode as unsigned integers
pub fn element_rule(id: u16, enterprise_number: Option<u32>) -> DecodeRule {
    match enterprise_number {
        None | Some(0) | Some(REVERSE_PEN) => lookup(id).map_or(DecodeRule::Unsigned, |ie| ie.rule),
        Some(_) => DecodeRule::Unsigned,
    }
}

/// Name and rendered value of one field
pub fn decode_field(
    id: u16,
    enterprise_number: Option<u32>,
    value: &[u8],
) -> Result<(Cow<'static, str>, String), DecodeError> {
    let rendered = render(element_rule(id, enterprise_number), value)?;
    Ok((element_name(id, enterprise_number), rendered))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1, None, "octetDeltaCount")]
    #[case(141, None, "lineCardId")]
    #[case(291, None, "basicList")]
    #[case(1, Some(0), "octetDeltaCount")]
    #[case(236, Some(REVERSE_PEN), "reverseVRFname")]
    #[case(8, Some(REVERSE_PEN), "reverseSourceIPv4Address")]
    #[case(456, Some(123), "123.456")]
    #[case(65, None, "65")]
    #[case(32000, Some(REVERSE_PEN), "29305.32000")]
    fn test_element_name(
        #[case] id: u16,
        #[case] pen: Option<u32>,
        #[case] expected: &str,
    ) {
        assert_eq!(element_name(id, pen), expected);
    }

    #[test]
    fn test_element_rule() {
        assert_eq!(element_rule(4, None), DecodeRule::ProtocolIdentifier);
        assert_eq!(element_rule(89, None), DecodeRule::ForwardingStatus);
        assert_eq!(element_rule(12, Some(REVERSE_PEN)), DecodeRule::Ipv4Address);
        assert_eq!(element_rule(12, Some(9)), DecodeRule::Unsigned);
        assert_eq!(element_rule(60000, None), DecodeRule::Unsigned);
    }

    #[test]
    fn test_decode_field_enterprise() {
        assert_eq!(
            decode_field(456, Some(123), &[0x00, 0x00, 0x01, 0x00]).unwrap(),
            ("123.456".into(), "256".to_string())
        );
    }
}
