// Copyright (C) 2022-present The NetGauze Authors.
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

//!
//! Handling TCP Parameters registered at [TCP Parameters](https://www.iana.org/assignments/tcp-parameters/tcp-parameters.xml)
//!
//! ```rust
//! use netgauze_iana::tcp::*;
//!
//! let value: u16 = 0x0112;
//! let flags = TCPHeaderFlags::from(value);
//! assert!(flags.syn());
//! assert!(flags.ack());
//! assert_eq!(flags.to_string(), "SYN|ACK|0x100");
//! assert_eq!(u16::from(flags), value);
//! ```

use serde::{Deserialize, Serialize};

/// Names of the TCP header flags in the order of their bit position, starting
/// from the least significant bit.
const FLAG_NAMES: [&str; 8] = ["FIN", "SYN", "RST", "PSH", "ACK", "URG", "ECE", "CWR"];

/// TCP Header Flags registered at IANA
/// [TCP Parameters](https://www.iana.org/assignments/tcp-parameters/tcp-parameters.xml)
///
/// IPFIX `tcpControlBits` carries the flags in 16 bits, the upper eight bits
/// are kept verbatim in `other` since they have no registered name here.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash, Serialize, Deserialize)]
#[allow(non_snake_case)]
pub struct TCPHeaderFlags {
    /// No more data from sender (FIN)
    /// [RFC9293](https://datatracker.ietf.org/doc/html/RFC9293)
    FIN: bool,
    /// Synchronize sequence numbers (SYN)
    /// [RFC9293](https://datatracker.ietf.org/doc/html/RFC9293)
    SYN: bool,
    /// Reset the connection (RST)
    /// [RFC9293](https://datatracker.ietf.org/doc/html/RFC9293)
    RST: bool,
    /// Push Function (PSH)
    /// [RFC9293](https://datatracker.ietf.org/doc/html/RFC9293)
    PSH: bool,
    /// Acknowledgment field is significant (ACK)
    /// [RFC9293](https://datatracker.ietf.org/doc/html/RFC9293)
    ACK: bool,
    /// Urgent Pointer field is significant (URG)
    /// [RFC9293](https://datatracker.ietf.org/doc/html/RFC9293)
    URG: bool,
    /// ECN (ECN-Echo)
    /// [RFC3168](https://datatracker.ietf.org/doc/html/RFC3168)
    ECE: bool,
    /// CWR (Congestion Window Reduced)
    /// [RFC3168](https://datatracker.ietf.org/doc/html/RFC3168)
    CWR: bool,
    /// Bits `0x0100` and above
    other: u16,
}

#[allow(non_snake_case)]
#[allow(clippy::too_many_arguments)]
impl TCPHeaderFlags {
    pub const fn new(
        FIN: bool,
        SYN: bool,
        RST: bool,
        PSH: bool,
        ACK: bool,
        URG: bool,
        ECE: bool,
        CWR: bool,
    ) -> Self {
        TCPHeaderFlags {
            FIN,
            SYN,
            RST,
            PSH,
            ACK,
            URG,
            ECE,
            CWR,
            other: 0,
        }
    }

    pub const fn fin(&self) -> bool {
        self.FIN
    }

    pub const fn syn(&self) -> bool {
        self.SYN
    }

    pub const fn rst(&self) -> bool {
        self.RST
    }

    pub const fn psh(&self) -> bool {
        self.PSH
    }

    pub const fn ack(&self) -> bool {
        self.ACK
    }

    pub const fn urg(&self) -> bool {
        self.URG
    }

    pub const fn ece(&self) -> bool {
        self.ECE
    }

    pub const fn cwr(&self) -> bool {
        self.CWR
    }

    /// Set bits that are outside the eight named flags
    pub const fn other(&self) -> u16 {
        self.other
    }

    const fn named(&self) -> [bool; 8] {
        [
            self.FIN, self.SYN, self.RST, self.PSH, self.ACK, self.URG, self.ECE, self.CWR,
        ]
    }
}

impl From<u16> for TCPHeaderFlags {
    fn from(value: u16) -> Self {
        let mut flags = TCPHeaderFlags::from((value & 0x00ff) as u8);
        flags.other = value & 0xff00;
        flags
    }
}

impl From<TCPHeaderFlags> for u16 {
    fn from(flags: TCPHeaderFlags) -> Self {
        u8::from(flags) as u16 | flags.other
    }
}

impl From<u8> for TCPHeaderFlags {
    fn from(value: u8) -> Self {
        TCPHeaderFlags {
            FIN: (value & 0x0001) != 0,
            SYN: (value & 0x0002) != 0,
            RST: (value & 0x0004) != 0,
            PSH: (value & 0x0008) != 0,
            ACK: (value & 0x0010) != 0,
            URG: (value & 0x0020) != 0,
            ECE: (value & 0x0040) != 0,
            CWR: (value & 0x0080) != 0,
            other: 0,
        }
    }
}

impl From<TCPHeaderFlags> for u8 {
    fn from(flags: TCPHeaderFlags) -> Self {
        flags
            .named()
            .iter()
            .enumerate()
            .filter(|(_, set)| **set)
            .fold(0u8, |value, (bit, _)| value | (1 << bit))
    }
}

/// Pipe-joined flag names in bit order, unnamed bits are written in hex.
impl std::fmt::Display for TCPHeaderFlags {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        let mut write_part = |f: &mut std::fmt::Formatter<'_>, part: &dyn std::fmt::Display| {
            let sep = if first { "" } else { "|" };
            first = false;
            write!(f, "{sep}{part}")
        };
        for (name, set) in FLAG_NAMES.iter().zip(self.named()) {
            if set {
                write_part(f, name)?;
            }
        }
        for bit in 8..16 {
            let mask = 1u16 << bit;
            if self.other & mask != 0 {
                write_part(f, &format_args!("{mask:#x}"))?;
            }
        }
        Ok(())
    }
}
