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

//! Assigned Internet Protocol Numbers registered at IANA
//! [Protocol Numbers](https://www.iana.org/assignments/protocol-numbers/protocol-numbers.xhtml)
//!
//! ```rust
//! use netgauze_iana::ip_protocol::{IpProtocol, UndefinedIpProtocol};
//!
//! assert_eq!(IpProtocol::try_from(6), Ok(IpProtocol::TCP));
//! assert_eq!(IpProtocol::TCP.to_string(), "TCP");
//! assert_eq!(IpProtocol::IPv6ICMP.to_string(), "IPv6-ICMP");
//! assert_eq!(IpProtocol::try_from(250), Err(UndefinedIpProtocol(250)));
//! ```

use strum_macros::{Display, FromRepr};

#[allow(clippy::upper_case_acronyms)]
#[repr(u8)]
#[derive(FromRepr, Display, Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum IpProtocol {
    /// IPv6 Hop-by-Hop Option [RFC8200](https://datatracker.ietf.org/doc/html/rfc8200)
    HOPOPT = 0,
    /// Internet Control Message [RFC792](https://datatracker.ietf.org/doc/html/rfc792)
    ICMP = 1,
    /// Internet Group Management [RFC1112](https://datatracker.ietf.org/doc/html/rfc1112)
    IGMP = 2,
    GGP = 3,
    /// IPv4 encapsulation [RFC2003](https://datatracker.ietf.org/doc/html/rfc2003)
    IPv4 = 4,
    ST = 5,
    /// Transmission Control [RFC9293](https://datatracker.ietf.org/doc/html/rfc9293)
    TCP = 6,
    CBT = 7,
    EGP = 8,
    IGP = 9,
    #[strum(to_string = "BBN-RCC-MON")]
    BBNRCCMON = 10,
    #[strum(to_string = "NVP-II")]
    NVPII = 11,
    PUP = 12,
    ARGUS = 13,
    EMCON = 14,
    XNET = 15,
    CHAOS = 16,
    /// User Datagram [RFC768](https://datatracker.ietf.org/doc/html/rfc768)
    UDP = 17,
    MUX = 18,
    #[strum(to_string = "DCN-MEAS")]
    DCNMEAS = 19,
    HMP = 20,
    PRM = 21,
    #[strum(to_string = "XNS-IDP")]
    XNSIDP = 22,
    #[strum(to_string = "TRUNK-1")]
    TRUNK1 = 23,
    #[strum(to_string = "TRUNK-2")]
    TRUNK2 = 24,
    #[strum(to_string = "LEAF-1")]
    LEAF1 = 25,
    #[strum(to_string = "LEAF-2")]
    LEAF2 = 26,
    RDP = 27,
    IRTP = 28,
    #[strum(to_string = "ISO-TP4")]
    ISOTP4 = 29,
    NETBLT = 30,
    #[strum(to_string = "MFE-NSP")]
    MFENSP = 31,
    #[strum(to_string = "MERIT-INP")]
    MERITINP = 32,
    /// Datagram Congestion Control Protocol [RFC4340](https://datatracker.ietf.org/doc/html/rfc4340)
    DCCP = 33,
    #[strum(to_string = "3PC")]
    ThirdPartyConnect = 34,
    IDPR = 35,
    XTP = 36,
    DDP = 37,
    #[strum(to_string = "IDPR-CMTP")]
    IDPRCMTP = 38,
    #[strum(to_string = "TP++")]
    TPPlusPlus = 39,
    IL = 40,
    /// IPv6 encapsulation [RFC2473](https://datatracker.ietf.org/doc/html/rfc2473)
    IPv6 = 41,
    SDRP = 42,
    #[strum(to_string = "IPv6-Route")]
    IPv6Route = 43,
    #[strum(to_string = "IPv6-Frag")]
    IPv6Frag = 44,
    IDRP = 45,
    /// Reservation Protocol [RFC2205](https://datatracker.ietf.org/doc/html/rfc2205)
    RSVP = 46,
    /// Generic Routing Encapsulation [RFC2784](https://datatracker.ietf.org/doc/html/rfc2784)
    GRE = 47,
    DSR = 48,
    BNA = 49,
    /// Encap Security Payload [RFC4303](https://datatracker.ietf.org/doc/html/rfc4303)
    ESP = 50,
    /// Authentication Header [RFC4302](https://datatracker.ietf.org/doc/html/rfc4302)
    AH = 51,
    #[strum(to_string = "I-NLSP")]
    INLSP = 52,
    SWIPE = 53,
    NARP = 54,
    MOBILE = 55,
    TLSP = 56,
    SKIP = 57,
    /// ICMP for IPv6 [RFC8200](https://datatracker.ietf.org/doc/html/rfc8200)
    #[strum(to_string = "IPv6-ICMP")]
    IPv6ICMP = 58,
    #[strum(to_string = "IPv6-NoNxt")]
    IPv6NoNxt = 59,
    #[strum(to_string = "IPv6-Opts")]
    IPv6Opts = 60,
    CFTP = 62,
    #[strum(to_string = "SAT-EXPAK")]
    SATEXPAK = 64,
    KRYPTOLAN = 65,
    RVD = 66,
    IPPC = 67,
    #[strum(to_string = "SAT-MON")]
    SATMON = 69,
    VISA = 70,
    IPCV = 71,
    CPNX = 72,
    CPHB = 73,
    WSN = 74,
    PVP = 75,
    #[strum(to_string = "BR-SAT-MON")]
    BRSATMON = 76,
    #[strum(to_string = "SUN-ND")]
    SUNND = 77,
    #[strum(to_string = "WB-MON")]
    WBMON = 78,
    #[strum(to_string = "WB-EXPAK")]
    WBEXPAK = 79,
    #[strum(to_string = "ISO-IP")]
    ISOIP = 80,
    VMTP = 81,
    #[strum(to_string = "SECURE-VMTP")]
    SECUREVMTP = 82,
    VINES = 83,
    TTP = 84,
    #[strum(to_string = "NSFNET-IGP")]
    NSFNETIGP = 85,
    DGP = 86,
    TCF = 87,
    /// [RFC7868](https://datatracker.ietf.org/doc/html/rfc7868)
    EIGRP = 88,
    /// [RFC1583](https://datatracker.ietf.org/doc/html/rfc1583)
    OSPFIGP = 89,
    #[strum(to_string = "Sprite-RPC")]
    SpriteRPC = 90,
    LARP = 91,
    MTP = 92,
    #[strum(to_string = "AX.25")]
    AX25 = 93,
    IPIP = 94,
    MICP = 95,
    #[strum(to_string = "SCC-SP")]
    SCCSP = 96,
    ETHERIP = 97,
    ENCAP = 98,
    GMTP = 100,
    IFMP = 101,
    PNNI = 102,
    /// Protocol Independent Multicast [RFC7761](https://datatracker.ietf.org/doc/html/rfc7761)
    PIM = 103,
    ARIS = 104,
    SCPS = 105,
    QNX = 106,
    #[strum(to_string = "A/N")]
    ActiveNetworks = 107,
    IPComp = 108,
    SNP = 109,
    #[strum(to_string = "Compaq-Peer")]
    CompaqPeer = 110,
    #[strum(to_string = "IPX-in-IP")]
    IPXInIP = 111,
    /// Virtual Router Redundancy Protocol [RFC9568](https://datatracker.ietf.org/doc/html/rfc9568)
    VRRP = 112,
    PGM = 113,
    /// Layer Two Tunneling Protocol V3 [RFC3931](https://datatracker.ietf.org/doc/html/rfc3931)
    L2TP = 115,
    DDX = 116,
    IATP = 117,
    STP = 118,
    SRP = 119,
    UTI = 120,
    SMP = 121,
    SM = 122,
    PTP = 123,
    #[strum(to_string = "ISIS over IPv4")]
    ISISOverIPv4 = 124,
    FIRE = 125,
    CRTP = 126,
    CRUDP = 127,
    SSCOPMCE = 128,
    IPLT = 129,
    SPS = 130,
    PIPE = 131,
    /// Stream Control Transmission Protocol [RFC9260](https://datatracker.ietf.org/doc/html/rfc9260)
    SCTP = 132,
    FC = 133,
    #[strum(to_string = "RSVP-E2E-IGNORE")]
    RSVPE2EIGNORE = 134,
    #[strum(to_string = "Mobility Header")]
    MobilityHeader = 135,
    UDPLite = 136,
    #[strum(to_string = "MPLS-in-IP")]
    MPLSInIP = 137,
    #[strum(to_string = "manet")]
    MANET = 138,
    HIP = 139,
    Shim6 = 140,
    WESP = 141,
    ROHC = 142,
    Ethernet = 143,
    AGGFRAG = 144,
    NSH = 145,
    Reserved = 255,
}

/// Error type used in `[TryFrom] for [IpProtocol].
/// The value carried is the undefined value being parsed
#[repr(C)]
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct UndefinedIpProtocol(pub u8);

impl From<IpProtocol> for u8 {
    fn from(value: IpProtocol) -> Self {
        value as u8
    }
}

impl TryFrom<u8> for IpProtocol {
    type Error = UndefinedIpProtocol;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match Self::from_repr(value) {
            Some(val) => Ok(val),
            None => Err(UndefinedIpProtocol(value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1, "ICMP")]
    #[case(6, "TCP")]
    #[case(17, "UDP")]
    #[case(47, "GRE")]
    #[case(58, "IPv6-ICMP")]
    #[case(93, "AX.25")]
    #[case(132, "SCTP")]
    fn test_protocol_names(#[case] value: u8, #[case] expected: &str) {
        let protocol = IpProtocol::try_from(value).unwrap();
        assert_eq!(protocol.to_string(), expected);
        assert_eq!(u8::from(protocol), value);
    }

    #[test]
    fn test_unassigned() {
        assert_eq!(IpProtocol::try_from(61), Err(UndefinedIpProtocol(61)));
        assert_eq!(IpProtocol::try_from(200), Err(UndefinedIpProtocol(200)));
    }
}
