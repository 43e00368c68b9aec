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

//! Forward only, bounds checked reader over a packet buffer.
//!
//! All multi-byte integers are read in network byte order. Every read
//! advances the position by its width or fails with
//! [`DecodeError::OutOfBounds`] without moving the position.
//!
//! ```rust
//! use netgauze_flow_decoder::cursor::Cursor;
//!
//! let buf = [0x00, 0x0a, 0xc0, 0xa8, 0x00, 0x01];
//! let mut cursor = Cursor::new(&buf);
//! assert_eq!(cursor.read_uint(2), Ok(10));
//! assert_eq!(cursor.read_ipv4().as_deref(), Ok("192.168.0.1"));
//! assert_eq!(cursor.remaining(), 0);
//! ```

use byteorder::{ByteOrder, NetworkEndian};
use std::borrow::Cow;
use std::fmt::Write;
use std::net::Ipv4Addr;

use crate::error::DecodeError;

/// Length prefix value announcing that the real length follows in the next
/// two octets ([RFC7011 Section 7](https://datatracker.ietf.org/doc/html/rfc7011#section-7))
pub const VARIABLE_LENGTH_ESCAPE: u8 = 0xff;

#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    buf: &'a [u8],
    position: usize,
}

impl<'a> Cursor<'a> {
    pub const fn new(buf: &'a [u8]) -> Self {
        Self { buf, position: 0 }
    }

    /// Number of bytes consumed so far
    #[inline]
    pub const fn position(&self) -> usize {
        self.position
    }

    #[inline]
    pub const fn remaining(&self) -> usize {
        self.buf.len() - self.position
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8], DecodeError> {
        let remaining = self.remaining();
        if remaining < n {
            return Err(DecodeError::OutOfBounds {
                needed: n,
                remaining,
            });
        }
        let slice = &self.buf[self.position..self.position + n];
        self.position += n;
        Ok(slice)
    }

    pub fn read_u8(&mut self) -> Result<u8, DecodeError> {
        Ok(self.take(1)?[0])
    }

    pub fn read_u16(&mut self) -> Result<u16, DecodeError> {
        Ok(NetworkEndian::read_u16(self.take(2)?))
    }

    pub fn read_u32(&mut self) -> Result<u32, DecodeError> {
        Ok(NetworkEndian::read_u32(self.take(4)?))
    }

    pub fn read_u64(&mut self) -> Result<u64, DecodeError> {
        Ok(NetworkEndian::read_u64(self.take(8)?))
    }

    /// Read an unsigned integer of `width` bytes, the width must be in
    /// `1..=8` (reduced size encoding allows the odd widths as well).
    pub fn read_uint(&mut self, width: usize) -> Result<u64, DecodeError> {
        if width == 0 || width > 8 {
            return Err(DecodeError::InvalidIntegerWidth(width));
        }
        Ok(NetworkEndian::read_uint(self.take(width)?, width))
    }

    /// Four octets in dotted decimal notation
    pub fn read_ipv4(&mut self) -> Result<String, DecodeError> {
        Ok(Ipv4Addr::from(self.read_u32()?).to_string())
    }

    /// Eight colon separated groups of lower case hex, without zero
    /// compression
    pub fn read_ipv6(&mut self) -> Result<String, DecodeError> {
        Ok(format_ipv6(self.take(16)?))
    }

    /// Six colon separated octets as two hex digits each
    pub fn read_mac(&mut self) -> Result<String, DecodeError> {
        Ok(format_mac(self.take(6)?))
    }

    /// Read `n` bytes as text, invalid UTF-8 sequences are replaced
    pub fn read_string(&mut self, n: usize) -> Result<String, DecodeError> {
        Ok(String::from_utf8_lossy(self.take(n)?).into_owned())
    }

    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8], DecodeError> {
        self.take(n)
    }

    pub fn skip(&mut self, n: usize) -> Result<(), DecodeError> {
        self.take(n).map(|_| ())
    }

    /// Consume the next `n` bytes and return a new cursor bounded to them
    pub fn sub_cursor(&mut self, n: usize) -> Result<Cursor<'a>, DecodeError> {
        Ok(Cursor::new(self.take(n)?))
    }

    /// Read the length prefix of a variable-length encoded IPFIX value.
    ///
    /// ```text
    ///  0                   1                   2
    ///  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3
    /// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
    /// |      255      |      Length (0 to 65535)      |
    /// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
    /// ```
    pub fn read_variable_length(&mut self) -> Result<usize, DecodeError> {
        let start = self.position;
        let short = self.read_u8()?;
        if short != VARIABLE_LENGTH_ESCAPE {
            return Ok(short as usize);
        }
        match self.read_u16() {
            Ok(length) => Ok(length as usize),
            Err(err) => {
                self.position = start;
                Err(err)
            }
        }
    }
}

pub(crate) fn format_ipv6(octets: &[u8]) -> String {
    let mut out = String::with_capacity(39);
    for (i, group) in octets.chunks(2).enumerate() {
        if i > 0 {
            out.push(':');
        }
        let _ = write!(out, "{:x}", NetworkEndian::read_u16(group));
    }
    out
}

pub(crate) fn format_mac(octets: &[u8]) -> String {
    let mut out = String::with_capacity(17);
    for (i, octet) in octets.iter().enumerate() {
        if i > 0 {
            out.push(':');
        }
        let _ = write!(out, "{octet:02x}");
    }
    out
}

/// Lower case hex without separators
pub(crate) fn format_hex(octets: &[u8]) -> Cow<'static, str> {
    if octets.is_empty() {
        return Cow::Borrowed("");
    }
    let mut out = String::with_capacity(octets.len() * 2);
    for octet in octets {
        let _ = write!(out, "{octet:02x}");
    }
    Cow::Owned(out)
}
