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

//! NetFlow v5 has a fixed layout, every packet is a 24 byte header followed
//! by `count` flow records of 48 bytes each.
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |       Version Number          |            Count              |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                           sysUptime                           |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                           unix_secs                           |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                          unix_nsecs                           |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                         flow_sequence                         |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |  engine_type  |   engine_id   |Mod|      sampling_interval    |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```

use tracing::trace;

use crate::cursor::Cursor;
use crate::error::DecodeError;
use crate::record::{Attribute, CountingSink, HeaderAttributes, Record, DATA_RECORD_FULL_TEXT};

pub const NETFLOW_V5_VERSION: u16 = 5;
pub const HEADER_LENGTH: usize = 24;
pub const RECORD_LENGTH: usize = 48;

const SAMPLING_INTERVAL_MASK: u16 = 0x3fff;

fn attr(name: &'static str, value: impl ToString) -> Attribute {
    (name.into(), value.to_string())
}

fn read_header(cursor: &mut Cursor<'_>) -> Result<(HeaderAttributes, u16), DecodeError> {
    let version = cursor.read_u16()?;
    let count = cursor.read_u16()?;
    let sys_uptime = cursor.read_u32()?;
    let unix_secs = cursor.read_u32()?;
    let unix_nsecs = cursor.read_u32()?;
    let flow_sequence = cursor.read_u32()?;
    let engine_type = cursor.read_u8()?;
    let engine_id = cursor.read_u8()?;
    let sampling = cursor.read_u16()?;

    let mut header = HeaderAttributes::new(unix_secs as u64 * 1000);
    header.push("version", version);
    header.push("count", count);
    header.push("sys_uptime", sys_uptime);
    header.push("unix_secs", unix_secs);
    header.push("unix_nsecs", unix_nsecs);
    header.push("flow_sequence", flow_sequence);
    header.push("engine_type", engine_type);
    header.push("engine_id", engine_id);
    header.push("sampling_interval", sampling & SAMPLING_INTERVAL_MASK);
    Ok((header, count))
}

fn read_flow(cursor: &mut Cursor<'_>) -> Result<Vec<Attribute>, DecodeError> {
    let mut fields = Vec::with_capacity(19);
    fields.push(attr("srcaddr", cursor.read_ipv4()?));
    fields.push(attr("dstaddr", cursor.read_ipv4()?));
    fields.push(attr("nexthop", cursor.read_ipv4()?));
    fields.push(attr("input", cursor.read_u16()?));
    fields.push(attr("output", cursor.read_u16()?));
    fields.push(attr("dPkts", cursor.read_u32()?));
    fields.push(attr("dOctets", cursor.read_u32()?));
    let first = cursor.read_u32()?;
    let last = cursor.read_u32()?;
    fields.push(attr("first", first));
    fields.push(attr("last", last));
    fields.push(attr("srcport", cursor.read_u16()?));
    fields.push(attr("dstport", cursor.read_u16()?));
    cursor.skip(1)?;
    fields.push(attr("tcp_flags", cursor.read_u8()?));
    fields.push(attr("prot", cursor.read_u8()?));
    fields.push(attr("tos", cursor.read_u8()?));
    fields.push(attr("src_as", cursor.read_u16()?));
    fields.push(attr("dst_as", cursor.read_u16()?));
    fields.push(attr("src_mask", cursor.read_u8()?));
    fields.push(attr("dst_mask", cursor.read_u8()?));
    // sysUptime is a wrapping millisecond counter
    fields.push(attr("flow_duration", last.wrapping_sub(first)));
    Ok(fields)
}

/// Decode a NetFlow v5 packet, emitting one record per flow.
///
/// Each flow is read from its own 48 byte window, so trailing vendor padding
/// inside a record never shifts the following records.
pub(crate) fn decode(buf: &[u8], sink: &CountingSink<'_>) -> Result<(), DecodeError> {
    let mut cursor = Cursor::new(buf);
    let (header, count) = read_header(&mut cursor)?;
    trace!(count, "decoding netflow v5 packet");
    for _ in 0..count {
        let mut flow = cursor.sub_cursor(RECORD_LENGTH)?;
        let fields = read_flow(&mut flow)?;
        sink.emit(Record::new(&header, fields, DATA_RECORD_FULL_TEXT));
    }
    Ok(())
}
