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

//! IPFIX decoding as defined by
//! [RFC7011](https://datatracker.ietf.org/doc/html/rfc7011).
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |       Version Number          |            Length             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                           Export Time                         |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                       Sequence Number                         |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                    Observation Domain ID                      |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! Templates are scoped by observation domain and exporter address. Data
//! sets referring to an unknown template are buffered in the decoder's
//! [`crate::pending::PendingRecordBuffer`].

use std::sync::Arc;

use bytes::Bytes;
use tracing::{debug, trace, warn};

use crate::cursor::Cursor;
use crate::error::DecodeError;
use crate::ie;
use crate::record::{
    options_full_text, Attribute, CountingSink, HeaderAttributes, Record, RecordSink,
    DATA_RECORD_FULL_TEXT,
};
use crate::template::{ExporterKey, FieldSpec, Template, TemplateKey, TemplateStore};
use crate::FlowDecoder;

pub const IPFIX_VERSION: u16 = 10;
pub const IPFIX_HEADER_LENGTH: usize = 16;
pub const IPFIX_TEMPLATE_SET_ID: u16 = 2;
pub const IPFIX_OPTIONS_TEMPLATE_SET_ID: u16 = 3;
pub const SET_HEADER_LENGTH: usize = 4;

/// Bit marking an enterprise-specific information element
const ENTERPRISE_BIT: u16 = 0x8000;

fn read_header(cursor: &mut Cursor<'_>) -> Result<(HeaderAttributes, u16, u32), DecodeError> {
    let version = cursor.read_u16()?;
    let length = cursor.read_u16()?;
    let export_time = cursor.read_u32()?;
    let sequence_number = cursor.read_u32()?;
    let observation_domain_id = cursor.read_u32()?;

    let mut header = HeaderAttributes::new(export_time as u64 * 1000);
    header.push("version", version);
    header.push("length", length);
    header.push("export_time", export_time);
    header.push("sequence_number", sequence_number);
    header.push("observation_domain_id", observation_domain_id);
    Ok((header, length, observation_domain_id))
}

pub(crate) fn decode(
    buf: &[u8],
    decoder: &FlowDecoder,
    exporter: &str,
    sink: &CountingSink<'_>,
) -> Result<(), DecodeError> {
    let mut cursor = Cursor::new(buf);
    let (header, length, observation_domain_id) = read_header(&mut cursor)?;
    if (length as usize) < IPFIX_HEADER_LENGTH {
        return Err(DecodeError::InvalidMessageLength(length));
    }
    let body_length = length as usize - IPFIX_HEADER_LENGTH;
    if body_length > cursor.remaining() {
        return Err(DecodeError::TruncatedPacket {
            declared: body_length,
            available: cursor.remaining(),
        });
    }
    // Anything after the declared message length is not part of the message
    let mut cursor = cursor.sub_cursor(body_length)?;
    let header = Arc::new(header);
    let exporter_key = ExporterKey::new(observation_domain_id, Some(exporter.to_string()));

    while cursor.remaining() >= SET_HEADER_LENGTH {
        let set_id = cursor.read_u16()?;
        let length = cursor.read_u16()?;
        if (length as usize) < SET_HEADER_LENGTH {
            return Err(DecodeError::InvalidSetLength(length));
        }
        let set_length = length as usize - SET_HEADER_LENGTH;
        if set_length > cursor.remaining() {
            return Err(DecodeError::TruncatedPacket {
                declared: set_length,
                available: cursor.remaining(),
            });
        }
        let mut body = cursor.sub_cursor(set_length)?;
        let result = match set_id {
            IPFIX_TEMPLATE_SET_ID => read_templates(
                &mut body,
                &exporter_key,
                decoder.ipfix_templates(),
                decoder.ipfix_options_templates(),
            )
            .map(|_| 0),
            IPFIX_OPTIONS_TEMPLATE_SET_ID => read_options_templates(
                &mut body,
                &exporter_key,
                decoder.ipfix_options_templates(),
                decoder.ipfix_templates(),
            )
            .map(|_| 0),
            0..=255 => {
                debug!(set_id, exporter, "skipping reserved set");
                Ok(0)
            }
            template_id => {
                let key = TemplateKey::new(exporter_key.clone(), template_id);
                match find_template(decoder, &key) {
                    Some(template) => decode_data_set(&template, &mut body, &header, sink),
                    None => {
                        buffer_set(decoder, key, body.read_bytes(set_length)?, &header);
                        Ok(0)
                    }
                }
            }
        };
        if let Err(err) = result {
            warn!(set_id, exporter, observation_domain_id, error = %err, "failed to decode ipfix set");
        }
    }
    Ok(())
}

fn find_template(decoder: &FlowDecoder, key: &TemplateKey) -> Option<Arc<Template>> {
    decoder
        .ipfix_templates()
        .get(key)
        .or_else(|| decoder.ipfix_options_templates().get(key))
}

/// Read one field specifier, the enterprise number sits between the element
/// id and the length when the enterprise bit of the element id is set.
fn read_field(body: &mut Cursor<'_>, is_scope: bool) -> Result<FieldSpec, DecodeError> {
    let raw_id = body.read_u16()?;
    let enterprise_number = if raw_id & ENTERPRISE_BIT != 0 {
        Some(body.read_u32()?)
    } else {
        None
    };
    let length = body.read_u16()?;
    Ok(FieldSpec::new(
        raw_id & !ENTERPRISE_BIT,
        length,
        enterprise_number,
        is_scope,
    ))
}

fn without_empty_fields(mut fields: Vec<FieldSpec>, template_id: u16) -> Vec<FieldSpec> {
    fields.retain(|field| {
        if field.length() == 0 {
            warn!(
                template_id,
                element_id = field.element_id(),
                "skipping zero length template field"
            );
            return false;
        }
        true
    });
    fields
}

/// Remove a single template, or every template of the exporter when the
/// template id equals the set id.
fn withdraw(store: &TemplateStore, exporter: &ExporterKey, template_id: u16, set_id: u16) {
    if template_id == set_id {
        let removed = store.remove_exporter(exporter);
        debug!(
            source_id = exporter.source_id(),
            removed, "all templates withdrawn"
        );
    } else {
        store.remove(&TemplateKey::new(exporter.clone(), template_id));
        debug!(
            source_id = exporter.source_id(),
            template_id, "template withdrawn"
        );
    }
}

/// Template and options template ids share one namespace, storing a
/// definition in one store removes a stale one with the same id from the
/// other.
fn store_template(
    store: &TemplateStore,
    other: &TemplateStore,
    key: TemplateKey,
    template: Template,
) {
    other.remove(&key);
    store.put(key, template);
}

fn read_templates(
    body: &mut Cursor<'_>,
    exporter: &ExporterKey,
    store: &TemplateStore,
    other: &TemplateStore,
) -> Result<usize, DecodeError> {
    let mut templates = 0;
    while body.remaining() >= 4 {
        let template_id = body.read_u16()?;
        let field_count = body.read_u16()?;
        if field_count == 0 {
            withdraw(store, exporter, template_id, IPFIX_TEMPLATE_SET_ID);
            continue;
        }
        if template_id < 256 {
            return Err(DecodeError::InvalidTemplateId(template_id));
        }
        let fields = (0..field_count)
            .map(|_| read_field(body, false))
            .collect::<Result<Vec<_>, _>>()?;
        let fields = without_empty_fields(fields, template_id);
        trace!(
            source_id = exporter.source_id(),
            template_id,
            field_count,
            "learned ipfix template"
        );
        store_template(
            store,
            other,
            TemplateKey::new(exporter.clone(), template_id),
            Template::new(fields),
        );
        templates += 1;
    }
    Ok(templates)
}

fn read_options_templates(
    body: &mut Cursor<'_>,
    exporter: &ExporterKey,
    store: &TemplateStore,
    other: &TemplateStore,
) -> Result<usize, DecodeError> {
    let mut templates = 0;
    while body.remaining() >= 4 {
        let template_id = body.read_u16()?;
        let field_count = body.read_u16()?;
        if field_count == 0 {
            withdraw(store, exporter, template_id, IPFIX_OPTIONS_TEMPLATE_SET_ID);
            continue;
        }
        if template_id < 256 {
            return Err(DecodeError::InvalidTemplateId(template_id));
        }
        let scope_count = body.read_u16()?;
        if scope_count == 0 || scope_count > field_count {
            return Err(DecodeError::InvalidScopeFieldsCount {
                scope: scope_count,
                total: field_count,
            });
        }
        let fields = (0..field_count)
            .map(|index| read_field(body, index < scope_count))
            .collect::<Result<Vec<_>, _>>()?;
        let fields = without_empty_fields(fields, template_id);
        trace!(
            source_id = exporter.source_id(),
            template_id,
            field_count,
            scope_count,
            "learned ipfix options template"
        );
        store_template(
            store,
            other,
            TemplateKey::new(exporter.clone(), template_id),
            Template::new(fields),
        );
        templates += 1;
    }
    Ok(templates)
}

fn buffer_set(
    decoder: &FlowDecoder,
    key: TemplateKey,
    body: &[u8],
    header: &Arc<HeaderAttributes>,
) {
    let bytes = Bytes::copy_from_slice(body);
    let templates = Arc::clone(decoder.ipfix_templates());
    let options_templates = Arc::clone(decoder.ipfix_options_templates());
    let sink: Arc<dyn RecordSink> = Arc::clone(decoder.sink());
    let header = Arc::clone(header);
    let lookup = key.clone();
    decoder.pending().put(
        key,
        Box::new(move || {
            let template = templates
                .get(&lookup)
                .or_else(|| options_templates.get(&lookup))
                .ok_or(DecodeError::NoTemplateDefinedFor(lookup.template_id()))?;
            let counting = CountingSink::new(&sink);
            decode_data_set(&template, &mut Cursor::new(&bytes), &header, &counting)
        }),
    );
}

fn read_record(
    template: &Template,
    body: &mut Cursor<'_>,
) -> Result<(Vec<Attribute>, usize), DecodeError> {
    let mut fields: Vec<Attribute> = Vec::with_capacity(template.fields().len());
    let mut scope_count = 0;
    for field in template.fields() {
        let length = if field.is_variable_length() {
            body.read_variable_length()?
        } else {
            field.length() as usize
        };
        let value = body.read_bytes(length)?;
        fields.push(ie::decode_field(
            field.element_id(),
            field.enterprise_number(),
            value,
        )?);
        if field.is_scope() {
            scope_count += 1;
        }
    }
    Ok((fields, scope_count))
}

/// Decode records until what is left of the set is too short to hold one,
/// the rest is padding.
pub(crate) fn decode_data_set(
    template: &Template,
    body: &mut Cursor<'_>,
    header: &HeaderAttributes,
    sink: &CountingSink<'_>,
) -> Result<usize, DecodeError> {
    if template.fields().is_empty() {
        return Ok(0);
    }
    let min_length = template.min_record_length().max(1);
    let options = template.has_scope_fields();
    let mut records = 0;
    while body.remaining() >= min_length {
        let (fields, scope_count) = read_record(template, body)?;
        let record = if options {
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
