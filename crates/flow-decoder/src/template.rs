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

//! Templates learned from NetFlow v9 and IPFIX exporters.
//!
//! A template is immutable once stored. A re-advertisement for the same
//! [`TemplateKey`] replaces the stored [`Arc<Template>`] as a whole, readers
//! holding the previous definition keep decoding with it.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

/// Field length announcing a variable-length encoded IPFIX field
pub const VARIABLE_LENGTH: u16 = 0xffff;

/// One field of a template.
///
/// ```text
///  0                   1                   2                   3
///  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |E|  Information Element ident. |        Field Length           |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                      Enterprise Number                        |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// ```
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct FieldSpec {
    element_id: u16,
    length: u16,
    enterprise_number: Option<u32>,
    is_scope: bool,
}

impl FieldSpec {
    pub const fn new(
        element_id: u16,
        length: u16,
        enterprise_number: Option<u32>,
        is_scope: bool,
    ) -> Self {
        Self {
            element_id,
            length,
            enterprise_number,
            is_scope,
        }
    }

    /// Information element id with the enterprise bit cleared
    pub const fn element_id(&self) -> u16 {
        self.element_id
    }

    pub const fn length(&self) -> u16 {
        self.length
    }

    pub const fn enterprise_number(&self) -> Option<u32> {
        self.enterprise_number
    }

    pub const fn is_scope(&self) -> bool {
        self.is_scope
    }

    pub const fn is_variable_length(&self) -> bool {
        self.length == VARIABLE_LENGTH
    }
}

/// Ordered list of [`FieldSpec`], the order is the on-wire order of the
/// fields in a data record.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Template {
    fields: Box<[FieldSpec]>,
}

impl Template {
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        Self {
            fields: fields.into_boxed_slice(),
        }
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn has_scope_fields(&self) -> bool {
        self.fields.iter().any(FieldSpec::is_scope)
    }

    /// Sum of the declared field lengths, variable-length fields count as
    /// zero.
    pub fn record_length(&self) -> usize {
        self.fields
            .iter()
            .filter(|field| !field.is_variable_length())
            .map(|field| field.length as usize)
            .sum()
    }

    /// Smallest number of bytes a record can take on the wire. A
    /// variable-length field needs at least its one byte length prefix.
    pub fn min_record_length(&self) -> usize {
        self.fields
            .iter()
            .map(|field| {
                if field.is_variable_length() {
                    1
                } else {
                    field.length as usize
                }
            })
            .sum()
    }
}

/// Identifies one flow export session.
///
/// NetFlow v9 scopes templates by source id alone, so the exporter address is
/// `None` there. IPFIX scopes them by observation domain and exporter.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct ExporterKey {
    source_id: u32,
    exporter: Option<String>,
}

impl ExporterKey {
    pub const fn new(source_id: u32, exporter: Option<String>) -> Self {
        Self {
            source_id,
            exporter,
        }
    }

    pub const fn source_id(&self) -> u32 {
        self.source_id
    }

    pub fn exporter(&self) -> Option<&str> {
        self.exporter.as_deref()
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct TemplateKey {
    exporter: ExporterKey,
    template_id: u16,
}

impl TemplateKey {
    pub const fn new(exporter: ExporterKey, template_id: u16) -> Self {
        Self {
            exporter,
            template_id,
        }
    }

    pub const fn exporter(&self) -> &ExporterKey {
        &self.exporter
    }

    pub const fn template_id(&self) -> u16 {
        self.template_id
    }
}

impl std::fmt::Display for TemplateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.exporter.exporter() {
            Some(exporter) => write!(
                f,
                "{exporter}/{}/{}",
                self.exporter.source_id, self.template_id
            ),
            None => write!(f, "{}/{}", self.exporter.source_id, self.template_id),
        }
    }
}

/// Concurrent map of [`TemplateKey`] to [`Template`].
///
/// A `put` is visible to every `get` issued after it returns. A panicking
/// writer cannot leave a half written entry behind, so a poisoned lock is
/// recovered rather than propagated.
#[derive(Debug, Default)]
pub struct TemplateStore {
    templates: RwLock<HashMap<TemplateKey, Arc<Template>>>,
}

impl TemplateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &TemplateKey) -> Option<Arc<Template>> {
        self.templates
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    /// Store a template, returning the definition it replaced
    pub fn put(&self, key: TemplateKey, template: Template) -> Option<Arc<Template>> {
        self.templates
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key, Arc::new(template))
    }

    pub fn contains(&self, key: &TemplateKey) -> bool {
        self.templates
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(key)
    }

    pub fn remove(&self, key: &TemplateKey) -> Option<Arc<Template>> {
        self.templates
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key)
    }

    /// Drop every template learned from `exporter`, returns how many were
    /// removed.
    pub fn remove_exporter(&self, exporter: &ExporterKey) -> usize {
        let mut templates = self
            .templates
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let before = templates.len();
        templates.retain(|key, _| key.exporter() != exporter);
        before - templates.len()
    }

    pub fn len(&self) -> usize {
        self.templates
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
