// Copyright 2023 The AMQ Rust Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

pub mod message_property;

use std::collections::HashMap;

use ahash::RandomState;
use bytes::Bytes;
use cheetah_string::CheetahString;

use crate::common::message::message_property::PropertyValue;

/// A broker-side message: an opaque body plus the application properties
/// that subscription selectors are evaluated against.
///
/// Properties are typed; a selector comparing `priority > 4` sees the
/// numeric value a producer set, not its string rendition.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Message {
    properties: HashMap<CheetahString, PropertyValue, RandomState>,
    body: Bytes,
}

impl Message {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a message with the given body and no properties.
    pub fn with_body(body: impl Into<Bytes>) -> Self {
        Self {
            properties: HashMap::with_hasher(RandomState::default()),
            body: body.into(),
        }
    }

    /// Sets an application property, returning the previous value if the
    /// key was already present.
    #[inline]
    pub fn put_property(
        &mut self,
        key: impl Into<CheetahString>,
        value: impl Into<PropertyValue>,
    ) -> Option<PropertyValue> {
        self.properties.insert(key.into(), value.into())
    }

    #[inline]
    pub fn property(&self, name: &str) -> Option<&PropertyValue> {
        self.properties.get(name)
    }

    #[inline]
    pub fn contains_property(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    #[inline]
    pub fn remove_property(&mut self, name: &str) -> Option<PropertyValue> {
        self.properties.remove(name)
    }

    #[inline]
    pub fn properties(&self) -> impl Iterator<Item = (&CheetahString, &PropertyValue)> {
        self.properties.iter()
    }

    #[inline]
    pub fn property_count(&self) -> usize {
        self.properties.len()
    }

    #[inline]
    pub fn body(&self) -> &Bytes {
        &self.body
    }

    #[inline]
    pub fn set_body(&mut self, body: impl Into<Bytes>) {
        self.body = body.into();
    }
}
