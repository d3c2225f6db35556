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

use std::collections::HashMap;

use ahash::RandomState;
use amq_common::common::message::Message;
use cheetah_string::CheetahString;

use crate::expression::value::Value;

/// The evaluator's window onto the message being filtered.
///
/// An environment reports whether the current message carries a named
/// property and, if so, yields its typed value. `value` must also be safe
/// to call for an absent name, in which case it returns
/// [`Value::Unknown`]; the evaluator itself only calls `value` after
/// `present` returned `true` for the same name.
///
/// The identifier set an environment exposes may change between
/// evaluations; a single evaluation must see a consistent snapshot, which
/// is the caller's responsibility.
pub trait SelectorEnv {
    /// Reports whether the named property is carried by the current
    /// message.
    fn present(&self, name: &str) -> bool;

    /// Returns the typed value of the named property, or
    /// [`Value::Unknown`] when absent.
    fn value(&self, name: &str) -> Value;
}

/// Map-backed environment for hosts that assemble properties directly.
#[derive(Debug, Clone, Default)]
pub struct PropertySelectorEnv {
    properties: HashMap<CheetahString, Value, RandomState>,
}

impl PropertySelectorEnv {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a property, returning the previous value if the name was
    /// already bound.
    #[inline]
    pub fn put(&mut self, name: impl Into<CheetahString>, value: impl Into<Value>) -> Option<Value> {
        self.properties.insert(name.into(), value.into())
    }

    #[inline]
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.properties.remove(name)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&CheetahString, &Value)> {
        self.properties.iter()
    }
}

impl SelectorEnv for PropertySelectorEnv {
    fn present(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    fn value(&self, name: &str) -> Value {
        self.properties.get(name).cloned().unwrap_or(Value::Unknown)
    }
}

/// Environment backed by a message's application properties.
///
/// Borrows the message for the duration of one evaluation; property values
/// are converted to the selector value domain on access.
pub struct MessageSelectorEnv<'a> {
    message: &'a Message,
}

impl<'a> MessageSelectorEnv<'a> {
    #[inline]
    pub fn new(message: &'a Message) -> Self {
        Self { message }
    }
}

impl SelectorEnv for MessageSelectorEnv<'_> {
    fn present(&self, name: &str) -> bool {
        self.message.contains_property(name)
    }

    fn value(&self, name: &str) -> Value {
        self.message.property(name).map(Value::from).unwrap_or(Value::Unknown)
    }
}
