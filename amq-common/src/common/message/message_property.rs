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

use std::fmt;

use cheetah_string::CheetahString;

/// A typed application property carried by a [`Message`].
///
/// Producers set properties in one of four domains: character strings,
/// unsigned 64-bit integers (exact numerics), 64-bit floats (inexact
/// numerics), and booleans.
///
/// [`Message`]: crate::common::message::Message
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum PropertyValue {
    String(CheetahString),
    Exact(u64),
    Inexact(f64),
    Bool(bool),
}

impl PropertyValue {
    /// Returns the string content when this property is a string.
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyValue::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    #[inline]
    pub fn is_numeric(&self) -> bool {
        matches!(self, PropertyValue::Exact(_) | PropertyValue::Inexact(_))
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::String(s) => write!(f, "{}", s),
            PropertyValue::Exact(i) => write!(f, "{}", i),
            PropertyValue::Inexact(x) => write!(f, "{}", x),
            PropertyValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<CheetahString> for PropertyValue {
    fn from(value: CheetahString) -> Self {
        PropertyValue::String(value)
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::String(CheetahString::from_slice(value))
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::String(CheetahString::from_string(value))
    }
}

impl From<u64> for PropertyValue {
    fn from(value: u64) -> Self {
        PropertyValue::Exact(value)
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        PropertyValue::Inexact(value)
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        PropertyValue::Bool(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_conversions() {
        assert_eq!(
            PropertyValue::from("abc"),
            PropertyValue::String(CheetahString::from_static_str("abc"))
        );
        assert_eq!(PropertyValue::from(7u64), PropertyValue::Exact(7));
        assert_eq!(PropertyValue::from(2.5f64), PropertyValue::Inexact(2.5));
        assert_eq!(PropertyValue::from(true), PropertyValue::Bool(true));
    }

    #[test]
    fn test_as_str() {
        assert_eq!(PropertyValue::from("abc").as_str(), Some("abc"));
        assert_eq!(PropertyValue::Exact(1).as_str(), None);
    }

    #[test]
    fn test_is_numeric() {
        assert!(PropertyValue::Exact(1).is_numeric());
        assert!(PropertyValue::Inexact(1.0).is_numeric());
        assert!(!PropertyValue::Bool(false).is_numeric());
        assert!(!PropertyValue::from("1").is_numeric());
    }

    #[test]
    fn test_display_renders_plain_values() {
        assert_eq!(PropertyValue::from("hello").to_string(), "hello");
        assert_eq!(PropertyValue::Exact(42).to_string(), "42");
        assert_eq!(PropertyValue::Inexact(3.25).to_string(), "3.25");
        assert_eq!(PropertyValue::Bool(false).to_string(), "false");
    }

    #[test]
    fn test_serde_round_trip() {
        let value = PropertyValue::Exact(42);
        let json = serde_json::to_string(&value).unwrap();
        let decoded: PropertyValue = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, value);
    }
}
