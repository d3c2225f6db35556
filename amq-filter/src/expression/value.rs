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

use amq_common::common::message::message_property::PropertyValue;
use cheetah_string::CheetahString;

/// Runtime value domain of the selector language.
///
/// `Unknown` is the three-valued-logic null: the value of an identifier the
/// current message does not carry, and of the `NULL` literal. String values
/// own their storage; a `Value` never borrows from the environment it was
/// produced by.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Unknown,
    Bool(bool),
    Exact(u64),
    Inexact(f64),
    String(CheetahString),
}

impl Value {
    #[inline]
    pub fn is_unknown(&self) -> bool {
        matches!(self, Value::Unknown)
    }

    #[inline]
    pub fn is_numeric(&self) -> bool {
        matches!(self, Value::Exact(_) | Value::Inexact(_))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Unknown => write!(f, "NULL"),
            Value::Bool(true) => write!(f, "TRUE"),
            Value::Bool(false) => write!(f, "FALSE"),
            Value::Exact(i) => write!(f, "{}", i),
            Value::Inexact(x) => write!(f, "{}", x),
            Value::String(s) => write!(f, "'{}'", s.replace("'", "''")),
        }
    }
}

impl From<CheetahString> for Value {
    fn from(value: CheetahString) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(CheetahString::from_slice(value))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(CheetahString::from_string(value))
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Value::Exact(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Inexact(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<&PropertyValue> for Value {
    fn from(property: &PropertyValue) -> Self {
        match property {
            PropertyValue::String(s) => Value::String(s.clone()),
            PropertyValue::Exact(i) => Value::Exact(*i),
            PropertyValue::Inexact(x) => Value::Inexact(*x),
            PropertyValue::Bool(b) => Value::Bool(*b),
        }
    }
}

/// Comparison operators of the selector language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComparisonOp {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl ComparisonOp {
    /// Maps an operator lexeme to its operator, if it is one the language
    /// knows.
    pub fn from_symbol(symbol: &str) -> Option<ComparisonOp> {
        match symbol {
            "=" => Some(ComparisonOp::Eq),
            "<>" => Some(ComparisonOp::Ne),
            "<" => Some(ComparisonOp::Lt),
            "<=" => Some(ComparisonOp::Le),
            ">" => Some(ComparisonOp::Gt),
            ">=" => Some(ComparisonOp::Ge),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            ComparisonOp::Eq => "=",
            ComparisonOp::Ne => "<>",
            ComparisonOp::Lt => "<",
            ComparisonOp::Le => "<=",
            ComparisonOp::Gt => ">",
            ComparisonOp::Ge => ">=",
        }
    }

}

impl fmt::Display for ComparisonOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Applies a comparison operator to two values.
///
/// This is the single place where three-valued logic collapses to two
/// values: any comparison involving `Unknown` is `false`, as is any
/// comparison between incompatible domains. Mixed exact/inexact numerics
/// are promoted to the inexact domain before comparing.
pub fn compare(op: ComparisonOp, lhs: &Value, rhs: &Value) -> bool {
    match (lhs, rhs) {
        (Value::Unknown, _) | (_, Value::Unknown) => false,
        (Value::Exact(l), Value::Exact(r)) => compare_ord(op, l, r),
        (Value::Inexact(l), Value::Inexact(r)) => compare_inexact(op, *l, *r),
        (Value::Exact(l), Value::Inexact(r)) => compare_inexact(op, *l as f64, *r),
        (Value::Inexact(l), Value::Exact(r)) => compare_inexact(op, *l, *r as f64),
        (Value::Bool(l), Value::Bool(r)) => match op {
            ComparisonOp::Eq => l == r,
            ComparisonOp::Ne => l != r,
            _ => false,
        },
        (Value::String(l), Value::String(r)) => match op {
            ComparisonOp::Eq => l == r,
            ComparisonOp::Ne => l != r,
            _ => false,
        },
        // Remaining pairs mix domains with no promotion between them.
        _ => false,
    }
}

fn compare_ord<T: PartialOrd>(op: ComparisonOp, lhs: &T, rhs: &T) -> bool {
    match op {
        ComparisonOp::Eq => lhs == rhs,
        ComparisonOp::Ne => lhs != rhs,
        ComparisonOp::Lt => lhs < rhs,
        ComparisonOp::Le => lhs <= rhs,
        ComparisonOp::Gt => lhs > rhs,
        ComparisonOp::Ge => lhs >= rhs,
    }
}

fn compare_inexact(op: ComparisonOp, lhs: f64, rhs: f64) -> bool {
    compare_ord(op, &lhs, &rhs)
}
