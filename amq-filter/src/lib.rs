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

//! Message selector engine for the AMQ Rust broker.
//!
//! A selector is a JMS-style boolean filter expression over message
//! properties, compiled once per subscription and evaluated against each
//! candidate message:
//!
//! ```
//! use amq_common::common::message::Message;
//! use amq_filter::selector::Selector;
//!
//! let selector = Selector::compile("price > 100 AND region = 'us-west'")?;
//!
//! let mut message = Message::new();
//! message.put_property("price", 250u64);
//! message.put_property("region", "us-west");
//!
//! assert!(selector.filter(&message));
//! # Ok::<(), amq_error::SelectorError>(())
//! ```
//!
//! The language has SQL-like three-valued logic: a property the message
//! does not carry evaluates to an unknown value, every comparison against
//! an unknown is `false`, and `IS [NOT] NULL` tests for absence. Numeric
//! comparisons promote mixed exact/inexact operands to the inexact domain.
//! All errors are reported at compile time; evaluation is infallible and
//! allocation-free.

pub mod expression;
pub mod filter;
pub mod selector;
