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

//! Pluggable subscription filter architecture.
//!
//! Three pieces:
//!
//! 1. the [`Filter`] trait, the SPI every filter implementation provides;
//! 2. the [`FilterFactory`], a registry mapping expression type
//!    identifiers to implementations;
//! 3. the [`SelectorFilter`], the JMS-style property selector registered
//!    by default under [`ExpressionType::SELECTOR`].
//!
//! Filters compile an expression string once into a [`Selector`] that is
//! then evaluated per message.
//!
//! [`ExpressionType::SELECTOR`]:
//! amq_common::common::filter::expression_type::ExpressionType::SELECTOR
//! [`Selector`]: crate::selector::Selector

mod filter_factory;
mod filter_selector_filter;
mod filter_spi;

pub use filter_factory::FilterFactory;
pub use filter_selector_filter::SelectorFilter;
pub use filter_spi::Filter;
