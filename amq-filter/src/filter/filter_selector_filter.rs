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

use amq_common::common::filter::expression_type::ExpressionType;
use amq_error::SelectorResult;

use crate::filter::filter_spi::Filter;
use crate::selector::Selector;

/// JMS-style property selector filter.
///
/// Compiles boolean expressions over message properties, e.g.
/// `price > 100 AND region = 'us-west'`. Stateless; a single instance can
/// serve every subscription in the broker.
#[derive(Debug, Clone, Default)]
pub struct SelectorFilter;

impl SelectorFilter {
    pub fn new() -> Self {
        Self
    }
}

impl Filter for SelectorFilter {
    fn compile(&self, expr: &str) -> SelectorResult<Selector> {
        Selector::compile(expr)
    }

    fn of_type(&self) -> &str {
        ExpressionType::SELECTOR
    }
}
