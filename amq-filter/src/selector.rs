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

//! Compiled message selectors.
//!
//! A [`Selector`] is compiled once from its source string and evaluated
//! many times, typically once per message offered to a subscription. The
//! compiled form is immutable and can be shared across threads.

pub mod parse;
pub mod token;

use amq_common::common::message::Message;
use amq_error::SelectorResult;
use cheetah_string::CheetahString;

use crate::expression::bool_expression::BoolExpr;
use crate::expression::bool_expression::BooleanExpression;
use crate::expression::selector_env::MessageSelectorEnv;
use crate::expression::selector_env::SelectorEnv;

/// A compiled selector: the original source (retained for diagnostics)
/// and the root of its expression tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Selector {
    source: CheetahString,
    root: BoolExpr,
}

impl Selector {
    /// Compiles a selector from its source string.
    ///
    /// Tokenises and parses eagerly; the returned selector never fails at
    /// evaluation time.
    pub fn compile(source: impl Into<CheetahString>) -> SelectorResult<Selector> {
        let source = source.into();
        let root = parse::parse(source.as_str())?;
        tracing::debug!(selector = %source, "compiled message selector");
        Ok(Selector { source, root })
    }

    /// Compiles a selector, treating an empty source as "no selector".
    ///
    /// A subscription declared without a selector filters nothing, so an
    /// empty source yields `None` rather than a selector that has to be
    /// special-cased by the caller.
    pub fn compile_or_none(source: impl Into<CheetahString>) -> SelectorResult<Option<Selector>> {
        let source = source.into();
        if source.is_empty() {
            return Ok(None);
        }
        Self::compile(source).map(Some)
    }

    /// Evaluates the selector against an environment. Infallible: absent
    /// properties and domain mismatches simply fail to match.
    #[inline]
    pub fn eval(&self, env: &dyn SelectorEnv) -> bool {
        self.root.eval(env)
    }

    /// Decides whether a message matches this selector, evaluating over
    /// the message's application properties.
    #[inline]
    pub fn filter(&self, message: &Message) -> bool {
        self.eval(&MessageSelectorEnv::new(message))
    }

    /// The selector source this selector was compiled from.
    #[inline]
    pub fn source(&self) -> &str {
        self.source.as_str()
    }

    /// The root of the compiled expression tree.
    #[inline]
    pub fn expression(&self) -> &BoolExpr {
        &self.root
    }
}

impl BooleanExpression for Selector {
    #[inline]
    fn matches(&self, env: &dyn SelectorEnv) -> bool {
        self.eval(env)
    }
}

impl std::fmt::Display for Selector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.source)
    }
}
