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

use amq_error::SelectorResult;

use crate::selector::Selector;

/// Service provider interface for subscription filter implementations.
///
/// Each filter type compiles expression strings into reusable
/// [`Selector`]s and identifies itself through a unique type identifier
/// used for registration and lookup in the factory. Implementations are
/// `Send + Sync`; instances are typically wrapped in `Arc` and shared
/// across broker threads.
pub trait Filter: Send + Sync + fmt::Debug {
    /// Compiles an expression string into an executable selector.
    ///
    /// # Errors
    ///
    /// Returns a [`SelectorError`](amq_error::SelectorError) when the
    /// expression does not lex or parse.
    fn compile(&self, expr: &str) -> SelectorResult<Selector>;

    /// Returns the unique expression type identifier for this filter.
    fn of_type(&self) -> &str;
}
