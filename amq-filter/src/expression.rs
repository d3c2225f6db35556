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

//! Expression model of the selector engine: the runtime value domain, the
//! compiled expression tree with its evaluator, and the environment trait
//! through which identifiers are resolved against message properties.

pub mod bool_expression;
pub mod selector_env;
pub mod value;

pub use bool_expression::BoolExpr;
pub use bool_expression::BooleanExpression;
pub use bool_expression::UnaryPredicate;
pub use bool_expression::ValueExpr;
pub use selector_env::MessageSelectorEnv;
pub use selector_env::PropertySelectorEnv;
pub use selector_env::SelectorEnv;
pub use value::compare;
pub use value::ComparisonOp;
pub use value::Value;
