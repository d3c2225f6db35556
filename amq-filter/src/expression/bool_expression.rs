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

use crate::expression::selector_env::SelectorEnv;
use crate::expression::value::compare;
use crate::expression::value::ComparisonOp;
use crate::expression::value::Value;

/// Trait for boolean expressions evaluated against a selector environment.
///
/// Evaluation is deterministic, never panics, and collapses every edge
/// case (absent property, domain mismatch) to `false`. Implementations are
/// `Send + Sync` so compiled expressions can be shared across broker
/// threads behind `Arc`.
pub trait BooleanExpression: Send + Sync {
    /// Evaluates the expression against the provided environment.
    fn matches(&self, env: &dyn SelectorEnv) -> bool;
}

/// A value-producing node of a compiled selector.
#[derive(Debug, Clone, PartialEq)]
pub enum ValueExpr {
    Literal(Value),
    Identifier(CheetahString),
}

impl ValueExpr {
    /// Evaluates this node to a [`Value`].
    ///
    /// An identifier the environment does not carry evaluates to
    /// [`Value::Unknown`]; the environment is consulted only when this
    /// node is actually visited.
    pub fn eval(&self, env: &dyn SelectorEnv) -> Value {
        match self {
            ValueExpr::Literal(value) => value.clone(),
            ValueExpr::Identifier(name) => {
                if env.present(name) {
                    env.value(name)
                } else {
                    Value::Unknown
                }
            }
        }
    }
}

impl fmt::Display for ValueExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueExpr::Literal(value) => write!(f, "{}", value),
            ValueExpr::Identifier(name) => write!(f, "{}", name),
        }
    }
}

/// The two unary predicates of the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryPredicate {
    IsNull,
    IsNotNull,
}

/// A boolean node of a compiled selector.
///
/// The tree is built once by the parser and never mutated; evaluation is a
/// post-order walk that allocates nothing.
#[derive(Debug, Clone, PartialEq)]
pub enum BoolExpr {
    Comparison {
        op: ComparisonOp,
        lhs: ValueExpr,
        rhs: ValueExpr,
    },
    Predicate {
        op: UnaryPredicate,
        operand: ValueExpr,
    },
    Not(Box<BoolExpr>),
    And(Box<BoolExpr>, Box<BoolExpr>),
    Or(Box<BoolExpr>, Box<BoolExpr>),
}

impl BoolExpr {
    /// Evaluates this subtree against the environment.
    ///
    /// `And` and `Or` short-circuit: the right operand is not visited (and
    /// its identifiers perform no environment lookups) when the left
    /// operand already decides the result. A comparison whose left operand
    /// is `Unknown` is `false` without evaluating the right operand.
    pub fn eval(&self, env: &dyn SelectorEnv) -> bool {
        match self {
            BoolExpr::Comparison { op, lhs, rhs } => {
                let left = lhs.eval(env);
                if left.is_unknown() {
                    return false;
                }
                compare(*op, &left, &rhs.eval(env))
            }
            BoolExpr::Predicate { op, operand } => match op {
                UnaryPredicate::IsNull => operand.eval(env).is_unknown(),
                UnaryPredicate::IsNotNull => !operand.eval(env).is_unknown(),
            },
            BoolExpr::Not(inner) => !inner.eval(env),
            BoolExpr::And(left, right) => left.eval(env) && right.eval(env),
            BoolExpr::Or(left, right) => left.eval(env) || right.eval(env),
        }
    }
}

impl BooleanExpression for BoolExpr {
    #[inline]
    fn matches(&self, env: &dyn SelectorEnv) -> bool {
        self.eval(env)
    }
}

impl fmt::Display for BoolExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoolExpr::Comparison { op, lhs, rhs } => write!(f, "({} {} {})", lhs, op, rhs),
            BoolExpr::Predicate { op, operand } => match op {
                UnaryPredicate::IsNull => write!(f, "({} IS NULL)", operand),
                UnaryPredicate::IsNotNull => write!(f, "({} IS NOT NULL)", operand),
            },
            BoolExpr::Not(inner) => write!(f, "NOT {}", inner),
            BoolExpr::And(left, right) => write!(f, "({} AND {})", left, right),
            BoolExpr::Or(left, right) => write!(f, "({} OR {})", left, right),
        }
    }
}
