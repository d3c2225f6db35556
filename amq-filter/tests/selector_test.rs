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

use std::cell::RefCell;
use std::collections::HashMap;

use amq_error::SelectorError;
use amq_filter::expression::PropertySelectorEnv;
use amq_filter::expression::SelectorEnv;
use amq_filter::expression::Value;
use amq_filter::selector::Selector;

fn env(pairs: &[(&str, Value)]) -> PropertySelectorEnv {
    let mut env = PropertySelectorEnv::new();
    for (name, value) in pairs {
        env.put(*name, value.clone());
    }
    env
}

fn eval(src: &str, env: &dyn SelectorEnv) -> bool {
    Selector::compile(src).unwrap().eval(env)
}

/// Environment that records every `present` lookup, for asserting that
/// short-circuited subtrees perform none.
#[derive(Default)]
struct CountingEnv {
    properties: HashMap<String, Value>,
    lookups: RefCell<Vec<String>>,
}

impl CountingEnv {
    fn put(&mut self, name: &str, value: Value) {
        self.properties.insert(name.to_string(), value);
    }

    fn lookups(&self) -> Vec<String> {
        self.lookups.borrow().clone()
    }
}

impl SelectorEnv for CountingEnv {
    fn present(&self, name: &str) -> bool {
        self.lookups.borrow_mut().push(name.to_string());
        self.properties.contains_key(name)
    }

    fn value(&self, name: &str) -> Value {
        self.properties.get(name).cloned().unwrap_or(Value::Unknown)
    }
}

#[test]
fn identifier_presence_scenarios() {
    let with_a = env(&[("A", Value::from("x"))]);
    assert!(eval("A IS NOT NULL", &with_a));
    assert!(!eval("A IS NULL", &with_a));

    let empty = env(&[]);
    assert!(eval("A IS NULL", &empty));
    assert!(!eval("A IS NOT NULL", &empty));
}

#[test]
fn string_comparison_scenarios() {
    let e = env(&[
        ("A", Value::from("Bye, bye cruel world")),
        ("B", Value::from("hello kitty")),
    ]);

    assert!(eval("A = 'hello kitty' OR B = 'Bye, bye cruel world'", &e));
    assert!(eval("NOT A = '' OR B = z", &e));
    assert!(!eval(
        "(Z IS NULL OR A IS NOT NULL) AND A <> 'Bye, bye cruel world'",
        &e
    ));
}

#[test]
fn numeric_comparison_scenarios() {
    let e = env(&[("n", Value::Exact(42)), ("x", Value::Inexact(2.71))]);
    assert!(eval("n = 42", &e));
    assert!(eval("x < 3.14", &e));
    assert!(!eval("n < 42", &e));
    assert!(eval("x <> 3.14", &e));
}

#[test]
fn numeric_promotion() {
    let e = env(&[]);
    assert!(eval("1 = 1.0 OR 1 = 2", &e));
    assert!(eval("1 < 1.5 OR 1 = 2", &e));
    assert!(eval("2 > 1 OR 1 = 2", &e));
    assert!(eval("1e2 = 100 OR 1 = 2", &e));
    assert!(!eval("1 = 1.5 AND 1 = 1", &e));
}

#[test]
fn unknown_never_equals_itself() {
    let e = env(&[]);
    // Z is absent, so even Z = Z is false; IS NULL is the only way to
    // observe absence.
    assert!(!eval("Z = Z", &e));
    assert!(!eval("Z <> Z", &e));
    assert!(eval("Z IS NULL", &e));
}

#[test]
fn is_null_and_is_not_null_partition() {
    for bindings in [vec![], vec![("p", Value::Exact(1))]] {
        let e = env(&bindings);
        let is_null = eval("p IS NULL", &e);
        let is_not_null = eval("p IS NOT NULL", &e);
        assert!(is_null ^ is_not_null);
    }
}

#[test]
fn null_literal_comparisons_are_false() {
    let e = env(&[("a", Value::from("x"))]);
    assert!(!eval("a = NULL", &e));
    assert!(!eval("NULL = NULL", &e));
}

#[test]
fn boolean_literals() {
    let e = env(&[("flag", Value::Bool(true))]);
    assert!(eval("flag = TRUE", &e));
    assert!(eval("flag <> FALSE", &e));
    assert!(!eval("flag = FALSE", &e));
    // No ordering on booleans.
    assert!(!eval("flag > FALSE", &e));
}

#[test]
fn mismatched_domains_never_match() {
    let e = env(&[("a", Value::from("42"))]);
    assert!(!eval("a = 42", &e));
    assert!(!eval("a <> 42", &e));
    assert!(!eval("a < 42", &e));
}

#[test]
fn case_insensitive_reserved_words_evaluate_identically() {
    let with_a = env(&[("a", Value::from("x"))]);
    let empty = env(&[]);
    for (relaxed, canonical) in [
        ("a Is NoT nUlL", "a IS NOT NULL"),
        ("a IS nulL oR a = 'x'", "a IS NULL OR a = 'x'"),
    ] {
        assert_eq!(eval(relaxed, &with_a), eval(canonical, &with_a));
        assert_eq!(eval(relaxed, &empty), eval(canonical, &empty));
    }
}

#[test]
fn quote_escape_in_string_literal() {
    let e = env(&[("a", Value::from("it's"))]);
    assert!(eval("a = 'it''s'", &e));
}

#[test]
fn and_short_circuit_skips_right_operand() {
    let mut counting = CountingEnv::default();
    counting.put("right", Value::Exact(1));

    let selector = Selector::compile("left = 1 AND right = 1").unwrap();
    assert!(!selector.eval(&counting));
    assert_eq!(counting.lookups(), vec!["left"]);
}

#[test]
fn or_short_circuit_skips_right_operand() {
    let mut counting = CountingEnv::default();
    counting.put("left", Value::Exact(1));

    let selector = Selector::compile("left = 1 OR right = 1").unwrap();
    assert!(selector.eval(&counting));
    assert_eq!(counting.lookups(), vec!["left"]);
}

#[test]
fn both_operands_visited_when_needed() {
    let mut counting = CountingEnv::default();
    counting.put("left", Value::Exact(1));
    counting.put("right", Value::Exact(1));

    let selector = Selector::compile("left = 1 AND right = 1").unwrap();
    assert!(selector.eval(&counting));
    assert_eq!(counting.lookups(), vec!["left", "right"]);
}

#[test]
fn compile_is_pure() {
    let src = "NOT (a = 1 OR b IS NULL) AND c <> 'x'";
    let first = Selector::compile(src).unwrap();
    let second = Selector::compile(src).unwrap();
    assert_eq!(first.expression(), second.expression());
}

#[test]
fn precedence_or_and() {
    // A OR B AND C == A OR (B AND C): holds when A is true and C is
    // false.
    let e = env(&[
        ("a", Value::Exact(1)),
        ("b", Value::Exact(1)),
        ("c", Value::Exact(0)),
    ]);
    assert!(eval("a = 1 OR b = 1 AND c = 1", &e));
    assert!(!eval("(a = 1 OR b = 1) AND c = 1", &e));
}

#[test]
fn precedence_not_and() {
    // NOT A AND B == (NOT A) AND B: false when A and B are both true.
    let e = env(&[("a", Value::Exact(1)), ("b", Value::Exact(1))]);
    assert!(!eval("NOT a = 1 AND b = 1", &e));
    assert!(eval("NOT (a = 2) AND b = 1", &e));
}

#[test]
fn parse_failures() {
    for src in [
        "'Daft' is not null",
        "A is null not",
        "A is null or and",
        "A is null and (B='hello'",
        "in = 'x'",
        "A",
        "A = ",
        "A LIKE 'x%'",
        "A BETWEEN 1 AND 2",
        "A IN ('x')",
        "A ~ 3",
        // Unrecognisable bytes lex as operator runs and fail here.
        "A \u{7f} 3",
    ] {
        let result = Selector::compile(src);
        assert!(
            matches!(result, Err(SelectorError::Parse { .. })),
            "source {:?} gave {:?}",
            src,
            result
        );
    }
}

#[test]
fn lex_failures() {
    for src in ["A = 'unterminated", "A = 3e", "A = 1.5e+"] {
        let result = Selector::compile(src);
        assert!(
            matches!(result, Err(SelectorError::Lex { .. })),
            "source {:?} gave {:?}",
            src,
            result
        );
    }
}

#[test]
fn errors_carry_positions() {
    let err = Selector::compile("A is null not").unwrap_err();
    assert_eq!(err.position(), 10);

    let err = Selector::compile("A = 'oops").unwrap_err();
    assert_eq!(err.position(), 4);
}

#[test]
fn tokens_round_trip_through_rendering() {
    // Rendering the compiled tree and recompiling it yields the same
    // tree, a coarse lexeme-preservation check.
    for src in [
        "a = 'it''s' AND b <> 2",
        "NOT (x < 1.5 OR y IS NULL)",
        "n >= 10 AND n <= 20",
    ] {
        let first = Selector::compile(src).unwrap();
        let rendered = first.expression().to_string();
        let second = Selector::compile(rendered).unwrap();
        assert_eq!(first.expression(), second.expression(), "source {:?}", src);
    }
}
