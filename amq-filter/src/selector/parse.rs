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

//! Recursive-descent parser for selector expressions.
//!
//! Grammar (informal):
//!
//! ```text
//! selector    := orExpr EOS
//! orExpr      := andExpr ( OR andExpr )*
//! andExpr     := compExpr ( AND compExpr )*
//! compExpr    := "(" orExpr ")"
//!              | NOT compExpr
//!              | IDENTIFIER IS NOT? NULL
//!              | primaryExpr op primaryExpr
//! primaryExpr := IDENTIFIER | STRING | TRUE | FALSE | NULL
//!              | NUMERIC_EXACT | NUMERIC_APPROX
//! op          := "=" | "<>" | "<" | "<=" | ">" | ">="
//! ```
//!
//! `AND` binds tighter than `OR` and `NOT` binds tighter than `AND`; a
//! primary expression on its own is not a boolean expression. `BETWEEN`,
//! `LIKE` and `IN` are recognised lexically but have no evaluation
//! semantics and are rejected here.

use amq_error::SelectorError;
use amq_error::SelectorResult;

use crate::expression::bool_expression::BoolExpr;
use crate::expression::bool_expression::UnaryPredicate;
use crate::expression::bool_expression::ValueExpr;
use crate::expression::value::ComparisonOp;
use crate::expression::value::Value;
use crate::selector::token::Token;
use crate::selector::token::TokenKind;
use crate::selector::token::Tokenizer;

/// Parses a complete selector source string into its expression tree.
///
/// Consumes the whole input; anything left over after the top-level
/// expression is an error.
pub fn parse(src: &str) -> SelectorResult<BoolExpr> {
    let mut parser = Parser::new(src);
    let expr = parser.or_expr()?;
    let token = parser.next_token()?;
    if token.kind != TokenKind::Eos {
        return Err(SelectorError::parse("too much input", token.position));
    }
    Ok(expr)
}

struct Parser<'a> {
    tokenizer: Tokenizer<'a>,
}

impl<'a> Parser<'a> {
    fn new(src: &'a str) -> Self {
        Self {
            tokenizer: Tokenizer::new(src),
        }
    }

    fn next_token(&mut self) -> SelectorResult<Token> {
        self.tokenizer.next_token()
    }

    fn or_expr(&mut self) -> SelectorResult<BoolExpr> {
        let mut expr = self.and_expr()?;
        loop {
            let token = self.next_token()?;
            if token.kind != TokenKind::Or {
                self.tokenizer.return_tokens(1);
                return Ok(expr);
            }
            let rhs = self.and_expr()?;
            expr = BoolExpr::Or(Box::new(expr), Box::new(rhs));
        }
    }

    fn and_expr(&mut self) -> SelectorResult<BoolExpr> {
        let mut expr = self.comp_expr()?;
        loop {
            let token = self.next_token()?;
            if token.kind != TokenKind::And {
                self.tokenizer.return_tokens(1);
                return Ok(expr);
            }
            let rhs = self.comp_expr()?;
            expr = BoolExpr::And(Box::new(expr), Box::new(rhs));
        }
    }

    fn comp_expr(&mut self) -> SelectorResult<BoolExpr> {
        let token = self.next_token()?;
        match token.kind {
            TokenKind::LParen => {
                let expr = self.or_expr()?;
                let close = self.next_token()?;
                if close.kind != TokenKind::RParen {
                    return Err(unexpected(&close, "expected ')'"));
                }
                Ok(expr)
            }
            TokenKind::Not => {
                let inner = self.comp_expr()?;
                Ok(BoolExpr::Not(Box::new(inner)))
            }
            _ => {
                self.tokenizer.return_tokens(1);
                let lhs = self.primary_expr()?;
                self.comparison_tail(lhs)
            }
        }
    }

    // The primary has been consumed; what follows decides between
    // IS [NOT] NULL and a binary comparison. A primary with neither is not
    // a boolean expression.
    fn comparison_tail(&mut self, lhs: ValueExpr) -> SelectorResult<BoolExpr> {
        let token = self.next_token()?;
        match token.kind {
            TokenKind::Is => {
                if !matches!(lhs, ValueExpr::Identifier(_)) {
                    return Err(SelectorError::parse(
                        "only an identifier may precede 'IS'",
                        token.position,
                    ));
                }
                let next = self.next_token()?;
                match next.kind {
                    TokenKind::Null => Ok(BoolExpr::Predicate {
                        op: UnaryPredicate::IsNull,
                        operand: lhs,
                    }),
                    TokenKind::Not => {
                        let last = self.next_token()?;
                        if last.kind != TokenKind::Null {
                            return Err(unexpected(&last, "expected NULL after 'IS NOT'"));
                        }
                        Ok(BoolExpr::Predicate {
                            op: UnaryPredicate::IsNotNull,
                            operand: lhs,
                        })
                    }
                    _ => Err(unexpected(&next, "expected NULL or NOT NULL after 'IS'")),
                }
            }
            TokenKind::Operator => {
                let Some(op) = ComparisonOp::from_symbol(token.val.as_str()) else {
                    return Err(SelectorError::parse(
                        format!("unknown operator '{}'", token.val),
                        token.position,
                    ));
                };
                let rhs = self.primary_expr()?;
                Ok(BoolExpr::Comparison { op, lhs, rhs })
            }
            TokenKind::Between | TokenKind::Like | TokenKind::In => Err(SelectorError::parse(
                format!("operator '{}' is not supported", token.val),
                token.position,
            )),
            _ => Err(unexpected(&token, "expected a comparison")),
        }
    }

    fn primary_expr(&mut self) -> SelectorResult<ValueExpr> {
        let token = self.next_token()?;
        match token.kind {
            TokenKind::Identifier => Ok(ValueExpr::Identifier(token.val)),
            TokenKind::StringLiteral => Ok(ValueExpr::Literal(Value::String(token.val))),
            TokenKind::True => Ok(ValueExpr::Literal(Value::Bool(true))),
            TokenKind::False => Ok(ValueExpr::Literal(Value::Bool(false))),
            TokenKind::Null => Ok(ValueExpr::Literal(Value::Unknown)),
            TokenKind::NumericExact => {
                let value: u64 = token.val.as_str().parse().map_err(|_| {
                    SelectorError::parse(
                        format!("exact numeric literal '{}' out of range", token.val),
                        token.position,
                    )
                })?;
                Ok(ValueExpr::Literal(Value::Exact(value)))
            }
            TokenKind::NumericApprox => {
                let value: f64 = token.val.as_str().parse().map_err(|_| {
                    SelectorError::parse(
                        format!("approximate numeric literal '{}' is malformed", token.val),
                        token.position,
                    )
                })?;
                Ok(ValueExpr::Literal(Value::Inexact(value)))
            }
            _ => Err(unexpected(&token, "expected an expression")),
        }
    }
}

fn unexpected(token: &Token, expected: &str) -> SelectorError {
    if token.kind == TokenKind::Eos {
        SelectorError::parse(format!("{}, found end of input", expected), token.position)
    } else {
        SelectorError::parse(
            format!("{}, found unexpected token '{}'", expected, token.val),
            token.position,
        )
    }
}
