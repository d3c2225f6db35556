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

use std::collections::HashMap;
use std::sync::LazyLock;

use ahash::RandomState;
use amq_error::SelectorError;
use amq_error::SelectorResult;
use cheetah_string::CheetahString;

/// Lexical classes of the selector language.
///
/// Reserved words are a subset of identifiers: the tokeniser captures an
/// identifier first and reclassifies it when a case-insensitive lookup in
/// the reserved-word table matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Eos,
    True,
    False,
    Null,
    Not,
    And,
    Or,
    In,
    Is,
    Between,
    Like,
    Identifier,
    StringLiteral,
    NumericExact,
    NumericApprox,
    LParen,
    RParen,
    Operator,
}

/// A lexical token: kind, lexeme, and the zero-based byte position of its
/// first character in the source.
///
/// The lexeme is the exact source slice, preserving original case for
/// reserved words; string literals carry their content with the `''`
/// escape already collapsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub val: CheetahString,
    pub position: usize,
}

impl Token {
    pub fn new(kind: TokenKind, val: impl Into<CheetahString>, position: usize) -> Self {
        Self {
            kind,
            val: val.into(),
            position,
        }
    }
}

static RESERVED_WORDS: LazyLock<HashMap<&'static str, TokenKind, RandomState>> = LazyLock::new(|| {
    let mut words = HashMap::with_hasher(RandomState::default());
    words.insert("and", TokenKind::And);
    words.insert("between", TokenKind::Between);
    words.insert("false", TokenKind::False);
    words.insert("in", TokenKind::In);
    words.insert("is", TokenKind::Is);
    words.insert("like", TokenKind::Like);
    words.insert("not", TokenKind::Not);
    words.insert("null", TokenKind::Null);
    words.insert("or", TokenKind::Or);
    words.insert("true", TokenKind::True);
    words
});

fn reserved_word(identifier: &str) -> Option<TokenKind> {
    RESERVED_WORDS.get(identifier.to_ascii_lowercase().as_str()).copied()
}

#[inline]
fn is_identifier_start(c: u8) -> bool {
    c.is_ascii_alphabetic() || c == b'_' || c == b'$'
}

#[inline]
fn is_identifier_part(c: u8) -> bool {
    c.is_ascii_alphanumeric() || c == b'_' || c == b'$'
}

// Broader than the actual comparison operators; the parser rejects lexemes
// it does not know.
#[inline]
fn is_operator_part(c: u8) -> bool {
    !c.is_ascii_alphanumeric()
        && !c.is_ascii_whitespace()
        && c != b'_'
        && c != b'$'
        && c != b'\''
        && c != b'('
        && c != b')'
}

/// Stateful cursor turning a selector source string into tokens.
///
/// Every scanning primitive either recognises its class and advances the
/// cursor, or leaves the cursor unchanged; the only hard failures are
/// unterminated string literals, exponent markers with no digits, and
/// bytes no class recognises. End of input yields [`TokenKind::Eos`]
/// repeatedly without advancing.
///
/// Produced tokens are buffered so the parser can hand back lookahead with
/// [`Tokenizer::return_tokens`].
pub struct Tokenizer<'a> {
    src: &'a str,
    pos: usize,
    produced: Vec<Token>,
    returned: usize,
}

impl<'a> Tokenizer<'a> {
    pub fn new(src: &'a str) -> Self {
        Self {
            src,
            pos: 0,
            produced: Vec::new(),
            returned: 0,
        }
    }

    /// Produces the next token, replaying returned tokens first.
    pub fn next_token(&mut self) -> SelectorResult<Token> {
        if self.returned > 0 {
            let token = self.produced[self.produced.len() - self.returned].clone();
            self.returned -= 1;
            return Ok(token);
        }
        let token = self.scan()?;
        self.produced.push(token.clone());
        Ok(token)
    }

    /// Makes the next `n` calls to [`Tokenizer::next_token`] replay the
    /// last `n` produced tokens in their original order.
    pub fn return_tokens(&mut self, n: usize) {
        self.returned += n;
        debug_assert!(self.returned <= self.produced.len());
    }

    fn scan(&mut self) -> SelectorResult<Token> {
        self.skip_whitespace();
        let start = self.pos;
        let Some(&c) = self.bytes().first() else {
            return Ok(Token::new(TokenKind::Eos, "", start));
        };
        match c {
            b'\'' => self.scan_string(start),
            b'(' => {
                self.pos += 1;
                Ok(Token::new(TokenKind::LParen, "(", start))
            }
            b')' => {
                self.pos += 1;
                Ok(Token::new(TokenKind::RParen, ")", start))
            }
            c if is_identifier_start(c) => Ok(self.scan_identifier(start)),
            c if c.is_ascii_digit() => self.scan_numeric(start),
            b'.' if self.bytes().get(1).is_some_and(|d| d.is_ascii_digit()) => self.scan_numeric(start),
            c if is_operator_part(c) => Ok(self.scan_operator(start)),
            c => Err(SelectorError::lex(
                format!("unrecognised character '{}'", c as char),
                start,
            )),
        }
    }

    #[inline]
    fn bytes(&self) -> &[u8] {
        &self.src.as_bytes()[self.pos..]
    }

    fn skip_whitespace(&mut self) {
        while self
            .src
            .as_bytes()
            .get(self.pos)
            .is_some_and(|c| c.is_ascii_whitespace())
        {
            self.pos += 1;
        }
    }

    fn scan_identifier(&mut self, start: usize) -> Token {
        let bytes = self.src.as_bytes();
        self.pos += 1;
        while bytes.get(self.pos).is_some_and(|&c| is_identifier_part(c)) {
            self.pos += 1;
        }
        let lexeme = &self.src[start..self.pos];
        let kind = reserved_word(lexeme).unwrap_or(TokenKind::Identifier);
        Token::new(kind, lexeme, start)
    }

    // An interior '' is a single literal apostrophe and does not terminate
    // the string.
    fn scan_string(&mut self, start: usize) -> SelectorResult<Token> {
        let mut content = String::new();
        let mut cursor = start + 1;
        loop {
            let Some(offset) = self.src[cursor..].find('\'') else {
                return Err(SelectorError::lex("unterminated string literal", start));
            };
            let quote = cursor + offset;
            content.push_str(&self.src[cursor..quote]);
            if self.src.as_bytes().get(quote + 1) == Some(&b'\'') {
                content.push('\'');
                cursor = quote + 2;
            } else {
                self.pos = quote + 1;
                return Ok(Token::new(TokenKind::StringLiteral, content, start));
            }
        }
    }

    fn scan_numeric(&mut self, start: usize) -> SelectorResult<Token> {
        let bytes = self.src.as_bytes();
        let mut approx = false;

        while bytes.get(self.pos).is_some_and(|c| c.is_ascii_digit()) {
            self.pos += 1;
        }
        if bytes.get(self.pos) == Some(&b'.') {
            approx = true;
            self.pos += 1;
            while bytes.get(self.pos).is_some_and(|c| c.is_ascii_digit()) {
                self.pos += 1;
            }
        }
        if bytes.get(self.pos).is_some_and(|&c| c == b'e' || c == b'E') {
            let mut cursor = self.pos + 1;
            if bytes.get(cursor).is_some_and(|&c| c == b'+' || c == b'-') {
                cursor += 1;
            }
            if !bytes.get(cursor).is_some_and(|c| c.is_ascii_digit()) {
                return Err(SelectorError::lex("malformed numeric literal: missing exponent", self.pos));
            }
            approx = true;
            self.pos = cursor;
            while bytes.get(self.pos).is_some_and(|c| c.is_ascii_digit()) {
                self.pos += 1;
            }
        }

        let kind = if approx {
            TokenKind::NumericApprox
        } else {
            TokenKind::NumericExact
        };
        Ok(Token::new(kind, &self.src[start..self.pos], start))
    }

    fn scan_operator(&mut self, start: usize) -> Token {
        let bytes = self.src.as_bytes();
        self.pos += 1;
        while bytes.get(self.pos).is_some_and(|&c| is_operator_part(c)) {
            self.pos += 1;
        }
        Token::new(TokenKind::Operator, &self.src[start..self.pos], start)
    }
}
