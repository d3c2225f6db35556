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

/// Error raised while compiling a message selector.
///
/// Both variants carry the zero-based byte position in the selector source
/// at which recognition failed. Selector evaluation itself is infallible;
/// every error a selector can produce is reported at compile time.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectorError {
    #[error("illegal selector: {message}, position {position}")]
    Lex { message: String, position: usize },

    #[error("illegal selector: {message}, position {position}")]
    Parse { message: String, position: usize },
}

impl SelectorError {
    pub fn lex(message: impl Into<String>, position: usize) -> Self {
        SelectorError::Lex {
            message: message.into(),
            position,
        }
    }

    pub fn parse(message: impl Into<String>, position: usize) -> Self {
        SelectorError::Parse {
            message: message.into(),
            position,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            SelectorError::Lex { message, .. } => message,
            SelectorError::Parse { message, .. } => message,
        }
    }

    pub fn position(&self) -> usize {
        match self {
            SelectorError::Lex { position, .. } => *position,
            SelectorError::Parse { position, .. } => *position,
        }
    }
}

pub type SelectorResult<T> = std::result::Result<T, SelectorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_error_display() {
        let err = SelectorError::lex("unterminated string literal", 7);
        assert_eq!(err.to_string(), "illegal selector: unterminated string literal, position 7");

        let err = SelectorError::parse("too much input", 12);
        assert_eq!(err.to_string(), "illegal selector: too much input, position 12");
    }

    #[test]
    fn test_selector_error_accessors() {
        let err = SelectorError::parse("unexpected token 'in'", 0);
        assert_eq!(err.message(), "unexpected token 'in'");
        assert_eq!(err.position(), 0);
    }

    #[test]
    fn test_selector_error_equality() {
        let a = SelectorError::lex("bad", 3);
        let b = SelectorError::lex("bad", 3);
        let c = SelectorError::parse("bad", 3);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
