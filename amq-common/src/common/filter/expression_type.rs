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

pub struct ExpressionType;

impl ExpressionType {
    /// JMS-style property selector expression type.
    pub const SELECTOR: &'static str = "SELECTOR";

    /// Checks if the given type denotes a property selector.
    ///
    /// A subscription with no expression type (or an empty one) carries no
    /// selector and accepts every message.
    pub fn is_selector_type(type_: Option<&str>) -> bool {
        matches!(type_, Some(ExpressionType::SELECTOR))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expression_type() {
        assert_eq!(ExpressionType::SELECTOR, "SELECTOR");
        assert!(ExpressionType::is_selector_type(Some("SELECTOR")));
        assert!(!ExpressionType::is_selector_type(None));
        assert!(!ExpressionType::is_selector_type(Some("")));
        assert!(!ExpressionType::is_selector_type(Some("OTHER")));
    }
}
