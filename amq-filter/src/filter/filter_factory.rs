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

use std::sync::Arc;
use std::sync::LazyLock;

use amq_common::common::filter::expression_type::ExpressionType;
use dashmap::DashMap;

use crate::filter::filter_selector_filter::SelectorFilter;
use crate::filter::filter_spi::Filter;

static FILTER_REGISTRY: LazyLock<DashMap<String, Arc<dyn Filter>>> = LazyLock::new(|| {
    let registry = DashMap::new();
    registry.insert(
        ExpressionType::SELECTOR.to_string(),
        Arc::new(SelectorFilter::new()) as Arc<dyn Filter>,
    );
    registry
});

/// Registry of subscription filter implementations, keyed by expression
/// type identifier.
///
/// A process-wide singleton; the property selector filter is registered
/// during static initialization, additional filter types can be registered
/// at runtime. All operations are safe to call concurrently.
#[derive(Debug)]
pub struct FilterFactory;

impl FilterFactory {
    /// Returns the singleton factory instance.
    pub fn instance() -> &'static Self {
        static INSTANCE: LazyLock<FilterFactory> = LazyLock::new(|| FilterFactory);
        &INSTANCE
    }

    /// Registers a filter under its own type identifier, replacing any
    /// filter previously registered under the same type.
    pub fn register(&self, filter: Arc<dyn Filter>) {
        let filter_type = filter.of_type().to_string();
        tracing::debug!(filter_type = %filter_type, "registering subscription filter");
        FILTER_REGISTRY.insert(filter_type, filter);
    }

    /// Unregisters a filter by type, returning it if one was registered.
    pub fn unregister(&self, filter_type: &str) -> Option<Arc<dyn Filter>> {
        FILTER_REGISTRY.remove(filter_type).map(|(_, filter)| filter)
    }

    /// Retrieves a registered filter by type.
    pub fn get(&self, filter_type: &str) -> Option<Arc<dyn Filter>> {
        FILTER_REGISTRY.get(filter_type).map(|entry| Arc::clone(&*entry))
    }

    /// Retrieves the default property selector filter.
    ///
    /// # Panics
    ///
    /// Panics if the selector filter has been unregistered, which does not
    /// happen during normal operation: it is installed during static
    /// initialization.
    pub fn get_selector_filter() -> Arc<dyn Filter> {
        FILTER_REGISTRY
            .get(ExpressionType::SELECTOR)
            .map(|entry| Arc::clone(&*entry))
            .expect("selector filter should be registered by default")
    }

    /// Returns all registered expression type identifiers.
    pub fn registered_types(&self) -> Vec<String> {
        FILTER_REGISTRY.iter().map(|entry| entry.key().clone()).collect()
    }

    /// Returns the number of registered filters.
    pub fn count(&self) -> usize {
        FILTER_REGISTRY.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_selector_filter() {
        let filter = FilterFactory::get_selector_filter();
        assert_eq!(filter.of_type(), "SELECTOR");
    }

    #[test]
    fn test_factory_instance_is_singleton() {
        let first = FilterFactory::instance();
        let second = FilterFactory::instance();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_get_registered_filter() {
        let factory = FilterFactory::instance();
        let filter = factory.get("SELECTOR");
        assert!(filter.is_some());
        assert_eq!(filter.unwrap().of_type(), "SELECTOR");
    }

    #[test]
    fn test_get_nonexistent_filter() {
        let factory = FilterFactory::instance();
        assert!(factory.get("NONEXISTENT").is_none());
    }

    #[test]
    fn test_register_and_count() {
        let factory = FilterFactory::instance();
        factory.register(Arc::new(SelectorFilter::new()));

        assert!(factory.count() >= 1);
        assert!(factory.registered_types().contains(&"SELECTOR".to_string()));
    }

    #[test]
    fn test_registered_filter_compiles() {
        let filter = FilterFactory::get_selector_filter();
        let selector = filter.compile("a IS NOT NULL").unwrap();
        assert_eq!(selector.source(), "a IS NOT NULL");
    }
}
