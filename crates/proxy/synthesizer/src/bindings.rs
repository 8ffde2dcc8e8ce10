//! Type-level factory bindings
//!
//! Each generated proxy type resolves its factory here, keyed by the
//! generated type's descriptor id. Entries are written once, when the type is
//! synthesized, and read on every instantiation.

use crate::factory::TargetFactory;
use dashmap::DashMap;
use service_proxy_types::DescriptorId;

#[derive(Debug, Default)]
pub(crate) struct FactoryBindings {
    slots: DashMap<DescriptorId, TargetFactory>,
}

impl FactoryBindings {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Bind `factory` to `proxy_type` unless a binding already exists.
    ///
    /// Returns `true` when the binding was written.
    pub(crate) fn bind(&self, proxy_type: DescriptorId, factory: TargetFactory) -> bool {
        let mut written = false;
        self.slots.entry(proxy_type).or_insert_with(|| {
            written = true;
            factory
        });
        written
    }

    pub(crate) fn resolve(&self, proxy_type: DescriptorId) -> Option<TargetFactory> {
        self.slots.get(&proxy_type).map(|slot| slot.value().clone())
    }

    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use service_proxy_types::{InvocationError, ServiceObject, TypeDescriptor, Value};

    struct Nothing(TypeDescriptor);

    impl ServiceObject for Nothing {
        fn descriptor(&self) -> &TypeDescriptor {
            &self.0
        }

        fn invoke(&self, _operation: &str, _args: Vec<Value>) -> Result<Value, InvocationError> {
            Ok(Value::Unit)
        }
    }

    fn factory() -> TargetFactory {
        TargetFactory::new(|| Nothing(TypeDescriptor::class("Nothing").build().unwrap()))
    }

    #[test]
    fn first_binding_is_kept() {
        let bindings = FactoryBindings::new();
        let id = DescriptorId::generate();
        let first = factory();
        let second = factory();

        assert!(bindings.bind(id, first.clone()));
        assert!(!bindings.bind(id, second.clone()));

        let bound = bindings.resolve(id).unwrap();
        assert!(bound.same_as(&first));
        assert!(!bound.same_as(&second));
        assert_eq!(bindings.len(), 1);
    }

    #[test]
    fn unknown_type_has_no_binding() {
        let bindings = FactoryBindings::new();
        assert!(bindings.resolve(DescriptorId::generate()).is_none());
    }
}
