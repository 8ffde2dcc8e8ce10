//! Target factories

use service_proxy_types::ServiceObject;
use std::fmt;
use std::sync::Arc;

type ProduceFn = dyn Fn() -> Box<dyn ServiceObject> + Send + Sync;

/// Zero-argument callable producing the real target of a proxy instance
///
/// Cheap to clone; clones are the same factory (see [`TargetFactory::same_as`]).
/// The produced object is owned by the proxy instance it was made for.
#[derive(Clone)]
pub struct TargetFactory {
    produce: Arc<ProduceFn>,
}

impl TargetFactory {
    /// Wrap a closure returning a concrete service object.
    pub fn new<F, T>(factory: F) -> Self
    where
        F: Fn() -> T + Send + Sync + 'static,
        T: ServiceObject + 'static,
    {
        Self {
            produce: Arc::new(move || Box::new(factory()) as Box<dyn ServiceObject>),
        }
    }

    /// Wrap a closure that already returns a boxed service object.
    pub fn boxed<F>(factory: F) -> Self
    where
        F: Fn() -> Box<dyn ServiceObject> + Send + Sync + 'static,
    {
        Self {
            produce: Arc::new(factory),
        }
    }

    /// Call the factory.
    pub fn produce(&self) -> Box<dyn ServiceObject> {
        (self.produce)()
    }

    /// Whether both handles refer to the same underlying factory.
    pub fn same_as(&self, other: &TargetFactory) -> bool {
        Arc::ptr_eq(&self.produce, &other.produce)
    }
}

impl fmt::Debug for TargetFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TargetFactory({:p})", Arc::as_ptr(&self.produce))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use service_proxy_types::{InvocationError, TypeDescriptor, Value};
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Unit {
        descriptor: TypeDescriptor,
    }

    impl ServiceObject for Unit {
        fn descriptor(&self) -> &TypeDescriptor {
            &self.descriptor
        }

        fn invoke(&self, _operation: &str, _args: Vec<Value>) -> Result<Value, InvocationError> {
            Ok(Value::Unit)
        }
    }

    fn unit() -> Unit {
        Unit {
            descriptor: TypeDescriptor::class("Unit").build().unwrap(),
        }
    }

    #[test]
    fn produce_calls_closure_each_time() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let factory = TargetFactory::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            unit()
        });

        factory.produce();
        factory.produce();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn clones_are_the_same_factory() {
        let factory = TargetFactory::new(unit);
        let clone = factory.clone();
        let other = TargetFactory::new(unit);

        assert!(factory.same_as(&clone));
        assert!(!factory.same_as(&other));
    }

    #[test]
    fn boxed_factory_produces_object() {
        let factory = TargetFactory::boxed(|| Box::new(unit()));
        assert_eq!(factory.produce().descriptor().name(), "Unit");
    }
}
