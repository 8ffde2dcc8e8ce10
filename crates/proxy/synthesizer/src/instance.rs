//! Proxy instances

use crate::proxy_type::ProxyType;
use service_proxy_types::{InvocationError, ServiceObject, TypeDescriptor, Value};
use std::fmt;

/// An instance of a generated proxy type
///
/// Owns the target produced at construction. The target is never replaced
/// and is dropped with the instance.
pub struct ProxyInstance {
    proxy_type: ProxyType,
    target: Box<dyn ServiceObject>,
}

impl ProxyInstance {
    pub(crate) fn new(proxy_type: ProxyType, target: Box<dyn ServiceObject>) -> Self {
        Self { proxy_type, target }
    }

    pub fn proxy_type(&self) -> &ProxyType {
        &self.proxy_type
    }

    /// The object calls are forwarded to.
    pub fn target(&self) -> &dyn ServiceObject {
        self.target.as_ref()
    }
}

impl ServiceObject for ProxyInstance {
    fn descriptor(&self) -> &TypeDescriptor {
        self.proxy_type.descriptor()
    }

    fn invoke(&self, operation: &str, args: Vec<Value>) -> Result<Value, InvocationError> {
        let signature = self
            .proxy_type
            .interface()
            .operation(operation)
            .ok_or_else(|| InvocationError::unknown_operation(self.descriptor(), operation))?;

        if self.proxy_type.strict_arguments() {
            signature.check_arguments(&args)?;
        }

        tracing::trace!(
            proxy_type = %self.proxy_type.name(),
            operation,
            args = args.len(),
            "Forwarding call"
        );

        self.target.invoke(operation, args)
    }
}

impl fmt::Debug for ProxyInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProxyInstance")
            .field("proxy_type", &self.proxy_type.name())
            .field("target", &self.target.descriptor().name())
            .finish()
    }
}
