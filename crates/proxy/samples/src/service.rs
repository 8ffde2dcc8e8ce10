//! The concrete sample service

use crate::contract::{calculate_signature, CALCULATE};
use crate::logger::Logger;
use service_proxy_types::{
    Arguments, Fault, InvocationError, ServiceObject, TypeDescriptor, Value, ValueType,
};
use std::fmt;
use std::sync::{Arc, OnceLock};

/// Descriptor of the `SampleService` class.
///
/// A concrete type with a data field; the synthesizer refuses to proxy it.
pub fn sample_service_descriptor() -> &'static TypeDescriptor {
    static DESCRIPTOR: OnceLock<TypeDescriptor> = OnceLock::new();
    DESCRIPTOR.get_or_init(|| {
        TypeDescriptor::class("SampleService")
            .operation(calculate_signature())
            .field("logger", ValueType::Any)
            .build()
            .expect("sample service descriptor is well formed")
    })
}

/// Adds two integers, logging each call.
pub struct SampleService {
    logger: Arc<dyn Logger>,
}

impl SampleService {
    pub fn new(logger: Arc<dyn Logger>) -> Self {
        Self { logger }
    }

    pub fn calculate(&self, value1: i64, value2: i64) -> Result<i64, Fault> {
        self.logger.log(&format!("Calculate({}, {})", value1, value2));
        value1.checked_add(value2).ok_or_else(|| {
            Fault::new(
                "overflow",
                format!("{} + {} does not fit in 64 bits", value1, value2),
            )
        })
    }
}

impl ServiceObject for SampleService {
    fn descriptor(&self) -> &TypeDescriptor {
        sample_service_descriptor()
    }

    fn invoke(&self, operation: &str, args: Vec<Value>) -> Result<Value, InvocationError> {
        match operation {
            CALCULATE => {
                let args = Arguments::new(operation, &args);
                let sum = self.calculate(args.int(0)?, args.int(1)?)?;
                Ok(Value::Int(sum))
            }
            other => Err(InvocationError::unknown_operation(self.descriptor(), other)),
        }
    }
}

impl fmt::Debug for SampleService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SampleService").finish_non_exhaustive()
    }
}
