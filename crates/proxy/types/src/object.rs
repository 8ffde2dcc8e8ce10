//! The callable object seam

use crate::descriptor::TypeDescriptor;
use crate::error::InvocationError;
use crate::value::{Value, ValueType};
use std::sync::Arc;

/// Anything that receives operation calls by name
///
/// Implemented by real service targets, by generated proxies and by client
/// channels. `descriptor` reports the operations the object provides; it is
/// what conformance checks inspect.
pub trait ServiceObject: Send + Sync {
    /// Description of the object's concrete type
    fn descriptor(&self) -> &TypeDescriptor;

    /// Invoke `operation` with `args`
    fn invoke(&self, operation: &str, args: Vec<Value>) -> Result<Value, InvocationError>;
}

impl<T: ServiceObject + ?Sized> ServiceObject for Box<T> {
    fn descriptor(&self) -> &TypeDescriptor {
        (**self).descriptor()
    }

    fn invoke(&self, operation: &str, args: Vec<Value>) -> Result<Value, InvocationError> {
        (**self).invoke(operation, args)
    }
}

impl<T: ServiceObject + ?Sized> ServiceObject for Arc<T> {
    fn descriptor(&self) -> &TypeDescriptor {
        (**self).descriptor()
    }

    fn invoke(&self, operation: &str, args: Vec<Value>) -> Result<Value, InvocationError> {
        (**self).invoke(operation, args)
    }
}

/// Typed access to positional arguments inside an implementation
pub struct Arguments<'a> {
    operation: &'a str,
    values: &'a [Value],
}

impl<'a> Arguments<'a> {
    pub fn new(operation: &'a str, values: &'a [Value]) -> Self {
        Self { operation, values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<&'a Value, InvocationError> {
        self.values.get(index).ok_or_else(|| {
            InvocationError::argument_mismatch(
                self.operation,
                format!("missing argument at position {}", index),
            )
        })
    }

    pub fn int(&self, index: usize) -> Result<i64, InvocationError> {
        let value = self.get(index)?;
        value
            .as_int()
            .ok_or_else(|| self.wrong_type(index, ValueType::Int, value))
    }

    pub fn bool(&self, index: usize) -> Result<bool, InvocationError> {
        let value = self.get(index)?;
        value
            .as_bool()
            .ok_or_else(|| self.wrong_type(index, ValueType::Bool, value))
    }

    pub fn float(&self, index: usize) -> Result<f64, InvocationError> {
        let value = self.get(index)?;
        value
            .as_float()
            .ok_or_else(|| self.wrong_type(index, ValueType::Float, value))
    }

    pub fn str(&self, index: usize) -> Result<&'a str, InvocationError> {
        let value = self.get(index)?;
        value
            .as_str()
            .ok_or_else(|| self.wrong_type(index, ValueType::Str, value))
    }

    fn wrong_type(&self, index: usize, expected: ValueType, found: &Value) -> InvocationError {
        InvocationError::argument_mismatch(
            self.operation,
            format!(
                "argument {} expects {}, got {}",
                index,
                expected,
                found.kind_name()
            ),
        )
    }
}
