//! Error types shared by targets, proxies and hosts

use crate::descriptor::TypeDescriptor;
use crate::value::{Value, ValueType};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while building a type descriptor
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DescriptorError {
    #[error("type name must not be empty")]
    EmptyName,

    #[error("operation at index {index} of `{type_name}` has an empty name")]
    EmptyOperationName { type_name: String, index: usize },

    #[error("duplicate operation `{operation}` in `{type_name}`; overloads are not supported")]
    DuplicateOperation {
        type_name: String,
        operation: String,
    },

    #[error("duplicate field `{field}` in `{type_name}`")]
    DuplicateField { type_name: String, field: String },
}

/// A failure raised by a service implementation
///
/// Faults are the only error an implementation produces on its own; proxies
/// hand them back to callers exactly as raised.
#[derive(Debug, Error, Clone, PartialEq, Serialize, Deserialize)]
#[error("{code}: {message}")]
pub struct Fault {
    pub code: String,
    pub message: String,
    #[serde(default)]
    pub detail: Option<Value>,
}

impl Fault {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<Value>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

/// Errors returned from [`ServiceObject::invoke`](crate::ServiceObject::invoke)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InvocationError {
    #[error("service fault: {0}")]
    Fault(#[from] Fault),

    #[error("operation `{operation}` is not defined on `{type_name}`")]
    UnknownOperation {
        type_name: String,
        operation: String,
    },

    #[error("invalid arguments for `{operation}`: {reason}")]
    ArgumentMismatch { operation: String, reason: String },
}

impl InvocationError {
    pub fn unknown_operation(descriptor: &TypeDescriptor, operation: &str) -> Self {
        InvocationError::UnknownOperation {
            type_name: descriptor.name().to_string(),
            operation: operation.to_string(),
        }
    }

    pub fn argument_mismatch(operation: &str, reason: impl Into<String>) -> Self {
        InvocationError::ArgumentMismatch {
            operation: operation.to_string(),
            reason: reason.into(),
        }
    }

    /// The fault raised by the implementation, if this error is one.
    pub fn as_fault(&self) -> Option<&Fault> {
        match self {
            InvocationError::Fault(fault) => Some(fault),
            _ => None,
        }
    }
}

/// A value did not have the expected type
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("expected a value of type {expected}, found {found}")]
pub struct ValueTypeError {
    pub expected: ValueType,
    pub found: String,
}

impl ValueTypeError {
    pub fn new(expected: ValueType, found: &Value) -> Self {
        Self {
            expected,
            found: found.kind_name().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let err = DescriptorError::DuplicateOperation {
            type_name: "ICalc".into(),
            operation: "Add".into(),
        };
        assert_eq!(
            err.to_string(),
            "duplicate operation `Add` in `ICalc`; overloads are not supported"
        );

        let err = InvocationError::from(Fault::new("overflow", "sum does not fit"));
        assert_eq!(err.to_string(), "service fault: overflow: sum does not fit");

        let err = InvocationError::argument_mismatch("Add", "expected 2 arguments, got 1");
        assert_eq!(
            err.to_string(),
            "invalid arguments for `Add`: expected 2 arguments, got 1"
        );
    }

    #[test]
    fn fault_detail_is_preserved() {
        let fault = Fault::new("denied", "no access").with_detail("user-7");
        assert_eq!(fault.detail, Some(Value::from("user-7")));

        let err = InvocationError::from(fault.clone());
        assert_eq!(err.as_fault(), Some(&fault));
    }

    #[test]
    fn error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(Fault::new("x", "y"));
        assert_eq!(err.to_string(), "x: y");
    }
}
