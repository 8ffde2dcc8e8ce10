//! Operation signatures

use crate::error::InvocationError;
use crate::value::{Value, ValueType};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A named, typed operation parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub ty: ValueType,
}

/// Signature of a single operation: name, ordered parameters, return type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationSignature {
    name: String,
    params: Vec<Parameter>,
    returns: ValueType,
}

impl OperationSignature {
    /// A signature with no parameters returning unit.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            returns: ValueType::Unit,
        }
    }

    pub fn param(mut self, name: impl Into<String>, ty: ValueType) -> Self {
        self.params.push(Parameter {
            name: name.into(),
            ty,
        });
        self
    }

    pub fn returns(mut self, ty: ValueType) -> Self {
        self.returns = ty;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn params(&self) -> &[Parameter] {
        &self.params
    }

    pub fn return_type(&self) -> &ValueType {
        &self.returns
    }

    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// Same name, same parameter types in order, same return type.
    ///
    /// Parameter names are not part of the match.
    pub fn matches(&self, other: &OperationSignature) -> bool {
        self.name == other.name
            && self.returns == other.returns
            && self.params.len() == other.params.len()
            && self
                .params
                .iter()
                .zip(&other.params)
                .all(|(a, b)| a.ty == b.ty)
    }

    /// Check argument count and types against this signature.
    pub fn check_arguments(&self, args: &[Value]) -> Result<(), InvocationError> {
        if args.len() != self.params.len() {
            return Err(InvocationError::argument_mismatch(
                &self.name,
                format!(
                    "expected {} argument(s), got {}",
                    self.params.len(),
                    args.len()
                ),
            ));
        }

        for (param, arg) in self.params.iter().zip(args) {
            if !param.ty.accepts(arg) {
                return Err(InvocationError::argument_mismatch(
                    &self.name,
                    format!(
                        "parameter `{}` expects {}, got {}",
                        param.name,
                        param.ty,
                        arg.kind_name()
                    ),
                ));
            }
        }

        Ok(())
    }
}

impl fmt::Display for OperationSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", param.name, param.ty)?;
        }
        write!(f, ") -> {}", self.returns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calculate() -> OperationSignature {
        OperationSignature::new("Calculate")
            .param("value1", ValueType::Int)
            .param("value2", ValueType::Int)
            .returns(ValueType::Int)
    }

    #[test]
    fn display_lists_parameters() {
        assert_eq!(
            calculate().to_string(),
            "Calculate(value1: int, value2: int) -> int"
        );
        assert_eq!(OperationSignature::new("Ping").to_string(), "Ping() -> unit");
    }

    #[test]
    fn matching_ignores_parameter_names() {
        let renamed = OperationSignature::new("Calculate")
            .param("a", ValueType::Int)
            .param("b", ValueType::Int)
            .returns(ValueType::Int);
        assert!(calculate().matches(&renamed));
    }

    #[test]
    fn matching_checks_types_and_return() {
        let float_return = OperationSignature::new("Calculate")
            .param("value1", ValueType::Int)
            .param("value2", ValueType::Int)
            .returns(ValueType::Float);
        assert!(!calculate().matches(&float_return));

        let short = OperationSignature::new("Calculate")
            .param("value1", ValueType::Int)
            .returns(ValueType::Int);
        assert!(!calculate().matches(&short));
    }

    #[test]
    fn argument_count_is_checked() {
        let err = calculate().check_arguments(&[Value::Int(1)]).unwrap_err();
        assert!(
            matches!(err, InvocationError::ArgumentMismatch { ref reason, .. } if reason.contains("expected 2"))
        );
    }

    #[test]
    fn argument_types_are_checked() {
        let err = calculate()
            .check_arguments(&[Value::Int(1), Value::from("2")])
            .unwrap_err();
        assert!(
            matches!(err, InvocationError::ArgumentMismatch { ref reason, .. } if reason.contains("value2"))
        );
        assert!(calculate()
            .check_arguments(&[Value::Int(1), Value::Int(2)])
            .is_ok());
    }
}
