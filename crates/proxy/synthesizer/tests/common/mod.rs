//! Shared fixtures for synthesizer integration tests.

#![allow(dead_code)]

use service_proxy_synthesizer::TargetFactory;
use service_proxy_types::{
    Arguments, Fault, InvocationError, OperationSignature, ServiceObject, TypeDescriptor, Value,
    ValueType,
};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

pub fn calculate_op() -> OperationSignature {
    OperationSignature::new("Calculate")
        .param("value1", ValueType::Int)
        .param("value2", ValueType::Int)
        .returns(ValueType::Int)
}

pub fn divide_op() -> OperationSignature {
    OperationSignature::new("Divide")
        .param("dividend", ValueType::Int)
        .param("divisor", ValueType::Int)
        .returns(ValueType::Int)
}

/// A fresh calculator contract; every call yields a distinct interface.
pub fn calculator_contract() -> TypeDescriptor {
    TypeDescriptor::interface("ICalculator")
        .operation(calculate_op())
        .operation(divide_op())
        .build()
        .unwrap()
}

/// Adds in `Calculate`, faults on division by zero in `Divide`.
pub struct Calculator {
    descriptor: TypeDescriptor,
    pub calls: Arc<AtomicUsize>,
    dropped: Option<Arc<AtomicBool>>,
}

impl Calculator {
    pub fn new() -> Self {
        Self {
            descriptor: TypeDescriptor::class("Calculator")
                .operation(calculate_op())
                .operation(divide_op())
                .field("calls", ValueType::Int)
                .build()
                .unwrap(),
            calls: Arc::new(AtomicUsize::new(0)),
            dropped: None,
        }
    }

    pub fn with_drop_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.dropped = Some(flag);
        self
    }

    pub fn with_call_counter(mut self, calls: Arc<AtomicUsize>) -> Self {
        self.calls = calls;
        self
    }
}

impl Drop for Calculator {
    fn drop(&mut self) {
        if let Some(flag) = &self.dropped {
            flag.store(true, Ordering::SeqCst);
        }
    }
}

impl ServiceObject for Calculator {
    fn descriptor(&self) -> &TypeDescriptor {
        &self.descriptor
    }

    fn invoke(&self, operation: &str, args: Vec<Value>) -> Result<Value, InvocationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let args = Arguments::new(operation, &args);
        match operation {
            "Calculate" => Ok(Value::Int(args.int(0)? + args.int(1)?)),
            "Divide" => {
                let divisor = args.int(1)?;
                if divisor == 0 {
                    return Err(Fault::new("divide_by_zero", "divisor must not be zero")
                        .with_detail(args.int(0)?)
                        .into());
                }
                Ok(Value::Int(args.int(0)? / divisor))
            }
            other => Err(InvocationError::unknown_operation(&self.descriptor, other)),
        }
    }
}

/// Implements none of the calculator operations.
pub struct Printer {
    descriptor: TypeDescriptor,
}

impl Printer {
    pub fn new() -> Self {
        Self {
            descriptor: TypeDescriptor::class("Printer")
                .operation(OperationSignature::new("Print").param("text", ValueType::Str))
                .build()
                .unwrap(),
        }
    }
}

impl ServiceObject for Printer {
    fn descriptor(&self) -> &TypeDescriptor {
        &self.descriptor
    }

    fn invoke(&self, operation: &str, _args: Vec<Value>) -> Result<Value, InvocationError> {
        Err(InvocationError::unknown_operation(&self.descriptor, operation))
    }
}

/// A factory building [`Calculator`]s and counting its own calls.
pub fn counting_factory() -> (TargetFactory, Arc<AtomicUsize>) {
    let produced = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&produced);
    let factory = TargetFactory::new(move || {
        counter.fetch_add(1, Ordering::SeqCst);
        Calculator::new()
    });
    (factory, produced)
}

pub fn count(counter: &AtomicUsize) -> usize {
    counter.load(Ordering::SeqCst)
}
