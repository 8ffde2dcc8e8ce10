//! The `ISampleService` contract

use service_proxy_types::{OperationSignature, TypeDescriptor, ValueType};
use std::sync::OnceLock;

/// Name of the sample contract.
pub const SAMPLE_SERVICE_CONTRACT: &str = "ISampleService";

/// The contract's only operation.
pub const CALCULATE: &str = "Calculate";

pub(crate) fn calculate_signature() -> OperationSignature {
    OperationSignature::new(CALCULATE)
        .param("value1", ValueType::Int)
        .param("value2", ValueType::Int)
        .returns(ValueType::Int)
}

/// The process-wide `ISampleService` descriptor.
///
/// Always returns the same descriptor, so proxies requested for it share
/// one cache entry.
pub fn sample_service_contract() -> &'static TypeDescriptor {
    static CONTRACT: OnceLock<TypeDescriptor> = OnceLock::new();
    CONTRACT.get_or_init(|| {
        TypeDescriptor::interface(SAMPLE_SERVICE_CONTRACT)
            .operation(calculate_signature())
            .build()
            .expect("sample contract is well formed")
    })
}
