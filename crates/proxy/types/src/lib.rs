//! Service Proxy Types - the object model shared by every proxy crate
//!
//! This crate describes *what* can be proxied and *how* calls travel:
//!
//! - **TypeDescriptor**: structural description of an interface or class
//!   (operations, fields, identity)
//! - **OperationSignature**: name, ordered parameters and return type
//! - **Value / ValueType**: dynamic arguments and results
//! - **ServiceObject**: anything that can receive operation calls
//! - **Fault / InvocationError**: failures raised while invoking operations
//!
//! ## Identity
//!
//! Descriptors are nominal: every `build()` mints a fresh [`DescriptorId`].
//! Two descriptors with the same shape but built separately are distinct
//! types, which is why contracts are usually built once and shared.

#![deny(unsafe_code)]
#![cfg_attr(feature = "strict-docs", warn(missing_docs))]
#![cfg_attr(not(feature = "strict-docs"), allow(missing_docs))]

pub mod descriptor;
pub mod error;
pub mod ids;
pub mod object;
pub mod signature;
pub mod value;

// Re-exports
pub use descriptor::{ConformanceGap, FieldDescriptor, TypeDescriptor, TypeDescriptorBuilder, TypeKind};
pub use error::{DescriptorError, Fault, InvocationError, ValueTypeError};
pub use ids::DescriptorId;
pub use object::{Arguments, ServiceObject};
pub use signature::{OperationSignature, Parameter};
pub use value::{Value, ValueType};
