//! Type descriptors for interfaces and classes
//!
//! A [`TypeDescriptor`] is immutable once built. Clones share the same
//! allocation and the same [`DescriptorId`], so equality and hashing are by
//! identity, not by shape.

use crate::error::DescriptorError;
use crate::ids::DescriptorId;
use crate::signature::OperationSignature;
use crate::value::ValueType;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Kind of a described type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    /// Abstract operation signatures only
    Interface,
    /// A concrete, implemented type
    Class,
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeKind::Interface => write!(f, "interface"),
            TypeKind::Class => write!(f, "class"),
        }
    }
}

/// A data member of a type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    pub ty: ValueType,
}

/// One way a type falls short of an interface
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "gap", rename_all = "snake_case")]
pub enum ConformanceGap {
    /// The interface operation has no same-named counterpart
    Missing { operation: String },
    /// A same-named operation exists with a different signature
    Mismatched {
        expected: OperationSignature,
        found: OperationSignature,
    },
}

impl fmt::Display for ConformanceGap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConformanceGap::Missing { operation } => write!(f, "missing `{}`", operation),
            ConformanceGap::Mismatched { expected, found } => {
                write!(f, "`{}` does not match `{}`", found, expected)
            }
        }
    }
}

#[derive(Debug, Serialize)]
struct DescriptorInner {
    id: DescriptorId,
    name: String,
    kind: TypeKind,
    operations: Vec<OperationSignature>,
    fields: Vec<FieldDescriptor>,
}

/// Structural description of an interface or class
#[derive(Clone, Serialize)]
#[serde(transparent)]
pub struct TypeDescriptor {
    inner: Arc<DescriptorInner>,
}

impl TypeDescriptor {
    /// Start describing an interface.
    pub fn interface(name: impl Into<String>) -> TypeDescriptorBuilder {
        TypeDescriptorBuilder::new(name, TypeKind::Interface)
    }

    /// Start describing a concrete class.
    pub fn class(name: impl Into<String>) -> TypeDescriptorBuilder {
        TypeDescriptorBuilder::new(name, TypeKind::Class)
    }

    /// A new class named `name` declaring exactly this type's operations.
    ///
    /// The result has its own identity. Fields are not carried over.
    pub fn implementation_of(&self, name: impl Into<String>) -> TypeDescriptor {
        TypeDescriptor {
            inner: Arc::new(DescriptorInner {
                id: DescriptorId::generate(),
                name: name.into(),
                kind: TypeKind::Class,
                operations: self.inner.operations.clone(),
                fields: Vec::new(),
            }),
        }
    }

    pub fn id(&self) -> DescriptorId {
        self.inner.id
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    pub fn kind(&self) -> TypeKind {
        self.inner.kind
    }

    pub fn operations(&self) -> &[OperationSignature] {
        &self.inner.operations
    }

    pub fn operation(&self, name: &str) -> Option<&OperationSignature> {
        self.inner.operations.iter().find(|op| op.name() == name)
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.inner.fields
    }

    pub fn is_interface(&self) -> bool {
        self.inner.kind == TypeKind::Interface
    }

    /// An interface with no data members.
    pub fn is_pure_interface(&self) -> bool {
        self.is_interface() && self.inner.fields.is_empty()
    }

    /// Every way this type fails to provide the operations of `interface`.
    ///
    /// Empty when each interface operation has a same-named operation here
    /// with a matching signature.
    pub fn conformance_gaps(&self, interface: &TypeDescriptor) -> Vec<ConformanceGap> {
        interface
            .operations()
            .iter()
            .filter_map(|expected| match self.operation(expected.name()) {
                None => Some(ConformanceGap::Missing {
                    operation: expected.name().to_string(),
                }),
                Some(found) if !found.matches(expected) => Some(ConformanceGap::Mismatched {
                    expected: expected.clone(),
                    found: found.clone(),
                }),
                Some(_) => None,
            })
            .collect()
    }

    pub fn conforms_to(&self, interface: &TypeDescriptor) -> bool {
        self.conformance_gaps(interface).is_empty()
    }
}

impl PartialEq for TypeDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.inner.id == other.inner.id
    }
}

impl Eq for TypeDescriptor {}

impl Hash for TypeDescriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.id.hash(state);
    }
}

impl fmt::Debug for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeDescriptor")
            .field("id", &self.inner.id)
            .field("name", &self.inner.name)
            .field("kind", &self.inner.kind)
            .field("operations", &self.inner.operations.len())
            .field("fields", &self.inner.fields.len())
            .finish()
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.inner.kind, self.inner.name)
    }
}

/// Builder for [`TypeDescriptor`]
#[derive(Debug, Clone)]
pub struct TypeDescriptorBuilder {
    name: String,
    kind: TypeKind,
    operations: Vec<OperationSignature>,
    fields: Vec<FieldDescriptor>,
}

impl TypeDescriptorBuilder {
    fn new(name: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            operations: Vec::new(),
            fields: Vec::new(),
        }
    }

    pub fn operation(mut self, signature: OperationSignature) -> Self {
        self.operations.push(signature);
        self
    }

    pub fn operations<I>(mut self, signatures: I) -> Self
    where
        I: IntoIterator<Item = OperationSignature>,
    {
        self.operations.extend(signatures);
        self
    }

    /// Declare a data member.
    ///
    /// Allowed on interfaces too, so callers can describe foreign types
    /// faithfully; such interfaces are not pure and cannot be proxied.
    pub fn field(mut self, name: impl Into<String>, ty: ValueType) -> Self {
        self.fields.push(FieldDescriptor {
            name: name.into(),
            ty,
        });
        self
    }

    pub fn build(self) -> Result<TypeDescriptor, DescriptorError> {
        if self.name.trim().is_empty() {
            return Err(DescriptorError::EmptyName);
        }

        let mut seen = HashSet::new();
        for (index, op) in self.operations.iter().enumerate() {
            if op.name().is_empty() {
                return Err(DescriptorError::EmptyOperationName {
                    type_name: self.name.clone(),
                    index,
                });
            }
            if !seen.insert(op.name()) {
                return Err(DescriptorError::DuplicateOperation {
                    type_name: self.name.clone(),
                    operation: op.name().to_string(),
                });
            }
        }

        let mut seen = HashSet::new();
        for field in &self.fields {
            if !seen.insert(field.name.as_str()) {
                return Err(DescriptorError::DuplicateField {
                    type_name: self.name.clone(),
                    field: field.name.clone(),
                });
            }
        }

        Ok(TypeDescriptor {
            inner: Arc::new(DescriptorInner {
                id: DescriptorId::generate(),
                name: self.name,
                kind: self.kind,
                operations: self.operations,
                fields: self.fields,
            }),
        })
    }
}
