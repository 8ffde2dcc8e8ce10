//! Property tests: synthesized types mirror their interface.

use proptest::prelude::*;
use service_proxy_synthesizer::ProxySynthesizer;
use service_proxy_types::{OperationSignature, TypeDescriptor, ValueType};

fn arb_value_type() -> impl Strategy<Value = ValueType> {
    prop_oneof![
        Just(ValueType::Unit),
        Just(ValueType::Bool),
        Just(ValueType::Int),
        Just(ValueType::Float),
        Just(ValueType::Str),
        Just(ValueType::Bytes),
        Just(ValueType::Any),
        Just(ValueType::list(ValueType::Int)),
    ]
}

fn arb_signature(name: String) -> impl Strategy<Value = OperationSignature> {
    (
        prop::collection::vec(arb_value_type(), 0..4),
        arb_value_type(),
    )
        .prop_map(move |(params, returns)| {
            params
                .into_iter()
                .enumerate()
                .fold(OperationSignature::new(name.clone()), |op, (i, ty)| {
                    op.param(format!("arg{}", i), ty)
                })
                .returns(returns)
        })
}

fn arb_interface() -> impl Strategy<Value = TypeDescriptor> {
    (
        "I[A-Z][a-z]{2,10}",
        prop::collection::btree_set("[A-Z][a-z]{2,10}", 0..6),
    )
        .prop_flat_map(|(name, ops)| {
            let signatures: Vec<_> = ops.into_iter().map(arb_signature).collect();
            (Just(name), signatures)
        })
        .prop_map(|(name, signatures)| {
            TypeDescriptor::interface(name)
                .operations(signatures)
                .build()
                .unwrap()
        })
}

proptest! {
    /// The generated class conforms to its interface and is named after it.
    #[test]
    fn generated_type_conforms(interface in arb_interface()) {
        let synthesizer = ProxySynthesizer::default();
        let proxy_type = synthesizer
            .get_proxy_type(&interface, service_proxy_synthesizer::TargetFactory::new(|| {
                Stub(TypeDescriptor::class("Stub").build().unwrap())
            }))
            .unwrap();

        prop_assert!(proxy_type.descriptor().conforms_to(&interface));
        prop_assert!(!proxy_type.descriptor().is_interface());
        prop_assert_eq!(proxy_type.name(), format!("{}Proxy", interface.name()));
        prop_assert_ne!(proxy_type.id(), interface.id());
    }
}

struct Stub(TypeDescriptor);

impl service_proxy_types::ServiceObject for Stub {
    fn descriptor(&self) -> &TypeDescriptor {
        &self.0
    }

    fn invoke(
        &self,
        operation: &str,
        _args: Vec<service_proxy_types::Value>,
    ) -> Result<service_proxy_types::Value, service_proxy_types::InvocationError> {
        Err(service_proxy_types::InvocationError::unknown_operation(&self.0, operation))
    }
}
