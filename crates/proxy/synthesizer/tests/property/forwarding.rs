//! Property tests: a proxy instance is observationally its target.

use crate::common::*;
use proptest::prelude::*;
use service_proxy_synthesizer::{ProxySynthesizer, SynthesizerConfig};
use service_proxy_types::{ServiceObject, Value};

// ---------------------------------------------------------------------------
// Helpers / Strategies
// ---------------------------------------------------------------------------

fn arb_operand() -> impl Strategy<Value = i64> {
    -1_000_000i64..1_000_000
}

fn arb_config() -> impl Strategy<Value = SynthesizerConfig> {
    any::<bool>().prop_map(|strict| SynthesizerConfig {
        strict_arguments: strict,
        ..Default::default()
    })
}

// ---------------------------------------------------------------------------
// Property Tests
// ---------------------------------------------------------------------------

proptest! {
    /// Every call through the proxy returns what the target returns.
    #[test]
    fn proxy_returns_target_result(
        config in arb_config(),
        calls in prop::collection::vec((arb_operand(), arb_operand()), 1..20),
    ) {
        let synthesizer = ProxySynthesizer::new(config);
        let (factory, _) = counting_factory();
        let proxy_type = synthesizer.get_proxy_type(&calculator_contract(), factory).unwrap();
        let instance = proxy_type.instantiate().unwrap();
        let direct = Calculator::new();

        for (a, b) in calls {
            let args = vec![Value::Int(a), Value::Int(b)];
            prop_assert_eq!(
                instance.invoke("Calculate", args.clone()),
                direct.invoke("Calculate", args.clone())
            );
            prop_assert_eq!(
                instance.invoke("Divide", args.clone()),
                direct.invoke("Divide", args)
            );
        }
    }

    /// N constructions call the first-bound factory exactly N times.
    #[test]
    fn factory_calls_match_instances(instances in 0usize..32, late_requests in 0usize..4) {
        let synthesizer = ProxySynthesizer::default();
        let contract = calculator_contract();
        let (first, first_calls) = counting_factory();
        let proxy_type = synthesizer.get_proxy_type(&contract, first).unwrap();

        let mut late_counters = Vec::new();
        for _ in 0..late_requests {
            let (late, calls) = counting_factory();
            let again = synthesizer.get_proxy_type(&contract, late).unwrap();
            prop_assert_eq!(&again, &proxy_type);
            late_counters.push(calls);
        }

        for _ in 0..instances {
            proxy_type.instantiate().unwrap();
        }

        prop_assert_eq!(count(&first_calls), instances);
        prop_assert!(late_counters.iter().all(|calls| count(calls) == 0));
        prop_assert_eq!(synthesizer.stats().discarded_factories, late_requests as u64);
    }

    /// Operations outside the interface never reach the target.
    #[test]
    fn unknown_operations_are_rejected(operation in "[A-Z][a-z]{2,12}") {
        prop_assume!(operation != "Calculate" && operation != "Divide");

        let synthesizer = ProxySynthesizer::default();
        let (factory, _) = counting_factory();
        let proxy_type = synthesizer.get_proxy_type(&calculator_contract(), factory).unwrap();
        let instance = proxy_type.instantiate().unwrap();

        let err = instance.invoke(&operation, vec![]).unwrap_err();
        prop_assert!(err.to_string().contains(&operation));
    }
}
