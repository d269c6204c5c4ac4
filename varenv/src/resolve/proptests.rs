//! Property-based tests for value-set building and symbol resolution.

use std::collections::BTreeMap;

use proptest::prelude::*;

use super::{build_value_set, resolve_values};
use crate::value::{Number, Value};

fn scalar_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| Value::Number(Number::Int(n))),
        "[a-z0-9 ]{0,12}".prop_map(Value::String),
    ]
}

fn environment_names(len: usize) -> Vec<String> {
    (0..len).map(|i| format!("env{i}")).collect()
}

fn symbol(target: &str) -> Value {
    let mut map = BTreeMap::new();
    map.insert(target.to_string(), Value::Null);
    Value::Mapping(map)
}

proptest! {
    // All-scalar arrays resolve to exactly the values that went in.
    #[test]
    fn scalar_sets_resolve_to_identity(values in prop::collection::vec(scalar_value(), 1..8)) {
        let environments = environment_names(values.len());
        let (slots, errors) = build_value_set(&environments, &values);
        prop_assert!(errors.is_empty());

        let resolved = resolve_values(&slots).unwrap();
        prop_assert_eq!(resolved.len(), environments.len());
        for (environment, expected) in environments.iter().zip(&values) {
            prop_assert_eq!(&resolved[environment], expected);
        }
    }

    // A linear reference chain collapses every environment onto the head
    // scalar, regardless of chain length.
    #[test]
    fn chains_collapse_to_head_scalar(head in scalar_value(), len in 2_usize..8) {
        let environments = environment_names(len);
        let mut raw = vec![head.clone()];
        for i in 1..len {
            raw.push(symbol(&environments[i - 1]));
        }

        let (slots, errors) = build_value_set(&environments, &raw);
        prop_assert!(errors.is_empty());
        let resolved = resolve_values(&slots).unwrap();
        for environment in &environments {
            prop_assert_eq!(&resolved[environment], &head);
        }
    }

    // Wrong-length arrays always fail with exactly one error and no slots.
    #[test]
    fn length_mismatch_yields_single_error(
        values in prop::collection::vec(scalar_value(), 0..8),
        extra in 1_usize..4,
    ) {
        let environments = environment_names(values.len() + extra);
        let (slots, errors) = build_value_set(&environments, &values);
        prop_assert!(slots.is_empty());
        prop_assert_eq!(errors.len(), 1);
    }
}
