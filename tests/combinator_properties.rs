//! Property-based tests for the combinator and validator laws

use proptest::prelude::*;
use shallows::prelude::*;

fn leaf_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Absent),
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i32>().prop_map(|n| Value::from(f64::from(n))),
        "[a-zA-Z0-9 :-]{0,20}".prop_map(Value::from),
    ]
}

fn any_value() -> impl Strategy<Value = Value> {
    leaf_value().prop_recursive(2, 8, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Seq),
            prop::collection::btree_map("[a-z]{1,4}", inner, 0..4).prop_map(Value::Map),
        ]
    })
}

// One of each factory, cycling over the index
fn factory(ix: usize) -> Validator {
    match ix % 8 {
        0 => valid_string(None),
        1 => valid_number(None),
        2 => valid_bool(None),
        3 => valid_date_format(None),
        4 => valid_date_time_format(None),
        5 => valid_date_utc_format(None),
        6 => one_of(vec![Value::from("a"), Value::from(1)], None),
        _ => required(None),
    }
}

proptest! {
    #[test]
    fn prop_chain_length_equals_failure_count(
        val in any_value(),
        ixs in prop::collection::vec(0usize..8, 0..6)
    ) {
        let individual_failures = ixs
            .iter()
            .filter(|&&ix| factory(ix)(&val).is_fail())
            .count();

        let validators: Vec<Validator> = ixs.iter().map(|&ix| factory(ix)).collect();
        let errors = chain(validators)(&val);

        prop_assert_eq!(errors.len(), individual_failures);
    }

    #[test]
    fn prop_first_error_matches_first_failure(
        val in any_value(),
        ixs in prop::collection::vec(0usize..8, 0..6)
    ) {
        let expected = ixs
            .iter()
            .find_map(|&ix| factory(ix)(&val).fail_payload());

        let validators: Vec<Validator> = ixs.iter().map(|&ix| factory(ix)).collect();
        let result = first_error(validators)(&val);

        match expected {
            Some(error) => prop_assert_eq!(result, vec![error]),
            None => prop_assert!(result.is_empty()),
        }
    }

    #[test]
    fn prop_validators_are_idempotent(val in any_value(), ix in 0usize..8) {
        let validator = factory(ix);
        prop_assert_eq!(validator(&val), validator(&val));
    }

    #[test]
    fn prop_failure_messages_are_non_empty(val in any_value(), ix in 0usize..8) {
        if let Verdict::Fail(msg) = factory(ix)(&val) {
            prop_assert!(!msg.is_empty());
        }
    }

    #[test]
    fn prop_normalize_is_deterministic(val in any_value()) {
        prop_assert_eq!(normalize_boolean(&val), normalize_boolean(&val));
    }

    #[test]
    fn prop_normalize_number_is_exactly_one(n in any::<i32>()) {
        let val = Value::from(f64::from(n));
        prop_assert_eq!(normalize_boolean(&val), Ok(n == 1));
    }

    #[test]
    fn prop_valid_string_agrees_with_predicate(val in any_value()) {
        let verdict = valid_string(None)(&val);
        prop_assert_eq!(verdict.is_pass(), is_string(&val));
    }
}
