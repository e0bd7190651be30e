use std::hash::{BuildHasher, RandomState};

use googletest::prelude::*;
use strum::IntoEnumIterator;
use test_casing::{TestCases, cases, test_casing};

use super::*;
use crate::testutil::*;

fn all_params() -> Vec<CommandParameter> {
    let mut params = Vec::new();
    for kind in ParameterKind::iter() {
        params.push(scalar_param::<DeployCommand>(kind, "Count", "--count"));
        params.push(scalar_param::<DeployCommand>(kind, "Count", "-c"));
        params.push(scalar_param::<DeployCommand>(kind, "Level", "--count"));
        params.push(scalar_param::<BuildCommand>(kind, "Count", "--count"));
        params.push(collection_param::<DeployCommand>(kind, "Count", "--count"));
    }
    params
}

#[gtest]
fn test_accessors() {
    let param = CommandParameter::new(
        ParameterKind::Option,
        TypeKey::of::<DeployCommand>(),
        "Verbose",
        "--verbose",
        ParameterSetter::scalar::<bool>("Verbose"),
        Some("Print more output.".into()),
    );

    expect_that!(param.kind(), eq(ParameterKind::Option));
    expect_that!(param.declaring_type(), eq(TypeKey::of::<DeployCommand>()));
    expect_that!(param.property_name(), eq("Verbose"));
    expect_that!(param.name(), eq("--verbose"));
    expect_that!(param.value_type(), eq(TypeKey::of::<bool>()));
    expect_that!(param.description(), some(eq("Print more output.")));
}

#[gtest]
fn test_empty_names_are_not_rejected() {
    let param = scalar_param::<DeployCommand>(ParameterKind::Argument, "", "");

    expect_that!(param.property_name(), eq(""));
    expect_that!(param.to_string(), eq(""));
}

#[gtest]
fn test_equality_is_reflexive() {
    for param in all_params() {
        expect_that!(param == param, eq(true), "{param:?}");
    }
}

#[gtest]
fn test_equality_is_symmetric() {
    let params = all_params();
    for a in &params {
        for b in &params {
            expect_that!(a == b, eq(b == a), "{a:?} vs {b:?}");
        }
    }
}

#[gtest]
fn test_equality_is_transitive() {
    let params = all_params();
    let clones = all_params();
    for a in &params {
        for b in &clones {
            for c in &params {
                if a == b && b == c {
                    expect_that!(a == c, eq(true), "{a:?} vs {c:?}");
                }
            }
        }
    }
}

#[gtest]
fn test_equal_params_hash_equally() {
    let state = RandomState::new();
    let params = all_params();
    let clones = all_params();
    for a in &params {
        for b in clones.iter().filter(|b| a == *b) {
            expect_that!(state.hash_one(a), eq(state.hash_one(b)), "{a:?}");
        }
    }
}

#[gtest]
fn test_hash_ignores_kind_name_and_value_type() {
    let state = RandomState::new();
    let base = scalar_param::<DeployCommand>(ParameterKind::Argument, "Count", "--count");
    let other_kind = scalar_param::<DeployCommand>(ParameterKind::Option, "Count", "--count");
    let other_name = scalar_param::<DeployCommand>(ParameterKind::Argument, "Count", "-c");
    let other_value_type = CommandParameter::new(
        ParameterKind::Argument,
        TypeKey::of::<DeployCommand>(),
        "Count",
        "--count",
        ParameterSetter::scalar::<u8>("Count"),
        None,
    );

    expect_that!(state.hash_one(&other_kind), eq(state.hash_one(&base)));
    expect_that!(state.hash_one(&other_name), eq(state.hash_one(&base)));
    expect_that!(state.hash_one(&other_value_type), eq(state.hash_one(&base)));
}

#[gtest]
fn test_different_kinds_are_not_equal() {
    let argument = scalar_param::<DeployCommand>(ParameterKind::Argument, "Count", "--count");
    let option = scalar_param::<DeployCommand>(ParameterKind::Option, "Count", "--count");

    expect_false!(argument == option);
}

#[gtest]
fn test_same_kind_with_other_identity_is_not_equal() {
    let base = scalar_param::<DeployCommand>(ParameterKind::Option, "Count", "--count");
    let others = [
        (
            "other declaring type",
            scalar_param::<BuildCommand>(ParameterKind::Option, "Count", "--count"),
        ),
        (
            "other property",
            scalar_param::<DeployCommand>(ParameterKind::Option, "Level", "--count"),
        ),
        (
            "other name",
            scalar_param::<DeployCommand>(ParameterKind::Option, "Count", "-c"),
        ),
    ];

    for (description, other) in others {
        expect_that!(base == other, eq(false), "{description}");
    }
}

#[gtest]
fn test_value_type_and_description_do_not_affect_equality() {
    let base = scalar_param::<DeployCommand>(ParameterKind::Option, "Count", "--count");
    let other = CommandParameter::new(
        ParameterKind::Option,
        TypeKey::of::<DeployCommand>(),
        "Count",
        "--count",
        ParameterSetter::collection::<String>("Count"),
        Some("Number of things.".into()),
    );

    expect_that!(base, eq(&other));
}

#[gtest]
fn test_absent_parameters() {
    let param = scalar_param::<DeployCommand>(ParameterKind::Option, "Count", "--count");
    let same = param.clone();
    let none: Option<&CommandParameter> = None;

    expect_true!(none == None);
    expect_false!(none == Some(&param));
    expect_false!(Some(&param) == none);
    expect_true!(Some(&param) == Some(&same));
}

#[gtest]
fn test_eq_any() {
    let param = scalar_param::<DeployCommand>(ParameterKind::Option, "Count", "--count");
    let same = param.clone();

    expect_true!(param.eq_any(&same));
    expect_false!(param.eq_any(&"--count"));
    expect_false!(param.eq_any(&"--count".to_string()));
    expect_false!(param.eq_any(&ParameterKind::Option));
}

const DISPLAY_CASES: TestCases<&'static str> = cases! {
    [
        "--verbose",
        "-v",
        "FILE",
        "<input path>",
    ]
};

#[test]
fn test_display_cases_len() {
    assert_eq!(4, DISPLAY_CASES.into_iter().count());
}

#[test_casing(4, DISPLAY_CASES)]
#[gtest]
fn test_display_is_name(name: &'static str) {
    let param = scalar_param::<DeployCommand>(ParameterKind::Option, "Verbose", name);

    expect_that!(param.to_string(), eq(name));
}

#[gtest]
fn test_assign_scalar() -> anyhow::Result<()> {
    let param = scalar_param::<DeployCommand>(ParameterKind::Argument, "Count", "COUNT");
    let mut context = CommandContext::new();

    param.assign(&mut context, &["42"], &int_registry())?;

    expect_that!(context.get::<i64>("Count"), some(eq(&42)));

    Ok(())
}

#[gtest]
fn test_assign_passes_values_through_in_order() -> anyhow::Result<()> {
    let param = collection_param::<DeployCommand>(ParameterKind::Option, "Ids", "--id");
    let mut context = CommandContext::new();

    param.assign(&mut context, &["1", "2", "3"], &int_registry())?;

    expect_that!(context.get::<Vec<i64>>("Ids"), some(eq(&vec![1, 2, 3])));

    Ok(())
}

#[gtest]
fn test_assign_missing_converter() {
    let param = scalar_param::<DeployCommand>(ParameterKind::Argument, "Count", "COUNT");
    let mut context = CommandContext::new();

    let result = param.assign(&mut context, &["42"], &ConverterRegistry::new());

    expect_true!(matches!(
        result,
        Err(ConversionError::MissingConverter { value_type }) if value_type == param.value_type()
    ));
    expect_false!(context.contains("Count"));
}

#[gtest]
fn test_assign_malformed_value() {
    let param = scalar_param::<DeployCommand>(ParameterKind::Argument, "Count", "COUNT");
    let mut context = CommandContext::new();

    let result = param.assign(&mut context, &["abc"], &int_registry());

    expect_true!(matches!(
        result,
        Err(ConversionError::InvalidValue { ref raw, value_type, .. })
            if raw == "abc" && value_type == TypeKey::of::<i64>()
    ));
    expect_false!(context.contains("Count"));
}

#[gtest]
fn test_shared_across_threads() {
    let param = collection_param::<DeployCommand>(ParameterKind::Option, "Ids", "--id");
    let converters = int_registry();

    let results: Vec<Option<Vec<i64>>> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4i64)
            .map(|i| {
                let param = &param;
                let converters = &converters;
                scope.spawn(move || {
                    let mut context = CommandContext::new();
                    let raw = [i.to_string(), (i * 10).to_string()];
                    let values: Vec<&str> = raw.iter().map(String::as_str).collect();
                    param.assign(&mut context, &values, converters).ok()?;
                    context.get::<Vec<i64>>("Ids").cloned()
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap_or(None))
            .collect()
    });

    for (i, result) in (0..4i64).zip(results) {
        expect_that!(result, some(eq(&vec![i, i * 10])));
    }
}
