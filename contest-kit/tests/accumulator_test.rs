use contest_kit::accum::{Limits, checked_total};
use contest_kit::errors::InputError;
use contest_kit::scan::{DEFAULT_COUNT_CEILING, Scanner};
use contest_kit::seq::format_row;

use quickcheck::TestResult;
use quickcheck::quickcheck;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Case {
    name: String,
    input: String,
    #[serde(default)]
    total: Option<i64>,
    #[serde(default)]
    failure: Option<String>,
}

const CASES: &str = r#"[
    { "name": "small positive run", "input": "5\n1 2 3 4 5\n", "total": 15 },
    { "name": "all negative run", "input": "3\n-5 -5 -5\n", "total": -15 },
    { "name": "single element", "input": "1\n-42\n", "total": -42 },
    { "name": "cancelling extremes", "input": "2\n9223372036854775807 -9223372036854775807\n", "total": 0 },
    { "name": "positive overflow", "input": "2\n9223372036854775807 1\n", "failure": "overflow" },
    { "name": "negative overflow", "input": "2\n-9223372036854775808 -1\n", "failure": "overflow" },
    { "name": "zero count", "input": "0\n", "failure": "range" },
    { "name": "count above ceiling", "input": "1000001\n", "failure": "range" },
    { "name": "word instead of number", "input": "2\nfoo 3\n", "failure": "parse" },
    { "name": "missing elements", "input": "3\n1 2\n", "failure": "parse" },
    { "name": "literal wider than i64", "input": "1\n9223372036854775808\n", "failure": "parse" }
]"#;

fn failure_kind(error: &InputError) -> &'static str {
    match error {
        InputError::EndOfInput | InputError::Malformed(_) => "parse",
        InputError::OutOfRange { .. } => "range",
        InputError::Overflow { .. } => "overflow",
        InputError::Io(_) => "io",
    }
}

fn total_of(input: &str) -> Result<i64, InputError> {
    let mut scanner = Scanner::new(input.as_bytes());
    checked_total(&mut scanner, Limits::default())
}

#[test]
fn fixture_table() -> Result<(), serde_json::Error> {
    let cases: Vec<Case> = serde_json::from_str(CASES)?;
    for case in cases {
        match (case.total, case.failure.as_deref(), total_of(&case.input)) {
            (Some(total), None, Ok(sum)) => {
                assert_eq!(sum, total, "case `{}`", case.name);
            }
            (None, Some(kind), Err(error)) => {
                assert_eq!(failure_kind(&error), kind, "case `{}`: {error}", case.name);
            }
            (_, _, outcome) => panic!("case `{}`: unexpected outcome {outcome:?}", case.name),
        }
    }
    Ok(())
}

#[test]
fn count_at_the_ceiling_is_accepted() -> Result<(), InputError> {
    let mut input = format!("{DEFAULT_COUNT_CEILING}\n");
    input.push_str(&"1 ".repeat(DEFAULT_COUNT_CEILING as usize));
    let mut scanner = Scanner::new(input.as_bytes());
    assert_eq!(
        checked_total(&mut scanner, Limits::default())?,
        DEFAULT_COUNT_CEILING
    );
    Ok(())
}

#[test]
fn repeated_runs_agree_on_success() -> Result<(), InputError> {
    let input = "4\n10 20 30 40\n";
    assert_eq!(total_of(input)?, total_of(input)?);
    Ok(())
}

#[test]
fn repeated_runs_agree_on_failure() {
    let input = format!("2\n{} 1\n", i64::MAX);
    let first = total_of(&input).unwrap_err();
    let second = total_of(&input).unwrap_err();
    assert_eq!(first.to_string(), second.to_string());
}

/// Reference model in 128-bit arithmetic: the exact total, or the index of
/// the first element whose running sum leaves the `i64` range.
fn wide_reference(values: &[i64]) -> Result<i64, usize> {
    let mut total = 0i128;
    for (index, &value) in values.iter().enumerate() {
        total += i128::from(value);
        if i64::try_from(total).is_err() {
            return Err(index);
        }
    }
    Ok(total as i64)
}

quickcheck! {
    fn prop_total_matches_wide_reference(values: Vec<i64>) -> TestResult {
        if values.is_empty() {
            return TestResult::discard();
        }
        let input = format!("{}\n{}\n", values.len(), format_row(&values));
        match (total_of(&input), wide_reference(&values)) {
            (Ok(total), Ok(expected)) => TestResult::from_bool(total == expected),
            (Err(InputError::Overflow { total, term }), Err(index)) => {
                let prefix: i128 = values[..index].iter().map(|&v| i128::from(v)).sum();
                TestResult::from_bool(
                    i128::from(total) == prefix && term == values[index],
                )
            }
            (outcome, expected) => TestResult::error(format!(
                "outcome {outcome:?} disagrees with reference {expected:?}"
            )),
        }
    }

    fn prop_saturated_prefix_always_overflows(padding: Vec<i16>) -> bool {
        let mut values = vec![i64::MAX, i64::MAX];
        values.extend(padding.iter().map(|&v| i64::from(v)));
        let input = format!("{}\n{}\n", values.len(), format_row(&values));
        matches!(
            total_of(&input),
            Err(InputError::Overflow { total: i64::MAX, term: i64::MAX })
        )
    }

    fn prop_outcome_is_deterministic(values: Vec<i64>) -> bool {
        if values.is_empty() {
            return true;
        }
        let input = format!("{}\n{}\n", values.len(), format_row(&values));
        format!("{:?}", total_of(&input)) == format!("{:?}", total_of(&input))
    }
}
