use proptest::prelude::*;
use reckon::{EvalError, Evaluator, Number, evaluate};

fn eval(text: &str) -> f64 {
    evaluate(text).expect("evaluation should succeed")
}

fn eval_error(text: &str) -> EvalError {
    match evaluate(text) {
        Ok(value) => panic!("expected error, received value {value}"),
        Err(err) => err,
    }
}

#[test]
fn evaluates_with_precedence() {
    assert_eq!(eval("2+3*4"), 14.0);
    assert_eq!(eval("(2+3)*4"), 20.0);
}

#[test]
fn evaluates_left_to_right() {
    assert_eq!(eval("10-2-3"), 5.0);
    assert_eq!(eval("100/10/2"), 5.0);
}

#[test]
fn evaluates_decimals() {
    assert_eq!(eval("1.5+2.5"), 4.0);
    assert_eq!(eval("3.25 * 4"), 13.0);
}

#[test]
fn reports_errors_with_calculator_messages() {
    let cases = [
        ("5/0", "division by zero"),
        ("(2+3", "missing closing parenthesis"),
        ("2+3)", "unexpected character at position 3"),
        ("", "expected number at position 0"),
        ("2++3", "expected number at position 2"),
        ("-5+3", "expected number at position 0"),
        ("1.2.3", "invalid number format"),
        ("2(3+4)", "unexpected character at position 1"),
    ];
    for (input, message) in cases {
        assert_eq!(eval_error(input).to_string(), message, "input {input:?}");
    }
}

#[test]
fn conversion_failures_carry_the_literal() {
    let err = eval_error("1+.");
    assert!(matches!(err, EvalError::InvalidLiteral { .. }));
    assert!(err.to_string().starts_with("parsing \".\": "));
}

#[test]
fn evaluator_exposes_stripped_input() {
    let evaluator = Evaluator::new(" 4 / ( 1 + 1 ) ");
    assert_eq!(evaluator.input(), "4/(1+1)");
    assert_eq!(evaluator.run(), Ok(2.0));
}

#[test]
fn evaluations_are_independent_across_threads() {
    let handles: Vec<_> = (1..=8)
        .map(|n| std::thread::spawn(move || evaluate(&format!("({n}+{n})*{n}"))))
        .collect();
    for (n, handle) in (1..=8).zip(handles) {
        let n = n as f64;
        assert_eq!(handle.join().expect("thread"), Ok((n + n) * n));
    }
}

#[test]
fn results_display_like_the_calculator() {
    assert_eq!(Number(eval("2+3*4")).to_string(), "14");
    assert_eq!(Number(eval("1000*1000")).to_string(), "1e+06");
    assert_eq!(Number(eval("1/3")).to_string(), "0.3333333333333333");
}

fn expression_strategy() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![
        (0u32..1000).prop_map(|n| n.to_string()),
        (0u32..1000, 0u32..100).prop_map(|(whole, frac)| format!("{whole}.{frac}")),
    ];
    leaf.prop_recursive(4, 32, 2, |inner| {
        prop_oneof![
            (inner.clone(), "[-+*/]", inner.clone())
                .prop_map(|(lhs, op, rhs)| format!("{lhs}{op}{rhs}")),
            inner.prop_map(|expr| format!("({expr})")),
        ]
    })
}

fn sprinkle_spaces(expr: &str, mask: &[bool]) -> String {
    let mut spaced = String::new();
    for (idx, ch) in expr.chars().enumerate() {
        if mask.get(idx).copied().unwrap_or(false) {
            spaced.push(' ');
        }
        spaced.push(ch);
    }
    spaced
}

proptest! {
    #[test]
    fn whitespace_does_not_change_the_outcome(
        expr in expression_strategy(),
        mask in prop::collection::vec(any::<bool>(), 0..64),
    ) {
        let spaced = sprinkle_spaces(&expr, &mask);
        let plain = evaluate(&expr);
        let with_spaces = evaluate(&spaced);
        match (plain, with_spaces) {
            (Ok(a), Ok(b)) => prop_assert!(a == b || (a.is_nan() && b.is_nan())),
            (a, b) => prop_assert_eq!(a, b),
        }
    }

    #[test]
    fn evaluation_is_repeatable(expr in expression_strategy()) {
        let first = evaluate(&expr);
        let second = evaluate(&expr);
        match (first, second) {
            (Ok(a), Ok(b)) => prop_assert!(a == b || (a.is_nan() && b.is_nan())),
            (a, b) => prop_assert_eq!(a, b),
        }
    }

    #[test]
    fn subtraction_chains_fold_left(a in 0u32..10_000, b in 0u32..10_000, c in 0u32..10_000) {
        let expected = (a as f64 - b as f64) - c as f64;
        prop_assert_eq!(evaluate(&format!("{a}-{b}-{c}")), Ok(expected));
    }

    #[test]
    fn multiplication_precedes_addition(a in 0u32..1000, b in 0u32..1000, c in 0u32..1000) {
        let expected = a as f64 + (b as f64 * c as f64);
        prop_assert_eq!(evaluate(&format!("{a} + {b} * {c}")), Ok(expected));
    }
}
