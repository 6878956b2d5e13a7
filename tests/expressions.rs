use std::fs;

use treecalc::{
    Error,
    error::{EvalError, LexError, ParseError},
    evaluate, parse,
};
use walkdir::WalkDir;

#[test]
fn sample_files_evaluate_to_their_expected_values() {
    let mut count = 0;

    for entry in
        WalkDir::new("samples").into_iter()
                               .filter_map(Result::ok)
                               .filter(|e| e.path().extension().is_some_and(|ext| ext == "txt"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (expression, expected) in extract_cases(&content) {
            count += 1;
            match evaluate(&expression) {
                Ok(value) => assert_close(value, expected, &expression),
                Err(e) => panic!("Expression {expression:?} in {path:?} failed:\nError: {e:?}"),
            }
        }
    }

    assert!(count > 0, "No expressions found in samples");
}

/// Collects the `expression = expected` lines of a sample file.
fn extract_cases(content: &str) -> Vec<(String, f64)> {
    content.lines()
           .map(str::trim)
           .filter(|line| !line.is_empty() && !line.starts_with('#'))
           .map(|line| {
               let (expression, expected) =
                   line.rsplit_once('=')
                       .unwrap_or_else(|| panic!("Sample line without expected value: {line}"));
               let expected = expected.trim()
                                      .parse()
                                      .unwrap_or_else(|e| panic!("Bad expected value in {line}: {e}"));
               (expression.trim().to_string(), expected)
           })
           .collect()
}

fn assert_close(actual: f64, expected: f64, src: &str) {
    let tolerance = 1e-9 * expected.abs().max(1.0);
    assert!((actual - expected).abs() <= tolerance,
            "{src}: expected {expected}, got {actual}");
}

fn assert_success(src: &str, expected: f64) {
    match evaluate(src) {
        Ok(value) => assert_close(value, expected, src),
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

fn assert_failure(src: &str, expected: &Error) {
    match evaluate(src) {
        Ok(value) => panic!("Expression {src:?} evaluated to {value} but was expected to fail"),
        Err(e) => assert_eq!(&e, expected, "{src}"),
    }
}

fn parse_failure(error: ParseError) -> Error {
    Error::Parse(error)
}

fn eval_failure(error: EvalError) -> Error {
    Error::Eval(error)
}

#[test]
fn basic_arithmetic() {
    assert_success("3.5 + 4.5", 8.0);
    assert_success("5.4 - 3.2", 2.2);
    assert_success("4.2 * 1.2", 5.04);
    assert_success("6.7 / 3.1", 6.7 / 3.1);
    assert_success("(3.5 + 3.2) * 2", 13.4);
    assert_success("4.2 / (1.2 * 2.3)", 1.521_739_130_434_782_7);
}

#[test]
fn exponentiation() {
    assert_success("2^3", 8.0);
    assert_success("2^-0.5", std::f64::consts::FRAC_1_SQRT_2);
    assert_success("2^3.5", 11.313_708_498_984_761);
    assert_success("2 ^ (1 + 1)", 4.0);
    assert!(evaluate("(0 - 8)^0.5").unwrap().is_nan());
}

#[test]
fn reduction_is_strictly_left_to_right() {
    assert_success("1 + 2 * 3", 9.0);
    assert_success("2 * 3 + 4", 10.0);
    assert_success("10 - 4 - 3", 3.0);
    assert_success("2 ^ 3 ^ 2", 64.0);
    assert_success("1 + (2 * 3)", 7.0);
}

#[test]
fn unary_minus() {
    assert_success("-5 + 2", -3.0);
    assert_success("3 - -2", 5.0);
    assert_success("(-2) * 3", -6.0);
    assert_success("3-2", 1.0);
    assert_failure("- 5", &parse_failure(ParseError::InsufficientOperands));
}

#[test]
fn functions() {
    assert_success("sin(0)", 0.0);
    assert_success("cos(0)", 1.0);
    assert_success("tan(0)", 0.0);
    assert_success("ln(1)", 0.0);
    assert_success("log(100)", 2.0);
    assert_success("sqrt(144)", 12.0);
    assert_success("sinh(0)", 0.0);
    assert_success("cosh(0)", 1.0);
    assert_success("sech(0)", 1.0);
    assert_success("sin(1 + 2)", 3.0_f64.sin());
    assert_success("sqrt(sqrt(16))", 2.0);
}

#[test]
fn bare_operands_for_ln_log_and_sqrt() {
    assert_success("ln5", 5.0_f64.ln());
    assert_success("sqrt 16", 4.0);
    assert_success("log 100 + 1", 3.0);
    assert_failure("ln ", &parse_failure(ParseError::InsufficientOperands));
    assert_failure("sin 1",
                   &parse_failure(ParseError::MissingParenAfterFunction {
                       function: treecalc::ast::UnaryFunction::Sin,
                   }));
}

#[test]
fn bare_function_at_end_of_input_is_a_lex_error() {
    assert_failure("2 + sqrt",
                   &parse_failure(ParseError::Lex(LexError::UnknownCharacter { character: 's',
                                                                               position:  4, })));
}

#[test]
fn factorials() {
    assert_success("5!", 120.0);
    assert_success("0!", 1.0);
    assert_success("(2 + 1)!", 6.0);
    assert_success("3!!", 720.0);
    assert_failure("(0 - 3)!", &eval_failure(EvalError::NegativeFactorial));
    assert_failure("(-3)!", &eval_failure(EvalError::NegativeFactorial));
    assert_eq!(evaluate("171!"), Ok(f64::INFINITY));
}

#[test]
fn evaluation_errors() {
    assert_failure("1 / 0", &eval_failure(EvalError::DivisionByZero));
    assert_failure("1 / (2 - 2)", &eval_failure(EvalError::DivisionByZero));
    assert_failure("sin(1 + 1 / (3 - 3))", &eval_failure(EvalError::DivisionByZero));
    assert_failure("sqrt(-1)", &eval_failure(EvalError::NegativeSqrt));
    assert_failure("cot(0)", &eval_failure(EvalError::CotUndefined));
    assert_eq!(evaluate("coth(0)"), Ok(f64::INFINITY));
}

#[test]
fn structural_errors() {
    assert_failure("(1 + 2", &parse_failure(ParseError::UnbalancedParentheses));
    assert_failure("+ 3", &parse_failure(ParseError::InsufficientOperands));
    assert_failure("3 +", &parse_failure(ParseError::InsufficientOperands));
    assert_failure("", &parse_failure(ParseError::IncompleteExpression));
    assert_failure("()", &parse_failure(ParseError::IncompleteExpression));
    assert_failure("1 2", &parse_failure(ParseError::IncompleteExpression));
    assert!(matches!(evaluate("1 + 2)"), Err(Error::Parse(ParseError::UnexpectedToken { .. }))));
}

#[test]
fn lexical_errors() {
    assert_failure("2 $ 3",
                   &parse_failure(ParseError::Lex(LexError::UnknownCharacter { character: '$',
                                                                               position:  2, })));
    assert!(matches!(evaluate("1.2.3 + 1"),
                     Err(Error::Parse(ParseError::Lex(LexError::MalformedNumber { .. })))));
}

#[test]
fn deep_nesting_is_rejected_without_overflowing() {
    let depth = 10_000;
    let source = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    assert!(matches!(evaluate(&source),
                     Err(Error::Parse(ParseError::NestingTooDeep { .. }))));

    let source = format!("{}1{}", "(".repeat(64), ")".repeat(64));
    assert_success(&source, 1.0);
}

#[test]
fn long_operator_chains_are_rejected_without_overflowing() {
    let additions = format!("1{}", " + 1".repeat(20_000));
    assert!(matches!(evaluate(&additions),
                     Err(Error::Parse(ParseError::NestingTooDeep { .. }))));

    let factorials = format!("0{}", "!".repeat(200_000));
    assert!(matches!(evaluate(&factorials),
                     Err(Error::Parse(ParseError::NestingTooDeep { .. }))));

    assert_success(&format!("1{}", " + 1".repeat(255)), 256.0);
    assert_success("2+5-3", 4.0);
}

#[test]
fn reparsing_is_idempotent() {
    for src in ["(3.5 + 3.2) * 2", "sqrt(144) + 5!", "2^-0.5", "1 / 0"] {
        assert_eq!(parse(src), parse(src), "{src}");
        assert_eq!(evaluate(src), evaluate(src), "{src}");
    }
}

#[test]
fn errors_have_readable_messages() {
    let message = evaluate("1 / 0").unwrap_err().to_string();
    assert!(message.contains("Division by zero"), "{message}");

    let message = evaluate("2 $ 3").unwrap_err().to_string();
    assert!(message.contains("'$'"), "{message}");
}
