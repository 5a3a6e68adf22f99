use std::fs;

use rpni::{
    error::{EvalError, LexError},
    interpreter::{
        evaluator::{evaluate, OperandStack},
        lexer::{tokenize, TokenKind},
    },
    run_source,
};

fn eval_source(src: &str) -> (Result<OperandStack, EvalError>, String) {
    let tokens = tokenize(src).unwrap_or_else(|e| panic!("Tokenization failed: {e}"));
    let mut out = Vec::new();
    let result = evaluate(&tokens, &mut out);
    (result, String::from_utf8(out).expect("print output is UTF-8"))
}

fn assert_postfix_result(src: &str, expected: f64) {
    let (result, output) = eval_source(src);
    let stack = result.unwrap_or_else(|e| panic!("Script failed: {e}"));
    assert_eq!(stack.values(), &[expected], "wrong result for {src:?}");
    assert!(output.is_empty(), "unexpected print output for {src:?}");
}

fn printed_values(output: &str) -> Vec<f64> {
    output.lines()
          .map(|line| {
              let value = line.strip_prefix("Type: Number, Value: ")
                              .unwrap_or_else(|| panic!("malformed print line: {line:?}"));
              value.parse().unwrap()
          })
          .collect()
}

#[test]
fn postfix_arithmetic_leaves_single_result() {
    assert_postfix_result("3 4 + 2 *", 14.0);
    assert_postfix_result("10 2 8 * + 3 -", 23.0);
    assert_postfix_result("5 1 2 + 4 * + 3 -", 14.0);
    assert_postfix_result("6 2 /", 3.0);
}

#[test]
fn operators_split_adjacent_runs() {
    let tokens = tokenize("2+3").unwrap();
    let kinds: Vec<_> = tokens.into_iter().map(|t| t.kind).collect();
    assert_eq!(kinds,
               vec![TokenKind::Number(2.0), TokenKind::Plus, TokenKind::Number(3.0)]);

    assert_postfix_result("2+3", 5.0);

    // There are no negative literals; a leading minus is an operator.
    let tokens = tokenize("-5").unwrap();
    let kinds: Vec<_> = tokens.into_iter().map(|t| t.kind).collect();
    assert_eq!(kinds, vec![TokenKind::Minus, TokenKind::Number(5.0)]);
}

#[test]
fn print_pops_and_formats_top_of_stack() {
    let (result, output) = eval_source("1 2 + print");
    let stack = result.unwrap();
    assert!(stack.is_empty());
    assert_eq!(output, "Type: Number, Value: 3\n");
}

#[test]
fn print_output_follows_token_order() {
    let (result, output) = eval_source("1 print 2 print");
    assert!(result.is_ok());
    assert_eq!(output, "Type: Number, Value: 1\nType: Number, Value: 2\n");
}

#[test]
fn real_division_prints_exact_quotient() {
    let (result, output) = eval_source("2.3 4.6 / print");
    assert!(result.is_ok());
    assert_eq!(printed_values(&output), vec![2.3 / 4.6]);
}

#[test]
fn division_by_zero_is_fatal_and_prints_nothing() {
    let (result, output) = eval_source("5 0 / print");
    assert!(matches!(result, Err(EvalError::DivisionByZero { row: 1, col: 5 })));
    assert!(output.is_empty());
}

#[test]
fn stack_underflow_aborts_evaluation() {
    let (result, output) = eval_source("1 + print");
    assert!(matches!(result, Err(EvalError::StackUnderflow { row: 1, col: 3 })));
    assert!(output.is_empty());
}

#[test]
fn unknown_identifier_is_fatal() {
    let (result, _) = eval_source("1 2 + dup");
    match result {
        Err(EvalError::UnknownIdentifier { name, row: 1, col: 7 }) => assert_eq!(name, "dup"),
        other => panic!("Expected UnknownIdentifier, got {other:?}"),
    }
}

#[test]
fn malformed_digit_led_run_is_invalid_number() {
    match tokenize("12ab") {
        Err(LexError::InvalidNumber { literal, row: 1, col: 1 }) => assert_eq!(literal, "12ab"),
        other => panic!("Expected InvalidNumber, got {other:?}"),
    }

    assert!(matches!(tokenize("1.2.3"), Err(LexError::InvalidNumber { .. })));
}

#[test]
fn bare_dot_has_no_digits() {
    assert!(matches!(tokenize("."), Err(LexError::NoDigitsFound { row: 1, col: 1 })));

    // A leading dot with digits is a valid fraction.
    let tokens = tokenize(".5").unwrap();
    assert_eq!(tokens[0].kind, TokenKind::Number(0.5));
}

#[test]
fn overlong_literal_is_out_of_range() {
    let literal = format!("1{}", "0".repeat(400));
    assert!(matches!(tokenize(&literal), Err(LexError::NumberOutOfRange { .. })));
}

#[test]
fn unrecognized_character_reports_position() {
    assert!(matches!(tokenize("1 2 $"),
                     Err(LexError::UnrecognizedToken { row: 1, col: 5, .. })));
}

#[test]
fn tokenization_is_idempotent() {
    let source = "1 2 +\n3 * print";
    assert_eq!(tokenize(source).unwrap(), tokenize(source).unwrap());
}

#[test]
fn positions_track_rows_and_columns() {
    let tokens = tokenize("1 2 +\n3 *\n print").unwrap();
    let positions: Vec<_> = tokens.iter().map(|t| (t.row, t.col)).collect();
    assert_eq!(positions, vec![(1, 1), (1, 3), (1, 5), (2, 1), (2, 3), (3, 2)]);
}

#[test]
fn dumping_the_stack_has_no_side_effects() {
    let (result, _) = eval_source("1 2 +");
    let stack = result.unwrap();

    let mut first = Vec::new();
    let mut second = Vec::new();
    stack.dump(&mut first).unwrap();
    stack.dump(&mut second).unwrap();

    assert_eq!(first, second);
    assert_eq!(String::from_utf8(first).unwrap(), "[INFO] Type: Number, Token: 3\n");
    assert_eq!(stack.len(), 1);
}

#[test]
fn empty_source_yields_empty_stack() {
    let (result, output) = eval_source("");
    assert!(result.unwrap().is_empty());
    assert!(output.is_empty());
}

#[test]
fn each_pass_starts_from_a_fresh_stack() {
    // Two consecutive passes over the same buffer do not share state.
    let (first, _) = eval_source("1 2 +");
    let (second, _) = eval_source("1 2 +");
    assert_eq!(first.unwrap().values(), second.unwrap().values());
}

#[test]
fn example_script_works() {
    let script = fs::read_to_string("tests/example.rpn").expect("missing file");
    let mut out = Vec::new();
    let stack = run_source(&script, &mut out).unwrap_or_else(|e| panic!("Script failed: {e}"));

    assert!(stack.is_empty());
    let output = String::from_utf8(out).unwrap();
    assert_eq!(printed_values(&output),
               vec![3.0, -1.0, 2.3 / 4.6, 4.567 * 5.905]);
}

#[test]
fn run_source_surfaces_lex_errors() {
    let mut out = Vec::new();
    assert!(run_source("1 $", &mut out).is_err());
    assert!(out.is_empty());
}
