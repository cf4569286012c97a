//! Compiler and evaluator behaviour through the public API

use tabcalc::calc::{compile, BoundedStack, CalcError, Program, Token};
use tabcalc::calc::token::{NUMBER_STACK_CAPACITY, OPERATOR_STACK_CAPACITY, PROGRAM_CAPACITY};
use tabcalc::glyph;

fn program(source: &str) -> Result<Program, CalcError> {
    compile(&glyph::from_text(source))
}

fn eval(source: &str) -> Result<f64, CalcError> {
    program(source)?.evaluate(0.0)
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// ============================================================================
// Arithmetic
// ============================================================================

#[test]
fn test_operator_precedence() {
    assert_eq!(eval("2+3*4"), Ok(14.0));
    assert_eq!(eval("(2+3)*4"), Ok(20.0));
    assert_eq!(eval("2*3^2"), Ok(18.0));
    assert_eq!(eval("10-4/2"), Ok(8.0));
}

#[test]
fn test_power_is_left_associative() {
    assert_eq!(eval("2^3^2"), Ok(64.0));
}

#[test]
fn test_negation() {
    assert_eq!(eval("-3+5"), Ok(2.0));
    assert_eq!(eval("2*-3"), Ok(-6.0));
    assert_eq!(eval("-(2+3)"), Ok(-5.0));
    assert_eq!(eval("--4"), Ok(4.0));
}

#[test]
fn test_pi_and_functions() {
    assert!(close(eval("pi").unwrap(), std::f64::consts::PI));
    assert!(close(eval("sin(30)").unwrap(), 0.5));
    assert!(close(eval("cos(60)").unwrap(), 0.5));
    assert!(close(eval("tan(45)").unwrap(), 1.0));
    assert!(close(eval("asin(1)").unwrap(), 90.0));
    assert!(close(eval("acos(0)").unwrap(), 90.0));
    assert!(close(eval("atan(1)").unwrap(), 45.0));
    assert!(close(eval("log(1)").unwrap(), 0.0));
}

#[test]
fn test_division_glyph_and_slash_agree() {
    let glyph_form = [b'9', glyph::DIVIDE, b'4'];
    assert_eq!(compile(&glyph_form).unwrap().evaluate(0.0), Ok(2.25));
    assert_eq!(compile(b"9/4").unwrap().evaluate(0.0), Ok(2.25));
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_math_errors() {
    assert_eq!(eval("1/0"), Err(CalcError::Math));
    assert_eq!(eval("asin(2)"), Err(CalcError::Math));
    assert_eq!(eval("acos(-1.5)"), Err(CalcError::Math));
}

#[test]
fn test_syntax_errors() {
    assert_eq!(eval("(2+3"), Err(CalcError::Syntax));
    assert_eq!(eval(")2+3"), Err(CalcError::Syntax));
    assert_eq!(eval("2+"), Err(CalcError::Syntax));
    assert_eq!(eval(""), Err(CalcError::Syntax));
}

#[test]
fn test_error_messages() {
    assert_eq!(CalcError::Syntax.to_string(), "Syntax Error");
    assert_eq!(CalcError::Math.to_string(), "Math. Error");
    assert_eq!(CalcError::NoMemory.to_string(), "Not enough mem.");
    assert_eq!(CalcError::Range.to_string(), "Range Error");
}

// ============================================================================
// Capacity
// ============================================================================

#[test]
fn test_capacities_leave_one_slot_unused() {
    assert_eq!(BoundedStack::<Token, PROGRAM_CAPACITY>::limit(), 31);
    assert_eq!(BoundedStack::<Token, OPERATOR_STACK_CAPACITY>::limit(), 31);
    assert_eq!(BoundedStack::<f64, NUMBER_STACK_CAPACITY>::limit(), 31);
}

#[test]
fn test_31_tokens_compile() {
    // Sixteen operands and fifteen additions
    let source = vec!["1"; 16].join("+");
    let program = program(&source).expect("31 tokens fit");
    assert_eq!(program.len(), 31);
    assert_eq!(program.evaluate(0.0), Ok(16.0));
}

#[test]
fn test_32_tokens_fail() {
    let source = format!("-{}", vec!["1"; 16].join("+"));
    assert_eq!(program(&source), Err(CalcError::NoMemory));
}

#[test]
fn test_parenthesis_nesting_limit() {
    let nested = |depth: usize| format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    assert_eq!(eval(&nested(31)), Ok(1.0));
    assert_eq!(program(&nested(32)), Err(CalcError::NoMemory));
}

// ============================================================================
// Purity
// ============================================================================

#[test]
fn test_constant_programs_ignore_x() {
    for source in ["2+3*4", "sin(30)^2", "-pi/4", "log(10)*2"] {
        let program = program(source).unwrap();
        assert!(!program.uses_variable());
        let at_zero = program.evaluate(0.0);
        for x in [-100.0, -1.5, 1.0, 42.0, 1e6] {
            assert_eq!(program.evaluate(x), at_zero, "{source} at x = {x}");
        }
    }
}

#[test]
fn test_evaluation_does_not_consume_the_program() {
    let program = program("x^2-1").unwrap();
    assert_eq!(program.variable_uses(), 1);
    assert_eq!(program.evaluate(3.0), Ok(8.0));
    assert_eq!(program.evaluate(3.0), Ok(8.0));
    assert_eq!(program.evaluate(-1.0), Ok(0.0));
}
