//! Stack machine that runs a postfix [`Program`] against a value of `x`

use super::error::{CalcError, Result};
use super::stack::BoundedStack;
use super::token::{BinaryOp, Function, Program, Token, NUMBER_STACK_CAPACITY};

/// Evaluate `program` with the free variable bound to `x`.
///
/// The program is not modified and may be evaluated any number of times.
pub fn evaluate(program: &Program, x: f64) -> Result<f64> {
    let mut stack: BoundedStack<f64, NUMBER_STACK_CAPACITY> = BoundedStack::new();
    let mut literals = program.literals().iter().copied();

    for &token in program.tokens() {
        let value = match token {
            Token::Number => literals.next().ok_or(CalcError::Syntax)?,
            Token::Variable => x,
            Token::Negate => -pop(&mut stack)?,
            Token::Function(function) => apply_function(function, pop(&mut stack)?)?,
            Token::Binary(op) => {
                let right = pop(&mut stack)?;
                let left = pop(&mut stack)?;
                apply_binary(op, left, right)?
            }
            Token::OpenParen | Token::CloseParen => return Err(CalcError::Syntax),
        };
        stack.push(value)?;
    }

    match stack.pop() {
        Some(value) if stack.is_empty() => Ok(value),
        _ => Err(CalcError::Syntax),
    }
}

fn pop(stack: &mut BoundedStack<f64, NUMBER_STACK_CAPACITY>) -> Result<f64> {
    stack.pop().ok_or(CalcError::Syntax)
}

fn apply_binary(op: BinaryOp, left: f64, right: f64) -> Result<f64> {
    Ok(match op {
        BinaryOp::Add => left + right,
        BinaryOp::Subtract => left - right,
        BinaryOp::Multiply => left * right,
        BinaryOp::Divide if right == 0.0 => return Err(CalcError::Math),
        BinaryOp::Divide => left / right,
        BinaryOp::Power => left.powf(right),
    })
}

fn apply_function(function: Function, value: f64) -> Result<f64> {
    let unit = -1.0..=1.0;
    Ok(match function {
        Function::Log => value.ln(),
        Function::Sin => value.to_radians().sin(),
        Function::Cos => value.to_radians().cos(),
        Function::Tan => value.to_radians().tan(),
        Function::Asin if !unit.contains(&value) => return Err(CalcError::Math),
        Function::Asin => value.asin().to_degrees(),
        Function::Acos if !unit.contains(&value) => return Err(CalcError::Math),
        Function::Acos => value.acos().to_degrees(),
        Function::Atan => value.atan().to_degrees(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc::compile;
    use crate::glyph;

    fn eval(source: &str, x: f64) -> Result<f64> {
        evaluate(&compile(&glyph::from_text(source))?, x)
    }

    fn approx(actual: f64, expected: f64) -> bool {
        (actual - expected).abs() < 1e-9
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(eval("2+3*4", 0.0), Ok(14.0));
        assert_eq!(eval("(2+3)*4", 0.0), Ok(20.0));
        assert_eq!(eval("8-3-2", 0.0), Ok(3.0));
        assert_eq!(eval("2^10", 0.0), Ok(1024.0));
        assert_eq!(eval("7/2", 0.0), Ok(3.5));
    }

    #[test]
    fn test_negation() {
        assert_eq!(eval("-2^2", 0.0), Ok(4.0));
        assert_eq!(eval("3*-2", 0.0), Ok(-6.0));
        assert_eq!(eval("--2", 0.0), Ok(2.0));
    }

    #[test]
    fn test_variable() {
        assert_eq!(eval("x*x+1", 3.0), Ok(10.0));
        assert_eq!(eval("x*x+1", -2.0), Ok(5.0));
    }

    #[test]
    fn test_degrees() {
        assert!(approx(eval("sin(30)", 0.0).unwrap(), 0.5));
        assert!(approx(eval("cos(60)", 0.0).unwrap(), 0.5));
        assert!(approx(eval("tan(45)", 0.0).unwrap(), 1.0));
        assert!(approx(eval("asin(1)", 0.0).unwrap(), 90.0));
        assert!(approx(eval("acos(0)", 0.0).unwrap(), 90.0));
        assert!(approx(eval("atan(1)", 0.0).unwrap(), 45.0));
        assert!(approx(eval("log(1)", 0.0).unwrap(), 0.0));
        assert!(approx(eval("log(2)", 0.0).unwrap(), std::f64::consts::LN_2));
    }

    #[test]
    fn test_math_errors() {
        assert_eq!(eval("1/0", 0.0), Err(CalcError::Math));
        assert_eq!(eval("1/x", 0.0), Err(CalcError::Math));
        assert_eq!(eval("asin(2)", 0.0), Err(CalcError::Math));
        assert_eq!(eval("acos(-1.5)", 0.0), Err(CalcError::Math));
    }

    #[test]
    fn test_log_of_negative_is_nan() {
        assert!(eval("log(-1)", 0.0).unwrap().is_nan());
    }

    #[test]
    fn test_malformed_programs() {
        assert_eq!(eval("", 0.0), Err(CalcError::Syntax));
        assert_eq!(eval("2+", 0.0), Err(CalcError::Syntax));
        assert_eq!(eval("*2", 0.0), Err(CalcError::Syntax));
        assert_eq!(eval("2(3)", 0.0), Err(CalcError::Syntax));
        assert_eq!(eval("-", 0.0), Err(CalcError::Syntax));
    }

    #[test]
    fn test_parenthesis_token_in_program_is_rejected() {
        let program = Program::from_parts(&[Token::Number, Token::OpenParen], &[1.0]).unwrap();
        assert_eq!(evaluate(&program, 0.0), Err(CalcError::Syntax));
    }

    #[test]
    fn test_longest_program_fits_the_number_stack() {
        // A full program pushes at most 31 values, all of which fit
        let tokens = [Token::Variable; 31];
        let program = Program::from_parts(&tokens, &[]).unwrap();
        assert_eq!(evaluate(&program, 1.0), Err(CalcError::Syntax));

        let mut tokens = vec![Token::Variable; 16];
        tokens.extend([Token::Binary(BinaryOp::Add); 15]);
        let program = Program::from_parts(&tokens, &[]).unwrap();
        assert_eq!(evaluate(&program, 1.0), Ok(16.0));
    }

    #[test]
    fn test_evaluation_is_repeatable() {
        let program = compile(b"x*2").unwrap();
        let before = program.clone();
        assert_eq!(evaluate(&program, 2.0), Ok(4.0));
        assert_eq!(evaluate(&program, 2.0), Ok(4.0));
        assert_eq!(program, before);
    }
}
