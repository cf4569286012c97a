//! Shunting-yard compiler from infix display bytes to a postfix [`Program`]

use super::error::{CalcError, Result};
use super::stack::BoundedStack;
use super::token::{BinaryOp, Function, Program, Token, OPERATOR_STACK_CAPACITY};
use crate::glyph;

/// Compile an infix expression.
///
/// Input ends at the first NUL byte or at the end of the slice. A `-` is a
/// negation when it starts the expression or follows an operator or an
/// opening parenthesis, and a subtraction otherwise.
pub fn compile(source: &[u8]) -> Result<Program> {
    let end = source.iter().position(|&b| b == 0).unwrap_or(source.len());
    let program = Compiler::new(&source[..end]).run()?;
    tracing::trace!(tokens = program.len(), program = %program, "compiled expression");
    Ok(program)
}

struct Compiler<'a> {
    source: &'a [u8],
    pos: usize,
    program: Program,
    operators: BoundedStack<Token, OPERATOR_STACK_CAPACITY>,
    previous: Option<Token>,
}

impl<'a> Compiler<'a> {
    fn new(source: &'a [u8]) -> Self {
        Self {
            source,
            pos: 0,
            program: Program::new(),
            operators: BoundedStack::new(),
            previous: None,
        }
    }

    fn run(mut self) -> Result<Program> {
        while let Some(&byte) = self.source.get(self.pos) {
            match byte {
                b'0'..=b'9' | glyph::DECIMAL_POINT => {
                    self.number()?;
                    continue;
                }
                glyph::VARIABLE => self.operand(Token::Variable)?,
                glyph::PI => {
                    self.program.push_literal(std::f64::consts::PI)?;
                    self.previous = Some(Token::Number);
                }
                glyph::OPEN_PAREN => {
                    self.operators.push(Token::OpenParen)?;
                    self.previous = Some(Token::OpenParen);
                }
                glyph::CLOSE_PAREN => self.close_paren()?,
                glyph::ADD => self.binary(BinaryOp::Add)?,
                glyph::SUBTRACT if self.minus_is_negation() => self.unary(Token::Negate)?,
                glyph::SUBTRACT => self.binary(BinaryOp::Subtract)?,
                glyph::MULTIPLY => self.binary(BinaryOp::Multiply)?,
                glyph::DIVIDE | glyph::ASCII_DIVIDE => self.binary(BinaryOp::Divide)?,
                glyph::POWER => self.binary(BinaryOp::Power)?,
                b'a'..=b'z' => {
                    let function = Function::match_call(&self.source[self.pos..])
                        .ok_or(CalcError::Syntax)?;
                    self.unary(Token::Function(function))?;
                    // The '(' after the name is handled on the next pass
                    self.pos += function.name().len();
                    continue;
                }
                _ => return Err(CalcError::Syntax),
            }
            self.pos += 1;
        }

        while let Some(token) = self.operators.pop() {
            if token == Token::OpenParen {
                return Err(CalcError::Syntax);
            }
            self.program.push(token)?;
        }
        Ok(self.program)
    }

    fn minus_is_negation(&self) -> bool {
        match self.previous {
            None => true,
            Some(token) => token.is_operator() || token == Token::OpenParen,
        }
    }

    /// Read a decimal literal: digits with at most one decimal point
    fn number(&mut self) -> Result<()> {
        let mut mantissa = 0.0_f64;
        let mut fraction_digits = 0_i32;
        let mut digits = 0_usize;
        let mut seen_point = false;

        while let Some(&byte) = self.source.get(self.pos) {
            match byte {
                b'0'..=b'9' => {
                    mantissa = mantissa * 10.0 + f64::from(byte - b'0');
                    digits += 1;
                    if seen_point {
                        fraction_digits += 1;
                    }
                }
                glyph::DECIMAL_POINT if seen_point => return Err(CalcError::Syntax),
                glyph::DECIMAL_POINT => seen_point = true,
                _ => break,
            }
            self.pos += 1;
        }

        if digits == 0 {
            return Err(CalcError::Syntax);
        }
        self.program
            .push_literal(mantissa / 10_f64.powi(fraction_digits))?;
        self.previous = Some(Token::Number);
        Ok(())
    }

    fn operand(&mut self, token: Token) -> Result<()> {
        self.program.push(token)?;
        self.previous = Some(token);
        Ok(())
    }

    /// Unary operators go straight onto the operator stack
    fn unary(&mut self, token: Token) -> Result<()> {
        self.operators.push(token)?;
        self.previous = Some(token);
        Ok(())
    }

    fn binary(&mut self, op: BinaryOp) -> Result<()> {
        let rank = op.rank();
        while let Some(&top) = self.operators.peek() {
            if top == Token::OpenParen || top.rank() > rank {
                break;
            }
            self.operators.pop();
            self.program.push(top)?;
        }
        let token = Token::Binary(op);
        self.operators.push(token)?;
        self.previous = Some(token);
        Ok(())
    }

    fn close_paren(&mut self) -> Result<()> {
        loop {
            match self.operators.pop() {
                None => return Err(CalcError::Syntax),
                Some(Token::OpenParen) => break,
                Some(token) => self.program.push(token)?,
            }
        }
        self.previous = Some(Token::CloseParen);
        Ok(())
    }
}
