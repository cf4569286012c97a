//! Postfix token types and the compiled program

use super::error::Result;
use super::stack::BoundedStack;

/// Slots in a compiled program. One slot is always left free.
pub const PROGRAM_CAPACITY: usize = 32;

/// Slots on the compiler's operator stack
pub const OPERATOR_STACK_CAPACITY: usize = 32;

/// Slots on the evaluator's number stack
pub const NUMBER_STACK_CAPACITY: usize = 32;

/// Precedence rank. Lower binds tighter.
pub type Rank = u8;

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl BinaryOp {
    pub fn rank(self) -> Rank {
        match self {
            BinaryOp::Power => 1,
            BinaryOp::Multiply | BinaryOp::Divide => 2,
            BinaryOp::Add | BinaryOp::Subtract => 3,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            BinaryOp::Add => '+',
            BinaryOp::Subtract => '-',
            BinaryOp::Multiply => '*',
            BinaryOp::Divide => '÷',
            BinaryOp::Power => '^',
        }
    }
}

/// Named unary functions. Trigonometry works in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Function {
    Log,
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
}

impl Function {
    pub const ALL: [Function; 7] = [
        Function::Log,
        Function::Sin,
        Function::Cos,
        Function::Tan,
        Function::Asin,
        Function::Acos,
        Function::Atan,
    ];

    /// Lowercase name as it appears in the expression field
    pub fn name(self) -> &'static str {
        match self {
            Function::Log => "log",
            Function::Sin => "sin",
            Function::Cos => "cos",
            Function::Tan => "tan",
            Function::Asin => "asin",
            Function::Acos => "acos",
            Function::Atan => "atan",
        }
    }

    /// Name followed by the opening parenthesis, the unit inserted by a key
    pub fn call_prefix(self) -> String {
        format!("{}(", self.name())
    }

    /// Function whose `name(` prefix starts `input`
    pub fn match_call(input: &[u8]) -> Option<Function> {
        Self::ALL.into_iter().find(|f| {
            let name = f.name().as_bytes();
            input.starts_with(name) && input.get(name.len()) == Some(&b'(')
        })
    }

    pub fn from_name(name: &str) -> Option<Function> {
        Self::ALL
            .into_iter()
            .find(|f| f.name().eq_ignore_ascii_case(name))
    }
}

/// One postfix token.
///
/// The parenthesis variants only occur while compiling. A program that
/// contains them is malformed and the evaluator rejects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    /// Next value from the program's literal pool
    Number,
    /// The free variable `x`
    Variable,
    Negate,
    Function(Function),
    Binary(BinaryOp),
    OpenParen,
    CloseParen,
}

impl Token {
    /// Precedence rank. Unary operators rank 0 and bind tightest.
    pub fn rank(self) -> Rank {
        match self {
            Token::Binary(op) => op.rank(),
            _ => 0,
        }
    }

    pub fn is_operator(self) -> bool {
        matches!(
            self,
            Token::Negate | Token::Function(_) | Token::Binary(_)
        )
    }
}

/// A compiled expression: postfix tokens plus a pool of numeric literals
/// consumed in order by [`Token::Number`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    tokens: BoundedStack<Token, PROGRAM_CAPACITY>,
    literals: BoundedStack<f64, PROGRAM_CAPACITY>,
    variable_uses: usize,
}

impl Program {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, token: Token) -> Result<()> {
        self.tokens.push(token)?;
        if token == Token::Variable {
            self.variable_uses += 1;
        }
        Ok(())
    }

    pub(crate) fn push_literal(&mut self, value: f64) -> Result<()> {
        self.tokens.push(Token::Number)?;
        self.literals.push(value)
    }

    /// Build a program from raw parts, without checking that it is well formed
    #[cfg(test)]
    pub(crate) fn from_parts(tokens: &[Token], literals: &[f64]) -> Result<Self> {
        let mut program = Self::new();
        for &token in tokens {
            program.push(token)?;
        }
        for &value in literals {
            program.literals.push(value)?;
        }
        Ok(program)
    }

    pub fn tokens(&self) -> &[Token] {
        self.tokens.as_slice()
    }

    pub fn literals(&self) -> &[f64] {
        self.literals.as_slice()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// How many times the free variable occurs
    pub fn variable_uses(&self) -> usize {
        self.variable_uses
    }

    pub fn uses_variable(&self) -> bool {
        self.variable_uses > 0
    }

    pub fn evaluate(&self, x: f64) -> Result<f64> {
        super::evaluator::evaluate(self, x)
    }
}

impl std::fmt::Display for Program {
    /// Space separated postfix form, e.g. `2 3 4 * +`
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut literals = self.literals().iter();
        for (i, token) in self.tokens().iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match token {
                Token::Number => match literals.next() {
                    Some(v) => write!(f, "{v}")?,
                    None => f.write_str("?")?,
                },
                Token::Variable => f.write_str("x")?,
                Token::Negate => f.write_str("neg")?,
                Token::Function(func) => f.write_str(func.name())?,
                Token::Binary(op) => write!(f, "{}", op.symbol())?,
                Token::OpenParen => f.write_str("(")?,
                Token::CloseParen => f.write_str(")")?,
            }
        }
        Ok(())
    }
}
