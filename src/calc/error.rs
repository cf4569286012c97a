//! Error kinds raised by the compiler, the evaluator and the table settings

use thiserror::Error;

/// Calculation errors.
///
/// The `Display` text of each variant is the message shown on the first LCD
/// row when the controller enters the error mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum CalcError {
    /// Malformed expression or malformed postfix program
    #[error("Syntax Error")]
    Syntax,

    /// Domain violation: division by zero, asin/acos outside [-1, 1]
    #[error("Math. Error")]
    Math,

    /// A fixed-capacity stack or the program itself is full
    #[error("Not enough mem.")]
    NoMemory,

    /// Table configuration out of range (step of zero)
    #[error("Range Error")]
    Range,
}

pub type Result<T> = std::result::Result<T, CalcError>;
