//! Expression compiler and evaluator.
//!
//! [`compile`] turns the bytes of the expression field into a postfix
//! [`Program`] with the shunting-yard algorithm. [`evaluate`] runs that
//! program on a bounded number stack, once for a plain result or once per
//! row when sweeping a table.
//!
//! All storage is fixed-size: the program, the operator stack and the number
//! stack each hold up to 31 entries, and exceeding any of them reports
//! [`CalcError::NoMemory`].

pub mod compiler;
pub mod error;
pub mod evaluator;
pub mod stack;
pub mod token;

pub use compiler::compile;
pub use error::CalcError;
pub use evaluator::evaluate;
pub use stack::BoundedStack;
pub use token::{BinaryOp, Function, Program, Token};
