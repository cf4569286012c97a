//! Fixed-capacity stack used for the program, the operator stack and the
//! number stack.

use super::error::{CalcError, Result};

/// A stack holding at most `N - 1` items.
///
/// The last slot is never filled: a push onto a stack that already holds
/// `N - 1` items fails with [`CalcError::NoMemory`]. The observable limits
/// (31 tokens, 31 nested parentheses) depend on this.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundedStack<T, const N: usize> {
    items: heapless::Vec<T, N>,
}

impl<T, const N: usize> Default for BoundedStack<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> BoundedStack<T, N> {
    pub const fn new() -> Self {
        Self {
            items: heapless::Vec::new(),
        }
    }

    /// Number of items the stack accepts before reporting `NoMemory`
    pub const fn limit() -> usize {
        N.saturating_sub(1)
    }

    pub fn push(&mut self, item: T) -> Result<()> {
        if self.items.len() + 1 >= N {
            return Err(CalcError::NoMemory);
        }
        self.items.push(item).map_err(|_| CalcError::NoMemory)
    }

    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Items from bottom to top
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}
