// SPDX-License-Identifier: MIT OR Apache-2.0
//! Operand roles carried by signal-flow graph arcs.

use serde::{Deserialize, Serialize};
use std::fmt;

/// What an arc contributes to the operation at its destination.
///
/// `sum = term + term`, `difference = minuend - subtrahend`,
/// `product = multiplier * multiplicand`, `quotient = dividend / divisor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperandRole {
    /// Input of a unit delay
    Delay,
    /// Addend
    Term,
    /// Left operand of a subtraction
    Minuend,
    /// Right operand of a subtraction
    Subtrahend,
    /// Left operand of a multiplication
    Multiplier,
    /// Right operand of a multiplication, or the signal scaled by a constant
    Multiplicand,
    /// Left operand of a division
    Dividend,
    /// Right operand of a division
    Divisor,
    /// Plain signal transfer, such as feeding an output node
    Signal,
}

impl OperandRole {
    /// Whether swapping two arcs with this role changes the result
    pub fn is_ordered(self) -> bool {
        matches!(
            self,
            OperandRole::Minuend
                | OperandRole::Subtrahend
                | OperandRole::Dividend
                | OperandRole::Divisor
        )
    }
}

impl fmt::Display for OperandRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
