// SPDX-License-Identifier: MIT OR Apache-2.0
//! Operation kinds and their arity.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// The DSP operation a node performs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum OpKind {
    /// Signal source
    Input,
    /// Signal sink
    Output,
    /// `out = a + b`
    Add,
    /// `out = a - b`
    Sub,
    /// `out = a * b`
    Mult,
    /// `out = c * a` for a constant coefficient `c`
    ConstMult,
    /// `out = a / b`
    Div,
    /// `out[n] = a[n - 1]`
    Delay,
}

impl OpKind {
    /// Every operation kind
    pub const ALL: [OpKind; 8] = [
        OpKind::Input,
        OpKind::Output,
        OpKind::Add,
        OpKind::Sub,
        OpKind::Mult,
        OpKind::ConstMult,
        OpKind::Div,
        OpKind::Delay,
    ];

    /// Required input and output counts, from [`OP_ARITY`]
    pub fn arity(self) -> OpArity {
        OP_ARITY[&self]
    }

    /// Display name
    pub fn display_name(self) -> &'static str {
        match self {
            OpKind::Input => "Input",
            OpKind::Output => "Output",
            OpKind::Add => "Add",
            OpKind::Sub => "Subtract",
            OpKind::Mult => "Multiply",
            OpKind::ConstMult => "Constant Multiply",
            OpKind::Div => "Divide",
            OpKind::Delay => "Delay",
        }
    }
}

impl fmt::Display for OpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Number of operands an operation consumes and results it produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OpArity {
    /// Operand count
    pub inputs: usize,
    /// Result count
    pub outputs: usize,
}

impl OpArity {
    const fn new(inputs: usize, outputs: usize) -> Self {
        Self { inputs, outputs }
    }
}

/// Arity of every [`OpKind`]. Built once, read-only afterwards.
pub static OP_ARITY: LazyLock<IndexMap<OpKind, OpArity>> = LazyLock::new(|| {
    IndexMap::from([
        (OpKind::Input, OpArity::new(0, 1)),
        (OpKind::Output, OpArity::new(1, 0)),
        (OpKind::Add, OpArity::new(2, 1)),
        (OpKind::Sub, OpArity::new(2, 1)),
        (OpKind::Mult, OpArity::new(2, 1)),
        (OpKind::ConstMult, OpArity::new(1, 1)),
        (OpKind::Div, OpArity::new(2, 1)),
        (OpKind::Delay, OpArity::new(1, 1)),
    ])
});

/// Side of a node an arity check looked at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Arcs entering the node
    Input,
    /// Arcs leaving the node
    Output,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Input => f.write_str("inputs"),
            Direction::Output => f.write_str("outputs"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_covers_every_kind() {
        assert_eq!(OP_ARITY.len(), OpKind::ALL.len());
        for op in OpKind::ALL {
            assert!(OP_ARITY.contains_key(&op), "{op} missing from table");
        }
    }

    #[test]
    fn test_arity_values() {
        assert_eq!(OpKind::Input.arity(), OpArity { inputs: 0, outputs: 1 });
        assert_eq!(OpKind::Output.arity(), OpArity { inputs: 1, outputs: 0 });
        assert_eq!(OpKind::Add.arity(), OpArity { inputs: 2, outputs: 1 });
        assert_eq!(OpKind::ConstMult.arity(), OpArity { inputs: 1, outputs: 1 });
        assert_eq!(OpKind::Delay.arity(), OpArity { inputs: 1, outputs: 1 });
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&OpKind::ConstMult).unwrap();
        assert_eq!(json, "\"ConstMult\"");
        let loaded: OpKind = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, OpKind::ConstMult);
    }
}
