// ============================================================================
// Operation Kinds
// Names of the public operations, used in events and logs
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Public decimal operations exposed by a `Context`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Operation {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    DivRem,
    Pow,
    PowMod,
    Sqrt,
    Compare,
}

impl Operation {
    /// Lowercase operation name
    pub const fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Sub => "sub",
            Operation::Mul => "mul",
            Operation::Div => "div",
            Operation::Mod => "mod",
            Operation::DivRem => "divmod",
            Operation::Pow => "pow",
            Operation::PowMod => "powmod",
            Operation::Sqrt => "sqrt",
            Operation::Compare => "compare",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
