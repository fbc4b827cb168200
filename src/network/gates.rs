use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::network::slot::Slot;

/// Basic types of 2-input gates
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum BinaryType {
    /// 2-input And gate
    And,
    /// 2-input Or gate
    Or,
    /// 2-input Xor gate
    Xor,
    /// 2-input Nand gate
    Nand,
    /// 2-input Nor gate
    Nor,
    /// 2-input Xnor gate
    Xnor,
}

impl BinaryType {
    /// Compute the output of the gate
    pub fn eval(&self, a: bool, b: bool) -> bool {
        use BinaryType::*;
        match self {
            And => a & b,
            Or => a | b,
            Xor => a ^ b,
            Nand => !(a & b),
            Nor => !(a | b),
            Xnor => !(a ^ b),
        }
    }
}

/// Kind of a gate, as named in the command language
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum GateKind {
    /// One of the 2-input gates
    Binary(BinaryType),
    /// Inverter
    Not,
}

impl GateKind {
    /// All supported gate kinds
    pub const ALL: [GateKind; 7] = [
        GateKind::Binary(BinaryType::And),
        GateKind::Binary(BinaryType::Or),
        GateKind::Binary(BinaryType::Xor),
        GateKind::Binary(BinaryType::Nand),
        GateKind::Binary(BinaryType::Nor),
        GateKind::Binary(BinaryType::Xnor),
        GateKind::Not,
    ];

    /// Number of inputs of the gate, not counting the output
    pub fn arity(&self) -> usize {
        match self {
            GateKind::Binary(_) => 2,
            GateKind::Not => 1,
        }
    }

    /// Keyword used for this kind in the command language
    pub fn keyword(&self) -> &'static str {
        use BinaryType::*;
        match self {
            GateKind::Binary(And) => "AND",
            GateKind::Binary(Or) => "OR",
            GateKind::Binary(Xor) => "XOR",
            GateKind::Binary(Nand) => "NAND",
            GateKind::Binary(Nor) => "NOR",
            GateKind::Binary(Xnor) => "XNOR",
            GateKind::Not => "NOT",
        }
    }
}

impl FromStr for GateKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GateKind::ALL
            .into_iter()
            .find(|k| k.keyword() == s)
            .ok_or_else(|| Error::UnknownGate(s.to_string()))
    }
}

impl fmt::Display for GateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

/// Logic gate representation
///
/// A gate refers to the slots it reads and writes, captured when it was declared.
/// The input slots and output slot are consecutive.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub enum Gate {
    /// 2-input gate with its inputs and output
    Binary([Slot; 2], BinaryType, Slot),
    /// Inverter with its input and output
    Not(Slot, Slot),
}

impl Gate {
    /// Create a 2-input gate
    pub fn binary(a: Slot, b: Slot, tp: BinaryType, out: Slot) -> Gate {
        Gate::Binary([a, b], tp, out)
    }

    /// Create an inverter
    pub fn not(a: Slot, out: Slot) -> Gate {
        Gate::Not(a, out)
    }

    /// Kind of the gate
    pub fn kind(&self) -> GateKind {
        match self {
            Gate::Binary(_, tp, _) => GateKind::Binary(*tp),
            Gate::Not(_, _) => GateKind::Not,
        }
    }

    /// Obtain all slots feeding this gate
    pub fn dependencies(&self) -> &[Slot] {
        match self {
            Gate::Binary(s, _, _) => s,
            Gate::Not(s, _) => std::slice::from_ref(s),
        }
    }

    /// Slot written by this gate
    pub fn output(&self) -> Slot {
        match self {
            Gate::Binary(_, _, o) => *o,
            Gate::Not(_, o) => *o,
        }
    }

    /// Compute the output of the gate from the value of each slot
    pub fn eval<F: Fn(Slot) -> bool>(&self, value: F) -> bool {
        match self {
            Gate::Binary([a, b], tp, _) => tp.eval(value(*a), value(*b)),
            Gate::Not(a, _) => !value(*a),
        }
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gate::Binary([a, b], _, _) => write!(f, "{}({}, {})", self.kind(), a, b),
            Gate::Not(a, _) => write!(f, "{}({})", self.kind(), a),
        }
    }
}
