//! Compute gate statistics
//!
//! ```
//! # use gatesim::Network;
//! # let net = Network::new();
//! use gatesim::network::stats::stats;
//! let stats = stats(&net);
//!
//! // Check that there is no Xor gate
//! assert_eq!(stats.nb_xor, 0);
//!
//! // Show the statistics
//! println!("{}", stats);
//! ```

use std::fmt;

use crate::network::gates::BinaryType;
use crate::{Gate, Network};

/// Number of signals, slots and gates in a network
#[derive(Clone, Debug, Default)]
pub struct NetworkStats {
    /// Number of distinct signal names
    pub nb_signals: usize,
    /// Number of positional slots
    pub nb_slots: usize,
    /// Number of And gates
    pub nb_and: usize,
    /// Number of Or gates
    pub nb_or: usize,
    /// Number of Xor gates
    pub nb_xor: usize,
    /// Number of Nand gates
    pub nb_nand: usize,
    /// Number of Nor gates
    pub nb_nor: usize,
    /// Number of Xnor gates
    pub nb_xnor: usize,
    /// Number of Not gates
    pub nb_not: usize,
}

impl NetworkStats {
    /// Total number of gates
    pub fn nb_gates(&self) -> usize {
        self.nb_and
            + self.nb_or
            + self.nb_xor
            + self.nb_nand
            + self.nb_nor
            + self.nb_xnor
            + self.nb_not
    }
}

impl fmt::Display for NetworkStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Stats:")?;
        writeln!(f, "  Signals: {}", self.nb_signals)?;
        writeln!(f, "  Slots: {}", self.nb_slots)?;
        writeln!(f, "  Gates: {}", self.nb_gates())?;
        let counts = [
            ("And", self.nb_and),
            ("Or", self.nb_or),
            ("Xor", self.nb_xor),
            ("Nand", self.nb_nand),
            ("Nor", self.nb_nor),
            ("Xnor", self.nb_xnor),
            ("Not", self.nb_not),
        ];
        for (name, nb) in counts {
            if nb != 0 {
                writeln!(f, "  {}: {}", name, nb)?;
            }
        }
        fmt::Result::Ok(())
    }
}

/// Compute the statistics of the network
pub fn stats(a: &Network) -> NetworkStats {
    use BinaryType::*;
    let mut ret = NetworkStats {
        nb_signals: a.registry().nb_signals(),
        nb_slots: a.registry().nb_slots(),
        ..Default::default()
    };
    for i in 0..a.nb_gates() {
        match a.gate(i) {
            Gate::Binary(_, And, _) => ret.nb_and += 1,
            Gate::Binary(_, Or, _) => ret.nb_or += 1,
            Gate::Binary(_, Xor, _) => ret.nb_xor += 1,
            Gate::Binary(_, Nand, _) => ret.nb_nand += 1,
            Gate::Binary(_, Nor, _) => ret.nb_nor += 1,
            Gate::Binary(_, Xnor, _) => ret.nb_xnor += 1,
            Gate::Not(_, _) => ret.nb_not += 1,
        }
    }
    ret
}
