use core::fmt;

use log::{debug, trace};

use crate::error::Error;
use crate::network::gates::{Gate, GateKind};
use crate::network::registry::Registry;

/// Representation of a gate network, evaluated in declaration order
///
/// Gates are kept in the order they were declared, and each gate owns fresh slots in the
/// [`Registry`] for its inputs and output. Evaluation is a single forward pass: a gate only
/// sees the outputs of gates declared before it.
#[derive(Debug, Clone, Default)]
pub struct Network {
    registry: Registry,
    gates: Vec<Gate>,
}

impl Network {
    /// Create a new network
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the number of gates in the network
    pub fn nb_gates(&self) -> usize {
        self.gates.len()
    }

    /// Get the gate at index i
    pub fn gate(&self, i: usize) -> &Gate {
        &self.gates[i]
    }

    /// Access the signals of the network
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Declare a new gate reading `inputs` and writing `output`
    ///
    /// New slots are allocated for the inputs then the output, even if the names are already known.
    /// Fails without modifying the network if the number of inputs does not match the kind.
    pub fn declare_gate(
        &mut self,
        kind: GateKind,
        inputs: &[char],
        output: char,
    ) -> Result<Gate, Error> {
        if inputs.len() != kind.arity() {
            return Err(Error::InvalidArity {
                kind,
                expected: kind.arity(),
                got: inputs.len(),
            });
        }
        let gate = match kind {
            GateKind::Binary(tp) => {
                let a = self.registry.declare(inputs[0]);
                let b = self.registry.declare(inputs[1]);
                let o = self.registry.declare(output);
                Gate::binary(a, b, tp, o)
            }
            GateKind::Not => {
                let a = self.registry.declare(inputs[0]);
                let o = self.registry.declare(output);
                Gate::not(a, o)
            }
        };
        debug!("Declared gate {} = {}", gate.output(), gate);
        self.gates.push(gate.clone());
        Ok(gate)
    }

    /// Set the value of a signal
    pub fn set_signal(&mut self, name: char, value: bool) -> Result<(), Error> {
        self.registry.set_value(name, value)
    }

    /// Recompute the output of every gate, in declaration order
    ///
    /// Slots are synchronized before each gate, so that a gate sees the outputs of the gates
    /// declared before it, and once more at the end.
    pub fn evaluate(&mut self) {
        for g in &self.gates {
            self.registry.synchronize();
            let reg = &self.registry;
            let val = g.eval(|s| reg.value(s));
            trace!("{} = {} -> {}", g.output(), g, val as u8);
            self.registry.set_slot(g.output(), val);
        }
        self.registry.synchronize();
    }

    /// Get the current value of a signal; no evaluation is performed
    pub fn query_signal(&self, name: char) -> Result<(char, bool), Error> {
        let sig = self.registry.resolve(name)?;
        Ok((sig.name, sig.value))
    }

    /// Get the current value of all signals, in order of first declaration
    pub fn query_all(&self) -> Vec<(char, bool)> {
        self.registry.all_unique_by_name()
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Network with {} gates, {} signals:",
            self.nb_gates(),
            self.registry.nb_signals()
        )?;
        for g in &self.gates {
            let out = self.registry.signal(g.output());
            writeln!(f, "\t{} = {} ({})", g.output(), g, out.name)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    use crate::network::{BinaryType, GateKind};
    use crate::{Error, Network};

    const AND: GateKind = GateKind::Binary(BinaryType::And);
    const XOR: GateKind = GateKind::Binary(BinaryType::Xor);
    const NAND: GateKind = GateKind::Binary(BinaryType::Nand);
    const OR: GateKind = GateKind::Binary(BinaryType::Or);

    #[test]
    fn test_basic() {
        let mut net = Network::new();
        net.declare_gate(AND, &['A', 'B'], 'C').unwrap();
        net.declare_gate(GateKind::Not, &['C'], 'D').unwrap();
        assert_eq!(net.nb_gates(), 2);
        assert_eq!(net.registry().nb_slots(), 5);
        assert_eq!(net.registry().nb_signals(), 4);
        assert_eq!(net.gate(1).kind(), GateKind::Not);
        assert_eq!(net.gate(1).dependencies()[0].ind(), 3);
        assert_eq!(net.gate(1).output().ind(), 4);
    }

    #[test]
    fn test_and() {
        let mut net = Network::new();
        net.declare_gate(AND, &['A', 'B'], 'C').unwrap();
        net.set_signal('A', true).unwrap();
        net.set_signal('B', true).unwrap();
        net.evaluate();
        assert_eq!(net.query_signal('C'), Ok(('C', true)));
    }

    #[test]
    fn test_not() {
        let mut net = Network::new();
        net.declare_gate(GateKind::Not, &['A'], 'B').unwrap();
        net.set_signal('A', true).unwrap();
        net.evaluate();
        assert_eq!(net.query_signal('B'), Ok(('B', false)));
    }

    #[test]
    fn test_chained() {
        let mut net = Network::new();
        net.declare_gate(XOR, &['A', 'B'], 'C').unwrap();
        net.declare_gate(NAND, &['C', 'D'], 'E').unwrap();
        net.set_signal('A', true).unwrap();
        net.set_signal('B', false).unwrap();
        net.evaluate();
        assert_eq!(net.query_signal('C'), Ok(('C', true)));
        assert_eq!(net.query_signal('D'), Ok(('D', false)));
        assert_eq!(net.query_signal('E'), Ok(('E', true)));
    }

    #[test]
    fn test_every_kind() {
        for kind in GateKind::ALL {
            for a in [false, true] {
                for b in [false, true] {
                    let mut net = Network::new();
                    let expected = match kind {
                        GateKind::Binary(tp) => {
                            net.declare_gate(kind, &['A', 'B'], 'Y').unwrap();
                            net.set_signal('B', b).unwrap();
                            tp.eval(a, b)
                        }
                        GateKind::Not => {
                            net.declare_gate(kind, &['A'], 'Y').unwrap();
                            !a
                        }
                    };
                    net.set_signal('A', a).unwrap();
                    net.evaluate();
                    assert_eq!(net.query_signal('Y'), Ok(('Y', expected)), "{kind}");
                }
            }
        }
    }

    #[test]
    fn test_arity() {
        let mut net = Network::new();
        assert!(net.declare_gate(GateKind::Not, &['A'], 'B').is_ok());
        assert_eq!(
            net.declare_gate(GateKind::Not, &['A', 'B'], 'C'),
            Err(Error::InvalidArity {
                kind: GateKind::Not,
                expected: 1,
                got: 2
            })
        );
        assert_eq!(
            net.declare_gate(GateKind::Not, &[], 'C'),
            Err(Error::InvalidArity {
                kind: GateKind::Not,
                expected: 1,
                got: 0
            })
        );
        assert_eq!(
            net.declare_gate(OR, &['A'], 'C'),
            Err(Error::InvalidArity {
                kind: OR,
                expected: 2,
                got: 1
            })
        );
        assert!(net.declare_gate(OR, &['A', 'B', 'C'], 'D').is_err());
        // Failed declarations leave no trace
        assert_eq!(net.nb_gates(), 1);
        assert_eq!(net.registry().nb_slots(), 2);
        assert!(!net.registry().exists('C'));
    }

    #[test]
    fn test_not_found() {
        let mut net = Network::new();
        assert_eq!(net.query_signal('A'), Err(Error::NotFound('A')));
        assert_eq!(net.set_signal('A', true), Err(Error::NotFound('A')));
        for i in 0..20 {
            let c = char::from(b'a' + i);
            net.declare_gate(GateKind::Not, &[c], c.to_ascii_uppercase())
                .unwrap();
        }
        assert_eq!(net.query_signal('z'), Err(Error::NotFound('z')));
        assert_eq!(net.query_signal('0'), Err(Error::NotFound('0')));
    }

    #[test]
    fn test_empty() {
        let mut net = Network::new();
        net.evaluate();
        assert!(net.query_all().is_empty());
    }

    #[test]
    fn test_no_implicit_evaluation() {
        let mut net = Network::new();
        net.declare_gate(OR, &['A', 'B'], 'C').unwrap();
        net.set_signal('A', true).unwrap();
        assert_eq!(net.query_signal('C'), Ok(('C', false)));
        net.evaluate();
        assert_eq!(net.query_signal('C'), Ok(('C', true)));
    }

    #[test]
    fn test_shared_names_synchronized() {
        let mut net = Network::new();
        net.declare_gate(AND, &['A', 'B'], 'C').unwrap();
        net.declare_gate(XOR, &['C', 'A'], 'D').unwrap();
        net.declare_gate(GateKind::Not, &['D'], 'A').unwrap();
        net.set_signal('A', true).unwrap();
        net.set_signal('B', true).unwrap();
        net.evaluate();
        let reg = net.registry();
        for (name, value) in net.query_all() {
            for i in 0..reg.nb_slots() {
                let sig = reg.signal(crate::network::Slot::from_ind(i));
                if sig.name == name {
                    assert_eq!(sig.value, value, "slot {i} of {name}");
                }
            }
        }
        assert_eq!(net.query_signal('C'), Ok(('C', true)));
        assert_eq!(net.query_signal('D'), Ok(('D', false)));
    }

    #[test]
    fn test_output_on_later_slot() {
        // The output of the NOT is not the first slot of A: the first slot wins
        let mut net = Network::new();
        net.declare_gate(AND, &['A', 'B'], 'C').unwrap();
        net.declare_gate(GateKind::Not, &['C'], 'A').unwrap();
        net.evaluate();
        assert_eq!(net.query_signal('C'), Ok(('C', false)));
        assert_eq!(net.query_signal('A'), Ok(('A', false)));
    }

    #[test]
    fn test_idempotent() {
        let mut net = Network::new();
        net.declare_gate(XOR, &['A', 'B'], 'C').unwrap();
        net.declare_gate(NAND, &['C', 'D'], 'E').unwrap();
        net.declare_gate(OR, &['E', 'A'], 'F').unwrap();
        net.set_signal('A', true).unwrap();
        net.evaluate();
        let first = net.query_all();
        net.evaluate();
        assert_eq!(net.query_all(), first);
    }

    #[test]
    fn test_idempotent_random() {
        let mut rng = SmallRng::seed_from_u64(1);
        let names: Vec<char> = ('A'..='L').collect();
        for _ in 0..50 {
            let mut net = Network::new();
            for _ in 0..rng.gen_range(1..12) {
                let kind = GateKind::ALL[rng.gen_range(0..GateKind::ALL.len())];
                let inputs: Vec<char> = (0..kind.arity())
                    .map(|_| names[rng.gen_range(0..names.len())])
                    .collect();
                let output = names[rng.gen_range(0..names.len())];
                net.declare_gate(kind, &inputs, output).unwrap();
            }
            for (name, _) in net.query_all() {
                net.set_signal(name, rng.gen()).unwrap();
            }
            net.evaluate();
            let first = net.query_all();
            net.evaluate();
            assert_eq!(net.query_all(), first, "{net}");
        }
    }

    #[test]
    fn test_query_all_order() {
        let mut net = Network::new();
        net.declare_gate(AND, &['B', 'A'], 'C').unwrap();
        net.declare_gate(OR, &['A', 'C'], 'B').unwrap();
        net.declare_gate(GateKind::Not, &['C'], 'D').unwrap();
        net.set_signal('B', true).unwrap();
        net.set_signal('A', true).unwrap();
        net.evaluate();
        assert_eq!(
            net.query_all(),
            vec![('B', true), ('A', true), ('C', true), ('D', false)]
        );
    }

    #[test]
    fn test_display() {
        let mut net = Network::new();
        net.declare_gate(AND, &['A', 'B'], 'C').unwrap();
        net.declare_gate(GateKind::Not, &['C'], 'D').unwrap();
        assert_eq!(
            format!("{net}"),
            "Network with 2 gates, 4 signals:\n\ts2 = AND(s0, s1) (C)\n\ts4 = NOT(s3) (D)\n"
        );
    }
}
