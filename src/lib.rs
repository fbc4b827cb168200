//! Evaluation of small boolean gate networks from a command stream
//!
//! A network is built by declaring gates one after the other. Each gate reads one or two
//! named signals and drives a named output signal. Signals are single characters and hold a
//! single bit; undeclared values start at 0.
//!
//! # Usage
//!
//! ```bash
//! # Run commands from a file, or from standard input
//! gatesim run commands.txt
//! # Keep reading after OUT ALL
//! gatesim run commands.txt --exit-on end-of-input
//! # Show the gates declared in a file
//! gatesim show commands.txt
//! ```
//!
//! A command file looks like this:
//! ```text
//! XOR A B C
//! NAND C D E
//! SET A 1
//! SIM
//! OUT ALL
//! ```
//!
//! # Evaluation
//!
//! Every mention of a name in a gate declaration allocates a new positional slot, and the
//! gate records the slots of its inputs and output. Slots that share a name are
//! synchronized from the first slot of the name, which is also the slot that `SET` writes
//! and queries read.
//! An evaluation pass visits the gates in declaration order, synchronizing before each gate:
//! a gate sees the outputs of the gates declared before it, and there is no iteration to a
//! fixed point.
//!
//! Here is the same network built through the library:
//! ```
//! # use gatesim::{BinaryType, GateKind, Network};
//! let mut net = Network::new();
//! net.declare_gate(GateKind::Binary(BinaryType::Xor), &['A', 'B'], 'C')?;
//! net.declare_gate(GateKind::Binary(BinaryType::Nand), &['C', 'D'], 'E')?;
//! net.set_signal('A', true)?;
//! net.evaluate();
//! assert_eq!(net.query_signal('E')?, ('E', true));
//! # Ok::<(), gatesim::Error>(())
//! ```

#![warn(missing_docs)]

pub mod cmd;
mod error;
pub mod io;
pub mod network;
pub mod session;

pub use error::Error;
pub use network::{stats, BinaryType, Gate, GateKind, Network, Signal};
