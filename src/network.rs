//! Representation and evaluation of gate networks

mod gates;
mod network;
mod registry;
mod slot;
pub mod stats;

pub use gates::{BinaryType, Gate, GateKind};
pub use network::Network;
pub use registry::{Registry, Signal};
pub use slot::Slot;
