use fxhash::FxHashMap;
use itertools::Itertools;

use crate::error::Error;
use crate::network::slot::Slot;

/// A named single-bit value held in a slot
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct Signal {
    /// Name of the signal
    pub name: char,
    /// Current value
    pub value: bool,
}

/// Storage for the named signals of a network
///
/// Every reference to a name in a gate declaration gets its own slot, so that a gate
/// finds its inputs by position. Slots sharing a name are kept equal by [`Registry::synchronize`];
/// the first slot of each name holds the authoritative value.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    slots: Vec<Signal>,
    by_name: FxHashMap<char, Vec<Slot>>,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the number of slots
    pub fn nb_slots(&self) -> usize {
        self.slots.len()
    }

    /// Return the number of distinct signal names
    pub fn nb_signals(&self) -> usize {
        self.by_name.len()
    }

    /// Returns true if a signal with this name was declared
    pub fn exists(&self, name: char) -> bool {
        self.by_name.contains_key(&name)
    }

    /// Get the signal with this name, as seen from its first slot
    pub fn resolve(&self, name: char) -> Result<Signal, Error> {
        let first = self.first_slot(name)?;
        Ok(self.signal(first))
    }

    /// Get the signal held in a slot
    ///
    /// The slot must have been allocated by this registry.
    pub fn signal(&self, s: Slot) -> Signal {
        self.slots[s.ind()]
    }

    /// Get the value held in a slot; the slot must belong to this registry
    pub fn value(&self, s: Slot) -> bool {
        self.slots[s.ind()].value
    }

    /// Overwrite the value held in a slot, without synchronizing the other slots of the name
    ///
    /// Panics if the slot was not allocated by this registry.
    pub fn set_slot(&mut self, s: Slot, value: bool) {
        self.slots[s.ind()].value = value;
    }

    /// Add a new slot for this name; the name may already exist
    ///
    /// A new name starts at false. An existing name starts with its current value.
    pub fn declare(&mut self, name: char) -> Slot {
        let s = Slot::from_ind(self.slots.len());
        let value = self.resolve(name).map(|sig| sig.value).unwrap_or(false);
        self.slots.push(Signal { name, value });
        self.by_name.entry(name).or_default().push(s);
        s
    }

    /// Set the value of a signal, on its first slot
    pub fn set_value(&mut self, name: char, value: bool) -> Result<(), Error> {
        let first = self.first_slot(name)?;
        self.set_slot(first, value);
        Ok(())
    }

    /// Copy the value of the first slot of each name onto the other slots of the name
    pub fn synchronize(&mut self) {
        for slots in self.by_name.values() {
            let value = self.slots[slots[0].ind()].value;
            for s in &slots[1..] {
                self.slots[s.ind()].value = value;
            }
        }
    }

    /// One entry per distinct name, in order of first declaration
    pub fn all_unique_by_name(&self) -> Vec<(char, bool)> {
        self.slots
            .iter()
            .unique_by(|sig| sig.name)
            .map(|sig| (sig.name, sig.value))
            .collect()
    }

    fn first_slot(&self, name: char) -> Result<Slot, Error> {
        self.by_name
            .get(&name)
            .map(|slots| slots[0])
            .ok_or(Error::NotFound(name))
    }
}
