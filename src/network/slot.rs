use std::fmt;

/// Position of a signal slot in the network
///
/// Slots are allocated in declaration order: a gate owns the slots of its inputs
/// followed by the slot of its output. Several slots may carry the same signal name.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Default)]
pub struct Slot {
    a: u32,
}

impl Slot {
    /// Create a slot from its position
    pub fn from_ind(i: usize) -> Slot {
        Slot { a: i as u32 }
    }

    /// Obtain the position of the slot
    pub fn ind(&self) -> usize {
        self.a as usize
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.a;
        write!(f, "s{v}")
    }
}

impl fmt::Debug for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
