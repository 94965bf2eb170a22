/// Integer identity of a widget call site, unique within one frame.
///
/// Identity is positional: the n-th widget call of a frame receives the n-th
/// id, so an id is stable across frames only while the declaration order is
/// stable. Zero is reserved for "no widget" and never issued.
#[derive(Default, Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Id(u32);

impl Id {
    /// Returns the raw integer value.
    pub fn raw(self) -> u32 { self.0 }
}

/// Hands out monotonically increasing non-zero ids, one per widget call.
#[derive(Debug, Default, Clone)]
pub struct IdGenerator {
    last_id: u32,
}

impl IdGenerator {
    /// Creates a generator with no ids issued yet.
    pub fn new() -> Self { Self { last_id: 0 } }

    /// Forgets all issued ids so the next frame restarts the sequence.
    pub fn reset(&mut self) { self.last_id = 0; }

    /// Issues the next id, skipping zero when the counter wraps.
    pub fn next_id(&mut self) -> Id {
        self.last_id = self.last_id.wrapping_add(1);
        if self.last_id == 0 {
            self.last_id = 1;
        }
        Id(self.last_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_strictly_increasing_and_nonzero() {
        let mut ids = IdGenerator::new();
        let mut prev = 0;
        for _ in 0..64 {
            let id = ids.next_id().raw();
            assert!(id > prev);
            prev = id;
        }
    }

    #[test]
    fn reset_restarts_the_sequence() {
        let mut ids = IdGenerator::new();
        let first = ids.next_id();
        ids.next_id();
        ids.reset();
        assert_eq!(ids.next_id(), first);
    }

    #[test]
    fn wrap_skips_zero() {
        let mut ids = IdGenerator { last_id: u32::MAX };
        assert_eq!(ids.next_id().raw(), 1);
    }
}
