/// Per-epoch record of which coordinates are settled.
///
/// A coordinate is settled once it accepts a move or its momentum reaches
/// the halving fixed point. Settled coordinates are not probed again until
/// the next epoch clears the flags.
#[derive(Debug, Clone, Default)]
pub(super) struct ConvergedFlags {
    settled: Vec<bool>,
    remaining: usize,
}

impl ConvergedFlags {
    /// Clears all flags for an epoch over `n` coordinates.
    pub(super) fn clear(&mut self, n: usize) {
        self.settled.clear();
        self.settled.resize(n, false);
        self.remaining = n;
    }

    pub(super) fn is_settled(&self, index: usize) -> bool {
        self.settled[index]
    }

    /// Marks `index` as settled. Marking twice is a no-op.
    pub(super) fn mark(&mut self, index: usize) {
        if !self.settled[index] {
            self.settled[index] = true;
            self.remaining -= 1;
        }
    }

    pub(super) fn all_settled(&self) -> bool {
        self.remaining == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cleared_flags_are_unsettled() {
        let mut flags = ConvergedFlags::default();
        flags.clear(2);

        assert!(!flags.is_settled(0));
        assert!(!flags.is_settled(1));
        assert!(!flags.all_settled());
    }

    #[test]
    fn marking_every_index_settles_all() {
        let mut flags = ConvergedFlags::default();
        flags.clear(2);

        flags.mark(1);
        assert!(flags.is_settled(1));
        assert!(!flags.all_settled());

        flags.mark(1);
        assert!(!flags.all_settled());

        flags.mark(0);
        assert!(flags.all_settled());
    }

    #[test]
    fn clear_resets_previous_epoch() {
        let mut flags = ConvergedFlags::default();
        flags.clear(1);
        flags.mark(0);

        flags.clear(3);

        assert!(!flags.is_settled(0));
        assert!(!flags.all_settled());
    }

    #[test]
    fn zero_coordinates_are_trivially_settled() {
        let mut flags = ConvergedFlags::default();
        flags.clear(0);
        assert!(flags.all_settled());
    }
}
