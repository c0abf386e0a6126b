/// Parameter and momentum vectors, index-aligned and fixed in length.
///
/// Values start at zero. Every momentum starts at the same positive step.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct ParameterState {
    pub(super) values: Vec<f64>,
    pub(super) momentums: Vec<f64>,
}

impl ParameterState {
    pub(super) fn new(n: usize, initial_step: f64) -> Self {
        Self {
            values: vec![0.0; n],
            momentums: vec![initial_step; n],
        }
    }

    pub(super) fn len(&self) -> usize {
        self.values.len()
    }

    /// Refills every momentum entry with `step`, discarding direction bias.
    pub(super) fn refill(&mut self, step: f64) {
        self.momentums.fill(step);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_is_aligned() {
        let state = ParameterState::new(3, 8.0);

        assert_eq!(state.len(), 3);
        assert_eq!(state.values, vec![0.0; 3]);
        assert_eq!(state.momentums, vec![8.0; 3]);
    }

    #[test]
    fn empty_state_is_legal() {
        let state = ParameterState::new(0, 1.0);
        assert_eq!(state.len(), 0);
        assert!(state.momentums.is_empty());
    }

    #[test]
    fn refill_overwrites_signs_and_zeros() {
        let mut state = ParameterState::new(3, 1.0);
        state.momentums = vec![-0.25, 0.0, 12.0];

        state.refill(2.0);

        assert_eq!(state.momentums, vec![2.0; 3]);
        assert_eq!(state.values, vec![0.0; 3]);
    }
}
