use momentum_core::LossFunction;
use tracing::trace;

use super::{EpochStats, Strategy, converged::ConvergedFlags, state::ParameterState};

/// Momentum multiplier applied after a successful forward probe.
const GROWTH: f64 = 1.5;

/// Outcome of probing a single coordinate at its current momentum.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Probe {
    /// A probe lowered the loss to `loss` using a step of `step`.
    Accepted { loss: f64, step: f64 },

    /// Neither direction helped; the momentum was halved.
    Shrunk,

    /// The momentum is zero, nothing left to try at this resolution.
    Exhausted,
}

/// Runs one tuning epoch with the given strategy.
pub(super) fn run_epoch<L>(
    strategy: Strategy,
    state: &mut ParameterState,
    flags: &mut ConvergedFlags,
    loss: &L,
) -> EpochStats
where
    L: LossFunction + ?Sized,
{
    match strategy {
        Strategy::Simultaneous => simultaneous(state, flags, loss),
        Strategy::Sequential => sequential(state, loss),
    }
}

/// Sweeps all unsettled coordinates until every one is settled.
fn simultaneous<L>(state: &mut ParameterState, flags: &mut ConvergedFlags, loss: &L) -> EpochStats
where
    L: LossFunction + ?Sized,
{
    let mut base_loss = loss.loss(&state.values);
    let mut tuned = 0.0;
    flags.clear(state.len());

    while !flags.all_settled() {
        for index in 0..state.len() {
            if flags.is_settled(index) {
                continue;
            }
            match probe(state, index, base_loss, loss) {
                Probe::Accepted {
                    loss: improved,
                    step,
                } => {
                    base_loss = improved;
                    tuned += step.abs();
                    flags.mark(index);
                }
                Probe::Exhausted => flags.mark(index),
                Probe::Shrunk => {}
            }
        }
    }

    EpochStats {
        tuned,
        loss: base_loss,
    }
}

/// Settles each coordinate in turn before moving to the next.
fn sequential<L>(state: &mut ParameterState, loss: &L) -> EpochStats
where
    L: LossFunction + ?Sized,
{
    let mut base_loss = loss.loss(&state.values);
    let mut tuned = 0.0;

    for index in 0..state.len() {
        loop {
            match probe(state, index, base_loss, loss) {
                Probe::Accepted {
                    loss: improved,
                    step,
                } => {
                    base_loss = improved;
                    tuned += step.abs();
                    break;
                }
                Probe::Exhausted => break,
                Probe::Shrunk => {}
            }
        }
    }

    EpochStats {
        tuned,
        loss: base_loss,
    }
}

/// Tries `values[index] ± momentum[index]`, forward first.
///
/// The first direction that beats `base_loss` is kept. A forward win grows
/// the momentum, a backward win flips its sign. If neither wins the value is
/// restored and the momentum is halved, or zeroed once halving no longer
/// changes it.
#[allow(clippy::float_cmp)]
fn probe<L>(state: &mut ParameterState, index: usize, base_loss: f64, loss: &L) -> Probe
where
    L: LossFunction + ?Sized,
{
    let step = state.momentums[index];
    if step == 0.0 {
        return Probe::Exhausted;
    }

    let base_value = state.values[index];

    state.values[index] = base_value + step;
    let forward_loss = loss.loss(&state.values);
    if forward_loss < base_loss {
        state.momentums[index] = step * GROWTH;
        trace!(index, step, loss = forward_loss, "accepted forward probe");
        return Probe::Accepted {
            loss: forward_loss,
            step,
        };
    }

    state.values[index] = base_value - step;
    let backward_loss = loss.loss(&state.values);
    if backward_loss < base_loss {
        state.momentums[index] = -step;
        trace!(index, step, loss = backward_loss, "accepted backward probe");
        return Probe::Accepted {
            loss: backward_loss,
            step,
        };
    }

    state.values[index] = base_value;
    let halved = step / 2.0;
    if halved == step {
        state.momentums[index] = 0.0;
        Probe::Exhausted
    } else {
        state.momentums[index] = halved;
        Probe::Shrunk
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::Cell;

    use approx::assert_relative_eq;

    fn distance_to(target: f64) -> impl Fn(&[f64]) -> f64 {
        move |values: &[f64]| (values[0] - target).abs()
    }

    #[test]
    fn forward_win_grows_momentum() {
        let mut state = ParameterState::new(1, 1.0);
        let loss = distance_to(5.0);

        let outcome = probe(&mut state, 0, 5.0, &loss);

        assert_eq!(
            outcome,
            Probe::Accepted {
                loss: 4.0,
                step: 1.0
            }
        );
        assert_relative_eq!(state.values[0], 1.0);
        assert_relative_eq!(state.momentums[0], 1.5);
    }

    #[test]
    fn backward_win_flips_momentum() {
        let mut state = ParameterState::new(1, 2.0);
        let loss = distance_to(-5.0);

        let outcome = probe(&mut state, 0, 5.0, &loss);

        assert_eq!(
            outcome,
            Probe::Accepted {
                loss: 3.0,
                step: 2.0
            }
        );
        assert_relative_eq!(state.values[0], -2.0);
        assert_relative_eq!(state.momentums[0], -2.0);
    }

    #[test]
    fn negative_momentum_probes_downward_first() {
        let mut state = ParameterState::new(1, 1.0);
        state.momentums[0] = -1.0;
        let loss = distance_to(-5.0);

        probe(&mut state, 0, 5.0, &loss);

        assert_relative_eq!(state.values[0], -1.0);
        assert_relative_eq!(state.momentums[0], -1.5);
    }

    #[test]
    fn failed_probes_restore_value_and_halve() {
        let mut state = ParameterState::new(1, 4.0);
        state.values[0] = 0.5;
        let loss = distance_to(0.0);

        let outcome = probe(&mut state, 0, 0.5, &loss);

        assert_eq!(outcome, Probe::Shrunk);
        assert_relative_eq!(state.values[0], 0.5);
        assert_relative_eq!(state.momentums[0], 2.0);
    }

    #[test]
    fn halving_fixed_point_zeroes_momentum() {
        let mut state = ParameterState::new(1, 1.0);
        state.momentums[0] = f64::INFINITY;
        let loss = |_: &[f64]| 1.0;

        let outcome = probe(&mut state, 0, 1.0, &loss);

        assert_eq!(outcome, Probe::Exhausted);
        assert_eq!(state.momentums[0], 0.0);
        assert_eq!(state.values[0], 0.0);
    }

    #[test]
    fn smallest_step_halves_to_zero() {
        let mut state = ParameterState::new(1, f64::from_bits(1));
        let loss = |_: &[f64]| 1.0;

        assert_eq!(probe(&mut state, 0, 1.0, &loss), Probe::Shrunk);
        assert_eq!(state.momentums[0], 0.0);
        assert_eq!(probe(&mut state, 0, 1.0, &loss), Probe::Exhausted);
    }

    #[test]
    fn zero_momentum_skips_evaluation() {
        let mut state = ParameterState::new(1, 0.0);
        let calls = Cell::new(0);
        let loss = |_: &[f64]| {
            calls.set(calls.get() + 1);
            0.0
        };

        assert_eq!(probe(&mut state, 0, 1.0, &loss), Probe::Exhausted);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn ties_are_not_improvements() {
        let mut state = ParameterState::new(1, 1.0);
        let loss = |_: &[f64]| 2.0;

        assert_eq!(probe(&mut state, 0, 2.0, &loss), Probe::Shrunk);
        assert_eq!(state.values[0], 0.0);
    }

    #[test]
    fn simultaneous_epoch_settles_every_coordinate() {
        let mut state = ParameterState::new(3, 1.0);
        let mut flags = ConvergedFlags::default();
        let loss = |v: &[f64]| (v[0] - 1.0).powi(2) + (v[1] + 1.0).powi(2) + v[2].powi(2);

        let stats = run_epoch(Strategy::Simultaneous, &mut state, &mut flags, &loss);

        assert!(flags.all_settled());
        assert_relative_eq!(state.values[0], 1.0);
        assert_relative_eq!(state.values[1], -1.0);
        assert_relative_eq!(state.values[2], 0.0);
        assert_relative_eq!(stats.tuned, 2.0);
        assert_relative_eq!(stats.loss, 0.0);
        // The third coordinate is already optimal, so it halves down to zero.
        assert_eq!(state.momentums[2], 0.0);
    }

    #[test]
    fn sequential_epoch_matches_on_separable_loss() {
        let mut state = ParameterState::new(2, 1.0);
        let mut flags = ConvergedFlags::default();
        let loss = |v: &[f64]| (v[0] - 1.0).powi(2) + (v[1] + 1.0).powi(2);

        let stats = run_epoch(Strategy::Sequential, &mut state, &mut flags, &loss);

        assert_relative_eq!(state.values[0], 1.0);
        assert_relative_eq!(state.values[1], -1.0);
        assert_relative_eq!(stats.tuned, 2.0);
        assert_relative_eq!(stats.loss, 0.0);
    }

    #[test]
    fn empty_epoch_evaluates_once() {
        let mut state = ParameterState::new(0, 1.0);
        let mut flags = ConvergedFlags::default();
        let calls = Cell::new(0);
        let loss = |_: &[f64]| {
            calls.set(calls.get() + 1);
            7.0
        };

        for strategy in [Strategy::Simultaneous, Strategy::Sequential] {
            let stats = run_epoch(strategy, &mut state, &mut flags, &loss);
            assert_eq!(stats.tuned, 0.0);
            assert_eq!(stats.loss, 7.0);
        }
        assert_eq!(calls.get(), 2);
    }
}
