use momentum_core::{LossFunction, Observer};
use tracing::{debug, info};

use super::{Action, Config, Event, Optimizer, Reset, Solution, Status};

/// Drives epochs until a stopping condition holds.
///
/// Order of checks after each epoch: observer, loss target, epoch limit,
/// then stagnation. The epoch limit is checked before any reset so a capped
/// run returns the values the last epoch produced.
pub(super) fn auto_tune<L, R, Obs>(
    optimizer: &mut Optimizer,
    loss: &L,
    config: &Config,
    mut reset: R,
    mut observer: Obs,
) -> Solution
where
    L: LossFunction + ?Sized,
    R: Reset,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    optimizer.state_mut().refill(config.initial_step());

    let mut restarts = 0;
    let mut epoch = 0;

    loop {
        epoch += 1;
        let stats = optimizer.tune(loss);
        debug!(epoch, tuned = stats.tuned, loss = stats.loss, "epoch complete");

        let event = Event {
            epoch,
            stats,
            restarts,
            values: optimizer.values(),
            momentums: optimizer.momentums(),
        };
        let action = observer.observe(&event);

        let finish = |status: Status| {
            info!(?status, epoch, restarts, loss = stats.loss, "auto-tune finished");
            Solution {
                status,
                stats,
                epochs: epoch,
                restarts,
            }
        };

        if action == Some(Action::StopEarly) {
            return finish(Status::StoppedByObserver);
        }

        if stats.loss <= config.min_loss() {
            return finish(Status::Converged);
        }

        if config.max_epochs().is_some_and(|max| epoch >= max) {
            return finish(Status::MaxEpochs);
        }

        let forced = action == Some(Action::Restart);
        if stats.tuned <= config.min_step() || forced {
            restarts += 1;
            info!(
                epoch,
                restarts,
                forced,
                tuned = stats.tuned,
                loss = stats.loss,
                "restarting from reset values"
            );
            let state = optimizer.state_mut();
            reset.reset(&mut state.values);
            state.refill(config.initial_step());
        }
    }
}
