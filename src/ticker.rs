use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::clock::Clock;
use crate::day_progress::classify_with;
use crate::error::{Error, Result};
use crate::types::{DayProgressState, TimeFormat};

pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_secs(1);

/// Repeating timer that recomputes [`DayProgressState`] from a [`Clock`].
///
/// The first state is sent as soon as the task runs, then one per period.
/// Dropping the ticker cancels the task; [`DayProgressTicker::stop`] also
/// waits for it to finish.
#[derive(Debug)]
pub struct DayProgressTicker {
    stop_tx: Option<oneshot::Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl DayProgressTicker {
    pub fn start<C>(
        clock: C,
        period: Duration,
        format: TimeFormat,
    ) -> Result<(Self, mpsc::UnboundedReceiver<DayProgressState>)>
    where
        C: Clock + 'static,
    {
        if period.is_zero() {
            return Err(Error::Config("tick period must be greater than zero".to_string()));
        }
        let runtime = Handle::try_current().map_err(|_| Error::NoRuntime)?;

        let (state_tx, state_rx) = mpsc::unbounded_channel();
        let (stop_tx, stop_rx) = oneshot::channel();
        let handle = runtime.spawn(run_ticker(clock, period, format, state_tx, stop_rx));

        log::info!("day progress ticker started ({:?} period)", period);
        Ok((
            Self {
                stop_tx: Some(stop_tx),
                handle: Some(handle),
            },
            state_rx,
        ))
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|handle| !handle.is_finished())
    }

    pub async fn stop(mut self) {
        if let Some(stop_tx) = self.stop_tx.take() {
            let _ = stop_tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            if let Err(err) = handle.await {
                if !err.is_cancelled() {
                    log::warn!("day progress ticker task failed: {}", err);
                }
            }
        }
        log::info!("day progress ticker stopped");
    }
}

impl Drop for DayProgressTicker {
    fn drop(&mut self) {
        if let Some(stop_tx) = self.stop_tx.take() {
            let _ = stop_tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            handle.abort();
            log::info!("day progress ticker cancelled");
        }
    }
}

async fn run_ticker<C: Clock>(
    clock: C,
    period: Duration,
    format: TimeFormat,
    state_tx: mpsc::UnboundedSender<DayProgressState>,
    mut stop_rx: oneshot::Receiver<()>,
) {
    let mut interval = tokio::time::interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = &mut stop_rx => break,
            _ = interval.tick() => {
                let state = classify_with(&clock.now(), format);
                if state_tx.send(state).is_err() {
                    log::warn!("day progress receiver dropped, stopping ticker");
                    break;
                }
            }
        }
    }
}
