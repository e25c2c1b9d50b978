//! Cancellable, delayed delivery of computer move tickets.

use crate::driver::PendingMove;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, instrument};

/// Fires [`PendingMove`] tickets after a fixed delay.
///
/// At most one ticket is in flight. Scheduling a new one or calling
/// [`Scheduler::cancel`] aborts the previous task. A ticket that still
/// slips through is rejected by the driver's epoch check.
#[derive(Debug)]
pub struct Scheduler {
    delay: Duration,
    tx: mpsc::UnboundedSender<PendingMove>,
    task: Option<JoinHandle<()>>,
}

impl Scheduler {
    /// Creates a scheduler and the receiver its tickets arrive on.
    pub fn new(delay: Duration) -> (Self, mpsc::UnboundedReceiver<PendingMove>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                delay,
                tx,
                task: None,
            },
            rx,
        )
    }

    /// Delivers `pending` once the delay has elapsed.
    ///
    /// Must be called from within a tokio runtime.
    #[instrument(skip(self), fields(delay = ?self.delay))]
    pub fn schedule(&mut self, pending: PendingMove) {
        self.cancel();
        let tx = self.tx.clone();
        let delay = self.delay;
        self.task = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if tx.send(pending).is_err() {
                debug!("Receiver dropped before computer move fired");
            }
        }));
    }

    /// Aborts the in-flight ticket, if any.
    pub fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            if !task.is_finished() {
                debug!("Cancelling scheduled computer move");
            }
            task.abort();
        }
    }

    /// Returns true while a ticket is waiting to fire.
    pub fn is_scheduled(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }
}

impl Drop for Scheduler {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::{Driver, Resolution, Turn};
    use strictly_tictactoe::Mode;

    fn pending_after_center(driver: &mut Driver) -> PendingMove {
        match driver.select(4).expect("legal move") {
            Turn::Computer(pending) => pending,
            other => panic!("expected computer turn, got {:?}", other),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticket_fires_after_delay() {
        let mut driver = Driver::new(Mode::HumanVsComputer);
        let (mut scheduler, mut rx) = Scheduler::new(Duration::from_millis(500));

        let pending = pending_after_center(&mut driver);
        scheduler.schedule(pending);
        assert!(scheduler.is_scheduled());

        let fired = rx.recv().await.expect("ticket delivered");
        assert_eq!(fired, pending);
        assert!(matches!(driver.resolve(fired), Ok(Resolution::Applied { .. })));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_prevents_delivery() {
        let mut driver = Driver::new(Mode::HumanVsComputer);
        let (mut scheduler, mut rx) = Scheduler::new(Duration::from_millis(500));

        scheduler.schedule(pending_after_center(&mut driver));
        scheduler.cancel();
        driver.reset();

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert!(rx.try_recv().is_err());
        assert!(!scheduler.is_scheduled());
    }

    #[tokio::test(start_paused = true)]
    async fn test_uncancelled_ticket_is_stale_after_reset() {
        let mut driver = Driver::new(Mode::HumanVsComputer);
        let (mut scheduler, mut rx) = Scheduler::new(Duration::from_millis(500));

        scheduler.schedule(pending_after_center(&mut driver));
        driver.reset();

        let fired = rx.recv().await.expect("ticket delivered");
        assert_eq!(driver.resolve(fired), Ok(Resolution::Stale));
        assert!(driver.state().history().is_empty());
    }
}
