use std::future::Future;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, sleep, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Owner of timers and background tasks.
///
/// Every task spawned through a scheduler is bound to a child of its root
/// cancellation token. Dropping the scheduler cancels them all, so no task
/// acts on an owner that has been torn down.
#[derive(Debug)]
pub struct Scheduler {
    root: CancellationToken,
}

/// Handle to one scheduled task.
#[derive(Debug)]
pub struct ScheduledTask {
    name: &'static str,
    token: CancellationToken,
    handle: JoinHandle<()>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self {
            root: CancellationToken::new(),
        }
    }

    /// Run `task` once after `delay`, unless cancelled first.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule_once<F, Fut>(&self, name: &'static str, delay: Duration, task: F) -> ScheduledTask
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let token = self.root.child_token();
        let task_token = token.clone();

        debug!("{}: scheduled in {:?}", name, delay);
        let handle = tokio::spawn(async move {
            tokio::select! {
                _ = task_token.cancelled() => {
                    debug!("{}: cancelled before firing", name);
                }
                _ = sleep(delay) => {
                    debug!("{}: firing", name);
                    task().await;
                }
            }
        });

        ScheduledTask {
            name,
            token,
            handle,
        }
    }

    /// Run `task` every `period`, first after one full period, until cancelled.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule_repeating<F, Fut>(
        &self,
        name: &'static str,
        period: Duration,
        mut task: F,
    ) -> ScheduledTask
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let token = self.root.child_token();
        let task_token = token.clone();

        debug!("{}: repeating every {:?}", name, period);
        let handle = tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    _ = task_token.cancelled() => {
                        debug!("{}: stopped", name);
                        break;
                    }
                    _ = ticker.tick() => {
                        task().await;
                    }
                }
            }
        });

        ScheduledTask {
            name,
            token,
            handle,
        }
    }

    /// Run `future` now, dropping it unfinished if cancelled first.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn<Fut>(&self, name: &'static str, future: Fut) -> ScheduledTask
    where
        Fut: Future<Output = ()> + Send + 'static,
    {
        let token = self.root.child_token();
        let task_token = token.clone();

        debug!("{}: spawned", name);
        let handle = tokio::spawn(async move {
            tokio::select! {
                _ = task_token.cancelled() => {
                    debug!("{}: cancelled while running", name);
                }
                _ = future => {
                    debug!("{}: done", name);
                }
            }
        });

        ScheduledTask {
            name,
            token,
            handle,
        }
    }

    /// Cancel every task spawned by this scheduler.
    pub fn cancel_all(&self) {
        self.root.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.root.is_cancelled()
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Scheduler {
    fn drop(&mut self) {
        self.root.cancel();
    }
}

impl ScheduledTask {
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Cancel this task. Has no effect if it already ran.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for the task to complete (fire, stop, or be cancelled).
    pub async fn join(self) {
        let _ = self.handle.await;
    }
}
