//! Cancellable one-shot timers on a tokio runtime.
//!
//! [`start_timer`] schedules a callback after a delay and returns a
//! [`CancelHandle`]. Cancelling (or dropping) the handle aborts the timer
//! task; a callback that has not started yet will never run.

use std::time::Duration;
use tokio::{runtime::Handle, task::AbortHandle};

/// Owner of a pending timer. Dropping it cancels the timer.
#[derive(Debug)]
pub struct CancelHandle {
    task: AbortHandle,
}

impl CancelHandle {
    /// Cancel the timer. No-op if it already fired.
    pub fn cancel(self) {
        // Drop does the abort.
    }

    /// `true` once the callback has run or the timer was aborted.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for CancelHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Run `on_fire` on `runtime` once `duration` has elapsed.
pub fn start_timer<F>(runtime: &Handle, duration: Duration, on_fire: F) -> CancelHandle
where
    F: FnOnce() + Send + 'static,
{
    let task = runtime.spawn(async move {
        tokio::time::sleep(duration).await;
        on_fire();
    });
    CancelHandle {
        task: task.abort_handle(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
