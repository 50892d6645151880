use std::sync::Arc;

use serde::Serialize;
use tokio::sync::{oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::Duration;

/// Lifecycle of a simulated operation. Pending until the timer fires, then
/// Complete; a cancelled task never delivers its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskState {
    Pending,
    Complete,
    Cancelled,
}

/// A one-shot timer that yields `value` after `delay`. There is no failure
/// path: the task always completes unless cancelled first. Cancellation is
/// fire-never, idempotent, and safe to call after the timer has already
/// fired. Dropping the task cancels it, which is the owning view's cleanup
/// path.
pub struct DelayedTask<T> {
    state_tx: Arc<watch::Sender<TaskState>>,
    state_rx: watch::Receiver<TaskState>,
    result_rx: oneshot::Receiver<T>,
    handle: JoinHandle<()>,
}

/// Schedule `value` for delivery after `delay`. Must be called from within a
/// tokio runtime.
pub fn schedule<T: Send + 'static>(delay: Duration, value: T) -> DelayedTask<T> {
    let (state_tx, state_rx) = watch::channel(TaskState::Pending);
    let state_tx = Arc::new(state_tx);
    let (result_tx, result_rx) = oneshot::channel();

    let task_state = state_tx.clone();
    let handle = tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        let mut fired = false;
        task_state.send_modify(|state| {
            if *state == TaskState::Pending {
                *state = TaskState::Complete;
                fired = true;
            }
        });
        if fired {
            // Receiver may already be gone; nothing to do then.
            let _ = result_tx.send(value);
        }
    });

    DelayedTask {
        state_tx,
        state_rx,
        result_rx,
        handle,
    }
}

impl<T> DelayedTask<T> {
    pub fn state(&self) -> TaskState {
        *self.state_rx.borrow()
    }

    pub fn is_pending(&self) -> bool {
        self.state() == TaskState::Pending
    }

    /// Cancel the timer so the completion value is never delivered. Calling
    /// this on an already-fired or already-cancelled task is a no-op.
    pub fn cancel(&mut self) {
        let mut cancelled = false;
        self.state_tx.send_modify(|state| {
            if *state == TaskState::Pending {
                *state = TaskState::Cancelled;
                cancelled = true;
            }
        });
        if cancelled {
            self.handle.abort();
            log::debug!("delayed task cancelled before completion");
        }
    }

    /// Wait for the timer to fire. Returns None if the task was (or gets)
    /// cancelled instead.
    pub async fn wait(&mut self) -> Option<T> {
        (&mut self.result_rx).await.ok()
    }
}

impl<T> Drop for DelayedTask<T> {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::advance;

    #[tokio::test(start_paused = true)]
    async fn task_completes_after_its_delay() {
        let mut task = schedule(Duration::from_millis(2000), 42u32);
        assert_eq!(task.state(), TaskState::Pending);

        advance(Duration::from_millis(1999)).await;
        tokio::task::yield_now().await;
        assert_eq!(task.state(), TaskState::Pending);

        advance(Duration::from_millis(1)).await;
        assert_eq!(task.wait().await, Some(42));
        assert_eq!(task.state(), TaskState::Complete);
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_task_never_delivers() {
        let mut task = schedule(Duration::from_millis(2000), "summary");
        advance(Duration::from_millis(500)).await;
        task.cancel();
        assert_eq!(task.state(), TaskState::Cancelled);

        // Even well past the original deadline nothing arrives.
        advance(Duration::from_millis(5000)).await;
        assert_eq!(task.wait().await, None);
        assert_eq!(task.state(), TaskState::Cancelled);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_is_idempotent() {
        let mut task = schedule(Duration::from_millis(100), 1u8);
        task.cancel();
        task.cancel();
        assert_eq!(task.state(), TaskState::Cancelled);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_after_completion_is_a_no_op() {
        let mut task = schedule(Duration::from_millis(100), 7u8);
        advance(Duration::from_millis(100)).await;
        assert_eq!(task.wait().await, Some(7));
        task.cancel();
        assert_eq!(task.state(), TaskState::Complete);
    }

    #[tokio::test(start_paused = true)]
    async fn drop_cancels_a_pending_task() {
        let task = schedule(Duration::from_millis(1000), 3u8);
        let state_rx = task.state_rx.clone();
        drop(task);
        assert_eq!(*state_rx.borrow(), TaskState::Cancelled);
    }
}
