//! Keystroke debouncing for the search box.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TryRecvError;
use tokio::task::JoinHandle;

/// Quiet period before a search query is considered settled.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(500);

enum Input {
    Value { epoch: u64, raw: String },
    Cancel,
}

/// Turns a stream of raw input values into settled values.
///
/// Every [`push`](Debouncer::push) restarts the quiet window. Once the window
/// passes with no newer value, the latest value is delivered through the
/// [`Settled`] receiver returned from [`Debouncer::new`]. Dropping the
/// debouncer stops the background task; a value still waiting out its window
/// is discarded.
pub struct Debouncer {
    tx: mpsc::UnboundedSender<Input>,
    epoch: Arc<AtomicU64>,
    task: JoinHandle<()>,
}

impl Debouncer {
    /// Must be called from within a tokio runtime.
    pub fn new(delay: Duration) -> (Self, Settled) {
        let (tx, input_rx) = mpsc::unbounded_channel();
        let (settled_tx, settled_rx) = mpsc::unbounded_channel();
        let epoch = Arc::new(AtomicU64::new(0));
        let task = tokio::spawn(run_debounce_loop(input_rx, settled_tx, delay));
        let settled = Settled {
            rx: settled_rx,
            epoch: epoch.clone(),
        };
        (Self { tx, epoch, task }, settled)
    }

    /// Record a new raw value, superseding any pending one.
    pub fn push(&self, raw: impl Into<String>) {
        let epoch = self.epoch.load(Ordering::SeqCst);
        // Send only fails once the loop has exited, at which point the
        // receiving side is gone too.
        let _ = self.tx.send(Input::Value {
            epoch,
            raw: raw.into(),
        });
    }

    /// Discard the pending value, including one that already settled but
    /// has not been received yet.
    pub fn cancel(&self) {
        self.epoch.fetch_add(1, Ordering::SeqCst);
        let _ = self.tx.send(Input::Cancel);
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Receiving side of a [`Debouncer`].
pub struct Settled {
    rx: mpsc::UnboundedReceiver<(u64, String)>,
    epoch: Arc<AtomicU64>,
}

impl Settled {
    /// Next settled value, or `None` once the debouncer is gone.
    pub async fn recv(&mut self) -> Option<String> {
        loop {
            let (epoch, value) = self.rx.recv().await?;
            if self.is_current(epoch) {
                return Some(value);
            }
        }
    }

    pub fn try_recv(&mut self) -> Result<String, TryRecvError> {
        loop {
            let (epoch, value) = self.rx.try_recv()?;
            if self.is_current(epoch) {
                return Ok(value);
            }
        }
    }

    fn is_current(&self, epoch: u64) -> bool {
        let current = self.epoch.load(Ordering::SeqCst);
        if epoch != current {
            tracing::trace!("dropping cancelled search query");
        }
        epoch == current
    }
}

async fn run_debounce_loop(
    mut input_rx: mpsc::UnboundedReceiver<Input>,
    settled_tx: mpsc::UnboundedSender<(u64, String)>,
    delay: Duration,
) {
    loop {
        // Wait for the first value of a burst
        let mut pending = match input_rx.recv().await {
            Some(Input::Value { epoch, raw }) => (epoch, raw),
            Some(Input::Cancel) => continue,
            None => return,
        };

        // Keep replacing it until the window passes quietly
        let settled = loop {
            match tokio::time::timeout(delay, input_rx.recv()).await {
                Ok(Some(Input::Value { epoch, raw })) => pending = (epoch, raw),
                Ok(Some(Input::Cancel)) => break None,
                // Owner dropped mid-window: nothing gets published
                Ok(None) => return,
                Err(_) => break Some(pending),
            }
        };

        let Some(settled) = settled else {
            continue;
        };
        tracing::trace!("search query settled: {:?}", settled.1);
        if settled_tx.send(settled).is_err() {
            return;
        }
    }
}
