use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::broadcast::{self, error::RecvError};

/// Teardown signal for one mounted screen.
///
/// Cloned handles share the signal. Once torn down, every guard wakes and
/// guards subscribed afterwards see the teardown immediately.
#[derive(Clone)]
pub struct ScreenLifetime {
    teardown_tx: broadcast::Sender<()>,
    torn_down: Arc<AtomicBool>,
}

impl ScreenLifetime {
    pub fn new() -> Self {
        let (teardown_tx, _) = broadcast::channel(1);
        Self {
            teardown_tx,
            torn_down: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Signal that the screen is going away.
    pub fn teardown(&self) {
        log::debug!("Screen teardown, notifying in-flight loads");
        self.torn_down.store(true, Ordering::Release);
        let _ = self.teardown_tx.send(());
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down.load(Ordering::Acquire)
    }

    pub fn subscribe(&self) -> TeardownGuard {
        TeardownGuard {
            teardown_rx: self.teardown_tx.subscribe(),
            torn_down: Arc::clone(&self.torn_down),
        }
    }
}

impl Default for ScreenLifetime {
    fn default() -> Self {
        Self::new()
    }
}

/// Receiving side of a [`ScreenLifetime`], held by a loader.
pub struct TeardownGuard {
    teardown_rx: broadcast::Receiver<()>,
    torn_down: Arc<AtomicBool>,
}

impl TeardownGuard {
    /// Wait for teardown.
    ///
    /// Dropping every `ScreenLifetime` handle is not a teardown; the wait
    /// then never completes.
    pub async fn wait(&mut self) {
        if self.torn_down.load(Ordering::Acquire) {
            return;
        }

        match self.teardown_rx.recv().await {
            Ok(()) | Err(RecvError::Lagged(_)) => {}
            Err(RecvError::Closed) => std::future::pending().await,
        }
    }

    /// Non-blocking check.
    pub fn is_torn_down(&self) -> bool {
        self.torn_down.load(Ordering::Acquire)
    }
}
