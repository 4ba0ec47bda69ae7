// src/pipeline/shutdown.rs

//! Graceful stop signal for a running crawl.
//!
//! The crawler checks the token before each page and job fetch. A stop lets
//! the request in flight finish and then halts, so no half-built record is
//! ever emitted.

use tokio::sync::watch;

/// Receiving side of the stop signal.
#[derive(Clone)]
pub struct ShutdownToken {
    rx: watch::Receiver<bool>,
}

impl ShutdownToken {
    /// A token that is never triggered.
    pub fn never() -> Self {
        let (_tx, rx) = watch::channel(false);
        Self { rx }
    }

    /// Check if a stop was requested.
    pub fn is_shutdown(&self) -> bool {
        *self.rx.borrow()
    }

    /// Wait for the stop signal.
    pub async fn wait(&mut self) {
        while !*self.rx.borrow_and_update() {
            if self.rx.changed().await.is_err() {
                // Sender dropped without signalling: never resolves.
                std::future::pending::<()>().await;
            }
        }
    }
}

/// Sending side of the stop signal.
pub struct ShutdownSender {
    tx: watch::Sender<bool>,
}

impl ShutdownSender {
    /// Ask every holder of a token to stop.
    pub fn shutdown(&self) {
        let _ = self.tx.send(true);
    }
}

/// Relay interrupt signals to a running crawl.
///
/// The first interrupt requests a graceful stop. Returns `true` on a second
/// interrupt, when the caller should exit at once; `false` if listening fails.
pub async fn relay_interrupts<F, Fut>(sender: ShutdownSender, mut interrupt: F) -> bool
where
    F: FnMut() -> Fut,
    Fut: Future<Output = std::io::Result<()>>,
{
    if let Err(e) = interrupt().await {
        log::warn!("Cannot listen for interrupts: {e}");
        return false;
    }
    log::warn!("Interrupt received, finishing the current request (interrupt again to quit)");
    sender.shutdown();

    if interrupt().await.is_err() {
        return false;
    }
    log::error!("Second interrupt, exiting without export");
    true
}

/// Create a linked sender/token pair.
pub fn shutdown_channel() -> (ShutdownSender, ShutdownToken) {
    let (tx, rx) = watch::channel(false);
    (ShutdownSender { tx }, ShutdownToken { rx })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_reaches_clones() {
        let (sender, token) = shutdown_channel();
        let clone = token.clone();
        assert!(!token.is_shutdown());

        sender.shutdown();
        assert!(token.is_shutdown());
        assert!(clone.is_shutdown());
    }

    #[test]
    fn test_never_stays_clear() {
        assert!(!ShutdownToken::never().is_shutdown());
    }

    #[tokio::test]
    async fn test_second_interrupt_forces_exit() {
        let (sender, token) = shutdown_channel();
        let interrupt = || std::future::ready(Ok(()));

        assert!(relay_interrupts(sender, interrupt).await);
        assert!(token.is_shutdown());
    }

    #[tokio::test(start_paused = true)]
    async fn test_single_interrupt_only_stops() {
        let (sender, token) = shutdown_channel();
        let mut calls = 0;
        let interrupt = move || {
            calls += 1;
            let first = calls == 1;
            async move {
                if first {
                    Ok(())
                } else {
                    std::future::pending::<std::io::Result<()>>().await
                }
            }
        };

        let relay = tokio::time::timeout(
            std::time::Duration::from_secs(5),
            relay_interrupts(sender, interrupt),
        )
        .await;
        assert!(relay.is_err(), "relay returned without a second interrupt");
        assert!(token.is_shutdown());
    }

    #[tokio::test]
    async fn test_listen_failure_does_not_stop() {
        let (sender, token) = shutdown_channel();
        let interrupt = || std::future::ready(Err(std::io::Error::other("no signal support")));

        assert!(!relay_interrupts(sender, interrupt).await);
        assert!(!token.is_shutdown());
    }

    #[tokio::test]
    async fn test_wait_returns_after_signal() {
        let (sender, mut token) = shutdown_channel();
        let waiter = tokio::spawn(async move {
            token.wait().await;
            token.is_shutdown()
        });
        sender.shutdown();
        assert!(waiter.await.unwrap());
    }
}
