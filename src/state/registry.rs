//! Observer registry for live session updates

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::{mpsc, Mutex};
use tracing::debug;

use super::session::TimerSession;

/// Stable identifier for a registered observer.
pub type ObserverId = u64;

/// Concurrency-safe set of push-channel endpoints.
///
/// Observers are referenced by id, never by the channel itself, so removal
/// is idempotent and safe under arbitrary interleavings of register,
/// unregister and broadcast from independent tasks. Delivery iterates a
/// point-in-time snapshot of the set; an observer whose channel has closed
/// is removed in the same pass.
#[derive(Debug, Default)]
pub struct ObserverRegistry {
    next_id: AtomicU64,
    observers: Mutex<HashMap<ObserverId, mpsc::UnboundedSender<TimerSession>>>,
}

impl ObserverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an observer's sending half and return its id.
    pub async fn register(&self, sender: mpsc::UnboundedSender<TimerSession>) -> ObserverId {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        self.observers.lock().await.insert(id, sender);
        debug!(observer = id, "observer registered");
        id
    }

    /// Remove an observer. Removing an id that is already gone is a no-op.
    pub async fn unregister(&self, id: ObserverId) {
        if self.observers.lock().await.remove(&id).is_some() {
            debug!(observer = id, "observer unregistered");
        }
    }

    /// Push a session snapshot to every registered observer.
    ///
    /// A failed push never blocks delivery to the others. Returns the
    /// number of observers that received the snapshot.
    pub async fn broadcast(&self, session: &TimerSession) -> usize {
        let entries: Vec<(ObserverId, mpsc::UnboundedSender<TimerSession>)> = {
            let observers = self.observers.lock().await;
            observers
                .iter()
                .map(|(id, sender)| (*id, sender.clone()))
                .collect()
        };

        let mut delivered = 0;
        let mut failed = Vec::new();
        for (id, sender) in entries {
            if sender.send(session.clone()).is_ok() {
                delivered += 1;
            } else {
                failed.push(id);
            }
        }

        if !failed.is_empty() {
            let mut observers = self.observers.lock().await;
            for id in failed {
                if observers.remove(&id).is_some() {
                    debug!(observer = id, "removed disconnected observer");
                }
            }
        }

        delivered
    }

    pub async fn len(&self) -> usize {
        self.observers.lock().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::session::Phase;

    fn snapshot() -> TimerSession {
        TimerSession::starting(Phase::Focus, 60, 1, 1)
    }

    #[tokio::test]
    async fn broadcast_reaches_every_registered_observer() {
        let registry = ObserverRegistry::new();
        let (tx_a, mut rx_a) = mpsc::unbounded_channel();
        let (tx_b, mut rx_b) = mpsc::unbounded_channel();
        registry.register(tx_a).await;
        registry.register(tx_b).await;

        let delivered = registry.broadcast(&snapshot()).await;

        assert_eq!(delivered, 2);
        assert_eq!(rx_a.recv().await.unwrap(), snapshot());
        assert_eq!(rx_b.recv().await.unwrap(), snapshot());
    }

    #[tokio::test]
    async fn failed_delivery_removes_only_the_dead_observer() {
        let registry = ObserverRegistry::new();
        let (tx_dead, rx_dead) = mpsc::unbounded_channel();
        let (tx_live, mut rx_live) = mpsc::unbounded_channel();
        registry.register(tx_dead).await;
        registry.register(tx_live).await;
        drop(rx_dead);

        let delivered = registry.broadcast(&snapshot()).await;

        assert_eq!(delivered, 1);
        assert_eq!(registry.len().await, 1);
        assert_eq!(rx_live.recv().await.unwrap(), snapshot());
    }

    #[tokio::test]
    async fn unregister_is_idempotent() {
        let registry = ObserverRegistry::new();
        let (tx, _rx) = mpsc::unbounded_channel();
        let id = registry.register(tx).await;

        registry.unregister(id).await;
        registry.unregister(id).await;

        assert_eq!(registry.len().await, 0);
    }
}
