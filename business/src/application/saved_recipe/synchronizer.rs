use std::sync::Arc;

use tokio::sync::{Mutex, oneshot, watch};
use tokio::task::JoinHandle;

use crate::domain::logger::Logger;
use crate::domain::saved_recipe::model::SavedRecipeCollection;
use crate::domain::storage::key::StorageKey;
use crate::domain::storage::store::DurableStore;

/// Writes the saved collection to the durable store after every committed
/// change.
///
/// Runs as a background task fed by the container's change channel. Bursts
/// of changes may be coalesced, but the latest state is always written, and
/// a final flush happens on shutdown.
pub struct PersistenceSynchronizer {
    shutdown: Mutex<Option<oneshot::Sender<()>>>,
    handle: Mutex<Option<JoinHandle<()>>>,
}

impl PersistenceSynchronizer {
    /// Must be called from within a tokio runtime.
    pub fn spawn(
        changes: watch::Receiver<Arc<SavedRecipeCollection>>,
        store: Arc<DurableStore>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        let handle = tokio::spawn(run(changes, shutdown_rx, store, logger));

        Self {
            shutdown: Mutex::new(Some(shutdown_tx)),
            handle: Mutex::new(Some(handle)),
        }
    }

    /// Stops the task after a final flush. Later calls return immediately.
    pub async fn shutdown(&self) {
        if let Some(signal) = self.shutdown.lock().await.take() {
            let _ = signal.send(());
        }
        if let Some(handle) = self.handle.lock().await.take() {
            let _ = handle.await;
        }
    }
}

async fn run(
    mut changes: watch::Receiver<Arc<SavedRecipeCollection>>,
    mut shutdown: oneshot::Receiver<()>,
    store: Arc<DurableStore>,
    logger: Arc<dyn Logger>,
) {
    loop {
        tokio::select! {
            changed = changes.changed() => {
                if changed.is_err() {
                    break;
                }
                let snapshot = changes.borrow_and_update().clone();
                flush(&store, snapshot, logger.as_ref()).await;
            }
            _ = &mut shutdown => break,
        }
    }

    let snapshot = changes.borrow().clone();
    flush(&store, snapshot, logger.as_ref()).await;
    logger.info("Saved recipes synchronizer stopped");
}

/// Backends do blocking file I/O, so the write runs off the runtime workers.
async fn flush(
    store: &Arc<DurableStore>,
    snapshot: Arc<SavedRecipeCollection>,
    logger: &dyn Logger,
) {
    let count = snapshot.len();
    let store = store.clone();
    let written = tokio::task::spawn_blocking(move || {
        store.set(StorageKey::SavedRecipes, &*snapshot);
    })
    .await;

    match written {
        Ok(()) => logger.debug(&format!("Flushed {} saved recipes", count)),
        Err(err) => logger.error(&format!("Saved recipes flush task failed: {}", err)),
    }
}
