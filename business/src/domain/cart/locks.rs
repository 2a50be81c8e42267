use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::domain::shared::value_objects::UserId;

/// Per-user async mutexes serializing read-modify-write spans within one process.
///
/// Writers in other processes are not covered; the store stays last-writer-wins
/// across instances.
#[derive(Default)]
pub struct CartLocks {
    inflight: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl CartLocks {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn acquire(&self, user_id: &UserId) -> OwnedMutexGuard<()> {
        let lock = {
            let mut inflight = self.inflight.lock().await;
            // Drop entries nobody holds or waits on.
            inflight.retain(|_, lock| Arc::strong_count(lock) > 1);
            Arc::clone(
                inflight
                    .entry(user_id.as_str().to_string())
                    .or_insert_with(|| Arc::new(Mutex::new(()))),
            )
        };
        lock.lock_owned().await
    }
}
