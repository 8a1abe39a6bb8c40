use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::debug;

use crate::contract::ContractDataSource;
use crate::events::Event;

/// Spawns a task that re-reads the contract every `every` and sends Snapshot events.
/// Stops once the event loop has gone away.
pub fn spawn<S: ContractDataSource>(source: Arc<S>, every: Duration, tx: mpsc::Sender<Event>) {
    tokio::spawn(async move {
        loop {
            let snapshot = source.snapshot().await;
            if tx.send(Event::Snapshot(snapshot)).await.is_err() {
                debug!("[snapshot] receiver closed, stopping");
                break;
            }
            tokio::time::sleep(every).await;
        }
    });
}
