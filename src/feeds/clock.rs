use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;

use crate::events::Event;

const TICK: Duration = Duration::from_secs(1);

/// Spawns a task that sends a Tick event every second for as long as the page is up.
pub fn spawn(tx: mpsc::Sender<Event>) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(TICK);
        // A late tick is recomputed from wall time anyway; no need to catch up.
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            interval.tick().await;
            if tx.send(Event::Tick).await.is_err() {
                break;
            }
        }
    });
}
