use crate::models::profile::ProfileField;
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tokio::time::{sleep_until, Instant};
use tracing::trace;

#[derive(Debug)]
struct FlagExpired {
    field: ProfileField,
    generation: u64,
}

/// Transient "just saved" indicators.
///
/// Marking a field schedules a deferred expiry message; the flag is cleared
/// when that message is drained, unless the field was marked again since.
pub struct SavedFlags {
    window: Duration,
    flags: HashMap<ProfileField, u64>,
    next_generation: u64,
    tx: UnboundedSender<FlagExpired>,
    rx: UnboundedReceiver<FlagExpired>,
}

impl SavedFlags {
    pub fn new(window: Duration) -> Self {
        let (tx, rx) = unbounded_channel();
        Self {
            window,
            flags: HashMap::new(),
            next_generation: 0,
            tx,
            rx,
        }
    }

    /// Set the flag for `field` and schedule its expiry.
    /// Must be called from within a tokio runtime.
    pub fn mark(&mut self, field: ProfileField) {
        self.next_generation += 1;
        let generation = self.next_generation;
        self.flags.insert(field, generation);

        let deadline = Instant::now() + self.window;
        let tx = self.tx.clone();
        tokio::spawn(async move {
            sleep_until(deadline).await;
            // Receiver is gone once the editor is dropped
            let _ = tx.send(FlagExpired { field, generation });
        });
    }

    pub fn is_saved(&mut self, field: ProfileField) -> bool {
        self.drain_expired();
        self.flags.contains_key(&field)
    }

    fn drain_expired(&mut self) {
        while let Ok(expired) = self.rx.try_recv() {
            if self.flags.get(&expired.field) == Some(&expired.generation) {
                trace!(field = %expired.field, "Saved indicator expired");
                self.flags.remove(&expired.field);
            }
        }
    }
}
