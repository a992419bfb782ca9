use crate::shared::infrastructure::intent_outbox::{DomainOutbox, OutboxError, OutboxRow};
use std::collections::HashSet;
use tokio::sync::Mutex;

/// Rows are kept for the life of the process and never relayed.
#[derive(Default)]
pub struct InMemoryDomainOutbox {
    pub rows: Mutex<Vec<OutboxRow>>,
    seen: Mutex<HashSet<String>>,
    is_offline: bool,
}

impl InMemoryDomainOutbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }
}

#[async_trait::async_trait]
impl DomainOutbox for InMemoryDomainOutbox {
    async fn enqueue(&self, row: OutboxRow) -> Result<(), OutboxError> {
        if self.is_offline {
            return Err(OutboxError::Backend("Outbox offline".into()));
        }
        {
            let mut s = self.seen.lock().await;
            if !s.insert(row.event_id.clone()) {
                return Err(OutboxError::Duplicate {
                    event_id: row.event_id,
                });
            }
        }
        self.rows.lock().await.push(row);
        Ok(())
    }
}
