use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::{RosterError, RosterRecord, RosterSource};

/// Roster records held in memory, grouped by view.
#[derive(Debug, Default)]
pub struct MemoryRoster {
    views: RwLock<BTreeMap<String, Vec<RosterRecord>>>,
}

impl MemoryRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `record` to `view`, replacing a record with the same ID.
    pub async fn insert(&self, view: &str, record: RosterRecord) {
        let mut views = self.views.write().await;
        let records = views.entry(view.to_string()).or_default();
        records.retain(|existing| existing.id != record.id);
        records.push(record);
    }
}

#[async_trait]
impl RosterSource for MemoryRoster {
    async fn list_records(&self, view: &str) -> Result<Vec<RosterRecord>, RosterError> {
        self.views
            .read()
            .await
            .get(view)
            .cloned()
            .ok_or_else(|| RosterError::ViewNotFound(view.to_string()))
    }

    async fn find_record(&self, record_id: &str) -> Result<Option<RosterRecord>, RosterError> {
        Ok(self
            .views
            .read()
            .await
            .values()
            .flatten()
            .find(|record| record.id == record_id)
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_views_and_lookup() {
        let roster = MemoryRoster::new();
        roster
            .insert("Grid view", RosterRecord::new("rec1", Default::default()))
            .await;
        roster
            .insert("Grid view", RosterRecord::new("rec1", Default::default()))
            .await;
        roster
            .insert("Fall", RosterRecord::new("rec2", Default::default()))
            .await;

        assert_eq!(roster.list_records("Grid view").await.unwrap().len(), 1);
        assert!(roster.find_record("rec2").await.unwrap().is_some());
        assert!(roster.find_record("rec3").await.unwrap().is_none());
        assert!(matches!(
            roster.list_records("Spring").await,
            Err(RosterError::ViewNotFound(_))
        ));
    }
}
