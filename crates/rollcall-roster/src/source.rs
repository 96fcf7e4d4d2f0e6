use async_trait::async_trait;

use crate::{RosterError, RosterRecord};

/// Read access to the teacher schedule table.
#[async_trait]
pub trait RosterSource: Send + Sync {
    /// Every record of `view`, across all pages.
    async fn list_records(&self, view: &str) -> Result<Vec<RosterRecord>, RosterError>;

    /// One record by ID; `None` when it does not exist.
    async fn find_record(&self, record_id: &str) -> Result<Option<RosterRecord>, RosterError>;
}
