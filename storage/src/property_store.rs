//! PropertyStore trait: the seam between conversation actions and the database.
//!
//! Actions depend on this trait, never on the MySQL implementation; tests substitute
//! an in-memory double. Audit writes are best-effort by contract: callers log and
//! continue on error rather than surfacing a fault to the conversation.

use crate::error::StorageError;
use crate::models::{
    ConversationLogRecord, Property, PropertyDetails, SearchAnalyticsRecord, SearchFilter,
};
use async_trait::async_trait;

#[async_trait]
pub trait PropertyStore: Send + Sync {
    /// Searches available properties, ordered by rent ascending, at most 10 rows.
    async fn search_properties(&self, filter: &SearchFilter)
        -> Result<Vec<Property>, StorageError>;

    /// Fetches one property with its nearby places and transportation options.
    /// `Ok(None)` when no property has the given id.
    async fn get_property_details(&self, id: i64)
        -> Result<Option<PropertyDetails>, StorageError>;

    /// Records an executed search. Best-effort; callers may ignore the result.
    async fn log_search_analytics(
        &self,
        record: &SearchAnalyticsRecord,
    ) -> Result<(), StorageError>;

    /// Records one conversational turn. Best-effort; callers may ignore the result.
    async fn log_conversation(&self, record: &ConversationLogRecord)
        -> Result<(), StorageError>;
}
