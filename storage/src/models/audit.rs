//! Write-only audit records for the `search_analytics` and `bot_conversations` tables.
//!
//! No read path exists in this code; rows are inserted best-effort and analyzed
//! out-of-band.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// One executed property search, for usage analytics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchAnalyticsRecord {
    pub id: String,
    pub user_id: Option<String>,
    pub search_location: Option<String>,
    pub search_budget: Option<f64>,
    pub search_preferences: Option<Vec<String>>,
    pub results_count: i64,
    pub created_at: DateTime<Utc>,
}

impl SearchAnalyticsRecord {
    /// Creates a new record with a generated UUID and current timestamp.
    pub fn new(
        user_id: Option<String>,
        search_location: Option<String>,
        search_budget: Option<f64>,
        search_preferences: Option<Vec<String>>,
        results_count: i64,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id,
            search_location,
            search_budget,
            search_preferences,
            results_count,
            created_at: Utc::now(),
        }
    }
}

/// One conversational turn (user message and bot response) with NLU metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationLogRecord {
    pub id: String,
    pub user_id: Option<String>,
    pub session_id: String,
    pub user_message: String,
    pub bot_response: String,
    pub intent: Option<String>,
    pub confidence: Option<f64>,
    /// NLU entities as produced by the framework, JSON-encoded on insert.
    pub entities: Value,
    pub created_at: DateTime<Utc>,
}

impl ConversationLogRecord {
    /// Creates a new record with a generated UUID and current timestamp.
    pub fn new(
        user_id: Option<String>,
        session_id: String,
        user_message: String,
        bot_response: String,
        intent: Option<String>,
        confidence: Option<f64>,
        entities: Value,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id,
            session_id,
            user_message,
            bot_response,
            intent,
            confidence,
            entities,
            created_at: Utc::now(),
        }
    }
}
