//! Conversation audit logging: one row per turn, best-effort.

use async_trait::async_trait;
use rentbot_core::{Action, Dispatcher, Domain, Event, Result, Tracker};
use std::sync::Arc;
use storage::{ConversationLogRecord, PropertyStore};
use tracing::warn;

/// Writes the latest turn (user message, bot response, NLU metadata) to the
/// `bot_conversations` table. Emits no messages and no events; a failed write is
/// a warning, never a conversation fault.
#[derive(Clone)]
pub struct LogConversationAction {
    store: Arc<dyn PropertyStore>,
}

impl LogConversationAction {
    pub fn new(store: Arc<dyn PropertyStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Action for LogConversationAction {
    fn name(&self) -> &'static str {
        "action_log_conversation"
    }

    async fn run(
        &self,
        _dispatcher: &mut Dispatcher,
        tracker: &Tracker,
        _domain: &Domain,
    ) -> Result<Vec<Event>> {
        let latest = &tracker.latest_message;
        let record = ConversationLogRecord::new(
            Some(tracker.sender_id.clone()),
            tracker.session_id.clone(),
            latest.text.clone(),
            tracker.latest_bot_message.clone().unwrap_or_default(),
            latest.intent.as_ref().map(|intent| intent.name.clone()),
            latest.intent.as_ref().map(|intent| intent.confidence),
            serde_json::to_value(&latest.entities).unwrap_or_default(),
        );

        if let Err(e) = self.store.log_conversation(&record).await {
            warn!(
                error = %e,
                session_id = %tracker.session_id,
                "Failed to log conversation turn"
            );
        }

        Ok(vec![])
    }
}
