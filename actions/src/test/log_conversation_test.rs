//! Unit tests for LogConversationAction: best-effort audit writes.

use crate::log_conversation::LogConversationAction;
use crate::test::support::{empty_domain, FakePropertyStore};
use rentbot_core::{Action, Dispatcher, Entity, Intent, LatestMessage, Tracker};
use std::sync::Arc;

fn turn_tracker() -> Tracker {
    let mut tracker = Tracker::new("user-9", "session-42");
    tracker.latest_message = LatestMessage {
        text: "show me rooms in dhanmondi".to_string(),
        intent: Some(Intent {
            name: "search_rooms".to_string(),
            confidence: 0.93,
        }),
        entities: vec![Entity {
            entity: "location".to_string(),
            value: "dhanmondi".to_string(),
        }],
    };
    tracker.latest_bot_message = Some("🎉 Found 2 room(s) in Dhanmondi:".to_string());
    tracker
}

#[tokio::test]
async fn test_turn_is_recorded_with_nlu_metadata() {
    let store = Arc::new(FakePropertyStore::default());
    let action = LogConversationAction::new(store.clone());
    let tracker = turn_tracker();
    let mut dispatcher = Dispatcher::new();

    let events = action
        .run(&mut dispatcher, &tracker, &empty_domain())
        .await
        .expect("Action failed");

    assert!(events.is_empty());
    assert!(dispatcher.messages().is_empty());

    let conversations = store
        .conversations
        .lock()
        .expect("conversations mutex poisoned");
    assert_eq!(conversations.len(), 1);
    let record = &conversations[0];
    assert_eq!(record.session_id, "session-42");
    assert_eq!(record.user_message, "show me rooms in dhanmondi");
    assert_eq!(record.bot_response, "🎉 Found 2 room(s) in Dhanmondi:");
    assert_eq!(record.intent.as_deref(), Some("search_rooms"));
    assert_eq!(record.confidence, Some(0.93));
    assert_eq!(record.entities[0]["entity"], "location");
}

#[tokio::test]
async fn test_write_failure_is_swallowed() {
    let action = LogConversationAction::new(Arc::new(FakePropertyStore::failing()));
    let tracker = turn_tracker();
    let mut dispatcher = Dispatcher::new();

    let events = action
        .run(&mut dispatcher, &tracker, &empty_domain())
        .await
        .expect("Action should not fail on a logging error");

    assert!(events.is_empty());
    assert!(dispatcher.messages().is_empty());
}
