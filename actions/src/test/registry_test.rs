//! Unit tests for the action registry and the default wiring.

use crate::registry::default_registry;
use crate::test::support::{empty_domain, FakePropertyStore};
use rentbot_core::{ActionError, Dispatcher, RentbotError, Tracker};
use std::sync::Arc;

#[tokio::test]
async fn test_default_registry_wires_all_seven_actions() {
    let registry = default_registry(Arc::new(FakePropertyStore::default()));
    let mut names = registry.names();
    names.sort_unstable();

    assert_eq!(
        names,
        vec![
            "action_area_information",
            "action_compare_rooms",
            "action_get_contact_info",
            "action_get_room_details",
            "action_log_conversation",
            "action_reset_search",
            "action_search_rooms",
        ]
    );
}

#[tokio::test]
async fn test_run_dispatches_by_name() {
    let registry = default_registry(Arc::new(FakePropertyStore::default()));
    let tracker = Tracker::new("user-1", "session-1");
    let mut dispatcher = Dispatcher::new();

    let events = registry
        .run("action_reset_search", &mut dispatcher, &tracker, &empty_domain())
        .await
        .expect("Dispatch failed");

    assert_eq!(events.len(), 4);
    assert!(dispatcher.messages()[0].contains("Starting fresh search"));
}

#[tokio::test]
async fn test_unknown_action_is_an_error() {
    let registry = default_registry(Arc::new(FakePropertyStore::default()));
    let tracker = Tracker::new("user-1", "session-1");
    let mut dispatcher = Dispatcher::new();

    let result = registry
        .run("action_book_flight", &mut dispatcher, &tracker, &empty_domain())
        .await;

    match result {
        Err(RentbotError::Action(ActionError::UnknownAction(name))) => {
            assert_eq!(name, "action_book_flight");
        }
        other => panic!("expected UnknownAction, got {:?}", other),
    }
}
