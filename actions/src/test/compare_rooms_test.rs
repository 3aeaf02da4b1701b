//! Unit tests for CompareRoomsAction.

use crate::compare_rooms::CompareRoomsAction;
use crate::test::support::{empty_domain, sample_property, tracker_with_results};
use rentbot_core::{Action, Dispatcher};

#[tokio::test]
async fn test_single_result_needs_more_rooms() {
    let action = CompareRoomsAction::new();
    let tracker = tracker_with_results(&[sample_property(1, "Dhanmondi", 5000)]);
    let mut dispatcher = Dispatcher::new();

    let events = action
        .run(&mut dispatcher, &tracker, &empty_domain())
        .await
        .expect("Action failed");

    assert!(events.is_empty());
    assert!(dispatcher.messages()[0].contains("at least 2 rooms to compare"));
}

#[tokio::test]
async fn test_two_results_render_two_entries() {
    let action = CompareRoomsAction::new();
    let tracker = tracker_with_results(&[
        sample_property(1, "Dhanmondi", 5000),
        sample_property(2, "Uttara", 6000),
    ]);
    let mut dispatcher = Dispatcher::new();

    let events = action
        .run(&mut dispatcher, &tracker, &empty_domain())
        .await
        .expect("Action failed");

    assert!(events.is_empty());
    let message = &dispatcher.messages()[0];
    assert!(message.contains("Room 1: Dhanmondi"));
    assert!(message.contains("Room 2: Uttara"));
    assert!(message.contains("💡 **Tip:**"));
}

#[tokio::test]
async fn test_comparison_caps_at_three() {
    let action = CompareRoomsAction::new();
    let tracker = tracker_with_results(&[
        sample_property(1, "Dhanmondi", 5000),
        sample_property(2, "Uttara", 6000),
        sample_property(3, "Mirpur", 6500),
        sample_property(4, "Banani", 9000),
    ]);
    let mut dispatcher = Dispatcher::new();

    action
        .run(&mut dispatcher, &tracker, &empty_domain())
        .await
        .expect("Action failed");

    let message = &dispatcher.messages()[0];
    assert!(message.contains("Room 3: Mirpur"));
    assert!(!message.contains("Room 4"));
}
