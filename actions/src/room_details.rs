//! Room detail rendering for a referenced search result.

use crate::formatter;
use crate::parse::parse_room_reference;
use crate::summary::{resolve_surroundings, search_results_from};
use async_trait::async_trait;
use rentbot_core::{slots, Action, Dispatcher, Domain, Event, Result, Tracker};
use serde_json::json;
use std::sync::Arc;
use storage::PropertyStore;
use tracing::debug;

/// Resolves "room 2" / "the first room" / "2" against the stored search results,
/// renders the full detail block, and remembers the choice in `selected_room`.
#[derive(Clone)]
pub struct GetRoomDetailsAction {
    store: Arc<dyn PropertyStore>,
}

impl GetRoomDetailsAction {
    pub fn new(store: Arc<dyn PropertyStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Action for GetRoomDetailsAction {
    fn name(&self) -> &'static str {
        "action_get_room_details"
    }

    async fn run(
        &self,
        dispatcher: &mut Dispatcher,
        tracker: &Tracker,
        _domain: &Domain,
    ) -> Result<Vec<Event>> {
        let results = search_results_from(tracker);
        if results.is_empty() {
            dispatcher.utter_message("Please search for rooms first, then ask for details.");
            return Ok(vec![]);
        }

        let reference = parse_room_reference(&tracker.latest_message.text);
        debug!(
            text = %tracker.latest_message.text,
            reference = ?reference,
            "Parsed room reference"
        );

        let index = match reference {
            Some(index) if index <= results.len() => index,
            _ => {
                dispatcher.utter_message(format!(
                    "Please specify which room (1-{}) you'd like details for.",
                    results.len()
                ));
                return Ok(vec![]);
            }
        };

        let room = &results[index - 1];
        let (nearby, transportation) = resolve_surroundings(self.store.as_ref(), room).await;
        dispatcher.utter_message(formatter::detail_block(index, room, &nearby, &transportation));

        Ok(vec![Event::slot_set(
            slots::SELECTED_ROOM,
            json!(index.to_string()),
        )])
    }
}
