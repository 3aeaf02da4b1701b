//! Area information: detailed for a selected room, generic for a bare location.

use crate::formatter;
use crate::summary::{resolve_surroundings, search_results_from, selected_index};
use async_trait::async_trait;
use rentbot_core::{slots, Action, Dispatcher, Domain, Event, Result, Tracker};
use std::sync::Arc;
use storage::PropertyStore;

#[derive(Clone)]
pub struct AreaInformationAction {
    store: Arc<dyn PropertyStore>,
}

impl AreaInformationAction {
    pub fn new(store: Arc<dyn PropertyStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Action for AreaInformationAction {
    fn name(&self) -> &'static str {
        "action_area_information"
    }

    async fn run(
        &self,
        dispatcher: &mut Dispatcher,
        tracker: &Tracker,
        _domain: &Domain,
    ) -> Result<Vec<Event>> {
        let results = search_results_from(tracker);
        let selected = selected_index(tracker);

        let response = match selected {
            Some(index) if !results.is_empty() => {
                if index >= 1 && index <= results.len() {
                    let room = &results[index - 1];
                    let (nearby, transportation) =
                        resolve_surroundings(self.store.as_ref(), room).await;
                    formatter::area_block(room, &nearby, &transportation)
                } else {
                    "Please select a valid room number first.".to_string()
                }
            }
            _ => match tracker.get_slot_str(slots::LOCATION) {
                Some(location) => formatter::generic_area_info(location),
                None => "Please search for rooms or specify a location to get area information."
                    .to_string(),
            },
        };

        dispatcher.utter_message(response);
        Ok(vec![])
    }
}
