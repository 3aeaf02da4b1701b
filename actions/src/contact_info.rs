//! Owner contact details for the selected room.

use crate::formatter;
use crate::summary::{search_results_from, selected_index};
use async_trait::async_trait;
use rentbot_core::{Action, Dispatcher, Domain, Event, Result, Tracker};

#[derive(Clone, Default)]
pub struct GetContactInfoAction;

impl GetContactInfoAction {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Action for GetContactInfoAction {
    fn name(&self) -> &'static str {
        "action_get_contact_info"
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
                    formatter::contact_block(index, &results[index - 1])
                } else {
                    "Please select a valid room number first.".to_string()
                }
            }
            _ => "Please search for rooms and select one to get contact information.".to_string(),
        };

        dispatcher.utter_message(response);
        Ok(vec![])
    }
}
