//! Side-by-side comparison of the stored search results.

use crate::formatter;
use crate::summary::search_results_from;
use async_trait::async_trait;
use rentbot_core::{Action, Dispatcher, Domain, Event, Result, Tracker};

#[derive(Clone, Default)]
pub struct CompareRoomsAction;

impl CompareRoomsAction {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Action for CompareRoomsAction {
    fn name(&self) -> &'static str {
        "action_compare_rooms"
    }

    async fn run(
        &self,
        dispatcher: &mut Dispatcher,
        tracker: &Tracker,
        _domain: &Domain,
    ) -> Result<Vec<Event>> {
        let results = search_results_from(tracker);

        if results.len() < 2 {
            dispatcher.utter_message(
                "You need at least 2 rooms to compare. Please search for more rooms first.",
            );
            return Ok(vec![]);
        }

        dispatcher.utter_message(formatter::comparison_block(&results));
        Ok(vec![])
    }
}
