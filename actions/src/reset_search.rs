//! Search reset: clears every search slot and invites a fresh start.

use async_trait::async_trait;
use rentbot_core::{slots, Action, Dispatcher, Domain, Event, Result, Tracker};

#[derive(Clone, Default)]
pub struct ResetSearchAction;

impl ResetSearchAction {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Action for ResetSearchAction {
    fn name(&self) -> &'static str {
        "action_reset_search"
    }

    async fn run(
        &self,
        dispatcher: &mut Dispatcher,
        _tracker: &Tracker,
        _domain: &Domain,
    ) -> Result<Vec<Event>> {
        dispatcher
            .utter_message("🔄 Starting fresh search! Where would you like to search for a room?");

        Ok(vec![
            Event::slot_clear(slots::LOCATION),
            Event::slot_clear(slots::BUDGET),
            Event::slot_clear(slots::PREFERENCES),
            Event::slot_clear(slots::SEARCH_RESULTS),
        ])
    }
}
