//! Room search: the entry point of every conversation that leads anywhere.

use crate::demo;
use crate::formatter;
use crate::parse::parse_budget;
use crate::summary::PropertySummary;
use async_trait::async_trait;
use rentbot_core::{slots, Action, Dispatcher, Domain, Event, Result, Tracker};
use std::sync::Arc;
use storage::{PropertyStore, SearchAnalyticsRecord, SearchFilter};
use tracing::{debug, warn};

/// Searches the store with the `location`/`budget`/`preferences` slots, renders up
/// to 3 results, and writes the full result set (≤10) into `search_results`. When
/// the store is down, answers from the demo listings instead of failing the turn.
#[derive(Clone)]
pub struct SearchRoomsAction {
    store: Arc<dyn PropertyStore>,
}

impl SearchRoomsAction {
    pub fn new(store: Arc<dyn PropertyStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Action for SearchRoomsAction {
    fn name(&self) -> &'static str {
        "action_search_rooms"
    }

    async fn run(
        &self,
        dispatcher: &mut Dispatcher,
        tracker: &Tracker,
        _domain: &Domain,
    ) -> Result<Vec<Event>> {
        let Some(location) = tracker.get_slot_str(slots::LOCATION) else {
            dispatcher
                .utter_message("কোন এলাকায় রুম খুঁজছেন? I need to know your preferred location.");
            return Ok(vec![]);
        };

        let Some(budget_raw) = tracker.get_slot_str(slots::BUDGET) else {
            dispatcher.utter_message("আপনার বাজেট কত? What's your monthly budget?");
            return Ok(vec![]);
        };

        let Some(budget) = parse_budget(budget_raw) else {
            dispatcher.utter_message(
                "I couldn't work out your budget from that. \
                 Please give me a monthly amount in taka, e.g. 8000.",
            );
            return Ok(vec![]);
        };

        let preferences = tracker.get_slot_list(slots::PREFERENCES);
        debug!(
            location,
            budget,
            preferences = preferences.len(),
            "Searching rooms"
        );

        let filter = SearchFilter {
            location: Some(location.to_string()),
            budget: Some(budget as f64),
            preferences: preferences.clone(),
        };

        let summaries: Vec<PropertySummary> = match self.store.search_properties(&filter).await {
            Ok(properties) => {
                let record = SearchAnalyticsRecord::new(
                    Some(tracker.sender_id.clone()),
                    Some(location.to_string()),
                    Some(budget as f64),
                    Some(preferences),
                    properties.len() as i64,
                );
                if let Err(e) = self.store.log_search_analytics(&record).await {
                    warn!(error = %e, "Failed to write search analytics");
                }
                properties.iter().map(PropertySummary::from).collect()
            }
            Err(e) => {
                warn!(error = %e, "Property search failed; answering with demo listings");
                demo::demo_properties_within(budget as f64)
            }
        };

        let response = if summaries.is_empty() {
            formatter::no_results(location, budget)
        } else {
            formatter::search_results_block(location, &summaries)
        };
        dispatcher.utter_message(response);

        let stored: Vec<PropertySummary> = summaries
            .into_iter()
            .take(slots::MAX_SEARCH_RESULTS)
            .collect();
        let value = serde_json::to_value(&stored)
            .map_err(|e| rentbot_core::RentbotError::Unknown(e.to_string()))?;

        Ok(vec![Event::slot_set(slots::SEARCH_RESULTS, value)])
    }
}
