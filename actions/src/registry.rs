//! Action registry: the framework selects an action by name; the registry runs it.

use crate::{
    AreaInformationAction, CompareRoomsAction, GetContactInfoAction, GetRoomDetailsAction,
    LogConversationAction, ResetSearchAction, SearchRoomsAction,
};
use rentbot_core::{Action, ActionError, Dispatcher, Domain, Event, Result, Tracker};
use std::collections::HashMap;
use std::sync::Arc;
use storage::PropertyStore;
use tracing::{debug, instrument};

#[derive(Clone, Default)]
pub struct ActionRegistry {
    actions: HashMap<String, Arc<dyn Action>>,
}

impl ActionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(mut self, action: Arc<dyn Action>) -> Self {
        self.actions.insert(action.name().to_string(), action);
        self
    }

    /// Registered action names, for the host's domain validation.
    pub fn names(&self) -> Vec<&str> {
        self.actions.keys().map(String::as_str).collect()
    }

    /// Runs one action for one turn. An unknown name is a host wiring error and
    /// is the only failure surfaced here; actions themselves degrade internally.
    #[instrument(skip(self, dispatcher, tracker, domain))]
    pub async fn run(
        &self,
        name: &str,
        dispatcher: &mut Dispatcher,
        tracker: &Tracker,
        domain: &Domain,
    ) -> Result<Vec<Event>> {
        let action = self
            .actions
            .get(name)
            .ok_or_else(|| ActionError::UnknownAction(name.to_string()))?;

        debug!(sender_id = %tracker.sender_id, "Running action");
        action.run(dispatcher, tracker, domain).await
    }
}

/// Wires the full action set against one store handle.
pub fn default_registry(store: Arc<dyn PropertyStore>) -> ActionRegistry {
    ActionRegistry::new()
        .register(Arc::new(SearchRoomsAction::new(store.clone())))
        .register(Arc::new(GetRoomDetailsAction::new(store.clone())))
        .register(Arc::new(CompareRoomsAction::new()))
        .register(Arc::new(GetContactInfoAction::new()))
        .register(Arc::new(AreaInformationAction::new(store.clone())))
        .register(Arc::new(ResetSearchAction::new()))
        .register(Arc::new(LogConversationAction::new(store)))
}
