//! Core types: tracker, dispatcher, slot events, and the Action trait.

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Intent prediction attached to the latest user message by the NLU layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Intent {
    pub name: String,
    pub confidence: f64,
}

/// Entity extracted from the latest user message by the NLU layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    pub entity: String,
    pub value: String,
}

/// The latest inbound user message, as handed over by the dialogue framework.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LatestMessage {
    pub text: String,
    pub intent: Option<Intent>,
    pub entities: Vec<Entity>,
}

impl LatestMessage {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            intent: None,
            entities: Vec::new(),
        }
    }
}

/// Read view of one conversation's state for a single turn.
///
/// Slots are JSON values owned by the hosting framework; actions read them here and
/// request changes by returning [`Event`]s. `latest_bot_message` carries the text of
/// the previous outbound message so audit actions can log full turns.
#[derive(Debug, Clone, Default)]
pub struct Tracker {
    pub sender_id: String,
    pub session_id: String,
    pub latest_message: LatestMessage,
    pub latest_bot_message: Option<String>,
    slots: HashMap<String, Value>,
}

impl Tracker {
    pub fn new(sender_id: impl Into<String>, session_id: impl Into<String>) -> Self {
        Self {
            sender_id: sender_id.into(),
            session_id: session_id.into(),
            ..Default::default()
        }
    }

    /// Raw slot value; `None` when the slot is unset.
    pub fn get_slot(&self, name: &str) -> Option<&Value> {
        self.slots.get(name).filter(|v| !v.is_null())
    }

    /// Slot as a non-empty string. `None` for unset, null, non-string, or empty values.
    pub fn get_slot_str(&self, name: &str) -> Option<&str> {
        self.get_slot(name)
            .and_then(Value::as_str)
            .filter(|s| !s.trim().is_empty())
    }

    /// Slot as a list of strings; non-string elements are skipped. Empty for unset slots.
    pub fn get_slot_list(&self, name: &str) -> Vec<String> {
        self.get_slot(name)
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn set_slot(&mut self, name: impl Into<String>, value: Value) {
        self.slots.insert(name.into(), value);
    }

    /// Applies slot events the way the hosting framework persists them after a turn.
    pub fn apply_events(&mut self, events: &[Event]) {
        for event in events {
            match event {
                Event::SlotSet { name, value } => match value {
                    Some(v) => self.set_slot(name.clone(), v.clone()),
                    None => {
                        self.slots.remove(name);
                    }
                },
            }
        }
    }
}

/// State-mutation instruction returned by an action for the framework to persist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    /// Sets a slot; `value: None` clears it.
    SlotSet {
        name: String,
        value: Option<Value>,
    },
}

impl Event {
    pub fn slot_set(name: impl Into<String>, value: Value) -> Self {
        Event::SlotSet {
            name: name.into(),
            value: Some(value),
        }
    }

    pub fn slot_clear(name: impl Into<String>) -> Self {
        Event::SlotSet {
            name: name.into(),
            value: None,
        }
    }
}

/// Collects outbound messages during one turn; the framework drains and delivers them.
#[derive(Debug, Default)]
pub struct Dispatcher {
    messages: Vec<String>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn utter_message(&mut self, text: impl Into<String>) {
        self.messages.push(text.into());
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }
}

/// Static domain metadata the framework passes along with each invocation.
pub type Domain = Value;

/// One unit of dialogue logic, invoked by the framework for a single turn.
/// Implementations read slots from the tracker, send text via the dispatcher,
/// and return the slot events to persist. They never call each other.
#[async_trait]
pub trait Action: Send + Sync {
    /// Name the framework selects this action by.
    fn name(&self) -> &'static str;

    async fn run(
        &self,
        dispatcher: &mut Dispatcher,
        tracker: &Tracker,
        domain: &Domain,
    ) -> Result<Vec<Event>>;
}
