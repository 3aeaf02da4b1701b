//! Shared test support: an in-memory PropertyStore double and tracker builders.

use crate::summary::PropertySummary;
use async_trait::async_trait;
use rentbot_core::{slots, Tracker};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Mutex;
use storage::{
    ConversationLogRecord, NearbyPlace, Property, PropertyDetails, PropertyStore,
    SearchAnalyticsRecord, SearchFilter, StorageError, TransportOption,
};

/// In-memory store double. Search results and detail rows are configured up
/// front; audit writes are captured for assertions; `fail_*` flags simulate a
/// database outage per operation.
#[derive(Default)]
pub struct FakePropertyStore {
    pub properties: Vec<Property>,
    pub details: HashMap<i64, PropertyDetails>,
    pub fail_search: bool,
    pub fail_details: bool,
    pub fail_logging: bool,
    pub analytics: Mutex<Vec<SearchAnalyticsRecord>>,
    pub conversations: Mutex<Vec<ConversationLogRecord>>,
}

impl FakePropertyStore {
    pub fn with_properties(properties: Vec<Property>) -> Self {
        Self {
            properties,
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail_search: true,
            fail_details: true,
            fail_logging: true,
            ..Default::default()
        }
    }
}

#[async_trait]
impl PropertyStore for FakePropertyStore {
    async fn search_properties(
        &self,
        _filter: &SearchFilter,
    ) -> Result<Vec<Property>, StorageError> {
        if self.fail_search {
            return Err(StorageError::Database("simulated outage".to_string()));
        }
        Ok(self.properties.clone())
    }

    async fn get_property_details(
        &self,
        id: i64,
    ) -> Result<Option<PropertyDetails>, StorageError> {
        if self.fail_details {
            return Err(StorageError::Database("simulated outage".to_string()));
        }
        Ok(self.details.get(&id).cloned())
    }

    async fn log_search_analytics(
        &self,
        record: &SearchAnalyticsRecord,
    ) -> Result<(), StorageError> {
        if self.fail_logging {
            return Err(StorageError::Database("simulated outage".to_string()));
        }
        self.analytics
            .lock()
            .expect("analytics mutex poisoned")
            .push(record.clone());
        Ok(())
    }

    async fn log_conversation(
        &self,
        record: &ConversationLogRecord,
    ) -> Result<(), StorageError> {
        if self.fail_logging {
            return Err(StorageError::Database("simulated outage".to_string()));
        }
        self.conversations
            .lock()
            .expect("conversations mutex poisoned")
            .push(record.clone());
        Ok(())
    }
}

/// Builds a property row the way the live store would return it.
pub fn sample_property(id: i64, neighborhood: &str, rent: i64) -> Property {
    Property {
        id,
        neighborhood: neighborhood.to_string(),
        area_name: format!("{} residential area", neighborhood),
        address: format!("House {}, {}", id, neighborhood),
        rent_amount: rent,
        property_type: "single".to_string(),
        furnished: true,
        occupancy_type: "students".to_string(),
        gender_preference: "any".to_string(),
        amenities: vec!["wifi".to_string(), "security".to_string()],
        images: vec![],
        description: format!("Room in {}", neighborhood),
        advance_terms: "2 months rent".to_string(),
        owner_name: "Test Owner".to_string(),
        owner_phone: "01700-000000".to_string(),
    }
}

pub fn details_for(property: &Property) -> PropertyDetails {
    PropertyDetails {
        property: property.clone(),
        nearby_places: vec![
            NearbyPlace {
                property_id: property.id,
                place_name: "TSC".to_string(),
                place_type: "landmark".to_string(),
                distance_meters: 400,
            },
            NearbyPlace {
                property_id: property.id,
                place_name: "New Market".to_string(),
                place_type: "market".to_string(),
                distance_meters: 900,
            },
        ],
        transportation: vec![TransportOption {
            property_id: property.id,
            transport_type: "Bus".to_string(),
            details: "city service every 10 min".to_string(),
        }],
    }
}

/// Tracker with the given sender/session and slot values.
pub fn tracker_with_slots(pairs: Vec<(&str, Value)>) -> Tracker {
    let mut tracker = Tracker::new("user-1", "session-1");
    for (name, value) in pairs {
        tracker.set_slot(name, value);
    }
    tracker
}

/// Tracker carrying stored search results built from the given properties.
pub fn tracker_with_results(properties: &[Property]) -> Tracker {
    let summaries: Vec<PropertySummary> =
        properties.iter().map(PropertySummary::from).collect();
    tracker_with_slots(vec![(
        slots::SEARCH_RESULTS,
        serde_json::to_value(summaries).expect("Failed to serialize summaries"),
    )])
}

pub fn empty_domain() -> Value {
    json!({})
}
