//! The serialized property shape stored in the `search_results` slot.
//!
//! Search stores one [`PropertySummary`] per result; later turns (details, compare,
//! contact, area) read them back without re-running the search. DB-backed summaries
//! keep `nearby`/`transportation` empty and fetch them on demand; demo summaries
//! carry them inline.

use crate::formatter;
use rentbot_core::{slots, Tracker};
use serde::{Deserialize, Serialize};
use storage::{Property, PropertyStore};
use tracing::{debug, warn};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertySummary {
    /// Database id; absent for demo fallback entries.
    pub id: Option<i64>,
    pub neighborhood: String,
    pub area_details: String,
    /// Monthly rent in taka.
    pub rent: i64,
    pub property_type: String,
    pub furnished: bool,
    pub occupancy: Vec<String>,
    pub gender_preference: String,
    pub amenities: Vec<String>,
    pub nearby: Vec<String>,
    pub transportation: Vec<String>,
    pub description: String,
    pub contact: String,
    pub owner_name: String,
    pub advance: String,
}

impl From<&Property> for PropertySummary {
    fn from(property: &Property) -> Self {
        PropertySummary {
            id: Some(property.id),
            neighborhood: property.neighborhood.clone(),
            area_details: property.address.clone(),
            rent: property.rent_amount,
            property_type: property.property_type.clone(),
            furnished: property.furnished,
            occupancy: vec![property.occupancy_type.clone()],
            gender_preference: property.gender_preference.clone(),
            amenities: property.amenities.clone(),
            nearby: Vec::new(),
            transportation: Vec::new(),
            description: property.description.clone(),
            contact: property.owner_phone.clone(),
            owner_name: property.owner_name.clone(),
            advance: property.advance_terms.clone(),
        }
    }
}

/// Reads the `search_results` slot back into summaries. Unset or malformed slot
/// content yields an empty list, which actions treat as "no search yet".
pub fn search_results_from(tracker: &Tracker) -> Vec<PropertySummary> {
    tracker
        .get_slot(slots::SEARCH_RESULTS)
        .cloned()
        .and_then(|value| serde_json::from_value(value).ok())
        .unwrap_or_default()
}

/// Reads the `selected_room` slot as a 1-based index. The value is stored as a
/// string; anything non-numeric reads as no selection.
pub fn selected_index(tracker: &Tracker) -> Option<usize> {
    tracker
        .get_slot_str(slots::SELECTED_ROOM)
        .and_then(|raw| raw.trim().parse().ok())
}

/// Resolves the nearby-place and transportation lines for a summary: a fresh fetch
/// for DB-backed entries, degrading to whatever the summary carries inline when the
/// store errors or the row has vanished since the search.
pub async fn resolve_surroundings(
    store: &dyn PropertyStore,
    room: &PropertySummary,
) -> (Vec<String>, Vec<String>) {
    if let Some(id) = room.id {
        match store.get_property_details(id).await {
            Ok(Some(details)) => {
                return (
                    details
                        .nearby_places
                        .iter()
                        .map(formatter::describe_nearby)
                        .collect(),
                    details
                        .transportation
                        .iter()
                        .map(formatter::describe_transport)
                        .collect(),
                );
            }
            Ok(None) => {
                debug!(property_id = id, "Property gone since search; using stored summary");
            }
            Err(e) => {
                warn!(error = %e, property_id = id, "Detail fetch failed; using stored summary");
            }
        }
    }
    (room.nearby.clone(), room.transportation.clone())
}
