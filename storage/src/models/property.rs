//! Property models read from the `properties`, `nearby_places` and `transportation` tables.
//!
//! Property rows are created and updated out-of-band (listing management); this code
//! only reads them. `amenities` and `images` are JSON-encoded text columns.

use serde::{Deserialize, Serialize};

/// One rentable room/unit, joined with its owner's name and phone from `users`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Property {
    pub id: i64,
    pub neighborhood: String,
    pub area_name: String,
    pub address: String,
    /// Monthly rent in taka.
    pub rent_amount: i64,
    pub property_type: String,
    pub furnished: bool,
    pub occupancy_type: String,
    pub gender_preference: String,
    pub amenities: Vec<String>,
    /// Ordered listing photo URLs.
    pub images: Vec<String>,
    pub description: String,
    pub advance_terms: String,
    pub owner_name: String,
    pub owner_phone: String,
}

/// A place of interest near a property.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct NearbyPlace {
    pub property_id: i64,
    pub place_name: String,
    pub place_type: String,
    pub distance_meters: i64,
}

/// A transportation option serving a property.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct TransportOption {
    pub property_id: i64,
    pub transport_type: String,
    pub details: String,
}

/// A property together with its nearby places and transportation options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyDetails {
    pub property: Property,
    pub nearby_places: Vec<NearbyPlace>,
    pub transportation: Vec<TransportOption>,
}
