//! MySQL-backed property store: searches and detail fetches over the listing tables,
//! inserts into the audit tables.
//!
//! Uses MySqlPoolManager and the models (Property, PropertyDetails, audit records).
//! The search query is assembled dynamically from the filter; every value travels
//! as a bound parameter.

use crate::error::StorageError;
use crate::models::{
    ConversationLogRecord, NearbyPlace, Property, PropertyDetails, SearchAnalyticsRecord,
    SearchFilter, TransportOption,
};
use crate::pool::MySqlPoolManager;
use crate::property_store::PropertyStore;
use async_trait::async_trait;
use tracing::{debug, info};

/// Amenity tags that may become search conditions; anything else is ignored.
const RECOGNIZED_PREFERENCES: [&str; 5] = ["furnished", "ac", "wifi", "parking", "security"];

/// Rent may exceed the stated budget by 10%.
const BUDGET_TOLERANCE: f64 = 1.1;

const PROPERTY_COLUMNS: &str = "p.id, p.neighborhood, p.area_name, p.address, p.rent_amount, \
     p.property_type, p.furnished, p.occupancy_type, p.gender_preference, \
     p.amenities, p.images, p.description, p.advance_terms, \
     u.full_name AS owner_name, u.phone AS owner_phone";

#[derive(Clone)]
pub struct MySqlPropertyStore {
    pool_manager: MySqlPoolManager,
}

/// A bind value for the dynamically assembled search query.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum SearchBind {
    Text(String),
    Number(f64),
}

/// Assembles the property search SQL and its bind values from the filter.
/// Conditions appear only for present filter fields; unrecognized preference
/// tags contribute nothing.
pub(crate) fn build_search_query(filter: &SearchFilter) -> (String, Vec<SearchBind>) {
    let mut sql = format!(
        "SELECT {PROPERTY_COLUMNS} FROM properties p \
         JOIN users u ON p.owner_id = u.id \
         WHERE p.is_available = TRUE"
    );
    let mut binds = Vec::new();

    if let Some(location) = filter.location.as_deref().filter(|l| !l.trim().is_empty()) {
        sql.push_str(" AND (p.area_name LIKE ? OR p.neighborhood LIKE ?)");
        let pattern = format!("%{}%", location);
        binds.push(SearchBind::Text(pattern.clone()));
        binds.push(SearchBind::Text(pattern));
    }

    if let Some(budget) = filter.budget {
        sql.push_str(" AND p.rent_amount <= ?");
        binds.push(SearchBind::Number(budget * BUDGET_TOLERANCE));
    }

    for preference in &filter.preferences {
        let tag = preference.to_lowercase();
        if RECOGNIZED_PREFERENCES.contains(&tag.as_str()) {
            sql.push_str(" AND JSON_SEARCH(p.amenities, 'one', ?) IS NOT NULL");
            binds.push(SearchBind::Text(tag));
        }
    }

    sql.push_str(" ORDER BY p.rent_amount LIMIT 10");
    (sql, binds)
}

/// Parses a JSON-encoded string-list column; malformed or NULL content yields an
/// empty list rather than an error (listing data is imported from varied sources).
pub(crate) fn parse_json_list(raw: Option<&str>) -> Vec<String> {
    raw.and_then(|s| serde_json::from_str(s).ok())
        .unwrap_or_default()
}

/// Raw joined row; JSON columns arrive as text and are parsed tolerantly.
#[derive(sqlx::FromRow)]
struct PropertyRow {
    id: i64,
    neighborhood: String,
    area_name: String,
    address: String,
    rent_amount: i64,
    property_type: String,
    furnished: bool,
    occupancy_type: String,
    gender_preference: String,
    amenities: Option<String>,
    images: Option<String>,
    description: String,
    advance_terms: String,
    owner_name: String,
    owner_phone: String,
}

impl From<PropertyRow> for Property {
    fn from(row: PropertyRow) -> Self {
        Property {
            id: row.id,
            neighborhood: row.neighborhood,
            area_name: row.area_name,
            address: row.address,
            rent_amount: row.rent_amount,
            property_type: row.property_type,
            furnished: row.furnished,
            occupancy_type: row.occupancy_type,
            gender_preference: row.gender_preference,
            amenities: parse_json_list(row.amenities.as_deref()),
            images: parse_json_list(row.images.as_deref()),
            description: row.description,
            advance_terms: row.advance_terms,
            owner_name: row.owner_name,
            owner_phone: row.owner_phone,
        }
    }
}

impl MySqlPropertyStore {
    pub fn new(pool_manager: MySqlPoolManager) -> Self {
        Self { pool_manager }
    }

    /// Creates the two write-only audit tables if missing. The listing tables
    /// (`properties`, `users`, `nearby_places`, `transportation`) are managed
    /// out-of-band and never created here.
    pub async fn ensure_audit_tables(&self) -> Result<(), StorageError> {
        let pool = self.pool_manager.pool();

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS search_analytics (
                id VARCHAR(36) PRIMARY KEY,
                user_id VARCHAR(64),
                search_location VARCHAR(255),
                search_budget DOUBLE,
                search_preferences TEXT,
                results_count BIGINT NOT NULL,
                created_at TIMESTAMP NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS bot_conversations (
                id VARCHAR(36) PRIMARY KEY,
                user_id VARCHAR(64),
                session_id VARCHAR(64) NOT NULL,
                user_message TEXT NOT NULL,
                bot_response TEXT NOT NULL,
                intent VARCHAR(128),
                confidence DOUBLE,
                entities TEXT,
                created_at TIMESTAMP NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await?;

        info!("Audit tables ready");
        Ok(())
    }
}

#[async_trait]
impl PropertyStore for MySqlPropertyStore {
    async fn search_properties(
        &self,
        filter: &SearchFilter,
    ) -> Result<Vec<Property>, StorageError> {
        let pool = self.pool_manager.pool();
        let (sql, binds) = build_search_query(filter);

        let mut query = sqlx::query_as::<_, PropertyRow>(&sql);
        for bind in binds {
            query = match bind {
                SearchBind::Text(text) => query.bind(text),
                SearchBind::Number(number) => query.bind(number),
            };
        }

        let rows = query.fetch_all(pool).await?;
        debug!(
            count = rows.len(),
            location = filter.location.as_deref().unwrap_or(""),
            "Property search returned rows"
        );

        Ok(rows.into_iter().map(Property::from).collect())
    }

    async fn get_property_details(
        &self,
        id: i64,
    ) -> Result<Option<PropertyDetails>, StorageError> {
        let pool = self.pool_manager.pool();

        let sql = format!(
            "SELECT {PROPERTY_COLUMNS} FROM properties p \
             JOIN users u ON p.owner_id = u.id \
             WHERE p.id = ?"
        );
        let row = sqlx::query_as::<_, PropertyRow>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        let Some(row) = row else {
            debug!(property_id = id, "Property not found");
            return Ok(None);
        };

        let nearby_places = sqlx::query_as::<_, NearbyPlace>(
            "SELECT property_id, place_name, place_type, distance_meters \
             FROM nearby_places WHERE property_id = ?",
        )
        .bind(id)
        .fetch_all(pool)
        .await?;

        let transportation = sqlx::query_as::<_, TransportOption>(
            "SELECT property_id, transport_type, details \
             FROM transportation WHERE property_id = ?",
        )
        .bind(id)
        .fetch_all(pool)
        .await?;

        Ok(Some(PropertyDetails {
            property: row.into(),
            nearby_places,
            transportation,
        }))
    }

    async fn log_search_analytics(
        &self,
        record: &SearchAnalyticsRecord,
    ) -> Result<(), StorageError> {
        let pool = self.pool_manager.pool();
        let preferences_json = record
            .search_preferences
            .as_ref()
            .map(serde_json::to_string)
            .transpose()
            .map_err(|e| StorageError::InvalidRecord(e.to_string()))?;

        sqlx::query(
            r#"
            INSERT INTO search_analytics
            (id, user_id, search_location, search_budget, search_preferences, results_count, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&record.id)
        .bind(&record.user_id)
        .bind(&record.search_location)
        .bind(record.search_budget)
        .bind(preferences_json)
        .bind(record.results_count)
        .bind(record.created_at)
        .execute(pool)
        .await?;

        debug!(id = %record.id, "Search analytics row written");
        Ok(())
    }

    async fn log_conversation(
        &self,
        record: &ConversationLogRecord,
    ) -> Result<(), StorageError> {
        let pool = self.pool_manager.pool();
        let entities_json = serde_json::to_string(&record.entities)
            .map_err(|e| StorageError::InvalidRecord(e.to_string()))?;

        sqlx::query(
            r#"
            INSERT INTO bot_conversations
            (id, user_id, session_id, user_message, bot_response, intent, confidence, entities, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&record.id)
        .bind(&record.user_id)
        .bind(&record.session_id)
        .bind(&record.user_message)
        .bind(&record.bot_response)
        .bind(&record.intent)
        .bind(record.confidence)
        .bind(entities_json)
        .bind(record.created_at)
        .execute(pool)
        .await?;

        debug!(id = %record.id, session_id = %record.session_id, "Conversation row written");
        Ok(())
    }
}
