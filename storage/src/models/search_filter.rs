use serde::{Deserialize, Serialize};

/// Filters for a property search. Absent fields add no SQL condition.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchFilter {
    /// Substring-matched against both `area_name` and `neighborhood`.
    pub location: Option<String>,
    /// Monthly budget in taka; the query allows rent up to 10% above it.
    pub budget: Option<f64>,
    /// Amenity tags; only recognized tags become conditions.
    pub preferences: Vec<String>,
}
