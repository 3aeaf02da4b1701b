//! Demo fallback listings, used when the live store is unreachable.
//!
//! Two hand-maintained rooms so the conversation stays useful during database
//! outages. Filtered a little more loosely than the live search (20% over budget
//! instead of 10%) since there are only two entries to offer.

use crate::summary::PropertySummary;

const DEMO_BUDGET_TOLERANCE: f64 = 1.2;

pub fn demo_properties() -> Vec<PropertySummary> {
    vec![
        PropertySummary {
            id: None,
            neighborhood: "Dhanmondi".to_string(),
            area_details: "House 34, Road 8A, Dhanmondi, Dhaka".to_string(),
            rent: 4500,
            property_type: "single".to_string(),
            furnished: true,
            occupancy: vec!["students".to_string()],
            gender_preference: "male".to_string(),
            amenities: vec![
                "wifi".to_string(),
                "attached bathroom".to_string(),
                "security".to_string(),
            ],
            nearby: vec![
                "Dhanmondi Lake".to_string(),
                "New Market".to_string(),
                "Popular Hospital".to_string(),
            ],
            transportation: vec![
                "Bus: Dhanmondi 8 stop, 2 min walk".to_string(),
                "Rickshaw: available all day".to_string(),
            ],
            description: "Tidy single room on the second floor with a shared kitchen."
                .to_string(),
            contact: "01711-223344".to_string(),
            owner_name: "Abdul Karim".to_string(),
            advance: "2 months rent".to_string(),
        },
        PropertySummary {
            id: None,
            neighborhood: "Katabon".to_string(),
            area_details: "Katabon Road, near Dhaka University campus".to_string(),
            rent: 6500,
            property_type: "shared".to_string(),
            furnished: false,
            occupancy: vec!["students".to_string(), "professionals".to_string()],
            gender_preference: "any".to_string(),
            amenities: vec![
                "wifi".to_string(),
                "parking".to_string(),
                "gas line".to_string(),
            ],
            nearby: vec![
                "TSC".to_string(),
                "Dhaka University".to_string(),
                "Aziz Super Market".to_string(),
                "Star Restaurant".to_string(),
            ],
            transportation: vec![
                "Bus: Shahbag stop, 5 min walk".to_string(),
                "CNG: stand at the corner".to_string(),
            ],
            description: "Shared room in a lively student block, balcony facing the road."
                .to_string(),
            contact: "01911-556677".to_string(),
            owner_name: "Mst. Rahima Begum".to_string(),
            advance: "1 month rent".to_string(),
        },
    ]
}

/// Demo listings a user with the given budget can afford (rent ≤ budget × 1.2).
pub fn demo_properties_within(budget: f64) -> Vec<PropertySummary> {
    demo_properties()
        .into_iter()
        .filter(|room| room.rent as f64 <= budget * DEMO_BUDGET_TOLERANCE)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generous_budget_keeps_both() {
        let rooms = demo_properties_within(6000.0);
        assert_eq!(rooms.len(), 2);
    }

    #[test]
    fn test_tight_budget_keeps_cheaper_only() {
        let rooms = demo_properties_within(4000.0);
        assert_eq!(rooms.len(), 1);
        assert_eq!(rooms[0].neighborhood, "Dhanmondi");
    }

    #[test]
    fn test_hopeless_budget_keeps_none() {
        assert!(demo_properties_within(1000.0).is_empty());
    }
}
