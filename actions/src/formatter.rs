//! Response formatting: deterministic, emoji-annotated text blocks.
//!
//! Pure string building only; no business logic and no IO. Rents render in taka
//! (৳) per month, matching the bot's existing message templates.

use crate::summary::PropertySummary;
use storage::{NearbyPlace, TransportOption};

/// Python-style title case: first letter of each whitespace-separated word
/// uppercased, the rest lowercased.
pub fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

pub fn describe_nearby(place: &NearbyPlace) -> String {
    format!("{} ({}m)", place.place_name, place.distance_meters)
}

pub fn describe_transport(option: &TransportOption) -> String {
    format!("{}: {}", option.transport_type, option.details)
}

/// The search-success block: header plus one short entry per room, 3 entries max.
pub fn search_results_block(location: &str, rooms: &[PropertySummary]) -> String {
    let mut out = format!(
        "🎉 Found {} room(s) in {}:\n\n",
        rooms.len(),
        title_case(location)
    );
    for (i, room) in rooms.iter().take(3).enumerate() {
        out.push_str(&format!("🏠 **Room {}: {}**\n", i + 1, room.neighborhood));
        out.push_str(&format!("💰 ৳{}/month\n", room.rent));
        out.push_str(&format!("📞 Contact: {}\n", room.contact));
        out.push_str(&format!("👤 Owner: {}\n\n", room.owner_name));
    }
    out
}

pub fn no_results(location: &str, budget: i64) -> String {
    format!(
        "😔 No rooms found in {} within ৳{}.\n\n\
         Try:\n• Increasing your budget\n• Different location\n• Checking nearby areas",
        title_case(location),
        budget
    )
}

/// The full detail block for one room. `nearby` and `transportation` are already
/// rendered lines (fresh from the store or carried in the summary).
pub fn detail_block(
    index: usize,
    room: &PropertySummary,
    nearby: &[String],
    transportation: &[String],
) -> String {
    let mut out = format!("🏠 **Room {} Details: {}**\n\n", index, room.neighborhood);
    out.push_str(&format!("📍 **Location:** {}\n", room.area_details));
    out.push_str(&format!("💰 **Price:** ৳{}/month\n", room.rent));
    out.push_str(&format!("🏠 **Type:** {} Room\n", title_case(&room.property_type)));
    out.push_str(&format!("🪑 **Furnished:** {}\n", yes_no(room.furnished)));
    out.push_str(&format!(
        "👥 **Suitable for:** {}\n",
        title_case(&room.occupancy.join(", "))
    ));
    out.push_str(&format!(
        "🚻 **Gender Preference:** {}\n\n",
        title_case(&room.gender_preference)
    ));

    out.push_str("🏡 **Amenities:**\n");
    for amenity in &room.amenities {
        out.push_str(&format!("• {}\n", amenity));
    }

    out.push_str("\n📍 **Nearby Places:**\n");
    for place in nearby {
        out.push_str(&format!("• {}\n", place));
    }

    out.push_str("\n🚗 **Transportation:**\n");
    for option in transportation {
        out.push_str(&format!("• {}\n", option));
    }

    out.push_str(&format!("\n📝 **Description:** {}\n\n", room.description));
    out.push_str(&format!("📞 **Contact:** {}\n", room.contact));
    out.push_str(&format!("💳 **Advance Payment:** {}\n", room.advance));
    out
}

/// Side-by-side comparison of up to 3 rooms with a tip footer.
pub fn comparison_block(rooms: &[PropertySummary]) -> String {
    let mut out = String::from("🏠 **Room Comparison:**\n\n");
    for (i, room) in rooms.iter().take(3).enumerate() {
        out.push_str(&format!("**Room {}: {}**\n", i + 1, room.neighborhood));
        out.push_str(&format!("💰 Price: ৳{}/month\n", room.rent));
        out.push_str(&format!("🏠 Type: {}\n", title_case(&room.property_type)));
        out.push_str(&format!("🪑 Furnished: {}\n", yes_no(room.furnished)));
        out.push_str(&format!("👥 Suitable for: {}\n", room.occupancy.join(", ")));
        out.push_str(&format!("📞 Contact: {}\n\n", room.contact));
    }
    out.push_str("💡 **Tip:** Ask for specific room details to see more information!");
    out
}

pub fn contact_block(index: usize, room: &PropertySummary) -> String {
    let mut out = format!("📞 **Contact Information for Room {}:**\n\n", index);
    out.push_str(&format!("🏠 **Location:** {}\n", room.neighborhood));
    out.push_str(&format!("📱 **Phone:** {}\n", room.contact));
    out.push_str(&format!("💰 **Price:** ৳{}/month\n", room.rent));
    out.push_str(&format!("💳 **Advance:** {}\n\n", room.advance));
    out.push_str("💡 **Tips:**\n");
    out.push_str("• Call during business hours (9 AM - 6 PM)\n");
    out.push_str("• Ask about viewing the room\n");
    out.push_str("• Confirm all details before making payments\n");
    out.push_str("• Always verify the property in person");
    out
}

/// Area block for a selected room, with highlight lines keyed on literal place
/// names appearing anywhere in the rendered nearby list.
pub fn area_block(room: &PropertySummary, nearby: &[String], transportation: &[String]) -> String {
    let mut out = format!("🏙️ **Area Information for {}:**\n\n", room.neighborhood);
    out.push_str(&format!("📍 **Exact Location:** {}\n\n", room.area_details));

    out.push_str("🏪 **Nearby Places:**\n");
    for place in nearby {
        out.push_str(&format!("• {}\n", place));
    }

    out.push_str("\n🚗 **Transportation Options:**\n");
    for option in transportation {
        out.push_str(&format!("• {}\n", option));
    }

    out.push_str("\n💡 **Area Highlights:**\n");
    let has = |needle: &str| nearby.iter().any(|line| line.contains(needle));
    if has("TSC") || has("Dhaka University") {
        out.push_str("• Student-friendly area\n");
    }
    if has("Market") {
        out.push_str("• Shopping facilities nearby\n");
    }
    if has("Hospital") {
        out.push_str("• Medical facilities available\n");
    }
    if has("Restaurant") {
        out.push_str("• Food options easily accessible\n");
    }

    out.push_str(&format!("\n🏠 **Room Type:** {}\n", title_case(&room.property_type)));
    out.push_str(&format!("💰 **Price Range:** ৳{}/month\n", room.rent));
    out.push_str(&format!(
        "👥 **Suitable for:** {}",
        title_case(&room.occupancy.join(", "))
    ));
    out
}

pub fn generic_area_info(location: &str) -> String {
    format!(
        "🏙️ **General Information about {}:**\n\n\
         • Well-connected area with good transportation\n\
         • Markets, restaurants, and essential services nearby\n\
         • Generally safe and residential\n\
         • Good for students and professionals\n\n\
         💡 **Tip:** Search for specific rooms to get detailed area information!",
        title_case(location)
    )
}
