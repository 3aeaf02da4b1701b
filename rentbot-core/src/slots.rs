//! Slot names shared between the actions and the hosting framework's domain file.

pub const LOCATION: &str = "location";
pub const BUDGET: &str = "budget";
pub const PREFERENCES: &str = "preferences";
pub const SEARCH_RESULTS: &str = "search_results";
pub const SELECTED_ROOM: &str = "selected_room";

/// Upper bound on entries kept in the `search_results` slot; the store adapter
/// caps its query at the same value.
pub const MAX_SEARCH_RESULTS: usize = 10;
