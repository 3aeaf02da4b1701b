//! # Conversation actions for the rental room bot
//!
//! This crate provides the action implementations the dialogue framework invokes by
//! name (room search, details, comparison, contact info, area information, search
//! reset, and conversation logging), plus the response formatter and the
//! [`ActionRegistry`] that dispatches a turn to the right action.

mod area_information;
mod compare_rooms;
mod contact_info;
mod demo;
mod formatter;
mod log_conversation;
mod parse;
mod registry;
mod reset_search;
mod room_details;
mod search_rooms;
mod summary;

#[cfg(test)]
mod test;

pub use area_information::AreaInformationAction;
pub use compare_rooms::CompareRoomsAction;
pub use contact_info::GetContactInfoAction;
pub use log_conversation::LogConversationAction;
pub use parse::{parse_budget, parse_room_reference};
pub use registry::{default_registry, ActionRegistry};
pub use reset_search::ResetSearchAction;
pub use room_details::GetRoomDetailsAction;
pub use search_rooms::SearchRoomsAction;
pub use summary::PropertySummary;
