//! # rentbot-core
//!
//! Core types and traits for the rental-room chatbot actions: [`Action`], [`Tracker`],
//! [`Dispatcher`], slot-mutation [`Event`]s, error types, and tracing initialization.
//! Storage-agnostic; used by the `actions` crate and by the hosting dialogue framework.

pub mod error;
pub mod logger;
pub mod slots;
pub mod types;

pub use error::{ActionError, RentbotError, Result};
pub use logger::init_tracing;
pub use types::{Action, Dispatcher, Domain, Entity, Event, Intent, LatestMessage, Tracker};
