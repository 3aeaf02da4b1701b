mod support;

mod compare_rooms_test;
mod log_conversation_test;
mod registry_test;
