//! Process and queue services.

pub mod queue_managers;
