//! Core library modules for the taskdeck application.
//!
//! ## Features
//!
//! - **Core Infrastructure**: Configuration, data storage, messaging
//! - **Task Management**: Task records, one-shot recurrence expansion
//! - **Calendar Interchange**: iCalendar document generation
//! - **Attachments**: Flat upload directory with filename sanitization
//! - **User Interface**: Console rendering, data export

pub mod config;
pub mod data_storage;
pub mod export;
pub mod ics;
pub mod messages;
pub mod recurrence;
pub mod task;
pub mod uploads;
pub mod view;
