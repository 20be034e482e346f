//! # Taskdeck - a single-user task tracker served over HTTP
//!
//! A small web application for tracking to-do items: list, search, add,
//! edit, delete and bulk-toggle tasks, attach one image per task, and
//! export everything as an iCalendar file. Persistence is a single JSON
//! document on local disk — no database engine, no accounts.
//!
//! ## Features
//!
//! - **Task Management**: Create, update, complete and delete tasks
//! - **Recurring Tasks**: One-shot daily/weekly expansion into future copies
//! - **Image Attachments**: One image per task in a flat upload directory
//! - **Calendar Export**: Download the collection as a `.ics` file
//! - **Terminal Access**: List and export tasks from the command line
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskdeck::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod libs;
pub mod store;
pub mod web;
