//! Persistence layer for the task collection.
//!
//! There is no database engine behind this application: the whole
//! collection lives in one pretty-printed JSON document that is read once
//! at startup and rewritten after every mutation. The [`tasks::TaskStore`]
//! owns the in-memory collection for the process lifetime.

pub mod tasks;
