use serde::{Deserialize, Serialize};

/// How a task record came to exist.
///
/// This is provenance, not a live recurrence rule: a task marked `Daily` was
/// produced by a daily expansion (or was the base of one) and never
/// regenerates on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Repeat {
    #[default]
    None,
    Daily,
    Weekly,
}

impl Repeat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Repeat::None => "none",
            Repeat::Daily => "daily",
            Repeat::Weekly => "weekly",
        }
    }

    /// Repeat mode recorded on a task created with the given form flags.
    /// When both boxes are checked the daily flag wins.
    pub fn from_flags(daily: bool, weekly: bool) -> Self {
        if daily {
            Repeat::Daily
        } else if weekly {
            Repeat::Weekly
        } else {
            Repeat::None
        }
    }
}

/// A single to-do item with scheduling and completion metadata.
///
/// All date and time fields are stored as the strings the user submitted
/// (`YYYY-MM-DD` / `HH:MM`, possibly empty); only recurrence expansion and
/// calendar export ever parse them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub due_date: String,
    pub due_time: String,
    /// Filename in the upload directory, empty when the task has no image.
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub done: bool,
    #[serde(default)]
    pub repeat: Repeat,
}

impl Task {
    pub fn new(id: i64, title: &str, due_date: &str, due_time: &str, image: &str) -> Self {
        Task {
            id,
            title: title.to_string(),
            due_date: due_date.to_string(),
            due_time: due_time.to_string(),
            image: image.to_string(),
            done: false,
            repeat: Repeat::None,
        }
    }

    pub fn with_repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }
}

/// Selection applied when fetching tasks from the store.
#[derive(Debug, Clone)]
pub enum TaskFilter {
    /// Every record, in storage order.
    All,
    /// Records with a due date set, ascending by due date.
    Scheduled,
    /// Case-insensitive substring match on the title, restricted to
    /// scheduled records and sorted like [`TaskFilter::Scheduled`].
    Query(String),
    /// Records whose id appears in the list, in storage order.
    ByIds(Vec<i64>),
}
