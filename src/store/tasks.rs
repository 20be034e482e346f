use crate::libs::data_storage::DataStorage;
use crate::libs::task::{Repeat, Task, TaskFilter};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

pub const STORE_FILE_NAME: &str = "tasks.json";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("task document I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("task document is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Fields overwritten by an update operation.
///
/// `image` is `Some` only when a new file was uploaded; `None` keeps the
/// existing reference.
#[derive(Debug, Clone)]
pub struct TaskUpdate {
    pub title: String,
    pub due_date: String,
    pub due_time: String,
    pub repeat: Repeat,
    pub image: Option<String>,
}

/// The authoritative task collection, backed by a single JSON document.
///
/// Records are held in insertion order and scanned linearly; at the scale
/// of a single-user tracker an index would be overhead. Every mutating
/// caller is expected to follow up with [`TaskStore::save`].
pub struct TaskStore {
    path: PathBuf,
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Opens the store at the default document path inside the platform
    /// data directory.
    pub fn open() -> anyhow::Result<Self> {
        let path = DataStorage::new().get_path(STORE_FILE_NAME)?;
        Ok(Self::load(path)?)
    }

    /// Loads the document at `path`. A missing file yields an empty
    /// collection; a present but unreadable or malformed one is an error,
    /// no repair is attempted.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let tasks = match fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents)?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(err) => return Err(err.into()),
        };
        Ok(TaskStore { path, tasks })
    }

    /// Serializes the full collection and atomically replaces the document:
    /// the JSON is written to a temporary file in the same directory, then
    /// renamed over the document, so a crash mid-save never leaves a
    /// truncated store behind.
    pub fn save(&self) -> Result<(), StoreError> {
        let dir = self.path.parent().map(Path::to_path_buf).unwrap_or_else(|| PathBuf::from("."));
        let mut tmp = NamedTempFile::new_in(dir)?;
        serde_json::to_writer_pretty(&mut tmp, &self.tasks)?;
        tmp.flush()?;
        tmp.persist(&self.path).map_err(|err| StoreError::Io(err.error))?;
        Ok(())
    }

    /// Next free id: one past the current maximum, 1 for an empty store.
    /// Ids of deleted tasks are never handed out again while any higher id
    /// remains in the collection.
    pub fn next_id(&self) -> i64 {
        self.tasks.iter().map(|task| task.id).max().unwrap_or(0) + 1
    }

    pub fn find(&self, id: i64) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Appends a record. The caller assigns the id (via [`TaskStore::next_id`],
    /// incremented in memory when one operation creates several records).
    pub fn insert(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Overwrites the named fields of the matching record in place and
    /// returns the updated snapshot; `None` when the id is unknown.
    pub fn update(&mut self, id: i64, update: TaskUpdate) -> Option<Task> {
        let task = self.tasks.iter_mut().find(|task| task.id == id)?;
        task.title = update.title;
        task.due_date = update.due_date;
        task.due_time = update.due_time;
        task.repeat = update.repeat;
        if let Some(image) = update.image {
            task.image = image;
        }
        Some(task.clone())
    }

    /// Removes matching records and returns them, so the caller can clean
    /// up referenced image files. Unknown ids are ignored.
    pub fn remove(&mut self, ids: &[i64]) -> Vec<Task> {
        let mut removed = Vec::new();
        self.tasks.retain(|task| {
            if ids.contains(&task.id) {
                removed.push(task.clone());
                false
            } else {
                true
            }
        });
        removed
    }

    /// Flips `done` on matching records; unknown ids are ignored.
    pub fn toggle_done(&mut self, ids: &[i64]) {
        for task in self.tasks.iter_mut().filter(|task| ids.contains(&task.id)) {
            task.done = !task.done;
        }
    }

    /// Clears the image reference on matching records and returns the
    /// filenames that were set, so the caller can delete the files.
    pub fn clear_image(&mut self, ids: &[i64]) -> Vec<String> {
        let mut cleared = Vec::new();
        for task in self.tasks.iter_mut().filter(|task| ids.contains(&task.id)) {
            if !task.image.is_empty() {
                cleared.push(std::mem::take(&mut task.image));
            }
        }
        cleared
    }

    /// Fetches a copy of the records selected by `filter`.
    pub fn fetch(&self, filter: TaskFilter) -> Vec<Task> {
        match filter {
            TaskFilter::All => self.tasks.clone(),
            TaskFilter::Scheduled => self.scheduled(|_| true),
            TaskFilter::Query(query) => {
                let query = query.to_lowercase();
                self.scheduled(|task| task.title.to_lowercase().contains(&query))
            }
            TaskFilter::ByIds(ids) => self.tasks.iter().filter(|task| ids.contains(&task.id)).cloned().collect(),
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    // Tasks without a due date are excluded from scheduled views entirely,
    // not merely left unsorted.
    fn scheduled(&self, matches: impl Fn(&Task) -> bool) -> Vec<Task> {
        let mut tasks: Vec<Task> = self.tasks.iter().filter(|task| !task.due_date.is_empty() && matches(task)).cloned().collect();
        tasks.sort_by(|a, b| a.due_date.cmp(&b.due_date));
        tasks
    }
}
