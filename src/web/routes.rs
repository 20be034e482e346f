// web/routes.rs — Request handlers.
//
// Each handler reads form input, mutates the task store, persists it and
// redirects back to the listing; reads render the home page. Unknown task
// ids are a silent no-op everywhere, matching a single-user tool where the
// only way to hit one is a stale browser tab.

use super::{pages, AppState};
use crate::libs::recurrence;
use crate::libs::ics;
use crate::libs::task::{Repeat, Task, TaskFilter};
use crate::store::tasks::TaskUpdate;
use axum::{
    extract::{Multipart, Path, Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use std::sync::Arc;

pub const ACTION_DELETE: &str = "DELETE TASK";
pub const ACTION_REMOVE_IMAGE: &str = "REMOVE TASK IMAGE";
pub const ACTION_TOGGLE: &str = "TOGGLE COMPLETE/INCOMPLETE";

/// Handler-level failure: logged, surfaced as a plain 500.
pub struct AppError(anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!("request failed: {:#}", self.0);
        (StatusCode::INTERNAL_SERVER_ERROR, format!("internal error: {}", self.0)).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        AppError(err.into())
    }
}

#[derive(Debug, Deserialize)]
pub struct HomeQuery {
    #[serde(default)]
    q: String,
}

/// `GET /` — the task listing, filtered by the search query.
pub async fn home(State(state): State<Arc<AppState>>, Query(params): Query<HomeQuery>) -> Html<String> {
    let tasks = state.store.lock().fetch(TaskFilter::Query(params.q.clone()));
    Html(pages::home(&tasks, &params.q, None))
}

/// `GET /edit/{id}` — the listing with the edit form pre-filled; unknown
/// ids bounce back to the listing.
pub async fn edit(State(state): State<Arc<AppState>>, Path(id): Path<i64>) -> Response {
    let store = state.store.lock();
    match store.find(id) {
        Some(task) => {
            let task = task.clone();
            let tasks = store.fetch(TaskFilter::All);
            Html(pages::home(&tasks, "", Some(&task))).into_response()
        }
        None => Redirect::to("/").into_response(),
    }
}

/// The create/update form: plain text fields, two repeat checkboxes and an
/// optional image file part.
#[derive(Debug, Default)]
struct TaskForm {
    title: String,
    due_date: String,
    due_time: String,
    repeat_daily: bool,
    repeat_weekly: bool,
    /// Original filename and content of an uploaded image, if any.
    image: Option<(String, Vec<u8>)>,
}

impl TaskForm {
    fn repeat(&self) -> Repeat {
        Repeat::from_flags(self.repeat_daily, self.repeat_weekly)
    }
}

async fn read_task_form(mut multipart: Multipart) -> Result<TaskForm, AppError> {
    let mut form = TaskForm::default();
    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "title" => form.title = field.text().await?,
            "due_date" => form.due_date = field.text().await?,
            "due_time" => form.due_time = field.text().await?,
            // Checkbox presence is the value.
            "repeat_daily" => {
                field.text().await?;
                form.repeat_daily = true;
            }
            "repeat_weekly" => {
                field.text().await?;
                form.repeat_weekly = true;
            }
            "image" => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let bytes = field.bytes().await?;
                // Browsers submit an empty filename when no file was chosen.
                if !filename.is_empty() {
                    form.image = Some((filename, bytes.to_vec()));
                }
            }
            _ => {}
        }
    }
    Ok(form)
}

/// `POST /add` — insert the base task, expand recurrence, persist.
pub async fn add(State(state): State<Arc<AppState>>, multipart: Multipart) -> Result<Redirect, AppError> {
    let form = read_task_form(multipart).await?;

    let image = match &form.image {
        Some((name, bytes)) => state.uploads.store(name, bytes)?.unwrap_or_default(),
        None => String::new(),
    };

    let mut store = state.store.lock();
    let id = store.next_id();
    let base = Task::new(id, &form.title, &form.due_date, &form.due_time, &image).with_repeat(form.repeat());
    // Siblings take the ids directly after the base, from the same counter.
    let siblings = recurrence::expand(&base, form.repeat_daily, form.repeat_weekly, id + 1);
    store.insert(base);
    for sibling in siblings {
        store.insert(sibling);
    }
    store.save()?;
    Ok(Redirect::to("/"))
}

/// `POST /update/{id}` — overwrite the task's fields and run a fresh
/// recurrence expansion from the new values. Earlier siblings are never
/// touched; an expansion is purely additive.
pub async fn update(State(state): State<Arc<AppState>>, Path(id): Path<i64>, multipart: Multipart) -> Result<Redirect, AppError> {
    let form = read_task_form(multipart).await?;

    let mut store = state.store.lock();
    if store.find(id).is_none() {
        return Ok(Redirect::to("/"));
    }

    let image = match &form.image {
        Some((name, bytes)) => state.uploads.store(name, bytes)?,
        None => None,
    };
    let Some(updated) = store.update(
        id,
        TaskUpdate {
            title: form.title.clone(),
            due_date: form.due_date.clone(),
            due_time: form.due_time.clone(),
            repeat: form.repeat(),
            image,
        },
    ) else {
        return Ok(Redirect::to("/"));
    };

    let siblings = recurrence::expand(&updated, form.repeat_daily, form.repeat_weekly, store.next_id());
    for sibling in siblings {
        store.insert(sibling);
    }
    store.save()?;
    Ok(Redirect::to("/"))
}

#[derive(Debug, Default)]
struct BulkForm {
    action: String,
    delete_ids: Vec<i64>,
    remove_image_ids: Vec<i64>,
    toggle_ids: Vec<i64>,
}

async fn read_bulk_form(mut multipart: Multipart) -> Result<BulkForm, AppError> {
    let mut form = BulkForm::default();
    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        let value = field.text().await?;
        match name.as_str() {
            "action" => form.action = value,
            "delete_ids" => form.delete_ids.extend(value.parse::<i64>()),
            "remove_image_ids" => form.remove_image_ids.extend(value.parse::<i64>()),
            "toggle_ids" => form.toggle_ids.extend(value.parse::<i64>()),
            _ => {}
        }
    }
    Ok(form)
}

/// `POST /bulk_action` — apply one action to the checked ids. Only the id
/// list matching the pressed button is honored.
pub async fn bulk_action(State(state): State<Arc<AppState>>, multipart: Multipart) -> Result<Redirect, AppError> {
    let form = read_bulk_form(multipart).await?;

    let mut store = state.store.lock();
    match form.action.as_str() {
        ACTION_DELETE => {
            for task in store.remove(&form.delete_ids) {
                state.uploads.remove(&task.image);
            }
        }
        ACTION_REMOVE_IMAGE => {
            for image in store.clear_image(&form.remove_image_ids) {
                state.uploads.remove(&image);
            }
        }
        ACTION_TOGGLE => store.toggle_done(&form.toggle_ids),
        _ => {}
    }
    store.save()?;
    Ok(Redirect::to("/"))
}

/// `GET /export_ics` — the calendar document as a download.
pub async fn export_ics(State(state): State<Arc<AppState>>) -> Response {
    let document = {
        let store = state.store.lock();
        ics::calendar(store.tasks())
    };
    (
        [
            (header::CONTENT_TYPE, ics::CALENDAR_MEDIA_TYPE.to_string()),
            (header::CONTENT_DISPOSITION, format!("attachment; filename=\"{}\"", ics::CALENDAR_FILE_NAME)),
        ],
        document,
    )
        .into_response()
}
