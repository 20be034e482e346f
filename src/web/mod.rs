// web/mod.rs — HTTP front end of the task tracker.
//
// Axum server bridging browser forms to the task store.
//
// Endpoints:
//   GET  /                   home page (listing + search + add/edit form)
//   GET  /edit/{id}          home page with the edit form pre-filled
//   POST /add                create a task (multipart form)
//   POST /update/{id}        overwrite a task's fields (multipart form)
//   POST /bulk_action        delete / clear image / toggle done in bulk
//   GET  /export_ics         download the collection as tasks.ics
//   GET  /uploads/{file}     stored task images

pub mod pages;
pub mod routes;

use crate::libs::uploads::Uploads;
use crate::store::tasks::TaskStore;
use anyhow::Result;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use parking_lot::Mutex;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tracing::info;

/// Uploaded images above this size are rejected outright.
const MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

/// State shared by every request handler.
///
/// Axum serves requests concurrently, so the store sits behind a mutex;
/// each mutating handler holds it across its whole read-modify-write-save
/// cycle, which keeps the document consistent without finer locking.
pub struct AppState {
    pub store: Mutex<TaskStore>,
    pub uploads: Uploads,
}

impl AppState {
    pub fn new(store: TaskStore, uploads: Uploads) -> Arc<Self> {
        Arc::new(AppState {
            store: Mutex::new(store),
            uploads,
        })
    }
}

pub async fn start_server(addr: SocketAddr, state: Arc<AppState>) -> Result<()> {
    let router = build_router(state);

    info!("web interface listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}

pub fn build_router(state: Arc<AppState>) -> Router {
    let uploads_dir = state.uploads.dir().to_path_buf();
    Router::new()
        .route("/", get(routes::home))
        .route("/edit/{id}", get(routes::edit))
        .route("/add", post(routes::add))
        .route("/update/{id}", post(routes::update))
        .route("/bulk_action", post(routes::bulk_action))
        .route("/export_ics", get(routes::export_ics))
        .nest_service("/uploads", ServeDir::new(uploads_dir))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state)
}
