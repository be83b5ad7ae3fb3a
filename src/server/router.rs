use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::{
    Router,
    routing::{delete, get, patch, post, put},
};

use super::{bookmarks, folders, settings, transfer, trash, views};
use crate::hierarchy::Hierarchy;
use crate::query::Catalog;
use crate::settings::SettingsCache;
use crate::store::Store;

pub struct AppState {
    pub hierarchy: Hierarchy,
    pub catalog: Catalog,
    pub settings: SettingsCache,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>, settings_ttl: Duration) -> Self {
        Self {
            hierarchy: Hierarchy::new(Arc::clone(&store)),
            catalog: Catalog::new(Arc::clone(&store)),
            settings: SettingsCache::new(store, settings_ttl),
        }
    }
}

async fn health() -> &'static str {
    "OK"
}

async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = Instant::now();

    let response = next.run(request).await;

    let latency = start.elapsed();
    let status = response.status();

    tracing::info!(
        "{} {} {} {}ms",
        method,
        uri.path(),
        status.as_u16(),
        latency.as_millis()
    );

    response
}

fn api_router() -> Router<Arc<AppState>> {
    Router::new()
        // Views
        .route("/tree", get(views::tree))
        .route("/search", get(views::search))
        // Folders
        .route("/folders", post(folders::create_folder))
        .route("/folders/reorder", put(folders::reorder_folders))
        .route("/folders/{id}", patch(folders::update_folder))
        .route("/folders/{id}", delete(folders::delete_folder))
        // Bookmarks
        .route("/bookmarks", post(bookmarks::create_bookmark))
        .route("/bookmarks/reorder", put(bookmarks::reorder_bookmarks))
        .route("/bookmarks/{id}", patch(bookmarks::update_bookmark))
        .route("/bookmarks/{id}", delete(bookmarks::delete_bookmark))
        // Trash
        .route("/trash", get(trash::list_trash))
        .route("/trash", delete(trash::empty_trash))
        .route(
            "/trash/folders/{id}/restore",
            post(trash::restore_folder),
        )
        .route(
            "/trash/bookmarks/{id}/restore",
            post(trash::restore_bookmark),
        )
        .route("/trash/folders/{id}", delete(trash::purge_folder))
        .route("/trash/bookmarks/{id}", delete(trash::purge_bookmark))
        // Bookmark files
        .route("/import", post(transfer::import))
        .route("/export", get(transfer::export))
        // Settings
        .route("/settings", get(settings::list_settings))
        .route("/settings/{key}", put(settings::put_setting))
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api/v1", api_router())
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}
