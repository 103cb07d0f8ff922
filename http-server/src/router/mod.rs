mod folder;
mod moving;
mod template;
mod upload;

use axum::Extension;
use tower_http::trace::TraceLayer;

async fn health() -> &'static str {
    "Google Drive Proxy Server is running."
}

pub(crate) fn router(client: gdrive::Client) -> axum::Router {
    axum::Router::new()
        .route("/", axum::routing::get(health))
        .route("/upload", axum::routing::post(upload::to_root))
        .route("/upload-to-folder", axum::routing::post(upload::to_folder))
        .route("/create-folder", axum::routing::post(folder::create))
        .route("/move-file", axum::routing::post(moving::handle))
        .route(
            "/create-template-folders",
            axum::routing::post(template::create),
        )
        // uploads are buffered in memory, no local size limit
        .layer(axum::extract::DefaultBodyLimit::disable())
        .layer(Extension(client))
        .layer(TraceLayer::new_for_http())
}
