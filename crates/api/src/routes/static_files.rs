//! Static file serving for `/` and any path no API route claims.

use axum::extract::Request;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Router;
use percent_encoding::percent_decode_str;
use tower::ServiceExt;
use tower_http::services::ServeDir;

use crate::state::AppState;

/// File extensions never served, whatever directory is configured. The
/// development database lives in the working directory, which is also the
/// default static root.
const PRIVATE_EXTENSIONS: &[&str] = &["db", "sqlite", "sqlite3", "db-journal", "db-wal", "db-shm"];

/// Fallback router serving files from `static_dir`.
///
/// `/` resolves to `index.html`; missing files are plain 404s. Dotfiles
/// (`.env`, `.git/...`) and SQLite database files are reported as missing.
pub fn router(static_dir: &str) -> Router<AppState> {
    tracing::info!(path = %static_dir, "Serving static files");

    let files = ServeDir::new(static_dir);
    Router::new().fallback(move |request: Request| serve(files.clone(), request))
}

async fn serve(files: ServeDir, request: Request) -> Response {
    if is_private_path(request.uri().path()) {
        tracing::debug!(path = %request.uri().path(), "Refused private static path");
        return StatusCode::NOT_FOUND.into_response();
    }

    match files.oneshot(request).await {
        Ok(response) => response.into_response(),
        Err(never) => match never {},
    }
}

/// Whether a request path names a dotfile or a database file.
///
/// The path is percent-decoded first, the same way `ServeDir` decodes it.
fn is_private_path(path: &str) -> bool {
    let decoded = percent_decode_str(path).decode_utf8_lossy();
    decoded.split(['/', '\\']).any(|segment| {
        if segment.starts_with('.') && segment != "." && segment != ".." {
            return true;
        }
        let lower = segment.to_ascii_lowercase();
        lower
            .rsplit_once('.')
            .is_some_and(|(_, ext)| PRIVATE_EXTENSIONS.contains(&ext))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_assets_are_allowed() {
        assert!(!is_private_path("/"));
        assert!(!is_private_path("/index.html"));
        assert!(!is_private_path("/js/app.js"));
        assert!(!is_private_path("/database.html"));
    }

    #[test]
    fn dotfiles_are_private() {
        assert!(is_private_path("/.env"));
        assert!(is_private_path("/.git/config"));
        assert!(is_private_path("/%2Eenv"));
    }

    #[test]
    fn database_files_are_private() {
        assert!(is_private_path("/roster.db"));
        assert!(is_private_path("/ROSTER.DB"));
        assert!(is_private_path("/roster.db-wal"));
        assert!(is_private_path("/data/app.sqlite3"));
        assert!(is_private_path("/roster%2Edb"));
    }
}
