//! Static content
//!
//! Files are looked up in the content root first, then in its `public/`
//! subdirectory. Paths with a dot-prefixed segment (`.env`, `.git/`) are
//! never served.

use std::path::Path;

use axum::Router;
use axum::extract::Request;
use axum::http::StatusCode;
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use tower_http::services::ServeDir;

/// Fallback router serving the content root
pub fn router(content_root: &Path) -> Router {
    let files = ServeDir::new(content_root).fallback(ServeDir::new(content_root.join("public")));

    Router::new()
        .fallback_service(files)
        .layer(middleware::from_fn(hide_dotfiles))
}

async fn hide_dotfiles(req: Request, next: Next) -> Response {
    let hidden = req.uri().path().split('/').any(|segment| {
        segment.starts_with('.') || segment.to_ascii_lowercase().starts_with("%2e")
    });

    if hidden {
        return StatusCode::NOT_FOUND.into_response();
    }

    next.run(req).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::Request;
    use tempfile::TempDir;
    use tower::ServiceExt;

    fn content_root() -> TempDir {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("public/login")).unwrap();
        std::fs::create_dir_all(dir.path().join("journals")).unwrap();
        std::fs::write(dir.path().join("index.html"), "home").unwrap();
        std::fs::write(dir.path().join("public/login/index.html"), "login").unwrap();
        std::fs::write(dir.path().join("journals/adminadd.json"), "[]").unwrap();
        std::fs::write(dir.path().join(".env"), "DATABASE_URL=secret").unwrap();
        dir
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8_lossy(&bytes).into_owned())
    }

    #[tokio::test]
    async fn test_serves_root_then_public() {
        let dir = content_root();

        let (status, body) = get(router(dir.path()), "/index.html").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "home");

        let (status, body) = get(router(dir.path()), "/login/index.html").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "login");

        let (status, body) = get(router(dir.path()), "/journals/adminadd.json").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "[]");
    }

    #[tokio::test]
    async fn test_missing_file_is_not_found() {
        let dir = content_root();
        let (status, _) = get(router(dir.path()), "/nope.html").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_dotfiles_hidden() {
        let dir = content_root();

        let (status, _) = get(router(dir.path()), "/.env").await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = get(router(dir.path()), "/%2Eenv").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
