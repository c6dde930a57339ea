use axum::http::header::{self, HeaderValue, InvalidHeaderValue};
use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::ServerConfig;

async fn health_check() -> &'static str {
    "ok"
}

/// Serves the built site out of `dist_dir`. Paths with no matching file get
/// `index.html` so client-side routes survive a reload.
pub fn build_router(config: &ServerConfig) -> Result<Router, InvalidHeaderValue> {
    let index = config.dist_dir.join("index.html");
    let cache_control = HeaderValue::try_from(config.cache_control())?;

    let site = ServiceBuilder::new()
        .layer(SetResponseHeaderLayer::if_not_present(
            header::CACHE_CONTROL,
            cache_control,
        ))
        .service(ServeDir::new(&config.dist_dir).fallback(ServeFile::new(index)));

    Ok(Router::new()
        .route("/health", get(health_check))
        .fallback_service(site)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use std::path::PathBuf;
    use tower::ServiceExt;

    struct ScratchDist(PathBuf);

    impl ScratchDist {
        fn new() -> Self {
            let dir = std::env::temp_dir().join(format!("printmaster-dist-{}", uuid::Uuid::new_v4()));
            std::fs::create_dir_all(dir.join("assets")).unwrap();
            std::fs::write(dir.join("index.html"), "<html>printmaster</html>").unwrap();
            std::fs::write(dir.join("assets/app.js"), "console.log('hi');").unwrap();
            Self(dir)
        }

        fn router(&self) -> Router {
            let config = ServerConfig {
                port: 0,
                dist_dir: self.0.clone(),
                cache_max_age: 120,
                sentry_dsn: None,
            };
            build_router(&config).unwrap()
        }
    }

    impl Drop for ScratchDist {
        fn drop(&mut self) {
            let _ = std::fs::remove_dir_all(&self.0);
        }
    }

    async fn get_path(router: Router, path: &str) -> (StatusCode, Option<String>, String) {
        let request = Request::builder().uri(path).body(Body::empty()).unwrap();
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let cache = response
            .headers()
            .get(header::CACHE_CONTROL)
            .map(|v| v.to_str().unwrap().to_string());
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, cache, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn health_answers_ok() {
        let dist = ScratchDist::new();
        let (status, cache, body) = get_path(dist.router(), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "ok");
        assert_eq!(cache, None);
    }

    #[tokio::test]
    async fn serves_existing_files_with_cache_header() {
        let dist = ScratchDist::new();
        let (status, cache, body) = get_path(dist.router(), "/assets/app.js").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "console.log('hi');");
        assert_eq!(cache.as_deref(), Some("public, max-age=120"));
    }

    #[tokio::test]
    async fn root_serves_index() {
        let dist = ScratchDist::new();
        let (status, _, body) = get_path(dist.router(), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "<html>printmaster</html>");
    }

    #[tokio::test]
    async fn unknown_paths_fall_back_to_index() {
        let dist = ScratchDist::new();
        let (status, _, body) = get_path(dist.router(), "/some/client/route").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "<html>printmaster</html>");
    }
}
