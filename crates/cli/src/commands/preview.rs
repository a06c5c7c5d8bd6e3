use anyhow::{Context, Result};
use axum::{
    Router,
    extract::{Path, Request, State},
    http::StatusCode,
    response::{
        Html, IntoResponse, Redirect, Response,
        sse::{Event, KeepAlive, Sse},
    },
    routing::get,
};
use notify::{Event as NotifyEvent, EventKind, RecursiveMode, Watcher};
use service_pages_core::{Site, parse_site_toml};
use service_pages_generator::{
    html_escape, render_category_page, render_not_found, render_service_page, sitemap_xml,
};
use service_pages_source::{resolve_page, source_from_site};
use std::{net::SocketAddr, path::PathBuf};
use tokio::sync::broadcast;
use tower::ServiceExt;
use tower_http::{services::ServeDir, trace::TraceLayer};

#[derive(Clone)]
struct AppState {
    site_path: PathBuf,
    reload_tx: broadcast::Sender<()>,
}

/// Start preview server with hot reload for local development.
///
/// `site.toml` is re-read on every request, so edits show up on the next
/// reload without restarting. Files under `public/` are served as-is.
pub async fn run(path: PathBuf, port: u16) -> Result<()> {
    println!("🌐 Starting preview server...");
    println!("   Site: {}", path.display());

    if !path.exists() {
        anyhow::bail!(
            "Site directory does not exist: {}\nRun 'service-pages init {}' first",
            path.display(),
            path.display()
        );
    }

    let site_toml_path = path.join("site.toml");
    if !site_toml_path.exists() {
        anyhow::bail!(
            "site.toml not found in {}\nRun 'service-pages init {}' first",
            path.display(),
            path.display()
        );
    }

    let site = parse_site_toml(&site_toml_path).context("Failed to parse site.toml")?;

    println!("   ✓ Loaded: {}", site.config.site_name);
    for category in &site.categories {
        println!(
            "   ✓ /{}: {} services",
            category.slug,
            category.registry.len()
        );
    }
    if let Some(data_source) = &site.data_source {
        println!("   ✓ Data source: {}", data_source.endpoint);
    }

    let (reload_tx, _) = broadcast::channel::<()>(100);

    let state = AppState {
        site_path: path.clone(),
        reload_tx: reload_tx.clone(),
    };
    let app = router(state);

    let watcher_path = path.clone();
    let watcher_tx = reload_tx.clone();
    tokio::spawn(async move {
        if let Err(e) = watch_files(watcher_path, watcher_tx).await {
            tracing::error!(error = %e, "file watcher stopped");
        }
    });

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    println!("\n🚀 Preview ready at: http://localhost:{}", port);
    println!("   Press Ctrl+C to stop\n");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to port")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/_reload", get(sse_handler))
        .route("/sitemap.xml", get(sitemap_handler))
        .route("/{category}", get(category_handler))
        .route("/{category}/{slug}", get(service_handler))
        .fallback(public_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Watch for file changes and trigger reload
async fn watch_files(path: PathBuf, reload_tx: broadcast::Sender<()>) -> Result<()> {
    let (tx, mut rx) = tokio::sync::mpsc::channel(100);

    let mut watcher =
        notify::recommended_watcher(move |res: Result<NotifyEvent, notify::Error>| {
            if let Ok(event) = res {
                let _ = tx.blocking_send(event);
            }
        })?;

    watcher.watch(&path, RecursiveMode::Recursive)?;

    while let Some(event) = rx.recv().await {
        match event.kind {
            EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_) => {
                // Skip editor temp files and hidden files
                if event.paths.iter().any(|p| {
                    let filename = p.file_name().unwrap_or_default().to_string_lossy();
                    !filename.starts_with('.') && !filename.ends_with('~')
                }) {
                    tracing::info!(paths = ?event.paths, "file changed, reloading");
                    let _ = reload_tx.send(());
                }
            }
            _ => {}
        }
    }

    Ok(())
}

/// SSE endpoint for hot reload
async fn sse_handler(
    State(state): State<AppState>,
) -> Sse<impl futures::Stream<Item = Result<Event, std::convert::Infallible>>> {
    let mut rx = state.reload_tx.subscribe();

    let stream = async_stream::stream! {
        loop {
            if rx.recv().await.is_ok() {
                yield Ok(Event::default().data("reload"));
            }
        }
    };

    Sse::new(stream).keep_alive(KeepAlive::default())
}

/// Re-read site.toml; a broken config renders as an error page
fn load_site(state: &AppState) -> Result<Site, Response> {
    parse_site_toml(&state.site_path.join("site.toml")).map_err(|e| {
        tracing::warn!(error = %e, "site.toml failed to load");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html(format!(
                r#"<!DOCTYPE html>
<html><head><title>Error</title></head><body>
<h1>Configuration Error</h1>
<pre>{}</pre>
<script>new EventSource('/_reload').onmessage = () => location.reload();</script>
</body></html>"#,
                html_escape(&e.to_string())
            )),
        )
            .into_response()
    })
}

fn not_found(site: &Site) -> Response {
    (StatusCode::NOT_FOUND, Html(render_not_found(site, true))).into_response()
}

/// No home page is generated; land on the first category
async fn index_handler(State(state): State<AppState>) -> Response {
    let site = match load_site(&state) {
        Ok(site) => site,
        Err(response) => return response,
    };
    match site.categories.first() {
        Some(category) => Redirect::temporary(&category.path()).into_response(),
        None => not_found(&site),
    }
}

async fn sitemap_handler(State(state): State<AppState>) -> Response {
    let site = match load_site(&state) {
        Ok(site) => site,
        Err(response) => return response,
    };
    let today = chrono::Local::now().format("%Y-%m-%d").to_string();
    (
        [(axum::http::header::CONTENT_TYPE, "application/xml")],
        sitemap_xml(&site, &today),
    )
        .into_response()
}

async fn category_handler(
    State(state): State<AppState>,
    Path(category): Path<String>,
    request: Request,
) -> Response {
    let site = match load_site(&state) {
        Ok(site) => site,
        Err(response) => return response,
    };
    match site.category(&category) {
        Ok(category) => Html(render_category_page(&site, category, true)).into_response(),
        Err(_) => serve_public(&state, &site, request).await,
    }
}

async fn service_handler(
    State(state): State<AppState>,
    Path((category, slug)): Path<(String, String)>,
    request: Request,
) -> Response {
    let site = match load_site(&state) {
        Ok(site) => site,
        Err(response) => return response,
    };
    let source = match source_from_site(&site) {
        Ok(source) => source,
        Err(e) => {
            tracing::warn!(error = %e, "data source unavailable");
            return (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response();
        }
    };

    match resolve_page(&site, &category, &slug, source.as_ref()).await {
        Ok(page) => Html(render_service_page(&site, &page, true)).into_response(),
        Err(e) if e.is_not_found() => serve_public(&state, &site, request).await,
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response(),
    }
}

async fn public_handler(State(state): State<AppState>, request: Request) -> Response {
    let site = match load_site(&state) {
        Ok(site) => site,
        Err(response) => return response,
    };
    serve_public(&state, &site, request).await
}

/// Serve a file from `public/`, or the not-found page
async fn serve_public(state: &AppState, site: &Site, request: Request) -> Response {
    let public = ServeDir::new(state.site_path.join("public"));
    match public.oneshot(request).await {
        Ok(response) if response.status() != StatusCode::NOT_FOUND => response.into_response(),
        _ => not_found(site),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::Request as HttpRequest;
    use service_pages_core::SAMPLE_SITE_TOML;
    use std::fs;
    use tempfile::TempDir;

    fn site_dir() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("site.toml"), SAMPLE_SITE_TOML).unwrap();
        fs::create_dir_all(dir.path().join("public")).unwrap();
        fs::write(dir.path().join("public/og-image.jpg"), b"jpeg bytes").unwrap();
        dir
    }

    fn app(dir: &TempDir) -> Router {
        let (reload_tx, _) = broadcast::channel(1);
        router(AppState {
            site_path: dir.path().to_path_buf(),
            reload_tx,
        })
    }

    async fn get_page(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(HttpRequest::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8_lossy(&body).to_string())
    }

    #[tokio::test]
    async fn test_known_service_page() {
        let dir = site_dir();
        let (status, body) = get_page(app(&dir), "/financial/term-loans").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Term Loans for Industrial Projects in Nashik"));
        assert!(body.contains("EventSource('/_reload')"));
    }

    #[tokio::test]
    async fn test_default_content_service_page() {
        let dir = site_dir();
        let (status, body) = get_page(app(&dir), "/financial/subsidy-compliance").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Why choose Bhumi Industrial Consultant?"));
    }

    #[tokio::test]
    async fn test_unknown_service_is_404() {
        let dir = site_dir();
        let (status, body) = get_page(app(&dir), "/financial/unknown-service").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("Service Not Found"));
        assert!(body.contains(r#"<meta name="robots" content="noindex">"#));
    }

    #[tokio::test]
    async fn test_unknown_category_is_404() {
        let dir = site_dir();
        let (status, _) = get_page(app(&dir), "/plumbing/term-loans").await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = get_page(app(&dir), "/plumbing").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_category_index() {
        let dir = site_dir();
        let (status, body) = get_page(app(&dir), "/industrial").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(r#"href="/industrial/midc-transfer-process""#));
    }

    #[tokio::test]
    async fn test_public_files_are_served() {
        let dir = site_dir();
        let (status, body) = get_page(app(&dir), "/og-image.jpg").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "jpeg bytes");
    }

    #[tokio::test]
    async fn test_index_redirects_to_first_category() {
        let dir = site_dir();
        let response = app(&dir)
            .oneshot(HttpRequest::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(response.headers()["location"], "/financial");
    }

    #[tokio::test]
    async fn test_config_error_page() {
        let dir = site_dir();
        fs::write(dir.path().join("site.toml"), "[site]\nbase_url = ").unwrap();

        let (status, body) = get_page(app(&dir), "/financial/term-loans").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.contains("Configuration Error"));
    }

    #[tokio::test]
    async fn test_config_error_page_escapes_message() {
        let dir = site_dir();
        let broken = SAMPLE_SITE_TOML.replace(
            "https://www.bhumiindustrialconsultant.com",
            "https://<img src=x>",
        );
        fs::write(dir.path().join("site.toml"), broken).unwrap();

        let (status, body) = get_page(app(&dir), "/financial").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.contains("site.base_url"));
        assert!(body.contains("https://&lt;img src=x&gt;"));
        assert!(!body.contains("<img"));
    }
}
