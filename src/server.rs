use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    middleware::{self, Next},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use scraper::{Html, Selector};
use serde::Serialize;
use std::{
    cmp::Ordering,
    fs,
    path::{Path, PathBuf},
    sync::atomic::{AtomicU64, Ordering as AtomicOrdering},
    sync::Arc,
    time::{Instant, SystemTime, UNIX_EPOCH},
};
use tower_http::{services::ServeDir, set_header::SetResponseHeaderLayer};
use url::Url;

use crate::content::{NavigationItem, NAVIGATION_ITEMS};
use crate::metadata::{self, MetaTag};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_STATIC_DIR: &str = "dist";
const DEFAULT_ASSET_CACHE_MAX_AGE_SECONDS: u64 = 3_600;
const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

const ASSET_CACHE_MAX_AGE_SECONDS_BOUNDS: (u64, u64) = (0, 31_536_000);
const SHELL_FILE: &str = "index.html";
const REQUEST_ID_HEADER: &str = "x-request-id";

static REQUEST_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum LogLevel {
    Debug,
    Info,
}

impl PartialOrd for LogLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LogLevel {
    fn cmp(&self, other: &Self) -> Ordering {
        fn rank(level: LogLevel) -> u8 {
            match level {
                LogLevel::Debug => 0,
                LogLevel::Info => 1,
            }
        }

        rank(*self).cmp(&rank(*other))
    }
}

impl LogLevel {
    fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
        }
    }
}

#[derive(Clone, Debug)]
struct ServerConfig {
    port: u16,
    static_dir: PathBuf,
    public_base_url: Option<Url>,
    asset_cache_max_age_seconds: u64,
    log_level: LogLevel,
}

impl ServerConfig {
    fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|value| value.trim().parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);
        let static_dir = parse_env_non_empty_string("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR));
        let public_base_url = parse_env_http_url("PUBLIC_BASE_URL");
        let asset_cache_max_age_seconds = parse_env_u64_with_bounds(
            "ASSET_CACHE_MAX_AGE_SECONDS",
            DEFAULT_ASSET_CACHE_MAX_AGE_SECONDS,
            ASSET_CACHE_MAX_AGE_SECONDS_BOUNDS,
        );
        let log_level = parse_log_level("LOG_LEVEL", DEFAULT_LOG_LEVEL);

        Self {
            port,
            static_dir,
            public_base_url,
            asset_cache_max_age_seconds,
            log_level,
        }
    }

    fn site_url(&self) -> &str {
        self.public_base_url
            .as_ref()
            .map(Url::as_str)
            .unwrap_or(metadata::SITE_URL)
    }

    fn shell_path(&self) -> PathBuf {
        self.static_dir.join(SHELL_FILE)
    }
}

#[derive(Clone)]
pub struct AppState {
    config: Arc<ServerConfig>,
    shell: Arc<String>,
}

#[derive(Serialize)]
struct HealthPayload {
    ok: bool,
    sections: &'static [NavigationItem],
}

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env();
    let shell = load_shell(&config.shell_path(), &config)?;
    let bind_address = format!("0.0.0.0:{}", config.port);

    log_event(
        &config,
        LogLevel::Debug,
        "config_loaded",
        serde_json::json!({
            "static_dir": config.static_dir.display().to_string(),
            "site_url": config.site_url(),
            "asset_cache_max_age_seconds": config.asset_cache_max_age_seconds,
        }),
    );

    let state = AppState {
        config: Arc::new(config),
        shell: Arc::new(shell),
    };
    let app = router(state.clone());

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    log_event(
        &state.config,
        LogLevel::Info,
        "server_listening",
        serde_json::json!({ "address": bind_address }),
    );
    axum::serve(listener, app).await?;
    Ok(())
}

fn router(state: AppState) -> Router {
    let asset_cache_control = cache_control(&format!(
        "public, max-age={}",
        state.config.asset_cache_max_age_seconds
    ));
    let static_service = ServeDir::new(&state.config.static_dir);

    // the shell routes set their own cache-control, so only fill it in when missing
    Router::new()
        .route("/", get(serve_shell))
        .route("/index.html", get(serve_shell))
        .route("/healthz", get(health))
        .fallback_service(static_service)
        .layer(SetResponseHeaderLayer::if_not_present(
            header::CACHE_CONTROL,
            asset_cache_control,
        ))
        .layer(middleware::from_fn_with_state(state.clone(), log_requests))
        .with_state(state)
}

async fn serve_shell(State(state): State<AppState>) -> axum::response::Response {
    let mut headers = HeaderMap::new();
    headers.insert(header::CACHE_CONTROL, cache_control("no-cache"));
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/html; charset=utf-8"),
    );

    (StatusCode::OK, headers, state.shell.as_str().to_string()).into_response()
}

async fn health() -> axum::response::Response {
    let mut headers = HeaderMap::new();
    headers.insert(header::CACHE_CONTROL, cache_control("no-store"));

    (
        StatusCode::OK,
        headers,
        Json(HealthPayload {
            ok: true,
            sections: NAVIGATION_ITEMS,
        }),
    )
        .into_response()
}

async fn log_requests(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> axum::response::Response {
    let started_at = Instant::now();
    let request_id = resolve_request_id(request.headers());
    let method = request.method().as_str().to_string();
    let path = request.uri().path().to_string();

    log_event(
        &state.config,
        LogLevel::Debug,
        "request_start",
        serde_json::json!({
            "request_id": request_id.as_str(),
            "method": method.as_str(),
            "path": path.as_str(),
        }),
    );

    let mut response = next.run(request).await;
    if let Ok(request_id_header) = HeaderValue::from_str(&request_id) {
        response
            .headers_mut()
            .insert(REQUEST_ID_HEADER, request_id_header);
    }

    log_event(
        &state.config,
        LogLevel::Info,
        "request_complete",
        serde_json::json!({
            "request_id": request_id.as_str(),
            "method": method.as_str(),
            "path": path.as_str(),
            "status": response.status().as_u16(),
            "duration_ms": started_at.elapsed().as_millis(),
        }),
    );

    response
}

fn load_shell(path: &Path, config: &ServerConfig) -> Result<String, Box<dyn std::error::Error>> {
    let raw = fs::read_to_string(path)
        .map_err(|error| format!("failed reading {}: {error}", path.display()))?;
    let tags = metadata::head_tags(config.site_url());
    let shell = inject_head_metadata(&raw, &tags)?;

    log_event(
        config,
        LogLevel::Info,
        "shell_loaded",
        serde_json::json!({
            "path": path.display().to_string(),
            "bytes": shell.len(),
        }),
    );

    Ok(shell)
}

/// Inserts the title, favicon link and every meta tag the shell does not
/// already carry, right before `</head>`.
fn inject_head_metadata(shell: &str, tags: &[MetaTag]) -> Result<String, &'static str> {
    let head_end = find_ignore_ascii_case(shell, "</head>").ok_or("shell has no </head>")?;
    let document = Html::parse_document(shell);
    let mut markup = String::new();

    if document_title(&document).is_none() {
        markup.push_str(&format!("<title>{}</title>\n", escape_html(metadata::TITLE)));
    }

    if !has_icon_link(&document) {
        markup.push_str(&format!(
            "<link rel=\"icon\" href=\"{}\">\n",
            escape_html(metadata::FAVICON_PATH)
        ));
    }

    for tag in tags {
        if has_meta(&document, tag.key.attribute(), tag.key.value()) {
            continue;
        }

        markup.push_str(&format!(
            "<meta {}=\"{}\" content=\"{}\">\n",
            tag.key.attribute(),
            escape_html(tag.key.value()),
            escape_html(&tag.content)
        ));
    }

    let mut injected = String::with_capacity(shell.len() + markup.len());
    injected.push_str(&shell[..head_end]);
    injected.push_str(&markup);
    injected.push_str(&shell[head_end..]);
    Ok(injected)
}

fn find_ignore_ascii_case(haystack: &str, needle: &str) -> Option<usize> {
    haystack
        .to_ascii_lowercase()
        .find(&needle.to_ascii_lowercase())
}

fn document_title(document: &Html) -> Option<String> {
    let title_selector = Selector::parse("title").ok()?;
    let title_element = document.select(&title_selector).next()?;
    normalize_text(title_element.text().collect::<String>())
}

fn has_icon_link(document: &Html) -> bool {
    let Ok(selector) = Selector::parse("link[rel]") else {
        return false;
    };

    document.select(&selector).any(|element| {
        element
            .value()
            .attr("rel")
            .is_some_and(|rel| rel.split_whitespace().any(|token| token.eq_ignore_ascii_case("icon")))
    })
}

/// True when a `<meta>` with this key exists, whatever its content.
fn has_meta(document: &Html, attribute: &str, attribute_value: &str) -> bool {
    let Ok(selector) = Selector::parse("meta") else {
        return false;
    };

    document.select(&selector).any(|element| {
        element
            .value()
            .attr(attribute)
            .is_some_and(|value| value.eq_ignore_ascii_case(attribute_value))
    })
}

fn normalize_text(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    let collapsed_whitespace = trimmed.split_whitespace().collect::<Vec<_>>().join(" ");
    Some(collapsed_whitespace)
}

fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for character in value.chars() {
        match character {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(character),
        }
    }
    escaped
}

fn cache_control(value: &str) -> HeaderValue {
    HeaderValue::from_str(value).unwrap_or_else(|_| HeaderValue::from_static("no-store"))
}

fn parse_env_u64_with_bounds(name: &str, default: u64, bounds: (u64, u64)) -> u64 {
    std::env::var(name)
        .ok()
        .and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_env_non_empty_string(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_env_http_url(name: &str) -> Option<Url> {
    let value = parse_env_non_empty_string(name)?;
    parse_http_url(&value)
}

fn parse_http_url(value: &str) -> Option<Url> {
    let parsed = Url::parse(value).ok()?;

    if parsed.scheme() == "http" || parsed.scheme() == "https" {
        Some(parsed)
    } else {
        None
    }
}

fn parse_log_level(name: &str, default: LogLevel) -> LogLevel {
    log_level_from_str(parse_env_non_empty_string(name).as_deref(), default)
}

fn log_level_from_str(value: Option<&str>, default: LogLevel) -> LogLevel {
    match value
        .unwrap_or_else(|| default.as_str())
        .to_ascii_lowercase()
        .as_str()
    {
        "debug" => LogLevel::Debug,
        "info" => LogLevel::Info,
        _ => default,
    }
}

fn now_unix_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_millis())
        .unwrap_or(0)
}

fn now_unix_seconds() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_secs())
        .unwrap_or(0)
}

fn generate_request_id() -> String {
    let counter = REQUEST_ID_COUNTER.fetch_add(1, AtomicOrdering::Relaxed);
    format!("req-{}-{counter}", now_unix_millis())
}

fn resolve_request_id(headers: &HeaderMap) -> String {
    let value = headers
        .get(REQUEST_ID_HEADER)
        .and_then(|raw| raw.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToString::to_string);

    value.unwrap_or_else(generate_request_id)
}

fn log_event(config: &ServerConfig, level: LogLevel, event: &str, fields: serde_json::Value) {
    if level < config.log_level {
        return;
    }

    println!("{}", log_line(level, event, fields));
}

fn log_line(level: LogLevel, event: &str, fields: serde_json::Value) -> serde_json::Value {
    let mut payload = serde_json::Map::new();
    payload.insert(
        "ts".to_string(),
        serde_json::Value::Number(serde_json::Number::from(now_unix_seconds())),
    );
    payload.insert("level".to_string(), serde_json::Value::String(level.as_str().to_string()));
    payload.insert("event".to_string(), serde_json::Value::String(event.to_string()));

    if let serde_json::Value::Object(extra) = fields {
        for (key, value) in extra {
            payload.insert(key, value);
        }
    }

    serde_json::Value::Object(payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use tower::ServiceExt;

    const BARE_SHELL: &str = "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n</head>\n<body><div id=\"app\"></div></body>\n</html>\n";

    fn test_config() -> ServerConfig {
        ServerConfig {
            port: DEFAULT_PORT,
            static_dir: PathBuf::from("/tmp/portfolio-site-test-dist"),
            public_base_url: None,
            asset_cache_max_age_seconds: DEFAULT_ASSET_CACHE_MAX_AGE_SECONDS,
            log_level: DEFAULT_LOG_LEVEL,
        }
    }

    fn test_state(shell: &str) -> AppState {
        AppState {
            config: Arc::new(test_config()),
            shell: Arc::new(shell.to_string()),
        }
    }

    fn meta_content(document: &Html, attribute: &str, attribute_value: &str) -> Option<String> {
        let selector = Selector::parse("meta").ok()?;

        for element in document.select(&selector) {
            if !element
                .value()
                .attr(attribute)
                .is_some_and(|value| value.eq_ignore_ascii_case(attribute_value))
            {
                continue;
            }

            if let Some(content) = element.value().attr("content") {
                if let Some(cleaned) = normalize_text(content.to_string()) {
                    return Some(cleaned);
                }
            }
        }

        None
    }

    fn static_dir_with(files: &[(&str, &[u8])]) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "portfolio-site-static-{}-{}",
            std::process::id(),
            REQUEST_ID_COUNTER.fetch_add(1, AtomicOrdering::Relaxed)
        ));
        fs::create_dir_all(&dir).expect("temp dir is writable");
        for (name, bytes) in files {
            fs::write(dir.join(name), bytes).expect("asset is writable");
        }
        dir
    }

    fn router_for(static_dir: PathBuf) -> Router {
        router(AppState {
            config: Arc::new(ServerConfig {
                static_dir,
                ..test_config()
            }),
            shell: Arc::new(BARE_SHELL.to_string()),
        })
    }

    async fn get_path(app: Router, path: &str) -> axum::response::Response {
        let request = axum::http::Request::builder()
            .uri(path)
            .body(Body::empty())
            .expect("request builds");
        app.oneshot(request).await.expect("router is infallible")
    }

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body is readable");
        String::from_utf8(bytes.to_vec()).expect("body is utf-8")
    }

    #[test]
    fn injected_shell_carries_every_meta_tag() {
        let tags = metadata::head_tags(metadata::SITE_URL);
        let injected = inject_head_metadata(BARE_SHELL, &tags).expect("shell has a head");
        let document = Html::parse_document(&injected);

        assert_eq!(document_title(&document).as_deref(), Some(metadata::TITLE));
        assert!(has_icon_link(&document));
        for tag in &tags {
            assert_eq!(
                meta_content(&document, tag.key.attribute(), tag.key.value()).as_deref(),
                Some(tag.content.as_str()),
                "{:?}",
                tag.key
            );
        }
        assert!(injected.contains("<div id=\"app\"></div>"));
    }

    #[test]
    fn existing_tags_are_not_duplicated() {
        let shell = "<html><HEAD><title>Custom</title><meta name=\"description\" content=\"kept\"></HEAD><body></body></html>";
        let tags = metadata::head_tags(metadata::SITE_URL);
        let injected = inject_head_metadata(shell, &tags).expect("shell has a head");

        assert_eq!(injected.matches("<title>").count(), 1);
        assert_eq!(injected.matches("name=\"description\"").count(), 1);

        let document = Html::parse_document(&injected);
        assert_eq!(document_title(&document).as_deref(), Some("Custom"));
        assert_eq!(
            meta_content(&document, "name", "description").as_deref(),
            Some("kept")
        );
        assert!(meta_content(&document, "property", "og:title").is_some());
    }

    #[test]
    fn empty_existing_tag_is_not_duplicated() {
        let shell = "<html><head><meta property=\"og:title\" content=\"\"></head><body></body></html>";
        let tags = metadata::head_tags(metadata::SITE_URL);
        let injected = inject_head_metadata(shell, &tags).expect("shell has a head");

        assert_eq!(injected.matches("property=\"og:title\"").count(), 1);
        assert_eq!(injected.matches("property=\"og:description\"").count(), 1);
    }

    #[tokio::test]
    async fn missing_assets_are_not_found() {
        let app = router_for(static_dir_with(&[]));

        for path in ["/Resume.pdf", "/chaya.png", "/favicon.ico", "/no/such/page"] {
            let response = get_path(app.clone(), path).await;
            assert_eq!(response.status(), StatusCode::NOT_FOUND, "{path}");
            assert!(!body_text(response).await.contains("<div id=\"app\">"), "{path}");
        }
    }

    #[tokio::test]
    async fn existing_assets_keep_their_content_type() {
        let png: &[u8] = b"\x89PNG\r\n\x1a\n";
        let pdf: &[u8] = b"%PDF-1.4\n";
        let dir = static_dir_with(&[("chaya.png", png), ("Resume.pdf", pdf)]);
        let app = router_for(dir.clone());

        let image = get_path(app.clone(), "/chaya.png").await;
        assert_eq!(image.status(), StatusCode::OK);
        assert_eq!(
            image.headers().get(header::CONTENT_TYPE),
            Some(&HeaderValue::from_static("image/png"))
        );
        assert_eq!(
            image.headers().get(header::CACHE_CONTROL),
            Some(&HeaderValue::from_static("public, max-age=3600"))
        );
        let bytes = axum::body::to_bytes(image.into_body(), usize::MAX)
            .await
            .expect("body is readable");
        assert_eq!(&bytes[..], png);

        let resume = get_path(app, "/Resume.pdf").await;
        assert_eq!(resume.status(), StatusCode::OK);
        assert_eq!(
            resume.headers().get(header::CONTENT_TYPE),
            Some(&HeaderValue::from_static("application/pdf"))
        );

        let _ = fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn root_route_serves_shell_with_request_id() {
        let app = router_for(static_dir_with(&[]));

        let response = get_path(app, "/").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CACHE_CONTROL),
            Some(&HeaderValue::from_static("no-cache"))
        );
        assert!(response.headers().contains_key(REQUEST_ID_HEADER));
        assert!(body_text(response).await.contains("<div id=\"app\">"));
    }

    #[test]
    fn shell_without_head_is_rejected() {
        let result = inject_head_metadata("<div id=\"app\"></div>", &[]);
        assert_eq!(result, Err("shell has no </head>"));
    }

    #[test]
    fn attribute_values_are_escaped() {
        let tags = vec![MetaTag {
            key: metadata::MetaKey::Name("description"),
            content: "Tom & \"Jerry\" <3".to_string(),
        }];
        let injected = inject_head_metadata(BARE_SHELL, &tags).expect("shell has a head");

        assert!(injected.contains("content=\"Tom &amp; &quot;Jerry&quot; &lt;3\""));
        let document = Html::parse_document(&injected);
        assert_eq!(
            meta_content(&document, "name", "description").as_deref(),
            Some("Tom & \"Jerry\" <3")
        );
    }

    #[test]
    fn public_base_url_overrides_og_url() {
        let mut config = test_config();
        assert_eq!(config.site_url(), metadata::SITE_URL);

        config.public_base_url = parse_http_url("https://portfolio.example.org");
        assert_eq!(config.site_url(), "https://portfolio.example.org/");
    }

    #[test]
    fn non_http_urls_are_ignored() {
        assert!(parse_http_url("ftp://example.org").is_none());
        assert!(parse_http_url("not a url").is_none());
        assert!(parse_http_url("http://example.org").is_some());
    }

    #[test]
    fn log_level_parsing_falls_back_to_default() {
        assert_eq!(log_level_from_str(Some("DEBUG"), LogLevel::Info), LogLevel::Debug);
        assert_eq!(log_level_from_str(Some("verbose"), LogLevel::Info), LogLevel::Info);
        assert_eq!(log_level_from_str(None, LogLevel::Debug), LogLevel::Debug);
        assert!(LogLevel::Debug < LogLevel::Info);
    }

    #[test]
    fn log_line_merges_fields_after_envelope() {
        let line = log_line(
            LogLevel::Info,
            "request_complete",
            serde_json::json!({ "status": 200, "path": "/" }),
        );

        assert_eq!(line["level"], "info");
        assert_eq!(line["event"], "request_complete");
        assert_eq!(line["status"], 200);
        assert_eq!(line["path"], "/");
        assert!(line["ts"].is_u64());
    }

    #[test]
    fn request_id_is_propagated_or_generated() {
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("  abc-123 "));
        assert_eq!(resolve_request_id(&headers), "abc-123");

        let generated = resolve_request_id(&HeaderMap::new());
        assert!(generated.starts_with("req-"));
        assert_ne!(generated, resolve_request_id(&HeaderMap::new()));
    }

    #[tokio::test]
    async fn shell_is_served_uncached_as_html() {
        let state = test_state("<html><head></head><body>shell</body></html>");

        let response = serve_shell(State(state)).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CACHE_CONTROL),
            Some(&HeaderValue::from_static("no-cache"))
        );
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE),
            Some(&HeaderValue::from_static("text/html; charset=utf-8"))
        );
        assert!(body_text(response).await.contains("shell"));
    }

    #[tokio::test]
    async fn health_lists_sections_in_order() {
        let response = health().await;
        assert_eq!(response.status(), StatusCode::OK);

        let payload: serde_json::Value =
            serde_json::from_str(&body_text(response).await).expect("health is JSON");
        assert_eq!(payload["ok"], true);
        let ids = payload["sections"]
            .as_array()
            .expect("sections is an array")
            .iter()
            .filter_map(|section| section["id"].as_str())
            .collect::<Vec<_>>();
        assert_eq!(ids, vec!["about", "experience", "projects"]);
    }

    #[test]
    fn load_shell_reports_missing_file() {
        let config = test_config();
        let result = load_shell(Path::new("/nonexistent/portfolio-site/index.html"), &config);
        assert!(result.is_err());
    }

    #[test]
    fn load_shell_injects_metadata_from_disk() {
        let dir = std::env::temp_dir().join(format!("portfolio-site-shell-{}", std::process::id()));
        fs::create_dir_all(&dir).expect("temp dir is writable");
        let path = dir.join(SHELL_FILE);
        fs::write(&path, BARE_SHELL).expect("shell is writable");

        let shell = load_shell(&path, &test_config()).expect("shell loads");
        let _ = fs::remove_dir_all(&dir);

        let document = Html::parse_document(&shell);
        assert_eq!(
            meta_content(&document, "property", "og:url").as_deref(),
            Some(metadata::SITE_URL)
        );
    }
}
