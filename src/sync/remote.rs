//! Remote quote source.
//!
//! The remote is a JSONPlaceholder-style `/posts` resource: a GET returns an
//! array of posts whose `title` becomes the quote text, and a POST echoes the
//! created object back.

use async_trait::async_trait;
use serde::Deserialize;

use crate::config::SyncConfig;
use crate::error::QuoteboxError;
use crate::quotes::Quote;

/// Where remote quotes come from and where new ones are announced.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RemoteSource: Send + Sync {
    /// Fetch the current page of remote quotes.
    async fn fetch_quotes(&self) -> Result<Vec<Quote>, QuoteboxError>;

    /// Announce a newly added quote. Returns whatever the remote answered.
    async fn post_quote(&self, quote: &Quote) -> Result<serde_json::Value, QuoteboxError>;
}

/// A post as returned by the remote. Only the title matters.
#[derive(Debug, Deserialize)]
pub struct RemotePost {
    #[serde(default)]
    pub title: Option<String>,
}

/// Map remote posts to quotes under a fixed category.
///
/// Posts without a title are dropped.
#[must_use]
pub fn posts_to_quotes(posts: Vec<RemotePost>, category: &str) -> Vec<Quote> {
    posts
        .into_iter()
        .filter_map(|post| post.title)
        .map(|title| Quote::new(title, category))
        .collect()
}

/// HTTP implementation of [`RemoteSource`].
#[derive(Debug, Clone)]
pub struct HttpRemote {
    client: reqwest::Client,
    endpoint: String,
    limit: u32,
    category: String,
}

impl HttpRemote {
    /// Create a remote from sync settings.
    #[must_use]
    pub fn new(config: &SyncConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            limit: config.limit,
            category: config.category.clone(),
        }
    }

    /// URL of the posts resource.
    #[must_use]
    pub fn posts_url(&self) -> String {
        format!("{}/posts", self.endpoint)
    }
}

#[async_trait]
impl RemoteSource for HttpRemote {
    async fn fetch_quotes(&self) -> Result<Vec<Quote>, QuoteboxError> {
        let response = self
            .client
            .get(self.posts_url())
            .query(&[("_limit", self.limit)])
            .send()
            .await
            .map_err(|e| QuoteboxError::Remote(format!("Request failed: {e}")))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| QuoteboxError::Remote(format!("Failed to read response: {e}")))?;

        if !status.is_success() {
            return Err(QuoteboxError::Remote(format!(
                "Server returned {status}: {}",
                truncate(&body)
            )));
        }

        let posts: Vec<RemotePost> = serde_json::from_str(&body)
            .map_err(|e| QuoteboxError::Remote(format!("Invalid JSON: {e}")))?;

        log::debug!("Fetched {} posts from {}", posts.len(), self.endpoint);
        Ok(posts_to_quotes(posts, &self.category))
    }

    async fn post_quote(&self, quote: &Quote) -> Result<serde_json::Value, QuoteboxError> {
        let response = self
            .client
            .post(self.posts_url())
            .json(quote)
            .send()
            .await
            .map_err(|e| QuoteboxError::Remote(format!("Request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(QuoteboxError::Remote(format!("Server returned {status}")));
        }

        response
            .json()
            .await
            .map_err(|e| QuoteboxError::Remote(format!("Invalid JSON: {e}")))
    }
}

/// Post a freshly added quote, logging the outcome.
///
/// Failures never propagate; returns whether the post went through.
pub async fn announce_quote(remote: &dyn RemoteSource, quote: &Quote) -> bool {
    match remote.post_quote(quote).await {
        Ok(data) => {
            log::info!("Posted to server: {data}");
            true
        }
        Err(e) => {
            log::error!("Error posting to server: {e}");
            false
        }
    }
}

fn truncate(body: &str) -> String {
    const MAX: usize = 200;
    if body.chars().count() > MAX {
        format!("{}...", body.chars().take(MAX).collect::<String>())
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};
    use tokio::task::JoinHandle;

    /// Serve one canned HTTP response on a local port.
    ///
    /// Returns the base URL and a handle resolving to the raw request text.
    async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let request = read_request(&mut socket).await;
            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
            request
        });

        (format!("http://{addr}"), handle)
    }

    async fn read_request(socket: &mut TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);

            if let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                let head = String::from_utf8_lossy(&buf[..end]).to_lowercase();
                let length = head
                    .lines()
                    .find_map(|line| line.strip_prefix("content-length:"))
                    .and_then(|v| v.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                if buf.len() >= end + 4 + length {
                    break;
                }
            }
        }
        String::from_utf8_lossy(&buf).into_owned()
    }

    /// A remote pointed at `endpoint` that ignores any proxy settings.
    fn local_remote(endpoint: &str, limit: u32, category: &str) -> HttpRemote {
        let config = SyncConfig {
            endpoint: endpoint.to_string(),
            limit,
            category: category.to_string(),
            ..SyncConfig::default()
        };
        HttpRemote {
            client: reqwest::Client::builder().no_proxy().build().unwrap(),
            ..HttpRemote::new(&config)
        }
    }

    #[test]
    fn test_posts_to_quotes() {
        let posts: Vec<RemotePost> = serde_json::from_str(
            r#"[
                {"userId": 1, "id": 1, "title": "sunt aut facere", "body": "..."},
                {"userId": 1, "id": 2, "body": "no title"},
                {"userId": 1, "id": 3, "title": "qui est esse"}
            ]"#,
        )
        .unwrap();

        let quotes = posts_to_quotes(posts, "Server");
        assert_eq!(
            quotes,
            vec![
                Quote::new("sunt aut facere", "Server"),
                Quote::new("qui est esse", "Server"),
            ]
        );
    }

    #[test]
    fn test_posts_url_strips_trailing_slash() {
        let config = SyncConfig {
            endpoint: "http://localhost:3000/".to_string(),
            ..SyncConfig::default()
        };
        let remote = HttpRemote::new(&config);
        assert_eq!(remote.posts_url(), "http://localhost:3000/posts");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short"), "short");
        let long = "x".repeat(300);
        let cut = truncate(&long);
        assert_eq!(cut.len(), 203);
        assert!(cut.ends_with("..."));
    }

    #[tokio::test]
    async fn test_announce_quote_success() {
        let mut remote = MockRemoteSource::new();
        remote
            .expect_post_quote()
            .times(1)
            .returning(|q| Ok(serde_json::json!({"id": 101, "text": q.text})));

        assert!(announce_quote(&remote, &Quote::new("Hello", "Test")).await);
    }

    #[tokio::test]
    async fn test_announce_quote_failure_is_swallowed() {
        let mut remote = MockRemoteSource::new();
        remote
            .expect_post_quote()
            .returning(|_| Err(QuoteboxError::Remote("connection refused".to_string())));

        assert!(!announce_quote(&remote, &Quote::new("Hello", "Test")).await);
    }

    #[tokio::test]
    async fn test_fetch_unreachable_endpoint_is_remote_error() {
        let config = SyncConfig {
            endpoint: "http://127.0.0.1:9".to_string(),
            ..SyncConfig::default()
        };
        let remote = HttpRemote::new(&config);

        let result = remote.fetch_quotes().await;
        assert!(matches!(result, Err(QuoteboxError::Remote(_))));
    }

    #[tokio::test]
    async fn test_fetch_requests_limited_posts() {
        let (url, request) = serve_once(
            "200 OK",
            r#"[{"userId": 1, "id": 1, "title": "alpha"}, {"id": 2, "body": "untitled"}, {"id": 3, "title": "beta"}]"#,
        )
        .await;
        let remote = local_remote(&url, 2, "Server");

        let quotes = remote.fetch_quotes().await.unwrap();

        assert_eq!(
            quotes,
            vec![Quote::new("alpha", "Server"), Quote::new("beta", "Server")]
        );
        let request = request.await.unwrap();
        assert!(request.starts_with("GET /posts?_limit=2 HTTP/1.1"));
    }

    #[tokio::test]
    async fn test_fetch_uses_configured_category_and_limit() {
        let (url, request) = serve_once("200 OK", r#"[{"title": "gamma"}]"#).await;
        let remote = local_remote(&format!("{url}/"), 5, "Remote");

        let quotes = remote.fetch_quotes().await.unwrap();

        assert_eq!(quotes, vec![Quote::new("gamma", "Remote")]);
        assert!(request.await.unwrap().starts_with("GET /posts?_limit=5 "));
    }

    #[tokio::test]
    async fn test_fetch_server_error_is_remote_error() {
        let (url, _request) = serve_once("500 Internal Server Error", r#"{"error": "boom"}"#).await;
        let remote = local_remote(&url, 2, "Server");

        match remote.fetch_quotes().await {
            Err(QuoteboxError::Remote(msg)) => {
                assert!(msg.contains("500"));
                assert!(msg.contains("boom"));
            }
            other => panic!("expected remote error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_invalid_body_is_remote_error() {
        let (url, _request) = serve_once("200 OK", "<html>not json</html>").await;
        let remote = local_remote(&url, 2, "Server");

        let result = remote.fetch_quotes().await;
        assert!(matches!(result, Err(QuoteboxError::Remote(ref msg)) if msg.contains("Invalid JSON")));
    }

    #[tokio::test]
    async fn test_post_sends_quote_and_returns_echo() {
        let (url, request) = serve_once(
            "201 Created",
            r#"{"text": "Hello", "category": "Test", "id": 101}"#,
        )
        .await;
        let remote = local_remote(&url, 2, "Server");

        let echoed = remote.post_quote(&Quote::new("Hello", "Test")).await.unwrap();

        assert_eq!(echoed["id"], 101);
        assert_eq!(echoed["text"], "Hello");

        let request = request.await.unwrap();
        assert!(request.starts_with("POST /posts HTTP/1.1"));
        assert!(request.to_lowercase().contains("content-type: application/json"));
        assert!(request.ends_with(r#"{"text":"Hello","category":"Test"}"#));
    }

    #[tokio::test]
    async fn test_post_server_error_is_remote_error() {
        let (url, _request) = serve_once("503 Service Unavailable", "{}").await;
        let remote = local_remote(&url, 2, "Server");

        let result = remote.post_quote(&Quote::new("Hello", "Test")).await;
        assert!(matches!(result, Err(QuoteboxError::Remote(ref msg)) if msg.contains("503")));
    }
}
