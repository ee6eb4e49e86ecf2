// ============================================================
// Layer 4 — Document Loaders
// ============================================================
// Two ways to obtain a RawDocument:
//
//   HttpTextSource — downloads a .txt over HTTP(S) with reqwest.
//                    Implements the TextSource trait from
//                    Layer 3 so the application layer never
//                    sees reqwest types.
//   load_file      — reads a local file (CLI `--file`).
//
// HttpTextSource rejects:
//   - non-2xx responses             → FetchError::Status
//   - non-text Content-Type headers → FetchError::NotText
//   - bodies above max_body_bytes   → FetchError::TooLarge
//     (checked against Content-Length and again while the
//     body streams in, so a chunked reply is cut off early)
//   - transport failures / timeouts → FetchError::Network
//
// Reference: reqwest crate documentation
//            Rust Book §9 (Error Handling)

use std::future::Future;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::header::CONTENT_TYPE;

use crate::domain::document::RawDocument;
use crate::domain::error::FetchError;
use crate::domain::traits::TextSource;

/// HTTP(S) implementation of TextSource.
#[derive(Debug, Clone)]
pub struct HttpTextSource {
    client:         reqwest::Client,
    max_body_bytes: usize,
}

impl HttpTextSource {
    /// Build a client with the given timeout and User-Agent.
    pub fn new(timeout: Duration, user_agent: &str, max_body_bytes: usize) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .context("Cannot build HTTP client")?;
        Ok(Self { client, max_body_bytes })
    }
}

impl TextSource for HttpTextSource {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<RawDocument, FetchError>> + Send {
        // The returned future owns its inputs
        let client = self.client.clone();
        let limit  = self.max_body_bytes;
        let url    = url.to_string();

        async move {
            tracing::info!("Fetching '{}'", url);

            let mut response = client
                .get(url.as_str())
                .send()
                .await
                .map_err(|e| network_error(&url, e))?;

            let status = response.status();
            if !status.is_success() {
                return Err(FetchError::Status { url, status: status.as_u16() });
            }

            if let Some(content_type) = response
                .headers()
                .get(CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
            {
                if !is_text_content_type(content_type) {
                    return Err(FetchError::NotText {
                        url,
                        content_type: content_type.to_string(),
                    });
                }
            }

            if response.content_length().is_some_and(|len| len > limit as u64) {
                return Err(FetchError::TooLarge { url, limit });
            }

            let mut body: Vec<u8> = Vec::new();
            while let Some(chunk) = response.chunk().await.map_err(|e| network_error(&url, e))? {
                if body.len() + chunk.len() > limit {
                    tracing::warn!("'{}' exceeds {} bytes, aborting download", url, limit);
                    return Err(FetchError::TooLarge { url, limit });
                }
                body.extend_from_slice(&chunk);
            }

            tracing::debug!("Fetched '{}' ({} bytes)", url, body.len());
            let text = decode_text(body, &url);
            Ok(RawDocument::new(url, text))
        }
    }
}

fn network_error(url: &str, err: reqwest::Error) -> FetchError {
    let message = if err.is_timeout() {
        "request timed out".to_string()
    } else {
        err.to_string()
    };
    FetchError::Network { url: url.to_string(), message }
}

/// Gutenberg serves `text/plain; charset=utf-8`; accept any `text/*`.
fn is_text_content_type(content_type: &str) -> bool {
    content_type
        .trim()
        .to_ascii_lowercase()
        .starts_with("text/")
}

// Older Gutenberg files are Latin-1; keep going with replacement chars
fn decode_text(bytes: Vec<u8>, source: &str) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!("'{}' is not valid UTF-8, decoding lossily", source);
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    }
}

/// Read a local text file into a RawDocument.
pub fn load_file(path: &Path) -> Result<RawDocument> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("Cannot read '{}'", path.display()))?;
    let text = decode_text(bytes, &path.display().to_string());

    tracing::debug!("Loaded: {} ({} bytes)", path.display(), text.len());
    Ok(RawDocument::new(path.display().to_string(), text))
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::net::SocketAddr;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve one chunked text/plain response, optionally leaving
    /// the body unterminated so the client can only finish by
    /// giving up.
    async fn chunked_server(chunk: String, finish: bool) -> SocketAddr {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr     = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = [0u8; 2048];
            let _ = socket.read(&mut request).await;

            let head = "HTTP/1.1 200 OK\r\n\
                        Content-Type: text/plain; charset=utf-8\r\n\
                        Transfer-Encoding: chunked\r\n\r\n";
            socket.write_all(head.as_bytes()).await.unwrap();
            socket
                .write_all(format!("{:x}\r\n{}\r\n", chunk.len(), chunk).as_bytes())
                .await
                .unwrap();
            if finish {
                socket.write_all(b"0\r\n\r\n").await.unwrap();
                let _ = socket.flush().await;
            }
            // Hold the connection open
            tokio::time::sleep(Duration::from_secs(30)).await;
        });
        addr
    }

    #[test]
    fn test_text_content_types() {
        assert!(is_text_content_type("text/plain; charset=utf-8"));
        assert!(is_text_content_type("TEXT/HTML"));
        assert!(!is_text_content_type("application/zip"));
        assert!(!is_text_content_type("image/png"));
    }

    #[test]
    fn test_load_file_reads_utf8() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(f, "Hello café.").unwrap();
        let doc = load_file(f.path()).unwrap();
        assert_eq!(doc.text, "Hello café.");
    }

    #[test]
    fn test_load_file_decodes_latin1_lossily() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(&[b'c', b'a', b'f', 0xE9]).unwrap();
        let doc = load_file(f.path()).unwrap();
        assert!(doc.text.starts_with("caf"));
    }

    #[test]
    fn test_load_missing_file_errors() {
        assert!(load_file(Path::new("/definitely/not/here.txt")).is_err());
    }

    #[tokio::test]
    async fn test_chunked_body_over_limit_is_too_large() {
        let addr = chunked_server("a".repeat(4096), false).await;
        let src  = HttpTextSource::new(Duration::from_secs(20), "test-agent", 1024).unwrap();

        let started = std::time::Instant::now();
        let err = src.fetch(&format!("http://{addr}/book.txt")).await.unwrap_err();
        assert!(matches!(err, FetchError::TooLarge { limit: 1024, .. }), "got {err:?}");
        assert!(started.elapsed() < Duration::from_secs(10));
    }

    #[tokio::test]
    async fn test_chunked_body_within_limit_is_read() {
        let addr = chunked_server("Call me Ishmael.".to_string(), true).await;
        let src  = HttpTextSource::new(Duration::from_secs(20), "test-agent", 1024).unwrap();

        let doc = src.fetch(&format!("http://{addr}/book.txt")).await.unwrap();
        assert_eq!(doc.text, "Call me Ishmael.");
        assert_eq!(doc.source, format!("http://{addr}/book.txt"));
    }

    #[tokio::test]
    async fn test_declared_length_over_limit_is_too_large() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr     = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = [0u8; 2048];
            let _ = socket.read(&mut request).await;
            let head = "HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: 5000000000\r\n\r\n";
            socket.write_all(head.as_bytes()).await.unwrap();
            tokio::time::sleep(Duration::from_secs(30)).await;
        });

        let src = HttpTextSource::new(Duration::from_secs(20), "test-agent", 1024).unwrap();
        let err = src.fetch(&format!("http://{addr}/book.txt")).await.unwrap_err();
        assert!(matches!(err, FetchError::TooLarge { limit: 1024, .. }), "got {err:?}");
    }

    #[test]
    fn test_http_source_builds() {
        let src = HttpTextSource::new(Duration::from_secs(1), "test-agent", 1024);
        assert!(src.is_ok());
    }
}
