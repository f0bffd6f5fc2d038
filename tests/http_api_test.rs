use std::time::Duration;

use pretty_assertions::assert_eq;
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::TcpListener,
    task::JoinHandle,
};

use postfeed::{
    domain::query::{Filters, PostsQuery, Sort},
    infrastructure::api::{FetchError, HttpPostsApi, PostsApi},
};

type TestResult = Result<(), Box<dyn std::error::Error>>;

/// One-shot HTTP server answering the first request with `status` and a JSON `body`.
/// The task yields the request line it received.
async fn serve_once(
    status: &'static str,
    body: &'static str,
) -> std::io::Result<(String, JoinHandle<std::io::Result<String>>)> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let base_url = format!("http://{}", listener.local_addr()?);

    let server = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await?;
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await?;
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }

        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await?;
        socket.shutdown().await?;

        let request = String::from_utf8_lossy(&request).to_string();
        Ok(request.lines().next().unwrap_or_default().to_string())
    });
    Ok((base_url, server))
}

fn first_page() -> PostsQuery {
    PostsQuery {
        offset: 0,
        limit: 20,
        sort: Sort::default(),
        filters: Filters::new(),
    }
}

#[tokio::test]
async fn test_error_body_is_decode_failure_with_status() -> TestResult {
    let (base_url, server) = serve_once("500 Internal Server Error", r#"{"error":"boom"}"#).await?;
    let api = HttpPostsApi::new(&base_url, Duration::from_secs(5))?;

    let result = api.fetch_posts(&first_page()).await;

    assert!(
        matches!(result, Err(FetchError::Decode { status: 500, .. })),
        "unexpected result: {result:?}"
    );
    server.await??;
    Ok(())
}

#[tokio::test]
async fn test_posts_page_is_decoded() -> TestResult {
    let body = r#"[{"post_id":7,"caption":"Hello","impressions":1200,"likes":30,"comments":4,"post_datetime":"2024-05-01 12:00:00"}]"#;
    let (base_url, server) = serve_once("200 OK", body).await?;
    let api = HttpPostsApi::new(&base_url, Duration::from_secs(5))?;

    let posts = api.fetch_posts(&first_page()).await?;

    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].post_id.as_str(), "7");
    assert_eq!(posts[0].likes, 30);
    assert_eq!(
        server.await??,
        "GET /api/posts?offset=0&limit=20&sort_by=post_datetime&sort_order=desc HTTP/1.1"
    );
    Ok(())
}
