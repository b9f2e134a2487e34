// HttpFetcher tests against a tiny HTTP server on localhost.
//
// The server understands just enough HTTP/1.1 to answer one GET per
// connection from a fixed route table, then closes the connection.

use site_mapper::*;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

async fn respond(mut stream: TcpStream) {
    let mut request = Vec::new();
    let mut buf = [0u8; 1024];
    while !request.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut buf).await {
            Ok(0) | Err(_) => return,
            Ok(n) => request.extend_from_slice(&buf[..n]),
        }
    }

    let request = String::from_utf8_lossy(&request);
    let path = request.split_whitespace().nth(1).unwrap_or("/").to_string();
    let agent = request
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            name.eq_ignore_ascii_case("user-agent").then(|| value.trim().to_string())
        })
        .unwrap_or_default();

    let (status, headers, body) = match path.as_str() {
        "/" => (
            "200 OK",
            "Content-Type: text/html\r\n".to_string(),
            r#"<html><body>
                <a href="/docs/">Docs</a>
                <a href="about#team">About</a>
                <a href="https://other.com/">Elsewhere</a>
            </body></html>"#
                .to_string(),
        ),
        "/old" => (
            "301 Moved Permanently",
            "Location: /guide/\r\n".to_string(),
            String::new(),
        ),
        "/guide/" => (
            "200 OK",
            "Content-Type: text/html; charset=utf-8\r\n".to_string(),
            r#"<a href="intro">Intro</a><a href="../">Home</a>"#.to_string(),
        ),
        // Echoes the request's user agent back as a link
        "/agent" => (
            "200 OK",
            "Content-Type: text/html\r\n".to_string(),
            format!(r#"<a href="/agent/{}">me</a>"#, agent),
        ),
        "/report.pdf" => (
            "200 OK",
            "Content-Type: application/pdf\r\n".to_string(),
            "%PDF-1.4 <a href=\"/not-a-link\">".to_string(),
        ),
        _ => (
            "404 Not Found",
            "Content-Type: text/html\r\n".to_string(),
            r#"<a href="/">Back home</a>"#.to_string(),
        ),
    };

    let response = format!(
        "HTTP/1.1 {}\r\n{}Content-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        headers,
        body.len(),
        body
    );
    let _ = stream.write_all(response.as_bytes()).await;
    let _ = stream.shutdown().await;
}

// Starts the server and returns its base URL, e.g. http://127.0.0.1:40123
async fn serve() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        while let Ok((stream, _)) = listener.accept().await {
            tokio::spawn(respond(stream));
        }
    });
    format!("http://{}", addr)
}

const AGENT: &str = "site-mapper-test";

// Local requests must never go through a proxy from the environment
fn local_fetcher() -> HttpFetcher {
    HttpFetcher::from_builder(reqwest::Client::builder().no_proxy()).unwrap()
}

#[tokio::test]
async fn test_fetch_extracts_normalized_links() {
    let base = serve().await;
    let fetcher = local_fetcher();

    let page = fetcher.fetch(&format!("{}/", base), AGENT).await.unwrap();

    assert_eq!(page.final_url, base);
    assert_eq!(
        page.links,
        vec![
            format!("{}/docs", base),
            format!("{}/about", base),
            "https://other.com".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_fetch_follows_redirects_and_resolves_against_final_url() {
    let base = serve().await;
    let fetcher = local_fetcher();

    let page = fetcher.fetch(&format!("{}/old", base), AGENT).await.unwrap();

    assert_eq!(page.final_url, format!("{}/guide", base));
    assert_eq!(
        page.links,
        vec![format!("{}/guide/intro", base), base.clone()]
    );
}

#[tokio::test]
async fn test_error_status_page_still_yields_links() {
    let base = serve().await;
    let fetcher = local_fetcher();

    let page = fetcher.fetch(&format!("{}/missing", base), AGENT).await.unwrap();

    assert_eq!(page.links, vec![base.clone()]);
}

#[tokio::test]
async fn test_non_html_has_no_links() {
    let base = serve().await;
    let fetcher = local_fetcher();

    let page = fetcher.fetch(&format!("{}/report.pdf", base), AGENT).await.unwrap();

    assert_eq!(page.final_url, format!("{}/report.pdf", base));
    assert!(page.links.is_empty());
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    // Grab a free port, then close the listener so nothing answers on it
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let fetcher = local_fetcher();
    let err = fetcher
        .fetch(&format!("http://{}/", addr), AGENT)
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::Transport(_)));
}

#[tokio::test]
async fn test_full_crawl_over_http() {
    let base = serve().await;
    let fetcher = local_fetcher();
    let config = CrawlConfig::builder(&base)
        .delay(DelayRange::none())
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap();

    let result = crawl_website(&fetcher, &config).await;

    // Home, /docs and /about (both 404 pages linking home); other.com is
    // off-site and never fetched
    assert_eq!(result.len(), 3);
    assert!(result.visited().contains(&base));
    assert!(result.visited().contains(&format!("{}/docs", base)));
    assert!(result.visited().contains(&format!("{}/about", base)));
    assert!(!result.visited().contains("https://other.com"));
}

#[tokio::test]
async fn test_malformed_url_is_rejected_before_any_request() {
    let err = local_fetcher().fetch("not a url", AGENT).await.unwrap_err();
    assert!(matches!(err, FetchError::InvalidUrl(_)));
}

#[tokio::test]
async fn test_fetch_sends_the_given_user_agent() {
    let base = serve().await;
    let fetcher = local_fetcher();

    let page = fetcher.fetch(&format!("{}/agent", base), AGENT).await.unwrap();

    assert_eq!(page.links, vec![format!("{}/agent/{}", base, AGENT)]);
}
