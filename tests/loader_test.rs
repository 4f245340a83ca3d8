//! Tests for loading and merging lead sources
//!
//! Covers file and HTTP sources, merge order, and the two failure messages
//! (source failure vs. no leads at all).

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use leadview::services::loader::{load_leads, resolve_sources, LoadError};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Scratch directory unique to this test process and test name
fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("leadview-test-{}-{}", std::process::id(), name));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_sources(name: &str, files: &[(&str, &str)]) -> (PathBuf, Vec<String>) {
    let dir = scratch_dir(name);
    for (file, contents) in files {
        std::fs::write(dir.join(file), contents).unwrap();
    }
    let names = files.iter().map(|(file, _)| file.to_string()).collect();
    (dir, names)
}

fn titles(store: &leadview::model::RecordStore) -> Vec<String> {
    store
        .records()
        .iter()
        .map(|r| r.field("title").display().to_string())
        .collect()
}

/// Minimal HTTP server: responds per request path with (status line, body)
async fn serve(routes: Vec<(&'static str, &'static str, &'static str)>) -> String {
    let routes: Arc<HashMap<&str, (&str, &str)>> = Arc::new(
        routes
            .into_iter()
            .map(|(path, status, body)| (path, (status, body)))
            .collect(),
    );
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                return;
            };
            let routes = Arc::clone(&routes);
            tokio::spawn(async move {
                let mut request = Vec::new();
                let mut buf = [0u8; 1024];
                while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                    match socket.read(&mut buf).await {
                        Ok(0) | Err(_) => return,
                        Ok(n) => request.extend_from_slice(&buf[..n]),
                    }
                }
                let request = String::from_utf8_lossy(&request);
                let path = request.split_whitespace().nth(1).unwrap_or("/");
                let (status, body) = routes
                    .get(path)
                    .copied()
                    .unwrap_or(("404 Not Found", ""));
                let response = format!(
                    "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    body.len(),
                    body
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    format!("http://{}/", addr)
}

#[tokio::test]
async fn test_files_merge_in_list_order() {
    let (dir, names) = write_sources(
        "merge",
        &[
            ("first.json", r#"[{"title": "a1"}, {"title": "a2"}]"#),
            ("second.json", r#"[{"title": "b1"}]"#),
            ("third.json", r#"[{"title": "c1"}]"#),
        ],
    );
    let sources = resolve_sources(&names, None, Some(&dir)).unwrap();

    let store = load_leads(&reqwest::Client::new(), &sources).await.unwrap();
    assert_eq!(store.len(), 4);
    assert_eq!(store.index(), 0);
    assert_eq!(titles(&store), vec!["a1", "a2", "b1", "c1"]);
}

#[tokio::test]
async fn test_http_sources_merge_in_list_order() {
    let base = serve(vec![
        ("/one.json", "200 OK", r#"[{"title": "a1"}, {"title": "a2"}]"#),
        ("/two.json", "200 OK", r#"[{"title": "b1"}]"#),
        ("/three.json", "200 OK", r#"[{"title": "c1"}]"#),
    ])
    .await;
    let names = vec!["one.json".to_string(), "two.json".to_string(), "three.json".to_string()];
    let sources = resolve_sources(&names, Some(&base), None).unwrap();

    let store = load_leads(&reqwest::Client::new(), &sources).await.unwrap();
    assert_eq!(titles(&store), vec!["a1", "a2", "b1", "c1"]);
}

#[tokio::test]
async fn test_non_ok_status_fails_whole_load() {
    let base = serve(vec![
        ("/good.json", "200 OK", r#"[{"title": "a1"}]"#),
        ("/dentist.json", "404 Not Found", ""),
    ])
    .await;
    let names = vec!["good.json".to_string(), "dentist.json".to_string()];
    let sources = resolve_sources(&names, Some(&base), None).unwrap();

    let err = load_leads(&reqwest::Client::new(), &sources).await.unwrap_err();
    assert!(matches!(err, LoadError::Status { status: 404, .. }));
    assert_eq!(err.to_string(), "Failed to load dentist.json: Not Found");
}

#[tokio::test]
async fn test_all_empty_sources_report_no_leads() {
    let (dir, names) = write_sources(
        "empty",
        &[("a.json", "[]"), ("b.json", "[]"), ("c.json", "[]")],
    );
    let sources = resolve_sources(&names, None, Some(&dir)).unwrap();

    let err = load_leads(&reqwest::Client::new(), &sources).await.unwrap_err();
    assert!(matches!(err, LoadError::Empty));
    assert_eq!(err.to_string(), "No leads found in the source files.");
}

#[tokio::test]
async fn test_non_array_documents_are_skipped() {
    let (dir, names) = write_sources(
        "non-array",
        &[
            ("object.json", r#"{"title": "not a list"}"#),
            ("list.json", r#"[{"title": "kept"}]"#),
        ],
    );
    let sources = resolve_sources(&names, None, Some(&dir)).unwrap();

    let store = load_leads(&reqwest::Client::new(), &sources).await.unwrap();
    assert_eq!(titles(&store), vec!["kept"]);
}

#[tokio::test]
async fn test_invalid_json_fails_with_parse_error() {
    let (dir, names) = write_sources(
        "bad-json",
        &[("ok.json", r#"[{"title": "a"}]"#), ("broken.json", "[{\"title\": ")],
    );
    let sources = resolve_sources(&names, None, Some(&dir)).unwrap();

    let err = load_leads(&reqwest::Client::new(), &sources).await.unwrap_err();
    assert!(matches!(err, LoadError::Parse { .. }));
    assert!(err.to_string().starts_with("Failed to parse broken.json"));
}

#[tokio::test]
async fn test_missing_file_fails_with_source_name() {
    let dir = scratch_dir("missing");
    let names = vec!["nowhere.json".to_string()];
    let sources = resolve_sources(&names, None, Some(&dir)).unwrap();

    let err = load_leads(&reqwest::Client::new(), &sources).await.unwrap_err();
    assert!(matches!(err, LoadError::Read { .. }));
    assert!(err.to_string().starts_with("Failed to load nowhere.json"));
}
