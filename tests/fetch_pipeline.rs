use std::fs;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use predicates::prelude::*;
use serde_json::json;

fn entries_response(content_type: &str) -> Option<serde_json::Value> {
    match content_type {
        "siteSettings" => Some(json!({
            "items": [{
                "sys": { "id": "s1", "contentType": { "sys": { "id": "siteSettings" } } },
                "fields": {
                    "name": "Test Person",
                    "initials": "TP",
                    "title": "Builds test fixtures",
                    "email": "test@example.com"
                }
            }]
        })),
        "project" => Some(json!({
            "items": [{
                "sys": { "id": "p1", "contentType": { "sys": { "id": "project" } } },
                "fields": {
                    "title": "Fixture Project",
                    "subtitle": "A project served by the stub API.",
                    "year": "2025",
                    "featured": true,
                    "tags": ["rust", "cms"],
                    "media": { "sys": { "type": "Link", "linkType": "Asset", "id": "a1" } },
                    "description": {
                        "nodeType": "document",
                        "content": [{
                            "nodeType": "paragraph",
                            "content": [{
                                "nodeType": "text",
                                "value": "Hello world",
                                "marks": [{ "type": "bold" }]
                            }]
                        }]
                    }
                }
            }],
            "includes": {
                "Asset": [{
                    "sys": { "id": "a1" },
                    "fields": {
                        "title": "Cover",
                        "file": {
                            "url": "//assets.example/cover.png",
                            "contentType": "image/png",
                            "details": { "image": { "width": 1200, "height": 800 } }
                        }
                    }
                }]
            }
        })),
        "pillar" => Some(json!({
            "items": [{
                "sys": { "id": "pi1", "contentType": { "sys": { "id": "pillar" } } },
                "fields": { "title": "Test Pillar", "keywords": ["one", "two"] }
            }]
        })),
        "stat" | "cluster" | "experience" | "techCategory" => Some(json!({ "items": [] })),
        _ => None,
    }
}

fn content_type_param(url: &str) -> Option<String> {
    let (_, query) = url.split_once('?')?;
    query
        .split('&')
        .find_map(|pair| pair.strip_prefix("content_type=").map(str::to_owned))
}

fn spawn_content_server() -> (String, mpsc::Sender<()>, thread::JoinHandle<()>) {
    let server = tiny_http::Server::http("127.0.0.1:0").expect("start tiny_http server");
    let addr = server.server_addr();
    let base_url = format!("http://{addr}");

    let (shutdown_tx, shutdown_rx) = mpsc::channel::<()>();

    let handle = thread::spawn(move || {
        loop {
            if shutdown_rx.try_recv().is_ok() {
                break;
            }

            let request = match server.recv_timeout(Duration::from_millis(50)) {
                Ok(Some(req)) => req,
                Ok(None) => continue,
                Err(_) => break,
            };

            let url = request.url().to_string();
            let path = url.split('?').next().unwrap_or(&url);

            if path != "/spaces/test-space/environments/master/entries" {
                let _ = request
                    .respond(tiny_http::Response::from_string("not found").with_status_code(404));
                continue;
            }

            if !url.contains("access_token=test-token") {
                let _ = request
                    .respond(tiny_http::Response::from_string("bad token").with_status_code(401));
                continue;
            }

            let body = content_type_param(&url).and_then(|ct| entries_response(&ct));
            let response = match body {
                Some(body) => {
                    let header = tiny_http::Header::from_bytes(
                        &b"Content-Type"[..],
                        &b"application/json"[..],
                    )
                    .expect("content type header");
                    tiny_http::Response::from_string(body.to_string()).with_header(header)
                }
                None => tiny_http::Response::from_string("unknown content type")
                    .with_status_code(400),
            };
            let _ = request.respond(response);
        }
    });

    (base_url, shutdown_tx, handle)
}

#[test]
fn fetch_prints_resolved_records() -> anyhow::Result<()> {
    let (base_url, shutdown_tx, handle) = spawn_content_server();

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("folio");
    cmd.env("FOLIO_API_URL", &base_url)
        .env("FOLIO_SPACE_ID", "test-space")
        .env("FOLIO_ACCESS_TOKEN", "test-token")
        .args(["fetch", "--content-type", "project"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"_id\":\"p1\""))
        .stdout(predicate::str::contains("\"_contentType\":\"project\""))
        .stdout(predicate::str::contains(
            "\"url\":\"https://assets.example/cover.png\"",
        ))
        .stdout(predicate::str::contains("\"width\":1200"));

    let _ = shutdown_tx.send(());
    let _ = handle.join();
    Ok(())
}

#[test]
fn fetch_fails_when_collection_is_unavailable() -> anyhow::Result<()> {
    let (base_url, shutdown_tx, handle) = spawn_content_server();

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("folio");
    cmd.env("FOLIO_API_URL", &base_url)
        .env("FOLIO_SPACE_ID", "wrong-space")
        .env("FOLIO_ACCESS_TOKEN", "test-token")
        .args(["fetch", "--content-type", "project"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("collection unavailable: project"));

    let _ = shutdown_tx.send(());
    let _ = handle.join();
    Ok(())
}

#[test]
fn build_writes_site_json_and_description_fragments() -> anyhow::Result<()> {
    let (base_url, shutdown_tx, handle) = spawn_content_server();
    let temp = tempfile::TempDir::new()?;
    let out_dir = temp.path().join("dist");

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("folio");
    cmd.env("FOLIO_API_URL", &base_url)
        .env("FOLIO_SPACE_ID", "test-space")
        .env("FOLIO_ACCESS_TOKEN", "test-token")
        .args(["build", "--out", out_dir.to_str().unwrap()])
        .assert()
        .success();

    let site_json = fs::read_to_string(out_dir.join("site.json"))?;
    let site: serde_json::Value = serde_json::from_str(&site_json)?;
    assert_eq!(site["name"], "Test Person");
    assert_eq!(site["projects"][0]["title"], "Fixture Project");
    assert_eq!(
        site["projects"][0]["media"]["url"],
        "https://assets.example/cover.png"
    );
    assert_eq!(site["pillars"][0]["title"], "Test Pillar");
    // Empty collections render as empty sections, not as fallback data.
    assert_eq!(site["stats"], json!([]));

    let fragment = fs::read_to_string(out_dir.join("descriptions").join("01.html"))?;
    assert_eq!(fragment, "<p><strong>Hello world</strong></p>");

    let _ = shutdown_tx.send(());
    let _ = handle.join();
    Ok(())
}

#[test]
fn build_falls_back_to_placeholder_dataset() -> anyhow::Result<()> {
    let (base_url, shutdown_tx, handle) = spawn_content_server();
    let temp = tempfile::TempDir::new()?;
    let out_dir = temp.path().join("dist");

    // Wrong space: every collection 404s, which must trigger the fallback.
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("folio");
    cmd.env("FOLIO_API_URL", &base_url)
        .env("FOLIO_SPACE_ID", "wrong-space")
        .env("FOLIO_ACCESS_TOKEN", "test-token")
        .args(["build", "--out", out_dir.to_str().unwrap()])
        .assert()
        .success();

    let site_json = fs::read_to_string(out_dir.join("site.json"))?;
    let site: serde_json::Value = serde_json::from_str(&site_json)?;
    assert_eq!(site["name"], "Your Name");
    assert_eq!(site["projects"].as_array().map(Vec::len), Some(6));
    assert!(!out_dir.join("descriptions").exists());

    let _ = shutdown_tx.send(());
    let _ = handle.join();
    Ok(())
}
