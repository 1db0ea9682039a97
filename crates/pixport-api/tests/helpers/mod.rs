//! Shared helpers for integration tests: app construction, multipart body
//! building, and image fixtures.

#![allow(dead_code)]

use std::io::Cursor;
use std::path::PathBuf;

use axum::body::Body;
use axum::http::{header, Request};
use axum::Router;
use http_body_util::BodyExt;
use pixport_core::Config;
use tempfile::TempDir;

pub const BOUNDARY: &str = "pixport-test-boundary";

/// Build a router backed by a fresh scratch directory. The `TempDir` must be
/// kept alive for the duration of the test.
pub async fn setup_test_app() -> (Router, TempDir) {
    setup_test_app_with_cap(20 * 1024 * 1024).await
}

pub async fn setup_test_app_with_cap(max_file_size_bytes: usize) -> (Router, TempDir) {
    let scratch = tempfile::tempdir().expect("failed to create scratch dir");
    let config = Config {
        server_port: 0,
        cors_origins: vec!["*".to_string()],
        environment: "test".to_string(),
        max_file_size_bytes,
        upload_dir: scratch.path().to_path_buf(),
    };
    let app = pixport_api::setup::initialize_app(&config)
        .await
        .expect("failed to initialize app");
    (app, scratch)
}

/// Encode a single-file multipart form the way a browser would.
pub fn multipart_body(filename: &str, content_type: &str, data: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
    body.extend_from_slice(
        format!("Content-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\n")
            .as_bytes(),
    );
    body.extend_from_slice(format!("Content-Type: {content_type}\r\n\r\n").as_bytes());
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
    body
}

/// Multipart form with no file field at all.
pub fn multipart_body_without_file() -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
    body.extend_from_slice(b"Content-Disposition: form-data; name=\"note\"\r\n\r\n");
    body.extend_from_slice(b"hello");
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
    body
}

pub fn convert_request(format: &str, body: Vec<u8>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(format!("/api/convert?format={format}"))
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .expect("failed to build request")
}

/// A small valid PNG, encoded with the same codec the service decodes with.
pub fn png_fixture(width: u32, height: u32) -> Vec<u8> {
    let mut img = image::RgbaImage::new(width, height);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        *pixel = image::Rgba([(x % 256) as u8, (y % 256) as u8, 64, 255]);
    }
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
        .expect("failed to encode fixture");
    bytes
}

pub async fn body_bytes(body: Body) -> Vec<u8> {
    body.collect()
        .await
        .expect("failed to collect body")
        .to_bytes()
        .to_vec()
}

/// Paths currently present in the scratch directory.
pub fn scratch_entries(scratch: &TempDir) -> Vec<PathBuf> {
    std::fs::read_dir(scratch.path())
        .expect("failed to read scratch dir")
        .map(|e| e.expect("failed to read scratch entry").path())
        .collect()
}
