//! Integration tests for the roster service API

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use backstage_common::{AgentRecord, Error, NewAgent};
use roster_service::config::{CodenameMode, PhotoStoreKind};
use roster_service::{create_router, AppState, Config, MemoryStore, Registrar, RosterStore};
use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::{broadcast, RwLock};
use tower::ServiceExt; // for `oneshot`

const BOUNDARY: &str = "roster-test-boundary";

fn test_config() -> Config {
    Config {
        redis_url: "redis://127.0.0.1:6379".to_string(),
        api_host: "127.0.0.1".to_string(),
        api_port: 8084,
        mock_mode: true,
        photo_store: PhotoStoreKind::Inline,
        media_dir: PathBuf::from("./data/media"),
        media_public_base: "/media".to_string(),
        codename_mode: CodenameMode::Templates,
        max_upload_bytes: 8 * 1024 * 1024,
    }
}

/// Test app over the in-memory store; the store handle stays visible
/// for assertions.
fn create_test_app() -> (axum::Router, Arc<MemoryStore>) {
    create_test_app_with_config(test_config())
}

fn create_test_app_with_config(config: Config) -> (axum::Router, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let dyn_store: Arc<dyn RosterStore> = store.clone();

    let registrar = Registrar::from_config(&config, dyn_store.clone());
    let state = AppState {
        store: dyn_store,
        registrar,
        used_codenames: RwLock::new(HashSet::new()),
        config,
    };

    (create_router(state), store)
}

fn png_bytes() -> Vec<u8> {
    let img = image::RgbImage::from_pixel(96, 128, image::Rgb([40, 90, 200]));
    let mut buf = std::io::Cursor::new(Vec::new());
    img.write_to(&mut buf, image::ImageOutputFormat::Png).unwrap();
    buf.into_inner()
}

fn multipart_request(
    uri: &str,
    field_name: &str,
    content_type: &str,
    payload: &[u8],
) -> Request<Body> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
    body.extend_from_slice(
        format!("Content-Disposition: form-data; name=\"{field_name}\"; filename=\"selfie.png\"\r\n")
            .as_bytes(),
    );
    body.extend_from_slice(format!("Content-Type: {content_type}\r\n\r\n").as_bytes());
    body.extend_from_slice(payload);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    Request::builder()
        .uri(uri)
        .method("POST")
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let (app, _store) = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["service"], "roster-service");
}

#[tokio::test]
async fn test_register_and_list() {
    let (app, _store) = create_test_app();

    let response = app
        .clone()
        .oneshot(multipart_request(
            "/api/agents",
            "photo",
            "image/png",
            &png_bytes(),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    assert!(json["id"].is_string());
    assert!(json["codename"].is_string());

    let status = json["status"].as_str().unwrap();
    assert!(["approved", "double-agent", "imposter"].contains(&status));

    let label = json["label"].as_str().unwrap();
    assert!(["APPROVED AGENT", "DOUBLE AGENT", "IMPOSTER DETECTED"].contains(&label));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/agents")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    assert_eq!(json["total"], 1);

    let agents = json["agents"].as_array().unwrap();
    assert_eq!(agents.len(), 1);
    assert!(agents[0]["photoDataUrl"]
        .as_str()
        .unwrap()
        .starts_with("data:image/jpeg;base64,"));
    assert!(agents[0]["createdAt"].is_string());
    assert!(agents[0].get("imageUrl").is_none());
}

#[tokio::test]
async fn test_register_rejects_non_image_upload() {
    let (app, store) = create_test_app();

    let response = app
        .oneshot(multipart_request(
            "/api/agents",
            "photo",
            "text/plain",
            b"definitely not a photo",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = json_body(response).await;
    assert_eq!(json["error"], "Please upload an image file.");

    // Nothing was written.
    assert!(store.list_agents().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_register_requires_photo_field() {
    let (app, store) = create_test_app();

    let response = app
        .oneshot(multipart_request(
            "/api/agents",
            "avatar",
            "image/png",
            &png_bytes(),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(store.list_agents().await.unwrap().is_empty());
}

/// A store whose writes always fail.
struct BrokenStore;

#[async_trait]
impl RosterStore for BrokenStore {
    async fn create_agent(&self, _new: NewAgent) -> backstage_common::Result<AgentRecord> {
        Err(Error::store("wire cut"))
    }

    async fn get_agent(&self, _id: &str) -> backstage_common::Result<Option<AgentRecord>> {
        Ok(None)
    }

    async fn list_agents(&self) -> backstage_common::Result<Vec<AgentRecord>> {
        Ok(Vec::new())
    }

    fn subscribe(&self) -> broadcast::Receiver<Vec<AgentRecord>> {
        let (tx, _) = broadcast::channel(1);
        tx.subscribe()
    }
}

#[tokio::test]
async fn test_store_outage_yields_generic_error() {
    let config = test_config();
    let store: Arc<dyn RosterStore> = Arc::new(BrokenStore);
    let registrar = Registrar::from_config(&config, store.clone());
    let state = AppState {
        store,
        registrar,
        used_codenames: RwLock::new(HashSet::new()),
        config,
    };
    let app = create_router(state);

    let response = app
        .oneshot(multipart_request(
            "/api/agents",
            "photo",
            "image/png",
            &png_bytes(),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = json_body(response).await;
    assert_eq!(
        json["error"],
        "Secure channel error. Check that the roster store is configured and try again."
    );
}

#[tokio::test]
async fn test_photo_endpoint_serves_normalized_jpeg() {
    let (app, _store) = create_test_app();

    let response = app
        .clone()
        .oneshot(multipart_request(
            "/api/agents",
            "photo",
            "image/png",
            &png_bytes(),
        ))
        .await
        .unwrap();
    let id = json_body(response).await["id"].as_str().unwrap().to_string();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(format!("/api/agents/{id}/photo"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::CONTENT_TYPE)
            .unwrap()
            .to_str()
            .unwrap(),
        "image/jpeg"
    );

    let disposition = response
        .headers()
        .get(header::CONTENT_DISPOSITION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(disposition.starts_with("inline; filename=\""));
    assert!(disposition.ends_with(".jpg\""));

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let img = image::load_from_memory(&body).unwrap();
    assert_eq!((img.width(), img.height()), (480, 640));

    // download=true flips the disposition to attachment.
    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/api/agents/{id}/photo?download=true"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let disposition = response
        .headers()
        .get(header::CONTENT_DISPOSITION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(disposition.starts_with("attachment; filename=\""));
}

#[tokio::test]
async fn test_photo_unknown_agent_not_found() {
    let (app, _store) = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/agents/no-such-agent/photo")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_program_lists_setlist_and_missions() {
    let (app, _store) = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/program")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    let setlist = json["setlist"].as_array().unwrap();
    assert_eq!(setlist.len(), 6);
    assert_eq!(setlist[0]["codeName"], "Cold Open");
    assert_eq!(setlist[0]["approxTime"], "≈ 6:00 PM");

    let missions = json["missions"].as_array().unwrap();
    assert_eq!(missions.len(), 3);
    assert_eq!(missions[0]["title"], "Silent Applause Protocol");
}

#[tokio::test]
async fn test_live_feed_is_an_event_stream() {
    let (app, _store) = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/agents/live")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::CONTENT_TYPE)
            .unwrap()
            .to_str()
            .unwrap(),
        "text/event-stream"
    );
    // The body stays open for the venue screen; do not read it here.
}

#[tokio::test]
async fn test_codenames_do_not_repeat_across_registrations() {
    let (app, _store) = create_test_app();

    let mut codenames = Vec::new();
    for _ in 0..2 {
        let response = app
            .clone()
            .oneshot(multipart_request(
                "/api/agents",
                "photo",
                "image/png",
                &png_bytes(),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        codenames.push(json_body(response).await["codename"]
            .as_str()
            .unwrap()
            .to_string());
    }

    assert_ne!(codenames[0], codenames[1]);
}

#[tokio::test]
async fn test_blob_mode_redirects_and_serves_media() {
    let media_dir = tempfile::tempdir().unwrap();

    let mut config = test_config();
    config.photo_store = PhotoStoreKind::Blob;
    config.media_dir = media_dir.path().to_path_buf();

    let (app, store) = create_test_app_with_config(config);

    let response = app
        .clone()
        .oneshot(multipart_request(
            "/api/agents",
            "photo",
            "image/png",
            &png_bytes(),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let id = json_body(response).await["id"].as_str().unwrap().to_string();

    // The stored record links into /media instead of embedding bytes.
    let agents = store.list_agents().await.unwrap();
    let image_url = agents[0].image_url.as_deref().unwrap().to_string();
    assert!(image_url.starts_with("/media/"));
    assert!(image_url.ends_with(".jpg"));
    assert!(agents[0].photo_data_url.is_none());

    // The photo endpoint redirects there.
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(format!("/api/agents/{id}/photo"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        response
            .headers()
            .get(header::LOCATION)
            .unwrap()
            .to_str()
            .unwrap(),
        image_url
    );

    // And the media route serves the processed JPEG.
    let response = app
        .oneshot(
            Request::builder()
                .uri(&image_url)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let img = image::load_from_memory(&body).unwrap();
    assert_eq!((img.width(), img.height()), (480, 640));
}
