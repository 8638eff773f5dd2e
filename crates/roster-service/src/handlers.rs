//! API request handlers for the roster service

use axum::{
    extract::{Multipart, Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Redirect, Response},
    Json,
};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{error, info};

use backstage_common::{AgentRecord, ClearanceStatus, Error};

use crate::config::Config;
use crate::program::{self, Mission, SetItem};
use crate::register::{PhotoUpload, Registrar};
use crate::storage::RosterStore;

/// What callers see when registration fails for any internal reason
const REGISTRATION_FAILED: &str =
    "Secure channel error. Check that the roster store is configured and try again.";

/// Shared application state
pub struct AppState {
    pub store: Arc<dyn RosterStore>,
    pub registrar: Registrar,
    pub used_codenames: RwLock<HashSet<String>>,
    pub config: Config,
}

/// API Error type
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({
            "error": self.message
        });

        (self.status, Json(body)).into_response()
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match err {
            // The one failure the attendee can fix themselves.
            Error::InvalidInput(message) => ApiError {
                status: StatusCode::BAD_REQUEST,
                message,
            },
            other => {
                error!("Roster operation failed: {other}");
                ApiError {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: REGISTRATION_FAILED.to_string(),
                }
            }
        }
    }
}

/// Response from a successful registration
#[derive(Debug, Serialize)]
pub struct RegisterAgentResponse {
    pub id: String,
    pub codename: String,
    pub status: ClearanceStatus,
    pub label: String,
}

/// Current roster, newest first
#[derive(Debug, Serialize)]
pub struct RosterResponse {
    pub agents: Vec<AgentRecord>,
    pub total: usize,
}

#[derive(Debug, Deserialize)]
pub struct PhotoQuery {
    #[serde(default)]
    pub download: bool,
}

/// Event program: setlist plus audience missions
#[derive(Debug, Serialize)]
pub struct ProgramResponse {
    pub setlist: &'static [SetItem],
    pub missions: &'static [Mission],
}

/// Health check endpoint
pub async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "roster-service"
    }))
}

/// Register an attendee: scan the photo, assign a codename, draw a
/// clearance status, store the record
pub async fn register_agent_handler(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<RegisterAgentResponse>, ApiError> {
    let mut upload: Option<PhotoUpload> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| ApiError {
        status: StatusCode::BAD_REQUEST,
        message: format!("Invalid upload payload: {e}"),
    })? {
        if field.name() == Some("photo") {
            let content_type = field.content_type().map(|ct| ct.to_string());
            let bytes = field.bytes().await.map_err(|e| ApiError {
                status: StatusCode::BAD_REQUEST,
                message: format!("Invalid upload payload: {e}"),
            })?;

            upload = Some(PhotoUpload {
                bytes: bytes.to_vec(),
                content_type,
            });
        }
    }

    let upload = match upload {
        Some(upload) => upload,
        None => {
            return Err(ApiError {
                status: StatusCode::BAD_REQUEST,
                message: "Missing 'photo' upload field.".to_string(),
            })
        }
    };

    // Snapshot the used set; the insert below is what other requests
    // will see, so a racing duplicate is possible but harmless (the
    // catalog itself carries duplicate codenames).
    let used = state.used_codenames.read().await.clone();
    let mut rng = StdRng::from_entropy();

    let registered = state.registrar.register(upload, &used, &mut rng).await?;

    state
        .used_codenames
        .write()
        .await
        .insert(registered.codename.clone());

    info!("Agent {} cleared for the roster", registered.codename);

    let label = registered.status.label().to_string();
    Ok(Json(RegisterAgentResponse {
        id: registered.id,
        codename: registered.codename,
        status: registered.status,
        label,
    }))
}

/// List all registered agents, newest first
pub async fn list_agents_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<RosterResponse>, ApiError> {
    let agents = state.store.list_agents().await?;
    let total = agents.len();

    Ok(Json(RosterResponse { agents, total }))
}

/// Serve one agent's processed photo.
///
/// Inline records stream the JPEG straight out of the store; blob
/// records redirect to the public media URL. `?download=true` flips the
/// disposition to attachment.
pub async fn agent_photo_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(query): Query<PhotoQuery>,
) -> Result<Response, ApiError> {
    let agent = match state.store.get_agent(&id).await? {
        Some(agent) => agent,
        None => {
            return Err(ApiError {
                status: StatusCode::NOT_FOUND,
                message: format!("No agent with id: {}", id),
            })
        }
    };

    if let Some(data_url) = agent.photo_data_url.as_deref() {
        let jpeg = match decode_photo_data_url(data_url) {
            Some(jpeg) => jpeg,
            None => {
                error!("Agent {} has an undecodable photo data URL", agent.id);
                return Err(ApiError {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: "Stored photo is unreadable.".to_string(),
                });
            }
        };

        let kind = if query.download { "attachment" } else { "inline" };
        let disposition = format!(
            "{}; filename=\"{}\"",
            kind,
            safe_file_name(&agent.codename, &agent.id)
        );

        return Ok((
            [
                (header::CONTENT_TYPE, "image/jpeg".to_string()),
                (header::CONTENT_DISPOSITION, disposition),
            ],
            jpeg,
        )
            .into_response());
    }

    if let Some(image_url) = agent.image_url.as_deref() {
        return Ok(Redirect::temporary(image_url).into_response());
    }

    Err(ApiError {
        status: StatusCode::NOT_FOUND,
        message: format!("No photo stored for agent: {}", id),
    })
}

/// Serve the event program
pub async fn program_handler() -> impl IntoResponse {
    Json(ProgramResponse {
        setlist: program::SETLIST,
        missions: program::MISSIONS,
    })
}

fn decode_photo_data_url(data_url: &str) -> Option<Vec<u8>> {
    let encoded = data_url.strip_prefix("data:image/jpeg;base64,")?;
    STANDARD.decode(encoded).ok()
}

/// Filesystem-safe download name: codename with exotic characters
/// replaced, capped at 32 characters, plus the id's last 6 characters.
fn safe_file_name(codename: &str, id: &str) -> String {
    let base: String = codename
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .take(32)
        .collect();

    let base = if base.is_empty() {
        "agent".to_string()
    } else {
        base
    };

    let skip = id.chars().count().saturating_sub(6);
    let tail: String = id.chars().skip(skip).collect();

    format!("{base}_{tail}.jpg")
}
