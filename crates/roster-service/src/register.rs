//! Registration orchestrator
//!
//! One attendee upload in, one stored roster record out: declared-type
//! pre-check, codename assignment, clearance draw, photo normalization,
//! photo sink, store write. No retries anywhere; the first failure wins
//! and nothing is persisted behind it.

use backstage_common::{ClearanceStatus, Error, NewAgent, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use clearance_engine::{clearance, codename, photo, templates};
use rand::Rng;
use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::config::{CodenameMode, Config, PhotoStoreKind};
use crate::storage::RosterStore;

/// An upload as it arrives from the HTTP edge
#[derive(Debug, Clone)]
pub struct PhotoUpload {
    pub bytes: Vec<u8>,
    pub content_type: Option<String>,
}

/// What the attendee gets back after a successful scan
#[derive(Debug, Clone)]
pub struct Registered {
    pub id: String,
    pub codename: String,
    pub status: ClearanceStatus,
}

/// Identity assigned to one registration
struct Identity {
    codename: String,
    story: Option<String>,
    achievement_title: Option<String>,
}

/// Where codenames come from
pub enum CodenameSource {
    /// The template catalog: codename plus achievement and backstory
    Catalog,
    /// Synthesized names with no backstory
    Synthetic,
}

impl CodenameSource {
    fn assign<R: Rng + ?Sized>(&self, used: &HashSet<String>, rng: &mut R) -> Identity {
        match self {
            CodenameSource::Catalog => {
                let template = templates::pick(used, rng);
                Identity {
                    codename: template.code_name.to_string(),
                    story: Some(template.story.to_string()),
                    achievement_title: Some(template.achievement_title.to_string()),
                }
            }
            CodenameSource::Synthetic => Identity {
                codename: codename::synthesize(rng),
                story: None,
                achievement_title: None,
            },
        }
    }
}

impl From<CodenameMode> for CodenameSource {
    fn from(mode: CodenameMode) -> Self {
        match mode {
            CodenameMode::Templates => CodenameSource::Catalog,
            CodenameMode::Synthetic => CodenameSource::Synthetic,
        }
    }
}

/// Where processed photos go; fills exactly one of the record's photo
/// fields.
pub enum PhotoSink {
    /// Embed as a JPEG data URL in `photo_data_url`
    Inline,
    /// Write under `media_dir`, reference as `{public_base}/{file}` in
    /// `image_url`
    Blob {
        media_dir: PathBuf,
        public_base: String,
    },
}

/// Result of sinking one photo
pub struct StoredPhoto {
    pub photo_data_url: Option<String>,
    pub image_url: Option<String>,
}

impl PhotoSink {
    pub fn from_config(config: &Config) -> Self {
        match config.photo_store {
            PhotoStoreKind::Inline => PhotoSink::Inline,
            PhotoStoreKind::Blob => PhotoSink::Blob {
                media_dir: config.media_dir.clone(),
                public_base: config.media_public_base.clone(),
            },
        }
    }

    async fn store(&self, jpeg: &[u8]) -> Result<StoredPhoto> {
        match self {
            PhotoSink::Inline => Ok(StoredPhoto {
                photo_data_url: Some(format!(
                    "data:image/jpeg;base64,{}",
                    STANDARD.encode(jpeg)
                )),
                image_url: None,
            }),
            PhotoSink::Blob {
                media_dir,
                public_base,
            } => {
                let file_name = format!("{}.jpg", Uuid::new_v4());
                tokio::fs::write(media_dir.join(&file_name), jpeg).await?;

                let base = public_base.trim_end_matches('/');
                Ok(StoredPhoto {
                    photo_data_url: None,
                    image_url: Some(format!("{base}/{file_name}")),
                })
            }
        }
    }
}

/// Runs the registration pipeline
pub struct Registrar {
    store: Arc<dyn RosterStore>,
    codenames: CodenameSource,
    photos: PhotoSink,
}

impl Registrar {
    pub fn new(store: Arc<dyn RosterStore>, codenames: CodenameSource, photos: PhotoSink) -> Self {
        Self {
            store,
            codenames,
            photos,
        }
    }

    pub fn from_config(config: &Config, store: Arc<dyn RosterStore>) -> Self {
        Self::new(
            store,
            config.codename_mode.into(),
            PhotoSink::from_config(config),
        )
    }

    /// Run one registration end to end.
    ///
    /// The declared-type pre-check rejects non-image uploads before any
    /// other work happens: no RNG draw, no decode, no store call. RNG
    /// order after the pre-check is fixed: codename first, then status.
    pub async fn register<R: Rng + Send>(
        &self,
        upload: PhotoUpload,
        used: &HashSet<String>,
        rng: &mut R,
    ) -> Result<Registered> {
        let declared = upload.content_type.as_deref().unwrap_or("");
        if !declared.starts_with("image/") {
            return Err(Error::InvalidInput(
                "Please upload an image file.".to_string(),
            ));
        }

        let identity = self.codenames.assign(used, rng);
        let status = clearance::draw_status(rng);
        let jpeg = photo::normalize(&upload.bytes)?;
        let stored = self.photos.store(&jpeg).await?;

        let record = self
            .store
            .create_agent(NewAgent {
                codename: identity.codename,
                status,
                photo_data_url: stored.photo_data_url,
                image_url: stored.image_url,
                story: identity.story,
                achievement_title: identity.achievement_title,
            })
            .await?;

        info!("Registered agent {} as {}", record.codename, record.status);

        Ok(Registered {
            id: record.id,
            codename: record.codename,
            status: record.status,
        })
    }
}
