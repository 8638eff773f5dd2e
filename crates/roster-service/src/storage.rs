//! Roster storage
//!
//! Data model (Redis):
//! - agent:{id} → JSON agent record
//! - agents:by_time → Sorted set (score=createdAt millis, member=id)
//!
//! The store assigns `id` and `created_at` on create; callers never pick
//! either. Every successful create publishes the fresh roster snapshot
//! (newest first) on a broadcast channel that the live feed fans out to
//! connected screens.

use anyhow::Context;
use async_trait::async_trait;
use backstage_common::{AgentRecord, Error, NewAgent, Result};
use chrono::Utc;
use redis::aio::ConnectionManager;
use redis::AsyncCommands;
use tokio::sync::{broadcast, RwLock};
use tracing::{info, warn};
use uuid::Uuid;

/// Snapshot fan-out capacity; a receiver that falls behind skips ahead.
const EVENT_CAPACITY: usize = 16;

/// Materialize a record from a write payload; the store is the authority
/// for `id` and `created_at`.
fn assign_record(new: NewAgent) -> AgentRecord {
    AgentRecord {
        id: Uuid::new_v4().to_string(),
        codename: new.codename,
        status: new.status,
        photo_data_url: new.photo_data_url,
        image_url: new.image_url,
        story: new.story,
        achievement_title: new.achievement_title,
        created_at: Utc::now(),
    }
}

/// Storage backend for the agent roster
#[async_trait]
pub trait RosterStore: Send + Sync {
    /// Persist a new agent and return the full record. A failed create
    /// leaves no visible trace.
    async fn create_agent(&self, new: NewAgent) -> Result<AgentRecord>;

    /// Fetch one agent by id.
    async fn get_agent(&self, id: &str) -> Result<Option<AgentRecord>>;

    /// The full roster, newest first.
    async fn list_agents(&self) -> Result<Vec<AgentRecord>>;

    /// Subscribe to the roster snapshots published after each create.
    fn subscribe(&self) -> broadcast::Receiver<Vec<AgentRecord>>;
}

/// Redis-backed roster store
pub struct RedisStore {
    conn: ConnectionManager,
    events: broadcast::Sender<Vec<AgentRecord>>,
}

impl RedisStore {
    /// Connect to Redis and set up the snapshot channel
    pub async fn new(redis_url: &str) -> anyhow::Result<Self> {
        let client = redis::Client::open(redis_url).context("Failed to create Redis client")?;

        let conn = ConnectionManager::new(client)
            .await
            .context("Failed to connect to Redis")?;

        info!("Connected to Redis at {}", redis_url);

        let (events, _) = broadcast::channel(EVENT_CAPACITY);

        Ok(Self { conn, events })
    }

    /// Publish the current roster to live feed subscribers. The write
    /// already succeeded, so a snapshot failure is only logged.
    async fn publish_snapshot(&self) {
        match self.list_agents().await {
            Ok(snapshot) => {
                let _ = self.events.send(snapshot);
            }
            Err(e) => warn!("Failed to load roster snapshot for the live feed: {e}"),
        }
    }
}

#[async_trait]
impl RosterStore for RedisStore {
    async fn create_agent(&self, new: NewAgent) -> Result<AgentRecord> {
        let record = assign_record(new);
        let json = serde_json::to_string(&record)?;

        let mut conn = self.conn.clone();
        let key = format!("agent:{}", record.id);

        let _: () = conn.set(&key, &json).await.map_err(Error::store)?;
        let _: () = conn
            .zadd(
                "agents:by_time",
                &record.id,
                record.created_at.timestamp_millis(),
            )
            .await
            .map_err(Error::store)?;

        info!("Stored agent {} ({})", record.codename, record.id);
        self.publish_snapshot().await;

        Ok(record)
    }

    async fn get_agent(&self, id: &str) -> Result<Option<AgentRecord>> {
        let mut conn = self.conn.clone();

        let json: Option<String> = conn.get(format!("agent:{id}")).await.map_err(Error::store)?;

        match json {
            Some(data) => Ok(Some(serde_json::from_str(&data)?)),
            None => Ok(None),
        }
    }

    async fn list_agents(&self) -> Result<Vec<AgentRecord>> {
        let mut conn = self.conn.clone();

        let ids: Vec<String> = conn
            .zrevrange("agents:by_time", 0, -1)
            .await
            .map_err(Error::store)?;

        let mut agents = Vec::with_capacity(ids.len());
        for id in ids {
            let json: Option<String> =
                conn.get(format!("agent:{id}")).await.map_err(Error::store)?;

            if let Some(data) = json {
                match serde_json::from_str::<AgentRecord>(&data) {
                    Ok(record) => agents.push(record),
                    Err(e) => warn!("Skipping unparsable agent record {id}: {e}"),
                }
            }
        }

        Ok(agents)
    }

    fn subscribe(&self) -> broadcast::Receiver<Vec<AgentRecord>> {
        self.events.subscribe()
    }
}

/// In-memory roster store for MOCK_MODE and tests
pub struct MemoryStore {
    agents: RwLock<Vec<AgentRecord>>,
    events: broadcast::Sender<Vec<AgentRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);

        Self {
            agents: RwLock::new(Vec::new()),
            events,
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RosterStore for MemoryStore {
    async fn create_agent(&self, new: NewAgent) -> Result<AgentRecord> {
        let record = assign_record(new);

        let snapshot = {
            let mut agents = self.agents.write().await;
            agents.insert(0, record.clone());
            agents.clone()
        };
        let _ = self.events.send(snapshot);

        Ok(record)
    }

    async fn get_agent(&self, id: &str) -> Result<Option<AgentRecord>> {
        Ok(self
            .agents
            .read()
            .await
            .iter()
            .find(|agent| agent.id == id)
            .cloned())
    }

    async fn list_agents(&self) -> Result<Vec<AgentRecord>> {
        Ok(self.agents.read().await.clone())
    }

    fn subscribe(&self) -> broadcast::Receiver<Vec<AgentRecord>> {
        self.events.subscribe()
    }
}
