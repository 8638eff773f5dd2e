//! Live roster feed over server-sent events.
//!
//! Every connection gets the current roster immediately, then a fresh
//! snapshot (newest first) after each registration. Snapshots come from
//! the store's broadcast channel; a client that falls behind skips to
//! the most recent one.

use axum::extract::State;
use axum::response::sse::{Event, KeepAlive, Sse};
use backstage_common::AgentRecord;
use futures::stream::{self, Stream, StreamExt};
use std::convert::Infallible;
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::debug;

use crate::handlers::AppState;

pub async fn live_roster_handler(
    State(state): State<Arc<AppState>>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    // Subscribe before reading the snapshot so a registration landing
    // in between is not lost.
    let rx = state.store.subscribe();

    let initial = match state.store.list_agents().await {
        Ok(agents) => agents,
        Err(err) => {
            debug!("Live feed starting without a snapshot: {err}");
            Vec::new()
        }
    };

    let updates = stream::unfold(rx, |mut rx| async move {
        loop {
            match rx.recv().await {
                Ok(agents) => return Some((agents, rx)),
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    debug!("Live feed client lagged, skipped {skipped} snapshots");
                    continue;
                }
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    });

    let snapshots = stream::once(async move { initial })
        .chain(updates)
        .map(|agents| Ok::<Event, Infallible>(roster_event(&agents)));

    Sse::new(snapshots).keep_alive(KeepAlive::default())
}

fn roster_event(agents: &[AgentRecord]) -> Event {
    match Event::default().event("roster").json_data(agents) {
        Ok(event) => event,
        Err(_) => Event::default().event("roster").data("[]"),
    }
}
