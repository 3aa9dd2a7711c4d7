//! Orchestration probes.
//!
//! `/health/live` answers whenever a worker can serve HTTP at all.
//! `/health/ready` answers 200 once the listener is bound and the trip and
//! expense stores respond to a read. Account records belong to the identity
//! provider and have no read path, so they are not probed.

use std::sync::atomic::{AtomicBool, Ordering};

use actix_web::{HttpResponse, get, http::header, web};
use serde::Serialize;
use tracing::warn;
use uuid::Uuid;

use super::state::HttpState;

/// Flipped once by the server after it binds its socket.
#[derive(Debug, Default)]
pub struct Readiness(AtomicBool);

impl Readiness {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark_listening(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_listening(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Outcome reported in a probe body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProbeStatus {
    Alive,
    Starting,
    Ready,
    Degraded,
}

#[derive(Debug, Serialize)]
struct ProbeReport {
    status: ProbeStatus,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    failing: Vec<&'static str>,
}

fn report(status: ProbeStatus, failing: Vec<&'static str>) -> HttpResponse {
    let mut response = match status {
        ProbeStatus::Alive | ProbeStatus::Ready => HttpResponse::Ok(),
        ProbeStatus::Starting | ProbeStatus::Degraded => HttpResponse::ServiceUnavailable(),
    };
    response
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .json(ProbeReport { status, failing })
}

async fn unresponsive_stores(state: &HttpState) -> Vec<&'static str> {
    let mut failing = Vec::new();
    if let Err(error) = state.trips.list().await {
        warn!(%error, "trip store failed readiness read");
        failing.push("trips");
    }
    if let Err(error) = state.expenses.list_for_trip(&Uuid::nil()).await {
        warn!(%error, "expense store failed readiness read");
        failing.push("expenses");
    }
    failing
}

/// Readiness probe.
#[utoipa::path(
    get,
    path = "/health/ready",
    tags = ["health"],
    responses(
        (status = 200, description = "Listening and every store answered"),
        (status = 503, description = "Still starting, or a store is unreachable")
    )
)]
#[get("/health/ready")]
pub async fn ready(readiness: web::Data<Readiness>, state: web::Data<HttpState>) -> HttpResponse {
    if !readiness.is_listening() {
        return report(ProbeStatus::Starting, Vec::new());
    }
    let failing = unresponsive_stores(&state).await;
    let status = if failing.is_empty() {
        ProbeStatus::Ready
    } else {
        ProbeStatus::Degraded
    };
    report(status, failing)
}

/// Liveness probe.
#[utoipa::path(
    get,
    path = "/health/live",
    tags = ["health"],
    responses((status = 200, description = "A worker answered"))
)]
#[get("/health/live")]
pub async fn live() -> HttpResponse {
    report(ProbeStatus::Alive, Vec::new())
}
