//! Health check endpoint.

use actix_web::{HttpResponse, web};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub timestamp: String,
    pub database: &'static str,
}

/// Where blog posts are currently being stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseStatus {
    Connected,
    Unavailable,
    InMemory,
}

impl DatabaseStatus {
    pub fn label(self) -> &'static str {
        match self {
            DatabaseStatus::Connected => "connected",
            DatabaseStatus::Unavailable => "unavailable",
            DatabaseStatus::InMemory => "in-memory",
        }
    }

    pub fn is_degraded(self) -> bool {
        self == DatabaseStatus::Unavailable
    }
}

/// GET /health
///
/// Reports `degraded` with 503 when a configured database stops answering.
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let database = match &state.db {
        Some(db) if db.is_reachable().await => DatabaseStatus::Connected,
        Some(_) => DatabaseStatus::Unavailable,
        None => DatabaseStatus::InMemory,
    };
    let degraded = database.is_degraded();

    let response = HealthResponse {
        status: if degraded { "degraded" } else { "ok" },
        version: env!("CARGO_PKG_VERSION"),
        timestamp: chrono::Utc::now().to_rfc3339(),
        database: database.label(),
    };

    if degraded {
        HttpResponse::ServiceUnavailable().json(response)
    } else {
        HttpResponse::Ok().json(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_unreachable_database_is_degraded() {
        assert!(DatabaseStatus::Unavailable.is_degraded());
        assert!(!DatabaseStatus::Connected.is_degraded());
        assert!(!DatabaseStatus::InMemory.is_degraded());
        assert_eq!(DatabaseStatus::InMemory.label(), "in-memory");
    }
}
