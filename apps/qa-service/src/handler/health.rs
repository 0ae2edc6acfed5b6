//! # ヘルスチェックハンドラ
//!
//! レスポンス型は [`qa_shared::HealthResponse`] / [`qa_shared::ReadinessResponse`] を参照。
//!
//! ```text
//! GET /health        → 200 {"status": "healthy", "version": "0.1.0"}
//! GET /health/ready  → 200 / 503 {"status": "ready" | "not_ready", "checks": {"database": "ok" | "error"}}
//! ```

use std::{collections::HashMap, sync::Arc};

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use qa_infra::db;
use qa_shared::{CheckStatus, HealthResponse, ReadinessResponse, ReadinessStatus};
use sqlx::PgPool;

/// Readiness Check 用 State
pub struct ReadinessState {
    pub pool: PgPool,
}

/// Liveness エンドポイント
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status:  "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Readiness エンドポイント
///
/// データベースへの疎通（`SELECT 1`）を確認する。失敗時は 503。
#[tracing::instrument(skip_all)]
pub async fn readiness_check(State(state): State<Arc<ReadinessState>>) -> impl IntoResponse {
    let database = match db::ping(&state.pool).await {
        Ok(()) => CheckStatus::Ok,
        Err(e) => {
            tracing::warn!(error = %e, "readiness check: database ping failed");
            CheckStatus::Error
        }
    };

    let response =
        ReadinessResponse::from_checks(HashMap::from([("database".to_string(), database)]));
    let status = match response.status {
        ReadinessStatus::Ready => StatusCode::OK,
        ReadinessStatus::NotReady => StatusCode::SERVICE_UNAVAILABLE,
    };

    (status, Json(response))
}
