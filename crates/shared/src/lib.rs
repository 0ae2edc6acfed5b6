//! # Q&A サービス共有ユーティリティ
//!
//! HTTP 層で共通利用するレスポンス型と Observability 基盤を提供する。
//!
//! ## 設計方針
//!
//! - ビジネスロジックを含まない純粋なユーティリティのみを配置
//! - axum には依存しない（`IntoResponse` 変換はサービス側の責務）
//! - tracing-subscriber / tower 依存は `observability` feature に閉じ込める

#[cfg(feature = "observability")]
pub mod canonical_log;
pub mod error_response;
pub mod health;
pub mod observability;

pub use error_response::ErrorResponse;
pub use health::{CheckStatus, HealthResponse, ReadinessResponse, ReadinessStatus};
