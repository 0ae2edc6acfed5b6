//! # Q&A サービスのエラー定義
//!
//! ハンドラで発生するエラーと、HTTP レスポンス（RFC 9457 Problem Details）への変換を定義する。
//!
//! ## 分類
//!
//! | バリアント | ステータス | 発生源 |
//! |------------|-----------|--------|
//! | `BadRequest` | 400 | 不正な ID、不正な JSON、必須フィールドの欠落 |
//! | `NotFound` | 404 | 質問・回答が存在しない、未定義のパス |
//! | `MethodNotAllowed` | 405 | 定義済みパスへの未対応メソッド |
//! | `Database` | 500 | 上記以外の永続化エラー（詳細はログのみ） |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use qa_domain::DomainError;
use qa_infra::{InfraError, InfraErrorKind};
use qa_shared::ErrorResponse;
use thiserror::Error;

/// Q&A サービスで発生するエラー
#[derive(Debug, Error)]
pub enum QaError {
    /// 不正なリクエスト
    #[error("不正なリクエスト: {0}")]
    BadRequest(String),

    /// リソースが見つからない
    #[error("リソースが見つかりません: {0}")]
    NotFound(String),

    /// 許可されていないメソッド
    #[error("許可されていないメソッドです: {0}")]
    MethodNotAllowed(String),

    /// データベースエラー
    #[error("データベースエラー: {0}")]
    Database(InfraError),
}

impl QaError {
    /// HTTP ステータスコード
    pub fn status(&self) -> StatusCode {
        match self {
            QaError::BadRequest(_) => StatusCode::BAD_REQUEST,
            QaError::NotFound(_) => StatusCode::NOT_FOUND,
            QaError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            QaError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// 「見つからない」系のみ 404 に分類し、それ以外は 500 として扱う
impl From<InfraError> for QaError {
    fn from(error: InfraError) -> Self {
        match error.kind() {
            InfraErrorKind::QuestionNotFound { .. } | InfraErrorKind::AnswerNotFound { .. } => {
                QaError::NotFound(error.to_string())
            }
            InfraErrorKind::Database(_) | InfraErrorKind::Unexpected(_) => QaError::Database(error),
        }
    }
}

impl From<DomainError> for QaError {
    fn from(error: DomainError) -> Self {
        match error {
            DomainError::Validation(msg) => QaError::BadRequest(msg),
        }
    }
}

impl IntoResponse for QaError {
    fn into_response(self) -> Response {
        let body = match &self {
            QaError::BadRequest(msg) => {
                tracing::warn!(detail = %msg, "不正なリクエストです");
                ErrorResponse::bad_request(msg.clone())
            }
            QaError::NotFound(msg) => {
                tracing::info!(detail = %msg, "リソースが見つかりません");
                ErrorResponse::not_found(msg.clone())
            }
            QaError::MethodNotAllowed(msg) => {
                tracing::warn!(detail = %msg, "許可されていないメソッドです");
                ErrorResponse::method_not_allowed(msg.clone())
            }
            QaError::Database(e) => {
                tracing::error!(
                    error = %e,
                    span_trace = %e.span_trace(),
                    "データベースエラー"
                );
                ErrorResponse::internal_error()
            }
        };

        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use qa_domain::{answer::AnswerId, question::QuestionId};

    use super::*;

    #[test]
    fn test_question_not_foundは404に分類される() {
        let err: QaError = InfraError::question_not_found(QuestionId::from_i64(1)).into();

        assert!(matches!(err, QaError::NotFound(_)));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_answer_not_foundは404に分類される() {
        let err: QaError = InfraError::answer_not_found(AnswerId::from_i64(1)).into();

        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_sqlxエラーは500に分類される() {
        let err: QaError = InfraError::from(sqlx::Error::PoolTimedOut).into();

        assert!(matches!(err, QaError::Database(_)));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_unexpectedは500に分類される() {
        let err: QaError = InfraError::unexpected("row conversion").into();

        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_バリデーションエラーはメッセージをそのまま400にする() {
        let err: QaError = DomainError::Validation("text は必須です".to_string()).into();

        assert!(matches!(err, QaError::BadRequest(ref msg) if msg == "text は必須です"));
    }

    #[tokio::test]
    async fn test_500レスポンスは内部情報を含まない() {
        let err: QaError = InfraError::unexpected("secret connection string").into();

        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["detail"], "内部エラーが発生しました");
        assert!(!String::from_utf8_lossy(&body).contains("secret"));
    }
}
