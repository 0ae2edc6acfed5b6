//! # インフラ層エラー定義
//!
//! 永続化操作で発生するエラーを表現する。
//!
//! ## 設計方針
//!
//! - **閉じた分類**: 呼び出し側が区別すべきなのは「質問が見つからない」「回答が見つからない」の
//!   2 種類のみ。それ以外（接続断、制約違反、行変換失敗など）は不透明な失敗として扱う
//! - **SpanTrace 自動捕捉**: `From` 実装や convenience constructor で
//!   エラー生成時の呼び出し経路を自動記録する
//!
//! ## 構造
//!
//! `std::io::Error` と同じ struct + enum パターンを採用:
//! - [`InfraError`]: エラー種別（[`InfraErrorKind`]）と [`SpanTrace`] を保持するラッパー
//! - [`InfraErrorKind`]: エラーの具体的な種別

use std::fmt;

use derive_more::Display;
use qa_domain::{answer::AnswerId, question::QuestionId};
use thiserror::Error;
use tracing_error::SpanTrace;

/// インフラ層で発生するエラー
///
/// エラー種別（[`InfraErrorKind`]）と [`SpanTrace`]（呼び出し経路）を保持する。
///
/// ## パターンマッチ
///
/// ```ignore
/// match error.kind() {
///     InfraErrorKind::QuestionNotFound { id } => { /* 404 */ }
///     _ => { /* 500 */ }
/// }
/// ```
#[derive(Display)]
#[display("{kind}")]
pub struct InfraError {
    kind:       InfraErrorKind,
    span_trace: SpanTrace,
}

/// インフラ層エラーの種別
#[derive(Debug, Error)]
pub enum InfraErrorKind {
    /// 指定 ID の質問が存在しない
    #[error("質問が見つかりません: id={id}")]
    QuestionNotFound {
        /// 検索に使用した ID
        id: QuestionId,
    },

    /// 指定 ID の回答が存在しない
    #[error("回答が見つかりません: id={id}")]
    AnswerNotFound {
        /// 検索に使用した ID
        id: AnswerId,
    },

    /// データベースエラー
    ///
    /// SQL クエリの実行失敗、接続エラー、制約違反、キャンセルなど。
    #[error("データベースエラー: {0}")]
    Database(#[source] sqlx::Error),

    /// 予期しないエラー
    ///
    /// DB から読んだ値がドメインの制約を満たさない場合など。
    #[error("予期しないエラー: {0}")]
    Unexpected(String),
}

// ===== InfraError のメソッド =====

impl InfraError {
    /// エラー種別を取得する
    pub fn kind(&self) -> &InfraErrorKind {
        &self.kind
    }

    /// SpanTrace を取得する
    pub fn span_trace(&self) -> &SpanTrace {
        &self.span_trace
    }

    /// 「見つからない」系のエラーかどうか
    pub fn is_not_found(&self) -> bool {
        matches!(
            self.kind,
            InfraErrorKind::QuestionNotFound { .. } | InfraErrorKind::AnswerNotFound { .. }
        )
    }

    // ===== Convenience constructors =====

    /// 質問が見つからないエラーを生成する
    pub fn question_not_found(id: QuestionId) -> Self {
        Self {
            kind:       InfraErrorKind::QuestionNotFound { id },
            span_trace: SpanTrace::capture(),
        }
    }

    /// 回答が見つからないエラーを生成する
    pub fn answer_not_found(id: AnswerId) -> Self {
        Self {
            kind:       InfraErrorKind::AnswerNotFound { id },
            span_trace: SpanTrace::capture(),
        }
    }

    /// 予期しないエラーを生成する
    pub fn unexpected(msg: impl Into<String>) -> Self {
        Self {
            kind:       InfraErrorKind::Unexpected(msg.into()),
            span_trace: SpanTrace::capture(),
        }
    }
}

// ===== トレイト実装 =====

impl fmt::Debug for InfraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InfraError")
            .field("kind", &self.kind)
            .field("span_trace", &self.span_trace)
            .finish()
    }
}

impl std::error::Error for InfraError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(&self.kind)
    }
}

// ===== From 実装（SpanTrace 自動キャプチャ） =====

impl From<sqlx::Error> for InfraError {
    fn from(source: sqlx::Error) -> Self {
        Self {
            kind:       InfraErrorKind::Database(source),
            span_trace: SpanTrace::capture(),
        }
    }
}

impl From<qa_domain::DomainError> for InfraError {
    fn from(source: qa_domain::DomainError) -> Self {
        Self::unexpected(source.to_string())
    }
}
