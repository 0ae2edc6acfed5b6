//! # フォールバックハンドラ
//!
//! ルートテーブルに一致しないリクエストを RFC 9457 形式のエラーにする。

use axum::http::{Method, Uri};

use crate::error::QaError;

/// 未定義のパス（404）
pub async fn not_found(method: Method, uri: Uri) -> QaError {
    QaError::NotFound(format!("{method} {} は存在しません", uri.path()))
}

/// 定義済みパスへの未対応メソッド（405）
pub async fn method_not_allowed(method: Method, uri: Uri) -> QaError {
    QaError::MethodNotAllowed(format!("{method} {} は許可されていません", uri.path()))
}

/// ID セグメントのない回答パス（400）
pub async fn missing_answer_id() -> QaError {
    QaError::BadRequest("回答 ID が指定されていません".to_string())
}
