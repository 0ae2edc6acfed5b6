//! # ドメイン層エラー定義
//!
//! 入力値がドメインの制約に違反したことを表すエラー型。
//!
//! ## エラーの種類と HTTP ステータスの対応
//!
//! | エラー種別 | HTTP ステータス | 用途 |
//! |-----------|----------------|------|
//! | `Validation` | 400 Bad Request | 入力値の検証失敗 |
//!
//! 「見つからない」はドメイン層ではなく永続化層（`qa_infra::InfraError`）で表現する。
//! 存在確認は DB に問い合わせて初めて判明するため。
//!
//! ## 使用例
//!
//! ```rust
//! use qa_domain::DomainError;
//!
//! fn validate_text(text: &str) -> Result<(), DomainError> {
//!     if text.trim().is_empty() {
//!         return Err(DomainError::Validation("text は必須です".to_string()));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_text("  ").is_err());
//! ```

use thiserror::Error;

/// ドメイン層で発生するエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// バリデーションエラー
    ///
    /// 入力値がドメインの制約に違反している場合に使用する。
    ///
    /// # 例
    ///
    /// - 必須フィールドが空、または空白のみ
    /// - 文字数制限の超過
    #[error("バリデーションエラー: {0}")]
    Validation(String),
}
