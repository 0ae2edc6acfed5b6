//! # Q&A ドメイン層
//!
//! 質問（Question）と回答（Answer）のドメインモデルを定義する。
//!
//! ## 設計方針
//!
//! - **型付き ID**: `QuestionId` と `AnswerId` を別の型にし、取り違えをコンパイル時に検出する
//! - **バリデーション付き文字列**: 空白のみの本文や長すぎる回答者 ID を型の生成時点で拒否する
//! - **不変エンティティ**: 作成後に更新するユースケースがないため、更新メソッドを持たない
//!
//! ## 依存関係の方向
//!
//! ```text
//! qa-service → infra → domain
//!      ↘                ↑
//!        ───────────────
//! ```
//!
//! ドメイン層は DB や HTTP に一切依存しない。
//!
//! ## モジュール構成
//!
//! - [`error`] - ドメイン層で発生するエラーの定義
//! - [`question`] - 質問エンティティと ID・本文
//! - [`answer`] - 回答エンティティと ID・回答者 ID・本文

#[macro_use]
mod macros;

pub mod answer;
pub mod error;
pub mod question;

pub use error::DomainError;
