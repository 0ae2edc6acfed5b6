//! # リポジトリ実装
//!
//! 質問・回答の永続化インターフェース（トレイト）と PostgreSQL 実装を提供する。
//!
//! ## 設計方針
//!
//! - **トレイト経由の利用**: ハンドラは `Arc<dyn QuestionRepository>` のように
//!   トレイトオブジェクトとして保持し、テストではインメモリ実装に差し替える
//! - **sqlx による抽象化**: PostgreSQL 固有の処理（トランザクション、行ロック）をカプセル化

pub mod answer_repository;
pub mod question_repository;

pub use answer_repository::{AnswerRepository, PostgresAnswerRepository};
pub use question_repository::{PostgresQuestionRepository, QuestionRepository};
