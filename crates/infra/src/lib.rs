//! # Q&A インフラ層
//!
//! PostgreSQL への永続化を担当するインフラストラクチャ層。
//!
//! ## 責務
//!
//! - **データベース接続**: 接続プールの作成、マイグレーション、疎通確認
//! - **リポジトリ実装**: 質問・回答リポジトリの PostgreSQL 実装
//! - **エラー分類**: 永続化エラーを「見つからない」とそれ以外に分類する
//!
//! ## 依存関係
//!
//! ```text
//! qa-service → infra → domain
//! ```
//!
//! ## モジュール構成
//!
//! - [`db`] - PostgreSQL データベース接続管理
//! - [`error`] - インフラ層エラー定義
//! - [`repository`] - リポジトリトレイトと実装
//! - `mock` - テスト用インメモリ実装（`test-utils` feature）
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use qa_infra::{db, repository::PostgresQuestionRepository};
//!
//! async fn setup() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = db::create_pool("postgres://localhost/qa_service").await?;
//!     db::run_migrations(&pool).await?;
//!
//!     let questions = PostgresQuestionRepository::new(pool.clone());
//!     Ok(())
//! }
//! ```

pub mod db;
pub mod error;
#[cfg(any(test, feature = "test-utils"))]
pub mod mock;
pub mod repository;

pub use error::{InfraError, InfraErrorKind};
