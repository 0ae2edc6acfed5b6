//! # Q&A サービス ライブラリ
//!
//! ハンドラ、エラー定義、ルーター構築を公開する。
//! `main` とハンドラテスト（`tests/`）から使用する。

pub mod app;
pub mod config;
pub mod error;
pub mod handler;
pub mod middleware;
