//! # ミドルウェア
//!
//! Q&A サービス用のミドルウェアを提供する。

mod path_id;

pub use path_id::validate_path_id;
