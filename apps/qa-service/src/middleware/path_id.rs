//! # パス ID 検証ミドルウェア
//!
//! ルート一致後、メソッド振り分けの前に `{id}` セグメントを検証する。
//! `PUT /questions/abc` のように未対応メソッドでも ID が不正なら 400 を返す。
//!
//! `Router::route_layer` で適用する。`method_not_allowed_fallback` より後に
//! 適用しないと 405 フォールバックが検証の外側に残る。

use axum::{
    RequestExt,
    extract::{RawPathParams, Request},
    middleware::Next,
    response::Response,
};

use crate::{error::QaError, handler::parse_id};

/// ID を取るパスパラメータ名
const ID_PARAM: &str = "id";

/// `{id}` パスパラメータが非負整数であることを検証する
pub async fn validate_path_id(mut request: Request, next: Next) -> Result<Response, QaError> {
    // パラメータを持たないルートでは何もしない
    if let Ok(params) = request.extract_parts::<RawPathParams>().await {
        for (key, value) in &params {
            if key == ID_PARAM {
                parse_id(value)?;
            }
        }
    }

    Ok(next.run(request).await)
}
