//! # ルーター構築
//!
//! ルートテーブルとミドルウェアを 1 か所で組み立てる。
//! `main` とハンドラテストの両方から使用する。
//!
//! ## ルートテーブル
//!
//! | メソッド | パス | ハンドラ |
//! |----------|------|----------|
//! | GET | `/health` | [`health_check`] |
//! | GET | `/health/ready` | [`readiness_check`] |
//! | GET / POST | `/questions` | [`list_questions`] / [`create_question`] |
//! | GET / DELETE | `/questions/{id}` | [`get_question`] / [`delete_question`] |
//! | POST | `/questions/{id}/answers` | [`create_answer`] |
//! | GET / DELETE | `/answers/{id}` | [`get_answer`] / [`delete_answer`] |
//!
//! 上記パスへの未対応メソッド（HEAD を含む）は 405、それ以外のパスは 404。
//!
//! ## パスの扱い
//!
//! - 末尾のスラッシュはルーティング前に除去する（`/questions/1/` は `/questions/1`）
//! - `{id}` はメソッド振り分けより先に検証する（`PUT /questions/abc` は 400）
//! - `/questions/{id}/...` の未定義パスも ID を検証してから 404 にする
//! - ID のない `/answers/` は 400

use std::sync::Arc;

use axum::{
    Router,
    middleware::from_fn,
    routing::{any, get, post},
};
use qa_shared::{
    canonical_log::CanonicalLogLineLayer,
    observability::{MakeRequestUuidV7, make_request_span},
};
use tower_http::{
    normalize_path::NormalizePath,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::{
    handler::{
        QaState,
        ReadinessState,
        create_answer,
        create_question,
        delete_answer,
        delete_question,
        get_answer,
        get_question,
        health_check,
        list_questions,
        method_not_allowed,
        missing_answer_id,
        not_found,
        readiness_check,
    },
    middleware::validate_path_id,
};

/// アプリケーションを構築する
///
/// 末尾スラッシュの除去はルーティングより前に行う必要があるため、
/// `Router` ではなく `NormalizePath` で包んだサービスを返す。
pub fn build_router(
    state: Arc<QaState>,
    readiness: Arc<ReadinessState>,
) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/health", get(health_check))
        .route("/health/ready", get(readiness_check).with_state(readiness))
        .route(
            "/questions",
            get(list_questions)
                .post(create_question)
                .head(method_not_allowed),
        )
        .route(
            "/questions/{id}",
            get(get_question)
                .delete(delete_question)
                .head(method_not_allowed),
        )
        .route("/questions/{id}/answers", post(create_answer))
        .route("/questions/{id}/{*rest}", any(not_found))
        .route("/answers", any(missing_answer_id))
        .route(
            "/answers/{id}",
            get(get_answer).delete(delete_answer).head(method_not_allowed),
        )
        // 登録済みの全ルートに適用されるため、ルート定義の後に置く
        .method_not_allowed_fallback(method_not_allowed)
        // 405 フォールバックも包むため method_not_allowed_fallback の後に置く
        .route_layer(from_fn(validate_path_id))
        .fallback(not_found)
        .with_state(state)
        // 下に書いたものが外側:
        // SetRequestId → TraceLayer（request_id をスパンに含める）→ PropagateRequestId → CanonicalLogLine
        .layer(CanonicalLogLineLayer)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7));

    NormalizePath::trim_trailing_slash(router)
}
