//! # 回答ハンドラ
//!
//! ```text
//! POST   /questions/{id}/answers   質問に回答を追加
//! GET    /answers/{id}             取得
//! DELETE /answers/{id}             削除
//! ```

use std::sync::Arc;

use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
};
use qa_domain::{
    answer::{Answer, AnswerId, AnswerText, NewAnswer, UserId},
    question::QuestionId,
};
use serde::Deserialize;

use super::{QaState, decode_json, parse_id};
use crate::error::QaError;

/// 回答作成リクエスト
#[derive(Debug, Deserialize)]
pub struct CreateAnswerRequest {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub text:    Option<String>,
}

/// POST /questions/{id}/answers
///
/// 質問が存在しない場合は 404。
#[tracing::instrument(skip_all, fields(question_id = %raw_id))]
pub async fn create_answer(
    State(state): State<Arc<QaState>>,
    Path(raw_id): Path<String>,
    body: Bytes,
) -> Result<(StatusCode, Json<Answer>), QaError> {
    let question_id = QuestionId::from_i64(parse_id(&raw_id)?);
    let req: CreateAnswerRequest = decode_json(&body)?;
    let new_answer = NewAnswer {
        question_id,
        user_id: UserId::new(req.user_id.unwrap_or_default())?,
        text: AnswerText::new(req.text.unwrap_or_default())?,
    };

    let answer = state.answers.insert(&new_answer).await?;

    tracing::info!(answer_id = %answer.id, %question_id, "回答を作成しました");
    Ok((StatusCode::CREATED, Json(answer)))
}

/// GET /answers/{id}
#[tracing::instrument(skip_all, fields(id = %raw_id))]
pub async fn get_answer(
    State(state): State<Arc<QaState>>,
    Path(raw_id): Path<String>,
) -> Result<Json<Answer>, QaError> {
    let id = AnswerId::from_i64(parse_id(&raw_id)?);

    let answer = state.answers.find_by_id(id).await?;

    tracing::info!(answer_id = %id, "回答を返します");
    Ok(Json(answer))
}

/// DELETE /answers/{id}
#[tracing::instrument(skip_all, fields(id = %raw_id))]
pub async fn delete_answer(
    State(state): State<Arc<QaState>>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, QaError> {
    let id = AnswerId::from_i64(parse_id(&raw_id)?);

    state.answers.delete(id).await?;

    tracing::info!(answer_id = %id, "回答を削除しました");
    Ok(StatusCode::NO_CONTENT)
}
