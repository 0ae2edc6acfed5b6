//! # 質問ハンドラ
//!
//! ```text
//! GET    /questions        一覧（回答なし）
//! POST   /questions        作成
//! GET    /questions/{id}   回答付きで取得
//! DELETE /questions/{id}   削除（回答もカスケード削除）
//! ```

use std::sync::Arc;

use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
};
use qa_domain::question::{NewQuestion, Question, QuestionId, QuestionText};
use serde::Deserialize;

use super::{QaState, decode_json, parse_id};
use crate::error::QaError;

/// 質問作成リクエスト
#[derive(Debug, Deserialize)]
pub struct CreateQuestionRequest {
    #[serde(default)]
    pub text: Option<String>,
}

/// GET /questions
#[tracing::instrument(skip_all)]
pub async fn list_questions(
    State(state): State<Arc<QaState>>,
) -> Result<Json<Vec<Question>>, QaError> {
    let questions = state.questions.list().await?;

    tracing::info!(count = questions.len(), "質問一覧を返します");
    Ok(Json(questions))
}

/// POST /questions
#[tracing::instrument(skip_all)]
pub async fn create_question(
    State(state): State<Arc<QaState>>,
    body: Bytes,
) -> Result<(StatusCode, Json<Question>), QaError> {
    let req: CreateQuestionRequest = decode_json(&body)?;
    let new_question = NewQuestion {
        text: QuestionText::new(req.text.unwrap_or_default())?,
    };

    let question = state.questions.insert(&new_question).await?;

    tracing::info!(question_id = %question.id, "質問を作成しました");
    Ok((StatusCode::CREATED, Json(question)))
}

/// GET /questions/{id}
#[tracing::instrument(skip_all, fields(id = %raw_id))]
pub async fn get_question(
    State(state): State<Arc<QaState>>,
    Path(raw_id): Path<String>,
) -> Result<Json<Question>, QaError> {
    let id = QuestionId::from_i64(parse_id(&raw_id)?);

    let question = state.questions.find_with_answers(id).await?;

    tracing::info!(
        question_id = %id,
        answers = question.answers.as_ref().map_or(0, Vec::len),
        "質問を返します"
    );
    Ok(Json(question))
}

/// DELETE /questions/{id}
#[tracing::instrument(skip_all, fields(id = %raw_id))]
pub async fn delete_question(
    State(state): State<Arc<QaState>>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, QaError> {
    let id = QuestionId::from_i64(parse_id(&raw_id)?);

    state.questions.delete(id).await?;

    tracing::info!(question_id = %id, "質問を削除しました");
    Ok(StatusCode::NO_CONTENT)
}
