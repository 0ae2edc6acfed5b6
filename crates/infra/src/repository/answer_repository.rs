//! # AnswerRepository
//!
//! 回答の永続化を担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **親の存在確認**: 作成時に質問の存在を確認し、なければ `QuestionNotFound` を返す
//! - **確認と挿入の原子性**: 存在確認（`FOR KEY SHARE`）と挿入を同一トランザクションで行う。
//!   確認後・挿入前に親が削除される競合を防ぐ
//! - **冪等な削除**: 存在しない ID の削除はエラーにしない

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use qa_domain::{
    answer::{Answer, AnswerId, AnswerText, NewAnswer, UserId},
    question::QuestionId,
};
use sqlx::PgPool;

use crate::error::InfraError;

/// 回答リポジトリトレイト
#[async_trait]
pub trait AnswerRepository: Send + Sync {
    /// 質問に回答を追加する
    ///
    /// 親の質問が存在しない場合は `QuestionNotFound` を返す。
    async fn insert(&self, new_answer: &NewAnswer) -> Result<Answer, InfraError>;

    /// ID で回答を取得する
    ///
    /// 存在しない場合は `AnswerNotFound` を返す。
    async fn find_by_id(&self, id: AnswerId) -> Result<Answer, InfraError>;

    /// 回答を削除する（存在しない ID は何もしない）
    async fn delete(&self, id: AnswerId) -> Result<(), InfraError>;
}

/// DB の answers テーブルの行を表す中間構造体
///
/// 質問リポジトリの回答読み込みでも使用する。
#[derive(Debug, sqlx::FromRow)]
pub(crate) struct AnswerRow {
    pub(crate) id:          i64,
    pub(crate) question_id: i64,
    pub(crate) user_id:     String,
    pub(crate) text:        String,
    pub(crate) created_at:  DateTime<Utc>,
}

impl TryFrom<AnswerRow> for Answer {
    type Error = InfraError;

    fn try_from(row: AnswerRow) -> Result<Self, Self::Error> {
        Ok(Answer {
            id:          AnswerId::from_i64(row.id),
            question_id: QuestionId::from_i64(row.question_id),
            user_id:     UserId::new(row.user_id)?,
            text:        AnswerText::new(row.text)?,
            created_at:  row.created_at,
        })
    }
}

/// PostgreSQL 実装の AnswerRepository
#[derive(Debug, Clone)]
pub struct PostgresAnswerRepository {
    pool: PgPool,
}

impl PostgresAnswerRepository {
    /// 新しいリポジトリインスタンスを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AnswerRepository for PostgresAnswerRepository {
    #[tracing::instrument(skip_all, level = "debug", fields(question_id = %new_answer.question_id))]
    async fn insert(&self, new_answer: &NewAnswer) -> Result<Answer, InfraError> {
        let mut tx = self.pool.begin().await?;

        // コミットまで親の削除をブロックする
        let parent = sqlx::query_scalar::<_, i64>(
            "SELECT id FROM questions WHERE id = $1 FOR KEY SHARE",
        )
        .bind(new_answer.question_id.as_i64())
        .fetch_optional(&mut *tx)
        .await?;

        if parent.is_none() {
            return Err(InfraError::question_not_found(new_answer.question_id));
        }

        let row = sqlx::query_as::<_, AnswerRow>(
            r#"
            INSERT INTO answers (question_id, user_id, text)
            VALUES ($1, $2, $3)
            RETURNING id, question_id, user_id, text, created_at
            "#,
        )
        .bind(new_answer.question_id.as_i64())
        .bind(new_answer.user_id.as_str())
        .bind(new_answer.text.as_str())
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Answer::try_from(row)
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn find_by_id(&self, id: AnswerId) -> Result<Answer, InfraError> {
        let row = sqlx::query_as::<_, AnswerRow>(
            r#"
            SELECT id, question_id, user_id, text, created_at
            FROM answers
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| InfraError::answer_not_found(id))?;

        Answer::try_from(row)
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn delete(&self, id: AnswerId) -> Result<(), InfraError> {
        let result = sqlx::query("DELETE FROM answers WHERE id = $1")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await?;

        tracing::debug!(rows_affected = result.rows_affected(), "回答を削除しました");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// トレイトオブジェクトとして使用できることを確認
    #[test]
    fn test_トレイトはsendとsyncを実装している() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Box<dyn AnswerRepository>>();
    }

    #[test]
    fn test_空のuser_idを持つ行はunexpectedになる() {
        let row = AnswerRow {
            id:          1,
            question_id: 1,
            user_id:     String::new(),
            text:        "Yes".to_string(),
            created_at:  DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
        };

        let err = Answer::try_from(row).unwrap_err();

        assert!(matches!(
            err.kind(),
            crate::error::InfraErrorKind::Unexpected(_)
        ));
    }
}
