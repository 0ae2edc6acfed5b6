//! # QuestionRepository
//!
//! 質問の永続化を担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **一覧は回答を読み込まない**: `answers` は `None` のまま返す
//! - **単体取得は回答を同時に読み込む**: 質問と回答を同一スナップショット
//!   （REPEATABLE READ の読み取り専用トランザクション）から読む
//! - **カスケード削除**: 回答の削除は外部キー制約（ON DELETE CASCADE）に任せる
//! - **冪等な削除**: 存在しない ID の削除はエラーにしない

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use qa_domain::{
    answer::Answer,
    question::{NewQuestion, Question, QuestionId, QuestionText},
};
use sqlx::PgPool;

use super::answer_repository::AnswerRow;
use crate::error::InfraError;

/// 質問リポジトリトレイト
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// 質問一覧を取得する（ID 昇順、回答は読み込まない）
    async fn list(&self) -> Result<Vec<Question>, InfraError>;

    /// 新規質問を作成し、採番後の質問を返す
    async fn insert(&self, new_question: &NewQuestion) -> Result<Question, InfraError>;

    /// 回答付きで質問を取得する
    ///
    /// 存在しない場合は `QuestionNotFound` を返す。
    async fn find_with_answers(&self, id: QuestionId) -> Result<Question, InfraError>;

    /// 質問を削除する（紐づく回答も削除される。存在しない ID は何もしない）
    async fn delete(&self, id: QuestionId) -> Result<(), InfraError>;
}

/// DB の questions テーブルの行を表す中間構造体
#[derive(Debug, sqlx::FromRow)]
struct QuestionRow {
    id:         i64,
    text:       String,
    created_at: DateTime<Utc>,
}

impl TryFrom<QuestionRow> for Question {
    type Error = InfraError;

    fn try_from(row: QuestionRow) -> Result<Self, Self::Error> {
        Ok(Question {
            id:         QuestionId::from_i64(row.id),
            text:       QuestionText::new(row.text)?,
            created_at: row.created_at,
            answers:    None,
        })
    }
}

/// PostgreSQL 実装の QuestionRepository
#[derive(Debug, Clone)]
pub struct PostgresQuestionRepository {
    pool: PgPool,
}

impl PostgresQuestionRepository {
    /// 新しいリポジトリインスタンスを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QuestionRepository for PostgresQuestionRepository {
    #[tracing::instrument(skip_all, level = "debug")]
    async fn list(&self) -> Result<Vec<Question>, InfraError> {
        let rows = sqlx::query_as::<_, QuestionRow>(
            r#"
            SELECT id, text, created_at
            FROM questions
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Question::try_from).collect()
    }

    #[tracing::instrument(skip_all, level = "debug")]
    async fn insert(&self, new_question: &NewQuestion) -> Result<Question, InfraError> {
        let row = sqlx::query_as::<_, QuestionRow>(
            r#"
            INSERT INTO questions (text)
            VALUES ($1)
            RETURNING id, text, created_at
            "#,
        )
        .bind(new_question.text.as_str())
        .fetch_one(&self.pool)
        .await?;

        Question::try_from(row)
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn find_with_answers(&self, id: QuestionId) -> Result<Question, InfraError> {
        let mut tx = self.pool.begin().await?;
        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY")
            .execute(&mut *tx)
            .await?;

        let row = sqlx::query_as::<_, QuestionRow>(
            r#"
            SELECT id, text, created_at
            FROM questions
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| InfraError::question_not_found(id))?;

        let answer_rows = sqlx::query_as::<_, AnswerRow>(
            r#"
            SELECT id, question_id, user_id, text, created_at
            FROM answers
            WHERE question_id = $1
            ORDER BY id ASC
            "#,
        )
        .bind(id.as_i64())
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;

        let answers = answer_rows
            .into_iter()
            .map(Answer::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Question::try_from(row)?.with_answers(answers))
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn delete(&self, id: QuestionId) -> Result<(), InfraError> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await?;

        tracing::debug!(rows_affected = result.rows_affected(), "質問を削除しました");
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
        assert_send_sync::<Box<dyn QuestionRepository>>();
    }

    #[test]
    fn test_行から変換した質問は回答未読み込みになる() {
        let row = QuestionRow {
            id:         5,
            text:       "Is this a test?".to_string(),
            created_at: DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
        };

        let question = Question::try_from(row).unwrap();

        assert_eq!(question.id, QuestionId::from_i64(5));
        assert_eq!(question.text.as_str(), "Is this a test?");
        assert!(question.answers.is_none());
    }
}
