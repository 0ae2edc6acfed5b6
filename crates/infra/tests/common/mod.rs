//! テスト共通フィクスチャ
//!
//! DB を使用する統合テストで共通利用するエンティティ生成ヘルパー。

// 各テストファイルが独立したクレートとしてコンパイルされるため、
// 使用しない関数に dead_code 警告が出る。モジュール全体で抑制する。
#![allow(dead_code)]

use qa_domain::{
    answer::{AnswerText, NewAnswer, UserId},
    question::{NewQuestion, Question, QuestionId, QuestionText},
};
use qa_infra::repository::{PostgresQuestionRepository, QuestionRepository};
use sqlx::PgPool;

/// 本文を指定して NewQuestion を作成
pub fn new_question(text: &str) -> NewQuestion {
    NewQuestion {
        text: QuestionText::new(text).unwrap(),
    }
}

/// 質問 ID・回答者・本文を指定して NewAnswer を作成
pub fn new_answer(question_id: QuestionId, user_id: &str, text: &str) -> NewAnswer {
    NewAnswer {
        question_id,
        user_id: UserId::new(user_id).unwrap(),
        text: AnswerText::new(text).unwrap(),
    }
}

/// 質問を 1 件挿入して返す
pub async fn insert_question(pool: &PgPool, text: &str) -> Question {
    PostgresQuestionRepository::new(pool.clone())
        .insert(&new_question(text))
        .await
        .expect("質問の挿入に失敗")
}
