//! AnswerRepository 統合テスト
//!
//! 実行方法:
//! ```bash
//! cargo test -p qa-infra --test answer_repository_test
//! ```

mod common;

use common::{insert_question, new_answer};
use pretty_assertions::assert_eq;
use qa_domain::{answer::AnswerId, question::QuestionId};
use qa_infra::{
    InfraErrorKind,
    repository::{AnswerRepository, PostgresAnswerRepository},
};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../migrations")]
async fn test_insertで採番された回答が返る(pool: PgPool) {
    let question = insert_question(&pool, "Q").await;
    let sut = PostgresAnswerRepository::new(pool);

    let answer = sut.insert(&new_answer(question.id, "u1", "Yes")).await.unwrap();

    assert_eq!(answer.question_id, question.id);
    assert_eq!(answer.user_id.as_str(), "u1");
    assert_eq!(answer.text.as_str(), "Yes");
    assert_eq!(sut.find_by_id(answer.id).await.unwrap(), answer);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_存在しない質問への回答はquestion_not_foundで何も保存しない(pool: PgPool) {
    let sut = PostgresAnswerRepository::new(pool.clone());

    let err = sut
        .insert(&new_answer(QuestionId::from_i64(999), "u1", "Yes"))
        .await
        .unwrap_err();

    assert!(matches!(
        err.kind(),
        InfraErrorKind::QuestionNotFound { id } if id.as_i64() == 999
    ));
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM answers")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_user_idは64文字まで保存できる(pool: PgPool) {
    let question = insert_question(&pool, "Q").await;
    let sut = PostgresAnswerRepository::new(pool);
    let user_id = "u".repeat(64);

    let answer = sut.insert(&new_answer(question.id, &user_id, "Yes")).await.unwrap();

    assert_eq!(answer.user_id.as_str(), user_id);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_find_by_idは存在しないidでanswer_not_found(pool: PgPool) {
    let sut = PostgresAnswerRepository::new(pool);

    let err = sut.find_by_id(AnswerId::from_i64(42)).await.unwrap_err();

    assert!(matches!(err.kind(), InfraErrorKind::AnswerNotFound { .. }));
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_deleteは対象の回答のみ削除する(pool: PgPool) {
    let question = insert_question(&pool, "Q").await;
    let sut = PostgresAnswerRepository::new(pool);
    let a1 = sut.insert(&new_answer(question.id, "u1", "A1")).await.unwrap();
    let a2 = sut.insert(&new_answer(question.id, "u2", "A2")).await.unwrap();

    sut.delete(a1.id).await.unwrap();

    assert!(sut.find_by_id(a1.id).await.unwrap_err().is_not_found());
    assert_eq!(sut.find_by_id(a2.id).await.unwrap(), a2);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_deleteは存在しないidでも成功する(pool: PgPool) {
    let sut = PostgresAnswerRepository::new(pool);

    let result = sut.delete(AnswerId::from_i64(777)).await;

    assert!(result.is_ok());
}
