//! # テスト用インメモリリポジトリ
//!
//! ハンドラテストで使用するインメモリ実装。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! qa-infra = { workspace = true, features = ["test-utils"] }
//! ```
//!
//! 質問と回答を 1 つのストアで保持し、`QuestionRepository` と `AnswerRepository` の
//! 両方を実装する。質問の削除は紐づく回答も削除する（PostgreSQL の ON DELETE CASCADE 相当）。

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use qa_domain::{
    answer::{Answer, AnswerId, NewAnswer},
    question::{NewQuestion, Question, QuestionId},
};

use crate::{
    error::InfraError,
    repository::{AnswerRepository, QuestionRepository},
};

#[derive(Debug, Default)]
struct StoreState {
    questions:        Vec<Question>,
    answers:          Vec<Answer>,
    next_question_id: i64,
    next_answer_id:   i64,
}

// ===== InMemoryQuestionStore =====

#[derive(Debug, Clone, Default)]
pub struct InMemoryQuestionStore {
    state: Arc<Mutex<StoreState>>,
}

impl InMemoryQuestionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 保持している回答の数（カスケード削除の確認用）
    pub fn answer_count(&self) -> usize {
        self.state.lock().unwrap().answers.len()
    }
}

#[async_trait]
impl QuestionRepository for InMemoryQuestionStore {
    async fn list(&self) -> Result<Vec<Question>, InfraError> {
        let state = self.state.lock().unwrap();
        let mut questions = state.questions.clone();
        questions.sort_by_key(|q| q.id);
        Ok(questions)
    }

    async fn insert(&self, new_question: &NewQuestion) -> Result<Question, InfraError> {
        let mut state = self.state.lock().unwrap();
        state.next_question_id += 1;
        let question = Question {
            id:         QuestionId::from_i64(state.next_question_id),
            text:       new_question.text.clone(),
            created_at: Utc::now(),
            answers:    None,
        };
        state.questions.push(question.clone());
        Ok(question)
    }

    async fn find_with_answers(&self, id: QuestionId) -> Result<Question, InfraError> {
        let state = self.state.lock().unwrap();
        let question = state
            .questions
            .iter()
            .find(|q| q.id == id)
            .cloned()
            .ok_or_else(|| InfraError::question_not_found(id))?;
        let mut answers: Vec<Answer> = state
            .answers
            .iter()
            .filter(|a| a.question_id == id)
            .cloned()
            .collect();
        answers.sort_by_key(|a| a.id);
        Ok(question.with_answers(answers))
    }

    async fn delete(&self, id: QuestionId) -> Result<(), InfraError> {
        let mut state = self.state.lock().unwrap();
        state.questions.retain(|q| q.id != id);
        state.answers.retain(|a| a.question_id != id);
        Ok(())
    }
}

#[async_trait]
impl AnswerRepository for InMemoryQuestionStore {
    async fn insert(&self, new_answer: &NewAnswer) -> Result<Answer, InfraError> {
        let mut state = self.state.lock().unwrap();
        if !state.questions.iter().any(|q| q.id == new_answer.question_id) {
            return Err(InfraError::question_not_found(new_answer.question_id));
        }
        state.next_answer_id += 1;
        let answer = Answer {
            id:          AnswerId::from_i64(state.next_answer_id),
            question_id: new_answer.question_id,
            user_id:     new_answer.user_id.clone(),
            text:        new_answer.text.clone(),
            created_at:  Utc::now(),
        };
        state.answers.push(answer.clone());
        Ok(answer)
    }

    async fn find_by_id(&self, id: AnswerId) -> Result<Answer, InfraError> {
        self.state
            .lock()
            .unwrap()
            .answers
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or_else(|| InfraError::answer_not_found(id))
    }

    async fn delete(&self, id: AnswerId) -> Result<(), InfraError> {
        self.state.lock().unwrap().answers.retain(|a| a.id != id);
        Ok(())
    }
}
