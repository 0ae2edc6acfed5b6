//! # 質問
//!
//! クライアントが投稿する質問エンティティ。
//!
//! ## ライフサイクル
//!
//! - 作成: 本文（`text`）のみを受け取り、ID と作成日時は永続化時に採番される
//! - 更新: なし（作成後は不変）
//! - 削除: 明示的な削除。紐づく回答もすべて削除される（カスケード）
//!
//! ## 回答の読み込み
//!
//! `answers` は一覧取得時には読み込まない（`None`）。
//! 単体取得時は回答を同時に読み込む（`Some`、回答がなければ空ベクター）。
//! JSON では `None` のときフィールド自体を省略する。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::answer::Answer;

define_serial_id! {
    /// 質問 ID
    ///
    /// `questions.id`（BIGSERIAL）に対応する。挿入順に単調増加する。
    pub struct QuestionId;
}

define_validated_string! {
    /// 質問本文
    ///
    /// 空白のみの文字列は受け付けない。長さの上限はない（DB 側は TEXT）。
    pub struct QuestionText {
        label: "text",
    }
}

/// 質問エンティティ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id:         QuestionId,
    pub text:       QuestionText,
    pub created_at: DateTime<Utc>,
    /// 紐づく回答（作成順）。読み込んでいない場合は `None`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answers:    Option<Vec<Answer>>,
}

impl Question {
    /// 回答を読み込んだ状態の質問を返す
    pub fn with_answers(self, answers: Vec<Answer>) -> Self {
        Self {
            answers: Some(answers),
            ..self
        }
    }
}

/// 新規質問の作成パラメータ
///
/// ID と作成日時は永続化層で採番されるため含まない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub text: QuestionText,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::{
        DomainError,
        answer::{AnswerId, AnswerText, UserId},
    };

    fn fixed_now() -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000, 0).unwrap()
    }

    fn sample_question() -> Question {
        Question {
            id:         QuestionId::from_i64(1),
            text:       QuestionText::new("Is this a test?").unwrap(),
            created_at: fixed_now(),
            answers:    None,
        }
    }

    #[rstest]
    #[case("")]
    #[case(" ")]
    #[case("\t\n  ")]
    fn test_空白のみの本文は拒否される(#[case] input: &str) {
        let result = QuestionText::new(input);

        assert_eq!(
            result,
            Err(DomainError::Validation("text は必須です".to_string()))
        );
    }

    #[test]
    fn test_本文は入力されたまま保持される() {
        let text = QuestionText::new("  padded question  ").unwrap();

        assert_eq!(text.as_str(), "  padded question  ");
    }

    #[test]
    fn test_回答未読み込みの質問はanswersを出力しない() {
        let json = serde_json::to_value(sample_question()).unwrap();

        assert_eq!(json["id"], 1);
        assert_eq!(json["text"], "Is this a test?");
        assert!(json.get("created_at").is_some());
        assert!(json.get("answers").is_none());
    }

    #[test]
    fn test_回答読み込み済みの質問は空でもanswersを出力する() {
        let question = sample_question().with_answers(Vec::new());
        let json = serde_json::to_value(question).unwrap();

        assert_eq!(json["answers"], serde_json::json!([]));
    }

    #[test]
    fn test_with_answersで回答が設定される() {
        let answer = Answer {
            id:          AnswerId::from_i64(10),
            question_id: QuestionId::from_i64(1),
            user_id:     UserId::new("u1").unwrap(),
            text:        AnswerText::new("Yes").unwrap(),
            created_at:  fixed_now(),
        };

        let question = sample_question().with_answers(vec![answer.clone()]);

        assert_eq!(question.answers, Some(vec![answer]));
    }
}
