//! # 回答
//!
//! 質問に対する回答エンティティ。
//!
//! 回答は必ず既存の質問に紐づいて作成される。親の存在確認は永続化層が行う。
//! 作成後は不変で、親の質問とは独立に削除できる。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::question::QuestionId;

/// 回答者 ID の最大文字数（`answers.user_id` は VARCHAR(64)）
pub const USER_ID_MAX_LENGTH: usize = 64;

define_serial_id! {
    /// 回答 ID
    pub struct AnswerId;
}

define_validated_string! {
    /// 回答者 ID
    ///
    /// 認証基盤とは連携しない自由形式の短い文字列。
    pub struct UserId {
        label: "user_id",
        max_length: USER_ID_MAX_LENGTH,
    }
}

define_validated_string! {
    /// 回答本文
    pub struct AnswerText {
        label: "text",
    }
}

/// 回答エンティティ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub id:          AnswerId,
    pub question_id: QuestionId,
    pub user_id:     UserId,
    pub text:        AnswerText,
    pub created_at:  DateTime<Utc>,
}

/// 新規回答の作成パラメータ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAnswer {
    pub question_id: QuestionId,
    pub user_id:     UserId,
    pub text:        AnswerText,
}
