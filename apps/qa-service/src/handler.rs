//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## 設計方針
//!
//! - 各ハンドラはサブモジュールに配置し、ここで re-export する
//! - ハンドラは薄く保つ: パス ID の解析、ボディのデコード、ドメイン型の生成、
//!   リポジトリ呼び出し、レスポンス変換のみ
//! - リクエストボディは `Content-Type` に関係なく JSON としてデコードする

pub mod answer;
pub mod fallback;
pub mod health;
pub mod question;

use std::sync::Arc;

pub use answer::{create_answer, delete_answer, get_answer};
pub use fallback::{method_not_allowed, missing_answer_id, not_found};
pub use health::{ReadinessState, health_check, readiness_check};
use qa_infra::repository::{AnswerRepository, QuestionRepository};
pub use question::{create_question, delete_question, get_question, list_questions};
use serde::de::DeserializeOwned;

use crate::error::QaError;

/// 質問・回答ハンドラの共有 State
pub struct QaState {
    pub questions: Arc<dyn QuestionRepository>,
    pub answers:   Arc<dyn AnswerRepository>,
}

/// 不正な JSON に対する detail
pub const MALFORMED_JSON_DETAIL: &str = "JSON の形式が不正です";

/// パスセグメントを ID として解析する
///
/// 10 進の非負整数のみ受け付ける（符号や空白は不可）。
/// 保存先の BIGINT に収まらない値も 400 とする。
pub(crate) fn parse_id(raw: &str) -> Result<i64, QaError> {
    let invalid = || QaError::BadRequest(format!("不正な ID です: {raw}"));

    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let value: u64 = raw.parse().map_err(|_| invalid())?;
    i64::try_from(value).map_err(|_| invalid())
}

/// リクエストボディを JSON としてデコードする
pub(crate) fn decode_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, QaError> {
    serde_json::from_slice(body).map_err(|e| {
        tracing::debug!(error = %e, "JSON のデコードに失敗しました");
        QaError::BadRequest(MALFORMED_JSON_DETAIL.to_string())
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde::Deserialize;

    use super::*;

    #[rstest]
    #[case("0", 0)]
    #[case("1", 1)]
    #[case("007", 7)]
    #[case("9223372036854775807", i64::MAX)]
    fn test_parse_idは非負整数を受け付ける(#[case] raw: &str, #[case] expected: i64) {
        assert_eq!(parse_id(raw).unwrap(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("abc")]
    #[case("-1")]
    #[case("+1")]
    #[case("1.5")]
    #[case(" 1")]
    #[case("9223372036854775808")]
    #[case("18446744073709551616")]
    fn test_parse_idは不正な値を400にする(#[case] raw: &str) {
        assert!(matches!(parse_id(raw), Err(QaError::BadRequest(_))));
    }

    #[derive(Debug, Deserialize)]
    struct Body {
        #[serde(default)]
        text: Option<String>,
    }

    #[rstest]
    #[case(b"".as_slice())]
    #[case(b"{".as_slice())]
    #[case(b"[]".as_slice())]
    #[case(br#"{"text": 5}"#.as_slice())]
    fn test_decode_jsonは不正なjsonを固定detailの400にする(#[case] body: &[u8]) {
        let result = decode_json::<Body>(body);

        assert!(matches!(
            result,
            Err(QaError::BadRequest(ref msg)) if msg == MALFORMED_JSON_DETAIL
        ));
    }

    #[test]
    fn test_decode_jsonは欠落フィールドをnoneにする() {
        let body: Body = decode_json(br#"{"other": 1}"#).unwrap();

        assert_eq!(body.text, None);
    }
}
