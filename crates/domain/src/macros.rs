/// DB の連番（BIGSERIAL）をラップする ID 型を定義する宣言型マクロ
///
/// 以下のボイラープレートを一括生成する:
/// - Newtype 構造体（`i64` をラップ）
/// - `derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display)`
/// - `from_i64()`: DB から取得した値から復元
/// - `as_i64()`: 内部の値を取得
///
/// JSON 上は数値そのもの（`"id": 1`）としてシリアライズされる。
///
/// # 使用例
///
/// ```rust
/// use qa_domain::question::QuestionId;
///
/// let id = QuestionId::from_i64(42);
/// assert_eq!(id.as_i64(), 42);
/// assert_eq!(id.to_string(), "42");
/// ```
macro_rules! define_serial_id {
    (
        $(#[$meta:meta])*
        $vis:vis struct $Name:ident;
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
            serde::Serialize, serde::Deserialize,
            derive_more::Display,
        )]
        #[serde(transparent)]
        #[display("{_0}")]
        $vis struct $Name(i64);

        impl $Name {
            /// DB の値から ID を作成する
            pub fn from_i64(value: i64) -> Self {
                Self(value)
            }

            /// 内部の値を取得する
            pub fn as_i64(&self) -> i64 {
                self.0
            }
        }
    };
}

/// バリデーション付き String Newtype を定義する宣言型マクロ
///
/// 以下のボイラープレートを一括生成する:
/// - Newtype 構造体（`String` をラップ、serde transparent）
/// - `new()`: 前後の空白を除いて空なら `DomainError::Validation`
///   （`max_length` 指定時は文字数上限もチェック）
/// - `as_str()`, `Display`
///
/// 値そのものは trim せず、入力されたまま保持する。
/// 空白のみの入力を拒否するためだけに trim 結果を使う。
///
/// # 引数
///
/// - `label`: エラーメッセージに使うラベル（例: `"text"`）
/// - `max_length`: （任意）最大文字数（`chars().count()` でカウント）
///
/// # 使用例
///
/// ```rust
/// use qa_domain::question::QuestionText;
///
/// assert!(QuestionText::new("Is this a test?").is_ok());
/// assert!(QuestionText::new("   ").is_err());
/// ```
macro_rules! define_validated_string {
    (
        $(#[$meta:meta])*
        $vis:vis struct $Name:ident {
            label: $label:expr
            $(, max_length: $max_length:expr)? $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, PartialEq, Eq,
            serde::Serialize, serde::Deserialize,
        )]
        #[serde(transparent)]
        $vis struct $Name(String);

        impl $Name {
            pub fn new(value: impl Into<String>) -> Result<Self, $crate::DomainError> {
                let value = value.into();

                if value.trim().is_empty() {
                    return Err($crate::DomainError::Validation(format!(
                        "{} は必須です",
                        $label
                    )));
                }

                $(
                    if value.chars().count() > $max_length {
                        return Err($crate::DomainError::Validation(format!(
                            "{} は {} 文字以内である必要があります",
                            $label, $max_length
                        )));
                    }
                )?

                Ok(Self(value))
            }

            /// 文字列参照を取得する
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $Name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}
