//! APIリクエスト/レスポンス型

use serde::{
    de::{self, IgnoredAny, MapAccess, Visitor},
    Deserialize, Deserializer, Serialize,
};
use std::fmt;

const USERNAME_FIELD: &str = "Username";

/// ユーザー作成リクエスト
///
/// フィールド名 `Username` は大文字小文字を区別せずに照合する
/// （`username`、`USERNAME` なども可）。未知のフィールドは無視し、
/// 同じフィールドが複数ある場合は最後の値を採用する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateUserRequest {
    /// ユーザー名
    pub username: String,
}

impl<'de> Deserialize<'de> for CreateUserRequest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CreateUserRequestVisitor;

        impl<'de> Visitor<'de> for CreateUserRequestVisitor {
            type Value = CreateUserRequest;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object with a Username field")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut username = None;
                while let Some(key) = map.next_key::<String>()? {
                    if key.eq_ignore_ascii_case(USERNAME_FIELD) {
                        username = Some(map.next_value::<String>()?);
                    } else {
                        map.next_value::<IgnoredAny>()?;
                    }
                }
                username
                    .map(|username| CreateUserRequest { username })
                    .ok_or_else(|| de::Error::missing_field(USERNAME_FIELD))
            }
        }

        deserializer.deserialize_map(CreateUserRequestVisitor)
    }
}

/// ユーザー数レスポンス
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CountResponse {
    /// 登録済みユーザー数
    pub count: usize,
}
