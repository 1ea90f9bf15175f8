//! 共通型定義
//!
//! UserProfile等のコアデータ型

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// ユーザープロファイル
///
/// 作成後は不変。レジストリが唯一の所有者で、呼び出し側にはクローンのみを返す。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserProfile {
    /// 一意識別子（UUID v4、ハイフン区切り文字列としてシリアライズ）
    pub id: Uuid,
    /// ユーザー名（レジストリ内で一意）
    pub username: String,
}

impl UserProfile {
    /// 新しいIDを払い出してプロファイルを作成
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: username.into(),
        }
    }
}
