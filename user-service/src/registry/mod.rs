//! ユーザー登録管理
//!
//! ユーザープロファイルをメモリ内で管理する。再起動で内容は失われる。

use crate::common::{
    error::{ServiceError, ServiceResult},
    types::UserProfile,
};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

// \w はASCIIの単語文字に限定する
static USERNAME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z][A-Za-z0-9_-]{1,31}$").expect("username pattern must compile")
});

/// ユーザー名が許可パターンに一致するか判定する
///
/// 先頭は英字、続けて英数字・`_`・`-` を1〜31文字。レジストリ自体は検証しないため、
/// ルーティング層で呼び出すこと。
pub fn is_valid_username(username: &str) -> bool {
    USERNAME_PATTERN.is_match(username)
}

/// ユーザーレジストリ
///
/// クローンは同じマップを共有する。全操作は単一のロックを操作の間だけ保持する。
#[derive(Clone, Debug, Default)]
pub struct UserHolder {
    users: Arc<RwLock<HashMap<String, UserProfile>>>,
}

impl UserHolder {
    /// 新しいレジストリを作成
    pub fn new() -> Self {
        Self::default()
    }

    /// ユーザーを追加
    ///
    /// 同名のユーザーが既に存在する場合は何も変更せず `Conflict` を返す。
    pub async fn add(&self, username: &str) -> ServiceResult<UserProfile> {
        let mut users = self.users.write().await;

        if users.contains_key(username) {
            return Err(ServiceError::Conflict(username.to_string()));
        }

        let profile = UserProfile::new(username);
        users.insert(profile.username.clone(), profile.clone());

        Ok(profile)
    }

    /// ユーザーを取得
    pub async fn get(&self, username: &str) -> ServiceResult<UserProfile> {
        let users = self.users.read().await;
        users
            .get(username)
            .cloned()
            .ok_or_else(|| ServiceError::NotFound(username.to_string()))
    }

    /// 全ユーザーのスナップショットを取得（順序不定）
    pub async fn list(&self) -> Vec<UserProfile> {
        let users = self.users.read().await;
        users.values().cloned().collect()
    }

    /// 登録済みユーザー数
    pub async fn count(&self) -> usize {
        self.users.read().await.len()
    }

    /// ユーザーを削除し、削除したかどうかを返す
    pub async fn delete(&self, username: &str) -> bool {
        self.users.write().await.remove(username).is_some()
    }
}
