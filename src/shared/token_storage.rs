/// トークンストレージモジュール
///
/// アクセストークンとリフレッシュトークンを、ユーザーデータディレクトリの
/// JSONファイルに固定キーで保存・取得します。
use crate::shared::errors::{AppError, AppResult};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// トークンストレージのキー定義
pub struct TokenStorageKeys;

impl TokenStorageKeys {
    /// アクセストークンのキー
    pub const ACCESS_TOKEN: &'static str = "access_token";
    /// リフレッシュトークンのキー
    pub const REFRESH_TOKEN: &'static str = "refresh_token";
}

/// トークンストレージサービス
///
/// インメモリのマップをファイルへライトスルーで永続化します。
/// プロセス内での共有を想定して`Clone`はストアを共有します。
#[derive(Clone)]
pub struct TokenStorage {
    /// ストアファイルのパス
    path: PathBuf,
    /// キーと値のマップ
    values: Arc<Mutex<BTreeMap<String, String>>>,
}

impl TokenStorage {
    /// デフォルトのストアファイルパスでTokenStorageを作成する
    pub fn new() -> AppResult<Self> {
        let base_dir = dirs::data_dir().unwrap_or_else(std::env::temp_dir);
        let path = base_dir.join("saifu-client").join("tokens.json");
        Self::new_with_path(path)
    }

    /// ストアファイルのパスを指定してTokenStorageを作成する
    ///
    /// ファイルが存在する場合は内容を読み込みます。壊れたファイルは
    /// 空の状態として扱います（起動を妨げない）。
    pub fn new_with_path<P: AsRef<Path>>(path: P) -> AppResult<Self> {
        let path = path.as_ref().to_path_buf();

        let values = if path.exists() {
            let raw = std::fs::read_to_string(&path)?;
            match serde_json::from_str::<BTreeMap<String, String>>(&raw) {
                Ok(map) => map,
                Err(e) => {
                    log::warn!(
                        "トークンストアの読み込みに失敗したため、空の状態で開始します: {e}"
                    );
                    BTreeMap::new()
                }
            }
        } else {
            BTreeMap::new()
        };

        Ok(Self {
            path,
            values: Arc::new(Mutex::new(values)),
        })
    }

    /// アクセストークンとリフレッシュトークンをまとめて保存する
    pub fn save_tokens(&self, access_token: &str, refresh_token: &str) -> AppResult<()> {
        let mut values = self.lock_values()?;
        values.insert(
            TokenStorageKeys::ACCESS_TOKEN.to_string(),
            access_token.to_string(),
        );
        values.insert(
            TokenStorageKeys::REFRESH_TOKEN.to_string(),
            refresh_token.to_string(),
        );
        self.persist(&values)?;

        log::info!("認証トークンを保存しました");
        Ok(())
    }

    /// アクセストークンのみを保存する（リフレッシュ成功時）
    pub fn save_access_token(&self, access_token: &str) -> AppResult<()> {
        let mut values = self.lock_values()?;
        values.insert(
            TokenStorageKeys::ACCESS_TOKEN.to_string(),
            access_token.to_string(),
        );
        self.persist(&values)?;

        log::debug!("アクセストークンを更新しました");
        Ok(())
    }

    /// アクセストークンを取得する
    pub fn get_access_token(&self) -> AppResult<Option<String>> {
        let values = self.lock_values()?;
        Ok(values.get(TokenStorageKeys::ACCESS_TOKEN).cloned())
    }

    /// リフレッシュトークンを取得する
    pub fn get_refresh_token(&self) -> AppResult<Option<String>> {
        let values = self.lock_values()?;
        Ok(values.get(TokenStorageKeys::REFRESH_TOKEN).cloned())
    }

    /// 両方のトークンを削除する（ログアウト時・リフレッシュ失敗時）
    ///
    /// 2つのキーを削除してから1回の書き込みで永続化するため、
    /// 呼び出し元からは片方だけが残る状態は観測されません。
    pub fn clear_tokens(&self) -> AppResult<()> {
        let mut values = self.lock_values()?;
        values.remove(TokenStorageKeys::ACCESS_TOKEN);
        values.remove(TokenStorageKeys::REFRESH_TOKEN);
        self.persist(&values)?;

        log::info!("認証トークンを削除しました");
        Ok(())
    }

    /// ストアのロックを取得する
    fn lock_values(&self) -> AppResult<std::sync::MutexGuard<'_, BTreeMap<String, String>>> {
        self.values
            .lock()
            .map_err(|_| AppError::concurrency("トークンストアのロック取得に失敗しました"))
    }

    /// 現在の内容をファイルへ書き込む
    fn persist(&self, values: &BTreeMap<String, String>) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(values)?;
        std::fs::write(&self.path, json)
            .map_err(|e| AppError::storage(format!("トークンストアの書き込みに失敗しました: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn storage_in(dir: &tempfile::TempDir) -> TokenStorage {
        TokenStorage::new_with_path(dir.path().join("tokens.json")).unwrap()
    }

    #[test]
    fn test_save_and_get_tokens() {
        let dir = tempfile::tempdir().unwrap();
        let storage = storage_in(&dir);

        // 保存前は両方ともNone
        assert_eq!(storage.get_access_token().unwrap(), None);
        assert_eq!(storage.get_refresh_token().unwrap(), None);

        storage.save_tokens("access-123", "refresh-456").unwrap();
        assert_eq!(
            storage.get_access_token().unwrap(),
            Some("access-123".to_string())
        );
        assert_eq!(
            storage.get_refresh_token().unwrap(),
            Some("refresh-456".to_string())
        );
    }

    #[test]
    fn test_save_access_token_keeps_refresh_token() {
        let dir = tempfile::tempdir().unwrap();
        let storage = storage_in(&dir);

        storage.save_tokens("old-access", "refresh-456").unwrap();
        storage.save_access_token("new-access").unwrap();

        assert_eq!(
            storage.get_access_token().unwrap(),
            Some("new-access".to_string())
        );
        assert_eq!(
            storage.get_refresh_token().unwrap(),
            Some("refresh-456".to_string())
        );
    }

    #[test]
    fn test_clear_tokens_removes_both() {
        let dir = tempfile::tempdir().unwrap();
        let storage = storage_in(&dir);

        storage.save_tokens("access-123", "refresh-456").unwrap();
        storage.clear_tokens().unwrap();

        assert_eq!(storage.get_access_token().unwrap(), None);
        assert_eq!(storage.get_refresh_token().unwrap(), None);

        // 繰り返し呼んでもエラーにならない
        storage.clear_tokens().unwrap();
        assert_eq!(storage.get_access_token().unwrap(), None);
    }

    #[test]
    fn test_tokens_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tokens.json");

        {
            let storage = TokenStorage::new_with_path(&path).unwrap();
            storage.save_tokens("access-123", "refresh-456").unwrap();
        }

        // 同じパスで開き直すと保存済みトークンが読める
        let reopened = TokenStorage::new_with_path(&path).unwrap();
        assert_eq!(
            reopened.get_access_token().unwrap(),
            Some("access-123".to_string())
        );
        assert_eq!(
            reopened.get_refresh_token().unwrap(),
            Some("refresh-456".to_string())
        );
    }

    #[test]
    fn test_corrupted_store_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tokens.json");
        std::fs::write(&path, "{ これはJSONではない").unwrap();

        let storage = TokenStorage::new_with_path(&path).unwrap();
        assert_eq!(storage.get_access_token().unwrap(), None);
    }
}
