/// 認証セッション状態
///
/// 現在のユーザーを保持し、ログイン・登録・ログアウトと起動時の
/// セッション確認を提供します。グローバルな状態は持たず、APIクライアントを
/// コンストラクタで受け取ります。
use crate::features::auth::api::AuthApi;
use crate::features::auth::models::{LoginRequest, RegisterRequest, User};
use crate::shared::api_client::ApiClient;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::{validate_email, validate_required};
use log::{debug, info, warn};
use std::sync::{Arc, Mutex};

/// 認証セッション
pub struct Session {
    client: Arc<ApiClient>,
    auth_api: AuthApi,
    /// 現在のユーザー（プロフィール取得済みの場合のみSome）
    current_user: Mutex<Option<User>>,
}

impl Session {
    /// 新しいSessionを作成する
    pub fn new(client: Arc<ApiClient>) -> Self {
        let auth_api = AuthApi::new(Arc::clone(&client));
        Self {
            client,
            auth_api,
            current_user: Mutex::new(None),
        }
    }

    /// 起動時のセッション確認
    ///
    /// 保存済みトークンがあれば現在のユーザープロフィールを取得します。
    /// 取得に失敗した場合はトークンを削除し、未認証のままにします。
    /// この関数はエラーを返しません（必ず完了します）。
    pub async fn check_session(&self) {
        let has_token = match self.client.tokens().get_access_token() {
            Ok(token) => token.is_some(),
            Err(e) => {
                warn!("トークンの読み込みに失敗しました: {}", e.details());
                false
            }
        };

        if !has_token {
            debug!("保存済みトークンがないため、未認証で開始します");
            return;
        }

        match self.auth_api.me().await {
            Ok(response) => {
                info!("セッションを復元しました: user_id={}", response.user.id);
                self.set_user(Some(response.user));
            }
            Err(e) => {
                warn!(
                    "セッション確認に失敗したため、認証トークンを削除します: {}",
                    e.details()
                );
                if let Err(clear_error) = self.client.tokens().clear_tokens() {
                    warn!("トークン削除に失敗しました: {}", clear_error.details());
                }
            }
        }
    }

    /// ログインする
    ///
    /// 成功時は両方のトークンを保存し、現在のユーザーを設定します。
    /// 失敗時は状態を変更せず、エラーを呼び出し元へ返します。
    pub async fn login(&self, email: &str, password: &str) -> AppResult<User> {
        // ネットワーク呼び出しの前にフォーム入力を検証する
        validate_email(email)?;
        validate_required(password, "パスワード")?;

        let request = LoginRequest {
            email: email.trim().to_string(),
            password: password.to_string(),
        };

        let response = self.auth_api.login(&request).await?;
        self.client
            .tokens()
            .save_tokens(&response.access_token, &response.refresh_token)?;
        self.set_user(Some(response.user.clone()));

        Ok(response.user)
    }

    /// ユーザーを登録する
    ///
    /// 契約はログインと同じで、登録エンドポイントを使用します。
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        name: Option<&str>,
    ) -> AppResult<User> {
        validate_email(email)?;
        validate_required(password, "パスワード")?;

        let request = RegisterRequest {
            email: email.trim().to_string(),
            password: password.to_string(),
            name: name.map(|n| n.to_string()),
        };

        let response = self.auth_api.register(&request).await?;
        self.client
            .tokens()
            .save_tokens(&response.access_token, &response.refresh_token)?;
        self.set_user(Some(response.user.clone()));

        Ok(response.user)
    }

    /// ログアウトする
    ///
    /// 保存済みトークンとメモリ上のユーザーを同期的に削除します。
    /// 失敗せず、繰り返し呼んでも安全です。
    pub fn logout(&self) {
        if let Err(e) = self.client.tokens().clear_tokens() {
            warn!("ログアウト時のトークン削除に失敗しました: {}", e.details());
        }
        self.set_user(None);
        info!("ログアウトしました");
    }

    /// 認証済みかどうかを判定
    ///
    /// トークンの有無ではなく、このセッションでユーザープロフィールを
    /// 取得できたかどうかで判定します。
    pub fn is_authenticated(&self) -> bool {
        self.current_user
            .lock()
            .map(|user| user.is_some())
            .unwrap_or(false)
    }

    /// 現在のユーザーを取得する
    pub fn current_user(&self) -> Option<User> {
        self.current_user.lock().map(|user| user.clone()).unwrap_or(None)
    }

    /// APIクライアントへの参照を取得
    pub fn client(&self) -> &Arc<ApiClient> {
        &self.client
    }

    /// 現在のユーザーを設定する
    fn set_user(&self, user: Option<User>) {
        match self.current_user.lock() {
            Ok(mut guard) => *guard = user,
            Err(_) => warn!("{}", AppError::concurrency("ユーザー状態のロック取得に失敗しました").details()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api_client::ApiClientConfig;
    use crate::shared::token_storage::TokenStorage;

    fn session_with_tempdir(dir: &tempfile::TempDir) -> Session {
        let tokens = TokenStorage::new_with_path(dir.path().join("tokens.json")).unwrap();
        let client =
            ApiClient::new_with_config(ApiClientConfig::default(), tokens).unwrap();
        Session::new(Arc::new(client))
    }

    #[tokio::test]
    async fn test_login_validates_before_network_call() {
        // バリデーションエラーはネットワーク到達前に返る
        // （存在しないサーバーに対して即座にValidationエラーになることを確認）
        let dir = tempfile::tempdir().unwrap();
        let session = session_with_tempdir(&dir);

        let err = session.login("", "secret").await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        let err = session.login("taroexample.com", "secret").await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        let err = session.login("taro@example.com", "").await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_register_validates_before_network_call() {
        let dir = tempfile::tempdir().unwrap();
        let session = session_with_tempdir(&dir);

        let err = session
            .register("not-an-email", "secret", Some("Taro"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_unauthenticated_by_default() {
        let dir = tempfile::tempdir().unwrap();
        let session = session_with_tempdir(&dir);

        assert!(!session.is_authenticated());
        assert_eq!(session.current_user(), None);
    }

    #[test]
    fn test_logout_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let session = session_with_tempdir(&dir);

        session.logout();
        session.logout();
        assert!(!session.is_authenticated());
        assert_eq!(session.client().tokens().get_access_token().unwrap(), None);
    }
}
