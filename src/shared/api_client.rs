/// 汎用APIクライアント
///
/// APIサーバーとの通信を行う汎用的なクライアント。
/// 認証、ウォレット、OCR、その他のAPIエンドポイントで使用可能。
///
/// すべてのリクエストは保存済みアクセストークンをBearerとして付与し、
/// 401を受けた場合はリフレッシュトークンで1回だけトークンを更新して
/// 元のリクエストを再送します（リフレッシュ自体は対象外）。
use crate::shared::config::environment::ApiConfig;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::token_storage::TokenStorage;
use log::{debug, info, warn};
use reqwest::{Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::time::Duration;

/// APIクライアント設定
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
}

impl Default for ApiClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            timeout_seconds: 10,
        }
    }
}

impl ApiClientConfig {
    /// 環境設定からAPIクライアント設定を作成
    pub fn from_env() -> Self {
        let api_config = ApiConfig::from_env();
        Self {
            base_url: api_config.base_url,
            timeout_seconds: api_config.timeout_seconds,
        }
    }
}

/// APIサーバーからのエラーレスポンスボディ
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// APIサーバーからのヘルスチェックレスポンス
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthData {
    pub status: String,
    pub message: String,
    pub version: String,
    pub port: String,
}

/// トークンリフレッシュのレスポンス
#[derive(Debug, Serialize, Deserialize)]
struct RefreshResponse {
    access_token: String,
}

/// 汎用APIクライアント
pub struct ApiClient {
    client: Client,
    config: ApiClientConfig,
    tokens: TokenStorage,
}

impl ApiClient {
    /// 環境変数の設定でAPIクライアントを作成
    pub fn new(tokens: TokenStorage) -> AppResult<Self> {
        let config = ApiClientConfig::from_env();
        Self::new_with_config(config, tokens)
    }

    /// 設定を指定してAPIクライアントを作成
    pub fn new_with_config(config: ApiClientConfig, tokens: TokenStorage) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| AppError::configuration(format!("HTTPクライアント初期化失敗: {e}")))?;

        Ok(Self {
            client,
            config,
            tokens,
        })
    }

    /// トークンストレージへの参照を取得
    pub fn tokens(&self) -> &TokenStorage {
        &self.tokens
    }

    /// APIサーバーのベースURLを取得
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// GETリクエストを送信
    pub async fn get<T>(&self, endpoint: &str) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        info!("GETリクエスト送信: endpoint={endpoint}");

        let response = self
            .send_with_refresh(endpoint, |client, url| Ok(client.get(url)))
            .await?;
        Self::parse_json(response).await
    }

    /// POSTリクエストを送信
    pub async fn post<B, T>(&self, endpoint: &str, body: &B) -> AppResult<T>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        info!("POSTリクエスト送信: endpoint={endpoint}");

        let response = self
            .send_with_refresh(endpoint, |client, url| Ok(client.post(url).json(body)))
            .await?;
        Self::parse_json(response).await
    }

    /// PUTリクエストを送信
    pub async fn put<B, T>(&self, endpoint: &str, body: &B) -> AppResult<T>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        info!("PUTリクエスト送信: endpoint={endpoint}");

        let response = self
            .send_with_refresh(endpoint, |client, url| Ok(client.put(url).json(body)))
            .await?;
        Self::parse_json(response).await
    }

    /// DELETEリクエストを送信
    ///
    /// レスポンスボディは使用せず、成功ステータスのみ確認します。
    pub async fn delete(&self, endpoint: &str) -> AppResult<()> {
        info!("DELETEリクエスト送信: endpoint={endpoint}");

        self.send_with_refresh(endpoint, |client, url| Ok(client.delete(url)))
            .await?;
        Ok(())
    }

    /// マルチパートフォームのPOSTリクエストを送信
    ///
    /// マルチパートボディは再送時にクローンできないため、
    /// フォームはリクエストごとにクロージャで組み立て直します。
    pub async fn post_multipart<T, F>(&self, endpoint: &str, make_form: F) -> AppResult<T>
    where
        T: DeserializeOwned,
        F: Fn() -> AppResult<reqwest::multipart::Form>,
    {
        info!("マルチパートPOSTリクエスト送信: endpoint={endpoint}");

        let response = self
            .send_with_refresh(endpoint, |client, url| {
                Ok(client.post(url).multipart(make_form()?))
            })
            .await?;
        Self::parse_json(response).await
    }

    /// APIサーバーのヘルスチェック
    pub async fn health(&self) -> AppResult<HealthData> {
        debug!("APIサーバーヘルスチェック開始");
        self.get("/api/health").await
    }

    /// 401時のトークンリフレッシュ付きでリクエストを送信
    ///
    /// # リフレッシュ規則
    /// - 401を受けた未リトライのリクエストは、リフレッシュ成功後に
    ///   新しいアクセストークンで1回だけ再送する
    /// - 再送後の401はそのまま呼び出し元へ伝播する（リトライは論理リクエスト
    ///   あたり最大1回）
    /// - リフレッシュ失敗時は両方のトークンを削除し、元の401エラーを返す
    ///
    /// 同時に複数のリクエストが401を受けた場合、それぞれが独立に
    /// リフレッシュを呼びます（リクエスト間の調停は行いません）。
    async fn send_with_refresh<F>(&self, endpoint: &str, build: F) -> AppResult<Response>
    where
        F: Fn(&Client, &str) -> AppResult<reqwest::RequestBuilder>,
    {
        let url = format!("{}{endpoint}", self.config.base_url);
        let mut retried = false;

        loop {
            let mut request = build(&self.client, &url)?;

            // 保存済みアクセストークンがあればBearerとして付与
            if let Some(token) = self.tokens.get_access_token()? {
                request = request.bearer_auth(token);
            }

            let response = request.send().await.map_err(|e| {
                AppError::ExternalService(format!("APIサーバーへの接続に失敗しました: {e}"))
            })?;

            let status = response.status();
            if status.is_success() {
                return Ok(response);
            }

            if status == StatusCode::UNAUTHORIZED && !retried {
                retried = true;
                let original_error = Self::error_from_response(response).await;

                match self.refresh_access_token().await {
                    Ok(()) => {
                        info!("トークンリフレッシュ成功、リクエストを再送します: endpoint={endpoint}");
                        continue;
                    }
                    Err(refresh_error) => {
                        warn!(
                            "トークンリフレッシュに失敗したため、認証トークンを削除します: {}",
                            refresh_error.details()
                        );
                        if let Err(clear_error) = self.tokens.clear_tokens() {
                            warn!("トークン削除に失敗しました: {}", clear_error.details());
                        }
                        // 元のエラーをそのまま伝播する
                        return Err(original_error);
                    }
                }
            }

            return Err(Self::error_from_response(response).await);
        }
    }

    /// リフレッシュトークンで新しいアクセストークンを取得する
    ///
    /// このリクエストはアクセストークンの代わりにリフレッシュトークンを
    /// Bearerとして送信し、401リトライの対象にはなりません。
    async fn refresh_access_token(&self) -> AppResult<()> {
        let refresh_token = self.tokens.get_refresh_token()?.ok_or_else(|| {
            AppError::unauthorized("リフレッシュトークンが保存されていません")
        })?;

        let url = format!("{}/api/auth/refresh", self.config.base_url);
        debug!("トークンリフレッシュリクエスト送信: url={url}");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&refresh_token)
            .json(&serde_json::json!({}))
            .send()
            .await
            .map_err(|e| {
                AppError::ExternalService(format!("APIサーバーへの接続に失敗しました: {e}"))
            })?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        let body: RefreshResponse = response.json().await.map_err(|e| {
            AppError::ExternalService(format!("リフレッシュレスポンスの解析エラー: {e}"))
        })?;

        self.tokens.save_access_token(&body.access_token)?;
        Ok(())
    }

    /// 成功レスポンスのボディをJSONとして解析する
    async fn parse_json<T>(response: Response) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        response
            .json()
            .await
            .map_err(|e| AppError::ExternalService(format!("レスポンス解析エラー: {e}")))
    }

    /// エラーレスポンスをAppErrorへ変換する
    ///
    /// APIサーバーは`{"error": "..."}`形式でエラーを返します。
    /// それ以外のボディの場合はステータスコードから汎用メッセージを組み立てます。
    async fn error_from_response(response: Response) -> AppError {
        let status = response.status();
        let status_code = status.as_u16();

        let response_text = response
            .text()
            .await
            .unwrap_or_else(|_| "レスポンス読み取り失敗".to_string());

        // 構造化エラーボディの解析を試行
        let message = match serde_json::from_str::<ErrorBody>(&response_text) {
            Ok(body) => {
                debug!(
                    "APIサーバーから構造化エラーレスポンスを受信: status={status_code}, message={}",
                    body.error
                );
                body.error
            }
            Err(_) => {
                let generic = match status_code {
                    400 => "リクエストの形式が正しくありません",
                    401 => "認証に失敗しました。再度ログインしてください",
                    403 => "この操作を実行する権限がありません",
                    404 => "指定されたリソースが見つかりません",
                    409 => "リソースが競合しています",
                    413 => "データサイズが制限を超えています",
                    429 => "リクエストが多すぎます。しばらく待ってから再試行してください",
                    500 => "サーバー内部エラーが発生しました",
                    502 => "APIサーバーとの通信でエラーが発生しました",
                    503 => "APIサーバーが一時的に利用できません",
                    504 => "APIサーバーからの応答がタイムアウトしました",
                    _ => "不明なエラーが発生しました",
                };

                warn!(
                    "APIサーバーから非構造化エラーレスポンス: status={status_code}, body={response_text}"
                );
                generic.to_string()
            }
        };

        match status {
            StatusCode::UNAUTHORIZED => AppError::Unauthorized(message),
            StatusCode::NOT_FOUND => AppError::NotFound(message),
            _ => AppError::ExternalService(format!(
                "APIサーバーエラー: {status_code} - {message}"
            )),
        }
    }
}
