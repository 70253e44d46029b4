use thiserror::Error;

/// アプリケーション全体で使用される統一エラー型
#[derive(Debug, Error)]
pub enum AppError {
    /// バリデーション関連のエラー
    #[error("バリデーションエラー: {0}")]
    Validation(String),

    /// リソースが見つからない場合のエラー
    #[error("リソースが見つかりません: {0}")]
    NotFound(String),

    /// 認証関連のエラー（401）
    #[error("認証エラー: {0}")]
    Unauthorized(String),

    /// APIサーバー連携でのエラー
    #[error("外部サービスエラー: {0}")]
    ExternalService(String),

    /// 設定関連のエラー
    #[error("設定エラー: {0}")]
    Configuration(String),

    /// トークンストレージ関連のエラー
    #[error("ストレージエラー: {0}")]
    Storage(String),

    /// 並行処理関連のエラー
    #[error("並行処理エラー: {0}")]
    Concurrency(String),

    /// I/O関連のエラー
    #[error("I/Oエラー: {0}")]
    Io(#[from] std::io::Error),

    /// JSON解析エラー
    #[error("JSON解析エラー: {0}")]
    Json(#[from] serde_json::Error),
}

/// エラーの重要度を表す列挙型
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ErrorSeverity {
    /// 低重要度（ユーザー入力エラーなど）
    Low,
    /// 中重要度（外部サービス一時的エラーなど）
    Medium,
    /// 高重要度（設定エラーなど）
    High,
    /// 最重要（認証エラーなど）
    Critical,
}

impl AppError {
    /// ユーザーに表示するためのフレンドリーなメッセージを取得
    pub fn user_message(&self) -> &str {
        match self {
            AppError::Validation(msg) => msg,
            AppError::NotFound(msg) => msg,
            AppError::Unauthorized(_) => "認証に失敗しました。再度ログインしてください",
            AppError::ExternalService(_) => "APIサーバーとの通信でエラーが発生しました",
            AppError::Configuration(_) => "設定エラーが発生しました",
            AppError::Storage(_) => "トークンの保存・読み込みでエラーが発生しました",
            AppError::Concurrency(_) => "並行処理でエラーが発生しました",
            AppError::Io(_) => "ファイル操作でエラーが発生しました",
            AppError::Json(_) => "データ形式の解析でエラーが発生しました",
        }
    }

    /// エラーの詳細情報を取得（ログ出力用）
    pub fn details(&self) -> String {
        format!("{self}")
    }

    /// エラーの重要度を取得
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AppError::Validation(_) => ErrorSeverity::Low,
            AppError::NotFound(_) => ErrorSeverity::Low,
            AppError::Unauthorized(_) => ErrorSeverity::Critical,
            AppError::ExternalService(_) => ErrorSeverity::Medium,
            AppError::Configuration(_) => ErrorSeverity::High,
            AppError::Storage(_) => ErrorSeverity::Medium,
            AppError::Concurrency(_) => ErrorSeverity::High,
            AppError::Io(_) => ErrorSeverity::Medium,
            AppError::Json(_) => ErrorSeverity::Medium,
        }
    }

    /// バリデーションエラーを作成するヘルパー関数
    pub fn validation<S: Into<String>>(message: S) -> Self {
        AppError::Validation(message.into())
    }

    /// リソース未発見エラーを作成するヘルパー関数
    pub fn not_found<S: Into<String>>(resource: S) -> Self {
        AppError::NotFound(format!("{}が見つかりません", resource.into()))
    }

    /// 認証エラーを作成するヘルパー関数
    pub fn unauthorized<S: Into<String>>(message: S) -> Self {
        AppError::Unauthorized(message.into())
    }

    /// 外部サービスエラーを作成するヘルパー関数
    pub fn external_service<S: Into<String>>(service: S, message: S) -> Self {
        AppError::ExternalService(format!("{}: {}", service.into(), message.into()))
    }

    /// 設定エラーを作成するヘルパー関数
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// ストレージエラーを作成するヘルパー関数
    pub fn storage<S: Into<String>>(message: S) -> Self {
        AppError::Storage(message.into())
    }

    /// 並行処理エラーを作成するヘルパー関数
    pub fn concurrency<S: Into<String>>(message: S) -> Self {
        AppError::Concurrency(message.into())
    }
}

/// AppErrorからStringへの変換（呼び出し元でのメッセージ表示のため）
impl From<AppError> for String {
    fn from(error: AppError) -> Self {
        error.user_message().to_string()
    }
}

/// Result型のエイリアス（アプリケーション全体で使用）
pub type AppResult<T> = Result<T, AppError>;
