/// 設定モジュール
///
/// 環境変数の読み込み、実行環境の判定、ログシステムの初期化を提供します。
pub mod environment;

pub use environment::{
    get_environment, initialize_logging_system, load_environment_variables, ApiConfig,
    Environment, EnvironmentConfig, EnvVarError,
};
