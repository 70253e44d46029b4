/// ウォレット機能モジュール
///
/// ウォレットと取引のCRUD操作を提供します。取引は手動作成のほか、
/// OCRジョブからの作成にも対応します（由来フィールド付き）。
pub mod api;
pub mod models;

pub use api::WalletApi;
pub use models::{
    CreateTransactionRequest, CreateWalletRequest, Transaction, UpdateTransactionRequest,
    UpdateWalletRequest, Wallet, WalletMember, WalletType,
};
