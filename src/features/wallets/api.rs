/// ウォレット・取引APIモジュール
///
/// ウォレットと取引リソースへの型付きリクエスト関数。
/// バリデーションはフォーム層の責務で、この層では行いません。
use crate::features::wallets::models::{
    CreateTransactionRequest, CreateWalletRequest, Transaction, UpdateTransactionRequest,
    UpdateWalletRequest, Wallet,
};
use crate::shared::api_client::ApiClient;
use crate::shared::errors::AppResult;
use log::info;
use std::sync::Arc;

/// ウォレットAPIクライアント
#[derive(Clone)]
pub struct WalletApi {
    client: Arc<ApiClient>,
}

impl WalletApi {
    /// 新しいWalletApiを作成する
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// 現在のユーザーのウォレット一覧を取得する
    pub async fn get_wallets(&self) -> AppResult<Vec<Wallet>> {
        let wallets: Vec<Wallet> = self.client.get("/api/wallets").await?;
        info!("ウォレット一覧取得成功: count={}", wallets.len());
        Ok(wallets)
    }

    /// ウォレットを取得する
    pub async fn get_wallet(&self, id: &str) -> AppResult<Wallet> {
        self.client.get(&format!("/api/wallets/{id}")).await
    }

    /// ウォレットを作成する
    pub async fn create_wallet(&self, request: &CreateWalletRequest) -> AppResult<Wallet> {
        let wallet: Wallet = self.client.post("/api/wallets", request).await?;
        info!("ウォレット作成成功: wallet_id={}", wallet.id);
        Ok(wallet)
    }

    /// ウォレットを更新する
    pub async fn update_wallet(
        &self,
        id: &str,
        request: &UpdateWalletRequest,
    ) -> AppResult<Wallet> {
        self.client
            .put(&format!("/api/wallets/{id}"), request)
            .await
    }

    /// ウォレットを削除する
    pub async fn delete_wallet(&self, id: &str) -> AppResult<()> {
        self.client.delete(&format!("/api/wallets/{id}")).await
    }

    /// ウォレットの取引一覧を取得する
    pub async fn get_transactions(&self, wallet_id: &str) -> AppResult<Vec<Transaction>> {
        let transactions: Vec<Transaction> = self
            .client
            .get(&format!("/api/wallets/{wallet_id}/transactions"))
            .await?;
        info!(
            "取引一覧取得成功: wallet_id={wallet_id}, count={}",
            transactions.len()
        );
        Ok(transactions)
    }

    /// 取引を作成する
    pub async fn create_transaction(
        &self,
        request: &CreateTransactionRequest,
    ) -> AppResult<Transaction> {
        let transaction: Transaction = self.client.post("/api/transactions", request).await?;
        info!("取引作成成功: transaction_id={}", transaction.id);
        Ok(transaction)
    }

    /// 取引を更新する
    pub async fn update_transaction(
        &self,
        id: &str,
        request: &UpdateTransactionRequest,
    ) -> AppResult<Transaction> {
        self.client
            .put(&format!("/api/transactions/{id}"), request)
            .await
    }

    /// 取引を削除する
    pub async fn delete_transaction(&self, id: &str) -> AppResult<()> {
        self.client.delete(&format!("/api/transactions/{id}")).await
    }
}
