//! Solana JSON-RPC abstraction layer.
//!
//! Defines the [`SolanaRpc`] trait and provides an HTTP JSON-RPC
//! implementation ([`HttpRpcClient`]) plus a test mock (`mock::MockRpc`).

mod http_adapter;
#[cfg(test)]
pub mod mock;
pub mod types;

pub use http_adapter::{HttpRpcClient, RpcClientConfig};
pub use types::{SignatureEntry, TransactionDetail, TransactionMeta};

use async_trait::async_trait;

use crate::error::CoreError;

/// Minimal trait covering the Solana RPC methods the wallet views need.
///
/// Implementations own framing, retries and reply normalization; callers
/// receive typed values only.
#[async_trait]
pub trait SolanaRpc: Send + Sync {
    /// Balance of `address` in lamports (`getBalance`).
    async fn get_balance(&self, address: &str) -> Result<u64, CoreError>;

    /// Up to `limit` recent signatures for `address`, most recent first
    /// (`getSignaturesForAddress`).
    async fn get_signatures_for_address(
        &self,
        address: &str,
        limit: usize,
    ) -> Result<Vec<SignatureEntry>, CoreError>;

    /// Transaction details for `signature` (`getTransaction`).
    /// Returns `None` if the node does not know the transaction.
    async fn get_transaction(&self, signature: &str)
        -> Result<Option<TransactionDetail>, CoreError>;
}
