use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::{CoreError, RpcError};

use super::types::{SignatureEntry, TransactionDetail};
use super::SolanaRpc;

/// A mock Solana RPC backend for testing. Returns canned replies from maps
/// populated via the builder pattern and records every method it serves.
pub struct MockRpc {
    balances: HashMap<String, u64>,
    signatures: HashMap<String, Vec<SignatureEntry>>,
    transactions: HashMap<String, TransactionDetail>,
    failing_transactions: HashSet<String>,
    unavailable: bool,
    calls: Mutex<Vec<String>>,
}

impl MockRpc {
    pub fn builder() -> MockRpcBuilder {
        MockRpcBuilder {
            balances: HashMap::new(),
            signatures: HashMap::new(),
            transactions: HashMap::new(),
            failing_transactions: HashSet::new(),
            unavailable: false,
        }
    }

    /// Method names served so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("mock call log poisoned").clone()
    }

    fn record(&self, method: &str) -> Result<(), CoreError> {
        self.calls
            .lock()
            .expect("mock call log poisoned")
            .push(method.to_owned());
        if self.unavailable {
            return Err(RpcError::ServerError {
                code: Some(-32005),
                message: "Node is behind by 42 slots".to_owned(),
            }
            .into());
        }
        Ok(())
    }
}

pub struct MockRpcBuilder {
    balances: HashMap<String, u64>,
    signatures: HashMap<String, Vec<SignatureEntry>>,
    transactions: HashMap<String, TransactionDetail>,
    failing_transactions: HashSet<String>,
    unavailable: bool,
}

impl MockRpcBuilder {
    pub fn with_balance(mut self, address: &str, lamports: u64) -> Self {
        self.balances.insert(address.to_owned(), lamports);
        self
    }

    /// Signatures for `address`, most recent first. Replies are truncated to
    /// the requested `limit` like a real node.
    pub fn with_signatures(mut self, address: &str, entries: Vec<SignatureEntry>) -> Self {
        self.signatures.insert(address.to_owned(), entries);
        self
    }

    pub fn with_transaction(mut self, signature: &str, detail: TransactionDetail) -> Self {
        self.transactions.insert(signature.to_owned(), detail);
        self
    }

    /// Make `getTransaction` fail for `signature` with a transport error.
    pub fn with_failing_transaction(mut self, signature: &str) -> Self {
        self.failing_transactions.insert(signature.to_owned());
        self
    }

    /// Make every call fail with an RPC-level error.
    pub fn unavailable(mut self) -> Self {
        self.unavailable = true;
        self
    }

    pub fn build(self) -> MockRpc {
        MockRpc {
            balances: self.balances,
            signatures: self.signatures,
            transactions: self.transactions,
            failing_transactions: self.failing_transactions,
            unavailable: self.unavailable,
            calls: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl SolanaRpc for MockRpc {
    async fn get_balance(&self, address: &str) -> Result<u64, CoreError> {
        self.record("getBalance")?;
        Ok(self.balances.get(address).copied().unwrap_or(0))
    }

    async fn get_signatures_for_address(
        &self,
        address: &str,
        limit: usize,
    ) -> Result<Vec<SignatureEntry>, CoreError> {
        self.record("getSignaturesForAddress")?;
        Ok(self
            .signatures
            .get(address)
            .map(|entries| entries.iter().take(limit).cloned().collect())
            .unwrap_or_default())
    }

    async fn get_transaction(
        &self,
        signature: &str,
    ) -> Result<Option<TransactionDetail>, CoreError> {
        self.record("getTransaction")?;
        if self.failing_transactions.contains(signature) {
            return Err(RpcError::Timeout { retries: 3 }.into());
        }
        Ok(self.transactions.get(signature).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn signatures_are_truncated_to_limit() {
        let entries = (0..5)
            .map(|i| SignatureEntry::new(format!("S{i}"), i, None))
            .collect();
        let rpc = MockRpc::builder().with_signatures("A", entries).build();

        let two = rpc.get_signatures_for_address("A", 2).await.unwrap();
        assert_eq!(two.len(), 2);
        assert_eq!(two[0].signature(), Some("S0"));
        assert!(rpc.get_signatures_for_address("B", 10).await.unwrap().is_empty());
        assert_eq!(rpc.calls().len(), 2);
    }

    #[tokio::test]
    async fn unavailable_mock_fails_every_call() {
        let rpc = MockRpc::builder().with_balance("A", 1).unavailable().build();
        let err = rpc.get_balance("A").await.unwrap_err();
        assert!(err.is_rpc());
    }
}
