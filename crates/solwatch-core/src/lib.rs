pub mod address;
pub mod convert;
pub mod error;
pub mod rpc;
pub mod types;
pub mod wallet;

#[cfg(test)]
mod test_util;

pub use error::{CoreError, RpcError};
pub use types::{TransactionList, TransactionRecord, TransactionStatus, WalletSummary};
