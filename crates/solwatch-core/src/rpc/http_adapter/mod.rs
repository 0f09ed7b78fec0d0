//! Native JSON-RPC client for Solana RPC endpoints.
//!
//! Implements [`SolanaRpc`](super::SolanaRpc) over JSON-RPC using `reqwest`,
//! with a per-request timeout, immediate retries on transport failures and
//! optional request rate limiting.

mod client;
mod connection;
mod parsing;
mod protocol;

pub use client::HttpRpcClient;
pub use connection::RpcClientConfig;
