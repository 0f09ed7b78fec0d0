use clap::Parser;

/// solwatch: HTTP API for Solana wallet balances and transaction history.
#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    /// Solana JSON-RPC endpoint URL.
    #[arg(
        long,
        default_value = "https://api.mainnet-beta.solana.com",
        env = "SOLANA_RPC_URL"
    )]
    pub rpc_url: String,

    /// Timeout for each RPC attempt, in seconds.
    #[arg(long, default_value = "30", env = "API_TIMEOUT")]
    pub api_timeout: u64,

    /// Total attempts per RPC call on timeouts and transport failures.
    #[arg(long, default_value = "3", env = "MAX_RETRIES")]
    pub max_retries: u32,

    /// Cap on outbound RPC requests per second (unlimited if omitted).
    #[arg(long, env = "RPC_REQUESTS_PER_SECOND")]
    pub rpc_requests_per_second: Option<u32>,

    /// Transaction detail fetches kept in flight per history request.
    /// 1 fetches strictly one at a time.
    #[arg(long, default_value = "1", env = "DETAIL_CONCURRENCY")]
    pub detail_concurrency: usize,

    /// Address to bind the web server to.
    #[arg(long, default_value = "127.0.0.1", env = "BIND")]
    pub bind: String,

    /// Port to listen on.
    #[arg(long, default_value = "8000", env = "PORT")]
    pub port: u16,
}
