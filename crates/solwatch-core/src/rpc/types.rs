//! RPC-specific types that mirror the node's JSON replies.
//!
//! Only the fields the aggregator reads are modelled; everything else in the
//! node's reply is ignored during deserialization.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

// ==============================================================================
// Signatures
// ==============================================================================

/// One entry of a `getSignaturesForAddress` reply.
///
/// Fields decode leniently: a missing or mistyped field reads as absent
/// instead of failing the whole page. An entry without a signature still
/// counts towards the page length.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SignatureEntry {
    #[serde(default, deserialize_with = "lenient")]
    pub signature: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub slot: u64,
    /// Unix seconds; absent for very old or not yet finalized blocks.
    #[serde(rename = "blockTime", default, deserialize_with = "lenient")]
    pub block_time: Option<i64>,
    #[serde(default)]
    pub err: Option<serde_json::Value>,
}

impl SignatureEntry {
    pub fn new(signature: impl Into<String>, slot: u64, block_time: Option<i64>) -> Self {
        Self {
            signature: Some(signature.into()),
            slot,
            block_time,
            err: None,
        }
    }

    /// The signature, if the node sent a non-empty one.
    pub fn signature(&self) -> Option<&str> {
        self.signature.as_deref().filter(|s| !s.is_empty())
    }
}

fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

// ==============================================================================
// Transaction Detail
// ==============================================================================

/// The subset of a `getTransaction` reply used to derive fee and status.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionDetail {
    #[serde(default)]
    pub meta: Option<TransactionMeta>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionMeta {
    #[serde(default)]
    pub fee: Option<u64>,
    #[serde(default)]
    pub err: Option<serde_json::Value>,
}

impl TransactionDetail {
    /// Fee in lamports, 0 when the node omitted `meta` or `meta.fee`.
    pub fn fee(&self) -> u64 {
        self.meta.as_ref().and_then(|m| m.fee).unwrap_or(0)
    }

    pub fn err(&self) -> Option<&serde_json::Value> {
        self.meta.as_ref().and_then(|m| m.err.as_ref())
    }
}
