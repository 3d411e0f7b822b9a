//! RPC collaborator for the sync pipeline

use std::str::FromStr;

use log::debug;
use solana_client::client_error::{ClientError, ClientErrorKind};
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_client::rpc_custom_error::JSON_RPC_SERVER_ERROR_TRANSACTION_HISTORY_NOT_AVAILABLE;
use solana_client::rpc_request::RpcError;
use solana_pubkey::Pubkey;
use solana_signature::Signature;
use solana_transaction_status::UiTransactionEncoding;

use crate::errors::{LendingError, Result};
use crate::models::RawTransactionRecord;

/// The two cluster operations the pipeline consumes.
#[allow(async_fn_in_trait)]
pub trait LendingRpc {
    /// Signatures of the wallet's transactions, most recent first.
    async fn signatures_for_address(&self, wallet: &Pubkey) -> Result<Vec<Signature>>;

    /// Full record for one signature. `Ok(None)` means the node has no
    /// record, which is distinct from a transport failure.
    async fn fetch_transaction(&self, signature: &Signature) -> Result<Option<RawTransactionRecord>>;
}

/// [`LendingRpc`] over a JSON-RPC node.
pub struct RpcLendingClient {
    rpc_client: RpcClient,
}

impl RpcLendingClient {
    /// Create a new client against the given RPC URL
    pub fn new(rpc_url: &str) -> Self {
        Self {
            rpc_client: RpcClient::new(rpc_url.to_string()),
        }
    }
}

impl LendingRpc for RpcLendingClient {
    async fn signatures_for_address(&self, wallet: &Pubkey) -> Result<Vec<Signature>> {
        let statuses = self
            .rpc_client
            .get_signatures_for_address(wallet)
            .await
            .map_err(|e| LendingError::transport("list signatures", e))?;

        debug!("{} signatures on record for {}", statuses.len(), wallet);
        statuses
            .iter()
            .map(|status| {
                Signature::from_str(&status.signature)
                    .map_err(|e| LendingError::transport("parse signature", e))
            })
            .collect()
    }

    async fn fetch_transaction(&self, signature: &Signature) -> Result<Option<RawTransactionRecord>> {
        match self
            .rpc_client
            .get_transaction(signature, UiTransactionEncoding::Base64)
            .await
        {
            Ok(confirmed) => RawTransactionRecord::from_confirmed(*signature, &confirmed).map(Some),
            Err(err) if is_not_found(&err) => {
                debug!("no record for {} on this node", signature);
                Ok(None)
            }
            Err(err) => Err(LendingError::transport("fetch transaction", err)),
        }
    }
}

/// The node answers an unknown signature either with a `null` result, which
/// surfaces as a deserialization error, or with the history-not-available
/// custom code.
fn is_not_found(err: &ClientError) -> bool {
    match &err.kind {
        ClientErrorKind::SerdeJson(_) => true,
        ClientErrorKind::RpcError(RpcError::RpcResponseError { code, .. }) => {
            *code == JSON_RPC_SERVER_ERROR_TRANSACTION_HISTORY_NOT_AVAILABLE
        }
        _ => false,
    }
}
