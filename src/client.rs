// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Wallet client façade over the CDP platform API.
//!
//! Each public method is one independent asynchronous unit of work issuing
//! exactly one outbound HTTP request (swap execution issues two: quote,
//! then send). All client state is immutable after construction; tokens
//! and nonces are generated fresh per call, so concurrent calls share
//! nothing mutable. No retries, no deduplication: idempotency is whatever
//! the remote API guarantees, and retry policy is deliberately the
//! caller's concern.

use serde_json::{json, Value};

use crate::auth::keys::ApiSigningKey;
use crate::auth::{
    build_api_auth_token, build_wallet_auth_token, parse_signing_key, parse_wallet_secret,
    requires_wallet_auth,
};
use crate::blockchain::erc20::{to_atomic_units, transfer_call_data};
use crate::blockchain::transaction::{serialize_from_descriptor, serialize_unsigned};
use crate::blockchain::types::{BASE_MAINNET, USDC_TOKEN};
use crate::config::Credentials;
use crate::error::ClientError;
use crate::models::{
    QuoteTransaction, SendResult, SwapPrice, SwapQuote, SwapResult, TokenBalance,
};
use crate::transport::{HttpRequest, HttpTransport, Transport};

const API_HOST: &str = "api.cdp.coinbase.com";
const API_BASE_PATH: &str = "/platform/v2/evm";

/// Client for one platform-held wallet account.
///
/// Construction parses both signing keys and fails fast on bad material;
/// an unparseable credential makes every subsequent call useless.
pub struct WalletClient<T = HttpTransport> {
    api_key_id: String,
    api_key: ApiSigningKey,
    wallet_key: ApiSigningKey,
    account_address: String,
    host: String,
    transport: T,
}

impl WalletClient<HttpTransport> {
    pub fn new(credentials: Credentials) -> Result<Self, ClientError> {
        Self::with_transport(credentials, HttpTransport::new()?)
    }

    /// Construct from the `CDP_*` environment variables.
    pub fn from_env() -> Result<Self, ClientError> {
        Self::new(Credentials::from_env()?)
    }
}

impl<T: Transport> WalletClient<T> {
    /// Construct with an explicit transport. Used by tests to substitute
    /// a stub; production callers want [`WalletClient::new`].
    pub fn with_transport(credentials: Credentials, transport: T) -> Result<Self, ClientError> {
        let api_key = parse_signing_key(&credentials.api_key_secret)?;
        let wallet_key = parse_wallet_secret(&credentials.wallet_secret)?;
        Ok(Self {
            api_key_id: credentials.api_key_id,
            api_key,
            wallet_key,
            account_address: credentials.account_address,
            host: API_HOST.to_string(),
            transport,
        })
    }

    /// The platform-held account address payments are sent from.
    pub fn account_address(&self) -> &str {
        &self.account_address
    }

    /// Send `amount` USDC (human decimal units) to `recipient`.
    ///
    /// Builds the ERC-20 transfer call-data, serializes an unsigned
    /// EIP-1559 transaction and submits it for remote signing and
    /// broadcast. All failures come back inside the [`SendResult`].
    pub async fn send_stablecoin(&self, recipient: &str, amount: f64) -> SendResult {
        match self.try_send_stablecoin(recipient, amount).await {
            Ok(tx_hash) => SendResult {
                success: true,
                tx_hash: Some(tx_hash),
                error: None,
            },
            Err(e) => {
                tracing::warn!(recipient, amount, error = %e, "stablecoin send failed");
                SendResult {
                    success: false,
                    tx_hash: None,
                    error: Some(e.to_string()),
                }
            }
        }
    }

    async fn try_send_stablecoin(
        &self,
        recipient: &str,
        amount: f64,
    ) -> Result<String, ClientError> {
        let atomic = to_atomic_units(amount, USDC_TOKEN.decimals)?;
        let call_data = transfer_call_data(recipient, atomic)?;
        let raw = serialize_unsigned(BASE_MAINNET.chain_id, USDC_TOKEN.address, 0, call_data)?;
        self.submit_transaction(&raw).await
    }

    /// All token holdings of the account. Returns an empty list both when
    /// the account holds nothing and when the lookup soft-fails; failures
    /// are logged, not surfaced, since downstream payout logic treats a
    /// missing balance line as "nothing to pay".
    pub async fn get_balance(&self) -> Vec<TokenBalance> {
        match self.try_get_balance().await {
            Ok(balances) => balances,
            Err(e) => {
                tracing::warn!(error = %e, "balance lookup failed, returning empty");
                Vec::new()
            }
        }
    }

    async fn try_get_balance(&self) -> Result<Vec<TokenBalance>, ClientError> {
        let path = format!(
            "{API_BASE_PATH}/token-balances/{}/{}",
            BASE_MAINNET.name, self.account_address
        );
        let response = self.request("GET", &path, None).await?;
        let Some(entries) = response.get("balances").and_then(Value::as_array) else {
            return Ok(Vec::new());
        };
        Ok(entries.iter().filter_map(parse_balance_entry).collect())
    }

    /// Create a new platform-held account; returns its address.
    pub async fn create_account(&self) -> Result<String, ClientError> {
        let response = self
            .request("POST", &format!("{API_BASE_PATH}/accounts"), Some(&json!({})))
            .await?;
        response
            .get("address")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| {
                ClientError::ResponseShape("missing address in create-account response".to_string())
            })
    }

    /// Indicative swap pricing. Read-only; never carries wallet-auth.
    pub async fn get_swap_price(
        &self,
        sell_token: &str,
        buy_token: &str,
        sell_amount: &str,
    ) -> Result<SwapPrice, ClientError> {
        let path = format!(
            "{API_BASE_PATH}/swap/price?network={}&fromToken={}&toToken={}&fromAmount={}&taker={}",
            BASE_MAINNET.name, sell_token, buy_token, sell_amount, self.account_address
        );
        let response = self.request("GET", &path, None).await?;
        parse_swap_price(&response)
    }

    /// Firm swap quote with an executable transaction descriptor.
    pub async fn get_swap_quote(
        &self,
        sell_token: &str,
        buy_token: &str,
        sell_amount: &str,
        slippage_bps: u32,
    ) -> Result<SwapQuote, ClientError> {
        let body = json!({
            "network": BASE_MAINNET.name,
            "fromToken": sell_token,
            "toToken": buy_token,
            "fromAmount": sell_amount,
            "taker": self.account_address,
            "slippageBps": slippage_bps,
        });
        let response = self
            .request("POST", &format!("{API_BASE_PATH}/swap/quote"), Some(&body))
            .await?;
        parse_swap_quote(&response)
    }

    /// Quote and execute a swap from the platform-held account. Failures
    /// come back inside the [`SwapResult`].
    pub async fn execute_swap(
        &self,
        sell_token: &str,
        buy_token: &str,
        sell_amount: &str,
        slippage_bps: u32,
    ) -> SwapResult {
        match self
            .try_execute_swap(sell_token, buy_token, sell_amount, slippage_bps)
            .await
        {
            Ok((tx_hash, quote)) => SwapResult {
                success: true,
                tx_hash: Some(tx_hash),
                buy_amount: Some(quote.buy_amount),
                sell_amount: Some(quote.sell_amount),
                error: None,
            },
            Err(e) => {
                tracing::warn!(sell_token, buy_token, sell_amount, error = %e, "swap failed");
                SwapResult {
                    success: false,
                    tx_hash: None,
                    buy_amount: None,
                    sell_amount: None,
                    error: Some(e.to_string()),
                }
            }
        }
    }

    async fn try_execute_swap(
        &self,
        sell_token: &str,
        buy_token: &str,
        sell_amount: &str,
        slippage_bps: u32,
    ) -> Result<(String, SwapQuote), ClientError> {
        let quote = self
            .get_swap_quote(sell_token, buy_token, sell_amount, slippage_bps)
            .await?;
        let raw = serialize_from_descriptor(
            BASE_MAINNET.chain_id,
            &quote.transaction.to,
            &quote.transaction.value,
            &quote.transaction.data,
        )?;
        let tx_hash = self.submit_transaction(&raw).await?;
        Ok((tx_hash, quote))
    }

    /// Submit a raw unsigned transaction for remote signing and broadcast.
    async fn submit_transaction(&self, raw_transaction: &str) -> Result<String, ClientError> {
        let path = format!(
            "{API_BASE_PATH}/accounts/{}/send/transaction",
            self.account_address
        );
        let body = json!({
            "transaction": raw_transaction,
            "network": BASE_MAINNET.name,
        });
        let response = self.request("POST", &path, Some(&body)).await?;
        response
            .get("transactionHash")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| {
                ClientError::ResponseShape("missing transactionHash in send response".to_string())
            })
    }

    /// Compose auth headers, issue the call, interpret the status.
    async fn request(
        &self,
        method: &str,
        path_and_query: &str,
        body: Option<&Value>,
    ) -> Result<Value, ClientError> {
        let url = format!("https://{}{}", self.host, path_and_query);
        let path = path_and_query
            .split('?')
            .next()
            .unwrap_or(path_and_query);

        let bearer = build_api_auth_token(&self.api_key, &self.api_key_id, method, &url)?;
        let mut headers = vec![
            ("Authorization".to_string(), format!("Bearer {bearer}")),
            ("Content-Type".to_string(), "application/json".to_string()),
        ];
        if requires_wallet_auth(method, path) {
            let wallet_token = build_wallet_auth_token(&self.wallet_key, method, &url, body)?;
            headers.push(("X-Wallet-Auth".to_string(), wallet_token));
        }

        let body_text = body
            .map(serde_json::to_string)
            .transpose()
            .map_err(|e| ClientError::ResponseShape(format!("serialize body failed: {e}")))?;

        tracing::info!(method, path, "platform API request");

        let response = self
            .transport
            .execute(HttpRequest {
                method: method.to_string(),
                url,
                headers,
                body: body_text,
            })
            .await?;

        if !(200..300).contains(&response.status) {
            return Err(ClientError::Transport(format!(
                "{method} {path} returned {}: {}",
                response.status, response.body
            )));
        }
        if response.body.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&response.body)
            .map_err(|e| ClientError::ResponseShape(format!("{method} {path} invalid JSON: {e}")))
    }
}

fn parse_balance_entry(entry: &Value) -> Option<TokenBalance> {
    Some(TokenBalance {
        symbol: entry.pointer("/token/symbol")?.as_str()?.to_string(),
        amount: entry.pointer("/amount/amount")?.as_str()?.to_string(),
        decimals: entry.pointer("/amount/decimals")?.as_u64()? as u32,
    })
}

fn parse_swap_price(response: &Value) -> Result<SwapPrice, ClientError> {
    let liquidity_available = response
        .get("liquidityAvailable")
        .and_then(Value::as_bool)
        .unwrap_or(false);
    if !liquidity_available {
        return Ok(SwapPrice {
            liquidity_available: false,
            sell_amount: "0".to_string(),
            buy_amount: "0".to_string(),
        });
    }
    Ok(SwapPrice {
        liquidity_available: true,
        sell_amount: require_str(response, "fromAmount")?,
        buy_amount: require_str(response, "toAmount")?,
    })
}

fn parse_swap_quote(response: &Value) -> Result<SwapQuote, ClientError> {
    let liquidity_available = response
        .get("liquidityAvailable")
        .and_then(Value::as_bool)
        .unwrap_or(true);
    if !liquidity_available {
        return Err(ClientError::ResponseShape(
            "no liquidity available for requested swap".to_string(),
        ));
    }
    let transaction = QuoteTransaction {
        to: require_pointer_str(response, "/transaction/to")?,
        value: response
            .pointer("/transaction/value")
            .and_then(Value::as_str)
            .unwrap_or("0")
            .to_string(),
        data: require_pointer_str(response, "/transaction/data")?,
    };
    Ok(SwapQuote {
        sell_amount: require_str(response, "fromAmount")?,
        buy_amount: require_str(response, "toAmount")?,
        transaction,
    })
}

fn require_str(response: &Value, field: &str) -> Result<String, ClientError> {
    response
        .get(field)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| ClientError::ResponseShape(format!("missing {field} in response")))
}

fn require_pointer_str(response: &Value, pointer: &str) -> Result<String, ClientError> {
    response
        .pointer(pointer)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| ClientError::ResponseShape(format!("missing {pointer} in response")))
}
