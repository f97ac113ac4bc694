// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Client for the CDP custodial-wallet platform API.
//!
//! Wraps a platform-held account on Base: stablecoin payouts, balance
//! lookups, account creation and token swaps. Keys never leave the
//! platform; this client authenticates every call with a short-lived
//! bearer JWT and binds state-changing calls to their exact body with a
//! second wallet-auth JWT, then submits unsigned EIP-1559 payloads for
//! remote signing and broadcast.
//!
//! ```no_run
//! use relational_cdp_client::WalletClient;
//!
//! # async fn run() -> Result<(), relational_cdp_client::ClientError> {
//! let client = WalletClient::from_env()?;
//! let result = client
//!     .send_stablecoin("0x1111111111111111111111111111111111111111", 12.50)
//!     .await;
//! if result.success {
//!     println!("sent: {}", result.tx_hash.unwrap_or_default());
//! }
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod blockchain;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod transport;

pub use client::WalletClient;
pub use config::Credentials;
pub use error::ClientError;
pub use models::{SendResult, SwapPrice, SwapQuote, SwapResult, TokenBalance};
